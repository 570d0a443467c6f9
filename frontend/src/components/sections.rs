//! Page sections shared by the home page and the city landing pages.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics::{click_label, use_analytics};
use crate::config;
use crate::content::home::service_cards;
use crate::content::locations::{Benefit, Stat};
use crate::links;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub headline: AttrValue,
    pub subheading: AttrValue,
    pub badge: AttrValue,
    #[prop_or_default]
    pub footnote: Option<AttrValue>,
    #[prop_or_default]
    pub label_prefix: Option<AttrValue>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let analytics = use_analytics();

    html! {
        <section class="hero">
            <div class="hero-inner">
                <span class="hero-badge">{&props.badge}</span>
                <h1>{&props.headline}</h1>
                <p class="hero-subheading">{&props.subheading}</p>
                <div class="hero-price">
                    <span class="hero-price-label">{"Complete DPF Clean"}</span>
                    <span class="hero-price-value">{"£245.00"}</span>
                    <span class="hero-price-note">{"Diagnostics included. No hidden fees."}</span>
                </div>
                <div class="hero-actions">
                    <a
                        href={links::business_tel_uri()}
                        class="hero-call"
                        onclick={analytics.phone_callback(click_label(props.label_prefix.as_deref(), "hero_phone"))}
                    >
                        {format!("📞 Call {}", config::PHONE_DISPLAY)}
                    </a>
                    <a href="#contact-form" class="hero-message">{"Send Message"}</a>
                </div>
                if let Some(footnote) = &props.footnote {
                    <p class="hero-footnote">{footnote}</p>
                }
            </div>
            <style>
                {r#"
                .hero {
                    background: linear-gradient(135deg, #111827 0%, #1f2937 100%);
                    color: #ffffff;
                    padding: 6rem 1rem 5rem;
                }
                .hero-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .hero-badge {
                    display: inline-block;
                    background: rgba(255, 149, 0, 0.15);
                    color: #FF9500;
                    border: 1px solid rgba(255, 149, 0, 0.4);
                    border-radius: 9999px;
                    padding: 0.35rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }
                .hero h1 {
                    font-size: 3.25rem;
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                }
                .hero-subheading {
                    color: #d1d5db;
                    font-size: 1.2rem;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }
                .hero-price {
                    display: inline-flex;
                    flex-direction: column;
                    gap: 0.25rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 2px solid #FF9500;
                    border-radius: 12px;
                    padding: 1.25rem 2.5rem;
                    margin-bottom: 2rem;
                }
                .hero-price-label,
                .hero-price-note {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                .hero-price-value {
                    color: #FF9500;
                    font-size: 2.75rem;
                    font-weight: 800;
                }
                .hero-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .hero-call,
                .hero-message {
                    padding: 1rem 2rem;
                    border-radius: 8px;
                    font-weight: 700;
                    text-decoration: none;
                }
                .hero-call {
                    background: #FF9500;
                    color: #ffffff;
                }
                .hero-message {
                    border: 2px solid #ffffff;
                    color: #ffffff;
                }
                .hero-footnote {
                    margin-top: 1.5rem;
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsBarProps {
    pub stats: &'static [Stat],
}

#[function_component(StatsBar)]
pub fn stats_bar(props: &StatsBarProps) -> Html {
    html! {
        <section class="stats-bar">
            <div class="stats-grid">
                { for props.stats.iter().map(|stat| html! {
                    <div class="stat">
                        <div class="stat-value">{stat.value}</div>
                        <div class="stat-label">{stat.label}</div>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .stats-bar {
                    background: #FF9500;
                    color: #ffffff;
                    padding: 2.5rem 1rem;
                }
                .stats-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    text-align: center;
                }
                .stat-value {
                    font-size: 2.25rem;
                    font-weight: 800;
                }
                .stat-label {
                    font-size: 0.9rem;
                    opacity: 0.9;
                }
                @media (max-width: 768px) {
                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct BenefitsGridProps {
    pub heading: AttrValue,
    #[prop_or_default]
    pub intro: Option<AttrValue>,
    pub benefits: &'static [Benefit],
}

#[function_component(BenefitsGrid)]
pub fn benefits_grid(props: &BenefitsGridProps) -> Html {
    html! {
        <section id="why-us" class="benefits">
            <div class="benefits-inner">
                <h2>{&props.heading}</h2>
                if let Some(intro) = &props.intro {
                    <p class="benefits-intro">{intro}</p>
                }
                <div class="benefits-grid">
                    { for props.benefits.iter().map(|benefit| html! {
                        <div class="benefit-card">
                            <div class="benefit-icon">{benefit.icon.glyph()}</div>
                            <h3>{benefit.title}</h3>
                            <p>{benefit.description}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .benefits {
                    padding: 5rem 1rem;
                    background: #f9fafb;
                }
                .benefits-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .benefits h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .benefits-intro {
                    color: #4b5563;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                }
                .benefits-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    text-align: left;
                }
                .benefit-card {
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 2rem;
                    border: 1px solid #e5e7eb;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .benefit-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
                }
                .benefit-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                .benefit-card p {
                    color: #4b5563;
                    line-height: 1.6;
                }
                @media (max-width: 1024px) {
                    .benefits-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .benefits-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesGridProps {
    pub heading: AttrValue,
    #[prop_or_default]
    pub location: Option<AttrValue>,
    #[prop_or_default]
    pub label_prefix: Option<AttrValue>,
}

#[function_component(ServicesGrid)]
pub fn services_grid(props: &ServicesGridProps) -> Html {
    let analytics = use_analytics();
    let cards = service_cards(props.location.as_deref());

    html! {
        <section id="services" class="services">
            <div class="services-inner">
                <h2>{&props.heading}</h2>
                <div class="services-grid">
                    { for cards.into_iter().map(|card| html! {
                        <div class="service-card">
                            <div class="service-emoji">{card.emoji}</div>
                            <h3>{card.title}</h3>
                            <p>{card.description}</p>
                            if let Some(price) = card.price {
                                <div class="service-price">{price}</div>
                            }
                            <div class="service-actions">
                                <a
                                    href={links::business_tel_uri()}
                                    class="service-book"
                                    onclick={analytics.phone_callback(click_label(props.label_prefix.as_deref(), card.slot))}
                                >
                                    {"Book Now"}
                                </a>
                                <Link<Route> to={Route::Article { id: card.article_id.to_string() }} classes="service-more">
                                    {"Learn More →"}
                                </Link<Route>>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .services {
                    padding: 5rem 1rem;
                    background: #ffffff;
                }
                .services-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .services h2 {
                    text-align: center;
                    font-size: 2.5rem;
                    margin-bottom: 3rem;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .service-card {
                    display: flex;
                    flex-direction: column;
                    border: 2px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 2rem;
                }
                .service-card:hover {
                    border-color: #FF9500;
                }
                .service-emoji {
                    font-size: 2.5rem;
                }
                .service-card p {
                    color: #4b5563;
                    flex-grow: 1;
                }
                .service-price {
                    color: #FF9500;
                    font-size: 1.75rem;
                    font-weight: 800;
                    margin-bottom: 1rem;
                }
                .service-actions {
                    display: flex;
                    gap: 0.75rem;
                }
                .service-book,
                .service-more {
                    flex: 1;
                    text-align: center;
                    padding: 0.75rem;
                    border-radius: 8px;
                    font-weight: 600;
                    text-decoration: none;
                }
                .service-book {
                    background: #FF9500;
                    color: #ffffff;
                }
                .service-more {
                    border: 2px solid #FF9500;
                    color: #FF9500;
                }
                @media (max-width: 1024px) {
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CallToActionProps {
    #[prop_or(AttrValue::Static("Ready to Get Your DPF Sorted?"))]
    pub heading: AttrValue,
    #[prop_or_default]
    pub location: Option<AttrValue>,
    #[prop_or_default]
    pub label_prefix: Option<AttrValue>,
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &CallToActionProps) -> Html {
    let analytics = use_analytics();
    let prefix = props.label_prefix.as_deref();
    let area = props.location.as_deref().unwrap_or("Bridgwater");

    html! {
        <section class="cta-section">
            <div class="cta-inner">
                <h2>{&props.heading}</h2>
                <p>{"Call now for same-day service or send us a WhatsApp message. Most jobs done in about an hour."}</p>
                <div class="cta-buttons">
                    <a
                        href={links::business_tel_uri()}
                        class="cta-call"
                        onclick={analytics.phone_callback(click_label(prefix, "cta_section_phone"))}
                    >
                        {format!("📞 {}", config::PHONE_DISPLAY)}
                    </a>
                    <a
                        href={links::business_whatsapp_link(props.location.as_deref())}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="cta-whatsapp"
                        onclick={analytics.whatsapp_callback(click_label(prefix, "cta_section_whatsapp"))}
                    >
                        {"💬 WhatsApp Us"}
                    </a>
                </div>
                <p class="cta-hours">
                    {format!("Available {} • Serving {} & Surrounding Areas", config::OPENING_HOURS, area)}
                </p>
            </div>
            <style>
                {r#"
                .cta-section {
                    background: #FF9500;
                    color: #ffffff;
                    padding: 5rem 1rem;
                    text-align: center;
                }
                .cta-inner {
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .cta-section h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .cta-buttons {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                    margin: 2rem 0;
                }
                .cta-call,
                .cta-whatsapp {
                    padding: 1rem 2rem;
                    border-radius: 8px;
                    font-weight: 700;
                    text-decoration: none;
                }
                .cta-call {
                    background: #ffffff;
                    color: #FF9500;
                }
                .cta-whatsapp {
                    background: #25D366;
                    color: #ffffff;
                }
                .cta-hours {
                    font-size: 0.875rem;
                    opacity: 0.9;
                }
                "#}
            </style>
        </section>
    }
}
