use yew::prelude::*;

use crate::components::layout::{Footer, Header};
use crate::components::scroll_to_top::{scroll_window_to_top, ScrollToTop};
use crate::components::sections::CallToAction;
use crate::content::reviews::{stars, Testimonial, TESTIMONIALS};
use crate::seo::{use_page_meta, PageMeta};

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: &'static Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = props.testimonial;
    html! {
        <div class="testimonial-card">
            <div class="testimonial-top">
                <span class="testimonial-emoji">{t.emoji}</span>
                <div>
                    <div class="testimonial-name">{t.name}</div>
                    <div class="testimonial-vehicle">{t.vehicle}</div>
                </div>
            </div>
            <div class="testimonial-stars">{stars(t.rating)}</div>
            <p class="testimonial-text">{format!("\"{}\"", t.review)}</p>
            <div class="testimonial-footer">
                <span class="testimonial-service">{t.service}</span>
                <span class="testimonial-date">{t.date}</span>
            </div>
        </div>
    }
}

#[function_component(TestimonialsPage)]
pub fn testimonials_page() -> Html {
    use_page_meta(PageMeta::new(
        "Customer Testimonials - Dodgy Garage",
        "Hear from drivers who saved thousands with Dodgy Garage's mobile DPF cleaning, AdBlue and EGR repairs.",
    ));

    use_effect_with_deps(
        |_| {
            scroll_window_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="testimonials-page">
            <Header section_links={false} />
            <section class="testimonials-hero">
                <h1>{"What Our Customers Say"}</h1>
                <p>{"Real stories from drivers who got their diesel sorted without the garage bill."}</p>
                <div class="testimonials-summary">
                    <div><strong>{"4.9/5"}</strong><span>{"Average Rating"}</span></div>
                    <div><strong>{"500+"}</strong><span>{"Happy Customers"}</span></div>
                    <div><strong>{"£50K+"}</strong><span>{"Saved vs Replacement"}</span></div>
                </div>
            </section>
            <section class="testimonials-grid">
                { for TESTIMONIALS.iter().map(|testimonial| html! {
                    <TestimonialCard key={testimonial.id} {testimonial} />
                }) }
            </section>
            <CallToAction heading="Ready to Be Our Next Success Story?" />
            <Footer />
            <ScrollToTop />
            <style>
                {r#"
                .testimonials-hero {
                    text-align: center;
                    padding: 5rem 1rem 3rem;
                    background: linear-gradient(135deg, #111827, #1f2937);
                    color: #ffffff;
                }
                .testimonials-hero h1 {
                    font-size: 3rem;
                }
                .testimonials-hero p {
                    color: #d1d5db;
                }
                .testimonials-summary {
                    display: flex;
                    justify-content: center;
                    gap: 3rem;
                    margin-top: 2rem;
                }
                .testimonials-summary div {
                    display: flex;
                    flex-direction: column;
                }
                .testimonials-summary strong {
                    color: #FF9500;
                    font-size: 2rem;
                }
                .testimonials-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }
                .testimonial-card {
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 2rem;
                    background: #ffffff;
                }
                .testimonial-top {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                }
                .testimonial-emoji {
                    font-size: 2.5rem;
                }
                .testimonial-name {
                    font-weight: 700;
                }
                .testimonial-vehicle,
                .testimonial-date {
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                .testimonial-stars {
                    color: #FF9500;
                    margin: 1rem 0 0.5rem;
                }
                .testimonial-text {
                    color: #374151;
                    line-height: 1.7;
                }
                .testimonial-footer {
                    display: flex;
                    justify-content: space-between;
                }
                .testimonial-service {
                    background: #fff7ed;
                    color: #FF9500;
                    border-radius: 9999px;
                    padding: 0.2rem 0.75rem;
                    font-size: 0.8rem;
                    font-weight: 600;
                }
                @media (max-width: 768px) {
                    .testimonials-grid {
                        grid-template-columns: 1fr;
                    }
                    .testimonials-summary {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
