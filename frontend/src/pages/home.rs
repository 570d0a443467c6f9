use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq::FaqSection;
use crate::components::layout::{Footer, Header};
use crate::components::reviews_widget::ReviewsWidget;
use crate::components::scroll_to_top::{scroll_window_to_top, ScrollToTop};
use crate::components::sections::{BenefitsGrid, CallToAction, Hero, ServicesGrid, StatsBar};
use crate::components::service_map::ServiceAreaMap;
use crate::components::whatsapp_button::WhatsAppButton;
use crate::components::youtube::YouTubeShowcase;
use crate::content::articles::{BlogArticle, ARTICLES};
use crate::content::home;
use crate::leads::form::ContactForm;
use crate::seo::{home_schema, use_page_meta, PageMeta};
use crate::Route;

#[derive(Properties, PartialEq)]
struct ArticleTeaserProps {
    article: &'static BlogArticle,
}

#[function_component(ArticleTeaser)]
fn article_teaser(props: &ArticleTeaserProps) -> Html {
    let article = props.article;
    html! {
        <Link<Route> to={Route::Article { id: article.id.to_string() }} classes="teaser-card">
            <div class="teaser-emoji">{article.emoji}</div>
            <div class="teaser-body">
                <span class="teaser-category">{article.category}</span>
                <h3>{article.title}</h3>
                <p>{article.excerpt}</p>
                <span class="teaser-meta">{format!("{} • {}", article.date, article.read_time)}</span>
            </div>
        </Link<Route>>
    }
}

#[function_component(BlogTeaser)]
fn blog_teaser() -> Html {
    html! {
        <section class="blog-teaser">
            <div class="teaser-inner">
                <h2>{"Latest from Our Blog"}</h2>
                <p class="teaser-intro">{"Practical advice on DPF, AdBlue and EGR problems from the people who fix them every day."}</p>
                <div class="teaser-grid">
                    { for ARTICLES.iter().map(|article| html! { <ArticleTeaser {article} /> }) }
                </div>
                <div class="teaser-all">
                    <Link<Route> to={Route::Blog} classes="teaser-all-link">{"View All Articles →"}</Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .blog-teaser {
                    padding: 5rem 1rem;
                    background: #f9fafb;
                }
                .teaser-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .blog-teaser h2 {
                    text-align: center;
                    font-size: 2.5rem;
                }
                .teaser-intro {
                    text-align: center;
                    color: #4b5563;
                    margin-bottom: 3rem;
                }
                .teaser-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .teaser-card {
                    display: block;
                    background: #ffffff;
                    border-radius: 12px;
                    overflow: hidden;
                    border: 1px solid #e5e7eb;
                    color: inherit;
                    text-decoration: none;
                    transition: transform 0.3s ease;
                }
                .teaser-card:hover {
                    transform: translateY(-4px);
                }
                .teaser-emoji {
                    font-size: 3rem;
                    text-align: center;
                    padding: 2rem 0;
                    background: linear-gradient(135deg, #FF9500, #ffb347);
                }
                .teaser-body {
                    padding: 1.5rem;
                }
                .teaser-category {
                    color: #FF9500;
                    font-size: 0.8rem;
                    font-weight: 700;
                    text-transform: uppercase;
                }
                .teaser-body p {
                    color: #4b5563;
                }
                .teaser-meta {
                    color: #6b7280;
                    font-size: 0.8rem;
                }
                .teaser-all {
                    text-align: center;
                    margin-top: 2rem;
                }
                .teaser-all-link {
                    color: #FF9500;
                    font-weight: 700;
                    text-decoration: none;
                }
                @media (max-width: 1024px) {
                    .teaser-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_page_meta(
        PageMeta::new(home::TITLE, home::META_DESCRIPTION)
            .keywords(home::KEYWORDS)
            .structured_data(home_schema()),
    );

    use_effect_with_deps(
        |_| {
            scroll_window_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="home-page">
            <Header />
            <Hero
                badge="Mobile Service • No Garage Needed"
                headline="Your DPF Sorted in an Hour"
                subheading="Mobile DPF cleaning across Somerset. We diagnose, clean and regenerate your diesel particulate filter on your driveway, for a fraction of the cost of a replacement."
                footnote="Serving Bridgwater and surrounding areas within 15-25 miles"
            />
            <StatsBar stats={home::STATS} />
            <BenefitsGrid
                heading="Why Choose Dodgy Garage?"
                intro="Fast, affordable and convenient. We bring the workshop to you."
                benefits={home::FEATURES}
            />
            <ServicesGrid heading="Our Services" />
            <ReviewsWidget />
            <ServiceAreaMap />
            <YouTubeShowcase />
            <FaqSection />
            <BlogTeaser />
            <ContactForm
                form_id="contact_form"
                heading="Tell Us About Your Car Issues"
                intro="Describe the problem and we'll get back to you within 2 hours with advice and a quote."
                footnote="We'll get back to you within 2 hours during business hours (Mon-Fri, 8am-6pm)"
            />
            <CallToAction />
            <Footer />
            <WhatsAppButton />
            <ScrollToTop />
        </div>
    }
}
