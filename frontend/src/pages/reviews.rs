use yew::prelude::*;

use crate::components::layout::{Footer, Header};
use crate::components::reviews_widget::ReviewsWidget;
use crate::components::scroll_to_top::{scroll_window_to_top, ScrollToTop};
use crate::components::sections::CallToAction;
use crate::content::reviews::{stars, TRUST_STATS};
use crate::seo::{use_page_meta, PageMeta};

#[function_component(ReviewsPage)]
pub fn reviews_page() -> Html {
    use_page_meta(PageMeta::new(
        "Customer Reviews - Dodgy Garage DPF Cleaning",
        "Read genuine Google reviews from Dodgy Garage customers. 5.0 average rating for mobile DPF cleaning in Somerset.",
    ));

    use_effect_with_deps(
        |_| {
            scroll_window_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="reviews-page">
            <Header section_links={false} />
            <section class="page-hero">
                <h1>{"Customer Reviews"}</h1>
                <div class="page-hero-rating">
                    <span class="page-hero-stars">{stars(5)}</span>
                    <span>{"5.0 Average Rating on Google"}</span>
                </div>
                <p>{"Don't just take our word for it. Here's what drivers across Somerset say about our mobile DPF service."}</p>
            </section>
            <ReviewsWidget />
            <section class="trust-stats">
                { for TRUST_STATS.iter().map(|stat| html! {
                    <div class="trust-stat">
                        <div class="trust-value">{stat.value}</div>
                        <div class="trust-label">{stat.label}</div>
                    </div>
                }) }
            </section>
            <CallToAction heading="Join Our Happy Customers" />
            <Footer />
            <ScrollToTop />
            <style>
                {r#"
                .page-hero {
                    text-align: center;
                    padding: 5rem 1rem 3rem;
                    background: linear-gradient(135deg, #111827, #1f2937);
                    color: #ffffff;
                }
                .page-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .page-hero p {
                    color: #d1d5db;
                    max-width: 42rem;
                    margin: 1rem auto 0;
                }
                .page-hero-rating {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 0.75rem;
                    font-weight: 600;
                }
                .page-hero-stars {
                    color: #FF9500;
                    font-size: 1.5rem;
                }
                .trust-stats {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    text-align: center;
                }
                .trust-value {
                    color: #FF9500;
                    font-size: 2.5rem;
                    font-weight: 800;
                }
                .trust-label {
                    color: #4b5563;
                }
                @media (max-width: 768px) {
                    .trust-stats {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
