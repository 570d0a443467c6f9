use yew::prelude::*;

use crate::components::script::ExternalScript;
use crate::config;
use crate::content::reviews::{stars, GOOGLE_REVIEWS};

const TRUSTINDEX_LOADER: &str = "https://cdn.trustindex.io/loader.js";

/// Live TrustIndex carousel with static Google review cards underneath, so
/// something is always shown when the loader is blocked.
#[function_component(ReviewsWidget)]
pub fn reviews_widget() -> Html {
    use_effect_with_deps(
        |_| {
            let script = ExternalScript::load_or_warn(TRUSTINDEX_LOADER, None);
            move || drop(script)
        },
        (),
    );

    html! {
        <section id="google-reviews" class="reviews-section">
            <div class="reviews-inner">
                <div class="reviews-header">
                    <h2>{"Trusted by Customers Across the UK"}</h2>
                    <p>{"See what our satisfied customers say about our DPF cleaning service. Real reviews from real customers."}</p>
                </div>
                <div
                    class="trustindex-widget"
                    data-businesstype="Local Business"
                    data-review-template="carousel"
                    data-min-review-filter="5"
                    data-review-language="en"
                    data-sort="newest"
                    data-theme="light"
                    data-stars="5"
                    data-schema-type="LocalBusiness"
                    data-no-review-text="No reviews yet"
                    data-disable-mobile-widget="false"
                >
                    <a href={config::GOOGLE_PROFILE_URL} target="_blank" rel="noopener noreferrer" class="reviews-all-link">
                        {"View all reviews on Google ↗"}
                    </a>
                </div>
                <div class="review-cards">
                    { for GOOGLE_REVIEWS.iter().map(|review| html! {
                        <div class="review-card">
                            <div class="review-card-top">
                                <span class="review-stars">{stars(5)}</span>
                                <span class="review-date">{review.date}</span>
                            </div>
                            <p class="review-text">{format!("\"{}\"", review.text)}</p>
                            <p class="review-author">{review.author}</p>
                            <p class="review-source">{"Google Review"}</p>
                        </div>
                    }) }
                </div>
                <div class="reviews-cta">
                    <p>{"Want to leave a review? We'd love to hear about your experience!"}</p>
                    <a href={config::GOOGLE_REVIEW_URL} target="_blank" rel="noopener noreferrer" class="reviews-cta-button">
                        {"Leave a Review on Google"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .reviews-section {
                    padding: 5rem 1rem;
                    background: linear-gradient(135deg, #f9fafb, #ffffff);
                }
                .reviews-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .reviews-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .reviews-header h2 {
                    font-size: 2.5rem;
                }
                .reviews-header p {
                    color: #4b5563;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .reviews-all-link {
                    color: #FF9500;
                    font-weight: 700;
                    text-decoration: none;
                }
                .review-cards {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 3rem;
                }
                .review-card {
                    background: #ffffff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
                }
                .review-card-top {
                    display: flex;
                    justify-content: space-between;
                    margin-bottom: 0.75rem;
                }
                .review-stars {
                    color: #FF9500;
                }
                .review-date,
                .review-source {
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                .review-text {
                    color: #374151;
                }
                .review-author {
                    font-weight: 700;
                    margin-bottom: 0;
                }
                .reviews-cta {
                    text-align: center;
                    margin-top: 3rem;
                    color: #4b5563;
                }
                .reviews-cta-button {
                    display: inline-block;
                    background: #FF9500;
                    color: #ffffff;
                    font-weight: 700;
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    text-decoration: none;
                }
                @media (max-width: 1024px) {
                    .review-cards {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .review-cards {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
