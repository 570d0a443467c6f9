use yew::prelude::*;
use yew_router::components::Link;

use crate::analytics::use_analytics;
use crate::components::layout::{Footer, Header};
use crate::config;
use crate::links;
use crate::seo::{use_page_meta, PageMeta};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let analytics = use_analytics();
    use_page_meta(PageMeta::new(
        "Page Not Found | Dodgy Garage",
        "The page you're looking for doesn't exist.",
    ));

    html! {
        <div class="not-found-page">
            <Header section_links={false} />
            <section class="not-found">
                <h1>{"404"}</h1>
                <h2>{"Page Not Found"}</h2>
                <p>{"The page you're looking for doesn't exist or has moved. Your DPF, on the other hand, we can still sort."}</p>
                <div class="not-found-actions">
                    <Link<Route> to={Route::Home} classes="not-found-home">{"Go Home"}</Link<Route>>
                    <a
                        href={links::business_tel_uri()}
                        class="not-found-call"
                        onclick={analytics.phone_callback("not_found_phone".to_string())}
                    >
                        {format!("📞 {}", config::PHONE_DISPLAY)}
                    </a>
                </div>
            </section>
            <Footer />
            <style>
                {r#"
                .not-found {
                    min-height: 60vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 4rem 1rem;
                }
                .not-found h1 {
                    font-size: 6rem;
                    color: #FF9500;
                    margin: 0;
                }
                .not-found p {
                    color: #4b5563;
                    max-width: 32rem;
                }
                .not-found-actions {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .not-found-home,
                .not-found-call {
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    font-weight: 700;
                    text-decoration: none;
                }
                .not-found-home {
                    background: #111827;
                    color: #ffffff;
                }
                .not-found-call {
                    background: #FF9500;
                    color: #ffffff;
                }
                "#}
            </style>
        </div>
    }
}
