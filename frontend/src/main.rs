use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod config;
mod links;
mod seo;
mod leads {
    pub mod form;
    pub mod model;
    pub mod store;
}
mod content {
    pub mod articles;
    pub mod faq;
    pub mod home;
    pub mod locations;
    pub mod reviews;
    pub mod service_area;
}
mod blog {
    pub mod body;
}
mod components {
    pub mod faq;
    pub mod layout;
    pub mod raw_html;
    pub mod reviews_widget;
    pub mod script;
    pub mod scroll_to_top;
    pub mod sections;
    pub mod service_map;
    pub mod whatsapp_button;
    pub mod youtube;
}
mod pages {
    pub mod blog;
    pub mod home;
    pub mod location;
    pub mod not_found;
    pub mod reviews;
    pub mod testimonials;
}

use analytics::AnalyticsHandle;
use content::locations::{self, LocationConfig};
use leads::store::LeadStore;
use pages::{
    blog::{BlogArticlePage, BlogList},
    home::Home,
    location::LocationPage,
    not_found::NotFound,
    reviews::ReviewsPage,
    testimonials::TestimonialsPage,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/bristol")]
    Bristol,
    #[at("/exeter")]
    Exeter,
    #[at("/taunton")]
    Taunton,
    #[at("/blog")]
    Blog,
    #[at("/blog/:id")]
    Article { id: String },
    #[at("/reviews")]
    Reviews,
    #[at("/testimonials")]
    Testimonials,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn for_location(config: &LocationConfig) -> Route {
        match config.code {
            "bristol" => Route::Bristol,
            "exeter" => Route::Exeter,
            "taunton" => Route::Taunton,
            _ => Route::NotFound,
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Bristol => {
            info!("Rendering Bristol page");
            html! { <LocationPage config={&locations::BRISTOL} /> }
        }
        Route::Exeter => {
            info!("Rendering Exeter page");
            html! { <LocationPage config={&locations::EXETER} /> }
        }
        Route::Taunton => {
            info!("Rendering Taunton page");
            html! { <LocationPage config={&locations::TAUNTON} /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <BlogList /> }
        }
        Route::Article { id } => {
            info!("Rendering Blog article {}", id);
            html! { <BlogArticlePage {id} /> }
        }
        Route::Reviews => {
            info!("Rendering Reviews page");
            html! { <ReviewsPage /> }
        }
        Route::Testimonials => {
            info!("Rendering Testimonials page");
            html! { <TestimonialsPage /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let store = use_memo(|_| LeadStore::default(), ());
    let analytics = use_memo(|_| AnalyticsHandle::default(), ());

    html! {
        <ContextProvider<LeadStore> context={(*store).clone()}>
            <ContextProvider<AnalyticsHandle> context={(*analytics).clone()}>
                <BrowserRouter basename={config::get_base_path()}>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<AnalyticsHandle>>
        </ContextProvider<LeadStore>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    // Only fails if a logger is already installed.
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting {}", config::BUSINESS_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_city_has_a_route() {
        for city in locations::all() {
            let route = Route::for_location(city);
            assert_ne!(route, Route::NotFound);
            assert_eq!(route.to_path(), format!("/{}", city.code));
        }
    }

    #[test]
    fn article_ids_come_from_the_path() {
        assert_eq!(
            Route::recognize("/blog/dpf-signs"),
            Some(Route::Article { id: "dpf-signs".to_string() })
        );
    }
}
