use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::analytics::{click_label, use_analytics};
use crate::config;
use crate::content::locations;
use crate::links;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub label_prefix: Option<AttrValue>,
    /// Show the `#services` / `#why-us` jump links.
    #[prop_or(true)]
    pub section_links: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let analytics = use_analytics();
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let prefix = props.label_prefix.as_deref();
    let nav_links = |class: &'static str| {
        html! {
            <>
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Home} classes={classes!(class)}>{"Home"}</Link<Route>>
                </div>
                if props.section_links {
                    <>
                        <a href="#services" class={class} onclick={close_menu.clone()}>{"Services"}</a>
                        <a href="#why-us" class={class} onclick={close_menu.clone()}>{"Why Us"}</a>
                    </>
                }
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Blog} classes={classes!(class)}>{"Blog"}</Link<Route>>
                </div>
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Reviews} classes={classes!(class)}>{"Reviews"}</Link<Route>>
                </div>
            </>
        }
    };

    html! {
        <header class={classes!("site-header", (scroll_y > 10.0).then(|| "scrolled"))}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="header-logo">
                    <img src={config::LOGO_PATH} alt="Dodgy Garage Logo" />
                </Link<Route>>
                <nav class="header-nav">
                    { nav_links("nav-link") }
                    <a
                        href={links::business_tel_uri()}
                        class="header-phone"
                        onclick={analytics.phone_callback(click_label(prefix, "header_phone"))}
                    >
                        {format!("📞 {}", config::PHONE_DISPLAY)}
                    </a>
                </nav>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { nav_links("mobile-link") }
                    <a
                        href={links::business_tel_uri()}
                        class="mobile-call"
                        onclick={analytics.phone_callback(click_label(prefix, "mobile_menu_phone"))}
                    >
                        {"Call Now"}
                    </a>
                </div>
            }
            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: #ffffff;
                    border-bottom: 1px solid #e5e7eb;
                    transition: box-shadow 0.3s ease;
                }
                .site-header.scrolled {
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                }
                .header-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .header-logo img {
                    height: 4rem;
                    width: auto;
                }
                .header-nav {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link,
                .mobile-link {
                    color: #374151;
                    font-size: 0.9rem;
                    font-weight: 500;
                    text-decoration: none;
                }
                .nav-link:hover,
                .mobile-link:hover {
                    color: #FF9500;
                }
                .header-phone,
                .mobile-call {
                    background: #FF9500;
                    color: #ffffff;
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    font-weight: 500;
                    text-decoration: none;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #374151;
                }
                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    padding: 1rem;
                    background: #f9fafb;
                    border-top: 1px solid #e5e7eb;
                }
                .mobile-call {
                    text-align: center;
                }
                @media (max-width: 768px) {
                    .header-nav {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or_default]
    pub label_prefix: Option<AttrValue>,
    /// Area line under the logo; defaults to the Bridgwater base.
    #[prop_or_default]
    pub location: Option<AttrValue>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let analytics = use_analytics();
    let area = props.location.as_deref().unwrap_or("Bridgwater");

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <img src={config::LOGO_PATH} alt="Dodgy Garage Logo" class="footer-logo" />
                    <p>{"Mobile DPF Cleaning Service"}</p>
                    <p>{format!("{} & Surrounding Areas", area)}</p>
                </div>
                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Reviews}>{"Reviews"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Testimonials}>{"Testimonials"}</Link<Route>></li>
                        <li><a href={config::YOUTUBE_URL} target="_blank" rel="noopener noreferrer">{"YouTube"}</a></li>
                    </ul>
                </div>
                <div>
                    <h3>{"Service Areas"}</h3>
                    <ul>
                        { for locations::all().into_iter().map(|city| html! {
                            <li>
                                <Link<Route> to={Route::for_location(city)}>
                                    {format!("DPF Cleaning {}", city.location)}
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Contact"}</h3>
                    <a
                        href={links::business_tel_uri()}
                        onclick={analytics.phone_callback(click_label(props.label_prefix.as_deref(), "footer_phone"))}
                    >
                        {config::PHONE_DISPLAY}
                    </a>
                    <p>{config::OPENING_HOURS}</p>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© 2026 {}. All rights reserved.", config::BUSINESS_NAME)}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #9ca3af;
                    padding: 3rem 1rem;
                }
                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto 2rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    font-size: 0.875rem;
                }
                .footer-logo {
                    height: 5rem;
                    width: auto;
                    margin-bottom: 1rem;
                }
                .site-footer h3 {
                    color: #ffffff;
                    font-size: 1rem;
                    margin-bottom: 1rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .site-footer li {
                    margin-bottom: 0.5rem;
                }
                .site-footer a {
                    color: inherit;
                    text-decoration: none;
                }
                .site-footer a:hover {
                    color: #FF9500;
                }
                .footer-bottom {
                    border-top: 1px solid #1f2937;
                    padding-top: 2rem;
                    text-align: center;
                    font-size: 0.875rem;
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
