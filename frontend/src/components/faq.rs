use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::raw_html::RawHtml;
use crate::content::faq::{FaqItem, FAQ_ITEMS};
use crate::Route;

/// Where the header's "blog articles" link points. Routed, so it picks up the
/// router's basename.
pub const BLOG_LINK: Route = Route::Blog;

/// At most one expanded question.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    pub expanded: Option<&'static str>,
}

impl AccordionState {
    pub fn is_open(&self, id: &str) -> bool {
        self.expanded == Some(id)
    }
}

pub struct Toggle(pub &'static str);

impl Reducible for AccordionState {
    type Action = Toggle;

    fn reduce(self: Rc<Self>, Toggle(id): Toggle) -> Rc<Self> {
        let expanded = if self.is_open(id) { None } else { Some(id) };
        Rc::new(Self { expanded })
    }
}

#[derive(Properties, PartialEq)]
struct FaqEntryProps {
    item: FaqItem,
    open: bool,
    on_toggle: Callback<&'static str>,
}

#[function_component(FaqEntry)]
fn faq_entry(props: &FaqEntryProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = props.item.id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <span class="question-text">{props.item.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            if props.open {
                <div class="faq-answer">
                    <RawHtml html={props.item.answer} class="faq-answer-text" />
                </div>
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let state = use_reducer(AccordionState::default);
    let on_toggle = {
        let state = state.clone();
        Callback::from(move |id: &'static str| state.dispatch(Toggle(id)))
    };

    html! {
        <section id="faq" class="faq-section">
            <div class="faq-inner">
                <div class="faq-header">
                    <h2>{"Frequently Asked Questions"}</h2>
                    <p>
                        {"Got questions? We've answered the most common ones below. For more detailed information, check out our "}
                        <Link<Route> to={BLOG_LINK} classes="faq-link">{"blog articles"}</Link<Route>>
                        {". Can't find what you're looking for? "}
                        <a href="#contact-form" class="faq-link">{"Get in touch"}</a>
                        {"."}
                    </p>
                </div>
                {
                    FAQ_ITEMS.iter().map(|item| html! {
                        <FaqEntry
                            key={item.id}
                            item={*item}
                            open={state.is_open(item.id)}
                            on_toggle={on_toggle.clone()}
                        />
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .faq-section {
                    padding: 5rem 1rem;
                    background: #ffffff;
                }
                .faq-inner {
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .faq-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .faq-header h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .faq-header p {
                    color: #4b5563;
                    font-size: 1.1rem;
                }
                .faq-link {
                    color: #FF9500;
                    font-weight: 700;
                    text-decoration: none;
                }
                .faq-link:hover {
                    text-decoration: underline;
                }
                .faq-item {
                    border: 1px solid #e5e7eb;
                    border-radius: 8px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }
                .faq-item:hover,
                .faq-item.open {
                    border-color: #FF9500;
                }
                .faq-question {
                    width: 100%;
                    padding: 1rem 1.5rem;
                    background: #f9fafb;
                    border: none;
                    font-size: 1.1rem;
                    font-weight: 700;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }
                .faq-question:hover {
                    background: #f3f4f6;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    color: #FF9500;
                    transition: transform 0.3s ease;
                }
                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }
                .faq-answer {
                    padding: 1rem 1.5rem;
                    border-top: 1px solid #e5e7eb;
                    color: #374151;
                    line-height: 1.6;
                }
                @media (max-width: 768px) {
                    .faq-header h2 {
                        font-size: 2rem;
                    }
                    .faq-question {
                        font-size: 1rem;
                        padding: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use yew_router::Routable;

    use super::*;

    fn toggle(state: Rc<AccordionState>, id: &'static str) -> Rc<AccordionState> {
        state.reduce(Toggle(id))
    }

    #[test]
    fn starts_collapsed() {
        let state = AccordionState::default();
        assert_eq!(state.expanded, None);
        assert!(FAQ_ITEMS.iter().all(|item| !state.is_open(item.id)));
    }

    #[test]
    fn opening_another_item_closes_the_first() {
        let state = toggle(Rc::new(AccordionState::default()), "warranty");
        let state = toggle(state, "payment-methods");
        assert!(state.is_open("payment-methods"));
        assert!(!state.is_open("warranty"));
    }

    #[test]
    fn blog_link_stays_inside_the_router() {
        assert_eq!(BLOG_LINK, Route::Blog);
        assert_eq!(Route::recognize(&BLOG_LINK.to_path()), Some(Route::Blog));
    }

    #[test]
    fn toggling_the_open_item_collapses_it() {
        let state = toggle(Rc::new(AccordionState::default()), "warranty");
        let state = toggle(state, "warranty");
        assert_eq!(*state, AccordionState::default());
    }
}
