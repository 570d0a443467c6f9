use yew::prelude::*;
use yew_hooks::prelude::*;

const SHOW_AFTER_PX: f64 = 300.0;

pub fn should_show(scroll_y: f64) -> bool {
    scroll_y > SHOW_AFTER_PX
}

pub fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();

    if !should_show(scroll_y) {
        return html! {};
    }

    let onclick = Callback::from(|_: MouseEvent| scroll_window_to_top());

    html! {
        <>
            <button class="scroll-top" onclick={onclick} aria-label="Scroll to top" title="Back to top">
                {"▲"}
            </button>
            <style>
                {r#"
                .scroll-top {
                    position: fixed;
                    left: 1.5rem;
                    bottom: 6rem;
                    z-index: 40;
                    background: #FF9500;
                    color: #ffffff;
                    border: none;
                    border-radius: 50%;
                    width: 3rem;
                    height: 3rem;
                    font-size: 1.1rem;
                    cursor: pointer;
                    box-shadow: 0 6px 18px rgba(0, 0, 0, 0.25);
                }
                .scroll-top:hover {
                    background: #e68600;
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appears_only_past_threshold() {
        assert!(!should_show(0.0));
        assert!(!should_show(300.0));
        assert!(should_show(300.5));
        assert!(should_show(2_000.0));
    }
}
