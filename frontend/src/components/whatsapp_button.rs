use yew::prelude::*;

use crate::analytics::use_analytics;
use crate::links;

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    let analytics = use_analytics();
    let hovered = use_state(|| false);

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <>
            <a
                href={links::business_whatsapp_link(None)}
                target="_blank"
                rel="noopener noreferrer"
                class="whatsapp-float"
                aria-label="Chat with us on WhatsApp"
                onclick={analytics.whatsapp_callback("floating_button".to_string())}
                onmouseenter={on_enter}
                onmouseleave={on_leave}
            >
                <span class="whatsapp-float-icon">{"💬"}</span>
                <span class={classes!("whatsapp-tooltip", (*hovered).then(|| "visible"))}>
                    {"Chat with us"}
                </span>
            </a>
            <style>
                {r#"
                .whatsapp-float {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 40;
                    text-decoration: none;
                }
                .whatsapp-float-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    background: #22c55e;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.6rem;
                    box-shadow: 0 6px 18px rgba(0, 0, 0, 0.25);
                    transition: transform 0.3s ease;
                }
                .whatsapp-float:hover .whatsapp-float-icon {
                    transform: scale(1.1);
                }
                .whatsapp-tooltip {
                    position: absolute;
                    right: 4rem;
                    bottom: 1rem;
                    background: #111827;
                    color: #ffffff;
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    white-space: nowrap;
                    font-size: 0.875rem;
                    opacity: 0;
                    transform: translateX(0.5rem);
                    transition: all 0.3s ease;
                    pointer-events: none;
                }
                .whatsapp-tooltip.visible {
                    opacity: 1;
                    transform: translateX(0);
                }
                "#}
            </style>
        </>
    }
}
