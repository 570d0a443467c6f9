use log::warn;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RawHtmlProps {
    pub html: AttrValue,
    #[prop_or_default]
    pub class: AttrValue,
}

/// Renders trusted markup as-is. Only ever pass strings authored in this
/// crate; user input here would be an injection hole.
#[function_component(RawHtml)]
pub fn raw_html(props: &RawHtmlProps) -> Html {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return html! {};
    };
    match document.create_element("div") {
        Ok(container) => {
            container.set_class_name(&props.class);
            container.set_inner_html(&props.html);
            Html::VRef(container.into())
        }
        Err(e) => {
            warn!("Could not render markup: {:?}", e);
            html! {}
        }
    }
}
