use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlScriptElement};

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// A third-party `<script>` appended to `<body>`. Dropping it takes the tag
/// back out of the page.
pub struct ExternalScript {
    element: HtmlScriptElement,
    _onload: Option<Closure<dyn FnMut()>>,
}

impl ExternalScript {
    pub fn load(src: &str, onload: Option<Box<dyn FnMut()>>) -> Result<Self, JsValue> {
        let document = document()?;
        let element: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
        element.set_src(src);
        element.set_async(true);

        let onload = onload.map(Closure::wrap);
        if let Some(callback) = &onload {
            element.set_onload(Some(callback.as_ref().unchecked_ref()));
        }

        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
        body.append_child(&element)?;
        debug!("Injected script {}", src);

        Ok(Self {
            element,
            _onload: onload,
        })
    }

    /// Logs instead of failing; a missing widget should never break the page.
    pub fn load_or_warn(src: &str, onload: Option<Box<dyn FnMut()>>) -> Option<Self> {
        match Self::load(src, onload) {
            Ok(script) => Some(script),
            Err(e) => {
                warn!("Failed to load {}: {:?}", src, e);
                None
            }
        }
    }
}

impl Drop for ExternalScript {
    fn drop(&mut self) {
        self.element.set_onload(None);
        self.element.remove();
    }
}

/// Adds `<link rel="stylesheet">` to `<head>` once; later calls for the same
/// href are no-ops.
pub fn ensure_stylesheet(href: &str) {
    let result = document().and_then(|document| {
        let selector = format!("link[rel=\"stylesheet\"][href=\"{}\"]", href);
        if document.query_selector(&selector)?.is_some() {
            return Ok(());
        }
        let link = document.create_element("link")?;
        link.set_attribute("rel", "stylesheet")?;
        link.set_attribute("href", href)?;
        let head = document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
        head.append_child(&link)?;
        Ok(())
    });
    if let Err(e) = result {
        warn!("Failed to add stylesheet {}: {:?}", href, e);
    }
}
