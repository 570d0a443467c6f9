//! Conversion tracking. Events are forwarded to `window.gtag` when the Google
//! tag is present on the page and dropped otherwise.

use std::rc::Rc;

use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversionEvent {
    PhoneClick { label: String },
    WhatsAppClick { label: String },
    FormSubmission { form: String },
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct EventParams {
    pub event_category: &'static str,
    pub event_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_id: Option<String>,
}

impl ConversionEvent {
    pub fn phone(label: impl Into<String>) -> Self {
        Self::PhoneClick { label: label.into() }
    }

    pub fn whatsapp(label: impl Into<String>) -> Self {
        Self::WhatsAppClick { label: label.into() }
    }

    pub fn form(form: impl Into<String>) -> Self {
        Self::FormSubmission { form: form.into() }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PhoneClick { .. } => "phone_click",
            Self::WhatsAppClick { .. } => "whatsapp_click",
            Self::FormSubmission { .. } => "form_submission",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::PhoneClick { label } | Self::WhatsAppClick { label } => label,
            Self::FormSubmission { form } => form,
        }
    }

    /// Window global the site's index.html sets with the Ads conversion id.
    fn conversion_global(&self) -> &'static str {
        match self {
            Self::PhoneClick { .. } => "PHONE_CONVERSION_ID",
            Self::WhatsAppClick { .. } => "WHATSAPP_CONVERSION_ID",
            Self::FormSubmission { .. } => "FORM_CONVERSION_ID",
        }
    }

    pub fn params(&self, raw_conversion_id: Option<String>) -> EventParams {
        EventParams {
            event_category: "conversion",
            event_label: self.label().to_string(),
            conversion_id: raw_conversion_id.map(|id| format!("AW-{}", id)),
        }
    }
}

/// Label for a click slot. City pages prefix their code so conversions can be
/// attributed per page; the home page uses the bare slot name.
pub fn click_label(prefix: Option<&str>, slot: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}_{}", prefix, slot),
        None => slot.to_string(),
    }
}

pub trait Analytics {
    fn track(&self, event: &ConversionEvent);
}

pub struct Gtag;

impl Gtag {
    fn conversion_id(window: &web_sys::Window, global: &str) -> Option<String> {
        let value = Reflect::get(window, &JsValue::from_str(global)).ok()?;
        if let Some(id) = value.as_string() {
            Some(id)
        } else {
            value.as_f64().map(|id| format!("{}", id))
        }
    }
}

impl Analytics for Gtag {
    fn track(&self, event: &ConversionEvent) {
        debug!("Tracking {} ({})", event.name(), event.label());
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(gtag) = Reflect::get(&window, &JsValue::from_str("gtag")) else {
            return;
        };
        let Some(gtag) = gtag.dyn_ref::<Function>() else {
            debug!("gtag not loaded, dropping {}", event.name());
            return;
        };

        let params = event.params(Self::conversion_id(&window, event.conversion_global()));
        let params = match serde_wasm_bindgen::to_value(&params) {
            Ok(params) => params,
            Err(e) => {
                warn!("Could not encode gtag params: {}", e);
                return;
            }
        };
        if let Err(e) = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(event.name()),
            &params,
        ) {
            warn!("gtag call failed: {:?}", e);
        }
    }
}

/// Context value handing the analytics sink to components.
#[derive(Clone)]
pub struct AnalyticsHandle(Rc<dyn Analytics>);

impl AnalyticsHandle {
    #[cfg(test)]
    pub fn new(inner: Rc<dyn Analytics>) -> Self {
        Self(inner)
    }

    pub fn sink(&self) -> &dyn Analytics {
        self.0.as_ref()
    }

    pub fn track(&self, event: ConversionEvent) {
        self.0.track(&event);
    }

    pub fn phone_callback(&self, label: String) -> Callback<MouseEvent> {
        let handle = self.clone();
        Callback::from(move |_: MouseEvent| handle.track(ConversionEvent::phone(label.clone())))
    }

    pub fn whatsapp_callback(&self, label: String) -> Callback<MouseEvent> {
        let handle = self.clone();
        Callback::from(move |_: MouseEvent| handle.track(ConversionEvent::whatsapp(label.clone())))
    }
}

impl Default for AnalyticsHandle {
    fn default() -> Self {
        Self(Rc::new(Gtag))
    }
}

impl PartialEq for AnalyticsHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.0) as *const (),
            Rc::as_ptr(&other.0) as *const (),
        )
    }
}

#[hook]
pub fn use_analytics() -> AnalyticsHandle {
    use_context::<AnalyticsHandle>().unwrap_or_default()
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::{Analytics, ConversionEvent};

    #[derive(Default)]
    pub struct RecordingAnalytics {
        pub events: RefCell<Vec<ConversionEvent>>,
    }

    impl Analytics for RecordingAnalytics {
        fn track(&self, event: &ConversionEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_match_gtag_conventions() {
        assert_eq!(ConversionEvent::phone("hero_phone").name(), "phone_click");
        assert_eq!(ConversionEvent::whatsapp("x").name(), "whatsapp_click");
        assert_eq!(ConversionEvent::form("contact_form").name(), "form_submission");
    }

    #[test]
    fn params_prefix_conversion_id() {
        let params = ConversionEvent::form("contact_form_bristol").params(Some("123".into()));
        assert_eq!(params.event_category, "conversion");
        assert_eq!(params.event_label, "contact_form_bristol");
        assert_eq!(params.conversion_id.as_deref(), Some("AW-123"));

        let json = serde_json::to_value(ConversionEvent::phone("footer_phone").params(None)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "event_category": "conversion", "event_label": "footer_phone" })
        );
    }

    #[test]
    fn click_labels_carry_location_prefix() {
        assert_eq!(click_label(None, "hero_phone"), "hero_phone");
        assert_eq!(click_label(Some("taunton"), "hero_phone"), "taunton_hero_phone");
    }

    #[test]
    fn handles_compare_by_identity() {
        let shared: Rc<dyn Analytics> = Rc::new(testing::RecordingAnalytics::default());
        let a = AnalyticsHandle::new(shared.clone());
        let b = AnalyticsHandle::new(shared);
        let c = AnalyticsHandle::new(Rc::new(testing::RecordingAnalytics::default()));
        assert!(a == b);
        assert!(a != c);
    }
}
