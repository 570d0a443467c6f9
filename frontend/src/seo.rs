//! Page metadata and JSON-LD. Every page calls [`use_page_meta`] on mount;
//! applying metadata replaces the previous page's tags instead of adding to
//! them, so client-side navigation never piles up duplicates.

use log::warn;
use serde_json::{json, Value};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};
use yew::prelude::*;

use crate::config;

pub const STRUCTURED_DATA_ID: &str = "page-structured-data";

#[derive(Clone, Debug, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    pub structured_data: Option<Value>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            keywords: None,
            structured_data: None,
        }
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn structured_data(mut self, data: Value) -> Self {
        self.structured_data = Some(data);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

impl MetaKey {
    pub fn attribute(&self) -> &'static str {
        match self {
            MetaKey::Name(_) => "name",
            MetaKey::Property(_) => "property",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            MetaKey::Name(v) | MetaKey::Property(v) => v,
        }
    }

    fn selector(&self) -> String {
        format!("meta[{}=\"{}\"]", self.attribute(), self.value())
    }
}

const DESCRIPTION: MetaKey = MetaKey::Name("description");
const KEYWORDS: MetaKey = MetaKey::Name("keywords");
const OG_TITLE: MetaKey = MetaKey::Property("og:title");
const OG_DESCRIPTION: MetaKey = MetaKey::Property("og:description");

/// The bits of `<head>` pages are allowed to touch. Each `upsert_*` must
/// leave exactly one matching element behind.
pub trait DocumentHead {
    fn set_title(&mut self, title: &str);
    fn upsert_meta(&mut self, key: MetaKey, content: &str);
    fn remove_meta(&mut self, key: MetaKey);
    fn upsert_json_ld(&mut self, id: &str, body: &str);
    fn remove_json_ld(&mut self, id: &str);
}

pub fn apply_page_meta(head: &mut impl DocumentHead, meta: &PageMeta) {
    head.set_title(&meta.title);
    head.upsert_meta(DESCRIPTION, &meta.description);
    match &meta.keywords {
        Some(keywords) => head.upsert_meta(KEYWORDS, keywords),
        None => head.remove_meta(KEYWORDS),
    }
    head.upsert_meta(OG_TITLE, &meta.title);
    head.upsert_meta(OG_DESCRIPTION, &meta.description);
    match &meta.structured_data {
        Some(data) => head.upsert_json_ld(STRUCTURED_DATA_ID, &data.to_string()),
        None => head.remove_json_ld(STRUCTURED_DATA_ID),
    }
}

/// The live document. DOM failures are logged and otherwise ignored.
pub struct BrowserHead {
    document: Document,
}

impl BrowserHead {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    fn find_or_create(
        &self,
        existing: Option<Element>,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> Result<Element, JsValue> {
        if let Some(element) = existing {
            return Ok(element);
        }
        let element = self.document.create_element(tag)?;
        for (name, value) in attributes {
            element.set_attribute(name, value)?;
        }
        let head = self
            .document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
        head.append_child(&element)?;
        Ok(element)
    }

    fn meta_element(&self, key: MetaKey) -> Option<Element> {
        self.document.query_selector(&key.selector()).ok().flatten()
    }
}

impl DocumentHead for BrowserHead {
    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn upsert_meta(&mut self, key: MetaKey, content: &str) {
        let result = self
            .find_or_create(self.meta_element(key), "meta", &[(key.attribute(), key.value())])
            .and_then(|meta| meta.set_attribute("content", content));
        if let Err(e) = result {
            warn!("Failed to set meta {}: {:?}", key.value(), e);
        }
    }

    fn remove_meta(&mut self, key: MetaKey) {
        if let Some(meta) = self.meta_element(key) {
            meta.remove();
        }
    }

    fn upsert_json_ld(&mut self, id: &str, body: &str) {
        let result = self
            .find_or_create(
                self.document.get_element_by_id(id),
                "script",
                &[("id", id), ("type", "application/ld+json")],
            )
            .map(|script| script.set_text_content(Some(body)));
        if let Err(e) = result {
            warn!("Failed to write structured data: {:?}", e);
        }
    }

    fn remove_json_ld(&mut self, id: &str) {
        if let Some(script) = self.document.get_element_by_id(id) {
            script.remove();
        }
    }
}

#[hook]
pub fn use_page_meta(meta: PageMeta) {
    use_effect_with_deps(
        |meta| {
            match BrowserHead::current() {
                Some(mut head) => apply_page_meta(&mut head, meta),
                None => warn!("No document available for page metadata"),
            }
            || ()
        },
        meta,
    );
}

pub fn local_business_schema() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "@id": config::SITE_URL,
        "name": config::BUSINESS_NAME,
        "description": "Professional mobile DPF cleaning service in Bridgwater, Somerset",
        "url": config::SITE_URL,
        "telephone": "07983361554",
        "email": config::CONTACT_EMAIL,
        "image": format!("{}{}", config::SITE_URL, config::LOGO_PATH),
        "priceRange": "£245",
        "address": {
            "@type": "PostalAddress",
            "streetAddress": "Bridgwater",
            "addressLocality": "Bridgwater",
            "addressRegion": "Somerset",
            "postalCode": "TA6",
            "addressCountry": "GB"
        },
        "areaServed": [
            { "@type": "City", "name": "Bridgwater" },
            { "@type": "City", "name": "Bristol" },
            { "@type": "City", "name": "Exeter" },
            { "@type": "City", "name": "Taunton" },
            { "@type": "City", "name": "Weston-super-Mare" },
            { "@type": "City", "name": "Yeovil" },
            { "@type": "Region", "name": "Somerset" }
        ],
        "sameAs": [config::YOUTUBE_URL, config::GOOGLE_PROFILE_URL],
        "openingHoursSpecification": {
            "@type": "OpeningHoursSpecification",
            "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
            "opens": "08:00",
            "closes": "18:00"
        },
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": "4.9",
            "ratingCount": "500"
        }
    })
}

pub fn dpf_service_schema() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "name": "DPF Cleaning",
        "description": "Professional diesel particulate filter cleaning service",
        "provider": {
            "@type": "LocalBusiness",
            "name": config::BUSINESS_NAME,
            "url": config::SITE_URL
        },
        "areaServed": { "@type": "Region", "name": "Somerset, UK" },
        "offers": {
            "@type": "Offer",
            "price": "245",
            "priceCurrency": "GBP",
            "availability": "https://schema.org/InStock"
        }
    })
}

/// Business plus service schema, as one JSON-LD array for the home page.
pub fn home_schema() -> Value {
    Value::Array(vec![local_business_schema(), dpf_service_schema()])
}

#[cfg(test)]
pub mod testing {
    use super::{DocumentHead, MetaKey};

    /// Keeps `<head>` as plain lists so tests can count duplicates.
    #[derive(Default, Debug)]
    pub struct FakeHead {
        pub title: String,
        pub metas: Vec<(MetaKey, String)>,
        pub scripts: Vec<(String, String)>,
    }

    impl FakeHead {
        pub fn meta(&self, key: MetaKey) -> Vec<&str> {
            self.metas
                .iter()
                .filter(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
                .collect()
        }
    }

    impl DocumentHead for FakeHead {
        fn set_title(&mut self, title: &str) {
            self.title = title.to_string();
        }

        fn upsert_meta(&mut self, key: MetaKey, content: &str) {
            match self.metas.iter_mut().find(|(k, _)| *k == key) {
                Some((_, value)) => *value = content.to_string(),
                None => self.metas.push((key, content.to_string())),
            }
        }

        fn remove_meta(&mut self, key: MetaKey) {
            self.metas.retain(|(k, _)| *k != key);
        }

        fn upsert_json_ld(&mut self, id: &str, body: &str) {
            match self.scripts.iter_mut().find(|(i, _)| i == id) {
                Some((_, existing)) => *existing = body.to_string(),
                None => self.scripts.push((id.to_string(), body.to_string())),
            }
        }

        fn remove_json_ld(&mut self, id: &str) {
            self.scripts.retain(|(i, _)| i != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeHead;
    use super::*;

    #[test]
    fn applies_title_description_and_open_graph() {
        let mut head = FakeHead::default();
        let meta = PageMeta::new("DPF Cleaning Bristol", "Mobile DPF cleaning in Bristol").keywords("DPF, Bristol");
        apply_page_meta(&mut head, &meta);

        assert_eq!(head.title, "DPF Cleaning Bristol");
        assert_eq!(head.meta(DESCRIPTION), ["Mobile DPF cleaning in Bristol"]);
        assert_eq!(head.meta(KEYWORDS), ["DPF, Bristol"]);
        assert_eq!(head.meta(OG_TITLE), ["DPF Cleaning Bristol"]);
        assert_eq!(head.meta(OG_DESCRIPTION), ["Mobile DPF cleaning in Bristol"]);
    }

    #[test]
    fn repeated_navigation_leaves_one_tag_of_each_kind() {
        let mut head = FakeHead::default();
        let pages = [
            PageMeta::new("Home", "home").keywords("a").structured_data(home_schema()),
            PageMeta::new("Bristol", "bristol").keywords("b").structured_data(json!({ "@type": "LocalBusiness" })),
            PageMeta::new("Exeter", "exeter").keywords("c").structured_data(json!({ "@type": "LocalBusiness", "name": "Exeter" })),
        ];
        for meta in pages.iter().cycle().take(7) {
            apply_page_meta(&mut head, meta);
        }

        assert_eq!(head.metas.len(), 4);
        assert_eq!(head.scripts.len(), 1);
        // 7th application is the home page again
        assert_eq!(head.title, "Home");
        let (id, body) = &head.scripts[0];
        assert_eq!(id, STRUCTURED_DATA_ID);
        assert_eq!(serde_json::from_str::<Value>(body).unwrap(), home_schema());
    }

    #[test]
    fn missing_keywords_and_schema_remove_stale_tags() {
        let mut head = FakeHead::default();
        apply_page_meta(
            &mut head,
            &PageMeta::new("Bristol", "b").keywords("k").structured_data(json!({})),
        );
        apply_page_meta(&mut head, &PageMeta::new("Blog", "articles"));

        assert!(head.meta(KEYWORDS).is_empty());
        assert!(head.scripts.is_empty());
        assert_eq!(head.meta(OG_TITLE), ["Blog"]);
    }

    #[test]
    fn business_schema_lists_served_cities() {
        let schema = local_business_schema();
        assert_eq!(schema["@type"], "LocalBusiness");
        assert_eq!(schema["address"]["postalCode"], "TA6");
        let served: Vec<_> = schema["areaServed"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].as_str().unwrap())
            .collect();
        assert!(served.contains(&"Bristol") && served.contains(&"Somerset"));
        assert_eq!(dpf_service_schema()["offers"]["price"], "245");
    }
}
