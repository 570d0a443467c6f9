use std::rc::Rc;

use log::debug;
use thiserror::Error;
use web_sys::Storage;
use yew::prelude::*;

use crate::config;
use crate::leads::model::Lead;

#[derive(Debug, Error)]
pub enum LeadStoreError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("failed to read stored leads: {0}")]
    Read(String),
    #[error("failed to write leads: {0}")]
    Write(String),
    #[error("stored leads are not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("could not encode leads: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Where submitted leads end up. Pages only ever append and list.
pub trait LeadRepository {
    fn list(&self) -> Result<Vec<Lead>, LeadStoreError>;
    fn append(&self, lead: Lead) -> Result<(), LeadStoreError>;
}

/// A missing or blank entry is an empty list; anything else must parse.
pub fn decode_leads(raw: Option<&str>) -> Result<Vec<Lead>, LeadStoreError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(json) => serde_json::from_str(json).map_err(LeadStoreError::Decode),
    }
}

pub fn encode_leads(leads: &[Lead]) -> Result<String, LeadStoreError> {
    serde_json::to_string(leads).map_err(LeadStoreError::Encode)
}

/// Leads kept as one JSON array under a single localStorage key, read and
/// rewritten wholesale on every append.
pub struct LocalStorageLeads {
    key: &'static str,
}

impl LocalStorageLeads {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage(&self) -> Result<Storage, LeadStoreError> {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Ok(storage),
            _ => Err(LeadStoreError::Unavailable),
        }
    }
}

impl Default for LocalStorageLeads {
    fn default() -> Self {
        Self::new(config::LEADS_STORAGE_KEY)
    }
}

impl LeadRepository for LocalStorageLeads {
    fn list(&self) -> Result<Vec<Lead>, LeadStoreError> {
        let raw = self
            .storage()?
            .get_item(self.key)
            .map_err(|e| LeadStoreError::Read(format!("{:?}", e)))?;
        decode_leads(raw.as_deref())
    }

    fn append(&self, lead: Lead) -> Result<(), LeadStoreError> {
        let mut leads = self.list()?;
        leads.push(lead);
        let encoded = encode_leads(&leads)?;
        self.storage()?
            .set_item(self.key, &encoded)
            .map_err(|e| LeadStoreError::Write(format!("{:?}", e)))?;
        debug!("Stored lead #{} under {}", leads.len(), self.key);
        Ok(())
    }
}

/// Context value handing the lead repository to forms.
#[derive(Clone)]
pub struct LeadStore(Rc<dyn LeadRepository>);

impl LeadStore {
    #[cfg(test)]
    pub fn new(inner: Rc<dyn LeadRepository>) -> Self {
        Self(inner)
    }

    pub fn repository(&self) -> &dyn LeadRepository {
        self.0.as_ref()
    }
}

impl Default for LeadStore {
    fn default() -> Self {
        Self(Rc::new(LocalStorageLeads::default()))
    }
}

impl PartialEq for LeadStore {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.0) as *const (),
            Rc::as_ptr(&other.0) as *const (),
        )
    }
}

#[hook]
pub fn use_lead_store() -> LeadStore {
    use_context::<LeadStore>().unwrap_or_default()
}

#[cfg(test)]
pub mod testing {
    use std::cell::{Cell, RefCell};

    use super::{decode_leads, encode_leads, LeadRepository, LeadStoreError};
    use crate::leads::model::Lead;

    /// Stores the serialized array in memory, the same shape localStorage
    /// holds, so decode and encode run on every call.
    #[derive(Default)]
    pub struct MemoryLeads {
        pub raw: RefCell<Option<String>>,
    }

    impl MemoryLeads {
        pub fn with_raw(raw: &str) -> Self {
            Self {
                raw: RefCell::new(Some(raw.to_string())),
            }
        }
    }

    impl LeadRepository for MemoryLeads {
        fn list(&self) -> Result<Vec<Lead>, LeadStoreError> {
            decode_leads(self.raw.borrow().as_deref())
        }

        fn append(&self, lead: Lead) -> Result<(), LeadStoreError> {
            let mut leads = self.list()?;
            leads.push(lead);
            *self.raw.borrow_mut() = Some(encode_leads(&leads)?);
            Ok(())
        }
    }

    /// Always refuses writes, like a full or disabled localStorage.
    #[derive(Default)]
    pub struct FailingLeads {
        pub attempts: Cell<usize>,
    }

    impl LeadRepository for FailingLeads {
        fn list(&self) -> Result<Vec<Lead>, LeadStoreError> {
            Ok(Vec::new())
        }

        fn append(&self, _lead: Lead) -> Result<(), LeadStoreError> {
            self.attempts.set(self.attempts.get() + 1);
            Err(LeadStoreError::Write("QuotaExceededError".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryLeads;
    use super::*;
    use chrono::Utc;

    fn lead(name: &str) -> Lead {
        Lead {
            name: name.into(),
            email: format!("{}@example.com", name),
            phone: String::new(),
            car_issue: "DPF".into(),
            location: None,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn missing_or_blank_entry_is_empty() {
        assert!(decode_leads(None).unwrap().is_empty());
        assert!(decode_leads(Some("")).unwrap().is_empty());
        assert!(decode_leads(Some("  ")).unwrap().is_empty());
        assert!(decode_leads(Some("[]")).unwrap().is_empty());
    }

    #[test]
    fn corrupt_entry_is_a_decode_error() {
        let err = decode_leads(Some("{not json")).unwrap_err();
        assert!(matches!(err, LeadStoreError::Decode(_)));
    }

    #[test]
    fn append_keeps_order_and_duplicates() {
        let store = MemoryLeads::default();
        store.append(lead("a")).unwrap();
        store.append(lead("b")).unwrap();
        store.append(lead("a")).unwrap();
        let names: Vec<_> = store.list().unwrap().into_iter().map(|l| l.name).collect();
        assert_eq!(names, ["a", "b", "a"]);
    }

    #[test]
    fn append_on_corrupt_store_leaves_it_untouched() {
        let store = MemoryLeads::with_raw("oops");
        assert!(store.append(lead("a")).is_err());
        assert_eq!(store.raw.borrow().as_deref(), Some("oops"));
    }

    #[test]
    fn store_handles_compare_by_identity() {
        let shared: Rc<dyn LeadRepository> = Rc::new(MemoryLeads::default());
        assert!(LeadStore::new(shared.clone()) == LeadStore::new(shared));
        assert!(
            LeadStore::new(Rc::new(MemoryLeads::default()))
                != LeadStore::new(Rc::new(MemoryLeads::default()))
        );
    }
}
