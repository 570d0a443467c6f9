use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Live values of the contact form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub car_issue: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Phone,
    CarIssue,
}

impl LeadFields {
    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Phone => self.phone = value,
            LeadField::CarIssue => self.car_issue = value,
        }
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::CarIssue => &self.car_issue,
        }
    }
}

/// A captured enquiry. Field names on disk stay compatible with leads that
/// were saved before the site moved to Rust (`carIssue`, ISO timestamps).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub car_issue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Lead {
    pub fn from_fields(fields: &LeadFields, location: Option<&str>, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            car_issue: fields.car_issue.clone(),
            location: location.map(str::to_string),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_with_legacy_field_names() {
        let fields = LeadFields {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            phone: "07123 456789".into(),
            car_issue: "DPF light".into(),
        };
        let at = Utc.with_ymd_and_hms(2026, 1, 22, 9, 30, 0).unwrap();

        let home = serde_json::to_value(Lead::from_fields(&fields, None, at)).unwrap();
        assert_eq!(home["carIssue"], "DPF light");
        assert!(home.get("location").is_none());

        let city = serde_json::to_value(Lead::from_fields(&fields, Some("Bristol"), at)).unwrap();
        assert_eq!(city["location"], "Bristol");
    }

    #[test]
    fn reads_leads_saved_by_the_old_site() {
        let raw = r#"{"name":"A","email":"a@b.c","phone":"","carIssue":"AdBlue fault","timestamp":"2026-01-03T10:15:00.000Z"}"#;
        let lead: Lead = serde_json::from_str(raw).unwrap();
        assert_eq!(lead.car_issue, "AdBlue fault");
        assert_eq!(lead.location, None);
        assert_eq!(lead.timestamp, Utc.with_ymd_and_hms(2026, 1, 3, 10, 15, 0).unwrap());
    }

    #[test]
    fn set_and_get_address_the_same_field() {
        let mut fields = LeadFields::default();
        fields.set(LeadField::CarIssue, "EGR".into());
        fields.set(LeadField::Email, "x@y.z".into());
        assert_eq!(fields.get(LeadField::CarIssue), "EGR");
        assert_eq!(fields.get(LeadField::Email), "x@y.z");
        assert_eq!(fields.get(LeadField::Name), "");
    }
}
