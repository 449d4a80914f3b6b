use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// Text shown wherever an unresolved field is rendered. The extraction service
/// may also send it verbatim, in which case the field decodes as unresolved.
pub const UNRESOLVED_TEXT: &str = "Unknown";

/// A text field that was either found in the email or not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldValue {
    Resolved(String),
    #[default]
    Unresolved,
}

impl FieldValue {
    pub fn resolved(value: impl Into<String>) -> Self {
        FieldValue::Resolved(value.into())
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, FieldValue::Unresolved)
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Resolved(value) => value,
            FieldValue::Unresolved => UNRESOLVED_TEXT,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct FieldValueVisitor;

impl<'de> Visitor<'de> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FieldValue, E> {
        Ok(if v == UNRESOLVED_TEXT {
            FieldValue::Unresolved
        } else {
            FieldValue::Resolved(v.to_string())
        })
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<FieldValue, E> {
        Ok(if v == UNRESOLVED_TEXT {
            FieldValue::Unresolved
        } else {
            FieldValue::Resolved(v)
        })
    }

    fn visit_unit<E: de::Error>(self) -> Result<FieldValue, E> {
        Ok(FieldValue::Unresolved)
    }

    fn visit_none<E: de::Error>(self) -> Result<FieldValue, E> {
        Ok(FieldValue::Unresolved)
    }
}

// `deserialize_any` keeps an absent key an error instead of silently decoding it as null.
impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}

/// The ten fields of a job, in the fixed order used for rendering and completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Date,
    StartTime,
    EndTime,
    TaskDescription,
    CrewCount,
    Location,
    ContactInfo,
    Materials,
    PurchaseOrderNumber,
    LiftPresent,
}

impl FieldName {
    pub const ALL: [FieldName; 10] = [
        FieldName::Date,
        FieldName::StartTime,
        FieldName::EndTime,
        FieldName::TaskDescription,
        FieldName::CrewCount,
        FieldName::Location,
        FieldName::ContactInfo,
        FieldName::Materials,
        FieldName::PurchaseOrderNumber,
        FieldName::LiftPresent,
    ];

    /// Key used in the extraction schema.
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Date => "date",
            FieldName::StartTime => "start_time",
            FieldName::EndTime => "end_time",
            FieldName::TaskDescription => "task_description",
            FieldName::CrewCount => "crew_count",
            FieldName::Location => "location",
            FieldName::ContactInfo => "contact_info",
            FieldName::Materials => "materials",
            FieldName::PurchaseOrderNumber => "purchase_order_number",
            FieldName::LiftPresent => "lift_present",
        }
    }

    /// Label used when asking the customer for a missing field.
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Date => "Date",
            FieldName::StartTime => "Start time",
            FieldName::EndTime => "Estimated end time",
            FieldName::TaskDescription => "Tasks",
            FieldName::CrewCount => "Number of movers",
            FieldName::Location => "Location",
            FieldName::ContactInfo => "Contact person + phone",
            FieldName::Materials => "Materials",
            FieldName::PurchaseOrderNumber => "Purchase order number",
            FieldName::LiftPresent => "Lift present",
        }
    }

    /// Label used on the internal summary.
    pub fn summary_label(self) -> &'static str {
        match self {
            FieldName::EndTime => "End time",
            FieldName::CrewCount => "Crew size",
            FieldName::PurchaseOrderNumber => "PO number",
            other => other.label(),
        }
    }
}

/// One logistics job extracted from an email. Closed: exactly ten fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobRecord {
    pub date: FieldValue,
    pub start_time: FieldValue,
    pub end_time: FieldValue,
    pub task_description: FieldValue,
    pub crew_count: FieldValue,
    pub location: FieldValue,
    pub contact_info: FieldValue,
    pub materials: FieldValue,
    pub purchase_order_number: FieldValue,
    pub lift_present: bool,
}

impl JobRecord {
    /// The nine text fields in schema order. `lift_present` is not among them.
    pub fn text_fields(&self) -> [(FieldName, &FieldValue); 9] {
        [
            (FieldName::Date, &self.date),
            (FieldName::StartTime, &self.start_time),
            (FieldName::EndTime, &self.end_time),
            (FieldName::TaskDescription, &self.task_description),
            (FieldName::CrewCount, &self.crew_count),
            (FieldName::Location, &self.location),
            (FieldName::ContactInfo, &self.contact_info),
            (FieldName::Materials, &self.materials),
            (FieldName::PurchaseOrderNumber, &self.purchase_order_number),
        ]
    }
}

/// Ordered jobs found in one email.
pub type PlanningResult = Vec<JobRecord>;

/// Wire shape of the extraction response.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanningOutput {
    pub jobs: Vec<JobRecord>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn full_job_json() -> serde_json::Value {
        json!({
            "date": "12-05",
            "start_time": "08:00",
            "end_time": null,
            "task_description": "unloading",
            "crew_count": "3",
            "location": "Warehouse 2",
            "contact_info": "Jan, 06-...",
            "materials": "pallets",
            "purchase_order_number": "Unknown",
            "lift_present": true
        })
    }

    #[test]
    fn test_null_and_sentinel_decode_as_unresolved() {
        let job: JobRecord = serde_json::from_value(full_job_json()).unwrap();
        assert_eq!(job.end_time, FieldValue::Unresolved);
        assert_eq!(job.purchase_order_number, FieldValue::Unresolved);
        assert_eq!(job.location, FieldValue::resolved("Warehouse 2"));
        assert!(job.lift_present);
    }

    #[test]
    fn test_sentinel_match_is_case_sensitive() {
        let mut value = full_job_json();
        value["materials"] = json!("unknown");
        let job: JobRecord = serde_json::from_value(value).unwrap();
        assert_eq!(job.materials, FieldValue::resolved("unknown"));
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let mut value = full_job_json();
        value.as_object_mut().unwrap().remove("materials");
        let result: Result<JobRecord, _> = serde_json::from_value(value);
        assert!(result.is_err(), "a record without `materials` must not decode");
    }

    #[test]
    fn test_extra_key_is_rejected() {
        let mut value = full_job_json();
        value["weather"] = json!("sunny");
        let result: Result<JobRecord, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let mut value = full_job_json();
        value["crew_count"] = json!(3);
        assert!(serde_json::from_value::<JobRecord>(value.clone()).is_err());

        value["crew_count"] = json!("3");
        value["lift_present"] = json!(null);
        assert!(serde_json::from_value::<JobRecord>(value).is_err());
    }

    #[test]
    fn test_default_record_is_fully_unresolved() {
        let job = JobRecord::default();
        assert!(job.text_fields().iter().all(|(_, v)| v.is_unresolved()));
        assert!(!job.lift_present);
    }

    #[test]
    fn test_field_order_is_fixed() {
        let keys: Vec<_> = FieldName::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec![
                "date",
                "start_time",
                "end_time",
                "task_description",
                "crew_count",
                "location",
                "contact_info",
                "materials",
                "purchase_order_number",
                "lift_present",
            ]
        );
        let text_order: Vec<_> = JobRecord::default()
            .text_fields()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(text_order, FieldName::ALL[..9].to_vec());
    }

    #[test]
    fn test_unresolved_displays_as_unknown() {
        assert_eq!(FieldValue::Unresolved.to_string(), "Unknown");
        assert_eq!(FieldValue::resolved("08:00").to_string(), "08:00");
    }
}
