use crate::planning::models::{FieldName, JobRecord};

/// Labels of the text fields still unresolved on `job`, in schema order.
/// `lift_present` is a plain boolean and is never reported.
pub fn missing_fields(job: &JobRecord) -> Vec<&'static str> {
    unresolved_fields(job)
        .into_iter()
        .map(FieldName::label)
        .collect()
}

pub fn unresolved_fields(job: &JobRecord) -> Vec<FieldName> {
    job.text_fields()
        .into_iter()
        .filter(|(_, value)| value.is_unresolved())
        .map(|(name, _)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::models::FieldValue;

    fn warehouse_job() -> JobRecord {
        JobRecord {
            date: FieldValue::resolved("12-05"),
            start_time: FieldValue::resolved("08:00"),
            end_time: FieldValue::Unresolved,
            task_description: FieldValue::resolved("unloading"),
            crew_count: FieldValue::resolved("3"),
            location: FieldValue::resolved("Warehouse 2"),
            contact_info: FieldValue::resolved("Jan, 06-..."),
            materials: FieldValue::resolved("pallets"),
            purchase_order_number: FieldValue::resolved("PO123"),
            lift_present: false,
        }
    }

    #[test]
    fn test_only_end_time_missing() {
        assert_eq!(missing_fields(&warehouse_job()), vec!["Estimated end time"]);
    }

    #[test]
    fn test_complete_job_has_nothing_missing() {
        let job = JobRecord {
            end_time: FieldValue::resolved("16:00"),
            ..warehouse_job()
        };
        assert!(missing_fields(&job).is_empty());
    }

    #[test]
    fn test_empty_job_lists_nine_labels_in_order_without_lift() {
        let missing = missing_fields(&JobRecord::default());
        let expected: Vec<_> = FieldName::ALL[..9].iter().map(|f| f.label()).collect();
        assert_eq!(missing, expected);
        assert!(!missing.contains(&FieldName::LiftPresent.label()));
    }

    #[test]
    fn test_lift_never_reported_either_way() {
        for lift_present in [true, false] {
            let job = JobRecord {
                lift_present,
                ..JobRecord::default()
            };
            assert!(!unresolved_fields(&job).contains(&FieldName::LiftPresent));
        }
    }

    #[test]
    fn test_missing_list_keeps_schema_order() {
        let job = JobRecord {
            date: FieldValue::Unresolved,
            materials: FieldValue::Unresolved,
            purchase_order_number: FieldValue::Unresolved,
            ..warehouse_job()
        };
        assert_eq!(
            missing_fields(&job),
            vec!["Date", "Estimated end time", "Materials", "Purchase order number"]
        );
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let job = warehouse_job();
        assert_eq!(missing_fields(&job), missing_fields(&job));
    }
}
