//! Planning pipeline: one email in, one rendered block set per job out.
//!
//! Flow: extract (once) → for each job in order: missing_fields → reply → summary → briefing.

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::planning::completeness::missing_fields;
use crate::planning::extractor::JobExtractor;
use crate::planning::models::JobRecord;
use crate::planning::templates::{render_briefing, render_reply, render_summary};

/// The copy-ready output for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedJob {
    /// 1-based position in the email.
    pub number: usize,
    pub heading: String,
    pub missing_fields: Vec<&'static str>,
    pub reply: String,
    pub summary: String,
    pub briefing: String,
}

/// Runs the full pipeline. Blank input short-circuits without calling the extractor;
/// an extraction failure fails the whole request.
pub async fn plan_email(
    extractor: &dyn JobExtractor,
    email_text: &str,
) -> Result<Vec<RenderedJob>, AppError> {
    if email_text.trim().is_empty() {
        info!("Empty email text, nothing to plan");
        return Ok(Vec::new());
    }

    let jobs = extractor.extract(email_text).await?;
    info!("Rendering {} job(s)", jobs.len());

    Ok(jobs
        .iter()
        .enumerate()
        .map(|(index, job)| render_job(index + 1, job))
        .collect())
}

pub fn render_job(number: usize, job: &JobRecord) -> RenderedJob {
    let missing = missing_fields(job);
    RenderedJob {
        number,
        heading: format!("Job {}: {}", number, job.location),
        reply: render_reply(&missing),
        summary: render_summary(job),
        briefing: render_briefing(job),
        missing_fields: missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::extractor::testing::{FailingExtractor, StubExtractor};
    use crate::planning::models::FieldValue;
    use crate::planning::templates::CONFIRMATION_REPLY;

    fn job_at(location: &str, date: &str) -> JobRecord {
        JobRecord {
            date: FieldValue::resolved(date),
            location: FieldValue::resolved(location),
            ..JobRecord::default()
        }
    }

    #[tokio::test]
    async fn test_empty_input_skips_extraction() {
        let extractor = StubExtractor::new(vec![job_at("Dock 4", "12-05")]);
        let rendered = plan_email(&extractor, "   \n").await.unwrap();
        assert!(rendered.is_empty());
        assert_eq!(extractor.call_count(), 0);
    }

    #[tokio::test]
    async fn test_extractor_called_once_and_order_preserved() {
        let extractor = StubExtractor::new(vec![
            job_at("Warehouse 2", "12-05"),
            job_at("Main Street 10", "13-05"),
            job_at("Warehouse 2", "12-05"),
        ]);
        let rendered = plan_email(&extractor, "three jobs").await.unwrap();

        assert_eq!(extractor.call_count(), 1);
        let headings: Vec<_> = rendered.iter().map(|r| r.heading.as_str()).collect();
        assert_eq!(
            headings,
            vec![
                "Job 1: Warehouse 2",
                "Job 2: Main Street 10",
                "Job 3: Warehouse 2"
            ]
        );
    }

    #[tokio::test]
    async fn test_two_jobs_are_defaulted_independently() {
        let first = JobRecord {
            materials: FieldValue::resolved("pallets"),
            ..job_at("Warehouse 2", "12-05")
        };
        let second = JobRecord {
            contact_info: FieldValue::resolved("Piet, 06-..."),
            ..job_at("Main Street 10", "13-05")
        };
        let extractor = StubExtractor::new(vec![first, second]);
        let rendered = plan_email(&extractor, "two jobs").await.unwrap();

        assert_eq!(rendered.len(), 2);
        assert!(!rendered[0].missing_fields.contains(&"Materials"));
        assert!(rendered[0].missing_fields.contains(&"Contact person + phone"));
        assert!(rendered[1].missing_fields.contains(&"Materials"));
        assert!(!rendered[1].missing_fields.contains(&"Contact person + phone"));
    }

    #[tokio::test]
    async fn test_extraction_failure_fails_request() {
        let result = plan_email(&FailingExtractor, "some email").await;
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }

    #[test]
    fn test_complete_job_gets_confirmation() {
        let job = JobRecord {
            date: FieldValue::resolved("12-05"),
            start_time: FieldValue::resolved("08:00"),
            end_time: FieldValue::resolved("16:00"),
            task_description: FieldValue::resolved("unloading"),
            crew_count: FieldValue::resolved("3"),
            location: FieldValue::resolved("Warehouse 2"),
            contact_info: FieldValue::resolved("Jan, 06-..."),
            materials: FieldValue::resolved("pallets"),
            purchase_order_number: FieldValue::resolved("PO123"),
            lift_present: false,
        };
        let rendered = render_job(1, &job);
        assert!(rendered.missing_fields.is_empty());
        assert_eq!(rendered.reply, CONFIRMATION_REPLY);
    }

    #[test]
    fn test_unresolved_location_heading() {
        assert_eq!(render_job(2, &JobRecord::default()).heading, "Job 2: Unknown");
    }
}
