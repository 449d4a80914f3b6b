//! Text templates: the three copy-ready blocks rendered per job.
//!
//! Every function here is pure and total: the same input always yields the same
//! text, and no well-formed `JobRecord` can make rendering fail.

use crate::planning::models::{FieldName, JobRecord};
use crate::planning::pipeline::RenderedJob;

const REQUEST_REPLY_INTRO: &str = "Hi Purchasing Office Projects,\n\n\
Thank you for your request. To complete the planning we still need a few details:";

const REQUEST_REPLY_OUTRO: &str = "Could you send us this information by email? \
As soon as we have everything, we can process your request further.\n\n\
Kind regards,\nPlanning Team";

/// Reply sent when nothing is missing. Rendered verbatim.
pub const CONFIRMATION_REPLY: &str = "Hi Purchasing Office Projects,\n\n\
Thank you for your request, we will add it to the planning. \
We will share more about the crew scheduling shortly.\n\n\
Kind regards,\nPlanning Team";

const SECTION_DIVIDER: &str = "----------------------------------------";

/// The two possible customer replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTemplate<'a> {
    /// Asks the customer for the listed fields.
    RequestDetails(&'a [&'a str]),
    Confirmation,
}

impl<'a> ReplyTemplate<'a> {
    pub fn select(missing: &'a [&'a str]) -> Self {
        if missing.is_empty() {
            ReplyTemplate::Confirmation
        } else {
            ReplyTemplate::RequestDetails(missing)
        }
    }

    pub fn render(&self) -> String {
        match self {
            ReplyTemplate::Confirmation => CONFIRMATION_REPLY.to_string(),
            ReplyTemplate::RequestDetails(missing) => {
                let bullets = missing
                    .iter()
                    .map(|label| format!("- {label}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("{REQUEST_REPLY_INTRO}\n\n{bullets}\n\n{REQUEST_REPLY_OUTRO}")
            }
        }
    }
}

/// Customer reply for a job with the given missing labels.
pub fn render_reply(missing: &[&str]) -> String {
    ReplyTemplate::select(missing).render()
}

/// Internal summary: all ten fields as `Label: value`, unresolved shown as `Unknown`.
pub fn render_summary(job: &JobRecord) -> String {
    let mut lines: Vec<String> = job
        .text_fields()
        .iter()
        .map(|(name, value)| format!("{}: {}", name.summary_label(), value))
        .collect();
    lines.push(format!(
        "{}: {}",
        FieldName::LiftPresent.summary_label(),
        if job.lift_present { "yes" } else { "no" }
    ));
    lines.join("\n")
}

pub fn lift_phrase(lift_present: bool) -> &'static str {
    if lift_present {
        "(lift present)"
    } else {
        "(no lift mentioned)"
    }
}

/// Crew briefing. The end time is presented as an indication, not a deadline.
pub fn render_briefing(job: &JobRecord) -> String {
    format!(
        "Crew, you will be supporting the customer with:\n\n\
         Tasks: {}\n\
         Materials to carry: {}\n\
         {}\n\n\
         The end time is indicative; the customer expects you to be finished around {}.",
        job.task_description,
        job.materials,
        lift_phrase(job.lift_present),
        job.end_time
    )
}

/// Plain-text document with every job's three blocks, for webhook callers.
pub fn render_plan_text(jobs: &[RenderedJob]) -> String {
    if jobs.is_empty() {
        return "No jobs found in the email.".to_string();
    }

    jobs.iter()
        .map(|job| {
            format!(
                "{}\n\n1. REPLY TO EMAIL\n{}\n\n2. JOB INFORMATION\n{}\n\n3. CREW BRIEFING\n{}\n{}",
                job.heading, job.reply, job.summary, job.briefing, SECTION_DIVIDER
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
