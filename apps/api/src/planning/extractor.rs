//! Job extraction: turns raw email text into ordered `JobRecord`s via the LLM.
//!
//! `AppState` holds an `Arc<dyn JobExtractor>` so handlers and the pipeline can be
//! exercised without a network.

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use tracing::info;

use crate::llm_client::{JsonSchemaFormat, LlmClient, LlmError};
use crate::planning::models::{FieldName, JobRecord, PlanningOutput, PlanningResult};
use crate::planning::prompts::{PLAN_EXTRACT_PROMPT_TEMPLATE, PLAN_EXTRACT_SYSTEM};

/// What to return when the email names no recognizable job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoJobsPolicy {
    /// Zero records.
    #[default]
    Empty,
    /// One record with every field unresolved, so the operator still gets a request reply.
    Placeholder,
}

impl NoJobsPolicy {
    pub fn apply(self, jobs: PlanningResult) -> PlanningResult {
        match self {
            NoJobsPolicy::Placeholder if jobs.is_empty() => vec![JobRecord::default()],
            _ => jobs,
        }
    }
}

/// Extracts jobs from email text. Errors come back from the collaborator untouched.
#[async_trait]
pub trait JobExtractor: Send + Sync {
    async fn extract(&self, email_text: &str) -> Result<PlanningResult, LlmError>;
}

pub struct LlmJobExtractor {
    llm: LlmClient,
    no_jobs_policy: NoJobsPolicy,
    format: JsonSchemaFormat,
}

impl LlmJobExtractor {
    pub fn new(llm: LlmClient, no_jobs_policy: NoJobsPolicy) -> Self {
        Self {
            llm,
            no_jobs_policy,
            format: planning_output_format(),
        }
    }
}

#[async_trait]
impl JobExtractor for LlmJobExtractor {
    async fn extract(&self, email_text: &str) -> Result<PlanningResult, LlmError> {
        let prompt = PLAN_EXTRACT_PROMPT_TEMPLATE.replace("{email_text}", email_text);
        let output: PlanningOutput = self
            .llm
            .call_structured(&prompt, PLAN_EXTRACT_SYSTEM, &self.format)
            .await?;

        info!("Extraction returned {} job(s)", output.jobs.len());
        Ok(self.no_jobs_policy.apply(output.jobs))
    }
}

/// Strict schema for `{"jobs": [JobRecord]}`, built from the closed field list.
pub fn planning_output_format() -> JsonSchemaFormat {
    let mut properties = Map::new();
    for field in FieldName::ALL {
        let schema = match field {
            FieldName::LiftPresent => json!({ "type": "boolean" }),
            _ => json!({ "type": ["string", "null"] }),
        };
        properties.insert(field.key().to_string(), schema);
    }
    let required: Vec<Value> = FieldName::ALL
        .iter()
        .map(|f| Value::String(f.key().to_string()))
        .collect();

    JsonSchemaFormat {
        name: "planning_output",
        strict: true,
        schema: json!({
            "type": "object",
            "properties": {
                "jobs": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": properties,
                        "required": required,
                        "additionalProperties": false
                    }
                }
            },
            "required": ["jobs"],
            "additionalProperties": false
        }),
    }
}
