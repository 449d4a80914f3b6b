// Extraction prompt templates for the planning module.

pub const PLAN_EXTRACT_SYSTEM: &str = "\
You are a logistics planner. Be compact and accurate. \
Extract every distinct job described in the email into the provided JSON schema. \
When the email describes work on more than one day or at more than one location, \
return one job per day and location. \
If a field cannot be determined from the email, set it to null and never guess. \
Set lift_present to true only when the email indicates an elevator or lift is available, \
even if it is not labeled as such; otherwise set it to false. \
If the email describes no job at all, return an empty jobs list.";

/// Extraction prompt template. Replace `{email_text}` before sending.
pub const PLAN_EXTRACT_PROMPT_TEMPLATE: &str = r#"Analyse the email below and extract the jobs. Also look for lift or elevator information.

EMAIL:
{email_text}

FIELDS PER JOB:
- date: the day the work takes place
- start_time: when the crew must be on site
- end_time: when the customer expects the work to be finished
- task_description: what the crew will be doing
- crew_count: how many movers are requested
- location: the address or site name
- contact_info: on-site contact person and phone number
- materials: what has to be carried or moved
- purchase_order_number: the customer's PO number
- lift_present: whether a lift or elevator is available"#;
