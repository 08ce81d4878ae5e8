//! Fixed test-case templates, keyed by (dimension, requirement shape).
//!
//! Title contract: every template produces a title containing the
//! literal markers "when" and "expecting". Steps are non-empty with
//! step numbers from 1, strictly increasing.

use serde_json::json;

use tcgen_core::types::test_case::{GeneratedTestCase, TestData, TestStep};
use tcgen_core::Dimension;

/// How the requirement is exercised — drives wording and test data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementShape {
    /// A human actor drives the behavior.
    UserAction,
    /// The system acts on its own.
    SystemAction,
    /// The behavior is an HTTP endpoint.
    ApiEndpoint,
}

impl RequirementShape {
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserAction => "USER",
            Self::SystemAction => "SYS",
            Self::ApiEndpoint => "API",
        }
    }
}

/// Everything a template needs from upstream stages, by reference.
pub(crate) struct TemplateContext<'a> {
    pub requirement_id: &'a str,
    pub actor: &'a str,
    pub action: &'a str,
    pub conditions: &'a [String],
    pub outcome: &'a str,
    /// Extracted HTTP method/path, when the text names one.
    pub api: Option<(String, String)>,
    /// Extracted numeric range bounds, when the text names them.
    pub bounds: Option<(i64, i64)>,
    pub confidence: f32,
}

pub(crate) fn instantiate(
    dim: Dimension,
    shape: RequirementShape,
    ctx: &TemplateContext<'_>,
) -> GeneratedTestCase {
    let template_id = format!("TPL-{}-{}", dim.type_code(), shape.code());
    let first_condition = ctx.conditions.first().map(|c| c.as_str());

    let title = build_title(dim, ctx, first_condition);
    let steps = build_steps(dim, ctx, first_condition);
    let expected_result = build_expected_result(dim, ctx);
    let test_data = build_test_data(dim, shape, ctx);

    let mut preconditions = vec!["Test environment is available".to_string()];
    preconditions.extend(ctx.conditions.iter().cloned());

    GeneratedTestCase {
        requirement_id: ctx.requirement_id.to_string(),
        test_type: dim.test_type_label().to_string(),
        title,
        preconditions,
        steps,
        test_data,
        expected_result,
        rules_applied: vec![
            format!("template:{template_id}"),
            format!("dimension:{}", dim.name()),
            format!("shape:{}", shape.code()),
        ],
        template_id,
        confidence: ctx.confidence,
    }
}

fn build_title(dim: Dimension, ctx: &TemplateContext<'_>, condition: Option<&str>) -> String {
    let actor = ctx.actor;
    let action = ctx.action;
    let outcome = ctx.outcome;
    match dim {
        Dimension::Functional => {
            let cond = condition.unwrap_or("all preconditions are satisfied");
            format!("Verify {actor} can {action} when {cond}, expecting {outcome}")
        }
        Dimension::Negative => format!(
            "Verify {action} is rejected when inputs are invalid, expecting a clear error"
        ),
        Dimension::Boundary => format!(
            "Verify {action} when inputs sit exactly on the limits, \
             expecting consistent acceptance and rejection"
        ),
        Dimension::Edge => {
            let cond = condition.unwrap_or("an edge condition");
            format!(
                "Verify {action} when {cond} changes unexpectedly, expecting stable behavior"
            )
        }
        Dimension::Performance => format!(
            "Verify {action} when the system is under expected load, \
             expecting completion within the required time"
        ),
        Dimension::Security => format!(
            "Verify {action} is denied when an unauthorized actor attempts it, \
             expecting access to be refused and the attempt logged"
        ),
        Dimension::Concurrency => format!(
            "Verify {action} when multiple actors contend simultaneously, \
             expecting exactly one winner and no corrupted state"
        ),
        Dimension::Failure => format!(
            "Verify {action} when a dependency fails mid-operation, \
             expecting graceful degradation and recovery"
        ),
        Dimension::Integration => format!(
            "Verify {action} when integrated with collaborating components, \
             expecting consistent end-to-end results"
        ),
    }
}

fn build_steps(
    dim: Dimension,
    ctx: &TemplateContext<'_>,
    condition: Option<&str>,
) -> Vec<TestStep> {
    let actor = ctx.actor;
    let action = ctx.action;
    let raw: Vec<(String, Option<String>)> = match dim {
        Dimension::Functional => vec![
            (
                match condition {
                    Some(cond) => format!("Prepare the environment so that {cond}"),
                    None => "Prepare the environment with valid inputs".to_string(),
                },
                Some("Preconditions hold".to_string()),
            ),
            (format!("As {actor}, {action}"), None),
            (
                "Observe the system response".to_string(),
                Some(ctx.outcome.to_string()),
            ),
        ],
        Dimension::Negative => vec![
            (format!("Prepare invalid input for {action}"), None),
            (
                format!("As {actor}, attempt to {action} with the invalid input"),
                Some("The operation is rejected".to_string()),
            ),
            ("Verify no partial state was persisted".to_string(), None),
        ],
        Dimension::Boundary => vec![
            (format!("Identify the numeric limits for {action}"), None),
            (
                format!("Exercise {action} at the exact limit values"),
                Some("Values on the limit are accepted".to_string()),
            ),
            (
                format!("Exercise {action} just outside the limit values"),
                Some("Values outside the limit are rejected".to_string()),
            ),
        ],
        Dimension::Edge => vec![
            (
                format!(
                    "Establish the condition '{}'",
                    condition.unwrap_or("the documented edge condition")
                ),
                None,
            ),
            (
                format!("As {actor}, {action} while the condition changes"),
                Some("Behavior remains stable".to_string()),
            ),
        ],
        Dimension::Performance => vec![
            ("Apply the expected load profile".to_string(), None),
            (
                format!("Measure completion time of {action}"),
                Some("Completion within the stated limit".to_string()),
            ),
        ],
        Dimension::Security => vec![
            (
                format!("Attempt {action} without valid authorization"),
                Some("Access is refused".to_string()),
            ),
            (
                "Inspect the audit output".to_string(),
                Some("The attempt is recorded".to_string()),
            ),
        ],
        Dimension::Concurrency => vec![
            (
                format!("Start {action} from two sessions at the same time"),
                None,
            ),
            (
                "Let both sessions commit".to_string(),
                Some("Exactly one succeeds; the other gets a clear conflict".to_string()),
            ),
        ],
        Dimension::Failure => vec![
            (format!("Inject a dependency failure during {action}"), None),
            (
                "Observe degradation and recovery".to_string(),
                Some("No data loss; a clear error is surfaced".to_string()),
            ),
        ],
        Dimension::Integration => vec![
            (
                format!("Wire {action} to its collaborating components"),
                None,
            ),
            (
                "Run the end-to-end flow".to_string(),
                Some(ctx.outcome.to_string()),
            ),
        ],
    };

    raw.into_iter()
        .enumerate()
        .map(|(i, (action, expected_intermediate))| TestStep {
            step_number: (i + 1) as u32,
            action,
            expected_intermediate,
        })
        .collect()
}

fn build_expected_result(dim: Dimension, ctx: &TemplateContext<'_>) -> String {
    match dim {
        Dimension::Functional | Dimension::Integration => ctx.outcome.to_string(),
        Dimension::Negative => {
            "The operation is rejected with a clear validation error and no partial state persists"
                .to_string()
        }
        Dimension::Boundary => {
            "Limit values are accepted; out-of-range values are rejected consistently".to_string()
        }
        Dimension::Edge => "The system behaves deterministically under the condition".to_string(),
        Dimension::Performance => {
            "The operation completes within the stated time under expected load".to_string()
        }
        Dimension::Security => {
            "Unauthorized access is denied and the attempt is auditable".to_string()
        }
        Dimension::Concurrency => {
            "Exactly one contender succeeds; shared state stays consistent".to_string()
        }
        Dimension::Failure => {
            "The system degrades gracefully and recovers without data loss".to_string()
        }
    }
}

fn build_test_data(
    dim: Dimension,
    shape: RequirementShape,
    ctx: &TemplateContext<'_>,
) -> TestData {
    if shape == RequirementShape::ApiEndpoint {
        let (method, path) = ctx
            .api
            .clone()
            .unwrap_or_else(|| ("POST".to_string(), "/api/resource".to_string()));
        return TestData::ApiRequest(json!({
            "method": method,
            "path": path,
            "headers": { "content-type": "application/json" },
            "body": { "mode": data_mode(dim) },
        }));
    }

    let values = match (dim, ctx.bounds) {
        (Dimension::Boundary, Some((min, max))) => {
            json!([min, max, min - 1, max + 1])
        }
        (Dimension::Boundary, None) => json!(["lower limit", "upper limit"]),
        _ => json!([]),
    };

    TestData::Inputs(json!({
        "mode": data_mode(dim),
        "action": ctx.action,
        "values": values,
    }))
}

fn data_mode(dim: Dimension) -> &'static str {
    match dim {
        Dimension::Functional => "valid",
        Dimension::Negative => "invalid",
        Dimension::Boundary => "boundary",
        Dimension::Edge => "edge",
        Dimension::Performance => "load",
        Dimension::Security => "unauthorized",
        Dimension::Concurrency => "concurrent",
        Dimension::Failure => "fault",
        Dimension::Integration => "integrated",
    }
}
