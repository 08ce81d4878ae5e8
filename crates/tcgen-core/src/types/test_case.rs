//! Generated test case — the output shape of the generator stage.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One templated test case for a single requirement and dimension.
///
/// Title contract: every title contains the literal markers "when" and
/// "expecting". `steps` is non-empty with `step_number` starting at 1
/// and strictly increasing. `rules_applied` is non-empty and always
/// names the template used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedTestCase {
    pub requirement_id: String,
    pub test_type: String,
    pub title: String,
    pub preconditions: Vec<String>,
    pub steps: Vec<TestStep>,
    pub test_data: TestData,
    pub expected_result: String,
    pub template_id: String,
    pub rules_applied: Vec<String>,
    pub confidence: f32,
}

/// One ordered step within a test case.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TestStep {
    /// 1-based, strictly increasing within a test case.
    pub step_number: u32,
    pub action: String,
    pub expected_intermediate: Option<String>,
}

/// Test data payload. API-behavior requirements get `api_request`;
/// everything else gets `inputs`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TestData {
    Inputs(serde_json::Value),
    ApiRequest(serde_json::Value),
}

impl TestData {
    /// True when the payload is an API request.
    pub fn is_api_request(&self) -> bool {
        matches!(self, Self::ApiRequest(_))
    }
}
