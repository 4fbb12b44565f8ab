use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Arguments of a `generateLevels` invocation.
///
/// Level and exercise records are open-ended and passed through untouched;
/// only the top-level shape is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLevelsParams {
    pub user_id: String,
    pub levels: Vec<Value>,
    pub exercises: Vec<Value>,
}
