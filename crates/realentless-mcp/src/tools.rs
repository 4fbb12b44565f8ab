use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the single tool exposed by the gateway, also used as the upstream
/// JSON-RPC method.
pub const GENERATE_LEVELS: &str = "generateLevels";

/// Definition of an MCP tool exposed to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Registry of all MCP tools available through the gateway.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Return the list of tool definitions for the MCP `tools/list` method.
    #[must_use]
    pub fn definitions() -> Vec<ToolDefinition> {
        vec![ToolDefinition {
            name: GENERATE_LEVELS.to_string(),
            description: "Generate personalized levels and exercises for a user. \
                Returns the backend's summary of what was created. \
                Each exercise's exerciseId must reference a valid exercise from the \
                available exercises provided in the context, and its userLevelId must \
                match the id of one of the supplied levels."
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "userId": {
                        "type": "string",
                        "description": "The user's unique ID"
                    },
                    "levels": {
                        "type": "array",
                        "description": "Level objects with multilingual titles, messages, and workout configuration",
                        "items": level_schema()
                    },
                    "exercises": {
                        "type": "array",
                        "description": "Exercise objects attached to the supplied levels",
                        "items": exercise_schema()
                    }
                },
                "required": ["userId", "levels", "exercises"]
            }),
        }]
    }

    /// Look up a tool by name.
    #[must_use]
    pub fn find(name: &str) -> Option<ToolDefinition> {
        Self::definitions().into_iter().find(|t| t.name == name)
    }
}

fn localized(description: &str) -> Value {
    serde_json::json!({
        "type": "object",
        "description": description,
        "additionalProperties": { "type": "string" }
    })
}

fn level_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "id": { "type": "string" },
            "userId": { "type": "string" },
            "title": localized("Level title keyed by language code (en, fr, ...)"),
            "subtitle": localized("Level subtitle keyed by language code"),
            "message": localized("Welcome message keyed by language code"),
            "bodyMessage": localized("Body session message keyed by language code"),
            "mindMessage": localized("Mind session message keyed by language code"),
            "position": { "type": "integer" },
            "availableAt": { "type": "string", "description": "ISO-8601 timestamp" },
            "bodyExercisesPerRound": { "type": "number" },
            "bodyIntensity": { "type": "number" },
            "bodyRounds": { "type": "number" },
            "mindIntensity": { "type": "number" },
            "mindRounds": { "type": "number" }
        },
        "additionalProperties": true
    })
}

fn exercise_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "id": { "type": "string" },
            "exerciseId": {
                "type": "string",
                "description": "Must reference an exercise from the available exercise catalog"
            },
            "type": { "type": "string", "description": "Exercise category, e.g. BODY or MIND" },
            "userLevelId": {
                "type": "string",
                "description": "Id of the level (from levels) this exercise belongs to"
            },
            "title": { "type": "string" },
            "description": { "type": "string" }
        },
        "additionalProperties": true
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_tool_defined() {
        let tools = ToolRegistry::definitions();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "generateLevels");
    }

    #[test]
    fn tools_serialize() {
        let tools = ToolRegistry::definitions();
        let json = serde_json::to_string(&tools).unwrap();
        assert!(json.contains("generateLevels"));
        assert!(json.contains("inputSchema"));
    }

    #[test]
    fn generate_levels_has_required_params() {
        let tool = ToolRegistry::find(GENERATE_LEVELS).unwrap();
        let required = tool.input_schema["required"].as_array().unwrap();

        let required_names: Vec<&str> = required.iter().filter_map(Value::as_str).collect();
        assert_eq!(required_names, ["userId", "levels", "exercises"]);
        assert_eq!(tool.input_schema["properties"]["levels"]["type"], "array");
        assert_eq!(tool.input_schema["properties"]["exercises"]["type"], "array");
    }

    #[test]
    fn unknown_tool_not_found() {
        assert!(ToolRegistry::find("invalidTool").is_none());
    }
}
