use serde_json::{json, Value};

/// A one-level, one-exercise invocation that the production backend accepts.
pub fn arguments() -> Value {
    let user_id = "6c7e2bee-9f6f-4831-b7bf-868274e52374";
    json!({
        "userId": user_id,
        "levels": [
            {
                "id": "level-1",
                "title": {"en": "Beginner Level", "fr": "Niveau Débutant"},
                "subtitle": {"en": "Start your fitness journey", "fr": "Commencez votre parcours fitness"},
                "message": {"en": "Welcome to your fitness journey!", "fr": "Bienvenue dans votre parcours fitness !"},
                "position": 1,
                "availableAt": "2024-01-01T00:00:00Z",
                "userId": user_id,
                "bodyExercisesPerRound": 5,
                "bodyIntensity": 1,
                "bodyMessage": {"en": "Let's get moving!", "fr": "Mettons-nous en mouvement !"},
                "bodyRounds": 3,
                "mindIntensity": 1,
                "mindMessage": {"en": "Focus on your breathing", "fr": "Concentrez-vous sur votre respiration"},
                "mindRounds": 2
            }
        ],
        "exercises": [
            {
                "id": "exercise-1",
                "exerciseId": "5d792951-af94-4d55-bea1-75907490e49a",
                "type": "BODY",
                "userLevelId": "level-1",
                "title": "Push-ups",
                "description": "Basic push-ups for beginners"
            }
        ]
    })
}

/// Read invocation arguments from a JSON file, or fall back to the sample.
pub fn load(path: Option<&std::path::Path>) -> anyhow::Result<Value> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(arguments()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use realentless_core::GenerateLevelsParams;

    #[test]
    fn sample_matches_tool_arguments() {
        let params: GenerateLevelsParams = serde_json::from_value(arguments()).unwrap();
        assert_eq!(params.levels.len(), 1);
        assert_eq!(params.exercises.len(), 1);
        assert_eq!(params.exercises[0]["userLevelId"], params.levels[0]["id"]);
    }

    #[test]
    fn load_without_path_uses_sample() {
        assert_eq!(load(None).unwrap(), arguments());
    }
}
