use super::{GameDevTool, ToolContext};

pub struct UpdateGameKnowledgeTool;

impl GameDevTool for UpdateGameKnowledgeTool {
    fn name(&self) -> &str {
        "update_game_knowledge"
    }

    fn description(&self) -> &str {
        "Update knowledge about game development best practices and technologies"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "topics": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Topics to research and update knowledge about"
                }
            },
            "required": ["topics"]
        })
    }

    fn call(&self, args: serde_json::Value, ctx: &ToolContext) -> Result<serde_json::Value, String> {
        let topics: Vec<String> = args["topics"]
            .as_array()
            .ok_or_else(|| "missing required argument: topics".to_string())?
            .iter()
            .map(|t| {
                t.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| "topics must be strings".to_string())
            })
            .collect::<Result<_, _>>()?;

        let mut knowledge = ctx.knowledge();
        let update = knowledge
            .refresh(ctx.knowledge_source(), &topics, chrono::Utc::now())
            .map_err(|e| format!("Error updating knowledge: {e}"))?;

        Ok(serde_json::json!({
            "message": format!("Knowledge updated for topics: {}", topics.join(", ")),
            "last_updated": knowledge.last_updated,
            "updates": update,
        }))
    }
}
