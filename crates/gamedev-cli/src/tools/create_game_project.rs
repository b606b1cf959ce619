use super::{GameDevTool, ToolContext};
use gamedev_core::pipeline::{CreationRequest, PipelineResult, PresetConfirm};
use gamedev_core::types::GameType;

pub struct CreateGameProjectTool;

impl GameDevTool for CreateGameProjectTool {
    fn name(&self) -> &str {
        "create_game_project"
    }

    fn description(&self) -> &str {
        "Create a new game project with Linear integration and setup"
    }

    fn schema(&self) -> serde_json::Value {
        let types: Vec<&str> = GameType::all().iter().map(|t| t.as_str()).collect();
        serde_json::json!({
            "type": "object",
            "properties": {
                "gameName": {
                    "type": "string",
                    "description": "Name of the game. The project directory is the lower-cased name with whitespace replaced by hyphens; path separators are rejected"
                },
                "gameType": {
                    "type": "string",
                    "enum": types,
                    "description": "Type of game to create"
                },
                "teamId": {
                    "type": "string",
                    "description": "Linear team ID for project creation"
                },
                "projectPath": {
                    "type": "string",
                    "description": "Path where to create the game project"
                },
                "confirm": {
                    "type": "boolean",
                    "description": "Proceed to code generation once the Linear project exists (default true)"
                }
            },
            "required": ["gameName", "gameType", "teamId", "projectPath"]
        })
    }

    fn call(&self, args: serde_json::Value, ctx: &ToolContext) -> Result<serde_json::Value, String> {
        let game_name = args["gameName"]
            .as_str()
            .ok_or_else(|| "missing required argument: gameName".to_string())?;
        let game_type = args["gameType"]
            .as_str()
            .ok_or_else(|| "missing required argument: gameType".to_string())?;
        let team_id = args["teamId"]
            .as_str()
            .ok_or_else(|| "missing required argument: teamId".to_string())?;
        let project_path = args["projectPath"]
            .as_str()
            .ok_or_else(|| "missing required argument: projectPath".to_string())?;
        let confirm = args["confirm"].as_bool().unwrap_or(true);

        let request = CreationRequest::new(game_name, game_type, team_id, project_path)
            .map_err(|e| e.to_string())?;
        let result = ctx.create_project(&request, &PresetConfirm(confirm));
        let value = serde_json::to_value(&result).map_err(|e| e.to_string())?;

        match result {
            PipelineResult::Failed { .. } => Err(format!(
                "Error creating game project: {}",
                serde_json::to_string_pretty(&value).map_err(|e| e.to_string())?
            )),
            _ => Ok(value),
        }
    }
}
