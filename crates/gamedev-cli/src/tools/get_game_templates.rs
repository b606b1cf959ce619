use super::{GameDevTool, ToolContext};
use gamedev_core::catalog;

pub struct GetGameTemplatesTool;

impl GameDevTool for GetGameTemplatesTool {
    fn name(&self) -> &str {
        "get_game_templates"
    }

    fn description(&self) -> &str {
        "Get available game templates"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    fn call(&self, _args: serde_json::Value, _ctx: &ToolContext) -> Result<serde_json::Value, String> {
        serde_json::to_value(catalog::available_templates()).map_err(|e| e.to_string())
    }
}
