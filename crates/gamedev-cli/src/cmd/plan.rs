use crate::output::{print_json, print_table};
use gamedev_core::plan::plan_with_sprints;
use gamedev_core::sprint::SPRINT_NAMES;
use gamedev_core::types::GameKind;

/// Dry run: the task list a `create` would send, with sprint assignment.
pub fn run(game_type: &str, json: bool) -> anyhow::Result<()> {
    let kind = GameKind::from(game_type);
    if kind.known().is_none() {
        tracing::warn!(game_type, "unknown game type, only common tasks apply");
    }
    let planned = plan_with_sprints(&kind);

    if json {
        return print_json(&serde_json::json!({
            "game_type": kind,
            "sprints": SPRINT_NAMES,
            "tasks": planned,
        }));
    }

    let rows = planned
        .iter()
        .map(|p| {
            vec![
                (p.position + 1).to_string(),
                p.sprint_index
                    .and_then(|i| SPRINT_NAMES.get(i))
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                p.task.priority.to_string(),
                p.task.title.clone(),
            ]
        })
        .collect();
    print_table(&["#", "SPRINT", "PRIORITY", "TITLE"], rows);
    Ok(())
}
