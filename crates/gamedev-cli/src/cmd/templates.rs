use crate::output::{print_json, print_table};
use gamedev_core::catalog;
use gamedev_core::types::GameKind;

pub fn run(game_type: Option<&str>, json: bool) -> anyhow::Result<()> {
    match game_type {
        Some(t) => show(&GameKind::from(t), json),
        None => list(json),
    }
}

fn list(json: bool) -> anyhow::Result<()> {
    let templates = catalog::available_templates();
    if json {
        return print_json(&templates);
    }

    let rows = templates
        .iter()
        .map(|(game_type, info)| {
            vec![
                game_type.to_string(),
                info.name.to_string(),
                info.difficulty.to_string(),
                info.features.join(", "),
            ]
        })
        .collect();
    print_table(&["TYPE", "NAME", "DIFFICULTY", "FEATURES"], rows);
    Ok(())
}

fn show(kind: &GameKind, json: bool) -> anyhow::Result<()> {
    if kind.known().is_none() {
        tracing::warn!(game_type = %kind, "unknown game type, showing arcade structure");
    }
    let template = catalog::game_template(kind);
    if json {
        return print_json(&template);
    }

    println!("Type:       {}", template.game_type);
    println!("Components: {}", template.structure.components.join(", "));
    println!("Hooks:      {}", template.structure.hooks.join(", "));
    println!("Assets:     {}", template.structure.assets.join(", "));
    Ok(())
}
