use crate::output::print_json;
use crate::prompt::StdinConfirm;
use crate::tools::ToolContext;
use anyhow::Context;
use gamedev_core::config::Config;
use gamedev_core::pipeline::{Confirm, CreationRequest, PipelineResult, PresetConfirm};
use std::path::{Path, PathBuf};

pub struct CreateArgs {
    pub name: String,
    pub game_type: String,
    pub team: String,
    pub path: PathBuf,
    pub yes: bool,
}

pub fn run(config_path: Option<&Path>, args: CreateArgs, json: bool) -> anyhow::Result<()> {
    let config = Config::load_from(config_path).context("failed to load config")?;
    let request = CreationRequest::new(args.name, args.game_type.as_str(), args.team, args.path)?;

    let ctx = ToolContext::from_config(config);
    let confirm: &dyn Confirm = if args.yes {
        &PresetConfirm(true)
    } else {
        &StdinConfirm
    };

    eprintln!("Creating game project...");
    let result = ctx.create_project(&request, confirm);

    if json {
        print_json(&result)?;
    } else {
        print_human(&result);
    }

    if let PipelineResult::Failed { stage, error, .. } = &result {
        anyhow::bail!("{stage} failed: {error}");
    }
    Ok(())
}

fn print_human(result: &PipelineResult) {
    match result {
        PipelineResult::Success {
            message,
            tracker_project,
            setup_instructions,
            ..
        } => {
            println!("{message}");
            println!(
                "Project: {} ({} sprints, {} tasks)",
                tracker_project.project.name,
                tracker_project.sprints.len(),
                tracker_project.issues.len()
            );
            println!("{setup_instructions}");
        }
        PipelineResult::Cancelled {
            message,
            tracker_project,
        } => {
            println!("{message}");
            println!(
                "Linear project '{}' was kept ({} tasks).",
                tracker_project.project.name,
                tracker_project.issues.len()
            );
        }
        PipelineResult::Failed {
            tracker_project: Some(project),
            ..
        } => {
            println!(
                "Linear project '{}' was created before the failure and was kept.",
                project.project.name
            );
        }
        PipelineResult::Failed { .. } => {}
    }
}
