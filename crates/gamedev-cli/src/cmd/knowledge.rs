use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use gamedev_core::config::Config;
use gamedev_core::knowledge::{BuiltinKnowledge, KnowledgeBase};
use std::path::Path;

#[derive(Subcommand)]
pub enum KnowledgeSubcommand {
    /// Refresh the given topics (default: the configured topics)
    Update { topics: Vec<String> },

    /// Print the knowledge base
    Show,
}

pub fn run(config_path: Option<&Path>, subcmd: KnowledgeSubcommand, json: bool) -> anyhow::Result<()> {
    let now = chrono::Utc::now();
    let mut knowledge = KnowledgeBase::seeded(now);

    match subcmd {
        KnowledgeSubcommand::Update { topics } => {
            let topics = if topics.is_empty() {
                Config::load_from(config_path)
                    .context("failed to load config")?
                    .knowledge
                    .topics
            } else {
                topics
            };
            let update = knowledge
                .refresh(&BuiltinKnowledge, &topics, now)
                .context("knowledge update failed")?;

            if json {
                print_json(&update)?;
            } else {
                println!("Knowledge updated for topics: {}", topics.join(", "));
                for (topic, entry) in &update {
                    println!("\n{topic} ({})", entry.source);
                    for item in &entry.improvements {
                        println!("  - {item}");
                    }
                }
            }
        }

        KnowledgeSubcommand::Show => {
            if json {
                print_json(&knowledge)?;
            } else {
                println!("Last updated: {}", knowledge.last_updated.to_rfc3339());
                println!("\nTechnologies:");
                for (name, tech) in &knowledge.technologies {
                    println!("  {name} ({})", tech.version);
                    for practice in &tech.best_practices {
                        println!("    - {practice}");
                    }
                }
                println!("\nGame patterns:");
                for (name, patterns) in &knowledge.game_patterns {
                    println!("  {name}");
                    for p in patterns {
                        println!("    - {p}");
                    }
                }
            }
        }
    }
    Ok(())
}
