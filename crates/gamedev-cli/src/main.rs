mod cmd;
mod output;
mod prompt;
mod tools;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, knowledge::KnowledgeSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gamedev",
    about = "Create game projects: a Linear sprint plan plus a React Three Fiber starter",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: ~/.gamedev/config.yaml)
    #[arg(long, global = true, env = "GAMEDEV_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the Linear project and, after confirmation, the starter codebase
    Create {
        /// Game name (also used for the project directory)
        #[arg(long)]
        name: String,

        /// Game type: platformer, puzzle, endless-runner, physics-based, arcade
        #[arg(long = "type", value_name = "TYPE")]
        game_type: String,

        /// Linear team id
        #[arg(long)]
        team: String,

        /// Directory the project is created in
        #[arg(long, default_value = ".")]
        path: PathBuf,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List the available game templates, or show one template's structure
    Templates {
        #[arg(long = "type", value_name = "TYPE")]
        game_type: Option<String>,
    },

    /// Show the task plan and sprint assignment for a game type (no remote calls)
    Plan {
        #[arg(long = "type", value_name = "TYPE")]
        game_type: String,
    },

    /// Refresh or inspect the knowledge base
    Knowledge {
        #[command(subcommand)]
        subcommand: KnowledgeSubcommand,
    },

    /// Inspect and validate configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Run as an MCP stdio server
    Mcp,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Mcp => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    // stdout carries command output and the MCP channel
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Create {
            name,
            game_type,
            team,
            path,
            yes,
        } => cmd::create::run(
            config_path,
            cmd::create::CreateArgs {
                name,
                game_type,
                team,
                path,
                yes,
            },
            cli.json,
        ),
        Commands::Templates { game_type } => cmd::templates::run(game_type.as_deref(), cli.json),
        Commands::Plan { game_type } => cmd::plan::run(&game_type, cli.json),
        Commands::Knowledge { subcommand } => cmd::knowledge::run(config_path, subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(config_path, subcommand, cli.json),
        Commands::Mcp => cmd::mcp::run(config_path),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
