//! Static registry of game templates.
//!
//! Every [`GameType`] maps to exactly one [`TemplateBundle`]. Requests for a
//! kind outside the catalog resolve to the arcade bundle through
//! [`bundle_for`]; only the task plan treats unknown kinds differently (it
//! gets no type-specific tasks, see [`type_specific_tasks`]).

pub mod screens;
pub mod tasks;

use crate::types::{Difficulty, GameKind, GameType};
use serde::Serialize;
use std::collections::BTreeMap;

/// Kind used whenever a request names a game type the catalog doesn't know.
pub const FALLBACK_GAME_TYPE: GameType = GameType::Arcade;

/// Hook name used when a request names an unknown game type.
pub const FALLBACK_INPUT_HOOK: &str = "useGameControls";

// ---------------------------------------------------------------------------
// TaskSpec
// ---------------------------------------------------------------------------

/// A work item as declared in the catalog, before it becomes a
/// [`crate::plan::TaskItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSpec {
    pub title: &'static str,
    pub description: &'static str,
    pub priority: u8,
}

// ---------------------------------------------------------------------------
// TemplateBundle
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct TemplateBundle {
    pub game_type: GameType,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub difficulty: Difficulty,
    /// Planned component architecture for the game type.
    pub components: &'static [&'static str],
    /// Planned hooks for the game type.
    pub hooks: &'static [&'static str],
    pub assets: &'static [&'static str],
    /// Component stubs written by the template engine.
    pub scaffold_components: &'static [&'static str],
    /// The single input hook written by the template engine.
    pub input_hook: &'static str,
    pub play_screen: &'static str,
    pub tasks: &'static [TaskSpec],
}

static PLATFORMER: TemplateBundle = TemplateBundle {
    game_type: GameType::Platformer,
    name: "Platformer Game",
    description: "Side-scrolling platform game with physics",
    features: &["Jump mechanics", "Platform collision", "Collectibles", "Enemies"],
    difficulty: Difficulty::Intermediate,
    components: &["Player", "Platform", "Enemy", "Collectible"],
    hooks: &["usePlayerMovement", "useCollisions", "useScore"],
    assets: &["textures/player.png", "textures/platform.png"],
    scaffold_components: &["Player", "Platform", "Collectible"],
    input_hook: "useGameControls",
    play_screen: screens::PLATFORMER,
    tasks: tasks::PLATFORMER,
};

static PUZZLE: TemplateBundle = TemplateBundle {
    game_type: GameType::Puzzle,
    name: "Puzzle Game",
    description: "Grid-based puzzle game with matching mechanics",
    features: &["Grid system", "Match detection", "Score system", "Combos"],
    difficulty: Difficulty::Beginner,
    components: &["Grid", "Piece", "Timer", "ScoreBoard"],
    hooks: &["usePuzzleState", "useTimer", "useMoves"],
    assets: &["textures/pieces.png", "sounds/match.mp3"],
    scaffold_components: &["PuzzleGrid", "PuzzlePiece", "ScoreDisplay"],
    input_hook: "usePuzzleLogic",
    play_screen: screens::PUZZLE,
    tasks: tasks::PUZZLE,
};

static ENDLESS_RUNNER: TemplateBundle = TemplateBundle {
    game_type: GameType::EndlessRunner,
    name: "Endless Runner",
    description: "Infinite running game with obstacles",
    features: &["Auto-run", "Obstacle generation", "Score tracking", "Power-ups"],
    difficulty: Difficulty::Beginner,
    components: &["Runner", "Obstacle", "PowerUp", "Background"],
    hooks: &["useSpeed", "useObstacles", "useScore"],
    assets: &["models/runner.glb", "textures/road.jpg"],
    scaffold_components: &["Runner", "Obstacle", "PowerUp"],
    input_hook: "useRunnerControls",
    play_screen: screens::ENDLESS_RUNNER,
    tasks: tasks::ENDLESS_RUNNER,
};

static PHYSICS_BASED: TemplateBundle = TemplateBundle {
    game_type: GameType::PhysicsBased,
    name: "Physics Puzzle",
    description: "Physics-based puzzle or sandbox game",
    features: &["Realistic physics", "Object interaction", "Puzzle elements"],
    difficulty: Difficulty::Advanced,
    components: &["PhysicsObject", "Constraint", "Force", "Trigger"],
    hooks: &["usePhysics", "useInteractions", "useConstraints"],
    assets: &["textures/wood.jpg", "textures/metal.jpg"],
    scaffold_components: &["PhysicsObject", "Launcher", "Target"],
    input_hook: "usePhysicsInteraction",
    play_screen: screens::PHYSICS_BASED,
    tasks: tasks::PHYSICS_BASED,
};

static ARCADE: TemplateBundle = TemplateBundle {
    game_type: GameType::Arcade,
    name: "Arcade Game",
    description: "Classic arcade-style game",
    features: &["Fast-paced action", "Score attack", "Power-ups", "Combos"],
    difficulty: Difficulty::Intermediate,
    components: &["Ship", "Enemy", "Bullet", "PowerUp"],
    hooks: &["useControls", "useProjectiles", "useEnemies"],
    assets: &["sprites/ship.png", "sounds/laser.mp3"],
    scaffold_components: &["PlayerShip", "Enemy", "Projectile"],
    input_hook: "useArcadeControls",
    play_screen: screens::ARCADE,
    tasks: tasks::ARCADE,
};

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn bundle(game_type: GameType) -> &'static TemplateBundle {
    match game_type {
        GameType::Platformer => &PLATFORMER,
        GameType::Puzzle => &PUZZLE,
        GameType::EndlessRunner => &ENDLESS_RUNNER,
        GameType::PhysicsBased => &PHYSICS_BASED,
        GameType::Arcade => &ARCADE,
    }
}

/// Bundle for a requested kind, with unknown kinds wired to the arcade bundle.
pub fn bundle_for(kind: &GameKind) -> &'static TemplateBundle {
    bundle(kind.known().unwrap_or(FALLBACK_GAME_TYPE))
}

/// Input hook for a requested kind. Unknown kinds get [`FALLBACK_INPUT_HOOK`],
/// not the arcade hook.
pub fn input_hook_for(kind: &GameKind) -> &'static str {
    match kind.known() {
        Some(t) => bundle(t).input_hook,
        None => FALLBACK_INPUT_HOOK,
    }
}

/// Type-specific tasks in catalog order; empty for unknown kinds.
pub fn type_specific_tasks(kind: &GameKind) -> &'static [TaskSpec] {
    match kind.known() {
        Some(t) => bundle(t).tasks,
        None => &[],
    }
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

/// Public catalog entry, as returned by `get_game_templates`.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub difficulty: Difficulty,
}

/// One entry per game type, keyed by wire name.
pub fn available_templates() -> BTreeMap<&'static str, TemplateInfo> {
    GameType::all()
        .iter()
        .map(|t| {
            let b = bundle(*t);
            (
                t.as_str(),
                TemplateInfo {
                    name: b.name,
                    description: b.description,
                    features: b.features,
                    difficulty: b.difficulty,
                },
            )
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateStructure {
    pub components: &'static [&'static str],
    pub hooks: &'static [&'static str],
    pub assets: &'static [&'static str],
}

/// Structural template configuration for a requested kind.
#[derive(Debug, Clone, Serialize)]
pub struct GameTemplate {
    #[serde(rename = "type")]
    pub game_type: GameKind,
    pub structure: TemplateStructure,
}

pub fn game_template(kind: &GameKind) -> GameTemplate {
    let b = bundle_for(kind);
    GameTemplate {
        game_type: kind.clone(),
        structure: TemplateStructure {
            components: b.components,
            hooks: b.hooks,
            assets: b.assets,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
