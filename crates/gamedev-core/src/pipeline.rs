//! End-to-end creation pipeline.
//!
//! A single forward pass through
//! `Start -> KnowledgeRefreshed -> Structured -> Confirmed -> Assembled -> Done`.
//! Knowledge refresh failures are logged and skipped. Tracker and template
//! failures end the run with a `failed` result; a declined confirmation ends
//! it with `cancelled`. The pipeline never undoes side effects of earlier
//! stages.

use crate::config::RetryConfig;
use crate::error::{GameDevError, Result};
use crate::io::ProjectFs;
use crate::knowledge::{KnowledgeBase, KnowledgeSource};
use crate::template::TemplateEngine;
use crate::tracker::{IssueTracker, TrackerProject, TrackerStructuringService};
use crate::types::GameKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEV_SERVER_URL: &str = "http://localhost:5173";

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreationRequest {
    pub game_name: String,
    pub game_type: GameKind,
    pub team_id: String,
    pub project_path: PathBuf,
}

impl CreationRequest {
    pub fn new(
        game_name: impl Into<String>,
        game_type: impl Into<GameKind>,
        team_id: impl Into<String>,
        project_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let game_name = game_name.into();
        let team_id = team_id.into();
        if game_name.trim().is_empty() {
            return Err(GameDevError::InvalidRequest(
                "game name must not be blank".to_string(),
            ));
        }
        if game_name.contains(['/', '\\']) || matches!(game_name.trim(), "." | "..") {
            return Err(GameDevError::InvalidRequest(format!(
                "game name {game_name:?} must not contain a path separator or be a relative directory"
            )));
        }
        if team_id.trim().is_empty() {
            return Err(GameDevError::InvalidRequest(
                "team id must not be empty".to_string(),
            ));
        }
        Ok(Self {
            game_name,
            game_type: game_type.into(),
            team_id,
            project_path: project_path.into(),
        })
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    KnowledgeRefresh,
    TrackerStructuring,
    ConfirmationGate,
    TemplateAssembly,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::KnowledgeRefresh => "knowledge refresh",
            Stage::TrackerStructuring => "tracker structuring",
            Stage::ConfirmationGate => "confirmation gate",
            Stage::TemplateAssembly => "template assembly",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PipelineResult {
    Success {
        message: String,
        tracker_project: TrackerProject,
        project_path: PathBuf,
        setup_instructions: String,
        next_steps: Vec<String>,
    },
    Cancelled {
        message: String,
        tracker_project: TrackerProject,
    },
    Failed {
        stage: Stage,
        error: String,
        /// Present when the tracker side already completed.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tracker_project: Option<TrackerProject>,
    },
}

impl PipelineResult {
    pub fn status(&self) -> &'static str {
        match self {
            PipelineResult::Success { .. } => "success",
            PipelineResult::Cancelled { .. } => "cancelled",
            PipelineResult::Failed { .. } => "failed",
        }
    }

    pub fn tracker_project(&self) -> Option<&TrackerProject> {
        match self {
            PipelineResult::Success { tracker_project, .. }
            | PipelineResult::Cancelled { tracker_project, .. } => Some(tracker_project),
            PipelineResult::Failed { tracker_project, .. } => tracker_project.as_ref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Confirm
// ---------------------------------------------------------------------------

/// Human confirmation gate. Blocks until a decision is made.
pub trait Confirm {
    fn confirm(&self, summary: &str) -> std::io::Result<bool>;
}

/// Answers every prompt with a fixed decision.
#[derive(Debug, Clone, Copy)]
pub struct PresetConfirm(pub bool);

impl Confirm for PresetConfirm {
    fn confirm(&self, _summary: &str) -> std::io::Result<bool> {
        Ok(self.0)
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

enum PipelineState {
    Start,
    KnowledgeRefreshed,
    Structured(TrackerProject),
    Confirmed(TrackerProject),
    Assembled(TrackerProject, PathBuf),
    Done(PipelineResult),
}

pub struct CreationPipeline<'a> {
    pub knowledge: &'a mut KnowledgeBase,
    pub knowledge_source: &'a dyn KnowledgeSource,
    pub topics: &'a [String],
    /// `Err` carries the reason no tracker client could be built. The run
    /// then fails at the tracker structuring stage.
    pub tracker: std::result::Result<&'a dyn IssueTracker, &'a str>,
    pub retry: RetryConfig,
    pub fs: &'a dyn ProjectFs,
    pub confirm: &'a dyn Confirm,
}

impl CreationPipeline<'_> {
    pub fn run(&mut self, request: &CreationRequest, now: DateTime<Utc>) -> PipelineResult {
        tracing::info!(
            game = %request.game_name,
            game_type = %request.game_type,
            team = %request.team_id,
            "creating game project"
        );
        let mut state = PipelineState::Start;
        loop {
            state = match self.step(state, request, now) {
                PipelineState::Done(result) => {
                    tracing::info!(status = result.status(), "pipeline finished");
                    return result;
                }
                next => next,
            };
        }
    }

    fn step(
        &mut self,
        state: PipelineState,
        request: &CreationRequest,
        now: DateTime<Utc>,
    ) -> PipelineState {
        match state {
            PipelineState::Start => {
                match self.knowledge.refresh(self.knowledge_source, self.topics, now) {
                    Ok(update) => tracing::info!(topics = update.len(), "knowledge base updated"),
                    Err(e) => tracing::warn!(error = %e, "knowledge refresh failed, continuing"),
                }
                PipelineState::KnowledgeRefreshed
            }

            PipelineState::KnowledgeRefreshed => {
                let tracker = match self.tracker {
                    Ok(tracker) => tracker,
                    Err(reason) => {
                        tracing::error!(error = reason, "issue tracker unavailable");
                        return PipelineState::Done(PipelineResult::Failed {
                            stage: Stage::TrackerStructuring,
                            error: reason.to_string(),
                            tracker_project: None,
                        });
                    }
                };
                let service = TrackerStructuringService::new(tracker)
                    .with_retry(self.retry.clone());
                match service.create_game_development_structure(
                    &request.team_id,
                    &request.game_name,
                    &request.game_type,
                    now,
                ) {
                    Ok(project) => PipelineState::Structured(project),
                    Err(e) => {
                        tracing::error!(error = %e, "tracker structuring failed");
                        PipelineState::Done(PipelineResult::Failed {
                            stage: Stage::TrackerStructuring,
                            error: e.to_string(),
                            tracker_project: None,
                        })
                    }
                }
            }

            PipelineState::Structured(project) => {
                let proceed = match self.confirm.confirm(&project.summary()) {
                    Ok(answer) => answer,
                    Err(e) => {
                        tracing::warn!(error = %e, "confirmation unavailable, treating as declined");
                        false
                    }
                };
                if proceed {
                    PipelineState::Confirmed(project)
                } else {
                    tracing::info!(project = %project.project.id, "creation cancelled at confirmation");
                    PipelineState::Done(PipelineResult::Cancelled {
                        message: "Project creation cancelled by user".to_string(),
                        tracker_project: project,
                    })
                }
            }

            PipelineState::Confirmed(project) => {
                let engine = TemplateEngine::new(self.fs);
                match engine.generate_template(
                    &request.game_type,
                    &request.game_name,
                    &request.project_path,
                ) {
                    Ok(path) => PipelineState::Assembled(project, path),
                    Err(e) => {
                        tracing::error!(error = %e, "template assembly failed");
                        PipelineState::Done(PipelineResult::Failed {
                            stage: Stage::TemplateAssembly,
                            error: e.to_string(),
                            tracker_project: Some(project),
                        })
                    }
                }
            }

            PipelineState::Assembled(project, path) => PipelineState::Done(PipelineResult::Success {
                message: "Game project created successfully!".to_string(),
                setup_instructions: setup_instructions(&request.game_name, &path),
                next_steps: next_steps(&path),
                tracker_project: project,
                project_path: path,
            }),

            done @ PipelineState::Done(_) => done,
        }
    }
}

pub fn next_steps(project_path: &Path) -> Vec<String> {
    vec![
        format!("cd {}", project_path.display()),
        "npm install".to_string(),
        "npm run dev".to_string(),
    ]
}

pub fn setup_instructions(game_name: &str, project_path: &Path) -> String {
    let location = project_path.display();
    format!(
        r#"Game Project Setup Complete!

Project Details:
- Name: {game_name}
- Location: {location}

Next Steps:

1. Navigate to your project:
   $ cd {location}

2. Install dependencies:
   $ npm install

3. Start development server:
   $ npm run dev

4. Open your browser:
   Navigate to {DEV_SERVER_URL}

Development Tips:
- The game follows mobile-first design principles
- All screens (Start, Game, Game Over) are pre-configured
- Confetti celebration is integrated on game completion
- Physics are powered by Rapier
- 3D graphics use React Three Fiber

Linear Integration:
- Your project board is ready in Linear
- Tasks are organized into 3 sprints
- Each task has acceptance criteria and test cases
- Update task status as you complete them
"#
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KnowledgeRefreshError;
    use crate::io::LocalFs;
    use crate::knowledge::BuiltinKnowledge;
    use crate::tracker::testing::FakeTracker;
    use crate::types::GameType;
    use chrono::TimeZone;
    use std::cell::{Cell, RefCell};
    use tempfile::TempDir;

    struct DownSource;

    impl KnowledgeSource for DownSource {
        fn name(&self) -> &str {
            "docs"
        }

        fn improvements(&self, topic: &str) -> std::result::Result<Vec<String>, KnowledgeRefreshError> {
            Err(KnowledgeRefreshError::Source {
                source_name: "docs".to_string(),
                topic: topic.to_string(),
                reason: "timeout".to_string(),
            })
        }
    }

    /// Records the summary it was shown.
    struct SpyConfirm {
        answer: std::io::Result<bool>,
        seen: RefCell<Option<String>>,
    }

    impl SpyConfirm {
        fn answering(answer: bool) -> Self {
            Self {
                answer: Ok(answer),
                seen: RefCell::new(None),
            }
        }
    }

    impl Confirm for SpyConfirm {
        fn confirm(&self, summary: &str) -> std::io::Result<bool> {
            *self.seen.borrow_mut() = Some(summary.to_string());
            match &self.answer {
                Ok(b) => Ok(*b),
                Err(e) => Err(std::io::Error::new(e.kind(), e.to_string())),
            }
        }
    }

    /// Counts every call and fails all of them.
    #[derive(Default)]
    struct BrokenFs {
        calls: Cell<usize>,
    }

    impl ProjectFs for BrokenFs {
        fn ensure_dir(&self, _path: &Path) -> std::io::Result<()> {
            self.calls.set(self.calls.get() + 1);
            Err(std::io::Error::other("disk full"))
        }

        fn write_file(&self, _path: &Path, _content: &str) -> std::io::Result<()> {
            self.calls.set(self.calls.get() + 1);
            Err(std::io::Error::other("disk full"))
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 15, 9, 0, 0).unwrap()
    }

    fn topics() -> Vec<String> {
        vec![
            "react-three-fiber".to_string(),
            "game-design".to_string(),
            "performance".to_string(),
        ]
    }

    fn request(dir: &Path, game_type: impl Into<GameKind>) -> CreationRequest {
        CreationRequest::new("Space Invaders 3D", game_type, "T1", dir).unwrap()
    }

    #[test]
    fn request_rejects_names_that_leave_project_path() {
        for name in ["../escape", "a/b", "a\\b", "..", "."] {
            let err = CreationRequest::new(name, GameType::Arcade, "T1", "/tmp").unwrap_err();
            assert!(matches!(err, GameDevError::InvalidRequest(_)), "{name}");
        }
        assert!(CreationRequest::new("Pong 2.0", GameType::Arcade, "T1", "/tmp").is_ok());
    }

    #[test]
    fn end_to_end_success() {
        let dir = TempDir::new().unwrap();
        let tracker = FakeTracker::default();
        let confirm = SpyConfirm::answering(true);
        let mut kb = KnowledgeBase::seeded(now());
        let topics = topics();
        let mut pipeline = CreationPipeline {
            knowledge: &mut kb,
            knowledge_source: &BuiltinKnowledge,
            topics: &topics,
            tracker: Ok(&tracker),
            retry: RetryConfig::none(),
            fs: &LocalFs,
            confirm: &confirm,
        };

        let result = pipeline.run(&request(dir.path(), GameType::Arcade), now());
        let PipelineResult::Success {
            tracker_project,
            project_path,
            next_steps,
            setup_instructions,
            ..
        } = result
        else {
            panic!("expected success, got {result:?}");
        };

        assert_eq!(tracker_project.issues.len(), 7);
        let ids: Vec<&str> = tracker_project.sprints.iter().map(|s| s.id.as_str()).collect();
        let bound: Vec<&str> = tracker_project
            .issues
            .iter()
            .filter_map(|i| i.cycle_id.as_deref())
            .collect();
        assert_eq!(bound, [ids[0], ids[0], ids[0], ids[1], ids[1], ids[1], ids[2]]);

        assert_eq!(project_path, dir.path().join("space-invaders-3d"));
        assert!(project_path.join("src/App.tsx").is_file());
        assert_eq!(
            next_steps,
            vec![
                format!("cd {}", project_path.display()),
                "npm install".to_string(),
                "npm run dev".to_string(),
            ]
        );
        assert!(setup_instructions.contains(DEV_SERVER_URL));

        let summary = confirm.seen.borrow().clone().unwrap();
        assert!(summary.contains("Total Tasks: 7"));
        assert_eq!(kb.topics.len(), 3);
    }

    #[test]
    fn decline_short_circuits_template_assembly() {
        let dir = TempDir::new().unwrap();
        let tracker = FakeTracker::default();
        let fs = BrokenFs::default();
        let mut kb = KnowledgeBase::seeded(now());
        let topics = topics();
        let mut pipeline = CreationPipeline {
            knowledge: &mut kb,
            knowledge_source: &BuiltinKnowledge,
            topics: &topics,
            tracker: Ok(&tracker),
            retry: RetryConfig::none(),
            fs: &fs,
            confirm: &PresetConfirm(false),
        };

        let result = pipeline.run(&request(dir.path(), GameType::Arcade), now());
        assert_eq!(result.status(), "cancelled");
        assert_eq!(result.tracker_project().unwrap().issues.len(), 7);
        assert_eq!(fs.calls.get(), 0);
    }

    #[test]
    fn confirm_error_counts_as_decline() {
        let dir = TempDir::new().unwrap();
        let tracker = FakeTracker::default();
        let confirm = SpyConfirm {
            answer: Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed")),
            seen: RefCell::new(None),
        };
        let mut kb = KnowledgeBase::seeded(now());
        let mut pipeline = CreationPipeline {
            knowledge: &mut kb,
            knowledge_source: &BuiltinKnowledge,
            topics: &[],
            tracker: Ok(&tracker),
            retry: RetryConfig::none(),
            fs: &LocalFs,
            confirm: &confirm,
        };

        let result = pipeline.run(&request(dir.path(), GameType::Arcade), now());
        assert_eq!(result.status(), "cancelled");
        assert!(!dir.path().join("space-invaders-3d").exists());
    }

    #[test]
    fn knowledge_failure_does_not_block_success() {
        let dir = TempDir::new().unwrap();
        let tracker = FakeTracker::default();
        let mut kb = KnowledgeBase::seeded(now());
        let before = kb.clone();
        let topics = topics();
        let mut pipeline = CreationPipeline {
            knowledge: &mut kb,
            knowledge_source: &DownSource,
            topics: &topics,
            tracker: Ok(&tracker),
            retry: RetryConfig::none(),
            fs: &LocalFs,
            confirm: &PresetConfirm(true),
        };

        let result = pipeline.run(&request(dir.path(), GameType::Puzzle), now());
        assert_eq!(result.status(), "success");
        assert_eq!(kb, before);
    }

    #[test]
    fn knowledge_failure_does_not_block_cancellation() {
        let dir = TempDir::new().unwrap();
        let tracker = FakeTracker::default();
        let mut kb = KnowledgeBase::seeded(now());
        let topics = topics();
        let mut pipeline = CreationPipeline {
            knowledge: &mut kb,
            knowledge_source: &DownSource,
            topics: &topics,
            tracker: Ok(&tracker),
            retry: RetryConfig::none(),
            fs: &LocalFs,
            confirm: &PresetConfirm(false),
        };
        let result = pipeline.run(&request(dir.path(), GameType::Puzzle), now());
        assert_eq!(result.status(), "cancelled");
    }

    #[test]
    fn tracker_failure_stops_before_confirmation() {
        let dir = TempDir::new().unwrap();
        let tracker = FakeTracker::failing_on(2);
        let confirm = SpyConfirm::answering(true);
        let mut kb = KnowledgeBase::seeded(now());
        let mut pipeline = CreationPipeline {
            knowledge: &mut kb,
            knowledge_source: &BuiltinKnowledge,
            topics: &[],
            tracker: Ok(&tracker),
            retry: RetryConfig::none(),
            fs: &LocalFs,
            confirm: &confirm,
        };

        let result = pipeline.run(&request(dir.path(), GameType::Arcade), now());
        match result {
            PipelineResult::Failed {
                stage,
                ref error,
                ref tracker_project,
            } => {
                assert_eq!(stage, Stage::TrackerStructuring);
                assert!(error.contains("Sprint 1: Foundation & Setup"));
                assert!(tracker_project.is_none());
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(confirm.seen.borrow().is_none());
        assert!(!dir.path().join("space-invaders-3d").exists());
    }

    #[test]
    fn missing_tracker_fails_after_knowledge_refresh() {
        let dir = TempDir::new().unwrap();
        let confirm = SpyConfirm::answering(true);
        let mut kb = KnowledgeBase::seeded(now());
        let topics = topics();
        let mut pipeline = CreationPipeline {
            knowledge: &mut kb,
            knowledge_source: &BuiltinKnowledge,
            topics: &topics,
            tracker: Err("tracker API key not set: export LINEAR_API_KEY"),
            retry: RetryConfig::none(),
            fs: &LocalFs,
            confirm: &confirm,
        };

        let result = pipeline.run(&request(dir.path(), GameType::Arcade), now());
        match result {
            PipelineResult::Failed {
                stage,
                ref error,
                ref tracker_project,
            } => {
                assert_eq!(stage, Stage::TrackerStructuring);
                assert!(error.contains("LINEAR_API_KEY"));
                assert!(tracker_project.is_none());
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(kb.topics.len(), 3);
        assert!(confirm.seen.borrow().is_none());
        assert!(!dir.path().join("space-invaders-3d").exists());
    }

    #[test]
    fn template_failure_keeps_tracker_project() {
        let dir = TempDir::new().unwrap();
        let tracker = FakeTracker::default();
        let fs = BrokenFs::default();
        let mut kb = KnowledgeBase::seeded(now());
        let mut pipeline = CreationPipeline {
            knowledge: &mut kb,
            knowledge_source: &BuiltinKnowledge,
            topics: &[],
            tracker: Ok(&tracker),
            retry: RetryConfig::none(),
            fs: &fs,
            confirm: &PresetConfirm(true),
        };

        let result = pipeline.run(&request(dir.path(), GameType::Arcade), now());
        match result {
            PipelineResult::Failed {
                stage,
                ref error,
                ref tracker_project,
            } => {
                assert_eq!(stage, Stage::TemplateAssembly);
                assert!(error.contains("disk full"));
                assert_eq!(tracker_project.as_ref().unwrap().issues.len(), 7);
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(fs.calls.get(), 1);
    }

    #[test]
    fn unknown_game_type_uses_fallbacks() {
        let dir = TempDir::new().unwrap();
        let tracker = FakeTracker::default();
        let mut kb = KnowledgeBase::seeded(now());
        let mut pipeline = CreationPipeline {
            knowledge: &mut kb,
            knowledge_source: &BuiltinKnowledge,
            topics: &[],
            tracker: Ok(&tracker),
            retry: RetryConfig::none(),
            fs: &LocalFs,
            confirm: &PresetConfirm(true),
        };

        let result = pipeline.run(&request(dir.path(), "racing"), now());
        assert_eq!(result.status(), "success");
        assert_eq!(result.tracker_project().unwrap().issues.len(), 5);
        let screen = std::fs::read_to_string(
            dir.path().join("space-invaders-3d/src/screens/GameScreen.tsx"),
        )
        .unwrap();
        assert_eq!(screen, crate::catalog::bundle(GameType::Arcade).play_screen);
    }

    #[test]
    fn result_serializes_with_status_tag() {
        let result = PipelineResult::Failed {
            stage: Stage::TrackerStructuring,
            error: "boom".to_string(),
            tracker_project: None,
        };
        let v = serde_json::to_value(&result).unwrap();
        assert_eq!(v["status"], "failed");
        assert_eq!(v["stage"], "tracker_structuring");
        assert!(v.get("tracker_project").is_none());
    }

    #[test]
    fn request_validation() {
        assert!(CreationRequest::new("  ", GameType::Arcade, "T1", "/tmp").is_err());
        assert!(CreationRequest::new("Pong", GameType::Arcade, "", "/tmp").is_err());
        let req = CreationRequest::new("Pong", "endless-runner", "T1", "/tmp").unwrap();
        assert_eq!(req.game_type, GameKind::Known(GameType::EndlessRunner));
    }
}
