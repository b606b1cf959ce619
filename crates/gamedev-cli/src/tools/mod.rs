use gamedev_core::config::Config;
use gamedev_core::io::{LocalFs, ProjectFs};
use gamedev_core::knowledge::{BuiltinKnowledge, KnowledgeBase, KnowledgeSource};
use gamedev_core::linear::LinearClient;
use gamedev_core::pipeline::{Confirm, CreationPipeline, CreationRequest, PipelineResult};
use gamedev_core::tracker::IssueTracker;
use std::sync::{Mutex, MutexGuard};

pub mod create_game_project;
pub mod get_game_templates;
pub mod update_game_knowledge;

pub type SharedTracker = Box<dyn IssueTracker + Send + Sync>;

/// Everything a tool call needs. Built once per process and shared across
/// calls; the knowledge base is the only mutable piece.
pub struct ToolContext {
    pub config: Config,
    knowledge: Mutex<KnowledgeBase>,
    knowledge_source: Box<dyn KnowledgeSource + Send + Sync>,
    /// `Err` carries the reason no tracker could be built (usually a
    /// missing API key); only the create tool needs one.
    tracker: Result<SharedTracker, String>,
    fs: Box<dyn ProjectFs + Send + Sync>,
}

impl ToolContext {
    pub fn new(
        config: Config,
        tracker: Result<SharedTracker, String>,
        fs: Box<dyn ProjectFs + Send + Sync>,
    ) -> Self {
        Self {
            config,
            knowledge: Mutex::new(KnowledgeBase::seeded(chrono::Utc::now())),
            knowledge_source: Box::new(BuiltinKnowledge),
            tracker,
            fs,
        }
    }

    /// Linear client from config, local disk for the generated project.
    pub fn from_config(config: Config) -> Self {
        let tracker = LinearClient::from_config(&config.tracker)
            .map(|c| Box::new(c) as SharedTracker)
            .map_err(|e| {
                tracing::warn!(error = %e, "issue tracker unavailable");
                e.to_string()
            });
        Self::new(config, tracker, Box::new(LocalFs))
    }

    pub fn knowledge(&self) -> MutexGuard<'_, KnowledgeBase> {
        self.knowledge
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn knowledge_source(&self) -> &dyn KnowledgeSource {
        &*self.knowledge_source
    }

    /// Run the full creation pipeline. Holds the knowledge lock for the
    /// whole run, so creation requests are handled one at a time.
    pub fn create_project(
        &self,
        request: &CreationRequest,
        confirm: &dyn Confirm,
    ) -> PipelineResult {
        let mut knowledge = self.knowledge();
        let mut pipeline = CreationPipeline {
            knowledge: &mut *knowledge,
            knowledge_source: self.knowledge_source(),
            topics: &self.config.knowledge.topics,
            tracker: self
                .tracker
                .as_ref()
                .map(|t| &**t as &dyn IssueTracker)
                .map_err(String::as_str),
            retry: self.config.retry.clone(),
            fs: &*self.fs,
            confirm,
        };
        pipeline.run(request, chrono::Utc::now())
    }
}

pub trait GameDevTool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn schema(&self) -> serde_json::Value;
    fn call(&self, args: serde_json::Value, ctx: &ToolContext) -> Result<serde_json::Value, String>;
}

pub fn all_tools() -> Vec<Box<dyn GameDevTool>> {
    vec![
        Box::new(create_game_project::CreateGameProjectTool),
        Box::new(update_game_knowledge::UpdateGameKnowledgeTool),
        Box::new(get_game_templates::GetGameTemplatesTool),
    ]
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use chrono::{DateTime, Utc};
    use gamedev_core::error::TrackerError;
    use gamedev_core::tracker::{CycleRef, IssueRef, NewIssue, ProjectRef};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Hands out sequential ids and never fails.
    #[derive(Default)]
    pub struct CountingTracker {
        next: AtomicUsize,
    }

    impl CountingTracker {
        fn id(&self, prefix: &str) -> String {
            format!("{prefix}-{}", self.next.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }

    impl IssueTracker for CountingTracker {
        fn create_project(
            &self,
            name: &str,
            _description: &str,
            _team_id: &str,
        ) -> Result<ProjectRef, TrackerError> {
            Ok(ProjectRef {
                id: self.id("project"),
                name: name.to_string(),
            })
        }

        fn create_cycle(
            &self,
            name: &str,
            _starts_at: DateTime<Utc>,
            _ends_at: DateTime<Utc>,
            _team_id: &str,
        ) -> Result<CycleRef, TrackerError> {
            Ok(CycleRef {
                id: self.id("cycle"),
                name: name.to_string(),
            })
        }

        fn create_issue(&self, issue: &NewIssue<'_>) -> Result<IssueRef, TrackerError> {
            Ok(IssueRef {
                id: self.id("issue"),
                identifier: None,
                cycle_id: issue.cycle_id.map(str::to_string),
            })
        }
    }

    pub fn context() -> ToolContext {
        let config = Config {
            retry: gamedev_core::config::RetryConfig::none(),
            ..Config::default()
        };
        ToolContext::new(
            config,
            Ok(Box::new(CountingTracker::default())),
            Box::new(LocalFs),
        )
    }

    pub fn context_without_tracker() -> ToolContext {
        ToolContext::new(
            Config::default(),
            Err("tracker API key not set: export LINEAR_API_KEY".to_string()),
            Box::new(LocalFs),
        )
    }
}
