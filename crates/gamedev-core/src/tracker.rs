use crate::config::RetryConfig;
use crate::error::{TrackerCreationError, TrackerError};
use crate::plan::{self, TaskItem};
use crate::sprint::{self, Sprint};
use crate::types::GameKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// IssueTracker capability
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub cycle_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewIssue<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub team_id: &'a str,
    pub project_id: &'a str,
    pub cycle_id: Option<&'a str>,
    pub priority: u8,
    pub label_ids: &'a [String],
}

/// The external issue tracker. Every call is a single remote side effect and
/// may fail.
pub trait IssueTracker {
    fn create_project(
        &self,
        name: &str,
        description: &str,
        team_id: &str,
    ) -> Result<ProjectRef, TrackerError>;

    fn create_cycle(
        &self,
        name: &str,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        team_id: &str,
    ) -> Result<CycleRef, TrackerError>;

    fn create_issue(&self, issue: &NewIssue<'_>) -> Result<IssueRef, TrackerError>;
}

// ---------------------------------------------------------------------------
// TrackerProject
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedSprint {
    pub id: String,
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIssue {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub title: String,
    pub priority: u8,
    pub cycle_id: Option<String>,
}

/// Everything this run created in the tracker. Never retracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerProject {
    pub project: ProjectRef,
    pub sprints: Vec<CreatedSprint>,
    pub issues: Vec<CreatedIssue>,
}

impl TrackerProject {
    pub fn issues_in(&self, sprint_id: &str) -> usize {
        self.issues
            .iter()
            .filter(|i| i.cycle_id.as_deref() == Some(sprint_id))
            .count()
    }

    /// Every sprint has an id and every issue is bound to one of this
    /// project's sprints (or to none when there are no sprints).
    pub fn is_well_formed(&self) -> bool {
        if self.sprints.iter().any(|s| s.id.is_empty()) {
            return false;
        }
        self.issues.iter().all(|issue| match issue.cycle_id.as_deref() {
            Some(id) => self.sprints.iter().any(|s| s.id == id),
            None => self.sprints.is_empty(),
        })
    }

    /// Operator-facing summary shown at the confirmation gate.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Project Name: {}\nTotal Sprints: {}\nTotal Tasks: {}\n\nSprint Breakdown:\n",
            self.project.name,
            self.sprints.len(),
            self.issues.len()
        );
        for (i, sprint) in self.sprints.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} - {} tasks\n",
                i + 1,
                sprint.name,
                self.issues_in(&sprint.id)
            ));
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Structuring service
// ---------------------------------------------------------------------------

pub fn project_name(game_name: &str, game_type: &GameKind) -> String {
    format!("{game_name} - {game_type} Game")
}

pub fn project_description(game_name: &str, game_type: &GameKind) -> String {
    format!(
        r#"## {game_name}

### Overview
A {game_type} game built with React Three Fiber, featuring modern web technologies and best practices.

### Tech Stack
- React Three Fiber for 3D graphics
- Rapier for physics simulation
- GSAP for animations
- TypeScript for type safety
- Vite for fast development
- TailwindCSS for styling

### Game Features
- Mobile-first responsive design
- Desktop compatibility
- Start screen with game introduction
- Engaging gameplay mechanics
- Game over screen with score display and confetti celebration
- Play again functionality

### Development Approach
- Agile methodology with defined sprints
- Test-driven development with clear acceptance criteria
- Progressive enhancement for different devices
- Performance optimization for smooth gameplay

Game Type: {game_type}"#
    )
}

/// Materializes the work plan for one game in the tracker.
///
/// Calls go out one at a time: the project, then every sprint in order, then
/// every issue in task-list order. Issues are only created once all sprint
/// ids are known. A failure stops the run where it is; nothing already
/// created is deleted.
pub struct TrackerStructuringService<'a> {
    tracker: &'a dyn IssueTracker,
    retry: RetryConfig,
}

impl<'a> TrackerStructuringService<'a> {
    pub fn new(tracker: &'a dyn IssueTracker) -> Self {
        Self {
            tracker,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn create_game_development_structure(
        &self,
        team_id: &str,
        game_name: &str,
        game_type: &GameKind,
        now: DateTime<Utc>,
    ) -> Result<TrackerProject, TrackerCreationError> {
        let name = project_name(game_name, game_type);
        let description = project_description(game_name, game_type);

        tracing::info!(team = team_id, project = %name, "creating tracker project");
        let project = self
            .retrying("project", || {
                self.tracker.create_project(&name, &description, team_id)
            })
            .map_err(|source| TrackerCreationError::Project {
                name: name.clone(),
                source,
            })?;

        let sprints = self.create_sprints(team_id, &sprint::sprint_plan(now))?;
        let tasks = plan::generate_game_tasks(game_type);
        let issues = self.create_issues(team_id, &project, &sprints, &tasks)?;

        tracing::info!(
            project = %project.id,
            sprints = sprints.len(),
            issues = issues.len(),
            "tracker structure complete"
        );
        Ok(TrackerProject {
            project,
            sprints,
            issues,
        })
    }

    fn create_sprints(
        &self,
        team_id: &str,
        plan: &[Sprint],
    ) -> Result<Vec<CreatedSprint>, TrackerCreationError> {
        let mut created = Vec::with_capacity(plan.len());
        for sprint in plan {
            let cycle = self
                .retrying("sprint", || {
                    self.tracker
                        .create_cycle(&sprint.name, sprint.starts_at, sprint.ends_at, team_id)
                })
                .map_err(|source| TrackerCreationError::Sprint {
                    name: sprint.name.clone(),
                    source,
                })?;
            tracing::info!(sprint = %cycle.name, id = %cycle.id, "sprint created");
            created.push(CreatedSprint {
                id: cycle.id,
                name: cycle.name,
                starts_at: sprint.starts_at,
                ends_at: sprint.ends_at,
            });
        }
        Ok(created)
    }

    fn create_issues(
        &self,
        team_id: &str,
        project: &ProjectRef,
        sprints: &[CreatedSprint],
        tasks: &[TaskItem],
    ) -> Result<Vec<CreatedIssue>, TrackerCreationError> {
        let no_labels: Vec<String> = Vec::new();
        let mut created = Vec::with_capacity(tasks.len());
        for (position, task) in tasks.iter().enumerate() {
            let cycle_id = sprint::sprint_index(position, sprints.len())
                .map(|i| sprints[i].id.as_str());
            let request = NewIssue {
                title: &task.title,
                description: &task.description,
                team_id,
                project_id: &project.id,
                cycle_id,
                priority: task.priority,
                label_ids: &no_labels,
            };
            let issue = self
                .retrying("issue", || self.tracker.create_issue(&request))
                .map_err(|source| TrackerCreationError::Issue {
                    title: task.title.clone(),
                    source,
                })?;
            tracing::info!(position, issue = %issue.id, sprint = ?cycle_id, "issue created");
            created.push(CreatedIssue {
                id: issue.id,
                identifier: issue.identifier,
                title: task.title.clone(),
                priority: task.priority,
                cycle_id: issue.cycle_id.or_else(|| cycle_id.map(str::to_string)),
            });
        }
        Ok(created)
    }

    /// Run `op` up to `max_attempts` times, sleeping with exponential backoff
    /// between attempts. Every error is treated as retryable.
    fn retrying<T>(
        &self,
        what: &str,
        mut op: impl FnMut() -> Result<T, TrackerError>,
    ) -> Result<T, TrackerError> {
        let attempts = self.retry.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match op() {
                Ok(v) => return Ok(v),
                Err(e) if attempt < attempts => {
                    let delay = self.retry.backoff(attempt);
                    tracing::warn!(
                        call = what,
                        attempt,
                        max_attempts = attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "tracker call failed, retrying"
                    );
                    std::thread::sleep(delay);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod tests {
    use super::testing::FakeTracker;
    use super::*;
    use crate::types::GameType;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap()
    }

    fn arcade() -> GameKind {
        GameKind::Known(GameType::Arcade)
    }

    #[test]
    fn creates_project_then_sprints_then_issues() {
        let tracker = FakeTracker::default();
        let svc = TrackerStructuringService::new(&tracker).with_retry(RetryConfig::none());
        let project = svc
            .create_game_development_structure("T1", "Space Invaders 3D", &arcade(), now())
            .unwrap();

        let calls = tracker.calls.borrow();
        assert_eq!(calls.len(), 1 + 3 + 7);
        assert_eq!(calls[0], "project:Space Invaders 3D - arcade Game");
        assert!(calls[1..4].iter().all(|c| c.starts_with("cycle:")));
        assert!(calls[4..].iter().all(|c| c.starts_with("issue:")));
        assert_eq!(calls[4], "issue:Project Setup & Configuration");

        assert_eq!(project.project.name, "Space Invaders 3D - arcade Game");
        assert_eq!(project.sprints.len(), 3);
        assert_eq!(project.issues.len(), 7);
        assert!(project.is_well_formed());
    }

    #[test]
    fn issues_bound_to_bucketed_sprints() {
        let tracker = FakeTracker::default();
        let svc = TrackerStructuringService::new(&tracker).with_retry(RetryConfig::none());
        let project = svc
            .create_game_development_structure("T1", "Space Invaders 3D", &arcade(), now())
            .unwrap();

        let sprint_ids: Vec<&str> = project.sprints.iter().map(|s| s.id.as_str()).collect();
        let bound: Vec<&str> = project
            .issues
            .iter()
            .map(|i| i.cycle_id.as_deref().unwrap())
            .collect();
        assert_eq!(
            bound,
            vec![
                sprint_ids[0], sprint_ids[0], sprint_ids[0],
                sprint_ids[1], sprint_ids[1], sprint_ids[1],
                sprint_ids[2],
            ]
        );
        assert_eq!(project.issues_in(sprint_ids[2]), 1);
    }

    #[test]
    fn priorities_forwarded_to_tracker() {
        let tracker = FakeTracker::default();
        let svc = TrackerStructuringService::new(&tracker).with_retry(RetryConfig::none());
        svc.create_game_development_structure("T1", "Pong", &arcade(), now())
            .unwrap();
        let priorities: Vec<u8> = tracker.issues.borrow().iter().map(|i| i.2).collect();
        assert_eq!(priorities, vec![1, 2, 3, 2, 3, 1, 2]);
    }

    #[test]
    fn sprint_failure_stops_before_any_issue() {
        // call 1 = project, call 3 = second sprint
        let tracker = FakeTracker::failing_on(3);
        let svc = TrackerStructuringService::new(&tracker).with_retry(RetryConfig::none());
        let err = svc
            .create_game_development_structure("T1", "Pong", &arcade(), now())
            .unwrap_err();

        assert!(matches!(err, TrackerCreationError::Sprint { .. }));
        assert!(err.to_string().contains("Sprint 2: Core Gameplay"));
        assert!(tracker
            .calls
            .borrow()
            .iter()
            .all(|c| !c.starts_with("issue:")));
    }

    #[test]
    fn issue_failure_keeps_partial_state() {
        // project + 3 sprints + 2 issues, then the third issue fails
        let tracker = FakeTracker::failing_on(7);
        let svc = TrackerStructuringService::new(&tracker).with_retry(RetryConfig::none());
        let err = svc
            .create_game_development_structure("T1", "Pong", &arcade(), now())
            .unwrap_err();

        assert!(matches!(err, TrackerCreationError::Issue { ref title, .. } if title == "Implement Game Over Screen"));
        assert_eq!(tracker.issues.borrow().len(), 2);
    }

    #[test]
    fn project_failure_is_reported() {
        let tracker = FakeTracker::failing_on(1);
        let svc = TrackerStructuringService::new(&tracker).with_retry(RetryConfig::none());
        let err = svc
            .create_game_development_structure("T1", "Pong", &arcade(), now())
            .unwrap_err();
        assert!(matches!(err, TrackerCreationError::Project { .. }));
        assert_eq!(tracker.calls.borrow().len(), 1);
    }

    #[test]
    fn transient_failures_are_retried() {
        let tracker = FakeTracker::default();
        tracker.transient_failures.set(2);
        let retry = RetryConfig {
            max_attempts: 3,
            initial_backoff_ms: 0,
            backoff_multiplier: 2,
        };
        let svc = TrackerStructuringService::new(&tracker).with_retry(retry);
        let project = svc
            .create_game_development_structure("T1", "Pong", &arcade(), now())
            .unwrap();
        assert_eq!(project.issues.len(), 7);
    }

    #[test]
    fn retries_are_bounded() {
        let tracker = FakeTracker::default();
        tracker.transient_failures.set(5);
        let retry = RetryConfig {
            max_attempts: 2,
            initial_backoff_ms: 0,
            backoff_multiplier: 2,
        };
        let svc = TrackerStructuringService::new(&tracker).with_retry(retry);
        let err = svc
            .create_game_development_structure("T1", "Pong", &arcade(), now())
            .unwrap_err();
        assert!(matches!(err, TrackerCreationError::Project { .. }));
        assert_eq!(tracker.transient_failures.get(), 3);
    }

    #[test]
    fn unknown_game_type_creates_only_common_issues() {
        let tracker = FakeTracker::default();
        let svc = TrackerStructuringService::new(&tracker).with_retry(RetryConfig::none());
        let project = svc
            .create_game_development_structure("T1", "Kart", &GameKind::from("racing"), now())
            .unwrap();
        assert_eq!(project.issues.len(), 5);
        assert_eq!(project.project.name, "Kart - racing Game");
    }

    #[test]
    fn summary_lists_sprint_breakdown() {
        let tracker = FakeTracker::default();
        let svc = TrackerStructuringService::new(&tracker).with_retry(RetryConfig::none());
        let project = svc
            .create_game_development_structure("T1", "Pong", &arcade(), now())
            .unwrap();
        let summary = project.summary();
        assert!(summary.contains("Total Sprints: 3"));
        assert!(summary.contains("Total Tasks: 7"));
        assert!(summary.contains("1. Sprint 1: Foundation & Setup - 3 tasks"));
        assert!(summary.contains("3. Sprint 3: Polish & Optimization - 1 tasks"));
    }

    fn long_plan(len: usize) -> Vec<TaskItem> {
        (0..len)
            .map(|i| TaskItem {
                title: format!("Task {i}"),
                description: String::new(),
                priority: 2,
            })
            .collect()
    }

    fn project_ref() -> ProjectRef {
        ProjectRef {
            id: "p1".to_string(),
            name: "Pong - arcade Game".to_string(),
        }
    }

    #[test]
    fn overflow_issues_bind_to_last_sprint() {
        let tracker = FakeTracker::default();
        let svc = TrackerStructuringService::new(&tracker).with_retry(RetryConfig::none());
        let sprints = svc
            .create_sprints("T1", &sprint::sprint_plan(now()))
            .unwrap();
        let issues = svc
            .create_issues("T1", &project_ref(), &sprints, &long_plan(11))
            .unwrap();

        assert_eq!(issues.len(), 11);
        for issue in &issues[8..] {
            assert_eq!(issue.cycle_id.as_deref(), Some(sprints[2].id.as_str()));
        }
        let project = TrackerProject {
            project: project_ref(),
            sprints,
            issues,
        };
        assert!(project.is_well_formed());
        assert_eq!(project.issues_in(&project.sprints[2].id), 5);
    }

    #[test]
    fn no_sprints_leaves_issues_unbound() {
        let tracker = FakeTracker::default();
        let svc = TrackerStructuringService::new(&tracker).with_retry(RetryConfig::none());
        let issues = svc
            .create_issues("T1", &project_ref(), &[], &long_plan(4))
            .unwrap();

        assert!(issues.iter().all(|i| i.cycle_id.is_none()));
        assert!(tracker.issues.borrow().iter().all(|i| i.1.is_none()));
        let project = TrackerProject {
            project: project_ref(),
            sprints: Vec::new(),
            issues,
        };
        assert!(project.is_well_formed());
    }

    #[test]
    fn description_ends_with_game_type() {
        let d = project_description("Pong", &arcade());
        assert!(d.starts_with("## Pong"));
        assert!(d.ends_with("Game Type: arcade"));
    }
}
