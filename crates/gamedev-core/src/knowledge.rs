//! Game-development knowledge base.
//!
//! The knowledge base is a plain owned value: refreshing it produces a merged
//! replacement rather than mutating shared state behind the caller's back.
//! Callers that share one across requests (the MCP server) hold it behind a
//! mutex; `last_updated` only ever moves forward.

use crate::error::KnowledgeRefreshError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DOCUMENTATION_SOURCE: &str = "documentation";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub version: String,
    pub best_practices: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicUpdate {
    pub updated: DateTime<Utc>,
    pub source: String,
    pub improvements: Vec<String>,
}

/// Per-topic result of one refresh, keyed by topic.
pub type KnowledgeUpdate = BTreeMap<String, TopicUpdate>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub last_updated: DateTime<Utc>,
    pub technologies: BTreeMap<String, Technology>,
    pub game_patterns: BTreeMap<String, Vec<String>>,
    /// Latest update seen for each topic.
    #[serde(default)]
    pub topics: BTreeMap<String, TopicUpdate>,
}

// ---------------------------------------------------------------------------
// KnowledgeSource
// ---------------------------------------------------------------------------

/// Where topic improvements come from.
pub trait KnowledgeSource {
    fn name(&self) -> &str;

    fn improvements(&self, topic: &str) -> Result<Vec<String>, KnowledgeRefreshError>;
}

/// Built-in improvement notes, used when no documentation service is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinKnowledge;

impl KnowledgeSource for BuiltinKnowledge {
    fn name(&self) -> &str {
        DOCUMENTATION_SOURCE
    }

    fn improvements(&self, topic: &str) -> Result<Vec<String>, KnowledgeRefreshError> {
        let notes: &[&str] = match topic {
            "react-three-fiber" => &[
                "New hooks for performance optimization",
                "Better TypeScript support",
                "Improved React 18 concurrent features",
            ],
            "game-design" => &[
                "Mobile-first approach is now standard",
                "Focus on accessibility",
                "Progressive web app features",
            ],
            "performance" => &[
                "WebGPU support emerging",
                "Better mobile GPU optimization",
                "Improved asset streaming",
            ],
            _ => &["General improvements"],
        };
        Ok(notes.iter().map(|s| s.to_string()).collect())
    }
}

// ---------------------------------------------------------------------------
// KnowledgeBase
// ---------------------------------------------------------------------------

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn technology(best_practices: &[&str]) -> Technology {
    Technology {
        version: "latest".to_string(),
        best_practices: strings(best_practices),
    }
}

impl KnowledgeBase {
    /// The seed content every process starts from.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let mut technologies = BTreeMap::new();
        technologies.insert(
            "react-three-fiber".to_string(),
            technology(&[
                "Use useFrame for animations",
                "Implement proper disposal of geometries and materials",
                "Use instances for repeated objects",
                "Optimize with LOD (Level of Detail)",
                "Use React.memo for performance",
            ]),
        );
        technologies.insert(
            "rapier".to_string(),
            technology(&[
                "Use fixed timestep for physics",
                "Implement collision groups for optimization",
                "Use continuous collision detection for fast objects",
                "Properly configure mass and friction",
                "Use convex hulls for complex shapes",
            ]),
        );
        technologies.insert(
            "gsap".to_string(),
            technology(&[
                "Use timeline for complex animations",
                "Kill animations on unmount",
                "Use gsap.context() for cleanup",
                "Optimize with will-change CSS",
                "Use RAF (requestAnimationFrame) sync",
            ]),
        );

        let mut game_patterns = BTreeMap::new();
        game_patterns.insert(
            "mobileFirst".to_string(),
            strings(&[
                "Touch controls as primary input",
                "Viewport meta tag configuration",
                "Performance budgets for mobile",
                "Progressive enhancement",
                "Offline capability with PWA",
            ]),
        );
        game_patterns.insert(
            "performance".to_string(),
            strings(&[
                "Texture atlasing",
                "Object pooling",
                "Frustum culling",
                "Draw call batching",
                "Asset lazy loading",
            ]),
        );

        Self {
            last_updated: now,
            technologies,
            game_patterns,
            topics: BTreeMap::new(),
        }
    }

    /// Compute the refreshed knowledge base for `topics` without touching
    /// `self`. Fails on the first blank topic or source error.
    pub fn refreshed(
        &self,
        source: &dyn KnowledgeSource,
        topics: &[String],
        now: DateTime<Utc>,
    ) -> Result<(KnowledgeBase, KnowledgeUpdate), KnowledgeRefreshError> {
        let mut update = KnowledgeUpdate::new();
        for topic in topics {
            let topic = topic.trim();
            if topic.is_empty() {
                return Err(KnowledgeRefreshError::InvalidTopic(topic.to_string()));
            }
            let improvements = source.improvements(topic)?;
            update.insert(
                topic.to_string(),
                TopicUpdate {
                    updated: now,
                    source: source.name().to_string(),
                    improvements,
                },
            );
        }

        let mut next = self.clone();
        next.topics
            .extend(update.iter().map(|(k, v)| (k.clone(), v.clone())));
        next.last_updated = self.last_updated.max(now);
        Ok((next, update))
    }

    /// Replace `self` with the merged update. On error `self` is unchanged.
    pub fn refresh(
        &mut self,
        source: &dyn KnowledgeSource,
        topics: &[String],
        now: DateTime<Utc>,
    ) -> Result<KnowledgeUpdate, KnowledgeRefreshError> {
        let (next, update) = self.refreshed(source, topics, now)?;
        *self = next;
        Ok(update)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
