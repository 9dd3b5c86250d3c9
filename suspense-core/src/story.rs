//! Story graph types: scenes, choices, and the key-indexed table.
//!
//! The graph is built once, validated eagerly, and never mutated
//! afterwards. Cycles are expected: ending scenes route back to the
//! start key, so the graph has no true terminal state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors from story graph construction and lookup.
#[derive(Debug, Error)]
pub enum StoryError {
    #[error("no scene named {key:?} in the story graph")]
    NotFound { key: String },

    #[error("choice {label:?} on scene {node:?} targets unknown scene {target:?}")]
    DanglingChoice {
        node: String,
        label: String,
        target: String,
    },

    #[error("start key {key:?} names no scene")]
    MissingStart { key: String },

    #[error("scene key {key:?} is defined more than once")]
    DuplicateKey { key: String },

    #[error("scene {node:?} has no choices")]
    EmptyChoices { node: String },

    #[error("story parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A labeled directed edge from one scene to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    /// Button text shown to the player.
    pub label: String,
    /// Key of the scene this choice transitions to.
    pub target_key: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, target_key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target_key: target_key.into(),
        }
    }
}

/// A unit of narrative text plus its outgoing choices.
///
/// Ending scenes are ordinary nodes whose sole choice routes back to the
/// start key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    /// Unique key identifying this scene.
    pub key: String,
    /// Narrative text shown when the scene is entered.
    pub text: String,
    /// Outgoing choices, in presentation order.
    pub choices: Vec<Choice>,
}

/// On-disk story document: a start key plus the full scene list, with
/// camelCase field names.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoryDoc {
    start_key: String,
    scenes: Vec<SceneNode>,
}

/// The full set of scenes and choice edges, indexed by scene key.
///
/// Immutable after construction: no insertion or removal is exposed, and
/// `new` rejects any graph with a dangling edge, a duplicate key, a
/// choiceless scene, or a missing start scene.
#[derive(Debug, Clone)]
pub struct StoryGraph {
    start_key: String,
    nodes: HashMap<String, SceneNode>,
}

impl StoryGraph {
    /// Build and validate a graph from a start key and scene list.
    pub fn new(
        start_key: impl Into<String>,
        scenes: Vec<SceneNode>,
    ) -> Result<Self, StoryError> {
        let start_key = start_key.into();

        let mut nodes = HashMap::with_capacity(scenes.len());
        for scene in scenes {
            if nodes.contains_key(&scene.key) {
                return Err(StoryError::DuplicateKey { key: scene.key });
            }
            nodes.insert(scene.key.clone(), scene);
        }

        let graph = Self { start_key, nodes };
        graph.validate()?;
        Ok(graph)
    }

    /// Parse a story document from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, StoryError> {
        let doc: StoryDoc = serde_json::from_str(json)?;
        Self::new(doc.start_key, doc.scenes)
    }

    /// Load and validate a story document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoryError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Closure check: the start key and every choice target must name an
    /// existing scene, and every scene must have at least one way out.
    fn validate(&self) -> Result<(), StoryError> {
        if !self.nodes.contains_key(&self.start_key) {
            return Err(StoryError::MissingStart {
                key: self.start_key.clone(),
            });
        }

        for node in self.nodes.values() {
            if node.choices.is_empty() {
                return Err(StoryError::EmptyChoices {
                    node: node.key.clone(),
                });
            }
            for choice in &node.choices {
                if !self.nodes.contains_key(&choice.target_key) {
                    return Err(StoryError::DanglingChoice {
                        node: node.key.clone(),
                        label: choice.label.clone(),
                        target: choice.target_key.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Look up a scene by key.
    ///
    /// Fails with `NotFound` for keys outside the graph. Keys taken from
    /// a validated graph's own choices always resolve.
    pub fn lookup(&self, key: &str) -> Result<&SceneNode, StoryError> {
        self.nodes.get(key).ok_or_else(|| StoryError::NotFound {
            key: key.to_string(),
        })
    }

    /// The designated start key.
    pub fn start_key(&self) -> &str {
        &self.start_key
    }

    /// Number of scenes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all scene keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }
}
