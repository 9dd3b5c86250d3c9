//! Session - the primary public API for a single play-through.
//!
//! A session tracks the player's current position in the story graph and
//! an append-only log of every scene entered. The renderer consumes three
//! calls: `current_node`, `log`, and `choose`.

use crate::story::{SceneNode, StoryError, StoryGraph};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One visited scene: the key and the text that was shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub key: String,
    pub text: String,
}

/// One play-through: current position plus visit history.
///
/// The log grows by exactly one entry per scene entered, with no
/// deduplication: entering the same scene twice in a row appends two
/// identical entries. The narrative "restart" choice on ending scenes is
/// an ordinary transition back to the start key and does not clear the
/// log; [`Session::reset`] does.
pub struct Session {
    graph: Arc<StoryGraph>,
    current_key: String,
    log: Vec<LogEntry>,
}

impl Session {
    /// Start a new play-through at the graph's designated start key.
    ///
    /// The start scene counts as entered: a fresh session's log already
    /// holds one entry.
    pub fn new(graph: Arc<StoryGraph>) -> Result<Self, StoryError> {
        let start_key = graph.start_key().to_string();
        let mut session = Self {
            graph,
            current_key: String::new(),
            log: Vec::new(),
        };
        session.enter(&start_key)?;
        Ok(session)
    }

    /// Transition to `key` unconditionally and log the visit.
    ///
    /// No validation against the previous scene's declared choices: the
    /// UI only ever offers declared edges, but any key in the graph is
    /// accepted. Fails with `NotFound` for keys outside the graph, in
    /// which case neither the position nor the log changes.
    pub fn enter(&mut self, key: &str) -> Result<(), StoryError> {
        let text = self.graph.lookup(key)?.text.clone();
        self.current_key = key.to_string();
        self.log.push(LogEntry {
            key: key.to_string(),
            text,
        });
        Ok(())
    }

    /// The choice operation exposed to the presentation layer.
    pub fn choose(&mut self, target_key: &str) -> Result<(), StoryError> {
        self.enter(target_key)
    }

    /// Clear the visit log and return to the start key, as for a fresh
    /// session.
    pub fn reset(&mut self) -> Result<(), StoryError> {
        let start_key = self.graph.start_key().to_string();
        self.log.clear();
        self.enter(&start_key)
    }

    /// Key of the scene the player is currently in.
    pub fn current_key(&self) -> &str {
        &self.current_key
    }

    /// The scene the player is currently in.
    pub fn current_node(&self) -> Result<&SceneNode, StoryError> {
        self.graph.lookup(&self.current_key)
    }

    /// Every scene entered this session, oldest first.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// The story graph this session traverses.
    pub fn graph(&self) -> &StoryGraph {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::{Choice, SceneNode};

    fn loop_graph() -> Arc<StoryGraph> {
        let scenes = vec![
            SceneNode {
                key: "start".to_string(),
                text: "An empty street.".to_string(),
                choices: vec![Choice::new("Go inside", "hall")],
            },
            SceneNode {
                key: "hall".to_string(),
                text: "A dim hall.".to_string(),
                choices: vec![
                    Choice::new("Look around", "hall"),
                    Choice::new("Leave", "start"),
                ],
            },
        ];
        Arc::new(StoryGraph::new("start", scenes).unwrap())
    }

    #[test]
    fn fresh_session_has_logged_the_start_scene() {
        let session = Session::new(loop_graph()).unwrap();
        assert_eq!(session.current_key(), "start");
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.log()[0].text, "An empty street.");
    }

    #[test]
    fn each_choice_appends_one_log_entry() {
        let mut session = Session::new(loop_graph()).unwrap();
        session.choose("hall").unwrap();
        session.choose("start").unwrap();
        session.choose("hall").unwrap();
        assert_eq!(session.log().len(), 4);
        assert_eq!(session.current_key(), "hall");
    }

    #[test]
    fn repeated_entry_is_not_deduplicated() {
        let mut session = Session::new(loop_graph()).unwrap();
        session.choose("hall").unwrap();
        session.choose("hall").unwrap();
        assert_eq!(session.log().len(), 3);
        assert_eq!(session.log()[1], session.log()[2]);
    }

    #[test]
    fn unknown_key_leaves_session_untouched() {
        let mut session = Session::new(loop_graph()).unwrap();
        let err = session.choose("attic").unwrap_err();
        assert!(matches!(err, StoryError::NotFound { ref key } if key == "attic"));
        assert_eq!(session.current_key(), "start");
        assert_eq!(session.log().len(), 1);
    }

    #[test]
    fn reset_clears_the_log_and_returns_to_start() {
        let mut session = Session::new(loop_graph()).unwrap();
        session.choose("hall").unwrap();
        session.choose("start").unwrap();
        session.reset().unwrap();
        assert_eq!(session.current_key(), "start");
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.current_node().unwrap().text, "An empty street.");
    }
}
