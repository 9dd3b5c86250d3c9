//! Story graph and session state for a branching interactive-fiction
//! prototype.
//!
//! This crate provides:
//! - An immutable, key-indexed story graph (scene text + outgoing choices)
//! - Eager validation that every choice targets an existing scene
//! - A per-play-through session with an append-only visit log
//! - JSON loading for externally authored stories
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use suspense_core::{script, Session};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let graph = Arc::new(script::demo_story()?);
//!     let mut session = Session::new(graph)?;
//!
//!     println!("{}", session.current_node()?.text);
//!     session.choose("lobby")?;
//!     assert_eq!(session.log().len(), 2);
//!     Ok(())
//! }
//! ```

pub mod script;
pub mod session;
pub mod story;

// Primary public API
pub use session::{LogEntry, Session};
pub use story::{Choice, SceneNode, StoryError, StoryGraph};
