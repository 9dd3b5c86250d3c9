//! Suspense GUI - a single-screen interactive-fiction prototype.
//!
//! Branching dialogue rendered with egui beside a decorative Bevy 3D
//! backdrop. It features:
//! - A scrolling log of visited story beats
//! - One button per choice on the current scene
//! - A placeholder 3D city layout (spinning slabs, ground plane, lights)
//! - Keyboard shortcuts for choices and session reset

mod scene;
mod state;
mod ui;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use std::sync::Arc;
use suspense_core::{script, Session, StoryGraph};

use crate::state::AppState;

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "悬疑·互动小说 Demo".into(),
                resolution: (1280., 800.).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        // Startup systems
        .add_systems(Startup, (setup_session, scene::setup_scene))
        // Update systems - UI
        .add_systems(Update, (ui::main_ui_system, ui::handle_keyboard_input))
        // Update systems - decorative animation and status upkeep
        .add_systems(Update, (scene::spin_slabs, state::clear_old_status))
        .run();
}

/// Create the session resource: an externally authored story when
/// `SUSPENSE_STORY` points at one, the built-in script otherwise.
fn setup_session(mut commands: Commands) {
    commands.insert_resource(AppState::new(load_session()));
}

fn load_session() -> Session {
    if let Ok(path) = std::env::var("SUSPENSE_STORY") {
        match StoryGraph::load(&path).and_then(|graph| Session::new(Arc::new(graph))) {
            Ok(session) => {
                info!("loaded story from {path} ({} scenes)", session.graph().len());
                return session;
            }
            Err(e) => {
                warn!("failed to load story from {path}: {e}; using the built-in script");
            }
        }
    }

    script::demo_story()
        .and_then(|graph| Session::new(Arc::new(graph)))
        .expect("built-in demo script must validate")
}
