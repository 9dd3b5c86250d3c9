//! Application state: the live play-through plus transient UI state.

use bevy::prelude::*;
use suspense_core::Session;

/// Main application state resource.
#[derive(Resource)]
pub struct AppState {
    /// The active play-through.
    pub session: Session,
    /// Status bar message.
    pub status_message: Option<String>,
    /// When the status message was set (for auto-clear).
    pub status_set_time: Option<f64>,
    /// Error message to display.
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            status_message: None,
            status_set_time: None,
            error_message: None,
        }
    }

    /// Follow a choice edge. A failed lookup means the loaded story is
    /// malformed; it surfaces in the UI instead of panicking.
    pub fn choose(&mut self, target_key: &str) {
        match self.session.choose(target_key) {
            Ok(()) => self.error_message = None,
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    /// Start a fresh play-through: clears the log and returns to start.
    pub fn restart(&mut self, current_time: f64) {
        match self.session.reset() {
            Ok(()) => {
                self.error_message = None;
                self.set_status("已重新开始", current_time);
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    /// Set a status message (with timestamp for auto-clear).
    pub fn set_status(&mut self, message: impl Into<String>, current_time: f64) {
        self.status_message = Some(message.into());
        self.status_set_time = Some(current_time);
    }

    /// Clear status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_set_time = None;
    }
}

/// System to clear old status messages after 3 seconds.
pub fn clear_old_status(mut app_state: ResMut<AppState>, time: Res<Time>) {
    if let Some(set_time) = app_state.status_set_time {
        let elapsed = time.elapsed_secs_f64() - set_time;
        if elapsed > 3.0 {
            app_state.clear_status();
        }
    }
}
