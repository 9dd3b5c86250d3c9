//! UI module - egui-based interface panels.

mod panels;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::state::AppState;

/// Main UI system - renders all egui panels.
pub fn main_ui_system(
    mut contexts: EguiContexts,
    mut app_state: ResMut<AppState>,
    time: Res<Time>,
    mut style_applied: Local<bool>,
) {
    let ctx = contexts.ctx_mut();

    // One-time style and font setup
    if !*style_applied {
        configure_style(ctx);
        install_cjk_font(ctx);
        *style_applied = true;
    }

    panels::render_top_bar(ctx, &mut app_state, time.elapsed_secs_f64());
    panels::render_footer(ctx);
    panels::render_story_panel(ctx, &mut app_state);
}

/// Configure the egui style.
fn configure_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    // Increase default font sizes
    use egui::{FontId, TextStyle};
    style.text_styles = [
        (TextStyle::Small, FontId::proportional(14.0)),
        (TextStyle::Body, FontId::proportional(16.0)),
        (TextStyle::Monospace, FontId::monospace(15.0)),
        (TextStyle::Button, FontId::proportional(16.0)),
        (TextStyle::Heading, FontId::proportional(22.0)),
    ]
    .into();

    ctx.set_style(style);
}

/// The story text is Chinese and egui's bundled fonts carry no CJK
/// glyphs; install the first system font that does.
fn install_cjk_font(ctx: &egui::Context) {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
        "/System/Library/Fonts/PingFang.ttc",
        "C:/Windows/Fonts/msyh.ttc",
    ];

    for path in CANDIDATES {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };

        let mut fonts = egui::FontDefinitions::default();
        fonts
            .font_data
            .insert("cjk".to_owned(), egui::FontData::from_owned(bytes));
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts
                .families
                .entry(family)
                .or_default()
                .push("cjk".to_owned());
        }
        ctx.set_fonts(fonts);
        return;
    }

    warn!("no CJK font found on this system; story text may not render");
}

/// Keyboard shortcuts: digits pick the matching choice, Ctrl+R resets
/// the session, Ctrl+Q quits.
pub fn handle_keyboard_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut app_state: ResMut<AppState>,
    mut contexts: EguiContexts,
    time: Res<Time>,
) {
    let ctx = contexts.ctx_mut();

    // Ctrl+Q / Cmd+Q to quit (works anywhere)
    let ctrl_pressed = keys.pressed(KeyCode::ControlLeft)
        || keys.pressed(KeyCode::ControlRight)
        || keys.pressed(KeyCode::SuperLeft)
        || keys.pressed(KeyCode::SuperRight);

    if ctrl_pressed && keys.just_pressed(KeyCode::KeyQ) {
        std::process::exit(0);
    }

    if ctrl_pressed && keys.just_pressed(KeyCode::KeyR) {
        app_state.restart(time.elapsed_secs_f64());
        return;
    }

    // Don't handle choice shortcuts if egui wants keyboard input
    if ctx.wants_keyboard_input() {
        return;
    }

    const DIGITS: [KeyCode; 9] = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
    ];

    for (index, key) in DIGITS.iter().enumerate() {
        if keys.just_pressed(*key) {
            let target = app_state
                .session
                .current_node()
                .ok()
                .and_then(|node| node.choices.get(index))
                .map(|choice| choice.target_key.clone());
            if let Some(target) = target {
                app_state.choose(&target);
            }
            return;
        }
    }
}
