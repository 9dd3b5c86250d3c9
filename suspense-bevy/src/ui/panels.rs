//! Main UI panels: story log, current scene, and choice buttons.

use bevy_egui::egui;

use crate::state::AppState;

const GOLD: egui::Color32 = egui::Color32::from_rgb(218, 165, 32);

/// Render the top bar with title, current scene key, and reset control.
pub fn render_top_bar(ctx: &egui::Context, app_state: &mut AppState, time: f64) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(egui::RichText::new("悬疑·互动小说").color(GOLD));

            ui.separator();

            ui.label(format!("当前场景：{}", app_state.session.current_key()));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.spacing_mut().item_spacing.x = 6.0;

                if ui
                    .button("重新开始")
                    .on_hover_text("清空日志，回到开场 (Ctrl+R)")
                    .clicked()
                {
                    app_state.restart(time);
                }

                ui.add_space(10.0);

                if let Some(error) = app_state.error_message.clone() {
                    egui::Frame::none()
                        .fill(egui::Color32::from_rgba_unmultiplied(180, 40, 40, 40))
                        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
                        .rounding(egui::Rounding::same(3.0))
                        .show(ui, |ui| {
                            if ui.small_button("×").clicked() {
                                app_state.error_message = None;
                            }
                            ui.label(
                                egui::RichText::new(error)
                                    .color(egui::Color32::from_rgb(255, 120, 120))
                                    .strong(),
                            );
                        });
                } else if let Some(ref status) = app_state.status_message {
                    egui::Frame::none()
                        .fill(egui::Color32::from_rgba_unmultiplied(218, 165, 32, 40))
                        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
                        .rounding(egui::Rounding::same(3.0))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(status)
                                    .color(egui::Color32::from_rgb(255, 215, 0))
                                    .strong(),
                            );
                        });
                }
            });
        });
    });
}

/// Render the right-hand story panel: visit log, then the current scene
/// and one button per choice, in declared order.
pub fn render_story_panel(ctx: &egui::Context, app_state: &mut AppState) {
    egui::SidePanel::right("story_panel")
        .min_width(360.0)
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("剧情日志");
            ui.add_space(4.0);

            // Leave room below the log for the current scene block
            let log_height = (ui.available_height() - 220.0).max(120.0);
            egui::ScrollArea::vertical()
                .max_height(log_height)
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in app_state.session.log() {
                        egui::Frame::none()
                            .fill(egui::Color32::from_rgb(11, 22, 48))
                            .inner_margin(egui::Margin::same(6.0))
                            .rounding(egui::Rounding::same(4.0))
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new(&entry.key)
                                        .small()
                                        .color(egui::Color32::GRAY),
                                );
                                ui.label(&entry.text);
                            });
                        ui.add_space(4.0);
                    }
                });

            ui.separator();

            let current = app_state.session.current_node().map(|node| node.clone());
            match current {
                Ok(node) => {
                    ui.label(
                        egui::RichText::new(&node.key)
                            .small()
                            .color(egui::Color32::GRAY),
                    );
                    ui.add_space(2.0);
                    ui.label(&node.text);
                    ui.add_space(8.0);

                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
                        for (index, choice) in node.choices.iter().enumerate() {
                            if ui
                                .button(&choice.label)
                                .on_hover_text(format!("快捷键 {}", index + 1))
                                .clicked()
                            {
                                app_state.choose(&choice.target_key);
                            }
                        }
                    });
                }
                Err(e) => {
                    // Only reachable with a malformed externally loaded story
                    ui.colored_label(egui::Color32::RED, e.to_string());
                }
            }

            ui.add_space(8.0);
        });
}

/// Render the bottom bar with the demo captions.
pub fn render_footer(ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("悬疑·互动小说 Demo — 3D 背景占位（可扩展）")
                    .small()
                    .color(egui::Color32::GRAY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new("提示：数字键选择分支，Ctrl+R 重新开始")
                        .small()
                        .color(egui::Color32::GRAY),
                );
            });
        });
    });
}
