/*
 * UI Module
 *
 * This module contains functions for creating and updating the user
 * interface using nannou_egui. It provides controls for adjusting
 * animation parameters at runtime; spawn-relevant changes are detected
 * through the Config snapshot machinery and reported to the caller so
 * the dot set can be rebuilt.
 */

use nannou_egui::{egui, Egui};

use crate::config::Config;
use crate::debug::FrameStats;

// Update the UI and return whether the dots should be reset and whether a
// spawn-relevant parameter changed
pub fn update_ui(egui: &mut Egui, config: &mut Config, stats: &FrameStats) -> (bool, bool) {
    let mut should_reset_dots = false;

    // Take a snapshot of current parameter values for change detection
    config.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Animation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Dots", |ui| {
                ui.add(egui::Slider::new(&mut config.num_dots, Config::get_num_dots_range()).text("Number of Dots"));
                ui.add(egui::Slider::new(&mut config.dot_radius, Config::get_dot_radius_range()).text("Dot Radius"));
                ui.add(egui::Slider::new(&mut config.max_speed, Config::get_speed_range()).text("Max Speed"));
                ui.add(egui::Slider::new(&mut config.random_seed, Config::get_seed_range()).text("Random Seed (0 = random)"));

                if ui.button("Reset Dots").clicked() {
                    should_reset_dots = true;
                }
            });

            ui.collapsing("Connections", |ui| {
                ui.checkbox(&mut config.connections, "Draw Connections");
                ui.add(egui::Slider::new(&mut config.connection_threshold, Config::get_threshold_range()).text("Distance Threshold"));
                ui.add(egui::Slider::new(&mut config.max_connections_per_dot, Config::get_max_connections_range()).text("Max per Dot (0 = unlimited)"));
            });

            ui.collapsing("Physics", |ui| {
                ui.checkbox(&mut config.animate, "Animate");
                ui.checkbox(&mut config.dot_collision, "Dot Collisions");
                ui.add(egui::Slider::new(&mut config.friction, Config::get_friction_range()).text("Friction"));
                ui.add(egui::Slider::new(&mut config.acceleration, Config::get_acceleration_range()).text("Acceleration (0 = off)"));
            });

            ui.separator();

            ui.label(format!("FPS: {:.1}", stats.fps));
            ui.label(format!("Frame time: {:.2} ms", stats.frame_time.as_secs_f64() * 1000.0));
            ui.label(format!("Connections: {}", stats.connection_count));

            ui.checkbox(&mut config.show_stats, "Show Stats Overlay");
            ui.checkbox(&mut config.pause_simulation, "Pause Animation");
        });

    // Detect spawn-relevant parameter changes
    let respawn_needed = config.detect_changes();

    (should_reset_dots, respawn_needed)
}

// Draw the stats overlay in the top-left corner of the window
pub fn draw_stats(
    draw: &nannou::Draw,
    stats: &FrameStats,
    window_rect: nannou::geom::Rect,
    num_dots: usize,
) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let panel_height = line_height * 4.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin + 60.0;
    let text_y = window_rect.top() - margin;

    let stat_texts = [
        format!("FPS: {:.1}", stats.fps),
        format!("Frame time: {:.2} ms", stats.frame_time.as_secs_f64() * 1000.0),
        format!("Dots: {}", num_dots),
        format!("Connections: {}", stats.connection_count),
    ];

    for (i, text) in stat_texts.iter().enumerate() {
        draw.text(text)
            .x_y(text_x, text_y - i as f32 * line_height)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
