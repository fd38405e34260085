/*
 * Application Module
 *
 * This module defines the windowed host for the animation. nannou's
 * frame loop is the scheduler: update runs one simulation tick per
 * frame (unit timestep, no wall-clock scaling) and view redraws the
 * scene from the current dot and connection state.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::config::Config;
use crate::debug::FrameStats;
use crate::renderer;
use crate::rng::source_for_seed;
use crate::sim::Simulation;
use crate::ui;

// Main model for the application
pub struct Model {
    pub config: Config,
    pub sim: Simulation,
    pub egui: Egui,
    pub stats: FrameStats,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config = Config::default();

    // The window is the canvas; its size comes straight from the config
    let window_id = app
        .new_window()
        .title("Dot Field")
        .size(config.width as u32, config.height as u32)
        .view(view)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    // The seed decides once which random source gets injected
    let mut rng = source_for_seed(config.random_seed);
    let mut sim = Simulation::new(&config, rng.as_mut()).expect("default configuration must validate");
    sim.start();

    Model {
        config,
        sim,
        egui,
        stats: FrameStats::default(),
    }
}

// Update the model: UI first, then one simulation tick
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.stats.fps = app.fps();
    model.stats.frame_time = update.since_last;

    let (should_reset_dots, respawn_needed) =
        ui::update_ui(&mut model.egui, &mut model.config, &model.stats);

    // Handle reset outside of the UI closure
    if should_reset_dots || respawn_needed {
        let mut rng = source_for_seed(model.config.random_seed);
        if let Err(err) = model.sim.respawn(&model.config, rng.as_mut()) {
            // Slider ranges keep the config valid; if something slips
            // through anyway, keep the old dots and report it
            eprintln!("respawn rejected: {}", err);
        }
    }

    if !model.config.pause_simulation && model.sim.tick(&model.config) {
        model.stats.ticks += 1;
    }
    model.stats.connection_count = model.sim.connections().len();
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    renderer::draw_scene(&draw, &model.sim, &model.config);

    if model.config.show_stats {
        ui::draw_stats(&draw, &model.stats, app.window_rect(), model.sim.dots().len());
    }

    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI on top
    model.egui.draw_to_frame(&frame).unwrap();
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
