/*
 * Renderer Module
 *
 * This module draws the animation with nannou: the canvas border, the
 * connection lines (faded by distance), and the dots on top. Engine
 * coordinates have their origin at the top-left of the canvas with y
 * pointing down; nannou windows are centered with y pointing up, so
 * every position goes through one small transform.
 */

use nannou::prelude::*;

use crate::config::Config;
use crate::sim::Simulation;

// Convert canvas coordinates to nannou's centered screen space
fn to_screen(x: f64, y: f64, config: &Config) -> Point2 {
    pt2(
        (x - config.width / 2.0) as f32,
        (config.height / 2.0 - y) as f32,
    )
}

/// Draw the whole scene for the current frame.
pub fn draw_scene(draw: &Draw, sim: &Simulation, config: &Config) {
    draw.background().color(BLACK);

    // Connection lines sit behind the dots
    if config.connections {
        let c = config.connection_color;
        for conn in sim.connections() {
            let a = &sim.dots()[conn.a];
            let b = &sim.dots()[conn.b];
            draw.line()
                .start(to_screen(a.x, a.y, config))
                .end(to_screen(b.x, b.y, config))
                .weight(config.connection_width)
                .color(rgba(
                    c.red as f32 / 255.0,
                    c.green as f32 / 255.0,
                    c.blue as f32 / 255.0,
                    conn.opacity(config) as f32,
                ));
        }
    }

    // Canvas border
    draw.rect()
        .x_y(0.0, 0.0)
        .w_h(config.width as f32, config.height as f32)
        .no_fill()
        .stroke_weight(config.border_width)
        .stroke(config.border_color);

    // Dots
    for dot in sim.dots() {
        draw.ellipse()
            .xy(to_screen(dot.x, dot.y, config))
            .radius(config.dot_radius as f32)
            .color(config.dot_color);
    }
}
