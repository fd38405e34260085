/*
 * SVG Surface Module
 *
 * Retained implementation of the Surface contract. The scene mirrors
 * what the renderer draws (connection lines behind a border rectangle
 * and per-dot circles) and can be serialized as a standalone SVG
 * document, which is what the headless driver writes to disk.
 */

use nannou::prelude::*;

use crate::config::Config;
use crate::connections::Connection;
use crate::dot::Dot;
use crate::surface::{DotMarker, Surface};

struct SvgCircle {
    x: f64,
    y: f64,
    radius: f64,
    fill: String,
}

pub struct SvgSurface {
    width: f64,
    height: f64,
    border: Option<String>,
    circles: Vec<SvgCircle>,
    lines: Vec<String>,
}

impl SvgSurface {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.width,
            height: config.height,
            border: None,
            circles: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Serialize the scene. Lines come first so they sit behind the
    /// border and the dots.
    pub fn document(&self) -> String {
        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">",
            self.width, self.height
        );
        doc.push_str("<g>");
        for line in &self.lines {
            doc.push_str(line);
        }
        doc.push_str("</g>");
        if let Some(border) = &self.border {
            doc.push_str(border);
        }
        for circle in &self.circles {
            doc.push_str(&format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                circle.x, circle.y, circle.radius, circle.fill
            ));
        }
        doc.push_str("</svg>");
        doc
    }
}

fn hex_color(color: Rgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

impl Surface for SvgSurface {
    fn create_border(&mut self, config: &Config) {
        self.border = Some(format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            config.width,
            config.height,
            hex_color(config.border_color),
            config.border_width
        ));
    }

    fn create_dot(&mut self, x: f64, y: f64, config: &Config) -> DotMarker {
        self.circles.push(SvgCircle {
            x,
            y,
            radius: config.dot_radius,
            fill: hex_color(config.dot_color),
        });
        DotMarker::new(self.circles.len() - 1)
    }

    fn move_dot(&mut self, marker: DotMarker, x: f64, y: f64) {
        if let Some(circle) = self.circles.get_mut(marker.id()) {
            circle.x = x;
            circle.y = y;
        }
    }

    fn replace_connections(&mut self, connections: &[Connection], dots: &[Dot], config: &Config) {
        self.lines.clear();
        for conn in connections {
            let a = &dots[conn.a];
            let b = &dots[conn.b];
            self.lines.push(format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" opacity=\"{}\"/>",
                a.x,
                a.y,
                b.x,
                b.y,
                hex_color(config.connection_color),
                config.connection_width,
                conn.opacity(config)
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;
    use crate::sim::Simulation;

    #[test]
    fn document_contains_border_dots_and_lines() {
        let mut config = Config::default();
        config.random_seed = 42;
        config.num_dots = 8;

        let mut rng = Mulberry32::new(config.random_seed);
        let mut sim = Simulation::new(&config, &mut rng).expect("config must validate");
        let mut surface = SvgSurface::new(&config);
        sim.attach(&mut surface, &config);
        sim.start();
        for _ in 0..5 {
            sim.tick(&config);
        }
        sim.present(&mut surface, &config);

        let doc = surface.document();
        assert!(doc.starts_with("<svg"));
        assert_eq!(doc.matches("<circle").count(), config.num_dots);
        assert_eq!(doc.matches("<rect").count(), 1);
        assert_eq!(doc.matches("<line").count(), sim.connections().len());
        assert!(doc.contains("stroke=\"#478be6\""));
        assert!(doc.contains("fill=\"#4184e4\""));
    }

    #[test]
    fn move_dot_updates_the_addressed_circle() {
        let config = Config::default();
        let mut surface = SvgSurface::new(&config);
        let first = surface.create_dot(1.0, 2.0, &config);
        let second = surface.create_dot(3.0, 4.0, &config);
        assert_ne!(first, second);

        surface.move_dot(second, 30.0, 40.0);
        let doc = surface.document();
        assert!(doc.contains("cx=\"1\" cy=\"2\""));
        assert!(doc.contains("cx=\"30\" cy=\"40\""));
    }

    #[test]
    fn replace_connections_rewrites_the_line_group() {
        let config = Config::default();
        let dots = vec![
            Dot {
                x: 0.0,
                y: 0.0,
                vx: 0.0,
                vy: 0.0,
                marker: None,
            },
            Dot {
                x: 50.0,
                y: 0.0,
                vx: 0.0,
                vy: 0.0,
                marker: None,
            },
        ];
        let connections = [Connection {
            a: 0,
            b: 1,
            distance: 50.0,
        }];

        let mut surface = SvgSurface::new(&config);
        surface.replace_connections(&connections, &dots, &config);
        assert_eq!(surface.document().matches("<line").count(), 1);

        surface.replace_connections(&[], &dots, &config);
        assert_eq!(surface.document().matches("<line").count(), 0);
    }
}
