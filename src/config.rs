/*
 * Configuration Module
 *
 * This module defines the Config struct that contains all the adjustable
 * parameters for the dot animation: canvas size, dot spawning, physics,
 * connection drawing, and styling. The struct is a plain value passed
 * explicitly into every engine operation; the UI owns the single mutable
 * copy and respawns the dots when spawn-relevant fields change. It also
 * provides validation and parameter change detection.
 */

use nannou::prelude::*;

use crate::error::{Error, Result};

// Color palettes carried over from the page styling the animation was
// designed for
pub fn github_palette() -> [Rgb<u8>; 3] {
    [rgb(0x47, 0x8b, 0xe6), rgb(0x41, 0x84, 0xe4), rgb(0x79, 0xc0, 0xff)]
}

pub fn cyberpunk_palette() -> [Rgb<u8>; 5] {
    [
        rgb(0x08, 0xf7, 0xfe),
        rgb(0xfe, 0x53, 0xbb),
        rgb(0xf5, 0xd3, 0x00),
        rgb(0x00, 0xff, 0x41),
        rgb(0x94, 0x67, 0xbd),
    ]
}

// Parameters for the animation that can be adjusted via UI
#[derive(Clone)]
pub struct Config {
    pub width: f64,
    pub height: f64,
    pub border_color: Rgb<u8>,
    pub border_width: f32,
    /// Seed for reproducible runs; 0 selects a non-deterministic source.
    pub random_seed: u32,
    pub num_dots: usize,
    pub dot_radius: f64,
    pub dot_color: Rgb<u8>,
    pub connections: bool,
    /// Per-dot degree cap for connection lines; 0 means unlimited.
    pub max_connections_per_dot: usize,
    pub connection_threshold: f64,
    pub connection_width: f32,
    pub connection_color: Rgb<u8>,
    pub animate: bool,
    /// Accepted but not read by the spawner, which derives speeds from
    /// max_speed alone.
    pub min_speed: f64,
    pub max_speed: f64,
    pub dot_collision: bool,
    pub friction: f64,
    pub acceleration: f64,
    // UI state
    pub show_stats: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ConfigSnapshot>,
}

// A snapshot of the spawn-relevant values used for change detection
#[derive(Clone)]
struct ConfigSnapshot {
    random_seed: u32,
    num_dots: usize,
    dot_radius: f64,
    min_speed: f64,
    max_speed: f64,
}

impl Default for Config {
    fn default() -> Self {
        let [border, dot, connection] = github_palette();
        Self {
            width: 800.0,
            height: 150.0,
            border_color: border,
            border_width: 2.0,
            random_seed: 0,
            num_dots: 35,
            dot_radius: 4.0,
            dot_color: dot,
            connections: true,
            max_connections_per_dot: 0,
            connection_threshold: 100.0,
            connection_width: 0.5,
            connection_color: connection,
            animate: true,
            min_speed: 0.6,
            max_speed: 0.8,
            dot_collision: true,
            friction: 0.0,
            acceleration: 0.0,
            show_stats: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl Config {
    /// Check every field the engine depends on. Called before the first
    /// tick so a bad configuration never produces NaN positions.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(Error::InvalidConfig("width must be finite and > 0".into()));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(Error::InvalidConfig("height must be finite and > 0".into()));
        }
        if self.num_dots == 0 {
            return Err(Error::InvalidConfig("num_dots must be > 0".into()));
        }
        if !self.dot_radius.is_finite() || self.dot_radius <= 0.0 {
            return Err(Error::InvalidConfig(
                "dot_radius must be finite and > 0".into(),
            ));
        }
        // A dot must fit inside the canvas with clearance on both sides
        if 2.0 * self.dot_radius >= self.width.min(self.height) {
            return Err(Error::InvalidConfig(format!(
                "dot_radius {} leaves no spawn area inside a {}x{} canvas",
                self.dot_radius, self.width, self.height
            )));
        }
        for (name, value) in [
            ("min_speed", self.min_speed),
            ("max_speed", self.max_speed),
            ("connection_threshold", self.connection_threshold),
            ("acceleration", self.acceleration),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be finite and >= 0",
                    name
                )));
            }
        }
        if !self.friction.is_finite() || !(0.0..=1.0).contains(&self.friction) {
            return Err(Error::InvalidConfig(
                "friction must be within [0, 1]".into(),
            ));
        }
        Ok(())
    }

    // Take a snapshot of the spawn-relevant values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ConfigSnapshot {
            random_seed: self.random_seed,
            num_dots: self.num_dots,
            dot_radius: self.dot_radius,
            min_speed: self.min_speed,
            max_speed: self.max_speed,
        });
    }

    // Check if any spawn-relevant parameter changed since the last snapshot,
    // meaning the dot set has to be rebuilt
    pub fn detect_changes(&self) -> bool {
        if let Some(prev) = &self.previous_values {
            self.random_seed != prev.random_seed
                || self.num_dots != prev.num_dots
                || self.dot_radius != prev.dot_radius
                || self.min_speed != prev.min_speed
                || self.max_speed != prev.max_speed
        } else {
            false
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_dots_range() -> std::ops::RangeInclusive<usize> {
        1..=200
    }

    pub fn get_dot_radius_range() -> std::ops::RangeInclusive<f64> {
        1.0..=20.0
    }

    pub fn get_speed_range() -> std::ops::RangeInclusive<f64> {
        0.0..=5.0
    }

    pub fn get_threshold_range() -> std::ops::RangeInclusive<f64> {
        0.0..=400.0
    }

    pub fn get_max_connections_range() -> std::ops::RangeInclusive<usize> {
        0..=10
    }

    pub fn get_friction_range() -> std::ops::RangeInclusive<f64> {
        0.0..=0.5
    }

    pub fn get_acceleration_range() -> std::ops::RangeInclusive<f64> {
        0.0..=2.0
    }

    pub fn get_seed_range() -> std::ops::RangeInclusive<u32> {
        0..=9999
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        let mut config = Config::default();
        config.width = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.height = -10.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.dot_radius = 80.0; // 2 * 80 > height of 150
        assert!(config.validate().is_err());
    }

    #[test]
    fn friction_outside_unit_interval_is_rejected() {
        let mut config = Config::default();
        config.friction = 1.5;
        assert!(config.validate().is_err());

        config.friction = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn change_detection_tracks_spawn_fields_only() {
        let mut config = Config::default();
        config.take_snapshot();
        assert!(!config.detect_changes());

        config.connection_threshold = 250.0;
        assert!(!config.detect_changes());

        config.num_dots = 10;
        assert!(config.detect_changes());
    }
}
