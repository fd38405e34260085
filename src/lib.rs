/*
 * Dot Field Animation - Module Definitions
 *
 * This file defines the module structure for the dot animation. The
 * engine (config, rng, dot, physics, connections, sim) is independent
 * of any window; app, ui and renderer host it under nannou, and the
 * SVG surface renders it headlessly.
 */

// Re-export key components for easier access
pub use config::Config;
pub use connections::{build_connections, Connection};
pub use debug::FrameStats;
pub use dot::Dot;
pub use error::{Error, Result};
pub use rng::{source_for_seed, Mulberry32, RandomSource, ThreadRandom};
pub use sim::{LoopState, Simulation};
pub use surface::{DotMarker, Surface};
pub use svg::SvgSurface;

// Define modules
pub mod app;
pub mod config;
pub mod connections;
pub mod debug;
pub mod dot;
pub mod error;
pub mod physics;
pub mod renderer;
pub mod rng;
pub mod sim;
pub mod surface;
pub mod svg;
pub mod ui;
