/*
 * Simulation Module
 *
 * This module owns the dot set and drives one animation tick: collision
 * pass, physics pass, connection-graph rebuild. The host scheduler (the
 * windowed app or a headless driver) calls tick once per frame; the
 * LoopState machine gives the host a clean way to shut the loop down.
 */

use crate::config::Config;
use crate::connections::{build_connections, Connection};
use crate::dot::Dot;
use crate::error::Result;
use crate::physics::{resolve_dot_collision, step_dot};
use crate::rng::RandomSource;
use crate::surface::Surface;

/// Lifecycle of the frame loop. `Stopped` is terminal; a stopped
/// simulation refuses further ticks so the host stops scheduling them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

pub struct Simulation {
    dots: Vec<Dot>,
    connections: Vec<Connection>,
    state: LoopState,
}

impl Simulation {
    /// Validate the configuration and spawn the dot set. The simulation
    /// starts Idle; call `start` before ticking.
    pub fn new(config: &Config, rng: &mut dyn RandomSource) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            dots: Dot::spawn_all(rng, config),
            connections: Vec::new(),
            state: LoopState::Idle,
        })
    }

    pub fn start(&mut self) {
        if self.state == LoopState::Idle {
            self.state = LoopState::Running;
        }
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Throw away the current dots and spawn a fresh set, e.g. after the
    /// UI changed a spawn-relevant parameter.
    pub fn respawn(&mut self, config: &Config, rng: &mut dyn RandomSource) -> Result<()> {
        config.validate()?;
        self.dots = Dot::spawn_all(rng, config);
        self.connections.clear();
        Ok(())
    }

    /// Run one tick. Returns false without doing any work unless the
    /// simulation is Running; the host checks the return value before
    /// scheduling the next tick.
    pub fn tick(&mut self, config: &Config) -> bool {
        if !self.is_running() {
            return false;
        }

        // Collision pass: every ordered pair (i, j), i != j, so each
        // overlapping pair is resolved twice per tick, matching the
        // animation's established behavior
        if config.dot_collision {
            for i in 0..self.dots.len() {
                for j in 0..self.dots.len() {
                    if i != j {
                        let (a, b) = pair_mut(&mut self.dots, i, j);
                        resolve_dot_collision(a, b, config.dot_radius);
                    }
                }
            }
        }

        // Physics pass
        if config.animate {
            for dot in &mut self.dots {
                step_dot(dot, config);
            }
        }

        // Rebuild the connection graph from scratch
        if config.connections {
            self.connections = build_connections(&self.dots, config);
        }

        true
    }

    /// Create this simulation's visuals on a surface: the border plus
    /// one circle per dot, storing each issued marker on its dot.
    pub fn attach(&mut self, surface: &mut dyn Surface, config: &Config) {
        surface.create_border(config);
        for dot in &mut self.dots {
            dot.marker = Some(surface.create_dot(dot.x, dot.y, config));
        }
    }

    /// Push the current state to an attached surface: move every dot's
    /// visual and hand over the connection list wholesale.
    pub fn present(&self, surface: &mut dyn Surface, config: &Config) {
        for dot in &self.dots {
            if let Some(marker) = dot.marker {
                surface.move_dot(marker, dot.x, dot.y);
            }
        }
        surface.replace_connections(&self.connections, &self.dots, config);
    }
}

// Two distinct mutable borrows out of the dot slice
fn pair_mut(dots: &mut [Dot], i: usize, j: usize) -> (&mut Dot, &mut Dot) {
    debug_assert!(i != j);
    if i < j {
        let (left, right) = dots.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = dots.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
