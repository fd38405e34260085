/*
 * Surface Module
 *
 * Contract between the engine and whatever renders it. The engine only
 * writes: it creates the border and one circle per dot up front, then
 * pushes position updates and the fresh connection list every tick. It
 * never reads anything back from the surface.
 */

use crate::config::Config;
use crate::connections::Connection;
use crate::dot::Dot;

/// Opaque handle to a dot's visual. The surface issues it from
/// `create_dot` and is the only party that interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotMarker(usize);

impl DotMarker {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn id(self) -> usize {
        self.0
    }
}

pub trait Surface {
    /// Create the canvas border.
    fn create_border(&mut self, config: &Config);

    /// Create the visual for one dot and hand back its marker.
    fn create_dot(&mut self, x: f64, y: f64, config: &Config) -> DotMarker;

    /// Move an existing dot visual to a new position.
    fn move_dot(&mut self, marker: DotMarker, x: f64, y: f64);

    /// Replace the entire set of connection lines with a new one.
    /// Called once per tick; there is no incremental diffing.
    fn replace_connections(&mut self, connections: &[Connection], dots: &[Dot], config: &Config);
}
