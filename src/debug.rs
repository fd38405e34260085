/*
 * Frame Statistics Module
 *
 * This module defines the FrameStats struct with the per-frame metrics
 * shown in the stats overlay and the control panel: frame rate, frame
 * time, tick count, and the size of the current connection graph.
 */

use std::time::Duration;

pub struct FrameStats {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks: u64,
    pub connection_count: usize,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            ticks: 0,
            connection_count: 0,
        }
    }
}
