/*
 * Connections Module
 *
 * This module builds the connection graph: the set of dot pairs whose
 * distance is within the configured threshold, optionally limited by a
 * per-dot degree cap. The graph is derived state, rebuilt from scratch
 * every tick.
 */

use crate::config::Config;
use crate::dot::Dot;

/// A line between two dots, identified by their indices, with the
/// distance measured when the graph was built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

impl Connection {
    /// Line opacity: fades out linearly towards the threshold distance.
    /// Distances never exceed the threshold by construction, so the
    /// result stays within [0, 1].
    pub fn opacity(&self, config: &Config) -> f64 {
        1.0 - self.distance / config.connection_threshold
    }
}

/// Compute the connections for the current dot positions.
///
/// With no degree cap the kept pairs are returned in enumeration order
/// (i < j). With a cap, pairs are sorted closest-first (stable, so ties
/// keep enumeration order) and accepted greedily while both endpoints
/// are under the cap.
pub fn build_connections(dots: &[Dot], config: &Config) -> Vec<Connection> {
    let mut connections = Vec::new();
    for i in 0..dots.len() {
        for j in (i + 1)..dots.len() {
            let distance = dots[i].distance_to(&dots[j]);
            // Coincident dots are skipped along with out-of-range pairs
            if distance > 0.0 && distance <= config.connection_threshold {
                connections.push(Connection { a: i, b: j, distance });
            }
        }
    }

    if config.max_connections_per_dot == 0 {
        return connections;
    }

    // Sort connections by distance (closest first)
    connections.sort_by(|p, q| p.distance.total_cmp(&q.distance));

    // Accept connections while respecting the per-dot cap
    let mut counts = vec![0usize; dots.len()];
    let mut accepted = Vec::new();
    for conn in connections {
        if counts[conn.a] < config.max_connections_per_dot
            && counts[conn.b] < config.max_connections_per_dot
        {
            counts[conn.a] += 1;
            counts[conn.b] += 1;
            accepted.push(conn);
        }
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot_at(x: f64, y: f64) -> Dot {
        Dot {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            marker: None,
        }
    }

    fn degrees(connections: &[Connection], num_dots: usize) -> Vec<usize> {
        let mut counts = vec![0; num_dots];
        for conn in connections {
            counts[conn.a] += 1;
            counts[conn.b] += 1;
        }
        counts
    }

    #[test]
    fn only_pairs_within_threshold_are_kept() {
        let config = Config::default();
        let dots = vec![dot_at(0.0, 0.0), dot_at(50.0, 0.0), dot_at(500.0, 0.0)];
        let connections = build_connections(&dots, &config);
        assert_eq!(connections.len(), 1);
        assert_eq!((connections[0].a, connections[0].b), (0, 1));
        assert_eq!(connections[0].distance, 50.0);
    }

    #[test]
    fn pair_exactly_at_threshold_is_kept() {
        let config = Config::default();
        let dots = vec![dot_at(0.0, 0.0), dot_at(config.connection_threshold, 0.0)];
        let connections = build_connections(&dots, &config);
        assert_eq!(connections.len(), 1);
    }

    #[test]
    fn coincident_dots_are_not_connected() {
        let config = Config::default();
        let dots = vec![dot_at(10.0, 10.0), dot_at(10.0, 10.0)];
        assert!(build_connections(&dots, &config).is_empty());
    }

    #[test]
    fn degree_cap_limits_each_dot() {
        let mut config = Config::default();
        config.max_connections_per_dot = 2;
        // A tight cluster where every pair is in range
        let dots = vec![
            dot_at(0.0, 0.0),
            dot_at(10.0, 0.0),
            dot_at(0.0, 10.0),
            dot_at(10.0, 10.0),
            dot_at(5.0, 5.0),
        ];
        let connections = build_connections(&dots, &config);
        for (i, degree) in degrees(&connections, dots.len()).iter().enumerate() {
            assert!(
                *degree <= config.max_connections_per_dot,
                "dot {} has degree {}",
                i,
                degree
            );
        }
    }

    #[test]
    fn capped_connections_prefer_closer_pairs() {
        let mut config = Config::default();
        config.max_connections_per_dot = 1;
        // Dot 1 is in range of both ends; dot 2 is the closer partner
        let dots = vec![dot_at(0.0, 0.0), dot_at(60.0, 0.0), dot_at(90.0, 0.0)];
        let connections = build_connections(&dots, &config);
        assert_eq!(connections.len(), 1);
        // (1, 2) at distance 30 wins over (0, 1) at 60
        assert_eq!((connections[0].a, connections[0].b), (1, 2));
    }

    #[test]
    fn rebuild_is_idempotent() {
        let mut config = Config::default();
        config.max_connections_per_dot = 2;
        let dots = vec![
            dot_at(0.0, 0.0),
            dot_at(30.0, 0.0),
            dot_at(30.0, 40.0),
            dot_at(0.0, 40.0),
            dot_at(15.0, 20.0),
        ];
        let first = build_connections(&dots, &config);
        let second = build_connections(&dots, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn opacity_fades_with_distance() {
        let config = Config::default();
        let near = Connection {
            a: 0,
            b: 1,
            distance: 0.0,
        };
        let far = Connection {
            a: 0,
            b: 1,
            distance: config.connection_threshold,
        };
        assert_eq!(near.opacity(&config), 1.0);
        assert_eq!(far.opacity(&config), 0.0);
    }
}
