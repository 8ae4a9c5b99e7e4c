//! Obstacle-list file loader.
//!
//! Textual format used by planner test scenes:
//!
//! ```text
//! 2
//! table  0.60 0.00 0.50  0.80 1.20 0.05
//! shelf  1.00 0.40 0.80  0.30 0.90 1.60
//! ```
//!
//! First token is the obstacle count; each obstacle is an identifier token
//! followed by six numbers (center x y z, then size x y z). Parsing is
//! permissive: a truncated file yields the obstacles parsed so far, and an
//! entry with an unparsable number is skipped whole with a warning. Only an
//! unreadable file fails the load.

use crate::core::WorldPoint;
use crate::grid::OccupancyGrid;
use log::{debug, warn};
use std::path::Path;

/// An axis-aligned box obstacle from an obstacle-list file.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    /// Identifier token from the file
    pub id: String,
    /// Box center in world coordinates (meters)
    pub center: WorldPoint,
    /// Full edge lengths along each axis (meters)
    pub size: WorldPoint,
}

/// Error type for obstacle file loading.
#[derive(Debug, Clone)]
pub enum ObstacleFileError {
    /// The file could not be read
    Io(String),
}

impl std::fmt::Display for ObstacleFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObstacleFileError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ObstacleFileError {}

/// Load and parse an obstacle-list file.
pub fn load_obstacle_file(path: &Path) -> Result<Vec<Obstacle>, ObstacleFileError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ObstacleFileError::Io(e.to_string()))?;
    Ok(parse_obstacle_list(&contents))
}

/// Parse an obstacle list from text. Never fails; problems are logged and
/// the offending entries skipped.
pub fn parse_obstacle_list(text: &str) -> Vec<Obstacle> {
    let mut tokens = text.split_whitespace();

    let count = match tokens.next().and_then(|t| t.parse::<usize>().ok()) {
        Some(n) => n,
        None => {
            warn!("[obstacles] missing or unparsable obstacle count");
            return Vec::new();
        }
    };

    let mut obstacles = Vec::with_capacity(count);
    'entries: for i in 0..count {
        let id = match tokens.next() {
            Some(t) => t.to_string(),
            None => {
                warn!("[obstacles] file truncated after {} of {} entries", i, count);
                break;
            }
        };

        let mut values = [0.0f32; 6];
        let mut valid = true;
        for value in values.iter_mut() {
            match tokens.next() {
                Some(t) => match t.parse::<f32>() {
                    Ok(v) => *value = v,
                    Err(_) => {
                        warn!("[obstacles] '{}': unparsable number '{}', skipping entry", id, t);
                        valid = false;
                    }
                },
                None => {
                    warn!("[obstacles] '{}': truncated entry, stopping", id);
                    break 'entries;
                }
            }
        }
        if !valid {
            continue;
        }

        obstacles.push(Obstacle {
            id,
            center: WorldPoint::new(values[0], values[1], values[2]),
            size: WorldPoint::new(values[3], values[4], values[5]),
        });
    }

    debug!("[obstacles] parsed {} of {} entries", obstacles.len(), count);
    obstacles
}

/// Insert parsed obstacles into a grid as axis-aligned boxes.
pub fn insert_obstacles(grid: &mut OccupancyGrid, obstacles: &[Obstacle]) {
    for obstacle in obstacles {
        grid.add_box(obstacle.center, obstacle.size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        let text = "2\n\
                    table 0.6 0.0 0.5 0.8 1.2 0.05\n\
                    shelf 1.0 0.4 0.8 0.3 0.9 1.6\n";
        let obstacles = parse_obstacle_list(text);
        assert_eq!(obstacles.len(), 2);
        assert_eq!(obstacles[0].id, "table");
        assert_eq!(obstacles[0].center, WorldPoint::new(0.6, 0.0, 0.5));
        assert_eq!(obstacles[1].size, WorldPoint::new(0.3, 0.9, 1.6));
    }

    #[test]
    fn test_malformed_number_skips_entry() {
        let text = "2\n\
                    bad 0.1 oops 0.3 0.1 0.1 0.1\n\
                    good 1.0 1.0 1.0 0.2 0.2 0.2\n";
        let obstacles = parse_obstacle_list(text);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].id, "good");
    }

    #[test]
    fn test_truncated_file_keeps_prefix() {
        let text = "3\n\
                    one 0.1 0.1 0.1 0.2 0.2 0.2\n\
                    two 0.5 0.5";
        let obstacles = parse_obstacle_list(text);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].id, "one");
    }

    #[test]
    fn test_bad_count_yields_empty() {
        assert!(parse_obstacle_list("lots of junk").is_empty());
        assert!(parse_obstacle_list("").is_empty());
    }

    #[test]
    fn test_count_smaller_than_entries() {
        // Extra entries past the declared count are ignored
        let text = "1\n\
                    one 0.1 0.1 0.1 0.2 0.2 0.2\n\
                    two 0.5 0.5 0.5 0.2 0.2 0.2\n";
        let obstacles = parse_obstacle_list(text);
        assert_eq!(obstacles.len(), 1);
    }
}
