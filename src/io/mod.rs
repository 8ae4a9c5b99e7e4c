//! Input shapes and loaders for obstacle data.
//!
//! Obstacle data reaches the grid as in-memory lists; all file and message
//! handling happens here, before any call into the grid itself:
//! - [`CollisionMap`]: whole-scene point snapshot with a frame id
//! - [`obstacles`]: permissive obstacle-list text loader

mod collision_map;
pub mod obstacles;

pub use collision_map::CollisionMap;
pub use obstacles::{
    insert_obstacles, load_obstacle_file, parse_obstacle_list, Obstacle, ObstacleFileError,
};
