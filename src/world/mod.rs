//! World module
//!
//! Grid coordinates, rooms, the dungeon arena, and procedural generation.

pub mod grid;
pub mod room;
pub mod dungeon;
pub mod generation;

pub use grid::{Coord, Direction};
pub use room::Room;
pub use dungeon::Dungeon;
pub use generation::{generate_dungeon, spawn_wandering};
