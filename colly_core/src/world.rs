pub mod grid_world;
pub mod region;
