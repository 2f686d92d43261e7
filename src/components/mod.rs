mod neural_grid;
pub mod neural_scene;
mod sidebar;
