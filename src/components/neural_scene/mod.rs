mod camera;
mod component;
mod render;
mod scene;
mod state;

pub use scene::NeuralScene;
