pub mod camera;
pub mod cli;
pub mod clock;
pub mod loaders;
pub mod material;
pub mod math;
pub mod mesh;
pub mod mouse;
pub mod renderer;
pub mod scene;
pub mod types;
pub mod ui;
