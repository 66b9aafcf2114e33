pub mod camera;
pub mod config;
pub mod environment;
pub mod error;
pub mod intersection;
pub mod light;
pub mod material;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shading;
pub mod sphere;
pub mod transform;
pub mod utils;

pub use error::{Error, Result};
