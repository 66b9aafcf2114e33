use glam::Vec3;
use serde::Deserialize;

/// Blinn-Phong surface coefficients. The specular coefficient doubles as the
/// mirror reflectance used to attenuate reflection bounces.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Material {
    pub diffuse: Vec3,
    #[serde(default)]
    pub specular: Vec3,
    #[serde(default = "default_shininess")]
    pub shininess: f32,
}

impl Material {
    pub fn new(diffuse: Vec3, specular: Vec3, shininess: f32) -> Material {
        Material {
            diffuse,
            specular,
            shininess,
        }
    }

    /// Pure Lambertian surface, never spawns reflection rays.
    pub fn matte(diffuse: Vec3) -> Material {
        Material::new(diffuse, Vec3::ZERO, default_shininess())
    }
}

fn default_shininess() -> f32 {
    1.0
}
