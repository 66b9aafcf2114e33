use crate::error::{Error, Result};
use crate::light::Light;
use crate::sphere::Sphere;

pub const MAX_SPHERES: usize = 64;
pub const MAX_LIGHTS: usize = 8;

/// Read-only geometry and lighting for one frame. Capacity and sphere
/// validity are checked once at construction; tracing never mutates it.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Result<Scene> {
        if spheres.len() > MAX_SPHERES {
            return Err(Error::Capacity {
                kind: "spheres",
                count: spheres.len(),
                max: MAX_SPHERES,
            });
        }
        if lights.len() > MAX_LIGHTS {
            return Err(Error::Capacity {
                kind: "lights",
                count: lights.len(),
                max: MAX_LIGHTS,
            });
        }

        for (index, sphere) in spheres.iter().enumerate() {
            if !sphere.radius.is_finite() || sphere.radius <= 0.0 {
                return Err(Error::InvalidSphere {
                    index,
                    reason: format!("radius must be positive, got {}", sphere.radius),
                });
            }
            if !sphere.center.is_finite() {
                return Err(Error::InvalidSphere {
                    index,
                    reason: "center must be finite".to_string(),
                });
            }
            if sphere.material.specular.min_element() < 0.0 {
                return Err(Error::InvalidSphere {
                    index,
                    reason: "specular coefficient must be non-negative".to_string(),
                });
            }
        }

        for (index, light) in lights.iter().enumerate() {
            if !light.position.is_finite() || !light.intensity.is_finite() {
                return Err(Error::InvalidLight {
                    index,
                    reason: "position and intensity must be finite".to_string(),
                });
            }
        }

        Ok(Scene {
            spheres,
            lights,
        })
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }
}
