use glam::Vec3;
use serde::Deserialize;

/// Point light without falloff; `intensity` is the per-channel radiance
/// scale applied to every lit shading contribution.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: Vec3,
}

impl Light {
    pub fn new(position: Vec3, intensity: Vec3) -> Light {
        Light {
            position,
            intensity,
        }
    }

    /// Unit direction from `p` towards the light, and the distance to it.
    pub fn eval_we(&self, p: &Vec3) -> (Vec3, f32) {
        let to_light = self.position - *p;
        let dist = to_light.length();
        return (to_light / dist, dist);
    }
}
