use glam::Vec3;
use serde::Deserialize;

use crate::ray::Ray;
use crate::transform::Transform;

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub trf: Transform,
    pub viewport_w: f32,
    pub viewport_h: f32,
    pub viewport_a: f32,
    /// Image-plane half height at unit distance, `tan(fov_y / 2)`.
    pub half_h: f32,
}

impl Camera {
    pub fn new(trf: Transform, fov_y_deg: f32, viewport_w: f32, viewport_h: f32) -> Camera {
        Camera {
            trf,
            viewport_w,
            viewport_h,
            viewport_a: viewport_w / viewport_h,
            half_h: (fov_y_deg.to_radians() * 0.5).tan(),
        }
    }

    pub fn from_lookat(pos: Vec3, obj: Vec3, fov_y_deg: f32, viewport_w: f32, viewport_h: f32) -> Camera {
        Camera::new(Transform::from_lookat(pos, obj), fov_y_deg, viewport_w, viewport_h)
    }

    /// Primary ray through viewport position (`x`, `y`), measured in pixels
    /// from the top-left corner. Pixel centers sit at half-integer offsets.
    pub fn calc_ray(&self, x: f32, y: f32) -> Ray {
        // local +X is left, so columns to the right map to negative x
        let x_norm = (self.viewport_w * 0.5 - x) / self.viewport_w * 2.0 * self.half_h * self.viewport_a;
        let y_norm = (self.viewport_h * 0.5 - y) / self.viewport_h * 2.0 * self.half_h;
        let dir = self.trf.ori * Vec3::new(x_norm, y_norm, 1.0);

        Ray::new(self.trf.pos, dir.normalize())
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CameraDesc {
    pub position: Vec3,
    pub target: Vec3,
    #[serde(default = "default_fov")]
    pub fov: f32,
}

impl Default for CameraDesc {
    fn default() -> Self {
        CameraDesc {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            fov: default_fov(),
        }
    }
}

impl CameraDesc {
    pub fn build(&self, viewport_w: f32, viewport_h: f32) -> Camera {
        Camera::from_lookat(self.position, self.target, self.fov, viewport_w, viewport_h)
    }
}

fn default_fov() -> f32 {
    60.0
}
