use glam::{Mat3, Quat, Vec3};

/// Rigid placement in the world. Local +Z is the facing direction, +Y is up
/// and +X points to the viewer's left.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub pos: Vec3,
    pub ori: Quat,
}

impl Transform {
    /// Faces `obj` from `pos` keeping world +Y as up. Falls back to world +Z
    /// as the up hint when looking straight up or down.
    pub fn from_lookat(pos: Vec3, obj: Vec3) -> Transform {
        let fwd = (obj - pos).normalize();
        let up_hint = if fwd.cross(Vec3::Y).length_squared() < 1e-8 { Vec3::Z } else { Vec3::Y };
        let left = up_hint.cross(fwd).normalize();
        let up = fwd.cross(left);
        Transform {
            pos,
            ori: Quat::from_mat3(&Mat3::from_cols(left, up, fwd)),
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.ori * Vec3::Z
    }
}
