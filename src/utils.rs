use glam::Vec3;

/// Offset applied along the surface normal when spawning shadow and reflection rays.
pub const EPSILON: f32 = 1e-3;

pub fn reflect(incoming: &Vec3, normal: &Vec3) -> Vec3 {
    return *incoming - (*normal * normal.dot(*incoming) * 2.0);
}

#[cfg(test)]
pub fn approx_eq(a: Vec3, b: Vec3, tol: f32) -> bool {
    (a - b).abs().max_element() <= tol
}
