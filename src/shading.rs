use glam::Vec3;

use crate::intersection::intersect;
use crate::material::Material;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::utils::EPSILON;

/// Blinn-Phong shading of a surface point summed over all lights, each light
/// gated by a shadow probe. No ambient term, no clamping.
pub fn shade(mat: &Material, pos: Vec3, nrm: Vec3, view: Vec3, scene: &Scene) -> Vec3 {
    let mut color = Vec3::ZERO;
    for light in scene.lights() {
        let (l_dir, l_dist) = light.eval_we(&pos);

        // occluders beyond the light do not cast a shadow
        let l_ray = Ray::new(pos + nrm * EPSILON, l_dir);
        let l_shadow = match intersect(&l_ray, scene.spheres()) {
            Some(l_hit) => l_hit.t < l_dist,
            None => false,
        };
        if l_shadow {
            continue;
        }

        let diffuse = nrm.dot(l_dir).max(0.0);
        let half = (l_dir + view).normalize();
        let specular = nrm.dot(half).max(0.0).powf(mat.shininess);
        color += (mat.diffuse * diffuse + mat.specular * specular) * light.intensity;
    }

    color
}
