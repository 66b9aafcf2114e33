use glam::Vec3;

use crate::material::Material;
use crate::ray::Ray;
use crate::sphere::Sphere;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub t: f32,
    pub pos: Vec3,
    pub nrm: Vec3,
    pub mat: Material,
}

/// Finds the nearest sphere hit along `ray`, or `None` when no sphere
/// qualifies. Every sphere is tested; on equal `t` the earlier sphere wins.
pub fn intersect(ray: &Ray, spheres: &[Sphere]) -> Option<Intersection> {
    let mut hit_dist = f32::MAX;
    let mut hit_sphere: Option<&Sphere> = None;
    for sphere in spheres {
        match sphere.intersect(ray) {
            Some(t) => {
                if t < hit_dist {
                    hit_dist = t;
                    hit_sphere = Some(sphere);
                }
            },
            None => (),
        }
    }

    hit_sphere.map(|sphere| sphere.intersection_at(ray, hit_dist))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::approx_eq;

    fn sphere_at(center: Vec3, radius: f32, diffuse: Vec3) -> Sphere {
        Sphere::new(center, radius, Material::matte(diffuse))
    }

    #[test]
    fn empty_space_misses_regardless_of_scene_size() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(intersect(&ray, &[]).is_none());

        let spheres: Vec<Sphere> = (0..32)
            .map(|i| sphere_at(Vec3::new(i as f32 * 3.0, 0.0, -10.0), 1.0, Vec3::ONE))
            .collect();
        assert!(intersect(&ray, &spheres).is_none());
    }

    #[test]
    fn nearest_sphere_wins_independent_of_order() {
        let near = sphere_at(Vec3::new(0.0, 0.0, -5.0), 1.0, Vec3::X);
        let far = sphere_at(Vec3::new(0.0, 0.0, -20.0), 1.0, Vec3::Y);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        for spheres in [[near, far], [far, near]] {
            let hit = intersect(&ray, &spheres).unwrap();
            assert!((hit.t - 4.0).abs() < 1e-5);
            assert_eq!(hit.mat.diffuse, Vec3::X);
        }
    }

    #[test]
    fn tie_goes_to_first_sphere_in_scan_order() {
        let first = sphere_at(Vec3::new(0.0, 0.0, -5.0), 1.0, Vec3::X);
        let second = sphere_at(Vec3::new(0.0, 0.0, -5.0), 1.0, Vec3::Y);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = intersect(&ray, &[first, second]).unwrap();
        assert_eq!(hit.mat.diffuse, Vec3::X);
    }

    #[test]
    fn hit_fields_describe_surface_point() {
        let sphere = sphere_at(Vec3::new(2.0, 0.0, 0.0), 0.5, Vec3::ONE);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let hit = intersect(&ray, &[sphere]).unwrap();
        assert!((hit.t - 1.5).abs() < 1e-5);
        assert!(approx_eq(hit.pos, Vec3::new(1.5, 0.0, 0.0), 1e-5));
        assert!(approx_eq(hit.nrm, -Vec3::X, 1e-5));
    }

    #[test]
    fn tangent_ray_is_not_a_hit() {
        let sphere = sphere_at(Vec3::ZERO, 1.0, Vec3::ONE);
        let ray = Ray::new(Vec3::new(-5.0, 1.0, 0.0), Vec3::X);
        assert!(intersect(&ray, &[sphere]).is_none());
    }
}
