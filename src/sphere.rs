use glam::Vec3;
use serde::Deserialize;

use crate::intersection::Intersection;
use crate::material::Material;
use crate::ray::Ray;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Material) -> Sphere {
        Sphere {
            center,
            radius,
            material,
        }
    }

    /**
     * Solves |o + t*d - c|^2 = r^2 for the near root only.
     * Rays that graze the surface (zero discriminant) and roots at or behind
     * the origin do not count as hits. The direction need not be normalized.
     */
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let disc = b * b - 4.0 * a * c;

        if !(disc > 0.0) {
            return None;
        }

        let t = (-b - disc.sqrt()) / (2.0 * a);
        if !(t > 0.0) {
            return None;
        }

        Some(t)
    }

    pub fn intersection_at(&self, ray: &Ray, t: f32) -> Intersection {
        let pos = ray.at(t);
        Intersection {
            t,
            pos,
            nrm: (pos - self.center).normalize(),
            mat: self.material,
        }
    }
}
