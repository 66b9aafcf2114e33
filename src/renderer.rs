use std::time::Instant;

use glam::{Vec3, Vec4};
use image::{Rgba, RgbaImage};
use rand::Rng;
use rayon::prelude::*;
use tracing::info;

use crate::{
    camera::Camera,
    environment::Environment,
    intersection::intersect,
    ray::Ray,
    scene::Scene,
    shading::shade,
    utils::{reflect, EPSILON},
};

/// Compiled ceiling on reflection bounces; caller limits are clamped to it.
pub const MAX_BOUNCES: u32 = 16;

/// Color carried back along one primary ray. `hit` is true once the primary
/// ray struck a surface, even if a later reflection escaped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trace {
    pub color: Vec3,
    pub hit: bool,
}

impl Trace {
    pub fn alpha(&self) -> f32 {
        if self.hit { 1.0 } else { 0.0 }
    }

    pub fn rgba(&self) -> Vec4 {
        self.color.extend(self.alpha())
    }
}

pub struct Raytracer;

impl Raytracer {
    pub fn trace(scene: &Scene, env: &dyn Environment, ray: &Ray, bounce_limit: u32) -> Trace {
        let mut hit = match intersect(ray, scene.spheres()) {
            Some(hit) => hit,
            None => {
                return Trace {
                    color: env.lookup(ray.direction),
                    hit: false,
                }
            },
        };

        let mut color = shade(&hit.mat, hit.pos, hit.nrm, (-ray.direction).normalize(), scene);
        let mut k_s = hit.mat.specular;
        let mut dir = ray.direction;

        for _ in 0..bounce_limit.min(MAX_BOUNCES) {
            // no energy left to carry
            if k_s.x + k_s.y + k_s.z <= 0.0 {
                break;
            }

            let r_ray = Ray::new(hit.pos + hit.nrm * EPSILON, reflect(&dir, &hit.nrm));
            match intersect(&r_ray, scene.spheres()) {
                Some(r_hit) => {
                    let view = (-r_ray.direction).normalize();
                    color += k_s * shade(&r_hit.mat, r_hit.pos, r_hit.nrm, view, scene);
                    k_s *= r_hit.mat.specular;
                    hit = r_hit;
                    dir = r_ray.direction;
                },
                None => {
                    color += k_s * env.lookup(r_ray.direction);
                    break;
                },
            }
        }

        Trace {
            color,
            hit: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub bounce_limit: u32,
    pub samples: u32,
}

/// Traces every pixel in parallel, one row per task. With more than one
/// sample, sub-pixel positions are jittered and the results averaged.
pub fn render(scene: &Scene, env: &dyn Environment, camera: &Camera, settings: &RenderSettings) -> RgbaImage {
    let started = Instant::now();
    let mut image = RgbaImage::new(settings.width, settings.height);
    if settings.width == 0 || settings.height == 0 {
        return image;
    }

    let width = settings.width as usize;
    let samples = settings.samples.max(1);

    let mut pixels = vec![Vec4::ZERO; width * settings.height as usize];
    pixels.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let mut rng = rand::thread_rng();
        for (x, px) in row.iter_mut().enumerate() {
            let mut acc = Vec4::ZERO;
            for _ in 0..samples {
                let (jx, jy) = if samples == 1 { (0.5, 0.5) } else { (rng.gen::<f32>(), rng.gen::<f32>()) };
                let ray = camera.calc_ray(x as f32 + jx, y as f32 + jy);
                acc += Raytracer::trace(scene, env, &ray, settings.bounce_limit).rgba();
            }
            *px = acc / samples as f32;
        }
    });

    for (i, px) in pixels.iter().enumerate() {
        let x = (i % width) as u32;
        let y = (i / width) as u32;
        image.put_pixel(x, y, to_rgba8(*px));
    }

    info!(
        width = settings.width,
        height = settings.height,
        samples,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "frame rendered"
    );
    image
}

fn to_rgba8(c: Vec4) -> Rgba<u8> {
    let c = c.clamp(Vec4::ZERO, Vec4::ONE) * 255.0 + Vec4::splat(0.5);
    Rgba([c.x as u8, c.y as u8, c.z as u8, c.w as u8])
}
