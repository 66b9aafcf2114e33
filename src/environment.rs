use std::path::Path;

use glam::Vec3;
use image::RgbImage;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Background radiance seen along a direction that escapes the scene.
pub trait Environment: Sync {
    fn lookup(&self, direction: Vec3) -> Vec3;
}

impl<F> Environment for F
where
    F: Fn(Vec3) -> Vec3 + Sync,
{
    fn lookup(&self, direction: Vec3) -> Vec3 {
        self(direction)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Uniform {
    pub color: Vec3,
}

impl Environment for Uniform {
    fn lookup(&self, _direction: Vec3) -> Vec3 {
        self.color
    }
}

/// Sky blend between `horizon` (and below) and `zenith` (straight up).
#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    pub horizon: Vec3,
    pub zenith: Vec3,
}

impl Environment for Gradient {
    fn lookup(&self, direction: Vec3) -> Vec3 {
        let up = direction.normalize_or_zero().y.max(0.0);
        self.horizon.lerp(self.zenith, up)
    }
}

/// Six square faces ordered +X, -X, +Y, -Y, +Z, -Z.
pub struct CubeMap {
    faces: [Vec<Vec3>; 6],
    size: u32,
}

impl CubeMap {
    pub fn from_images(images: [RgbImage; 6]) -> Result<CubeMap> {
        let size = images[0].width();
        for (i, img) in images.iter().enumerate() {
            if img.width() != size || img.height() != size {
                return Err(Error::InvalidEnvironment(format!(
                    "cube face {} is {}x{}, expected {}x{}",
                    i,
                    img.width(),
                    img.height(),
                    size,
                    size
                )));
            }
        }
        if size == 0 {
            return Err(Error::InvalidEnvironment("cube faces are empty".to_string()));
        }

        let faces = images.map(|img| {
            img.pixels()
                .map(|p| Vec3::new(srgb_to_linear(p[0]), srgb_to_linear(p[1]), srgb_to_linear(p[2])))
                .collect::<Vec<Vec3>>()
        });

        Ok(CubeMap {
            faces,
            size,
        })
    }

    pub fn open<P: AsRef<Path>>(paths: &[P; 6]) -> Result<CubeMap> {
        let mut images = Vec::with_capacity(6);
        for path in paths {
            let path: &Path = path.as_ref();
            debug!(path = %path.display(), "loading cube face");
            images.push(image::open(path)?.to_rgb8());
        }
        let images: [RgbImage; 6] = images
            .try_into()
            .map_err(|_| Error::InvalidEnvironment("expected six cube faces".to_string()))?;
        CubeMap::from_images(images)
    }

    /// Nearest-texel lookup in standard cube-map face conventions.
    fn sample(&self, d: Vec3) -> Vec3 {
        let a = d.abs();
        let (face, sc, tc, ma) = if a.x >= a.y && a.x >= a.z {
            if d.x > 0.0 { (0, -d.z, -d.y, a.x) } else { (1, d.z, -d.y, a.x) }
        } else if a.y >= a.z {
            if d.y > 0.0 { (2, d.x, d.z, a.y) } else { (3, d.x, -d.z, a.y) }
        } else if d.z > 0.0 {
            (4, d.x, -d.y, a.z)
        } else {
            (5, -d.x, -d.y, a.z)
        };
        if !(ma > 0.0) {
            return Vec3::ZERO;
        }

        let u = 0.5 * (sc / ma + 1.0);
        let v = 0.5 * (tc / ma + 1.0);
        let max = self.size - 1;
        let x = ((u * self.size as f32) as u32).min(max);
        let y = ((v * self.size as f32) as u32).min(max);
        self.faces[face][(y * self.size + x) as usize]
    }
}

impl Environment for CubeMap {
    /// Scene space is y-up while the faces are authored z-up, so the
    /// direction is swizzled to `xzy` before sampling.
    fn lookup(&self, direction: Vec3) -> Vec3 {
        self.sample(Vec3::new(direction.x, direction.z, direction.y))
    }
}

fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Serialized environment selection in a scene file.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EnvironmentDesc {
    Uniform { color: Vec3 },
    Gradient { horizon: Vec3, zenith: Vec3 },
    Cubemap { faces: [String; 6] },
}

impl Default for EnvironmentDesc {
    fn default() -> Self {
        EnvironmentDesc::Uniform { color: Vec3::ZERO }
    }
}

impl EnvironmentDesc {
    /// Builds the environment; relative cube-face paths resolve against `base`.
    pub fn build(&self, base: &Path) -> Result<Box<dyn Environment>> {
        match self {
            EnvironmentDesc::Uniform { color } => Ok(Box::new(Uniform { color: *color })),
            EnvironmentDesc::Gradient { horizon, zenith } => Ok(Box::new(Gradient {
                horizon: *horizon,
                zenith: *zenith,
            })),
            EnvironmentDesc::Cubemap { faces } => {
                let paths = faces.clone().map(|f| base.join(f));
                Ok(Box::new(CubeMap::open(&paths)?))
            },
        }
    }
}
