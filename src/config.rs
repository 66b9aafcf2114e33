use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    camera::CameraDesc,
    environment::{Environment, EnvironmentDesc},
    error::{Error, Result},
    light::Light,
    renderer::{RenderSettings, MAX_BOUNCES},
    scene::Scene,
    sphere::Sphere,
};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDesc {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_bounce_limit")]
    pub bounce_limit: u32,
    #[serde(default = "default_samples")]
    pub samples: u32,
}

impl Default for RenderDesc {
    fn default() -> Self {
        RenderDesc {
            width: default_width(),
            height: default_height(),
            bounce_limit: default_bounce_limit(),
            samples: default_samples(),
        }
    }
}

/// On-disk scene description.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub camera: CameraDesc,
    #[serde(default)]
    pub render: RenderDesc,
    #[serde(default)]
    pub spheres: Vec<Sphere>,
    #[serde(default)]
    pub lights: Vec<Light>,
    #[serde(default)]
    pub environment: EnvironmentDesc,
}

impl SceneFile {
    pub fn load(path: &Path) -> Result<SceneFile> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: SceneFile = serde_json::from_str(&raw)?;
        debug!(
            path = %path.display(),
            spheres = file.spheres.len(),
            lights = file.lights.len(),
            "scene file parsed"
        );
        Ok(file)
    }

    pub fn scene(&self) -> Result<Scene> {
        Scene::new(self.spheres.clone(), self.lights.clone())
    }

    /// Relative paths inside the file resolve against `base`.
    pub fn environment(&self, base: &Path) -> Result<Box<dyn Environment>> {
        self.environment.build(base)
    }
}

pub fn validate_settings(settings: &RenderSettings) -> Result<()> {
    if settings.width == 0 || settings.height == 0 {
        return Err(Error::InvalidSettings("width and height must be positive".to_string()));
    }
    if settings.samples == 0 {
        return Err(Error::InvalidSettings("samples must be at least 1".to_string()));
    }
    if settings.bounce_limit > MAX_BOUNCES {
        warn!(
            requested = settings.bounce_limit,
            max = MAX_BOUNCES,
            "bounce limit exceeds ceiling, clamping"
        );
    }
    Ok(())
}

pub fn validate_camera(camera: &CameraDesc) -> Result<()> {
    if !camera.position.is_finite() || !camera.target.is_finite() {
        return Err(Error::InvalidSettings("camera vectors must be finite".to_string()));
    }
    if (camera.position - camera.target).length() < 1e-4 {
        return Err(Error::InvalidSettings("camera position must differ from target".to_string()));
    }
    if !(camera.fov > 0.0 && camera.fov < 180.0) {
        return Err(Error::InvalidSettings(format!("fov must be in (0, 180), got {}", camera.fov)));
    }
    Ok(())
}

const fn default_width() -> u32 {
    640
}

const fn default_height() -> u32 {
    480
}

const fn default_bounce_limit() -> u32 {
    5
}

const fn default_samples() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const SCENE: &str = r#"{
        "camera": { "position": [0, 1, 6], "target": [0, 0, 0], "fov": 45 },
        "render": { "width": 320, "bounceLimit": 3 },
        "spheres": [
            { "center": [0, 0, 0], "radius": 1.0,
              "material": { "diffuse": [0.8, 0.2, 0.2], "specular": [0.3, 0.3, 0.3], "shininess": 64 } },
            { "center": [0, -101, 0], "radius": 100.0,
              "material": { "diffuse": [0.5, 0.5, 0.5] } }
        ],
        "lights": [ { "position": [5, 5, 5], "intensity": [1, 1, 1] } ],
        "environment": { "type": "uniform", "color": [0.1, 0.1, 0.2] }
    }"#;

    #[test]
    fn parses_full_scene_with_defaults() {
        let file: SceneFile = serde_json::from_str(SCENE).unwrap();
        assert_eq!(file.render.width, 320);
        assert_eq!(file.render.height, 480);
        assert_eq!(file.render.bounce_limit, 3);
        assert_eq!(file.render.samples, 1);
        assert_eq!(file.camera.fov, 45.0);

        let scene = file.scene().unwrap();
        assert_eq!(scene.spheres().len(), 2);
        assert_eq!(scene.spheres()[1].material.specular, Vec3::ZERO);
        assert_eq!(scene.lights()[0].position, Vec3::splat(5.0));

        let env = file.environment(Path::new(".")).unwrap();
        assert_eq!(env.lookup(Vec3::X), Vec3::new(0.1, 0.1, 0.2));
    }

    #[test]
    fn empty_object_is_a_valid_scene() {
        let file: SceneFile = serde_json::from_str("{}").unwrap();
        let scene = file.scene().unwrap();
        assert!(scene.spheres().is_empty());
        assert!(validate_camera(&file.camera).is_ok());
    }

    #[test]
    fn invalid_sphere_surfaces_as_error() {
        let raw = r#"{ "spheres": [ { "center": [0, 0, 0], "radius": -1, "material": { "diffuse": [1, 1, 1] } } ] }"#;
        let file: SceneFile = serde_json::from_str(raw).unwrap();
        assert!(matches!(file.scene(), Err(Error::InvalidSphere { index: 0, .. })));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SceneFile::load(Path::new("/nonexistent/scene.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/scene.json"));
    }

    #[test]
    fn rejects_degenerate_settings() {
        let mut settings = RenderSettings {
            width: 10,
            height: 10,
            bounce_limit: MAX_BOUNCES + 4,
            samples: 1,
        };
        assert!(validate_settings(&settings).is_ok());
        settings.samples = 0;
        assert!(validate_settings(&settings).is_err());
        settings.samples = 1;
        settings.height = 0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn rejects_camera_looking_at_itself() {
        let camera = CameraDesc {
            position: Vec3::ONE,
            target: Vec3::ONE,
            fov: 60.0,
        };
        assert!(validate_camera(&camera).is_err());
    }
}
