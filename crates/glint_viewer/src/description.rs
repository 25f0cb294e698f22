//! JSON scene descriptions.
//!
//! ```json
//! {
//!   "background": [0.1, 0.1, 0.15],
//!   "camera": { "position": [0, 1, 5], "target": [0, 0, 0], "fov": 60 },
//!   "spheres": [
//!     { "center": [0, 0, 0], "radius": 1, "material": { "color": [1, 0.4, 0.7] } }
//!   ],
//!   "lights": [{ "position": [-5, 8, 5], "intensity": 1 }]
//! }
//! ```
//!
//! Omitted fields take the same defaults as the renderer's own types.

use std::path::Path;

use anyhow::{Context, Result};
use glint_renderer::{Camera, Color, Material, Scene, Vec3, DEFAULT_BACKGROUND};
use serde::Deserialize;

type Triple = [f64; 3];

fn vec3(v: Triple) -> Vec3 {
    Vec3::from_array(v)
}

fn default_background() -> Triple {
    DEFAULT_BACKGROUND.to_array()
}

fn default_up() -> Triple {
    [0.0, 1.0, 0.0]
}

fn default_fov() -> f64 {
    60.0
}

fn white() -> Triple {
    [1.0, 1.0, 1.0]
}

fn default_intensity() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    #[serde(default = "default_background")]
    pub background: Triple,
    pub camera: CameraDescription,
    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraDescription {
    pub position: Triple,
    pub target: Triple,
    #[serde(default = "default_up")]
    pub up: Triple,
    #[serde(default = "default_fov")]
    pub fov: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereDescription {
    pub center: Triple,
    pub radius: f64,
    #[serde(default)]
    pub material: MaterialDescription,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialDescription {
    pub color: Triple,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
    pub reflectivity: f64,
}

impl Default for MaterialDescription {
    fn default() -> Self {
        let m = Material::default();
        Self {
            color: m.color.to_array(),
            ambient: m.ambient,
            diffuse: m.diffuse,
            specular: m.specular,
            shininess: m.shininess,
            reflectivity: m.reflectivity,
        }
    }
}

impl From<&MaterialDescription> for Material {
    fn from(d: &MaterialDescription) -> Self {
        Material::new(
            vec3(d.color),
            d.ambient,
            d.diffuse,
            d.specular,
            d.shininess,
            d.reflectivity,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightDescription {
    pub position: Triple,
    #[serde(default = "white")]
    pub color: Triple,
    #[serde(default = "default_intensity")]
    pub intensity: f64,
}

impl SceneDescription {
    /// Parse a description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid scene description")
    }

    /// Read and parse a description file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        let description = Self::from_json(&json)
            .with_context(|| format!("Failed to parse scene file {}", path.display()))?;

        log::info!(
            "Loaded {} ({} spheres, {} lights)",
            path.display(),
            description.spheres.len(),
            description.lights.len()
        );
        Ok(description)
    }

    /// Build the scene and camera this description names.
    pub fn build(&self) -> (Scene, Camera) {
        let mut scene = Scene::new();
        scene.set_background(vec3(self.background));

        for sphere in &self.spheres {
            scene.add_sphere(vec3(sphere.center), sphere.radius, (&sphere.material).into());
        }
        for light in &self.lights {
            scene.add_light(vec3(light.position), vec3(light.color), light.intensity);
        }

        let camera = Camera::new(vec3(self.camera.position), vec3(self.camera.target))
            .with_up(vec3(self.camera.up))
            .with_fov(self.camera.fov);

        (scene, camera)
    }
}
