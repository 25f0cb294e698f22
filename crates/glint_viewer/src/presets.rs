//! Built-in scenes.
//!
//! Each preset is a handful of spheres resting on a large "floor" sphere,
//! viewed from (0, 1, 5) toward the origin.

use clap::ValueEnum;
use glint_math::dvec3;
use glint_renderer::{Camera, Color, Material, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Highly reflective chrome and gold spheres
    MirrorGallery,
    /// Saturated glossy colors under colored lights
    NeonDreams,
    /// A matte "sun" with orbiting planets
    PlanetarySystem,
    /// Pale, glass-like spheres on a marble floor
    GlassOrbs,
    /// Warm metals under a low sunset light
    GoldenHour,
    /// A pile of candy-colored spheres
    CandyLand,
    /// Cool blues and pearls
    DeepOcean,
}

#[allow(clippy::too_many_arguments)]
fn mat(r: f64, g: f64, b: f64, amb: f64, diff: f64, spec: f64, shin: f64, refl: f64) -> Material {
    Material::new(Color::new(r, g, b), amb, diff, spec, shin, refl)
}

impl Preset {
    /// Camera shared by all presets.
    pub fn camera(self) -> Camera {
        Camera::new(dvec3(0.0, 1.0, 5.0), dvec3(0.0, 0.0, 0.0))
    }

    /// Build the scene for this preset.
    pub fn build(self) -> Scene {
        let mut scene = Scene::new();
        match self {
            Preset::MirrorGallery => mirror_gallery(&mut scene),
            Preset::NeonDreams => neon_dreams(&mut scene),
            Preset::PlanetarySystem => planetary_system(&mut scene),
            Preset::GlassOrbs => glass_orbs(&mut scene),
            Preset::GoldenHour => golden_hour(&mut scene),
            Preset::CandyLand => candy_land(&mut scene),
            Preset::DeepOcean => deep_ocean(&mut scene),
        }
        scene
    }
}

fn mirror_gallery(scene: &mut Scene) {
    let chrome1 = mat(0.9, 0.9, 1.0, 0.05, 0.3, 1.0, 512.0, 0.9);
    let chrome2 = mat(1.0, 0.9, 0.9, 0.05, 0.3, 1.0, 512.0, 0.9);
    let chrome3 = mat(0.9, 1.0, 0.9, 0.05, 0.3, 1.0, 512.0, 0.9);
    let gold_mirror = mat(1.0, 0.84, 0.0, 0.1, 0.3, 1.0, 512.0, 0.85);
    let floor = mat(0.2, 0.2, 0.25, 0.1, 0.6, 0.4, 64.0, 0.3);

    scene.add_sphere(dvec3(0.0, 0.0, 0.0), 1.0, gold_mirror);
    scene.add_sphere(dvec3(2.5, 0.0, 0.0), 0.7, chrome1);
    scene.add_sphere(dvec3(-2.5, 0.0, 0.0), 0.7, chrome2);
    scene.add_sphere(dvec3(0.0, 0.0, 2.5), 0.7, chrome3);
    scene.add_sphere(dvec3(0.0, 0.0, -2.5), 0.7, chrome1);
    scene.add_sphere(dvec3(0.0, 2.0, 0.0), 0.5, chrome2);
    scene.add_sphere(dvec3(0.0, -101.0, 0.0), 100.0, floor);

    scene.add_light(dvec3(5.0, 8.0, 5.0), Color::ONE, 1.2);
    scene.add_light(dvec3(-5.0, 8.0, -5.0), Color::new(0.8, 0.9, 1.0), 0.8);
    // Uplight
    scene.add_light(dvec3(0.0, -3.0, 0.0), Color::new(1.0, 0.9, 0.8), 0.3);
}

fn neon_dreams(scene: &mut Scene) {
    let neon_pink = mat(1.0, 0.1, 0.5, 0.15, 0.6, 1.0, 256.0, 0.7);
    let neon_cyan = mat(0.0, 0.9, 1.0, 0.15, 0.6, 1.0, 256.0, 0.7);
    let neon_green = mat(0.2, 1.0, 0.2, 0.15, 0.6, 1.0, 256.0, 0.7);
    let neon_purple = mat(0.8, 0.2, 1.0, 0.15, 0.6, 1.0, 256.0, 0.7);
    let neon_yellow = mat(1.0, 1.0, 0.1, 0.15, 0.6, 1.0, 256.0, 0.7);
    let dark_floor = mat(0.05, 0.05, 0.1, 0.05, 0.3, 0.8, 128.0, 0.6);

    scene.add_sphere(dvec3(-2.0, 0.5, 0.0), 1.2, neon_pink);
    scene.add_sphere(dvec3(2.0, 0.5, 0.0), 1.2, neon_cyan);
    scene.add_sphere(dvec3(0.0, 0.5, 2.0), 1.2, neon_green);
    scene.add_sphere(dvec3(0.0, 2.5, 0.0), 0.8, neon_purple);
    scene.add_sphere(dvec3(0.0, 0.5, -2.0), 1.2, neon_yellow);
    scene.add_sphere(dvec3(0.0, -101.0, 0.0), 100.0, dark_floor);

    scene.add_light(dvec3(-5.0, 5.0, 5.0), Color::new(1.0, 0.2, 0.8), 1.0);
    scene.add_light(dvec3(5.0, 5.0, 5.0), Color::new(0.2, 0.8, 1.0), 1.0);
    scene.add_light(dvec3(0.0, 8.0, 0.0), Color::ONE, 0.5);
}

fn planetary_system(scene: &mut Scene) {
    let sun = mat(1.0, 0.9, 0.3, 0.3, 0.7, 0.3, 16.0, 0.1);
    let mercury = mat(0.7, 0.7, 0.7, 0.1, 0.6, 0.8, 128.0, 0.4);
    let venus = mat(1.0, 0.8, 0.5, 0.1, 0.7, 0.6, 64.0, 0.3);
    let earth = mat(0.2, 0.5, 1.0, 0.1, 0.8, 0.5, 64.0, 0.4);
    let mars = mat(0.9, 0.4, 0.2, 0.1, 0.7, 0.4, 32.0, 0.3);
    let jupiter = mat(0.8, 0.6, 0.4, 0.1, 0.7, 0.5, 64.0, 0.4);
    let space = mat(0.01, 0.01, 0.02, 0.02, 0.2, 0.1, 8.0, 0.05);

    scene.add_sphere(dvec3(0.0, 0.0, -3.0), 1.5, sun);
    scene.add_sphere(dvec3(-2.5, -0.2, 0.0), 0.3, mercury);
    scene.add_sphere(dvec3(-1.5, 0.3, 2.0), 0.5, venus);
    scene.add_sphere(dvec3(2.0, -0.3, 1.0), 0.6, earth);
    scene.add_sphere(dvec3(3.5, 0.5, -1.0), 0.4, mars);
    scene.add_sphere(dvec3(-3.0, 1.0, 3.0), 1.0, jupiter);
    scene.add_sphere(dvec3(0.0, -101.0, 0.0), 100.0, space);

    scene.add_light(dvec3(-2.0, 3.0, -3.0), Color::new(1.0, 0.95, 0.8), 1.5);
    // Fill
    scene.add_light(dvec3(5.0, 5.0, 5.0), Color::new(0.3, 0.3, 0.4), 0.3);
}

fn glass_orbs(scene: &mut Scene) {
    let glass_clear = mat(0.95, 0.95, 1.0, 0.05, 0.2, 1.0, 512.0, 0.8);
    let glass_blue = mat(0.7, 0.85, 1.0, 0.05, 0.25, 1.0, 512.0, 0.75);
    let glass_amber = mat(1.0, 0.8, 0.5, 0.05, 0.25, 1.0, 512.0, 0.75);
    let glass_green = mat(0.7, 1.0, 0.85, 0.05, 0.25, 1.0, 512.0, 0.75);
    let glass_rose = mat(1.0, 0.8, 0.9, 0.05, 0.25, 1.0, 512.0, 0.75);
    let marble_floor = mat(0.85, 0.85, 0.9, 0.15, 0.6, 0.7, 128.0, 0.4);

    scene.add_sphere(dvec3(0.0, 0.0, 0.0), 1.0, glass_clear);
    scene.add_sphere(dvec3(-2.2, -0.3, 0.5), 0.7, glass_blue);
    scene.add_sphere(dvec3(2.2, -0.3, 0.5), 0.7, glass_amber);
    scene.add_sphere(dvec3(-1.5, 1.2, 1.0), 0.5, glass_green);
    scene.add_sphere(dvec3(1.5, 1.2, 1.0), 0.5, glass_rose);
    scene.add_sphere(dvec3(0.0, -101.0, 0.0), 100.0, marble_floor);

    scene.add_light(dvec3(-5.0, 8.0, 3.0), Color::ONE, 1.2);
    scene.add_light(dvec3(5.0, 8.0, 3.0), Color::ONE, 1.2);
    // Backlight
    scene.add_light(dvec3(0.0, 3.0, -5.0), Color::new(0.8, 0.8, 1.0), 0.6);
}

fn golden_hour(scene: &mut Scene) {
    let terracotta = mat(0.8, 0.4, 0.3, 0.15, 0.7, 0.3, 32.0, 0.2);
    let sand = mat(0.9, 0.8, 0.6, 0.2, 0.7, 0.2, 16.0, 0.1);
    let copper = mat(0.9, 0.6, 0.4, 0.1, 0.5, 0.9, 256.0, 0.6);
    let bronze = mat(0.7, 0.5, 0.3, 0.1, 0.6, 0.8, 128.0, 0.5);
    let clay = mat(0.7, 0.5, 0.4, 0.15, 0.7, 0.3, 32.0, 0.2);
    let desert_floor = mat(0.8, 0.7, 0.5, 0.2, 0.7, 0.2, 16.0, 0.15);

    scene.add_sphere(dvec3(0.0, 0.0, 0.0), 1.0, copper);
    scene.add_sphere(dvec3(-2.5, -0.2, -0.5), 0.8, terracotta);
    scene.add_sphere(dvec3(2.5, 0.3, 0.5), 1.0, bronze);
    scene.add_sphere(dvec3(-1.0, 1.5, 1.5), 0.6, clay);
    scene.add_sphere(dvec3(1.2, 1.8, -1.0), 0.5, sand);
    scene.add_sphere(dvec3(0.0, -101.0, 0.0), 100.0, desert_floor);

    scene.add_light(dvec3(-8.0, 3.0, 2.0), Color::new(1.0, 0.7, 0.4), 1.5);
    scene.add_light(dvec3(5.0, 8.0, -3.0), Color::new(0.6, 0.7, 1.0), 0.4);
}

fn candy_land(scene: &mut Scene) {
    let bubblegum = mat(1.0, 0.4, 0.7, 0.2, 0.7, 0.6, 64.0, 0.3);
    let lemon = mat(1.0, 1.0, 0.3, 0.2, 0.7, 0.5, 64.0, 0.3);
    let mint = mat(0.4, 1.0, 0.7, 0.2, 0.7, 0.5, 64.0, 0.3);
    let grape = mat(0.6, 0.3, 1.0, 0.2, 0.7, 0.6, 64.0, 0.3);
    let orange = mat(1.0, 0.6, 0.2, 0.2, 0.7, 0.5, 64.0, 0.3);
    let cream = mat(1.0, 0.95, 0.85, 0.3, 0.6, 0.3, 32.0, 0.2);

    scene.add_sphere(dvec3(0.0, 0.0, 0.0), 1.0, bubblegum);
    scene.add_sphere(dvec3(-1.8, -0.3, 0.8), 0.8, lemon);
    scene.add_sphere(dvec3(1.8, -0.3, 0.8), 0.8, mint);
    scene.add_sphere(dvec3(-0.8, 1.3, 1.2), 0.7, grape);
    scene.add_sphere(dvec3(0.8, 1.3, 1.2), 0.7, orange);
    scene.add_sphere(dvec3(0.0, -101.0, 0.0), 100.0, cream);

    scene.add_light(dvec3(-5.0, 8.0, 5.0), Color::ONE, 1.0);
    scene.add_light(dvec3(5.0, 8.0, 5.0), Color::ONE, 1.0);
}

fn deep_ocean(scene: &mut Scene) {
    let pearl = mat(0.9, 0.95, 1.0, 0.1, 0.4, 1.0, 256.0, 0.7);
    let aqua = mat(0.3, 0.7, 0.8, 0.15, 0.6, 0.6, 64.0, 0.4);
    let deep_blue = mat(0.2, 0.4, 0.7, 0.15, 0.6, 0.5, 64.0, 0.3);
    let teal = mat(0.2, 0.6, 0.6, 0.15, 0.6, 0.6, 64.0, 0.4);
    let coral = mat(0.9, 0.5, 0.5, 0.15, 0.7, 0.4, 32.0, 0.2);
    let ocean_floor = mat(0.15, 0.25, 0.35, 0.1, 0.5, 0.3, 32.0, 0.2);

    scene.add_sphere(dvec3(0.0, 0.5, 0.0), 1.0, pearl);
    scene.add_sphere(dvec3(-2.0, 0.0, 1.0), 0.7, aqua);
    scene.add_sphere(dvec3(2.0, 1.0, 0.0), 0.8, deep_blue);
    scene.add_sphere(dvec3(-1.0, 2.0, -1.0), 0.5, teal);
    scene.add_sphere(dvec3(1.5, -0.3, 2.0), 0.6, coral);
    scene.add_sphere(dvec3(0.0, -101.0, 0.0), 100.0, ocean_floor);

    scene.add_light(dvec3(-3.0, 10.0, 0.0), Color::new(0.6, 0.8, 1.0), 0.8);
    scene.add_light(dvec3(5.0, 5.0, 5.0), Color::new(0.4, 0.6, 0.8), 0.5);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_renderer::{render, RenderConfig};

    #[test]
    fn test_preset_sizes() {
        let expected = [
            (Preset::MirrorGallery, 7, 3),
            (Preset::NeonDreams, 6, 3),
            (Preset::PlanetarySystem, 7, 2),
            (Preset::GlassOrbs, 6, 3),
            (Preset::GoldenHour, 6, 2),
            (Preset::CandyLand, 6, 2),
            (Preset::DeepOcean, 6, 2),
        ];
        assert_eq!(expected.len(), Preset::value_variants().len());

        for (preset, spheres, lights) in expected {
            let scene = preset.build();
            assert_eq!(scene.sphere_count(), spheres, "{:?}", preset);
            assert_eq!(scene.light_count(), lights, "{:?}", preset);
        }
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(Preset::from_str("mirror-gallery", false), Ok(Preset::MirrorGallery));
        assert_eq!(Preset::from_str("candy-land", false), Ok(Preset::CandyLand));
    }

    #[test]
    fn test_presets_render() {
        let config = RenderConfig::default().with_resolution(8, 6).with_progress(false);
        for &preset in Preset::value_variants() {
            let frame = render(&preset.build(), &preset.camera(), &config).expect("render");
            assert_eq!(frame.pixels().len(), 48);
        }
    }
}
