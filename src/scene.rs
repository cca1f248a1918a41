use std::fs;
use std::path::Path;

use serde::{ Serialize, Deserialize };
use thiserror::Error;

use crate::light::Light;
use crate::geometry::Sphere;
use crate::world::World;

/// An error produced while loading a scene description.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads a world from a JSON scene description file.
pub fn load(path: &Path) -> Result<World, SceneError> {
    let text = fs::read_to_string(path)?;
    let scene_json: SceneJson = serde_json::from_str(&text)?;

    Ok(scene_json.into())
}

/// A JSON scene description.
///
/// Positions and colors are written as arrays, e.g.
/// `{ "center": [0.0, 0.0, -5.0], ... }`. Sphere and light order in the
/// file is preserved in the world, which fixes how intersection-distance
/// ties are broken.
#[derive(Serialize, Deserialize)]
pub struct SceneJson {
    spheres: Vec<SphereJson>,
    lights: Vec<LightJson>,
}

#[derive(Clone, Serialize, Deserialize)]
struct SphereJson {
    center: Vec<f64>,
    radius: f64,
    color: Vec<f64>,
    albedo: f64,
    specular_exponent: f64,
}

#[derive(Clone, Serialize, Deserialize)]
struct LightJson {
    position: Vec<f64>,
    intensity: f64,
}

impl From<SceneJson> for World {
    fn from(scene_json: SceneJson) -> World {
        let spheres = scene_json.spheres.into_iter()
            .map(|x| x.into()).collect();
        let lights = scene_json.lights.into_iter()
            .map(|x| x.into()).collect();

        World::new(spheres, lights)
    }
}

impl From<SphereJson> for Sphere {
    fn from(sphere_json: SphereJson) -> Sphere {
        Sphere::new(
            (&sphere_json.center).into(),
            sphere_json.radius,
            (&sphere_json.color).into(),
            sphere_json.albedo,
            sphere_json.specular_exponent,
        )
    }
}

impl From<LightJson> for Light {
    fn from(light_json: LightJson) -> Light {
        Light::new((&light_json.position).into(), light_json.intensity)
    }
}

/* Tests */

#[test]
fn world_from_scene_json() {
    use crate::vector::Vector3;
    use crate::color::Color;

    let text = r#"{
        "spheres": [
            {
                "center": [0.0, 0.0, -5.0],
                "radius": 1.0,
                "color": [0.9, 0.1, 0.1],
                "albedo": 0.5,
                "specular_exponent": 50.0
            }
        ],
        "lights": [
            { "position": [1.0, 2.0, 3.0], "intensity": 1.4 }
        ]
    }"#;

    let scene_json: SceneJson = serde_json::from_str(text).unwrap();
    let world: World = scene_json.into();

    assert_eq!(world.spheres.len(), 1);
    assert_eq!(world.lights.len(), 1);

    let sphere = &world.spheres[0];
    assert_eq!(sphere.center, Vector3::new(0.0, 0.0, -5.0));
    assert_eq!(sphere.color, Color::rgb(0.9, 0.1, 0.1));
    assert_eq!(sphere.albedo, 0.5);

    let light = &world.lights[0];
    assert_eq!(light.position, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(light.intensity, 1.4);
}
