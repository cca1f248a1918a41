use crate::ray::Ray;
use crate::vector::Vector3;
use crate::color::Color;
use crate::light::Light;
use crate::geometry::Sphere;
use crate::consts::SHADOW_BIAS;

/// The color returned for rays that escape the scene entirely.
pub const BACKGROUND: Color = Color::rgb(0.2, 0.7, 0.8);

/// A world with spheres and lights.
///
/// Worlds collect everything a ray can interact with. The whole structure
/// is read-only for the duration of a render; every cast borrows it
/// immutably, so per-pixel casts are independent of one another. Both
/// collections keep their construction order, which is what breaks
/// intersection-distance ties.
pub struct World {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl Default for World {
    /// A demo world: four spheres of varying gloss under two lights.
    fn default() -> World {
        World {
            spheres: vec![
                Sphere::new(Vector3::new(2.1, 0.0, -3.0), 0.8,
                    Color::rgb(0.4, 0.4, 0.3), 0.25, 50.0),
                Sphere::new(Vector3::new(4.0, 4.0, -10.0), 1.5,
                    Color::rgb(0.7, 0.3, 0.5), 0.5, 50.0),
                Sphere::new(Vector3::new(2.0, -2.5, -5.0), 1.2,
                    Color::rgb(0.3, 0.6, 0.7), 0.5, 50.0),
                Sphere::new(Vector3::new(-2.0, 0.0, -10.0), 4.2,
                    Color::rgb(0.3, 0.1, 0.9), 0.5, 50.0),
            ],
            lights: vec![
                Light::new(Vector3::new(1.0, 2.0, 3.0), 1.4),
                Light::new(Vector3::new(3.0, -2.0, -3.0), 1.0),
            ],
        }
    }
}

impl World {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> World {
        World { spheres, lights }
    }

    /// Creates an empty world with no spheres and no lights.
    pub fn empty() -> World {
        World { spheres: Vec::new(), lights: Vec::new() }
    }

    /// Finds the nearest sphere hit by a ray.
    ///
    /// Linear scan over every sphere, keeping the minimum distance. Ties
    /// go to the sphere encountered first in scan order, so results are
    /// deterministic for a fixed world.
    fn nearest_hit(&self, ray: &Ray) -> Option<(&Sphere, f64)> {
        let mut nearest: Option<(&Sphere, f64)> = None;

        for sphere in self.spheres.iter() {
            if let Some(t) = sphere.intersect(ray) {
                match nearest {
                    Some((_, nearest_t)) if nearest_t <= t => {},
                    _ => nearest = Some((sphere, t)),
                }
            }
        }

        nearest
    }

    /// Determines whether anything blocks a ray toward a light.
    ///
    /// Any intersection occludes, no matter how far along the ray it
    /// lies; an occluder beyond the light itself still casts a shadow.
    fn occluded(&self, shadow_ray: &Ray) -> bool {
        self.spheres.iter().any(|s| s.intersect(shadow_ray).is_some())
    }

    /// Determines the color seen along a ray.
    ///
    /// Shades the nearest hit with Phong diffuse and specular terms under
    /// binary shadow testing, then recurses along the mirror reflection
    /// and blends the two by albedo. `depth` bounds the reflection chain;
    /// at zero the ray contributes black, which is the only termination
    /// guarantee for mirror chains.
    pub fn cast(&self, ray: &Ray, depth: u32) -> Color {
        if depth == 0 {
            return Color::black();
        }

        let (sphere, t) = match self.nearest_hit(ray) {
            Some(hit) => hit,
            None => return BACKGROUND,
        };

        let point = ray.position(t);
        let normal = (point - sphere.center).normalize();

        let mut diffuse = 0.0;
        let mut specular = 0.0;

        for light in self.lights.iter() {
            let light_dir = (light.position - point).normalize();
            let shadow_ray = Ray::new(
                offset_origin(point, normal, light_dir), light_dir);

            if self.occluded(&shadow_ray) {
                continue;
            }

            let (d, s) = light.phong(
                light_dir, normal, ray.direction, sphere.specular_exponent);
            diffuse += d;
            specular += s;
        }

        let reflect_dir = ray.direction.reflect(&normal).normalize();
        let reflect_ray = Ray::new(
            offset_origin(point, normal, reflect_dir), reflect_dir);
        let reflected = self.cast(&reflect_ray, depth - 1);

        sphere.color * (diffuse * sphere.albedo)
            + Color::white() * specular
            + reflected * (1.0 - sphere.albedo)
    }
}

/// Nudges a secondary ray origin off the surface it starts on.
///
/// Without the bias, shadow and reflection rays re-intersect their own
/// surface at tiny distances ("shadow acne"). The offset goes along the
/// normal, on whichever side the new direction leaves from.
fn offset_origin(point: Vector3, normal: Vector3, direction: Vector3)
    -> Vector3 {
    if direction.dot(&normal) < 0.0 {
        point - normal * SHADOW_BIAS
    } else {
        point + normal * SHADOW_BIAS
    }
}

/* Tests */

#[test]
fn cast_at_depth_zero_is_black() {
    let w: World = Default::default();
    let r = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));

    assert_eq!(w.cast(&r, 0), Color::black());
}

#[test]
fn cast_miss_is_background() {
    let w: World = Default::default();
    let r = Ray::new(Vector3::zero(), Vector3::new(0.0, 1.0, 0.0));

    assert_eq!(w.cast(&r, 1), BACKGROUND);
    assert_eq!(w.cast(&r, 5), BACKGROUND);
}

#[test]
fn cast_hit_shades_diffuse() {
    let w = World::new(
        vec![Sphere::new(Vector3::new(0.0, 0.0, -5.0), 1.0,
            Color::rgb(0.9, 0.1, 0.1), 0.5, 50.0)],
        vec![Light::new(Vector3::new(0.0, 5.0, 0.0), 1.0)],
    );

    let r = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));

    // The hit point is (0, 0, -4) with normal +z; the light sits above
    // and in front of the surface, so cos(angle) = 4 / sqrt(41).
    let diffuse = 4.0 / 41.0f64.sqrt();
    let local = Color::rgb(0.9, 0.1, 0.1) * (diffuse * 0.5);

    // At depth 1 the reflected ray contributes black.
    assert_eq!(w.cast(&r, 1), local);
    assert_ne!(w.cast(&r, 1), BACKGROUND);

    // At depth 2 the mirror ray escapes into the background, and half of
    // it blends in through the albedo split.
    assert_eq!(w.cast(&r, 2), local + BACKGROUND * 0.5);
}

#[test]
fn shadowed_hit_keeps_only_reflection() {
    let w = World::new(
        vec![
            Sphere::new(Vector3::new(0.0, 0.0, -3.0), 1.0,
                Color::rgb(0.4, 0.4, 0.3), 0.5, 50.0),
            Sphere::new(Vector3::new(0.0, 0.0, -10.0), 2.0,
                Color::rgb(0.7, 0.3, 0.5), 0.5, 50.0),
        ],
        vec![Light::new(Vector3::new(0.0, 0.0, -20.0), 1.0)],
    );

    let r = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));
    let c = w.cast(&r, 2);

    // Diffuse and specular are fully occluded; half the background
    // arrives through the mirror term.
    assert_eq!(c, BACKGROUND * 0.5);
}

#[test]
fn occluder_beyond_light_still_shadows() {
    let mut w = World::new(
        vec![Sphere::new(Vector3::new(0.0, 0.0, -3.0), 1.0,
            Color::rgb(0.4, 0.4, 0.3), 0.5, 50.0)],
        vec![Light::new(Vector3::zero(), 1.0)],
    );

    let r = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));
    let lit = w.cast(&r, 1);

    // The shadow ray from (0, 0, -2) reaches the light after two units,
    // but the occluding sphere sits six units out on the same ray. The
    // shadow test has no distance-to-light cutoff, so it darkens anyway.
    w.spheres.push(Sphere::new(Vector3::new(0.0, 0.0, 5.0), 1.0,
        Color::rgb(0.3, 0.6, 0.7), 0.5, 50.0));
    let shadowed = w.cast(&r, 1);

    assert_ne!(lit, shadowed);
    assert_eq!(shadowed, Color::black());
}

#[test]
fn nearest_hit_prefers_closest() {
    let near = Sphere::new(Vector3::new(0.0, 0.0, -3.0), 1.0,
        Color::rgb(0.4, 0.4, 0.3), 0.5, 50.0);
    let far = Sphere::new(Vector3::new(0.0, 0.0, -10.0), 1.0,
        Color::rgb(0.7, 0.3, 0.5), 0.5, 50.0);

    // Scan order deliberately lists the far sphere first.
    let w = World::new(vec![far, near], vec![]);
    let r = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));

    let (sphere, t) = w.nearest_hit(&r).expect("ray hits both spheres");
    assert!(crate::feq(t, 2.0));
    assert_eq!(sphere.center, near.center);
}
