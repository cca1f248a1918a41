use crate::vector::Vector3;
use crate::color::Color;
use crate::ray::Ray;

/// A sphere and its surface appearance.
///
/// The only primitive the tracer knows about. `albedo` splits the final
/// shade between local Phong color and the mirror-reflected color; the
/// specular exponent controls how tight the highlight is.
///
/// Spheres are immutable for the duration of a render and owned by the
/// `World` collection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f64,
    pub color: Color,
    pub albedo: f64,
    pub specular_exponent: f64,
}

impl Sphere {
    pub fn new(center: Vector3, radius: f64, color: Color, albedo: f64,
        specular_exponent: f64) -> Sphere {
        Sphere { center, radius, color, albedo, specular_exponent }
    }

    /// Checks whether a ray intersects this sphere.
    ///
    /// Returns the smallest non-negative distance along the ray, in units
    /// of the direction's length. A ray starting inside the sphere hits
    /// the far surface; a sphere entirely behind the origin is a miss.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let to_center = self.center - ray.origin;
        let tca = to_center.dot(&ray.direction);
        let d2 = to_center.magnitude_squared() - tca * tca;
        let r2 = self.radius * self.radius;

        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let near = tca - thc;
        let far = tca + thc;

        let t = if near < 0.0 { far } else { near };
        if t < 0.0 {
            None
        } else {
            Some(t)
        }
    }
}

/* Tests */

#[cfg(test)]
fn plain_sphere(center: Vector3, radius: f64) -> Sphere {
    Sphere::new(center, radius, Color::rgb(0.4, 0.4, 0.3), 0.5, 50.0)
}

#[test]
fn intersect_sphere_ahead() {
    let s = plain_sphere(Vector3::new(0.0, 0.0, -5.0), 1.0);
    let r = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));

    assert_eq!(s.intersect(&r), Some(4.0));
}

#[test]
fn intersect_sphere_missed() {
    let s = plain_sphere(Vector3::new(0.0, 3.0, -5.0), 1.0);
    let r = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));

    assert_eq!(s.intersect(&r), None);
}

#[test]
fn intersect_from_center() {
    let radius = 2.5;
    let s = plain_sphere(Vector3::zero(), radius);
    let r = Ray::new(Vector3::zero(),
        Vector3::new(1.0, 2.0, -2.0).normalize());

    let t = s.intersect(&r).expect("ray from center always hits");
    assert!(crate::feq(t, radius));
}

#[test]
fn intersect_from_inside() {
    let s = plain_sphere(Vector3::new(0.0, 0.0, -2.0), 3.0);
    let r = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));

    // The near solution is behind the origin, so the far one is taken.
    assert_eq!(s.intersect(&r), Some(5.0));
}

#[test]
fn intersect_sphere_behind() {
    let s = plain_sphere(Vector3::new(0.0, 0.0, 5.0), 1.0);
    let r = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));

    assert_eq!(s.intersect(&r), None);
}
