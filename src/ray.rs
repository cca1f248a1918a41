use crate::vector::Vector3;

/// A ray, described by where it starts and where it points.
///
/// Rays are never stored; the camera and the caster build them on the fly
/// for primary, shadow and reflection probes. The direction is expected
/// to be unit length by the time intersection code sees it, so `t` values
/// read directly as world distances.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: Vector3, direction: Vector3) -> Ray {
        Ray { origin, direction }
    }

    /// The point `t` units along the ray from its origin.
    pub fn position(&self, t: f64) -> Vector3 {
        self.origin + (self.direction * t)
    }
}

#[test]
fn ray_position() {
    let r = Ray::new(
                Vector3::new(2.0, 3.0, 4.0),
                Vector3::new(1.0, 0.0, 0.0)
            );

    assert_eq!(r.position(0.0), Vector3::new(2.0, 3.0, 4.0));
    assert_eq!(r.position(1.0), Vector3::new(3.0, 3.0, 4.0));
    assert_eq!(r.position(-1.0), Vector3::new(1.0, 3.0, 4.0));
    assert_eq!(r.position(2.5), Vector3::new(4.5, 3.0, 4.0));
}
