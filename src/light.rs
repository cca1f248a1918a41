use crate::vector::Vector3;

/// A point light.
///
/// A very simple light source: a position radiating equally in all
/// directions, with an intensity that scales both the diffuse and
/// specular terms it contributes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Light {
    pub position: Vector3,
    pub intensity: f64,
}

impl Light {
    /// Creates a point light.
    pub fn new(position: Vector3, intensity: f64) -> Light {
        Light { position, intensity }
    }

    /// Phong contribution of this light at an unoccluded surface point.
    ///
    /// `light_dir` points from the surface toward the light, `view_dir`
    /// is the direction of the incoming camera ray. Both are expected to
    /// be unit length, as is `normal`.
    ///
    /// Returns the diffuse and specular intensities separately; the
    /// caller decides how to mix them into a color.
    pub fn phong(&self, light_dir: Vector3, normal: Vector3,
        view_dir: Vector3, specular_exponent: f64) -> (f64, f64) {
        let diffuse = self.intensity * light_dir.dot(&normal).max(0.0);

        let highlight = (-light_dir).reflect(&normal);
        let specular = self.intensity
            * highlight.dot(&(-view_dir)).max(0.0).powf(specular_exponent);

        (diffuse, specular)
    }
}

/* Tests */

#[test]
fn light_facing_surface() {
    let light = Light::new(Vector3::new(0.0, 0.0, 10.0), 1.4);

    // Light, normal and viewer all lined up on the same axis.
    let light_dir = Vector3::new(0.0, 0.0, 1.0);
    let normal = Vector3::new(0.0, 0.0, 1.0);
    let view_dir = Vector3::new(0.0, 0.0, -1.0);

    let (diffuse, specular) = light.phong(light_dir, normal, view_dir, 50.0);

    assert!(crate::feq(diffuse, 1.4));
    assert!(crate::feq(specular, 1.4));
}

#[test]
fn light_behind_surface() {
    let light = Light::new(Vector3::new(0.0, 0.0, -10.0), 1.0);

    let light_dir = Vector3::new(0.0, 0.0, -1.0);
    let normal = Vector3::new(0.0, 0.0, 1.0);
    let view_dir = Vector3::new(0.0, 0.0, -1.0);

    let (diffuse, specular) = light.phong(light_dir, normal, view_dir, 50.0);

    assert_eq!(diffuse, 0.0);
    assert_eq!(specular, 0.0);
}

#[test]
fn grazing_light_fades() {
    let light = Light::new(Vector3::new(10.0, 0.0, 0.0), 1.0);

    // 45 degrees off the normal: diffuse falls to cos(45).
    let light_dir = Vector3::new(1.0, 0.0, 1.0).normalize();
    let normal = Vector3::new(0.0, 0.0, 1.0);
    let view_dir = Vector3::new(0.0, 0.0, -1.0);

    let (diffuse, _) = light.phong(light_dir, normal, view_dir, 50.0);

    assert!(crate::feq(diffuse, 2.0f64.sqrt() / 2.0));
}
