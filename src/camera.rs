use crate::ray::Ray;
use crate::vector::Vector3;
use crate::world::World;
use crate::canvas::Canvas;

/// A camera for generating a canvas.
///
/// The camera is fixed at the world origin looking down the negative z
/// axis; the field of view is the only lever for framing a scene. There
/// is no view transform.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Camera {
    /// The horizontal size of the resultant canvas.
    pub width: usize,

    /// The vertical size of the resultant canvas.
    pub height: usize,

    /// The angle describing "how much" the camera can see.
    pub field_of_view: f64,
}

impl Camera {
    pub fn new(width: usize, height: usize, field_of_view: f64) -> Camera {
        Camera { width, height, field_of_view }
    }

    /// Builds the ray passing through the center of a pixel.
    ///
    /// Pixels are sampled at their centers and mapped onto a screen plane
    /// one unit in front of the camera, scaled by the field of view and
    /// corrected for the aspect ratio.
    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Ray {
        let scale = (self.field_of_view / 2.0).tan();
        let aspect = (self.width as f64) / (self.height as f64);

        let x = (2.0 * (px as f64 + 0.5) / (self.width as f64) - 1.0)
            * scale * aspect;
        let y = -(2.0 * (py as f64 + 0.5) / (self.height as f64) - 1.0)
            * scale;

        let direction = Vector3::new(x, y, -1.0).normalize();
        Ray::new(Vector3::zero(), direction)
    }

    /// Renders a world onto a fresh canvas, one ray per pixel.
    pub fn render(&self, world: &World, depth: u32) -> Canvas {
        let mut image = Canvas::new(self.width, self.height);

        for y in 0..self.height {
            for x in 0..self.width {
                let ray = self.ray_for_pixel(x, y);
                let color = world.cast(&ray, depth);
                image.write_pixel(x, y, &color);
            }
        }

        image
    }
}

/* Tests */

#[test]
fn ray_through_center() {
    let c = Camera::new(201, 101, std::f64::consts::PI / 2.0);
    let r = c.ray_for_pixel(100, 50);

    assert_eq!(r.origin, Vector3::zero());
    assert_eq!(r.direction, Vector3::new(0.0, 0.0, -1.0));
}

#[test]
fn ray_through_corner_is_unit() {
    let c = Camera::new(201, 101, std::f64::consts::PI / 2.0);
    let r = c.ray_for_pixel(0, 0);

    assert_eq!(r.origin, Vector3::zero());
    assert!(crate::feq(r.direction.magnitude(), 1.0));
}

#[test]
fn rays_lean_left_and_up_for_top_left() {
    let c = Camera::new(100, 100, std::f64::consts::PI / 3.0);
    let r = c.ray_for_pixel(0, 0);

    assert!(r.direction.x < 0.0);
    assert!(r.direction.y > 0.0);
    assert!(r.direction.z < 0.0);
}

#[test]
fn render_empty_world_is_background() {
    use crate::world::{ World, BACKGROUND };

    let c = Camera::new(4, 4, std::f64::consts::PI / 3.0);
    let w = World::empty();
    let image = c.render(&w, 3);

    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(image.read_pixel(x, y).unwrap(), BACKGROUND);
        }
    }
}
