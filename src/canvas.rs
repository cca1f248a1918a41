use std::io;
use std::io::Write;
use std::fs::File;
use std::path::Path;

use thiserror::Error;

use crate::color::Color;

/// An error produced while saving a canvas to disk.
///
/// Rendering itself cannot fail; the output sink is the one boundary
/// where failures happen, and they are returned to the caller rather
/// than handled here.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to write image: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// A canvas for drawing pixels.
///
/// This structure stores the linear colors the tracer produces for each
/// pixel. Once execution finishes, the canvas can be quantized and saved
/// to an image file; PNG and plain-text PPM are supported, chosen by
/// file extension.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Canvas {
    /// The width of the canvas, in pixels.
    pub width: usize,

    /// The height of the canvas, in pixels.
    pub height: usize,

    /// The pixels of the canvas, stored as a flattened vector.
    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates a new canvas with specified width and height.
    ///
    /// This function allocates a `Vec<Color>` of size `width * height`,
    /// which may take up a decent amount of memory, depending on image
    /// size.
    pub fn new(width: usize, height: usize) -> Canvas {
        Canvas {
            width,
            height,
            pixels: vec![Color::black(); width * height],
        }
    }

    /// Saves a canvas to an image file.
    ///
    /// The format follows the file extension: `.ppm` produces a
    /// plain-text PPM, anything else is handed to the image encoder (PNG
    /// in the default build). Failing to create, encode or finalize the
    /// file surfaces as a `SaveError`.
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ppm") => Ok(self.save_ppm(path)?),
            _ => self.save_image(path),
        }
    }

    fn save_image(&self, path: &Path) -> Result<(), SaveError> {
        let mut buffer = Vec::with_capacity(self.width * self.height * 4);
        for pixel in self.pixels.iter() {
            buffer.extend_from_slice(&pixel.to_rgba());
        }

        image::save_buffer(path, &buffer, self.width as u32,
            self.height as u32, image::ColorType::Rgba8)?;

        Ok(())
    }

    fn save_ppm(&self, path: &Path) -> io::Result<()> {
        let mut out = File::create(path)?;

        // Write PPM header to file, as well as metadata
        writeln!(&mut out, "P3")?;
        writeln!(&mut out, "{} {}", self.width, self.height)?;
        writeln!(&mut out, "255")?; // Maximum color value

        // One pixel per line keeps every line comfortably short.
        for pixel in self.pixels.iter() {
            let [r, g, b, _] = pixel.to_rgba();
            writeln!(&mut out, "{} {} {}", r, g, b)?;
        }

        Ok(())
    }

    /// Writes a color to a location on the `Canvas`.
    ///
    /// Out-of-bounds pixels are ignored. Pixels are specified in
    /// row-column order, where `y` is the row of the pixel, and `x` is
    /// the column. Rows and columns are zero-indexed.
    ///
    /// # Examples
    ///
    /// Writing a pixel to the fourth column, second row on an 8-by-8
    /// canvas:
    ///
    /// ```
    /// # use whitted_tracer::color::Color;
    /// # use whitted_tracer::canvas::Canvas;
    /// let purple = Color::rgb(1.0, 0.0, 1.0);
    /// let mut canvas = Canvas::new(8, 8);
    /// canvas.write_pixel(4, 2, &purple);
    /// assert_eq!(canvas.read_pixel(4, 2).unwrap(), purple);
    /// ```
    pub fn write_pixel(&mut self, x: usize, y: usize, pixel: &Color) {
        // Silently ignore out-of-bounds pixels
        if x >= self.width || y >= self.height {
            return;
        }

        self.pixels[(y * self.width) + x] = *pixel;
    }

    /// Reads a color from a location on the `Canvas`.
    ///
    /// Pixels are specified in row-column order, where `y` is the row of
    /// the pixel, and `x` is the column. Rows and columns are
    /// zero-indexed. If the specified pixel location is out-of-bounds,
    /// `None` is returned by this function.
    pub fn read_pixel(&self, x: usize, y: usize) -> Option<Color> {
        // Return nothing if pixel is out-of-bounds
        if x >= self.width || y >= self.height {
            return None
        }

        Some(self.pixels[(y * self.width) + x])
    }
}

/* Tests */

#[test]
fn write_and_read_pixel() {
    let mut canvas = Canvas::new(8, 8);
    let color = Color::rgb(0.1, 0.2, 0.3);

    canvas.write_pixel(4, 2, &color);

    assert_eq!(canvas.read_pixel(4, 2), Some(color));
    assert_eq!(canvas.read_pixel(0, 0), Some(Color::black()));
}

#[test]
fn out_of_bounds_pixels_are_ignored() {
    let mut canvas = Canvas::new(2, 2);
    let color = Color::rgb(1.0, 1.0, 1.0);

    canvas.write_pixel(2, 0, &color);
    canvas.write_pixel(0, 2, &color);

    assert_eq!(canvas.read_pixel(2, 0), None);
    assert_eq!(canvas.read_pixel(0, 2), None);
    assert_eq!(canvas, Canvas::new(2, 2));
}
