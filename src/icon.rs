use crate::text::Typeface;
use image::{DynamicImage, RgbImage, Rgba, RgbaImage};

/// Launcher background, matches values/ic_launcher_background.xml.
pub const BACKGROUND: Rgba<u8> = Rgba([124, 58, 237, 255]);

pub const LABEL_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

// Fit box for the label: 15% padding on each side.
const FIT_WIDTH: f32 = 0.70;
const FIT_HEIGHT: f32 = 0.60;

/// Renders the three launcher images for one density from a text label.
pub struct IconRenderer {
    typeface: Typeface,
    label: String,
    background: Rgba<u8>,
}

impl IconRenderer {
    pub fn new(typeface: Typeface, label: impl Into<String>, background: Rgba<u8>) -> Self {
        Self {
            typeface,
            label: label.into(),
            background,
        }
    }

    /// Adaptive foreground layer: white label on a transparent canvas.
    pub fn foreground(&self, size: u32) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
        self.draw_label(&mut img);
        img
    }

    /// Legacy launcher icon: white label on the opaque background color.
    pub fn launcher(&self, size: u32) -> RgbImage {
        DynamicImage::ImageRgba8(self.launcher_rgba(size)).to_rgb8()
    }

    /// Round launcher icon: the legacy icon masked through the circle
    /// inscribed in the square, composited onto transparency.
    pub fn round(&self, size: u32) -> RgbaImage {
        let base = self.launcher_rgba(size);
        let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
        let radius = size as f32 / 2.0;
        for (x, y, pixel) in base.enumerate_pixels() {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(x, y, *pixel);
            }
        }
        img
    }

    fn launcher_rgba(&self, size: u32) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(size, size, self.background);
        self.draw_label(&mut img);
        img
    }

    /// Draws the label centered in `img`, sized to the largest fit inside
    /// the padded box.
    fn draw_label(&self, img: &mut RgbaImage) {
        let (width, height) = img.dimensions();
        let max_width = (width as f32 * FIT_WIDTH) as u32;
        let max_height = (height as f32 * FIT_HEIGHT) as u32;
        let size = self.typeface.fit(&self.label, max_width, max_height);
        let bounds = self.typeface.measure(&self.label, size);
        let dx = (width as i32 - bounds.width() as i32) / 2 - bounds.min_x;
        let dy = (height as i32 - bounds.height() as i32) / 2 - bounds.min_y;
        self.typeface.draw(&self.label, size, |x, y, coverage| {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                return;
            }
            blend(img.get_pixel_mut(px as u32, py as u32), LABEL_COLOR, coverage);
        });
    }
}

/// Source-over blend of `src` at `coverage` onto `dst`.
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>, coverage: f32) {
    let alpha = coverage.clamp(0.0, 1.0) * src.0[3] as f32 / 255.0;
    for i in 0..3 {
        let d = dst.0[i] as f32 / 255.0;
        let s = src.0[i] as f32 / 255.0;
        dst.0[i] = ((s * alpha + d * (1.0 - alpha)) * 255.0).round() as u8;
    }
    let dst_alpha = dst.0[3] as f32 / 255.0;
    dst.0[3] = ((alpha + dst_alpha * (1.0 - alpha)) * 255.0).round() as u8;
}
