use anyhow::Result;
use rusttype::{point, Font, Scale};
use std::path::Path;

pub const BOLD_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

pub const REGULAR_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Picks the bold system face when present, the regular face otherwise.
pub fn resolve_font() -> &'static Path {
    let bold = Path::new(BOLD_FONT);
    if bold.exists() {
        bold
    } else {
        Path::new(REGULAR_FONT)
    }
}

/// Pixel bounding box of laid-out text, relative to the layout origin.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TextBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl TextBounds {
    pub fn width(&self) -> u32 {
        (self.max_x - self.min_x) as u32
    }

    pub fn height(&self) -> u32 {
        (self.max_y - self.min_y) as u32
    }
}

pub struct Typeface {
    font: Font<'static>,
}

impl Typeface {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let font = Font::try_from_vec(data)
            .ok_or_else(|| anyhow::anyhow!("failed to parse font {}", path.display()))?;
        Ok(Self { font })
    }

    pub fn resolve() -> Result<Self> {
        Self::open(resolve_font())
    }

    /// Measures the inked bounding box of `text` at font size `size`.
    ///
    /// Glyphs are laid out with the baseline at the font's ascent, so the
    /// bounds carry the offset from the layout origin needed for centering.
    pub fn measure(&self, text: &str, size: u32) -> TextBounds {
        let scale = Scale::uniform(size as f32);
        let ascent = self.font.v_metrics(scale).ascent;
        let mut bounds: Option<TextBounds> = None;
        for glyph in self.font.layout(text, scale, point(0.0, ascent)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                let b = bounds.get_or_insert(TextBounds {
                    min_x: bb.min.x,
                    min_y: bb.min.y,
                    max_x: bb.max.x,
                    max_y: bb.max.y,
                });
                b.min_x = b.min_x.min(bb.min.x);
                b.min_y = b.min_y.min(bb.min.y);
                b.max_x = b.max_x.max(bb.max.x);
                b.max_y = b.max_y.max(bb.max.y);
            }
        }
        bounds.unwrap_or_default()
    }

    /// Largest font size whose rendered `text` fits in `max_width` x
    /// `max_height`.
    pub fn fit(&self, text: &str, max_width: u32, max_height: u32) -> u32 {
        fit_size(
            |size| {
                let bounds = self.measure(text, size);
                (bounds.width(), bounds.height())
            },
            max_width,
            max_height,
        )
    }

    /// Rasterizes `text` at `size`, invoking `f(x, y, coverage)` for every
    /// inked pixel in the coordinate frame used by [`Typeface::measure`].
    pub fn draw<F: FnMut(i32, i32, f32)>(&self, text: &str, size: u32, mut f: F) {
        let scale = Scale::uniform(size as f32);
        let ascent = self.font.v_metrics(scale).ascent;
        for glyph in self.font.layout(text, scale, point(0.0, ascent)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    f(bb.min.x + gx as i32, bb.min.y + gy as i32, coverage);
                });
            }
        }
    }
}

/// Binary search for the largest size in [8, 1000) whose measured extent
/// fits in `max_width` x `max_height`.
///
/// Assumes `measure` is monotonic non-decreasing in size. Standard font
/// rasterizers scale glyph outlines linearly, so this holds in practice,
/// but it is not verified here.
pub fn fit_size<F>(measure: F, max_width: u32, max_height: u32) -> u32
where
    F: Fn(u32) -> (u32, u32),
{
    let mut lo = 8;
    let mut hi = 1000;
    while lo < hi - 1 {
        let mid = (lo + hi) / 2;
        let (width, height) = measure(mid);
        if width <= max_width && height <= max_height {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}
