//! Owned RGBA pixel buffers.

use crate::{Color, Rect, Size};

/// A width × height grid of RGBA pixels, row-major.
///
/// New bitmaps start fully transparent. All drawing operations clip to the
/// bitmap bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Bitmap {
    /// Create a transparent bitmap.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Create a bitmap filled with a single color.
    #[must_use]
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Native size as a signed [`Size`].
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    /// Full-image rectangle at the origin.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.size())
    }

    /// Raw pixel slice.
    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Read one pixel, `None` when out of bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            self.pixels
                .get(y as usize * self.width as usize + x as usize)
                .copied()
        } else {
            None
        }
    }

    /// Fill a rectangle (clipped to the bitmap) with a color.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(area) = rect.intersection(&self.bounds()) else {
            return;
        };
        let stride = self.width as usize;
        for y in area.y..area.bottom() {
            let row = y as usize * stride;
            self.pixels[row + area.x as usize..row + area.right() as usize].fill(color);
        }
    }

    /// Draw a 1-pixel-tall horizontal line covering `x0..=x1` at row `y`.
    pub fn draw_hline(&mut self, y: i32, x0: i32, x1: i32, color: Color) {
        let (left, right) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        self.fill_rect(Rect::new(left, y, right - left + 1, 1), color);
    }

    /// Copy out one row of pixels.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[Color]> {
        if y < self.height {
            let start = y as usize * self.width as usize;
            Some(&self.pixels[start..start + self.width as usize])
        } else {
            None
        }
    }
}
