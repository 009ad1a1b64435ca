//! Two-color vertical gradient with a cached raster.
//!
//! Channel values are computed as `start + floor((end - start) * i / height)`
//! per pixel row. The integer floor produces visible banding on tall rows;
//! rasters must match this exactly, so there is no float interpolation.

use std::sync::Arc;
use tessera_core::{Bitmap, Canvas, Color, Rect};

/// Vertical gradient from `start` (top) to `end` (bottom).
///
/// Holds at most one raster, keyed by its size. Changing either color drops
/// the raster so the next render regenerates it.
#[derive(Debug, Clone)]
pub struct GradientCache {
    start: Color,
    end: Color,
    cache: Option<Arc<Bitmap>>,
}

impl Default for GradientCache {
    fn default() -> Self {
        Self::new(Color::LIGHT_BLUE, Color::TEAL)
    }
}

impl GradientCache {
    /// Create a gradient between two colors.
    #[must_use]
    pub const fn new(start: Color, end: Color) -> Self {
        Self {
            start,
            end,
            cache: None,
        }
    }

    /// Top color.
    #[must_use]
    pub const fn start(&self) -> Color {
        self.start
    }

    /// Bottom color.
    #[must_use]
    pub const fn end(&self) -> Color {
        self.end
    }

    /// Set the top color, invalidating the raster if it changed.
    pub fn set_start(&mut self, start: Color) {
        if self.start != start {
            self.start = start;
            self.cache = None;
        }
    }

    /// Set the bottom color, invalidating the raster if it changed.
    pub fn set_end(&mut self, end: Color) {
        if self.end != end {
            self.end = end;
            self.cache = None;
        }
    }

    /// True when a raster of exactly this size is cached.
    #[must_use]
    pub fn is_cached(&self, width: u32, height: u32) -> bool {
        self.cache
            .as_ref()
            .is_some_and(|bmp| bmp.width() == width && bmp.height() == height)
    }

    /// Get the gradient raster for a size, regenerating only on a miss.
    pub fn render(&mut self, width: u32, height: u32) -> Arc<Bitmap> {
        self.render_with(width, height, false)
    }

    /// Get the gradient raster, optionally forcing regeneration.
    pub fn render_with(&mut self, width: u32, height: u32, force_redraw: bool) -> Arc<Bitmap> {
        if !force_redraw && self.is_cached(width, height) {
            if let Some(bmp) = &self.cache {
                return Arc::clone(bmp);
            }
        }

        tracing::trace!(width, height, force_redraw, "regenerating gradient raster");
        let bmp = Arc::new(self.rasterize(width, height));
        self.cache = Some(Arc::clone(&bmp));
        bmp
    }

    /// Blit the gradient, unscaled, at the top-left of `rect`.
    ///
    /// Empty rectangles draw nothing and leave the cache untouched.
    pub fn draw(&mut self, canvas: &mut dyn Canvas, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let bmp = self.render(rect.width as u32, rect.height as u32);
        let src = bmp.bounds();
        canvas.draw_image(&bmp, rect.with_size(src.size()), src);
    }

    fn rasterize(&self, width: u32, height: u32) -> Bitmap {
        if self.start == self.end {
            return Bitmap::filled(width, height, self.start);
        }

        let mut bmp = Bitmap::new(width, height);
        let right = width as i32 - 1;
        for i in 0..height {
            let t = i as f32 / height as f32;
            let color = Color::rgb(
                band(self.start.r, self.end.r, t),
                band(self.start.g, self.end.g, t),
                band(self.start.b, self.end.b, t),
            );
            bmp.draw_hline(i as i32, 0, right, color);
        }
        bmp
    }
}

fn band(start: u8, end: u8, t: f32) -> u8 {
    let delta = (i32::from(end) - i32::from(start)) as f32 * t;
    (i32::from(start) + delta.floor() as i32).clamp(0, 255) as u8
}
