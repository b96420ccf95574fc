//! The render capability consumed by [`EntityStore::render`][crate::EntityStore::render].

use ms_core::Point;

/// Anything that can paint single-cell glyphs: a terminal frame buffer, a
/// test recorder, an image.
///
/// Callers only pass in-bounds points; implementations may assume it.
pub trait Drawer {
    fn set_pixel(&mut self, point: Point, glyph: char);

    fn clear_pixel(&mut self, point: Point);
}

impl<D: Drawer + ?Sized> Drawer for &mut D {
    fn set_pixel(&mut self, point: Point, glyph: char) {
        (**self).set_pixel(point, glyph);
    }

    fn clear_pixel(&mut self, point: Point) {
        (**self).clear_pixel(point);
    }
}
