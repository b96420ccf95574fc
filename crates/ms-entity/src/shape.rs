//! Display glyphs.

/// Glyph painted over every cell of a freshly installed route.
pub const ROUTE_GLYPH: char = '~';

/// Glyph marking the destination of a freshly installed route.
pub const DESTINATION_GLYPH: char = '?';

/// Glyph for static obstacles.
pub const OBSTACLE_GLYPH: char = '#';

/// An entity's appearance: its body and the mark it leaves behind.
/// Immutable after creation.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Shape {
    pub body:  char,
    pub trail: char,
}

impl Shape {
    pub const fn new(body: char, trail: char) -> Self {
        Self { body, trail }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::new('O', '-')
    }
}
