//! Minimal geometry and color types shared with presentation layers
//!
//! Kept dependency-free so the core crate stays UI-agnostic; presentation
//! crates convert these into their toolkit's native types.

/// A point in the host container's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const ZERO: Size = Size { w: 0.0, h: 0.0 };

    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.w / 2.0,
            self.origin.y + self.size.h / 2.0,
        )
    }

    /// Smaller of width and height
    pub fn min_dim(&self) -> f32 {
        self.size.w.min(self.size.h)
    }

    /// A rect of the given size centered inside `container`
    pub fn centered_in(container: Rect, size: Size) -> Self {
        let center = container.center();
        Self {
            origin: Point::new(center.x - size.w / 2.0, center.y - size.h / 2.0),
            size,
        }
    }

    /// Linear interpolation between two rects, `t` in 0..=1
    pub fn lerp(from: Rect, to: Rect, t: f32) -> Self {
        Self {
            origin: Point::new(
                lerp(from.origin.x, to.origin.x, t),
                lerp(from.origin.y, to.origin.y, t),
            ),
            size: Size::new(
                lerp(from.size.w, to.size.w, t),
                lerp(from.size.h, to.size.h, t),
            ),
        }
    }
}

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Rgba = Rgba::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

pub(crate) fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_in() {
        let container = Rect::new(0.0, 0.0, 100.0, 60.0);
        let rect = Rect::centered_in(container, Size::new(20.0, 20.0));
        assert_eq!(rect, Rect::new(40.0, 20.0, 20.0, 20.0));
    }

    #[test]
    fn test_centered_zero_size_sits_at_center() {
        let container = Rect::new(10.0, 10.0, 80.0, 80.0);
        let rect = Rect::centered_in(container, Size::ZERO);
        assert_eq!(rect.origin, Point::new(50.0, 50.0));
        assert_eq!(rect.size, Size::ZERO);
    }

    #[test]
    fn test_lerp_endpoints() {
        let from = Rect::new(0.0, 0.0, 10.0, 10.0);
        let to = Rect::new(50.0, 50.0, 0.0, 0.0);
        assert_eq!(Rect::lerp(from, to, 0.0), from);
        assert_eq!(Rect::lerp(from, to, 1.0), to);
        let mid = Rect::lerp(from, to, 0.5);
        assert_eq!(mid.origin, Point::new(25.0, 25.0));
    }
}
