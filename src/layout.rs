//! Window Chrome Layout
//!
//! Derives every rectangular region of the window — the full window, the
//! background (window minus the shadow margin), the title bar, and the
//! client area — from the window's physical pixel size and the display's
//! content scale factor.
//!
//! All rectangles are in physical pixels. The layout is recomputed wholesale
//! on every resize or scale change; it is never updated incrementally.
//!
//! # Rounding
//!
//! Fractional scale factors (1.25, 1.5, ...) are the central correctness
//! concern here. Rounding is biased consistently so regions neither overlap
//! nor leave sub-pixel seams: the border width rounds *down*
//! (`floor(scale)`, at least 1 px for any scale ≥ 1) while the title bar
//! height rounds *up* (`ceil(30 · scale)`).

use glam::Vec2;

/// Logical height of the title bar, scaled to physical pixels at layout time.
pub const TITLE_BAR_LOGICAL_HEIGHT: f32 = 30.0;

/// An axis-aligned rectangle in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// X coordinate of the right edge.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Y coordinate of the bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Half-open containment test: the left/top edges are inside, the
    /// right/bottom edges are not.
    #[inline]
    #[must_use]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Returns this rect shrunk by `amount` on every side.
    #[must_use]
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            w: self.w - 2.0 * amount,
            h: self.h - 2.0 * amount,
        }
    }
}

/// Width of the shadow ring around the background, derived from the
/// intrinsic sizes of the shadow bitmaps.
///
/// `horizontal` is the left strip's width (applied left and right),
/// `vertical` the bottom strip's height (applied top and bottom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowMargins {
    pub horizontal: f32,
    pub vertical: f32,
}

/// The complete chrome layout of the window.
///
/// `background` is `window` inset by the shadow margins; `title_bar` and
/// `client` are nested strictly inside `background`, separated from it and
/// from each other by a `floor(scale)`-pixel border that shows the border
/// color through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub window: Rect,
    pub background: Rect,
    pub title_bar: Rect,
    pub client: Rect,
    /// Logical-to-physical pixel multiplier of the current display.
    pub scale: f32,
}

impl Layout {
    /// Computes the layout for a window of `width × height` physical pixels
    /// at the given display scale.
    ///
    /// Total over all positive inputs. Degenerate (near-zero) sizes may
    /// produce a negative-height client rect; that is a display artifact,
    /// not an error, and the window's minimum size keeps it unreachable in
    /// practice.
    #[must_use]
    pub fn compute(width: u32, height: u32, scale: f32, margins: ShadowMargins) -> Self {
        let window = Rect::new(0.0, 0.0, width as f32, height as f32);

        let background = Rect::new(
            margins.horizontal,
            margins.vertical,
            window.w - 2.0 * margins.horizontal,
            window.h - 2.0 * margins.vertical,
        );

        let border = scale.floor();

        let title_bar = Rect {
            h: (TITLE_BAR_LOGICAL_HEIGHT * scale).ceil(),
            ..background.inset(border)
        };

        let client = Rect::new(
            title_bar.x,
            title_bar.bottom() + border,
            title_bar.w,
            background.h - 3.0 * border - title_bar.h,
        );

        Self {
            window,
            background,
            title_bar,
            client,
            scale,
        }
    }

    /// The border width in physical pixels at this layout's scale.
    #[inline]
    #[must_use]
    pub fn border(&self) -> f32 {
        self.scale.floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn rect_containment_is_half_open() {
        let r = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(14.9, 14.9)));
        assert!(!r.contains(Vec2::new(15.0, 12.0)));
        assert!(!r.contains(Vec2::new(12.0, 15.0)));
    }

    #[test]
    fn inset_shrinks_both_axes() {
        let r = Rect::new(0.0, 0.0, 10.0, 20.0).inset(2.0);
        assert_eq!(r, Rect::new(2.0, 2.0, 6.0, 16.0));
    }
}
