//! Hit Classification
//!
//! Maps a cursor position (in logical units, as the windowing layer
//! delivers it) back into a window-chrome region: one of the eight resize
//! bands, the draggable title bar, or the pass-through interior.
//!
//! The classification drives OS-native interactive move/resize; it performs
//! no window mutation itself and is a pure function of (point, layout).

use glam::Vec2;
use winit::window::{CursorIcon, ResizeDirection};

use crate::layout::Layout;

/// Chrome region under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
    /// Inside the title bar: dragging moves the window.
    Draggable,
    /// Everywhere else, including the shadow-only margin.
    Normal,
}

impl HitRegion {
    /// The OS resize direction for this region, if it is a resize band.
    #[must_use]
    pub fn resize_direction(self) -> Option<ResizeDirection> {
        match self {
            Self::TopLeft => Some(ResizeDirection::NorthWest),
            Self::Top => Some(ResizeDirection::North),
            Self::TopRight => Some(ResizeDirection::NorthEast),
            Self::Left => Some(ResizeDirection::West),
            Self::Right => Some(ResizeDirection::East),
            Self::BottomLeft => Some(ResizeDirection::SouthWest),
            Self::Bottom => Some(ResizeDirection::South),
            Self::BottomRight => Some(ResizeDirection::SouthEast),
            Self::Draggable | Self::Normal => None,
        }
    }

    /// The cursor icon to show while hovering this region.
    #[must_use]
    pub fn cursor_icon(self) -> CursorIcon {
        match self {
            Self::TopLeft => CursorIcon::NwResize,
            Self::Top => CursorIcon::NResize,
            Self::TopRight => CursorIcon::NeResize,
            Self::Left => CursorIcon::WResize,
            Self::Right => CursorIcon::EResize,
            Self::BottomLeft => CursorIcon::SwResize,
            Self::Bottom => CursorIcon::SResize,
            Self::BottomRight => CursorIcon::SeResize,
            Self::Draggable | Self::Normal => CursorIcon::Default,
        }
    }
}

/// Classifies a logical cursor point against the current layout.
///
/// The point is converted to physical pixels with `layout.scale`. Edges are
/// matched within `ceil(2 · scale)` pixels, corners within `ceil(8 · scale)`
/// pixels of the background rect. Corner checks nest inside the left/right
/// edge bands and take precedence; the first match wins:
/// left band → right band → top band → bottom band → title bar → normal.
///
/// A point in the shadow-only margin (outside the background but inside the
/// window) matches no band and classifies [`HitRegion::Normal`].
#[must_use]
pub fn classify(point: Vec2, layout: &Layout) -> HitRegion {
    let scale = layout.scale;
    let b = layout.background;

    let pos = point * scale;
    let (x, y) = (pos.x, pos.y);

    let edge_tol = (2.0 * scale).ceil();
    let corner_tol = (8.0 * scale).ceil();

    // Left border
    if x >= b.x - edge_tol && x <= b.x + edge_tol {
        if y < b.y + corner_tol {
            HitRegion::TopLeft
        } else if y >= b.bottom() - corner_tol {
            HitRegion::BottomLeft
        } else {
            HitRegion::Left
        }
    }
    // Right border
    else if x >= b.right() - edge_tol && x <= b.right() + edge_tol {
        if y < b.y + corner_tol {
            HitRegion::TopRight
        } else if y >= b.bottom() - corner_tol {
            HitRegion::BottomRight
        } else {
            HitRegion::Right
        }
    }
    // Top border
    else if y >= b.y - edge_tol && y <= b.y + edge_tol {
        HitRegion::Top
    }
    // Bottom border
    else if y >= b.bottom() - edge_tol && y <= b.bottom() + edge_tol {
        HitRegion::Bottom
    }
    // Title bar
    else if layout.title_bar.contains(pos) {
        HitRegion::Draggable
    } else {
        HitRegion::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Layout, ShadowMargins};

    fn layout_800x600() -> Layout {
        Layout::compute(
            800,
            600,
            1.0,
            ShadowMargins {
                horizontal: 16.0,
                vertical: 16.0,
            },
        )
    }

    #[test]
    fn resize_regions_map_to_directions() {
        assert_eq!(
            HitRegion::TopLeft.resize_direction(),
            Some(ResizeDirection::NorthWest)
        );
        assert_eq!(HitRegion::Draggable.resize_direction(), None);
        assert_eq!(HitRegion::Normal.resize_direction(), None);
    }

    #[test]
    fn title_bar_is_draggable() {
        let layout = layout_800x600();
        let mid = Vec2::new(400.0, layout.title_bar.y + layout.title_bar.h / 2.0);
        assert_eq!(classify(mid, &layout), HitRegion::Draggable);
    }
}
