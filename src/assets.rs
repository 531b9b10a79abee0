//! Embedded Shadow Bitmaps
//!
//! Three PNGs compiled into the binary make up the drop shadow: a bottom
//! edge strip, a left edge strip, and a corner tile. Their intrinsic pixel
//! sizes drive the layout's shadow margins and the shadow quad geometry, so
//! swapping the assets reshapes the chrome without touching any code.
//!
//! Decoding happens once at startup; a decode failure is fatal.

use image::RgbaImage;

use crate::errors::Result;
use crate::layout::ShadowMargins;

/// Opacity applied to every shadow piece at draw time.
pub const SHADOW_ALPHA: f32 = 0.3;

static CORNER_PNG: &[u8] = include_bytes!("../assets/shadow/corner.png");
static BOTTOM_PNG: &[u8] = include_bytes!("../assets/shadow/bottom.png");
static LEFT_PNG: &[u8] = include_bytes!("../assets/shadow/left.png");

/// The decoded shadow bitmaps. Loaded once, immutable thereafter.
pub struct ShadowAssets {
    /// Bottom edge strip; its height is the vertical shadow margin.
    pub bottom: RgbaImage,
    /// Left edge strip; its width is the horizontal shadow margin.
    pub left: RgbaImage,
    /// Corner tile in bottom-right orientation; the other three corners are
    /// drawn mirrored.
    pub corner: RgbaImage,
}

impl ShadowAssets {
    /// Decodes the embedded PNGs.
    pub fn load() -> Result<Self> {
        let decode = |bytes| {
            image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
                .map(|img| img.into_rgba8())
        };
        Ok(Self {
            bottom: decode(BOTTOM_PNG)?,
            left: decode(LEFT_PNG)?,
            corner: decode(CORNER_PNG)?,
        })
    }

    /// Shadow margins derived from the strips' intrinsic sizes.
    #[must_use]
    pub fn margins(&self) -> ShadowMargins {
        ShadowMargins {
            horizontal: self.left.width() as f32,
            vertical: self.bottom.height() as f32,
        }
    }

    /// Side length of the corner tile in pixels.
    #[must_use]
    pub fn corner_span(&self) -> f32 {
        self.corner.width() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_assets_decode() {
        let assets = ShadowAssets::load().expect("embedded PNGs must decode");
        let margins = assets.margins();
        assert!(margins.horizontal > 0.0);
        assert!(margins.vertical > 0.0);
        // The corner tile must cover the full shadow margin on both axes.
        assert!(assets.corner_span() >= margins.horizontal);
        assert!(assets.corner_span() >= margins.vertical);
    }
}
