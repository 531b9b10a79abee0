//! Layout Engine Tests
//!
//! Tests for:
//! - Rect nesting invariants across window sizes and scale factors
//! - Border and title-bar rounding at fractional scales
//! - Idempotence of layout computation
//! - Scale-change and degenerate-size scenarios

use casement::layout::{Layout, Rect, ShadowMargins, TITLE_BAR_LOGICAL_HEIGHT};

const MARGINS: ShadowMargins = ShadowMargins {
    horizontal: 16.0,
    vertical: 16.0,
};

fn contains_rect(outer: &Rect, inner: &Rect) -> bool {
    inner.x >= outer.x
        && inner.y >= outer.y
        && inner.right() <= outer.right()
        && inner.bottom() <= outer.bottom()
}

// ============================================================================
// Nesting invariants
// ============================================================================

#[test]
fn rects_nest_across_sizes_and_scales() {
    for &(w, h) in &[(126, 126), (800, 600), (1920, 1080), (3840, 2160)] {
        for &scale in &[1.0f32, 1.25, 1.5, 2.0, 3.0] {
            let layout = Layout::compute(w, h, scale, MARGINS);

            assert_eq!(layout.window, Rect::new(0.0, 0.0, w as f32, h as f32));
            assert!(
                contains_rect(&layout.window, &layout.background),
                "background must nest in window at {w}x{h} @ {scale}"
            );
            assert!(
                contains_rect(&layout.background, &layout.title_bar),
                "title bar must nest in background at {w}x{h} @ {scale}"
            );
            assert!(
                contains_rect(&layout.background, &layout.client),
                "client must nest in background at {w}x{h} @ {scale}"
            );
        }
    }
}

#[test]
fn title_bar_and_client_share_horizontal_extent() {
    for &scale in &[1.0f32, 1.25, 1.5, 2.0] {
        let layout = Layout::compute(1024, 768, scale, MARGINS);
        assert_eq!(layout.title_bar.x, layout.client.x);
        assert_eq!(layout.title_bar.w, layout.client.w);
    }
}

#[test]
fn client_starts_one_border_below_title_bar() {
    for &scale in &[1.0f32, 1.25, 1.5, 2.0, 2.75] {
        let layout = Layout::compute(800, 600, scale, MARGINS);
        assert_eq!(
            layout.client.y,
            layout.title_bar.y + layout.title_bar.h + scale.floor()
        );
    }
}

#[test]
fn client_height_accounts_for_three_borders() {
    let layout = Layout::compute(800, 600, 2.0, MARGINS);
    let border = 2.0;
    assert_eq!(
        layout.client.h,
        layout.background.h - layout.title_bar.h - 3.0 * border
    );
}

// ============================================================================
// Rounding
// ============================================================================

#[test]
fn border_rounds_down() {
    assert_eq!(Layout::compute(800, 600, 1.0, MARGINS).border(), 1.0);
    assert_eq!(Layout::compute(800, 600, 1.25, MARGINS).border(), 1.0);
    assert_eq!(Layout::compute(800, 600, 1.75, MARGINS).border(), 1.0);
    assert_eq!(Layout::compute(800, 600, 2.0, MARGINS).border(), 2.0);
}

#[test]
fn title_bar_height_rounds_up() {
    assert_eq!(Layout::compute(800, 600, 1.0, MARGINS).title_bar.h, 30.0);
    assert_eq!(Layout::compute(800, 600, 1.25, MARGINS).title_bar.h, 38.0);
    assert_eq!(Layout::compute(800, 600, 1.5, MARGINS).title_bar.h, 45.0);
    assert_eq!(Layout::compute(800, 600, 2.0, MARGINS).title_bar.h, 60.0);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn reference_layout_800x600_at_scale_1() {
    let layout = Layout::compute(800, 600, 1.0, MARGINS);
    assert_eq!(layout.background, Rect::new(16.0, 16.0, 768.0, 568.0));
    assert_eq!(layout.title_bar, Rect::new(17.0, 17.0, 766.0, 30.0));
    assert_eq!(layout.client, Rect::new(17.0, 48.0, 766.0, 535.0));
    assert_eq!(layout.scale, 1.0);
}

#[test]
fn scale_change_at_fixed_pixel_size_regrows_title_bar() {
    let before = Layout::compute(800, 600, 1.0, MARGINS);
    let after = Layout::compute(800, 600, 1.5, MARGINS);

    assert_eq!(before.title_bar.h, (TITLE_BAR_LOGICAL_HEIGHT * 1.0).ceil());
    assert_eq!(after.title_bar.h, (TITLE_BAR_LOGICAL_HEIGHT * 1.5).ceil());
    assert_eq!(after.title_bar.h, 45.0);
    assert!(after.client.h < before.client.h);
}

#[test]
fn recompute_is_idempotent() {
    let a = Layout::compute(1234, 567, 1.25, MARGINS);
    let b = Layout::compute(1234, 567, 1.25, MARGINS);
    assert_eq!(a, b);
}

#[test]
fn degenerate_sizes_are_total() {
    // Below the minimum window size the client height goes negative; that
    // is accepted as a display artifact, not an error.
    let layout = Layout::compute(40, 40, 1.0, MARGINS);
    assert!(layout.client.h < 0.0);
    assert_eq!(layout.window, Rect::new(0.0, 0.0, 40.0, 40.0));
}

#[test]
fn asymmetric_margins_apply_per_axis() {
    let margins = ShadowMargins {
        horizontal: 12.0,
        vertical: 20.0,
    };
    let layout = Layout::compute(800, 600, 1.0, margins);
    assert_eq!(layout.background, Rect::new(12.0, 20.0, 776.0, 560.0));
}
