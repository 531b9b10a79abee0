//! Hit Classifier Tests
//!
//! Tests for:
//! - Edge and corner resize bands at integer and fractional scales
//! - Corner precedence over plain edges
//! - Draggable title bar and pass-through interior
//! - The shadow-only margin classifying as Normal
//! - Totality over a coarse point grid

use glam::Vec2;

use casement::hit::{HitRegion, classify};
use casement::layout::{Layout, ShadowMargins};

const MARGINS: ShadowMargins = ShadowMargins {
    horizontal: 16.0,
    vertical: 16.0,
};

fn layout(scale: f32) -> Layout {
    Layout::compute(800, 600, scale, MARGINS)
}

fn at(x: f32, y: f32, layout: &Layout) -> HitRegion {
    classify(Vec2::new(x, y), layout)
}

// ============================================================================
// Scale 1.0: logical == physical
// ============================================================================

#[test]
fn shadow_margin_is_normal() {
    // (8,8) physical: outside the background's edge band entirely, inside
    // the shadow-only ring. No drag-from-shadow.
    let l = layout(1.0);
    assert_eq!(at(8.0, 8.0, &l), HitRegion::Normal);
}

#[test]
fn edges_at_scale_1() {
    let l = layout(1.0);
    // background spans (16,16)..(784,584); edge tolerance is 2.
    assert_eq!(at(16.0, 300.0, &l), HitRegion::Left);
    assert_eq!(at(784.0, 300.0, &l), HitRegion::Right);
    assert_eq!(at(400.0, 15.0, &l), HitRegion::Top);
    assert_eq!(at(400.0, 583.0, &l), HitRegion::Bottom);
}

#[test]
fn corners_take_precedence_over_edges() {
    let l = layout(1.0);
    // corner tolerance is 8: within 8 px of the top/bottom, the left and
    // right bands classify as corners instead.
    assert_eq!(at(16.0, 20.0, &l), HitRegion::TopLeft);
    assert_eq!(at(16.0, 580.0, &l), HitRegion::BottomLeft);
    assert_eq!(at(784.0, 20.0, &l), HitRegion::TopRight);
    assert_eq!(at(784.0, 580.0, &l), HitRegion::BottomRight);
    // just past the corner band, the same edge is plain again
    assert_eq!(at(16.0, 24.0, &l), HitRegion::Left);
}

#[test]
fn title_bar_is_draggable_and_client_is_normal() {
    let l = layout(1.0);
    assert_eq!(at(400.0, 30.0, &l), HitRegion::Draggable);
    assert_eq!(at(400.0, 300.0, &l), HitRegion::Normal);
}

// ============================================================================
// Scale 2.0: logical points are converted to physical pixels first
// ============================================================================

#[test]
fn left_edge_mid_height_at_scale_2() {
    // Logical (8, 150) lands exactly on the background's left edge at
    // physical (16, 300); vertical distance from both corners exceeds the
    // corner tolerance of ceil(16) = 16, so this is a plain Left.
    let l = layout(2.0);
    assert_eq!(at(8.0, 150.0, &l), HitRegion::Left);
}

#[test]
fn tolerances_scale_with_display() {
    let l = layout(2.0);
    // edge tolerance ceil(2*2)=4 physical: logical 6.0 -> physical 12,
    // which is exactly at the band's lower bound 16-4.
    assert_eq!(at(6.0, 150.0, &l), HitRegion::Left);
    // one more logical pixel out misses the band
    assert_eq!(at(5.0, 150.0, &l), HitRegion::Normal);
    // corner band reaches 16 physical below the top edge
    assert_eq!(at(8.0, 15.0, &l), HitRegion::TopLeft);
}

#[test]
fn fractional_scale_tolerances_round_up() {
    // At scale 1.25 the edge tolerance is ceil(2.5) = 3 physical pixels,
    // so the left band spans physical x in [13, 19].
    let l = layout(1.25);
    assert_eq!(at(11.2, 240.0, &l), HitRegion::Left); // physical x = 14
    assert_eq!(at(8.0, 240.0, &l), HitRegion::Normal); // physical x = 10
}

// ============================================================================
// Totality
// ============================================================================

#[test]
fn every_point_classifies_exactly_once() {
    let l = layout(1.0);
    for x in (-20..=820).step_by(7) {
        for y in (-20..=620).step_by(7) {
            // classify is total; any result is acceptable, it must not panic
            let _ = at(x as f32, y as f32, &l);
        }
    }
}

#[test]
fn all_resize_regions_are_reachable() {
    let l = layout(1.0);
    let found = [
        at(16.0, 20.0, &l),
        at(400.0, 16.0, &l),
        at(784.0, 20.0, &l),
        at(16.0, 300.0, &l),
        at(784.0, 300.0, &l),
        at(16.0, 580.0, &l),
        at(400.0, 584.0, &l),
        at(784.0, 580.0, &l),
    ];
    assert_eq!(
        found,
        [
            HitRegion::TopLeft,
            HitRegion::Top,
            HitRegion::TopRight,
            HitRegion::Left,
            HitRegion::Right,
            HitRegion::BottomLeft,
            HitRegion::Bottom,
            HitRegion::BottomRight,
        ]
    );
}
