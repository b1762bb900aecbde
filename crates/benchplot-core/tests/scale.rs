// File: crates/benchplot-core/tests/scale.rs
// Purpose: Domain validation and the affine domain-to-pixel mapping.

use benchplot_core::geometry::Rect;
use benchplot_core::{AxisRange, ChartError, LinearScale};
use proptest::prelude::*;

#[test]
fn endpoints_map_to_pixel_extent() {
    let d = AxisRange::new(70.0, 100.0).unwrap();
    let s = LinearScale::new(d, 58.0, 772.0, false);
    assert_eq!(s.to_px(70.0), 58.0);
    assert_eq!(s.to_px(100.0), 830.0);
    assert!((s.to_px(85.0) - 444.0).abs() < 1e-9);
}

#[test]
fn vertical_scale_rises_with_value() {
    let area = Rect::from_ltwh(62.0, 28.0, 774.0, 312.0);
    let y = LinearScale::vertical(AxisRange::new(92.0, 100.0).unwrap(), area);
    assert_eq!(y.to_px(92.0), area.bottom);
    assert_eq!(y.to_px(100.0), area.top);
    assert!(y.to_px(99.0) < y.to_px(94.6));
    assert_eq!(y.baseline(), area.bottom);
}

#[test]
fn from_px_inverts_to_px() {
    let area = Rect::from_ltwh(0.0, 0.0, 400.0, 200.0);
    let x = LinearScale::horizontal(AxisRange::new(0.0, 90.0).unwrap(), area);
    let y = LinearScale::vertical(AxisRange::new(0.0, 90.0).unwrap(), area);
    for v in [0.0, 12.5, 45.0, 90.0] {
        assert!((x.from_px(x.to_px(v)) - v).abs() < 1e-9);
        assert!((y.from_px(y.to_px(v)) - v).abs() < 1e-9);
    }
}

#[test]
fn degenerate_domains_are_rejected() {
    assert_eq!(AxisRange::new(95.0, 95.0), Err(ChartError::DegenerateDomain { min: 95.0, max: 95.0 }));
    assert!(matches!(AxisRange::new(100.0, 70.0), Err(ChartError::DegenerateDomain { .. })));
    assert!(AxisRange::new(f64::NAN, 1.0).is_err());
    assert!(AxisRange::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn clamped_percent_follows_thresholds() {
    let r = AxisRange::clamped_percent(94.6, 99.0, 2.0, 1.0, 70.0, 100.0).unwrap();
    assert_eq!((r.min(), r.max()), (92.0, 100.0));
    // low scores clamp at the floor
    let r = AxisRange::clamped_percent(60.0, 80.0, 2.0, 1.0, 70.0, 100.0).unwrap();
    assert_eq!((r.min(), r.max()), (70.0, 81.0));
    // every score below the floor inverts the range
    assert!(AxisRange::clamped_percent(50.0, 60.0, 2.0, 1.0, 70.0, 100.0).is_err());
}

proptest! {
    #[test]
    fn prop_mapping_is_affine(lo in -1000.0f64..1000.0, span in 0.01f64..1000.0, start in -500.0f64..500.0,
                              extent in 1.0f64..2000.0, t in 0.0f64..1.0) {
        let d = AxisRange::new(lo, lo + span).unwrap();
        let s = LinearScale::new(d, start, extent, false);
        let v = lo + t * span;
        let expected = start + t * extent;
        prop_assert!((s.to_px(v) - expected).abs() < 1e-6 * (1.0 + expected.abs()));
    }

    #[test]
    fn prop_mapping_is_monotonic(lo in -100.0f64..100.0, span in 0.1f64..100.0, a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let d = AxisRange::new(lo, lo + span).unwrap();
        let s = LinearScale::new(d, 0.0, 500.0, false);
        let (va, vb) = (lo + a * span, lo + b * span);
        if va < vb {
            prop_assert!(s.to_px(va) <= s.to_px(vb));
        }
    }
}
