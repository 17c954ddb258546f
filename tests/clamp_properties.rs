use glam::Vec3;
use room_editor::bounds::{Axes, AxisRange, SpatialBounds};

static SAMPLES: [f32; 11] = [-1000.0, -9.5, -9.0, -3.3, 0.0, 0.05, 0.1, 1.999, 2.0, 9.0, 42.0];

fn sample_positions() -> impl Iterator<Item = Vec3> {
    SAMPLES.iter().flat_map(|&x| {
        SAMPLES.iter().flat_map(move |&y| SAMPLES.iter().map(move |&z| Vec3::new(x, y, z)))
    })
}

#[test]
fn clamp_leaves_in_bounds_positions_bit_identical() {
    let bounds = SpatialBounds::default();
    for p in sample_positions().filter(|p| bounds.contains(*p)) {
        let mut live = p;
        let touched = bounds.clamp_in_place(&mut live);
        assert!(touched.is_empty(), "in-bounds {p:?} reported touched axes {touched:?}");
        assert_eq!(live.to_array().map(f32::to_bits), p.to_array().map(f32::to_bits));
    }
}

#[test]
fn clamp_converges_in_one_step() {
    let bounds = SpatialBounds::default();
    for p in sample_positions() {
        let once = bounds.clamp(p);
        assert!(bounds.contains(once), "{p:?} clamped to {once:?} which is still outside");
        assert_eq!(bounds.clamp(once), once);
    }
}

#[test]
fn clamping_one_axis_keeps_the_others() {
    let bounds = SpatialBounds::default();
    let inside = Vec3::new(-2.5, 1.25, 7.75);
    let cases = [
        (Vec3::new(50.0, inside.y, inside.z), Axes::X, Vec3::new(9.0, inside.y, inside.z)),
        (Vec3::new(inside.x, -3.0, inside.z), Axes::Y, Vec3::new(inside.x, 0.1, inside.z)),
        (Vec3::new(inside.x, inside.y, -80.0), Axes::Z, Vec3::new(inside.x, inside.y, -9.0)),
    ];
    for (raw, axis, expected) in cases {
        let mut live = raw;
        assert_eq!(bounds.clamp_in_place(&mut live), axis);
        assert_eq!(live, expected);
    }
}

#[test]
fn custom_room_bounds_apply_per_axis() {
    let bounds = SpatialBounds::new(
        AxisRange::new(-2.0, 2.0).expect("x"),
        AxisRange::new(0.0, 3.0).expect("y"),
        AxisRange::new(-4.0, 1.0).expect("z"),
    )
    .expect("bounds");
    assert_eq!(bounds.clamp(Vec3::new(5.0, 5.0, 5.0)), Vec3::new(2.0, 3.0, 1.0));
    assert_eq!(bounds.clamp(Vec3::new(-5.0, -5.0, -5.0)), Vec3::new(-2.0, 0.0, -4.0));
}
