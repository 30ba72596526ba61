// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

use proptest::prelude::*;
use tiltmatrix::config::MotionConfig;
use tiltmatrix::motion::{MotionFilter, Vec2};
use tiltmatrix::units::Time;

prop_compose! {
    fn samples_strategy()(
        raw in prop::collection::vec((-4.0f32..4.0, -4.0f32..4.0), 1..300),
    ) -> Vec<Vec2> {
        raw.into_iter().map(|(x, y)| Vec2::new(x, y)).collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn display_position_stays_in_window(
        samples in samples_strategy(),
        dt_ms in 0u32..500,
    ) {
        let cfg = MotionConfig::default();
        let mut filter = MotionFilter::new(cfg);
        for s in samples {
            let p = filter.update(s, Time::from_millis(dt_ms));
            prop_assert!(p.x.abs() <= cfg.display_limit);
            prop_assert!(p.y.abs() <= cfg.display_limit);
            prop_assert!(filter.velocity().x.is_finite());
            prop_assert!(filter.velocity().y.is_finite());
        }
    }

    #[test]
    fn constant_tilt_after_seed_never_moves(
        x in -2.0f32..2.0,
        y in -2.0f32..2.0,
        n in 1usize..200,
    ) {
        let mut filter = MotionFilter::default();
        let tilt = Vec2::new(x, y);
        filter.seed(tilt);
        for _ in 0..n {
            filter.update(tilt, Time::from_millis(20));
        }
        prop_assert_eq!(filter.display_position(), Vec2::ZERO);
    }
}

#[test]
fn velocity_dies_out_once_input_stops() {
    let mut filter = MotionFilter::default();
    let tick = Time::from_millis(20);

    for _ in 0..20 {
        filter.update(Vec2::new(0.8, -0.8), tick);
    }
    assert!(filter.velocity().x > 0.0);
    assert!(filter.velocity().y < 0.0);

    for _ in 0..2000 {
        filter.update(Vec2::ZERO, tick);
    }
    assert!(filter.velocity().x.abs() < 1e-3);
    assert!(filter.velocity().y.abs() < 1e-3);
}

#[test]
fn out_of_window_dt_falls_back_to_default() {
    let mut a = MotionFilter::default();
    let mut b = MotionFilter::default();
    let push = Vec2::new(0.0, 1.0);

    a.update(push, Time::from_millis(20));
    b.update(push, Time::new(3.0));

    assert_eq!(a.velocity(), b.velocity());
    assert_eq!(a.position(), b.position());
}

#[test]
fn reset_returns_to_origin() {
    let mut filter = MotionFilter::default();
    for _ in 0..10 {
        filter.update(Vec2::new(1.0, 1.0), Time::from_millis(20));
    }
    filter.reset();
    assert_eq!(filter.position(), Vec2::ZERO);
    assert_eq!(filter.offset(), Vec2::ZERO);
}
