// body/tests.rs
// Tests for Body integration, wall bounce and staged velocity handling

mod physics {
    use crate::body::{Body, Polarity};
    use crate::config::WorldConfig;
    use crate::utils::Polar;
    use std::f32::consts::{FRAC_PI_2, PI};
    use ultraviolet::Vec2;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    fn atom(x: f32, y: f32, vx: f32, vy: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::new(vx, vy), 1.0, 20.0, 1.0)
    }

    #[test]
    fn defaults_come_from_world_config() {
        let config = WorldConfig::default();
        let b = Body::with_defaults(Vec2::new(100.0, 100.0), Vec2::zero(), -1.0, &config);
        assert_eq!(b.radius(), 20.0);
        assert_eq!(b.mass(), 1.0);
        assert_eq!(b.charge(), -1.0);
        assert_eq!(b.staged_vel(), b.vel);
    }

    #[test]
    fn color_follows_charge_sign() {
        let pos = atom(0.0, 0.0, 0.0, 0.0);
        assert_eq!(pos.polarity(), Polarity::Positive);
        assert_eq!(pos.color(), [255, 0, 0, 255]);

        let neg = Body::new(Vec2::zero(), Vec2::zero(), 1.0, 20.0, -2.0);
        assert_eq!(neg.polarity(), Polarity::Negative);
        assert_eq!(neg.color(), [0, 0, 255, 255]);

        let neutral = Body::new(Vec2::zero(), Vec2::zero(), 1.0, 20.0, 0.0);
        assert_eq!(neutral.polarity(), Polarity::Negative);
    }

    #[test]
    fn integrate_velocity_only_touches_staging() {
        let mut b = Body::new(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0), 2.0, 20.0, 1.0);
        b.set_force(Polar::new(4.0, FRAC_PI_2));
        b.integrate_velocity(0.5);

        assert_eq!(b.vel, Vec2::new(1.0, 0.0), "committed velocity must not move mid-frame");
        // 4 * 0.5 / 2 = 1 along +y
        assert!((b.staged_vel().y - 1.0).abs() < 1e-6);
        assert!((b.staged_vel().x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_timestep_is_a_no_op() {
        let mut b = atom(100.0, 100.0, 0.3, -0.2);
        b.set_force(Polar::new(50.0, PI / 3.0));
        b.integrate_velocity(0.0);
        assert_eq!(b.staged_vel(), Vec2::new(0.3, -0.2));
    }

    #[test]
    fn force_is_replaced_not_accumulated() {
        let mut b = atom(100.0, 100.0, 0.0, 0.0);
        b.set_force(Polar::new(5.0, 0.0));
        b.set_force(Polar::new(2.0, PI));
        assert_eq!(b.force(), Polar::new(2.0, PI));
    }

    #[test]
    fn commit_promotes_staging() {
        let mut b = atom(100.0, 100.0, 1.0, 1.0);
        b.apply_impulse(Vec2::new(0.5, -0.25));
        assert_eq!(b.vel, Vec2::new(1.0, 1.0));
        b.commit();
        assert_eq!(b.vel, Vec2::new(1.5, 0.75));
        assert_eq!(b.staged_vel(), b.vel);
    }

    #[test]
    fn update_moves_by_raw_velocity() {
        let mut b = atom(100.0, 100.0, 3.0, -2.0);
        b.update(W, H);
        assert_eq!(b.pos, Vec2::new(103.0, 98.0));
        assert_eq!(b.staged_vel(), Vec2::new(3.0, -2.0));
    }

    #[test]
    fn right_wall_reflects_only_x() {
        let mut b = atom(775.0, 300.0, 10.0, 0.5);
        b.update(W, H);

        assert_eq!(b.pos.x, W - 20.0);
        assert_eq!(b.pos.y, 300.5);
        assert_eq!(b.staged_vel(), Vec2::new(-10.0, 0.5));
        // the bounce waits for the next commit
        assert_eq!(b.vel, Vec2::new(10.0, 0.5));
    }

    #[test]
    fn top_wall_reflects_only_y() {
        let mut b = atom(400.0, 25.0, -1.0, -8.0);
        b.update(W, H);

        assert_eq!(b.pos.y, 20.0);
        assert_eq!(b.pos.x, 399.0);
        assert_eq!(b.staged_vel(), Vec2::new(-1.0, 8.0));
    }

    #[test]
    fn corner_reflects_both_axes() {
        let mut b = atom(22.0, 590.0, -5.0, 5.0);
        b.update(W, H);

        assert_eq!(b.pos, Vec2::new(20.0, H - 20.0));
        assert_eq!(b.staged_vel(), Vec2::new(5.0, -5.0));
    }

    #[test]
    fn bounce_reads_committed_velocity() {
        let mut b = atom(775.0, 300.0, 10.0, 0.0);
        // something already staged this frame; the bounce is taken from `vel`
        b.apply_impulse(Vec2::new(3.0, 0.0));
        b.update(W, H);
        assert_eq!(b.staged_vel().x, -10.0);
    }

    #[test]
    fn finite_check_catches_nan() {
        let mut b = atom(100.0, 100.0, 0.0, 0.0);
        assert!(b.is_finite());
        b.vel.x = f32::NAN;
        assert!(!b.is_finite());
    }
}
