//! Unit tests for vanet-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AnchorId, FlowId, MoverId};

    #[test]
    fn index_roundtrip() {
        let id = MoverId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(MoverId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(MoverId(0) < MoverId(1));
        assert!(FlowId(100) > FlowId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(FlowId::INVALID.0, u32::MAX);
        assert_eq!(MoverId::INVALID.0, u32::MAX);
        assert_eq!(AnchorId::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(MoverId(7).to_string(), "MoverId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    #[test]
    fn length_and_distance() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(Vec2::ZERO.distance(v), 5.0);
        assert_eq!(Vec2::ZERO.distance_squared(v), 25.0);
    }

    #[test]
    fn from_polar_magnitude() {
        for k in 0..8 {
            let angle = k as f64 * std::f64::consts::FRAC_PI_4;
            let v = Vec2::from_polar(angle, 5.0);
            assert!((v.length() - 5.0).abs() < 1e-9, "angle {angle}: {v}");
        }
    }

    #[test]
    fn scaled_to_preserves_direction() {
        let v = Vec2::new(100.0, 100.0).scaled_to(5.0);
        assert!((v.x - v.y).abs() < 1e-12);
        assert!((v.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 5.0);
        assert_eq!(a + b, Vec2::new(4.0, 7.0));
        assert_eq!(b - a, Vec2::new(2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn zero_checks() {
        assert!(Vec2::ZERO.is_zero());
        assert!(!Vec2::new(0.0, 0.1).is_zero());
    }
}

#[cfg(test)]
mod time {
    use crate::SimTime;

    #[test]
    fn conversions() {
        assert_eq!(SimTime::from_secs(5).as_millis(), 5_000);
        assert_eq!(SimTime::from_secs_f64(1.5).as_millis(), 1_500);
        assert_eq!(SimTime::from_millis(250).as_secs_f64(), 0.25);
    }

    #[test]
    fn arithmetic_and_order() {
        let t = SimTime::from_secs(10);
        assert_eq!(t + SimTime::from_secs(1), SimTime::from_secs(11));
        assert_eq!(t - SimTime::from_secs(4), SimTime::from_secs(6));
        assert!(SimTime::from_millis(999) < SimTime::from_secs(1));
    }

    #[test]
    fn since_saturates() {
        let early = SimTime::from_secs(1);
        let late = SimTime::from_secs(3);
        assert_eq!(late.since(early), SimTime::from_secs(2));
        assert_eq!(early.since(late), SimTime::ZERO);
    }

    #[test]
    fn display_in_seconds() {
        assert_eq!(SimTime::from_secs(5).to_string(), "5s");
        assert_eq!(SimTime::from_millis(1_500).to_string(), "1.5s");
    }

    #[test]
    #[should_panic]
    fn negative_seconds_rejected() {
        SimTime::from_secs_f64(-1.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::{StreamId, StreamRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = StreamRng::new(12345, StreamId::Heading);
        let mut r2 = StreamRng::new(12345, StreamId::Heading);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_streams_differ() {
        let mut heading = StreamRng::new(1, StreamId::Heading);
        let mut scatter = StreamRng::new(1, StreamId::Scatter);
        let a: u64 = heading.random();
        let b: u64 = scatter.random();
        assert_ne!(a, b, "distinct streams should diverge");
    }

    #[test]
    fn gen_angle_in_bounds() {
        let mut rng = StreamRng::new(0, StreamId::Scatter);
        for _ in 0..1000 {
            let a = rng.gen_angle();
            assert!((0.0..std::f64::consts::TAU).contains(&a));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = StreamRng::new(0, StreamId::AnchorChoice);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn choose_from_slice() {
        let mut rng = StreamRng::new(7, StreamId::AnchorChoice);
        let items = [10, 20, 30];
        assert!(items.contains(rng.choose(&items).unwrap()));
        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
