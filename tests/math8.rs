mod tests {
    use shiner_composer::math8::{blend8, curve, gamma, hash, hash_unit, scale8, unit8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_unit8() {
        assert_eq!(unit8(0.0), 0);
        assert_eq!(unit8(1.0), 255);
        assert_eq!(unit8(2.0), 255);
        assert_eq!(unit8(-1.0), 0);
        assert_eq!(unit8(f32::NAN), 0);
    }

    #[test]
    fn test_curve_shape() {
        assert!(curve(0.0).abs() < 1e-6);
        assert!((curve(0.25) - 0.5).abs() < 1e-6);
        assert!((curve(0.5) - 1.0).abs() < 1e-6);
        assert!((curve(0.75) - 0.5).abs() < 1e-6);
        assert_eq!(curve(f32::INFINITY), 0.0);
        assert_eq!(curve(f32::NAN), 0.0);
    }

    #[test]
    fn test_curve_has_unit_period() {
        for step in 0..20 {
            let progress = step as f32 * 0.05;
            assert!((curve(progress) - curve(progress + 1.0)).abs() < 1e-4);
            assert!((curve(progress) - curve(progress - 3.0)).abs() < 1e-4);
            assert!((0.0..=1.0).contains(&curve(progress)));
        }
    }

    #[test]
    fn test_gamma() {
        assert_eq!(gamma(0.0), 0.0);
        assert_eq!(gamma(1.0), 1.0);
        assert_eq!(gamma(-0.5), 0.0);
        assert!(gamma(0.5) < 0.5);
    }

    #[test]
    fn test_hash_is_stable() {
        assert_eq!(hash(0), 0);
        assert_eq!(hash(1), 824_515_495);
        assert_eq!(hash(2), 1_722_258_072);
        assert_eq!(hash(12_345), hash(12_345));
    }

    #[test]
    fn test_hash_unit_range() {
        for seed in 0..1000 {
            let value = hash_unit(seed * 7919);
            assert!((0.0..=1.0).contains(&value));
        }
        assert_eq!(hash_unit(0), 0.0);
    }
}
