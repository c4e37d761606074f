mod tests {
    use shiner_composer::animation::AnimationId;
    use shiner_composer::blend::BlendMode;
    use shiner_composer::buffer::{BufferError, PixelBuffer};
    use shiner_composer::color::{BLACK, Rgb};
    use shiner_composer::layer::LayerAnimation;
    use shiner_composer::random::XorShift32;
    use shiner_composer::settings::LayerSettings;

    const MAIN: Rgb = Rgb { r: 255, g: 100, b: 0 };
    const SECONDARY: Rgb = Rgb { r: 240, g: 255, b: 0 };

    fn patterned_front() -> PixelBuffer<16> {
        let mut front = PixelBuffer::<16>::new(12).expect("fits");
        for i in 0..front.len() {
            let v = u8::try_from(i * 20).expect("small");
            front.set(i, Rgb::new(v, 255 - v, v / 2));
        }
        front
    }

    #[test]
    fn test_buffer_capacity_and_access() {
        let mut buffer = PixelBuffer::<4>::new(3).expect("fits");
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.get(0), Some(BLACK));
        assert_eq!(buffer.get(3), None);

        buffer.set(1, MAIN);
        buffer.set(7, MAIN);
        assert_eq!(buffer.as_slice(), &[BLACK, MAIN, BLACK]);

        buffer.fill(SECONDARY);
        assert!(buffer.iter().all(|led| *led == SECONDARY));
        buffer.clear();
        assert!(buffer.iter().all(|led| *led == BLACK));

        assert_eq!(
            PixelBuffer::<4>::new(5),
            Err(BufferError::CapacityExceeded {
                requested: 5,
                capacity: 4
            })
        );
        let full = PixelBuffer::<4>::full();
        assert_eq!(full.len(), 4);
        assert!(full.iter().all(|led| *led == BLACK));
        assert!(PixelBuffer::<2>::from_slice(&[MAIN, MAIN, MAIN]).is_err());
    }

    #[test]
    fn test_mismatched_back_buffer_is_rejected() {
        let front = PixelBuffer::<16>::new(10).expect("fits");
        let back = PixelBuffer::<16>::new(9).expect("fits");
        assert_eq!(
            LayerAnimation::with_back_buffer(back, &front).err(),
            Some(BufferError::LengthMismatch { back: 9, front: 10 })
        );

        let layer = LayerAnimation::new(&front).expect("matching length");
        assert_eq!(layer.back_buffer().len(), 10);
    }

    #[test]
    fn test_nothing_leaves_front_untouched() {
        let mut front = patterned_front();
        let before = front.clone();
        let mut layer = LayerAnimation::new(&front).expect("matching length");
        let settings = LayerSettings::default();
        let mut rng = XorShift32::default();

        for fraction in [0.0, 0.3, 0.9, 0.1] {
            layer.animate(fraction, &settings, &mut front, &mut rng);
            assert_eq!(front, before);
        }
    }

    #[test]
    fn test_nothing_still_composites_when_black_is_not_identity() {
        let mut front = patterned_front();
        let mut layer = LayerAnimation::new(&front).expect("matching length");
        let settings = LayerSettings::default().with_blend_mode(BlendMode::Set);

        layer.animate(0.2, &settings, &mut front, &mut XorShift32::default());
        assert!(front.iter().all(|led| *led == BLACK));
    }

    #[test]
    fn test_animate_returns_reconstructed_time() {
        let mut front = PixelBuffer::<8>::new(8).expect("fits");
        let mut layer = LayerAnimation::new(&front).expect("matching length");
        let settings = LayerSettings::default();
        let mut rng = XorShift32::default();

        let times: Vec<f32> = [0.1, 0.5, 0.9, 0.05, 0.3]
            .into_iter()
            .map(|fraction| layer.animate(fraction, &settings, &mut front, &mut rng))
            .collect();
        let expected = [0.1, 0.5, 0.9, 1.05, 1.3];
        for (t, expected) in times.iter().zip(expected) {
            assert!((t - expected).abs() < 1e-5, "{t} != {expected}");
        }
        assert_eq!(layer.clock().accumulated_seconds(), 1.0);

        layer.reset();
        assert_eq!(layer.clock().last_fraction(), None);
    }

    #[test]
    fn test_breathe_end_to_end() {
        let settings = LayerSettings::default()
            .with_colors(MAIN, SECONDARY)
            .with_animation(AnimationId::Breathe)
            .with_blend_mode(BlendMode::Add);
        let mut front = PixelBuffer::<32>::new(20).expect("fits");
        let mut layer = LayerAnimation::new(&front).expect("matching length");
        let mut rng = XorShift32::default();

        let mut frame = |fraction: f32| {
            front.clear();
            layer.animate(fraction, &settings, &mut front, &mut rng);
            front.clone()
        };

        let start = frame(0.0);
        let middle = frame(0.5);
        // Wraps: absolute time 1.0
        let end = frame(0.0);

        assert_ne!(start, middle);
        assert!(start.iter().all(|led| *led == SECONDARY));
        assert!(middle.iter().all(|led| *led == MAIN));
        for (a, b) in start.iter().zip(end.iter()) {
            assert!(a.r.abs_diff(b.r) <= 1 && a.g.abs_diff(b.g) <= 1 && a.b.abs_diff(b.b) <= 1);
        }
    }

    #[test]
    fn test_layers_composite_in_order() {
        let breathe = LayerSettings::default()
            .with_colors(MAIN, SECONDARY)
            .with_animation(AnimationId::Breathe);
        let clear = LayerSettings::default().with_blend_mode(BlendMode::Set);
        let mut rng = XorShift32::default();

        let mut front = PixelBuffer::<8>::new(8).expect("fits");
        let mut first = LayerAnimation::new(&front).expect("matching length");
        let mut second = LayerAnimation::new(&front).expect("matching length");

        first.animate(0.0, &breathe, &mut front, &mut rng);
        second.animate(0.0, &clear, &mut front, &mut rng);
        assert!(front.iter().all(|led| *led == BLACK));

        front.clear();
        first.animate(0.0, &clear, &mut front, &mut rng);
        second.animate(0.0, &breathe, &mut front, &mut rng);
        assert!(front.iter().all(|led| *led == SECONDARY));
    }

    #[test]
    fn test_fire_layer_is_reproducible() {
        let settings = LayerSettings::default().with_animation(AnimationId::Fire);
        let run = || {
            let mut front = PixelBuffer::<24>::new(24).expect("fits");
            let mut layer = LayerAnimation::new(&front).expect("matching length");
            let mut rng = XorShift32::new(5);
            for step in 0..30u8 {
                front.clear();
                layer.animate(f32::from(step % 10) / 10.0, &settings, &mut front, &mut rng);
            }
            front
        };
        assert_eq!(run(), run());
    }
}
