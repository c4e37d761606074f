mod tests {
    use embassy_time::{Duration, Instant};
    use shiner_composer::clock::LayerClock;
    use shiner_composer::timer::LayerTimer;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_clock_reconstructs_absolute_time() {
        let mut clock = LayerClock::new();
        let fractions = [0.1, 0.5, 0.9, 0.05, 0.3];
        let expected = [0.1, 0.5, 0.9, 1.05, 1.3];

        for (fraction, expected) in fractions.into_iter().zip(expected) {
            let t = clock.advance(fraction);
            assert!(close(t, expected), "{fraction} gave {t}, expected {expected}");
        }
        assert_eq!(clock.accumulated_seconds(), 1.0);
        assert_eq!(clock.last_fraction(), Some(0.3));
    }

    #[test]
    fn test_first_fraction_never_wraps() {
        let mut clock = LayerClock::new();
        assert_eq!(clock.last_fraction(), None);
        assert_eq!(clock.advance(0.0), 0.0);
        assert_eq!(clock.accumulated_seconds(), 0.0);
    }

    #[test]
    fn test_equal_fraction_does_not_wrap() {
        let mut clock = LayerClock::new();
        clock.advance(0.4);
        assert!(close(clock.advance(0.4), 0.4));
        assert_eq!(clock.accumulated_seconds(), 0.0);
    }

    #[test]
    fn test_every_decrease_counts_one_cycle() {
        let mut clock = LayerClock::new();
        let mut previous = 0.0;
        for fraction in [0.9, 0.1, 0.8, 0.7, 0.2, 0.95, 0.0] {
            let t = clock.advance(fraction);
            assert!(t >= previous);
            previous = t;
        }
        assert_eq!(clock.accumulated_seconds(), 4.0);
    }

    #[test]
    fn test_out_of_range_fractions_are_clamped() {
        let mut clock = LayerClock::new();
        assert_eq!(clock.advance(1.5), 1.0);
        assert_eq!(clock.advance(f32::NAN), 1.0);
        assert_eq!(clock.accumulated_seconds(), 1.0);
        assert_eq!(clock.advance(-2.0), 1.0);
    }

    #[test]
    fn test_repeating_timer_wraps() {
        let timer = LayerTimer::new(Duration::from_secs(2), true, Instant::from_millis(0));
        let progress = timer.progress(Instant::from_millis(500));
        assert!(close(progress.fraction, 0.25));
        assert!(!progress.done);

        let progress = timer.progress(Instant::from_millis(2_500));
        assert!(close(progress.fraction, 0.25));
        assert!(!progress.done);
    }

    #[test]
    fn test_one_shot_timer_finishes() {
        let timer = LayerTimer::new(Duration::from_secs(1), false, Instant::from_millis(100));
        assert!(!timer.progress(Instant::from_millis(600)).done);
        let progress = timer.progress(Instant::from_millis(1_100));
        assert!(progress.done);
        assert_eq!(progress.fraction, 1.0);
    }

    #[test]
    fn test_timer_before_start_reads_zero() {
        let timer = LayerTimer::new(Duration::from_secs(1), true, Instant::from_millis(1_000));
        assert_eq!(timer.progress(Instant::from_millis(10)).fraction, 0.0);
    }

    #[test]
    fn test_timer_keeps_position_when_cycle_changes() {
        let mut timer = LayerTimer::new(Duration::from_secs(2), true, Instant::from_millis(0));
        let now = Instant::from_millis(3_000);
        timer.set_cycle(Duration::from_secs(4), now);
        assert_eq!(timer.cycle(), Duration::from_secs(4));
        assert!(close(timer.progress(now).fraction, 0.5));
    }

    #[test]
    fn test_cycle_from_secs() {
        assert_eq!(LayerTimer::cycle_from_secs(2.0), Duration::from_millis(2_000));
        assert_eq!(LayerTimer::cycle_from_secs(0.0), Duration::from_millis(1));
        assert_eq!(LayerTimer::cycle_from_secs(f32::NAN), Duration::from_millis(1));
    }
}
