mod tests {
    use myrtio_strand_controller::{
        Precision, SignalConditioner,
        conditioner::{DEFAULT_WINDOW, round_to},
    };

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_empty_reads_zero() {
        let conditioner: SignalConditioner = SignalConditioner::truncating();
        assert!(conditioner.is_empty());
        assert_eq!(conditioner.read(), 0.0);
    }

    #[test]
    fn test_truncating_mean() {
        let mut conditioner: SignalConditioner = SignalConditioner::truncating();
        conditioner.observe(1.9);
        conditioner.observe(2.9);
        // Samples are stored as 1 and 2, mean 1.5 truncates to 1
        assert_eq!(conditioner.read(), 1.0);
        assert_eq!(conditioner.precision(), Precision::Truncate);
    }

    #[test]
    fn test_window_evicts_oldest() {
        let mut conditioner = SignalConditioner::<3>::truncating();
        for value in [1.0, 2.0, 3.0, 4.0] {
            conditioner.observe(value);
        }
        assert_eq!(conditioner.len(), 3);
        assert_eq!(conditioner.read(), 3.0);

        conditioner.observe(10.0);
        assert_eq!(conditioner.len(), 3);
        // (3 + 4 + 10) / 3
        assert_eq!(conditioner.read(), 5.0);
    }

    #[test]
    fn test_default_window_size() {
        let mut conditioner: SignalConditioner = SignalConditioner::truncating();
        for _ in 0..DEFAULT_WINDOW + 5 {
            conditioner.observe(7.0);
        }
        assert_eq!(conditioner.len(), DEFAULT_WINDOW);
        assert_eq!(conditioner.read(), 7.0);
    }

    #[test]
    fn test_rounding_mean() {
        let mut conditioner = SignalConditioner::<4>::rounding(2);
        conditioner.observe(0.333);
        conditioner.observe(0.334);
        assert!(approx(conditioner.read(), 0.33));
        assert_eq!(conditioner.precision(), Precision::Decimals(2));
    }

    #[test]
    fn test_round_to_ties_to_even() {
        assert!(approx(round_to(0.125, 2), 0.12));
        assert!(approx(round_to(0.375, 2), 0.38));
        assert!(approx(round_to(-0.125, 2), -0.12));
        assert!(approx(round_to(2.5, 0), 2.0));
        assert!(approx(round_to(0.4, 0), 0.0));
        assert!(approx(round_to(0.126, 2), 0.13));
    }

    #[test]
    fn test_clear() {
        let mut conditioner = SignalConditioner::<4>::truncating();
        conditioner.observe(12.0);
        conditioner.clear();
        assert!(conditioner.is_empty());
        assert_eq!(conditioner.read(), 0.0);
    }
}
