mod tests {
    use myrtio_strand_controller::{
        ColorMapper, RawSamples, Rgb, SensorState,
        mapper::{channel_level, normalize_brightness},
    };

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn samples(brightness: u16, red: u16, green: u16, blue: u16) -> RawSamples {
        RawSamples {
            brightness,
            red,
            green,
            blue,
        }
    }

    #[test]
    fn test_full_brightness_depends_on_power_safety() {
        let mut safe: ColorMapper = ColorMapper::new();
        let state = safe.update(samples(65_535, 0, 0, 0), true);
        assert!(approx(state.brightness, 1.0));

        let mut limited: ColorMapper = ColorMapper::new();
        let state = limited.update(samples(65_535, 0, 0, 0), false);
        assert!(approx(state.brightness, 0.7));
    }

    #[test]
    fn test_normalize_brightness() {
        assert!(approx(normalize_brightness(0, true), 0.0));
        assert!(approx(normalize_brightness(32_768, true), 0.5));
        assert!(approx(normalize_brightness(32_768, false), 0.35));
    }

    #[test]
    fn test_channel_level_saturates() {
        assert_eq!(channel_level(0), 0);
        assert_eq!(channel_level(254), 0);
        assert_eq!(channel_level(510), 2);
        assert_eq!(channel_level(65_025), 255);
        assert_eq!(channel_level(65_535), 255);
    }

    #[test]
    fn test_color_and_inverse() {
        let mut mapper: ColorMapper = ColorMapper::new();
        let state = mapper.update(samples(0, 65_025, 255 * 100, 0), true);
        assert_eq!(state.color, Rgb::new(255, 100, 0));
        assert_eq!(state.inverse, Rgb::new(0, 155, 255));
    }

    #[test]
    fn test_channels_are_smoothed() {
        let mut mapper: ColorMapper = ColorMapper::new();
        mapper.update(samples(0, 255 * 10, 0, 0), true);
        let state = mapper.update(samples(0, 255 * 21, 0, 0), true);
        // (10 + 21) / 2 truncated
        assert_eq!(state.color.r, 15);
        assert_eq!(mapper.state(), state);
    }

    #[test]
    fn test_default_state() {
        let state = SensorState::default();
        assert_eq!(state.color, Rgb::new(0, 0, 0));
        assert_eq!(state.inverse, Rgb::new(255, 255, 255));
        assert_eq!(state.brightness, 0.0);
    }
}
