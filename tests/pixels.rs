mod support;

mod tests {
    use myrtio_strand_controller::{
        PixelBuffer, Rgb,
        color::{BLACK, WHITE, color_wheel, intensity, inverse},
        pixels::DEFAULT_BRIGHTNESS,
    };

    use super::support::RecordingDriver;

    #[test]
    fn test_strands_are_contiguous() {
        let mut buffer = PixelBuffer::<3, 4>::default();
        assert_eq!(PixelBuffer::<3, 4>::LEN, 12);

        assert!(buffer.set(1, 0, WHITE));
        assert!(buffer.set(2, 3, WHITE));
        assert!(!buffer.set(3, 0, WHITE));
        assert!(!buffer.set(0, 4, WHITE));

        assert_eq!(buffer.pixels()[4], WHITE);
        assert_eq!(buffer.pixels()[11], WHITE);
        assert_eq!(buffer.strand(1).unwrap()[0], WHITE);
        assert_eq!(buffer.strand(0).unwrap(), &[BLACK; 4]);
        assert!(buffer.strand(3).is_none());

        buffer.clear();
        assert!(buffer.pixels().iter().all(|pixel| *pixel == BLACK));
    }

    #[test]
    fn test_brightness_is_clamped() {
        let mut buffer = PixelBuffer::<1, 1>::default();
        assert!((buffer.brightness() - DEFAULT_BRIGHTNESS).abs() < f32::EPSILON);
        assert_eq!(buffer.brightness_level(), 140);

        buffer.set_brightness(1.5);
        assert_eq!(buffer.brightness_level(), 255);
        buffer.set_brightness(-1.0);
        assert_eq!(buffer.brightness_level(), 0);
    }

    #[test]
    fn test_commit_writes_scaled_frame() {
        let mut buffer = PixelBuffer::<2, 2>::new(1.0);
        let mut driver = RecordingDriver::default();

        buffer.set_all(Rgb::new(255, 100, 1));
        buffer.commit(&mut driver).unwrap();
        assert_eq!(driver.last_frame().unwrap(), &[Rgb::new(255, 100, 1); 4]);

        buffer.set_brightness(0.5);
        buffer.commit(&mut driver).unwrap();
        assert_eq!(driver.last_frame().unwrap()[0], Rgb::new(128, 50, 0));
        assert_eq!(driver.frames.len(), 2);
    }

    #[test]
    fn test_commit_reports_bus_errors() {
        let buffer = PixelBuffer::<1, 2>::new(1.0);
        let mut driver = RecordingDriver {
            fail: true,
            ..RecordingDriver::default()
        };
        assert!(buffer.commit(&mut driver).is_err());
        assert!(driver.frames.is_empty());
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(color_wheel(0), Rgb::new(255, 0, 0));
        assert_eq!(color_wheel(85), Rgb::new(0, 255, 0));
        assert_eq!(color_wheel(170), Rgb::new(0, 0, 255));
        assert_eq!(color_wheel(255), Rgb::new(255, 0, 0));

        assert_eq!(inverse(Rgb::new(0, 100, 255)), Rgb::new(255, 155, 0));
        assert_eq!(intensity(Rgb::new(255, 11, 0), 0.5), Rgb::new(127, 5, 0));
        assert_eq!(intensity(WHITE, 2.0), WHITE);
    }
}
