mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_strand_controller::{Blink, Mode, PaceWindow, Pacer};

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_pace_window_is_strict() {
        let mut window = PaceWindow::new(Some(Duration::from_millis(50)));
        assert!(window.is_due(at(0)));

        window.mark(at(100));
        assert!(!window.is_due(at(120)));
        assert!(!window.is_due(at(150)));
        assert!(window.is_due(at(151)));

        window.clear();
        assert_eq!(window.last(), None);
        assert!(window.is_due(at(101)));
    }

    #[test]
    fn test_window_without_interval_is_always_due() {
        let mut window = PaceWindow::new(None);
        window.mark(at(10));
        assert!(window.is_due(at(10)));
    }

    #[test]
    fn test_pacer_uses_mode_intervals() {
        let mut pacer = Pacer::new();

        pacer.record(Mode::StrandWalk, at(0));
        assert!(!pacer.due(Mode::StrandWalk, at(50)));
        assert!(pacer.due(Mode::StrandWalk, at(51)));

        pacer.record(Mode::BufferWalk, at(0));
        assert!(!pacer.due(Mode::BufferWalk, at(25)));
        assert!(pacer.due(Mode::BufferWalk, at(26)));

        pacer.record(Mode::CometChase, at(0));
        assert!(!pacer.due(Mode::CometChase, at(250)));
        assert!(pacer.due(Mode::CometChase, at(251)));

        pacer.record(Mode::Chase, at(0));
        assert!(pacer.due(Mode::Chase, at(0)));
    }

    #[test]
    fn test_record_resets_window() {
        let mut pacer = Pacer::new();
        pacer.record(Mode::StrandWalk, at(0));
        pacer.record(Mode::StrandWalk, at(60));
        assert!(!pacer.due(Mode::StrandWalk, at(100)));
        assert_eq!(pacer.last_render(Mode::StrandWalk), Some(at(60)));
    }

    #[test]
    fn test_modes_are_paced_independently() {
        let mut pacer = Pacer::new();
        pacer.record(Mode::StrandWalk, at(0));
        assert!(pacer.due(Mode::BufferWalk, at(1)));
        assert_eq!(pacer.last_render(Mode::BufferWalk), None);
    }

    #[test]
    fn test_custom_intervals() {
        let mut intervals = [None; Mode::COUNT];
        intervals[Mode::Chase.index()] = Some(Duration::from_millis(5));
        let mut pacer = Pacer::with_intervals(intervals);

        pacer.record(Mode::Chase, at(0));
        assert!(!pacer.due(Mode::Chase, at(5)));
        assert!(pacer.due(Mode::Chase, at(6)));

        pacer.record(Mode::StrandWalk, at(0));
        assert!(pacer.due(Mode::StrandWalk, at(0)));
    }

    #[test]
    fn test_blink_alternates() {
        let mut blink = Blink::new(Duration::from_millis(750));
        assert!(blink.is_primary());

        assert_eq!(blink.poll(at(0)), Some(true));
        assert!(!blink.is_primary());
        assert_eq!(blink.poll(at(100)), None);
        assert_eq!(blink.poll(at(750)), None);
        assert_eq!(blink.poll(at(751)), Some(false));
        assert!(blink.is_primary());
    }
}
