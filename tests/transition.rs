mod tests {
    use wall_art_composer::{
        color::{ColorSource, RandomColorSource, Rgb, WHITE},
        frame::Frame,
        gamma::{FadedFrame, GAMMA, apply_fade, gamma_correct},
        pattern::{PatternId, gradient_wave_pattern},
        transition::{PatternManager, Phase, PhaseTimings},
    };

    const AZURE: Rgb = Rgb {
        r: 0,
        g: 128,
        b: 255,
    };

    /// Always the same color, always the first candidate
    struct FixedSource;

    impl ColorSource for FixedSource {
        fn cool_color(&mut self) -> Rgb {
            AZURE
        }

        fn pick_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn advance<S: ColorSource>(manager: &mut PatternManager<S>, ticks: u32) {
        for _ in 0..ticks {
            manager.update();
        }
    }

    #[test]
    fn test_apply_fade_identity_and_zero() {
        let base = gradient_wave_pattern(&mut FixedSource);
        let mut out = Frame::new();

        apply_fade(&base, 1.0, &mut out);
        assert_eq!(out, base);

        apply_fade(&base, 0.0, &mut out);
        assert!(out.is_black());
    }

    #[test]
    fn test_apply_fade_is_gamma_corrected() {
        assert!((GAMMA - 2.2).abs() < f32::EPSILON);
        let base = Frame::filled(WHITE);
        let mut out = Frame::new();
        apply_fade(&base, 0.5, &mut out);
        // 255 * 0.5^2.2 = 55.5, a linear fade would give 128
        assert_eq!(out.get(0, 0), Some(Rgb::new(55, 55, 55)));
        assert!(gamma_correct(2.0) <= 1.0);
        assert!(gamma_correct(-1.0) >= 0.0);
    }

    #[test]
    fn test_faded_frame_cache() {
        let base = Frame::filled(WHITE);
        let mut faded = FadedFrame::new();
        assert!(!faded.is_cached(0.5));

        let first = faded.compose(&base, 0.5).clone();
        assert!(faded.is_cached(0.5));
        assert_eq!(faded.compose(&base, 0.5), &first);

        faded.invalidate();
        assert!(!faded.is_cached(0.5));
        assert_eq!(faded.compose(&Frame::new(), 0.5), &Frame::new());
    }

    #[test]
    fn test_initial_state() {
        let manager = PatternManager::new(FixedSource);
        assert_eq!(manager.phase(), Phase::FadeIn);
        assert_eq!(manager.ticks_in_phase(), 0);
        assert_eq!(manager.selections(), 1);
        assert_eq!(manager.pattern(), PatternId::GradientWave);
        assert_eq!(manager.base(), &gradient_wave_pattern(&mut FixedSource));
    }

    #[test]
    fn test_hold_after_fade_in() {
        let mut manager = PatternManager::new(FixedSource);
        advance(&mut manager, 29);
        assert_eq!(manager.phase(), Phase::FadeIn);
        assert_ne!(manager.frame(), manager.base());

        manager.update();
        assert_eq!(manager.phase(), Phase::Hold);
        assert_eq!(manager.frame(), manager.base());
    }

    #[test]
    fn test_fade_in_brightens_monotonically() {
        let mut manager = PatternManager::new(FixedSource);
        let mut previous = 0;
        for _ in 0..30 {
            let blue = manager.update().get(0, 0).unwrap().b;
            assert!(blue >= previous);
            previous = blue;
        }
        assert_eq!(previous, 128);
    }

    #[test]
    fn test_hold_shows_base_throughout() {
        let mut manager = PatternManager::new(FixedSource);
        advance(&mut manager, 30);
        for _ in 0..50 {
            let frame = manager.update().clone();
            assert_eq!(&frame, manager.base());
        }
        assert_eq!(manager.phase(), Phase::FadeOut);
    }

    #[test]
    fn test_fade_out_then_black() {
        let mut manager = PatternManager::new(FixedSource);
        advance(&mut manager, 80);
        assert_eq!(manager.phase(), Phase::FadeOut);

        let mut previous = u8::MAX;
        for _ in 0..20 {
            let blue = manager.update().get(0, 0).unwrap().b;
            assert!(blue <= previous);
            previous = blue;
        }
        assert_eq!(manager.phase(), Phase::Black);
        assert!(manager.frame().is_black());

        for _ in 0..19 {
            assert!(manager.update().is_black());
            assert_eq!(manager.phase(), Phase::Black);
        }
    }

    #[test]
    fn test_one_selection_per_cycle() {
        let cycle = PhaseTimings::DEFAULT.cycle_len();
        assert_eq!(cycle, 120);

        let mut manager = PatternManager::new(FixedSource);
        advance(&mut manager, cycle - 1);
        assert_eq!(manager.selections(), 1);
        assert_eq!(manager.phase(), Phase::Black);

        manager.update();
        assert_eq!(manager.selections(), 2);
        assert_eq!(manager.phase(), Phase::FadeIn);
        assert_eq!(manager.ticks_in_phase(), 0);
        assert_eq!(manager.pattern(), PatternId::CheckerDiamond);

        advance(&mut manager, cycle);
        assert_eq!(manager.selections(), 3);
        assert_eq!(manager.pattern(), PatternId::GradientWave);
    }

    #[test]
    fn test_random_selection_never_repeats() {
        let cycle = PhaseTimings::DEFAULT.cycle_len();
        let mut manager = PatternManager::new(RandomColorSource::seeded(2024));
        let mut previous = manager.pattern();

        for round in 1..=40 {
            for _ in 0..cycle {
                manager.update();
                assert!(manager.selections() <= round + 1);
            }
            assert_eq!(manager.selections(), round + 1);
            assert_ne!(manager.pattern(), previous);
            previous = manager.pattern();
        }
    }

    #[test]
    fn test_restart() {
        let mut manager = PatternManager::new(FixedSource);
        advance(&mut manager, 55);
        assert_eq!(manager.phase(), Phase::Hold);

        manager.restart();
        assert_eq!(manager.phase(), Phase::FadeIn);
        assert_eq!(manager.ticks_in_phase(), 0);
        assert_eq!(manager.selections(), 2);
        assert_eq!(manager.pattern(), PatternId::CheckerDiamond);

        advance(&mut manager, 30);
        assert_eq!(manager.phase(), Phase::Hold);
    }
}
