mod tests {
    use dice_light_composer::animation::{
        AnimationState, Animator, DiceConfig, ERROR_PERIOD_MS, MIN_PERIOD_MS, SLOW_DOWN_CEILING_MS,
        SLOW_DOWN_FLOOR_MS, SPIN_UP_FLOOR_MS,
    };
    use dice_light_composer::color::{BLACK, RED, WHITE};
    use dice_light_composer::{AnimationMode, DieFace, Duration, Xorshift32};

    fn animator(mode: AnimationMode, period_ms: u64, infinite: bool) -> Animator<Xorshift32> {
        let config = DiceConfig {
            mode,
            period: Duration::from_millis(period_ms),
            infinite,
            ..DiceConfig::default()
        };
        Animator::new(AnimationState::new(&config), Xorshift32::new(0xC0FF_EE11))
    }

    #[test]
    fn test_period_is_clamped() {
        let animator = animator(AnimationMode::Flood, 1, true);
        assert_eq!(animator.state().period_ms(), MIN_PERIOD_MS);
    }

    #[test]
    fn test_count_up_cycles() {
        let mut animator = animator(AnimationMode::CountUp, 100, true);
        let start = animator.state().face;
        assert_eq!(start, DieFace::new(1));

        let (_, face) = animator.step();
        assert_eq!(face, DieFace::new(2));
        for _ in 0..5 {
            animator.step();
        }
        assert_eq!(animator.state().face, start);
    }

    #[test]
    fn test_count_down_cycles() {
        let mut animator = animator(AnimationMode::CountDown, 100, true);
        let (_, face) = animator.step();
        assert_eq!(face, DieFace::new(6));
        for _ in 0..5 {
            animator.step();
        }
        assert_eq!(animator.state().face, DieFace::new(1));
    }

    #[test]
    fn test_random_roll_hits_every_face() {
        let mut animator = animator(AnimationMode::RandomRoll, 100, true);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            let (mode, face) = animator.step();
            assert_eq!(mode, AnimationMode::RandomRoll);
            seen[usize::from(face.get() - 1)] = true;
        }
        assert!(seen.iter().all(|seen| *seen));
        assert_eq!(animator.state().period_ms(), 100);
    }

    #[test]
    fn test_spin_up_never_repeats_and_accelerates() {
        let mut animator = animator(AnimationMode::SpinUpRoll, 1000, true);
        let mut previous_face = animator.state().face;
        let mut previous_period = animator.state().period_ms();

        for _ in 0..1000 {
            let (_, face) = animator.step();
            let period = animator.state().period_ms();
            assert_ne!(face, previous_face);
            if previous_period > SPIN_UP_FLOOR_MS {
                assert!(period < previous_period);
            }
            assert!(period >= SPIN_UP_FLOOR_MS);
            previous_face = face;
            previous_period = period;
        }
        assert_eq!(animator.state().period_ms(), SPIN_UP_FLOOR_MS);
    }

    #[test]
    fn test_slow_down_never_repeats_and_decelerates() {
        let mut animator = animator(AnimationMode::SlowDownRoll, 20, true);
        let mut previous_face = animator.state().face;
        let mut previous_period = animator.state().period_ms();

        for _ in 0..1000 {
            let (_, face) = animator.step();
            let period = animator.state().period_ms();
            assert_ne!(face, previous_face);
            if previous_period < SLOW_DOWN_CEILING_MS {
                assert!(period > previous_period);
            }
            assert!(period >= SLOW_DOWN_FLOOR_MS);
            assert!(period <= SLOW_DOWN_CEILING_MS);
            previous_face = face;
            previous_period = period;
        }
        assert_eq!(animator.state().period_ms(), SLOW_DOWN_CEILING_MS);
    }

    #[test]
    fn test_slow_down_caps_long_periods() {
        let mut animator = animator(AnimationMode::SlowDownRoll, 10_000, true);
        animator.step();
        assert_eq!(animator.state().period_ms(), SLOW_DOWN_CEILING_MS);
    }

    #[test]
    fn test_repeats_run_out() {
        let mut animator = animator(AnimationMode::CountUp, 100, false);
        animator.state_mut().remaining_repeats = 3;
        assert!(!animator.state().is_dormant());

        for expected in [2, 1, 0] {
            animator.step();
            assert_eq!(animator.state().remaining_repeats, expected);
        }
        assert!(animator.state().is_dormant());
    }

    #[test]
    fn test_infinite_keeps_repeats() {
        let mut animator = animator(AnimationMode::CountUp, 100, true);
        animator.state_mut().remaining_repeats = 2;
        for _ in 0..10 {
            animator.step();
        }
        assert_eq!(animator.state().remaining_repeats, 2);
        assert!(!animator.state().is_dormant());
    }

    #[test]
    fn test_error_flashes_and_overrides_timing() {
        let mut animator = animator(AnimationMode::Error, 2000, false);
        assert_eq!(animator.state().color, WHITE);
        // Error is never dormant even without repeats
        assert!(!animator.state().is_dormant());

        animator.step();
        assert_eq!(animator.state().color, RED);
        assert_eq!(animator.state().period_ms(), ERROR_PERIOD_MS);
        assert!(animator.state().infinite);

        animator.step();
        assert_eq!(animator.state().color, BLACK);
        animator.step();
        assert_eq!(animator.state().color, RED);
        assert_eq!(animator.state().mode, AnimationMode::Error);
    }

    #[test]
    fn test_flood_keeps_face() {
        let mut animator = animator(AnimationMode::Flood, 100, true);
        animator.state_mut().face = DieFace::new(4);
        let (mode, face) = animator.step();
        assert_eq!(mode, AnimationMode::Flood);
        assert_eq!(face, DieFace::new(4));
    }

    #[test]
    fn test_leaving_error_restores_overridden_fields() {
        let mut animator = animator(AnimationMode::CountUp, 1200, false);
        animator.state_mut().remaining_repeats = 5;
        animator.state_mut().enter_error();
        animator.step();
        animator.step();
        assert_eq!(animator.state().color, BLACK);
        assert_eq!(animator.state().remaining_repeats, 5);

        let state = animator.state_mut();
        state.leave_error();
        state.mode = AnimationMode::CountUp;
        assert_eq!(state.color, WHITE);
        assert_eq!(state.period_ms(), 1200);
        assert!(!state.infinite);

        // Nothing left to restore
        state.color = RED;
        state.leave_error();
        assert_eq!(state.color, RED);
    }

    #[test]
    fn test_schedule_now_makes_step_due() {
        use dice_light_composer::clock::is_due;

        let mut animator = animator(AnimationMode::Flood, 3000, false);
        let state = animator.state_mut();
        state.last_tick_ms = 10;
        assert!(!is_due(11, state.last_tick_ms, state.period_ms()));
        state.schedule_now();
        assert!(is_due(11, state.last_tick_ms, state.period_ms()));

        state.last_tick_ms = 1;
        state.schedule_now();
        assert!(is_due(1, state.last_tick_ms, state.period_ms()));
    }
}
