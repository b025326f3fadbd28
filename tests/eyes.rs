mod tests {
    use embassy_time::Duration;
    use wall_art_composer::{
        color::{BLACK, WHITE},
        eyes::{
            BlinkState, EYELID_MAX_OFFSET, EyeAnimator, INDICATOR_CYCLE, LEFT_EYE, RIGHT_EYE,
            ROWS_PER_SECOND, SleepIndicator, SleepPose,
        },
        frame::{Frame, WIDTH},
    };

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Pixels lit inside either resting eye
    fn open_eye_pixels() -> usize {
        let mut count = 0;
        for y in 0..64 {
            for x in 0..64 {
                if LEFT_EYE.contains(x, y) || RIGHT_EYE.contains(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_blink_state_parity() {
        assert_eq!(BlinkState::at(ms(0)), BlinkState::Closed);
        assert_eq!(BlinkState::at(ms(749)), BlinkState::Closed);
        assert_eq!(BlinkState::at(ms(750)), BlinkState::Open);
        assert_eq!(BlinkState::at(ms(1_499)), BlinkState::Open);
        assert_eq!(BlinkState::at(ms(1_500)), BlinkState::Closed);
    }

    #[test]
    fn test_blinking_frame_depends_only_on_parity() {
        let eyes = EyeAnimator::new();
        let open = eyes.blinking_frame(ms(800));
        let closed = eyes.blinking_frame(ms(100));

        for elapsed in [ms(750), ms(1_100), ms(2_300), ms(3_750), ms(60_750)] {
            assert_eq!(eyes.blinking_frame(elapsed), open, "{elapsed:?}");
        }
        for elapsed in [ms(0), ms(1_500), ms(2_249), ms(3_000), ms(60_000)] {
            assert_eq!(eyes.blinking_frame(elapsed), closed, "{elapsed:?}");
        }
    }

    #[test]
    fn test_blinking_frame_contents() {
        let eyes = EyeAnimator::new();
        let open = eyes.blinking_frame(ms(800));
        assert_eq!(open.lit_count(), open_eye_pixels());
        assert_eq!(open.get(22, 24), Some(WHITE));
        assert_eq!(open.get(42, 24), Some(WHITE));
        assert_eq!(open.get(32, 24), Some(BLACK));

        assert!(eyes.blinking_frame(ms(0)).is_black());
    }

    #[test]
    fn test_render_blinking_overwrites_previous_contents() {
        let eyes = EyeAnimator::new();
        let mut frame = Frame::filled(WHITE);
        eyes.render_blinking(ms(0), &mut frame);
        assert!(frame.is_black());
    }

    #[test]
    fn test_sleep_pose_eyelid_saturates() {
        let mut previous = 0;
        for millis in (0..30_000).step_by(50) {
            let pose = SleepPose::at(ms(millis));
            assert!(pose.eyelid_offset >= previous);
            assert!(pose.eyelid_offset <= EYELID_MAX_OFFSET);
            previous = pose.eyelid_offset;
        }
        assert_eq!(SleepPose::at(ms(1_899)).eyelid_offset, 18);
        assert!(!SleepPose::at(ms(1_899)).eyes_closed);
        assert_eq!(SleepPose::at(ms(1_900)).eyelid_offset, 19);
        assert!(SleepPose::at(ms(1_900)).eyes_closed);
        assert_eq!(
            SleepPose::at(Duration::from_secs(u64::from(u32::MAX))).eyelid_offset,
            EYELID_MAX_OFFSET
        );
    }

    #[test]
    fn test_sleep_pose_offsets() {
        let closing = SleepPose::at(ms(1_000));
        assert_eq!((closing.offset_x, closing.offset_y), (0, 0));

        let settled = SleepPose::at(ms(1_950));
        assert_eq!((settled.offset_x, settled.offset_y), (-4, 8));

        assert_eq!(SleepPose::at(ms(2_000)).offset_y, 8);
        assert_eq!(SleepPose::at(ms(3_000)).offset_y, 9);
        assert_eq!(SleepPose::at(ms(3_999)).offset_y, 9);
        assert_eq!(SleepPose::at(ms(4_000)).offset_y, 8);
    }

    #[test]
    fn test_sleeping_frame_starts_with_open_eyes() {
        let eyes = EyeAnimator::new();
        let start = eyes.sleeping_frame(ms(0));
        assert_eq!(start, eyes.blinking_frame(ms(800)));
        assert_eq!(start.lit_count(), open_eye_pixels());
    }

    #[test]
    fn test_sleeping_frame_eyelid_descends() {
        let eyes = EyeAnimator::new();
        let mut previous = usize::MAX;
        for millis in (0..1_900).step_by(100) {
            let lit = eyes.sleeping_frame(ms(millis)).lit_count();
            assert!(lit <= previous, "{millis} ms");
            previous = lit;
        }

        // Three rows of lid after 300 ms: the top rows of each eye are dark
        let frame = eyes.sleeping_frame(ms(300));
        assert_eq!(frame.get(22, 15), Some(BLACK));
        assert_eq!(frame.get(22, 16), Some(BLACK));
        assert_eq!(frame.get(22, 17), Some(WHITE));
    }

    #[test]
    fn test_closed_eyes_leave_bottom_sliver() {
        let eyes = EyeAnimator::new();
        let frame = eyes.sleeping_frame(ms(1_900));

        // Eyes moved to (18, 32) and (38, 32); the lid covers rows 22..41
        assert_eq!(frame.lit_count(), 10);
        for x in 16..=20 {
            assert_eq!(frame.get(x, 41), Some(WHITE));
        }
        for x in 36..=40 {
            assert_eq!(frame.get(x, 41), Some(WHITE));
        }
    }

    #[test]
    fn test_breathing_bounce_moves_sliver() {
        let eyes = EyeAnimator::new();
        let frame = eyes.sleeping_frame(ms(3_100));
        assert_eq!(frame.get(18, 41), Some(BLACK));
        assert_eq!(frame.get(18, 42), Some(WHITE));
    }

    #[test]
    fn test_indicator_lines_to_show() {
        assert_eq!(SleepIndicator::lines_to_show(ms(0)), 0);
        assert_eq!(SleepIndicator::lines_to_show(ms(333)), 0);
        assert_eq!(SleepIndicator::lines_to_show(ms(334)), 1);
        assert_eq!(SleepIndicator::lines_to_show(ms(8_999)), 26);
        assert_eq!(SleepIndicator::lines_to_show(INDICATOR_CYCLE), 0);
        assert_eq!(
            SleepIndicator::lines_to_show(ms(1_000)),
            i32::try_from(ROWS_PER_SECOND).unwrap()
        );
    }

    #[test]
    fn test_indicator_hidden_until_rows_are_reached() {
        let eyes = EyeAnimator::new();
        // 2 s into the cycle only rows 0..6 are revealed; glyphs start at row 8
        let frame = eyes.sleeping_frame(ms(2_000));
        assert_eq!(frame.get(38, 8), Some(BLACK));
        assert_eq!(frame.lit_count(), 10);
    }

    #[test]
    fn test_indicator_fully_drawn() {
        let eyes = EyeAnimator::new();
        let frame = eyes.sleeping_frame(ms(8_500));

        // Top bar of the first glyph
        for x in 38..43 {
            assert_eq!(frame.get(x, 8), Some(WHITE));
        }
        // Diagonal runs from top right to bottom left
        assert_eq!(frame.get(41, 9), Some(WHITE));
        assert_eq!(frame.get(40, 10), Some(WHITE));
        assert_eq!(frame.get(39, 11), Some(WHITE));
        assert_eq!(frame.get(38, 9), Some(BLACK));
        // Third glyph bottom bar
        for x in 48..53 {
            assert_eq!(frame.get(x, 24), Some(WHITE));
        }

        let lit_above_eyes: usize = (0..22)
            .map(|y| frame.row(y).iter().filter(|p| **p == WHITE).count())
            .sum();
        assert_eq!(lit_above_eyes, 32);
    }

    #[test]
    fn test_indicator_resets_every_cycle() {
        let eyes = EyeAnimator::new();
        assert_eq!(eyes.sleeping_frame(ms(9_000)).get(38, 8), Some(BLACK));
        assert_eq!(
            eyes.sleeping_frame(ms(8_500)),
            eyes.sleeping_frame(ms(8_500 + 18_000))
        );
    }

    #[test]
    fn test_indicator_clips_at_frame_edge() {
        // Revealed rows count from the top of the frame, so the glyphs sit at
        // the top right corner here
        let indicator = SleepIndicator::new(WIDTH as i32 - 5, 0, WHITE);
        let mut frame = Frame::new();
        indicator.render(&mut frame, ms(8_999));

        // Only the first glyph fits, the others are dropped silently
        assert_eq!(frame.lit_count(), 13);

        let mut frame = Frame::new();
        SleepIndicator::new(-20, -20, WHITE).render(&mut frame, ms(8_999));
        assert!(frame.is_black());
    }
}
