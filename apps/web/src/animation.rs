#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AnimationMode {
    Running,
    Paused,
}

const PULSE_SPEED: f64 = 3.0;
const MAX_FRAME_DELTA: f64 = 0.25;
const FULL_ROTATION: f64 = 2.0 * std::f64::consts::PI;

/// Advances the pulse counter from the previous frame time. The first
/// frame and backwards clocks leave the counter untouched; long gaps
/// (background tabs) are clamped so the pulse never jumps.
pub fn advance_pulse(
    counter: f64,
    last_tick: Option<f64>,
    now_seconds: f64,
    mode: AnimationMode,
) -> (f64, Option<f64>) {
    let delta = last_tick
        .map(|last| (now_seconds - last).max(0.0).min(MAX_FRAME_DELTA))
        .unwrap_or(0.0);

    let next_counter = match mode {
        AnimationMode::Running => (delta.mul_add(PULSE_SPEED, counter)).rem_euclid(FULL_ROTATION),
        AnimationMode::Paused => counter.rem_euclid(FULL_ROTATION),
    };

    (next_counter, Some(now_seconds))
}

#[cfg(test)]
mod tests {
    use super::{advance_pulse, AnimationMode, FULL_ROTATION, PULSE_SPEED};

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn first_frame_only_records_the_clock() {
        let (counter, last_tick) = advance_pulse(0.75, None, 42.0, AnimationMode::Running);

        assert_close(counter, 0.75);
        assert_eq!(last_tick, Some(42.0));
    }

    #[test]
    fn running_mode_advances_and_wraps() {
        let start = FULL_ROTATION - 0.05;
        let (counter, _) = advance_pulse(start, Some(1.0), 1.1, AnimationMode::Running);

        let expected = 0.1_f64.mul_add(PULSE_SPEED, start).rem_euclid(FULL_ROTATION);
        assert_close(counter, expected);
    }

    #[test]
    fn paused_mode_holds_the_counter() {
        let (counter, last_tick) = advance_pulse(2.0, Some(5.0), 5.4, AnimationMode::Paused);

        assert_close(counter, 2.0);
        assert_eq!(last_tick, Some(5.4));
    }

    #[test]
    fn long_gaps_are_clamped() {
        let (counter, _) = advance_pulse(0.0, Some(0.0), 60.0, AnimationMode::Running);

        assert_close(counter, 0.25 * PULSE_SPEED);
    }

    #[test]
    fn backwards_clock_does_not_rewind() {
        let (counter, last_tick) = advance_pulse(1.5, Some(9.0), 8.0, AnimationMode::Running);

        assert_close(counter, 1.5);
        assert_eq!(last_tick, Some(8.0));
    }
}
