//! Animated number counter.

use std::time::Duration;

use leptos::{leptos_dom::helpers::IntervalHandle, *};

/// Default count-up animation length.
pub const DEFAULT_COUNT_UP_DURATION: Duration = Duration::from_millis(2_000);

const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq)]
/// Ease-out-expo interpolation from `start` to `end` over `duration`.
pub struct CountUpTimeline {
    start: i64,
    end: i64,
    duration: Duration,
}

impl CountUpTimeline {
    /// Builds a timeline.
    pub fn new(start: i64, end: i64, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
        }
    }

    /// Starting value.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Target value.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Animation length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether `elapsed` is at or past the end of the animation.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Displayed value after `elapsed`; exactly [`Self::end`] once finished.
    pub fn value_at(&self, elapsed: Duration) -> i64 {
        if self.duration.is_zero() || self.is_finished(elapsed) {
            return self.end;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = ease_out_expo(progress);
        let span = (i128::from(self.end) - i128::from(self.start)) as f64;
        let value = (self.start as f64 + span * eased).round() as i64;
        if self.start <= self.end {
            value.clamp(self.start, self.end)
        } else {
            value.clamp(self.end, self.start)
        }
    }
}

fn ease_out_expo(progress: f64) -> f64 {
    ((1.0 - 2f64.powf(-10.0 * progress)) * 1024.0 / 1023.0).min(1.0)
}

/// Formats a count with `,` thousands separators.
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[component]
/// Counter that animates from `start` to `end` once mounted.
pub fn CountUp(
    end: i64,
    #[prop(optional)] start: i64,
    #[prop(default = DEFAULT_COUNT_UP_DURATION)] duration: Duration,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let timeline = CountUpTimeline::new(start, end, duration);
    let elapsed = create_rw_signal(Duration::ZERO);
    let interval = store_value(None::<IntervalHandle>);

    if !timeline.is_finished(Duration::ZERO) {
        match set_interval_with_handle(
            move || {
                elapsed.update(|elapsed| *elapsed += FRAME);
                if timeline.is_finished(elapsed.get_untracked()) {
                    if let Some(handle) = interval.get_value() {
                        handle.clear();
                    }
                }
            },
            FRAME,
        ) {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("count-up interval failed: {err:?}");
                elapsed.set(duration);
            }
        }
    }

    on_cleanup(move || {
        if let Some(handle) = interval.try_get_value().flatten() {
            handle.clear();
        }
    });

    view! {
        <span
            class=class
            data-ui-primitive="true"
            data-ui-kind="count-up"
            data-ui-value=end
        >
            {move || format_count(timeline.value_at(elapsed.get()))}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn target_is_reached_exactly_regardless_of_frames() {
        let timeline = CountUpTimeline::new(0, 150, DEFAULT_COUNT_UP_DURATION);
        assert_eq!(timeline.end(), 150);
        assert_eq!(timeline.value_at(Duration::ZERO), 0);
        assert_eq!(timeline.value_at(DEFAULT_COUNT_UP_DURATION), 150);
        assert_eq!(timeline.value_at(Duration::from_secs(60)), 150);

        let mut previous = 0;
        for frame in 0..=125u64 {
            let value = timeline.value_at(FRAME * frame as u32);
            assert!(value >= previous, "frame {frame}: {value} < {previous}");
            assert!(value <= 150);
            previous = value;
        }
    }

    #[test]
    fn ease_out_front_loads_progress() {
        let timeline = CountUpTimeline::new(0, 1_000, Duration::from_millis(1_000));
        assert!(timeline.value_at(Duration::from_millis(250)) > 800);
    }

    #[test]
    fn zero_duration_jumps_to_the_end() {
        let timeline = CountUpTimeline::new(10, -5, Duration::ZERO);
        assert_eq!(timeline.value_at(Duration::ZERO), -5);
    }

    #[test]
    fn counting_down_stays_within_bounds() {
        let timeline = CountUpTimeline::new(100, 0, Duration::from_millis(500));
        let mid = timeline.value_at(Duration::from_millis(100));
        assert!((0..=100).contains(&mid));
    }

    #[test]
    fn extreme_bounds_do_not_overflow() {
        let duration = Duration::from_secs(1);
        let up = CountUpTimeline::new(-1, i64::MAX, duration);
        assert!(up.value_at(Duration::from_millis(500)) > 0);
        assert_eq!(up.value_at(duration), i64::MAX);

        let down = CountUpTimeline::new(i64::MAX, i64::MIN, duration);
        let mid = down.value_at(Duration::from_millis(250));
        assert!(mid < i64::MAX);
        assert_eq!(down.value_at(duration), i64::MIN);
    }

    #[test]
    fn formats_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(150), "150");
        assert_eq!(format_count(1_234), "1,234");
        assert_eq!(format_count(-12_345_678), "-12,345,678");
    }
}
