//! Animated KPI counters.
//!
//! Elements carrying a `data-count` attribute count up from zero once they
//! scroll into view. Timing comes from the host's animation frames; this
//! module only maps timestamps to displayed text.

/// Length of one count-up.
pub const DURATION_MS: f64 = 900.0;

/// Share of the element that must be visible before it starts counting.
pub const VISIBILITY_THRESHOLD: f64 = 0.35;

const GROUP_SEPARATOR: char = '\u{202f}';

/// Reads a `data-count` attribute; anything unparsable counts as zero.
pub fn parse_target(attribute: Option<&str>) -> f64 {
    attribute
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Formats a number the way `fr-FR` locales do: narrow no-break space
/// between thousands, comma before decimals, at most three decimals.
pub fn format_fr(value: f64) -> String {
    let negative = value < 0.0;
    let scaled = (value.abs() * 1000.0).round() as u64;
    let integer = scaled / 1000;
    let mut fraction = scaled % 1000;

    let digits = integer.to_string();
    let mut out = String::with_capacity(digits.len() + 8);
    if negative && scaled > 0 {
        out.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    if fraction > 0 {
        out.push(',');
        let mut width = 3;
        while fraction % 10 == 0 {
            fraction /= 10;
            width -= 1;
        }
        out.push_str(&format!("{fraction:0width$}"));
    }
    out
}

/// One count-up from zero to `target`, started at `started_at_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    pub target: f64,
    pub started_at_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: f64, started_at_ms: f64) -> Self {
        Self {
            target,
            started_at_ms,
        }
    }

    /// Elapsed share of the animation, clamped to `0.0..=1.0`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        ((now_ms - self.started_at_ms) / DURATION_MS).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now_ms: f64) -> f64 {
        (ease_out_cubic(self.progress(now_ms)) * self.target).round()
    }

    pub fn text_at(&self, now_ms: f64) -> String {
        format_fr(self.value_at(now_ms))
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CounterPhase {
    Waiting,
    Running(CounterAnimation),
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Counter {
    target: f64,
    phase: CounterPhase,
}

/// Every counter on the page.
#[derive(Debug, Clone, Default)]
pub struct CounterBoard {
    counters: Vec<Counter>,
}

impl CounterBoard {
    /// With `reduced_motion`, counters skip the animation and show their
    /// final value right away.
    pub fn new(targets: &[f64], reduced_motion: bool) -> Self {
        let phase = if reduced_motion {
            CounterPhase::Done
        } else {
            CounterPhase::Waiting
        };
        Self {
            counters: targets
                .iter()
                .map(|&target| Counter { target, phase })
                .collect(),
        }
    }

    /// Builds the board from raw `data-count` attribute values.
    pub fn from_attributes(attributes: &[Option<&str>], reduced_motion: bool) -> Self {
        let targets: Vec<f64> = attributes.iter().map(|attr| parse_target(*attr)).collect();
        Self::new(&targets, reduced_motion)
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Starts a waiting counter once enough of it is visible.
    ///
    /// Returns true when the counter started. A counter starts at most once.
    pub fn on_intersection(&mut self, index: usize, ratio: f64, now_ms: f64) -> bool {
        let Some(counter) = self.counters.get_mut(index) else {
            return false;
        };
        if counter.phase != CounterPhase::Waiting || ratio < VISIBILITY_THRESHOLD {
            return false;
        }
        counter.phase = CounterPhase::Running(CounterAnimation::new(counter.target, now_ms));
        true
    }

    /// Text updates for every running counter at `now_ms`.
    pub fn frame(&mut self, now_ms: f64) -> Vec<(usize, String)> {
        let mut updates = Vec::new();
        for (index, counter) in self.counters.iter_mut().enumerate() {
            if let CounterPhase::Running(animation) = counter.phase {
                updates.push((index, animation.text_at(now_ms)));
                if animation.is_finished(now_ms) {
                    counter.phase = CounterPhase::Done;
                }
            }
        }
        updates
    }

    /// Current text of counter `index`.
    pub fn text(&self, index: usize, now_ms: f64) -> Option<String> {
        let counter = self.counters.get(index)?;
        Some(match counter.phase {
            CounterPhase::Waiting => format_fr(0.0),
            CounterPhase::Running(animation) => animation.text_at(now_ms),
            CounterPhase::Done => format_fr(counter.target),
        })
    }

    /// True while any counter still needs animation frames.
    pub fn is_animating(&self) -> bool {
        self.counters
            .iter()
            .any(|counter| matches!(counter.phase, CounterPhase::Running(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(Some("1250")), 1250.0);
        assert_eq!(parse_target(Some(" 42 ")), 42.0);
        assert_eq!(parse_target(Some("beaucoup")), 0.0);
        assert_eq!(parse_target(Some("")), 0.0);
        assert_eq!(parse_target(None), 0.0);
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_format_fr_grouping() {
        assert_eq!(format_fr(0.0), "0");
        assert_eq!(format_fr(999.0), "999");
        assert_eq!(format_fr(1250.0), "1\u{202f}250");
        assert_eq!(format_fr(1_234_567.0), "1\u{202f}234\u{202f}567");
        assert_eq!(format_fr(-4200.0), "-4\u{202f}200");
    }

    #[test]
    fn test_format_fr_decimals() {
        assert_eq!(format_fr(3.5), "3,5");
        assert_eq!(format_fr(2.0625), "2,063");
        assert_eq!(format_fr(1000.05), "1\u{202f}000,05");
    }

    #[test]
    fn test_animation_progress() {
        let animation = CounterAnimation::new(1000.0, 100.0);
        assert_eq!(animation.value_at(100.0), 0.0);
        assert_eq!(animation.value_at(550.0), 875.0);
        assert_eq!(animation.value_at(2000.0), 1000.0);
        assert!(!animation.is_finished(999.0));
        assert!(animation.is_finished(1000.0));
        assert_eq!(animation.text_at(50.0), "0");
    }

    #[test]
    fn test_board_starts_once_past_threshold() {
        let mut board = CounterBoard::new(&[120.0, 30.0], false);
        assert!(!board.on_intersection(0, 0.2, 0.0));
        assert!(board.on_intersection(0, 0.35, 0.0));
        assert!(!board.on_intersection(0, 1.0, 10.0));
        assert!(!board.on_intersection(5, 1.0, 0.0));
        assert!(board.is_animating());

        let updates = board.frame(DURATION_MS);
        assert_eq!(updates, vec![(0, "120".to_string())]);
        assert!(!board.is_animating());
        assert_eq!(board.text(1, 0.0).as_deref(), Some("0"));
    }

    #[test]
    fn test_reduced_motion_shows_final_values() {
        let board = CounterBoard::from_attributes(&[Some("2500"), Some("x")], true);
        assert_eq!(board.text(0, 0.0).as_deref(), Some("2\u{202f}500"));
        assert_eq!(board.text(1, 0.0).as_deref(), Some("0"));
        assert!(!board.is_animating());
    }
}
