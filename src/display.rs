//! Terminal rendering of timer snapshots

use crate::state::{RunState, TimerSnapshot};

/// Russian declension of "секунда" for a given count.
pub fn seconds_label(seconds: u64) -> &'static str {
    let last_digit = seconds % 10;
    let last_two_digits = seconds % 100;

    if (11..=19).contains(&last_two_digits) {
        return "секунд";
    }
    match last_digit {
        1 => "секунда",
        2..=4 => "секунды",
        _ => "секунд",
    }
}

/// One line of countdown output, e.g. `21 секунда [running]`.
pub fn countdown_line(snapshot: &TimerSnapshot) -> String {
    format!(
        "{} {} [{}]",
        snapshot.remaining_seconds,
        seconds_label(snapshot.remaining_seconds),
        snapshot.run_state
    )
}

/// Banner printed once at startup.
pub fn banner() -> &'static str {
    "Таймер обратного отсчета"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declension_covers_all_branches() {
        let cases = [
            (1, "секунда"),
            (2, "секунды"),
            (4, "секунды"),
            (5, "секунд"),
            (10, "секунд"),
            (11, "секунд"),
            (12, "секунд"),
            (14, "секунд"),
            (19, "секунд"),
            (21, "секунда"),
            (22, "секунды"),
            (25, "секунд"),
            (100, "секунд"),
            (101, "секунда"),
            (111, "секунд"),
            (112, "секунд"),
            (122, "секунды"),
        ];

        for (seconds, label) in cases {
            assert_eq!(seconds_label(seconds), label, "wrong label for {}", seconds);
        }
    }

    #[test]
    fn zero_takes_the_plural_genitive() {
        assert_eq!(seconds_label(0), "секунд");
    }

    #[test]
    fn line_shows_count_label_and_state() {
        let snapshot = TimerSnapshot {
            remaining_seconds: 3,
            run_state: RunState::Running,
        };

        assert_eq!(countdown_line(&snapshot), "3 секунды [running]");
    }
}
