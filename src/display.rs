//! Terminal rendering of countdown frames
//!
//! Maps an [`EngineState`] onto four labeled blocks (days, hours, minutes,
//! seconds) in the selected language. Values below ten are zero-padded.

use countdown_core::{EngineState, Language, RemainingDuration};

/// Localized strings of the countdown section
#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub days: &'static str,
    pub hours: &'static str,
    pub minutes: &'static str,
    pub seconds: &'static str,
    pub expired: &'static str,
}

const KG: Labels = Labels {
    title: "Тойго чейин калды",
    days: "Күн",
    hours: "Саат",
    minutes: "Мүнөт",
    seconds: "Секунд",
    expired: "Той башталды!",
};

const RU: Labels = Labels {
    title: "До свадьбы осталось",
    days: "Дней",
    hours: "Часов",
    minutes: "Минут",
    seconds: "Секунд",
    expired: "Свадьба началась!",
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::Kg => &KG,
        Language::Ru => &RU,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBlock {
    pub label: &'static str,
    pub value: u64,
}

impl TimeBlock {
    /// Two-digit value as shown on the page
    pub fn padded(&self) -> String {
        format!("{:02}", self.value)
    }
}

pub fn time_blocks(remaining: &RemainingDuration, language: Language) -> [TimeBlock; 4] {
    let labels = labels(language);
    [
        TimeBlock {
            label: labels.days,
            value: remaining.days,
        },
        TimeBlock {
            label: labels.hours,
            value: u64::from(remaining.hours),
        },
        TimeBlock {
            label: labels.minutes,
            value: u64::from(remaining.minutes),
        },
        TimeBlock {
            label: labels.seconds,
            value: u64::from(remaining.seconds),
        },
    ]
}

/// Single-line frame: `01 Күн | 02 Саат | 03 Мүнөт | 04 Секунд`
pub fn render_frame(state: &EngineState, language: Language) -> String {
    let line = time_blocks(&state.remaining, language)
        .iter()
        .map(|block| format!("{} {}", block.padded(), block.label))
        .collect::<Vec<_>>()
        .join(" | ");

    if state.expired {
        format!("{line}  ({})", labels(language).expired)
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remaining(days: u64, hours: u8, minutes: u8, seconds: u8) -> RemainingDuration {
        RemainingDuration {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    #[test]
    fn values_below_ten_are_padded() {
        let blocks = time_blocks(&remaining(3, 9, 10, 0), Language::Kg);
        let padded: Vec<_> = blocks.iter().map(TimeBlock::padded).collect();
        assert_eq!(padded, vec!["03", "09", "10", "00"]);
    }

    #[test]
    fn large_day_counts_are_not_truncated() {
        let blocks = time_blocks(&remaining(365, 0, 0, 0), Language::Ru);
        assert_eq!(blocks[0].padded(), "365");
    }

    #[test]
    fn blocks_follow_language() {
        let kg = time_blocks(&RemainingDuration::ZERO, Language::Kg);
        let ru = time_blocks(&RemainingDuration::ZERO, Language::Ru);
        assert_eq!(kg[0].label, "Күн");
        assert_eq!(ru[0].label, "Дней");
        assert_eq!(ru[3].label, "Секунд");
    }

    #[test]
    fn render_running_frame() {
        let state = EngineState {
            remaining: remaining(1, 2, 3, 4),
            expired: false,
        };
        assert_eq!(
            render_frame(&state, Language::Ru),
            "01 Дней | 02 Часов | 03 Минут | 04 Секунд"
        );
    }

    #[test]
    fn render_expired_frame_adds_notice() {
        let state = EngineState {
            remaining: RemainingDuration::ZERO,
            expired: true,
        };
        let rendered = render_frame(&state, Language::Kg);
        assert!(rendered.starts_with("00 Күн | 00 Саат"));
        assert!(rendered.ends_with("(Той башталды!)"));
    }
}
