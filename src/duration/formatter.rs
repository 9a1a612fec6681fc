use chrono::Duration;

/// Renders a duration for humans.
pub trait HumanDurationFormatter {
    fn format(&self, duration: Duration) -> String;
}

/// English rendering of the form `"1 day, 3 hours, 0 minutes"`.
///
/// The day part only appears for durations of at least one day. Zero and
/// negative durations render as an empty string.
#[derive(Clone, Copy, Debug)]
pub struct WordsDurationFormatter {
    pub show_seconds: bool,
    pub show_zero_values: bool,
}

impl Default for WordsDurationFormatter {
    fn default() -> Self {
        WordsDurationFormatter {
            show_seconds: false,
            show_zero_values: true,
        }
    }
}

impl WordsDurationFormatter {
    fn unit(count: i64, singular: &str, plural: &str) -> String {
        if count == 1 {
            format!("{} {}", count, singular)
        } else {
            format!("{} {}", count, plural)
        }
    }
}

impl HumanDurationFormatter for WordsDurationFormatter {
    fn format(&self, duration: Duration) -> String {
        let total_seconds = duration.num_seconds();
        if duration <= Duration::zero() {
            return String::new();
        }

        let days = total_seconds / 86400;
        let hours = (total_seconds % 86400) / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        let mut parts: Vec<String> = Vec::new();
        if days > 0 {
            parts.push(Self::unit(days, "day", "days"));
        }
        if hours > 0 || self.show_zero_values {
            parts.push(Self::unit(hours, "hour", "hours"));
        }
        if minutes > 0 || self.show_zero_values {
            parts.push(Self::unit(minutes, "minute", "minutes"));
        }
        if self.show_seconds && (seconds > 0 || self.show_zero_values) {
            parts.push(Self::unit(seconds, "second", "seconds"));
        }
        parts.join(", ")
    }
}
