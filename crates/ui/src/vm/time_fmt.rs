use chrono::{DateTime, Utc};

/// Renders a remaining-tick count as a `M:SS` countdown label.
#[must_use]
pub fn format_ticks(ticks: u32) -> String {
    format!("{}:{:02}", ticks / 60, ticks % 60)
}

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_ticks_as_minutes_and_seconds() {
        assert_eq!(format_ticks(0), "0:00");
        assert_eq!(format_ticks(35), "0:35");
        assert_eq!(format_ticks(61), "1:01");
    }
}
