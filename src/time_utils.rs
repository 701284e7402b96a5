/// Minutes in a day; a time-of-day axis runs from 0 to this value inclusive.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Format minutes since midnight as `HH:MM`. `1440` renders as `24:00`.
pub fn format_minutes_label(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// One label per `step_minutes` from `00:00` through `24:00`.
///
/// A zero step yields no labels.
pub fn time_of_day_labels(step_minutes: u32) -> Vec<String> {
    if step_minutes == 0 {
        return Vec::new();
    }
    (0..=MINUTES_PER_DAY)
        .step_by(step_minutes as usize)
        .map(format_minutes_label)
        .collect()
}
