// Formats the remaining seconds as an `HH:MM:SS` clock for the countdown
// message. The padding is a minimum width, not a truncation: 100 hours and
// more simply produce a wider hours field.
pub fn format_remaining_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
