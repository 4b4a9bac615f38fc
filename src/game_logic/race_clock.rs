use std::time::Duration;

/// `MM:SS.CC`, truncated to centiseconds.
pub fn format_race_time(elapsed: Duration) -> String {
    let centis = elapsed.as_millis() / 10;
    let minutes = centis / 6000;
    let seconds = (centis / 100) % 60;
    let hundredths = centis % 100;
    format!("{minutes:02}:{seconds:02}.{hundredths:02}")
}
