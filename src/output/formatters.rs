//! Formatting utilities for terminal output

use crate::core::Frame;

/// Format a probability to three places, or "undefined" with no candidates
#[must_use]
pub fn format_probability(probability: Option<f64>) -> String {
    probability.map_or_else(|| "undefined".to_string(), |p| format!("{p:.3}"))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a letter probability; blank when undefined
#[must_use]
pub fn probability_bar(probability: Option<f64>, width: usize) -> String {
    create_progress_bar(probability.unwrap_or(0.0), 1.0, width)
}

/// Frame with spaces between slots, easier to count at a glance
#[must_use]
pub fn spaced_frame(frame: &Frame) -> String {
    let text = frame.to_string();
    let mut spaced = String::with_capacity(text.len() * 2);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    spaced
}

/// Ruler of 1-based positions lined up under `spaced_frame`
#[must_use]
pub fn position_ruler(length: usize) -> String {
    (1..=length)
        .map(|p| (p % 10).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_formatting() {
        assert_eq!(format_probability(Some(1.0)), "1.000");
        assert_eq!(format_probability(Some(0.3333)), "0.333");
        assert_eq!(format_probability(None), "undefined");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn probability_bar_undefined_is_empty() {
        assert_eq!(probability_bar(None, 4), "░░░░");
        assert_eq!(probability_bar(Some(1.0), 4), "████");
    }

    #[test]
    fn spaced_frame_and_ruler_align() {
        let frame = Frame::parse("a_c").unwrap();
        assert_eq!(spaced_frame(&frame), "a _ c");
        assert_eq!(position_ruler(3), "1 2 3");
        assert_eq!(position_ruler(11).len(), spaced_frame(&Frame::blank(11)).len());
    }
}
