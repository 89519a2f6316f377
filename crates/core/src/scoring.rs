//! Scoring module - points per cleared line and player-facing feedback
//!
//! A scan scores one point per swept cell plus one per completed line: the
//! pivot sits on every completed line and counts once for each of them.

use crate::types::TapOutcome;

/// Points for one scan.
///
/// `swept`: distinct cleared cells, pivot excluded.
/// `lines`: completed axes.
pub fn line_points(swept: usize, lines: usize) -> u32 {
    if lines == 0 {
        return 0;
    }
    (swept + lines) as u32
}

/// Closing remark for a final score
pub fn verdict(score: u32) -> &'static str {
    match score {
        0..=10 => "is it what you are up to?",
        11..=50 => "not bad",
        51..=100 => "great stuff",
        101..=150 => "Wow",
        _ => "OMG",
    }
}

/// Short advisory text for an outcome (toast-style feedback)
pub fn status_text(outcome: &TapOutcome) -> String {
    match outcome {
        TapOutcome::Started => "Go!".to_string(),
        TapOutcome::NotStarted => "press new to play".to_string(),
        TapOutcome::Ignored => String::new(),
        TapOutcome::Selected { .. } => "selected".to_string(),
        TapOutcome::Cancelled => "cancelled".to_string(),
        TapOutcome::SelectionChanged => "yea-nah".to_string(),
        TapOutcome::Rejected => "You shall not pass!".to_string(),
        TapOutcome::Scored { points, .. } => format!("+{}", points),
        TapOutcome::Moved { cascade_points, .. } if *cascade_points > 0 => {
            format!("+{}", cascade_points)
        }
        TapOutcome::Moved { .. } => "moved".to_string(),
        TapOutcome::GameOver { score } => format!("{} points - {}", score, verdict(*score)),
    }
}
