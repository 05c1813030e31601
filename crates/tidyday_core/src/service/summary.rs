//! End-of-day summary evaluation.
//!
//! # Invariants
//! - Selection is total and exclusive: every collection maps to exactly one
//!   variant.
//! - Evaluation is pure; displaying the message belongs to a `MessageSink`.

use crate::model::task::TaskRecord;
use std::fmt::{Display, Formatter};

const REST_MESSAGE: &str = "You didn't add anything today \u{2014} that's okay! Rest is important too.";
const CELEBRATION_MESSAGE: &str =
    "\u{1F389} Great job! You finished everything today. Take a break, you earned it!";
const ENCOURAGEMENT_MESSAGE: &str = "Not everything got done, and that\u{2019}s okay. You\u{2019}re still making progress. Be kind to yourself \u{1F49C}";

/// Feedback shown when the user finishes their day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySummary {
    /// No tasks were added.
    Rest,
    /// Every task is done.
    Celebration,
    /// At least one task is still open.
    Encouragement,
}

impl DaySummary {
    pub fn message(self) -> &'static str {
        match self {
            Self::Rest => REST_MESSAGE,
            Self::Celebration => CELEBRATION_MESSAGE,
            Self::Encouragement => ENCOURAGEMENT_MESSAGE,
        }
    }

    /// Stable lowercase label for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::Celebration => "celebration",
            Self::Encouragement => "encouragement",
        }
    }
}

impl Display for DaySummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Picks the summary for `tasks`.
pub fn summarize(tasks: &[TaskRecord]) -> DaySummary {
    if tasks.is_empty() {
        DaySummary::Rest
    } else if tasks.iter().all(|task| task.done) {
        DaySummary::Celebration
    } else {
        DaySummary::Encouragement
    }
}

/// Display target for summary messages (a modal in the widget).
pub trait MessageSink {
    fn show(&mut self, message: &str);
}

/// Collects messages in order; handy for tests and headless callers.
impl MessageSink for Vec<String> {
    fn show(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::{summarize, DaySummary};
    use crate::model::task::TaskRecord;

    fn task(done: bool) -> TaskRecord {
        TaskRecord {
            text: "t".to_string(),
            done,
        }
    }

    #[test]
    fn empty_list_is_rest() {
        assert_eq!(summarize(&[]), DaySummary::Rest);
    }

    #[test]
    fn all_done_is_celebration() {
        assert_eq!(summarize(&[task(true)]), DaySummary::Celebration);
        assert_eq!(summarize(&[task(true), task(true)]), DaySummary::Celebration);
    }

    #[test]
    fn any_open_is_encouragement() {
        assert_eq!(summarize(&[task(true), task(false)]), DaySummary::Encouragement);
        assert_eq!(summarize(&[task(false)]), DaySummary::Encouragement);
    }

    #[test]
    fn messages_are_distinct() {
        let rest = DaySummary::Rest.message();
        let celebration = DaySummary::Celebration.message();
        let encouragement = DaySummary::Encouragement.message();
        assert_ne!(rest, celebration);
        assert_ne!(celebration, encouragement);
        assert_ne!(rest, encouragement);
        assert!(celebration.starts_with('\u{1F389}'));
    }
}
