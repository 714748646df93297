use thiserror::Error;

use crate::landmark::LandmarkSet;
use crate::pose::PoseKind;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The external pose selection names no known pose. Surfaced as-is;
    /// never silently replaced by a default pose.
    #[error("unsupported pose selection `{0}`")]
    Unsupported(String),
}

/// Resolves the operator's pose selection, accepted either as the menu
/// number ("1" through "5") or as a pose name. Resolved once per session,
/// not per frame.
pub fn resolve_selection(input: &str) -> Result<PoseKind, SelectionError> {
    let trimmed = input.trim();
    let pose = match trimmed {
        "1" => PoseKind::Crucifix,
        "2" => PoseKind::HandsRaised,
        "3" => PoseKind::Cat,
        "4" => PoseKind::Balasana,
        "5" => PoseKind::Dandasana,
        name => match name.to_ascii_lowercase().as_str() {
            "crucifix" => PoseKind::Crucifix,
            "hands-raised" | "hands_raised" | "hands raised" => PoseKind::HandsRaised,
            "cat" => PoseKind::Cat,
            "balasana" => PoseKind::Balasana,
            "dandasana" => PoseKind::Dandasana,
            _ => return Err(SelectionError::Unsupported(trimmed.to_string())),
        },
    };
    Ok(pose)
}

/// One frame's classification outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub pose: PoseKind,
    pub matched: bool,
}

impl Verdict {
    /// The status line shown to the operator, e.g. "Cat Pose: Correct".
    pub fn status_line(&self) -> String {
        let outcome = if self.matched { "Correct" } else { "Incorrect" };
        format!("{}: {}", self.pose.display_name(), outcome)
    }
}

/// A classification session for one selected pose.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    pose: PoseKind,
}

impl Session {
    pub fn new(pose: PoseKind) -> Self {
        Self { pose }
    }

    pub fn pose(&self) -> PoseKind {
        self.pose
    }

    /// Classifies one frame. Stateless across frames: the verdict depends
    /// only on the given landmark set.
    pub fn classify(&self, set: &LandmarkSet) -> Verdict {
        Verdict {
            pose: self.pose,
            matched: self.pose.matches(set),
        }
    }
}
