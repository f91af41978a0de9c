use std::num::NonZeroU32;

use crate::Team;

pub const DEFAULT_DESCRIPTION: &str = "Score";

/// One point-awarding action, kept on the undo history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreChange {
    team: Team,
    points: NonZeroU32,
    description: String,
}

impl ScoreChange {
    /// Blank descriptions become [`DEFAULT_DESCRIPTION`].
    #[must_use]
    pub fn new(team: Team, points: NonZeroU32, description: &str) -> Self {
        let description = match description.trim() {
            "" => DEFAULT_DESCRIPTION,
            trimmed => trimmed,
        };
        Self {
            team,
            points,
            description: description.to_owned(),
        }
    }

    #[must_use]
    #[inline(always)]
    pub fn team(&self) -> Team {
        self.team
    }

    #[must_use]
    #[inline(always)]
    pub fn points(&self) -> u32 {
        self.points.get()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
