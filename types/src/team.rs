use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const ALL_TEAMS: [Team; 2] = [Team::Home, Team::Away];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum Team {
    Home,
    Away,
}

impl Team {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Team::Home => Team::Away,
            Team::Away => Team::Home,
        }
    }

    /// Placeholder shown before any names were set.
    #[must_use]
    pub fn default_name(self) -> &'static str {
        match self {
            Team::Home => "Home",
            Team::Away => "Away",
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.default_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_flips_sides() {
        assert_eq!(Team::Home.other(), Team::Away);
        assert_eq!(Team::Away.other(), Team::Home);
        for team in ALL_TEAMS {
            assert_eq!(team.other().other(), team);
        }
    }

    #[test]
    fn display_matches_placeholder() {
        assert_eq!(Team::Home.to_string(), "Home");
        assert_eq!(Team::Away.to_string(), "Away");
    }
}
