use enum_map::EnumMap;
use score_types::{ScoreChange, Team};

/// Totals obtained by applying `changes` in order, oldest first, from zero.
#[must_use]
pub fn replay<'a>(changes: impl IntoIterator<Item = &'a ScoreChange>) -> EnumMap<Team, u32> {
    let mut scores: EnumMap<Team, u32> = EnumMap::default();
    for change in changes {
        scores[change.team()] = scores[change.team()].saturating_add(change.points());
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    fn change(team: Team, points: u32, description: &str) -> ScoreChange {
        ScoreChange::new(team, NonZeroU32::new(points).unwrap(), description)
    }

    #[test]
    fn replay_sums_per_team() {
        let changes = vec![
            change(Team::Home, 6, "Touchdown"),
            change(Team::Home, 1, "Extra Point"),
            change(Team::Away, 3, "Field Goal"),
        ];
        let scores = replay(&changes);
        assert_eq!(scores[Team::Home], 7);
        assert_eq!(scores[Team::Away], 3);
    }

    #[test]
    fn replay_of_nothing_is_zero() {
        let scores = replay(std::iter::empty());
        assert_eq!(scores[Team::Home], 0);
        assert_eq!(scores[Team::Away], 0);
    }
}
