use std::num::NonZeroU32;

use enum_map::EnumMap;
use score_types::{ScoreChange, Team};

use crate::{
    error::{Error, Result},
    history,
};

/// Two named teams, their scores and the undo history of every score
/// change that has not been undone yet.
///
/// Every mutating operation validates before it touches any state, so a
/// returned error always leaves the board exactly as it was.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    names: EnumMap<Team, String>,
    names_set: bool,
    scores: EnumMap<Team, u32>,
    history: Vec<ScoreChange>,
    last_action: Option<String>,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            names: EnumMap::from_fn(|team: Team| team.default_name().to_owned()),
            names_set: false,
            scores: EnumMap::default(),
            history: Vec::new(),
            last_action: None,
        }
    }

    /// Renames both teams. Scores and history are kept.
    pub fn set_team_names(&mut self, home: &str, away: &str) -> Result<()> {
        let (home, away) = (home.trim(), away.trim());
        if home.is_empty() || away.is_empty() {
            return Err(Error::BlankTeamName);
        }
        self.names[Team::Home] = home.to_owned();
        self.names[Team::Away] = away.to_owned();
        self.names_set = true;
        self.last_action = Some(format!("Team names set to {home} vs {away}"));
        Ok(())
    }

    pub fn add_points(&mut self, team: Team, points: i32, description: &str) -> Result<()> {
        if !self.names_set {
            return Err(Error::NamesNotSet);
        }
        let points = u32::try_from(points)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(Error::NonPositivePoints)?;

        let change = ScoreChange::new(team, points, description);
        self.scores[team] = self.scores[team].saturating_add(points.get());
        self.last_action = Some(self.describe(&change));
        self.history.push(change);
        Ok(())
    }

    /// Reverts the most recent score change. The score never drops below zero.
    pub fn undo_last(&mut self) -> Result<()> {
        let change = self.history.pop().ok_or(Error::NothingToUndo)?;
        let team = change.team();
        self.scores[team] = self.scores[team].saturating_sub(change.points());
        self.last_action = Some(format!("Undid {}", self.describe(&change)));
        Ok(())
    }

    pub fn clear_game(&mut self) {
        self.scores = EnumMap::default();
        self.history.clear();
        self.last_action = Some("Game reset".to_owned());
    }

    /// `"{team name} +{points} ({description})"`, using the current name of the team.
    pub fn describe(&self, change: &ScoreChange) -> String {
        format!(
            "{} +{} ({})",
            self.name(change.team()),
            change.points(),
            change.description()
        )
    }

    #[inline(always)]
    pub fn name(&self, team: Team) -> &str {
        &self.names[team]
    }

    pub fn home_name(&self) -> &str {
        self.name(Team::Home)
    }

    pub fn away_name(&self) -> &str {
        self.name(Team::Away)
    }

    #[inline(always)]
    pub fn score(&self, team: Team) -> u32 {
        self.scores[team]
    }

    pub fn home_score(&self) -> u32 {
        self.score(Team::Home)
    }

    pub fn away_score(&self) -> u32 {
        self.score(Team::Away)
    }

    pub fn names_set(&self) -> bool {
        self.names_set
    }

    /// `None` until the first operation succeeded.
    pub fn last_action_description(&self) -> Option<&str> {
        self.last_action.as_deref()
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Undo history, most recent change first.
    pub fn history(&self) -> impl Iterator<Item = &ScoreChange> + '_ {
        self.history.iter().rev()
    }

    /// Totals obtained by replaying the history from a zero start.
    /// Only differs from the live scores after an undo had to clamp.
    pub fn replayed_scores(&self) -> EnumMap<Team, u32> {
        history::replay(&self.history)
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, team: Team, score: u32) {
        self.scores[team] = score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use score_types::{ALL_PLAYS, ALL_TEAMS};

    fn named() -> Scoreboard {
        let mut board = Scoreboard::new();
        board.set_team_names("Home", "Away").unwrap();
        board
    }

    #[test]
    fn starts_empty() {
        let board = Scoreboard::new();
        assert_eq!(board.home_name(), "Home");
        assert_eq!(board.away_name(), "Away");
        assert_eq!(board.home_score(), 0);
        assert_eq!(board.away_score(), 0);
        assert!(!board.names_set());
        assert!(!board.has_history());
        assert_eq!(board.last_action_description(), None);
    }

    #[test]
    fn set_team_names() {
        let mut board = Scoreboard::new();
        board.set_team_names("Aggies", "Gamecocks").unwrap();
        assert_eq!(board.home_name(), "Aggies");
        assert_eq!(board.away_name(), "Gamecocks");
        assert!(board.names_set());
        assert_eq!(
            board.last_action_description(),
            Some("Team names set to Aggies vs Gamecocks")
        );
    }

    #[test]
    fn team_names_are_trimmed() {
        let mut board = Scoreboard::new();
        board.set_team_names("  Aggies\t", " Gamecocks ").unwrap();
        assert_eq!(board.home_name(), "Aggies");
        assert_eq!(board.away_name(), "Gamecocks");
    }

    #[test]
    fn blank_names_are_rejected_without_changes() {
        let mut board = Scoreboard::new();
        for (home, away) in [("", "Team"), ("Team", ""), ("   ", "Team"), ("Team", "\t\n")] {
            let err = board.set_team_names(home, away).unwrap_err();
            assert_eq!(err, Error::BlankTeamName);
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
        assert!(!board.names_set());
        assert_eq!(board.home_name(), "Home");
        assert_eq!(board.last_action_description(), None);

        board.set_team_names("Aggies", "Gamecocks").unwrap();
        board.set_team_names("", "Tigers").unwrap_err();
        assert_eq!(board.home_name(), "Aggies");
        assert_eq!(board.away_name(), "Gamecocks");
    }

    #[test]
    fn renaming_keeps_progress() {
        let mut board = named();
        board.add_points(Team::Home, 6, "Touchdown").unwrap();
        board.set_team_names("Aggies", "Gamecocks").unwrap();
        assert_eq!(board.home_score(), 6);
        assert!(board.has_history());
        board.undo_last().unwrap();
        assert_eq!(
            board.last_action_description(),
            Some("Undid Aggies +6 (Touchdown)")
        );
    }

    #[test]
    fn scoring_and_undo() {
        let mut board = named();
        board.add_points(Team::Home, 6, "Touchdown").unwrap();
        board.add_points(Team::Away, 3, "Field Goal").unwrap();
        assert_eq!(board.home_score(), 6);
        assert_eq!(board.away_score(), 3);
        assert_eq!(board.last_action_description(), Some("Away +3 (Field Goal)"));

        board.undo_last().unwrap();
        assert_eq!(board.away_score(), 0);
        assert_eq!(board.home_score(), 6);
        assert_eq!(
            board.last_action_description(),
            Some("Undid Away +3 (Field Goal)")
        );

        board.undo_last().unwrap();
        assert_eq!(board.home_score(), 0);
        assert!(!board.has_history());

        let err = board.undo_last().unwrap_err();
        assert_eq!(err, Error::NothingToUndo);
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(
            board.last_action_description(),
            Some("Undid Home +6 (Touchdown)")
        );
    }

    #[test]
    fn clear_game() {
        let mut board = named();
        board.add_points(Team::Home, 2, "Safety").unwrap();
        board.add_points(Team::Away, 1, "PAT").unwrap();
        board.clear_game();
        assert_eq!(board.home_score(), 0);
        assert_eq!(board.away_score(), 0);
        assert!(!board.has_history());
        assert_eq!(board.last_action_description(), Some("Game reset"));
        assert!(board.names_set());
        assert_eq!(board.home_name(), "Home");
    }

    #[test]
    fn clear_before_names_is_allowed() {
        let mut board = Scoreboard::new();
        board.clear_game();
        assert_eq!(board.last_action_description(), Some("Game reset"));
        assert!(!board.names_set());
    }

    #[test]
    fn scoring_requires_names() {
        let mut board = Scoreboard::new();
        let err = board.add_points(Team::Home, 3, "FG").unwrap_err();
        assert_eq!(err, Error::NamesNotSet);
        assert_eq!(err.to_string(), "Set team names before scoring.");
        assert_eq!(board.home_score(), 0);
        assert!(!board.has_history());
    }

    #[test]
    fn names_are_checked_before_points() {
        let mut board = Scoreboard::new();
        assert_eq!(
            board.add_points(Team::Away, -1, "Bad").unwrap_err(),
            Error::NamesNotSet
        );
    }

    #[test]
    fn points_must_be_positive() {
        let mut board = named();
        for points in [-1, 0, i32::MIN] {
            let err = board.add_points(Team::Away, points, "Bad").unwrap_err();
            assert_eq!(err, Error::NonPositivePoints);
            assert_eq!(err.to_string(), "Points must be positive.");
        }
        assert_eq!(board.away_score(), 0);
        assert!(!board.has_history());
        assert_eq!(
            board.last_action_description(),
            Some("Team names set to Home vs Away")
        );
    }

    #[test]
    fn blank_description_reads_score() {
        let mut board = named();
        board.add_points(Team::Home, 6, "").unwrap();
        assert_eq!(board.last_action_description(), Some("Home +6 (Score)"));
        board.add_points(Team::Home, 1, "   ").unwrap();
        assert_eq!(board.last_action_description(), Some("Home +1 (Score)"));
        assert_eq!(board.history().next().unwrap().description(), "Score");
    }

    #[test]
    fn history_is_most_recent_first() {
        let mut board = named();
        for play in ALL_PLAYS {
            board.add_points(Team::Home, play.points(), play.label()).unwrap();
        }
        let labels: Vec<_> = board.history().map(ScoreChange::description).collect();
        assert_eq!(
            labels,
            vec!["Extra Point", "Two Points", "Field Goal", "Touchdown"]
        );
        assert_eq!(board.history_len(), 4);
        assert_eq!(board.home_score(), 12);
    }

    #[test]
    fn scores_saturate() {
        let mut board = named();
        board.set_score(Team::Home, u32::MAX - 1);
        board.add_points(Team::Home, 6, "Touchdown").unwrap();
        assert_eq!(board.home_score(), u32::MAX);
    }

    // An undo that would go below zero clamps, after which the live score and
    // the replayed history disagree. Normal play cannot reach this state.
    #[test]
    fn undo_clamps_at_zero() {
        let mut board = named();
        board.add_points(Team::Home, 6, "Touchdown").unwrap();
        board.add_points(Team::Home, 3, "Field Goal").unwrap();
        board.set_score(Team::Home, 2);

        board.undo_last().unwrap();
        assert_eq!(board.home_score(), 0);
        assert_eq!(board.away_score(), 0);
        assert_eq!(board.replayed_scores()[Team::Home], 6);
        assert_ne!(board.replayed_scores()[Team::Home], board.home_score());

        board.undo_last().unwrap();
        assert_eq!(board.home_score(), 0);
        assert_eq!(board.undo_last().unwrap_err(), Error::NothingToUndo);
    }

    #[test]
    fn failed_operations_keep_last_action() {
        let mut board = named();
        board.add_points(Team::Home, 6, "Touchdown").unwrap();
        board.add_points(Team::Home, 0, "Nothing").unwrap_err();
        board.set_team_names(" ", "Away").unwrap_err();
        assert_eq!(board.last_action_description(), Some("Home +6 (Touchdown)"));
    }

    #[test]
    fn random_sequences_undo_to_start() {
        let mut rng = StdRng::seed_from_u64(314);
        for _ in 0..64 {
            let mut board = named();
            board.add_points(Team::Away, 7, "Opening drive").unwrap();
            let before = (board.home_score(), board.away_score());

            let len = rng.gen_range(0..32);
            for _ in 0..len {
                let team = ALL_TEAMS[rng.gen_range(0..ALL_TEAMS.len())];
                let play = ALL_PLAYS[rng.gen_range(0..ALL_PLAYS.len())];
                board.add_points(team, play.points(), play.label()).unwrap();
                let replayed = board.replayed_scores();
                assert_eq!(replayed[Team::Home], board.home_score());
                assert_eq!(replayed[Team::Away], board.away_score());
            }
            for _ in 0..len {
                board.undo_last().unwrap();
            }

            assert_eq!((board.home_score(), board.away_score()), before);
            assert_eq!(board.history_len(), 1);
        }
    }

    #[test]
    fn undo_past_history_never_goes_negative() {
        let mut board = named();
        board.add_points(Team::Away, 3, "Field Goal").unwrap();
        board.undo_last().unwrap();
        for _ in 0..5 {
            assert_eq!(board.undo_last().unwrap_err().kind(), ErrorKind::InvalidState);
            assert_eq!(board.away_score(), 0);
        }
    }
}
