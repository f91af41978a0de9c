use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};
use score_types::{Team, ALL_TEAMS};
use scoreboard::Scoreboard;

pub const READY_TEXT: &str = "Ready for kickoff";

#[derive(Debug, Clone, PartialEq, Eq)]
struct TeamLine {
    name: String,
    score: u32,
}

/// Everything the score panel shows, derived from the board after every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreView {
    home: TeamLine,
    away: TeamLine,
    selected: Team,
    pub last_action: String,
    pub undo_enabled: bool,
    pub clear_enabled: bool,
}

impl ScoreView {
    pub fn new(board: &Scoreboard, selected: Team) -> Self {
        let line = |team: Team| TeamLine {
            name: board.name(team).to_owned(),
            score: board.score(team),
        };
        Self {
            home: line(Team::Home),
            away: line(Team::Away),
            selected,
            last_action: board
                .last_action_description()
                .unwrap_or(READY_TEXT)
                .to_owned(),
            undo_enabled: board.has_history(),
            clear_enabled: board.home_score() != 0
                || board.away_score() != 0
                || board.has_history(),
        }
    }

    pub fn on_state_change(&mut self, board: &Scoreboard, selected: Team) {
        *self = ScoreView::new(board, selected);
    }

    pub fn name(&self, team: Team) -> &str {
        &self.team(team).name
    }

    pub fn score(&self, team: Team) -> u32 {
        self.team(team).score
    }

    fn team(&self, team: Team) -> &TeamLine {
        match team {
            Team::Home => &self.home,
            Team::Away => &self.away,
        }
    }

    pub fn draw(&self) -> impl Widget + '_ {
        let mut lines: Vec<Line> = ALL_TEAMS
            .iter()
            .map(|team| {
                let TeamLine { name, score } = self.team(*team);
                let (marker, style) = if *team == self.selected {
                    ("(*) ", Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                } else {
                    ("( ) ", Style::new())
                };
                Line::from(vec![
                    Span::styled(format!("{marker}{name}"), style),
                    Span::raw("  "),
                    Span::styled(score.to_string(), Style::new().add_modifier(Modifier::BOLD)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(self.last_action.clone()).italic());
        Paragraph::new(lines).block(Block::bordered().title("Scoreboard"))
    }
}
