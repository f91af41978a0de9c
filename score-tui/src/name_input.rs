use enum_map::EnumMap;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    text::{Line, Text},
    widgets::Widget,
};
use score_types::{Team, ALL_TEAMS};
use scoreboard::Scoreboard;

use crate::{app::Message, popup::Popup};

/// Two-field form for renaming the teams.
pub struct NameInput {
    fields: EnumMap<Team, String>,
    focused: Team,
}

impl Default for NameInput {
    fn default() -> Self {
        Self {
            fields: EnumMap::default(),
            focused: Team::Home,
        }
    }
}

impl NameInput {
    /// Prefilled with the current names once they were set, blank before that.
    pub fn open(board: &Scoreboard) -> Self {
        let fields: EnumMap<Team, String> = if board.names_set() {
            EnumMap::from_fn(|team: Team| board.name(team).to_owned())
        } else {
            EnumMap::default()
        };
        Self {
            fields,
            focused: Team::Home,
        }
    }

    pub fn field(&self, team: Team) -> &str {
        &self.fields[team]
    }

    pub fn update(&mut self, key: &KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char(c) if !c.is_control() => self.fields[self.focused].push(c),
            KeyCode::Backspace => {
                self.fields[self.focused].pop();
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focused = self.focused.other();
            }
            KeyCode::Enter => {
                return Some(Message::SetNames {
                    home: self.fields[Team::Home].clone(),
                    away: self.fields[Team::Away].clone(),
                });
            }
            KeyCode::Esc => return Some(Message::CloseNames),
            _ => {}
        }
        None
    }

    pub fn draw(&self) -> impl Widget + '_ {
        let lines: Vec<Line> = ALL_TEAMS
            .iter()
            .map(|team| {
                let marker = if *team == self.focused { '>' } else { ' ' };
                Line::from(format!("{marker}{team}: {}", self.fields[*team]))
            })
            .collect();
        Popup::default()
            .title("Team names (Tab switches, Enter saves)".to_string())
            .content(Text::from(lines))
    }
}
