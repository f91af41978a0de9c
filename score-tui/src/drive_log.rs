use ratatui::{
    text::Line,
    widgets::{Block, Borders, List, Widget},
};
use scoreboard::Scoreboard;

/// Undo history as the board describes it, most recent entry on top.
pub struct DriveLog {
    entries: Vec<String>,
}

impl DriveLog {
    pub fn new(board: &Scoreboard) -> Self {
        Self {
            entries: board.history().map(|change| board.describe(change)).collect(),
        }
    }

    pub fn on_state_change(&mut self, board: &Scoreboard) {
        *self = DriveLog::new(board);
    }

    pub fn draw(&self) -> impl Widget + '_ {
        let block = Block::new()
            .borders(Borders::ALL)
            .title(Line::raw("Drive log").left_aligned());
        let items = self
            .entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| format!("{}{}", if idx == 0 { '>' } else { ' ' }, entry));
        List::new(items).block(block)
    }
}
