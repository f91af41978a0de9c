use ratatui::{
    prelude::*,
    widgets::{Block, List, ListItem},
};

use crate::{config::Config, view::ScoreView};

/// Key help; undo and clear are dimmed while they would do nothing.
pub struct Controls {
    plays: Vec<String>,
    undo_enabled: bool,
    clear_enabled: bool,
}

impl Controls {
    pub fn new(config: &Config, view: &ScoreView) -> Self {
        Self {
            plays: config
                .plays
                .iter()
                .map(|binding| format!("[{}] {} (+{})", binding.key, binding.label, binding.points))
                .collect(),
            undo_enabled: view.undo_enabled,
            clear_enabled: view.clear_enabled,
        }
    }

    pub fn on_state_change(&mut self, view: &ScoreView) {
        self.undo_enabled = view.undo_enabled;
        self.clear_enabled = view.clear_enabled;
    }

    pub fn draw(&self) -> impl Widget + '_ {
        let toggle = |label: &'static str, enabled: bool| {
            let item = ListItem::new(label);
            if enabled {
                item
            } else {
                item.style(Style::new().add_modifier(Modifier::DIM))
            }
        };
        let items = self
            .plays
            .iter()
            .map(|play| ListItem::new(play.as_str()))
            .chain([
                ListItem::new("[h/a] select team"),
                ListItem::new("[n] team names"),
                toggle("[u] undo", self.undo_enabled),
                toggle("[c] clear game", self.clear_enabled),
                ListItem::new("[q] quit"),
            ]);
        List::new(items).block(Block::bordered().title("Controls"))
    }
}
