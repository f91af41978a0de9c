use std::{io, time::Duration};

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    layout::{Constraint, Layout},
    style::{Color, Style},
    DefaultTerminal, Frame,
};
use score_types::Team;
use scoreboard::Scoreboard;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    controls::Controls,
    drive_log::DriveLog,
    name_input::NameInput,
    popup::{centered, Popup},
    view::ScoreView,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Scoring,
    NameEdit,
    /// `resume_names` reopens the name form, with its fields intact, on dismiss.
    Error { message: String, resume_names: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Quit,
    SelectTeam(Team),
    Score { points: i32, label: String },
    Undo,
    Clear,
    EditNames,
    SetNames { home: String, away: String },
    CloseNames,
    Dismiss,
}

pub struct App {
    board: Scoreboard,
    config: Config,
    selected: Team,
    mode: Mode,
    score_view: ScoreView,
    drive_log: DriveLog,
    controls: Controls,
    name_input: NameInput,
}

impl App {
    pub fn new(board: Scoreboard, config: Config) -> Self {
        let selected = config.start_team;
        let score_view = ScoreView::new(&board, selected);
        let drive_log = DriveLog::new(&board);
        let controls = Controls::new(&config, &score_view);
        Self {
            board,
            config,
            selected,
            mode: Mode::Scoring,
            score_view,
            drive_log,
            controls,
            name_input: NameInput::default(),
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if let Some(message) = self.update()? {
                if !self.apply(message) {
                    break;
                }
            }
        }
        Ok(())
    }

    pub fn update(&mut self) -> io::Result<Option<Message>> {
        if !event::poll(Duration::from_millis(100))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.handle_key(&key)),
            _ => Ok(None),
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<Message> {
        match self.mode {
            Mode::NameEdit => self.name_input.update(key),
            Mode::Error { .. } => match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Message::Dismiss),
                _ => None,
            },
            Mode::Scoring => match key.code {
                KeyCode::Char('q') => Some(Message::Quit),
                KeyCode::Char('n') => Some(Message::EditNames),
                KeyCode::Char('u') => Some(Message::Undo),
                KeyCode::Char('c') => Some(Message::Clear),
                KeyCode::Char('h') => Some(Message::SelectTeam(Team::Home)),
                KeyCode::Char('a') => Some(Message::SelectTeam(Team::Away)),
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                    Some(Message::SelectTeam(self.selected.other()))
                }
                KeyCode::Char(c) => self.config.binding(c).map(|binding| Message::Score {
                    points: binding.points,
                    label: binding.label.clone(),
                }),
                _ => None,
            },
        }
    }

    /// Applies `message` and refreshes every view. Returns `false` on quit.
    pub fn apply(&mut self, message: Message) -> bool {
        match message {
            Message::Quit => return false,
            Message::SelectTeam(team) => self.selected = team,
            Message::Score { points, label } => {
                let team = self.selected;
                match self.board.add_points(team, points, &label) {
                    Ok(()) => info!(?team, points, label = label.as_str(), "score added"),
                    Err(err) => self.fail(err),
                }
            }
            Message::Undo => {
                if self.score_view.undo_enabled {
                    match self.board.undo_last() {
                        Ok(()) => info!(remaining = self.board.history_len(), "undid last score"),
                        Err(err) => self.fail(err),
                    }
                } else {
                    debug!("undo ignored, nothing to undo");
                }
            }
            Message::Clear => {
                if self.score_view.clear_enabled {
                    self.board.clear_game();
                    info!("game reset");
                } else {
                    debug!("clear ignored, game already empty");
                }
            }
            Message::EditNames => {
                self.name_input = NameInput::open(&self.board);
                self.mode = Mode::NameEdit;
                debug!("editing team names");
            }
            Message::SetNames { home, away } => {
                match self.board.set_team_names(&home, &away) {
                    Ok(()) => {
                        info!(
                            home = self.board.home_name(),
                            away = self.board.away_name(),
                            "team names set"
                        );
                        self.mode = Mode::Scoring;
                    }
                    Err(err) => self.fail(err),
                }
            }
            Message::CloseNames => self.mode = Mode::Scoring,
            Message::Dismiss => {
                self.mode = match self.mode {
                    Mode::Error {
                        resume_names: true, ..
                    } => Mode::NameEdit,
                    _ => Mode::Scoring,
                };
            }
        }
        self.on_state_change();
        true
    }

    fn fail(&mut self, err: scoreboard::Error) {
        warn!(kind = ?err.kind(), "{err}");
        self.mode = Mode::Error {
            message: err.to_string(),
            resume_names: self.mode == Mode::NameEdit,
        };
    }

    fn on_state_change(&mut self) {
        self.score_view.on_state_change(&self.board, self.selected);
        self.drive_log.on_state_change(&self.board);
        self.controls.on_state_change(&self.score_view);
    }

    fn draw(&self, frame: &mut Frame) {
        let horizontal =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]);
        let vertical = Layout::vertical([Constraint::Length(6), Constraint::Min(3)]);
        let [left, controls] = horizontal.areas(frame.area());
        let [scores, log] = vertical.areas(left);
        frame.render_widget(self.score_view.draw(), scores);
        frame.render_widget(self.drive_log.draw(), log);
        frame.render_widget(self.controls.draw(), controls);
        match &self.mode {
            Mode::Scoring => {}
            Mode::NameEdit => {
                frame.render_widget(self.name_input.draw(), centered(frame.area(), 48, 4));
            }
            Mode::Error { message, .. } => {
                let popup = Popup::default()
                    .title("Scoreboard Error".to_string())
                    .content(message.as_str())
                    .border_style(Style::new().fg(Color::Red));
                frame.render_widget(popup, centered(frame.area(), 40, 4));
            }
        }
    }
}
