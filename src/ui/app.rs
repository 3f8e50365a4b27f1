//! Main UI Application
//!
//! Owns the record store and the form, turns key presses into store calls,
//! and translates store errors into messages for the user.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};

use crate::config::AppConfig;
use crate::store::{Field, RecordStore, StoreError};
use super::form::FormState;

/// The four buttons of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Validate the form and append it to the ledger
    Create,
    /// Reset the inputs only
    ClearFields,
    /// Truncate the ledger file and empty the table
    ClearFile,
    /// Both of the above
    ClearAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Status line message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// Main UI application
pub struct App {
    /// Ledger behind the table
    store: RecordStore,
    /// Input panel
    form: FormState,
    /// Result of the last action, if any
    notice: Option<Notice>,
}

impl App {
    pub fn new(store: RecordStore, config: &AppConfig) -> Self {
        let notice = match store.skipped_on_load() {
            0 => None,
            n => Some(Notice::error(format!(
                "Skipped {} unreadable line(s) in {}",
                n,
                store.path().display()
            ))),
        };

        Self {
            store,
            form: FormState::new(config.years.clone(), config.colors.clone()),
            notice,
        }
    }

    /// Open the configured ledger. If it cannot be read, start with an
    /// empty view over the same file and say so in the status line.
    pub fn start(config: &AppConfig) -> Self {
        match config.open_store() {
            Ok(store) => Self::new(store, config),
            Err(e) => {
                log::warn!("Starting with an empty view: {}", e);
                let mut app = Self::new(RecordStore::new(&config.ledger_file), config);
                app.notice = Some(Notice::error(format!(
                    "Could not load {}: {}",
                    config.ledger_file.display(),
                    e
                )));
                app
            }
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Handle keyboard input, returns true if should quit
    pub fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => return Ok(true),
                KeyCode::Char('l') => self.perform(Action::ClearFields),
                KeyCode::Char('d') => self.perform(Action::ClearFile),
                KeyCode::Char('x') => self.perform(Action::ClearAll),
                _ => {}
            }
            return Ok(false);
        }

        match key.code {
            KeyCode::Esc => return Ok(true),
            KeyCode::Enter => self.perform(Action::Create),
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Right => self.form.select_next(),
            KeyCode::Left => self.form.select_prev(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(' ') if !FormState::is_text(self.form.focus()) => {
                self.form.select_next()
            }
            KeyCode::Char(c) => self.form.insert_char(c),
            _ => {}
        }
        Ok(false)
    }

    /// Run one of the form buttons
    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Create => self.create_record(),
            Action::ClearFields => {
                self.form.clear();
                self.notice = None;
            }
            Action::ClearFile => self.clear_file(),
            Action::ClearAll => {
                self.form.clear();
                self.clear_file();
            }
        }
    }

    fn create_record(&mut self) {
        let record = self.form.to_record();
        let label = format!("{} {}", record.name, record.model);

        match self.store.append(record) {
            Ok(()) => {
                self.form.clear();
                self.notice = Some(Notice::info(format!("Added {}", label)));
            }
            Err(e) => self.notice = Some(Notice::error(append_message(&e))),
        }
    }

    fn clear_file(&mut self) {
        self.notice = Some(match self.store.reset() {
            Ok(()) => Notice::info("File cleared successfully!"),
            Err(e) => Notice::error(reset_message(&e)),
        });
    }

    pub fn render(&self, frame: &mut Frame) {
        frame.render_widget(Clear, frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Field::ALL.len() as u16 + 2),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(3),
            ])
            .split(frame.area());

        self.render_form(frame, chunks[0]);
        self.render_buttons(frame, chunks[1]);
        self.render_table(frame, chunks[2]);
        self.render_status(frame, chunks[3]);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = Field::ALL
            .iter()
            .map(|&field| {
                let focused = field == self.form.focus();
                let label_style = if focused {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };

                let mut spans = vec![Span::styled(format!("{:>9}: ", field.label()), label_style)];
                match field {
                    Field::Color => spans.extend(self.color_spans()),
                    Field::Year => spans.push(Span::raw(format!("< {} >", self.form.value(field)))),
                    _ => {
                        spans.push(Span::raw(self.form.value(field).to_string()));
                        if focused {
                            spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
                        }
                    }
                }
                Line::from(spans)
            })
            .collect();

        let form = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Mobile Phone Management "));
        frame.render_widget(form, area);
    }

    fn color_spans(&self) -> Vec<Span<'static>> {
        self.form
            .colors()
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let selected = self.form.selected_color() == Some(idx);
                let mark = if selected { "(*)" } else { "( )" };
                let style = Style::default().fg(swatch(name));
                let style = if selected { style.add_modifier(Modifier::BOLD) } else { style };
                Span::styled(format!("{} {}  ", mark, name), style)
            })
            .collect()
    }

    fn render_buttons(&self, frame: &mut Frame, area: Rect) {
        let key = |k: &'static str, color: Color| {
            Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
        };
        let line = Line::from(vec![
            key("[Enter]", Color::Green),
            Span::raw(" Create   "),
            key("[^L]", Color::Blue),
            Span::raw(" Clear Fields   "),
            key("[^D]", Color::Red),
            Span::raw(" Clear File   "),
            key("[^X]", Color::Rgb(255, 152, 0)),
            Span::raw(" Clear All   "),
            key("[Esc]", Color::Gray),
            Span::raw(" Quit"),
        ]);

        let buttons = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(buttons, area);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let header = Row::new(Field::ALL.iter().map(|f| Cell::from(f.label())))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

        let rows = self
            .store
            .records()
            .iter()
            .map(|record| Row::new(record.values().map(|v| Cell::from(v.to_string()))));

        let table = Table::new(rows, [Constraint::Ratio(1, Field::ALL.len() as u32); 6])
            .header(header)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ({}) ", self.store.path().display(), self.store.len())),
            );

        // Keep the newest row in view
        let mut state = TableState::default();
        if !self.store.is_empty() {
            state.select(Some(self.store.len() - 1));
        }
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.notice {
            Some(Notice { kind: NoticeKind::Error, text }) => {
                Line::from(Span::styled(text.clone(), Style::default().fg(Color::Red)))
            }
            Some(Notice { kind: NoticeKind::Info, text }) => {
                Line::from(Span::styled(text.clone(), Style::default().fg(Color::Green)))
            }
            None => Line::from(Span::styled(
                "Tab/arrows to move, Left/Right to choose year and color",
                Style::default().fg(Color::DarkGray),
            )),
        };

        let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, area);
    }
}

/// User-facing text for a failed Create
fn append_message(error: &StoreError) -> String {
    match error {
        StoreError::MissingField(_) => "All fields are required!".to_string(),
        StoreError::LineBreak(field) => format!("{} must fit on one line", field),
        StoreError::Io(msg) => format!("Error writing to file: {}", msg),
        other => other.to_string(),
    }
}

/// User-facing text for a failed Clear File
fn reset_message(error: &StoreError) -> String {
    match error {
        StoreError::Io(msg) => format!("Error clearing file: {}", msg),
        other => other.to_string(),
    }
}

/// Terminal color for a color option, gray for unknown names
fn swatch(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "black" => Color::DarkGray,
        "white" => Color::White,
        "blue" => Color::Blue,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        _ => Color::Gray,
    }
}
