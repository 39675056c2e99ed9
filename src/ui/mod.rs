//! Interactive full-screen terminal surface.
//!
//! This module is deliberately thin: it renders the entry list, the title and
//! content fields, and the four actions, and relays key presses to the
//! [`Session`] controller. All journaling behavior lives behind that seam.

use crate::constants;
use crate::errors::AppResult;
use crate::session::{DeleteOutcome, SaveOutcome, SelectOutcome, Session};
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::stdout;
use std::time::{Duration, Instant};
use tracing::debug;

/// How long the event loop waits for input before ticking the session.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Which field is receiving typed characters while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Title,
    Content,
}

/// Runs the terminal UI until the user quits.
///
/// Sets up and tears down the alternate screen and raw mode around the event
/// loop, so the caller's terminal is restored even when the loop errors.
pub fn run(session: Session) -> AppResult<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    result
}

struct App {
    session: Session,
    list_state: ListState,
    title: String,
    content: String,
    title_placeholder: String,
    content_placeholder: String,
    focus: Focus,
    quitting: bool,
}

impl App {
    fn new(session: Session) -> Self {
        let mut app = App {
            session,
            list_state: ListState::default(),
            title: String::new(),
            content: String::new(),
            title_placeholder: constants::TITLE_PLACEHOLDER.to_string(),
            content_placeholder: constants::CONTENT_PLACEHOLDER.to_string(),
            focus: Focus::Title,
            quitting: false,
        };

        // The store is never empty right after open, but guard anyway.
        if let Some(first) = app.session.entries().first().cloned() {
            app.load(&first);
        }
        app
    }

    fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AppResult<()> {
        while !self.quitting {
            self.session.tick(Instant::now());
            terminal.draw(|f| self.draw(f))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Selects `name` and refreshes the title/content fields from the store.
    fn load(&mut self, name: &str) {
        match self.session.select(name) {
            SelectOutcome::Selected { entry, content } => {
                self.title = entry;
                self.content = content;
            }
            SelectOutcome::Missing { .. } => {
                self.title = constants::MISSING_ENTRY_TITLE.to_string();
                self.content = constants::MISSING_ENTRY_BODY.to_string();
            }
            SelectOutcome::Ignored => {}
        }
        self.sync_list_selection();
    }

    /// Points the list highlight at the active entry.
    fn sync_list_selection(&mut self) {
        let selected = self
            .session
            .active()
            .and_then(|active| self.session.entries().iter().position(|e| e == active));
        self.list_state.select(selected);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quitting = true;
            return;
        }

        if self.session.is_editing() {
            self.handle_editing_key(key);
        } else {
            self.handle_browsing_key(key);
        }
    }

    fn handle_browsing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quitting = true,
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Char('n') => self.action_new(),
            KeyCode::Char('e') | KeyCode::Enter => self.action_edit(),
            KeyCode::Char('s') => self.action_save(),
            KeyCode::Char('d') => self.action_delete(),
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.action_save();
            return;
        }

        match key.code {
            KeyCode::Esc => {
                // Leave edit mode, discarding unsaved text by reloading the
                // entry from disk.
                if let Some(active) = self.session.active().map(str::to_string) {
                    self.load(&active);
                }
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Title => Focus::Content,
                    Focus::Content => Focus::Title,
                };
            }
            KeyCode::Enter => match self.focus {
                Focus::Title => self.focus = Focus::Content,
                Focus::Content => self.content.push('\n'),
            },
            KeyCode::Backspace => {
                match self.focus {
                    Focus::Title => self.title.pop(),
                    Focus::Content => self.content.pop(),
                };
            }
            KeyCode::Char(c) => match self.focus {
                Focus::Title => self.title.push(c),
                Focus::Content => self.content.push(c),
            },
            _ => {}
        }
    }

    /// Moves the list highlight by `delta` entries and selects the target.
    fn move_selection(&mut self, delta: i64) {
        let entries = self.session.entries();
        if entries.is_empty() {
            return;
        }

        let current = self.list_state.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, entries.len() as i64 - 1) as usize;
        let name = entries[next].clone();
        self.load(&name);
    }

    fn action_new(&mut self) {
        match self.session.new_entry() {
            Ok((name, content)) => {
                self.title = name;
                self.content = content;
                self.focus = Focus::Title;
                self.sync_list_selection();
            }
            Err(e) => {
                debug!(error = %e, "new entry failed");
                self.title = constants::INVALID_NAME_INDICATOR.to_string();
            }
        }
    }

    fn action_edit(&mut self) {
        self.session.edit();
        self.focus = Focus::Title;
    }

    fn action_save(&mut self) {
        match self.session.save(&self.title, &self.content) {
            SaveOutcome::Saved { entry } => {
                self.title = entry;
                self.sync_list_selection();
            }
            SaveOutcome::Conflict { title } => {
                self.title = constants::conflict_indicator(&title);
            }
            SaveOutcome::InvalidName => {
                self.title = constants::INVALID_NAME_INDICATOR.to_string();
            }
            SaveOutcome::Ignored => {}
        }
    }

    fn action_delete(&mut self) {
        match self.session.delete(Instant::now()) {
            DeleteOutcome::Armed => {}
            DeleteOutcome::Removed { next: Some(name) } => self.load(&name),
            DeleteOutcome::Removed { next: None } => {
                self.title.clear();
                self.content.clear();
                self.title_placeholder = constants::EMPTY_STORE_TITLE_PROMPT.to_string();
                self.content_placeholder = constants::EMPTY_STORE_BODY_PROMPT.to_string();
                self.list_state.select(None);
            }
            DeleteOutcome::Ignored => {}
        }
    }

    fn draw<B: Backend>(&mut self, f: &mut Frame<B>) {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(f.size());

        self.draw_list_pane(f, panes[0]);
        self.draw_entry_pane(f, panes[1]);
    }

    fn draw_list_pane<B: Backend>(&mut self, f: &mut Frame<B>, area: ratatui::layout::Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                constants::APP_NAME,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                Local::now()
                    .format(constants::HEADER_DATE_FORMAT)
                    .to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(header, rows[0]);

        let items: Vec<ListItem> = self
            .session
            .entries()
            .iter()
            .map(|name| ListItem::new(name.clone()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Entries "))
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_stateful_widget(list, rows[1], &mut self.list_state);
    }

    fn draw_entry_pane<B: Backend>(&mut self, f: &mut Frame<B>, area: ratatui::layout::Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(area);

        let editing = self.session.is_editing();

        let field_style = |focused: bool| {
            if editing && focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }
        };

        let title_text = if self.title.is_empty() {
            Span::styled(
                self.title_placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::raw(self.title.clone())
        };
        let title = Paragraph::new(Line::from(title_text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Title ")
                .border_style(field_style(self.focus == Focus::Title)),
        );
        f.render_widget(title, rows[0]);

        let content_text: Vec<Line> = if self.content.is_empty() {
            vec![Line::from(Span::styled(
                self.content_placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.content.split('\n').map(Line::from).collect()
        };
        let content = Paragraph::new(content_text).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Entry ")
                .border_style(field_style(self.focus == Focus::Content)),
        );
        f.render_widget(content, rows[1]);

        f.render_widget(self.actions_line(editing), rows[2]);
    }

    fn actions_line(&self, editing: bool) -> Paragraph<'static> {
        let delete_label = if self.session.delete_armed() {
            Span::styled(
                "[D] Confirm Delete",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw("[D]elete")
        };

        let spans = if editing {
            vec![
                Span::raw("Ctrl+S Save   "),
                Span::raw("Tab Switch Field   "),
                Span::raw("Esc Cancel"),
            ]
        } else {
            vec![
                Span::raw("[N]ew   "),
                Span::raw("[E]dit   "),
                Span::raw("[S]ave   "),
                delete_label,
                Span::raw("   [Q]uit"),
            ]
        };

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title(" Actions "))
    }
}
