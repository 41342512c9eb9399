// Application state for the TUI: active tab, edit form, status line, and
// key handling. All hypergraph data lives in the Session.

use crossterm::event::KeyCode;

use crate::input::{EditForm, EditMode};
use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Hypergraph,
    Layered,
    Dual,
    Properties,
    Table,
    Edit,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Hypergraph,
        Tab::Layered,
        Tab::Dual,
        Tab::Properties,
        Tab::Table,
        Tab::Edit,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Hypergraph => "HyperGraph",
            Tab::Layered => "Layered",
            Tab::Dual => "Dual",
            Tab::Properties => "Properties",
            Tab::Table => "Table",
            Tab::Edit => "Edit",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

pub struct App {
    pub session: Session,
    pub tab: Tab,
    pub form: EditForm,
    pub status: Option<Status>,
    /// First visible line in the scrollable views.
    pub scroll: u16,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        let status = match (session.load_error(), session.source()) {
            (Some(e), _) => Status {
                kind: StatusKind::Warning,
                text: format!("{} (starting with an empty hypergraph)", e),
            },
            (None, Some(path)) => Status {
                kind: StatusKind::Info,
                text: format!(
                    "Loaded {} hyperedges from {}",
                    session.store().len(),
                    path.display()
                ),
            },
            (None, None) => Status {
                kind: StatusKind::Info,
                text: "No source document; starting with an empty hypergraph".to_string(),
            },
        };
        Self {
            session,
            tab: Tab::Hypergraph,
            form: EditForm::default(),
            status: Some(status),
            scroll: 0,
            should_quit: false,
        }
    }

    fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(Status { kind, text: text.into() });
    }

    fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.scroll = 0;
    }

    /// Edge currently highlighted in the Edit tab list.
    pub fn selected_edge(&self) -> Option<String> {
        self.session.edge_names().into_iter().nth(self.form.selected)
    }

    pub fn on_key(&mut self, code: KeyCode) {
        if self.form.typing {
            self.on_typing_key(code);
            return;
        }
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.select_tab(self.tab.next()),
            KeyCode::BackTab => self.select_tab(self.tab.prev()),
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                self.select_tab(Tab::ALL[idx]);
            }
            _ if self.tab == Tab::Edit => self.on_edit_key(code),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }
    }

    fn on_edit_key(&mut self, code: KeyCode) {
        let edge_count = self.session.store().len();
        match code {
            KeyCode::Left => self.form.set_mode(self.form.mode.prev()),
            KeyCode::Right => self.form.set_mode(self.form.mode.next()),
            KeyCode::Down => self.form.select_next(edge_count),
            KeyCode::Up => self.form.select_prev(),
            KeyCode::Enter if self.form.mode == EditMode::Delete => self.submit(),
            KeyCode::Enter | KeyCode::Char('i') => {
                self.form.start_typing();
            }
            _ => {}
        }
    }

    fn on_typing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.form.typing = false,
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => self.form.cycle_focus(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) => self.form.push_char(c),
            _ => {}
        }
    }

    /// Apply the form's request to the session and report the outcome.
    pub fn submit(&mut self) {
        let target = self.selected_edge();
        let Some(request) = self.form.request(target.as_deref()) else {
            let hint = match self.form.mode {
                EditMode::Add => "Enter an edge ID and at least one node",
                EditMode::Edit => "Select an edge and enter at least one node",
                EditMode::Delete => "No edge selected",
            };
            self.set_status(StatusKind::Warning, hint);
            return;
        };
        match self.session.apply(request) {
            Ok(message) => {
                self.form.clear_text();
                self.form.clamp_selection(self.session.store().len());
                self.set_status(StatusKind::Success, message);
            }
            Err(err) => {
                tracing::warn!(error = %err, "edit rejected");
                self.set_status(StatusKind::Warning, err.to_string());
            }
        }
    }
}
