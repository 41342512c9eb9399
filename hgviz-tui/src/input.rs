// Text entry for the Edit tab: field buffers, comma-list parsing, and the
// request handed to the session on submit.

use std::collections::BTreeSet;

/// Split a comma-separated node list, trimming entries and dropping blanks.
pub fn parse_node_list(text: &str) -> BTreeSet<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditMode {
    Add,
    Edit,
    Delete,
}

impl EditMode {
    pub const ALL: [EditMode; 3] = [EditMode::Add, EditMode::Edit, EditMode::Delete];

    pub fn title(self) -> &'static str {
        match self {
            EditMode::Add => "Add Hyperedge",
            EditMode::Edit => "Edit Hyperedge",
            EditMode::Delete => "Delete Hyperedge",
        }
    }

    pub fn index(self) -> usize {
        match self {
            EditMode::Add => 0,
            EditMode::Edit => 1,
            EditMode::Delete => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    EdgeId,
    Nodes,
}

/// A parsed, ready-to-apply mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditRequest {
    Add { edge: String, nodes: BTreeSet<String> },
    Edit { edge: String, nodes: BTreeSet<String> },
    Delete { edge: String },
}

#[derive(Debug)]
pub struct EditForm {
    pub mode: EditMode,
    pub edge_id: String,
    pub nodes: String,
    pub focus: Field,
    pub typing: bool,
    /// Index into the sorted edge list (Edit/Delete target).
    pub selected: usize,
}

impl Default for EditForm {
    fn default() -> Self {
        Self {
            mode: EditMode::Add,
            edge_id: String::new(),
            nodes: String::new(),
            focus: Field::EdgeId,
            typing: false,
            selected: 0,
        }
    }
}

impl EditForm {
    pub fn set_mode(&mut self, mode: EditMode) {
        self.mode = mode;
        self.typing = false;
        self.focus = match mode {
            EditMode::Add => Field::EdgeId,
            _ => Field::Nodes,
        };
    }

    /// Begin typing. Delete has no text fields.
    pub fn start_typing(&mut self) -> bool {
        self.typing = self.mode != EditMode::Delete;
        self.typing
    }

    /// Only Add exposes the edge id field; elsewhere focus stays on nodes.
    pub fn cycle_focus(&mut self) {
        if self.mode == EditMode::Add {
            self.focus = match self.focus {
                Field::EdgeId => Field::Nodes,
                Field::Nodes => Field::EdgeId,
            };
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::EdgeId => &mut self.edge_id,
            Field::Nodes => &mut self.nodes,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn select_next(&mut self, edge_count: usize) {
        if edge_count > 0 {
            self.selected = (self.selected + 1).min(edge_count - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection inside the edge list after it shrinks.
    pub fn clamp_selection(&mut self, edge_count: usize) {
        self.selected = self.selected.min(edge_count.saturating_sub(1));
    }

    /// Build the request for the current mode.
    ///
    /// `target` is the edge currently selected in the list. Returns None when a
    /// required input is missing.
    pub fn request(&self, target: Option<&str>) -> Option<EditRequest> {
        match self.mode {
            EditMode::Add => {
                let edge = self.edge_id.trim();
                let nodes = parse_node_list(&self.nodes);
                if edge.is_empty() || nodes.is_empty() {
                    return None;
                }
                Some(EditRequest::Add { edge: edge.to_string(), nodes })
            }
            EditMode::Edit => {
                let nodes = parse_node_list(&self.nodes);
                match target {
                    Some(edge) if !nodes.is_empty() => {
                        Some(EditRequest::Edit { edge: edge.to_string(), nodes })
                    }
                    _ => None,
                }
            }
            EditMode::Delete => target.map(|edge| EditRequest::Delete { edge: edge.to_string() }),
        }
    }

    pub fn clear_text(&mut self) {
        self.edge_id.clear();
        self.nodes.clear();
        self.typing = false;
    }
}
