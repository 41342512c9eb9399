// TUI rendering: tab bar, one body per tab, status line.

use hgviz_core::{table_rows, GraphProperties, IncidenceMatrix, SetSystem, TableRow};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table, Tabs, Wrap},
    Frame, Terminal,
};

use crate::app::{App, StatusKind, Tab};
use crate::input::{EditMode, Field};

const HIT: char = '•';
const MISS: char = '·';

/// Draws the UI each frame:
/// - Top: tab bar
/// - Middle: the active tab's view
/// - Bottom: status message and controls
pub fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> anyhow::Result<()> {
    terminal.draw(|f| render(f, app))?;
    Ok(())
}

pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(4)])
        .split(f.size());

    let titles: Vec<String> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{} {}", i + 1, t.title()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .block(Block::default().title("Interactive Hypergraph").borders(Borders::ALL))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    match app.tab {
        Tab::Hypergraph => render_family(f, chunks[1], app, "HyperGraph", app.session.store()),
        Tab::Layered => render_layered(f, chunks[1], app),
        Tab::Dual => render_family(f, chunks[1], app, "Dual HyperGraph", &app.session.dual()),
        Tab::Properties => render_properties(f, chunks[1], app),
        Tab::Table => render_tables(f, chunks[1], app),
        Tab::Edit => render_edit(f, chunks[1], app),
    }

    render_status(f, chunks[2], app);
}

/// One line per set: "key ── m1, m2, ..".
fn render_family<S: SetSystem>(f: &mut Frame, area: Rect, app: &App, title: &str, system: &S) {
    let props = GraphProperties::of(system);
    let rows = table_rows(system);
    let lines: Vec<Line> = if rows.is_empty() {
        vec![Line::from("No hyperedges.")]
    } else {
        rows.into_iter()
            .map(|TableRow { key, members }| {
                Line::from(vec![
                    Span::styled(key, Style::default().fg(Color::Yellow)),
                    Span::raw(" ── "),
                    Span::raw(members),
                ])
            })
            .collect()
    };
    let title = format!(
        "{}  ({} nodes, {} edges)",
        title,
        props.node_count(),
        props.edge_count()
    );
    let widget = Paragraph::new(lines)
        .scroll((app.scroll, 0))
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(widget, area);
}

/// Raster lines for an edges x nodes matrix. Column width follows the
/// longest node name so the header lines up with the cells.
pub fn raster_lines(matrix: &IncidenceMatrix) -> Vec<String> {
    let label_w = matrix.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let col_w = matrix.cols.iter().map(|c| c.chars().count()).max().unwrap_or(1).max(1);

    let mut lines = Vec::with_capacity(matrix.rows.len() + 1);
    let mut buf = String::new();
    buf.push_str(&format!("{:label_w$} |", ""));
    for col in &matrix.cols {
        buf.push_str(&format!(" {:^col_w$}", col));
    }
    lines.push(buf.clone());

    for (r, row) in matrix.rows.iter().enumerate() {
        buf.clear();
        buf.push_str(&format!("{:label_w$} |", row));
        for c in 0..matrix.cols.len() {
            let mark = if matrix.get(r, c) { HIT } else { MISS };
            buf.push_str(&format!(" {:^col_w$}", mark));
        }
        lines.push(buf.clone());
    }
    lines
}

fn render_layered(f: &mut Frame, area: Rect, app: &App) {
    // Edges as layers (rows), nodes as columns. Edges left without nodes
    // still get a (blank) layer.
    let store = app.session.store();
    let matrix = IncidenceMatrix::of(store).transpose();
    let lines: Vec<Line> = if store.is_empty() {
        vec![Line::from("No hyperedges.")]
    } else {
        raster_lines(&matrix).into_iter().map(Line::from).collect()
    };
    let widget = Paragraph::new(lines)
        .scroll((app.scroll, 0))
        .style(Style::default().fg(Color::White))
        .block(Block::default().title("Layered HyperGraph  (nodes →)").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn properties_lines(props: &GraphProperties) -> Vec<Line<'static>> {
    vec![
        Line::from(format!("Nodes: [{}]", props.nodes.join(", "))),
        Line::from(format!("Number of nodes: {}", props.node_count())),
        Line::from(format!("Edges: [{}]", props.edges.join(", "))),
        Line::from(format!("Number of edges: {}", props.edge_count())),
    ]
}

fn render_properties(f: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let sides = [
        ("HyperGraph Properties", GraphProperties::of(app.session.store())),
        ("Dual HyperGraph Properties", GraphProperties::of(&app.session.dual())),
    ];
    for (i, (title, props)) in sides.iter().enumerate() {
        let widget = Paragraph::new(properties_lines(props))
            .wrap(Wrap { trim: false })
            .block(Block::default().title(*title).borders(Borders::ALL));
        f.render_widget(widget, halves[i]);
    }
}

fn incidence_table<'a>(title: &'a str, header: [&'a str; 2], rows: Vec<TableRow>) -> Table<'a> {
    let rows = rows.into_iter().map(|r| Row::new(vec![r.key, r.members]));
    Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)])
        .header(Row::new(header.to_vec()).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(Block::default().title(title).borders(Borders::ALL))
}

fn render_tables(f: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let primary = incidence_table(
        "HyperGraph Table",
        ["Hyperedge", "Nodes"],
        table_rows(app.session.store()),
    );
    let dual = incidence_table(
        "Dual HyperGraph Table",
        ["Node", "Hyperedges"],
        table_rows(&app.session.dual()),
    );
    f.render_widget(primary, halves[0]);
    f.render_widget(dual, halves[1]);
}

fn field_widget<'a>(title: &'a str, value: &str, active: bool) -> Paragraph<'a> {
    let (text, style) = if active {
        (format!("{}_", value), Style::default().fg(Color::Yellow))
    } else {
        (value.to_string(), Style::default())
    };
    Paragraph::new(text)
        .style(style)
        .block(Block::default().title(title).borders(Borders::ALL))
}

fn render_edit(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let field_count = match form.mode {
        EditMode::Add => 2,
        EditMode::Edit => 1,
        EditMode::Delete => 0,
    };
    let mut constraints = vec![Constraint::Length(3); field_count + 1];
    constraints.push(Constraint::Min(3));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let modes = Tabs::new(EditMode::ALL.iter().map(|m| m.title()).collect::<Vec<_>>())
        .select(form.mode.index())
        .block(Block::default().title("Graph Edit  (←/→)").borders(Borders::ALL))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(modes, chunks[0]);

    let active = |field: Field| form.typing && form.focus == field;
    match form.mode {
        EditMode::Add => {
            let id = field_widget("New edge ID (e.g., e7)", &form.edge_id, active(Field::EdgeId));
            let nodes = field_widget("Nodes (comma-separated)", &form.nodes, active(Field::Nodes));
            f.render_widget(id, chunks[1]);
            f.render_widget(nodes, chunks[2]);
        }
        EditMode::Edit => {
            let nodes =
                field_widget("New nodes for the selected edge (comma-separated)", &form.nodes, active(Field::Nodes));
            f.render_widget(nodes, chunks[1]);
        }
        EditMode::Delete => {}
    }

    let store = app.session.store();
    let items: Vec<ListItem> = store
        .edge_names()
        .map(|name| {
            let members = store
                .get(name)
                .map(|nodes| nodes.iter().map(String::as_str).collect::<Vec<_>>().join(", "))
                .unwrap_or_default();
            ListItem::new(format!("{}: {{{}}}", name, members))
        })
        .collect();
    let list_title = match form.mode {
        EditMode::Add => "Existing hyperedges",
        EditMode::Edit => "Select an edge to edit (↑/↓)",
        EditMode::Delete => "Select an edge to delete (↑/↓, Enter)",
    };
    let list = List::new(items)
        .block(Block::default().title(list_title).borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");
    let mut state = ListState::default();
    if form.mode != EditMode::Add && !store.is_empty() {
        state.select(Some(form.selected));
    }
    f.render_stateful_widget(list, chunks[field_count + 1], &mut state);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.form.typing {
        "Typing: [Enter] Submit  [Tab] Next field  [Esc] Stop typing"
    } else if app.tab == Tab::Edit {
        "Controls: [←/→] Mode  [↑/↓] Select  [i/Enter] Type  [Tab/1-6] Tabs  [q] Quit"
    } else {
        "Controls: [Tab/Shift-Tab/1-6] Tabs  [↑/↓] Scroll  [q] Quit"
    };

    let mut lines = Vec::with_capacity(2);
    if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Info => Color::Cyan,
            StatusKind::Success => Color::Green,
            StatusKind::Warning => Color::Red,
        };
        lines.push(Line::from(Span::styled(status.text.clone(), Style::default().fg(color))));
    }
    lines.push(Line::from(controls));

    let widget = Paragraph::new(lines).block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(widget, area);
}
