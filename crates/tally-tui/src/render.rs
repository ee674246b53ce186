//! Main view rendering.
//!
//! Pure function of `AppState`: the runtime calls `render` after every
//! update that dirtied the state. The list is a table with a selection bar;
//! recently changed rows flash (bold yellow) until their flash ticks decay.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use crate::overlays::OverlayExt;
use crate::state::AppState;

pub fn render(frame: &mut Frame, app: &AppState) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    render_header(frame, header);
    render_table(frame, body, app);
    render_footer(frame, footer, app);

    app.overlay.render(frame, frame.area(), &app.ui);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " Tally ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" catalog", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.ui.catalog.count() == 0 {
        let empty = Paragraph::new(Line::styled(
            "No entries. Press n to add one.",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows = app.ui.catalog.entries().iter().map(|record| {
        let style = if app.ui.flashes.contains_key(&record.id) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Row::new(vec![
            Cell::from(record.entry.name.clone()),
            Cell::from(
                Line::from(format!("{:.2}", record.entry.price)).alignment(Alignment::Right),
            ),
        ])
        .style(style)
    });

    let table = Table::new(rows, [Constraint::Min(10), Constraint::Length(12)])
        .header(
            Row::new(vec![
                Cell::from("Name"),
                Cell::from(Line::from("Price").alignment(Alignment::Right)),
            ])
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    let mut state = TableState::default().with_selected(Some(app.ui.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &AppState) {
    let status_row = Rect::new(area.x, area.y, area.width, 1);
    let hints_area = Rect::new(area.x, area.y + 1, area.width, 1);
    let [status_area, total_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(20)]).areas(status_row);

    let left = match &app.ui.status {
        Some(status) => Line::styled(status.clone(), Style::default().fg(Color::Green)),
        None => Line::default(),
    };
    frame.render_widget(Paragraph::new(left), status_area);

    let total = Line::styled(
        format!("Total entries: {}", app.ui.catalog.count()),
        Style::default().fg(Color::DarkGray),
    )
    .alignment(Alignment::Right);
    frame.render_widget(Paragraph::new(total), total_area);

    let hints = Line::from(vec![
        hint("n", "new"),
        hint("Enter", "edit"),
        hint("d", "delete"),
        hint("j/k", "move"),
        hint("q", "quit"),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(hints), hints_area);
}

fn hint(key: &str, action: &str) -> Span<'static> {
    Span::styled(
        format!(" {key} {action} "),
        Style::default().fg(Color::DarkGray),
    )
}
