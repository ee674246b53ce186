//! Shared rendering helpers for overlays.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Centers a popup of the given size within `area`.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(area.x + x, area.y + y, width, height)
}

/// Clears the popup background and draws its border and title. Returns the
/// inner body area.
pub fn render_container(frame: &mut Frame, area: Rect, title: &str, border_color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// One labeled input row of a form.
pub struct FormRow<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    /// Inline error to show under the field, if the last save flagged it.
    pub error: Option<&'a str>,
}

/// Renders a form row: label line, value line with a cursor block when
/// focused, and an error line (possibly empty). Takes three rows of `area`
/// starting at `y_offset`.
pub fn render_form_row(frame: &mut Frame, area: Rect, y_offset: u16, row: &FormRow<'_>) {
    if y_offset + 2 >= area.height {
        return;
    }

    let label_style = if row.focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let label_area = Rect::new(area.x, area.y + y_offset, area.width, 1);
    frame.render_widget(Paragraph::new(Line::styled(row.label, label_style)), label_area);

    let max_width = area.width.saturating_sub(3) as usize;
    let value = clip_end(row.value, max_width);
    let mut spans = vec![
        Span::styled("> ", Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ];
    if row.focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }
    let value_area = Rect::new(area.x, area.y + y_offset + 1, area.width, 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), value_area);

    let error_area = Rect::new(area.x, area.y + y_offset + 2, area.width, 1);
    let error_line = match row.error {
        Some(message) => Line::styled(message, Style::default().fg(Color::Red)),
        None => Line::default(),
    };
    frame.render_widget(Paragraph::new(error_line), error_area);
}

/// Key/action hint for the overlay footer.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

/// Renders a centered hint line on the last row of `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint<'_>], key_color: Color) {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(key_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let hint_area = Rect::new(
        area.x,
        area.y + area.height.saturating_sub(1),
        area.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        hint_area,
    );
}

/// Clips `text` to `max_width` display columns, keeping the end (the part
/// the user is typing) and prefixing an ellipsis when clipped.
pub fn clip_end(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut tail = String::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        tail.insert(0, ch);
        width += ch_width;
    }
    format!("…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_centered_and_bounded() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = popup_area(area, 50, 10);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.x, 15);

        let clamped = popup_area(Rect::new(0, 0, 20, 6), 50, 10);
        assert!(clamped.width <= 16);
        assert!(clamped.height <= 4);
    }

    #[test]
    fn clip_end_keeps_the_tail() {
        assert_eq!(clip_end("short", 10), "short");
        assert_eq!(clip_end("abcdefgh", 5), "…efgh");
    }
}
