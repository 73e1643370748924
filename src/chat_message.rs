use crate::models::{Author, ConversationEntry};
use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

/// Renders one conversation entry as a bordered bubble. User bubbles are
/// indented to the right, assistant bubbles sit flush left.
pub fn render_entry(entry: &ConversationEntry, area: Rect) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let style = base_style(entry.author);
    let indent = indent_for(entry.author);

    render_header(entry, &mut lines, style, indent);
    render_body(entry, &mut lines, area, style, indent);
    render_footer(&mut lines, style, indent);

    lines
}

fn base_style(author: Author) -> Style {
    match author {
        Author::User => Style::default().fg(Color::Rgb(255, 223, 128)),
        Author::Assistant => Style::default().fg(Color::Rgb(144, 238, 144)),
    }
}

fn indent_for(author: Author) -> &'static str {
    match author {
        Author::User => "  ",
        Author::Assistant => "",
    }
}

fn author_label(author: Author) -> &'static str {
    match author {
        Author::User => "vous",
        Author::Assistant => "assistant",
    }
}

fn render_header(
    entry: &ConversationEntry,
    lines: &mut Vec<Line<'static>>,
    style: Style,
    indent: &str,
) {
    let timestamp = entry
        .timestamp
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string();

    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("┌─".to_string(), style),
        Span::styled(
            author_label(entry.author).to_string(),
            style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ".to_string(), style),
        Span::styled(timestamp, style.add_modifier(Modifier::DIM)),
    ]));
}

fn render_body(
    entry: &ConversationEntry,
    lines: &mut Vec<Line<'static>>,
    area: Rect,
    style: Style,
    indent: &str,
) {
    let wrap_width = (area.width as usize).saturating_sub(6).max(10);

    for wrapped_line in wrap(&entry.text, wrap_width) {
        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("│ ".to_string(), style),
            Span::styled(wrapped_line.to_string(), style),
        ]));
    }
}

fn render_footer(lines: &mut Vec<Line<'static>>, style: Style, indent: &str) {
    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("╰─".to_string(), style),
    ]));
}
