use crate::app::App;
use crate::chat_message::render_entry;
use crate::data::CHAT_SUGGESTIONS;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn draw_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Assistant Juridique · en ligne ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Indexed(105)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let suggestions_height = if app.assistant.suggestions_visible() {
        1
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(suggestions_height),
            Constraint::Length(2),
        ])
        .split(inner);

    draw_messages(f, app, chunks[0]);

    app.status_indicator.render(f, chunks[1]);

    if suggestions_height > 0 {
        draw_suggestions(f, chunks[2]);
    }

    draw_input(f, app, chunks[3]);
}

fn draw_messages(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for entry in app.assistant.entries() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(render_entry(entry, area));
    }

    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    let chat_scroll = app.chat_scroll.min(max_scroll);

    let msgs_para = Paragraph::new(lines)
        .block(Block::default())
        .wrap(Wrap { trim: true });
    f.render_widget(msgs_para.scroll((chat_scroll, 0)), area);
}

fn draw_suggestions(f: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, suggestion) in CHAT_SUGGESTIONS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("F{}", i + 1),
            Style::default()
                .fg(Color::Indexed(105))
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", suggestion),
            Style::default().fg(Color::Gray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    let input = Line::from(vec![
        Span::styled("→ ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.chat_input.clone(), Style::default().fg(Color::White)),
    ]);

    let visible_width = area.width.saturating_sub(2);
    let text_width = app.chat_input.width() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(
        Paragraph::new(input).scroll((0, scroll_offset)),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );
}
