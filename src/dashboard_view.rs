use crate::data;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn draw_dashboard(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    draw_stat_cards(f, chunks[0]);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Prochaines Audiences",
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        chunks[1],
    );

    draw_upcoming(f, chunks[2]);
}

fn draw_stat_cards(f: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let stats = &*data::STATS;

    stat_card(
        f,
        columns[0],
        "Audiences",
        stats.hearings_today.to_string(),
        "aujourd'hui",
        Color::Indexed(105),
    );
    stat_card(
        f,
        columns[1],
        "Délais critiques",
        stats.critical_deadlines.to_string(),
        "alerte J-7",
        Color::Red,
    );
    stat_card(
        f,
        columns[2],
        "Recouvrement",
        stats.billing.to_string(),
        "ce mois",
        Color::Green,
    );
}

fn stat_card(f: &mut Frame, area: Rect, title: &str, value: String, caption: &str, accent: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            caption.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_upcoming(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();

    for item in data::AGENDA.iter().take(2) {
        let urgent_marker = if item.urgent { " ●" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(
                item.time.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(item.title.to_string(), Style::default().fg(Color::White)),
            Span::styled(urgent_marker.to_string(), Style::default().fg(Color::Red)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("       "),
            Span::styled(item.tribunal.to_string(), Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(
                item.status.to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines), area);
}
