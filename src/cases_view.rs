use crate::data;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw_cases(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();

    for case in data::CASES.iter() {
        let badge = if case.urgent {
            Span::styled(
                format!(" {} ", case.kind),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                format!(" {} ", case.kind),
                Style::default().fg(Color::Indexed(105)),
            )
        };

        lines.push(Line::from(vec![
            Span::styled(
                case.client.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(case.reference.to_string(), Style::default().fg(Color::Gray)),
            Span::raw("  "),
            badge,
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("Contre : ", Style::default().fg(Color::DarkGray)),
            Span::styled(case.adverse.to_string(), Style::default().fg(Color::Gray)),
            Span::styled("   Tribunal : ", Style::default().fg(Color::DarkGray)),
            Span::styled(case.tribunal.to_string(), Style::default().fg(Color::Gray)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(case.stage.to_string(), Style::default().fg(Color::Indexed(105))),
            Span::styled(
                format!("   MAJ: {}", case.updated),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines), area);
}
