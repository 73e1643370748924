use crate::data;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw_agenda(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        format!("Agenda Interactif · {} événements", data::AGENDA.len()),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for item in data::AGENDA.iter() {
        let dot_color = if item.urgent { Color::Red } else { Color::Indexed(105) };
        let prepared = if item.prepared {
            Span::styled("PRÊT", Style::default().fg(Color::Green))
        } else {
            Span::styled("À PRÉPARER", Style::default().fg(Color::Yellow))
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{}–{}", item.time, item.end_time), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("  ● ".to_string(), Style::default().fg(dot_color)),
            Span::styled(item.title.to_string(), Style::default().fg(Color::White)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("             "),
            Span::styled(format!("{} · {}", item.kind, item.reference), Style::default().fg(Color::Gray)),
            Span::raw("  "),
            prepared,
        ]));
        lines.push(Line::from(vec![
            Span::raw("             "),
            Span::styled(item.tribunal.to_string(), Style::default().fg(Color::Gray)),
        ]));
        if let Some(notes) = item.notes {
            lines.push(Line::from(vec![
                Span::raw("             "),
                Span::styled(notes.to_string(), Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "16:00  Aucun événement prévu",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(lines), area);
}
