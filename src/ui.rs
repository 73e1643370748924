use crate::agenda_view::draw_agenda;
use crate::analysis_view::draw_analysis;
use crate::app::{App, Screen};
use crate::cases_view::draw_cases;
use crate::chat_view::draw_chat;
use crate::config::get_config;
use crate::dashboard_view::draw_dashboard;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(1)])
        .split(size);

    draw_sidebar(f, app, horizontal_chunks[0]);

    let content = horizontal_chunks[1];
    if app.chat_open {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(46)])
            .split(content);
        draw_content(f, app, split[0]);
        draw_chat(f, app, split[1]);
    } else {
        draw_content(f, app, content);
    }
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let config = get_config();

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            config.practice_name.to_uppercase(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            config.city.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for (i, screen) in Screen::ALL.iter().enumerate() {
        let style = if *screen == app.screen {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Indexed(105))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(
            format!(" {} {} ", i + 1, screen.label()),
            style,
        )));
    }

    lines.push(Line::from(""));
    let chat_hint = if app.chat_open {
        "Échap : fermer le chat"
    } else {
        "c : ouvrir l'assistant"
    };
    lines.push(Line::from(Span::styled(
        chat_hint,
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "q : quitter",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        config.lawyer_name.clone(),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(Span::styled(
        "Avocat titulaire",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_content(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .margin(1)
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            app.screen.label(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );

    match app.screen {
        Screen::Dashboard => draw_dashboard(f, chunks[1]),
        Screen::Cases => draw_cases(f, chunks[1]),
        Screen::Analysis => draw_analysis(f, app, chunks[1]),
        Screen::Agenda => draw_agenda(f, chunks[1]),
    }
}
