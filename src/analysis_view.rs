use crate::analysis::{AnalysisState, AnalysisTab};
use crate::app::App;
use crate::data;
use crate::models::Impact;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw_analysis(f: &mut Frame, app: &App, area: Rect) {
    match app.analysis.state {
        AnalysisState::Idle => draw_idle(f, area),
        AnalysisState::Analyzing => draw_analyzing(f, area),
        AnalysisState::Complete => draw_result(f, app, area),
    }
}

fn draw_idle(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Analyse Stratégique",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Moteur juridique marocain v1.2",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from("Scanner un document"),
        Line::from(Span::styled(
            "Prenez en photo une convocation, un jugement ou des conclusions adverses.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Entrée] Nouvelle analyse",
            Style::default()
                .fg(Color::Indexed(105))
                .add_modifier(Modifier::BOLD),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn draw_analyzing(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Analyse en cours...",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::raw("OCR & Traduction"),
        ]),
        Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::raw("Jurisprudence (Marrakech/Rabat)"),
        ]),
        Line::from(Span::styled(
            "Calcul du score de succès...",
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_result(f: &mut Frame, app: &App, area: Rect) {
    let analysis = &*data::ANALYSIS;
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            analysis.doc_type.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   Score IA {}%", analysis.confidence_score),
            Style::default().fg(Color::Green),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        analysis.summary.to_string(),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));
    lines.push(tabs_line(app.analysis.tab));
    lines.push(Line::from(""));

    match app.analysis.tab {
        AnalysisTab::Strategy => {
            for step in &analysis.strategy {
                let impact = match step.impact {
                    Impact::High => Span::styled(
                        " Impact Majeur",
                        Style::default().fg(Color::Indexed(105)),
                    ),
                    Impact::Medium => Span::raw(""),
                };
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("Étape {} · {}", step.step, step.action),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    impact,
                ]));
                lines.push(Line::from(Span::styled(
                    format!("  {}", step.detail),
                    Style::default().fg(Color::Gray),
                )));
                lines.push(Line::from(""));
            }
            lines.push(Line::from(vec![
                Span::styled("Jurisprudence Clé : ", Style::default().fg(Color::Indexed(105))),
                Span::styled(
                    format!("\"{}\"", analysis.jurisprudence),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                ),
            ]));
        }
        AnalysisTab::Sources => {
            for statute in &analysis.statutes {
                lines.push(Line::from(Span::styled(
                    format!("{} - {}", statute.code, statute.article),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    format!("  \"{}\"", statute.text),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                )));
                lines.push(Line::from(""));
            }
        }
        AnalysisTab::Facts => {
            for fact in &analysis.facts {
                lines.push(Line::from(vec![
                    Span::styled("⚠ ", Style::default().fg(Color::Yellow)),
                    Span::raw(fact.to_string()),
                ]));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Tab] onglet suivant   [n] nouvelle analyse",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn tabs_line(active: AnalysisTab) -> Line<'static> {
    let tab_span = |label: &str, tab: AnalysisTab| {
        if tab == active {
            Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(Color::Indexed(105))
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
        } else {
            Span::styled(format!(" {} ", label), Style::default().fg(Color::DarkGray))
        }
    };

    Line::from(vec![
        tab_span("Stratégie", AnalysisTab::Strategy),
        tab_span("Sources & Lois", AnalysisTab::Sources),
        tab_span("Faits", AnalysisTab::Facts),
    ])
}
