// src/data.rs
//
// Static sample datasets shown by the dashboard. Loaded once, read-only.

use crate::models::{
    AgendaItem, CaseAnalysis, CaseFile, Impact, PracticeStats, StatuteRef, StrategyStep,
};
use once_cell::sync::Lazy;

pub static STATS: Lazy<PracticeStats> = Lazy::new(|| PracticeStats {
    hearings_today: 4,
    critical_deadlines: 2,
    billing: "18,500 MAD",
});

pub static AGENDA: Lazy<Vec<AgendaItem>> = Lazy::new(|| {
    vec![
        AgendaItem {
            time: "09:00",
            end_time: "10:30",
            title: "Audience : Héritiers Z. c/ Consorts M.",
            tribunal: "TPI Marrakech - Salle 2",
            kind: "Audience",
            status: "En cours",
            urgent: true,
            prepared: true,
            notes: Some("Plaidoirie sur l'incident de procédure uniquement."),
            reference: "CAB-24/112",
        },
        AgendaItem {
            time: "11:00",
            end_time: "12:00",
            title: "Délibéré : Soc. Atlas vs X",
            tribunal: "Cour d'Appel Marrakech",
            kind: "Délibéré",
            status: "À venir",
            urgent: false,
            prepared: true,
            notes: Some("Récupérer la copie du jugement."),
            reference: "CAB-24/089",
        },
        AgendaItem {
            time: "14:30",
            end_time: "15:30",
            title: "Consultation : M. El Idrissi",
            tribunal: "Cabinet",
            kind: "RDV",
            status: "Confirmé",
            urgent: false,
            prepared: false,
            notes: Some("Première consultation - Apporter dossier foncier."),
            reference: "CLIENT-NEW",
        },
    ]
});

pub static CASES: Lazy<Vec<CaseFile>> = Lazy::new(|| {
    vec![
        CaseFile {
            reference: "CAB-24/112",
            client: "Hôtel Palmeraie",
            adverse: "Tour Opérateur",
            tribunal: "TPI Marrakech",
            stage: "Expertise",
            updated: "2024-12-12",
            kind: "Commercial",
            urgent: false,
        },
        CaseFile {
            reference: "CAB-24/089",
            client: "Consorts Alami",
            adverse: "Conservation Foncière",
            tribunal: "Admin. Marrakech",
            stage: "Mise en état",
            updated: "2024-12-08",
            kind: "Foncier",
            urgent: true,
        },
        CaseFile {
            reference: "CAB-23/450",
            client: "Mme. Tazi",
            adverse: "M. Tazi",
            tribunal: "Famille Marrakech",
            stage: "Conciliation",
            updated: "2024-12-10",
            kind: "Famille",
            urgent: false,
        },
    ]
});

pub static ANALYSIS: Lazy<CaseAnalysis> = Lazy::new(|| CaseAnalysis {
    summary: "Le document analysé est un 'Mémoire en réponse' de la partie adverse concernant le litige foncier (Dossier Alami).",
    doc_type: "Mémoire en réponse",
    confidence_score: 85,
    facts: vec![
        "La partie adverse conteste la qualité à agir des héritiers.",
        "Citation d'un plan cadastral datant de 1998 (potentiellement obsolète).",
        "Absence de preuve de notification officielle.",
    ],
    statutes: vec![
        StatuteRef {
            code: "Code Droits Réels",
            article: "Art. 3",
            text: "L'immatriculation foncière purge le bien de tout droit antérieur non inscrit.",
        },
        StatuteRef {
            code: "Code Procédure Civile",
            article: "Art. 39",
            text: "La notification doit être faite à personne ou à domicile élu.",
        },
    ],
    strategy: vec![
        StrategyStep {
            step: 1,
            action: "Soulever la nullité de notification",
            detail: "La notification n'a pas touché tous les héritiers (mineurs).",
            impact: Impact::High,
        },
        StrategyStep {
            step: 2,
            action: "Demander Contre-Expertise",
            detail: "Le plan de 1998 ne reflète pas l'état actuel (constructions nouvelles).",
            impact: Impact::Medium,
        },
        StrategyStep {
            step: 3,
            action: "Plaider l'irrecevabilité",
            detail: "Sur la base de l'article 3 du Code des Droits Réels.",
            impact: Impact::High,
        },
    ],
    jurisprudence: "Arrêt Cour de Cassation n°450/2020 (Ch. Fonc.) : Confirme la nullité absolue en cas de défaut de notification aux tuteurs des mineurs.",
});

/// Suggestion chips offered while the conversation is still short.
pub const CHAT_SUGGESTIONS: [&str; 3] = ["Mon agenda", "Dossier Alami", "Alertes urgentes"];
