// src/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

/// A single entry in the assistant conversation log. Entries are
/// append-only and never mutated once pushed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub id: u64,
    pub author: Author,
    pub text: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
}

/// One slot of the day's schedule.
#[derive(Debug, Clone)]
pub struct AgendaItem {
    pub time: &'static str,
    pub end_time: &'static str,
    pub title: &'static str,
    pub tribunal: &'static str,
    pub kind: &'static str,
    pub status: &'static str,
    pub urgent: bool,
    pub prepared: bool,
    pub notes: Option<&'static str>,
    pub reference: &'static str,
}

/// A case file (dossier) of the practice.
#[derive(Debug, Clone)]
pub struct CaseFile {
    pub reference: &'static str,
    pub client: &'static str,
    pub adverse: &'static str,
    pub tribunal: &'static str,
    pub stage: &'static str,
    pub updated: &'static str,
    pub kind: &'static str,
    pub urgent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    High,
    Medium,
}

/// A statute cited by the simulated analysis.
#[derive(Debug, Clone)]
pub struct StatuteRef {
    pub code: &'static str,
    pub article: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone)]
pub struct StrategyStep {
    pub step: u8,
    pub action: &'static str,
    pub detail: &'static str,
    pub impact: Impact,
}

/// The canned result of the simulated document analysis.
#[derive(Debug, Clone)]
pub struct CaseAnalysis {
    pub summary: &'static str,
    pub doc_type: &'static str,
    pub confidence_score: u8,
    pub facts: Vec<&'static str>,
    pub statutes: Vec<StatuteRef>,
    pub strategy: Vec<StrategyStep>,
    pub jurisprudence: &'static str,
}

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone)]
pub struct PracticeStats {
    pub hearings_today: u32,
    pub critical_deadlines: u32,
    pub billing: &'static str,
}
