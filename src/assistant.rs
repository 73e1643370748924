// src/assistant.rs
//
// Scripted assistant. Replies come from a fixed, ordered rule table:
// the first rule with a keyword found in the case-folded utterance wins.
// The artificial reply delay is owned by the caller (a spawned timer
// task), so the engine itself stays synchronous.

use crate::config::get_config;
use crate::data;
use crate::models::{Author, ConversationEntry};
use chrono::Utc;
use std::time::Duration;

struct ReplyRule {
    keywords: &'static [&'static str],
    response: String,
}

/// A reply selected by [`Assistant::submit`], to be appended to the log
/// after `delay` elapses. Pending replies are independent of each other:
/// a second submit while one is pending schedules another timer and both
/// eventually land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub text: String,
    pub delay: Duration,
}

pub struct Assistant {
    rules: Vec<ReplyRule>,
    fallback: String,
    log: Vec<ConversationEntry>,
    next_id: u64,
}

impl Assistant {
    pub fn new() -> Self {
        let config = get_config();

        let agenda_reply = match data::AGENDA.first() {
            Some(first) => format!(
                "Vous avez {} événements aujourd'hui. Le plus urgent est \"{}\" à {} ({}).",
                data::AGENDA.len(),
                first.title,
                first.time,
                first.tribunal
            ),
            None => "Aucun événement prévu aujourd'hui.".to_string(),
        };

        // Order is the contract: first match wins, top to bottom.
        let rules = vec![
            ReplyRule {
                keywords: &["bonjour", "salut"],
                response: "Bonjour Maître ! Prêt pour vos audiences ?".to_string(),
            },
            ReplyRule {
                keywords: &["agenda", "programme", "demain", "aujourd'hui"],
                response: agenda_reply,
            },
            ReplyRule {
                keywords: &["dossier", "affaire"],
                response: "Quel dossier souhaitez-vous consulter ? J'ai récemment mis à jour 'Hôtel Palmeraie' et 'Consorts Alami'.".to_string(),
            },
            ReplyRule {
                keywords: &["alami"],
                response: "Le dossier 'Consorts Alami' (CAB-24/089) est en mise en état au Tribunal Administratif. Une alerte J-7 est active pour le mémoire en réplique.".to_string(),
            },
            ReplyRule {
                keywords: &["merci"],
                response: "Je vous en prie, Maître.".to_string(),
            },
        ];

        let mut assistant = Assistant {
            rules,
            fallback: "Je n'ai pas compris. Essayez 'Agenda' ou 'Dossier Alami'.".to_string(),
            log: Vec::new(),
            next_id: 1,
        };

        assistant.push(
            Author::Assistant,
            format!(
                "Bonjour {}. Je suis votre assistant juridique. Voulez-vous un résumé de votre journée ou préparer un dossier spécifique ?",
                config.lawyer_name
            ),
        );

        assistant
    }

    /// Submits a user utterance. A trimmed-empty utterance is a silent
    /// no-op. Otherwise the user entry is appended immediately and the
    /// selected reply is returned for delayed delivery.
    pub fn submit(&mut self, utterance: &str) -> Option<PendingReply> {
        if utterance.trim().is_empty() {
            return None;
        }

        self.push(Author::User, utterance.to_string());

        let folded = utterance.to_lowercase();
        let text = self
            .rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| folded.contains(k)))
            .map(|rule| rule.response.clone())
            .unwrap_or_else(|| self.fallback.clone());

        log::debug!("selected reply for utterance {:?}: {:?}", utterance, text);

        Some(PendingReply {
            text,
            delay: Duration::from_millis(get_config().reply_delay_ms),
        })
    }

    /// Appends a delayed assistant reply to the log. Called by the timer
    /// task once the artificial delay has elapsed.
    pub fn deliver_reply(&mut self, text: String) {
        self.push(Author::Assistant, text);
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.log
    }

    /// Suggestion chips are only offered while the conversation is short,
    /// as in the original widget.
    pub fn suggestions_visible(&self) -> bool {
        self.log.len() < 3
    }

    fn push(&mut self, author: Author, text: String) {
        let entry = ConversationEntry {
            id: self.next_id,
            author,
            text,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.log.push(entry);
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::models::Author;

    fn deliver(assistant: &mut Assistant, pending: PendingReply) {
        assistant.deliver_reply(pending.text);
    }

    #[test]
    fn test_empty_utterance_is_a_no_op() {
        let mut assistant = Assistant::new();
        let before = assistant.entries().len();

        assert!(assistant.submit("").is_none());
        assert!(assistant.submit("   \t  ").is_none());
        assert_eq!(assistant.entries().len(), before);
    }

    #[test]
    fn test_submit_appends_user_entry_synchronously() {
        let mut assistant = Assistant::new();
        let before = assistant.entries().len();

        let pending = assistant.submit("Bonjour").unwrap();
        assert_eq!(assistant.entries().len(), before + 1);

        let last = assistant.entries().last().unwrap();
        assert_eq!(last.author, Author::User);
        assert_eq!(last.text, "Bonjour");

        deliver(&mut assistant, pending);
        assert_eq!(assistant.entries().len(), before + 2);
        assert_eq!(assistant.entries().last().unwrap().author, Author::Assistant);
    }

    #[test]
    fn test_greeting_wins_over_later_rules() {
        // "Bonjour, mon dossier Alami" carries keywords of rules 1, 3
        // and 4; the greeting rule is first so it must win.
        let mut assistant = Assistant::new();
        let pending = assistant.submit("Bonjour, mon dossier Alami").unwrap();
        assert_eq!(pending.text, "Bonjour Maître ! Prêt pour vos audiences ?");
    }

    #[test]
    fn test_agenda_reply_interpolates_schedule() {
        let mut assistant = Assistant::new();
        let pending = assistant.submit("Quel est mon agenda aujourd'hui").unwrap();

        assert!(pending.text.contains(&data::AGENDA.len().to_string()));
        assert!(pending.text.contains(data::AGENDA[0].title));
    }

    #[test]
    fn test_dossier_beats_alami() {
        // Verified behavior: "dossier alami" contains the rule-3 keyword
        // "dossier", so the generic case prompt wins and the Alami rule
        // is never reached.
        let mut assistant = Assistant::new();
        let pending = assistant.submit("dossier alami").unwrap();
        assert!(pending.text.starts_with("Quel dossier souhaitez-vous consulter"));
    }

    #[test]
    fn test_alami_alone_gets_case_status() {
        let mut assistant = Assistant::new();
        let pending = assistant.submit("où en est alami ?").unwrap();
        assert!(pending.text.contains("CAB-24/089"));
    }

    #[test]
    fn test_matching_is_case_folded() {
        let mut assistant = Assistant::new();
        let pending = assistant.submit("MERCI").unwrap();
        assert_eq!(pending.text, "Je vous en prie, Maître.");
    }

    #[test]
    fn test_unknown_utterance_gets_fallback() {
        let mut assistant = Assistant::new();
        let pending = assistant.submit("xyz123").unwrap();
        assert_eq!(
            pending.text,
            "Je n'ai pas compris. Essayez 'Agenda' ou 'Dossier Alami'."
        );
    }

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut assistant = Assistant::new();
        for utterance in ["salut", "agenda", "merci"] {
            let pending = assistant.submit(utterance).unwrap();
            deliver(&mut assistant, pending);
        }

        let ids: Vec<u64> = assistant.entries().iter().map(|e| e.id).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_log_alternates_under_rapid_submissions() {
        // Each pending reply is delivered after its own submission; the
        // log then reads user/assistant pairs in order.
        let mut assistant = Assistant::new();
        let first = assistant.submit("bonjour").unwrap();
        deliver(&mut assistant, first);
        let second = assistant.submit("merci").unwrap();
        deliver(&mut assistant, second);

        let authors: Vec<Author> = assistant.entries().iter().map(|e| e.author).collect();
        assert_eq!(
            authors,
            vec![
                Author::Assistant, // seeded greeting
                Author::User,
                Author::Assistant,
                Author::User,
                Author::Assistant,
            ]
        );
    }

    #[test]
    fn test_suggestions_hide_once_conversation_grows() {
        let mut assistant = Assistant::new();
        assert!(assistant.suggestions_visible());

        let pending = assistant.submit("bonjour").unwrap();
        deliver(&mut assistant, pending);
        assert!(!assistant.suggestions_visible());
    }
}
