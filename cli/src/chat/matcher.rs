//! # PsiGame Response Matcher
//!
//! File: cli/src/chat/matcher.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The matcher classifies free text into a canned reply by walking a
//! `RuleTable` in order and returning the first rule whose keywords occur in
//! the input. When no rule matches, the table's fallback answers.
//!
//! The matcher is a total, side-effect free function of (table, input): there
//! is no error path and the same input always yields the same reply.
//!
//! ## Examples
//!
//! ```rust
//! use psigame::chat::Matcher;
//!
//! let matcher = Matcher::builtin();
//! let reply = matcher.respond("Quanto custa?");
//! assert_eq!(reply.topic, "pricing");
//! assert!(!reply.suggests_follow_up);
//! ```
//!
use super::rules::{RuleTable, DEFAULT_TOPIC};
use std::sync::Arc;
use tracing::debug;

/// The reply chosen for one input, borrowed from the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply<'a> {
    /// Topic of the winning rule, or `"default"` for the fallback.
    pub topic: &'a str,
    pub text: &'a str,
    pub suggests_follow_up: bool,
}

/// Keyword matcher over a shared, immutable rule table.
///
/// Cloning is cheap; every clone reads the same table.
#[derive(Debug, Clone)]
pub struct Matcher {
    table: Arc<RuleTable>,
}

impl Matcher {
    pub fn new(table: RuleTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// A matcher over the built-in landing page rules.
    pub fn builtin() -> Self {
        Self::new(RuleTable::builtin())
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// # Respond (`respond`)
    ///
    /// Returns the reply of the first rule (in table order) with at least one
    /// keyword contained in `input`. Matching is case-insensitive substring
    /// containment; input that is already lower-cased is left unchanged.
    /// Input matching nothing, including empty or punctuation-only input, gets
    /// the fallback reply.
    pub fn respond(&self, input: &str) -> Reply<'_> {
        let lowered = input.to_lowercase();
        match self.table.rules().iter().find(|rule| rule.matches(&lowered)) {
            Some(rule) => {
                debug!("Input matched rule '{}'.", rule.topic());
                Reply {
                    topic: rule.topic(),
                    text: rule.response(),
                    suggests_follow_up: rule.suggests_follow_up(),
                }
            }
            None => {
                debug!("No rule matched; answering with the fallback.");
                let fallback = self.table.fallback();
                Reply {
                    topic: DEFAULT_TOPIC,
                    text: fallback.response(),
                    suggests_follow_up: fallback.suggests_follow_up(),
                }
            }
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::rules::{DefaultRule, KeywordRule};

    fn topic_of(input: &str) -> String {
        Matcher::builtin().respond(input).topic.to_string()
    }

    #[test]
    fn test_pricing_question() {
        let matcher = Matcher::builtin();
        let reply = matcher.respond("Quanto custa?");
        assert_eq!(reply.topic, "pricing");
        assert!(reply.text.contains("valores"));
        assert!(!reply.suggests_follow_up);
    }

    #[test]
    fn test_methodology_question_suggests_follow_up() {
        let matcher = Matcher::builtin();
        let reply = matcher.respond("Como funciona a metodologia?");
        assert_eq!(reply.topic, "methodology");
        assert!(reply.suggests_follow_up);
    }

    #[test]
    fn test_single_rule_inputs() {
        assert_eq!(topic_of("vocês atendem de forma remota? é remoto?"), "format");
        assert_eq!(topic_of("Qual o impacto no clima?"), "results");
        assert_eq!(topic_of("Qual a duração?"), "duration");
        assert_eq!(topic_of("Quero ser facilitador"), "licensing");
        assert_eq!(topic_of("Isso é terapia?"), "therapy");
        assert_eq!(topic_of("Somos um grupo grande"), "team");
        assert_eq!(topic_of("Posso agendar?"), "scheduling");
        assert_eq!(topic_of("Olá"), "greeting");
        assert_eq!(topic_of("Muito obrigada"), "thanks");
    }

    #[test]
    fn test_keyword_inside_longer_word() {
        // "resultado" is a keyword; "resultados" still contains it.
        assert_eq!(topic_of("Quais os resultados?"), "results");
        // "oi" hides inside "noite"-like words too.
        assert_eq!(topic_of("boa noite"), "greeting");
    }

    #[test]
    fn test_earlier_rule_wins_regardless_of_text_position() {
        // Greeting keyword appears first in the text, pricing rule is first in the table.
        assert_eq!(topic_of("Olá! Qual o valor?"), "pricing");
        // Scheduling precedes greeting.
        assert_eq!(topic_of("oi, quero agendar"), "scheduling");
        // Methodology precedes team.
        assert_eq!(topic_of("com a equipe, como funciona?"), "methodology");
    }

    #[test]
    fn test_investment_of_time_is_a_duration_question() {
        // Pricing only knows "preço", "valor" and "quanto custa".
        assert_eq!(topic_of("Qual o investimento de tempo?"), "duration");
    }

    #[test]
    fn test_fallback_for_unmatched_input() {
        let matcher = Matcher::builtin();
        for input in ["", "   ", "?!...", "qual a cor do céu?"] {
            let reply = matcher.respond(input);
            assert_eq!(reply.topic, DEFAULT_TOPIC, "input {:?}", input);
            assert_eq!(reply.text, matcher.table().fallback().response());
            assert!(reply.suggests_follow_up);
        }
    }

    #[test]
    fn test_respond_is_case_insensitive() {
        assert_eq!(topic_of("METODOLOGIA"), "methodology");
        assert_eq!(topic_of("É PRESENCIAL?"), "format");
    }

    #[test]
    fn test_custom_table_order_is_respected() {
        let table = RuleTable::new(
            vec![
                KeywordRule::new("first", &["b"], "first", false),
                KeywordRule::new("second", &["a"], "second", true),
            ],
            DefaultRule::new("none", false),
        )
        .unwrap();
        let matcher = Matcher::new(table);
        assert_eq!(matcher.respond("a b").text, "first");
        assert_eq!(matcher.respond("a").text, "second");
        assert_eq!(matcher.respond("c").text, "none");
    }

    #[test]
    fn test_respond_is_repeatable() {
        let matcher = Matcher::builtin();
        assert_eq!(matcher.respond("tempo"), matcher.respond("tempo"));
    }
}
