//! # PsiGame Keyword Rule Table
//!
//! File: cli/src/chat/rules.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The chat widget answers questions by keyword matching. This module holds the
//! data side of that: the ordered list of `KeywordRule`s and the `DefaultRule`
//! used when nothing matches. The matcher (`chat::matcher`) only walks this
//! table; it has no knowledge of the content.
//!
//! ## Ordering
//!
//! Order is significant. Topic rules (pricing, methodology, format, ...) come
//! first, then the generic greeting/closing rules, then the default fallback.
//! An earlier rule always wins, so "olá, quanto custa?" is answered by the
//! pricing rule even though a greeting keyword appears first in the text.
//! The built-in order below must not be sorted or regrouped.
//!
//! ## Configuration
//!
//! Both rule types derive `Deserialize`, so `.psigame.toml` can replace the
//! whole table:
//!
//! ```toml
//! [[chat.rules]]
//! topic = "pricing"
//! keywords = ["preço", "valor"]
//! response = "Os valores são personalizados..."
//!
//! [chat.fallback]
//! response = "Não entendi, pode reformular?"
//! follow_up = true
//! ```
//!
use crate::core::error::{PsiGameError, Result};
use anyhow::anyhow;
use serde::Deserialize;
use tracing::debug;

/// Topic label reported for replies produced by the fallback rule.
pub const DEFAULT_TOPIC: &str = "default";

/// A (keyword set, response) pair used for substring classification.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KeywordRule {
    topic: String,
    keywords: Vec<String>,
    response: String,
    #[serde(default)]
    follow_up: bool,
}

impl KeywordRule {
    pub fn new(
        topic: impl Into<String>,
        keywords: &[&str],
        response: impl Into<String>,
        follow_up: bool,
    ) -> Self {
        Self {
            topic: topic.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            response: response.into(),
            follow_up,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn suggests_follow_up(&self) -> bool {
        self.follow_up
    }

    /// True if any keyword occurs anywhere in `lowered`.
    ///
    /// Plain substring containment: "resultado" matches "resultados" and "oi" matches
    /// "noite". `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }

    /// Lower-cases and trims keywords, dropping blanks.
    fn normalized(mut self) -> Self {
        self.keywords = self
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }
}

/// The rule that answers when no keyword rule matches.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DefaultRule {
    response: String,
    #[serde(default)]
    follow_up: bool,
}

impl DefaultRule {
    pub fn new(response: impl Into<String>, follow_up: bool) -> Self {
        Self {
            response: response.into(),
            follow_up,
        }
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn suggests_follow_up(&self) -> bool {
        self.follow_up
    }
}

/// # Rule Table (`RuleTable`)
///
/// An immutable, ordered sequence of keyword rules plus the fallback.
/// Construct it with `RuleTable::builtin()` for the landing page content or
/// `RuleTable::new()` for a custom table (e.g. one loaded from configuration).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<KeywordRule>,
    fallback: DefaultRule,
}

impl RuleTable {
    /// Builds a table from rules in precedence order.
    ///
    /// Keywords are lower-cased so the matcher can compare them against
    /// lower-cased input.
    ///
    /// ## Errors
    ///
    /// Returns a `PsiGameError::Config` if a rule ends up with no keywords, or
    /// if any rule (or the fallback) has a blank response.
    pub fn new(rules: Vec<KeywordRule>, fallback: DefaultRule) -> Result<Self> {
        let rules: Vec<KeywordRule> = rules.into_iter().map(KeywordRule::normalized).collect();
        for (index, rule) in rules.iter().enumerate() {
            if rule.keywords.is_empty() {
                return Err(anyhow!(PsiGameError::Config(format!(
                    "Rule #{} ('{}') has no usable keywords.",
                    index + 1,
                    rule.topic
                ))));
            }
            if rule.response.trim().is_empty() {
                return Err(anyhow!(PsiGameError::Config(format!(
                    "Rule #{} ('{}') has an empty response.",
                    index + 1,
                    rule.topic
                ))));
            }
        }
        if fallback.response.trim().is_empty() {
            return Err(anyhow!(PsiGameError::Config(
                "The fallback rule has an empty response.".to_string()
            )));
        }
        debug!("Rule table built with {} keyword rules.", rules.len());
        Ok(Self { rules, fallback })
    }

    /// The PsiGame landing page rules, in their authored precedence order.
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
            fallback: builtin_fallback(),
        }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &DefaultRule {
        &self.fallback
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

pub(crate) fn builtin_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(
            "pricing",
            &["preço", "valor", "quanto custa"],
            "Os valores do PsiGame são personalizados conforme o tamanho da equipe e duração do programa. \
             Oferecemos desde sprints de 4 semanas até jornadas completas de 12 semanas. \
             Para receber uma proposta personalizada, clique em \"Agendar diagnóstico\" ou fale conosco pelo WhatsApp: (98) 98136-8232.",
            false,
        ),
        KeywordRule::new(
            "methodology",
            &["como funciona", "metodologia"],
            "O PsiGame funciona em 3 etapas: 1) Diagnóstico inicial para entender sua realidade, \
             2) Jornada personalizada com encontros, cartas e desafios semanais, \
             3) Medição de resultados com relatório executivo. Tudo é adaptado à cultura da sua empresa!",
            true,
        ),
        KeywordRule::new(
            "format",
            &["online", "remoto", "presencial"],
            "O PsiGame funciona em todos os formatos: presencial, online ou híbrido! \
             Adaptamos a metodologia para sua realidade, garantindo a mesma qualidade e engajamento \
             independente do formato escolhido.",
            true,
        ),
        KeywordRule::new(
            "results",
            &["resultado", "benefício", "impacto"],
            "Com o PsiGame você verá melhorias em: clima organizacional, comunicação entre equipes, \
             redução de conflitos, desenvolvimento de soft skills, e aumento do bem-estar emocional. \
             Fornecemos métricas claras antes e depois!",
            true,
        ),
        KeywordRule::new(
            "duration",
            &["duração", "tempo", "quanto tempo"],
            "Temos diferentes formatos: Sprint de 4 semanas para resultados rápidos, \
             Jornada de Liderança de 8-12 semanas para desenvolvimento profundo, \
             ou Imersão de 1 dia para eventos especiais. Qual se encaixa melhor na sua necessidade?",
            true,
        ),
        KeywordRule::new(
            "licensing",
            &["licenciamento", "facilitador", "certificação"],
            "Sim! Oferecemos formação e licenciamento para profissionais que querem aplicar a metodologia PsiGame. \
             Você recebe certificação, materiais, acesso à marca e suporte contínuo. \
             Quer saber mais sobre como se tornar um facilitador?",
            false,
        ),
        KeywordRule::new(
            "clients",
            &["empresa", "cliente", "case"],
            "O PsiGame já transformou equipes em empresas de diversos setores, além de instituições públicas \
             de saúde e educação. Cada jornada é única e personalizada. \
             Posso agendar uma conversa para entender melhor suas necessidades?",
            true,
        ),
        KeywordRule::new(
            "therapy",
            &["terapia", "psicológico", "tratamento"],
            "O PsiGame NÃO é terapia. É uma experiência de educação socioemocional segura \
             para ambientes corporativos. Usamos elementos lúdicos e práticas integrativas para desenvolver \
             soft skills e promover bem-estar no trabalho.",
            false,
        ),
        KeywordRule::new(
            "team",
            &["equipe", "grupo", "pessoas"],
            "Recomendamos grupos de 12 a 25 pessoas para melhor aproveitamento, mas podemos adaptar para sua realidade. \
             Para empresas maiores, fazemos múltiplas turmas ou programas em cascata. \
             Quantas pessoas você tem em mente?",
            true,
        ),
        KeywordRule::new(
            "scheduling",
            &["agendar", "contato", "falar"],
            "Ótimo! Você pode: 1) Preencher o formulário nesta página para um diagnóstico gratuito, \
             2) Nos chamar no WhatsApp (98) 98136-8232, ou 3) Enviar um email para venisia@gmail.com. \
             Como prefere?",
            false,
        ),
        KeywordRule::new(
            "greeting",
            &["oi", "olá", "bom dia", "boa tarde", "boa noite"],
            "Olá! Que bom ter você aqui! 😊 Eu sou o assistente virtual da PsiGame. \
             Posso te ajudar a entender como transformamos o bem-estar emocional nas empresas. \
             O que gostaria de saber?",
            true,
        ),
        KeywordRule::new(
            "thanks",
            &["obrigad", "valeu", "gratidão"],
            "Por nada! Foi um prazer ajudar! Se tiver mais dúvidas ou quiser agendar um diagnóstico gratuito, \
             estarei aqui. Lembre-se: cuidar das emoções no trabalho é investir em resultados! 💜",
            false,
        ),
    ]
}

pub(crate) fn builtin_fallback() -> DefaultRule {
    DefaultRule::new(
        "Interessante sua pergunta! O PsiGame é uma solução completa para desenvolver soft skills \
         e bem-estar emocional no trabalho. Posso te contar sobre nossos formatos (sprint, jornada, imersão), \
         resultados mensuráveis, ou agendar um diagnóstico gratuito. O que te interessa mais?",
        true,
    )
}
