//! # PsiGame Knowledge Base
//!
//! File: cli/src/chat/knowledge.rs
//! Author: Christi Mahu
//!
//! Static facts about the offering that the widget and the contact form draw
//! on: who we are, how to reach us, which formats exist and what sets the
//! method apart. `psigame about` prints them.
//!

/// Ways to reach the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contacts {
    pub email: &'static str,
    pub whatsapp: &'static str,
    pub location: &'static str,
}

/// Everything the assistant knows about the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Knowledge {
    pub company: &'static str,
    pub slogan: &'static str,
    pub mission: &'static str,
    pub contacts: Contacts,
    pub formats: &'static [&'static str],
    pub differentiators: &'static [&'static str],
}

pub const PSIGAME: Knowledge = Knowledge {
    company: "PsiGame",
    slogan: "Jogo sério sobre emoções no trabalho",
    mission: "Transformar o bem-estar emocional nas organizações através de jornadas lúdicas e mensuráveis",
    contacts: Contacts {
        email: "venisia@gmail.com",
        whatsapp: "(98) 98136-8232",
        location: "São Luís, Maranhão",
    },
    formats: &[
        "Sprint Emocional (4 semanas)",
        "Jornada de Liderança Humanizada (8-12 semanas)",
        "Imersão Lúdica (1 dia)",
        "Assinatura Corporativa (mensal)",
        "Formação & Licenciamento",
    ],
    differentiators: &[
        "Metodologia lúdica e gamificada",
        "Resultados mensuráveis",
        "Personalização para cada cultura",
        "Presencial, online ou híbrido",
        "Relatórios executivos com métricas",
    ],
};

impl Knowledge {
    /// Multi-line plain text summary, one fact per line.
    pub fn summary(&self) -> String {
        let mut out = format!("{} - {}\n{}\n\n", self.company, self.slogan, self.mission);
        out.push_str("Formatos:\n");
        for format in self.formats {
            out.push_str(&format!("  - {}\n", format));
        }
        out.push_str("Diferenciais:\n");
        for item in self.differentiators {
            out.push_str(&format!("  - {}\n", item));
        }
        out.push_str(&format!(
            "\nContato: {} | WhatsApp {} | {}\n",
            self.contacts.email, self.contacts.whatsapp, self.contacts.location
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_every_format_and_contact() {
        let summary = PSIGAME.summary();
        assert!(summary.starts_with("PsiGame - Jogo sério sobre emoções no trabalho"));
        for format in PSIGAME.formats {
            assert!(summary.contains(format));
        }
        assert!(summary.contains("venisia@gmail.com"));
        assert!(summary.contains("(98) 98136-8232"));
    }
}
