//! Legal area catalog shown in the sidebar, plus the welcome shortcuts.

/// A topic card with example questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalArea {
    pub label: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

/// Shortcut button on the empty-conversation screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelcomeShortcut {
    pub label: &'static str,
    pub question: &'static str,
}

pub const LEGAL_AREAS: &[LegalArea] = &[
    LegalArea {
        label: "Contract Law",
        description: "Contract disputes, terms, and agreements",
        examples: &[
            "What makes a contract legally binding?",
            "Can I break a lease early?",
        ],
    },
    LegalArea {
        label: "Criminal Law",
        description: "Criminal charges and defense strategies",
        examples: &[
            "What are my rights during arrest?",
            "Difference between felony and misdemeanor?",
        ],
    },
    LegalArea {
        label: "Family Law",
        description: "Divorce, custody, and family matters",
        examples: &[
            "How is child custody determined?",
            "What is community property?",
        ],
    },
    LegalArea {
        label: "Employment Law",
        description: "Workplace rights and employment issues",
        examples: &[
            "Can I be fired without cause?",
            "What constitutes workplace harassment?",
        ],
    },
];

pub const WELCOME_SHORTCUTS: &[WelcomeShortcut] = &[
    WelcomeShortcut {
        label: "Tenant Rights",
        question: "What are my rights as a tenant?",
    },
    WelcomeShortcut {
        label: "Business Formation",
        question: "How do I start a small business legally?",
    },
];

pub const DISCLAIMER_TITLE: &str = "Legal Disclaimer";

pub const DISCLAIMER: &str = "This AI provides general legal information only, not legal advice. Consult a qualified attorney for your specific situation.";

/// All catalog examples in display order (card by card).
pub fn all_examples() -> impl Iterator<Item = &'static str> {
    LEGAL_AREAS
        .iter()
        .flat_map(|area| area.examples.iter().copied())
}

/// Example by its position in [`all_examples`].
pub fn example_at(index: usize) -> Option<&'static str> {
    all_examples().nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legal::responder::{compute_response, FALLBACK_RESPONSE};

    #[test]
    fn test_catalog_shape() {
        assert_eq!(LEGAL_AREAS.len(), 4);
        assert!(LEGAL_AREAS.iter().all(|a| a.examples.len() == 2));
        assert_eq!(all_examples().count(), 8);
        assert_eq!(WELCOME_SHORTCUTS.len(), 2);
    }

    #[test]
    fn test_example_at() {
        assert_eq!(example_at(0), Some("What makes a contract legally binding?"));
        assert_eq!(example_at(6), Some("Can I be fired without cause?"));
        assert_eq!(example_at(8), None);
    }

    #[test]
    fn test_first_example_of_each_card_gets_a_specific_answer() {
        for area in LEGAL_AREAS {
            assert_ne!(
                compute_response(area.examples[0]),
                FALLBACK_RESPONSE,
                "{}",
                area.label
            );
        }
    }
}
