//! Keyword-driven answer lookup.
//!
//! Questions are lowercased and checked against an ordered rule table.
//! The first rule with a keyword contained in the question wins; when
//! nothing matches the fallback paragraph is returned.

use std::fmt;

/// Topic a rule answers, used for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Contract,
    Arrest,
    Custody,
    Employment,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::Contract => "contract",
            Topic::Arrest => "arrest",
            Topic::Custody => "custody",
            Topic::Employment => "employment",
        };
        f.write_str(name)
    }
}

/// One entry of the answer table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRule {
    pub topic: Topic,
    /// Lowercase substrings; any one of them triggers the rule.
    pub keywords: &'static [&'static str],
    pub answer: &'static str,
}

impl ResponseRule {
    /// `lowered` must already be lowercase.
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

pub const CONTRACT_RESPONSE: &str = "A legally binding contract typically requires: (1) Offer and acceptance, (2) Consideration (something of value exchanged), (3) Legal capacity of parties, and (4) Legal purpose. For specific contract disputes, I recommend consulting with a contract attorney who can review the actual terms and circumstances. Remember, this is general information and not legal advice for your specific situation.";

pub const ARREST_RESPONSE: &str = "During an arrest, you have several important rights: (1) Right to remain silent, (2) Right to an attorney, (3) Right to know the charges against you, (4) Right to refuse searches without a warrant (with some exceptions). Always exercise these rights respectfully. For specific criminal matters, contact a criminal defense attorney immediately.";

pub const CUSTODY_RESPONSE: &str = "Child custody decisions are typically based on the 'best interests of the child' standard, considering factors like: parental fitness, stability of home environment, child's preferences (if age-appropriate), and existing parent-child relationships. Courts may award joint or sole custody. Family law varies significantly by state, so consult a local family law attorney.";

pub const EMPLOYMENT_RESPONSE: &str = "Employment termination laws vary by state. Most employment is 'at-will,' meaning employers can terminate for any legal reason or no reason. However, termination cannot be for illegal reasons like discrimination, retaliation, or violation of public policy. If you believe you were wrongfully terminated, document everything and consult an employment attorney.";

pub const FALLBACK_RESPONSE: &str = "Thank you for your legal question. While I can provide general legal information, every situation is unique and requires specific analysis. I recommend consulting with a qualified attorney who can review your particular circumstances and provide personalized legal advice. Legal matters often have time-sensitive deadlines, so don't delay in seeking professional help if needed.";

/// Built-in rules in evaluation order.
pub const BUILTIN_RULES: &[ResponseRule] = &[
    ResponseRule {
        topic: Topic::Contract,
        keywords: &["contract", "agreement"],
        answer: CONTRACT_RESPONSE,
    },
    ResponseRule {
        topic: Topic::Arrest,
        keywords: &["arrest", "rights"],
        answer: ARREST_RESPONSE,
    },
    ResponseRule {
        topic: Topic::Custody,
        keywords: &["custody", "child"],
        answer: CUSTODY_RESPONSE,
    },
    ResponseRule {
        topic: Topic::Employment,
        keywords: &["fired", "employment"],
        answer: EMPLOYMENT_RESPONSE,
    },
];

/// Ordered answer table with a fallback.
#[derive(Debug, Clone)]
pub struct Responder {
    rules: &'static [ResponseRule],
    fallback: &'static str,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(BUILTIN_RULES, FALLBACK_RESPONSE)
    }
}

impl Responder {
    pub fn new(rules: &'static [ResponseRule], fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// First rule whose keywords occur in the question, if any.
    pub fn matching_rule(&self, question: &str) -> Option<&ResponseRule> {
        let lowered = question.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    /// Answer for a question. Never empty.
    pub fn respond(&self, question: &str) -> &'static str {
        match self.matching_rule(question) {
            Some(rule) => {
                tracing::debug!(topic = %rule.topic, "Matched response rule");
                rule.answer
            }
            None => {
                tracing::debug!("No rule matched, using fallback");
                self.fallback
            }
        }
    }
}

/// Answer a question with the built-in table.
pub fn compute_response(question: &str) -> &'static str {
    Responder::default().respond(question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_keywords_any_case() {
        for q in [
            "What makes a contract legally binding?",
            "CONTRACT",
            "I signed an Agreement yesterday",
            "is a verbal aGrEeMeNt enforceable",
        ] {
            assert_eq!(compute_response(q), CONTRACT_RESPONSE, "question: {q}");
        }
    }

    #[test]
    fn test_each_topic() {
        assert_eq!(
            compute_response("What are my rights during arrest?"),
            ARREST_RESPONSE
        );
        assert_eq!(
            compute_response("How is child custody determined?"),
            CUSTODY_RESPONSE
        );
        assert_eq!(
            compute_response("Can I be fired without cause?"),
            EMPLOYMENT_RESPONSE
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(
            compute_response("What is the meaning of life?"),
            FALLBACK_RESPONSE
        );
        assert_eq!(compute_response(""), FALLBACK_RESPONSE);
        assert_eq!(
            compute_response("What is community property?"),
            FALLBACK_RESPONSE
        );
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            compute_response("contract dispute over child custody"),
            CONTRACT_RESPONSE
        );
        // "rights" (rule 2) comes before "employment" (rule 4)
        assert_eq!(
            compute_response("my employment rights"),
            ARREST_RESPONSE
        );
    }

    #[test]
    fn test_substring_matching() {
        // "children" contains "child"; "subcontractor" contains "contract"
        assert_eq!(compute_response("my children"), CUSTODY_RESPONSE);
        assert_eq!(compute_response("hiring a subcontractor"), CONTRACT_RESPONSE);
        // Tenant question hits the arrest rule through "rights"
        assert_eq!(
            compute_response("What are my rights as a tenant?"),
            ARREST_RESPONSE
        );
    }

    #[test]
    fn test_matching_rule_reports_topic() {
        let responder = Responder::default();
        assert_eq!(
            responder.matching_rule("Unfair employment terms").map(|r| r.topic),
            Some(Topic::Employment)
        );
        assert!(responder.matching_rule("traffic ticket").is_none());
    }

    #[test]
    fn test_custom_table() {
        const RULES: &[ResponseRule] = &[ResponseRule {
            topic: Topic::Custody,
            keywords: &["visit"],
            answer: "visitation",
        }];
        let responder = Responder::new(RULES, "other");
        assert_eq!(responder.respond("Visiting schedule"), "visitation");
        assert_eq!(responder.respond("contract"), "other");
    }

    #[test]
    fn test_answers_never_empty() {
        for rule in BUILTIN_RULES {
            assert!(!rule.answer.is_empty());
            assert!(rule.keywords.iter().all(|k| *k == k.to_lowercase()));
        }
        assert!(!FALLBACK_RESPONSE.is_empty());
    }
}
