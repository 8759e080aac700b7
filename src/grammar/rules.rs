//! Grammar validation: an ordered list of positional/lexical rules.
//!
//! This is intentionally not a parser. Each rule reads token flags and
//! positions only, so growing the vocabulary never touches rule logic.
//! The rule list itself is data: a `RuleSet` is an ordered `Vec<Rule>`,
//! evaluated front to back, and the first violation wins. Divergent
//! validator variants are therefore different `RuleSet` values, not
//! different code.

use serde::{Deserialize, Serialize};

use crate::catalog::{TokenDef, WordClass};

/// One validation rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    /// Sentences need at least two tokens.
    MinLength,
    /// Sentences need a verb, adjective, copula, or locative.
    PredicateRequired,
    /// A measure word may not open a sentence and must directly follow
    /// a number or demonstrative.
    MeasureWordPlacement,
    /// A modifier may not end a sentence, may only open one if it is
    /// the negation-existential, and must directly precede a verb or
    /// adjective (the negation-existential also accepts a noun).
    ModifierPlacement,
    /// A transitive verb may not end a sentence.
    TransitiveTermination,
    /// When both a time word and a pronoun appear, one of them must
    /// open the sentence.
    TimePronounOrder,
    /// A question word and the yes/no particle are redundant together.
    RedundantInterrogation,
}

/// A rejected sentence: which rule fired, and a reason fit to show the
/// acting player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub rule: Rule,
    pub message: String,
}

impl Rejection {
    fn new(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// An ordered rule list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set from an explicit ordered list.
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The standard seven-rule variant, in priority order.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Rule::MinLength,
            Rule::PredicateRequired,
            Rule::MeasureWordPlacement,
            Rule::ModifierPlacement,
            Rule::TransitiveTermination,
            Rule::TimePronounOrder,
            Rule::RedundantInterrogation,
        ])
    }

    /// The rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Validate an ordered token sequence.
    ///
    /// Pure: returns `Ok(())` or the first violation in rule order.
    pub fn validate(&self, tokens: &[&TokenDef]) -> Result<(), Rejection> {
        for rule in &self.rules {
            if let Some(rejection) = check(*rule, tokens) {
                return Err(rejection);
            }
        }
        Ok(())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// A wildcard satisfies any positional demand placed on its neighbors.
fn wild(t: &TokenDef) -> bool {
    t.class == WordClass::Wildcard
}

fn check(rule: Rule, tokens: &[&TokenDef]) -> Option<Rejection> {
    match rule {
        Rule::MinLength => {
            if tokens.len() < 2 {
                return Some(Rejection::new(
                    Rule::MinLength,
                    "Sentence too short (min 2 words).",
                ));
            }
        }

        Rule::PredicateRequired => {
            if !tokens.iter().any(|t| t.is_predicate()) {
                return Some(Rejection::new(
                    Rule::PredicateRequired,
                    "Missing action: every sentence needs a verb or 'is'.",
                ));
            }
        }

        Rule::MeasureWordPlacement => {
            for (i, t) in tokens.iter().enumerate() {
                if !t.measure_word {
                    continue;
                }
                let counted = i > 0 && {
                    let prev = tokens[i - 1];
                    prev.number || prev.demonstrative || wild(prev)
                };
                if !counted {
                    return Some(Rejection::new(
                        Rule::MeasureWordPlacement,
                        format!(
                            "'{}' is a unit and needs a number before it (e.g. 三{}).",
                            t.surface, t.surface
                        ),
                    ));
                }
            }
        }

        Rule::ModifierPlacement => {
            let last = tokens.len().saturating_sub(1);
            for (i, t) in tokens.iter().enumerate() {
                if !t.modifier {
                    continue;
                }
                if i == last {
                    return Some(Rejection::new(
                        Rule::ModifierPlacement,
                        format!("Incomplete: '{}' cannot end a sentence.", t.surface),
                    ));
                }
                if i == 0 && !t.negation_existential {
                    return Some(Rejection::new(
                        Rule::ModifierPlacement,
                        format!("Cannot begin with '{}'.", t.surface),
                    ));
                }
                let next = tokens[i + 1];
                let allowed = matches!(next.class, WordClass::Verb | WordClass::Adjective)
                    || wild(next)
                    || (t.negation_existential && next.class == WordClass::Noun);
                if !allowed {
                    return Some(Rejection::new(
                        Rule::ModifierPlacement,
                        format!(
                            "'{}' must come right before a verb or adjective.",
                            t.surface
                        ),
                    ));
                }
            }
        }

        Rule::TransitiveTermination => {
            if let Some(t) = tokens.last() {
                if t.transitive {
                    return Some(Rejection::new(
                        Rule::TransitiveTermination,
                        format!(
                            "Incomplete thought: what do they '{}'? Add an object.",
                            t.surface
                        ),
                    ));
                }
            }
        }

        Rule::TimePronounOrder => {
            let has_time = tokens.iter().any(|t| t.time_word);
            let has_pronoun = tokens.iter().any(|t| t.pronoun);
            if has_time && has_pronoun {
                let first = tokens[0];
                if !(first.time_word || first.pronoun || wild(first)) {
                    return Some(Rejection::new(
                        Rule::TimePronounOrder,
                        "Word order: time and person words open the sentence.",
                    ));
                }
            }
        }

        Rule::RedundantInterrogation => {
            let has_question_word = tokens.iter().any(|t| t.interrogative);
            let has_particle = tokens.iter().any(|t| t.question_particle);
            if has_question_word && has_particle {
                return Some(Rejection::new(
                    Rule::RedundantInterrogation,
                    "Question error: don't use a question word and '吗' together.",
                ));
            }
        }
    }
    None
}
