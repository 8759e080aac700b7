//! Token definitions - static vocabulary data.
//!
//! A `TokenDef` holds the immutable linguistic properties of one
//! vocabulary item: surface form, transliteration, gloss, word class,
//! and the behavioral flags the grammar engine pattern-matches on.
//!
//! Per-game card state lives separately in `CardInstance` - the same
//! vocabulary item can be in play many times at once.

use serde::{Deserialize, Serialize};

/// Unique identifier for a token definition.
///
/// Identifies the vocabulary item (e.g. 老师 "teacher"), not a specific
/// card in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(pub u32);

impl TokenId {
    /// Create a new token ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

/// Lexical word class of a token.
///
/// A closed set: the grammar engine matches on these exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    /// Grammatical function words: particles, connectors, measure words.
    Function,
    /// Jokers that stand in for any word.
    Wildcard,
}

impl WordClass {
    /// Sort priority used by the hand-sort action.
    /// Lower sorts first; ties keep their relative order.
    #[must_use]
    pub const fn sort_priority(self) -> u8 {
        match self {
            WordClass::Noun => 0,
            WordClass::Verb => 1,
            WordClass::Adjective => 2,
            WordClass::Function => 3,
            WordClass::Wildcard => 4,
        }
    }
}

/// Vocabulary tier a token belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Core,
    Lesson,
}

/// Static definition of one vocabulary token.
///
/// The behavioral flags are explicit booleans rather than an open
/// attribute map so the validation rules can stay total: adding
/// vocabulary never touches rule logic, only these flags.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenDef {
    /// Registry-assigned identifier.
    pub id: TokenId,

    /// Surface form (hanzi).
    pub surface: String,

    /// Transliteration (pinyin).
    pub pinyin: String,

    /// English gloss.
    pub gloss: String,

    /// Lexical class.
    pub class: WordClass,

    /// Vocabulary tier.
    pub tier: Tier,

    // Behavioral flags consumed by validation and scoring.
    pub measure_word: bool,
    pub number: bool,
    pub demonstrative: bool,
    /// Adverb or negation; constrained in placement.
    pub modifier: bool,
    /// The negation-existential (没有), the sole modifier allowed to
    /// open a sentence.
    pub negation_existential: bool,
    /// Requires an object; may not end a sentence.
    pub transitive: bool,
    pub time_word: bool,
    pub pronoun: bool,
    pub interrogative: bool,
    /// The yes/no question particle (吗).
    pub question_particle: bool,
    /// The copula (是).
    pub copula: bool,
    /// The locative (在).
    pub locative: bool,
    /// Aspect/possessive particle; doubles the meld score.
    pub particle: bool,
}

impl TokenDef {
    /// Create a definition with no flags set.
    ///
    /// The ID is assigned when the definition is registered; see
    /// `TokenRegistry::register`.
    #[must_use]
    pub fn new(
        surface: impl Into<String>,
        pinyin: impl Into<String>,
        gloss: impl Into<String>,
        class: WordClass,
    ) -> Self {
        Self {
            id: TokenId::new(0),
            surface: surface.into(),
            pinyin: pinyin.into(),
            gloss: gloss.into(),
            class,
            tier: Tier::Core,
            measure_word: false,
            number: false,
            demonstrative: false,
            modifier: false,
            negation_existential: false,
            transitive: false,
            time_word: false,
            pronoun: false,
            interrogative: false,
            question_particle: false,
            copula: false,
            locative: false,
            particle: false,
        }
    }

    #[must_use]
    pub fn tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    #[must_use]
    pub fn measure_word(mut self) -> Self {
        self.measure_word = true;
        self
    }

    #[must_use]
    pub fn number(mut self) -> Self {
        self.number = true;
        self
    }

    #[must_use]
    pub fn demonstrative(mut self) -> Self {
        self.demonstrative = true;
        self
    }

    #[must_use]
    pub fn modifier(mut self) -> Self {
        self.modifier = true;
        self
    }

    /// Marks the negation-existential; implies `modifier`.
    #[must_use]
    pub fn negation_existential(mut self) -> Self {
        self.modifier = true;
        self.negation_existential = true;
        self
    }

    #[must_use]
    pub fn transitive(mut self) -> Self {
        self.transitive = true;
        self
    }

    #[must_use]
    pub fn time_word(mut self) -> Self {
        self.time_word = true;
        self
    }

    #[must_use]
    pub fn pronoun(mut self) -> Self {
        self.pronoun = true;
        self
    }

    #[must_use]
    pub fn interrogative(mut self) -> Self {
        self.interrogative = true;
        self
    }

    #[must_use]
    pub fn question_particle(mut self) -> Self {
        self.question_particle = true;
        self
    }

    #[must_use]
    pub fn copula(mut self) -> Self {
        self.copula = true;
        self
    }

    #[must_use]
    pub fn locative(mut self) -> Self {
        self.locative = true;
        self
    }

    #[must_use]
    pub fn particle(mut self) -> Self {
        self.particle = true;
        self
    }

    /// Can this token anchor a sentence as its predicate?
    #[must_use]
    pub fn is_predicate(&self) -> bool {
        matches!(self.class, WordClass::Verb | WordClass::Adjective) || self.copula || self.locative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_id() {
        let id = TokenId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Token(7)");
    }

    #[test]
    fn test_sort_priority_order() {
        assert!(WordClass::Noun.sort_priority() < WordClass::Verb.sort_priority());
        assert!(WordClass::Verb.sort_priority() < WordClass::Adjective.sort_priority());
        assert!(WordClass::Adjective.sort_priority() < WordClass::Function.sort_priority());
        assert!(WordClass::Function.sort_priority() < WordClass::Wildcard.sort_priority());
    }

    #[test]
    fn test_builder_flags() {
        let def = TokenDef::new("没有", "méi yǒu", "not have", WordClass::Verb)
            .negation_existential()
            .transitive();

        assert!(def.modifier);
        assert!(def.negation_existential);
        assert!(def.transitive);
        assert!(!def.measure_word);
    }

    #[test]
    fn test_is_predicate() {
        let verb = TokenDef::new("去", "qù", "go", WordClass::Verb);
        let noun = TokenDef::new("人", "rén", "person", WordClass::Noun);
        let copula = TokenDef::new("是", "shì", "is", WordClass::Verb).copula();
        let locative = TokenDef::new("在", "zài", "at", WordClass::Function).locative();

        assert!(verb.is_predicate());
        assert!(!noun.is_predicate());
        assert!(copula.is_predicate());
        assert!(locative.is_predicate());
    }

    #[test]
    fn test_serialization() {
        let def = TokenDef::new("我", "wǒ", "I/me", WordClass::Noun).pronoun();
        let json = serde_json::to_string(&def).unwrap();
        let back: TokenDef = serde_json::from_str(&json).unwrap();

        assert_eq!(def.surface, back.surface);
        assert_eq!(def.class, back.class);
        assert!(back.pronoun);
    }
}
