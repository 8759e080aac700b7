//! Meld scoring.
//!
//! Pure function over the finalized token sequence. Flat bonuses reward
//! a complete minimal sentence and modifier use; grammatical particles
//! double the running score each (dense marking compounds), and a
//! two-part connector doubles it once more.

use crate::catalog::{TokenDef, WordClass};

/// Base score for any accepted meld.
pub const BASE_SCORE: u32 = 5;

/// Bonus for a subject + predicate + object sentence.
pub const COMPLETE_SENTENCE_BONUS: u32 = 15;

/// Bonus for using a modifier.
pub const MODIFIER_BONUS: u32 = 10;

/// Recognized two-part connectors, matched as substrings of the
/// concatenated surface form.
pub const CONNECTOR_PAIRS: &[(&str, &str)] = &[("因为", "所以"), ("虽然", "但是")];

/// Score a finalized meld.
#[must_use]
pub fn score_meld(tokens: &[&TokenDef]) -> u32 {
    let has_subject = tokens.iter().any(|t| t.pronoun || t.class == WordClass::Noun);
    let has_predicate = tokens.iter().any(|t| t.is_predicate());
    let has_object = tokens
        .iter()
        .any(|t| matches!(t.class, WordClass::Noun | WordClass::Adjective));

    let mut score = BASE_SCORE;
    if has_subject && has_predicate && has_object {
        score += COMPLETE_SENTENCE_BONUS;
    }
    if tokens.iter().any(|t| t.modifier) {
        score += MODIFIER_BONUS;
    }

    for t in tokens {
        if t.particle {
            score *= 2;
        }
    }

    let surface: String = tokens.iter().map(|t| t.surface.as_str()).collect();
    if CONNECTOR_PAIRS
        .iter()
        .any(|(a, b)| surface.contains(a) && surface.contains(b))
    {
        score *= 2;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{standard_catalog, TokenRegistry};

    fn seq<'a>(reg: &'a TokenRegistry, surfaces: &[&str]) -> Vec<&'a TokenDef> {
        surfaces
            .iter()
            .map(|s| reg.by_surface(s).expect("surface in catalog"))
            .collect()
    }

    #[test]
    fn test_minimal_sentence_with_aspect_particle() {
        let reg = standard_catalog();
        // Complete sentence (5 + 15), doubled once by 了.
        let tokens = seq(&reg, &["我", "是", "老师", "了"]);
        assert_eq!(score_meld(&tokens), 40);
    }

    #[test]
    fn test_connector_doubles_again() {
        let reg = standard_catalog();
        let tokens = seq(&reg, &["因为", "我", "是", "老师", "了", "所以", "好"]);
        assert_eq!(score_meld(&tokens), 80);
    }

    #[test]
    fn test_modifier_bonus() {
        let reg = standard_catalog();
        // Subject + adjectival predicate + modifier, no particles.
        let tokens = seq(&reg, &["我", "很", "高兴"]);
        assert_eq!(score_meld(&tokens), BASE_SCORE + COMPLETE_SENTENCE_BONUS + MODIFIER_BONUS);
    }

    #[test]
    fn test_incomplete_sentence_scores_base() {
        let reg = standard_catalog();
        // No subject-like token.
        let tokens = seq(&reg, &["是", "去"]);
        assert_eq!(score_meld(&tokens), BASE_SCORE);
    }

    #[test]
    fn test_particles_compound() {
        let reg = standard_catalog();
        // Two particles quadruple the flat part.
        let tokens = seq(&reg, &["我", "是", "老师", "了", "的"]);
        assert_eq!(score_meld(&tokens), (BASE_SCORE + COMPLETE_SENTENCE_BONUS) * 4);
    }

    #[test]
    fn test_one_connector_half_does_not_double() {
        let reg = standard_catalog();
        let with_half = seq(&reg, &["因为", "我", "是", "老师"]);
        let without = seq(&reg, &["我", "是", "老师"]);
        assert_eq!(score_meld(&with_half), score_meld(&without));
    }
}
