//! Action requests: the tagged union clients submit to the host.
//!
//! One variant per request type with a strongly typed payload, so the
//! reducer never inspects untyped shapes. Envelopes add the per-client
//! sequence number the replication layer uses for de-duplication.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::catalog::TokenId;

/// One element of a meld selection: a card from the hand (by index) or
/// a shelf token (materialized fresh, never consuming deck supply).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// Index into the acting player's hand.
    Hand(usize),
    /// A token from the always-available shelf.
    Shelf(TokenId),
}

/// A game action request.
///
/// Selection order within `Meld` is the sentence order - it is
/// semantically significant and never sorted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Take the top card of the draw deck.
    DrawDeck,
    /// Take the most recent discard.
    DrawDiscard,
    /// Propose a sentence built from hand and shelf selections.
    Meld {
        selections: SmallVec<[Selection; 8]>,
    },
    /// Decline to meld this turn.
    Skip,
    /// Discard one hand card, ending the turn.
    Discard { hand_index: usize },
    /// Reorder own hand by word class.
    Sort,
    /// Contest the pending meld proposal.
    Challenge,
    /// Vote on a contested meld.
    Vote { accept: bool },
}

impl Action {
    /// Build a meld action from a selection list.
    #[must_use]
    pub fn meld(selections: impl IntoIterator<Item = Selection>) -> Self {
        Action::Meld {
            selections: selections.into_iter().collect(),
        }
    }
}

/// An action wrapped for submission to the host.
///
/// `seq` is a per-client monotone counter: the host records the highest
/// applied value per player and drops anything at or below it, which
/// makes duplicate delivery harmless.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEnvelope {
    /// Per-client submission counter, starting at 1.
    pub seq: u64,

    /// The submitting player.
    pub player: PlayerId,

    /// The request itself.
    pub action: Action,
}

impl ActionEnvelope {
    /// Wrap an action for submission.
    #[must_use]
    pub fn new(seq: u64, player: PlayerId, action: Action) -> Self {
        Self { seq, player, action }
    }
}

/// A record of an applied action, kept in the room history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player whose action was applied.
    pub player: PlayerId,

    /// The action that was applied.
    pub action: Action,
}

impl ActionRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action) -> Self {
        Self { player, action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meld_builder_preserves_order() {
        let action = Action::meld([
            Selection::Hand(3),
            Selection::Shelf(TokenId::new(7)),
            Selection::Hand(0),
        ]);

        match action {
            Action::Meld { selections } => {
                assert_eq!(selections.len(), 3);
                assert_eq!(selections[0], Selection::Hand(3));
                assert_eq!(selections[1], Selection::Shelf(TokenId::new(7)));
                assert_eq!(selections[2], Selection::Hand(0));
            }
            _ => panic!("expected meld"),
        }
    }

    #[test]
    fn test_envelope() {
        let env = ActionEnvelope::new(1, PlayerId::new(2), Action::Skip);
        assert_eq!(env.seq, 1);
        assert_eq!(env.player, PlayerId::new(2));
    }

    #[test]
    fn test_action_serialization() {
        let actions = vec![
            Action::DrawDeck,
            Action::meld([Selection::Hand(1)]),
            Action::Discard { hand_index: 4 },
            Action::Vote { accept: false },
        ];

        for action in actions {
            let json = serde_json::to_string(&action).unwrap();
            let back: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(action, back);
        }
    }

    #[test]
    fn test_envelope_serialization() {
        let env = ActionEnvelope::new(9, PlayerId::new(0), Action::Challenge);
        let json = serde_json::to_string(&env).unwrap();
        let back: ActionEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(env, back);
    }
}
