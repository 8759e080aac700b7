//! Card instances - per-game copies of catalog tokens.
//!
//! The same vocabulary item can sit in several hands at once, so every
//! card in play carries a freshly minted `InstanceId` alongside the
//! `TokenId` it was copied from. Linguistic attributes are never copied
//! onto the instance; they are always resolved through the registry.

use serde::{Deserialize, Serialize};

use super::token::TokenId;

/// Unique identifier for one card in play.
///
/// Minted monotonically by the room; never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// One card in play: an instance id plus the token it instantiates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique per-session identity.
    pub instance: InstanceId,

    /// The vocabulary item this card is a copy of.
    pub token: TokenId,
}

impl CardInstance {
    /// Create a card instance.
    #[must_use]
    pub const fn new(instance: InstanceId, token: TokenId) -> Self {
        Self { instance, token }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_identity() {
        let a = CardInstance::new(InstanceId::new(1), TokenId::new(3));
        let b = CardInstance::new(InstanceId::new(2), TokenId::new(3));

        // Same vocabulary item, distinct cards.
        assert_eq!(a.token, b.token);
        assert_ne!(a.instance, b.instance);
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", InstanceId::new(42)), "Card#42");
    }

    #[test]
    fn test_serialization() {
        let card = CardInstance::new(InstanceId::new(9), TokenId::new(4));
        let json = serde_json::to_string(&card).unwrap();
        let back: CardInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
