//! Token registry for definition lookup.
//!
//! The `TokenRegistry` stores all token definitions for a session and
//! provides fast lookup by `TokenId` and by surface form. It is
//! read-only to everything above the catalog: registration happens once
//! at session setup.

use rustc_hash::FxHashMap;

use super::token::{TokenDef, TokenId, WordClass};

/// Registry of token definitions.
///
/// ## Example
///
/// ```
/// use jupai::catalog::{TokenRegistry, TokenDef, WordClass};
///
/// let mut registry = TokenRegistry::new();
/// let id = registry.register(TokenDef::new("老师", "lǎo shī", "teacher", WordClass::Noun));
///
/// assert_eq!(registry.get(id).unwrap().surface, "老师");
/// assert_eq!(registry.by_surface("老师").unwrap().id, id);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TokenRegistry {
    tokens: FxHashMap<TokenId, TokenDef>,
    surface_index: FxHashMap<String, TokenId>,
    next_id: u32,
}

impl TokenRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, assigning it the next free ID.
    ///
    /// Panics if a token with the same surface form already exists -
    /// surface forms double as stable lookup keys for shelf and lesson
    /// data, so they must be unique.
    pub fn register(&mut self, mut def: TokenDef) -> TokenId {
        if self.surface_index.contains_key(&def.surface) {
            panic!("Token with surface {:?} already registered", def.surface);
        }
        let id = TokenId::new(self.next_id);
        self.next_id += 1;
        def.id = id;
        self.surface_index.insert(def.surface.clone(), id);
        self.tokens.insert(id, def);
        id
    }

    /// Get a definition by ID.
    #[must_use]
    pub fn get(&self, id: TokenId) -> Option<&TokenDef> {
        self.tokens.get(&id)
    }

    /// Get a definition by ID, panicking if not found.
    ///
    /// Use when the ID is known to come from this registry.
    #[must_use]
    pub fn get_unchecked(&self, id: TokenId) -> &TokenDef {
        self.tokens.get(&id).expect("Token not found in registry")
    }

    /// Look up a definition by its surface form.
    #[must_use]
    pub fn by_surface(&self, surface: &str) -> Option<&TokenDef> {
        self.surface_index
            .get(surface)
            .and_then(|id| self.tokens.get(id))
    }

    /// Check if a token ID is registered.
    #[must_use]
    pub fn contains(&self, id: TokenId) -> bool {
        self.tokens.contains_key(&id)
    }

    /// Number of registered tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &TokenDef> {
        self.tokens.values()
    }

    /// Find definitions by word class.
    pub fn find_by_class(&self, class: WordClass) -> impl Iterator<Item = &TokenDef> {
        self.tokens.values().filter(move |t| t.class == class)
    }

    /// Find definitions matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &TokenDef>
    where
        F: Fn(&TokenDef) -> bool,
    {
        self.tokens.values().filter(move |t| predicate(t))
    }
}
