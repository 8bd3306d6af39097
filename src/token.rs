use serde::{Deserialize, Serialize};

/// A token produced by one scan.
/// It carries the caller-defined token kind and the lexeme, i.e. the character sequence that was
/// consumed to produce the token.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct TokenEntry<T> {
    /// The kind of the token.
    kind: T,
    /// The matched character sequence.
    lexeme: String,
}

impl<T> TokenEntry<T> {
    /// Create a new token entry.
    pub fn new(kind: T, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Get the kind of the token.
    #[inline]
    pub fn kind(&self) -> &T {
        &self.kind
    }

    /// Get the lexeme of the token.
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Get the length of the lexeme in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.lexeme.chars().count()
    }

    /// Check if the lexeme is empty. This is the case for the end-of-input token.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }

    /// Decompose the token entry into its kind and lexeme.
    pub fn into_parts(self) -> (T, String) {
        (self.kind, self.lexeme)
    }
}
