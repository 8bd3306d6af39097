use rustc_hash::FxHashMap;

/// The reserved label for accepting states whose matches are discarded instead of emitted,
/// e.g. whitespace and comments.
pub const IGNORE_LABEL: &str = "!";

/// The grammar-specific token kind space.
///
/// It maps the label strings used in the DFA description to caller-defined token kinds and
/// carries the built-in end-of-input kind. The tokenizer itself is grammar-agnostic; the kind
/// type is opaque to it.
///
/// The reserved ignore label `"!"` must not be mapped; this is rejected when the tokenizer is
/// built.
#[derive(Debug, Clone)]
pub struct TokenKinds<T> {
    kinds: FxHashMap<String, T>,
    end_of_input: T,
}

impl<T: Clone> TokenKinds<T> {
    /// Create a new, empty token kind space with the given end-of-input kind.
    pub fn new(end_of_input: T) -> Self {
        Self {
            kinds: FxHashMap::default(),
            end_of_input,
        }
    }

    /// Add a label to kind mapping, builder style.
    pub fn with(mut self, label: &str, kind: T) -> Self {
        self.insert(label, kind);
        self
    }

    /// Add a label to kind mapping.
    pub fn insert(&mut self, label: &str, kind: T) {
        self.kinds.insert(label.to_string(), kind);
    }

    /// Look up the kind registered for the given label.
    pub fn get(&self, label: &str) -> Option<&T> {
        self.kinds.get(label)
    }

    /// Get the built-in end-of-input kind.
    pub fn end_of_input(&self) -> &T {
        &self.end_of_input
    }
}
