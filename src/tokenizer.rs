use std::sync::Arc;

use crate::{internal::CompiledDfa, source::CharSource, TokenStream};

/// A tokenizer.
///
/// It holds the compiled DFA and the grammar's token kinds and acts as a factory for token
/// streams. The compiled DFA is immutable and shared read-only, so one tokenizer can drive any
/// number of independent inputs, also concurrently from different threads; create one
/// [`TokenStream`] per input.
///
/// Use the [`crate::TokenizerBuilder`] to create a tokenizer from a DFA description.
#[derive(Debug, Clone)]
pub struct Tokenizer<T> {
    pub(crate) dfa: Arc<CompiledDfa>,
    /// The token kinds per accepting label, indexed by the compiled label id.
    pub(crate) label_kinds: Vec<T>,
    /// The built-in end-of-input kind.
    pub(crate) end_of_input: T,
}

impl<T: Clone> Tokenizer<T> {
    /// Create a token stream over the given character source.
    /// The stream owns the source exclusively and produces one token per call to
    /// [`TokenStream::next_token`].
    pub fn token_stream<S: CharSource>(&self, source: S) -> TokenStream<T, S> {
        TokenStream::new(
            self.dfa.clone(),
            self.label_kinds.clone(),
            self.end_of_input.clone(),
            source,
        )
    }
}
