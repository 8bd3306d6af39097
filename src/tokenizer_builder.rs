use std::sync::Arc;

use crate::{
    internal::CompiledDfa, DescriptionError, DfaDescription, Result, TokenKinds, Tokenizer,
    TokrError, TokrErrorKind, IGNORE_LABEL,
};

/// A builder for creating a tokenizer.
///
/// It takes the DFA description and the grammar's token kind space and validates both when the
/// tokenizer is built: all cross references of the description are checked and every accepting
/// label must have a registered token kind. Malformed input is rejected here, never deep inside
/// a scan.
#[derive(Debug)]
pub struct TokenizerBuilder<T> {
    description: Option<DfaDescription>,
    token_kinds: Option<TokenKinds<T>>,
}

impl<T: Clone> TokenizerBuilder<T> {
    /// Creates a new tokenizer builder.
    pub fn new() -> Self {
        Self {
            description: None,
            token_kinds: None,
        }
    }

    /// Sets the DFA description to drive.
    pub fn description(mut self, description: DfaDescription) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the grammar's token kind space.
    pub fn token_kinds(mut self, token_kinds: TokenKinds<T>) -> Self {
        self.token_kinds = Some(token_kinds);
        self
    }

    /// Builds the tokenizer from the tokenizer builder.
    pub fn build(self) -> Result<Tokenizer<T>> {
        let description = self.description.ok_or_else(|| {
            TokrError::new(TokrErrorKind::IncompleteBuilder("the DFA description"))
        })?;
        let token_kinds = self.token_kinds.ok_or_else(|| {
            TokrError::new(TokrErrorKind::IncompleteBuilder("the token kind space"))
        })?;
        if token_kinds.get(IGNORE_LABEL).is_some() {
            return Err(DescriptionError::ReservedLabel.into());
        }

        let dfa = CompiledDfa::try_from_description(&description)?;
        let label_kinds = dfa
            .labels()
            .iter()
            .map(|label| {
                token_kinds
                    .get(label)
                    .cloned()
                    .ok_or_else(|| DescriptionError::UnknownLabel(label.clone()).into())
            })
            .collect::<Result<Vec<T>>>()?;

        Ok(Tokenizer {
            dfa: Arc::new(dfa),
            label_kinds,
            end_of_input: token_kinds.end_of_input().clone(),
        })
    }
}

impl<T: Clone> Default for TokenizerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
