use std::sync::Arc;

use log::trace;

use crate::{
    internal::{compiled_dfa::Accept, CompiledDfa, RewindableCursor},
    source::CharSource,
    Result, TokenEntry, TokrError, TokrErrorKind,
};

/// A stream of tokens scanned from one character source.
///
/// Created with [`crate::Tokenizer::token_stream`]. Each call to [`TokenStream::next_token`]
/// performs one maximal-munch scan and returns the next token. The stream owns its input cursor
/// exclusively and must not be used from multiple threads at once; the compiled DFA behind it is
/// shared read-only with the tokenizer it was created from.
#[derive(Debug)]
pub struct TokenStream<T, S> {
    dfa: Arc<CompiledDfa>,
    /// The token kinds per accepting label, indexed by the compiled label id.
    label_kinds: Vec<T>,
    end_of_input: T,
    cursor: RewindableCursor<S>,
    /// Set once a scan has produced the end-of-input token. Used by the iterator to terminate.
    reached_end: bool,
    /// Set once the iterator has yielded its final item.
    finished: bool,
}

impl<T, S> TokenStream<T, S>
where
    T: Clone,
    S: CharSource,
{
    pub(crate) fn new(
        dfa: Arc<CompiledDfa>,
        label_kinds: Vec<T>,
        end_of_input: T,
        source: S,
    ) -> Self {
        Self {
            dfa,
            label_kinds,
            end_of_input,
            cursor: RewindableCursor::new(source),
            reached_end: false,
            finished: false,
        }
    }

    /// Scan the next token.
    ///
    /// The scan implements maximal munch: it keeps consuming characters as long as transitions
    /// exist and records the most recent accepting state. When the automaton dead-ends or the
    /// source is exhausted, the cursor is rewound to the end of the recorded match and the match
    /// is returned; lookahead characters consumed past it are re-scanned by the next call.
    ///
    /// Runs of characters accepted with the reserved ignore label are discarded transparently;
    /// they never produce a token.
    ///
    /// At the end of the input the end-of-input token is returned, on this and every subsequent
    /// call. A recorded match directly before the end of the input still wins over the
    /// end-of-input token.
    ///
    /// # Errors
    ///
    /// Returns [`TokrErrorKind::NoMatch`] if characters were consumed without ever reaching an
    /// accepting state, i.e. the token rules do not cover the input, and
    /// [`TokrErrorKind::SourceContractViolation`] if the source delivers an invalid unit.
    pub fn next_token(&mut self) -> Result<TokenEntry<T>> {
        let mut state = self.dfa.entry();
        let mut lexeme = String::new();
        let mut last_accepting: Option<(T, String, usize)> = None;
        let mut at_end = false;

        loop {
            let Some(c) = self.cursor.read_next()? else {
                at_end = true;
                break;
            };
            lexeme.push(c);

            let Some(next) = self.dfa.next_state(state, c) else {
                break;
            };
            state = next;

            match self.dfa.accept(state) {
                Accept::Ignore => {
                    trace!("Ignoring run '{}'", lexeme.escape_default());
                    state = self.dfa.entry();
                    lexeme.clear();
                    last_accepting = None;
                }
                Accept::Label(label) => {
                    // A later, longer match overwrites an earlier one.
                    last_accepting = Some((
                        self.label_kinds[label].clone(),
                        lexeme.clone(),
                        self.cursor.position(),
                    ));
                }
                Accept::No => {}
            }
        }

        if let Some((kind, lexeme, position)) = last_accepting {
            // Discard the lookahead consumed past the accepted match.
            self.cursor.rewind_to(position);
            trace!("Matched '{}'", lexeme.escape_default());
            return Ok(TokenEntry::new(kind, lexeme));
        }
        if at_end {
            self.reached_end = true;
            return Ok(TokenEntry::new(self.end_of_input.clone(), lexeme));
        }
        Err(TokrError::new(TokrErrorKind::NoMatch(lexeme)))
    }
}

impl<T, S> Iterator for TokenStream<T, S>
where
    T: Clone,
    S: CharSource,
{
    type Item = Result<TokenEntry<T>>;

    /// Yields every token up to and including the first end-of-input token, then `None`.
    /// An error is yielded once and ends the iteration as well.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) => {
                if self.reached_end {
                    self.finished = true;
                }
                Some(Ok(token))
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use crate::{DfaDescription, TokenKinds, Tokenizer, TokenizerBuilder, TokrErrorKind};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        Word,
        Short,
        Eoi,
    }

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// "a" is a SHORT token, "ab" is a WORD token, blanks are ignored.
    static DESCRIPTION: LazyLock<DfaDescription> = LazyLock::new(|| {
        serde_json::from_str(
            r##"{
                "entry": "1",
                "states": {
                    "1": { "a": "2", "[ws]": "4" },
                    "2": { "b": "3" },
                    "3": {},
                    "4": {}
                },
                "accepting": { "2": ["SHORT"], "3": ["WORD"], "4": ["!"] },
                "class_sets": {
                    "[ws]": { "chars": [" "], "exclude": false }
                }
            }"##,
        )
        .unwrap()
    });

    fn tokenizer() -> Tokenizer<Kind> {
        TokenizerBuilder::new()
            .description(DESCRIPTION.clone())
            .token_kinds(
                TokenKinds::new(Kind::Eoi)
                    .with("WORD", Kind::Word)
                    .with("SHORT", Kind::Short),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_maximal_munch() {
        init();
        let mut stream = tokenizer().token_stream("ab".chars());
        let token = stream.next_token().unwrap();
        assert_eq!(token.kind(), &Kind::Word);
        assert_eq!(token.lexeme(), "ab");
        assert_eq!(stream.next_token().unwrap().kind(), &Kind::Eoi);
    }

    #[test]
    fn test_backtrack_to_shorter_match() {
        init();
        // 'c' dead-ends the search for "ab"; the scan falls back to the recorded "a" match.
        let mut stream = tokenizer().token_stream("ac".chars());
        let token = stream.next_token().unwrap();
        assert_eq!(token.kind(), &Kind::Short);
        assert_eq!(token.lexeme(), "a");

        // The lookahead 'c' is neither lost nor double counted: the next scan resumes there
        // and fails on it, because no rule covers 'c'.
        let err = stream.next_token().unwrap_err();
        assert!(matches!(err.kind(), TokrErrorKind::NoMatch(lexeme) if lexeme.as_str() == "c"));
    }

    #[test]
    fn test_backtrack_resumes_at_lookahead() {
        init();
        // "aab": scanning "aa" dead-ends at the second 'a', backtracks to the first "a" match,
        // then "ab" is matched as one WORD.
        let mut stream = tokenizer().token_stream("aab".chars());
        let first = stream.next_token().unwrap();
        assert_eq!(first.kind(), &Kind::Short);
        assert_eq!(first.lexeme(), "a");
        let second = stream.next_token().unwrap();
        assert_eq!(second.kind(), &Kind::Word);
        assert_eq!(second.lexeme(), "ab");
        assert_eq!(stream.next_token().unwrap().kind(), &Kind::Eoi);
    }

    #[test]
    fn test_ignored_runs_are_transparent() {
        init();
        let mut stream = tokenizer().token_stream("ab  a ab".chars());
        let kinds: Vec<Kind> = std::iter::from_fn(|| Some(*stream.next_token().unwrap().kind()))
            .take(4)
            .collect();
        assert_eq!(kinds, vec![Kind::Word, Kind::Short, Kind::Word, Kind::Eoi]);
    }

    #[test]
    fn test_match_before_end_of_input_wins() {
        init();
        let mut stream = tokenizer().token_stream("a".chars());
        let token = stream.next_token().unwrap();
        assert_eq!(token.kind(), &Kind::Short);
        assert_eq!(token.lexeme(), "a");
        assert_eq!(stream.next_token().unwrap().kind(), &Kind::Eoi);
    }

    #[test]
    fn test_end_of_input_is_idempotent() {
        init();
        let mut stream = tokenizer().token_stream("".chars());
        for _ in 0..3 {
            let token = stream.next_token().unwrap();
            assert_eq!(token.kind(), &Kind::Eoi);
            assert_eq!(token.lexeme(), "");
        }
    }

    #[test]
    fn test_ignored_run_at_end_of_input() {
        init();
        // The trailing blank is accepted with the ignore label and resets the scan; the same
        // call must then observe the end of the source and produce the end-of-input token.
        let mut stream = tokenizer().token_stream("ab ".chars());
        assert_eq!(stream.next_token().unwrap().kind(), &Kind::Word);
        let token = stream.next_token().unwrap();
        assert_eq!(token.kind(), &Kind::Eoi);
        assert_eq!(token.lexeme(), "");
    }

    #[test]
    fn test_no_match_carries_partial_lexeme() {
        init();
        let mut stream = tokenizer().token_stream("z".chars());
        let err = stream.next_token().unwrap_err();
        assert!(matches!(err.kind(), TokrErrorKind::NoMatch(lexeme) if lexeme.as_str() == "z"));
    }

    #[test]
    fn test_iterator_terminates_after_end_of_input() {
        init();
        let stream = tokenizer().token_stream("ab a".chars());
        let tokens: Vec<TokenEntry<Kind>> = stream.collect::<Result<_>>().unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].lexeme(), "ab");
        assert_eq!(tokens[1].lexeme(), "a");
        assert_eq!(tokens[2].kind(), &Kind::Eoi);
    }

    #[test]
    fn test_iterator_yields_an_error_once() {
        init();
        let mut stream = tokenizer().token_stream("z".chars());
        assert!(stream.next().unwrap().is_err());
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_shared_model_drives_independent_streams() {
        init();
        let tokenizer = tokenizer();
        let mut first = tokenizer.token_stream("ab".chars());
        let mut second = tokenizer.token_stream("a".chars());
        assert_eq!(first.next_token().unwrap().kind(), &Kind::Word);
        assert_eq!(second.next_token().unwrap().kind(), &Kind::Short);
    }
}
