#![forbid(missing_docs)]
//! # `tokr`
//! The `tokr` crate is a tokenizer runtime. It executes a precomputed deterministic finite
//! automaton (DFA) over a character stream and produces tokens, implementing maximal-munch
//! (longest-match) lexical analysis with backtracking to the last accepting match, non-emitting
//! ("ignored") token classes, and character class set transitions with inclusion and exclusion
//! semantics.
//!
//! The crate does not compile grammars or regular expressions. The DFA arrives as an already
//! computed [`DfaDescription`], typically deserialized from the JSON emitted by an external
//! lexer generator, together with a grammar-specific [`TokenKinds`] mapping from accepting
//! labels to caller-defined token kinds. The runtime itself is grammar-agnostic and reusable
//! across DFAs.
//!
//! Input is pulled one character at a time from a [`CharSource`]; every character iterator is a
//! valid source. Sources are drain-once, the runtime keeps its own replay buffer to re-scan
//! lookahead characters after a backtrack.
//!
//! # Example
//! ```rust
//! use tokr::{DfaDescription, TokenKinds, TokenizerBuilder};
//!
//! // Words over 'a'..'c', blanks are matched but never emitted.
//! const DESCRIPTION: &str = r##"{
//!     "entry": "1",
//!     "states": {
//!         "1": { "[letter]": "2", " ": "3" },
//!         "2": { "[letter]": "2" },
//!         "3": {}
//!     },
//!     "accepting": { "2": ["WORD"], "3": ["!"] },
//!     "class_sets": {
//!         "[letter]": { "chars": ["a", "b", "c"], "exclude": false }
//!     }
//! }"##;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Kind {
//!     Word,
//!     EndOfInput,
//! }
//!
//! fn main() {
//!     let description: DfaDescription =
//!         serde_json::from_str(DESCRIPTION).expect("description error");
//!     let tokenizer = TokenizerBuilder::new()
//!         .description(description)
//!         .token_kinds(TokenKinds::new(Kind::EndOfInput).with("WORD", Kind::Word))
//!         .build()
//!         .expect("TokenizerBuilder error");
//!
//!     let mut tokens = tokenizer.token_stream("abc ab".chars());
//!     let token = tokens.next_token().expect("scan error");
//!     assert_eq!((token.kind(), token.lexeme()), (&Kind::Word, "abc"));
//!     let token = tokens.next_token().expect("scan error");
//!     assert_eq!((token.kind(), token.lexeme()), (&Kind::Word, "ab"));
//!     let token = tokens.next_token().expect("scan error");
//!     assert_eq!(token.kind(), &Kind::EndOfInput);
//! }
//! ```

/// Module with the DFA description types.
mod description;
pub use description::{ClassSet, DfaDescription};

/// Module with error definitions.
mod errors;
pub use errors::{DescriptionError, Result, TokrError, TokrErrorKind};

/// The module with internal implementation details.
mod internal;

/// Module with the character source abstraction.
mod source;
pub use source::{CharSource, StrUnitSource};

/// Module that provides the TokenEntry type.
mod token;
pub use token::TokenEntry;

/// Module that provides the token kind space.
mod token_kinds;
pub use token_kinds::{TokenKinds, IGNORE_LABEL};

/// The module with the token stream, i.e. the scanning engine.
mod token_stream;
pub use token_stream::TokenStream;

/// The module with the tokenizer.
mod tokenizer;
pub use tokenizer::Tokenizer;

/// The module with the tokenizer builder.
mod tokenizer_builder;
pub use tokenizer_builder::TokenizerBuilder;
