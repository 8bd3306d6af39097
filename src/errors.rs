use thiserror::Error;

/// The result type for the `tokr` crate.
pub type Result<T> = std::result::Result<T, TokrError>;

/// The error type for the `tokr` crate.
#[derive(Error, Debug)]
pub struct TokrError {
    /// The source of the error.
    pub source: Box<TokrErrorKind>,
}

impl TokrError {
    /// Create a new `TokrError`.
    pub fn new(kind: TokrErrorKind) -> Self {
        TokrError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    pub fn kind(&self) -> &TokrErrorKind {
        &self.source
    }
}

impl std::fmt::Display for TokrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum TokrErrorKind {
    /// The character source handed out a unit that is not exactly one character.
    /// This is an input contract violation and aborts the current scan.
    #[error("source unit '{0}' is not a single character")]
    SourceContractViolation(String),

    /// The automaton has no way to consume the current character sequence. Carries the partial
    /// lexeme read since the last reset. This signals that the token rules do not cover all
    /// character sequences occurring in the input.
    #[error("no token found for input starting with '{0}'")]
    NoMatch(String),

    /// The tokenizer builder was finalized before all required inputs were set.
    #[error("tokenizer builder is incomplete: missing {0}")]
    IncompleteBuilder(&'static str),

    /// The DFA description is malformed.
    #[error(transparent)]
    Description(DescriptionError),
}

impl From<DescriptionError> for TokrError {
    fn from(error: DescriptionError) -> Self {
        TokrError::new(TokrErrorKind::Description(error))
    }
}

/// An error type for malformed DFA descriptions.
/// All of these are detected when the tokenizer is built, never during a scan.
#[derive(Error, Debug)]
pub enum DescriptionError {
    /// The entry state is not a key of the state table.
    #[error("entry state '{0}' is not defined in the state table")]
    UnknownEntryState(String),

    /// A transition points to a state that is not a key of the state table.
    #[error("state '{0}' has a transition to undefined state '{1}'")]
    UnknownTargetState(String, String),

    /// An accepting state is not a key of the state table.
    #[error("accepting state '{0}' is not defined in the state table")]
    UnknownAcceptingState(String),

    /// A transition symbol references a class set that is not defined.
    #[error("state '{0}' references undefined class set '{1}'")]
    UnknownClassSet(String, String),

    /// A transition symbol is neither a single character nor a bracket-delimited class set id.
    #[error("state '{0}' has invalid transition symbol '{1}'")]
    InvalidSymbol(String, String),

    /// An accepting state has an empty label list.
    #[error("accepting state '{0}' has an empty label list")]
    EmptyLabelList(String),

    /// An accepting label has no registered token kind.
    #[error("no token kind registered for label '{0}'")]
    UnknownLabel(String),

    /// The reserved ignore label was registered as a token kind.
    #[error("the label '!' is reserved for ignored matches and cannot have a token kind")]
    ReservedLabel,

    /// The class order is not a permutation of the class set ids.
    #[error("class order must list each class set id exactly once, offending id '{0}'")]
    MalformedClassOrder(String),
}
