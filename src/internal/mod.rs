/// Module that provides the compiled DFA and the transition resolver.
pub(crate) mod compiled_dfa;
pub(crate) use compiled_dfa::CompiledDfa;

/// Module that provides the rewindable cursor.
pub(crate) mod cursor;
pub(crate) use cursor::RewindableCursor;

/// Module for the several ID types.
mod ids;
pub(crate) use ids::{ClassSetID, ClassSetIDBase, LabelID, LabelIDBase, StateID, StateIDBase};
