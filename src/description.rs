//! Module with the DFA description types.
//! A description is the serialized form of a precomputed DFA as produced by an external grammar
//! compiler. The tokenizer treats it as already computed input data; it is validated when the
//! tokenizer is built and then compiled into a dense internal representation.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A named set of characters usable as a transition symbol, optionally negated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSet {
    /// The member characters of the set.
    pub chars: BTreeSet<char>,
    /// If true, the set matches every character that is *not* a member of `chars`.
    pub exclude: bool,
}

impl ClassSet {
    /// Check whether the set matches the given character, honoring exclusion semantics.
    #[inline]
    pub fn matches(&self, c: char) -> bool {
        self.chars.contains(&c) != self.exclude
    }
}

/// A precomputed DFA.
///
/// State names and class set ids are plain strings as emitted by the grammar compiler. Transition
/// symbols are either literal single characters or bracket-delimited class set ids, e.g. `"[0]"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfaDescription {
    /// The name of the entry state.
    pub entry: String,
    /// The transition table of each state, mapping a transition symbol to the destination state.
    pub states: BTreeMap<String, BTreeMap<String, String>>,
    /// The accepting states with their labels in declared priority order. The first label wins.
    /// The reserved label `"!"` marks a state as accepting but non-emitting.
    pub accepting: BTreeMap<String, Vec<String>>,
    /// The named class sets referenced by the transition tables.
    pub class_sets: BTreeMap<String, ClassSet>,
    /// The declared matching priority of the class sets. When more than one class set matches the
    /// same character from the same state, the first one in this order wins. May be left empty, in
    /// which case the priority is the lexicographic order of the class set ids.
    #[serde(default)]
    pub class_order: Vec<String>,
}
