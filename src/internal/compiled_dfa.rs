//! Module with the compiled form of a DFA description.
//! The compiled DFA replaces the string-keyed tables of the description with dense, numeric ids
//! and pre-resolves the class set priority order. It is immutable after construction and shared
//! read-only between all token streams created from one tokenizer.

use log::trace;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;

use crate::{DescriptionError, DfaDescription, Result, IGNORE_LABEL};

use super::{ClassSetID, ClassSetIDBase, LabelID, LabelIDBase, StateID, StateIDBase};

/// The acceptance of a compiled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Accept {
    /// Not an accepting state.
    No,
    /// Accepting but non-emitting. Entering this state resets the scan.
    Ignore,
    /// Accepting with the given label.
    Label(LabelID),
}

/// A compiled DFA state.
#[derive(Debug)]
struct CompiledState {
    /// Direct literal transitions. They always take priority over class set transitions.
    literals: FxHashMap<char, StateID>,
    /// Class set transitions in declared priority order. The first matching class set wins.
    classes: Vec<(ClassSetID, StateID)>,
    /// The acceptance of the state.
    accept: Accept,
}

/// A compiled class set.
#[derive(Debug)]
struct CompiledClassSet {
    chars: FxHashSet<char>,
    exclude: bool,
}

impl CompiledClassSet {
    #[inline]
    fn matches(&self, c: char) -> bool {
        self.chars.contains(&c) != self.exclude
    }
}

/// The compiled DFA.
#[derive(Debug)]
pub(crate) struct CompiledDfa {
    /// The entry state.
    entry: StateID,
    /// The states of the DFA, indexed by state id.
    states: Vec<CompiledState>,
    /// The class sets, indexed by class set id, i.e. in declared priority order.
    class_sets: Vec<CompiledClassSet>,
    /// The accepting labels. `Accept::Label` values index into this vector.
    labels: Vec<String>,
}

impl CompiledDfa {
    /// Compile a DFA description, validating all of its cross references.
    /// Every malformed description is rejected here, before the first scan.
    pub(crate) fn try_from_description(description: &DfaDescription) -> Result<Self> {
        let state_ids: BTreeMap<&str, StateID> = description
            .states
            .keys()
            .enumerate()
            .map(|(i, name)| (name.as_str(), StateID::new(i as StateIDBase)))
            .collect();

        let entry = *state_ids
            .get(description.entry.as_str())
            .ok_or_else(|| DescriptionError::UnknownEntryState(description.entry.clone()))?;

        let class_ids = Self::resolve_class_order(description)?;

        // Resolve the acceptance of each state. Only the first label of a list is relevant, the
        // generator emits the labels in declared token priority order.
        let mut labels: Vec<String> = Vec::new();
        let mut accepts: Vec<Accept> = vec![Accept::No; description.states.len()];
        for (state_name, state_labels) in &description.accepting {
            let state_id = *state_ids
                .get(state_name.as_str())
                .ok_or_else(|| DescriptionError::UnknownAcceptingState(state_name.clone()))?;
            let label = state_labels
                .first()
                .ok_or_else(|| DescriptionError::EmptyLabelList(state_name.clone()))?;
            accepts[state_id.as_usize()] = if label.as_str() == IGNORE_LABEL {
                Accept::Ignore
            } else {
                let label_id = match labels.iter().position(|l| l == label) {
                    Some(label_id) => label_id,
                    None => {
                        labels.push(label.clone());
                        labels.len() - 1
                    }
                };
                Accept::Label(LabelID::new(label_id as LabelIDBase))
            };
        }

        let mut states = Vec::with_capacity(description.states.len());
        for (state_name, transition_table) in &description.states {
            let state_id = state_ids[state_name.as_str()];
            let mut literals = FxHashMap::default();
            let mut classes = Vec::new();
            for (symbol, target_name) in transition_table {
                let target = *state_ids.get(target_name.as_str()).ok_or_else(|| {
                    DescriptionError::UnknownTargetState(state_name.clone(), target_name.clone())
                })?;
                if Self::is_class_symbol(symbol) {
                    let class_id = *class_ids.get(symbol.as_str()).ok_or_else(|| {
                        DescriptionError::UnknownClassSet(state_name.clone(), symbol.clone())
                    })?;
                    classes.push((class_id, target));
                } else {
                    let mut symbol_chars = symbol.chars();
                    match (symbol_chars.next(), symbol_chars.next()) {
                        (Some(c), None) => {
                            literals.insert(c, target);
                        }
                        _ => {
                            return Err(DescriptionError::InvalidSymbol(
                                state_name.clone(),
                                symbol.clone(),
                            )
                            .into())
                        }
                    }
                }
            }
            // The per-state table is keyed by symbol strings; restore the declared matching
            // priority of the class sets.
            classes.sort_by_key(|(class_id, _)| *class_id);
            states.push(CompiledState {
                literals,
                classes,
                accept: accepts[state_id.as_usize()],
            });
        }

        let mut class_sets = vec![];
        let mut ordered: Vec<(&str, ClassSetID)> = class_ids
            .iter()
            .map(|(name, id)| (*name, *id))
            .collect::<Vec<_>>();
        ordered.sort_by_key(|(_, id)| *id);
        for (name, _) in ordered {
            let class_set = &description.class_sets[name];
            class_sets.push(CompiledClassSet {
                chars: class_set.chars.iter().copied().collect(),
                exclude: class_set.exclude,
            });
        }

        trace!(
            "Compiled DFA: {} states, {} class sets, {} labels",
            states.len(),
            class_sets.len(),
            labels.len()
        );

        Ok(CompiledDfa {
            entry,
            states,
            class_sets,
            labels,
        })
    }

    /// Get the entry state.
    #[inline]
    pub(crate) fn entry(&self) -> StateID {
        self.entry
    }

    /// Get the acceptance of the given state.
    #[inline]
    pub(crate) fn accept(&self, state: StateID) -> Accept {
        self.states[state].accept
    }

    /// Get the accepting labels of the DFA in label id order.
    pub(crate) fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The transition resolver.
    /// Returns the destination state for the given state and character, or `None` if no
    /// transition exists. Direct literal transitions always take priority; otherwise the class
    /// set transitions of the state are consulted in declared priority order and the first
    /// matching class set wins. A pure lookup without side effects.
    pub(crate) fn next_state(&self, state: StateID, c: char) -> Option<StateID> {
        let state = &self.states[state];
        if let Some(next) = state.literals.get(&c) {
            return Some(*next);
        }
        state
            .classes
            .iter()
            .find_map(|(class_id, next)| self.class_sets[*class_id].matches(c).then_some(*next))
    }

    /// Determine the class set priority order and assign the class set ids accordingly.
    /// An explicitly declared `class_order` must be a permutation of the class set ids. Without
    /// one, the lexicographic order of the ids is used, which is equally deterministic.
    fn resolve_class_order(
        description: &DfaDescription,
    ) -> Result<BTreeMap<&str, ClassSetID>> {
        let order: Vec<&str> = if description.class_order.is_empty() {
            description.class_sets.keys().map(|id| id.as_str()).collect()
        } else {
            if description.class_order.len() != description.class_sets.len() {
                return Err(DescriptionError::MalformedClassOrder(
                    description.class_order.join(", "),
                )
                .into());
            }
            let mut seen = FxHashSet::default();
            for id in &description.class_order {
                if !description.class_sets.contains_key(id) || !seen.insert(id.as_str()) {
                    return Err(DescriptionError::MalformedClassOrder(id.clone()).into());
                }
            }
            description.class_order.iter().map(|id| id.as_str()).collect()
        };
        Ok(order
            .into_iter()
            .enumerate()
            .map(|(i, id)| (id, ClassSetID::new(i as ClassSetIDBase)))
            .collect())
    }

    /// Check if the given transition symbol denotes a class set reference.
    fn is_class_symbol(symbol: &str) -> bool {
        symbol.len() >= 2 && symbol.starts_with('[') && symbol.ends_with(']')
    }
}
