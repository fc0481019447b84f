//! Ordered rule tables
//!
//! A rule is a predicate over the patient context plus the items it
//! contributes. Tables are evaluated top to bottom; contributed items are
//! appended to a running list that keeps only the first occurrence of each.

use tracing::trace;

use crate::types::{ClinicalInputs, GeneSelection, NoteFlags};

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub inputs: &'a ClinicalInputs,
    pub genes: &'a GeneSelection,
    pub flags: &'a NoteFlags,
}

impl<'a> RuleContext<'a> {
    pub fn new(inputs: &'a ClinicalInputs, genes: &'a GeneSelection, flags: &'a NoteFlags) -> Self {
        Self {
            inputs,
            genes,
            flags,
        }
    }
}

/// A single (condition, items) entry.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&RuleContext<'_>) -> bool,
    pub items: &'static [&'static str],
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// Insertion-ordered list that drops repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedUnique {
    items: Vec<String>,
}

impl OrderedUnique {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unless already present. Returns whether it was added.
    pub fn push(&mut self, item: &str) -> bool {
        if self.items.iter().any(|existing| existing == item) {
            return false;
        }
        self.items.push(item.to_string());
        true
    }

    pub fn extend<'s>(&mut self, items: impl IntoIterator<Item = &'s str>) {
        for item in items {
            self.push(item);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// Run a rule table against a context.
pub fn evaluate(rules: &[Rule], ctx: &RuleContext<'_>) -> Vec<String> {
    let mut out = OrderedUnique::new();
    for rule in rules {
        if (rule.applies)(ctx) {
            trace!(rule = rule.name, items = rule.items.len(), "Rule matched");
            out.extend(rule.items.iter().copied());
        }
    }
    out.into_vec()
}
