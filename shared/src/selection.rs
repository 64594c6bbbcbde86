//! Per-order-line selection state machine
//!
//! Each line item on an order form walks one of the catalog hierarchies
//! level by level (e.g., Brand → Horsepower → Series → Type). A
//! `SelectionState` tracks that walk for a single row: choices at earlier
//! levels gate the options at later ones, and re-choosing an earlier level
//! invalidates everything downstream.
//!
//! States are independent across rows; nothing here touches shared mutable
//! data, and the catalog tree is only ever borrowed immutably.

use std::collections::BTreeSet;

use crate::models::CatalogTree;

/// Where a row currently is in its walk through the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStatus {
    Empty,
    /// Levels 1..k are chosen, with k strictly below the tree depth
    PartiallySelected(usize),
    Resolved,
}

/// Outcome of a `choose` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooseOutcome {
    Chosen,
    /// The level is out of range or an earlier level is still unset;
    /// options there are not knowable yet, so the call is ignored
    LevelNotReachable,
    /// The value is not among the options the tree offers at that level
    ValueNotOffered,
}

/// Selection progress for one order-line row.
///
/// Values are only ever accepted out of the tree's own options, so a state
/// whose chosen path reaches full depth always resolves to a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    depth: usize,
    chosen: Vec<String>,
}

impl SelectionState {
    /// Empty state for a row selecting from `tree`.
    pub fn for_tree<L>(tree: &CatalogTree<L>) -> Self {
        Self {
            depth: tree.depth(),
            chosen: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The values chosen so far, in level order.
    pub fn chosen(&self) -> &[String] {
        &self.chosen
    }

    pub fn status(&self) -> SelectionStatus {
        match self.chosen.len() {
            0 => SelectionStatus::Empty,
            n if n == self.depth => SelectionStatus::Resolved,
            n => SelectionStatus::PartiallySelected(n),
        }
    }

    /// Choose `value` at 1-based `level`.
    ///
    /// Accepting a choice at level k clears any previously chosen values at
    /// levels above k. A level may only be set when all earlier levels are
    /// set, and the value must be one of the tree's options at that level;
    /// anything else is rejected without modifying the state.
    pub fn choose<L>(
        &mut self,
        tree: &CatalogTree<L>,
        level: usize,
        value: &str,
    ) -> ChooseOutcome {
        if level == 0 || level > self.depth || level > self.chosen.len() + 1 {
            return ChooseOutcome::LevelNotReachable;
        }
        let prefix = &self.chosen[..level - 1];
        if !tree.options_at(prefix).contains(value) {
            return ChooseOutcome::ValueNotOffered;
        }
        self.chosen.truncate(level - 1);
        self.chosen.push(value.to_string());
        ChooseOutcome::Chosen
    }

    /// Clear the choice at 1-based `level` and everything after it. A level
    /// past the current progress is a no-op.
    pub fn clear_from(&mut self, level: usize) {
        self.chosen.truncate(level.saturating_sub(1));
    }

    /// Reset the row to the empty state.
    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    /// Options for the next unset level, or the empty set once resolved.
    pub fn next_options<L>(&self, tree: &CatalogTree<L>) -> BTreeSet<String> {
        if self.chosen.len() == self.depth {
            return BTreeSet::new();
        }
        tree.options_at(&self.chosen)
    }

    /// The resolved leaf record, present only in the `Resolved` state.
    pub fn leaf<'t, L>(&self, tree: &'t CatalogTree<L>) -> Option<&'t L> {
        tree.resolve_leaf(&self.chosen)
    }
}
