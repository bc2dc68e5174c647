// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Item, ItemId};

/// The part of a backlog that takes part in at least one dependency relation.
///
/// Borrowed from the caller's item slice and discarded after one layout pass.
#[derive(Debug, Clone)]
pub struct DependencyGraph<'a> {
    nodes: Vec<&'a Item>,
    node_ids: BTreeSet<&'a str>,
    relevant_ids: BTreeSet<&'a str>,
    id_map: BTreeMap<&'a str, &'a Item>,
}

impl<'a> DependencyGraph<'a> {
    /// Relevant items, in input order.
    pub fn nodes(&self) -> &[&'a Item] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` is a dependency source or target anywhere in the collection.
    ///
    /// Dangling ids (referenced, but absent from the collection) are relevant without being nodes.
    pub fn is_relevant(&self, id: &str) -> bool {
        self.relevant_ids.contains(id)
    }

    /// Whether `id` resolves to one of [`Self::nodes`].
    pub fn contains_node(&self, id: &str) -> bool {
        self.node_ids.contains(id)
    }

    /// Looks up any item of the full collection, relevant or not.
    pub fn item(&self, id: &str) -> Option<&'a Item> {
        self.id_map.get(id).copied()
    }

    /// Dependencies of `item` that resolve to nodes of this graph.
    pub fn in_graph_deps<'b>(&'b self, item: &'b Item) -> impl Iterator<Item = &'b ItemId> + 'b {
        item.deps().iter().filter(move |dep| self.contains_node(dep.as_str()))
    }
}

/// Filters `items` down to the subgraph shown by the dependency view.
///
/// An item is relevant when it has dependencies or when another item depends on it.
pub fn extract_graph(items: &[Item]) -> DependencyGraph<'_> {
    let mut relevant_ids = BTreeSet::<&str>::new();
    for item in items {
        if item.has_deps() {
            relevant_ids.insert(item.id().as_str());
        }
        relevant_ids.extend(item.deps().iter().map(ItemId::as_str));
    }

    let id_map = items.iter().map(|item| (item.id().as_str(), item)).collect::<BTreeMap<_, _>>();

    let nodes = items
        .iter()
        .filter(|item| relevant_ids.contains(item.id().as_str()))
        .collect::<Vec<_>>();
    let node_ids = nodes.iter().map(|item| item.id().as_str()).collect::<BTreeSet<_>>();

    DependencyGraph { nodes, node_ids, relevant_ids, id_map }
}
