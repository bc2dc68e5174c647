// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Item, ItemId};

use super::extract::DependencyGraph;

/// Default cap on layering scans.
pub const DEFAULT_MAX_LAYER_PASSES: usize = 20;

/// How a layer came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Every node's in-graph dependencies sit in earlier layers.
    Ready,
    /// Nothing was ready, so every remaining node was flushed in at once (cycle).
    ForceFlushed,
    /// The scan cap ran out; leftovers were dumped into a trailing layer.
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layering {
    layers: Vec<Vec<ItemId>>,
    kinds: Vec<LayerKind>,
    node_layers: BTreeMap<ItemId, usize>,
}

impl Layering {
    pub fn layers(&self) -> &[Vec<ItemId>] {
        &self.layers
    }

    pub fn kind(&self, layer: usize) -> Option<LayerKind> {
        self.kinds.get(layer).copied()
    }

    pub fn layer_of(&self, id: &str) -> Option<usize> {
        self.node_layers.get(id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.node_layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Whether any layer was produced by the cycle fallback or the scan cap.
    pub fn has_forced_layers(&self) -> bool {
        self.kinds.iter().any(|kind| *kind != LayerKind::Ready)
    }

    fn push(&mut self, nodes: Vec<&Item>, kind: LayerKind) {
        let layer = self.layers.len();
        let ids = nodes.into_iter().map(|item| item.id().clone()).collect::<Vec<_>>();
        for id in &ids {
            self.node_layers.insert(id.clone(), layer);
        }
        self.layers.push(ids);
        self.kinds.push(kind);
    }
}

/// Partitions the graph's nodes into left-to-right layers.
///
/// A node joins the next layer once all of its in-graph dependencies were placed by an earlier
/// scan; dependencies that do not resolve to a node never block placement. A scan that places
/// nothing flushes every remaining node into one layer, which is how cycles are broken. At most
/// `max_passes` scans run; anything still unplaced afterwards lands in one trailing layer.
///
/// Within a layer, nodes keep their input order.
pub fn assign_layers(graph: &DependencyGraph<'_>, max_passes: usize) -> Layering {
    let mut layering =
        Layering { layers: Vec::new(), kinds: Vec::new(), node_layers: BTreeMap::new() };
    let mut placed = BTreeSet::<&str>::new();
    let mut remaining = graph.nodes().to_vec();
    let mut passes = 0usize;

    while !remaining.is_empty() && passes < max_passes {
        passes += 1;

        let (ready, blocked): (Vec<&Item>, Vec<&Item>) = remaining
            .into_iter()
            .partition(|item| graph.in_graph_deps(item).all(|dep| placed.contains(dep.as_str())));

        let (layer, kind) = if ready.is_empty() {
            tracing::debug!(
                layer = layering.layers.len(),
                nodes = blocked.len(),
                "no node ready; force-flushing remaining nodes"
            );
            remaining = Vec::new();
            (blocked, LayerKind::ForceFlushed)
        } else {
            remaining = blocked;
            (ready, LayerKind::Ready)
        };

        placed.extend(layer.iter().map(|item| item.id().as_str()));
        layering.push(layer, kind);
    }

    if !remaining.is_empty() {
        tracing::debug!(passes, nodes = remaining.len(), "layer pass cap reached");
        layering.push(remaining, LayerKind::Overflow);
    }

    layering
}
