// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use depgraph::model::{Item, ItemId, Priority};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BacklogParams {
    pub layers: usize,
    pub items_per_layer: usize,
    pub fanout: usize,
    pub cross_deps_per_item: usize,
    /// Every n-th item of the last layer also points back at layer 0, closing cycles.
    pub back_edge_every: usize,
    pub name_len: usize,
}

impl BacklogParams {
    pub const fn new(
        layers: usize,
        items_per_layer: usize,
        fanout: usize,
        cross_deps_per_item: usize,
        back_edge_every: usize,
        name_len: usize,
    ) -> Self {
        Self { layers, items_per_layer, fanout, cross_deps_per_item, back_edge_every, name_len }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    MediumDense,
    LargeLongNames,
    Cyclic,
}

impl Case {
    pub const ALL: [Case; 4] = [Case::Small, Case::MediumDense, Case::LargeLongNames, Case::Cyclic];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumDense => "medium_dense",
            Self::LargeLongNames => "large_long_names",
            Self::Cyclic => "cyclic",
        }
    }

    pub const fn params(self) -> BacklogParams {
        match self {
            Self::Small => BacklogParams::new(4, 4, 1, 0, 0, 16),
            Self::MediumDense => BacklogParams::new(8, 12, 3, 1, 0, 24),
            Self::LargeLongNames => BacklogParams::new(16, 24, 3, 2, 0, 80),
            Self::Cyclic => BacklogParams::new(10, 12, 2, 1, 3, 24),
        }
    }
}

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    if prefix.len() >= target_len {
        return prefix[..target_len].to_owned();
    }

    let mut out = String::with_capacity(target_len);
    out.push_str(prefix);
    while out.len() < target_len {
        out.push(fill);
    }
    out
}

fn item_id(layer: usize, idx: usize) -> ItemId {
    ItemId::new(format!("BL-{layer:02}-{idx:04}")).expect("valid item id")
}

fn priority(layer: usize, idx: usize) -> Priority {
    match (layer + idx) % 4 {
        0 => Priority::High,
        1 => Priority::Medium,
        2 => Priority::Low,
        _ => Priority::Unset,
    }
}

/// Deterministic layered backlog generator.
///
/// - Items in layer `n + 1` depend on `fanout` items of layer `n`.
/// - Cross dependencies skip at least one layer.
/// - Back edges (optional) make the last layer a dependency of layer 0.
/// - Items are emitted last layer first, so layering has to scan past blocked items.
pub fn backlog(params: BacklogParams) -> Vec<Item> {
    assert!(params.layers >= 2, "layers must be >= 2");
    assert!(params.items_per_layer >= 1, "items_per_layer must be >= 1");
    assert!(params.fanout >= 1, "fanout must be >= 1");

    let fanout = params.fanout.min(params.items_per_layer);
    let mut items = Vec::with_capacity(params.layers * params.items_per_layer);

    for layer in (0..params.layers).rev() {
        for idx in 0..params.items_per_layer {
            let mut deps = Vec::new();
            if layer > 0 {
                for k in 0..fanout {
                    deps.push(item_id(layer - 1, (idx + k) % params.items_per_layer));
                }
            }
            if layer >= 2 {
                for k in 0..params.cross_deps_per_item {
                    let target_layer = k % (layer - 1);
                    let target_idx = (idx + 1 + k.saturating_mul(3)) % params.items_per_layer;
                    deps.push(item_id(target_layer, target_idx));
                }
            }
            if layer == 0 && params.back_edge_every > 0 && idx % params.back_edge_every == 0 {
                deps.push(item_id(params.layers - 1, idx));
            }

            let base = format!("Item {layer:02}-{idx:04} ");
            let name = ascii_repeat_to_len(&base, 'x', params.name_len);
            items.push(
                Item::new(item_id(layer, idx), name)
                    .with_priority(priority(layer, idx))
                    .with_deps(deps),
            );
        }
    }

    items
}

pub fn fixture(case: Case) -> Vec<Item> {
    backlog(case.params())
}
