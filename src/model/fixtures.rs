// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::ItemId;
use super::item::{Item, Priority};
use super::Backlog;

/// `None` only for an empty id, which none of the fixtures use.
fn item(id: &str, name: &str, priority: Priority, deps: &[&str]) -> Option<Item> {
    let deps = deps.iter().map(|dep| ItemId::new(dep).ok()).collect::<Option<Vec<_>>>()?;
    Some(Item::new(ItemId::new(id).ok()?, name).with_priority(priority).with_deps(deps))
}

/// Built-in backlog used by `depgraph view --demo`.
pub fn demo_backlog() -> Backlog {
    let items = [
        item("BL-100", "Import leads from CSV", Priority::High, &[]),
        item("BL-101", "Deduplicate contacts by email", Priority::High, &["BL-100"]),
        item("BL-102", "Enrich company records", Priority::Medium, &["BL-100"]),
        item("BL-103", "Score leads by engagement history", Priority::Medium, &["BL-101", "BL-102"]),
        item("BL-104", "Campaign review screen", Priority::Low, &["BL-103"]),
        item("BL-105", "Sync with mail provider", Priority::Low, &["BL-106"]),
        item("BL-106", "Retry failed sends", Priority::Medium, &["BL-105"]),
        item("BL-107", "Audit log export", Priority::Unranked("Someday".to_owned()), &["BL-900"]),
        item("BL-108", "Dark mode", Priority::Low, &[]),
    ];
    Backlog::new(items.into_iter().flatten().collect()).unwrap_or_default()
}

/// `A`, `B(A)`, `C(A)`, `D(B, C)`.
#[cfg(test)]
pub(crate) fn diamond() -> Vec<Item> {
    [
        item("A", "Alpha", Priority::High, &[]),
        item("B", "Bravo", Priority::Medium, &["A"]),
        item("C", "Charlie", Priority::Low, &["A"]),
        item("D", "Delta", Priority::High, &["B", "C"]),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// `X(Y)`, `Y(X)`.
#[cfg(test)]
pub(crate) fn two_cycle() -> Vec<Item> {
    [
        item("X", "X-ray", Priority::Medium, &["Y"]),
        item("Y", "Yankee", Priority::Medium, &["X"]),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// `E(ZZZ)` where `ZZZ` is not part of the collection.
#[cfg(test)]
pub(crate) fn dangling() -> Vec<Item> {
    item("E", "Echo", Priority::Low, &["ZZZ"]).into_iter().collect()
}

/// Items without any dependency relation between them.
#[cfg(test)]
pub(crate) fn unrelated() -> Vec<Item> {
    [
        item("P", "Papa", Priority::High, &[]),
        item("Q", "Quebec", Priority::Low, &[]),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// A chain `R -> S -> T` feeding into the cycle `T -> U -> V -> T`, plus `W(V)`.
#[cfg(test)]
pub(crate) fn chain_into_cycle() -> Vec<Item> {
    [
        item("R", "Romeo", Priority::High, &[]),
        item("S", "Sierra", Priority::High, &["R"]),
        item("T", "Tango", Priority::Medium, &["S", "V"]),
        item("U", "Uniform", Priority::Medium, &["T"]),
        item("V", "Victor", Priority::Medium, &["U"]),
        item("W", "Whiskey", Priority::Low, &["V"]),
    ]
    .into_iter()
    .flatten()
    .collect()
}
