// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ids::ItemId;

/// Most backlog items depend on a handful of others; keep those inline.
pub type DepList = SmallVec<[ItemId; 4]>;

/// A backlog item as seen by the dependency view.
///
/// Only the fields the view needs are modeled: the id, a display name, a priority tier (used for
/// color only) and the ordered list of ids this item depends on. Dependency ids may point at
/// items that are not part of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Item {
    #[schemars(with = "String")]
    id: ItemId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    #[schemars(with = "Option<String>")]
    priority: Priority,
    #[serde(default, alias = "dependencies")]
    #[schemars(with = "Vec<String>")]
    deps: DepList,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), priority: Priority::default(), deps: DepList::new() }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_deps(mut self, deps: impl IntoIterator<Item = ItemId>) -> Self {
        self.deps = deps.into_iter().collect();
        self
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> &Priority {
        &self.priority
    }

    pub fn deps(&self) -> &[ItemId] {
        &self.deps
    }

    pub fn has_deps(&self) -> bool {
        !self.deps.is_empty()
    }
}

/// Priority tier of an item.
///
/// Parsing is case-insensitive and never fails: values outside the three known tiers are kept
/// verbatim as [`Priority::Unranked`] and drawn in the neutral color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    #[default]
    Unset,
    Unranked(String),
}

impl Priority {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Unset;
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "high" | "p1" => Self::High,
            "medium" | "med" | "p2" => Self::Medium,
            "low" | "p3" => Self::Low,
            _ => Self::Unranked(trimmed.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Unset => "",
            Self::Unranked(raw) => raw,
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
