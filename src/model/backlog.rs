// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ids::ItemId;
use super::item::Item;

/// An ordered collection of backlog items with unique ids.
///
/// This is the boundary where input is validated; the layout engine itself takes plain item
/// slices and assumes the uniqueness checked here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Backlog {
    items: Vec<Item>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BacklogDocument {
    Items(Vec<Item>),
    Wrapped { items: Vec<Item> },
}

impl Backlog {
    pub fn new(items: Vec<Item>) -> Result<Self, BacklogError> {
        let mut seen = BTreeSet::<&ItemId>::new();
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(BacklogError::DuplicateId { id: item.id().clone() });
            }
        }
        Ok(Self { items })
    }

    /// Parses either a bare JSON array of items or an object with an `items` array.
    pub fn from_json_str(input: &str) -> Result<Self, BacklogError> {
        let document = serde_json::from_str::<BacklogDocument>(input).map_err(BacklogError::Parse)?;
        let items = match document {
            BacklogDocument::Items(items) | BacklogDocument::Wrapped { items } => items,
        };
        Self::new(items)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BacklogError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)
            .map_err(|source| BacklogError::Read { path: path.to_path_buf(), source })?;
        let backlog = Self::from_json_str(&input)?;
        tracing::debug!(path = %path.display(), items = backlog.len(), "loaded backlog");
        Ok(backlog)
    }

    /// JSON schema of the accepted item format.
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(Vec<Item>)).unwrap_or_default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BacklogError {
    #[error("failed to read backlog {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse backlog JSON")]
    Parse(#[source] serde_json::Error),
    #[error("duplicate item id {id}")]
    DuplicateId { id: ItemId },
}
