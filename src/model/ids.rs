// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

/// Identifier of a backlog item.
///
/// Backlog ids are short (`BL-142`, `a3f9`), so they are stored inline via `SmolStr` and cloned
/// freely across layers, positions and edges. The only enforced rule is that an id is non-empty;
/// uniqueness is a property of a collection, checked by [`crate::model::Backlog`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(SmolStr);

impl ItemId {
    pub fn new(value: impl AsRef<str>) -> Result<Self, IdError> {
        let value = value.as_ref();
        if value.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(SmolStr::new(value)))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for ItemId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("item id must not be empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{IdError, ItemId};

    #[test]
    fn id_rejects_empty() {
        assert_eq!(ItemId::new(""), Err(IdError::Empty));
    }

    #[test]
    fn id_deserializes_from_plain_string() {
        let id: ItemId = serde_json::from_str("\"BL-7\"").expect("id");
        assert_eq!(id.as_str(), "BL-7");
        assert!(serde_json::from_str::<ItemId>("\"\"").is_err());
    }

    #[test]
    fn id_set_lookups_accept_str() {
        let ids = BTreeSet::from([ItemId::new("a").unwrap(), ItemId::new("b").unwrap()]);
        assert!(ids.contains("a"));
        assert!(!ids.contains("zzz"));
    }
}
