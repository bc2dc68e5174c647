// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Backlog items as consumed by the dependency view.
//!
//! Items carry an id, a display name, a priority tier and the ids they depend on.

pub mod backlog;
pub mod fixtures;
pub mod ids;
pub mod item;

pub use backlog::{Backlog, BacklogError};
pub use ids::{IdError, ItemId};
pub use item::{DepList, Item, Priority};
