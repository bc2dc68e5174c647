// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! depgraph: a layered dependency view for backlog items.
//!
//! Items flow through extraction, layering and layout planning before being painted onto a
//! [`render::Surface`]. The whole pipeline reruns on every repaint; see [`viewport`].

pub mod config;
pub mod layout;
pub mod model;
pub mod render;
pub mod tui;
pub mod viewport;
