// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout for the dependency view.
//!
//! Three pure steps, each recomputed from scratch on every pass: extract the relevant subgraph,
//! assign layers (cycle tolerant), and plan pixel boxes for a given surface width.

pub mod extract;
pub mod layers;
pub mod plan;

pub use extract::{extract_graph, DependencyGraph};
pub use layers::{assign_layers, LayerKind, Layering, DEFAULT_MAX_LAYER_PASSES};
pub use plan::{layout_width, plan_layout, PlannedLayout, Point, Rect};
