// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drawing the dependency view.
//!
//! The renderer talks to a [`Surface`], a small canvas-style drawing trait. Backends in this
//! crate record calls ([`RecordingSurface`]), emit SVG ([`SvgSurface`]) or paint a terminal
//! canvas (`crate::tui`).

mod color;
mod commands;
pub mod graph;
mod surface;
pub mod svg;
mod text;

pub use color::{Color, ColorParseError};
pub use commands::{RecordingSurface, RenderCommand, RenderCommands};
pub use graph::{
    arrowhead, render_commands, render_graph, route_edge, CubicBezier, DrawnEdge, FrameReport,
};
pub use surface::{Font, FontMetrics, Surface, SurfaceSize, TextAlign};
pub use svg::SvgSurface;
pub use text::{fit_label, ELLIPSIS};
