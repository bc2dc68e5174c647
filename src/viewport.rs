// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sizing the drawing surface and repainting it.
//!
//! A repaint never reuses anything from the previous frame: the surface is resized, rescaled and
//! cleared, then the whole pipeline runs again.

use std::fmt;

use crate::config::{EngineConfig, LayoutConfig, ViewportConfig};
use crate::model::Item;
use crate::render::{
    render_graph, FontMetrics, FrameReport, RecordingSurface, RenderCommands, Surface, SurfaceSize,
};

/// Why a repaint happens. Every trigger does the same full work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintTrigger {
    Opened,
    Resized,
    Refreshed,
}

impl fmt::Display for RepaintTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Opened => "opened",
            Self::Resized => "resized",
            Self::Refreshed => "refreshed",
        })
    }
}

/// Container width and device pixel ratio of the view.
///
/// The logical height is fixed by [`LayoutConfig::surface_height`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    container_width: f64,
    device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(container_width: f64, device_pixel_ratio: f64) -> Self {
        Self {
            container_width: sanitize_width(container_width),
            device_pixel_ratio: sanitize_ratio(device_pixel_ratio),
        }
    }

    pub fn from_config(config: &ViewportConfig) -> Self {
        Self::new(config.width, config.device_pixel_ratio)
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    /// Returns whether the width actually changed.
    pub fn set_container_width(&mut self, width: f64) -> bool {
        let width = sanitize_width(width);
        let changed = width.to_bits() != self.container_width.to_bits();
        self.container_width = width;
        changed
    }

    pub fn set_device_pixel_ratio(&mut self, ratio: f64) {
        self.device_pixel_ratio = sanitize_ratio(ratio);
    }

    pub fn surface_size(&self, layout: &LayoutConfig) -> SurfaceSize {
        let logical_height = sanitize_width(layout.surface_height);
        SurfaceSize {
            backing_width: backing(self.container_width, self.device_pixel_ratio),
            backing_height: backing(logical_height, self.device_pixel_ratio),
            logical_width: self.container_width,
            logical_height,
        }
    }

    /// Resizes, rescales and clears `surface`, then draws `items` from scratch.
    pub fn repaint<S: Surface + ?Sized>(
        &self,
        trigger: RepaintTrigger,
        surface: &mut S,
        items: &[Item],
        config: &EngineConfig,
    ) -> FrameReport {
        let size = self.surface_size(&config.layout);
        tracing::debug!(
            %trigger,
            width = self.container_width,
            dpr = self.device_pixel_ratio,
            backing_width = size.backing_width,
            backing_height = size.backing_height,
            "repainting dependency view"
        );

        surface.resize(size);
        surface.set_scale(self.device_pixel_ratio);
        surface.clear();
        render_graph(items, self.container_width, surface, config)
    }

    /// Records a full repaint, including the sizing calls.
    pub fn record(
        &self,
        trigger: RepaintTrigger,
        items: &[Item],
        config: &EngineConfig,
    ) -> RenderCommands {
        let mut surface = RecordingSurface::new(FontMetrics::default());
        self.repaint(trigger, &mut surface, items, config);
        surface.into_commands()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_config(&ViewportConfig::default())
    }
}

fn sanitize_width(width: f64) -> f64 {
    if width.is_finite() {
        width.max(0.0)
    } else {
        0.0
    }
}

fn sanitize_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

fn backing(logical: f64, ratio: f64) -> u32 {
    // Saturating float-to-int cast.
    (logical * ratio).round() as u32
}
