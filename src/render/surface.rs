// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::layout::{Point, Rect};

use super::Color;

/// Backing resolution plus display size of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceSize {
    /// Physical pixels.
    pub backing_width: u32,
    pub backing_height: u32,
    /// Logical (CSS) pixels.
    pub logical_width: f64,
    pub logical_height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: f64,
    pub monospace: bool,
    pub bold: bool,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self { family: family.into(), size, monospace: false, bold: false }
    }

    pub fn mono(family: impl Into<String>, size: f64) -> Self {
        Self { family: family.into(), size, monospace: true, bold: false }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// The drawing calls the dependency view needs.
///
/// Modeled on a 2D canvas context: coordinates are logical pixels multiplied by the current
/// scale, paths are built with `move_to`/`line_to`/curves and survive `fill`/`stroke` until the
/// next `begin_path`. Text is positioned by its vertical middle; `align` picks whether `at.x` is
/// the left edge or the center.
pub trait Surface {
    /// Sets the backing resolution and display size, clearing the surface and resetting the
    /// scale to `1.0`.
    fn resize(&mut self, size: SurfaceSize);

    /// Replaces the current transform with a uniform scale.
    fn set_scale(&mut self, factor: f64);

    fn clear(&mut self);

    fn begin_path(&mut self);

    fn move_to(&mut self, to: Point);

    fn line_to(&mut self, to: Point);

    fn bezier_to(&mut self, control1: Point, control2: Point, to: Point);

    fn quadratic_to(&mut self, control: Point, to: Point);

    fn close_path(&mut self);

    fn fill(&mut self, color: Color);

    fn stroke(&mut self, color: Color, line_width: f64);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_text(&mut self, text: &str, at: Point, font: &Font, color: Color, align: TextAlign);

    /// Width of `text` in logical pixels, independent of the current scale.
    fn measure_text(&self, text: &str, font: &Font) -> f64;
}

/// Deterministic text measurement for surfaces without a font rasterizer.
///
/// Every display column advances by a fixed fraction of the font size; wide (CJK) characters
/// count as two columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub mono_advance: f64,
    pub proportional_advance: f64,
    pub bold_factor: f64,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self { mono_advance: 0.6, proportional_advance: 0.55, bold_factor: 1.06 }
    }
}

impl FontMetrics {
    pub fn measure(&self, text: &str, font: &Font) -> f64 {
        let advance = if font.monospace { self.mono_advance } else { self.proportional_advance };
        let weight = if font.bold { self.bold_factor } else { 1.0 };
        text.width() as f64 * font.size * advance * weight
    }
}
