// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Standalone SVG documents.
//!
//! The document's `viewBox` spans the backing resolution while `width`/`height` carry the
//! logical size, so a scaled frame renders crisply at the intended display size.

use std::fmt::Write as _;

use crate::layout::{Point, Rect};

use super::surface::{Font, FontMetrics, Surface, SurfaceSize, TextAlign};
use super::Color;

#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: SurfaceSize,
    scale: f64,
    background: Option<Color>,
    metrics: FontMetrics,
    path: String,
    body: String,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(FontMetrics::default())
    }
}

impl SvgSurface {
    pub fn new(metrics: FontMetrics) -> Self {
        Self {
            size: SurfaceSize::default(),
            scale: 1.0,
            background: None,
            metrics,
            path: String::new(),
            body: String::new(),
        }
    }

    /// Paints `color` behind everything drawn.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn document(&self) -> String {
        let mut itoa_width = itoa::Buffer::new();
        let mut itoa_height = itoa::Buffer::new();
        let backing_width = itoa_width.format(self.size.backing_width);
        let backing_height = itoa_height.format(self.size.backing_height);

        let mut out = String::with_capacity(self.body.len() + 256);
        out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        out.push('\n');
        // Writing into a `String` cannot fail.
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {backing_width} {backing_height}">"#,
            Num(self.size.logical_width),
            Num(self.size.logical_height),
        );
        if let Some(background) = self.background {
            let _ = writeln!(
                out,
                r#"  <rect width="{backing_width}" height="{backing_height}"{}/>"#,
                Paint("fill", background)
            );
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    pub fn into_document(self) -> String {
        self.document()
    }

    fn at(&self, point: Point) -> (Num, Num) {
        (Num(point.x * self.scale), Num(point.y * self.scale))
    }
}

impl Surface for SvgSurface {
    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.scale = 1.0;
        self.path.clear();
        self.body.clear();
    }

    fn set_scale(&mut self, factor: f64) {
        self.scale = factor;
    }

    fn clear(&mut self) {
        self.body.clear();
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, to: Point) {
        let (x, y) = self.at(to);
        let _ = write!(self.path, "M{x} {y} ");
    }

    fn line_to(&mut self, to: Point) {
        let (x, y) = self.at(to);
        let _ = write!(self.path, "L{x} {y} ");
    }

    fn bezier_to(&mut self, control1: Point, control2: Point, to: Point) {
        let (c1x, c1y) = self.at(control1);
        let (c2x, c2y) = self.at(control2);
        let (x, y) = self.at(to);
        let _ = write!(self.path, "C{c1x} {c1y} {c2x} {c2y} {x} {y} ");
    }

    fn quadratic_to(&mut self, control: Point, to: Point) {
        let (cx, cy) = self.at(control);
        let (x, y) = self.at(to);
        let _ = write!(self.path, "Q{cx} {cy} {x} {y} ");
    }

    fn close_path(&mut self) {
        self.path.push_str("Z ");
    }

    fn fill(&mut self, color: Color) {
        if self.path.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            r#"  <path d="{}"{}/>"#,
            self.path.trim_end(),
            Paint("fill", color)
        );
    }

    fn stroke(&mut self, color: Color, line_width: f64) {
        if self.path.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            r#"  <path d="{}" fill="none"{} stroke-width="{}"/>"#,
            self.path.trim_end(),
            Paint("stroke", color),
            Num(line_width * self.scale)
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (x, y) = self.at(Point::new(rect.x, rect.y));
        let _ = writeln!(
            self.body,
            r#"  <rect x="{x}" y="{y}" width="{}" height="{}"{}/>"#,
            Num(rect.width * self.scale),
            Num(rect.height * self.scale),
            Paint("fill", color)
        );
    }

    fn fill_text(&mut self, text: &str, at: Point, font: &Font, color: Color, align: TextAlign) {
        let (x, y) = self.at(at);
        let anchor = match align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
        };
        let weight = if font.bold { r#" font-weight="bold""# } else { "" };
        let _ = writeln!(
            self.body,
            r#"  <text x="{x}" y="{y}" font-family="{}" font-size="{}"{weight} text-anchor="{anchor}" dominant-baseline="middle"{}>{}</text>"#,
            escape_xml(&font.family),
            Num(font.size * self.scale),
            Paint("fill", color),
            escape_xml(text)
        );
    }

    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        self.metrics.measure(text, font)
    }
}

/// A coordinate rounded to two decimals, without trailing zeros.
#[derive(Clone, Copy)]
struct Num(f64);

impl std::fmt::Display for Num {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rounded = (self.0 * 100.0).round() / 100.0;
        // Avoid "-0".
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        write!(f, "{rounded}")
    }
}

/// ` fill="#rrggbb"` plus an opacity attribute for translucent colors.
struct Paint(&'static str, Color);

impl std::fmt::Display for Paint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Paint(attr, color) = self;
        write!(f, r#" {attr}="{}""#, color.hex_rgb())?;
        if !color.is_opaque() {
            write!(f, r#" {attr}-opacity="{}""#, Num(color.alpha()))?;
        }
        Ok(())
    }
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
