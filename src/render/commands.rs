// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::layout::{Point, Rect};

use super::surface::{Font, FontMetrics, Surface, SurfaceSize, TextAlign};
use super::Color;

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderCommand {
    Resize { size: SurfaceSize },
    SetScale { factor: f64 },
    Clear,
    BeginPath,
    MoveTo { to: Point },
    LineTo { to: Point },
    BezierTo { control1: Point, control2: Point, to: Point },
    QuadraticTo { control: Point, to: Point },
    ClosePath,
    Fill { color: Color },
    Stroke { color: Color, line_width: f64 },
    FillRect { rect: Rect, color: Color },
    FillText { text: String, at: Point, font: Font, color: Color, align: TextAlign },
}

/// A recorded frame, replayable onto any [`Surface`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderCommands(Vec<RenderCommand>);

impl RenderCommands {
    pub fn as_slice(&self) -> &[RenderCommand] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderCommand> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Text of every `FillText` command, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|command| match command {
            RenderCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.0 {
            match command {
                RenderCommand::Resize { size } => surface.resize(*size),
                RenderCommand::SetScale { factor } => surface.set_scale(*factor),
                RenderCommand::Clear => surface.clear(),
                RenderCommand::BeginPath => surface.begin_path(),
                RenderCommand::MoveTo { to } => surface.move_to(*to),
                RenderCommand::LineTo { to } => surface.line_to(*to),
                RenderCommand::BezierTo { control1, control2, to } => {
                    surface.bezier_to(*control1, *control2, *to)
                }
                RenderCommand::QuadraticTo { control, to } => surface.quadratic_to(*control, *to),
                RenderCommand::ClosePath => surface.close_path(),
                RenderCommand::Fill { color } => surface.fill(*color),
                RenderCommand::Stroke { color, line_width } => surface.stroke(*color, *line_width),
                RenderCommand::FillRect { rect, color } => surface.fill_rect(*rect, *color),
                RenderCommand::FillText { text, at, font, color, align } => {
                    surface.fill_text(text, *at, font, *color, *align)
                }
            }
        }
    }
}

impl IntoIterator for RenderCommands {
    type Item = RenderCommand;
    type IntoIter = std::vec::IntoIter<RenderCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A surface that only records what is drawn on it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<RenderCommand>,
    metrics: FontMetrics,
}

impl RecordingSurface {
    pub fn new(metrics: FontMetrics) -> Self {
        Self { commands: Vec::new(), metrics }
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> RenderCommands {
        RenderCommands(self.commands)
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, size: SurfaceSize) {
        self.commands.push(RenderCommand::Resize { size });
    }

    fn set_scale(&mut self, factor: f64) {
        self.commands.push(RenderCommand::SetScale { factor });
    }

    fn clear(&mut self) {
        self.commands.push(RenderCommand::Clear);
    }

    fn begin_path(&mut self) {
        self.commands.push(RenderCommand::BeginPath);
    }

    fn move_to(&mut self, to: Point) {
        self.commands.push(RenderCommand::MoveTo { to });
    }

    fn line_to(&mut self, to: Point) {
        self.commands.push(RenderCommand::LineTo { to });
    }

    fn bezier_to(&mut self, control1: Point, control2: Point, to: Point) {
        self.commands.push(RenderCommand::BezierTo { control1, control2, to });
    }

    fn quadratic_to(&mut self, control: Point, to: Point) {
        self.commands.push(RenderCommand::QuadraticTo { control, to });
    }

    fn close_path(&mut self) {
        self.commands.push(RenderCommand::ClosePath);
    }

    fn fill(&mut self, color: Color) {
        self.commands.push(RenderCommand::Fill { color });
    }

    fn stroke(&mut self, color: Color, line_width: f64) {
        self.commands.push(RenderCommand::Stroke { color, line_width });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(RenderCommand::FillRect { rect, color });
    }

    fn fill_text(&mut self, text: &str, at: Point, font: &Font, color: Color, align: TextAlign) {
        self.commands.push(RenderCommand::FillText {
            text: text.to_owned(),
            at,
            font: font.clone(),
            color,
            align,
        });
    }

    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        self.metrics.measure(text, font)
    }
}
