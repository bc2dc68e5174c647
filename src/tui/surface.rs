// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::style::{Color as TermColor, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Context, Line as CanvasLine};
use unicode_width::UnicodeWidthStr;

use crate::layout::{Point, Rect};
use crate::render::{Color, Font, Surface, SurfaceSize, TextAlign};

/// Logical pixels covered by one terminal cell.
pub(crate) const CELL_WIDTH_PX: f64 = 8.0;
pub(crate) const CELL_HEIGHT_PX: f64 = 16.0;

const BEZIER_STEPS: usize = 16;
const QUADRATIC_STEPS: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Shape {
    Segment { from: Point, to: Point, color: TermColor },
    Label { at: Point, text: String, color: TermColor },
}

/// Rasterizes drawing calls onto a braille [`ratatui::widgets::canvas::Canvas`].
///
/// Shapes are kept in backing pixels with the origin at the top left; [`Self::paint`] flips them
/// into the canvas' bottom-left coordinate system. Fills become outlines and text snaps to cells.
#[derive(Debug, Clone, Default)]
pub(crate) struct TerminalSurface {
    size: SurfaceSize,
    scale: f64,
    subpaths: Vec<Vec<Point>>,
    shapes: Vec<Shape>,
}

impl TerminalSurface {
    pub(crate) fn new() -> Self {
        Self { scale: 1.0, ..Self::default() }
    }

    pub(crate) fn size(&self) -> SurfaceSize {
        self.size
    }

    pub(crate) fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub(crate) fn x_bounds(&self) -> [f64; 2] {
        [0.0, f64::from(self.size.backing_width)]
    }

    pub(crate) fn y_bounds(&self) -> [f64; 2] {
        [0.0, f64::from(self.size.backing_height)]
    }

    pub(crate) fn paint(&self, ctx: &mut Context<'_>) {
        let height = f64::from(self.size.backing_height);
        for shape in &self.shapes {
            match shape {
                Shape::Segment { from, to, color } => ctx.draw(&CanvasLine {
                    x1: from.x,
                    y1: height - from.y,
                    x2: to.x,
                    y2: height - to.y,
                    color: *color,
                }),
                Shape::Label { at, text, color } => {
                    let line = TextLine::styled(text.clone(), Style::new().fg(*color));
                    ctx.print(at.x, height - at.y, line);
                }
            }
        }
    }

    fn scaled(&self, point: Point) -> Point {
        Point::new(point.x * self.scale, point.y * self.scale)
    }

    fn current_point(&self) -> Option<Point> {
        self.subpaths.last().and_then(|subpath| subpath.last()).copied()
    }

    fn push_point(&mut self, point: Point) {
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push(point),
            None => self.subpaths.push(vec![point]),
        }
    }

    fn outline(&mut self, color: TermColor) {
        for subpath in &self.subpaths {
            for pair in subpath.windows(2) {
                self.shapes.push(Shape::Segment { from: pair[0], to: pair[1], color });
            }
        }
    }
}

impl Surface for TerminalSurface {
    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.scale = 1.0;
        self.subpaths.clear();
        self.shapes.clear();
    }

    fn set_scale(&mut self, factor: f64) {
        self.scale = factor;
    }

    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, to: Point) {
        let to = self.scaled(to);
        self.subpaths.push(vec![to]);
    }

    fn line_to(&mut self, to: Point) {
        let to = self.scaled(to);
        self.push_point(to);
    }

    fn bezier_to(&mut self, control1: Point, control2: Point, to: Point) {
        let (c1, c2, end) = (self.scaled(control1), self.scaled(control2), self.scaled(to));
        let Some(start) = self.current_point() else {
            self.push_point(end);
            return;
        };
        for step in 1..=BEZIER_STEPS {
            let t = step as f64 / BEZIER_STEPS as f64;
            let mt = 1.0 - t;
            let (a, b, c, d) = (mt * mt * mt, 3.0 * mt * mt * t, 3.0 * mt * t * t, t * t * t);
            self.push_point(Point::new(
                a * start.x + b * c1.x + c * c2.x + d * end.x,
                a * start.y + b * c1.y + c * c2.y + d * end.y,
            ));
        }
    }

    fn quadratic_to(&mut self, control: Point, to: Point) {
        let (ctrl, end) = (self.scaled(control), self.scaled(to));
        let Some(start) = self.current_point() else {
            self.push_point(end);
            return;
        };
        for step in 1..=QUADRATIC_STEPS {
            let t = step as f64 / QUADRATIC_STEPS as f64;
            let mt = 1.0 - t;
            let (a, b, c) = (mt * mt, 2.0 * mt * t, t * t);
            self.push_point(Point::new(
                a * start.x + b * ctrl.x + c * end.x,
                a * start.y + b * ctrl.y + c * end.y,
            ));
        }
    }

    fn close_path(&mut self) {
        if let Some(subpath) = self.subpaths.last_mut() {
            if let (Some(first), Some(last)) = (subpath.first().copied(), subpath.last().copied()) {
                if first != last {
                    subpath.push(first);
                }
            }
        }
    }

    fn fill(&mut self, color: Color) {
        self.outline(term_color(color));
    }

    fn stroke(&mut self, color: Color, _line_width: f64) {
        self.outline(term_color(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let color = term_color(color);
        let top_left = self.scaled(Point::new(rect.x, rect.y));
        let bottom_right = self.scaled(Point::new(rect.right(), rect.bottom()));
        let mut y = top_left.y;
        while y <= bottom_right.y {
            self.shapes.push(Shape::Segment {
                from: Point::new(top_left.x, y),
                to: Point::new(bottom_right.x, y),
                color,
            });
            y += 1.0;
        }
    }

    fn fill_text(&mut self, text: &str, at: Point, _font: &Font, color: Color, align: TextAlign) {
        let mut at = self.scaled(at);
        if align == TextAlign::Center {
            at.x -= text.width() as f64 * CELL_WIDTH_PX * self.scale / 2.0;
        }
        self.shapes.push(Shape::Label { at, text: text.to_owned(), color: term_color(color) });
    }

    /// Every display column is one cell, whatever the font.
    fn measure_text(&self, text: &str, _font: &Font) -> f64 {
        text.width() as f64 * CELL_WIDTH_PX
    }
}

pub(crate) fn term_color(color: Color) -> TermColor {
    TermColor::Rgb(color.r, color.g, color.b)
}
