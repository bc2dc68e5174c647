// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{EngineConfig, Theme};
use crate::layout::{
    assign_layers, extract_graph, plan_layout, DependencyGraph, Layering, PlannedLayout, Point,
    Rect,
};
use crate::model::{Item, ItemId};

use super::commands::{RecordingSurface, RenderCommands};
use super::surface::{Font, FontMetrics, Surface, TextAlign};
use super::text::fit_label;

const NODE_CORNER_RADIUS: f64 = 6.0;
const NODE_BORDER_WIDTH: f64 = 1.5;
const ACCENT_INSET: f64 = 3.0;
const ACCENT_WIDTH: f64 = 4.0;
const LABEL_LEFT: f64 = ACCENT_INSET + ACCENT_WIDTH + 8.0;
const LABEL_RIGHT_PADDING: f64 = 8.0;
const ID_LABEL_Y: f64 = 0.3;
const NAME_LABEL_Y: f64 = 0.66;
const EDGE_WIDTH: f64 = 1.5;
const ARROW_SIZE: f64 = 7.0;
const ARROW_HALF_WIDTH: f64 = 0.6;

/// A cubic bezier segment in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicBezier {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl CubicBezier {
    /// Point on the curve at `t` in `[0, 1]`.
    pub fn sample(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point::new(
            a * self.start.x + b * self.control1.x + c * self.control2.x + d * self.end.x,
            a * self.start.y + b * self.control1.y + c * self.control2.y + d * self.end.y,
        )
    }

    /// Unit direction of travel at the end of the curve.
    pub fn end_direction(&self) -> (f64, f64) {
        for from in [self.control2, self.control1, self.start] {
            let (dx, dy) = (self.end.x - from.x, self.end.y - from.y);
            let len = dx.hypot(dy);
            if len > f64::EPSILON {
                return (dx / len, dy / len);
            }
        }
        (1.0, 0.0)
    }
}

/// Curve from the right-center of `from` to the left-center of `to`.
///
/// Both control points sit on the horizontal midpoint, each at its own anchor's height, so the
/// curve leaves and enters horizontally.
pub fn route_edge(from: &Rect, to: &Rect) -> CubicBezier {
    let start = from.right_center();
    let end = to.left_center();
    let mid_x = (start.x + end.x) / 2.0;
    CubicBezier {
        start,
        control1: Point::new(mid_x, start.y),
        control2: Point::new(mid_x, end.y),
        end,
    }
}

/// Triangle with its tip on the curve's end, pointing along the end tangent.
pub fn arrowhead(curve: &CubicBezier, size: f64) -> [Point; 3] {
    let (ux, uy) = curve.end_direction();
    let tip = curve.end;
    let base = Point::new(tip.x - ux * size, tip.y - uy * size);
    let half = size * ARROW_HALF_WIDTH;
    [
        tip,
        Point::new(base.x - uy * half, base.y + ux * half),
        Point::new(base.x + uy * half, base.y - ux * half),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawnEdge {
    pub from: ItemId,
    pub to: ItemId,
    pub curve: CubicBezier,
}

/// What a render pass put on the surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameReport {
    placeholder: bool,
    layering: Option<Layering>,
    layout: PlannedLayout,
    edges: Vec<DrawnEdge>,
    labels: BTreeMap<ItemId, String>,
}

impl FrameReport {
    /// Whether only the "no dependencies" message was drawn.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn layering(&self) -> Option<&Layering> {
        self.layering.as_ref()
    }

    pub fn layout(&self) -> &PlannedLayout {
        &self.layout
    }

    pub fn edges(&self) -> &[DrawnEdge] {
        &self.edges
    }

    /// The name label drawn for each node, after truncation.
    pub fn label(&self, id: &str) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }
}

/// Lays out `items` for a surface `surface_width` logical pixels wide and paints the result.
///
/// Edges are drawn first so node boxes cover their endpoints. An item collection without any
/// dependency relation paints a centered message instead and skips layout entirely.
pub fn render_graph<S: Surface + ?Sized>(
    items: &[Item],
    surface_width: f64,
    surface: &mut S,
    config: &EngineConfig,
) -> FrameReport {
    let graph = extract_graph(items);
    if graph.is_empty() {
        draw_placeholder(surface, surface_width, config);
        return FrameReport { placeholder: true, ..FrameReport::default() };
    }

    let layering = assign_layers(&graph, config.layout.max_layer_passes);
    let layout = plan_layout(&layering, surface_width, &config.layout);

    let edges = draw_edges(&graph, &layout, surface, &config.theme);
    let labels = draw_nodes(&graph, &layout, surface, &config.theme);

    tracing::debug!(
        nodes = layout.len(),
        layers = layering.layers().len(),
        edges = edges.len(),
        forced = layering.has_forced_layers(),
        "rendered dependency graph"
    );

    FrameReport { placeholder: false, layering: Some(layering), layout, edges, labels }
}

/// Records one frame for `items` without any particular backend.
///
/// Text is measured with [`FontMetrics::default`], so the output depends only on the inputs.
pub fn render_commands(
    items: &[Item],
    surface_width: f64,
    config: &EngineConfig,
) -> RenderCommands {
    let mut surface = RecordingSurface::new(FontMetrics::default());
    render_graph(items, surface_width, &mut surface, config);
    surface.into_commands()
}

fn draw_placeholder<S: Surface + ?Sized>(
    surface: &mut S,
    surface_width: f64,
    config: &EngineConfig,
) {
    let theme = &config.theme;
    let font = Font::new(theme.font_family.clone(), theme.name_font_size);
    let at = Point::new(surface_width / 2.0, config.layout.surface_height / 2.0);
    surface.fill_text(&theme.placeholder, at, &font, theme.placeholder_text, TextAlign::Center);
}

fn draw_edges<S: Surface + ?Sized>(
    graph: &DependencyGraph<'_>,
    layout: &PlannedLayout,
    surface: &mut S,
    theme: &Theme,
) -> Vec<DrawnEdge> {
    let mut edges = Vec::new();
    for item in graph.nodes() {
        let Some(to_rect) = layout.position(item.id().as_str()) else {
            continue;
        };
        for dep in item.deps() {
            let Some(from_rect) = layout.position(dep.as_str()) else {
                tracing::trace!(from = %dep, to = %item.id(), "skipping edge to unplaced node");
                continue;
            };

            let curve = route_edge(from_rect, to_rect);
            surface.begin_path();
            surface.move_to(curve.start);
            surface.bezier_to(curve.control1, curve.control2, curve.end);
            surface.stroke(theme.edge, EDGE_WIDTH);

            let [tip, left, right] = arrowhead(&curve, ARROW_SIZE);
            surface.begin_path();
            surface.move_to(tip);
            surface.line_to(left);
            surface.line_to(right);
            surface.close_path();
            surface.fill(theme.edge);

            edges.push(DrawnEdge { from: dep.clone(), to: item.id().clone(), curve });
        }
    }
    edges
}

fn draw_nodes<S: Surface + ?Sized>(
    graph: &DependencyGraph<'_>,
    layout: &PlannedLayout,
    surface: &mut S,
    theme: &Theme,
) -> BTreeMap<ItemId, String> {
    let id_font = Font::mono(theme.mono_font_family.clone(), theme.id_font_size);
    let name_font = Font::new(theme.font_family.clone(), theme.name_font_size).bold();

    let mut labels = BTreeMap::new();
    for item in graph.nodes() {
        let Some(rect) = layout.position(item.id().as_str()) else {
            continue;
        };
        let color = theme.priority_color(item.priority());

        rounded_rect_path(surface, rect, NODE_CORNER_RADIUS);
        surface.fill(theme.node_fill);
        surface.stroke(color, NODE_BORDER_WIDTH);

        let accent = Rect {
            x: rect.x + ACCENT_INSET,
            y: rect.y + ACCENT_INSET,
            width: ACCENT_WIDTH,
            height: (rect.height - 2.0 * ACCENT_INSET).max(0.0),
        };
        surface.fill_rect(accent, color);

        let text_x = rect.x + LABEL_LEFT;
        let available = rect.width - LABEL_LEFT - LABEL_RIGHT_PADDING;

        let id_label = fit_label(surface, item.id().as_str(), &id_font, available);
        let id_at = Point::new(text_x, rect.y + rect.height * ID_LABEL_Y);
        surface.fill_text(&id_label, id_at, &id_font, theme.id_text, TextAlign::Left);

        let name_label = fit_label(surface, item.name(), &name_font, available);
        let name_at = Point::new(text_x, rect.y + rect.height * NAME_LABEL_Y);
        surface.fill_text(&name_label, name_at, &name_font, theme.name_text, TextAlign::Left);

        labels.insert(item.id().clone(), name_label);
    }
    labels
}

fn rounded_rect_path<S: Surface + ?Sized>(surface: &mut S, rect: &Rect, radius: f64) {
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
    let (left, top, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());

    surface.begin_path();
    surface.move_to(Point::new(left + r, top));
    surface.line_to(Point::new(right - r, top));
    surface.quadratic_to(Point::new(right, top), Point::new(right, top + r));
    surface.line_to(Point::new(right, bottom - r));
    surface.quadratic_to(Point::new(right, bottom), Point::new(right - r, bottom));
    surface.line_to(Point::new(left + r, bottom));
    surface.quadratic_to(Point::new(left, bottom), Point::new(left, bottom - r));
    surface.line_to(Point::new(left, top + r));
    surface.quadratic_to(Point::new(left, top), Point::new(left + r, top));
    surface.close_path();
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::{arrowhead, render_commands, render_graph, route_edge, CubicBezier, FrameReport};
    use crate::config::EngineConfig;
    use crate::layout::{Point, Rect};
    use crate::model::{fixtures, Item, ItemId};
    use crate::render::{Color, FontMetrics, RecordingSurface, RenderCommand, Surface, ELLIPSIS};

    fn render(items: &[Item], width: f64) -> (FrameReport, RecordingSurface) {
        let mut surface = RecordingSurface::new(FontMetrics::default());
        let report = render_graph(items, width, &mut surface, &EngineConfig::default());
        (report, surface)
    }

    fn edge_pairs(report: &FrameReport) -> Vec<(String, String)> {
        report.edges().iter().map(|edge| (edge.from.to_string(), edge.to.to_string())).collect()
    }

    fn pair(from: &str, to: &str) -> (String, String) {
        (from.to_owned(), to.to_owned())
    }

    #[test]
    fn diamond_draws_four_edges() {
        let (report, _) = render(&fixtures::diamond(), 960.0);
        assert!(!report.is_placeholder());
        assert_eq!(
            edge_pairs(&report),
            vec![pair("A", "B"), pair("A", "C"), pair("B", "D"), pair("C", "D")]
        );
        assert_eq!(report.layout().len(), 4);
    }

    #[test]
    fn two_cycle_draws_both_edges() {
        let (report, _) = render(&fixtures::two_cycle(), 960.0);
        assert_eq!(edge_pairs(&report), vec![pair("Y", "X"), pair("X", "Y")]);
        assert_eq!(report.layering().map(|layering| layering.layers().len()), Some(1));
    }

    #[test]
    fn dangling_dependency_draws_the_node_but_no_edge() {
        let (report, surface) = render(&fixtures::dangling(), 960.0);
        assert!(report.edges().is_empty());
        assert!(report.layout().position("E").is_some());
        let strokes = surface
            .commands()
            .iter()
            .filter(|command| matches!(command, RenderCommand::BezierTo { .. }))
            .count();
        assert_eq!(strokes, 0);
    }

    #[test]
    fn unrelated_items_paint_only_the_placeholder() {
        let config = EngineConfig::default();
        let (report, surface) = render(&fixtures::unrelated(), 800.0);
        assert!(report.is_placeholder());
        assert!(report.layering().is_none());
        match surface.commands() {
            [RenderCommand::FillText { text, at, .. }] => {
                assert_eq!(text, &config.theme.placeholder);
                assert_eq!((at.x, at.y), (400.0, 200.0));
            }
            other => panic!("expected a single placeholder text, got {other:?}"),
        }
    }

    #[test]
    fn nodes_use_priority_colors() {
        let config = EngineConfig::default();
        let (_, surface) = render(&fixtures::diamond(), 960.0);
        let accents = surface
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::FillRect { color, .. } => Some(*color),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(
            accents,
            vec![config.theme.high, config.theme.medium, config.theme.low, config.theme.high]
        );
    }

    #[test]
    fn long_names_are_truncated_to_the_node_interior() {
        let long = "Score leads by engagement history across every campaign channel";
        let items = vec![
            Item::new(ItemId::new("A").unwrap(), "short"),
            Item::new(ItemId::new("B").unwrap(), long).with_deps([ItemId::new("A").unwrap()]),
        ];
        let (report, surface) = render(&items, 960.0);

        let label = report.label("B").expect("label");
        assert!(label.ends_with(ELLIPSIS), "{label}");
        assert!(long.starts_with(label.trim_end_matches(ELLIPSIS)));

        let font = surface
            .commands()
            .iter()
            .find_map(|command| match command {
                RenderCommand::FillText { text, font, .. } if text == label => Some(font.clone()),
                _ => None,
            })
            .expect("name label drawn");
        let config = EngineConfig::default();
        let available = config.layout.node_width - super::LABEL_LEFT - super::LABEL_RIGHT_PADDING;
        assert!(surface.measure_text(label, &font) <= available);
        assert_eq!(report.label("A"), Some("short"));
    }

    #[test]
    fn edges_are_drawn_before_nodes() {
        let (_, surface) = render(&fixtures::diamond(), 960.0);
        let last_curve = surface
            .commands()
            .iter()
            .rposition(|command| matches!(command, RenderCommand::BezierTo { .. }))
            .expect("curve");
        let first_box = surface
            .commands()
            .iter()
            .position(|command| matches!(command, RenderCommand::FillRect { .. }))
            .expect("accent bar");
        assert!(last_curve < first_box);
    }

    #[test]
    fn edge_curves_leave_and_enter_horizontally() {
        let from = Rect { x: 0.0, y: 0.0, width: 100.0, height: 40.0 };
        let to = Rect { x: 200.0, y: 100.0, width: 100.0, height: 40.0 };
        let curve = route_edge(&from, &to);
        assert_eq!(curve.start, Point::new(100.0, 20.0));
        assert_eq!(curve.end, Point::new(200.0, 120.0));
        assert_eq!(curve.control1, Point::new(150.0, 20.0));
        assert_eq!(curve.control2, Point::new(150.0, 120.0));
        assert_eq!(curve.sample(0.0), curve.start);
        assert_eq!(curve.sample(1.0), curve.end);
        assert_eq!(curve.end_direction(), (1.0, 0.0));
    }

    #[test]
    fn arrowhead_points_along_the_end_tangent() {
        let curve = CubicBezier {
            start: Point::new(0.0, 0.0),
            control1: Point::new(50.0, 0.0),
            control2: Point::new(50.0, 10.0),
            end: Point::new(100.0, 10.0),
        };
        let [tip, left, right] = arrowhead(&curve, 10.0);
        assert_eq!(tip, curve.end);
        assert_eq!((left.x, right.x), (90.0, 90.0));
        assert_eq!((left.y, right.y), (16.0, 4.0));

        // Same-layer edges run right to left; the arrow flips with them.
        let backwards = CubicBezier {
            start: Point::new(100.0, 0.0),
            control1: Point::new(50.0, 0.0),
            control2: Point::new(50.0, 40.0),
            end: Point::new(0.0, 40.0),
        };
        let [_, left, right] = arrowhead(&backwards, 10.0);
        assert_eq!((left.x, right.x), (10.0, 10.0));
    }

    #[test]
    fn degenerate_curves_fall_back_to_pointing_right() {
        let point = Point::new(5.0, 5.0);
        let curve = CubicBezier { start: point, control1: point, control2: point, end: point };
        assert_eq!(curve.end_direction(), (1.0, 0.0));
    }

    #[test]
    fn recorded_frames_are_deterministic() {
        let config = EngineConfig::default();
        let items = fixtures::chain_into_cycle();
        let first = serde_json::to_string(&render_commands(&items, 777.0, &config)).unwrap();
        let second = serde_json::to_string(&render_commands(&items, 777.0, &config)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_priorities_fall_back_to_neutral() {
        let config = EngineConfig::default();
        let items = vec![
            Item::new(ItemId::new("A").unwrap(), "A"),
            Item::new(ItemId::new("B").unwrap(), "B")
                .with_priority(crate::model::Priority::Unranked("Someday".into()))
                .with_deps([ItemId::new("A").unwrap()]),
        ];
        let (_, surface) = render(&items, 600.0);
        let accents = surface
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::FillRect { color, .. } => Some(*color),
                _ => None,
            })
            .collect::<Vec<Color>>();
        assert_eq!(accents, vec![config.theme.neutral, config.theme.neutral]);
    }

    fn arbitrary_items() -> impl Strategy<Value = Vec<Item>> {
        (1usize..12).prop_flat_map(|len| {
            prop::collection::vec(prop::collection::vec(0..len + 3, 0..4), len).prop_map(
                move |deps| {
                    // Indices past `len` name items that do not exist.
                    deps.into_iter()
                        .enumerate()
                        .map(|(idx, deps)| {
                            let id = ItemId::new(format!("n{idx}")).unwrap();
                            let deps =
                                deps.into_iter().map(|dep| ItemId::new(format!("n{dep}")).unwrap());
                            Item::new(id, "node").with_deps(deps)
                        })
                        .collect::<Vec<_>>()
                },
            )
        })
    }

    proptest! {
        #[test]
        fn drawn_edges_are_declared_and_positioned(items in arbitrary_items(), width in 0.0f64..2000.0) {
            let (report, _) = render(&items, width);
            let declared = items
                .iter()
                .flat_map(|item| item.deps().iter().map(move |dep| (dep.clone(), item.id().clone())))
                .collect::<BTreeSet<_>>();

            for edge in report.edges() {
                prop_assert!(declared.contains(&(edge.from.clone(), edge.to.clone())));
                prop_assert!(report.layout().position(edge.from.as_str()).is_some());
                prop_assert!(report.layout().position(edge.to.as_str()).is_some());
            }

            // Every declared pair between positioned nodes is drawn.
            let drawable = declared
                .iter()
                .filter(|(from, to)| {
                    report.layout().position(from.as_str()).is_some()
                        && report.layout().position(to.as_str()).is_some()
                })
                .count();
            let drawn = report
                .edges()
                .iter()
                .map(|edge| (edge.from.clone(), edge.to.clone()))
                .collect::<BTreeSet<_>>();
            prop_assert_eq!(drawn.len(), drawable);
        }
    }
}
