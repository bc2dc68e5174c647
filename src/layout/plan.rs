// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::model::ItemId;

use super::layers::Layering;

/// A point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A node box in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Where outgoing edges start.
    pub fn right_center(&self) -> Point {
        Point::new(self.right(), self.y + self.height / 2.0)
    }

    /// Where incoming edges end.
    pub fn left_center(&self) -> Point {
        Point::new(self.x, self.y + self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlannedLayout {
    positions: BTreeMap<ItemId, Rect>,
}

impl PlannedLayout {
    pub fn positions(&self) -> &BTreeMap<ItemId, Rect> {
        &self.positions
    }

    pub fn position(&self, id: &str) -> Option<&Rect> {
        self.positions.get(id)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Total horizontal extent of `layer_count` layers, gaps included.
pub fn layout_width(layer_count: usize, config: &LayoutConfig) -> f64 {
    if layer_count == 0 {
        return 0.0;
    }
    layer_count as f64 * (config.node_width + config.layer_gap) - config.layer_gap
}

/// Maps every layered node to a fixed-size box on a surface `surface_width` pixels wide.
///
/// Layers are laid out left to right and the whole diagram is centered horizontally, never
/// starting left of `margin`. Each layer's column is centered vertically within the surface
/// height, never starting above `top_margin`.
pub fn plan_layout(
    layering: &Layering,
    surface_width: f64,
    config: &LayoutConfig,
) -> PlannedLayout {
    let total_width = layout_width(layering.layers().len(), config);
    let start_x = config.margin.max((surface_width - total_width) / 2.0);
    let column_step = config.node_width + config.layer_gap;
    let row_step = config.node_height + config.node_gap;

    let mut positions = BTreeMap::<ItemId, Rect>::new();
    for (layer_idx, layer) in layering.layers().iter().enumerate() {
        let x = start_x + layer_idx as f64 * column_step;
        let layer_height = layer.len() as f64 * row_step - config.node_gap;
        let start_y = config.top_margin.max((config.surface_height - layer_height) / 2.0);

        for (idx, id) in layer.iter().enumerate() {
            let rect = Rect {
                x,
                y: start_y + idx as f64 * row_step,
                width: config.node_width,
                height: config.node_height,
            };
            positions.insert(id.clone(), rect);
        }
    }

    PlannedLayout { positions }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{layout_width, plan_layout, Rect};
    use crate::config::LayoutConfig;
    use crate::layout::{assign_layers, extract_graph, Layering, DEFAULT_MAX_LAYER_PASSES};
    use crate::model::{fixtures, Item, ItemId};

    fn layering_of(items: &[Item]) -> Layering {
        assign_layers(&extract_graph(items), DEFAULT_MAX_LAYER_PASSES)
    }

    fn config() -> LayoutConfig {
        LayoutConfig {
            node_width: 100.0,
            node_height: 40.0,
            layer_gap: 50.0,
            node_gap: 10.0,
            margin: 20.0,
            top_margin: 20.0,
            surface_height: 400.0,
            max_layer_passes: DEFAULT_MAX_LAYER_PASSES,
        }
    }

    #[test]
    fn centers_the_diagram_on_wide_surfaces() {
        let items = fixtures::diamond();
        let layout = plan_layout(&layering_of(&items), 1000.0, &config());

        // 3 layers: 3 * 150 - 50 = 400 wide, so x starts at (1000 - 400) / 2.
        assert_eq!(layout_width(3, &config()), 400.0);
        assert_eq!(layout.position("A").unwrap().x, 300.0);
        assert_eq!(layout.position("B").unwrap().x, 450.0);
        assert_eq!(layout.position("D").unwrap().x, 600.0);
    }

    #[test]
    fn centers_each_layer_vertically() {
        let items = fixtures::diamond();
        let layout = plan_layout(&layering_of(&items), 1000.0, &config());

        // Single node: (400 - 40) / 2 = 180.
        assert_eq!(layout.position("A").unwrap().y, 180.0);
        // Two nodes: height 2 * 50 - 10 = 90, start (400 - 90) / 2 = 155.
        assert_eq!(layout.position("B").unwrap().y, 155.0);
        assert_eq!(layout.position("C").unwrap().y, 205.0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(120.0)]
    #[case(-50.0)]
    fn falls_back_to_left_margin_on_narrow_surfaces(#[case] width: f64) {
        let items = fixtures::diamond();
        let layout = plan_layout(&layering_of(&items), width, &config());
        assert_eq!(layout.position("A").unwrap().x, 20.0);
    }

    #[test]
    fn tall_layers_start_at_top_margin() {
        let mut items = vec![Item::new(ItemId::new("root").unwrap(), "root")];
        for idx in 0..12 {
            let id = ItemId::new(format!("leaf{idx:02}")).unwrap();
            items.push(Item::new(id, "leaf").with_deps([ItemId::new("root").unwrap()]));
        }
        let layout = plan_layout(&layering_of(&items), 800.0, &config());
        assert_eq!(layout.position("leaf00").unwrap().y, 20.0);
        assert_eq!(layout.position("leaf11").unwrap().y, 20.0 + 11.0 * 50.0);
    }

    #[test]
    fn every_node_gets_one_fixed_size_box() {
        let items = fixtures::chain_into_cycle();
        let layering = layering_of(&items);
        let layout = plan_layout(&layering, 900.0, &config());
        assert_eq!(layout.len(), layering.node_count());
        for rect in layout.positions().values() {
            assert_eq!((rect.width, rect.height), (100.0, 40.0));
        }
    }

    #[test]
    fn planning_is_deterministic() {
        let items = fixtures::chain_into_cycle();
        let layering = layering_of(&items);
        let first = plan_layout(&layering, 731.0, &config());
        let second = plan_layout(&layering, 731.0, &config());
        assert_eq!(first, second);
        let bits = |rect: &Rect| [rect.x.to_bits(), rect.y.to_bits()];
        assert!(first
            .positions()
            .values()
            .zip(second.positions().values())
            .all(|(a, b)| bits(a) == bits(b)));
    }

    #[test]
    fn anchors_sit_on_box_sides() {
        let rect = Rect { x: 10.0, y: 20.0, width: 100.0, height: 40.0 };
        assert_eq!((rect.right_center().x, rect.right_center().y), (110.0, 40.0));
        assert_eq!((rect.left_center().x, rect.left_center().y), (10.0, 40.0));
    }
}
