//! Taffy Surface - renders style records through the Taffy layout engine.
//!
//! A `TaffySurface` is a `RenderSurface` whose nodes live in a real
//! `TaffyTree`. Composed style records are translated into `taffy::Style`
//! values, so the vocabulary the components emit can be checked against an
//! actual W3C-compliant flexbox implementation.

use log::debug;
use taffy::{
    AlignContent as TaffyAlignContent, AlignItems as TaffyAlignItems, AlignSelf as TaffyAlignSelf,
    AvailableSpace, Dimension as TaffyDimension, Display, FlexDirection as TaffyFlexDirection,
    FlexWrap as TaffyFlexWrap, JustifyContent as TaffyJustifyContent, Layout, NodeId, Size, Style,
    TaffyTree,
};

use crate::node::{AttrBag, RenderSurface};
use crate::style::{StyleRecord, StyleValue};

// =============================================================================
// VALUE EXTRACTION
// =============================================================================

fn as_str(value: &StyleValue) -> Option<&str> {
    match value {
        StyleValue::Keyword(k) => Some(k),
        StyleValue::Str(s) => Some(s.as_str()),
        StyleValue::Number(_) => None,
    }
}

fn as_number(value: &StyleValue) -> Option<f32> {
    match value {
        StyleValue::Number(n) => Some(*n as f32),
        StyleValue::Keyword(_) | StyleValue::Str(_) => None,
    }
}

/// Parse a size string: `auto`, a bare number of units, or a percentage.
fn parse_dimension(value: &StyleValue) -> TaffyDimension {
    if let Some(n) = as_number(value) {
        return TaffyDimension::Length(n);
    }
    match as_str(value) {
        Some("auto") | None => TaffyDimension::Auto,
        Some(s) => {
            if let Some(percent) = s.strip_suffix('%') {
                match percent.trim().parse::<f32>() {
                    Ok(p) => TaffyDimension::Percent(p / 100.0),
                    Err(_) => TaffyDimension::Auto,
                }
            } else {
                match s.trim().parse::<f32>() {
                    Ok(n) => TaffyDimension::Length(n),
                    Err(_) => TaffyDimension::Auto,
                }
            }
        }
    }
}

// =============================================================================
// KEYWORD CONVERSIONS
// =============================================================================

fn to_taffy_flex_direction(keyword: &str) -> TaffyFlexDirection {
    match keyword {
        "column" => TaffyFlexDirection::Column,
        "column-reverse" => TaffyFlexDirection::ColumnReverse,
        "row-reverse" => TaffyFlexDirection::RowReverse,
        _ => TaffyFlexDirection::Row,
    }
}

fn to_taffy_flex_wrap(keyword: &str) -> TaffyFlexWrap {
    match keyword {
        "wrap" => TaffyFlexWrap::Wrap,
        "wrap-reverse" => TaffyFlexWrap::WrapReverse,
        _ => TaffyFlexWrap::NoWrap,
    }
}

fn to_taffy_justify_content(keyword: &str) -> Option<TaffyJustifyContent> {
    match keyword {
        "flex-start" => Some(TaffyJustifyContent::FlexStart),
        "center" => Some(TaffyJustifyContent::Center),
        "flex-end" => Some(TaffyJustifyContent::FlexEnd),
        "space-between" => Some(TaffyJustifyContent::SpaceBetween),
        "space-around" => Some(TaffyJustifyContent::SpaceAround),
        _ => None,
    }
}

fn to_taffy_align_items(keyword: &str) -> Option<TaffyAlignItems> {
    match keyword {
        "stretch" => Some(TaffyAlignItems::Stretch),
        "flex-start" => Some(TaffyAlignItems::FlexStart),
        "center" => Some(TaffyAlignItems::Center),
        "flex-end" => Some(TaffyAlignItems::FlexEnd),
        "baseline" => Some(TaffyAlignItems::Baseline),
        _ => None,
    }
}

fn to_taffy_align_self(keyword: &str) -> Option<TaffyAlignSelf> {
    // Same vocabulary as align-items.
    to_taffy_align_items(keyword)
}

fn to_taffy_align_content(keyword: &str) -> Option<TaffyAlignContent> {
    match keyword {
        "flex-start" => Some(TaffyAlignContent::FlexStart),
        "center" => Some(TaffyAlignContent::Center),
        "flex-end" => Some(TaffyAlignContent::FlexEnd),
        "space-between" => Some(TaffyAlignContent::SpaceBetween),
        "space-around" => Some(TaffyAlignContent::SpaceAround),
        _ => None,
    }
}

// =============================================================================
// STYLE BUILDING
// =============================================================================

/// Build a Taffy `Style` from a composed style record.
///
/// Entries outside the record vocabulary (plus `width`/`height`, which
/// overrides commonly carry) are ignored.
pub fn to_taffy_style(record: &StyleRecord) -> Style {
    let mut style = Style {
        display: Display::Flex,
        ..Default::default()
    };

    for (key, value) in record.iter() {
        match key {
            "display" => {}
            "flexDirection" => {
                if let Some(k) = as_str(value) {
                    style.flex_direction = to_taffy_flex_direction(k);
                }
            }
            "flexWrap" => {
                if let Some(k) = as_str(value) {
                    style.flex_wrap = to_taffy_flex_wrap(k);
                }
            }
            "justifyContent" => {
                style.justify_content = as_str(value).and_then(to_taffy_justify_content);
            }
            "alignItems" => {
                style.align_items = as_str(value).and_then(to_taffy_align_items);
            }
            "alignSelf" => {
                style.align_self = as_str(value).and_then(to_taffy_align_self);
            }
            "alignContent" => {
                style.align_content = as_str(value).and_then(to_taffy_align_content);
            }
            "flexGrow" => {
                if let Some(n) = as_number(value) {
                    style.flex_grow = n;
                }
            }
            "flexBasis" => {
                style.flex_basis = parse_dimension(value);
            }
            "width" => {
                style.size.width = parse_dimension(value);
            }
            "height" => {
                style.size.height = parse_dimension(value);
            }
            other => {
                debug!("style entry {other:?} has no layout meaning, skipping");
            }
        }
    }

    style
}

// =============================================================================
// TAFFY SURFACE
// =============================================================================

/// A render surface backed by a `TaffyTree`.
///
/// Children are plain `NodeId`s created on this surface, either by earlier
/// container renders or by [`TaffySurface::leaf`].
pub struct TaffySurface {
    tree: TaffyTree,
    attrs: Vec<(NodeId, AttrBag)>,
}

impl TaffySurface {
    pub fn new() -> Self {
        Self {
            tree: TaffyTree::new(),
            attrs: Vec::new(),
        }
    }

    /// Create a fixed-size leaf, typically a piece of content under test.
    pub fn leaf(&mut self, width: f32, height: f32) -> NodeId {
        let style = Style {
            size: Size {
                width: TaffyDimension::Length(width),
                height: TaffyDimension::Length(height),
            },
            ..Default::default()
        };
        self.tree.new_leaf(style).unwrap()
    }

    /// Run flexbox layout on `root` within a definite viewport.
    pub fn compute(&mut self, root: NodeId, width: f32, height: f32) {
        let available = Size {
            width: AvailableSpace::Definite(width),
            height: AvailableSpace::Definite(height),
        };
        let _ = self.tree.compute_layout(root, available);
    }

    /// Computed geometry for a node, if layout has run.
    pub fn layout_of(&self, node: NodeId) -> Option<Layout> {
        self.tree.layout(node).ok().copied()
    }

    /// Passthrough attributes recorded for a rendered container.
    pub fn attrs_of(&self, node: NodeId) -> Option<&AttrBag> {
        self.attrs
            .iter()
            .find(|(id, _)| *id == node)
            .map(|(_, bag)| bag)
    }
}

impl Default for TaffySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for TaffySurface {
    type Content = Vec<NodeId>;
    type Node = NodeId;

    fn render_node(&mut self, style: StyleRecord, attrs: AttrBag, children: Vec<NodeId>) -> NodeId {
        let taffy_style = to_taffy_style(&style);
        let node = self.tree.new_leaf(taffy_style).unwrap();
        for child in children {
            let _ = self.tree.add_child(node, child);
        }
        if !attrs.is_empty() {
            self.attrs.push((node, attrs));
        }
        node
    }
}

// =============================================================================
// Tests
// =============================================================================
