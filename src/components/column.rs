//! Column - vertical layout adapter over Layout.
//!
//! The axis-name remap is the mirror image of Row: a column's main axis is
//! vertical, so `vertical` feeds justify-content and `horizontal` feeds
//! align-items. Everything else forwards unchanged.

use crate::components::layout::{layout, LayoutProps};
use crate::node::{AttrBag, RenderSurface};
use crate::style::StyleRecord;
use crate::types::{DirectionFlags, WrapFlags};

/// Properties for the Column container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnProps {
    /// Reverse the column (bottom to top).
    pub reverse: bool,

    /// Flex grow factor, forwarded as Layout's `flex_grow`.
    pub flex: Option<f32>,

    /// Cross-axis alignment keyword (this is a column, so: horizontal).
    pub horizontal: Option<String>,

    /// Main-axis alignment keyword.
    pub vertical: Option<String>,

    /// Generic fallback for `vertical`.
    pub justify_content: Option<String>,

    /// Generic fallback for `horizontal`.
    pub align_items: Option<String>,

    /// Cross-axis self-alignment keyword, forwarded unchanged.
    pub align_self: Option<String>,

    /// Multi-line alignment keyword, forwarded unchanged.
    pub align_content: Option<String>,

    /// Wrap flags, forwarded unchanged.
    pub wrap: WrapFlags,

    /// Flex basis size string, forwarded unchanged.
    pub flex_basis: Option<String>,

    /// Explicit style override, forwarded unchanged.
    pub style: Option<StyleRecord>,

    /// Passthrough attributes, forwarded unchanged.
    pub attrs: AttrBag,
}

impl From<ColumnProps> for LayoutProps {
    fn from(props: ColumnProps) -> Self {
        let ColumnProps {
            reverse,
            flex,
            horizontal,
            vertical,
            justify_content,
            align_items,
            align_self,
            align_content,
            wrap,
            flex_basis,
            style,
            attrs,
        } = props;

        let mut direction = DirectionFlags::COLUMN;
        if reverse {
            direction |= DirectionFlags::COLUMN_REVERSE;
        }

        LayoutProps {
            direction,
            justify_content: vertical.or(justify_content),
            align_items: horizontal.or(align_items),
            align_self,
            align_content,
            wrap,
            flex_grow: flex,
            flex_basis,
            style,
            attrs,
        }
    }
}

/// Render a vertical container node through the surface.
pub fn column<S: RenderSurface>(
    surface: &mut S,
    props: ColumnProps,
    children: S::Content,
) -> S::Node {
    layout(surface, props.into(), children)
}

// =============================================================================
// Tests
// =============================================================================
