//! Row - horizontal layout adapter over Layout.
//!
//! `horizontal` and `vertical` are the axis names callers think in; a row's
//! main axis is horizontal, so `horizontal` feeds justify-content and
//! `vertical` feeds align-items. The generic names remain usable as
//! fallbacks when the domain names are absent. All alignment resolution
//! stays in Layout.

use crate::components::layout::{layout, LayoutProps};
use crate::node::{AttrBag, RenderSurface};
use crate::style::StyleRecord;
use crate::types::{DirectionFlags, WrapFlags};

/// Properties for the Row container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowProps {
    /// Reverse the row (right to left).
    pub reverse: bool,

    /// Flex grow factor, forwarded as Layout's `flex_grow`.
    pub flex: Option<f32>,

    /// Main-axis alignment keyword (this is a row, so: horizontal).
    pub horizontal: Option<String>,

    /// Cross-axis alignment keyword.
    pub vertical: Option<String>,

    /// Generic fallback for `horizontal`.
    pub justify_content: Option<String>,

    /// Generic fallback for `vertical`.
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

impl From<RowProps> for LayoutProps {
    fn from(props: RowProps) -> Self {
        let RowProps {
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

        let mut direction = DirectionFlags::empty();
        if reverse {
            direction |= DirectionFlags::ROW_REVERSE;
        }

        LayoutProps {
            direction,
            justify_content: horizontal.or(justify_content),
            align_items: vertical.or(align_items),
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

/// Render a horizontal container node through the surface.
pub fn row<S: RenderSurface>(surface: &mut S, props: RowProps, children: S::Content) -> S::Node {
    layout(surface, props.into(), children)
}

// =============================================================================
// Tests
// =============================================================================
