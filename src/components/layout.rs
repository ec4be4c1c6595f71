//! Layout - the general-purpose flex container.
//!
//! Consumes direction and wrap flags, axis alignment keywords, flex sizing,
//! and an optional explicit style override; produces a merged style record
//! and renders a single container node through the surface, forwarding
//! passthrough attributes and children unchanged.

use crate::align::{resolve_cross_axis, resolve_main_axis};
use crate::node::{AttrBag, RenderSurface};
use crate::style::StyleRecord;
use crate::types::{DirectionFlags, WrapFlags};

// =============================================================================
// Layout Props
// =============================================================================

/// Properties for the Layout container.
///
/// All fields are optional; the defaults are a plain non-wrapping row.
/// Alignment keywords stay strings on purpose: out-of-vocabulary values
/// resolve to the axis default instead of failing (see [`crate::align`]).
///
/// # Example
///
/// ```
/// use flex_layout::{layout, LayoutProps, DirectionFlags, StyleValue, ValueSurface};
///
/// let mut surface = ValueSurface::<&str>::new();
/// let node = layout(
///     &mut surface,
///     LayoutProps {
///         direction: DirectionFlags::COLUMN,
///         justify_content: Some("spaced".into()),
///         ..Default::default()
///     },
///     "children",
/// );
/// assert_eq!(
///     node.style.get("flexDirection"),
///     Some(&StyleValue::Keyword("column")),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutProps {
    /// Direction flags: `COLUMN`, `ROW_REVERSE`, `COLUMN_REVERSE`.
    pub direction: DirectionFlags,

    /// Main-axis alignment keyword (start, center, end, spaced, around, ...).
    pub justify_content: Option<String>,

    /// Cross-axis alignment keyword (start, center, end, stretch, baseline).
    pub align_items: Option<String>,

    /// Cross-axis self-alignment keyword, same vocabulary as `align_items`.
    pub align_self: Option<String>,

    /// Main-axis alignment keyword for multi-line wrapped content.
    pub align_content: Option<String>,

    /// Wrap flags: `WRAP`, `WRAP_REVERSE`.
    pub wrap: WrapFlags,

    /// Flex grow factor. Zero is omitted from the record entirely.
    pub flex_grow: Option<f32>,

    /// Flex basis size string ("auto", "40", "40%").
    pub flex_basis: Option<String>,

    /// Explicit style override, merged last; wins on every key collision.
    pub style: Option<StyleRecord>,

    /// Passthrough attributes, forwarded verbatim to the rendered node.
    pub attrs: AttrBag,
}

// =============================================================================
// Style Composition
// =============================================================================

/// Compose the style record for a set of layout props.
///
/// Assembly order is fixed - later entries win on key collision, and the
/// explicit override is merged last so it always wins:
/// display marker, direction, justify-content, align-items, align-self,
/// align-content, wrap, flex-grow, flex-basis, override.
pub fn compose_style(props: &LayoutProps) -> StyleRecord {
    let mut style = StyleRecord::new();
    style.set("display", "flex");
    style.set("flexDirection", props.direction.resolve().as_str());

    if let Some(keyword) = props.justify_content.as_deref() {
        style.set("justifyContent", resolve_main_axis(Some(keyword)).as_str());
    }
    if let Some(keyword) = props.align_items.as_deref() {
        style.set("alignItems", resolve_cross_axis(Some(keyword)).as_str());
    }
    if let Some(keyword) = props.align_self.as_deref() {
        style.set("alignSelf", resolve_cross_axis(Some(keyword)).as_str());
    }
    if let Some(keyword) = props.align_content.as_deref() {
        style.set("alignContent", resolve_main_axis(Some(keyword)).as_str());
    }

    style.set("flexWrap", props.wrap.resolve().as_str());

    if let Some(grow) = props.flex_grow {
        // Zero (and NaN) grow is omitted, not written as 0.
        if grow != 0.0 && !grow.is_nan() {
            style.set("flexGrow", grow);
        }
    }
    if let Some(basis) = props.flex_basis.as_deref() {
        if !basis.is_empty() {
            style.set("flexBasis", basis.to_owned());
        }
    }

    if let Some(override_style) = &props.style {
        style.merge(override_style.clone());
    }

    style
}

// =============================================================================
// Render
// =============================================================================

/// Render a layout container node through the surface.
///
/// Pure per-invocation derivation: no state survives the call, and identical
/// props produce an identical style record.
pub fn layout<S: RenderSurface>(
    surface: &mut S,
    props: LayoutProps,
    children: S::Content,
) -> S::Node {
    let style = compose_style(&props);
    surface.render_node(style, props.attrs, children)
}

// =============================================================================
// Tests
// =============================================================================
