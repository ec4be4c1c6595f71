//! Rendered node description and the render surface boundary.
//!
//! The components in this crate never render anything themselves: they
//! assemble a style record plus a passthrough attribute bag and hand both,
//! together with the caller's children, to a [`RenderSurface`]. The surface
//! owns node lifecycle entirely; [`ValueSurface`] is the identity surface
//! for consumers (and tests) that want the plain node description.

use std::marker::PhantomData;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::style::StyleRecord;

// =============================================================================
// Attribute Bag
// =============================================================================

/// Passthrough attributes, forwarded verbatim to the rendered node.
///
/// Ordered, last write wins - same collision rule as [`StyleRecord`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrBag {
    entries: Vec<(String, String)>,
}

impl AttrBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any existing value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder-style `set`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Look up an attribute by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AttrBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Rendered Node
// =============================================================================

/// A container node description: assembled style, passthrough attributes,
/// and the caller's children, untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedNode<C> {
    pub style: StyleRecord,
    pub attrs: AttrBag,
    pub children: C,
}

// =============================================================================
// Render Surface
// =============================================================================

/// The external "render a node" primitive the components delegate to.
///
/// `Content` is whatever the surface treats as renderable children; `Node`
/// is whatever it hands back. The components place no constraints on either
/// beyond flexbox-style-record compatibility.
pub trait RenderSurface {
    type Content;
    type Node;

    fn render_node(
        &mut self,
        style: StyleRecord,
        attrs: AttrBag,
        children: Self::Content,
    ) -> Self::Node;
}

/// Identity surface: the rendered node is the node description itself.
pub struct ValueSurface<C> {
    _marker: PhantomData<C>,
}

impl<C> ValueSurface<C> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<C> Default for ValueSurface<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> RenderSurface for ValueSurface<C> {
    type Content = C;
    type Node = RenderedNode<C>;

    fn render_node(&mut self, style: StyleRecord, attrs: AttrBag, children: C) -> RenderedNode<C> {
        RenderedNode {
            style,
            attrs,
            children,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
