//! # flex-layout
//!
//! Declarative flexbox layout components.
//!
//! A small presentational layer: semantic alignment props go in, ordered
//! flexbox style records come out. The components own no geometry; a
//! `RenderSurface` (a plain value builder, a Taffy tree, or your own
//! renderer) turns each composed record into a node.
//!
//! ## Pipeline
//!
//! ```text
//! RowProps / ColumnProps → LayoutProps → StyleRecord → RenderSurface → node
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Direction/wrap flag sets and the resolved flexbox enums
//! - [`align`] - Semantic alignment keyword resolution
//! - [`style`] - Ordered style records and values
//! - [`node`] - Render surfaces, rendered nodes, passthrough attributes
//! - [`components`] - The Layout, Row, and Column containers
//! - [`taffy_surface`] - A surface backed by the Taffy flexbox engine

pub mod align;
pub mod components;
pub mod node;
pub mod style;
pub mod taffy_surface;
pub mod types;

// Re-export commonly used items
pub use types::{CrossAxisAlign, DirectionFlags, FlexDirection, FlexWrap, MainAxisAlign, WrapFlags};

pub use align::{resolve_cross_axis, resolve_main_axis};

pub use style::{StyleRecord, StyleValue};

pub use node::{AttrBag, RenderSurface, RenderedNode, ValueSurface};

pub use components::{column, compose_style, layout, row, ColumnProps, LayoutProps, RowProps};

pub use taffy_surface::{to_taffy_style, TaffySurface};
