//! Components - the container building blocks.
//!
//! Layout is the generic flex container; Row and Column are thin adapters
//! that fix an orientation and rename the alignment props to match it.

pub mod column;
pub mod layout;
pub mod row;

pub use column::{column, ColumnProps};
pub use layout::{compose_style, layout, LayoutProps};
pub use row::{row, RowProps};
