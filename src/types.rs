//! Core types for flex-layout.
//!
//! The typed vocabulary the style record is built from: direction and wrap
//! flag sets on the input side, concrete flexbox alignment values on the
//! output side. The string each value renders to is the one flexbox-based
//! renderers understand.

use bitflags::bitflags;

// =============================================================================
// Direction Flags
// =============================================================================

bitflags! {
    /// Direction flags for the layout container.
    ///
    /// Three interacting flags rather than a single direction enum, because
    /// that is the input shape: callers toggle `COLUMN` for the axis and a
    /// reverse flag independently. Conflicts are never an error; `resolve`
    /// applies a fixed precedence.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DirectionFlags: u8 {
        const COLUMN = 1 << 0;
        const ROW_REVERSE = 1 << 1;
        const COLUMN_REVERSE = 1 << 2;
    }
}

impl DirectionFlags {
    /// Resolve the flag set to a concrete direction.
    ///
    /// Precedence: `ROW_REVERSE` > `COLUMN_REVERSE` > `COLUMN` > row.
    /// The reverse flags pick the orientation outright; `COLUMN` only
    /// matters when neither reverse flag is set.
    pub fn resolve(self) -> FlexDirection {
        if self.contains(Self::ROW_REVERSE) {
            FlexDirection::RowReverse
        } else if self.contains(Self::COLUMN_REVERSE) {
            FlexDirection::ColumnReverse
        } else if self.contains(Self::COLUMN) {
            FlexDirection::Column
        } else {
            FlexDirection::Row
        }
    }
}

// =============================================================================
// Wrap Flags
// =============================================================================

bitflags! {
    /// Wrap flags for the layout container.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WrapFlags: u8 {
        const WRAP = 1 << 0;
        const WRAP_REVERSE = 1 << 1;
    }
}

impl WrapFlags {
    /// Resolve the flag set to a concrete wrap mode.
    ///
    /// `WRAP` wins over `WRAP_REVERSE`; neither means no-wrap.
    pub fn resolve(self) -> FlexWrap {
        if self.contains(Self::WRAP) {
            FlexWrap::Wrap
        } else if self.contains(Self::WRAP_REVERSE) {
            FlexWrap::WrapReverse
        } else {
            FlexWrap::NoWrap
        }
    }
}

// =============================================================================
// Flex Enums - resolved style values
// =============================================================================

/// Flex direction for container layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    /// The style-record value for this direction.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::RowReverse => "row-reverse",
            Self::Column => "column",
            Self::ColumnReverse => "column-reverse",
        }
    }
}

/// Flex wrap behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

impl FlexWrap {
    /// The style-record value for this wrap mode.
    ///
    /// `noWrap` is spelled exactly as downstream renderers expect it.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoWrap => "noWrap",
            Self::Wrap => "wrap",
            Self::WrapReverse => "wrap-reverse",
        }
    }
}

/// Main-axis alignment (justify-content and multi-line align-content).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainAxisAlign {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
}

impl MainAxisAlign {
    /// The style-record value for this alignment.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FlexStart => "flex-start",
            Self::Center => "center",
            Self::FlexEnd => "flex-end",
            Self::SpaceBetween => "space-between",
            Self::SpaceAround => "space-around",
        }
    }
}

/// Cross-axis alignment (align-items and align-self).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossAxisAlign {
    #[default]
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
    Baseline,
}

impl CrossAxisAlign {
    /// The style-record value for this alignment.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::FlexStart => "flex-start",
            Self::Center => "center",
            Self::FlexEnd => "flex-end",
            Self::Baseline => "baseline",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_default_is_row() {
        assert_eq!(DirectionFlags::empty().resolve(), FlexDirection::Row);
        assert_eq!(DirectionFlags::default(), DirectionFlags::empty());
    }

    #[test]
    fn test_direction_column() {
        assert_eq!(DirectionFlags::COLUMN.resolve(), FlexDirection::Column);
    }

    #[test]
    fn test_direction_row_reverse_wins_over_column() {
        let flags = DirectionFlags::COLUMN | DirectionFlags::ROW_REVERSE;
        assert_eq!(flags.resolve(), FlexDirection::RowReverse);
    }

    #[test]
    fn test_direction_row_reverse_wins_over_column_reverse() {
        let flags = DirectionFlags::ROW_REVERSE
            | DirectionFlags::COLUMN_REVERSE
            | DirectionFlags::COLUMN;
        assert_eq!(flags.resolve(), FlexDirection::RowReverse);
    }

    #[test]
    fn test_direction_column_reverse() {
        let flags = DirectionFlags::COLUMN_REVERSE | DirectionFlags::COLUMN;
        assert_eq!(flags.resolve(), FlexDirection::ColumnReverse);
    }

    #[test]
    fn test_wrap_default_is_no_wrap() {
        assert_eq!(WrapFlags::empty().resolve(), FlexWrap::NoWrap);
    }

    #[test]
    fn test_wrap_wins_over_wrap_reverse() {
        let flags = WrapFlags::WRAP | WrapFlags::WRAP_REVERSE;
        assert_eq!(flags.resolve(), FlexWrap::Wrap);
    }

    #[test]
    fn test_wrap_reverse_alone() {
        assert_eq!(WrapFlags::WRAP_REVERSE.resolve(), FlexWrap::WrapReverse);
    }

    #[test]
    fn test_style_record_strings() {
        assert_eq!(FlexDirection::RowReverse.as_str(), "row-reverse");
        assert_eq!(FlexWrap::NoWrap.as_str(), "noWrap");
        assert_eq!(FlexWrap::WrapReverse.as_str(), "wrap-reverse");
        assert_eq!(MainAxisAlign::SpaceBetween.as_str(), "space-between");
        assert_eq!(CrossAxisAlign::Baseline.as_str(), "baseline");
    }
}
