//! Axis alignment resolution.
//!
//! Maps semantic alignment keywords onto the concrete main-axis and
//! cross-axis vocabularies. Both functions are total: absent or unrecognized
//! keywords resolve to the axis default (packed start on the main axis,
//! stretch-to-fill on the cross axis) rather than erroring. `spaced` and
//! `around` are accepted as synonyms for `space-between` and `space-around`.

use log::trace;

use crate::types::{CrossAxisAlign, MainAxisAlign};

/// Resolve a main-axis keyword to a concrete alignment value.
pub fn resolve_main_axis(keyword: Option<&str>) -> MainAxisAlign {
    match keyword {
        Some("start") => MainAxisAlign::FlexStart,
        Some("center") => MainAxisAlign::Center,
        Some("end") => MainAxisAlign::FlexEnd,
        Some("space-between" | "spaced") => MainAxisAlign::SpaceBetween,
        Some("space-around" | "around") => MainAxisAlign::SpaceAround,
        Some(other) => {
            trace!("unrecognized main-axis keyword {other:?}, using flex-start");
            MainAxisAlign::FlexStart
        }
        None => MainAxisAlign::FlexStart,
    }
}

/// Resolve a cross-axis keyword to a concrete alignment value.
pub fn resolve_cross_axis(keyword: Option<&str>) -> CrossAxisAlign {
    match keyword {
        Some("start") => CrossAxisAlign::FlexStart,
        Some("center") => CrossAxisAlign::Center,
        Some("end") => CrossAxisAlign::FlexEnd,
        Some("stretch") => CrossAxisAlign::Stretch,
        Some("baseline") => CrossAxisAlign::Baseline,
        Some(other) => {
            trace!("unrecognized cross-axis keyword {other:?}, using stretch");
            CrossAxisAlign::Stretch
        }
        None => CrossAxisAlign::Stretch,
    }
}

// =============================================================================
// Tests
// =============================================================================
