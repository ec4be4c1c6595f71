//! End-to-end behavior of the container components.
//!
//! Everything here goes through the public surface: props in, rendered
//! nodes and serialized style records out.

use serde_json::json;

use flex_layout::{
    column, compose_style, layout, row, AttrBag, ColumnProps, DirectionFlags, LayoutProps,
    RowProps, StyleRecord, StyleValue, ValueSurface, WrapFlags,
};

fn render_layout(props: LayoutProps) -> serde_json::Value {
    let mut surface = ValueSurface::<serde_json::Value>::new();
    let node = layout(&mut surface, props, json!(null));
    serde_json::to_value(&node.style).unwrap()
}

#[test]
fn test_default_record_is_minimal() {
    let record = render_layout(LayoutProps::default());
    assert_eq!(
        record,
        json!({
            "display": "flex",
            "flexDirection": "row",
            "flexWrap": "noWrap",
        })
    );
}

#[test]
fn test_full_record_key_order() {
    let props = LayoutProps {
        direction: DirectionFlags::COLUMN,
        justify_content: Some("center".into()),
        align_items: Some("end".into()),
        align_self: Some("start".into()),
        align_content: Some("around".into()),
        wrap: WrapFlags::WRAP,
        flex_grow: Some(2.0),
        flex_basis: Some("30%".into()),
        ..Default::default()
    };

    let style = compose_style(&props);
    let keys: Vec<&str> = style.iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        [
            "display",
            "flexDirection",
            "justifyContent",
            "alignItems",
            "alignSelf",
            "alignContent",
            "flexWrap",
            "flexGrow",
            "flexBasis",
        ]
    );
}

#[test]
fn test_alignment_keywords_translate() {
    let record = render_layout(LayoutProps {
        justify_content: Some("spaced".into()),
        align_items: Some("baseline".into()),
        ..Default::default()
    });
    assert_eq!(record["justifyContent"], "space-between");
    assert_eq!(record["alignItems"], "baseline");
}

#[test]
fn test_unrecognized_keywords_fall_back() {
    let record = render_layout(LayoutProps {
        justify_content: Some("sideways".into()),
        align_items: Some("sideways".into()),
        ..Default::default()
    });
    assert_eq!(record["justifyContent"], "flex-start");
    assert_eq!(record["alignItems"], "stretch");
}

#[test]
fn test_direction_precedence() {
    let record = render_layout(LayoutProps {
        direction: DirectionFlags::COLUMN | DirectionFlags::ROW_REVERSE,
        ..Default::default()
    });
    assert_eq!(record["flexDirection"], "row-reverse");

    let record = render_layout(LayoutProps {
        direction: DirectionFlags::COLUMN | DirectionFlags::COLUMN_REVERSE,
        ..Default::default()
    });
    assert_eq!(record["flexDirection"], "column-reverse");
}

#[test]
fn test_zero_grow_and_empty_basis_omitted() {
    let record = render_layout(LayoutProps {
        flex_grow: Some(0.0),
        flex_basis: Some(String::new()),
        ..Default::default()
    });
    assert!(record.get("flexGrow").is_none());
    assert!(record.get("flexBasis").is_none());
}

#[test]
fn test_explicit_style_overrides_everything() {
    let record = render_layout(LayoutProps {
        justify_content: Some("center".into()),
        style: Some(
            StyleRecord::new()
                .with("justifyContent", "flex-end")
                .with("padding", "8".to_string()),
        ),
        ..Default::default()
    });
    assert_eq!(record["justifyContent"], "flex-end");
    assert_eq!(record["padding"], "8");
}

#[test]
fn test_override_keeps_original_position() {
    let props = LayoutProps {
        justify_content: Some("center".into()),
        wrap: WrapFlags::WRAP,
        style: Some(StyleRecord::new().with("justifyContent", "flex-end")),
        ..Default::default()
    };
    let style = compose_style(&props);
    let keys: Vec<&str> = style.iter().map(|(k, _)| k).collect();
    // Replaced in place, not re-appended.
    assert_eq!(keys, ["display", "flexDirection", "justifyContent", "flexWrap"]);
    assert_eq!(
        style.get("justifyContent"),
        Some(&StyleValue::Keyword("flex-end"))
    );
}

#[test]
fn test_row_and_column_mirror_each_other() {
    let row_props: LayoutProps = RowProps {
        horizontal: Some("center".into()),
        vertical: Some("end".into()),
        ..Default::default()
    }
    .into();
    let column_props: LayoutProps = ColumnProps {
        horizontal: Some("end".into()),
        vertical: Some("center".into()),
        ..Default::default()
    }
    .into();

    let row_style = compose_style(&row_props);
    let column_style = compose_style(&column_props);

    // Same alignment, perpendicular axes.
    assert_eq!(
        row_style.get("justifyContent"),
        column_style.get("justifyContent")
    );
    assert_eq!(row_style.get("alignItems"), column_style.get("alignItems"));
    assert_eq!(
        row_style.get("flexDirection"),
        Some(&StyleValue::Keyword("row"))
    );
    assert_eq!(
        column_style.get("flexDirection"),
        Some(&StyleValue::Keyword("column"))
    );
}

#[test]
fn test_row_wrap_and_style_forwarded() {
    let props: LayoutProps = RowProps {
        wrap: WrapFlags::WRAP,
        style: Some(StyleRecord::new().with("gap", "4".to_string())),
        ..Default::default()
    }
    .into();
    let style = compose_style(&props);
    assert_eq!(style.get("flexWrap"), Some(&StyleValue::Keyword("wrap")));
    assert_eq!(style.get("gap"), Some(&StyleValue::Str("4".into())));
}

#[test]
fn test_rendered_node_serializes_whole() {
    let mut surface = ValueSurface::<serde_json::Value>::new();
    let node = row(
        &mut surface,
        RowProps {
            reverse: true,
            flex: Some(1.5),
            attrs: AttrBag::new().with("id", "header"),
            ..Default::default()
        },
        json!(["left", "right"]),
    );

    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({
            "style": {
                "display": "flex",
                "flexDirection": "row-reverse",
                "flexWrap": "noWrap",
                "flexGrow": 1.5,
            },
            "attrs": { "id": "header" },
            "children": ["left", "right"],
        })
    );
}

#[test]
fn test_compose_is_pure() {
    let props = LayoutProps {
        direction: DirectionFlags::COLUMN,
        justify_content: Some("around".into()),
        flex_grow: Some(3.0),
        ..Default::default()
    };
    assert_eq!(compose_style(&props), compose_style(&props));
}

#[test]
fn test_nested_containers() {
    let mut surface = ValueSurface::<serde_json::Value>::new();
    let inner = column(
        &mut surface,
        ColumnProps {
            vertical: Some("center".into()),
            ..Default::default()
        },
        json!("content"),
    );
    let inner_value = serde_json::to_value(&inner).unwrap();
    let outer = row(
        &mut surface,
        RowProps::default(),
        json!([inner_value]),
    );

    let rendered = serde_json::to_value(&outer).unwrap();
    assert_eq!(rendered["children"][0]["style"]["flexDirection"], "column");
    assert_eq!(
        rendered["children"][0]["style"]["justifyContent"],
        "center"
    );
}
