//! Tests for HierarchyBuilder

use rstest::rstest;
use serde_json::{json, Number, Value};

use orgtree::domain::{DivisionRecord, HierarchyBuilder, LevelKind, OrgNode};
use orgtree::util::testing;

fn records(value: Value) -> Vec<DivisionRecord> {
    testing::init_test_setup();
    serde_json::from_value(value).expect("records")
}

fn build(value: Value) -> OrgNode {
    HierarchyBuilder::new().build(records(value))
}

#[test]
fn given_no_records_when_building_then_returns_bare_root() {
    // Act
    let root = build(json!([]));

    // Assert
    assert_eq!(root.level_kind(), LevelKind::Government);
    assert_eq!(root.name(), "Yukon");
    assert_eq!(root.order(), Some(&Number::from(0)));
    assert_eq!(root.mailcode(), None);
    assert!(root.children().is_empty());
}

#[test]
fn given_records_without_department_when_building_then_all_are_ignored() {
    // Arrange
    let input = json!([
        {"division": "X", "branch": "Y", "unit": "Z"},
        {"department": "", "division": "X"},
        {"department": null, "order": 3},
        {}
    ]);

    // Act
    let root = build(input);

    // Assert
    assert!(root.children().is_empty());
}

#[rstest]
#[case::department(json!([{"department": "A"}, {"department": "A"}]), &[] as &[&str])]
#[case::division(
    json!([{"department": "A", "division": "X"}, {"department": "A", "division": "X"}]),
    &["X"]
)]
#[case::branch(
    json!([
        {"department": "A", "division": "X", "branch": "B"},
        {"department": "A", "division": "X", "branch": "B"}
    ]),
    &["X", "B"]
)]
#[case::unit(
    json!([
        {"department": "A", "division": "X", "branch": "B", "unit": "U"},
        {"department": "A", "division": "X", "branch": "B", "unit": "U"}
    ]),
    &["X", "B", "U"]
)]
fn given_duplicate_names_when_building_then_each_level_has_one_node(
    #[case] input: Value,
    #[case] path: &[&str],
) {
    // Act
    let root = build(input);

    // Assert
    assert_eq!(root.children().len(), 1);
    let mut node = &root.children()[0];
    for name in path {
        assert_eq!(node.children().len(), 1, "under {}", node.name());
        node = node.get_child(name).expect("child");
    }
    assert!(node.is_leaf());
}

#[test]
fn given_branch_without_division_when_building_then_only_department_is_created() {
    // Act
    let root = build(json!([{"department": "A", "branch": "B", "unit": "U"}]));

    // Assert
    let department = root.get_child("A").expect("department");
    assert!(department.is_leaf());
    assert_eq!(root.node_count(), 2);
}

#[test]
fn given_unit_without_branch_when_building_then_unit_is_ignored() {
    // Act
    let root = build(json!([{"department": "A", "division": "X", "unit": "U"}]));

    // Assert
    let division = root.get_child("A").and_then(|d| d.get_child("X")).unwrap();
    assert!(division.is_leaf());
}

#[test]
fn given_repeated_node_when_building_then_first_metadata_wins() {
    // Arrange
    let input = json!([
        {"department": "A", "division": "X", "order": 1, "mailcode": "M1"},
        {"department": "A", "division": "X", "order": 9, "mailcode": "M9"}
    ]);

    // Act
    let root = build(input);

    // Assert
    let department = root.get_child("A").unwrap();
    assert_eq!(department.order(), Some(&Number::from(1)));
    let division = department.get_child("X").unwrap();
    assert_eq!(division.order(), Some(&Number::from(1)));
    assert_eq!(division.mailcode(), Some("M1"));
}

#[test]
fn given_later_record_introducing_node_when_building_then_later_metadata_is_used() {
    // Arrange: the division first appears on the second record
    let input = json!([
        {"department": "A", "order": 1, "mailcode": "M1"},
        {"department": "A", "division": "X", "order": 2, "mailcode": "M2"}
    ]);

    // Act
    let root = build(input);

    // Assert
    let department = root.get_child("A").unwrap();
    assert_eq!(department.mailcode(), Some("M1"));
    assert_eq!(department.get_child("X").unwrap().mailcode(), Some("M2"));
}

#[test]
fn given_numeric_mailcode_when_building_then_node_is_kept_without_mailcode() {
    // Arrange
    let input = json!([
        {"department": "A", "mailcode": 5},
        {"department": "B", "division": "X", "order": "30", "mailcode": "M2"}
    ]);

    // Act
    let root = build(input);

    // Assert
    let names: Vec<_> = root.children().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(root.get_child("A").unwrap().mailcode(), None);
    let division = root.get_child("B").and_then(|b| b.get_child("X")).unwrap();
    assert_eq!(division.order(), None);
    assert_eq!(division.mailcode(), Some("M2"));
}

#[test]
fn given_names_differing_in_case_or_whitespace_when_building_then_kept_apart() {
    // Act
    let root = build(json!([
        {"department": "Finance"},
        {"department": "finance"},
        {"department": " Finance"}
    ]));

    // Assert
    let names: Vec<_> = root.children().iter().map(OrgNode::name).collect();
    assert_eq!(names, vec!["Finance", "finance", " Finance"]);
}

#[test]
fn given_any_tree_when_walking_then_children_are_one_level_below_parent() {
    // Arrange
    let input = json!([
        {"department": "A", "division": "X", "branch": "B", "unit": "U"},
        {"department": "A", "division": "Y", "branch": "C"},
        {"department": "B", "division": ""}
    ]);

    // Act
    let root = build(input);

    // Assert
    for node in root.iter() {
        for child in node.children() {
            assert_eq!(Some(child.level_kind()), node.child_level_kind());
        }
    }
    assert_eq!(root.depth(), 5);
}

#[test]
fn given_example_records_when_building_then_matches_expected_json() {
    // Arrange
    let input = json!([
        {"department": "A", "division": "X", "order": 1, "mailcode": "M1"},
        {"department": "A", "division": "Y", "order": 2, "mailcode": "M2"},
        {"department": "B"}
    ]);

    // Act
    let root = build(input);

    // Assert
    assert_eq!(
        serde_json::to_value(&root).unwrap(),
        json!({
            "type": "government",
            "name": "Yukon",
            "order": 0,
            "mailcode": null,
            "children": [
                {
                    "type": "department",
                    "name": "A",
                    "order": 1,
                    "mailcode": "M1",
                    "children": [
                        {"type": "division", "name": "X", "order": 1, "mailcode": "M1"},
                        {"type": "division", "name": "Y", "order": 2, "mailcode": "M2"}
                    ]
                },
                {"type": "department", "name": "B", "order": null, "mailcode": null}
            ]
        })
    );
}

#[test]
fn given_builder_reused_when_building_then_skip_count_resets() {
    // Arrange
    let mut builder = HierarchyBuilder::new();
    builder.build(records(json!([{"division": "X"}])));

    // Act
    builder.build(records(json!([{"department": "A"}])));

    // Assert
    assert_eq!(builder.skipped(), 0);
}
