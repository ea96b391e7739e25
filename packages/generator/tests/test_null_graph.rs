//! Property-based checks of the null policy over random model graphs

mod fixtures;

use fixtures::*;
use formgen_common::{FieldValue, PropValue};
use formgen_generator::{share, ModelRef, RenderedNode};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone)]
struct Shape {
    left: Option<Box<Shape>>,
    right: Option<Box<Shape>>,
}

impl Shape {
    fn size(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |s| s.size()) + self.right.as_ref().map_or(0, |s| s.size())
    }
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = Just(Shape {
        left: None,
        right: None,
    });
    leaf.prop_recursive(5, 32, 2, |inner| {
        (proptest::option::of(inner.clone()), proptest::option::of(inner)).prop_map(
            |(left, right)| Shape {
                left: left.map(Box::new),
                right: right.map(Box::new),
            },
        )
    })
}

fn build(shape: &Shape, label: &str) -> Rc<RefCell<Tree>> {
    share(Tree {
        label: label.to_string(),
        left: shape.left.as_ref().map(|s| build(s, &format!("{}L", label))),
        right: shape.right.as_ref().map(|s| build(s, &format!("{}R", label))),
    })
}

/// Labels of the tree nodes rendered beneath a group box, in order
fn rendered_labels(nodes: &[RenderedNode]) -> Vec<String> {
    let mut labels = Vec::new();
    for node in nodes {
        if node.component.name() == "TextField" {
            if let Some(PropValue::Value(value)) = node.props.get("Value") {
                labels.push(value.to_string());
            }
        }
        labels.extend(rendered_labels(&node.children));
    }
    labels
}

fn expected_labels(shape: &Shape, label: &str) -> Vec<String> {
    let mut labels = vec![label.to_string()];
    if let Some(left) = &shape.left {
        labels.extend(expected_labels(left, &format!("{}L", label)));
    }
    if let Some(right) = &shape.right {
        labels.extend(expected_labels(right, &format!("{}R", label)));
    }
    labels
}

proptest! {
    #[test]
    fn prop_absent_models_are_never_entered(shape in shape()) {
        let model: ModelRef = build(&shape, "T");
        let sink = render(&model);

        prop_assert_eq!(sink.find_all("TextField").len(), shape.size());
        prop_assert_eq!(sink.find_all("GroupBox").len(), shape.size() - 1);
        prop_assert_eq!(rendered_labels(sink.nodes()), expected_labels(&shape, "T"));

        // every group box wraps a present model, so none is empty
        for group in sink.find_all("GroupBox") {
            prop_assert!(!group.children.is_empty());
        }
    }

    #[test]
    fn prop_absent_text_still_renders(label in proptest::option::of("[a-z]{0,6}")) {
        let mut value = person();
        value.nickname = label.clone();
        let model: ModelRef = share(value);
        let sink = render(&model);

        let nick = sink
            .nodes()
            .iter()
            .find(|node| node.prop_text("Label") == Some("Nick"))
            .cloned();
        prop_assert!(nick.is_some());

        let expected = FieldValue::Text(label.unwrap_or_default());
        prop_assert_eq!(
            nick.and_then(|node| node.props.get("Value").cloned()),
            Some(PropValue::Value(expected))
        );
    }
}
