//! Two-way bindings between emitted controls and model properties

mod fixtures;

use fixtures::*;
use formgen_common::{BindError, FieldValue, PropValue};
use formgen_generator::{
    share, FormGenerator, GenerateError, ModelRef, RecordingSink, RenderedNode,
};

fn labelled<'a>(nodes: &'a [RenderedNode], label: &str) -> &'a RenderedNode {
    nodes
        .iter()
        .find(|node| node.prop_text("Label") == Some(label))
        .unwrap_or_else(|| panic!("no control labelled {}", label))
}

#[test]
fn test_value_changed_round_trip() {
    let person = share(person());
    let model: ModelRef = person.clone();
    let sink = render(&model);

    let name = labelled(sink.nodes(), "name");
    let changed = name.props.get("ValueChanged").and_then(PropValue::as_value_changed).unwrap();

    changed.invoke("Grace".into()).unwrap();
    assert_eq!(person.borrow().name, "Grace");

    // repeated identical writes are idempotent
    changed.invoke("Grace".into()).unwrap();
    assert_eq!(person.borrow().name, "Grace");

    let sink = render(&model);
    let name = labelled(sink.nodes(), "name");
    assert_eq!(name.props.get("Value"), Some(&PropValue::Value("Grace".into())));
}

#[test]
fn test_nullable_binding_accepts_null() {
    let person = share(person());
    let model: ModelRef = person.clone();
    let sink = render(&model);

    let height = labelled(sink.nodes(), "height");
    let changed = height.props.get("ValueChanged").and_then(PropValue::as_value_changed).unwrap();

    changed.invoke(FieldValue::Double(1.8)).unwrap();
    assert_eq!(person.borrow().height, Some(1.8));
    changed.invoke(FieldValue::Null).unwrap();
    assert_eq!(person.borrow().height, None);
}

#[test]
fn test_wrong_value_type_is_rejected() {
    let person = share(person());
    let model: ModelRef = person.clone();
    let sink = render(&model);

    let age = labelled(sink.nodes(), "age");
    let changed = age.props.get("ValueChanged").and_then(PropValue::as_value_changed).unwrap();

    let error = changed.invoke(FieldValue::Text("old".into())).unwrap_err();
    assert!(matches!(error, BindError::TypeMismatch { property: "age", .. }));
    assert_eq!(person.borrow().age, 36);
}

#[test]
fn test_nested_binding_writes_to_nested_instance() {
    let address = share(Address::default());
    let mut value = person();
    value.address = Some(address.clone());
    let person = share(value);
    let model: ModelRef = person.clone();
    let sink = render(&model);

    let group = &sink.find_all("GroupBox")[0];
    let street = labelled(&group.children, "street");
    let changed = street.props.get("ValueChanged").and_then(PropValue::as_value_changed).unwrap();

    changed.invoke("Elm Row".into()).unwrap();
    assert_eq!(address.borrow().street, "Elm Row");

    let field = street.props.get("For").and_then(PropValue::as_field).unwrap();
    assert_eq!(field.model, "Address");
}

#[test]
fn test_radio_group_emits_one_radio_per_option() {
    let model: ModelRef = share(person());
    let sink = render(&model);

    let group = &sink.find_all("RadioGroup")[0];
    let radios: Vec<_> = group.children_named("Radio").collect();
    assert_eq!(radios.len(), 4);

    let texts: Vec<_> = radios.iter().filter_map(|radio| radio.prop_text("Value")).collect();
    assert_eq!(texts, LETTERS.to_vec());

    // item appearance is copied from the group
    assert!(radios.iter().all(|radio| radio.props.get("Dense") == Some(&PropValue::Bool(true))));
}

#[test]
fn test_radio_selection_tracks_property() {
    let person = share(person());
    let model: ModelRef = person.clone();
    let sink = render(&model);

    let group = &sink.find_all("RadioGroup")[0];
    assert_eq!(group.props.get("SelectedOption"), Some(&PropValue::Value("B".into())));

    let changed = group
        .props
        .get("SelectedOptionChanged")
        .and_then(PropValue::as_value_changed)
        .unwrap();
    changed.invoke("D".into()).unwrap();
    assert_eq!(person.borrow().color, "D");

    let sink = render(&model);
    let group = &sink.find_all("RadioGroup")[0];
    assert_eq!(group.props.get("SelectedOption"), Some(&PropValue::Value("D".into())));
}

#[test]
fn test_render_while_model_is_borrowed_fails() {
    let person = share(person());
    let model: ModelRef = person.clone();
    let _guard = person.borrow_mut();

    let mut sink = RecordingSink::new();
    let error = FormGenerator::new().render(&mut sink, 0, &model).unwrap_err();
    assert!(matches!(error, GenerateError::Bind(BindError::Busy { .. })));
}
