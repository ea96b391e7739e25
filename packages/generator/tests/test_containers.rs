//! Tab groups, tab panels and group boxes

mod fixtures;

use fixtures::*;
use formgen_common::PropValue;
use formgen_directives::{GroupBox, TabGroup, TabPanel, TextField};
use formgen_generator::{share, Model, ModelRef, ModelSchema};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_class_tab_group_renders_only_tab_panels() {
    let model: ModelRef = share(settings());
    let sink = render(&model);

    assert_eq!(sink.nodes().len(), 1);
    let tabs = &sink.nodes()[0];
    assert_eq!(tabs.component.name(), "Tabs");
    assert_eq!(tabs.props.get("Centered"), Some(&PropValue::Bool(true)));

    let panels: Vec<_> = tabs.children_named("TabPanel").collect();
    assert_eq!(panels.len(), 3);
    assert_eq!(tabs.children.len(), 3);

    let texts: Vec<_> = panels.iter().filter_map(|panel| panel.prop_text("Text")).collect();
    assert_eq!(texts, vec!["general", "Privacy & Security", "advanced"]);
}

#[test]
fn test_untagged_properties_are_never_rendered_in_tabs() {
    let model: ModelRef = share(settings());
    let sink = render(&model);

    // title is a text field and notes/privacy carry group boxes, none of which
    // take part in a tab group
    assert!(sink.find_all("GroupBox").is_empty());
    let headings: Vec<_> = sink
        .find_all("TextField")
        .into_iter()
        .filter_map(|node| node.prop_text("Label"))
        .collect();
    assert_eq!(headings, vec!["heading", "heading", "heading"]);
    assert!(!headings.contains(&"title"));
}

#[test]
fn test_tab_panel_renders_nested_properties() {
    let model: ModelRef = share(settings());
    let sink = render(&model);

    let general = &sink.nodes()[0].children[0];
    assert_eq!(general.children.len(), 1);
    let heading = &general.children[0];
    assert_eq!(heading.props.get("Value"), Some(&PropValue::Value("General".into())));
}

#[test]
fn test_absent_panel_model_is_skipped() {
    let mut value = settings();
    value.privacy = None;
    let model: ModelRef = share(value);
    let sink = render(&model);

    let texts: Vec<_> = sink.nodes()[0]
        .children
        .iter()
        .filter_map(|panel| panel.prop_text("Text"))
        .collect();
    assert_eq!(texts, vec!["general", "advanced"]);
}

struct Dashboard {
    caption: String,
    pages: Option<Rc<RefCell<Pages>>>,
}

struct Pages {
    overview: Option<Rc<RefCell<Section>>>,
    details: Option<Rc<RefCell<Section>>>,
    inner: Option<Rc<RefCell<Pages>>>,
}

impl Model for Dashboard {
    fn describe() -> ModelSchema {
        ModelSchema::builder::<Dashboard>("Dashboard")
            .field(
                "caption",
                |d: &Dashboard| d.caption.clone(),
                |d: &mut Dashboard, v| d.caption = v,
                vec![TextField::default().into()],
            )
            .model("pages", |d: &Dashboard| d.pages.clone(), vec![TabGroup::default().into()])
            .build()
    }
}

impl Model for Pages {
    fn describe() -> ModelSchema {
        ModelSchema::builder::<Pages>("Pages")
            .model("overview", |p: &Pages| p.overview.clone(), vec![TabPanel::default().into()])
            .model("details", |p: &Pages| p.details.clone(), vec![GroupBox::default().into()])
            .model(
                "inner",
                |p: &Pages| p.inner.clone(),
                vec![TabPanel::default().into(), TabGroup::default().into()],
            )
            .build()
    }
}

#[test]
fn test_property_tab_group_on_root_model() {
    let model: ModelRef = share(Dashboard {
        caption: "Stats".into(),
        pages: Some(share(Pages {
            overview: section("Overview"),
            details: section("Details"),
            inner: None,
        })),
    });
    let sink = render(&model);

    let components: Vec<_> = sink.nodes().iter().map(|node| node.component.name()).collect();
    assert_eq!(components, vec!["TextField", "Tabs"]);

    let tabs = &sink.nodes()[1];
    let texts: Vec<_> = tabs.children.iter().filter_map(|panel| panel.prop_text("Text")).collect();
    assert_eq!(texts, vec!["overview"]);
}

#[test]
fn test_nested_tab_group_is_ignored() {
    let model: ModelRef = share(Dashboard {
        caption: String::new(),
        pages: Some(share(Pages {
            overview: None,
            details: None,
            inner: Some(share(Pages {
                overview: section("Deep"),
                details: None,
                inner: Some(share(Pages {
                    overview: section("Deepest"),
                    details: None,
                    inner: None,
                })),
            })),
        })),
    });
    let sink = render(&model);

    let tabs = &sink.nodes()[1];
    assert_eq!(tabs.children.len(), 1);
    let inner = &tabs.children[0];
    assert_eq!(inner.prop_text("Text"), Some("inner"));

    // the innermost pages carry a tab group below the root: only their panel renders
    let texts: Vec<_> = inner.children.iter().filter_map(|node| node.prop_text("Text")).collect();
    assert_eq!(texts, vec!["overview", "inner"]);
    assert!(inner.children.iter().all(|node| node.component.name() == "TabPanel"));
    assert_eq!(sink.find_all("Tabs").len(), 1);
}
