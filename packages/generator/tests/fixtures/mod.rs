//! Shared models for the scenario tests
#![allow(dead_code)]

use chrono::NaiveDate;
use formgen_directives::*;
use formgen_generator::{share, FormGenerator, Model, ModelRef, ModelSchema, RecordingSink};
use futures::FutureExt;
use std::cell::RefCell;
use std::rc::Rc;

pub const LETTERS: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Debug, Default)]
pub struct Address {
    pub street: String,
    pub city: Option<String>,
    pub zip: Option<i32>,
}

impl Model for Address {
    fn describe() -> ModelSchema {
        ModelSchema::builder::<Address>("Address")
            .field(
                "street",
                |a: &Address| a.street.clone(),
                |a: &mut Address, v| a.street = v,
                vec![TextField::default().into()],
            )
            .field(
                "city",
                |a: &Address| a.city.clone(),
                |a: &mut Address, v| a.city = v,
                vec![TextField::default().into()],
            )
            .field(
                "zip",
                |a: &Address| a.zip,
                |a: &mut Address, v| a.zip = v,
                vec![NumericField::default().into()],
            )
            .build()
    }
}

#[derive(Debug, Default)]
pub struct Person {
    pub name: String,
    pub nickname: Option<String>,
    pub age: i32,
    pub height: Option<f64>,
    pub active: bool,
    pub newsletter: Option<bool>,
    pub birthday: Option<NaiveDate>,
    pub color: String,
    pub size: String,
    pub fruit: String,
    pub notice: String,
    pub email: String,
    pub address: Option<Rc<RefCell<Address>>>,
}

impl Model for Person {
    fn describe() -> ModelSchema {
        ModelSchema::builder::<Person>("Person")
            .field(
                "name",
                |p: &Person| p.name.clone(),
                |p: &mut Person, v| p.name = v,
                vec![TextField::default().into()],
            )
            .field(
                "nickname",
                |p: &Person| p.nickname.clone(),
                |p: &mut Person, v| p.nickname = v,
                vec![TextField {
                    input: InputOptions {
                        label: Some("Nick".into()),
                        ..Default::default()
                    },
                    ..Default::default()
                }
                .into()],
            )
            .field(
                "age",
                |p: &Person| p.age,
                |p: &mut Person, v| p.age = v,
                vec![TextField::default().into(), NumericField::default().into()],
            )
            .field(
                "height",
                |p: &Person| p.height,
                |p: &mut Person, v| p.height = v,
                vec![NumericField::default().into()],
            )
            .field(
                "active",
                |p: &Person| p.active,
                |p: &mut Person, v| p.active = v,
                vec![Switch::default().into()],
            )
            .field(
                "newsletter",
                |p: &Person| p.newsletter,
                |p: &mut Person, v| p.newsletter = v,
                vec![Switch::default().into(), CheckBox::default().into()],
            )
            .field(
                "birthday",
                |p: &Person| p.birthday,
                |p: &mut Person, v| p.birthday = v,
                vec![DatePicker::default().into()],
            )
            .field(
                "color",
                |p: &Person| p.color.clone(),
                |p: &mut Person, v| p.color = v,
                vec![RadioGroup {
                    options: "A,B,C,D".into(),
                    dense: true,
                    ..Default::default()
                }
                .into()],
            )
            .field(
                "size",
                |p: &Person| p.size.clone(),
                |p: &mut Person, v| p.size = v,
                vec![Select {
                    options: "S, M ,L".into(),
                    ..Default::default()
                }
                .into()],
            )
            .field(
                "fruit",
                |p: &Person| p.fruit.clone(),
                |p: &mut Person, v| p.fruit = v,
                vec![Autocomplete {
                    search_func: "Search1".into(),
                    ..Default::default()
                }
                .into()],
            )
            .field(
                "notice",
                |p: &Person| p.notice.clone(),
                |p: &mut Person, v| p.notice = v,
                vec![Alert {
                    severity: Severity::Info,
                    ..Default::default()
                }
                .into()],
            )
            .field(
                "email",
                |p: &Person| p.email.clone(),
                |p: &mut Person, v| p.email = v,
                vec![ValidationMessage::default().into(), TextField::default().into()],
            )
            .model(
                "address",
                |p: &Person| p.address.clone(),
                vec![GroupBox::default().into()],
            )
            .search_method("Search1", |_: &Person, query: String| {
                async move { search_letters(&query) }.boxed_local()
            })
            .build()
    }
}

/// Case-insensitive substring search over [`LETTERS`]
pub fn search_letters(query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    LETTERS
        .iter()
        .filter(|letter| letter.to_lowercase().contains(&query))
        .map(|letter| letter.to_string())
        .collect()
}

pub fn person() -> Person {
    Person {
        name: "Ada".into(),
        nickname: None,
        age: 36,
        height: None,
        active: true,
        newsletter: None,
        birthday: NaiveDate::from_ymd_opt(1815, 12, 10),
        color: "B".into(),
        size: "M".into(),
        fruit: String::new(),
        notice: "Profile incomplete".into(),
        email: "ada@example.com".into(),
        address: None,
    }
}

#[derive(Debug, Default)]
pub struct Section {
    pub heading: String,
}

impl Model for Section {
    fn describe() -> ModelSchema {
        ModelSchema::builder::<Section>("Section")
            .field(
                "heading",
                |s: &Section| s.heading.clone(),
                |s: &mut Section, v| s.heading = v,
                vec![TextField::default().into()],
            )
            .build()
    }
}

/// Root view-model with a class-level tab group
pub struct Settings {
    pub general: Option<Rc<RefCell<Section>>>,
    pub title: String,
    pub privacy: Option<Rc<RefCell<Section>>>,
    pub notes: Option<Rc<RefCell<Section>>>,
    pub advanced: Option<Rc<RefCell<Section>>>,
}

impl Model for Settings {
    fn describe() -> ModelSchema {
        ModelSchema::builder::<Settings>("Settings")
            .class_directive(TabGroup {
                centered: true,
                ..Default::default()
            })
            .model(
                "general",
                |s: &Settings| s.general.clone(),
                vec![TabPanel::default().into()],
            )
            .field(
                "title",
                |s: &Settings| s.title.clone(),
                |s: &mut Settings, v| s.title = v,
                vec![TextField::default().into()],
            )
            .model(
                "privacy",
                |s: &Settings| s.privacy.clone(),
                vec![
                    GroupBox::default().into(),
                    TabPanel {
                        text: Some("Privacy & Security".into()),
                        ..Default::default()
                    }
                    .into(),
                ],
            )
            .model(
                "notes",
                |s: &Settings| s.notes.clone(),
                vec![GroupBox::default().into()],
            )
            .model(
                "advanced",
                |s: &Settings| s.advanced.clone(),
                vec![TabPanel::default().into()],
            )
            .build()
    }
}

pub fn section(heading: &str) -> Option<Rc<RefCell<Section>>> {
    Some(share(Section {
        heading: heading.into(),
    }))
}

pub fn settings() -> Settings {
    Settings {
        general: section("General"),
        title: "Preferences".into(),
        privacy: section("Privacy"),
        notes: section("Notes"),
        advanced: section("Advanced"),
    }
}

/// Binary tree of optional nested models, each rendered inside a group box
#[derive(Debug, Default)]
pub struct Tree {
    pub label: String,
    pub left: Option<Rc<RefCell<Tree>>>,
    pub right: Option<Rc<RefCell<Tree>>>,
}

impl Model for Tree {
    fn describe() -> ModelSchema {
        ModelSchema::builder::<Tree>("Tree")
            .field(
                "label",
                |t: &Tree| t.label.clone(),
                |t: &mut Tree, v| t.label = v,
                vec![TextField::default().into()],
            )
            .model("left", |t: &Tree| t.left.clone(), vec![GroupBox::default().into()])
            .model("right", |t: &Tree| t.right.clone(), vec![GroupBox::default().into()])
            .build()
    }
}

pub fn render(model: &ModelRef) -> RecordingSink {
    render_with(&FormGenerator::new(), model)
}

/// Route generator logs to the test output; `RUST_LOG` is not consulted
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn render_with(generator: &FormGenerator, model: &ModelRef) -> RecordingSink {
    init_tracing();
    let mut sink = RecordingSink::new();
    generator
        .render(&mut sink, 0, model)
        .expect("render should succeed");
    sink
}
