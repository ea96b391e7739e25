use crate::choice::{Autocomplete, RadioGroup, Select};
use crate::container::{GroupBox, TabGroup, TabPanel};
use crate::display::{Alert, Slider, ValidationMessage};
use crate::input::{NumericField, TextField};
use crate::picker::{ColorPicker, DatePicker, TimePicker};
use crate::to_props::ToProps;
use crate::toggle::{CheckBox, Switch};
use formgen_common::PropertyBag;
use serde::{Deserialize, Serialize};

/// A rendering directive attached to a model property or class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "control", rename_all = "camelCase")]
pub enum Directive {
    TextField(TextField),
    NumericField(NumericField),
    CheckBox(CheckBox),
    Switch(Switch),
    Select(Select),
    RadioGroup(RadioGroup),
    Autocomplete(Autocomplete),
    DatePicker(DatePicker),
    TimePicker(TimePicker),
    ColorPicker(ColorPicker),
    Slider(Slider),
    Alert(Alert),
    TabGroup(TabGroup),
    TabPanel(TabPanel),
    GroupBox(GroupBox),
    ValidationMessage(ValidationMessage),
}

impl Directive {
    /// Control kind named in logs and errors
    pub fn control_name(&self) -> &'static str {
        match self {
            Directive::TextField(_) => "TextField",
            Directive::NumericField(_) => "NumericField",
            Directive::CheckBox(_) => "CheckBox",
            Directive::Switch(_) => "Switch",
            Directive::Select(_) => "Select",
            Directive::RadioGroup(_) => "RadioGroup",
            Directive::Autocomplete(_) => "Autocomplete",
            Directive::DatePicker(_) => "DatePicker",
            Directive::TimePicker(_) => "TimePicker",
            Directive::ColorPicker(_) => "ColorPicker",
            Directive::Slider(_) => "Slider",
            Directive::Alert(_) => "Alert",
            Directive::TabGroup(_) => "TabGroup",
            Directive::TabPanel(_) => "TabPanel",
            Directive::GroupBox(_) => "GroupBox",
            Directive::ValidationMessage(_) => "ValidationMessage",
        }
    }

    pub fn to_props(&self) -> PropertyBag {
        match self {
            Directive::TextField(d) => d.to_props(),
            Directive::NumericField(d) => d.to_props(),
            Directive::CheckBox(d) => d.to_props(),
            Directive::Switch(d) => d.to_props(),
            Directive::Select(d) => d.to_props(),
            Directive::RadioGroup(d) => d.to_props(),
            Directive::Autocomplete(d) => d.to_props(),
            Directive::DatePicker(d) => d.to_props(),
            Directive::TimePicker(d) => d.to_props(),
            Directive::ColorPicker(d) => d.to_props(),
            Directive::Slider(d) => d.to_props(),
            Directive::Alert(d) => d.to_props(),
            Directive::TabGroup(d) => d.to_props(),
            Directive::TabPanel(d) => d.to_props(),
            Directive::GroupBox(d) => d.to_props(),
            Directive::ValidationMessage(d) => d.to_props(),
        }
    }

    pub fn option_names(&self) -> Vec<&'static str> {
        match self {
            Directive::TextField(_) => TextField::option_names(),
            Directive::NumericField(_) => NumericField::option_names(),
            Directive::CheckBox(_) => CheckBox::option_names(),
            Directive::Switch(_) => Switch::option_names(),
            Directive::Select(_) => Select::option_names(),
            Directive::RadioGroup(_) => RadioGroup::option_names(),
            Directive::Autocomplete(_) => Autocomplete::option_names(),
            Directive::DatePicker(_) => DatePicker::option_names(),
            Directive::TimePicker(_) => TimePicker::option_names(),
            Directive::ColorPicker(_) => ColorPicker::option_names(),
            Directive::Slider(_) => Slider::option_names(),
            Directive::Alert(_) => Alert::option_names(),
            Directive::TabGroup(_) => TabGroup::option_names(),
            Directive::TabPanel(_) => TabPanel::option_names(),
            Directive::GroupBox(_) => GroupBox::option_names(),
            Directive::ValidationMessage(_) => ValidationMessage::option_names(),
        }
    }

    /// Containers recurse into a nested model instead of binding a value
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Directive::TabGroup(_) | Directive::TabPanel(_) | Directive::GroupBox(_)
        )
    }

    pub fn is_tab_panel(&self) -> bool {
        matches!(self, Directive::TabPanel(_))
    }

    pub fn as_tab_group(&self) -> Option<&TabGroup> {
        match self {
            Directive::TabGroup(group) => Some(group),
            _ => None,
        }
    }

    /// Parse a single directive, e.g. `{ "control": "textField", "lines": 3 }`
    pub fn from_json(source: &str) -> serde_json::Result<Directive> {
        serde_json::from_str(source)
    }

    /// Parse a JSON array of directives
    pub fn list_from_json(source: &str) -> serde_json::Result<Vec<Directive>> {
        serde_json::from_str(source)
    }
}

macro_rules! directive_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Directive {
                fn from(value: $variant) -> Self {
                    Directive::$variant(value)
                }
            }
        )+
    };
}

directive_from!(
    TextField,
    NumericField,
    CheckBox,
    Switch,
    Select,
    RadioGroup,
    Autocomplete,
    DatePicker,
    TimePicker,
    ColorPicker,
    Slider,
    Alert,
    TabGroup,
    TabPanel,
    GroupBox,
    ValidationMessage,
);
