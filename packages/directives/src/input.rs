use crate::options::{Adornment, InputType, Margin, Variant};
use crate::to_props::ToProps;
use formgen_common::PropertyBag;
use serde::{Deserialize, Serialize};

/// Options common to every text-like input control
///
/// `label` falls back to the property name at generation time; the fallback
/// is not part of the bag produced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputOptions {
    pub label: Option<String>,
    pub helper_text: Option<String>,
    pub placeholder: Option<String>,
    pub variant: Variant,
    pub margin: Margin,
    pub disabled: bool,
    pub read_only: bool,
    pub required: bool,
    pub required_error: String,
    pub immediate: bool,
    pub clearable: bool,
    pub full_width: bool,
    pub debounce_interval: u32,
    pub adornment: Adornment,
    pub adornment_icon: Option<String>,
    pub class: Option<String>,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            label: None,
            helper_text: None,
            placeholder: None,
            variant: Variant::Text,
            margin: Margin::None,
            disabled: false,
            read_only: false,
            required: false,
            required_error: "Required".to_string(),
            immediate: false,
            clearable: false,
            full_width: false,
            debounce_interval: 0,
            adornment: Adornment::None,
            adornment_icon: None,
            class: None,
        }
    }
}

impl ToProps for InputOptions {
    fn option_names() -> Vec<&'static str> {
        vec![
            "Label",
            "HelperText",
            "Placeholder",
            "Variant",
            "Margin",
            "Disabled",
            "ReadOnly",
            "Required",
            "RequiredError",
            "Immediate",
            "Clearable",
            "FullWidth",
            "DebounceInterval",
            "Adornment",
            "AdornmentIcon",
            "Class",
        ]
    }

    fn to_props(&self) -> PropertyBag {
        let defaults = Self::default();
        let mut bag = PropertyBag::new();

        bag.insert_some("Label", &self.label);
        bag.insert_some("HelperText", &self.helper_text);
        bag.insert_some("Placeholder", &self.placeholder);
        bag.insert_changed("Variant", &self.variant, &defaults.variant);
        bag.insert_changed("Margin", &self.margin, &defaults.margin);
        bag.insert_changed("Disabled", &self.disabled, &defaults.disabled);
        bag.insert_changed("ReadOnly", &self.read_only, &defaults.read_only);
        bag.insert_changed("Required", &self.required, &defaults.required);
        bag.insert_changed(
            "RequiredError",
            &self.required_error,
            &defaults.required_error,
        );
        bag.insert_changed("Immediate", &self.immediate, &defaults.immediate);
        bag.insert_changed("Clearable", &self.clearable, &defaults.clearable);
        bag.insert_changed("FullWidth", &self.full_width, &defaults.full_width);
        bag.insert_changed(
            "DebounceInterval",
            &self.debounce_interval,
            &defaults.debounce_interval,
        );
        bag.insert_changed("Adornment", &self.adornment, &defaults.adornment);
        bag.insert_some("AdornmentIcon", &self.adornment_icon);
        bag.insert_some("Class", &self.class);

        bag
    }
}

/// Render a text property as a single or multi-line text field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextField {
    #[serde(flatten)]
    pub input: InputOptions,
    pub lines: u32,
    pub max_length: u32,
    pub counter: Option<u32>,
    pub input_type: InputType,
    pub auto_focus: bool,
    pub auto_grow: bool,
}

impl Default for TextField {
    fn default() -> Self {
        Self {
            input: InputOptions::default(),
            lines: 1,
            max_length: 524_288,
            counter: None,
            input_type: InputType::Text,
            auto_focus: false,
            auto_grow: false,
        }
    }
}

impl ToProps for TextField {
    fn option_names() -> Vec<&'static str> {
        let mut names = InputOptions::option_names();
        names.extend(["Lines", "MaxLength", "Counter", "InputType", "AutoFocus", "AutoGrow"]);
        names
    }

    fn to_props(&self) -> PropertyBag {
        let defaults = Self::default();
        let mut bag = self.input.to_props();

        bag.insert_changed("Lines", &self.lines, &defaults.lines);
        bag.insert_changed("MaxLength", &self.max_length, &defaults.max_length);
        bag.insert_some("Counter", &self.counter);
        bag.insert_changed("InputType", &self.input_type, &defaults.input_type);
        bag.insert_changed("AutoFocus", &self.auto_focus, &defaults.auto_focus);
        bag.insert_changed("AutoGrow", &self.auto_grow, &defaults.auto_grow);

        bag
    }
}

/// Render a numeric property (any width, nullable or not) as a numeric field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumericField {
    #[serde(flatten)]
    pub input: InputOptions,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: f64,
    pub format: Option<String>,
    pub hide_spin_buttons: bool,
    pub invert_mouse_wheel: bool,
}

impl Default for NumericField {
    fn default() -> Self {
        Self {
            input: InputOptions::default(),
            min: None,
            max: None,
            step: 1.0,
            format: None,
            hide_spin_buttons: false,
            invert_mouse_wheel: false,
        }
    }
}

impl ToProps for NumericField {
    fn option_names() -> Vec<&'static str> {
        let mut names = InputOptions::option_names();
        names.extend(["Min", "Max", "Step", "Format", "HideSpinButtons", "InvertMouseWheel"]);
        names
    }

    fn to_props(&self) -> PropertyBag {
        let defaults = Self::default();
        let mut bag = self.input.to_props();

        bag.insert_some("Min", &self.min);
        bag.insert_some("Max", &self.max);
        bag.insert_changed("Step", &self.step, &defaults.step);
        bag.insert_some("Format", &self.format);
        bag.insert_changed(
            "HideSpinButtons",
            &self.hide_spin_buttons,
            &defaults.hide_spin_buttons,
        );
        bag.insert_changed(
            "InvertMouseWheel",
            &self.invert_mouse_wheel,
            &defaults.invert_mouse_wheel,
        );

        bag
    }
}
