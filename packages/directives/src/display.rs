use crate::options::{HorizontalAlignment, Severity, Size, ThemeColor, Variant};
use crate::to_props::ToProps;
use formgen_common::PropertyBag;
use serde::{Deserialize, Serialize};

/// Render a numeric property as a slider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Slider {
    pub label: Option<String>,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub color: ThemeColor,
    pub size: Size,
    pub disabled: bool,
    pub immediate: bool,
    pub tick_marks: bool,
    pub value_label: bool,
    pub vertical: bool,
}

impl Default for Slider {
    fn default() -> Self {
        Self {
            label: None,
            min: 0.0,
            max: 100.0,
            step: 1.0,
            color: ThemeColor::Primary,
            size: Size::Small,
            disabled: false,
            immediate: true,
            tick_marks: false,
            value_label: false,
            vertical: false,
        }
    }
}

impl ToProps for Slider {
    fn option_names() -> Vec<&'static str> {
        vec![
            "Label",
            "Min",
            "Max",
            "Step",
            "Color",
            "Size",
            "Disabled",
            "Immediate",
            "TickMarks",
            "ValueLabel",
            "Vertical",
        ]
    }

    fn to_props(&self) -> PropertyBag {
        let defaults = Self::default();
        let mut bag = PropertyBag::new();

        bag.insert_some("Label", &self.label);
        bag.insert_changed("Min", &self.min, &defaults.min);
        bag.insert_changed("Max", &self.max, &defaults.max);
        bag.insert_changed("Step", &self.step, &defaults.step);
        bag.insert_changed("Color", &self.color, &defaults.color);
        bag.insert_changed("Size", &self.size, &defaults.size);
        bag.insert_changed("Disabled", &self.disabled, &defaults.disabled);
        bag.insert_changed("Immediate", &self.immediate, &defaults.immediate);
        bag.insert_changed("TickMarks", &self.tick_marks, &defaults.tick_marks);
        bag.insert_changed("ValueLabel", &self.value_label, &defaults.value_label);
        bag.insert_changed("Vertical", &self.vertical, &defaults.vertical);

        bag
    }
}

/// Show a text property as an alert banner
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Alert {
    pub severity: Severity,
    pub variant: Variant,
    pub dense: bool,
    pub no_icon: bool,
    pub elevation: u32,
    pub square: bool,
    pub content_alignment: HorizontalAlignment,
    pub show_close_icon: bool,
    pub icon: Option<String>,
    pub class: Option<String>,
}

impl ToProps for Alert {
    fn option_names() -> Vec<&'static str> {
        vec![
            "Severity",
            "Variant",
            "Dense",
            "NoIcon",
            "Elevation",
            "Square",
            "ContentAlignment",
            "ShowCloseIcon",
            "Icon",
            "Class",
        ]
    }

    fn to_props(&self) -> PropertyBag {
        let defaults = Self::default();
        let mut bag = PropertyBag::new();

        bag.insert_changed("Severity", &self.severity, &defaults.severity);
        bag.insert_changed("Variant", &self.variant, &defaults.variant);
        bag.insert_changed("Dense", &self.dense, &defaults.dense);
        bag.insert_changed("NoIcon", &self.no_icon, &defaults.no_icon);
        bag.insert_changed("Elevation", &self.elevation, &defaults.elevation);
        bag.insert_changed("Square", &self.square, &defaults.square);
        bag.insert_changed(
            "ContentAlignment",
            &self.content_alignment,
            &defaults.content_alignment,
        );
        bag.insert_changed(
            "ShowCloseIcon",
            &self.show_close_icon,
            &defaults.show_close_icon,
        );
        bag.insert_some("Icon", &self.icon);
        bag.insert_some("Class", &self.class);

        bag
    }
}

/// Field-level validation message; wiring only, the host validates
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationMessage {}

impl ToProps for ValidationMessage {
    fn option_names() -> Vec<&'static str> {
        Vec::new()
    }

    fn to_props(&self) -> PropertyBag {
        PropertyBag::new()
    }
}
