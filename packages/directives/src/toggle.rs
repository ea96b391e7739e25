use crate::options::{LabelPosition, Size, ThemeColor};
use crate::to_props::ToProps;
use formgen_common::PropertyBag;
use serde::{Deserialize, Serialize};

/// Render a boolean (or nullable boolean) property as a checkbox
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckBox {
    pub label: Option<String>,
    pub color: ThemeColor,
    pub size: Size,
    pub dense: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub label_position: LabelPosition,
    pub tri_state: bool,
    pub disable_ripple: bool,
}

impl ToProps for CheckBox {
    fn option_names() -> Vec<&'static str> {
        vec![
            "Label",
            "Color",
            "Size",
            "Dense",
            "Disabled",
            "ReadOnly",
            "LabelPosition",
            "TriState",
            "DisableRipple",
        ]
    }

    fn to_props(&self) -> PropertyBag {
        let defaults = Self::default();
        let mut bag = PropertyBag::new();

        bag.insert_some("Label", &self.label);
        bag.insert_changed("Color", &self.color, &defaults.color);
        bag.insert_changed("Size", &self.size, &defaults.size);
        bag.insert_changed("Dense", &self.dense, &defaults.dense);
        bag.insert_changed("Disabled", &self.disabled, &defaults.disabled);
        bag.insert_changed("ReadOnly", &self.read_only, &defaults.read_only);
        bag.insert_changed(
            "LabelPosition",
            &self.label_position,
            &defaults.label_position,
        );
        bag.insert_changed("TriState", &self.tri_state, &defaults.tri_state);
        bag.insert_changed(
            "DisableRipple",
            &self.disable_ripple,
            &defaults.disable_ripple,
        );

        bag
    }
}

/// Render a boolean property as a switch
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Switch {
    pub label: Option<String>,
    pub color: ThemeColor,
    pub thumb_icon: Option<String>,
    pub thumb_icon_color: ThemeColor,
    pub size: Size,
    pub disabled: bool,
    pub read_only: bool,
    pub label_position: LabelPosition,
}

impl ToProps for Switch {
    fn option_names() -> Vec<&'static str> {
        vec![
            "Label",
            "Color",
            "ThumbIcon",
            "ThumbIconColor",
            "Size",
            "Disabled",
            "ReadOnly",
            "LabelPosition",
        ]
    }

    fn to_props(&self) -> PropertyBag {
        let defaults = Self::default();
        let mut bag = PropertyBag::new();

        bag.insert_some("Label", &self.label);
        bag.insert_changed("Color", &self.color, &defaults.color);
        bag.insert_some("ThumbIcon", &self.thumb_icon);
        bag.insert_changed(
            "ThumbIconColor",
            &self.thumb_icon_color,
            &defaults.thumb_icon_color,
        );
        bag.insert_changed("Size", &self.size, &defaults.size);
        bag.insert_changed("Disabled", &self.disabled, &defaults.disabled);
        bag.insert_changed("ReadOnly", &self.read_only, &defaults.read_only);
        bag.insert_changed(
            "LabelPosition",
            &self.label_position,
            &defaults.label_position,
        );

        bag
    }
}
