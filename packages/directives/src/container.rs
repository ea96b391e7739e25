use crate::options::{Position, ThemeColor};
use crate::to_props::ToProps;
use formgen_common::PropertyBag;
use serde::{Deserialize, Serialize};

/// Render the tab-panel properties of a model as a tab strip
///
/// Valid on the root model's class or on a property of the root model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabGroup {
    pub elevation: u32,
    pub rounded: bool,
    pub border: bool,
    pub outlined: bool,
    pub centered: bool,
    pub position: Position,
    pub color: ThemeColor,
    pub slider_color: Option<ThemeColor>,
    pub hide_slider: bool,
    pub keep_panels_alive: bool,
    pub panel_class: Option<String>,
    pub apply_effects_to_container: bool,
}

impl ToProps for TabGroup {
    fn option_names() -> Vec<&'static str> {
        vec![
            "Elevation",
            "Rounded",
            "Border",
            "Outlined",
            "Centered",
            "Position",
            "Color",
            "SliderColor",
            "HideSlider",
            "KeepPanelsAlive",
            "PanelClass",
            "ApplyEffectsToContainer",
        ]
    }

    fn to_props(&self) -> PropertyBag {
        let defaults = Self::default();
        let mut bag = PropertyBag::new();

        bag.insert_changed("Elevation", &self.elevation, &defaults.elevation);
        bag.insert_changed("Rounded", &self.rounded, &defaults.rounded);
        bag.insert_changed("Border", &self.border, &defaults.border);
        bag.insert_changed("Outlined", &self.outlined, &defaults.outlined);
        bag.insert_changed("Centered", &self.centered, &defaults.centered);
        bag.insert_changed("Position", &self.position, &defaults.position);
        bag.insert_changed("Color", &self.color, &defaults.color);
        bag.insert_some("SliderColor", &self.slider_color);
        bag.insert_changed("HideSlider", &self.hide_slider, &defaults.hide_slider);
        bag.insert_changed(
            "KeepPanelsAlive",
            &self.keep_panels_alive,
            &defaults.keep_panels_alive,
        );
        bag.insert_some("PanelClass", &self.panel_class);
        bag.insert_changed(
            "ApplyEffectsToContainer",
            &self.apply_effects_to_container,
            &defaults.apply_effects_to_container,
        );

        bag
    }
}

/// Render a nested model inside a tab panel; `text` defaults to the property name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabPanel {
    pub text: Option<String>,
    pub icon: Option<String>,
    pub disabled: bool,
    pub badge_data: Option<String>,
    pub badge_color: ThemeColor,
    pub badge_dot: bool,
    pub tool_tip: Option<String>,
}

impl Default for TabPanel {
    fn default() -> Self {
        Self {
            text: None,
            icon: None,
            disabled: false,
            badge_data: None,
            badge_color: ThemeColor::Primary,
            badge_dot: false,
            tool_tip: None,
        }
    }
}

impl ToProps for TabPanel {
    fn option_names() -> Vec<&'static str> {
        vec![
            "Text",
            "Icon",
            "Disabled",
            "BadgeData",
            "BadgeColor",
            "BadgeDot",
            "ToolTip",
        ]
    }

    fn to_props(&self) -> PropertyBag {
        let defaults = Self::default();
        let mut bag = PropertyBag::new();

        bag.insert_some("Text", &self.text);
        bag.insert_some("Icon", &self.icon);
        bag.insert_changed("Disabled", &self.disabled, &defaults.disabled);
        bag.insert_some("BadgeData", &self.badge_data);
        bag.insert_changed("BadgeColor", &self.badge_color, &defaults.badge_color);
        bag.insert_changed("BadgeDot", &self.badge_dot, &defaults.badge_dot);
        bag.insert_some("ToolTip", &self.tool_tip);

        bag
    }
}

/// Render a nested model inside a titled box; `title` defaults to the property name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupBox {
    pub title: Option<String>,
    pub elevation: u32,
    pub outlined: bool,
    pub square: bool,
    pub class: Option<String>,
}

impl Default for GroupBox {
    fn default() -> Self {
        Self {
            title: None,
            elevation: 1,
            outlined: false,
            square: false,
            class: None,
        }
    }
}

impl ToProps for GroupBox {
    fn option_names() -> Vec<&'static str> {
        vec!["Title", "Elevation", "Outlined", "Square", "Class"]
    }

    fn to_props(&self) -> PropertyBag {
        let defaults = Self::default();
        let mut bag = PropertyBag::new();

        bag.insert_some("Title", &self.title);
        bag.insert_changed("Elevation", &self.elevation, &defaults.elevation);
        bag.insert_changed("Outlined", &self.outlined, &defaults.outlined);
        bag.insert_changed("Square", &self.square, &defaults.square);
        bag.insert_some("Class", &self.class);

        bag
    }
}
