use crate::input::InputOptions;
use crate::options::{LabelPosition, Size, ThemeColor};
use crate::to_props::ToProps;
use formgen_common::PropertyBag;
use serde::{Deserialize, Serialize};

/// Render a text property as a drop-down of fixed or computed choices
///
/// `options` is a delimited list. When `options_func` names a zero-argument
/// model method that resolves, its result is used instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Select {
    #[serde(flatten)]
    pub input: InputOptions,
    pub options: String,
    pub options_func: Option<String>,
    pub dense: bool,
    pub multi_selection: bool,
    pub select_all: bool,
    pub delimiter: String,
    pub max_height: u32,
}

impl Default for Select {
    fn default() -> Self {
        Self {
            input: InputOptions::default(),
            options: String::new(),
            options_func: None,
            dense: false,
            multi_selection: false,
            select_all: false,
            delimiter: ", ".to_string(),
            max_height: 300,
        }
    }
}

impl ToProps for Select {
    fn option_names() -> Vec<&'static str> {
        let mut names = InputOptions::option_names();
        names.extend(["Dense", "MultiSelection", "SelectAll", "Delimiter", "MaxHeight"]);
        names
    }

    fn to_props(&self) -> PropertyBag {
        let defaults = Self::default();
        let mut bag = self.input.to_props();

        bag.insert_changed("Dense", &self.dense, &defaults.dense);
        bag.insert_changed(
            "MultiSelection",
            &self.multi_selection,
            &defaults.multi_selection,
        );
        bag.insert_changed("SelectAll", &self.select_all, &defaults.select_all);
        bag.insert_changed("Delimiter", &self.delimiter, &defaults.delimiter);
        bag.insert_changed("MaxHeight", &self.max_height, &defaults.max_height);

        bag
    }
}

/// Render a text property as a group of radio buttons, one per choice
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadioGroup {
    pub label: Option<String>,
    pub options: String,
    pub options_func: Option<String>,
    pub disabled: bool,
    pub read_only: bool,
    pub color: ThemeColor,
    pub size: Size,
    pub dense: bool,
    pub label_position: LabelPosition,
}

impl RadioGroup {
    /// Parameters applied to each radio button rather than the group
    pub const ITEM_OPTIONS: &'static [&'static str] = &["Color", "Size", "Dense", "LabelPosition"];
}

impl ToProps for RadioGroup {
    fn option_names() -> Vec<&'static str> {
        vec![
            "Label",
            "Disabled",
            "ReadOnly",
            "Color",
            "Size",
            "Dense",
            "LabelPosition",
        ]
    }

    fn to_props(&self) -> PropertyBag {
        let defaults = Self::default();
        let mut bag = PropertyBag::new();

        bag.insert_some("Label", &self.label);
        bag.insert_changed("Disabled", &self.disabled, &defaults.disabled);
        bag.insert_changed("ReadOnly", &self.read_only, &defaults.read_only);
        bag.insert_changed("Color", &self.color, &defaults.color);
        bag.insert_changed("Size", &self.size, &defaults.size);
        bag.insert_changed("Dense", &self.dense, &defaults.dense);
        bag.insert_changed(
            "LabelPosition",
            &self.label_position,
            &defaults.label_position,
        );

        bag
    }
}

/// Render a text property as an autocomplete backed by a model search method
///
/// `search_func` names a method taking the query text. Without it the control
/// cannot work and is skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Autocomplete {
    #[serde(flatten)]
    pub input: InputOptions,
    pub search_func: String,
    pub min_characters: u32,
    pub max_items: u32,
    pub reset_value_on_empty_text: bool,
    pub coerce_text: bool,
    pub coerce_value: bool,
    pub select_value_on_tab: bool,
    pub show_progress_indicator: bool,
    pub dense: bool,
    pub max_height: u32,
}

impl Default for Autocomplete {
    fn default() -> Self {
        Self {
            input: InputOptions::default(),
            search_func: String::new(),
            min_characters: 0,
            max_items: 10,
            reset_value_on_empty_text: false,
            coerce_text: true,
            coerce_value: false,
            select_value_on_tab: false,
            show_progress_indicator: false,
            dense: false,
            max_height: 300,
        }
    }
}

impl ToProps for Autocomplete {
    fn option_names() -> Vec<&'static str> {
        let mut names = InputOptions::option_names();
        names.extend([
            "MinCharacters",
            "MaxItems",
            "ResetValueOnEmptyText",
            "CoerceText",
            "CoerceValue",
            "SelectValueOnTab",
            "ShowProgressIndicator",
            "Dense",
            "MaxHeight",
        ]);
        names
    }

    fn to_props(&self) -> PropertyBag {
        let defaults = Self::default();
        let mut bag = self.input.to_props();

        bag.insert_changed(
            "MinCharacters",
            &self.min_characters,
            &defaults.min_characters,
        );
        bag.insert_changed("MaxItems", &self.max_items, &defaults.max_items);
        bag.insert_changed(
            "ResetValueOnEmptyText",
            &self.reset_value_on_empty_text,
            &defaults.reset_value_on_empty_text,
        );
        bag.insert_changed("CoerceText", &self.coerce_text, &defaults.coerce_text);
        bag.insert_changed("CoerceValue", &self.coerce_value, &defaults.coerce_value);
        bag.insert_changed(
            "SelectValueOnTab",
            &self.select_value_on_tab,
            &defaults.select_value_on_tab,
        );
        bag.insert_changed(
            "ShowProgressIndicator",
            &self.show_progress_indicator,
            &defaults.show_progress_indicator,
        );
        bag.insert_changed("Dense", &self.dense, &defaults.dense);
        bag.insert_changed("MaxHeight", &self.max_height, &defaults.max_height);

        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formgen_common::PropValue;

    #[test]
    fn test_generation_options_never_reach_the_bag() {
        let select = Select {
            options: "A,B".into(),
            options_func: Some("Colors".into()),
            ..Default::default()
        };
        assert!(select.to_props().is_empty());

        let autocomplete = Autocomplete {
            search_func: "Search1".into(),
            ..Default::default()
        };
        assert!(autocomplete.to_props().is_empty());
    }

    #[test]
    fn test_autocomplete_coerce_text_disabled() {
        let autocomplete = Autocomplete {
            coerce_text: false,
            ..Default::default()
        };
        assert_eq!(
            autocomplete.to_props().get("CoerceText"),
            Some(&PropValue::Bool(false))
        );
    }

    #[test]
    fn test_radio_item_options_are_known_options() {
        let names = RadioGroup::option_names();
        for item in RadioGroup::ITEM_OPTIONS {
            assert!(names.contains(item));
        }
    }
}
