use crate::input::InputOptions;
use crate::options::{
    ColorPickerMode, ColorPickerView, OpenTo, PickerVariant, ThemeColor, TimeEditMode, TimeOpenTo,
};
use crate::to_props::ToProps;
use chrono::{NaiveDate, Weekday};
use formgen_common::PropertyBag;
use serde::{Deserialize, Serialize};

/// Render a date property as a date picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatePicker {
    #[serde(flatten)]
    pub input: InputOptions,
    pub date_format: Option<String>,
    pub title_date_format: String,
    pub first_day_of_week: Option<Weekday>,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub open_to: OpenTo,
    pub picker_variant: PickerVariant,
    pub color: ThemeColor,
    pub editable: bool,
    pub show_week_numbers: bool,
    pub auto_close: bool,
}

impl Default for DatePicker {
    fn default() -> Self {
        Self {
            input: InputOptions::default(),
            date_format: None,
            title_date_format: "ddd, dd MMM".to_string(),
            first_day_of_week: None,
            min_date: None,
            max_date: None,
            open_to: OpenTo::Date,
            picker_variant: PickerVariant::Inline,
            color: ThemeColor::Primary,
            editable: false,
            show_week_numbers: false,
            auto_close: false,
        }
    }
}

impl ToProps for DatePicker {
    fn option_names() -> Vec<&'static str> {
        let mut names = InputOptions::option_names();
        names.extend([
            "DateFormat",
            "TitleDateFormat",
            "FirstDayOfWeek",
            "MinDate",
            "MaxDate",
            "OpenTo",
            "PickerVariant",
            "Color",
            "Editable",
            "ShowWeekNumbers",
            "AutoClose",
        ]);
        names
    }

    fn to_props(&self) -> PropertyBag {
        let defaults = Self::default();
        let mut bag = self.input.to_props();

        bag.insert_some("DateFormat", &self.date_format);
        bag.insert_changed(
            "TitleDateFormat",
            &self.title_date_format,
            &defaults.title_date_format,
        );
        bag.insert_some("FirstDayOfWeek", &self.first_day_of_week);
        bag.insert_some("MinDate", &self.min_date);
        bag.insert_some("MaxDate", &self.max_date);
        bag.insert_changed("OpenTo", &self.open_to, &defaults.open_to);
        bag.insert_changed(
            "PickerVariant",
            &self.picker_variant,
            &defaults.picker_variant,
        );
        bag.insert_changed("Color", &self.color, &defaults.color);
        bag.insert_changed("Editable", &self.editable, &defaults.editable);
        bag.insert_changed(
            "ShowWeekNumbers",
            &self.show_week_numbers,
            &defaults.show_week_numbers,
        );
        bag.insert_changed("AutoClose", &self.auto_close, &defaults.auto_close);

        bag
    }
}

/// Render a time-of-day property as a time picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimePicker {
    #[serde(flatten)]
    pub input: InputOptions,
    pub am_pm: bool,
    pub time_format: Option<String>,
    pub open_to: TimeOpenTo,
    pub time_edit_mode: TimeEditMode,
    pub picker_variant: PickerVariant,
    pub color: ThemeColor,
    pub editable: bool,
    pub auto_close: bool,
}

impl Default for TimePicker {
    fn default() -> Self {
        Self {
            input: InputOptions::default(),
            am_pm: false,
            time_format: None,
            open_to: TimeOpenTo::Hours,
            time_edit_mode: TimeEditMode::Normal,
            picker_variant: PickerVariant::Inline,
            color: ThemeColor::Primary,
            editable: false,
            auto_close: false,
        }
    }
}

impl ToProps for TimePicker {
    fn option_names() -> Vec<&'static str> {
        let mut names = InputOptions::option_names();
        names.extend([
            "AmPm",
            "TimeFormat",
            "OpenTo",
            "TimeEditMode",
            "PickerVariant",
            "Color",
            "Editable",
            "AutoClose",
        ]);
        names
    }

    fn to_props(&self) -> PropertyBag {
        let defaults = Self::default();
        let mut bag = self.input.to_props();

        bag.insert_changed("AmPm", &self.am_pm, &defaults.am_pm);
        bag.insert_some("TimeFormat", &self.time_format);
        bag.insert_changed("OpenTo", &self.open_to, &defaults.open_to);
        bag.insert_changed(
            "TimeEditMode",
            &self.time_edit_mode,
            &defaults.time_edit_mode,
        );
        bag.insert_changed(
            "PickerVariant",
            &self.picker_variant,
            &defaults.picker_variant,
        );
        bag.insert_changed("Color", &self.color, &defaults.color);
        bag.insert_changed("Editable", &self.editable, &defaults.editable);
        bag.insert_changed("AutoClose", &self.auto_close, &defaults.auto_close);

        bag
    }
}

/// Render a color property as a color picker
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorPicker {
    #[serde(flatten)]
    pub input: InputOptions,
    pub disable_alpha: bool,
    pub disable_color_field: bool,
    pub disable_preview: bool,
    pub disable_sliders: bool,
    pub disable_inputs: bool,
    pub disable_mode_switch: bool,
    pub color_picker_mode: ColorPickerMode,
    pub color_picker_view: ColorPickerView,
    pub picker_variant: PickerVariant,
}

impl ToProps for ColorPicker {
    fn option_names() -> Vec<&'static str> {
        let mut names = InputOptions::option_names();
        names.extend([
            "DisableAlpha",
            "DisableColorField",
            "DisablePreview",
            "DisableSliders",
            "DisableInputs",
            "DisableModeSwitch",
            "ColorPickerMode",
            "ColorPickerView",
            "PickerVariant",
        ]);
        names
    }

    fn to_props(&self) -> PropertyBag {
        let defaults = Self::default();
        let mut bag = self.input.to_props();

        bag.insert_changed("DisableAlpha", &self.disable_alpha, &defaults.disable_alpha);
        bag.insert_changed(
            "DisableColorField",
            &self.disable_color_field,
            &defaults.disable_color_field,
        );
        bag.insert_changed(
            "DisablePreview",
            &self.disable_preview,
            &defaults.disable_preview,
        );
        bag.insert_changed(
            "DisableSliders",
            &self.disable_sliders,
            &defaults.disable_sliders,
        );
        bag.insert_changed(
            "DisableInputs",
            &self.disable_inputs,
            &defaults.disable_inputs,
        );
        bag.insert_changed(
            "DisableModeSwitch",
            &self.disable_mode_switch,
            &defaults.disable_mode_switch,
        );
        bag.insert_changed(
            "ColorPickerMode",
            &self.color_picker_mode,
            &defaults.color_picker_mode,
        );
        bag.insert_changed(
            "ColorPickerView",
            &self.color_picker_view,
            &defaults.color_picker_view,
        );
        bag.insert_changed(
            "PickerVariant",
            &self.picker_variant,
            &defaults.picker_variant,
        );

        bag
    }
}
