//! Option enums shared by several directives

use formgen_common::PropValue;
use serde::{Deserialize, Serialize};

macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident),+ $(,)? } default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl From<$name> for PropValue {
            fn from(value: $name) -> Self {
                PropValue::Enum(value.as_str())
            }
        }
    };
}

option_enum! {
    /// Visual style of an input or alert
    Variant { Text, Filled, Outlined } default Text
}

option_enum! {
    /// Vertical spacing around an input
    Margin { None, Dense, Normal } default None
}

option_enum! {
    /// Theme palette color
    ThemeColor {
        Default, Primary, Secondary, Tertiary, Info, Success, Warning, Error, Dark,
        Transparent, Inherit, Surface,
    } default Default
}

option_enum! {
    Size { Small, Medium, Large } default Medium
}

option_enum! {
    /// Side of a toggle its label is placed on
    LabelPosition { Start, End } default End
}

option_enum! {
    Adornment { None, Start, End } default None
}

option_enum! {
    /// HTML input type of a text field
    InputType { Text, Password, Email, Telephone, Url, Search, Hidden } default Text
}

option_enum! {
    /// How a picker popup is presented
    PickerVariant { Inline, Dialog, Static } default Inline
}

option_enum! {
    /// First view a date picker opens to
    OpenTo { Date, Year, Month } default Date
}

option_enum! {
    TimeOpenTo { Hours, Minutes } default Hours
}

option_enum! {
    TimeEditMode { Normal, OnlyHours, OnlyMinutes } default Normal
}

option_enum! {
    ColorPickerMode { Rgb, Hsl, Hex } default Rgb
}

option_enum! {
    ColorPickerView { Spectrum, Palette, Grid, GridCompact } default Spectrum
}

option_enum! {
    Severity { Normal, Info, Success, Warning, Error } default Normal
}

option_enum! {
    HorizontalAlignment { Left, Center, Right, Start, End, Justify } default Left
}

option_enum! {
    /// Placement of a tab strip
    Position { Top, Bottom, Left, Right, Start, End } default Top
}
