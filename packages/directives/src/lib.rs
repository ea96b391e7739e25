//! # Form Directives
//!
//! Declarative rendering directives attached to model properties. Each control
//! kind has one option struct whose `Default` impl documents the option
//! defaults, and a [`ToProps`] translation that turns the options into the
//! sparse property bag handed to the target component.
//!
//! ## Sparse bags
//!
//! **INVARIANT: a bag contains a key iff the option differs from its default.**
//!
//! Components distinguish "explicitly set to the default" from "not set" for
//! their own fallback behavior, so defaults are never written. A
//! default-constructed directive always translates to an empty bag.
//!
//! Options that steer generation rather than the component (`options`,
//! `optionsFunc`, `searchFunc`) never appear in a bag.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formgen_directives::{Directive, TextField, ToProps};
//!
//! let field = TextField { lines: 4, ..Default::default() };
//! assert_eq!(field.to_props().sorted_keys(), vec!["Lines"]);
//!
//! let directive = Directive::from_json(r#"{ "control": "switch", "label": "Enabled" }"#)?;
//! ```

pub mod choice;
pub mod container;
pub mod directive;
pub mod display;
pub mod input;
pub mod options;
pub mod picker;
pub mod to_props;
pub mod toggle;

pub use choice::{Autocomplete, RadioGroup, Select};
pub use container::{GroupBox, TabGroup, TabPanel};
pub use directive::Directive;
pub use display::{Alert, Slider, ValidationMessage};
pub use input::{InputOptions, NumericField, TextField};
pub use options::*;
pub use picker::{ColorPicker, DatePicker, TimePicker};
pub use to_props::ToProps;
pub use toggle::{CheckBox, Switch};
