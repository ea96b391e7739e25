//! Mapping between Rust property types and bound field values

use chrono::{NaiveDate, NaiveTime};
use formgen_common::{FieldType, FieldValue, Rgba, ScalarKind};
use rust_decimal::Decimal;

/// A Rust type that can back a bound model property
pub trait Field: Sized {
    const FIELD_TYPE: FieldType;

    fn into_field_value(self) -> FieldValue;

    /// `None` when the value does not fit this type
    fn from_field_value(value: FieldValue) -> Option<Self>;
}

impl Field for String {
    const FIELD_TYPE: FieldType = FieldType::Text;

    fn into_field_value(self) -> FieldValue {
        FieldValue::Text(self)
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(text) => Some(text),
            // Cleared input
            FieldValue::Null => Some(String::new()),
            _ => None,
        }
    }
}

impl Field for Option<String> {
    const FIELD_TYPE: FieldType = FieldType::Text;

    fn into_field_value(self) -> FieldValue {
        self.map(FieldValue::Text).unwrap_or(FieldValue::Null)
    }

    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(text) => Some(Some(text)),
            FieldValue::Null => Some(None),
            _ => None,
        }
    }
}

macro_rules! scalar_field {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl Field for $ty {
                const FIELD_TYPE: FieldType = FieldType::Scalar(ScalarKind::$kind);

                fn into_field_value(self) -> FieldValue {
                    FieldValue::$kind(self)
                }

                fn from_field_value(value: FieldValue) -> Option<Self> {
                    match value {
                        FieldValue::$kind(inner) => Some(inner),
                        _ => None,
                    }
                }
            }

            impl Field for Option<$ty> {
                const FIELD_TYPE: FieldType = FieldType::Nullable(ScalarKind::$kind);

                fn into_field_value(self) -> FieldValue {
                    self.map(FieldValue::$kind).unwrap_or(FieldValue::Null)
                }

                fn from_field_value(value: FieldValue) -> Option<Self> {
                    match value {
                        FieldValue::$kind(inner) => Some(Some(inner)),
                        FieldValue::Null => Some(None),
                        _ => None,
                    }
                }
            }
        )+
    };
}

scalar_field!(
    bool => Bool,
    u8 => Byte,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Decimal => Decimal,
    NaiveDate => Date,
    NaiveTime => Time,
    Rgba => Color,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_scalars_accept_null() {
        assert_eq!(<Option<i32>>::from_field_value(FieldValue::Null), Some(None));
        assert_eq!(<Option<i32>>::from_field_value(FieldValue::Int(4)), Some(Some(4)));
        assert_eq!(i32::from_field_value(FieldValue::Null), None);
        assert_eq!(<Option<i32> as Field>::FIELD_TYPE, FieldType::Nullable(ScalarKind::Int));
    }

    #[test]
    fn test_scalar_rejects_other_widths() {
        assert_eq!(i64::from_field_value(FieldValue::Int(1)), None);
        assert_eq!(f64::from_field_value(FieldValue::Float(1.0)), None);
    }

    #[test]
    fn test_text_clears_to_empty_or_none() {
        assert_eq!(String::from_field_value(FieldValue::Null), Some(String::new()));
        assert_eq!(<Option<String>>::from_field_value(FieldValue::Null), Some(None));
        assert_eq!(Some("x".to_string()).into_field_value(), FieldValue::Text("x".into()));
    }
}
