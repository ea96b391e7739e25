use crate::color::Rgba;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar kinds a bound property can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarKind {
    Bool,
    Byte,
    Int,
    Long,
    Float,
    Double,
    Decimal,
    Date,
    Time,
    Color,
}

impl ScalarKind {
    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Byte => "byte",
            ScalarKind::Int => "int",
            ScalarKind::Long => "long",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
            ScalarKind::Decimal => "decimal",
            ScalarKind::Date => "date",
            ScalarKind::Time => "time",
            ScalarKind::Color => "color",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ScalarKind::Byte
                | ScalarKind::Int
                | ScalarKind::Long
                | ScalarKind::Float
                | ScalarKind::Double
                | ScalarKind::Decimal
        )
    }
}

/// Declared type of a model property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    /// Text; an absent value renders as the empty string
    Text,
    /// Non-nullable scalar
    Scalar(ScalarKind),
    /// Nullable scalar; an absent value is rendered as-is
    Nullable(ScalarKind),
    /// Nested model; an absent value is never rendered
    Model,
}

impl FieldType {
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            FieldType::Scalar(kind) | FieldType::Nullable(kind) => Some(*kind),
            FieldType::Text | FieldType::Model => None,
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, FieldType::Nullable(_))
    }

    pub fn is_numeric(&self) -> bool {
        self.scalar_kind().is_some_and(|kind| kind.is_numeric())
    }

    /// True for a plain or nullable scalar of `kind`
    pub fn is_kind(&self, kind: ScalarKind) -> bool {
        self.scalar_kind() == Some(kind)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => f.write_str("text"),
            FieldType::Scalar(kind) => f.write_str(kind.name()),
            FieldType::Nullable(kind) => write!(f, "{}?", kind.name()),
            FieldType::Model => f.write_str("model"),
        }
    }
}

/// Runtime value read from, or written back to, a bound property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum FieldValue {
    Null,
    Text(String),
    Bool(bool),
    Byte(u8),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Decimal(Decimal),
    Date(NaiveDate),
    Time(NaiveTime),
    Color(Rgba),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Scalar kind of the value, `None` for text and null
    pub fn kind(&self) -> Option<ScalarKind> {
        match self {
            FieldValue::Null | FieldValue::Text(_) => None,
            FieldValue::Bool(_) => Some(ScalarKind::Bool),
            FieldValue::Byte(_) => Some(ScalarKind::Byte),
            FieldValue::Int(_) => Some(ScalarKind::Int),
            FieldValue::Long(_) => Some(ScalarKind::Long),
            FieldValue::Float(_) => Some(ScalarKind::Float),
            FieldValue::Double(_) => Some(ScalarKind::Double),
            FieldValue::Decimal(_) => Some(ScalarKind::Decimal),
            FieldValue::Date(_) => Some(ScalarKind::Date),
            FieldValue::Time(_) => Some(ScalarKind::Time),
            FieldValue::Color(_) => Some(ScalarKind::Color),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Text(_) => "text",
            other => other.kind().map(|kind| kind.name()).unwrap_or("unknown"),
        }
    }

    /// Whether this value may be stored in a property of type `ty`
    pub fn fits(&self, ty: FieldType) -> bool {
        match (self, ty) {
            (FieldValue::Null, FieldType::Text | FieldType::Nullable(_)) => true,
            (FieldValue::Text(_), FieldType::Text) => true,
            (value, FieldType::Scalar(kind) | FieldType::Nullable(kind)) => {
                value.kind() == Some(kind)
            }
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Text(v) => f.write_str(v),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Byte(v) => write!(f, "{v}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Long(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Double(v) => write!(f, "{v}"),
            FieldValue::Decimal(v) => write!(f, "{v}"),
            FieldValue::Date(v) => write!(f, "{v}"),
            FieldValue::Time(v) => write!(f, "{v}"),
            FieldValue::Color(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Double(value)
    }
}
