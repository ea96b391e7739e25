use crate::callback::{FieldIdentifier, SearchCallback, ValueChanged};
use crate::value::FieldValue;
use chrono::{NaiveDate, Weekday};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::hash_map;
use std::collections::HashMap;

/// A single entry of a property bag
#[derive(Debug, Clone)]
pub enum PropValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Named member of an option enum (variant, color, size, ...)
    Enum(&'static str),
    List(Vec<String>),
    /// Current value of the bound property
    Value(FieldValue),
    For(FieldIdentifier),
    ValueChanged(ValueChanged),
    Search(SearchCallback),
}

impl PropValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(text) => Some(text),
            PropValue::Enum(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&FieldValue> {
        match self {
            PropValue::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_value_changed(&self) -> Option<&ValueChanged> {
        match self {
            PropValue::ValueChanged(callback) => Some(callback),
            _ => None,
        }
    }

    pub fn as_search(&self) -> Option<&SearchCallback> {
        match self {
            PropValue::Search(callback) => Some(callback),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&FieldIdentifier> {
        match self {
            PropValue::For(field) => Some(field),
            _ => None,
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropValue::Text(a), PropValue::Text(b)) => a == b,
            (PropValue::Int(a), PropValue::Int(b)) => a == b,
            (PropValue::Float(a), PropValue::Float(b)) => a == b,
            (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
            (PropValue::Enum(a), PropValue::Enum(b)) => a == b,
            (PropValue::List(a), PropValue::List(b)) => a == b,
            (PropValue::Value(a), PropValue::Value(b)) => a == b,
            (PropValue::For(a), PropValue::For(b)) => a == b,
            (PropValue::ValueChanged(a), PropValue::ValueChanged(b)) => a.ptr_eq(b),
            (PropValue::Search(a), PropValue::Search(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropValue::Text(text) => serializer.serialize_str(text),
            PropValue::Int(n) => serializer.serialize_i64(*n),
            PropValue::Float(n) => serializer.serialize_f64(*n),
            PropValue::Bool(b) => serializer.serialize_bool(*b),
            PropValue::Enum(name) => serializer.serialize_str(name),
            PropValue::List(items) => items.serialize(serializer),
            PropValue::Value(value) => value.serialize(serializer),
            PropValue::For(field) => field.serialize(serializer),
            PropValue::ValueChanged(_) => serializer.serialize_str("<value-changed>"),
            PropValue::Search(_) => serializer.serialize_str("<search>"),
        }
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Int(value.into())
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        PropValue::Int(value.into())
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Int(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Float(value)
    }
}

impl From<Vec<String>> for PropValue {
    fn from(value: Vec<String>) -> Self {
        PropValue::List(value)
    }
}

impl From<FieldValue> for PropValue {
    fn from(value: FieldValue) -> Self {
        PropValue::Value(value)
    }
}

impl From<NaiveDate> for PropValue {
    fn from(value: NaiveDate) -> Self {
        PropValue::Value(FieldValue::Date(value))
    }
}

impl From<Weekday> for PropValue {
    fn from(value: Weekday) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<FieldIdentifier> for PropValue {
    fn from(value: FieldIdentifier) -> Self {
        PropValue::For(value)
    }
}

impl From<ValueChanged> for PropValue {
    fn from(value: ValueChanged) -> Self {
        PropValue::ValueChanged(value)
    }
}

impl From<SearchCallback> for PropValue {
    fn from(value: SearchCallback) -> Self {
        PropValue::Search(value)
    }
}

/// Sparse mapping of component parameter names to values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    entries: HashMap<String, PropValue>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Insert only when `value` differs from the option's documented default
    pub fn insert_changed<T>(&mut self, key: &str, value: &T, default: &T)
    where
        T: PartialEq + Clone + Into<PropValue>,
    {
        if value != default {
            self.insert(key, value.clone());
        }
    }

    /// Insert only when an optional setting was given
    pub fn insert_some<T>(&mut self, key: &str, value: &Option<T>)
    where
        T: Clone + Into<PropValue>,
    {
        if let Some(value) = value {
            self.insert(key, value.clone());
        }
    }

    /// Insert unless the key is already present
    pub fn insert_default(&mut self, key: &str, value: impl Into<PropValue>) {
        if !self.entries.contains_key(key) {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries.get(key)
    }

    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_text)
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Keys in lexical order
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        keys
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, PropValue> {
        self.entries.iter()
    }
}

impl Extend<(String, PropValue)> for PropertyBag {
    fn extend<I: IntoIterator<Item = (String, PropValue)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for PropertyBag {
    type Item = (String, PropValue);
    type IntoIter = hash_map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for PropertyBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for key in self.sorted_keys() {
            map.serialize_entry(key, &self.entries[key])?;
        }
        map.end()
    }
}
