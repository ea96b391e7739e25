use crate::result::{BindResult, CallbackResult};
use crate::value::FieldValue;
use futures::future::LocalBoxFuture;
use serde::Serialize;
use std::fmt;
use std::rc::Rc;

/// Write-back callback handed to a control; stores a new value on the bound parent
#[derive(Clone)]
pub struct ValueChanged(Rc<dyn Fn(FieldValue) -> BindResult<()>>);

impl ValueChanged {
    pub fn new(callback: impl Fn(FieldValue) -> BindResult<()> + 'static) -> Self {
        Self(Rc::new(callback))
    }

    pub fn invoke(&self, value: FieldValue) -> BindResult<()> {
        (self.0)(value)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ValueChanged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueChanged(..)")
    }
}

/// Asynchronous text search backing an autocomplete control
#[derive(Clone)]
pub struct SearchCallback(Rc<dyn Fn(String) -> LocalBoxFuture<'static, CallbackResult<Vec<String>>>>);

impl SearchCallback {
    pub fn new(
        callback: impl Fn(String) -> LocalBoxFuture<'static, CallbackResult<Vec<String>>> + 'static,
    ) -> Self {
        Self(Rc::new(callback))
    }

    pub fn search(
        &self,
        query: impl Into<String>,
    ) -> LocalBoxFuture<'static, CallbackResult<Vec<String>>> {
        (self.0)(query.into())
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SearchCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SearchCallback(..)")
    }
}

/// Identifies a model property for field-level validation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldIdentifier {
    pub model: &'static str,
    pub property: &'static str,
    /// Address of the owning model instance
    pub instance: usize,
}
