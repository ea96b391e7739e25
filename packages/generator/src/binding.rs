//! Two-way value bindings between a model property and a control

use crate::context::Context;
use crate::schema::{model_address, ModelRef, PropertyDescriptor, PropertyValue};
use formgen_common::{BindError, BindResult, FieldIdentifier, FieldValue, ValueChanged};
use std::sync::Arc;
use tracing::trace;

/// A property bound on the exact parent instance found in the context
#[derive(Clone)]
pub struct Binding {
    parent: ModelRef,
    property: Arc<PropertyDescriptor>,
}

impl Binding {
    pub fn new(parent: ModelRef, property: Arc<PropertyDescriptor>) -> Self {
        Self { parent, property }
    }

    /// Bind against the model one below the top of `context`
    pub fn from_context(context: &Context<'_>, property: &Arc<PropertyDescriptor>) -> Option<Self> {
        context
            .parent_model()
            .map(|parent| Self::new(parent.clone(), property.clone()))
    }

    pub fn property(&self) -> &PropertyDescriptor {
        &self.property
    }

    pub fn parent(&self) -> &ModelRef {
        &self.parent
    }

    /// Current value of the bound property
    pub fn read(&self) -> BindResult<FieldValue> {
        let model = self.parent.try_borrow().map_err(|_| self.busy())?;
        match self.property.get(&*model)? {
            PropertyValue::Field(value) => Ok(value),
            PropertyValue::Model(_) => Err(BindError::TypeMismatch {
                model: self.property.model(),
                property: self.property.name(),
                expected: self.property.field_type(),
                actual: "model",
            }),
        }
    }

    /// Store `value` on the bound parent
    pub fn write(&self, value: FieldValue) -> BindResult<()> {
        let mut model = self.parent.try_borrow_mut().map_err(|_| self.busy())?;
        trace!(
            model = self.property.model(),
            property = self.property.name(),
            value = %value,
            "Writing bound value"
        );
        self.property.set(&mut *model, value)
    }

    /// Write-back callback handed to the control
    pub fn value_changed(&self) -> ValueChanged {
        let binding = self.clone();
        ValueChanged::new(move |value| binding.write(value))
    }

    /// Identifies the parent and property for validation messages
    pub fn field_identifier(&self) -> FieldIdentifier {
        FieldIdentifier {
            model: self.property.model(),
            property: self.property.name(),
            instance: model_address(&self.parent),
        }
    }

    fn busy(&self) -> BindError {
        BindError::Busy {
            model: self.property.model(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Frame;
    use crate::schema::{schema_of, share, Model, ModelSchema};

    struct Person {
        name: String,
        age: Option<i32>,
    }

    impl Model for Person {
        fn describe() -> ModelSchema {
            ModelSchema::builder::<Person>("Person")
                .field("name", |p: &Person| p.name.clone(), |p: &mut Person, v| p.name = v, vec![])
                .field("age", |p: &Person| p.age, |p: &mut Person, v| p.age = v, vec![])
                .build()
        }
    }

    fn bind(person: &ModelRef, name: &str) -> Binding {
        let property = schema_of::<Person>().property(name).unwrap().clone();
        let context = Context::root(person.clone());
        let leaf = context.push(Frame::Value(FieldValue::Null));
        Binding::from_context(&leaf, &property).unwrap()
    }

    #[test]
    fn test_value_changed_writes_to_parent() {
        let person = share(Person {
            name: "Ada".into(),
            age: None,
        });
        let model: ModelRef = person.clone();
        let changed = bind(&model, "name").value_changed();

        changed.invoke("Grace".into()).unwrap();
        changed.invoke("Grace".into()).unwrap();
        assert_eq!(person.borrow().name, "Grace");
    }

    #[test]
    fn test_nullable_round_trip() {
        let person = share(Person {
            name: String::new(),
            age: Some(3),
        });
        let model: ModelRef = person.clone();
        let binding = bind(&model, "age");

        binding.write(FieldValue::Null).unwrap();
        assert_eq!(binding.read().unwrap(), FieldValue::Null);
        binding.write(FieldValue::Int(41)).unwrap();
        assert_eq!(binding.read().unwrap(), FieldValue::Int(41));
        assert_eq!(person.borrow().age, Some(41));
    }

    #[test]
    fn test_write_while_borrowed_is_busy() {
        let person = share(Person {
            name: String::new(),
            age: None,
        });
        let model: ModelRef = person.clone();
        let binding = bind(&model, "name");

        let _guard = person.borrow();
        assert_eq!(
            binding.write("x".into()).unwrap_err(),
            BindError::Busy { model: "Person" }
        );
    }

    #[test]
    fn test_field_identifier_names_instance() {
        let model: ModelRef = share(Person {
            name: String::new(),
            age: None,
        });
        let id = bind(&model, "age").field_identifier();
        assert_eq!(id.model, "Person");
        assert_eq!(id.property, "age");
        assert_eq!(id.instance, model_address(&model));
    }
}
