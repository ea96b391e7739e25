//! # Model Schemas
//!
//! Explicit accessor tables that stand in for runtime reflection. Every model
//! type describes itself once through [`Model::describe`]: its properties in
//! declaration order (name, declared [`FieldType`], attached directives,
//! get/set accessors), its class-level directives, and the methods that
//! directives may resolve by name.
//!
//! Schemas are cached per Rust type for the lifetime of the process. Model
//! instances are shared as [`ModelRef`] so that write-back callbacks can
//! mutate the exact parent instance after a render pass has finished.

use crate::field::Field;
use formgen_common::{BindError, BindResult, FieldType, FieldValue};
use formgen_directives::{Directive, TabGroup};
use futures::future::LocalBoxFuture;
use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::{Arc, OnceLock, RwLock};

/// Shared, mutable handle to a model instance of any type
pub type ModelRef = Rc<RefCell<dyn FormModel>>;

/// Implemented by user types that can be rendered as a form
pub trait Model: Any {
    fn describe() -> ModelSchema
    where
        Self: Sized;
}

/// Dynamic view of a model: the schema of its runtime type plus downcasting
pub trait FormModel: Any {
    fn schema(&self) -> Arc<ModelSchema>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Model> FormModel for T {
    fn schema(&self) -> Arc<ModelSchema> {
        schema_of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Wrap a model for rendering; keep the returned handle to observe write-backs
pub fn share<T: Model>(model: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(model))
}

/// Identity comparison of two model handles
pub fn same_model(a: &ModelRef, b: &ModelRef) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}

/// Address used to identify a model instance
pub fn model_address(model: &ModelRef) -> usize {
    Rc::as_ptr(model) as *const () as usize
}

/// Schema of the model's runtime type
pub fn model_schema(model: &ModelRef) -> BindResult<Arc<ModelSchema>> {
    let guard = model.try_borrow().map_err(|_| BindError::Busy { model: "<model>" })?;
    Ok(guard.schema())
}

/// Cached schema for `T`, built on first use
pub fn schema_of<T: Model>() -> Arc<ModelSchema> {
    static CACHE: OnceLock<RwLock<HashMap<TypeId, Arc<ModelSchema>>>> = OnceLock::new();

    let cache = CACHE.get_or_init(Default::default);
    let key = TypeId::of::<T>();

    if let Some(schema) = cache.read().ok().and_then(|map| map.get(&key).cloned()) {
        return schema;
    }

    // Built outside the lock; a racing builder's copy wins and ours is dropped
    let schema = Arc::new(T::describe());
    match cache.write() {
        Ok(mut map) => map.entry(key).or_insert(schema).clone(),
        Err(_) => schema,
    }
}

/// Value read from a property
#[derive(Clone)]
pub enum PropertyValue {
    Field(FieldValue),
    Model(Option<ModelRef>),
}

impl fmt::Debug for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Field(value) => f.debug_tuple("Field").field(value).finish(),
            PropertyValue::Model(Some(model)) => {
                write!(f, "Model(0x{:x})", model_address(model))
            }
            PropertyValue::Model(None) => f.write_str("Model(None)"),
        }
    }
}

type Getter = Box<dyn Fn(&dyn Any) -> Option<PropertyValue> + Send + Sync>;
type Setter = Box<dyn Fn(&mut dyn Any, FieldValue) -> Option<BindResult<()>> + Send + Sync>;

/// A readable (and, for fields, writable) model property
pub struct PropertyDescriptor {
    model: &'static str,
    name: &'static str,
    field_type: FieldType,
    directives: Vec<Directive>,
    getter: Getter,
    setter: Option<Setter>,
}

impl PropertyDescriptor {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name of the declaring model
    pub fn model(&self) -> &'static str {
        self.model
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn has_directive(&self, predicate: impl Fn(&Directive) -> bool) -> bool {
        self.directives.iter().any(predicate)
    }

    pub fn is_writable(&self) -> bool {
        self.setter.is_some()
    }

    pub fn get(&self, model: &dyn FormModel) -> BindResult<PropertyValue> {
        (self.getter)(model.as_any()).ok_or(BindError::ModelMismatch {
            expected: self.model,
            property: self.name,
        })
    }

    pub fn set(&self, model: &mut dyn FormModel, value: FieldValue) -> BindResult<()> {
        let setter = self.setter.as_ref().ok_or(BindError::ReadOnly {
            model: self.model,
            property: self.name,
        })?;

        setter(model.as_any_mut(), value).unwrap_or(Err(BindError::ModelMismatch {
            expected: self.model,
            property: self.name,
        }))
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("model", &self.model)
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .field("directives", &self.directives.len())
            .finish()
    }
}

type OptionsMethod =
    Box<dyn Fn(&dyn Any) -> Option<LocalBoxFuture<'static, Vec<String>>> + Send + Sync>;
type SearchMethod =
    Box<dyn Fn(&dyn Any, String) -> Option<LocalBoxFuture<'static, Vec<String>>> + Send + Sync>;

/// A model method that directives can resolve by name
pub enum MethodEntry {
    /// `() -> list of text`, used by option lists
    Options(OptionsMethod),
    /// `(query) -> list of text`, used by autocomplete
    Search(SearchMethod),
}

impl MethodEntry {
    pub fn shape(&self) -> &'static str {
        match self {
            MethodEntry::Options(_) => "an options function",
            MethodEntry::Search(_) => "a search function",
        }
    }
}

impl fmt::Debug for MethodEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.shape())
    }
}

/// Description of a model type
#[derive(Debug)]
pub struct ModelSchema {
    type_name: &'static str,
    directives: Vec<Directive>,
    properties: Vec<Arc<PropertyDescriptor>>,
    methods: HashMap<&'static str, Arc<MethodEntry>>,
}

impl ModelSchema {
    pub fn builder<T: Any>(type_name: &'static str) -> SchemaBuilder<T> {
        SchemaBuilder {
            schema: ModelSchema {
                type_name,
                directives: Vec::new(),
                properties: Vec::new(),
                methods: HashMap::new(),
            },
            _model: PhantomData,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Class-level directives
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn tab_group(&self) -> Option<&TabGroup> {
        self.directives.iter().find_map(Directive::as_tab_group)
    }

    /// Properties in declaration order
    pub fn properties(&self) -> &[Arc<PropertyDescriptor>] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Arc<PropertyDescriptor>> {
        self.properties.iter().find(|property| property.name == name)
    }

    pub fn method(&self, name: &str) -> Option<&Arc<MethodEntry>> {
        self.methods.get(name)
    }
}

/// Builds a [`ModelSchema`] from typed accessors
pub struct SchemaBuilder<T> {
    schema: ModelSchema,
    _model: PhantomData<fn() -> T>,
}

impl<T: Any> SchemaBuilder<T> {
    pub fn class_directive(mut self, directive: impl Into<Directive>) -> Self {
        self.schema.directives.push(directive.into());
        self
    }

    /// Text or scalar property
    pub fn field<V, G, S>(
        mut self,
        name: &'static str,
        get: G,
        set: S,
        directives: Vec<Directive>,
    ) -> Self
    where
        V: Field + 'static,
        G: Fn(&T) -> V + Send + Sync + 'static,
        S: Fn(&mut T, V) + Send + Sync + 'static,
    {
        let model = self.schema.type_name;

        let getter: Getter = Box::new(move |any: &dyn Any| {
            any.downcast_ref::<T>()
                .map(|target| PropertyValue::Field(get(target).into_field_value()))
        });

        let setter: Setter = Box::new(move |any: &mut dyn Any, value: FieldValue| {
            let target = any.downcast_mut::<T>()?;
            let actual = value.type_name();
            Some(match V::from_field_value(value) {
                Some(typed) => {
                    set(target, typed);
                    Ok(())
                }
                None => Err(BindError::TypeMismatch {
                    model,
                    property: name,
                    expected: V::FIELD_TYPE,
                    actual,
                }),
            })
        });

        self.schema.properties.push(Arc::new(PropertyDescriptor {
            model,
            name,
            field_type: V::FIELD_TYPE,
            directives,
            getter,
            setter: Some(setter),
        }));
        self
    }

    /// Nested model property; `None` is an absent model
    pub fn model<M, G>(mut self, name: &'static str, get: G, directives: Vec<Directive>) -> Self
    where
        M: Model,
        G: Fn(&T) -> Option<Rc<RefCell<M>>> + Send + Sync + 'static,
    {
        let getter: Getter = Box::new(move |any: &dyn Any| {
            any.downcast_ref::<T>().map(|target| {
                PropertyValue::Model(get(target).map(|child| child as ModelRef))
            })
        });

        self.schema.properties.push(Arc::new(PropertyDescriptor {
            model: self.schema.type_name,
            name,
            field_type: FieldType::Model,
            directives,
            getter,
            setter: None,
        }));
        self
    }

    /// Zero-argument method producing a list of options
    pub fn options_method<F>(mut self, name: &'static str, method: F) -> Self
    where
        F: Fn(&T) -> LocalBoxFuture<'static, Vec<String>> + Send + Sync + 'static,
    {
        let entry = MethodEntry::Options(Box::new(move |any: &dyn Any| {
            any.downcast_ref::<T>().map(&method)
        }));
        self.schema.methods.insert(name, Arc::new(entry));
        self
    }

    /// Method taking a query and producing matching entries
    pub fn search_method<F>(mut self, name: &'static str, method: F) -> Self
    where
        F: Fn(&T, String) -> LocalBoxFuture<'static, Vec<String>> + Send + Sync + 'static,
    {
        let entry = MethodEntry::Search(Box::new(move |any: &dyn Any, query: String| {
            any.downcast_ref::<T>().map(|target| method(target, query))
        }));
        self.schema.methods.insert(name, Arc::new(entry));
        self
    }

    pub fn build(self) -> ModelSchema {
        self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formgen_directives::TextField;

    struct Sample {
        title: String,
        count: Option<i32>,
    }

    impl Model for Sample {
        fn describe() -> ModelSchema {
            ModelSchema::builder::<Sample>("Sample")
                .field(
                    "title",
                    |s: &Sample| s.title.clone(),
                    |s: &mut Sample, v| s.title = v,
                    vec![TextField::default().into()],
                )
                .field("count", |s: &Sample| s.count, |s: &mut Sample, v| s.count = v, vec![])
                .build()
        }
    }

    struct Other;

    impl Model for Other {
        fn describe() -> ModelSchema {
            ModelSchema::builder::<Other>("Other").build()
        }
    }

    #[test]
    fn test_schema_is_cached_per_type() {
        let first = schema_of::<Sample>();
        let second = schema_of::<Sample>();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(schema_of::<Other>().type_name(), "Other");
    }

    #[test]
    fn test_properties_keep_declaration_order() {
        let schema = schema_of::<Sample>();
        let names: Vec<_> = schema.properties().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["title", "count"]);
        assert_eq!(
            schema.property("count").map(|p| p.field_type()),
            Some(FieldType::Nullable(formgen_common::ScalarKind::Int))
        );
    }

    #[test]
    fn test_setter_rejects_wrong_value_type() {
        let schema = schema_of::<Sample>();
        let mut sample = Sample {
            title: "a".into(),
            count: None,
        };
        let count = schema.property("count").unwrap();

        let error = count.set(&mut sample, FieldValue::Text("x".into())).unwrap_err();
        assert!(matches!(error, BindError::TypeMismatch { actual: "text", .. }));

        count.set(&mut sample, FieldValue::Int(7)).unwrap();
        assert_eq!(sample.count, Some(7));
    }

    #[test]
    fn test_accessor_on_wrong_model_type() {
        let schema = schema_of::<Sample>();
        let title = schema.property("title").unwrap();
        let error = title.get(&Other).unwrap_err();
        assert_eq!(
            error,
            BindError::ModelMismatch {
                expected: "Sample",
                property: "title"
            }
        );
    }

    #[test]
    fn test_same_model_compares_identity() {
        let a: ModelRef = share(Other);
        let b: ModelRef = share(Other);
        assert!(same_model(&a, &a.clone()));
        assert!(!same_model(&a, &b));
    }
}
