//! # Form Generator
//!
//! Walks a model graph guided by the directives attached to its properties
//! and emits one bound control per directive into a [`RenderSink`].
//!
//! ## Traversal
//!
//! For each property of the current model, in declaration order:
//!
//! 1. The value is read. An absent text value becomes `""`, an absent
//!    nullable scalar is rendered as-is, and an absent nested model is
//!    skipped without rendering anything beneath it.
//! 2. The value is pushed onto the [`Context`], so each directive sees its
//!    own value on top and the owning model one below.
//! 3. Each attached directive generates its control, threading the render
//!    index through the sink.
//!
//! Leaf controls bind the property two-way: the emitted `ValueChanged`
//! callback writes back into the exact parent instance. Containers (tab
//! panels, group boxes, tab groups) recurse into the nested model instead.
//!
//! Any error raised by a directive reaches the caller wrapped exactly once in
//! [`GenerateError::Failed`], naming the control that failed.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formgen_generator::{share, FormGenerator, ModelRef, RecordingSink};
//!
//! let person = share(Person::default());
//! let model: ModelRef = person.clone();
//!
//! let mut sink = RecordingSink::new();
//! let next = FormGenerator::new().render(&mut sink, 0, &model)?;
//! ```

pub mod binding;
pub mod containers;
pub mod context;
mod controls;
pub mod error;
pub mod field;
pub mod generator;
pub mod options;
pub mod resolver;
pub mod schema;
pub mod sink;

pub use binding::Binding;
pub use context::{Context, Frame};
pub use error::{GenerateError, GenerateResult};
pub use field::Field;
pub use generator::{DirectiveFilter, FormGenerator, Generate};
pub use options::GeneratorOptions;
pub use resolver::{candidates, try_resolve, ResolvedMethod};
pub use schema::{
    model_schema, same_model, schema_of, share, FormModel, MethodEntry, Model, ModelRef,
    ModelSchema, PropertyDescriptor, PropertyValue, SchemaBuilder,
};
pub use sink::{ChildContent, ComponentKind, RecordingSink, RenderSink, RenderedNode};
