//! Generator core: property traversal and directive dispatch

use crate::containers;
use crate::context::{Context, Frame};
use crate::error::{GenerateError, GenerateResult};
use crate::options::GeneratorOptions;
use crate::schema::{model_schema, same_model, ModelRef, PropertyDescriptor, PropertyValue};
use crate::sink::RenderSink;
use formgen_common::{BindError, FieldType, FieldValue};
use formgen_directives::Directive;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Turns one directive plus its bound data into emitted nodes
pub trait Generate {
    /// `context` has the property's value (or nested model) on top and the
    /// model owning the property one below it. Returns the next free index.
    fn generate(
        &self,
        generator: &FormGenerator,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
        property: &Arc<PropertyDescriptor>,
    ) -> GenerateResult<usize>;
}

/// Which directives of a property take part in a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveFilter {
    All,
    /// Only tab-panel directives; used inside a tab group
    TabPanels,
}

impl DirectiveFilter {
    fn accepts(&self, directive: &Directive) -> bool {
        match self {
            DirectiveFilter::All => true,
            DirectiveFilter::TabPanels => directive.is_tab_panel(),
        }
    }
}

/// Walks a model graph and renders every directive-bearing property
#[derive(Debug, Clone, Default)]
pub struct FormGenerator {
    options: GeneratorOptions,
}

impl FormGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Render a root view-model starting at `start_index`
    ///
    /// A class-level tab group on the root renders its tab-panel properties
    /// inside a tabs container; otherwise every property is rendered in
    /// declaration order.
    #[instrument(skip(self, sink, model))]
    pub fn render(
        &self,
        sink: &mut dyn RenderSink,
        start_index: usize,
        model: &ModelRef,
    ) -> GenerateResult<usize> {
        let schema = model_schema(model)?;
        let context = Context::root(model.clone());

        debug!(
            model = schema.type_name(),
            properties = schema.properties().len(),
            "Rendering form"
        );

        match schema.tab_group() {
            Some(group) => containers::render_tabs(self, sink, start_index, &context, group)
                .map_err(|error| error.wrap("TabGroup", schema.type_name())),
            None => self.render_properties(sink, start_index, &context),
        }
    }

    /// Render all directive-bearing properties of the model on top of `context`
    pub fn render_properties(
        &self,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
    ) -> GenerateResult<usize> {
        self.walk(sink, index, context, DirectiveFilter::All)
    }

    pub(crate) fn walk(
        &self,
        sink: &mut dyn RenderSink,
        mut index: usize,
        context: &Context<'_>,
        filter: DirectiveFilter,
    ) -> GenerateResult<usize> {
        let Some(model) = context.current_model() else {
            debug!(depth = context.depth(), "No model on top of the context");
            return Ok(index);
        };

        self.check_nesting(context, model)?;

        let schema = model_schema(model)?;

        for property in schema.properties() {
            let directives: Vec<&Directive> = property
                .directives()
                .iter()
                .filter(|directive| filter.accepts(directive))
                .collect();

            if directives.is_empty() {
                debug!(
                    model = schema.type_name(),
                    property = property.name(),
                    "No directives on property, skipping"
                );
                continue;
            }

            let Some(frame) = self.read_frame(model, property)? else {
                continue;
            };

            let scope = context.push(frame);
            for directive in directives {
                index = self.generate_directive(sink, index, &scope, property, directive)?;
            }
        }

        Ok(index)
    }

    /// Run one directive behind the uniform failure boundary
    pub(crate) fn generate_directive(
        &self,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
        property: &Arc<PropertyDescriptor>,
        directive: &Directive,
    ) -> GenerateResult<usize> {
        directive
            .generate(self, sink, index, context, property)
            .map_err(|error| error.wrap(directive.control_name(), property.name()))
    }

    /// Read a property into the frame pushed for its directives; `None` skips it
    fn read_frame(
        &self,
        model: &ModelRef,
        property: &PropertyDescriptor,
    ) -> GenerateResult<Option<Frame>> {
        let value = {
            let guard = model.try_borrow().map_err(|_| BindError::Busy {
                model: property.model(),
            })?;
            property.get(&*guard)?
        };

        let frame = match value {
            PropertyValue::Model(Some(nested)) => Frame::Model(nested),
            PropertyValue::Model(None) => {
                debug!(property = property.name(), "Nested model is absent, skipping");
                return Ok(None);
            }
            PropertyValue::Field(FieldValue::Null) => match property.field_type() {
                FieldType::Text => Frame::Value(FieldValue::Text(String::new())),
                FieldType::Nullable(_) => Frame::Value(FieldValue::Null),
                _ => {
                    debug!(property = property.name(), "Absent value, skipping");
                    return Ok(None);
                }
            },
            PropertyValue::Field(value) => Frame::Value(value),
        };

        Ok(Some(frame))
    }

    fn check_nesting(&self, context: &Context<'_>, model: &ModelRef) -> GenerateResult<()> {
        if context.depth() > self.options.max_depth {
            return Err(GenerateError::DepthExceeded {
                depth: context.depth(),
                max: self.options.max_depth,
            });
        }

        if self.options.detect_cycles {
            let repeated = context
                .ancestors()
                .skip(1)
                .filter_map(|ancestor| ancestor.current_model())
                .any(|ancestor| same_model(ancestor, model));

            if repeated {
                let path = context.model_path();
                let name = path.last().copied().unwrap_or("<model>");
                return Err(GenerateError::CyclicModel { model: name, path });
            }
        }

        Ok(())
    }
}

impl Generate for Directive {
    fn generate(
        &self,
        generator: &FormGenerator,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
        property: &Arc<PropertyDescriptor>,
    ) -> GenerateResult<usize> {
        match self {
            Directive::TextField(d) => d.generate(generator, sink, index, context, property),
            Directive::NumericField(d) => d.generate(generator, sink, index, context, property),
            Directive::CheckBox(d) => d.generate(generator, sink, index, context, property),
            Directive::Switch(d) => d.generate(generator, sink, index, context, property),
            Directive::Select(d) => d.generate(generator, sink, index, context, property),
            Directive::RadioGroup(d) => d.generate(generator, sink, index, context, property),
            Directive::Autocomplete(d) => d.generate(generator, sink, index, context, property),
            Directive::DatePicker(d) => d.generate(generator, sink, index, context, property),
            Directive::TimePicker(d) => d.generate(generator, sink, index, context, property),
            Directive::ColorPicker(d) => d.generate(generator, sink, index, context, property),
            Directive::Slider(d) => d.generate(generator, sink, index, context, property),
            Directive::Alert(d) => d.generate(generator, sink, index, context, property),
            Directive::TabGroup(d) => d.generate(generator, sink, index, context, property),
            Directive::TabPanel(d) => d.generate(generator, sink, index, context, property),
            Directive::GroupBox(d) => d.generate(generator, sink, index, context, property),
            Directive::ValidationMessage(d) => d.generate(generator, sink, index, context, property),
        }
    }
}
