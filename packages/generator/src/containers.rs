//! Container directives
//!
//! Containers bind no value. They recurse into the nested model on top of the
//! context and render its properties inside a wrapping node.

use crate::context::Context;
use crate::error::GenerateResult;
use crate::generator::{DirectiveFilter, FormGenerator, Generate};
use crate::schema::PropertyDescriptor;
use crate::sink::{ComponentKind, RenderSink};
use formgen_common::PropertyBag;
use formgen_directives::{GroupBox, TabGroup, TabPanel, ToProps};
use std::sync::Arc;
use tracing::{debug, warn};

/// Emit a tabs node holding the tab-panel properties of the model on top of `context`
pub fn render_tabs(
    generator: &FormGenerator,
    sink: &mut dyn RenderSink,
    index: usize,
    context: &Context<'_>,
    group: &TabGroup,
) -> GenerateResult<usize> {
    let mut panels = |sink: &mut dyn RenderSink, index: usize| {
        generator.walk(sink, index, context, DirectiveFilter::TabPanels)
    };

    sink.emit(index, ComponentKind::Tabs, group.to_props(), Some(&mut panels))
}

/// Emit `component` wrapping every directive-bearing property of the nested model
fn render_nested(
    generator: &FormGenerator,
    sink: &mut dyn RenderSink,
    index: usize,
    context: &Context<'_>,
    property: &PropertyDescriptor,
    component: ComponentKind,
    props: PropertyBag,
) -> GenerateResult<usize> {
    let control = component.name();
    if context.depth() < 2 {
        debug!(control, depth = context.depth(), "Context too shallow for a container");
        return Ok(index);
    }

    if context.current_model().is_none() {
        debug!(
            control,
            property = property.name(),
            "Container needs a nested model, skipping"
        );
        return Ok(index);
    }

    let mut children =
        |sink: &mut dyn RenderSink, index: usize| generator.render_properties(sink, index, context);

    sink.emit(index, component, props, Some(&mut children))
}

impl Generate for TabPanel {
    fn generate(
        &self,
        generator: &FormGenerator,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
        property: &Arc<PropertyDescriptor>,
    ) -> GenerateResult<usize> {
        let mut props = self.to_props();
        props.insert_default("Text", property.name());

        render_nested(
            generator,
            sink,
            index,
            context,
            property,
            ComponentKind::TabPanel,
            props,
        )
    }
}

impl Generate for GroupBox {
    fn generate(
        &self,
        generator: &FormGenerator,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
        property: &Arc<PropertyDescriptor>,
    ) -> GenerateResult<usize> {
        let mut props = self.to_props();
        props.insert_default("Title", property.name());

        render_nested(
            generator,
            sink,
            index,
            context,
            property,
            ComponentKind::GroupBox,
            props,
        )
    }
}

impl Generate for TabGroup {
    fn generate(
        &self,
        generator: &FormGenerator,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
        property: &Arc<PropertyDescriptor>,
    ) -> GenerateResult<usize> {
        // Root properties only: the context holds the root and this property
        if context.depth() != 2 {
            warn!(
                property = property.name(),
                depth = context.depth(),
                "Tab group is only valid at the top of a model graph, skipping"
            );
            return Ok(index);
        }

        if context.current_model().is_none() {
            debug!(property = property.name(), "Tab group needs a nested model, skipping");
            return Ok(index);
        }

        render_tabs(generator, sink, index, context, self)
    }
}
