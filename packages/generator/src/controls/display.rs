use super::{is_text, leaf_scope};
use crate::context::Context;
use crate::error::GenerateResult;
use crate::generator::{FormGenerator, Generate};
use crate::schema::PropertyDescriptor;
use crate::sink::{ComponentKind, RenderSink};
use formgen_common::{FieldType, PropertyBag};
use formgen_directives::{Alert, Slider, ToProps, ValidationMessage};
use std::sync::Arc;

impl Generate for Slider {
    fn generate(
        &self,
        _generator: &FormGenerator,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
        property: &Arc<PropertyDescriptor>,
    ) -> GenerateResult<usize> {
        let accepts = |field_type: FieldType| {
            matches!(field_type, FieldType::Scalar(kind) if kind.is_numeric())
        };
        let Some(scope) = leaf_scope("Slider", context, property, accepts) else {
            return Ok(index);
        };
        let Some(kind) = scope.field_type.scalar_kind() else {
            return Ok(index);
        };

        let mut props = self.to_props();
        scope.bind(&mut props);
        props.insert_default("Label", scope.property_name());

        sink.emit(index, ComponentKind::Slider { kind }, props, None)
    }
}

impl Generate for Alert {
    fn generate(
        &self,
        _generator: &FormGenerator,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
        property: &Arc<PropertyDescriptor>,
    ) -> GenerateResult<usize> {
        let Some(scope) = leaf_scope("Alert", context, property, is_text) else {
            return Ok(index);
        };

        let text = scope.value.as_text().unwrap_or_default().to_string();
        let mut content = |sink: &mut dyn RenderSink, index: usize| -> GenerateResult<usize> {
            let mut props = PropertyBag::new();
            props.insert("Text", text.as_str());
            sink.emit(index, ComponentKind::Text, props, None)
        };

        sink.emit(index, ComponentKind::Alert, self.to_props(), Some(&mut content))
    }
}

impl Generate for ValidationMessage {
    fn generate(
        &self,
        _generator: &FormGenerator,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
        property: &Arc<PropertyDescriptor>,
    ) -> GenerateResult<usize> {
        let accepts = |field_type: FieldType| field_type != FieldType::Model;
        let Some(scope) = leaf_scope("ValidationMessage", context, property, accepts) else {
            return Ok(index);
        };

        let mut props = self.to_props();
        props.insert("For", scope.binding.field_identifier());

        sink.emit(index, ComponentKind::ValidationMessage, props, None)
    }
}
