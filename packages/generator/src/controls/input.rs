use super::{is_text, leaf_scope};
use crate::context::Context;
use crate::error::GenerateResult;
use crate::generator::{FormGenerator, Generate};
use crate::schema::PropertyDescriptor;
use crate::sink::{ComponentKind, RenderSink};
use formgen_common::{FieldType, ScalarKind};
use formgen_directives::{ColorPicker, DatePicker, NumericField, TextField, TimePicker, ToProps};
use std::sync::Arc;

impl Generate for TextField {
    fn generate(
        &self,
        _generator: &FormGenerator,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
        property: &Arc<PropertyDescriptor>,
    ) -> GenerateResult<usize> {
        let Some(scope) = leaf_scope("TextField", context, property, is_text) else {
            return Ok(index);
        };

        let mut props = self.to_props();
        scope.bind(&mut props);
        props.insert_default("Label", scope.property_name());

        sink.emit(index, ComponentKind::TextField, props, None)
    }
}

impl Generate for NumericField {
    fn generate(
        &self,
        _generator: &FormGenerator,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
        property: &Arc<PropertyDescriptor>,
    ) -> GenerateResult<usize> {
        let accepts = |field_type: FieldType| field_type.is_numeric();
        let Some(scope) = leaf_scope("NumericField", context, property, accepts) else {
            return Ok(index);
        };

        let Some(kind) = scope.field_type.scalar_kind() else {
            return Ok(index);
        };

        let mut props = self.to_props();
        scope.bind(&mut props);
        props.insert_default("Label", scope.property_name());

        let component = ComponentKind::NumericField {
            kind,
            nullable: scope.field_type.is_nullable(),
        };
        sink.emit(index, component, props, None)
    }
}

macro_rules! picker_generate {
    ($directive:ident, $kind:ident) => {
        impl Generate for $directive {
            fn generate(
                &self,
                _generator: &FormGenerator,
                sink: &mut dyn RenderSink,
                index: usize,
                context: &Context<'_>,
                property: &Arc<PropertyDescriptor>,
            ) -> GenerateResult<usize> {
                let accepts = |field_type: FieldType| field_type.is_kind(ScalarKind::$kind);
                let Some(scope) = leaf_scope(stringify!($directive), context, property, accepts)
                else {
                    return Ok(index);
                };

                let mut props = self.to_props();
                scope.bind(&mut props);
                props.insert_default("Label", scope.property_name());

                sink.emit(index, ComponentKind::$directive, props, None)
            }
        }
    };
}

picker_generate!(DatePicker, Date);
picker_generate!(TimePicker, Time);
picker_generate!(ColorPicker, Color);
