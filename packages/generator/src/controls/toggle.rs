use super::leaf_scope;
use crate::context::Context;
use crate::error::GenerateResult;
use crate::generator::{FormGenerator, Generate};
use crate::schema::PropertyDescriptor;
use crate::sink::{ComponentKind, RenderSink};
use formgen_common::{FieldType, ScalarKind};
use formgen_directives::{CheckBox, Switch, ToProps};
use std::sync::Arc;

impl Generate for CheckBox {
    fn generate(
        &self,
        _generator: &FormGenerator,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
        property: &Arc<PropertyDescriptor>,
    ) -> GenerateResult<usize> {
        let accepts = |field_type: FieldType| field_type.is_kind(ScalarKind::Bool);
        let Some(scope) = leaf_scope("CheckBox", context, property, accepts) else {
            return Ok(index);
        };

        let mut props = self.to_props();
        scope.bind(&mut props);
        props.insert_default("Label", scope.property_name());

        let component = ComponentKind::CheckBox {
            nullable: scope.field_type.is_nullable(),
        };
        sink.emit(index, component, props, None)
    }
}

impl Generate for Switch {
    fn generate(
        &self,
        _generator: &FormGenerator,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
        property: &Arc<PropertyDescriptor>,
    ) -> GenerateResult<usize> {
        // Two-state only; a nullable bool needs a tri-state checkbox
        let accepts = |field_type: FieldType| field_type == FieldType::Scalar(ScalarKind::Bool);
        let Some(scope) = leaf_scope("Switch", context, property, accepts) else {
            return Ok(index);
        };

        let mut props = self.to_props();
        scope.bind(&mut props);
        props.insert_default("Label", scope.property_name());

        sink.emit(index, ComponentKind::Switch, props, None)
    }
}
