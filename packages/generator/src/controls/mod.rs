//! Leaf binding controls
//!
//! Every leaf control follows the same preamble: it needs a parent model one
//! below the top of the context, and it only fires for the property types it
//! supports. Either miss is logged and leaves the index unchanged.

mod choice;
mod display;
mod input;
mod toggle;

use crate::binding::Binding;
use crate::context::Context;
use crate::schema::PropertyDescriptor;
use formgen_common::{FieldType, FieldValue, PropertyBag};
use std::sync::Arc;
use tracing::debug;

/// Bound state shared by leaf controls
pub(crate) struct LeafScope {
    pub binding: Binding,
    pub value: FieldValue,
    pub field_type: FieldType,
}

impl LeafScope {
    /// Add the value, write-back callback and field identifier
    pub fn bind(&self, props: &mut PropertyBag) {
        props.insert("Value", self.value.clone());
        props.insert("ValueChanged", self.binding.value_changed());
        props.insert("For", self.binding.field_identifier());
    }

    pub fn property_name(&self) -> &'static str {
        self.binding.property().name()
    }
}

/// Preconditions of a leaf control; `None` means the control is skipped
pub(crate) fn leaf_scope(
    control: &'static str,
    context: &Context<'_>,
    property: &Arc<PropertyDescriptor>,
    accepts: impl Fn(FieldType) -> bool,
) -> Option<LeafScope> {
    if context.depth() < 2 {
        debug!(control, depth = context.depth(), "Context too shallow for a bound control");
        return None;
    }

    let field_type = property.field_type();
    if !accepts(field_type) {
        debug!(
            control,
            property = property.name(),
            field_type = %field_type,
            "Property type not supported by control, skipping"
        );
        return None;
    }

    let Some(value) = context.current_value().cloned() else {
        debug!(control, property = property.name(), "No bound value on top of the context");
        return None;
    };

    let Some(binding) = Binding::from_context(context, property) else {
        debug!(control, property = property.name(), "No parent model to bind against");
        return None;
    };

    Some(LeafScope {
        binding,
        value,
        field_type,
    })
}

fn is_text(field_type: FieldType) -> bool {
    field_type == FieldType::Text
}
