use super::{is_text, leaf_scope};
use crate::context::Context;
use crate::error::GenerateResult;
use crate::generator::{FormGenerator, Generate};
use crate::resolver::{candidates, try_resolve};
use crate::schema::PropertyDescriptor;
use crate::sink::{ComponentKind, RenderSink};
use formgen_common::{CallbackError, PropertyBag};
use formgen_directives::{Autocomplete, RadioGroup, Select, ToProps};
use futures::executor::{block_on, enter};
use std::sync::Arc;
use tracing::{debug, warn};

/// Option entries for a select or radio group
///
/// A resolvable options function wins over the static list; its entries are
/// trimmed. An unresolvable one falls back to the static list.
pub(crate) fn resolve_options(
    generator: &FormGenerator,
    context: &Context<'_>,
    options: &str,
    options_func: Option<&str>,
) -> GenerateResult<Vec<String>> {
    if let Some(name) = options_func {
        match try_resolve(&candidates(context), name) {
            Some(method) => {
                // block_on panics when nested in a running executor
                if enter().is_err() {
                    return Err(CallbackError::NestedExecutor {
                        method: name.to_string(),
                    }
                    .into());
                }
                let entries = block_on(method.invoke_options()?);
                return Ok(entries
                    .into_iter()
                    .map(|entry| entry.trim().to_string())
                    .collect());
            }
            None => {
                debug!(options_func = name, "Options function not found, using static options");
            }
        }
    }

    Ok(generator.options().split_options(options))
}

impl Generate for Select {
    fn generate(
        &self,
        generator: &FormGenerator,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
        property: &Arc<PropertyDescriptor>,
    ) -> GenerateResult<usize> {
        let Some(scope) = leaf_scope("Select", context, property, is_text) else {
            return Ok(index);
        };

        let entries = resolve_options(generator, context, &self.options, self.options_func.as_deref())?;

        let mut props = self.to_props();
        scope.bind(&mut props);
        props.insert_default("Label", scope.property_name());

        let mut items = |sink: &mut dyn RenderSink, mut index: usize| -> GenerateResult<usize> {
            for entry in &entries {
                let mut item = PropertyBag::new();
                item.insert("Value", entry.as_str());
                index = sink.emit(index, ComponentKind::SelectItem, item, None)?;
            }
            Ok(index)
        };

        sink.emit(index, ComponentKind::Select, props, Some(&mut items))
    }
}

impl Generate for RadioGroup {
    fn generate(
        &self,
        generator: &FormGenerator,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
        property: &Arc<PropertyDescriptor>,
    ) -> GenerateResult<usize> {
        let Some(scope) = leaf_scope("RadioGroup", context, property, is_text) else {
            return Ok(index);
        };

        let entries = resolve_options(generator, context, &self.options, self.options_func.as_deref())?;

        let mut props = self.to_props();
        props.insert("SelectedOption", scope.value.clone());
        props.insert("SelectedOptionChanged", scope.binding.value_changed());
        props.insert("For", scope.binding.field_identifier());
        props.insert_default("Label", scope.property_name());

        // Item appearance follows the group
        let shared: Vec<_> = RadioGroup::ITEM_OPTIONS
            .iter()
            .filter_map(|key| props.get(key).map(|value| (key.to_string(), value.clone())))
            .collect();

        let mut radios = |sink: &mut dyn RenderSink, mut index: usize| -> GenerateResult<usize> {
            for entry in &entries {
                let mut radio = PropertyBag::new();
                radio.extend(shared.iter().cloned());
                radio.insert("Value", entry.as_str());
                radio.insert("Label", entry.as_str());
                index = sink.emit(index, ComponentKind::Radio, radio, None)?;
            }
            Ok(index)
        };

        sink.emit(index, ComponentKind::RadioGroup, props, Some(&mut radios))
    }
}

impl Generate for Autocomplete {
    fn generate(
        &self,
        _generator: &FormGenerator,
        sink: &mut dyn RenderSink,
        index: usize,
        context: &Context<'_>,
        property: &Arc<PropertyDescriptor>,
    ) -> GenerateResult<usize> {
        let Some(scope) = leaf_scope("Autocomplete", context, property, is_text) else {
            return Ok(index);
        };

        let Some(search) = try_resolve(&candidates(context), &self.search_func) else {
            warn!(
                property = property.name(),
                search_func = %self.search_func,
                "Search function not found, skipping autocomplete"
            );
            return Ok(index);
        };

        let mut props = self.to_props();
        scope.bind(&mut props);
        props.insert_default("Label", scope.property_name());
        props.insert("SearchFunc", search.into_search_callback());

        sink.emit(index, ComponentKind::Autocomplete, props, None)
    }
}
