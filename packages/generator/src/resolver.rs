//! Late-bound callback resolution
//!
//! Methods named by a directive (an options function, a search function) are
//! looked up in the method registry of each candidate model, innermost first.
//! Resolution matches on the name alone; a method of the wrong shape is only
//! detected when the resolved callable is invoked.

use crate::context::Context;
use crate::schema::{same_model, MethodEntry, ModelRef};
use formgen_common::{CallbackError, CallbackResult, SearchCallback};
use futures::future::{self, FutureExt, LocalBoxFuture};
use std::sync::Arc;
use tracing::{debug, warn};

/// A method bound to the model instance that declares it
#[derive(Clone)]
pub struct ResolvedMethod {
    target: ModelRef,
    model: &'static str,
    name: String,
    entry: Arc<MethodEntry>,
}

impl ResolvedMethod {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type name of the model the method was found on
    pub fn model(&self) -> &'static str {
        self.model
    }

    pub fn target(&self) -> &ModelRef {
        &self.target
    }

    /// Call as a zero-argument options function
    pub fn invoke_options(&self) -> CallbackResult<LocalBoxFuture<'static, Vec<String>>> {
        let target = self.target.try_borrow().map_err(|_| self.busy())?;
        match &*self.entry {
            MethodEntry::Options(method) => method(target.as_any()).ok_or_else(|| self.target_mismatch()),
            other => Err(self.signature_mismatch("an options function", other)),
        }
    }

    /// Call as a search function with `query`
    pub fn invoke_search(
        &self,
        query: impl Into<String>,
    ) -> CallbackResult<LocalBoxFuture<'static, Vec<String>>> {
        let target = self.target.try_borrow().map_err(|_| self.busy())?;
        match &*self.entry {
            MethodEntry::Search(method) => {
                method(target.as_any(), query.into()).ok_or_else(|| self.target_mismatch())
            }
            other => Err(self.signature_mismatch("a search function", other)),
        }
    }

    /// Asynchronous search callback handed to an autocomplete control
    pub fn into_search_callback(self) -> SearchCallback {
        SearchCallback::new(move |query| match self.invoke_search(query) {
            Ok(pending) => pending.map(Ok).boxed_local(),
            Err(error) => future::ready(Err(error)).boxed_local(),
        })
    }

    fn busy(&self) -> CallbackError {
        CallbackError::Busy { model: self.model }
    }

    fn target_mismatch(&self) -> CallbackError {
        CallbackError::TargetMismatch {
            model: self.model,
            method: self.name.clone(),
        }
    }

    fn signature_mismatch(&self, expected: &'static str, actual: &MethodEntry) -> CallbackError {
        CallbackError::SignatureMismatch {
            model: self.model,
            method: self.name.clone(),
            expected,
            actual: actual.shape(),
        }
    }
}

/// Candidate targets for a control bound in `context`: the model owning the
/// property, then the root view-model unless it is the same instance
pub fn candidates(context: &Context<'_>) -> Vec<ModelRef> {
    let mut candidates = Vec::with_capacity(2);

    let current = context
        .parent_model()
        .or_else(|| context.current_model())
        .cloned();

    if let Some(current) = current {
        candidates.push(current);
    }

    if let Some(root) = context.root_model() {
        if !candidates.iter().any(|candidate| same_model(candidate, root)) {
            candidates.push(root.clone());
        }
    }

    candidates
}

/// First candidate whose type registers a method called `name`
pub fn try_resolve(candidates: &[ModelRef], name: &str) -> Option<ResolvedMethod> {
    for candidate in candidates {
        let Ok(model) = candidate.try_borrow() else {
            warn!(
                method = name,
                "Candidate is already borrowed, an outer model may resolve the method instead"
            );
            continue;
        };
        let schema = model.schema();

        if let Some(entry) = schema.method(name) {
            debug!(method = name, model = schema.type_name(), "Resolved method");
            return Some(ResolvedMethod {
                target: candidate.clone(),
                model: schema.type_name(),
                name: name.to_string(),
                entry: entry.clone(),
            });
        }
    }

    debug!(method = name, candidates = candidates.len(), "Method not found on any candidate");
    None
}
