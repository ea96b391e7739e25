//! Traversal context
//!
//! An immutable chain of frames living on the call stack. The innermost frame
//! is the value or model currently being rendered; the outermost is the root
//! view-model. A child context borrows its parent, so leaving a scope always
//! restores the previous chain.

use crate::schema::{model_address, same_model, ModelRef};
use formgen_common::FieldValue;
use std::fmt;

/// One entry of the ancestor chain
#[derive(Clone)]
pub enum Frame {
    Model(ModelRef),
    Value(FieldValue),
}

impl Frame {
    pub fn as_model(&self) -> Option<&ModelRef> {
        match self {
            Frame::Model(model) => Some(model),
            Frame::Value(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&FieldValue> {
        match self {
            Frame::Value(value) => Some(value),
            Frame::Model(_) => None,
        }
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Model(model) => write!(f, "Model(0x{:x})", model_address(model)),
            Frame::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

/// Ancestor chain for one render pass
pub struct Context<'a> {
    frame: Frame,
    parent: Option<&'a Context<'a>>,
    depth: usize,
}

impl Context<'static> {
    pub fn root(model: ModelRef) -> Self {
        Context {
            frame: Frame::Model(model),
            parent: None,
            depth: 1,
        }
    }
}

impl<'a> Context<'a> {
    /// Child context with `frame` on top
    pub fn push(&self, frame: Frame) -> Context<'_> {
        Context {
            frame,
            parent: Some(self),
            depth: self.depth + 1,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn current(&self) -> &Frame {
        &self.frame
    }

    pub fn current_model(&self) -> Option<&ModelRef> {
        self.frame.as_model()
    }

    pub fn current_value(&self) -> Option<&FieldValue> {
        self.frame.as_value()
    }

    /// Frame one below the top
    pub fn parent(&self) -> Option<&Frame> {
        self.parent.map(|parent| &parent.frame)
    }

    pub fn parent_model(&self) -> Option<&ModelRef> {
        self.parent().and_then(Frame::as_model)
    }

    /// Outermost model, the view-model the render started from
    pub fn root_model(&self) -> Option<&ModelRef> {
        self.ancestors().last().and_then(|context| context.current_model())
    }

    /// This context followed by each enclosing one, innermost first
    pub fn ancestors(&self) -> impl Iterator<Item = &Context<'a>> + '_ {
        std::iter::successors(Some(self), |context| context.parent)
    }

    pub fn contains_model(&self, model: &ModelRef) -> bool {
        self.ancestors()
            .filter_map(|context| context.current_model())
            .any(|frame| same_model(frame, model))
    }

    /// Type names of the models on the chain, outermost first
    pub fn model_path(&self) -> Vec<&'static str> {
        let mut path: Vec<_> = self
            .ancestors()
            .filter_map(|context| context.current_model())
            .filter_map(|model| model.try_borrow().ok().map(|m| m.schema().type_name()))
            .collect();
        path.reverse();
        path
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.ancestors().map(|context| &context.frame))
            .finish()
    }
}
