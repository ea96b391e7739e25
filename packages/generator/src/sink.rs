//! Render sink protocol
//!
//! The generator never builds UI itself. Each control is handed to a
//! [`RenderSink`] as `(index, component, property bag, child content)`; the
//! sink returns the next free index. [`RecordingSink`] keeps the emitted nodes
//! as a tree for inspection.

use crate::error::GenerateResult;
use formgen_common::{PropertyBag, ScalarKind};
use serde::{Serialize, Serializer};
use std::fmt;

/// Target component of an emitted node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    TextField,
    NumericField { kind: ScalarKind, nullable: bool },
    CheckBox { nullable: bool },
    Switch,
    Select,
    SelectItem,
    RadioGroup,
    Radio,
    Autocomplete,
    DatePicker,
    TimePicker,
    ColorPicker,
    Slider { kind: ScalarKind },
    Alert,
    Text,
    Tabs,
    TabPanel,
    GroupBox,
    ValidationMessage,
}

impl ComponentKind {
    /// Component name without type arguments
    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::TextField => "TextField",
            ComponentKind::NumericField { .. } => "NumericField",
            ComponentKind::CheckBox { .. } => "CheckBox",
            ComponentKind::Switch => "Switch",
            ComponentKind::Select => "Select",
            ComponentKind::SelectItem => "SelectItem",
            ComponentKind::RadioGroup => "RadioGroup",
            ComponentKind::Radio => "Radio",
            ComponentKind::Autocomplete => "Autocomplete",
            ComponentKind::DatePicker => "DatePicker",
            ComponentKind::TimePicker => "TimePicker",
            ComponentKind::ColorPicker => "ColorPicker",
            ComponentKind::Slider { .. } => "Slider",
            ComponentKind::Alert => "Alert",
            ComponentKind::Text => "Text",
            ComponentKind::Tabs => "Tabs",
            ComponentKind::TabPanel => "TabPanel",
            ComponentKind::GroupBox => "GroupBox",
            ComponentKind::ValidationMessage => "ValidationMessage",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::NumericField { kind, nullable } => {
                write!(f, "NumericField<{}{}>", kind.name(), if *nullable { "?" } else { "" })
            }
            ComponentKind::CheckBox { nullable: true } => f.write_str("CheckBox<bool?>"),
            ComponentKind::Slider { kind } => write!(f, "Slider<{}>", kind.name()),
            other => f.write_str(other.name()),
        }
    }
}

impl Serialize for ComponentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Renders the children of a container node starting at the given index
pub type ChildContent<'c> =
    &'c mut dyn FnMut(&mut dyn RenderSink, usize) -> GenerateResult<usize>;

/// Opaque rendering target
pub trait RenderSink {
    /// Emit one node at `index` and return the next free index
    fn emit(
        &mut self,
        index: usize,
        component: ComponentKind,
        props: PropertyBag,
        children: Option<ChildContent<'_>>,
    ) -> GenerateResult<usize>;
}

/// A node captured by [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedNode {
    pub index: usize,
    pub component: ComponentKind,
    pub props: PropertyBag,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderedNode>,
}

impl RenderedNode {
    pub fn prop_text(&self, key: &str) -> Option<&str> {
        self.props.get_text(key)
    }

    /// This node and all nodes beneath it, depth first
    pub fn descendants(&self) -> Vec<&RenderedNode> {
        let mut nodes = vec![self];
        for child in &self.children {
            nodes.extend(child.descendants());
        }
        nodes
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a RenderedNode> + 'a {
        self.children
            .iter()
            .filter(move |child| child.component.name() == name)
    }
}

/// Sink that records the emitted tree
#[derive(Debug, Default)]
pub struct RecordingSink {
    nodes: Vec<RenderedNode>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level nodes in emission order
    pub fn nodes(&self) -> &[RenderedNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<RenderedNode> {
        self.nodes
    }

    /// Every recorded node, depth first
    pub fn all(&self) -> Vec<&RenderedNode> {
        self.nodes.iter().flat_map(RenderedNode::descendants).collect()
    }

    /// Every recorded node of the given component name
    pub fn find_all(&self, name: &str) -> Vec<&RenderedNode> {
        self.all()
            .into_iter()
            .filter(|node| node.component.name() == name)
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.nodes)
    }
}

impl RenderSink for RecordingSink {
    fn emit(
        &mut self,
        index: usize,
        component: ComponentKind,
        props: PropertyBag,
        children: Option<ChildContent<'_>>,
    ) -> GenerateResult<usize> {
        let mut node = RenderedNode {
            index,
            component,
            props,
            children: Vec::new(),
        };

        let next = match children {
            Some(render_children) => {
                let mut nested = RecordingSink::new();
                let next = render_children(&mut nested, index + 1)?;
                node.children = nested.nodes;
                next.max(index + 1)
            }
            None => index + 1,
        };

        self.nodes.push(node);
        Ok(next)
    }
}
