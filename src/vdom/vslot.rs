//! Slot representation in a VDOM.
use crate::vdom::VNode;
use std::fmt::{self, Display, Formatter};

/// The point in a component template where the content supplied to the
/// component is projected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VSlot {
    /// Rendered when nothing is assigned to the slot.
    fallback: Option<Box<VNode>>,
}

impl VSlot {
    /// Create a slot without fallback content.
    pub fn new() -> VSlot {
        VSlot { fallback: None }
    }

    /// Create a slot which shows `fallback` when nothing is assigned to it.
    pub fn with_fallback(fallback: impl Into<VNode>) -> VSlot {
        VSlot {
            fallback: Some(Box::new(fallback.into())),
        }
    }

    /// The fallback content of the slot.
    pub fn fallback(&self) -> Option<&VNode> {
        self.fallback.as_deref()
    }

    /// Resolve the slot to the assigned content. The assignment is consumed,
    /// so that only one slot receives it. Content with nothing slottable in it,
    /// such as a lone comment, leaves the fallback in place.
    pub(crate) fn resolve(&self, assigned: &mut Option<&VNode>) -> VNode {
        match assigned.take() {
            Some(content) if content.is_slottable() => content.clone(),
            _ => self.fallback().cloned().unwrap_or_default(),
        }
    }
}

impl From<VSlot> for VNode {
    fn from(slot: VSlot) -> VNode {
        VNode::Slot(slot)
    }
}

impl Display for VSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.fallback() {
            Some(fallback) => write!(f, "<slot>{}</slot>", fallback),
            None => write!(f, "<slot></slot>"),
        }
    }
}
