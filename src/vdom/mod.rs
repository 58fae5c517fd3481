//! The Virtual DOM which backs component rendering.
//!
//! A component renders a template made of vnodes. Templates may contain
//! [`VSlot`](vslot/struct.VSlot.html)s, the points where the content supplied
//! by the user of the component gets projected.

use self::{velement::VElement, vlist::VList, vslot::VSlot, vtext::VText};
use std::fmt::{self, Display, Formatter};

mod conversions;
pub mod velement;
pub mod vlist;
pub mod vslot;
pub mod vtext;

/// A virtual node in a virtual DOM tree.
#[derive(Debug, Clone, PartialEq)]
pub enum VNode {
    /// A text vnode
    Text(VText),
    /// An element vnode
    Element(VElement),
    /// A list vnode
    List(VList),
    /// A slot vnode, replaced by the projected content
    Slot(VSlot),
    /// An empty vnode
    None,
}

impl VNode {
    /// Wrap anything convertible into a VNode.
    pub fn new<T: Into<VNode>>(node: T) -> VNode {
        node.into()
    }

    /// Whether this is an absent vnode.
    pub fn is_none(&self) -> bool {
        matches!(self, VNode::None)
    }

    /// Whether the vnode renders to nothing at all.
    pub fn is_empty(&self) -> bool {
        match self {
            VNode::None => true,
            VNode::List(list) => list.iter().all(VNode::is_empty),
            _ => false,
        }
    }

    /// Whether the vnode holds anything a slot can be assigned. Text and
    /// elements are assigned to slots, comments are not.
    pub fn is_slottable(&self) -> bool {
        match self {
            VNode::Text(text) => !text.is_comment(),
            VNode::Element(_) | VNode::Slot(_) => true,
            VNode::List(list) => list.iter().any(VNode::is_slottable),
            VNode::None => false,
        }
    }

    /// The concatenated text of all the text nodes, depth first. Comments are
    /// not part of the text content.
    pub fn text_content(&self) -> String {
        let mut content = String::new();
        self.collect_text(&mut content);
        content
    }

    pub(crate) fn collect_text(&self, content: &mut String) {
        match self {
            VNode::Text(text) => {
                if !text.is_comment() {
                    content.push_str(text.content());
                }
            }
            VNode::Element(el) => el.child().collect_text(content),
            VNode::List(list) => {
                for vnode in list.iter() {
                    vnode.collect_text(content);
                }
            }
            VNode::Slot(slot) => {
                if let Some(fallback) = slot.fallback() {
                    fallback.collect_text(content);
                }
            }
            VNode::None => {}
        }
    }

    /// The first element found in the tree, depth first.
    pub fn first_element(&self) -> Option<&VElement> {
        match self {
            VNode::Element(el) => Some(el),
            VNode::List(list) => list.iter().find_map(VNode::first_element),
            _ => None,
        }
    }

    /// Builds the flattened tree of a template, where the first slot receives
    /// the `assigned` content. Any slot left without content shows its
    /// fallback.
    ///
    /// The template as well as the assigned content are left untouched.
    pub fn project(&self, assigned: Option<&VNode>) -> VNode {
        let mut assigned = assigned;
        self.project_into(&mut assigned)
    }

    pub(crate) fn project_into(&self, assigned: &mut Option<&VNode>) -> VNode {
        match self {
            VNode::Slot(slot) => slot.resolve(assigned),
            VNode::Element(el) => VNode::Element(el.project_into(assigned)),
            VNode::List(list) => VNode::List(list.project_into(assigned)),
            other => other.clone(),
        }
    }
}

impl Default for VNode {
    fn default() -> Self {
        VNode::None
    }
}

impl Display for VNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            VNode::Text(inner) => write!(f, "{}", inner),
            VNode::Element(inner) => write!(f, "{}", inner),
            VNode::List(inner) => write!(f, "{}", inner),
            VNode::Slot(inner) => write!(f, "{}", inner),
            VNode::None => Ok(()),
        }
    }
}

/// Writes a string with the HTML special characters escaped.
pub(crate) struct Escaped<'a> {
    content: &'a str,
    in_attribute: bool,
}

impl<'a> Escaped<'a> {
    pub(crate) fn text(content: &'a str) -> Escaped<'a> {
        Escaped {
            content,
            in_attribute: false,
        }
    }

    pub(crate) fn attribute(content: &'a str) -> Escaped<'a> {
        Escaped {
            content,
            in_attribute: true,
        }
    }
}

impl<'a> Display for Escaped<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut last = 0;
        for (index, ch) in self.content.char_indices() {
            let replacement = match ch {
                '&' => "&amp;",
                '"' if self.in_attribute => "&quot;",
                '<' if !self.in_attribute => "&lt;",
                '>' if !self.in_attribute => "&gt;",
                _ => continue,
            };
            f.write_str(&self.content[last..index])?;
            f.write_str(replacement)?;
            last = index + ch.len_utf8();
        }
        f.write_str(&self.content[last..])
    }
}
