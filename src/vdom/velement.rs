//! Element representation in a VDOM.

use crate::vdom::{Escaped, VNode};
use indexmap::IndexMap;
use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
};

/// The representation of an element in virtual DOM.
#[derive(Debug, Clone, PartialEq)]
pub struct VElement {
    /// The tag of the element. Eg: h1, p, div, ...
    tag: &'static str,
    /// The attributes of the given element
    attributes: Attributes,
    /// The child node of the given element
    child: Box<VNode>,
}

/// A list of attributes.
#[derive(Debug, Clone, PartialEq, Default)]
struct Attributes(IndexMap<&'static str, AttributeValue>);

/// The key, value pair of the attributes on an element.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// The key of the attribute
    key: &'static str,
    /// The value pair of the attribute key
    value: AttributeValue,
}

/// Either a string or a bool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A string attribute value
    String(String),
    /// A boolean attribute value
    Bool(bool),
    /// An optional attribute value
    None,
}

const VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

impl VElement {
    /// Create a VElement.
    ///
    /// A void element, such as `br` or `img`, cannot hold a child. The child
    /// is dropped if one is given.
    pub fn new(tag: &'static str, attributes: Vec<Attribute>, child: impl Into<VNode>) -> VElement {
        let mut child = child.into();
        if is_void(tag) && !child.is_empty() {
            log::warn!("Element with a void tag `{}` cannot have a child.", tag);
            child = VNode::None;
        }
        VElement {
            tag,
            attributes: Attributes::from(attributes),
            child: Box::new(child),
        }
    }

    /// Create a VElement without a child.
    pub fn childless(tag: &'static str, attributes: Vec<Attribute>) -> VElement {
        VElement {
            tag,
            attributes: Attributes::from(attributes),
            child: Box::new(VNode::None),
        }
    }

    /// The tag of the element.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// The child of the element.
    pub fn child(&self) -> &VNode {
        &self.child
    }

    /// Get the value of an attribute by its key.
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.0.get(key)
    }

    /// Iterate over the attributes in their declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &AttributeValue)> + '_ {
        self.attributes.0.iter().map(|(k, v)| (*k, v))
    }

    pub(crate) fn project_into(&self, assigned: &mut Option<&VNode>) -> VElement {
        VElement {
            tag: self.tag,
            attributes: self.attributes.clone(),
            child: Box::new(self.child.project_into(assigned)),
        }
    }
}

fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

impl Attribute {
    /// Create an Attribute for a VElement.
    pub fn new(key: &'static str, value: impl Into<AttributeValue>) -> Attribute {
        Attribute {
            key,
            value: value.into(),
        }
    }
}

impl From<VElement> for VNode {
    fn from(el: VElement) -> VNode {
        VNode::Element(el)
    }
}

impl Display for VElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if is_void(self.tag) {
            write!(f, "<{}{}>", self.tag, self.attributes)
        } else {
            write!(
                f,
                "<{tag}{attributes}>{child}</{tag}>",
                tag = self.tag,
                attributes = self.attributes,
                child = self.child
            )
        }
    }
}

impl Display for Attributes {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (k, v) in self.0.iter() {
            match v {
                AttributeValue::String(v) => {
                    write!(f, " {}=\"{}\"", k, Escaped::attribute(v))?;
                }
                AttributeValue::Bool(truthy) => {
                    if *truthy {
                        write!(f, " {}=\"\"", k)?;
                    }
                }
                AttributeValue::None => {}
            }
        }
        Ok(())
    }
}

impl From<bool> for AttributeValue {
    fn from(val: bool) -> AttributeValue {
        AttributeValue::Bool(val)
    }
}

impl<'a> From<&'a str> for AttributeValue {
    fn from(val: &'a str) -> AttributeValue {
        AttributeValue::String(val.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(val: String) -> AttributeValue {
        AttributeValue::String(val)
    }
}

impl<'a> From<Cow<'a, str>> for AttributeValue {
    fn from(val: Cow<'a, str>) -> AttributeValue {
        AttributeValue::String(val.into())
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(val: Option<T>) -> AttributeValue {
        match val {
            Some(val) => val.into(),
            None => AttributeValue::None,
        }
    }
}

impl From<Vec<Attribute>> for Attributes {
    fn from(val: Vec<Attribute>) -> Attributes {
        let attrs = val.into_iter().map(|attr| (attr.key, attr.value)).collect();
        Attributes(attrs)
    }
}
