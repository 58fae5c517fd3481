//! The registry of the components defined in a document.

use crate::component::{Definition, Instance};
use indexmap::IndexMap;
use std::{
    borrow::Borrow,
    fmt::{self, Display, Formatter},
};
use thiserror::Error;

/// Names which match the custom element grammar but are reserved by other
/// specifications.
const RESERVED_NAMES: [&str; 8] = [
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// Whether `ch` may appear in a custom element name (the `PCENChar`
/// production of the HTML standard).
fn is_name_char(ch: char) -> bool {
    matches!(ch,
        '-' | '.' | '0'..='9' | '_' | 'a'..='z'
        | '\u{B7}'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{203F}'..='\u{2040}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

/// Errors while defining or looking up components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The tag is not a valid custom element name.
    #[error("`{name}` is not a valid custom element name: {reason}")]
    InvalidName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },
    /// A component is already defined under the tag.
    #[error("a component is already defined as `{0}`")]
    AlreadyDefined(String),
    /// No component is defined under the tag.
    #[error("no component is defined as `{0}`")]
    NotDefined(String),
}

/// A valid custom element name, e.g. `header-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagName(String);

impl TagName {
    /// Validate a custom element name.
    pub fn parse(name: &str) -> Result<TagName, RegistryError> {
        let invalid = |reason| RegistryError::InvalidName {
            name: name.to_string(),
            reason,
        };

        if !name.starts_with(|ch: char| ch.is_ascii_lowercase()) {
            return Err(invalid("must start with a lowercase ASCII letter"));
        }
        if !name.contains('-') {
            return Err(invalid("must contain a hyphen"));
        }
        if name.chars().any(|ch| ch.is_ascii_uppercase()) {
            return Err(invalid("must not contain uppercase ASCII letters"));
        }
        if !name.chars().all(is_name_char) {
            return Err(invalid("contains a character not allowed in a name"));
        }
        if RESERVED_NAMES.contains(&name) {
            return Err(invalid("is a reserved name"));
        }
        Ok(TagName(name.to_string()))
    }

    /// The name as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TagName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for TagName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps tag names to the components defined under them. One registry is
/// meant to back one document, where every tag is unique.
#[derive(Debug, Default)]
pub struct Registry {
    definitions: IndexMap<TagName, Definition>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Define a component under its tag. A tag can only be defined once.
    pub fn define(&mut self, definition: Definition) -> Result<(), RegistryError> {
        let tag = TagName::parse(definition.tag())?;
        if self.definitions.contains_key(&tag) {
            log::warn!("Refusing to redefine <{}>", tag);
            return Err(RegistryError::AlreadyDefined(tag.0));
        }
        log::debug!("Defining <{}>", tag);
        self.definitions.insert(tag, definition);
        Ok(())
    }

    /// The definition of the component under `tag`.
    pub fn get(&self, tag: &str) -> Option<&Definition> {
        self.definitions.get(tag)
    }

    /// Whether a component is defined under `tag`.
    pub fn is_defined(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// The defined tags in definition order.
    pub fn tags(&self) -> impl Iterator<Item = &TagName> {
        self.definitions.keys()
    }

    /// Create an instance of the component under `tag`.
    pub fn create(&self, tag: &str) -> Result<Instance, RegistryError> {
        self.get(tag)
            .map(Definition::instantiate)
            .ok_or_else(|| RegistryError::NotDefined(tag.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{style::Styles, vdom::VNode};

    fn definition(tag: &str) -> Definition {
        Definition::new(tag, Styles::new(), || VNode::None)
    }

    #[test]
    fn should_accept_valid_names() {
        for name in ["header-1", "x-", "my-element.v2", "a-b_c", "emotion-😍"] {
            assert!(TagName::parse(name).is_ok(), "{} should be valid", name);
        }
    }

    #[test]
    fn should_reject_invalid_names() {
        let names = [
            "",
            "header",
            "Header-1",
            "header-One",
            "1-header",
            "-header",
            "my element-1",
            "my-el!",
        ];
        for name in names {
            assert!(
                matches!(TagName::parse(name), Err(RegistryError::InvalidName { .. })),
                "{} should be invalid",
                name
            );
        }
    }

    #[test]
    fn should_reject_excluded_non_ascii_characters() {
        let names = [
            "x-\u{D7}",
            "x-\u{F7}",
            "x-\u{37E}",
            "x-\u{2000}",
            "x-\u{200B}",
            "x-\u{2010}",
            "x-\u{206F}",
            "x-\u{FFFE}",
        ];
        for name in names {
            assert!(TagName::parse(name).is_err(), "{} should be invalid", name);
        }
    }

    #[test]
    fn should_accept_name_chars_at_range_edges() {
        let names = ["x-\u{B7}", "x-\u{C0}", "x-\u{200C}", "x-\u{3001}", "x-\u{EFFFF}"];
        for name in names {
            assert!(TagName::parse(name).is_ok(), "{} should be valid", name);
        }
    }

    #[test]
    fn should_reject_reserved_names() {
        assert_eq!(
            TagName::parse("font-face"),
            Err(RegistryError::InvalidName {
                name: "font-face".to_string(),
                reason: "is a reserved name",
            })
        );
    }

    #[test]
    fn should_define_and_create() {
        let mut registry = Registry::new();
        registry.define(definition("x-one")).unwrap();
        assert!(registry.is_defined("x-one"));
        assert!(!registry.is_defined("x-two"));
        assert_eq!(registry.create("x-one").unwrap().tag(), "x-one");
    }

    #[test]
    fn should_refuse_to_redefine_a_tag() {
        let mut registry = Registry::new();
        registry.define(definition("x-one")).unwrap();
        assert_eq!(
            registry.define(definition("x-one")),
            Err(RegistryError::AlreadyDefined("x-one".to_string()))
        );
        assert_eq!(registry.tags().count(), 1);
    }

    #[test]
    fn should_fail_to_create_undefined_tag() {
        let registry = Registry::new();
        assert_eq!(
            registry.create("x-missing").map(|_| ()),
            Err(RegistryError::NotDefined("x-missing".to_string()))
        );
    }

    #[test]
    fn should_list_tags_in_definition_order() {
        let mut registry = Registry::new();
        registry.define(definition("x-b")).unwrap();
        registry.define(definition("x-a")).unwrap();
        let tags: Vec<_> = registry.tags().map(TagName::as_str).collect();
        assert_eq!(tags, ["x-b", "x-a"]);
    }

    #[test]
    fn should_display_errors() {
        let error = RegistryError::AlreadyDefined("header-1".to_string());
        assert_eq!(error.to_string(), "a component is already defined as `header-1`");
    }
}
