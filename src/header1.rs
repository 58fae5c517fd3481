//! The `header-1` element: a first level heading with the typographic
//! treatment shared by the components of the design system.
//!
//! ```
//! use header1::prelude::*;
//! use std::rc::Rc;
//!
//! let shared = Rc::new(StyleSheet::new().rule("*", [("box-sizing", "border-box")]));
//! let mut registry = Registry::new();
//! header1::header1::define(&mut registry, shared).unwrap();
//!
//! let heading = registry.create("header-1").unwrap();
//! let children = VNode::from("Hello");
//! let rendered = heading.render(&children);
//! assert_eq!(rendered.composed().to_string(), "<h1>Hello</h1>");
//! assert_eq!(rendered.computed_style().get("font-size"), Some("20px"));
//! ```

use crate::{
    component::{Component, Definition, Lifecycle, Render},
    registry::{Registry, RegistryError},
    style::{StyleSheet, Styles},
    vdom::{velement::VElement, vslot::VSlot, VNode},
};
use std::rc::Rc;

/// The tag the heading is registered under.
pub const TAG: &str = "header-1";

/// A heading which renders its content inside an `h1`.
#[derive(Debug, Clone)]
pub struct Header1 {
    styles: Styles,
}

impl Header1 {
    /// Create the heading with the style sheet shared across the design
    /// system. The local style sheet is applied after it.
    pub fn new(shared: Rc<StyleSheet>) -> Header1 {
        Header1 {
            styles: Styles::new().with(shared).with(Rc::new(local_style())),
        }
    }
}

/// The style sheet local to the heading.
pub fn local_style() -> StyleSheet {
    StyleSheet::new().rule(
        "h1",
        [
            ("font-style", "normal"),
            ("font-weight", "400"),
            ("font-size", "20px"),
            ("line-height", "20px"),
            ("display", "block"),
            ("align-items", "center"),
            ("text-align", "center"),
            ("color", "#000000"),
            ("margin-bottom", "0"),
            ("margin-top", "0"),
            ("padding-top", "0"),
            ("padding-bottom", "0"),
        ],
    )
}

impl Component for Header1 {
    const TAG: &'static str = TAG;

    fn styles(&self) -> Styles {
        self.styles.clone()
    }
}

impl Lifecycle for Header1 {}

impl Render for Header1 {
    fn render(&self) -> VNode {
        VElement::new("h1", vec![], VSlot::new()).into()
    }
}

/// Define the heading in `registry`, styled with the `shared` style sheet.
pub fn define(registry: &mut Registry, shared: Rc<StyleSheet>) -> Result<(), RegistryError> {
    registry.define(Definition::of(Header1::new(shared)))
}
