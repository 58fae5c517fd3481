#![deny(missing_docs)]
//! A styled heading custom element, `header-1`, and the small component
//! layer it is built on: a virtual DOM with slots, scoped style sheets with
//! a cascade, a registry of tags and a mount onto the shadow root of a host
//! element.

#[cfg(all(test, target_arch = "wasm32"))]
use wasm_bindgen_test::*;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test_configure!(run_in_browser);

pub mod component;
pub mod dom;
pub mod header1;
pub mod registry;
pub mod style;
pub mod vdom;

#[allow(missing_docs)]
pub mod prelude {
    pub use crate::{
        component::{Component, Definition, Instance, Lifecycle, Render, Rendered},
        header1::Header1,
        registry::{Registry, RegistryError, TagName},
        style::{ComputedStyle, Declaration, Rule, Selector, StyleSheet, Styles},
        vdom::{
            velement::{Attribute, AttributeValue, VElement},
            vlist::VList,
            vslot::VSlot,
            vtext::VText,
            VNode,
        },
    };
}
