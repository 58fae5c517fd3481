//! Builds the browser DOM out of the VDOM.

use crate::{
    style::Styles,
    vdom::{
        velement::{AttributeValue, VElement},
        vlist::VList,
        vslot::VSlot,
        vtext::VText,
        VNode,
    },
};
use wasm_bindgen::prelude::JsValue;
use web_sys::{window, Document, Element, Node, ShadowRoot, ShadowRootInit, ShadowRootMode};

/// Trait to reflect the VDOM structure onto the DOM.
pub(crate) trait DOMPatch {
    /// Create the DOM nodes of the vnode and append them to `parent`.
    fn patch(&self, document: &Document, parent: &Node) -> Result<(), JsValue>;
}

impl DOMPatch for VNode {
    fn patch(&self, document: &Document, parent: &Node) -> Result<(), JsValue> {
        match self {
            VNode::Text(inner) => inner.patch(document, parent),
            VNode::Element(inner) => inner.patch(document, parent),
            VNode::List(inner) => inner.patch(document, parent),
            VNode::Slot(inner) => inner.patch(document, parent),
            VNode::None => Ok(()),
        }
    }
}

impl DOMPatch for VText {
    fn patch(&self, document: &Document, parent: &Node) -> Result<(), JsValue> {
        let node: Node = if self.is_comment() {
            document.create_comment(self.content()).into()
        } else {
            document.create_text_node(self.content()).into()
        };
        parent.append_child(&node)?;
        Ok(())
    }
}

impl DOMPatch for VElement {
    fn patch(&self, document: &Document, parent: &Node) -> Result<(), JsValue> {
        let el = document.create_element(self.tag())?;
        for (key, value) in self.attributes() {
            match value {
                AttributeValue::String(value) => el.set_attribute(key, value)?,
                AttributeValue::Bool(true) => el.set_attribute(key, "")?,
                AttributeValue::Bool(false) | AttributeValue::None => {}
            }
        }
        self.child().patch(document, el.as_ref())?;
        parent.append_child(el.as_ref())?;
        Ok(())
    }
}

impl DOMPatch for VList {
    fn patch(&self, document: &Document, parent: &Node) -> Result<(), JsValue> {
        for vnode in self.iter() {
            vnode.patch(document, parent)?;
        }
        Ok(())
    }
}

impl DOMPatch for VSlot {
    fn patch(&self, document: &Document, parent: &Node) -> Result<(), JsValue> {
        let slot = document.create_element("slot")?;
        if let Some(fallback) = self.fallback() {
            fallback.patch(document, slot.as_ref())?;
        }
        parent.append_child(slot.as_ref())?;
        Ok(())
    }
}

/// A component rendered into the shadow root of its host.
#[derive(Debug)]
pub struct Mounted {
    host: Element,
    shadow_root: ShadowRoot,
}

impl Mounted {
    /// The element hosting the component.
    pub fn host(&self) -> &Element {
        &self.host
    }

    /// The shadow root holding the styles and the template.
    pub fn shadow_root(&self) -> &ShadowRoot {
        &self.shadow_root
    }

    /// Clear the shadow root. The children of the host are left untouched.
    pub(crate) fn unmount(self) {
        self.shadow_root.set_inner_html("");
    }
}

/// Render the styles and the template of a component into the open shadow
/// root of `host`. A shadow root cannot be removed once attached, so an
/// existing one is cleared and reused.
pub(crate) fn mount(host: &Element, styles: &Styles, template: &VNode) -> Result<Mounted, JsValue> {
    let document = host
        .owner_document()
        .or_else(|| window().and_then(|win| win.document()))
        .ok_or_else(|| JsValue::from_str("No document to mount the component on"))?;

    let shadow_root = match host.shadow_root() {
        Some(shadow_root) => {
            shadow_root.set_inner_html("");
            shadow_root
        }
        None => host.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))?,
    };
    let root: &Node = shadow_root.as_ref();

    let css = styles.css();
    if !css.is_empty() {
        let style = document.create_element("style")?;
        style.set_text_content(Some(css.as_str()));
        root.append_child(style.as_ref())?;
    }
    template.patch(&document, root)?;

    Ok(Mounted {
        host: host.clone(),
        shadow_root,
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_test {
    use super::*;
    use crate::{style::StyleSheet, vdom::velement::Attribute};
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    fn document() -> Document {
        window().unwrap().document().unwrap()
    }

    fn container() -> Element {
        document().create_element("div").unwrap()
    }

    fn inner_html(node: &VNode) -> String {
        let div = container();
        node.patch(&document(), div.as_ref()).expect("To patch div");
        div.inner_html()
    }

    #[wasm_bindgen_test]
    fn should_patch_container_with_text() {
        assert_eq!(inner_html(&VNode::from("Hello World!")), "Hello World!");
    }

    #[wasm_bindgen_test]
    fn should_patch_container_with_comment() {
        let comment = VNode::from(VText::comment("This is a comment"));
        assert_eq!(inner_html(&comment), "<!--This is a comment-->");
    }

    #[wasm_bindgen_test]
    fn should_patch_container_with_attributed_element() {
        let button = VNode::from(VElement::new(
            "button",
            vec![
                Attribute::new("class", "bg-white"),
                Attribute::new("disabled", true),
                Attribute::new("hidden", false),
            ],
            "Click",
        ));
        assert_eq!(
            inner_html(&button),
            r#"<button class="bg-white" disabled="">Click</button>"#
        );
    }

    #[wasm_bindgen_test]
    fn should_patch_container_with_slot() {
        let h1 = VNode::from(VElement::new("h1", vec![], VSlot::new()));
        assert_eq!(inner_html(&h1), "<h1><slot></slot></h1>");
    }

    #[wasm_bindgen_test]
    fn should_mount_into_shadow_root() {
        let host = container();
        host.set_inner_html("Hello");
        let styles =
            Styles::new().with(Rc::new(StyleSheet::new().rule("h1", [("color", "#000000")])));
        let template = VNode::from(VElement::new("h1", vec![], VSlot::new()));

        let mounted = mount(&host, &styles, &template).expect("To mount");
        assert_eq!(
            mounted.shadow_root().inner_html(),
            "<style>h1 { color: #000000; }</style><h1><slot></slot></h1>"
        );
        assert_eq!(mounted.host().inner_html(), "Hello");

        mounted.unmount();
        assert_eq!(host.shadow_root().unwrap().inner_html(), "");
        assert_eq!(host.inner_html(), "Hello");
    }

    #[wasm_bindgen_test]
    fn should_reuse_existing_shadow_root() {
        let host = container();
        let template = VNode::from(VElement::new("h1", vec![], VSlot::new()));
        mount(&host, &Styles::new(), &template).expect("To mount");
        let mounted = mount(&host, &Styles::new(), &template).expect("To mount again");
        assert_eq!(mounted.shadow_root().inner_html(), "<h1><slot></slot></h1>");
    }
}
