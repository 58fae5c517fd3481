//! Components, their definitions and their live instances.

use crate::{
    dom::{self, Mounted},
    style::{ComputedStyle, Styles},
    vdom::{velement::VElement, VNode},
};
use std::{
    fmt::{self, Debug, Display, Formatter},
    rc::Rc,
};
use wasm_bindgen::prelude::JsValue;
use web_sys::Element;

/// Trait to define a Component.
///
/// A component is known by a tag and carries the ordered style sheets which
/// are scoped to its own shadow tree. It is stateless: whatever it renders
/// depends only on itself and the content projected into it.
pub trait Component: 'static {
    /// The tag under which the component is registered. Eg: `header-1`.
    const TAG: &'static str;

    /// The style sheets of the component, in cascade order.
    fn styles(&self) -> Styles;
}

/// The lifecycle of a component. Implement only the appropriate hooks as
/// needed.
pub trait Lifecycle: Component {
    /// Invoked when the component is first created
    fn created(&self) {}

    /// Invoked when the component is mounted onto the DOM tree
    fn mounted(&self) {}

    /// Invoked when the component is removed from the DOM tree
    fn destroyed(&self) {}
}

/// Trait to render a view for the component.
pub trait Render: Lifecycle
where
    Self: Sized,
{
    /// Render the template of the component. The content supplied to the
    /// component is projected in place of the
    /// [`VSlot`](../vdom/vslot/struct.VSlot.html)s of the template.
    fn render(&self) -> VNode;
}

/// Type erased view over a component, so that definitions of differing
/// components can live side by side in a registry.
trait ComponentManager {
    fn tag(&self) -> &str;

    fn styles(&self) -> Styles;

    fn render(&self) -> VNode;

    fn created(&self);

    fn mounted(&self);

    fn destroyed(&self);
}

impl<COMP: Render> ComponentManager for COMP {
    fn tag(&self) -> &str {
        COMP::TAG
    }

    fn styles(&self) -> Styles {
        Component::styles(self)
    }

    fn render(&self) -> VNode {
        Render::render(self)
    }

    fn created(&self) {
        Lifecycle::created(self)
    }

    fn mounted(&self) {
        Lifecycle::mounted(self)
    }

    fn destroyed(&self) {
        Lifecycle::destroyed(self)
    }
}

/// A component built from a render function instead of a type.
struct FnComponent<F> {
    tag: String,
    styles: Styles,
    render: F,
}

impl<F: Fn() -> VNode> ComponentManager for FnComponent<F> {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn styles(&self) -> Styles {
        self.styles.clone()
    }

    fn render(&self) -> VNode {
        (self.render)()
    }

    fn created(&self) {}

    fn mounted(&self) {}

    fn destroyed(&self) {}
}

/// The definition of a component: its tag, its styles and how it renders.
///
/// Definitions are cheap to clone and are what a
/// [`Registry`](../registry/struct.Registry.html) stores.
#[derive(Clone)]
pub struct Definition(Rc<dyn ComponentManager>);

impl Definition {
    /// Define a component from its implementation.
    pub fn of<COMP: Render>(component: COMP) -> Definition {
        Definition(Rc::new(component))
    }

    /// Define a component which maps `tag` to a render function and a list
    /// of style sheets.
    pub fn new<F>(tag: impl Into<String>, styles: Styles, render: F) -> Definition
    where
        F: Fn() -> VNode + 'static,
    {
        Definition(Rc::new(FnComponent {
            tag: tag.into(),
            styles,
            render,
        }))
    }

    /// The tag of the component.
    pub fn tag(&self) -> &str {
        self.0.tag()
    }

    /// The style sheets of the component.
    pub fn styles(&self) -> Styles {
        self.0.styles()
    }

    /// The template of the component, with its slots unresolved.
    pub fn template(&self) -> VNode {
        self.0.render()
    }

    /// Create a live instance of the component.
    pub(crate) fn instantiate(&self) -> Instance {
        log::debug!("Creating <{}>", self.tag());
        self.0.created();
        Instance {
            definition: self.clone(),
            mounted: None,
        }
    }
}

impl Debug for Definition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Definition")
            .field("tag", &self.tag())
            .field("styles", &self.styles())
            .finish()
    }
}

/// A created component, optionally attached to a host element.
#[derive(Debug)]
pub struct Instance {
    definition: Definition,
    mounted: Option<Mounted>,
}

impl Instance {
    /// The definition the instance was created from.
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// The tag of the instance.
    pub fn tag(&self) -> &str {
        self.definition.tag()
    }

    /// Render the instance with `children` as its content.
    ///
    /// This is a pure function of the children and the definition: repeated
    /// renders of the same children are identical.
    pub fn render<'c>(&self, children: &'c VNode) -> Rendered<'c> {
        log::trace!("Rendering <{}>", self.tag());
        Rendered {
            definition: self.definition.clone(),
            shadow: self.definition.template(),
            children,
        }
    }

    /// Whether the instance is attached to a host element.
    pub fn is_attached(&self) -> bool {
        self.mounted.is_some()
    }

    /// The host and shadow root of an attached instance.
    pub fn mounted(&self) -> Option<&Mounted> {
        self.mounted.as_ref()
    }

    /// Attach the instance to `host`, rendering its styles and template into
    /// the open shadow root of the host. The children of the host are left
    /// in place and get projected by the browser.
    pub fn attach(&mut self, host: &Element) -> Result<(), JsValue> {
        self.detach();
        let mounted = dom::mount(
            host,
            &self.definition.styles(),
            &self.definition.template(),
        )?;
        self.mounted = Some(mounted);
        log::debug!("Mounted <{}>", self.tag());
        self.definition.0.mounted();
        Ok(())
    }

    /// Detach the instance from its host, if attached.
    pub fn detach(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.unmount();
            log::debug!("Destroyed <{}>", self.tag());
            self.definition.0.destroyed();
        }
    }
}

impl Drop for Instance {
    fn drop(&mut self) {
        self.detach();
    }
}

/// The result of rendering an instance.
#[derive(Debug)]
pub struct Rendered<'c> {
    definition: Definition,
    shadow: VNode,
    children: &'c VNode,
}

impl<'c> Rendered<'c> {
    /// The tag of the rendered component.
    pub fn tag(&self) -> &str {
        self.definition.tag()
    }

    /// The style sheets scoped to the shadow tree.
    pub fn styles(&self) -> Styles {
        self.definition.styles()
    }

    /// The shadow tree, with its slots unresolved.
    pub fn shadow(&self) -> &VNode {
        &self.shadow
    }

    /// The content supplied by the caller.
    pub fn children(&self) -> &'c VNode {
        self.children
    }

    /// The flattened tree, where the children take the place of the slot.
    pub fn composed(&self) -> VNode {
        self.shadow.project(Some(self.children))
    }

    /// The outermost element of the shadow tree.
    pub fn container(&self) -> Option<&VElement> {
        self.shadow.first_element()
    }

    /// The style of the container after the cascade.
    pub fn computed_style(&self) -> ComputedStyle {
        self.container()
            .map(|container| self.styles().computed_for(container.tag()))
            .unwrap_or_default()
    }

    /// Serialize as HTML with a declarative shadow root.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl<'c> Display for Rendered<'c> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}><template shadowrootmode=\"open\">", self.tag())?;
        let css = self.styles().css();
        if !css.is_empty() {
            write!(f, "<style>{}</style>", css)?;
        }
        write!(
            f,
            "{shadow}</template>{children}</{tag}>",
            shadow = self.shadow,
            children = self.children,
            tag = self.tag()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        style::StyleSheet,
        vdom::{vslot::VSlot, vtext::VText},
    };
    use std::cell::Cell;

    thread_local! {
        static CREATED: Cell<usize> = Cell::new(0);
    }

    struct Badge;

    impl Component for Badge {
        const TAG: &'static str = "x-badge";

        fn styles(&self) -> Styles {
            Styles::new().with(Rc::new(StyleSheet::new().rule("span", [("color", "red")])))
        }
    }

    impl Lifecycle for Badge {
        fn created(&self) {
            CREATED.with(|created| created.set(created.get() + 1));
        }
    }

    impl Render for Badge {
        fn render(&self) -> VNode {
            VElement::new("span", vec![], VSlot::with_fallback("new")).into()
        }
    }

    #[test]
    fn should_define_from_a_component() {
        let definition = Definition::of(Badge);
        assert_eq!(definition.tag(), "x-badge");
        assert_eq!(
            format!("{}", definition.template()),
            "<span><slot>new</slot></span>"
        );
    }

    #[test]
    fn should_invoke_created_on_instantiation() {
        let before = CREATED.with(Cell::get);
        let _ = Definition::of(Badge).instantiate();
        assert_eq!(CREATED.with(Cell::get), before + 1);
    }

    #[test]
    fn should_define_from_a_render_fn() {
        let definition = Definition::new("x-rule", Styles::new(), || {
            VElement::childless("hr", vec![]).into()
        });
        let instance = definition.instantiate();
        let children = VNode::None;
        let rendered = instance.render(&children);
        assert_eq!(rendered.tag(), "x-rule");
        assert_eq!(
            rendered.to_html(),
            "<x-rule><template shadowrootmode=\"open\"><hr></template></x-rule>"
        );
    }

    #[test]
    fn should_render_declarative_shadow_root() {
        let instance = Definition::of(Badge).instantiate();
        let children = VNode::from(VText::text("3"));
        assert_eq!(
            instance.render(&children).to_html(),
            "<x-badge><template shadowrootmode=\"open\">\
             <style>span { color: red; }</style>\
             <span><slot>new</slot></span></template>3</x-badge>"
        );
    }

    #[test]
    fn should_compose_children_or_fallback() {
        let instance = Definition::of(Badge).instantiate();
        let children = VNode::from("3");
        assert_eq!(
            format!("{}", instance.render(&children).composed()),
            "<span>3</span>"
        );
        let empty = VNode::None;
        assert_eq!(
            format!("{}", instance.render(&empty).composed()),
            "<span>new</span>"
        );
    }

    #[test]
    fn should_compute_style_of_the_container() {
        let instance = Definition::of(Badge).instantiate();
        let children = VNode::None;
        let rendered = instance.render(&children);
        assert_eq!(rendered.container().map(VElement::tag), Some("span"));
        assert_eq!(rendered.computed_style().get("color"), Some("red"));
    }

    #[test]
    fn should_not_be_attached_when_created() {
        let mut instance = Definition::of(Badge).instantiate();
        assert!(!instance.is_attached());
        instance.detach();
        assert!(!instance.is_attached());
    }

    #[test]
    fn should_drop_a_detached_instance_quietly() {
        thread_local! {
            static DESTROYED: Cell<u32> = Cell::new(0);
        }
        struct Counted;
        impl Component for Counted {
            const TAG: &'static str = "x-counted";
            fn styles(&self) -> Styles {
                Styles::new()
            }
        }
        impl Lifecycle for Counted {
            fn destroyed(&self) {
                DESTROYED.with(|count| count.set(count.get() + 1));
            }
        }
        impl Render for Counted {
            fn render(&self) -> VNode {
                VNode::None
            }
        }

        drop(Definition::of(Counted).instantiate());
        assert_eq!(DESTROYED.with(Cell::get), 0);
    }
}
