//! Representation of a list of nodes in VDOM.

use crate::vdom::VNode;
use std::fmt::{self, Display, Formatter};

/// The representation of a list of vnodes in the vtree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VList(Vec<VNode>);

impl VList {
    /// Constructor to create a list of VNodes.
    pub fn new(list: Vec<VNode>) -> VList {
        VList(list)
    }

    /// Iterate over the vnodes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, VNode> {
        self.0.iter()
    }

    /// The count of vnodes in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no vnodes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn project_into(&self, assigned: &mut Option<&VNode>) -> VList {
        VList(
            self.0
                .iter()
                .map(|vnode| vnode.project_into(assigned))
                .collect(),
        )
    }
}

impl From<VList> for VNode {
    fn from(list: VList) -> VNode {
        VNode::List(list)
    }
}

impl From<Vec<VNode>> for VNode {
    fn from(list: Vec<VNode>) -> VNode {
        VNode::List(VList(list))
    }
}

impl Display for VList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for vnode in self.0.iter() {
            write!(f, "{}", vnode)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::VList;
    use crate::vdom::{velement::VElement, vtext::VText};

    #[test]
    fn should_display_a_list_of_vnodes() {
        let list = VList::new(vec![
            VText::text("First of the node").into(),
            VElement::childless("input", vec![]).into(),
        ]);
        assert_eq!(format!("{}", list), "First of the node<input>");
    }

    #[test]
    fn should_display_an_empty_list() {
        let list = VList::default();
        assert!(list.is_empty());
        assert_eq!(format!("{}", list), "");
    }
}
