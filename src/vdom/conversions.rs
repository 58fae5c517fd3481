//! Conversion from the basic types to VNode. Allows the user to pass string
//! and number types ergonomically as the content of an element.

use crate::vdom::{vtext::VText, VNode};
use std::borrow::Cow;

impl From<String> for VNode {
    fn from(value: String) -> VNode {
        VNode::Text(VText::text(value))
    }
}

impl<'a> From<&'a String> for VNode {
    fn from(value: &'a String) -> VNode {
        VNode::Text(VText::text(value.as_str()))
    }
}

impl<'a> From<&'a str> for VNode {
    fn from(value: &'a str) -> VNode {
        VNode::Text(VText::text(value))
    }
}

impl<'a> From<Cow<'a, str>> for VNode {
    fn from(value: Cow<'a, str>) -> VNode {
        VNode::Text(VText::text(value))
    }
}

impl<T: Into<VNode>> From<Option<T>> for VNode {
    fn from(value: Option<T>) -> VNode {
        value.map(Into::into).unwrap_or_default()
    }
}

macro_rules! impl_with_to_string {
    ($($t:ty),*) => {
        $(
            impl From<$t> for VNode {
                fn from(value: $t) -> VNode {
                    VNode::Text(VText::text(value.to_string()))
                }
            }
        )*
    };
}

impl_with_to_string!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);
