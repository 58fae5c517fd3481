//! Representation of text/comment in virtual dom tree.

use crate::vdom::{Escaped, VNode};
use std::fmt::{self, Display, Formatter};

/// The representation of text/comment in virtual dom tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VText {
    /// The content of a text string
    content: String,
    /// Whether the content is a comment
    is_comment: bool,
}

impl VText {
    /// Create a textual VText.
    pub fn text(content: impl Into<String>) -> VText {
        VText {
            content: content.into(),
            is_comment: false,
        }
    }

    /// Create a comment VText.
    pub fn comment(content: impl Into<String>) -> VText {
        VText {
            content: content.into(),
            is_comment: true,
        }
    }

    /// The raw, unescaped content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the content is a comment.
    pub fn is_comment(&self) -> bool {
        self.is_comment
    }
}

impl From<VText> for VNode {
    fn from(text: VText) -> VNode {
        VNode::Text(text)
    }
}

impl Display for VText {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_comment {
            write!(f, "<!--{}-->", CommentText(&self.content))
        } else {
            write!(f, "{}", Escaped::text(&self.content))
        }
    }
}

/// Writes the content of a comment so that it cannot close the comment
/// early. A space is inserted inside every `--` and in front of a leading `>`
/// or `->`.
struct CommentText<'a>(&'a str);

impl<'a> Display for CommentText<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.starts_with('>') || self.0.starts_with("->") {
            f.write_str(" ")?;
        }
        let mut last = 0;
        let mut previous = None;
        for (index, ch) in self.0.char_indices() {
            if ch == '-' && previous == Some('-') {
                f.write_str(&self.0[last..index])?;
                f.write_str(" ")?;
                last = index;
            }
            previous = Some(ch);
        }
        f.write_str(&self.0[last..])?;
        if previous == Some('-') {
            f.write_str(" ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_display_text() {
        let text = VText::text("This is a very fine day!");
        assert_eq!(format!("{}", text), "This is a very fine day!");
    }

    #[test]
    fn should_display_comment() {
        let comment = VText::comment("Something to remind the hacky users.");
        assert_eq!(
            format!("{}", comment),
            "<!--Something to remind the hacky users.-->"
        );
    }

    #[test]
    fn should_keep_comment_closed() {
        let comment = VText::comment("a --> <b>bold</b> <!-- c");
        let html = format!("{}", comment);
        assert_eq!(html, "<!--a - -> <b>bold</b> <!- - c-->");
        assert_eq!(html.matches("--").count(), 2);
        assert!(html.ends_with("-->"));
    }

    #[test]
    fn should_break_up_dashes_at_the_edges_of_a_comment() {
        assert_eq!(format!("{}", VText::comment(">x")), "<!-- >x-->");
        assert_eq!(format!("{}", VText::comment("->x")), "<!-- ->x-->");
        assert_eq!(format!("{}", VText::comment("x-")), "<!--x- -->");
        assert_eq!(format!("{}", VText::comment("---")), "<!--- - - -->");
        assert_eq!(comment_content("a-b"), "a-b");
    }

    fn comment_content(content: &str) -> String {
        format!("{}", CommentText(content))
    }

    #[test]
    fn should_keep_raw_content_while_escaping_display() {
        let text = VText::text("1 < 2");
        assert_eq!(text.content(), "1 < 2");
        assert_eq!(format!("{}", text), "1 &lt; 2");
    }
}
