//! Style sheets scoped to a component.
//!
//! A component carries an ordered list of immutable style sheets. Sheets are
//! shared through `Rc`, so a design system can hand the same base sheet to
//! every component it styles.
//!
//! Only the selectors a component needs for its own shadow tree are matched:
//! the universal selector and type selectors. Other selectors are kept as
//! written so that they still reach the browser, but never match here.

use indexmap::IndexMap;
use std::{
    fmt::{self, Display, Formatter},
    rc::Rc,
};

/// A property and its value, e.g. `color: #000000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    property: String,
    value: String,
}

impl Declaration {
    /// Create a declaration. The property name is ASCII lowercased.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Declaration {
        Declaration {
            property: property.into().trim().to_ascii_lowercase(),
            value: value.into().trim().to_string(),
        }
    }

    /// The property name.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The value of the property.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<P: Into<String>, V: Into<String>> From<(P, V)> for Declaration {
    fn from((property, value): (P, V)) -> Declaration {
        Declaration::new(property, value)
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {};",
            CssEscaped(&self.property),
            CssEscaped(&self.value)
        )
    }
}

/// Writes CSS text with `<` as the `\3c ` escape, so the text can never end
/// the `<style>` element it is placed in.
struct CssEscaped<'a>(&'a str);

impl<'a> Display for CssEscaped<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut parts = self.0.split('<');
        if let Some(first) = parts.next() {
            f.write_str(first)?;
        }
        for part in parts {
            f.write_str("\\3c ")?;
            f.write_str(part)?;
        }
        Ok(())
    }
}

/// A single complex-free selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `*`
    Universal,
    /// A tag name, e.g. `h1`
    Type(String),
    /// Any other selector, kept verbatim
    Unsupported(String),
}

impl Selector {
    /// Parse a single selector.
    pub fn parse(text: &str) -> Selector {
        let text = text.trim();
        if text == "*" {
            Selector::Universal
        } else if !text.is_empty()
            && text
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
            && text.starts_with(|ch: char| ch.is_ascii_alphabetic())
        {
            Selector::Type(text.to_ascii_lowercase())
        } else {
            Selector::Unsupported(text.to_string())
        }
    }

    /// Whether the selector matches an element with the given tag.
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            Selector::Universal => true,
            Selector::Type(name) => name.eq_ignore_ascii_case(tag),
            Selector::Unsupported(_) => false,
        }
    }

    /// The specificity of the selector, only meaningful for matching ones.
    pub fn specificity(&self) -> u32 {
        match self {
            Selector::Universal | Selector::Unsupported(_) => 0,
            Selector::Type(_) => 1,
        }
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Universal => f.write_str("*"),
            Selector::Type(name) => f.write_str(name),
            Selector::Unsupported(text) => write!(f, "{}", CssEscaped(text)),
        }
    }
}

/// A list of selectors and the declarations applied to the matched elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    selectors: Vec<Selector>,
    declarations: Vec<Declaration>,
}

impl Rule {
    /// Create a rule from a comma separated selector list.
    pub fn new<D>(selectors: &str, declarations: impl IntoIterator<Item = D>) -> Rule
    where
        D: Into<Declaration>,
    {
        Rule {
            selectors: selectors
                .split(',')
                .filter(|part| !part.trim().is_empty())
                .map(Selector::parse)
                .collect(),
            declarations: declarations.into_iter().map(Into::into).collect(),
        }
    }

    /// The selectors of the rule.
    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    /// The declarations of the rule.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// The highest specificity among the selectors matching `tag`.
    fn matching_specificity(&self, tag: &str) -> Option<u32> {
        self.selectors
            .iter()
            .filter(|selector| selector.matches(tag))
            .map(Selector::specificity)
            .max()
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, selector) in self.selectors.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", selector)?;
        }
        f.write_str(" {")?;
        for declaration in self.declarations.iter() {
            write!(f, " {}", declaration)?;
        }
        f.write_str(" }")
    }
}

/// An immutable ordered list of rules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSheet {
    rules: Vec<Rule>,
}

impl StyleSheet {
    /// Create an empty style sheet.
    pub fn new() -> StyleSheet {
        StyleSheet::default()
    }

    /// Append a rule.
    pub fn rule<D>(mut self, selectors: &str, declarations: impl IntoIterator<Item = D>) -> Self
    where
        D: Into<Declaration>,
    {
        self.rules.push(Rule::new(selectors, declarations));
        self
    }

    /// The rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The CSS text of the sheet.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl Display for StyleSheet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, rule) in self.rules.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", rule)?;
        }
        Ok(())
    }
}

/// The ordered style sheets of a component. Later sheets take precedence
/// over earlier ones at equal specificity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Styles(Vec<Rc<StyleSheet>>);

impl Styles {
    /// Create an empty list of style sheets.
    pub fn new() -> Styles {
        Styles::default()
    }

    /// Append a style sheet after the existing ones.
    pub fn with(mut self, sheet: Rc<StyleSheet>) -> Self {
        self.0.push(sheet);
        self
    }

    /// The sheets in cascade order.
    pub fn sheets(&self) -> &[Rc<StyleSheet>] {
        &self.0
    }

    /// The CSS text of all the sheets, in cascade order.
    pub fn css(&self) -> String {
        self.to_string()
    }

    /// Run the cascade for an element with the given tag.
    pub fn computed_for(&self, tag: &str) -> ComputedStyle {
        let mut matched: Vec<(u32, &Rule)> = self
            .0
            .iter()
            .flat_map(|sheet| sheet.rules.iter())
            .filter_map(|rule| rule.matching_specificity(tag).map(|s| (s, rule)))
            .collect();
        // Stable, so source order is kept among equal specificities.
        matched.sort_by_key(|(specificity, _)| *specificity);

        let mut computed = ComputedStyle::default();
        for (_, rule) in matched {
            for declaration in rule.declarations.iter() {
                computed.apply(declaration);
            }
        }
        computed
    }
}

impl Display for Styles {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for sheet in self.0.iter().filter(|sheet| !sheet.rules.is_empty()) {
            if !first {
                f.write_str("\n")?;
            }
            write!(f, "{}", sheet)?;
            first = false;
        }
        Ok(())
    }
}

/// The properties applied to an element after the cascade.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComputedStyle(IndexMap<String, String>);

impl ComputedStyle {
    fn apply(&mut self, declaration: &Declaration) {
        // Re-inserting keeps the position of the first occurrence.
        self.0
            .insert(declaration.property.clone(), declaration.value.clone());
    }

    /// The value of a property, if any rule set it.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Iterate over the properties in the order they were first set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The count of properties set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no property was set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
