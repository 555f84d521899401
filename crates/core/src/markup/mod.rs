//! Structured-markup queries over catalog responses.
//!
//! Responses are parsed leniently with `scraper` (an HTML5 parser), so tag and
//! attribute names are matched case-insensitively and unknown tags are kept
//! as ordinary elements. Only the three queries the catalog needs are exposed:
//! all elements by tag, first element by tag and attribute, and text content.

use scraper::{ElementRef, Html};

/// A parsed response document.
pub struct MarkupDocument {
    html: Html,
}

impl MarkupDocument {
    /// Parse raw response bytes. Invalid UTF-8 is replaced, never rejected.
    pub fn parse(bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes);
        Self {
            html: Html::parse_document(&text),
        }
    }

    /// All elements named `tag`, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<MarkupNode<'_>> {
        matching(self.html.root_element(), tag, None).collect()
    }

    /// First element named `tag`, optionally requiring `attr = value`.
    pub fn find(&self, tag: &str, attr: Option<(&str, &str)>) -> Option<MarkupNode<'_>> {
        matching(self.html.root_element(), tag, attr).next()
    }
}

/// An element inside a [`MarkupDocument`].
#[derive(Clone, Copy)]
pub struct MarkupNode<'a> {
    element: ElementRef<'a>,
}

impl<'a> MarkupNode<'a> {
    /// Concatenated text of all descendants, untrimmed.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Value of attribute `name`, if present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(&name.to_ascii_lowercase())
    }

    /// First descendant element named `tag`.
    pub fn find(&self, tag: &str) -> Option<MarkupNode<'a>> {
        matching(self.element, tag, None)
            .find(|node| node.element.id() != self.element.id())
    }
}

fn matching<'a, 'q>(
    scope: ElementRef<'a>,
    tag: &'q str,
    attr: Option<(&'q str, &'q str)>,
) -> impl Iterator<Item = MarkupNode<'a>> + 'q
where
    'a: 'q,
{
    let tag = tag.to_ascii_lowercase();
    let attr = attr.map(|(name, value)| (name.to_ascii_lowercase(), value));

    scope
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |element| element.value().name() == tag)
        .filter(move |element| match &attr {
            Some((name, value)) => element.value().attr(name) == Some(*value),
            None => true,
        })
        .map(|element| MarkupNode { element })
}
