//! HTML serialization of the owned tree.
//!
//! Markup is written by html5ever's `HtmlSerializer`, the serializer that
//! pairs with the parser behind [`parse_fragment`](crate::parse_fragment):
//! it owns the escaping rules, void elements and raw-text elements. The
//! walk over the tree uses an explicit stack, so serialization depth is not
//! bounded by the call stack.

use std::io::{self, Write};

use html5ever::serialize::{HtmlSerializer, SerializeOpts, Serializer};
use html5ever::{ns, LocalName, Prefix, QualName};
use tracing::warn;

use crate::node::{Element, Node, Text, TextKind};

enum Step<'a> {
    Open(&'a Node),
    Close(QualName),
}

/// Serialize a fragment to HTML.
///
/// # Examples
///
/// ```
/// use plain_content::{to_html, Element, Node};
///
/// let nodes = vec![
///     Element::new("p").with_attr("class", "a&b").with_child(Node::text("1 < 2")).into(),
///     Node::comment(""),
/// ];
/// assert_eq!(to_html(&nodes), r#"<p class="a&amp;b">1 &lt; 2</p><!---->"#);
/// ```
#[must_use]
pub fn to_html(nodes: &[Node]) -> String {
    let mut serializer = HtmlSerializer::new(Vec::new(), SerializeOpts::default());
    if let Err(err) = write_nodes(&mut serializer, nodes) {
        warn!(%err, "HTML serialization stopped early");
    }
    String::from_utf8(serializer.writer)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

fn write_nodes<W: Write>(serializer: &mut HtmlSerializer<W>, nodes: &[Node]) -> io::Result<()> {
    let mut steps: Vec<Step<'_>> = nodes.iter().rev().map(Step::Open).collect();
    while let Some(step) = steps.pop() {
        match step {
            Step::Open(Node::Element(element)) => {
                let name = element_name(element);
                let attrs: Vec<(QualName, &str)> = element
                    .attrs
                    .iter()
                    .map(|(attr, value)| (attr_name(attr), value.as_str()))
                    .collect();
                let attr_refs = attrs.iter().map(|(attr, value)| (attr, *value));
                serializer.start_elem(name.clone(), attr_refs)?;
                steps.push(Step::Close(name));
                steps.extend(element.children.iter().rev().map(Step::Open));
            }
            Step::Open(Node::Text(text)) => write_text(serializer, text)?,
            Step::Close(name) => serializer.end_elem(name)?,
        }
    }
    Ok(())
}

fn write_text<W: Write>(serializer: &mut HtmlSerializer<W>, text: &Text) -> io::Result<()> {
    match text.kind {
        TextKind::Plain => serializer.write_text(&text.content),
        TextKind::Comment => serializer.write_comment(&text.content),
        // no Serializer hook for CDATA sections
        TextKind::CData => write!(serializer.writer, "<![CDATA[{}]]>", text.content),
    }
}

fn element_name(element: &Element) -> QualName {
    QualName::new(None, ns!(html), LocalName::from(element.tag.as_str()))
}

/// Qualified name for a stored attribute name. The `xlink:`, `xml:` and
/// `xmlns:` prefixes map to their namespaces; any other name is written
/// as-is.
fn attr_name(name: &str) -> QualName {
    let namespaced = match name.split_once(':') {
        Some(("xlink", local)) => Some((ns!(xlink), "xlink", local)),
        Some(("xml", local)) => Some((ns!(xml), "xml", local)),
        Some(("xmlns", local)) => Some((ns!(xmlns), "xmlns", local)),
        _ => None,
    };
    match namespaced {
        Some((namespace, prefix, local)) => {
            QualName::new(Some(Prefix::from(prefix)), namespace, LocalName::from(local))
        }
        None => QualName::new(None, ns!(), LocalName::from(name)),
    }
}
