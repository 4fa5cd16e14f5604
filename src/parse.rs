//! HTML fragment parsing.
//!
//! Adapter from the `dom_query` parse tree to the owned [`Node`] tree.
//! Elements, text and comments are mapped; doctypes and processing
//! instructions are dropped. `<template>` contents are read from their
//! separate fragment and become ordinary children. The HTML parser never
//! produces CDATA sections, so [`TextKind::CData`] nodes only appear in
//! trees built by hand.

use dom_query::{Document, NodeRef};
use html5ever::Attribute;
use tendril::StrTendril;
use tracing::{trace, warn};

use crate::error::{Error, Result};
use crate::node::{Element, Node, Text, TextKind};
use crate::options::Options;

/// Parse an HTML fragment into its top-level sibling nodes.
///
/// Honors `options.max_depth`: a fragment nesting elements deeper than the
/// limit is rejected before any recursion beyond it.
///
/// # Examples
///
/// ```
/// use plain_content::{parse_fragment, Node, Options};
///
/// let nodes = parse_fragment("<p>A</p><!--x-->", &Options::default())?;
/// assert_eq!(nodes.len(), 2);
/// assert_eq!(nodes[1], Node::comment("x"));
/// # Ok::<(), plain_content::Error>(())
/// ```
pub fn parse_fragment(html: &str, options: &Options) -> Result<Vec<Node>> {
    let doc = Document::fragment(html);
    let roots = fragment_roots(&doc.root());
    trace!(roots = roots.len(), bytes = html.len(), "parsed HTML fragment");

    let mut nodes = Vec::with_capacity(roots.len());
    for root in &roots {
        if let Some(node) = convert(root, 1, options.max_depth)? {
            nodes.push(node);
        }
    }
    Ok(nodes)
}

/// Children of the fragment, skipping the `<html>` wrapper the parser adds
/// around fragment content.
fn fragment_roots<'a>(root: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let children = root.children();
    match children.as_slice() {
        [only] if only.is_element() && only.node_name().as_deref() == Some("html") => {
            only.children()
        }
        _ => children,
    }
}

fn convert(node: &NodeRef<'_>, depth: usize, max_depth: Option<usize>) -> Result<Option<Node>> {
    if node.is_text() {
        return Ok(Some(Node::Text(Text::new(
            TextKind::Plain,
            node.text().to_string(),
        ))));
    }
    if node.is_comment() {
        return Ok(Some(Node::Text(Text::new(
            TextKind::Comment,
            comment_payload(&node.html()),
        ))));
    }
    let Some((tag, template_contents)) = node
        .element_ref()
        .map(|element| (element.name.local.to_string(), element.template_contents))
    else {
        return Ok(None);
    };

    if let Some(limit) = max_depth {
        if depth > limit {
            warn!(depth, limit, "rejecting HTML nested beyond depth limit");
            return Err(Error::DepthLimitExceeded { depth, limit });
        }
    }

    let attrs = node.attrs().iter().map(qualified_attr).collect();

    let mut sources = Vec::new();
    if let Some(contents) = template_contents.and_then(|id| node.tree.get(&id)) {
        sources.extend(contents.children());
    }
    sources.extend(node.children());

    let mut children = Vec::with_capacity(sources.len());
    for child in &sources {
        if let Some(converted) = convert(child, depth + 1, max_depth)? {
            children.push(converted);
        }
    }

    Ok(Some(Node::Element(Element {
        tag,
        attrs,
        children,
    })))
}

/// Attribute with its source name, e.g. `xlink:href` on foreign content.
fn qualified_attr(attr: &Attribute) -> (String, String) {
    let name = match &attr.name.prefix {
        Some(prefix) => format!("{prefix}:{}", attr.name.local),
        None => attr.name.local.to_string(),
    };
    (name, attr.value.to_string())
}

/// Payload of a serialized `<!--...-->` comment.
fn comment_payload(html: &StrTendril) -> String {
    html.strip_prefix("<!--")
        .and_then(|rest| rest.strip_suffix("-->"))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Vec<Node> {
        parse_fragment(html, &Options::default()).expect("parse")
    }

    #[test]
    fn parses_multiple_roots() {
        let nodes = parse("<p>A</p> <div>B</div>");
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].as_element().map(|e| e.tag.as_str()), Some("p"));
        assert_eq!(nodes[1], Node::text(" "));
        assert_eq!(nodes[2].as_element().map(|e| e.tag.as_str()), Some("div"));
    }

    #[test]
    fn keeps_attributes_in_source_order() {
        let nodes = parse(r#"<div id="main" class="article" data-x="1"></div>"#);
        let div = nodes[0].as_element().expect("div");
        let names: Vec<&str> = div.attrs.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["id", "class", "data-x"]);
        assert_eq!(div.attr("class"), Some("article"));
    }

    #[test]
    fn maps_comments_to_comment_text() {
        let nodes = parse("<div><!-- secret --></div>");
        let div = nodes[0].as_element().expect("div");
        assert_eq!(div.children, vec![Node::comment(" secret ")]);
    }

    #[test]
    fn decodes_entities_in_text() {
        let nodes = parse("<p>5 &lt; 6 &amp; 7</p>");
        assert_eq!(nodes[0].text_content(), "5 < 6 & 7");
    }

    #[test]
    fn lowercases_tag_names() {
        let nodes = parse("<DIV><P>x</P></DIV>");
        let div = nodes[0].as_element().expect("div");
        assert_eq!(div.tag, "div");
        assert_eq!(div.children[0].as_element().map(|e| e.tag.as_str()), Some("p"));
    }

    #[test]
    fn empty_input_yields_no_nodes() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn depth_limit_rejects_deep_nesting() {
        let html = "<div><div><div><p>deep</p></div></div></div>";
        let options = Options {
            max_depth: Some(3),
            ..Options::default()
        };
        match parse_fragment(html, &options) {
            Err(Error::DepthLimitExceeded { depth, limit }) => {
                assert_eq!(depth, 4);
                assert_eq!(limit, 3);
            }
            other => panic!("expected DepthLimitExceeded, got {other:?}"),
        }

        let options = Options {
            max_depth: Some(4),
            ..Options::default()
        };
        assert!(parse_fragment(html, &options).is_ok());
    }

    #[test]
    fn keeps_namespace_prefix_of_foreign_attributes() {
        let html = concat!(
            r#"<svg xmlns:xlink="http://www.w3.org/1999/xlink">"#,
            r##"<use xlink:href="#icon"></use></svg>"##,
        );
        let nodes = parse(html);
        let svg = nodes[0].as_element().expect("svg");
        assert_eq!(svg.attr("xmlns:xlink"), Some("http://www.w3.org/1999/xlink"));
        let use_el = svg.children[0].as_element().expect("use");
        assert_eq!(use_el.attr("xlink:href"), Some("#icon"));
        assert_eq!(use_el.attr("href"), None);
    }

    #[test]
    fn template_contents_become_children() {
        let nodes = parse("<div><template><p>hidden  text</p></template></div>");
        let template = nodes[0].as_element().expect("div").children[0]
            .as_element()
            .expect("template");
        assert_eq!(template.tag, "template");
        assert_eq!(template.text_content(), "hidden  text");
    }

    #[test]
    fn default_depth_limit_stops_adversarial_nesting() {
        let html = "<div>".repeat(5000);
        match parse_fragment(&html, &Options::default()) {
            Err(Error::DepthLimitExceeded { limit, .. }) => {
                assert_eq!(limit, crate::options::DEFAULT_MAX_DEPTH);
            }
            other => panic!("expected DepthLimitExceeded, got {other:?}"),
        }
    }
}
