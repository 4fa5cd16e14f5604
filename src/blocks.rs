//! Flat text block listings.
//!
//! Two views of a fragment as an ordered list of [`TextBlock`]s:
//!
//! - [`text_blocks_raw`]: one block per text node (comments and CDATA
//!   included), payload untouched
//! - [`text_blocks_as_plain_text`]: lists become single `"* item, "`
//!   paragraphs, then every text node contributes the normalized text of
//!   its containing element; empty blocks are dropped

use serde::{Deserialize, Serialize};

use crate::classify::{is_list_element, LIST_ITEM_TAG};
use crate::node::{Element, Node, NODE_INDEX_ATTR};
use crate::normalize::TextNormalizer;

/// One entry of a block listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// `node-index` of the element the text came from, if it was indexed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_index: Option<String>,

    /// Block text, `None` when it normalizes to nothing.
    pub text: Option<String>,
}

impl TextBlock {
    fn raw(text: &str) -> Self {
        Self {
            node_index: None,
            text: Some(text.to_string()),
        }
    }
}

/// Every text node in document order, payload as-is.
#[must_use]
pub fn text_blocks_raw(nodes: &[Node]) -> Vec<TextBlock> {
    nodes
        .iter()
        .flat_map(Node::descendants)
        .filter_map(Node::as_text)
        .map(|text| TextBlock::raw(&text.content))
        .collect()
}

/// Plain-text blocks of a fragment.
///
/// # Examples
///
/// ```
/// use plain_content::blocks::text_blocks_as_plain_text;
/// use plain_content::{parse_fragment, DefaultNormalizer, Options};
///
/// let html = "<p> Hi  there </p><ul><li>a</li><li>b</li></ul>";
/// let nodes = parse_fragment(html, &Options::default())?;
/// let blocks = text_blocks_as_plain_text(nodes, &DefaultNormalizer);
/// let texts: Vec<_> = blocks.iter().filter_map(|b| b.text.as_deref()).collect();
/// assert_eq!(texts, ["Hi there", "* a, * b,"]);
/// # Ok::<(), plain_content::Error>(())
/// ```
#[must_use]
pub fn text_blocks_as_plain_text<N>(nodes: Vec<Node>, normalizer: &N) -> Vec<TextBlock>
where
    N: TextNormalizer + ?Sized,
{
    let nodes: Vec<Node> = nodes
        .into_iter()
        .map(|node| lists_to_paragraphs(node, normalizer))
        .collect();

    let mut blocks = Vec::new();
    for node in &nodes {
        collect_blocks(node, None, &nodes, normalizer, &mut blocks);
    }
    blocks.retain(|block| block.text.is_some());
    blocks
}

/// Flatten a containing element to a block.
///
/// A list item that has text is decorated as `"* text, "`.
#[must_use]
pub fn plain_text_leaf_node<N>(element: &Element, normalizer: &N) -> TextBlock
where
    N: TextNormalizer + ?Sized,
{
    let mut plain_text = normalizer.normalize(&element.text_content());
    if !plain_text.is_empty() && element.has_tag(LIST_ITEM_TAG) {
        plain_text = format!("* {plain_text}, ");
    }
    TextBlock {
        node_index: element.attr(NODE_INDEX_ATTR).map(str::to_string),
        text: Some(plain_text).filter(|text| !text.is_empty()),
    }
}

/// Turn every outermost `ul` / `ol` into a `p` holding its items' decorated
/// text. Nested lists disappear into their outer list.
fn lists_to_paragraphs<N>(node: Node, normalizer: &N) -> Node
where
    N: TextNormalizer + ?Sized,
{
    match node {
        Node::Element(mut element) if is_list_element(&element) => {
            let plain_items: String = element
                .children
                .iter()
                .flat_map(Node::descendants)
                .filter_map(Node::as_element)
                .filter(|item| item.has_tag(LIST_ITEM_TAG))
                .filter_map(|item| plain_text_leaf_node(item, normalizer).text)
                .collect();
            element.tag = "p".to_string();
            element.set_string(plain_items);
            Node::Element(element)
        }
        Node::Element(mut element) => {
            element.children = std::mem::take(&mut element.children)
                .into_iter()
                .map(|child| lists_to_paragraphs(child, normalizer))
                .collect();
            Node::Element(element)
        }
        text @ Node::Text(_) => text,
    }
}

/// One block per text node, taken from the text's containing element, or
/// from the whole fragment for top-level text.
fn collect_blocks<N>(
    node: &Node,
    parent: Option<&Element>,
    fragment: &[Node],
    normalizer: &N,
    blocks: &mut Vec<TextBlock>,
) where
    N: TextNormalizer + ?Sized,
{
    match node {
        Node::Text(_) => blocks.push(match parent {
            Some(element) => plain_text_leaf_node(element, normalizer),
            None => fragment_block(fragment, normalizer),
        }),
        Node::Element(element) => {
            for child in &element.children {
                collect_blocks(child, Some(element), fragment, normalizer, blocks);
            }
        }
    }
}

fn fragment_block<N>(fragment: &[Node], normalizer: &N) -> TextBlock
where
    N: TextNormalizer + ?Sized,
{
    let text: String = fragment.iter().map(Node::text_content).collect();
    TextBlock {
        node_index: None,
        text: Some(normalizer.normalize(&text)).filter(|text| !text.is_empty()),
    }
}
