//! Plain-content tree rewriting.
//!
//! Reduces a fragment to its canonical form:
//!
//! - `p` / `li` elements keep their tag and attributes but their whole
//!   subtree collapses to one normalized text child (none if empty)
//! - comments and CDATA keep their kind but lose their payload
//! - plain text is normalized
//! - every other element keeps its markup and has its children rewritten
//!
//! With digests enabled, each level is annotated as the recursion unwinds,
//! so children always carry their final digest before their parent is
//! hashed. Node indexes are a separate single pass over the result (see
//! [`plain_nodes`]).

use tracing::debug;

use crate::classify::{is_leaf_block_element, is_non_printing_kind};
use crate::digest::attach_digest_memoized;
use crate::index::add_fragment_indexes;
use crate::node::{Node, Text, TextKind};
use crate::normalize::TextNormalizer;
use crate::options::Options;

/// Rewrite a sibling sequence, attaching digests per level when
/// `options.content_digests` is set. Does not attach node indexes.
#[must_use]
pub fn plain_elements<N>(nodes: Vec<Node>, options: &Options, normalizer: &N) -> Vec<Node>
where
    N: TextNormalizer + ?Sized,
{
    let rewritten = nodes
        .into_iter()
        .map(|node| plain_element(node, options, normalizer));
    if options.content_digests {
        rewritten.map(attach_digest_memoized).collect()
    } else {
        rewritten.collect()
    }
}

/// Rewrite a single node. Digests are attached to its descendants but not
/// to the node itself; that happens at the caller's level.
#[must_use]
pub fn plain_element<N>(node: Node, options: &Options, normalizer: &N) -> Node
where
    N: TextNormalizer + ?Sized,
{
    match node {
        Node::Element(mut element) if is_leaf_block_element(&element) => {
            let plain_text = normalizer.normalize(&element.text_content());
            element.set_string(plain_text);
            Node::Element(element)
        }
        Node::Element(mut element) => {
            let children = std::mem::take(&mut element.children);
            element.children = plain_elements(children, options, normalizer);
            Node::Element(element)
        }
        Node::Text(text) if is_non_printing_kind(text.kind) => {
            Node::Text(text.with_content(String::new()))
        }
        Node::Text(text) => Node::Text(Text::new(
            TextKind::Plain,
            normalizer.normalize(&text.content),
        )),
    }
}

/// Full pipeline over an owned fragment: rewrite, then the index pass when
/// `options.node_indexes` is set.
#[must_use]
pub fn plain_nodes<N>(nodes: Vec<Node>, options: &Options, normalizer: &N) -> Vec<Node>
where
    N: TextNormalizer + ?Sized,
{
    debug!(
        roots = nodes.len(),
        content_digests = options.content_digests,
        node_indexes = options.node_indexes,
        "rewriting fragment to plain content"
    );
    let elements = plain_elements(nodes, options, normalizer);
    if options.node_indexes {
        add_fragment_indexes(elements)
    } else {
        elements
    }
}
