//! Content digests.
//!
//! A digest fingerprints the normalized text and shape of a subtree,
//! ignoring tag names and attributes:
//!
//! - text: SHA-256 of the trimmed payload, or `""` when the trimmed
//!   payload is empty
//! - element without children: `""`
//! - element with one child: the child's digest, so no-op wrapper tags do
//!   not change it
//! - element with several children: SHA-256 over the concatenated non-empty
//!   child digests, in order
//!
//! The empty string is a sentinel for "nothing to hash". It is distinct
//! from [`EMPTY_SHA256`], which a multi-child element whose children all
//! have empty digests receives.

use sha2::{Digest, Sha256};

use crate::node::{Element, Node, CONTENT_DIGEST_ATTR};

/// SHA-256 of zero bytes, hex encoded.
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Compute the digest of a node.
///
/// Recomputes the whole subtree and ignores any `content-digest` attributes
/// already present.
///
/// # Examples
///
/// ```
/// use plain_content::{content_digest, Element, Node};
///
/// let p: Node = Element::new("p").with_child(Node::text("X")).into();
/// let div: Node = Element::new("div").with_child(p.clone()).into();
/// assert_eq!(content_digest(&div), content_digest(&p));
/// assert_eq!(content_digest(&Element::new("div").into()), "");
/// ```
#[must_use]
pub fn content_digest(node: &Node) -> String {
    digest_with(node, &content_digest)
}

/// Set `content-digest` on an element. Text nodes pass through unchanged.
#[must_use]
pub fn attach_digest(mut node: Node) -> Node {
    if let Node::Element(element) = &mut node {
        let digest = digest_children(&element.children, &content_digest);
        element.set_attr(CONTENT_DIGEST_ATTR, digest);
    }
    node
}

/// Like [`attach_digest`], but trusts the digests already attached to
/// element children.
///
/// Only valid when every element child was itself just passed through
/// this function (or [`attach_digest`]) after its final rewrite, which is
/// how the rewriter calls it level by level on the way up.
pub(crate) fn attach_digest_memoized(mut node: Node) -> Node {
    if let Node::Element(element) = &mut node {
        let digest = digest_children(&element.children, &memoized_digest);
        element.set_attr(CONTENT_DIGEST_ATTR, digest);
    }
    node
}

fn memoized_digest(node: &Node) -> String {
    match node {
        Node::Element(element) => match element.attr(CONTENT_DIGEST_ATTR) {
            Some(digest) => digest.to_string(),
            None => content_digest(node),
        },
        Node::Text(_) => content_digest(node),
    }
}

fn digest_with(node: &Node, child_digest: &dyn Fn(&Node) -> String) -> String {
    match node {
        Node::Text(text) => hash_text(&text.content),
        Node::Element(Element { children, .. }) => digest_children(children, child_digest),
    }
}

fn digest_children(children: &[Node], child_digest: &dyn Fn(&Node) -> String) -> String {
    match children {
        [] => String::new(),
        [only] => child_digest(only),
        _ => {
            let mut hasher = Sha256::new();
            for digest in children.iter().map(child_digest) {
                if !digest.is_empty() {
                    hasher.update(digest.as_bytes());
                }
            }
            hex::encode(hasher.finalize())
        }
    }
}

fn hash_text(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    hex::encode(Sha256::digest(trimmed.as_bytes()))
}
