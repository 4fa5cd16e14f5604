//! Node classification predicates.
//!
//! Pure checks shared by the rewriter, the digest pass and the block
//! flattener. Tag comparisons are ASCII case-insensitive.

use crate::node::{Element, Node, TextKind};

/// Leaf block tags: p, li
///
/// Their whole subtree is flattened to a single normalized string.
pub static LEAF_BLOCK_TAGS: [&str; 2] = ["p", "li"];

/// List container tags: ul, ol
pub static LIST_TAGS: [&str; 2] = ["ul", "ol"];

/// List item tag
pub const LIST_ITEM_TAG: &str = "li";

/// True iff `node` is a `p` or `li` element.
#[must_use]
pub fn is_leaf_block(node: &Node) -> bool {
    node.as_element().is_some_and(is_leaf_block_element)
}

/// Element form of [`is_leaf_block`].
#[must_use]
pub fn is_leaf_block_element(element: &Element) -> bool {
    LEAF_BLOCK_TAGS.iter().any(|tag| element.has_tag(tag))
}

/// True iff `node` is a text node of any kind.
#[must_use]
pub fn is_text(node: &Node) -> bool {
    matches!(node, Node::Text(_))
}

/// True iff `node` is a comment or CDATA section.
#[must_use]
pub fn is_non_printing(node: &Node) -> bool {
    node.as_text().is_some_and(|text| is_non_printing_kind(text.kind))
}

/// Kind form of [`is_non_printing`].
#[must_use]
pub fn is_non_printing_kind(kind: TextKind) -> bool {
    matches!(kind, TextKind::Comment | TextKind::CData)
}

/// True iff `element` is a `ul` or `ol` list.
#[must_use]
pub fn is_list_element(element: &Element) -> bool {
    LIST_TAGS.iter().any(|tag| element.has_tag(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_and_list_items_are_leaf_blocks() {
        assert!(is_leaf_block(&Element::new("p").into()));
        assert!(is_leaf_block(&Element::new("li").into()));
        assert!(is_leaf_block(&Element::new("P").into()));
    }

    #[test]
    fn containers_are_not_leaf_blocks() {
        for tag in ["div", "ul", "span", "article", "custom-tag"] {
            assert!(!is_leaf_block(&Element::new(tag).into()), "{tag}");
        }
        assert!(!is_leaf_block(&Node::text("p")));
    }

    #[test]
    fn every_text_kind_is_text() {
        assert!(is_text(&Node::text("a")));
        assert!(is_text(&Node::comment("a")));
        assert!(is_text(&Node::cdata("a")));
        assert!(!is_text(&Element::new("p").into()));
    }

    #[test]
    fn only_comments_and_cdata_are_non_printing() {
        assert!(is_non_printing(&Node::comment("x")));
        assert!(is_non_printing(&Node::cdata("x")));
        assert!(!is_non_printing(&Node::text("x")));
        assert!(!is_non_printing(&Element::new("div").into()));
    }

    #[test]
    fn lists_are_detected() {
        assert!(is_list_element(&Element::new("ul")));
        assert!(is_list_element(&Element::new("OL")));
        assert!(!is_list_element(&Element::new("dl")));
    }
}
