//! Hierarchical node indexes.
//!
//! Runs once over a rewritten fragment. Every element receives a
//! `node-index` attribute: the root gets its prefix (`"0"` by default) and
//! the n-th element child of an element indexed `i` gets `i.n`, counting
//! from 1 and skipping text nodes.

use crate::node::{Node, NODE_INDEX_ATTR};

/// Index assigned to each top-level root.
pub const ROOT_INDEX: &str = "0";

/// Attach indexes to `node` and its element descendants, starting from
/// `node_index`. Text nodes are returned unchanged.
///
/// # Examples
///
/// ```
/// use plain_content::{add_node_indexes, Element, Node, NODE_INDEX_ATTR};
///
/// let div: Node = Element::new("div")
///     .with_child(Element::new("p"))
///     .with_child(Node::text(" "))
///     .with_child(Element::new("p"))
///     .into();
/// let div = add_node_indexes(div, "0");
/// let indexes: Vec<_> = div
///     .descendants()
///     .filter_map(Node::as_element)
///     .filter_map(|e| e.attr(NODE_INDEX_ATTR))
///     .collect();
/// assert_eq!(indexes, ["0", "0.1", "0.2"]);
/// ```
#[must_use]
pub fn add_node_indexes(mut node: Node, node_index: &str) -> Node {
    index_in_place(&mut node, node_index);
    node
}

/// Index every root of a fragment. Each root restarts at [`ROOT_INDEX`],
/// so indexes are only unique within one root's subtree.
#[must_use]
pub fn add_fragment_indexes(nodes: Vec<Node>) -> Vec<Node> {
    nodes
        .into_iter()
        .map(|node| add_node_indexes(node, ROOT_INDEX))
        .collect()
}

fn index_in_place(node: &mut Node, node_index: &str) {
    let Node::Element(element) = node else {
        return;
    };
    element.set_attr(NODE_INDEX_ATTR, node_index);

    let element_children = element
        .children
        .iter_mut()
        .filter(|child| matches!(child, Node::Element(_)));
    for (local_idx, child) in element_children.enumerate() {
        let child_index = format!("{node_index}.{}", local_idx + 1);
        index_in_place(child, &child_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Element;

    fn index_of(node: &Node) -> Option<&str> {
        node.as_element().and_then(|e| e.attr(NODE_INDEX_ATTR))
    }

    fn p(text: &str) -> Element {
        Element::new("p").with_child(Node::text(text))
    }

    #[test]
    fn children_extend_parent_index() {
        let div: Node = Element::new("div").with_child(p("A")).with_child(p("B")).into();
        let div = add_node_indexes(div, ROOT_INDEX);
        let element = div.as_element().expect("element");

        assert_eq!(element.attr(NODE_INDEX_ATTR), Some("0"));
        assert_eq!(index_of(&element.children[0]), Some("0.1"));
        assert_eq!(index_of(&element.children[1]), Some("0.2"));
    }

    #[test]
    fn text_children_are_skipped_when_numbering() {
        let div: Node = Element::new("div")
            .with_child(Node::text("lead"))
            .with_child(p("A"))
            .with_child(Node::comment(""))
            .with_child(p("B"))
            .into();
        let div = add_node_indexes(div, ROOT_INDEX);
        let element = div.as_element().expect("element");

        assert_eq!(element.children[0], Node::text("lead"));
        assert_eq!(index_of(&element.children[1]), Some("0.1"));
        assert_eq!(element.children[2], Node::comment(""));
        assert_eq!(index_of(&element.children[3]), Some("0.2"));
    }

    #[test]
    fn nested_elements_get_dotted_paths() {
        let article: Node = Element::new("article")
            .with_child(
                Element::new("section")
                    .with_child(p("A"))
                    .with_child(
                        Element::new("ul")
                            .with_child(Element::new("li"))
                            .with_child(Element::new("li")),
                    ),
            )
            .into();
        let article = add_node_indexes(article, ROOT_INDEX);
        let indexes: Vec<&str> = article
            .descendants()
            .filter_map(Node::as_element)
            .filter_map(|e| e.attr(NODE_INDEX_ATTR))
            .collect();
        assert_eq!(indexes, ["0", "0.1", "0.1.1", "0.1.2", "0.1.2.1", "0.1.2.2"]);
    }

    #[test]
    fn text_nodes_pass_through() {
        assert_eq!(add_node_indexes(Node::text("x"), "0"), Node::text("x"));
    }

    #[test]
    fn custom_prefix_is_used() {
        let node = add_node_indexes(Element::new("p").with_child(Element::new("b")).into(), "3.4");
        let element = node.as_element().expect("element");
        assert_eq!(element.attr(NODE_INDEX_ATTR), Some("3.4"));
        assert_eq!(index_of(&element.children[0]), Some("3.4.1"));
    }

    #[test]
    fn every_root_restarts_at_zero() {
        let roots = add_fragment_indexes(vec![
            p("A").into(),
            Node::text(" "),
            p("B").into(),
        ]);
        assert_eq!(index_of(&roots[0]), Some("0"));
        assert_eq!(index_of(&roots[1]), None);
        assert_eq!(index_of(&roots[2]), Some("0"));
    }

    #[test]
    fn reindexing_overwrites_existing_index() {
        let stale: Node = Element::new("div").with_attr(NODE_INDEX_ATTR, "9").into();
        let node = add_node_indexes(stale, ROOT_INDEX);
        let element = node.as_element().expect("element");
        assert_eq!(element.attrs.len(), 1);
        assert_eq!(element.attr(NODE_INDEX_ATTR), Some("0"));
    }
}
