//! # plain-content
//!
//! Canonical plain-content rendering of extracted article HTML.
//!
//! Given the HTML of an article body, this library reduces it to a minimal,
//! comparable form: paragraphs and list items become single normalized
//! strings, loose text is whitespace-normalized, comments are blanked, and
//! the surrounding container markup is kept as-is. Optionally every element
//! is annotated with a SHA-256 `content-digest` of its content and a dotted
//! `node-index` giving its position in the tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use plain_content::{plain_content, Options};
//!
//! let html = "<div><p>Hello <b>world</b>  !</p><!-- tracking --></div>";
//! let plain = plain_content(html, &Options::default())?;
//! assert_eq!(plain, "<div><p>Hello world !</p><!----></div>");
//!
//! let options = Options { node_indexes: true, ..Options::default() };
//! let indexed = plain_content("<div><p>A</p><p>B</p></div>", &options)?;
//! assert_eq!(
//!     indexed,
//!     r#"<div node-index="0"><p node-index="0.1">A</p><p node-index="0.2">B</p></div>"#
//! );
//! # Ok::<(), plain_content::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. [`parse_fragment`] turns HTML into an owned [`Node`] tree
//! 2. [`plain_elements`] rewrites it level by level, attaching digests on
//!    the way up when `content_digests` is set
//! 3. [`add_node_indexes`] numbers the result when `node_indexes` is set
//! 4. [`to_html`] serializes it back
//!
//! The block listings in [`blocks`] are an alternative output for callers
//! that want flat text instead of a tree.

mod article;
mod error;
mod options;
mod rewrite;

/// Owned document tree.
pub mod node;

/// Element and text classification predicates.
pub mod classify;

/// Text normalization.
pub mod normalize;

/// Content digests.
pub mod digest;

/// Hierarchical node indexes.
pub mod index;

/// Flat text block listings.
pub mod blocks;

/// HTML fragment parsing.
pub mod parse;

/// HTML serialization.
pub mod serialize;

/// Character encoding detection for byte input.
pub mod encoding;

// Public API - re-exports
pub use article::ReadableArticle;
pub use blocks::TextBlock;
pub use digest::{attach_digest, content_digest, EMPTY_SHA256};
pub use error::{Error, Result};
pub use index::add_node_indexes;
pub use node::{Element, Node, Text, TextKind, CONTENT_DIGEST_ATTR, NODE_INDEX_ATTR};
pub use normalize::{normalise_text, DefaultNormalizer, TextNormalizer};
pub use options::{Options, DEFAULT_MAX_DEPTH};
pub use parse::parse_fragment;
pub use rewrite::{plain_element, plain_elements, plain_nodes};
pub use serialize::to_html;

use tracing::debug;

/// Render an HTML fragment as plain content.
///
/// # Arguments
///
/// * `html` - The article HTML as a string slice
/// * `options` - Which annotations to attach
///
/// # Returns
///
/// The rewritten fragment serialized back to HTML. Fails only when the
/// input exceeds `options.max_depth`.
pub fn plain_content(html: &str, options: &Options) -> Result<String> {
    let nodes = parse_fragment(html, options)?;
    let plain = plain_nodes(nodes, options, &DefaultNormalizer);
    let out = to_html(&plain);
    debug!(input_bytes = html.len(), output_bytes = out.len(), "rendered plain content");
    Ok(out)
}

/// Render HTML bytes as plain content, detecting the character encoding.
///
/// Invalid sequences are replaced with U+FFFD, so digests are always
/// computed over valid UTF-8.
///
/// # Example
///
/// ```rust
/// use plain_content::{plain_content_bytes, Options};
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// let plain = plain_content_bytes(html, &Options::default())?;
/// assert!(plain.contains("<p>Café</p>"));
/// # Ok::<(), plain_content::Error>(())
/// ```
pub fn plain_content_bytes(html: &[u8], options: &Options) -> Result<String> {
    let html_str = encoding::decode_html(html);
    plain_content(&html_str, options)
}

/// Plain-text block listing of an HTML fragment.
///
/// Lists collapse into one `"* item, "` block each and empty blocks are
/// dropped. Blocks carry the `node-index` of their element when the input
/// was indexed.
///
/// # Example
///
/// ```rust
/// use plain_content::extract_text_blocks_as_plain_text;
///
/// let blocks = extract_text_blocks_as_plain_text(
///     r#"<div><p node-index="0.1">One</p><p> </p><ul><li>a</li></ul></div>"#,
/// )?;
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].node_index.as_deref(), Some("0.1"));
/// assert_eq!(blocks[1].text.as_deref(), Some("* a,"));
/// # Ok::<(), plain_content::Error>(())
/// ```
pub fn extract_text_blocks_as_plain_text(html: &str) -> Result<Vec<TextBlock>> {
    let nodes = parse_fragment(html, &Options::default())?;
    Ok(blocks::text_blocks_as_plain_text(nodes, &DefaultNormalizer))
}

/// Every text node of an HTML fragment, unmodified, in document order.
pub fn extract_text_blocks_raw(html: &str) -> Result<Vec<TextBlock>> {
    let nodes = parse_fragment(html, &Options::default())?;
    Ok(blocks::text_blocks_raw(&nodes))
}
