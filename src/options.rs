//! Configuration options for plain-content rendering.
//!
//! The `Options` struct selects which annotations the rewrite pipeline
//! attaches and how much nesting the parser adapter accepts.

/// Configuration options for plain-content rendering.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use plain_content::Options;
///
/// // Use defaults: no annotations, depth limited to DEFAULT_MAX_DEPTH
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     content_digests: true,
///     node_indexes: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Attach a `content-digest` attribute to every element.
    ///
    /// The digest is a SHA-256 fingerprint of the element's normalized text
    /// content and structure. Elements without hashable content carry an
    /// empty value.
    ///
    /// Default: `false`
    pub content_digests: bool,

    /// Attach a dotted-decimal `node-index` attribute to every element.
    ///
    /// Each top-level element starts at `"0"`; its element children are
    /// `"0.1"`, `"0.2"`, and so on.
    ///
    /// Default: `false`
    pub node_indexes: bool,

    /// Maximum element nesting depth accepted when parsing HTML.
    ///
    /// Deeper documents are rejected with `Error::DepthLimitExceeded`
    /// instead of being walked recursively. The rewrite, digest and index
    /// passes recurse once per level, so `None` lets adversarial input
    /// exhaust the stack; only disable the limit for trusted input.
    ///
    /// Default: `Some(DEFAULT_MAX_DEPTH)`
    pub max_depth: Option<usize>,
}

/// Nesting depth accepted by [`Options::default`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

impl Default for Options {
    fn default() -> Self {
        Self {
            content_digests: false,
            node_indexes: false,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl Options {
    /// Options with both annotations enabled.
    #[must_use]
    pub fn annotated() -> Self {
        Self {
            content_digests: true,
            node_indexes: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_disables_annotations() {
        let options = Options::default();
        assert!(!options.content_digests);
        assert!(!options.node_indexes);
        assert_eq!(options.max_depth, Some(DEFAULT_MAX_DEPTH));
    }

    #[test]
    fn annotated_enables_both_annotations() {
        let options = Options::annotated();
        assert!(options.content_digests);
        assert!(options.node_indexes);
        assert_eq!(options.max_depth, Some(DEFAULT_MAX_DEPTH));
    }
}
