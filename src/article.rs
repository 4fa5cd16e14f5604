//! Article records.
//!
//! An upstream article extractor reports the article as a JSON record with
//! camelCase keys (`siteName`, `publishedTime`, ...). [`ReadableArticle`]
//! holds that record and can derive its plain-content rendering.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::options::Options;

/// Extracted article with its plain-content rendering.
///
/// All fields are optional as extractors do not always report them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReadableArticle {
    /// Article title.
    pub title: Option<String>,

    /// Author line.
    pub byline: Option<String>,

    /// Text direction (`ltr` / `rtl`).
    pub dir: Option<String>,

    /// Content language.
    pub lang: Option<String>,

    /// Article body HTML.
    pub content: Option<String>,

    /// Plain-content HTML of `content`.
    pub text_content: Option<String>,

    /// Character count of `content`.
    pub length: Option<usize>,

    /// Short summary.
    pub excerpt: Option<String>,

    /// Publishing site name.
    pub site_name: Option<String>,

    /// Publication time as reported by the extractor.
    pub published_time: Option<String>,
}

impl ReadableArticle {
    /// Decode an extractor record.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_content::ReadableArticle;
    ///
    /// let article = ReadableArticle::from_json(r#"{"title":"T","siteName":"S"}"#)?;
    /// assert_eq!(article.site_name.as_deref(), Some("S"));
    /// # Ok::<(), plain_content::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build an article from a title and body HTML, deriving the plain
    /// content.
    pub fn from_content(
        title: Option<String>,
        content: impl Into<String>,
        options: &Options,
    ) -> Result<Self> {
        Self {
            title,
            content: Some(content.into()),
            ..Self::default()
        }
        .with_plain_content(options)
    }

    /// Fill `text_content` and `length` from `content`.
    ///
    /// Without `content` both are cleared.
    pub fn with_plain_content(mut self, options: &Options) -> Result<Self> {
        match self.content.as_deref() {
            Some(content) => {
                self.text_content = Some(crate::plain_content(content, options)?);
                self.length = Some(content.chars().count()).filter(|&len| len > 0);
            }
            None => {
                self.text_content = None;
                self.length = None;
            }
        }
        debug!(
            title = self.title.as_deref().unwrap_or_default(),
            length = self.length.unwrap_or_default(),
            "derived plain content for article"
        );
        Ok(self)
    }

    /// Encode as a camelCase JSON record.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn decodes_camel_case_record() {
        let json = r#"{
            "title": "A title",
            "byline": "Someone",
            "dir": "ltr",
            "lang": "en",
            "content": "<div><p>Body</p></div>",
            "textContent": "Body",
            "length": 4,
            "excerpt": "Body",
            "siteName": "Example",
            "publishedTime": "2024-01-02T03:04:05Z"
        }"#;
        let article = ReadableArticle::from_json(json).expect("decode");
        assert_eq!(article.title.as_deref(), Some("A title"));
        assert_eq!(article.site_name.as_deref(), Some("Example"));
        assert_eq!(article.published_time.as_deref(), Some("2024-01-02T03:04:05Z"));
        assert_eq!(article.text_content.as_deref(), Some("Body"));
        assert_eq!(article.length, Some(4));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let article = ReadableArticle::from_json("{}").expect("decode");
        assert_eq!(article, ReadableArticle::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = ReadableArticle::from_json("{not json").expect_err("should fail");
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn from_content_derives_plain_content_and_length() {
        let article = ReadableArticle::from_content(
            Some("T".to_string()),
            "<div><p>Caf\u{e9}  au <b>lait</b></p></div>",
            &Options::default(),
        )
        .expect("article");
        assert_eq!(article.text_content.as_deref(), Some("<div><p>Caf\u{e9} au lait</p></div>"));
        assert_eq!(article.length, Some(38));
    }

    #[test]
    fn empty_content_has_no_length() {
        let article = ReadableArticle::from_content(None, "", &Options::default())
            .expect("article");
        assert_eq!(article.text_content.as_deref(), Some(""));
        assert_eq!(article.length, None);
    }

    #[test]
    fn without_content_plain_fields_are_cleared() {
        let article = ReadableArticle {
            text_content: Some("stale".to_string()),
            length: Some(5),
            ..ReadableArticle::default()
        }
        .with_plain_content(&Options::default())
        .expect("article");
        assert_eq!(article.text_content, None);
        assert_eq!(article.length, None);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let article = ReadableArticle {
            site_name: Some("S".to_string()),
            ..ReadableArticle::default()
        };
        let json = article.to_json().expect("encode");
        assert!(json.contains(r#""siteName":"S""#));
        assert!(json.contains(r#""textContent":null"#));
    }
}
