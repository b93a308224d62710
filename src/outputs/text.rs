//! Plain-text rendering of an article list.
//!
//! Each article becomes a short block:
//!
//! ```text
//! [G. Technology] Rust adoption grows
//!   by Jane Doe · 2017-10-19
//!   https://www.theguardian.com/technology/2017/oct/19/rust
//!   thumbnail: https://media.guim.co.uk/rust/500.jpg
//! ```
//!
//! Lines whose backing field is absent are left out. The thumbnail line falls
//! back to a placeholder so every block has the same shape at its end.

use crate::models::Article;
use crate::utils::abbreviate_section_name;
use std::fmt::Write;

/// Shown instead of a thumbnail URL when the article has none.
pub const THUMBNAIL_PLACEHOLDER: &str = "(no thumbnail)";

/// Shown when the list is empty.
pub const EMPTY_STATE: &str = "No news found.";

/// Render the whole list, one block per article separated by blank lines.
pub fn render_articles(articles: &[Article]) -> String {
    if articles.is_empty() {
        return format!("{EMPTY_STATE}\n");
    }

    articles
        .iter()
        .map(render_article)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one article block, newline-terminated.
pub fn render_article(article: &Article) -> String {
    let mut out = String::new();

    let heading = match (article.section_name(), article.title()) {
        (Some(section), Some(title)) => {
            format!("[{}] {}", abbreviate_section_name(section), title)
        }
        (Some(section), None) => format!("[{}]", abbreviate_section_name(section)),
        (None, Some(title)) => title.to_string(),
        (None, None) => String::new(),
    };
    if !heading.is_empty() {
        writeln!(out, "{heading}").unwrap();
    }

    let byline = match (article.author(), article.date()) {
        (Some(author), Some(date)) => format!("by {author} · {date}"),
        (Some(author), None) => format!("by {author}"),
        (None, Some(date)) => date.to_string(),
        (None, None) => String::new(),
    };
    if !byline.is_empty() {
        writeln!(out, "  {byline}").unwrap();
    }

    if let Some(url) = article.url() {
        writeln!(out, "  {url}").unwrap();
    }

    writeln!(
        out,
        "  thumbnail: {}",
        article.thumbnail().unwrap_or(THUMBNAIL_PLACEHOLDER)
    )
    .unwrap();

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_render_empty_state() {
        assert_eq!(render_articles(&[]), "No news found.\n");
    }

    #[test]
    fn test_render_full_article_abbreviates_section() {
        let article = Article::new(
            s("https://img/1.jpg"),
            s("Guardian Sustainable Business"),
            s("Cleaner supply chains"),
            s("John Roe"),
            s("2017-10-18"),
            s("https://www.theguardian.com/sustainable-business/1"),
        );
        assert_eq!(
            render_article(&article),
            "[G. Sustainable Business] Cleaner supply chains\n  by John Roe · 2017-10-18\n  https://www.theguardian.com/sustainable-business/1\n  thumbnail: https://img/1.jpg\n"
        );
        // the stored section name stays unabbreviated
        assert_eq!(article.section_name(), Some("Guardian Sustainable Business"));
    }

    #[test]
    fn test_render_hides_missing_fields() {
        let article = Article::new(
            None,
            s("Politics"),
            s("Vote tonight"),
            None,
            None,
            s("https://www.theguardian.com/politics/1"),
        );
        assert_eq!(
            render_article(&article),
            "[Politics] Vote tonight\n  https://www.theguardian.com/politics/1\n  thumbnail: (no thumbnail)\n"
        );
    }

    #[test]
    fn test_render_blank_article() {
        assert_eq!(
            render_article(&Article::default()),
            "  thumbnail: (no thumbnail)\n"
        );
    }

    #[test]
    fn test_render_list_separates_blocks() {
        let a = Article::new(None, s("Sport"), s("One"), None, s("2020-01-01"), None);
        let b = Article::new(None, None, s("Two"), s("Ann"), None, None);
        assert_eq!(
            render_articles(&[a, b]),
            "[Sport] One\n  2020-01-01\n  thumbnail: (no thumbnail)\n\nTwo\n  by Ann\n  thumbnail: (no thumbnail)\n"
        );
    }
}
