use crate::collector::dom::{Document, DomError};
use crate::model::{Article, Task};
use crate::text::to_plain_text;

/// Outcome of processing one candidate article page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// Title and content were found and are non-empty
    Extracted(Article),

    /// A selector matched nothing, or only whitespace after normalization
    NoMatch,

    /// The page could not be fetched or queried
    Failed(String),
}

impl ExtractOutcome {
    /// Returns the article if one was extracted
    pub fn into_article(self) -> Option<Article> {
        match self {
            Self::Extracted(article) => Some(article),
            Self::NoMatch | Self::Failed(_) => None,
        }
    }
}

/// Extracts an article from a parsed page using the task's selectors
///
/// The first element matching `task.title` and the first matching
/// `task.content` are rendered to plain text. Both must be non-empty.
///
/// # Arguments
///
/// * `task` - Supplies the title and content selectors
/// * `url` - The page URL, used as the article URL
/// * `document` - The parsed page
/// * `width` - Text rendering width
pub fn extract_article<D: Document>(
    task: &Task,
    url: &str,
    document: &D,
    width: usize,
) -> ExtractOutcome {
    let title = match first_text(document, &task.title, width) {
        Ok(Some(title)) => title,
        Ok(None) => return ExtractOutcome::NoMatch,
        Err(e) => return ExtractOutcome::Failed(e.to_string()),
    };

    let content = match first_text(document, &task.content, width) {
        Ok(Some(content)) => content,
        Ok(None) => return ExtractOutcome::NoMatch,
        Err(e) => return ExtractOutcome::Failed(e.to_string()),
    };

    ExtractOutcome::Extracted(Article::new(url, title, content))
}

/// Plain text of the first match, `None` if missing or blank
fn first_text<D: Document>(
    document: &D,
    selector: &str,
    width: usize,
) -> Result<Option<String>, DomError> {
    Ok(document
        .first_inner_html(selector)?
        .map(|html| to_plain_text(&html, width))
        .filter(|text| !text.is_empty()))
}
