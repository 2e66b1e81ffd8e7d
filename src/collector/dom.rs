//! DOM query capability
//!
//! Extraction code only needs "find elements by selector" plus attribute and
//! inner-HTML access, so it is written against the [`Document`] trait.
//! [`HtmlDocument`] implements it with `scraper`.

use scraper::{Html, Selector};
use thiserror::Error;

/// Errors raised by DOM queries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("Invalid selector '{0}'")]
    InvalidSelector(String),
}

/// A parsed document that can be queried with opaque selector strings
pub trait Document {
    /// Returns the `name` attribute of every element matching `selector`,
    /// in document order (`None` where the attribute is absent)
    fn find_attr(&self, selector: &str, name: &str) -> Result<Vec<Option<String>>, DomError>;

    /// Returns the inner HTML of every element matching `selector`
    fn find_inner_html(&self, selector: &str) -> Result<Vec<String>, DomError>;

    /// Returns the inner HTML of the first element matching `selector`
    fn first_inner_html(&self, selector: &str) -> Result<Option<String>, DomError> {
        Ok(self.find_inner_html(selector)?.into_iter().next())
    }
}

/// Parses a CSS selector
pub fn parse_selector(selector: &str) -> Result<Selector, DomError> {
    Selector::parse(selector).map_err(|_| DomError::InvalidSelector(selector.to_string()))
}

/// An HTML document parsed with `scraper`
///
/// Parsing is lenient (html5ever recovers from any markup), so constructing
/// one never fails.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }
}

impl Document for HtmlDocument {
    fn find_attr(&self, selector: &str, name: &str) -> Result<Vec<Option<String>>, DomError> {
        let selector = parse_selector(selector)?;
        Ok(self
            .html
            .select(&selector)
            .map(|element| element.value().attr(name).map(str::to_string))
            .collect())
    }

    fn find_inner_html(&self, selector: &str) -> Result<Vec<String>, DomError> {
        let selector = parse_selector(selector)?;
        Ok(self
            .html
            .select(&selector)
            .map(|element| element.inner_html())
            .collect())
    }

    fn first_inner_html(&self, selector: &str) -> Result<Option<String>, DomError> {
        let selector = parse_selector(selector)?;
        Ok(self
            .html
            .select(&selector)
            .next()
            .map(|element| element.inner_html()))
    }
}
