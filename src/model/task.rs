/// Task definitions: the stored rules describing one content source
use crate::collector::parse_selector;
use crate::url::is_valid_url;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a task definition is incomplete or malformed
///
/// These are reported before any network activity and the task is not
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("{0} should be specified")]
    MissingFields(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unknown task kind '{0}', expected HTML or RSS")]
    UnknownKind(String),

    #[error("Invalid {field} selector: {selector}")]
    InvalidSelector {
        field: &'static str,
        selector: String,
    },
}

/// Which collector strategy applies to a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskKind {
    /// Listing page scraped with CSS selectors
    #[default]
    Html,
    /// RSS or Atom feed
    Rss,
}

impl TaskKind {
    pub fn to_db_string(&self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Rss => "RSS",
        }
    }

    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "HTML" => Some(Self::Html),
            "RSS" => Some(Self::Rss),
            _ => None,
        }
    }
}

impl FromStr for TaskKind {
    type Err = TaskError;

    /// Parses a kind case-insensitively ("html", "Rss", ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_string(&s.trim().to_uppercase())
            .ok_or_else(|| TaskError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_string())
    }
}

/// A named collection rule
///
/// `link`, `title` and `content` are selector expressions; they are only
/// meaningful for [`TaskKind::Html`] tasks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Task {
    pub name: String,
    pub kind: TaskKind,
    pub url: String,
    pub link: String,
    pub title: String,
    pub content: String,
}

impl Task {
    /// Creates an RSS task
    pub fn rss(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TaskKind::Rss,
            url: url.into(),
            ..Self::default()
        }
    }

    /// Creates an HTML task from its listing URL and selectors
    pub fn html(
        name: impl Into<String>,
        url: impl Into<String>,
        link: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: TaskKind::Html,
            url: url.into(),
            link: link.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Checks the task invariants
    ///
    /// HTML tasks need a name, URL and all three selectors; RSS tasks only
    /// need a name and URL. The URL must be a valid request URI and every
    /// selector of an HTML task must parse.
    pub fn validate(&self) -> Result<(), TaskError> {
        match self.kind {
            TaskKind::Html => {
                if [&self.name, &self.url, &self.link, &self.title, &self.content]
                    .iter()
                    .any(|field| field.trim().is_empty())
                {
                    return Err(TaskError::MissingFields(
                        "Name, URL, link query, title query and content query".to_string(),
                    ));
                }
            }
            TaskKind::Rss => {
                if self.name.trim().is_empty() || self.url.trim().is_empty() {
                    return Err(TaskError::MissingFields("Name and URL".to_string()));
                }
            }
        }

        if !is_valid_url(&self.url) {
            return Err(TaskError::InvalidUrl(self.url.clone()));
        }

        if self.kind == TaskKind::Html {
            for (field, selector) in [
                ("link", &self.link),
                ("title", &self.title),
                ("content", &self.content),
            ] {
                if parse_selector(selector).is_err() {
                    return Err(TaskError::InvalidSelector {
                        field,
                        selector: selector.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TaskKind::Rss => write!(f, "{} [{}] {}", self.name, self.kind, self.url),
            TaskKind::Html => write!(
                f,
                "{} [{}] {} (link: {}, title: {}, content: {})",
                self.name, self.kind, self.url, self.link, self.title, self.content
            ),
        }
    }
}
