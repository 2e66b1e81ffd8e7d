//! Feed document parsing
//!
//! RSS 2.0 is tried first, then Atom. Both are flattened into the same
//! entry shape so the RSS collector does not care which one it got.

/// One feed entry, with absent fields as empty strings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedEntry {
    pub link: String,
    pub title: String,
    /// Full content (`content:encoded` in RSS, `<content>` in Atom)
    pub content: String,
    /// Summary (`<description>` in RSS, `<summary>` in Atom)
    pub description: String,
}

/// A parsed feed
#[derive(Debug, Clone, Default)]
pub struct FeedDocument {
    pub entries: Vec<FeedEntry>,
}

/// Parses an RSS or Atom document
///
/// # Returns
///
/// * `Ok(FeedDocument)` - Entries in document order
/// * `Err(String)` - The bytes are neither RSS nor Atom
pub fn parse_feed(bytes: &[u8]) -> Result<FeedDocument, String> {
    let rss_error = match rss::Channel::read_from(bytes) {
        Ok(channel) => return Ok(from_rss(&channel)),
        Err(e) => e,
    };

    match atom_syndication::Feed::read_from(bytes) {
        Ok(feed) => Ok(from_atom(&feed)),
        Err(atom_error) => Err(format!(
            "not an RSS or Atom document (rss: {}; atom: {})",
            rss_error, atom_error
        )),
    }
}

fn from_rss(channel: &rss::Channel) -> FeedDocument {
    let entries = channel
        .items()
        .iter()
        .map(|item| FeedEntry {
            link: item.link().unwrap_or_default().to_string(),
            title: item.title().unwrap_or_default().to_string(),
            content: item.content().unwrap_or_default().to_string(),
            description: item.description().unwrap_or_default().to_string(),
        })
        .collect();

    FeedDocument { entries }
}

fn from_atom(feed: &atom_syndication::Feed) -> FeedDocument {
    let entries = feed
        .entries()
        .iter()
        .map(|entry| {
            // Prefer the alternate link, the entry's canonical page
            let link = entry
                .links()
                .iter()
                .find(|l| l.rel() == "alternate")
                .or_else(|| entry.links().first())
                .map(|l| l.href().to_string())
                .unwrap_or_default();

            FeedEntry {
                link,
                title: entry.title().value.clone(),
                content: entry
                    .content()
                    .and_then(|c| c.value())
                    .unwrap_or_default()
                    .to_string(),
                description: entry
                    .summary()
                    .map(|s| s.value.clone())
                    .unwrap_or_default(),
            }
        })
        .collect();

    FeedDocument { entries }
}
