/// A configured Greenhouse job-board feed: the RSS endpoint plus the
/// company display name its listings belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreenhouseFeed {
    pub company: String,
    pub url: String,
}

/// One `<item>` scraped from a Greenhouse job-board RSS feed.
///
/// Title and link are required; everything else is optional and tolerated
/// missing, matching how loosely the boards populate their feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub pub_date: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
}
