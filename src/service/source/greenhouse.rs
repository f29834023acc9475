use std::sync::LazyLock;

use async_trait::async_trait;
use chrono::DateTime;
use regex::Regex;

use crate::error::fetch::FetchError;
use crate::model::job::JobDraft;
use crate::model::source::greenhouse::{FeedItem, GreenhouseFeed};
use crate::service::source::{JobSource, GREENHOUSE};
use crate::util::normalize;

static ITEM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<item>(.*?)</item>").expect("item pattern must compile")
});
static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<title><!\[CDATA\[(.*?)\]\]></title>").expect("title pattern must compile")
});
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<link>(.*?)</link>").expect("link pattern must compile"));
static DESCRIPTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<description><!\[CDATA\[(.*?)\]\]></description>")
        .expect("description pattern must compile")
});
static PUB_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<pubDate>(.*?)</pubDate>").expect("pubDate pattern must compile")
});
static LOCATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<location><!\[CDATA\[(.*?)\]\]></location>")
        .expect("location pattern must compile")
});
static DEPARTMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<department><!\[CDATA\[(.*?)\]\]></department>")
        .expect("department pattern must compile")
});

/// Fetcher for Greenhouse job-board RSS feeds.
///
/// Greenhouse boards are quota-free feed sources; every configured board is
/// fetched on every ingestion pass. The feeds are scraped with tag patterns
/// rather than a full XML parser, tolerating the malformed and partially
/// populated items the boards routinely serve.
pub struct GreenhouseSource {
    http: reqwest::Client,
    feeds: Vec<GreenhouseFeed>,
}

impl GreenhouseSource {
    /// Creates a new instance of [`GreenhouseSource`]
    pub fn new(http: reqwest::Client, feeds: Vec<GreenhouseFeed>) -> Self {
        Self { http, feeds }
    }

    /// Scrapes feed items out of an RSS document.
    ///
    /// Items missing a title or link are dropped; every other tag is
    /// optional.
    pub fn parse_feed(xml: &str) -> Vec<FeedItem> {
        let capture = |pattern: &Regex, item: &str| {
            pattern
                .captures(item)
                .map(|captures| captures[1].trim().to_string())
                .filter(|value| !value.is_empty())
        };

        ITEM_PATTERN
            .captures_iter(xml)
            .filter_map(|item| {
                let item = &item[1];

                let title = capture(&TITLE_PATTERN, item)?;
                let link = capture(&LINK_PATTERN, item)?;

                Some(FeedItem {
                    title,
                    link,
                    description: capture(&DESCRIPTION_PATTERN, item),
                    pub_date: capture(&PUB_DATE_PATTERN, item),
                    location: capture(&LOCATION_PATTERN, item),
                    department: capture(&DEPARTMENT_PATTERN, item),
                })
            })
            .collect()
    }

    fn map_item(feed: &GreenhouseFeed, item: FeedItem) -> JobDraft {
        let location = item.location.unwrap_or_else(|| "Remote".to_string());
        let description = item.description.unwrap_or_default();

        let classification = normalize::classify_location(&location, &description);
        let dedup_hash = normalize::fingerprint(&item.title, &feed.company, &location);

        let posted_date = item
            .pub_date
            .as_deref()
            .and_then(|date| DateTime::parse_from_rfc2822(date).ok())
            .map(|date| date.naive_utc());

        let external_id = item
            .link
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .map(str::to_string);

        JobDraft {
            country: normalize::extract_country(&location).map(str::to_string),
            company_name: feed.company.clone(),
            title: item.title,
            description: format!("{} - {}", feed.company, description),
            department: item.department,
            seniority_level: None,
            location,
            is_remote: classification.is_remote,
            remote_type: classification.remote_type,
            salary_min: None,
            salary_max: None,
            salary_currency: None,
            job_type: None,
            source_type: GREENHOUSE,
            source_url: item.link,
            external_id,
            posted_date,
            tech_stack: None,
            dedup_hash,
        }
    }

    async fn fetch_feed(&self, feed: &GreenhouseFeed) -> Result<Vec<JobDraft>, FetchError> {
        let response =
            self.http
                .get(&feed.url)
                .send()
                .await
                .map_err(|source| FetchError::Request {
                    provider: GREENHOUSE,
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                provider: GREENHOUSE,
                status,
            });
        }

        let xml = response.text().await.map_err(|source| FetchError::Parse {
            provider: GREENHOUSE,
            reason: source.to_string(),
        })?;

        Ok(Self::parse_feed(&xml)
            .into_iter()
            .map(|item| Self::map_item(feed, item))
            .collect())
    }
}

#[async_trait]
impl JobSource for GreenhouseSource {
    fn name(&self) -> &'static str {
        GREENHOUSE
    }

    /// Fetches every configured board feed.
    ///
    /// Boards fetch concurrently; one failing must not starve the others,
    /// so the error is only surfaced when every configured board failed.
    async fn fetch(&self) -> Result<Vec<JobDraft>, FetchError> {
        let results =
            futures::future::join_all(self.feeds.iter().map(|feed| self.fetch_feed(feed))).await;

        let mut drafts = Vec::new();
        let mut last_error = None;

        for (feed, result) in self.feeds.iter().zip(results) {
            match result {
                Ok(jobs) => {
                    tracing::debug!("Fetched {} jobs from Greenhouse ({})", jobs.len(), feed.company);
                    drafts.extend(jobs);
                }
                Err(err) => {
                    tracing::warn!("Greenhouse feed ({}) failed: {}", feed.company, err);
                    last_error = Some(err);
                }
            }
        }

        match last_error {
            Some(err) if drafts.is_empty() => Err(err),
            _ => Ok(drafts),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::source::greenhouse::GreenhouseFeed;
    use crate::service::source::greenhouse::GreenhouseSource;
    use crate::service::source::JobSource;
    use crate::util::test::fixtures::greenhouse_feed_xml;
    use crate::util::test::mockito::mock_greenhouse_endpoint;
    use crate::util::test::setup::test_setup;

    /// Expect items with optional tags missing to still parse
    #[test]
    fn test_parse_feed_tolerates_missing_tags() {
        let xml = r#"<rss><channel>
            <item>
                <title><![CDATA[Senior Engineer]]></title>
                <link>https://boards.greenhouse.io/acme/jobs/123</link>
            </item>
            <item>
                <title><![CDATA[No Link Role]]></title>
            </item>
        </channel></rss>"#;

        let items = GreenhouseSource::parse_feed(xml);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Senior Engineer");
        assert!(items[0].location.is_none());
        assert!(items[0].description.is_none());
    }

    /// Expect all tags to be captured when present
    #[test]
    fn test_parse_feed_full_item() {
        let xml = greenhouse_feed_xml(&[(
            "Staff Engineer",
            "https://boards.greenhouse.io/acme/jobs/42",
            "Austin, TX",
        )]);

        let items = GreenhouseSource::parse_feed(&xml);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].location.as_deref(), Some("Austin, TX"));
        assert_eq!(items[0].department.as_deref(), Some("Engineering"));
        assert!(items[0].pub_date.is_some());
    }

    /// Expect garbage between items to be ignored
    #[test]
    fn test_parse_feed_malformed_noise() {
        let xml = r#"<rss><item><title><![CDATA[Role]]></title>
            <link>https://example.com/jobs/9</link></item>
            <item><broken"#;

        let items = GreenhouseSource::parse_feed(xml);

        assert_eq!(items.len(), 1);
    }

    /// Expect fetched items to map with the feed's company and a link-derived id
    #[tokio::test]
    async fn test_fetch_success() {
        let mut test = test_setup().await;
        let source = GreenhouseSource::new(test.http.clone(), test.sources.greenhouse_feeds.clone());

        let xml = greenhouse_feed_xml(&[(
            "Staff Engineer",
            "https://boards.greenhouse.io/acme/jobs/42",
            "Remote - USA",
        )]);
        let endpoint = mock_greenhouse_endpoint(&mut test.server, "/feeds/acme", &xml, 1);

        let drafts = source.fetch().await.unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].company_name, "Acme");
        assert_eq!(drafts[0].external_id.as_deref(), Some("42"));
        assert!(drafts[0].is_remote);
        assert_eq!(drafts[0].source_type, "greenhouse");
        assert!(drafts[0].description.starts_with("Acme - "));

        endpoint.assert();
    }

    /// Expect one failing board to not starve a healthy one
    #[tokio::test]
    async fn test_fetch_partial_feed_failure() {
        let mut test = test_setup().await;

        let healthy_url = format!("{}/feeds/acme", test.server.url());
        let broken_url = format!("{}/feeds/broken", test.server.url());
        let source = GreenhouseSource::new(
            test.http.clone(),
            vec![
                GreenhouseFeed {
                    company: "Broken Co".to_string(),
                    url: broken_url,
                },
                GreenhouseFeed {
                    company: "Acme".to_string(),
                    url: healthy_url,
                },
            ],
        );

        let xml = greenhouse_feed_xml(&[(
            "Staff Engineer",
            "https://boards.greenhouse.io/acme/jobs/42",
            "Austin, TX",
        )]);
        test.server
            .mock("GET", "/feeds/broken")
            .with_status(500)
            .create();
        mock_greenhouse_endpoint(&mut test.server, "/feeds/acme", &xml, 1);

        let drafts = source.fetch().await.unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].company_name, "Acme");
    }

    /// Expect an error only when every configured board failed
    #[tokio::test]
    async fn test_fetch_all_feeds_failed() {
        let mut test = test_setup().await;
        let source = GreenhouseSource::new(test.http.clone(), test.sources.greenhouse_feeds.clone());

        test.server
            .mock("GET", "/feeds/acme")
            .with_status(500)
            .create();

        let result = source.fetch().await;

        assert!(result.is_err());
    }
}
