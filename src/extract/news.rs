use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use scraper::{Html, Selector};

use super::clean_text;
use crate::model::NewsItem;

static ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section.company-news div.news-item").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.news-title").unwrap());
static DATE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("time").unwrap());

/// Press mentions. Title, link and a valid ISO-8601 date are all
/// required; an entry missing any of them is dropped entirely.
pub fn extract(doc: &Html) -> Vec<NewsItem> {
    doc.select(&ITEM)
        .filter_map(|item| {
            let link = item.select(&TITLE).next()?;
            let title = clean_text(link);
            if title.is_empty() {
                return None;
            }
            let url = link
                .value()
                .attr("href")
                .filter(|href| !href.is_empty())?
                .to_string();
            let date = item
                .select(&DATE)
                .next()
                .and_then(|t| t.value().attr("datetime"))
                .filter(|d| is_iso_date(d))
                .map(str::to_string)?;
            Some(NewsItem { title, url, date })
        })
        .collect()
}

fn is_iso_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() || DateTime::parse_from_rfc3339(s).is_ok()
}

// ── Tests ──
