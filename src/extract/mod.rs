pub mod company;
pub mod founders;
pub mod jobs;
pub mod launches;
pub mod news;
pub mod social;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::input::InputRecord;
use crate::model::CompanyRecord;
use self::launches::LaunchStub;

/// Everything extracted from one profile page. Launch stubs still need
/// their sub-pages fetched before the record is complete.
pub struct ProfileData {
    pub company: CompanyRecord,
    pub launch_stubs: Vec<LaunchStub>,
}

/// Run every field extractor against the same parsed document. A single
/// extractor degrading to `None`/empty never blocks the rest. The parsed
/// DOM stays inside this function; callers only see owned data.
pub fn extract_profile(html: &str, page_url: &Url, input: &InputRecord) -> ProfileData {
    let doc = Html::parse_document(html);

    let company = CompanyRecord {
        company_name: input.name.clone(),
        source_url: input.url.to_string(),
        name: company::name(&doc),
        tagline: company::tagline(&doc),
        description: company::description(&doc),
        website: company::website(&doc),
        founded: company::founded(&doc),
        team_size: company::team_size(&doc),
        location: company::location(&doc),
        batch: company::batch(&doc),
        badges: company::badges(&doc),
        job_count: company::job_count(&doc),
        social_links: social::extract(&doc),
        founders: founders::extract(&doc),
        jobs: jobs::extract(&doc),
        news: news::extract(&doc),
        launches: Vec::new(),
    };
    let launch_stubs = launches::stubs(&doc, page_url);

    ProfileData {
        company,
        launch_stubs,
    }
}

/// Element text with whitespace collapsed.
pub(crate) fn clean_text(el: ElementRef) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first match in the document; `None` when absent or empty.
pub(crate) fn select_text(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .next()
        .map(clean_text)
        .filter(|t| !t.is_empty())
}

/// Text of the first match below `scope`; `None` when absent or empty.
pub(crate) fn text_in(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(clean_text)
        .filter(|t| !t.is_empty())
}

/// Attribute of the first match below `scope`.
pub(crate) fn attr_in<'a>(
    scope: ElementRef<'a>,
    selector: &Selector,
    attr: &str,
) -> Option<&'a str> {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
}

/// Strip non-digits, then parse. `None` when nothing numeric remains.
pub(crate) fn parse_digits(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(fixture: &str) -> Html {
        let html =
            std::fs::read_to_string(format!("tests/fixtures/{}.html", fixture)).unwrap();
        Html::parse_document(&html)
    }

    #[test]
    fn airbnb_company_fields() {
        let doc = parse("airbnb");
        assert_eq!(company::name(&doc).as_deref(), Some("Airbnb"));
        assert_eq!(
            company::tagline(&doc).as_deref(),
            Some("Book accommodations around the world.")
        );
        assert_eq!(company::website(&doc).as_deref(), Some("https://airbnb.com"));
        assert_eq!(company::founded(&doc).as_deref(), Some("2008"));
        assert_eq!(company::team_size(&doc), Some(6132));
        assert_eq!(company::location(&doc).as_deref(), Some("San Francisco"));
        assert_eq!(company::job_count(&doc), Some(3));
    }

    #[test]
    fn airbnb_batch_strips_logo_marker() {
        let doc = parse("airbnb");
        assert_eq!(company::batch(&doc).as_deref(), Some("W09"));
    }

    #[test]
    fn airbnb_badges() {
        let doc = parse("airbnb");
        assert_eq!(company::badges(&doc), vec!["Travel", "Marketplace"]);
    }

    #[test]
    fn airbnb_social_links_keyed_by_title_first_word() {
        let doc = parse("airbnb");
        let links = social::extract(&doc);
        assert_eq!(
            links.get("linkedin").map(String::as_str),
            Some("https://www.linkedin.com/company/airbnb/")
        );
        assert_eq!(
            links.get("twitter").map(String::as_str),
            Some("https://twitter.com/Airbnb")
        );
        // The untitled link is skipped, not a panic
        assert_eq!(links.len(), 3);
    }

    #[test]
    fn airbnb_founders_full_cards() {
        let doc = parse("airbnb");
        let founders = founders::extract(&doc);
        assert_eq!(founders.len(), 2);
        assert_eq!(founders[0].name.as_deref(), Some("Brian Chesky"));
        assert_eq!(founders[0].position.as_deref(), Some("CEO"));
        assert!(founders[0].description.is_some());
        assert!(founders[0].social_links.contains_key("twitter"));
        assert!(founders[1].social_links.contains_key("linkedin"));
    }

    #[test]
    fn airbnb_jobs_keep_missing_fields_as_none() {
        let doc = parse("airbnb");
        let jobs = jobs::extract(&doc);
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].role.as_deref(), Some("Senior Software Engineer"));
        assert_eq!(jobs[0].salary.as_deref(), Some("$180K - $260K"));
        assert_eq!(jobs[1].salary, None);
        assert_eq!(jobs[2].location, None);
    }

    #[test]
    fn airbnb_news_drops_items_without_valid_date() {
        let doc = parse("airbnb");
        let news = news::extract(&doc);
        assert_eq!(news.len(), 1);
        assert_eq!(news[0].title, "Airbnb files to go public");
        assert_eq!(news[0].date, "2020-08-19");
    }

    #[test]
    fn airbnb_launch_stubs_resolved_and_filtered() {
        let doc = parse("airbnb");
        let base = Url::parse("https://www.ycombinator.com/companies/airbnb").unwrap();
        let stubs = launches::stubs(&doc, &base);
        // The stub without a description is dropped
        assert_eq!(stubs.len(), 1);
        assert_eq!(stubs[0].title, "Airbnb Rooms");
        assert_eq!(
            stubs[0].url.as_str(),
            "https://www.ycombinator.com/launches/airbnb-rooms"
        );
        assert_eq!(stubs[0].description, "A new way to stay.");
    }

    #[test]
    fn quantleaf_sparse_page_degrades_to_none() {
        let doc = parse("quantleaf");
        assert_eq!(company::name(&doc).as_deref(), Some("Quantleaf"));
        assert_eq!(company::founded(&doc), None);
        // "Team Size: —" has no digits
        assert_eq!(company::team_size(&doc), None);
        assert_eq!(company::tagline(&doc), None);
        assert_eq!(company::batch(&doc), None);
        assert_eq!(company::job_count(&doc), None);
        assert!(company::badges(&doc).is_empty());
        assert!(news::extract(&doc).is_empty());
        assert!(jobs::extract(&doc).is_empty());
        assert!(social::extract(&doc).is_empty());
    }

    #[test]
    fn quantleaf_founders_compact_tiles() {
        let doc = parse("quantleaf");
        let founders = founders::extract(&doc);
        assert_eq!(founders.len(), 1);
        assert_eq!(founders[0].name.as_deref(), Some("Erik Karlsson"));
        assert_eq!(founders[0].position.as_deref(), Some("Founder"));
        assert_eq!(founders[0].image.as_deref(), Some("/avatars/erik.jpg"));
        assert_eq!(founders[0].description, None);
    }

    #[test]
    fn parse_digits_strips_noise() {
        assert_eq!(parse_digits("Team Size: 42 people"), Some(42));
        assert_eq!(parse_digits("6,132"), Some(6132));
        assert_eq!(parse_digits("—"), None);
        assert_eq!(parse_digits(""), None);
    }
}
