use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static PROFILE_LINKS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.company-links a[title]").unwrap());
static SCOPED_LINKS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[title]").unwrap());

/// Company-level social links: platform key → URL.
pub fn extract(doc: &Html) -> BTreeMap<String, String> {
    collect(doc.select(&PROFILE_LINKS))
}

/// Social links below an arbitrary element (founder cards).
pub(crate) fn links_within(scope: ElementRef) -> BTreeMap<String, String> {
    collect(scope.select(&SCOPED_LINKS))
}

fn collect<'a>(links: impl Iterator<Item = ElementRef<'a>>) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for link in links {
        // Links without a usable title or href are skipped, never an error
        let Some(title) = link.value().attr("title") else {
            continue;
        };
        let Some(platform) = platform_key(title) else {
            continue;
        };
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        out.entry(platform).or_insert_with(|| href.to_string());
    }
    out
}

/// First word of the link's accessible title, lowercased:
/// "LinkedIn profile" → "linkedin".
fn platform_key(title: &str) -> Option<String> {
    title.split_whitespace().next().map(|w| w.to_lowercase())
}

// ── Tests ──
