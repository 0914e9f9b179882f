use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::{clean_text, parse_digits, text_in};
use crate::model::LaunchPost;

static ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section.company-launches div.launch-item").unwrap());
static STUB_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.launch-title").unwrap());
static STUB_TAGLINE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.launch-tagline").unwrap());
static VOTE_COUNT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.vote-count").unwrap());
static POSTED_AT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("time.launch-date").unwrap());
static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.launch-body").unwrap());
static MEDIA: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img, iframe").unwrap());

/// A launch post as listed on the profile page, before its sub-page has
/// been fetched. Title, link and description are all required to keep it.
#[derive(Debug, Clone)]
pub struct LaunchStub {
    pub title: String,
    pub url: Url,
    pub description: String,
}

/// Launch stubs from the profile page, links resolved against the page
/// URL. Entries missing a title, link or description are dropped.
pub fn stubs(doc: &Html, page_url: &Url) -> Vec<LaunchStub> {
    doc.select(&ITEM)
        .filter_map(|item| {
            let link = item.select(&STUB_TITLE).next()?;
            let title = clean_text(link);
            if title.is_empty() {
                return None;
            }
            let href = link.value().attr("href")?;
            let url = page_url.join(href).ok()?;
            let description = text_in(item, &STUB_TAGLINE)?;
            Some(LaunchStub {
                title,
                url,
                description,
            })
        })
        .collect()
}

/// Build the full post from its fetched sub-page. Vote count defaults to
/// 0 when absent or unparseable; body and timestamp stay optional.
pub fn extract_detail(html: &str, stub: LaunchStub) -> LaunchPost {
    let doc = Html::parse_document(html);

    let vote_count = doc
        .select(&VOTE_COUNT)
        .next()
        .and_then(|el| parse_digits(&clean_text(el)))
        .unwrap_or(0);
    let created_at = doc
        .select(&POSTED_AT)
        .next()
        .and_then(|el| el.value().attr("datetime"))
        .map(str::to_string);
    let (body, media_urls) = body_and_media(&doc, &stub.url);

    LaunchPost {
        title: stub.title,
        url: stub.url.to_string(),
        description: stub.description,
        vote_count,
        created_at,
        body,
        media_urls,
    }
}

/// Walk the content container's child elements: a child contributes its
/// own text if non-empty, otherwise its first image or embedded-frame
/// `src` resolved to an absolute URL against the page's base URL. The
/// body is the space-joined fragment sequence; media URLs are recorded
/// de-duplicated in first-occurrence order.
fn body_and_media(doc: &Html, base: &Url) -> (Option<String>, Vec<String>) {
    let Some(container) = doc.select(&BODY).next() else {
        return (None, Vec::new());
    };

    let mut parts = Vec::new();
    let mut media = Vec::new();
    for child in container.children().filter_map(ElementRef::wrap) {
        let text = clean_text(child);
        if !text.is_empty() {
            parts.push(text);
            continue;
        }
        let Some(src) = media_src(child) else {
            continue;
        };
        let Ok(abs) = base.join(src) else {
            continue;
        };
        let abs = abs.to_string();
        parts.push(abs.clone());
        if !media.contains(&abs) {
            media.push(abs);
        }
    }

    let body = (!parts.is_empty()).then(|| parts.join(" "));
    (body, media)
}

fn media_src<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    if matches!(el.value().name(), "img" | "iframe") {
        return el.value().attr("src");
    }
    el.select(&MEDIA).next().and_then(|m| m.value().attr("src"))
}

// ── Tests ──
