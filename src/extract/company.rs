use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::{clean_text, parse_digits, select_text};

static NAME: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.prose h1").unwrap());
static TAGLINE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.prose div.text-xl").unwrap());
static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.whitespace-pre-line").unwrap());
static WEBSITE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.company-website").unwrap());
static META_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.ycdc-card div.flex.flex-row.justify-between").unwrap());
static SPAN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").unwrap());
static BATCH_PILL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href*="batch="]"#).unwrap());
static BADGE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.ycdc-badge").unwrap());
static JOBS_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.jobs-link").unwrap());

/// The YC logo's alt text leaks into the batch pill's text node.
const BATCH_LOGO_MARKER: &str = "Y Combinator Logo";

pub fn name(doc: &Html) -> Option<String> {
    select_text(doc, &NAME)
}

pub fn tagline(doc: &Html) -> Option<String> {
    select_text(doc, &TAGLINE)
}

pub fn description(doc: &Html) -> Option<String> {
    select_text(doc, &DESCRIPTION)
}

pub fn website(doc: &Html) -> Option<String> {
    doc.select(&WEBSITE)
        .next()
        .and_then(|el| el.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
}

pub fn founded(doc: &Html) -> Option<String> {
    meta_value(doc, "Founded")
}

pub fn team_size(doc: &Html) -> Option<i64> {
    meta_value(doc, "Team Size").and_then(|v| parse_digits(&v))
}

pub fn location(doc: &Html) -> Option<String> {
    meta_value(doc, "Location")
}

/// Batch label from the header pill, with the embedded logo marker
/// stripped: "Y Combinator Logo W09" → "W09".
pub fn batch(doc: &Html) -> Option<String> {
    let raw = select_text(doc, &BATCH_PILL)?;
    let label = raw.replace(BATCH_LOGO_MARKER, "").trim().to_string();
    (!label.is_empty()).then_some(label)
}

pub fn badges(doc: &Html) -> Vec<String> {
    doc.select(&BADGE)
        .map(clean_text)
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn job_count(doc: &Html) -> Option<i64> {
    select_text(doc, &JOBS_LINK).and_then(|t| parse_digits(&t))
}

/// Value span of the sidebar row whose label starts with `label`.
/// `None` when the row is absent or its value is empty.
fn meta_value(doc: &Html, label: &str) -> Option<String> {
    doc.select(&META_ROW).find_map(|row| {
        let mut spans = row.select(&SPAN);
        let key = clean_text(spans.next()?);
        if !key.starts_with(label) {
            return None;
        }
        let value = clean_text(spans.next()?);
        (!value.is_empty()).then_some(value)
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_size_strips_non_digits() {
        let doc = Html::parse_document(
            r#"<div class="ycdc-card">
                 <div class="flex flex-row justify-between">
                   <span>Team Size:</span><span>42 people</span>
                 </div>
               </div>"#,
        );
        assert_eq!(team_size(&doc), Some(42));
    }

    #[test]
    fn missing_founded_row_is_none() {
        let doc = Html::parse_document(r#"<div class="ycdc-card"></div>"#);
        assert_eq!(founded(&doc), None);
    }

    #[test]
    fn empty_founded_value_is_none_not_empty_string() {
        let doc = Html::parse_document(
            r#"<div class="ycdc-card">
                 <div class="flex flex-row justify-between">
                   <span>Founded:</span><span></span>
                 </div>
               </div>"#,
        );
        assert_eq!(founded(&doc), None);
    }

    #[test]
    fn empty_website_href_is_none() {
        let doc = Html::parse_document(r#"<a class="company-website" href="">link</a>"#);
        assert_eq!(website(&doc), None);
    }

    #[test]
    fn batch_without_marker_is_kept_as_is() {
        let doc = Html::parse_document(r#"<a href="/companies?batch=S21">S21</a>"#);
        assert_eq!(batch(&doc).as_deref(), Some("S21"));
    }
}
