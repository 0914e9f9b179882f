use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::text_in;
use crate::model::JobPosting;

static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section.company-jobs div.job-row").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.job-title").unwrap());
static LOCATION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.job-location").unwrap());
static SALARY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.job-salary").unwrap());
static EQUITY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.job-equity").unwrap());
static VISA: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.job-visa").unwrap());

/// One posting per listing row. Missing sub-fields stay `None`; rows are
/// never dropped.
pub fn extract(doc: &Html) -> Vec<JobPosting> {
    doc.select(&ROW)
        .map(|row| JobPosting {
            role: text_in(row, &TITLE),
            location: text_in(row, &LOCATION),
            salary: text_in(row, &SALARY),
            equity: text_in(row, &EQUITY),
            visa_eligibility: text_in(row, &VISA),
        })
        .collect()
}
