use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fully assembled output for one input row. Optional fields serialize as
/// explicit `null`; list fields as arrays (possibly empty). Never mutated
/// after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub company_name: String,
    pub source_url: String,
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub founded: Option<String>,
    pub team_size: Option<i64>,
    pub location: Option<String>,
    pub batch: Option<String>,
    pub badges: Vec<String>,
    pub job_count: Option<i64>,
    pub social_links: BTreeMap<String, String>,
    pub founders: Vec<Founder>,
    pub jobs: Vec<JobPosting>,
    pub news: Vec<NewsItem>,
    pub launches: Vec<LaunchPost>,
}

/// One founder profile, normalized from either page variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Founder {
    pub name: Option<String>,
    pub image: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
    pub social_links: BTreeMap<String, String>,
}

/// One job listing. Missing sub-fields stay `null`; the posting is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub role: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub equity: Option<String>,
    pub visa_eligibility: Option<String>,
}

/// One press mention. All fields required; an entry missing any of them
/// is dropped at extraction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    /// ISO-8601 date from the entry's `<time datetime>` attribute.
    pub date: String,
}

/// One product-announcement post, assembled from the profile page listing
/// plus its own sub-page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchPost {
    pub title: String,
    pub url: String,
    pub description: String,
    pub vote_count: i64,
    pub created_at: Option<String>,
    pub body: Option<String>,
    /// Absolute media URLs referenced from the post body, de-duplicated
    /// in first-occurrence order.
    pub media_urls: Vec<String>,
}

// ── Tests ──
