use thiserror::Error;

/// Recoverable failures in the pipeline. Both variants are caught at the
/// smallest unit (one row, one fetch), logged, and skipped; neither aborts
/// the run. Extractors degrading to `None`/empty are not errors at all.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("input row {row}: {reason}")]
    InputParse { row: usize, reason: String },

    #[error("fetch {url}: {reason}")]
    Fetch {
        url: String,
        status: Option<u16>,
        reason: String,
    },
}

impl ScrapeError {
    pub fn fetch(url: &str, status: Option<u16>, reason: impl std::fmt::Display) -> Self {
        Self::Fetch {
            url: url.to_string(),
            status,
            reason: reason.to_string(),
        }
    }

    /// Rate limits and transient server errors are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Fetch {
                status: Some(429 | 500 | 502 | 503),
                ..
            }
        )
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_is_retryable() {
        let e = ScrapeError::fetch("https://example.com", Some(429), "HTTP 429");
        assert!(e.is_retryable());
    }

    #[test]
    fn not_found_is_not_retryable() {
        let e = ScrapeError::fetch("https://example.com", Some(404), "HTTP 404");
        assert!(!e.is_retryable());
        let net = ScrapeError::fetch("https://example.com", None, "connection refused");
        assert!(!net.is_retryable());
    }
}
