use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::error::ScrapeError;
use crate::extract::{self, launches, ProfileData};
use crate::fetch::PageClient;
use crate::input::{self, InputRecord};
use crate::model::{CompanyRecord, LaunchPost};

/// Run stats returned after completion.
pub struct RunStats {
    pub total: usize,
    pub ok: usize,
    pub errors: usize,
}

/// Read the input list, scrape every company with bounded parallelism,
/// and write the accumulated records as pretty-printed JSON. Output order
/// is completion order. A failed profile fetch omits that record entirely;
/// an input with no usable rows still writes an empty array.
pub async fn run(
    input_path: &Path,
    output_path: &Path,
    concurrency: usize,
    limit: Option<usize>,
) -> Result<RunStats> {
    let mut records = input::load_records(input_path)?;
    if let Some(n) = limit {
        records.truncate(n);
    }
    if records.is_empty() {
        warn!("no usable rows in {}", input_path.display());
    }

    if let Some(dir) = output_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }

    let client = Arc::new(PageClient::new()?);
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let total = records.len();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    // Channel: workers send finished records, the receiving loop is the
    // only accumulator
    let (tx, mut rx) =
        tokio::sync::mpsc::channel::<Result<CompanyRecord, ScrapeError>>(concurrency.max(1) * 2);

    for record in records {
        let client = Arc::clone(&client);
        let sem = Arc::clone(&semaphore);
        let tx = tx.clone();

        tokio::spawn(async move {
            let _permit = sem.acquire().await.unwrap();
            let outcome = scrape_company(&client, &record).await;
            let _ = tx.send(outcome).await;
        });
    }

    // Drop our copy of tx so rx closes when all spawned tasks finish
    drop(tx);

    let mut companies: Vec<CompanyRecord> = Vec::with_capacity(total);
    let mut errors = 0usize;
    while let Some(outcome) = rx.recv().await {
        match outcome {
            Ok(company) => companies.push(company),
            Err(e) => {
                warn!("omitting company: {e}");
                errors += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let json = serde_json::to_string_pretty(&companies)?;
    std::fs::write(output_path, json)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    info!(
        "Wrote {} records to {} ({} fetch failures)",
        companies.len(),
        output_path.display(),
        errors
    );

    Ok(RunStats {
        total,
        ok: companies.len(),
        errors,
    })
}

/// Fetch one profile page, extract the record, then fetch and attach its
/// launch posts. Launch sub-page failures drop only that post.
async fn scrape_company(
    client: &PageClient,
    record: &InputRecord,
) -> Result<CompanyRecord, ScrapeError> {
    let html = client.fetch_with_retry(record.url.as_str()).await?;
    let ProfileData {
        mut company,
        launch_stubs,
    } = extract::extract_profile(&html, &record.url, record);

    let fetches = launch_stubs
        .into_iter()
        .map(|stub| fetch_launch(client, stub));
    company.launches = join_all(fetches).await.into_iter().flatten().collect();

    Ok(company)
}

async fn fetch_launch(client: &PageClient, stub: launches::LaunchStub) -> Option<LaunchPost> {
    match client.fetch_with_retry(stub.url.as_str()).await {
        Ok(html) => Some(launches::extract_detail(&html, stub)),
        Err(e) => {
            warn!("dropping launch post: {e}");
            None
        }
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn malformed_only_input_writes_empty_array() {
        let input = PathBuf::from("tests/fixtures/malformed-only.csv");
        let output = std::env::temp_dir().join("yc_profiles_empty_run.json");

        let stats = run(&input, &output, 2, None).await.unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.ok, 0);
        assert_eq!(stats.errors, 0);

        let json = std::fs::read_to_string(&output).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_empty());
    }
}
