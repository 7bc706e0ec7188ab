//! ATT&CK dataset download and cache management
//!
//! The reference dataset is fetched from the public MITRE CTI repository and
//! cached on disk. A cached copy older than the staleness threshold is
//! re-downloaded; offline mode skips the network entirely and requires the
//! cache to exist. All of this sits outside the analysis core, which only
//! ever sees a fully loaded dataset.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, Utc};
use std::fs;
use std::path::Path;

/// Canonical source of the enterprise ATT&CK STIX bundle
pub const MITRE_ATTACK_URL: &str =
    "https://github.com/mitre/cti/raw/master/enterprise-attack/enterprise-attack.json";

/// Default cache file name
pub const DEFAULT_DATASET_FILE: &str = "enterprise-attack.json";

/// Default staleness threshold for the cached dataset
pub const DEFAULT_MAX_AGE_DAYS: u64 = 90;

/// Age of the cached dataset, from its modification time
fn dataset_age(path: &Path) -> Result<Duration> {
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .with_context(|| format!("Failed to stat cached dataset: {}", path.display()))?;
    let modified: DateTime<Utc> = modified.into();
    Ok(Utc::now().signed_duration_since(modified))
}

/// Whether the cached dataset at `path` should be re-downloaded
pub fn needs_refresh(path: &Path, max_age: Duration) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(dataset_age(path)? > max_age)
}

/// Download the dataset to `path`, streaming to disk
pub fn download_dataset(path: &Path) -> Result<()> {
    eprintln!("Downloading MITRE ATT&CK data...");
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(300))
        .build()
        .context("Failed to build HTTP client")?;

    let mut response = client
        .get(MITRE_ATTACK_URL)
        .send()
        .with_context(|| format!("Failed to fetch {}", MITRE_ATTACK_URL))?
        .error_for_status()
        .context("ATT&CK dataset download failed")?;

    let mut file = fs::File::create(path)
        .with_context(|| format!("Failed to create dataset file: {}", path.display()))?;
    let bytes = std::io::copy(&mut response, &mut file)
        .context("Failed to write dataset to disk")?;

    eprintln!("MITRE ATT&CK data downloaded ({:.2} KB).", bytes as f64 / 1024.0);
    Ok(())
}

/// Make sure a loadable dataset exists at `path`.
///
/// Freshness policy: missing cache downloads, stale cache re-downloads,
/// fresh cache is used as-is. In offline mode any existing cache (even a
/// stale one) is accepted and a missing one is fatal.
pub fn ensure_dataset(path: &Path, max_age: Duration, offline: bool) -> Result<()> {
    if offline {
        if !path.exists() {
            bail!(
                "offline mode requires a cached dataset, but none exists at {}",
                path.display()
            );
        }
        tracing::debug!(path = %path.display(), "offline mode, using cached dataset");
        return Ok(());
    }

    if !needs_refresh(path, max_age)? {
        tracing::debug!(path = %path.display(), "cached dataset is fresh");
        eprintln!("MITRE ATT&CK data is up to date.");
        return Ok(());
    }

    if path.exists() {
        eprintln!(
            "MITRE ATT&CK data is older than {} days. Downloading new data...",
            max_age.num_days()
        );
    } else {
        eprintln!("MITRE ATT&CK data not found. Downloading...");
    }

    match download_dataset(path) {
        Ok(()) => Ok(()),
        // A stale copy beats no copy when the network is down
        Err(err) if path.exists() => {
            tracing::warn!(error = %err, "download failed, falling back to stale cache");
            eprintln!("Warning: download failed, using stale cached data.");
            Ok(())
        }
        Err(err) => Err(err),
    }
}
