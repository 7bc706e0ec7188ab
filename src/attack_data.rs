//! ATT&CK reference dataset loading and technique resolution
//!
//! Parses the MITRE ATT&CK enterprise STIX bundle (a JSON document with a
//! flat `objects` array) and builds a precomputed index from technique
//! identifier to metadata record. The identifier of an object is taken from
//! the first entry of its `external_references` list only; objects without
//! one are skipped. Duplicate identifiers resolve first-occurrence-wins.
//!
//! Resolution is total: unknown identifiers (including the classifier's
//! "Unknown" sentinel) produce a placeholder record rather than an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name substituted when no reference entry matches an identifier
pub const UNKNOWN_TECHNIQUE_NAME: &str = "Unknown Technique";

/// Description substituted when a reference entry carries none
pub const NO_DESCRIPTION: &str = "No description available.";

/// Errors raised while loading the reference dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("ATT&CK dataset file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read ATT&CK dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid ATT&CK dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Metadata for a single technique, as exposed to report emitters.
///
/// `solutions` is guaranteed non-empty: records without explicit remediation
/// text carry their own description as the sole solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechniqueRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub solutions: Vec<String>,
}

impl TechniqueRecord {
    /// Fallback record for identifiers absent from the dataset
    pub fn placeholder(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: UNKNOWN_TECHNIQUE_NAME.to_string(),
            description: NO_DESCRIPTION.to_string(),
            solutions: vec![NO_DESCRIPTION.to_string()],
        }
    }
}

/// One external reference sub-object of a STIX object
#[derive(Debug, Deserialize)]
struct ExternalReference {
    #[serde(default)]
    external_id: Option<String>,
}

/// The subset of a STIX object this tool consumes
#[derive(Debug, Deserialize)]
struct StixObject {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    external_references: Vec<ExternalReference>,
    /// Optional remediation guidance; absent from the upstream bundle, but
    /// honored when a local dataset provides it
    #[serde(default)]
    solutions: Vec<String>,
}

/// Top-level STIX bundle shape
#[derive(Debug, Deserialize)]
struct StixBundle {
    #[serde(default)]
    objects: Vec<StixObject>,
}

/// Precomputed identifier → record index over the reference dataset
#[derive(Debug, Clone, Default)]
pub struct TechniqueIndex {
    records: HashMap<String, TechniqueRecord>,
}

impl TechniqueIndex {
    /// Load and index a dataset from a JSON file on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DatasetError::NotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse and index a dataset from raw JSON text
    pub fn from_json(text: &str) -> Result<Self, DatasetError> {
        let bundle: StixBundle = serde_json::from_str(text)?;
        Ok(Self::from_bundle(bundle))
    }

    fn from_bundle(bundle: StixBundle) -> Self {
        let mut records = HashMap::new();
        for object in bundle.objects {
            let Some(id) = primary_id(&object) else {
                continue;
            };
            let description = object
                .description
                .unwrap_or_else(|| NO_DESCRIPTION.to_string());
            let solutions = if object.solutions.is_empty() {
                vec![description.clone()]
            } else {
                object.solutions
            };
            let record = TechniqueRecord {
                id: id.clone(),
                name: object
                    .name
                    .unwrap_or_else(|| UNKNOWN_TECHNIQUE_NAME.to_string()),
                description,
                solutions,
            };
            // First occurrence wins on duplicate identifiers
            records.entry(id).or_insert(record);
        }
        Self { records }
    }

    /// Number of indexed technique records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve an identifier to its metadata record.
    ///
    /// Never fails: identifiers absent from the dataset resolve to the
    /// placeholder record.
    pub fn resolve(&self, id: &str) -> TechniqueRecord {
        self.records
            .get(id)
            .cloned()
            .unwrap_or_else(|| TechniqueRecord::placeholder(id))
    }
}

/// Extract the primary external identifier of a STIX object.
///
/// Only the first external reference is consulted; later entries are cross
/// references (CAPEC ids, vendor links) and never name the technique.
fn primary_id(object: &StixObject) -> Option<String> {
    object
        .external_references
        .first()
        .and_then(|reference| reference.external_id.as_deref())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}
