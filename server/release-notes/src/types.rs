//! Core types for the release notes engine (JSON contracts + internal models).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::vocabulary::Locale;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: what the caller sends)
// ---------------------------------------------------------------------------

/// One commit as supplied by the caller. Never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
  pub sha: String,
  pub message: String,
  pub author: String,
  pub url: String,
}

/// Run request, discriminated by `mode`. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PipelineRequest {
  /// Explicit commit list supplied by the caller.
  Fixture(FixtureRequest),
  /// Fetch commits from a remote repository between two refs (not implemented).
  #[serde(alias = "github")]
  Remote(RemoteRequest),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureRequest {
  #[serde(alias = "repo")]
  pub repository: String,
  pub range_label: String,
  pub commits: Vec<Commit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteRequest {
  #[serde(alias = "repo")]
  pub repository: String,
  pub from: String,
  pub to: String,
}

impl PipelineRequest {
  /// Wire name of the request mode.
  pub fn mode(&self) -> &'static str {
    match self {
      Self::Fixture(_) => "fixture",
      Self::Remote(_) => "remote",
    }
  }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// The three buckets every commit falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeCategory {
  Features,
  Fixes,
  Chores,
}

/// Words whose presence flags a commit for review and rollback planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskKeyword {
  Breaking,
  Migration,
  Security,
  Pii,
  Auth,
  Db,
  Payment,
}

impl RiskKeyword {
  /// Scan order. Keywords on a commit always appear in this order.
  pub const ALL: [RiskKeyword; 7] = [
    Self::Breaking,
    Self::Migration,
    Self::Security,
    Self::Pii,
    Self::Auth,
    Self::Db,
    Self::Payment,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Breaking => "breaking",
      Self::Migration => "migration",
      Self::Security => "security",
      Self::Pii => "pii",
      Self::Auth => "auth",
      Self::Db => "db",
      Self::Payment => "payment",
    }
  }
}

/// Commit plus its derived classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedCommit {
  #[serde(flatten)]
  pub commit: Commit,
  pub category: ChangeCategory,
  pub is_highlight: bool,
  pub risk_keywords: Vec<RiskKeyword>,
}

impl ClassifiedCommit {
  pub fn message(&self) -> &str {
    &self.commit.message
  }

  pub fn is_risky(&self) -> bool {
    !self.risk_keywords.is_empty()
  }
}

// ---------------------------------------------------------------------------
// Analysis output
// ---------------------------------------------------------------------------

/// Classified commits partitioned by category, original order kept in each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Changes {
  pub features: Vec<ClassifiedCommit>,
  pub fixes: Vec<ClassifiedCommit>,
  pub chores: Vec<ClassifiedCommit>,
}

impl Changes {
  pub fn is_empty(&self) -> bool {
    self.features.is_empty() && self.fixes.is_empty() && self.chores.is_empty()
  }

  /// Features, then fixes, then chores.
  pub fn iter(&self) -> impl Iterator<Item = &ClassifiedCommit> {
    self
      .features
      .iter()
      .chain(self.fixes.iter())
      .chain(self.chores.iter())
  }
}

/// Everything derived from one classified commit set.
///
/// `locale` is the vocabulary the strings were produced in; the renderer reuses it for
/// per-item text so one document never mixes languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateAnalysis {
  #[serde(skip)]
  pub locale: Locale,
  pub highlights: Vec<String>,
  pub changes: Changes,
  pub risk_notes: Vec<String>,
  pub executive_summary: String,
  pub impact: Vec<String>,
  pub maintenance: Vec<String>,
  pub rollback: Option<String>,
}

/// Structured output of a successful run: analysis plus title and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseNotes {
  pub title: String,
  pub date: NaiveDate,
  #[serde(flatten)]
  pub analysis: AggregateAnalysis,
}

// ---------------------------------------------------------------------------
// Artifacts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
  Document,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactMetadata {
  pub repository: String,
  pub range_label: String,
}

/// A rendered output handed to the caller for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
  /// Content-derived identifier: "rn-" + 16 hex chars of blake3(content).
  pub id: String,
  pub kind: ArtifactKind,
  pub content: String,
  pub metadata: ArtifactMetadata,
}

/// Result of a successful pipeline run. Never partially populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineOutput {
  pub structured_output: ReleaseNotes,
  pub artifacts: Vec<Artifact>,
}

// ---------------------------------------------------------------------------
// CLI envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
  Ok,
  Error,
}

/// What the binary prints: either the full output or an error message.
#[derive(Debug, Clone, Serialize)]
pub struct RunResponse {
  pub status: RunStatus,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub output: Option<ReleaseNotes>,
  pub artifacts: Vec<Artifact>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
  /// Offending request field, for validation failures.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl RunResponse {
  pub fn ok(out: PipelineOutput) -> Self {
    Self {
      status: RunStatus::Ok,
      output: Some(out.structured_output),
      artifacts: out.artifacts,
      error: None,
      field: None,
    }
  }

  pub fn error(message: impl Into<String>) -> Self {
    Self {
      status: RunStatus::Error,
      output: None,
      artifacts: Vec::new(),
      error: Some(message.into()),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
