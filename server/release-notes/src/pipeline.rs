//! Pipeline orchestrator: validate the request, classify, analyze, render, package.

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::analyze;
use crate::classify;
use crate::config::Config;
use crate::error::PipelineError;
use crate::render;
use crate::types::*;
use crate::validate;

/// The release notes pipeline. Stateless between runs; safe to share.
pub struct Pipeline {
  config: Config,
}

impl Pipeline {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Parse a raw JSON request and run it. Shape errors surface as `Validation`.
  pub fn run_json(&self, raw: &str, date: NaiveDate) -> Result<PipelineOutput, PipelineError> {
    let request = match parse_request(raw) {
      Ok(request) => request,
      Err(e) => {
        warn!(error = %e, "rejected malformed request");
        return Err(e);
      }
    };
    self.run(&request, date)
  }

  /// Run with the current UTC date, captured once for the whole run.
  pub fn run_today(&self, request: &PipelineRequest) -> Result<PipelineOutput, PipelineError> {
    self.run(request, Utc::now().date_naive())
  }

  /// Run one request with an injected generation date.
  ///
  /// Returns the full output plus exactly one artifact, or an error with nothing else.
  pub fn run(
    &self,
    request: &PipelineRequest,
    date: NaiveDate,
  ) -> Result<PipelineOutput, PipelineError> {
    let req = match request {
      PipelineRequest::Fixture(req) => req,
      PipelineRequest::Remote(remote) => {
        warn!(
          repository = %remote.repository,
          from = %remote.from,
          to = %remote.to,
          "remote mode requested"
        );
        return Err(PipelineError::unsupported(request.mode()));
      }
    };

    if let Err(e) = validate::validate_fixture(req) {
      warn!(error = %e, "rejected fixture request");
      return Err(e);
    }

    info!(
      repository = %req.repository,
      range = %req.range_label,
      commits = req.commits.len(),
      "generating release notes"
    );
    Ok(self.generate(req, date))
  }

  fn generate(&self, req: &FixtureRequest, date: NaiveDate) -> PipelineOutput {
    let classified = classify::classify_all(&req.commits);
    for c in &classified {
      debug!(
        sha = render::short_sha(&c.commit.sha, self.config.short_sha_len),
        category = ?c.category,
        risk = ?c.risk_keywords,
        highlight = c.is_highlight,
        "classified commit"
      );
    }

    let notes = ReleaseNotes {
      title: format!("Release notes — {}", req.range_label),
      date,
      analysis: analyze::analyze(&classified, &self.config),
    };
    let content = render::render_markdown(&notes, &self.config);
    let artifact = Artifact {
      id: artifact_id(&content),
      kind: ArtifactKind::Document,
      content,
      metadata: ArtifactMetadata {
        repository: req.repository.clone(),
        range_label: req.range_label.clone(),
      },
    };

    info!(
      artifact = %artifact.id,
      highlights = notes.analysis.highlights.len(),
      risk_notes = notes.analysis.risk_notes.len(),
      "release notes generated"
    );

    PipelineOutput {
      structured_output: notes,
      artifacts: vec![artifact],
    }
  }
}

/// Deserialize a run request; malformed JSON or a missing field is a `Validation` error.
pub fn parse_request(raw: &str) -> Result<PipelineRequest, PipelineError> {
  Ok(serde_json::from_str(raw)?)
}

/// Stable artifact ID: "rn-" + first 16 hex chars of blake3(content).
pub fn artifact_id(content: &str) -> String {
  let hex = blake3::hash(content.as_bytes()).to_hex();
  format!("rn-{}", &hex[..16])
}
