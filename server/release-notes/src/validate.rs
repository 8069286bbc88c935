//! Content validation for fixture requests, run before any classification.

use url::Url;

use crate::error::PipelineError;
use crate::types::FixtureRequest;

/// Reject blank labels, blank hashes, and commit links that are not absolute URLs.
pub fn validate_fixture(req: &FixtureRequest) -> Result<(), PipelineError> {
  if req.repository.trim().is_empty() {
    return Err(PipelineError::validation("repository", "must not be empty"));
  }
  if req.range_label.trim().is_empty() {
    return Err(PipelineError::validation("rangeLabel", "must not be empty"));
  }

  for (i, commit) in req.commits.iter().enumerate() {
    if commit.sha.trim().is_empty() {
      return Err(PipelineError::validation(
        &format!("commits[{}].sha", i),
        "must not be empty",
      ));
    }
    Url::parse(&commit.url).map_err(|e| {
      PipelineError::validation(
        &format!("commits[{}].url", i),
        &format!("invalid URL: {}", e),
      )
    })?;
  }

  Ok(())
}
