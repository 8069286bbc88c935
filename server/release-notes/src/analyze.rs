//! Aggregate analysis over a classified commit set: highlights, risk notes,
//! executive summary, impact, maintenance list, and rollback guidance.

use crate::config::Config;
use crate::normalize::{normalize, strip_prefix};
use crate::types::{AggregateAnalysis, ChangeCategory, Changes, ClassifiedCommit, RiskKeyword};
use crate::vocabulary::{Locale, Phrases};

/// Run every aggregate rule over commits in their original order.
pub fn analyze(commits: &[ClassifiedCommit], config: &Config) -> AggregateAnalysis {
  let changes = partition(commits);
  let risk_notes = risk_notes(commits);
  let all_keywords: Vec<RiskKeyword> = commits
    .iter()
    .flat_map(|c| c.risk_keywords.iter().copied())
    .collect();
  let phrases = config.locale.phrases();

  AggregateAnalysis {
    locale: config.locale,
    highlights: highlights(commits, config.highlight_limit, config.locale),
    executive_summary: executive_summary(&changes, phrases),
    impact: impact(&changes, !risk_notes.is_empty(), phrases),
    maintenance: changes
      .chores
      .iter()
      .map(|c| normalize(c.message(), ChangeCategory::Chores, config.locale))
      .collect(),
    rollback: rollback(&all_keywords, phrases),
    risk_notes,
    changes,
  }
}

/// Split by category, keeping original order inside each bucket.
pub fn partition(commits: &[ClassifiedCommit]) -> Changes {
  let mut changes = Changes::default();
  for c in commits {
    let bucket = match c.category {
      ChangeCategory::Features => &mut changes.features,
      ChangeCategory::Fixes => &mut changes.fixes,
      ChangeCategory::Chores => &mut changes.chores,
    };
    bucket.push(c.clone());
  }
  changes
}

/// First `limit` highlight-eligible commits, normalized.
pub fn highlights(commits: &[ClassifiedCommit], limit: usize, locale: Locale) -> Vec<String> {
  commits
    .iter()
    .filter(|c| c.is_highlight)
    .take(limit)
    .map(|c| normalize(c.message(), c.category, locale))
    .collect()
}

/// One line per flagged commit (not per keyword).
pub fn risk_notes(commits: &[ClassifiedCommit]) -> Vec<String> {
  commits
    .iter()
    .filter(|c| c.is_risky())
    .map(|c| {
      let keywords: Vec<&str> = c.risk_keywords.iter().map(|k| k.as_str()).collect();
      format!(
        "⚠️ {} (keywords: {})",
        strip_prefix(c.message()),
        keywords.join(", ")
      )
    })
    .collect()
}

pub fn executive_summary(changes: &Changes, phrases: &Phrases) -> String {
  let mut parts: Vec<String> = Vec::new();
  if !changes.features.is_empty() {
    parts.push(phrases.feature.count(changes.features.len()));
  }
  if !changes.fixes.is_empty() {
    parts.push(phrases.fix.count(changes.fixes.len()));
  }
  if !changes.chores.is_empty() {
    parts.push(phrases.chore.count(changes.chores.len()));
  }

  match parts.split_last() {
    None => phrases.no_changes.to_string(),
    Some((only, [])) => format!("{} {}.", phrases.summary_lead, only),
    Some((last, rest)) => format!(
      "{} {} {} {}.",
      phrases.summary_lead,
      rest.join(", "),
      phrases.and,
      last
    ),
  }
}

/// Up to three lines; absent rules contribute nothing.
pub fn impact(changes: &Changes, has_risks: bool, phrases: &Phrases) -> Vec<String> {
  let mut out = Vec::new();
  if !changes.features.is_empty() {
    out.push(phrases.feature_impact.count(changes.features.len()));
  }
  if !changes.fixes.is_empty() {
    out.push(phrases.fixes_impact.to_string());
  }
  if has_risks {
    out.push(phrases.risk_impact.to_string());
  }
  out
}

/// Mitigation by priority: breaking/migration, then security/auth/payment, then generic.
pub fn rollback(keywords: &[RiskKeyword], phrases: &Phrases) -> Option<String> {
  if keywords.is_empty() {
    return None;
  }

  let line = if contains_any(keywords, &[RiskKeyword::Breaking, RiskKeyword::Migration]) {
    phrases.rollback_revert
  } else if contains_any(
    keywords,
    &[RiskKeyword::Security, RiskKeyword::Auth, RiskKeyword::Payment],
  ) {
    phrases.rollback_flag
  } else {
    phrases.rollback_generic
  };
  Some(line.to_string())
}

fn contains_any(keywords: &[RiskKeyword], set: &[RiskKeyword]) -> bool {
  keywords.iter().any(|k| set.contains(k))
}
