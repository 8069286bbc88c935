//! Markdown rendering of release notes. Pure function of its input.

use crate::config::Config;
use crate::normalize::{normalize, strip_prefix};
use crate::types::{ClassifiedCommit, ReleaseNotes};

/// Leading `len` characters of a commit hash (whole hash if shorter).
pub fn short_sha(sha: &str, len: usize) -> &str {
  match sha.char_indices().nth(len) {
    Some((idx, _)) => &sha[..idx],
    None => sha,
  }
}

/// Render the document. Sections appear in fixed order and only when they have content.
///
/// Item text follows the locale the analysis was built with; `config` only supplies layout.
pub fn render_markdown(notes: &ReleaseNotes, config: &Config) -> String {
  let a = &notes.analysis;
  let mut lines: Vec<String> = Vec::new();

  lines.push(format!("# {}", notes.title));
  lines.push(String::new());
  lines.push(format!("**Date:** {}", notes.date.format("%Y-%m-%d")));
  lines.push(String::new());

  if !a.executive_summary.is_empty() {
    lines.push("## Executive summary".into());
    lines.push(String::new());
    lines.push(a.executive_summary.clone());
    lines.push(String::new());
  }

  bullet_section(&mut lines, "## Highlights", &a.highlights);

  if !a.changes.is_empty() {
    lines.push("## Changes".into());
    lines.push(String::new());

    let features: Vec<String> = a
      .changes
      .features
      .iter()
      .map(|c| change_item(c, normalize(c.message(), c.category, a.locale), config))
      .collect();
    let fixes: Vec<String> = a
      .changes
      .fixes
      .iter()
      .map(|c| change_item(c, normalize(c.message(), c.category, a.locale), config))
      .collect();
    let maintenance: Vec<String> = a
      .changes
      .chores
      .iter()
      .zip(a.maintenance.iter())
      .map(|(c, text)| change_item(c, text.clone(), config))
      .collect();

    bullet_section(&mut lines, "### Features", &features);
    bullet_section(&mut lines, "### Fixes", &fixes);
    bullet_section(&mut lines, "### Maintenance", &maintenance);
  }

  bullet_section(&mut lines, "## Impact", &a.impact);
  bullet_section(&mut lines, "## Risk & Notes", &a.risk_notes);

  if let Some(rollback) = &a.rollback {
    lines.push("## Rollback / Mitigation".into());
    lines.push(String::new());
    lines.push(rollback.clone());
    lines.push(String::new());
  }

  let links: Vec<String> = a
    .changes
    .iter()
    .map(|c| {
      format!(
        "[{}]({}) — {}",
        short_sha(&c.commit.sha, config.short_sha_len),
        c.commit.url,
        strip_prefix(c.message())
      )
    })
    .collect();
  bullet_section(&mut lines, "## Links", &links);

  lines.join("\n")
}

/// `<text> ([<short>](<url>)) - @<author>`
fn change_item(c: &ClassifiedCommit, text: String, config: &Config) -> String {
  format!(
    "{} ([{}]({})) - @{}",
    text,
    short_sha(&c.commit.sha, config.short_sha_len),
    c.commit.url,
    c.commit.author
  )
}

fn bullet_section(lines: &mut Vec<String>, heading: &str, items: &[String]) {
  if items.is_empty() {
    return;
  }
  lines.push(heading.to_string());
  lines.push(String::new());
  lines.extend(items.iter().map(|item| format!("- {}", item)));
  lines.push(String::new());
}
