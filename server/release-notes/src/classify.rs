//! Change category and risk keywords derived from the commit message.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{ChangeCategory, ClassifiedCommit, Commit, RiskKeyword};

/// Conventional-commit prefixes, tested in this order.
pub const CATEGORY_PREFIXES: [(&str, ChangeCategory); 10] = [
  ("feat", ChangeCategory::Features),
  ("fix", ChangeCategory::Fixes),
  ("chore", ChangeCategory::Chores),
  ("docs", ChangeCategory::Chores),
  ("refactor", ChangeCategory::Chores),
  ("test", ChangeCategory::Chores),
  ("style", ChangeCategory::Chores),
  ("perf", ChangeCategory::Features),
  ("ci", ChangeCategory::Chores),
  ("build", ChangeCategory::Chores),
];

static RISK_PATTERNS: LazyLock<Vec<(RiskKeyword, Regex)>> = LazyLock::new(|| {
  RiskKeyword::ALL
    .iter()
    .map(|&kw| {
      let re = Regex::new(&format!(r"\b{}\b", kw.as_str())).expect("risk keyword pattern");
      (kw, re)
    })
    .collect()
});

/// Category from a `prefix:` or `prefix(` at the very start (any case); `Chores` otherwise.
pub fn category_of(message: &str) -> ChangeCategory {
  let msg = message.to_lowercase();
  CATEGORY_PREFIXES
    .iter()
    .find(|(prefix, _)| {
      msg
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with(':') || rest.starts_with('('))
    })
    .map(|&(_, category)| category)
    .unwrap_or(ChangeCategory::Chores)
}

/// Risk keywords present as whole words, in `RiskKeyword::ALL` order.
pub fn risk_keywords(message: &str) -> Vec<RiskKeyword> {
  let msg = message.to_lowercase();
  RISK_PATTERNS
    .iter()
    .filter(|(_, re)| re.is_match(&msg))
    .map(|&(kw, _)| kw)
    .collect()
}

/// Classify one commit. Total: every message yields a category.
pub fn classify(commit: &Commit) -> ClassifiedCommit {
  let category = category_of(&commit.message);
  let risk_keywords = risk_keywords(&commit.message);
  // Fixes only surface as highlights when they carry risk.
  let is_highlight = match category {
    ChangeCategory::Features => true,
    ChangeCategory::Fixes => !risk_keywords.is_empty(),
    ChangeCategory::Chores => false,
  };

  ClassifiedCommit {
    commit: commit.clone(),
    category,
    is_highlight,
    risk_keywords,
  }
}

pub fn classify_all(commits: &[Commit]) -> Vec<ClassifiedCommit> {
  commits.iter().map(classify).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn commit(message: &str) -> Commit {
    Commit {
      sha: "abc1234def".into(),
      message: message.into(),
      author: "dev".into(),
      url: "https://github.com/acme/app/commit/abc1234def".into(),
    }
  }

  #[test]
  fn prefixes_map_to_categories() {
    assert_eq!(category_of("feat: add login"), ChangeCategory::Features);
    assert_eq!(category_of("perf: faster parse"), ChangeCategory::Features);
    assert_eq!(category_of("fix(auth): token expiry"), ChangeCategory::Fixes);
    assert_eq!(category_of("docs: update readme"), ChangeCategory::Chores);
    assert_eq!(category_of("ci: cache deps"), ChangeCategory::Chores);
  }

  #[test]
  fn prefix_match_is_case_insensitive() {
    assert_eq!(category_of("FEAT: shout"), ChangeCategory::Features);
    assert_eq!(category_of("Fix(Api): thing"), ChangeCategory::Fixes);
  }

  #[test]
  fn prefix_must_be_followed_by_colon_or_paren() {
    assert_eq!(category_of("feature: not a prefix"), ChangeCategory::Chores);
    assert_eq!(category_of("fix the build"), ChangeCategory::Chores);
    assert_eq!(category_of(" feat: leading space"), ChangeCategory::Chores);
    assert_eq!(category_of("random message"), ChangeCategory::Chores);
    assert_eq!(category_of(""), ChangeCategory::Chores);
  }

  #[test]
  fn risk_keywords_follow_table_order() {
    let kws = risk_keywords("fix: breaking change in auth flow, requires migration");
    assert_eq!(
      kws,
      vec![RiskKeyword::Breaking, RiskKeyword::Migration, RiskKeyword::Auth]
    );
  }

  #[test]
  fn risk_keywords_require_word_boundaries() {
    assert!(risk_keywords("chore: tune database pool").is_empty());
    assert!(risk_keywords("docs: credit the author").is_empty());
    assert!(risk_keywords("feat: add oauth login").is_empty());
    assert!(risk_keywords("feat: paymentservice rewrite").is_empty());
    assert_eq!(risk_keywords("fix: DB timeout"), vec![RiskKeyword::Db]);
    assert_eq!(risk_keywords("feat(pii): mask emails"), vec![RiskKeyword::Pii]);
  }

  #[test]
  fn risk_keyword_reported_once() {
    assert_eq!(
      risk_keywords("security: security security"),
      vec![RiskKeyword::Security]
    );
  }

  #[test]
  fn highlight_rule() {
    assert!(classify(&commit("feat: add dashboard")).is_highlight);
    assert!(!classify(&commit("fix: null pointer")).is_highlight);
    assert!(classify(&commit("fix: payment rounding")).is_highlight);
    assert!(!classify(&commit("chore: breaking cleanup")).is_highlight);
  }

  #[test]
  fn classify_keeps_commit_intact() {
    let c = commit("fix: breaking change in auth flow, requires migration");
    let classified = classify(&c);
    assert_eq!(classified.commit, c);
    assert_eq!(classified.category, ChangeCategory::Fixes);
    assert!(classified.is_highlight);
  }
}
