//! Rewrite raw commit messages into the controlled vocabulary.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ChangeCategory;
use crate::vocabulary::{Locale, VerbClass};

/// Conventional-commit prefix plus trailing whitespace: `type:` or `type(scope)` with an
/// optional colon. Accepts every form `classify::category_of` recognizes.
static PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)^(feat|fix|chore|docs|refactor|test|style|perf|ci|build)(\([^)]*\):?|:)\s*")
    .expect("prefix pattern")
});

/// First word, only when more text follows it.
static LEADING_WORD_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(\w+)\s+").expect("leading word pattern"));

/// Drop a recognized prefix; keep the message as-is if nothing would remain.
pub fn strip_prefix(message: &str) -> &str {
  match PREFIX_RE.find(message) {
    Some(m) if m.end() < message.len() => &message[m.end()..],
    _ => message,
  }
}

/// Normalize a message to `<verb> <rest>`.
///
/// - Strips the conventional-commit prefix.
/// - Consumes a leading action word (add, fix, bump, ...) and uses its verb class,
///   otherwise the category default.
/// - Never emits an empty body: falls back to the prefix-stripped, then raw message.
/// - Lowercases the first letter unless the first word is an acronym.
pub fn normalize(message: &str, category: ChangeCategory, locale: Locale) -> String {
  let stripped = PREFIX_RE.replace(message, "");
  let mut verb = VerbClass::default_for(category);
  let mut rest: &str = &stripped;

  if let Some(caps) = LEADING_WORD_RE.captures(rest) {
    if let Some(class) = VerbClass::from_action_word(&caps[1]) {
      verb = class;
      rest = &rest[caps[0].len()..];
    }
  }

  if rest.trim().is_empty() {
    rest = &stripped;
    if rest.trim().is_empty() {
      rest = message;
    }
  }

  format!("{} {}", locale.phrases().verb(verb), lower_first(rest))
}

fn is_acronym(word: &str) -> bool {
  word.chars().count() > 1 && word == word.to_uppercase()
}

fn lower_first(text: &str) -> String {
  let first_word = text.split(char::is_whitespace).next().unwrap_or("");
  if is_acronym(first_word) {
    return text.to_string();
  }
  let mut chars = text.chars();
  match chars.next() {
    Some(c) => c.to_lowercase().chain(chars).collect(),
    None => String::new(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn en(message: &str, category: ChangeCategory) -> String {
    normalize(message, category, Locale::English)
  }

  #[test]
  fn strip_prefix_basics() {
    assert_eq!(strip_prefix("feat: add login"), "add login");
    assert_eq!(strip_prefix("FIX(auth):   token expiry"), "token expiry");
    assert_eq!(strip_prefix("no prefix here"), "no prefix here");
    assert_eq!(strip_prefix("feat:"), "feat:");
    assert_eq!(strip_prefix("feature: nope"), "feature: nope");
  }

  #[test]
  fn scope_without_colon_is_stripped() {
    assert_eq!(strip_prefix("fix(auth) token refresh broken"), "token refresh broken");
    assert_eq!(strip_prefix("Feat(ui)dark mode"), "dark mode");
    assert_eq!(
      en("fix(auth) token refresh broken", ChangeCategory::Fixes),
      "Fixed token refresh broken"
    );
    assert_eq!(en("chore(deps) bump serde", ChangeCategory::Chores), "Updated serde");
  }

  #[test]
  fn action_word_is_consumed() {
    assert_eq!(en("feat: add login", ChangeCategory::Features), "Added login");
    assert_eq!(en("fix: resolve race in cache", ChangeCategory::Fixes), "Fixed race in cache");
    assert_eq!(en("chore: bump deps", ChangeCategory::Chores), "Updated deps");
    assert_eq!(en("refactor: clean parser internals", ChangeCategory::Chores), "Improved parser internals");
    assert_eq!(en("chore: remove dead code", ChangeCategory::Chores), "Removed dead code");
  }

  #[test]
  fn category_default_verb_without_action_word() {
    assert_eq!(en("fix: null pointer", ChangeCategory::Fixes), "Fixed null pointer");
    assert_eq!(en("feat: Dark mode", ChangeCategory::Features), "Added dark mode");
    assert_eq!(en("docs: readme tweaks", ChangeCategory::Chores), "Updated readme tweaks");
  }

  #[test]
  fn acronym_keeps_case() {
    assert_eq!(en("feat: API pagination", ChangeCategory::Features), "Added API pagination");
    assert_eq!(en("feat: add JWT refresh", ChangeCategory::Features), "Added JWT refresh");
    assert_eq!(en("feat: A thing", ChangeCategory::Features), "Added a thing");
  }

  #[test]
  fn empty_remainder_falls_back() {
    assert_eq!(en("feat:", ChangeCategory::Features), "Added feat:");
    assert_eq!(en("fix:   ", ChangeCategory::Fixes), "Fixed fix:   ");
    assert_eq!(en("", ChangeCategory::Chores), "Updated ");
  }

  #[test]
  fn single_action_word_is_not_consumed() {
    assert_eq!(en("chore: cleanup", ChangeCategory::Chores), "Updated cleanup");
    assert_eq!(en("fix: patch", ChangeCategory::Fixes), "Fixed patch");
  }

  #[test]
  fn norwegian_vocabulary() {
    assert_eq!(
      normalize("feat: add user authentication", ChangeCategory::Features, Locale::Norwegian),
      "Lagt til user authentication"
    );
    assert_eq!(
      normalize("fix: null pointer", ChangeCategory::Fixes, Locale::Norwegian),
      "Rettet null pointer"
    );
  }
}
