//! Pipeline configuration with sane defaults.

use crate::vocabulary::Locale;

/// Tunables for highlight selection and rendering.
#[derive(Debug, Clone)]
pub struct Config {
  /// Max highlights surfaced at the top of the document.
  pub highlight_limit: usize,
  /// Characters of the commit hash shown in links.
  pub short_sha_len: usize,
  /// Vocabulary used for normalized messages and fixed sentences.
  pub locale: Locale,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      highlight_limit: 3,
      short_sha_len: 7,
      locale: Locale::English,
    }
  }
}
