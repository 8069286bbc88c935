//! Controlled vocabulary: verb classes and fixed sentences per locale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::ChangeCategory;

/// Output language for normalized messages and fixed sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
  #[default]
  #[serde(rename = "en")]
  English,
  #[serde(rename = "nb")]
  Norwegian,
}

impl Locale {
  pub fn code(self) -> &'static str {
    match self {
      Self::English => "en",
      Self::Norwegian => "nb",
    }
  }

  pub fn phrases(self) -> &'static Phrases {
    match self {
      Self::English => &ENGLISH,
      Self::Norwegian => &NORWEGIAN,
    }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

impl FromStr for Locale {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "en" | "english" => Ok(Self::English),
      "nb" | "no" | "norwegian" => Ok(Self::Norwegian),
      other => Err(format!("unknown locale '{}', expected en|nb", other)),
    }
  }
}

/// The five lexical classes a normalized message can start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbClass {
  Added,
  Fixed,
  Updated,
  Improved,
  Removed,
}

impl VerbClass {
  /// Map a leading action word (any case) to its class.
  pub fn from_action_word(word: &str) -> Option<Self> {
    match word.to_lowercase().as_str() {
      "add" | "implement" | "create" | "introduce" => Some(Self::Added),
      "fix" | "resolve" | "correct" | "patch" => Some(Self::Fixed),
      "update" | "upgrade" | "bump" => Some(Self::Updated),
      "improve" | "refactor" | "clean" => Some(Self::Improved),
      "remove" | "delete" => Some(Self::Removed),
      _ => None,
    }
  }

  /// Fallback when the message has no recognized action word.
  pub fn default_for(category: ChangeCategory) -> Self {
    match category {
      ChangeCategory::Features => Self::Added,
      ChangeCategory::Fixes => Self::Fixed,
      ChangeCategory::Chores => Self::Updated,
    }
  }
}

/// Singular and plural noun forms.
#[derive(Debug)]
pub struct Noun {
  pub one: &'static str,
  pub many: &'static str,
}

impl Noun {
  pub fn count(&self, n: usize) -> String {
    format!("{} {}", n, if n == 1 { self.one } else { self.many })
  }
}

/// Every fixed string the analyzer emits, for one locale.
#[derive(Debug)]
pub struct Phrases {
  pub added: &'static str,
  pub fixed: &'static str,
  pub updated: &'static str,
  pub improved: &'static str,
  pub removed: &'static str,
  pub feature: Noun,
  pub fix: Noun,
  pub chore: Noun,
  pub summary_lead: &'static str,
  pub and: &'static str,
  pub no_changes: &'static str,
  /// Feature impact predicate, singular/plural subject.
  pub feature_impact: Noun,
  pub fixes_impact: &'static str,
  pub risk_impact: &'static str,
  pub rollback_revert: &'static str,
  pub rollback_flag: &'static str,
  pub rollback_generic: &'static str,
}

impl Phrases {
  pub fn verb(&self, class: VerbClass) -> &'static str {
    match class {
      VerbClass::Added => self.added,
      VerbClass::Fixed => self.fixed,
      VerbClass::Updated => self.updated,
      VerbClass::Improved => self.improved,
      VerbClass::Removed => self.removed,
    }
  }
}

static ENGLISH: Phrases = Phrases {
  added: "Added",
  fixed: "Fixed",
  updated: "Updated",
  improved: "Improved",
  removed: "Removed",
  feature: Noun {
    one: "new feature",
    many: "new features",
  },
  fix: Noun {
    one: "bugfix",
    many: "bugfixes",
  },
  chore: Noun {
    one: "maintenance change",
    many: "maintenance changes",
  },
  summary_lead: "This release contains",
  and: "and",
  no_changes: "No changes in this release.",
  feature_impact: Noun {
    one: "new feature affects the user experience",
    many: "new features affect the user experience",
  },
  fixes_impact: "Bugfixes improve stability and reliability",
  risk_impact: "Changes with risk require extra attention during rollout",
  rollback_revert: "Revert the release",
  rollback_flag: "Disable the feature flag",
  rollback_generic: "Roll back the affected commits",
};

static NORWEGIAN: Phrases = Phrases {
  added: "Lagt til",
  fixed: "Rettet",
  updated: "Oppdatert",
  improved: "Forbedret",
  removed: "Fjernet",
  feature: Noun {
    one: "ny funksjon",
    many: "nye funksjoner",
  },
  fix: Noun {
    one: "feilretting",
    many: "feilrettinger",
  },
  chore: Noun {
    one: "vedlikeholdsendring",
    many: "vedlikeholdsendringer",
  },
  summary_lead: "Denne releasen inneholder",
  and: "og",
  no_changes: "Ingen endringer i denne releasen.",
  feature_impact: Noun {
    one: "ny funksjon påvirker brukeropplevelsen",
    many: "nye funksjoner påvirker brukeropplevelsen",
  },
  fixes_impact: "Feilrettinger forbedrer stabilitet og pålitelighet",
  risk_impact: "Endringer med risiko krever ekstra oppmerksomhet ved utrulling",
  rollback_revert: "Reverter release",
  rollback_flag: "Deaktiver feature flag",
  rollback_generic: "Rull tilbake berørte commits",
};
