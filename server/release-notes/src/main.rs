//! Binary entrypoint: read one JSON run request, write one JSON run response.
//!
//! The response is a RunResponse: `status: "ok"` with the structured output and
//! artifacts, or `status: "error"` with a message (exit code 1).

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::Parser;

use release_notes::types::RunResponse;
use release_notes::{Config, Locale, Pipeline};

/// Generate release notes from a commit list.
#[derive(Parser, Debug)]
#[command(name = "release-notes", version, about)]
struct Args {
  /// Request file (JSON). Reads stdin when omitted.
  #[arg(long)]
  input: Option<PathBuf>,

  /// Output vocabulary: en | nb.
  #[arg(long, env = "RELEASE_NOTES_LOCALE", default_value = "en")]
  locale: Locale,

  /// Generation date (YYYY-MM-DD). Defaults to today (UTC).
  #[arg(long, env = "RELEASE_NOTES_DATE")]
  date: Option<NaiveDate>,

  /// Pretty-print the JSON response.
  #[arg(long)]
  pretty: bool,

  /// Print only the rendered Markdown document.
  #[arg(long)]
  markdown: bool,
}

fn main() {
  // Logs go to stderr so stdout stays machine-readable.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
    )
    .init();

  let args = Args::parse();
  match run_binary(&args) {
    Ok(true) => {}
    Ok(false) => std::process::exit(1),
    Err(e) => {
      let _ = writeln!(io::stderr(), "release-notes error: {}", e);
      std::process::exit(1);
    }
  }
}

/// Returns whether the pipeline succeeded; `Err` only for I/O failures.
fn run_binary(args: &Args) -> Result<bool, Box<dyn std::error::Error>> {
  let raw = match &args.input {
    Some(path) => fs::read_to_string(path)?,
    None => {
      let mut buf = String::new();
      io::stdin().lock().read_to_string(&mut buf)?;
      buf
    }
  };

  let pipeline = Pipeline::new(Config {
    locale: args.locale,
    ..Config::default()
  });
  let date = args.date.unwrap_or_else(|| Utc::now().date_naive());

  let (response, ok) = match pipeline.run_json(&raw, date) {
    Ok(out) => {
      if args.markdown {
        let mut stdout = io::stdout().lock();
        for artifact in &out.artifacts {
          writeln!(stdout, "{}", artifact.content)?;
        }
        return Ok(true);
      }
      (RunResponse::ok(out), true)
    }
    Err(e) => {
      let mut response = RunResponse::error(e.to_string());
      if let Some(field) = e.field() {
        response = response.with_field(field);
      }
      (response, false)
    }
  };

  let json = if args.pretty {
    serde_json::to_vec_pretty(&response)?
  } else {
    serde_json::to_vec(&response)?
  };
  let mut stdout = io::stdout().lock();
  stdout.write_all(&json)?;
  writeln!(stdout)?;
  Ok(ok)
}
