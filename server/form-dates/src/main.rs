//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is a form document. Each output line is either:
//! - A DateOutput (the extracted date, possibly marked invalid)
//! - An ErrorOutput (when the line is not a decodable document)

use form_dates::types::ErrorOutput;
use form_dates::{Config, Extractor, FormDateError};
use std::io::{self, BufRead, Write};

fn main() {
  let config = match Config::from_env() {
    Ok(c) => c,
    Err(e) => {
      let _ = writeln!(io::stderr(), "form-dates: {}", e);
      std::process::exit(2);
    }
  };
  let extractor = Extractor::new(config);

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "form-dates: {}", FormDateError::from(e));
        let _ = out.flush();
        std::process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let written = match extractor.process_line(trimmed) {
      Ok(output) => serde_json::to_writer(&mut out, &output),
      Err(e) => serde_json::to_writer(&mut out, &ErrorOutput::new(e.to_string())),
    };
    if let Err(e) = written {
      let _ = writeln!(io::stderr(), "form-dates: write error: {}", e);
      std::process::exit(1);
    }
    let _ = writeln!(out);
  }

  let _ = out.flush();
}
