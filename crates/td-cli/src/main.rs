//! `td` — one-shot transit directory query tool.
//!
//! Reads a single JSON request document from stdin, writes the reply array
//! to stdout, and exits 0.  Diagnostics (malformed input, inconsistent
//! network) go to stderr with a non-zero exit via `anyhow`.
//!
//! ```sh
//! td < requests.json > replies.json
//! ```

use std::io::{self, Read, Write};

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading request document from stdin")?;

    let reply = td_json::process_document(&input)
        .context("processing request document")?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(reply.as_bytes())?;
    writeln!(stdout)?;
    Ok(())
}
