//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::Path;

use crate::KindIdentifier;
use crate::codec::{SymbolDecoder, SymbolEncoder};
use crate::symbol::Symbol;

use super::{CliError, CliResult, ExitCode};

/// Read and decode a symbol file with the built-in mixins.
fn load_symbol(path: &Path) -> CliResult<Symbol> {
    let bytes = fs::read(path).map_err(|e| CliError::failure(format!("Error reading {}: {}", path.display(), e)))?;
    SymbolDecoder::new()
        .decode(&bytes)
        .map_err(|e| CliError::failure(format!("Error decoding {}: {}", path.display(), e)))
}

/// Decode a symbol document and print a short summary.
pub fn check_file(path: &Path) -> CliResult<ExitCode> {
    let symbol = load_symbol(path)?;
    println!("{}", summarize(&symbol));
    Ok(ExitCode::SUCCESS)
}

/// Decode then re-encode a symbol to stdout.
pub fn normalize_file(path: &Path, pretty: bool) -> CliResult<ExitCode> {
    let symbol = load_symbol(path)?;
    let mut output = SymbolEncoder::new()
        .with_pretty(pretty)
        .encode(&symbol)
        .map_err(|e| CliError::failure(format!("Error encoding {}: {}", path.display(), e)))?;
    output.push(b'\n');

    std::io::stdout()
        .write_all(&output)
        .map_err(|e| CliError::failure(format!("Error writing output: {}", e)))?;
    Ok(ExitCode::SUCCESS)
}

/// Print how each token normalizes.
pub fn describe_kinds(tokens: &[String]) -> ExitCode {
    for token in tokens {
        println!("{}", describe_kind(token));
    }
    ExitCode::SUCCESS
}

fn describe_kind(token: &str) -> String {
    let kind = KindIdentifier::parse(token);
    match kind.default_display_name() {
        Some(display_name) => format!("{token} -> {kind} ({display_name})"),
        None => format!("{token} -> {kind} (custom)"),
    }
}

fn summarize(symbol: &Symbol) -> String {
    let mut out = String::new();
    // Writing to String cannot fail.
    let _ = writeln!(out, "{} {}", symbol.kind.identifier, symbol.absolute_path());
    let _ = writeln!(out, "  precise: {}", symbol.identifier.precise);
    let _ = writeln!(out, "  access: {}", symbol.access_level);
    if let Some(from_same_module) = symbol.is_doc_comment_from_same_module() {
        let origin = if from_same_module { "local" } else { "inherited" };
        let _ = writeln!(out, "  docs: {origin}");
    }
    let keys: Vec<&str> = symbol.mixin_keys().collect();
    if keys.is_empty() {
        let _ = write!(out, "  mixins: (none)");
    } else {
        let _ = write!(out, "  mixins: {}", keys.join(", "));
    }
    out
}
