use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use swizzle_permutation::{emit_table, manifest, ComponentSymbolSet};
use tracing_subscriber::FmtSubscriber;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `#ifdef` guarded macro invocations.
    Macros,
    /// The same table as JSON.
    Json,
}

/// Prints every vector swizzle permutation as preprocessor macro invocations.
#[derive(Parser)]
#[command(name = "swizzle-permutation")]
struct Opt {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Macros)]
    format: Format,

    /// Four component symbols, e.g. `xyzw`. Repeatable; replaces the default
    /// `xyzw` and `rgba` sets.
    #[arg(long = "symbols", value_name = "SET", value_parser = parse_symbols)]
    symbols: Vec<ComponentSymbolSet>,
}

fn parse_symbols(s: &str) -> Result<ComponentSymbolSet, swizzle_permutation::SymbolSetError> {
    s.parse()
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set global subscriber")?;

    let opt = Opt::parse();

    let sets = if opt.symbols.is_empty() {
        ComponentSymbolSet::CANONICAL.to_vec()
    } else {
        opt.symbols
    };
    tracing::debug!(?sets, format = ?opt.format, "generating");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match opt.format {
        Format::Macros => emit_table(&sets, &mut out),
        Format::Json => writeln!(out, "{}", manifest(&sets).pretty(4)),
    }
    .context("failed to write swizzle table")?;

    out.flush().context("failed to flush stdout")?;

    Ok(())
}
