//! rowfilter - filter delimited text rows with a WHERE clause

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use rowfilter::access::Row;
use rowfilter::expression::Clause;
use rowfilter::sql::parse_where;
use rowfilter::table::Table;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Print the rows of a delimited text table that satisfy a WHERE clause
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file; reads stdin when omitted
    input: Option<PathBuf>,

    /// WHERE clause, e.g. `age > 60 OR company = "IBX"`
    #[arg(short, long = "where")]
    where_clause: String,

    /// Field delimiter
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Print which conditions each row visited to stderr
    #[arg(long)]
    trace: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let clause = parse_where(&args.where_clause).context("Invalid WHERE clause")?;
    log::debug!("Parsed clause: {}", clause);

    let table = match &args.input {
        Some(path) => Table::open(path, args.delimiter)?,
        None => Table::from_reader(io::stdin().lock(), args.delimiter)
            .context("Failed to load table from stdin")?,
    };

    let matched = if args.trace {
        trace_rows(&table, &clause, &mut io::stderr().lock())?
    } else {
        table.filter(&clause)?
    };

    let mut out = BufWriter::new(io::stdout().lock());
    write_rows(&mut out, table.header().columns(), &matched)?;
    out.flush()?;

    Ok(())
}

/// Evaluate every row once, writing its visited conditions to `sink`.
///
/// Returns the rows that matched, in table order.
fn trace_rows<'a, W: Write>(
    table: &'a Table,
    clause: &Clause,
    sink: &mut W,
) -> Result<Vec<&'a Row>> {
    let mut matched = Vec::new();
    for (i, row) in table.rows().iter().enumerate() {
        let trace = clause.trace(table.header(), row)?;
        let visited: Vec<String> = trace
            .visited
            .iter()
            .map(|(index, result)| format!("#{}={}", index, result))
            .collect();
        writeln!(sink, "row {}: {} [{}]", i, trace.result, visited.join(" "))?;
        if trace.result {
            matched.push(row);
        }
    }
    Ok(matched)
}

/// Write a header line, a separator, then tab-separated rows
fn write_rows<W: Write>(out: &mut W, columns: &[String], rows: &[&Row]) -> io::Result<()> {
    writeln!(out, "{}", columns.join("\t"))?;
    writeln!(out, "{}", "---------+".repeat(columns.len()))?;
    for row in rows {
        writeln!(out, "{}", row.fields().join("\t"))?;
    }
    Ok(())
}
