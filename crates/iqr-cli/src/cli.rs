//! Command-line arguments and the scan pipeline they drive.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use iqr::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Flag IQR outliers in a CSV or JSON table.
#[derive(Parser, Debug)]
#[command(name = "iqr-scan", version, about)]
pub struct Cli {
    /// Input file (CSV or JSON)
    pub path: PathBuf,

    /// Column to scan; repeat for several. Defaults to every numeric column
    #[arg(short = 'c', long = "column")]
    pub columns: Vec<String>,

    /// Fence multiplier k in [Q1 - k*IQR, Q3 + k*IQR]
    #[arg(short = 'k', long, default_value_t = 1.5)]
    pub multiplier: f64,

    /// Quantile estimation rule
    #[arg(long, value_enum, default_value_t = Method::Linear)]
    pub method: Method,

    /// Fail when a scanned column has missing values instead of skipping them
    #[arg(long)]
    pub strict_missing: bool,

    /// Input format; `auto` picks JSON for `.json` files and CSV otherwise
    #[arg(long, value_enum, default_value_t = Format::Auto)]
    pub format: Format,

    /// CSV field delimiter
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Treat the first CSV record as data
    #[arg(long)]
    pub no_headers: bool,

    /// Print descriptive statistics for every column
    #[arg(long)]
    pub describe: bool,

    /// Print the correlation matrix of numeric columns
    #[arg(long)]
    pub correlation: bool,

    /// Print the outlying rows of each scanned column
    #[arg(long)]
    pub rows: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Linear,
    Lower,
    Higher,
    Nearest,
    Midpoint,
}

impl From<Method> for QuantileMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Linear => Linear,
            Method::Lower => Lower,
            Method::Higher => Higher,
            Method::Nearest => Nearest,
            Method::Midpoint => Midpoint,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Auto,
    Csv,
    Json,
}

impl Format {
    /// Resolve `Auto` from the file extension.
    pub fn resolve(self, path: &Path) -> Format {
        match self {
            Format::Auto => match path.extension().and_then(|e| e.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
                _ => Format::Csv,
            },
            other => other,
        }
    }
}

#[derive(Serialize)]
struct Output<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a TableSummary<f64>>,
    report: &'a ScanReport<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation: Option<&'a CorrelationMatrix<f64>>,
}

impl Cli {
    fn load(&self) -> Result<Table<f64>> {
        let table: Result<Table<f64>, IqrError> = match self.format.resolve(&self.path) {
            Format::Json => JsonLoader::new().load_path(&self.path),
            _ => {
                if !self.delimiter.is_ascii() {
                    bail!("delimiter must be a single ASCII character");
                }
                CsvLoader::new()
                    .delimiter(self.delimiter as u8)
                    .has_headers(!self.no_headers)
                    .load_path(&self.path)
            }
        };
        table.with_context(|| format!("failed to load {}", self.path.display()))
    }

    fn scanner(&self) -> Result<OutlierScanner<f64>> {
        let policy = if self.strict_missing { Reject } else { Skip };
        Iqr::new()
            .multiplier(self.multiplier)
            .quantile_method(self.method.into())
            .missing_policy(policy)
            .build()
            .context("invalid scanner configuration")
    }

    fn scan(&self, scanner: &OutlierScanner<f64>, table: &Table<f64>) -> Result<ScanReport<f64>> {
        if self.columns.is_empty() {
            return scanner.scan_all(table).context("scan failed");
        }
        let results = self
            .columns
            .iter()
            .map(|c| {
                scanner
                    .scan(table, c)
                    .with_context(|| format!("scan of column '{c}' failed"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ScanReport {
            n_rows: table.n_rows(),
            results,
            skipped: Vec::new(),
        })
    }

    /// Load, analyse and print.
    pub fn run(&self) -> Result<()> {
        let table = self.load()?;
        info!(
            path = %self.path.display(),
            rows = table.n_rows(),
            columns = table.n_cols(),
            "table loaded"
        );

        let scanner = self.scanner()?;
        let report = self.scan(&scanner, &table)?;
        let summary = if self.describe {
            Some(describe(&table).context("describe failed")?)
        } else {
            None
        };
        let correlation = if self.correlation {
            Some(correlation(&table).context("correlation failed")?)
        } else {
            None
        };

        if self.json {
            let output = Output {
                summary: summary.as_ref(),
                report: &report,
                correlation: correlation.as_ref(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        if let Some(summary) = &summary {
            println!("{summary}");
        }
        println!("{report}");
        if self.rows {
            for result in report.results.iter().filter(|r| !r.is_empty()) {
                println!("{result}");
                print_rows(&result.rows);
            }
        }
        if let Some(correlation) = &correlation {
            println!("{correlation}");
        }
        Ok(())
    }
}

fn print_rows(rows: &Table<f64>) {
    let header: Vec<&str> = rows.column_names().collect();
    println!("{}", header.join("\t"));
    for row in rows.rows() {
        let cells: Vec<String> = row.cells().map(|(_, cell)| cell.to_string()).collect();
        println!("{}", cells.join("\t"));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["iqr-scan", "data.csv"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("data.csv"));
        assert!(cli.columns.is_empty());
        assert_eq!(cli.multiplier, 1.5);
        assert_eq!(cli.method, Method::Linear);
        assert_eq!(cli.delimiter, ',');
        assert!(!cli.strict_missing && !cli.json && !cli.no_headers);
    }

    #[test]
    fn parses_repeated_columns_and_options() {
        let cli = Cli::try_parse_from([
            "iqr-scan", "data.tsv", "-c", "price", "--column", "qty", "-k", "3", "--method",
            "nearest", "--delimiter", "\t", "--strict-missing", "--json",
        ])
        .unwrap();
        assert_eq!(cli.columns, vec!["price", "qty"]);
        assert_eq!(cli.multiplier, 3.0);
        assert_eq!(QuantileMethod::from(cli.method), QuantileMethod::Nearest);
        assert_eq!(cli.delimiter, '\t');
        assert!(cli.strict_missing && cli.json);
    }

    #[test]
    fn resolves_format_from_extension() {
        assert_eq!(Format::Auto.resolve(Path::new("a.JSON")), Format::Json);
        assert_eq!(Format::Auto.resolve(Path::new("a.csv")), Format::Csv);
        assert_eq!(Format::Auto.resolve(Path::new("a")), Format::Csv);
        assert_eq!(Format::Json.resolve(Path::new("a.csv")), Format::Json);
    }

    #[test]
    fn rejects_missing_path() {
        assert!(Cli::try_parse_from(["iqr-scan"]).is_err());
    }
}
