//! CSV export for simulation results
//!
//! Writes the time grid and every compartment column to a CSV file that
//! loads directly into Excel, pandas, or gnuplot.
//!
//! # Output Format
//!
//! ```csv
//! Time,Susceptible,Infected,Recovered
//! 0.000000,1000.000000,1.000000,0.000000
//! 0.010000,999.980000,1.015000,0.005000
//! ...
//! ```
//!
//! With `include_metadata` enabled, `#`-prefixed header lines carry the
//! solver diagnostics stored on the solution.

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::solver::Solution;

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for CSV export
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column separator (default: `,`)
    pub delimiter: char,

    /// Decimal places for every value (default: 6)
    pub precision: usize,

    /// Emit `#`-prefixed metadata lines before the header (default: false)
    pub include_metadata: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
        }
    }
}

// =================================================================================================
// Export
// =================================================================================================

/// Export a solution as CSV: one time column plus one column per compartment
///
/// # Arguments
///
/// * `solution` - Completed integration result
/// * `labels` - Column headers, one per compartment
/// * `path` - Output file path
/// * `config` - Optional formatting, defaults used when `None`
///
/// # Errors
///
/// Returns an error when the label count does not match the solution
/// dimension or on any I/O failure.
pub fn export_trajectory_csv(
    solution: &Solution,
    labels: &[&str],
    path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = CsvConfig::default();
    let config = config.unwrap_or(&default_config);

    if labels.len() != solution.dimension() {
        return Err(format!(
            "got {} labels for {} compartments",
            labels.len(),
            solution.dimension()
        )
        .into());
    }

    let mut writer = BufWriter::new(File::create(path)?);

    // ====== Metadata lines ======

    if config.include_metadata {
        writeln!(writer, "# Epidemic Simulation Data")?;

        let mut keys: Vec<_> = solution.metadata.keys().collect();
        keys.sort();
        for key in keys {
            writeln!(writer, "# {}: {}", key, solution.metadata[key])?;
        }
        writeln!(writer, "#")?;
    }

    // ====== Header ======

    write!(writer, "Time")?;
    for label in labels {
        write!(writer, "{}{}", config.delimiter, label)?;
    }
    writeln!(writer)?;

    // ====== Data rows ======

    for (i, t) in solution.times.iter().enumerate() {
        write!(writer, "{:.prec$}", t, prec = config.precision)?;
        for j in 0..solution.dimension() {
            write!(
                writer,
                "{}{:.prec$}",
                config.delimiter,
                solution.trajectory[(i, j)],
                prec = config.precision
            )?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
