//! Logging and input helpers for the CLI.

use std::path::{Path, PathBuf};

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

/// Configures the logger to write to `./logs/<file_name>.log`.
///
/// Messages at `Info` and above are kept, and `Debug` too when `verbose` is
/// set. Diagnostics from the file appender itself go to a sibling
/// `.err.log` file.
///
/// # Errors
///
/// - If a logs directory could not be located/created.
/// - If the logger could not be initialized.
pub fn configure_logger(file_name: &str, verbose: bool) -> Result<(LoggerGuard, PathBuf), String> {
    let logs_dir = PathBuf::from(".")
        .canonicalize()
        .map_err(|e| e.to_string())?
        .join("logs");
    if !logs_dir.exists() {
        std::fs::create_dir(&logs_dir).map_err(|e| e.to_string())?;
    }
    let log_path = logs_dir.join(format!("{file_name}.log"));
    let err_path = log_path.with_extension("err.log");

    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    let guard = ftlog::Builder::new()
        .max_log_level(level)
        .root(FileAppender::builder().path(&log_path).rotate(Period::Day).build())
        .filter("ftlog::appender", "appender-errors", LevelFilter::Debug)
        .appender("appender-errors", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, log_path))
}

/// Reads sequences from a text file with one sequence per line.
///
/// Blank lines and FASTA-style header lines (starting with `>`) are skipped,
/// and surrounding whitespace is trimmed.
///
/// # Errors
///
/// - If the file cannot be read.
pub fn read_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<String>, String> {
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| format!("Could not read {}: {e}", path.as_ref().display()))?;
    Ok(parse_sequences(&contents))
}

/// Splits the contents of a sequence file into sequences. See
/// [`read_sequences`].
fn parse_sequences(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('>'))
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_sequences;

    #[test]
    fn skips_headers_and_blanks() {
        let contents = ">seq1 some description\nACGT\n\n  GATTACA  \n>seq2\nNNN\n";
        assert_eq!(parse_sequences(contents), vec!["ACGT", "GATTACA", "NNN"]);
    }
}
