use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use uspop_bench::data::{load, LoadOutcome, Strategy};
use uspop_bench::timing::{as_micros_f64, timed};

/// Time reading the lat/long columns of a population CSV into arrays.
/// Prints the elapsed microseconds.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// CSV file: header line, then rows with latitude and longitude in
    /// fields 3 and 4.
    #[arg(short, long, default_value = "uspop.csv")]
    file: PathBuf,

    /// Parse path to measure.
    #[arg(short, long, value_enum, default_value_t = Strategy::Lines)]
    strategy: Strategy,

    /// Also print the latitude and longitude arrays.
    #[arg(long)]
    show: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    run(&args, &mut std::io::stdout().lock())
}

/// Load, time, and write the elapsed microseconds to `out`.
fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let (outcome, elapsed) = timed(|| load(&args.file, args.strategy));
    let outcome = outcome.with_context(|| format!("loading {}", args.file.display()))?;
    log::info!(
        "loaded {} rows from {} ({:?})",
        outcome.rows(),
        args.file.display(),
        args.strategy
    );

    writeln!(out, "{}", as_micros_f64(elapsed))?;

    if args.show {
        match &outcome {
            LoadOutcome::Coordinates(coords) => {
                writeln!(out, "{}", coords.lat)?;
                writeln!(out, "{}", coords.long)?;
            }
            LoadOutcome::Fields(rows) => log::warn!(
                "--show has no arrays to print for {} raw rows",
                rows.len()
            ),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn args_for(file: &std::path::Path, extra: &[&str]) -> Args {
        let mut argv = vec!["uspop-bench", "--file", file.to_str().unwrap()];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_match_fixed_invocation() {
        let args = Args::try_parse_from(["uspop-bench"]).unwrap();
        assert_eq!(args.file, PathBuf::from("uspop.csv"));
        assert_eq!(args.strategy, Strategy::Lines);
        assert!(!args.show);
    }

    #[test]
    fn test_prints_single_elapsed_value() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        write!(tmp, "id,name,state,lat,long\n1,A,CA,34.05,-118.25\n2,B,NY,40.71,-74.01\n")?;
        tmp.flush()?;

        let mut out = Vec::new();
        run(&args_for(tmp.path(), &[]), &mut out)?;

        let text = String::from_utf8(out)?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1);
        let micros: f64 = lines[0].parse()?;
        assert!(micros >= 0.0);
        Ok(())
    }

    #[test]
    fn test_show_adds_arrays() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        write!(tmp, "id,name,state,lat,long\n1,A,CA,34.05,-118.25\n")?;
        tmp.flush()?;

        let mut out = Vec::new();
        run(&args_for(tmp.path(), &["--show", "-s", "csv-records"]), &mut out)?;

        let text = String::from_utf8(out)?;
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("34.05"));
        assert!(text.contains("-118.25"));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_error_and_prints_nothing() {
        let args = args_for(std::path::Path::new("no/such/uspop.csv"), &[]);
        let mut out = Vec::new();

        let err = run(&args, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("no/such/uspop.csv"));
        assert!(out.is_empty());
    }
}
