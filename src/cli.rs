use crate::config::{parse_code, parse_record, Options};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// zipcensus - postal-code census lookup behind an opaque handle
#[derive(Parser, Debug, Default)]
#[command(name = "zipcensus")]
#[command(version = "0.3.0")]
#[command(about = "Census lookup demo backed by the zipcensus library", long_about = None)]
pub struct Cli {
    /// Record file with `code = count` lines, merged after the seed batch
    #[arg(short, long, value_name = "FILE")]
    pub records: Option<String>,

    /// Insert a record after populating (can be specified multiple times)
    #[arg(long = "set", value_name = "CODE=COUNT")]
    pub set: Vec<String>,

    /// Postal code to query (can be specified multiple times)
    #[arg(short, long, value_name = "CODE")]
    pub query: Vec<String>,

    /// Also run the boundary helper demos
    #[arg(long)]
    pub demo: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge CLI arguments into the options struct
    pub fn merge_into_options(&self, mut opts: Options) -> Result<Options> {
        if let Some(ref records) = self.records {
            opts.records_file = Some(PathBuf::from(records));
        }

        for record in &self.set {
            opts.sets.push(parse_record(record)?);
        }

        for code in &self.query {
            opts.codes.push(parse_code(code)?);
        }

        if self.demo {
            opts.demo = true;
        }

        if self.verbose {
            opts.verbose = true;
        }

        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_basic_options() {
        let cli = Cli {
            records: Some("records.txt".to_string()),
            query: vec!["10186".to_string()],
            verbose: true,
            ..Default::default()
        };

        let opts = cli.merge_into_options(Options::default()).unwrap();
        assert_eq!(opts.records_file, Some(PathBuf::from("records.txt")));
        assert_eq!(opts.codes, vec!["10186".to_string()]);
        assert!(opts.verbose);
        assert!(!opts.demo);
    }

    #[test]
    fn test_merge_set_records() {
        let cli = Cli {
            set: vec!["90210=21741".to_string()],
            ..Default::default()
        };

        let opts = cli.merge_into_options(Options::default()).unwrap();
        assert_eq!(opts.sets, vec![("90210".to_string(), 21_741)]);
    }

    #[test]
    fn test_merge_invalid_query_code() {
        let cli = Cli {
            query: vec!["not a code".to_string()],
            ..Default::default()
        };

        assert!(cli.merge_into_options(Options::default()).is_err());
    }

    #[test]
    fn test_merge_invalid_set_record() {
        let cli = Cli {
            set: vec!["90210".to_string()],
            ..Default::default()
        };

        assert!(cli.merge_into_options(Options::default()).is_err());
    }

    #[test]
    fn test_parse_from_args() {
        let cli = Cli::try_parse_from([
            "zipcensus",
            "--query",
            "10186",
            "--query",
            "10852",
            "--demo",
        ])
        .unwrap();

        assert_eq!(cli.query.len(), 2);
        assert!(cli.demo);
        assert!(cli.records.is_none());
    }
}
