//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Download Kattis problems: print their metadata and optionally write
/// sample data and an empty solution stub to disk.
#[derive(Parser, Debug)]
#[command(name = "kattis-download")]
#[command(author, version, about)]
pub struct Args {
    /// Problem ID(s) on open.kattis.com
    #[arg(value_name = "PROBLEM_ID")]
    pub problems: Vec<String>,

    /// Write sample data to a directory with the same name as the problem
    #[arg(short = 'w')]
    pub write: bool,

    /// Create an empty code file of the given language with the same name
    /// as the problem (only has an effect together with -w)
    #[arg(short = 'l', long, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Print all extracted records as JSON once the run finishes
    #[arg(long)]
    pub json: bool,

    /// Parent directory for the per-problem directories
    #[arg(short = 'o', long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_problem_ids() {
        let args = Args::try_parse_from(["kattis-download", "hello", "differenceengine"]).unwrap();
        assert_eq!(args.problems, ["hello", "differenceengine"]);
        assert!(!args.write);
        assert_eq!(args.language, None);
    }

    #[test]
    fn no_arguments_parses_to_empty_id_list() {
        let args = Args::try_parse_from(["kattis-download"]).unwrap();
        assert!(args.problems.is_empty());
    }

    #[test]
    fn write_and_language_flags() {
        let args =
            Args::try_parse_from(["kattis-download", "hello", "-w", "-l", "python"]).unwrap();
        assert!(args.write);
        assert_eq!(args.language.as_deref(), Some("python"));

        let args =
            Args::try_parse_from(["kattis-download", "hello", "-w", "--language", "c++"]).unwrap();
        assert_eq!(args.language.as_deref(), Some("c++"));
    }

    #[test]
    fn out_dir_defaults_to_current_directory() {
        let args = Args::try_parse_from(["kattis-download", "hello"]).unwrap();
        assert_eq!(args.out_dir, PathBuf::from("."));

        let args = Args::try_parse_from(["kattis-download", "hello", "-o", "work"]).unwrap();
        assert_eq!(args.out_dir, PathBuf::from("work"));
    }

    #[test]
    fn verbose_flag_counts_repetitions() {
        let args = Args::try_parse_from(["kattis-download", "hello", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        let result = Args::try_parse_from(["kattis-download", "hello", "--frobnicate"]);
        assert!(result.is_err());
    }
}
