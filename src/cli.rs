//! CLI argument parsing for docdate
//!
//! Defines the Command enum and parse_args().

use anyhow::Result;
use docdate::{Backend, OutputFormat, RepositoryHandle};

pub fn print_usage() {
    eprintln!("docdate - LaTeX \\date{{}} line from git history");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  docdate [--repo <DIR>] [--backend <git|libgit2>] [--utc] [--output <FORMAT>]");
    eprintln!("  docdate --help");
    eprintln!("  docdate --version");
    eprintln!();
    eprintln!("Prints \\date{{<Month> <DD>, <YYYY> (<version>)}} where <version> is the");
    eprintln!("`git describe` string, or the 10-character short id when describe fails.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  --repo <DIR>        Repository working directory (default: .)");
    eprintln!("  --backend <NAME>    git (run the git binary, default) or libgit2");
    eprintln!("  --utc               Format the commit date in UTC instead of local time");
    eprintln!("  --output <FORMAT>   Output format: human (default) or json");
    eprintln!();
    eprintln!("Logging:");
    eprintln!("  RUST_LOG=debug      Show each repository query on stderr");
}

/// Resolved invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Run(RunOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunOptions {
    pub repo: RepositoryHandle,
    pub backend: Backend,
    pub utc: bool,
    pub output_format: OutputFormat,
}

/// Parse arguments, excluding the program name
pub fn parse_args(args: &[String]) -> Result<Command> {
    let mut options = RunOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--repo" => {
                let value = flag_value(args, i)?;
                options.repo = RepositoryHandle::new(value);
                i += 2;
            }
            "--backend" => {
                let value = flag_value(args, i)?;
                options.backend = Backend::from_str(value)
                    .ok_or_else(|| anyhow::anyhow!("Unknown backend: {}", value))?;
                i += 2;
            }
            "--output" => {
                let value = flag_value(args, i)?;
                options.output_format = OutputFormat::from_str(value)
                    .ok_or_else(|| anyhow::anyhow!("Unknown output format: {}", value))?;
                i += 2;
            }
            "--utc" => {
                options.utc = true;
                i += 1;
            }
            _ => {
                return Err(anyhow::anyhow!("Unknown argument: {}", args[i]));
            }
        }
    }

    Ok(Command::Run(options))
}

fn flag_value(args: &[String], i: usize) -> Result<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("{} requires an argument", args[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        parse_args(&args)
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        assert_eq!(parse(&[]).unwrap(), Command::Run(RunOptions::default()));
    }

    #[test]
    fn test_all_flags() {
        let cmd = parse(&["--repo", "/tmp/r", "--backend", "libgit2", "--utc", "--output", "json"])
            .unwrap();
        assert_eq!(
            cmd,
            Command::Run(RunOptions {
                repo: RepositoryHandle::new("/tmp/r"),
                backend: Backend::Libgit2,
                utc: true,
                output_format: OutputFormat::Json,
            })
        );
    }

    #[test]
    fn test_help_and_version_short_circuit() {
        assert_eq!(parse(&["--utc", "-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["-V", "--bogus"]).unwrap(), Command::Version);
    }

    #[test]
    fn test_missing_flag_value() {
        let err = parse(&["--repo"]).unwrap_err();
        assert_eq!(err.to_string(), "--repo requires an argument");
    }

    #[test]
    fn test_unknown_values_are_errors() {
        assert!(parse(&["--backend", "hg"]).is_err());
        assert!(parse(&["--output", "xml"]).is_err());
        assert!(parse(&["positional"]).is_err());
    }
}
