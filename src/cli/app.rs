//! Main CLI application

use crate::error::{MdTocError, Result};
use crate::toc::{transform, Options};
use crate::ui::DebugLog;
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::Shell;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

const AFTER_HELP: &str = "\
Examples:
  md-toc --write Readme.md
      Generate a table of contents from headings in Readme.md, insert it
      under a heading named \"Table of Contents\", \"toc\" or
      \"table-of-contents\" (all case insensitive) and write the file to disk.

  md-toc Readme.md
      Same as --write but the output goes to stdout and Readme.md is left
      as is.

  md-toc -a Contents -w Readme.md
      Same as --write but the table of contents is inserted under the first
      heading named \"Contents\".";

/// Generate and refresh tables of contents in markdown files
#[derive(Parser, Debug)]
#[command(
    name = "md-toc",
    version,
    about = "Generate and refresh tables of contents in markdown files",
    after_help = AFTER_HELP,
    disable_version_flag = true
)]
pub struct Cli {
    /// Markdown files to process; reads stdin when omitted
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Write changes to the input file
    #[arg(short, long)]
    pub write: bool,

    /// Heading to insert the table of contents under. Defaults to
    /// "table of contents", "toc" or "table-of-contents"
    #[arg(
        short = 'a',
        long = "insert-under",
        alias = "insertUnder",
        value_name = "NAME"
    )]
    pub insert_under: Option<String>,

    /// Print debug logs to stderr
    #[arg(
        short,
        long,
        env = "MDTOC_DEBUG",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub debug: bool,

    /// Generate a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Show cli version
    #[arg(
        short = 'v',
        long = "version",
        action = ArgAction::Version,
        value_parser = clap::value_parser!(bool)
    )]
    version: Option<bool>,
}

impl Cli {
    /// Run one invocation to completion
    pub fn execute(&self) -> Result<()> {
        if let Some(shell) = self.completions {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "md-toc", &mut io::stdout());
            return Ok(());
        }

        let log = DebugLog::new(self.debug);
        log.line(format!("md-toc version v{}", crate::VERSION));
        log.line(format!("Input options {:?}", self));
        log.rule();

        let mut options = Options::new();
        if let Some(heading) = &self.insert_under {
            options = options.with_heading(heading.clone());
        }

        if self.files.is_empty() {
            return self.run_stdin(&options, &log);
        }

        for path in &self.files {
            self.run_file(path, &options, &log)?;
        }
        Ok(())
    }

    /// Transform stdin to stdout; --write has nothing to write back to
    fn run_stdin(&self, options: &Options, log: &DebugLog) -> Result<()> {
        log.line(format!(
            "No file specified. Reading from stdin as utf-8{}",
            if self.write {
                " and disregarding --write"
            } else {
                ""
            }
        ));

        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .map_err(MdTocError::Stdin)?;

        let result = transform(&input, options)?;
        log.line("Dumping output to stdout");
        print_document(&result)?;
        Ok(())
    }

    /// Transform a single file, overwriting it in place or printing it
    fn run_file(&self, path: &Path, options: &Options, log: &DebugLog) -> Result<()> {
        log.line(format!("Reading file {}", path.display()));
        let contents = fs::read_to_string(path).map_err(|source| MdTocError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let result = transform(&contents, options)?;

        if self.write {
            let start = Instant::now();
            fs::write(path, &result).map_err(|source| MdTocError::WriteFile {
                path: path.to_path_buf(),
                source,
            })?;
            log.line(format!(
                "Wrote {} in {:.6}s",
                path.display(),
                start.elapsed().as_secs_f64()
            ));
        } else {
            log.line("Writing to stdout");
            print_document(&result)?;
        }
        Ok(())
    }
}

/// Print a document to stdout, guaranteeing a trailing newline
fn print_document(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<()> {
    Cli::parse().execute()
}
