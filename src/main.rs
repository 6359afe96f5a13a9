//! labnote: locate and fill sections of lab-notebook markdown.
#![allow(clippy::multiple_crate_versions)]

use clap::{Args, CommandFactory, Parser, Subcommand};
use labnote::config::{Config, CONFIG_FILE};
use labnote::edit_plan::{Edit, EditPlan};
use labnote::input::DocumentKind;
use labnote::locate::locate_with;
use labnote::payload::{PopulateRequest, PopulateResponse, PreferenceRecord};
use labnote::{input, logging, scan, Document, Error, HeadingRecord, SectionContext, Target};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "labnote")]
#[command(about = "Locate and fill sections of lab-notebook markdown", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file
    #[arg(long, value_name = "FILE", default_value = CONFIG_FILE, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the Unit Operation sections of notebooks
    Sections {
        /// Files or directories to scan
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// File extensions to match
        #[arg(long, short = 'e', value_name = "EXT")]
        ext: Vec<String>,
    },
    /// Print the context of one section as JSON
    Locate {
        /// Notebook file
        file: PathBuf,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Print the drafting request for one section as JSON
    Request {
        /// Notebook file
        file: PathBuf,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Fill one section's placeholder
    Fill {
        /// Notebook file
        file: PathBuf,
        #[command(flatten)]
        target: TargetArgs,

        /// Replacement text
        #[arg(long, conflicts_with = "options", required_unless_present = "options")]
        text: Option<String>,

        /// Drafting response JSON to pick the replacement from
        #[arg(long, value_name = "FILE")]
        options: Option<PathBuf>,

        /// Zero-based option to pick from the drafting response
        #[arg(long, default_value_t = 0, requires = "options")]
        choice: usize,

        /// Print the edit plan instead of applying it
        #[arg(long)]
        dry_run: bool,
    },
    /// Apply a saved edit plan
    Apply {
        /// Edit plan JSON file
        plan: PathBuf,
    },
}

#[derive(Args)]
#[group(required = true, multiple = true)]
struct TargetArgs {
    /// Zero-based cursor line inside the section
    #[arg(long, conflicts_with_all = ["uo", "section"])]
    line: Option<usize>,

    /// Unit Operation identifier, e.g. UHW100
    #[arg(long, requires = "section")]
    uo: Option<String>,

    /// Section title, e.g. Method
    #[arg(long, requires = "uo")]
    section: Option<String>,
}

impl TargetArgs {
    fn target(&self) -> Target {
        match (self.line, &self.uo, &self.section) {
            (Some(line), _, _) => Target::cursor(line),
            (None, Some(uo), Some(section)) => Target::explicit(uo, section),
            _ => Cli::command()
                .error(
                    clap::error::ErrorKind::MissingRequiredArgument,
                    "give either --line or both --uo and --section",
                )
                .exit(),
        }
    }
}

#[derive(Serialize)]
struct Listing<'a> {
    file: String,
    kind: DocumentKind,
    label: String,
    #[serde(flatten)]
    record: &'a HeadingRecord,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let cfg = match Config::load_from(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(logging::level_for(cli.verbose, &cfg.log_level));

    match run(cli.command, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, cfg: &Config) -> labnote::Result<()> {
    match command {
        Command::Sections { paths, ext } => {
            let extensions = if ext.is_empty() {
                cfg.file_extensions.clone()
            } else {
                ext
            };
            let documents = input::find_documents(paths, &extensions)?;

            let mut scanned = Vec::new();
            for path in &documents {
                let document = Document::new(fs::read_to_string(path)?);
                scanned.push((
                    path.display().to_string(),
                    input::document_kind(path),
                    scan(&document),
                ));
            }
            let listings: Vec<Listing> = scanned
                .iter()
                .flat_map(|(file, kind, records)| {
                    records.iter().map(|record| Listing {
                        file: file.clone(),
                        kind: *kind,
                        label: record.label(),
                        record,
                    })
                })
                .collect();
            print_json(&listings)
        }
        Command::Locate { file, target } => {
            let context = locate_in(&file, &target.target(), cfg)?;
            print_json(&context)
        }
        Command::Request { file, target } => {
            let context = locate_in(&file, &target.target(), cfg)?;
            print_json(&PopulateRequest::from(&context))
        }
        Command::Fill {
            file,
            target,
            text,
            options,
            choice,
            dry_run,
        } => {
            let context = locate_in(&file, &target.target(), cfg)?;
            let file_name = file.display().to_string();

            let response = match options {
                Some(path) => Some(serde_json::from_str::<PopulateResponse>(
                    &fs::read_to_string(path)?,
                )?),
                None => None,
            };
            let replacement = match (&response, text) {
                (Some(response), _) => response.choose(choice)?.to_string(),
                (None, Some(text)) => text,
                (None, None) => return Err(Error::NoOptions),
            };

            let plan = EditPlan::single(Edit::from_context(&file_name, &context, &replacement));
            if dry_run {
                return print_json(&plan);
            }
            plan.apply()?;
            eprintln!("'{}' section updated ({})", context.section, context.uo_id);

            if let Some(response) = response {
                let record = PreferenceRecord::new(
                    &context,
                    &response,
                    choice,
                    &replacement,
                    &file_name,
                    fs::read_to_string(&file)?,
                )?;
                print_json(&record)?;
            }
            Ok(())
        }
        Command::Apply { plan } => {
            let plan: EditPlan = serde_json::from_str(&fs::read_to_string(plan)?)?;
            plan.apply()
        }
    }
}

fn locate_in(file: &Path, target: &Target, cfg: &Config) -> labnote::Result<SectionContext> {
    let document = Document::new(fs::read_to_string(file)?);
    locate_with(&document, target, &cfg.query_style()).ok_or_else(|| match target {
        Target::Cursor { line } => Error::NoSectionAtLine { line: *line },
        Target::Explicit { uo_id, section } => Error::SectionNotFound {
            uo_id: uo_id.clone(),
            section: section.clone(),
        },
    })
}

fn print_json<T: Serialize>(value: &T) -> labnote::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
