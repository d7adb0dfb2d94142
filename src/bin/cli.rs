use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use log::{LevelFilter, Metadata, Record};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use serde::Serialize;

use pagesim::input::{self, parse_file_arg, parse_file_line};
use pagesim::memory::ReferenceSource;
use pagesim::replacement::AccessOutcome;
use pagesim::session::SegmentUsage;
use pagesim::{BatchReport, FileRequest, MemoryProfile, Policy, Session, SessionConfig, SimulationResult};

const HISTORY_FILE: &str = ".pagesim_history";

#[derive(Parser)]
#[command(author, version, about = "pagesim - page replacement simulator for FIFO, LRU and Optimal")]
struct Cli {
    /// Total simulated RAM in KB
    #[arg(long)]
    total_ram: Option<f64>,

    /// Page size in KB
    #[arg(long)]
    page_size: Option<f64>,

    /// Seed for generated reference strings
    #[arg(long)]
    seed: Option<u64>,

    /// Simulate files on worker threads
    #[arg(long)]
    parallel: bool,

    /// Print debug logging to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive shell
    Shell,

    /// Simulate the given files under one policy
    Run {
        /// Replacement policy
        #[arg(short, long, value_enum, default_value_t = Policy::Fifo)]
        policy: Policy,

        #[command(flatten)]
        files: FileArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate the given files under every policy
    Compare {
        #[command(flatten)]
        files: FileArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay one reference string step by step
    Trace {
        /// Replacement policy
        #[arg(short, long, value_enum, default_value_t = Policy::Fifo)]
        policy: Policy,

        /// Number of pages in the address space
        #[arg(long)]
        pages: usize,

        /// Number of allocated frames
        #[arg(long)]
        frames: usize,

        /// Page numbers, separated by commas or spaces
        references: String,
    },
}

#[derive(clap::Args)]
struct FileArgs {
    /// File as name:size_kb:allocated_kb:ref_length (repeatable)
    #[arg(short, long = "file")]
    file: Vec<String>,

    /// Batch file with one "name size_kb allocated_kb ref_length" per line
    #[arg(long)]
    from: Option<PathBuf>,
}

impl FileArgs {
    fn requests(&self) -> Result<Vec<FileRequest>> {
        let mut requests = Vec::new();
        if let Some(path) = &self.from {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read batch file {}", path.display()))?;
            for (number, line) in contents.lines().enumerate() {
                if let Some(request) = parse_file_line(line) {
                    requests.push(request.with_context(|| format!("{}:{}", path.display(), number + 1))?);
                }
            }
        }
        for arg in &self.file {
            requests.push(parse_file_arg(arg).with_context(|| format!("Invalid --file '{}'", arg))?);
        }
        if requests.is_empty() {
            bail!("No files given; use --file or --from");
        }
        Ok(requests)
    }
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn });
    }
}

#[derive(Serialize)]
struct RunOutput<'a> {
    policy: Policy,
    profile: MemoryProfile,
    faults: &'a SimulationResult,
    failures: BTreeMap<&'a str, String>,
}

impl<'a> RunOutput<'a> {
    fn new(profile: MemoryProfile, report: &'a BatchReport) -> Self {
        Self {
            policy: report.policy,
            profile,
            faults: report.results(),
            failures: report
                .failures()
                .iter()
                .map(|(name, err)| (name.as_str(), err.to_string()))
                .collect(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SessionConfig {
        reference_source: cli.seed.map_or(ReferenceSource::Entropy, ReferenceSource::Seeded),
        parallel_batch: cli.parallel,
    };
    let session = Session::new(config);
    if let (Some(total_ram), Some(page_size)) = (cli.total_ram, cli.page_size) {
        session.set_memory_profile(total_ram, page_size)?;
    }

    match cli.command {
        Some(Commands::Run { policy, files, json }) => {
            register_all(&session, &files)?;
            let profile = require_profile(&session)?;
            let report = session.run_simulation(policy)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&RunOutput::new(profile, &report))?);
            } else {
                display_report(&session, &report)?;
            }
            ensure_complete([&report])?;
        }
        Some(Commands::Compare { files, json }) => {
            register_all(&session, &files)?;
            let profile = require_profile(&session)?;
            let reports = session.compare_policies()?;
            if json {
                let outputs: Vec<_> = reports
                    .values()
                    .map(|report| RunOutput::new(profile, report))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&outputs)?);
            } else {
                display_comparison(&session, &reports);
            }
            ensure_complete(reports.values())?;
        }
        Some(Commands::Trace {
            policy,
            pages,
            frames,
            references,
        }) => {
            let references = input::parse_reference_string(&references)?;
            let trace = pagesim::simulate_trace(policy, pages, &references, frames)?;
            for event in &trace.events {
                match event.outcome {
                    AccessOutcome::Hit => println!("{:>4}  page {:<4} hit", event.position, event.page),
                    AccessOutcome::Fault { evicted: None } => {
                        println!("{:>4}  page {:<4} fault", event.position, event.page)
                    }
                    AccessOutcome::Fault { evicted: Some(victim) } => println!(
                        "{:>4}  page {:<4} fault, evicted {}",
                        event.position, event.page, victim
                    ),
                }
            }
            println!("{}: {} faults, {} hits", policy, trace.faults, trace.hits());
        }
        Some(Commands::Shell) | None => run_shell(&session)?,
    }

    Ok(())
}

fn require_profile(session: &Session) -> Result<MemoryProfile> {
    session
        .profile()
        .ok_or_else(|| anyhow!("--total-ram and --page-size are required"))
}

fn register_all(session: &Session, files: &FileArgs) -> Result<()> {
    require_profile(session)?;
    for request in files.requests()? {
        let name = request.name.clone();
        session
            .register_file(request)
            .with_context(|| format!("Failed to add file '{}'", name))?;
    }
    Ok(())
}

fn run_shell(session: &Session) -> Result<()> {
    println!("Welcome to pagesim. Type 'help' for assistance or 'exit' to quit.");

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if let Err(err) = rl.load_history(HISTORY_FILE) {
        if !err.to_string().contains("No such file or directory") {
            println!("Error loading history: {}", err);
        }
    }

    loop {
        match rl.readline("pagesim> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);

                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if matches!(line.to_lowercase().as_str(), "exit" | "quit") {
                    println!("Goodbye!");
                    break;
                }
                if let Err(err) = execute_command(session, line) {
                    println!("Error: {:#}", err);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        println!("Error saving history: {}", err);
    }
    Ok(())
}

fn execute_command(session: &Session, line: &str) -> Result<()> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or("").to_lowercase();
    match command.as_str() {
        "help" => print_help(),
        "profile" => {
            let total_ram = input::parse_number("total RAM", words.next().unwrap_or(""))?;
            let page_size = input::parse_number("page size", words.next().unwrap_or(""))?;
            let profile = session.set_memory_profile(total_ram, page_size)?;
            println!(
                "Total RAM = {} KB, page size = {} KB ({} frames)",
                profile.total_ram_kb,
                profile.page_size_kb,
                profile.total_frames()
            );
        }
        "add" => {
            let request = input::parse_file_fields(words)?;
            let entry = session.register_file(request)?;
            println!(
                "File '{}' added: {} pages, reference string {:?}",
                entry.name, entry.page_count, entry.reference_string
            );
        }
        "addrefs" => {
            let name = words.next().ok_or_else(|| anyhow!("Missing file name"))?;
            let size_kb = input::parse_kb("file size", words.next().unwrap_or(""))?;
            let allocated_kb = input::parse_kb("allocated RAM", words.next().unwrap_or(""))?;
            let rest: Vec<&str> = words.collect();
            let references = input::parse_reference_string(&rest.join(" "))?;
            let entry = session.register_file_with_references(name, size_kb, allocated_kb, references)?;
            println!("File '{}' added: {} pages", entry.name, entry.page_count);
        }
        "files" => {
            if session.is_empty() {
                println!("No files added yet");
            }
            for entry in session.files() {
                println!(
                    "{:<16} {:>10.1} KB {:>10.1} KB {:>6} pages  {:?}",
                    entry.name, entry.size_kb, entry.allocated_kb, entry.page_count, entry.reference_string
                );
            }
        }
        "segments" => display_segments(&session.segments()),
        "run" => {
            let policy: Policy = words.next().unwrap_or("fifo").parse()?;
            let report = session.run_simulation(policy)?;
            display_report(session, &report)?;
        }
        "compare" => {
            let reports = session.compare_policies()?;
            display_comparison(session, &reports);
            ensure_complete(reports.values())?;
        }
        "trace" => {
            let name = words.next().ok_or_else(|| anyhow!("Missing file name"))?;
            let policy: Policy = words.next().unwrap_or("fifo").parse()?;
            let trace = session.trace(name, policy)?;
            println!(
                "{} on '{}': {} faults, evicted {:?}",
                policy,
                name,
                trace.faults,
                trace.evictions()
            );
        }
        other => bail!("Unknown command '{}', type 'help'", other),
    }
    Ok(())
}

fn print_help() {
    println!("Available commands:");
    println!("  profile <total_kb> <page_kb>                 - Set total RAM and page size (once)");
    println!("  add <name> <size_kb> <alloc_kb> <length>     - Add a file with a random reference string");
    println!("  addrefs <name> <size_kb> <alloc_kb> <pages>  - Add a file with an explicit reference string");
    println!("  files                                        - List registered files");
    println!("  segments                                     - Required vs allocated size per file");
    println!("  run [fifo|lru|optimal]                       - Count page faults per file");
    println!("  compare                                      - Count page faults under every policy");
    println!("  trace <name> [fifo|lru|optimal]              - Show evictions for one file");
    println!("  help                                         - Display this help message");
    println!("  exit                                         - Exit the shell");
}

fn display_report(session: &Session, report: &BatchReport) -> Result<()> {
    let profile = require_profile(session)?;
    println!("Paging simulation ({})", report.policy);
    println!("| {:<16} | {:>6} | {:>6} | {:>6} |", "File", "Pages", "Frames", "Faults");
    println!("+{:-<18}+{:-<8}+{:-<8}+{:-<8}+", "", "", "", "");
    for entry in session.files() {
        match report.fault_count(&entry.name) {
            Some(faults) => println!(
                "| {:<16} | {:>6} | {:>6} | {:>6} |",
                entry.name,
                entry.page_count,
                profile.frames(entry.allocated_kb)?,
                faults
            ),
            None => {
                if let Some(err) = report.failures().get(&entry.name) {
                    println!("| {:<16} | error: {}", entry.name, err);
                }
            }
        }
    }
    Ok(())
}

fn display_comparison(session: &Session, reports: &BTreeMap<Policy, BatchReport>) {
    print!("| {:<16} |", "File");
    for policy in reports.keys() {
        print!(" {:>7} |", policy.name());
    }
    println!();

    for entry in session.files() {
        print!("| {:<16} |", entry.name);
        for report in reports.values() {
            match report.fault_count(&entry.name) {
                Some(faults) => print!(" {:>7} |", faults),
                None => print!(" {:>7} |", "error"),
            }
        }
        println!();
    }

    for report in reports.values() {
        for (name, err) in report.failures() {
            println!("{} ({}): error: {}", name, report.policy, err);
        }
    }
}

/// Fail when any report is missing an entry
fn ensure_complete<'a>(reports: impl IntoIterator<Item = &'a BatchReport>) -> Result<()> {
    let failed: usize = reports
        .into_iter()
        .map(|report| report.failures().len())
        .sum();
    if failed > 0 {
        bail!("{} simulation(s) could not be completed", failed);
    }
    Ok(())
}

fn display_segments(segments: &[SegmentUsage]) {
    if segments.is_empty() {
        println!("No files added yet");
        return;
    }
    println!("| {:<16} | {:>12} | {:>12} |", "File", "Required KB", "Allocated KB");
    for segment in segments {
        println!(
            "| {:<16} | {:>12.1} | {:>12.1} |",
            segment.name, segment.required_kb, segment.allocated_kb
        );
    }
}
