//! fhash is a fast, concurrent file hashing CLI tool.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;

use fhash_cli::input;
use fhash_cli::output::{Formatter, JsonFormatter, TextFormatter};
use fhash_core::{
    ErrorPolicy, FilterOptions, ScanResult, Scanner, algorithm_names, merge, parse_selection,
    parse_size,
};

#[derive(Parser)]
#[command(name = "fhash")]
#[command(author, version, about = "A fast, concurrent file hashing tool", long_about = None)]
#[command(after_help = "Examples:
  fhash -a sha256 file.txt
  fhash -a md5,sha256 ./dist
  fhash -a sha256 -j ./dist
  fhash -a xxh3 --max-size 100MB -E .log,.tmp ./project
  cat files.txt | fhash -a sha256 --from-stdin -j")]
struct Cli {
    /// Hash algorithm(s), comma-separated (e.g. md5,sha256)
    #[arg(short, long, value_name = "ALGOS")]
    algo: Option<String>,

    /// Files or directories to scan
    paths: Vec<PathBuf>,

    /// Read file paths from a file (one per line, # comments allowed)
    #[arg(short = 'f', long, value_name = "FILE", conflicts_with = "from_stdin")]
    from_file: Option<PathBuf>,

    /// Read file paths from stdin
    #[arg(long)]
    from_stdin: bool,

    /// Do not descend into subdirectories
    #[arg(long)]
    no_recursive: bool,

    /// Output as JSON Lines
    #[arg(short, long)]
    json: bool,

    /// Output absolute paths
    #[arg(long)]
    absolute: bool,

    /// Error handling: "skip" continues past failing paths, "fail" stops
    /// dispatching new work after the first failure
    #[arg(long, value_name = "POLICY", default_value = "skip")]
    on_error: String,

    /// Skip files larger than this size (e.g. 100MB)
    #[arg(long, value_name = "SIZE")]
    max_size: Option<String>,

    /// Skip files smaller than this size
    #[arg(long, value_name = "SIZE")]
    min_size: Option<String>,

    /// Only process files with these extensions (comma-separated)
    #[arg(short = 'I', long, value_name = "EXTS")]
    include_ext: Option<String>,

    /// Skip files with these extensions (comma-separated)
    #[arg(short = 'E', long, value_name = "EXTS")]
    exclude_ext: Option<String>,

    /// Include glob patterns (comma-separated)
    #[arg(short = 'i', long, value_name = "PATTERNS")]
    include: Option<String>,

    /// Exclude glob patterns (comma-separated)
    #[arg(short = 'e', long, value_name = "PATTERNS")]
    exclude: Option<String>,

    /// Number of concurrent workers (default: number of processors)
    #[arg(short, long, value_name = "N")]
    workers: Option<usize>,

    /// List supported algorithms
    #[arg(short, long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list {
        println!("Supported algorithms:");
        for name in algorithm_names() {
            println!("  {name}");
        }
        return Ok(());
    }

    let algo = cli
        .algo
        .as_deref()
        .context("--algo is required (use --list to see available algorithms)")?;
    let algorithms = parse_selection(algo)?;
    let algorithm_labels: Vec<String> = algorithms.iter().map(|a| a.name().to_string()).collect();

    let on_error: ErrorPolicy = cli.on_error.parse()?;
    let filter = build_filter(&cli)?;

    let mut scanner = Scanner::new(algorithms)
        .with_filter(filter)
        .with_error_policy(on_error)
        .with_recursive(!cli.no_recursive)
        .with_absolute_paths(cli.absolute);
    if let Some(workers) = cli.workers {
        scanner = scanner.with_workers(workers);
    }

    log::debug!("scanning with algorithms [{}]", algorithm_labels.join(", "));

    let results = gather_results(&cli, &scanner, on_error).await?;

    let formatter: Box<dyn Formatter> = if cli.json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TextFormatter::new(algorithm_labels))
    };

    let saw_failure = print_results(results, formatter.as_ref(), cli.json).await;

    if saw_failure && on_error == ErrorPolicy::Fail {
        std::process::exit(1);
    }
    Ok(())
}

fn build_filter(cli: &Cli) -> Result<fhash_core::FileFilter> {
    let mut options = FilterOptions::default();

    if let Some(max) = &cli.max_size {
        options.max_size = parse_size(max)?;
    }
    if let Some(min) = &cli.min_size {
        options.min_size = parse_size(min)?;
    }
    if let Some(exts) = &cli.include_ext {
        options.include_exts = split_and_trim(exts);
    }
    if let Some(exts) = &cli.exclude_ext {
        options.exclude_exts = split_and_trim(exts);
    }
    if let Some(globs) = &cli.include {
        options.include_globs = split_and_trim(globs);
    }
    if let Some(globs) = &cli.exclude {
        options.exclude_globs = split_and_trim(globs);
    }

    Ok(options.build()?)
}

fn split_and_trim(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve the input sources into a single merged result stream
async fn gather_results(
    cli: &Cli,
    scanner: &Scanner,
    on_error: ErrorPolicy,
) -> Result<mpsc::Receiver<ScanResult>> {
    if cli.from_stdin {
        let paths = input::paths_from_stdin().context("failed to read paths from stdin")?;
        return Ok(scanner.scan_files(paths));
    }

    if let Some(file) = &cli.from_file {
        let paths = input::paths_from_file(file)
            .with_context(|| format!("failed to read path list {}", file.display()))?;
        return Ok(scanner.scan_files(paths));
    }

    if cli.paths.is_empty() {
        bail!("no input files or directories specified");
    }

    // Files share one batch stream; each directory argument gets its own
    let mut files = Vec::new();
    let mut streams = Vec::new();
    for path in &cli.paths {
        match tokio::fs::metadata(path).await {
            Ok(metadata) if metadata.is_dir() => streams.push(scanner.scan_dir(path.clone())),
            Ok(_) => files.push(path.clone()),
            Err(e) => {
                if on_error == ErrorPolicy::Fail {
                    bail!("cannot access {}: {e}", path.display());
                }
                eprintln!("fhash: {}: {e}", path.display());
            }
        }
    }
    if !files.is_empty() {
        streams.insert(0, scanner.scan_files(files));
    }

    Ok(merge(streams))
}

/// Drain the result stream, printing as results arrive
///
/// Returns true if any failure result was seen. Text-mode errors go to
/// stderr; JSON mode keeps everything on stdout as JSON lines.
async fn print_results(
    mut results: mpsc::Receiver<ScanResult>,
    formatter: &dyn Formatter,
    json: bool,
) -> bool {
    let mut saw_failure = false;

    while let Some(result) = results.recv().await {
        if result.is_err() {
            saw_failure = true;
            if json {
                println!("{}", formatter.format_error(&result));
            } else {
                eprintln!("{}", formatter.format_error(&result));
            }
        } else {
            println!("{}", formatter.format(&result));
        }
    }

    saw_failure
}
