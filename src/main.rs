// src/main.rs
use clap::Parser;
use iris_report::parser::parse_batch;
use iris_report::report::source::load_report;
use iris_report::storage::StorageManager;
use iris_report::utils::{self, AppError};
use std::collections::HashSet;
use std::path::PathBuf;

/// Environment fallback for `--output-dir`.
const OUTPUT_DIR_ENV: &str = "IRIS_REPORT_OUTPUT_DIR";

/// Command Line Interface for the iris analysis report parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Report files to parse (`-` reads from stdin)
    #[arg(required = true)]
    reports: Vec<String>,

    /// Directory for record JSON and metadata (default: print records to stdout)
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Debug mode - save annotated HTML showing what each section pattern matched
    #[arg(short, long)]
    debug: bool,

    /// Print single-line JSON instead of pretty JSON
    #[arg(long)]
    compact: bool,

    /// Stop at the first report that cannot be loaded or parsed
    #[arg(long)]
    fail_fast: bool,
}

/// Reserves a storage name for a report. Repeated names (same file stem in
/// different directories) get a numeric suffix so records are not overwritten.
fn unique_report_name(seen: &mut HashSet<String>, name: &str) -> String {
    if seen.insert(name.to_string()) {
        return name.to_string();
    }

    let mut n = 2;
    loop {
        let candidate = format!("{}_{}", name, n);
        if seen.insert(candidate.clone()) {
            tracing::warn!("Report name '{}' already used, storing as '{}'", name, candidate);
            return candidate;
        }
        n += 1;
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    let output_dir = args.output_dir.clone().or_else(|| {
        let dir = std::env::var(OUTPUT_DIR_ENV).ok().filter(|d| !d.trim().is_empty());
        if let Some(d) = &dir {
            tracing::debug!("Using {} from {}", d, OUTPUT_DIR_ENV);
        }
        dir
    });

    // 3. Initialize storage (only when writing to disk)
    let storage = output_dir
        .as_deref()
        .map(StorageManager::new)
        .transpose()?;
    let debug_dir = storage
        .as_ref()
        .map(|s| s.base_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    let mut success_count = 0;
    let mut failure_count = 0;

    // 4. Load every report
    let mut loaded = Vec::with_capacity(args.reports.len());
    let mut seen_names = HashSet::new();
    for path in &args.reports {
        match load_report(path).await {
            Ok(report) => {
                let name = unique_report_name(&mut seen_names, &report.name);
                tracing::info!("Loaded report '{}' ({} bytes)", name, report.text.len());

                if args.debug {
                    let debug_path = debug_dir.join(format!("{}_annotated.html", name));
                    if let Err(e) =
                        utils::report_debug::create_debug_html(&report.text, &debug_path)
                    {
                        tracing::warn!("Failed to create debug HTML: {}", e);
                    }
                }

                loaded.push((name, report.text));
            }
            Err(e) => {
                tracing::error!("Failed to load report {}: {}", path, e);
                failure_count += 1;
                if args.fail_fast {
                    return Err(e.into());
                }
            }
        }
    }

    // 5. Parse concurrently, handle results in input order
    for (name, result) in parse_batch(loaded).await? {
        match result {
            Ok(record) => {
                success_count += 1;
                match &storage {
                    Some(storage) => {
                        match storage.save_record(&name, &record) {
                            Ok(path) => {
                                tracing::info!("Saved record for '{}' to: {}", name, path.display())
                            }
                            Err(e) => tracing::error!("Failed to save record: {}", e),
                        }
                        match storage.save_record_metadata(&name, &record) {
                            Ok(path) => {
                                tracing::info!("Saved record metadata to: {}", path.display())
                            }
                            Err(e) => tracing::error!("Failed to save record metadata: {}", e),
                        }
                    }
                    None => {
                        let json = if args.compact {
                            record.to_json()
                        } else {
                            record.to_json_pretty()
                        };
                        let json = json.map_err(|e| {
                            AppError::Processing(format!(
                                "Failed to serialize record '{}': {}",
                                name, e
                            ))
                        })?;
                        println!("{}", json);
                    }
                }
            }
            Err(e) => {
                tracing::error!("Failed to parse report '{}': {}", name, e);
                failure_count += 1;
                if args.fail_fast {
                    return Err(e.into());
                }
            }
        }
    }

    tracing::info!(
        "Processing finished. Success: {}, Failures: {}",
        success_count,
        failure_count
    );

    if success_count == 0 {
        return Err(AppError::Processing(format!(
            "Failed to parse any of {} report(s)",
            args.reports.len()
        )));
    }

    Ok(())
}
