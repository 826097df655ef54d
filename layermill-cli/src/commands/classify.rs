//! Classify command - run a profile over a JSON Lines feature stream.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::{info, warn};

use layermill::collect::OutputFeature;
use layermill::feature::MemoryFeature;
use layermill::profiles::ProfileKind;

use crate::error::CliError;
use crate::record::FeatureRecord;
use crate::runner::CliRunner;

/// Arguments for the classify command.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Profile to run (overrides the config file)
    #[arg(long)]
    pub profile: Option<String>,

    /// Input JSONL file, or '-' for stdin
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Output JSONL file (falls back to the config file setting, then stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ~/.layermill/config.ini)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Worker threads for classification (defaults to all cores)
    #[arg(long)]
    pub jobs: Option<usize>,

    /// Enable debug-level logging
    #[arg(long)]
    pub debug: bool,
}

/// Run the classify command.
pub fn run(args: ClassifyArgs) -> Result<(), CliError> {
    // Without an explicit --output the stream may land on stdout, so log
    // lines must stay off it
    let stdout_logs = args.output.is_some();

    let runner = CliRunner::new(args.config.as_deref(), stdout_logs, args.debug)?;
    runner.log_startup("classify");
    let config = runner.config();

    let profile_name = args
        .profile
        .or_else(|| config.profile.clone())
        .ok_or_else(|| {
            CliError::Config(
                "no profile selected - pass --profile or set [profile] name in the config file"
                    .to_string(),
            )
        })?;
    let kind: ProfileKind = profile_name.parse().map_err(CliError::Profile)?;
    let profile = kind.build();
    info!("Running profile '{}' ({})", profile.name(), kind);

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .map_err(|e| {
                CliError::Config(format!("failed to configure {} worker threads: {}", jobs, e))
            })?;
        info!("Using {} worker threads", jobs);
    }

    let (features, malformed) = read_features(&args.input)?;
    info!("Read {} input features from '{}'", features.len(), args.input);

    let outputs = profile.process_batch(&features);

    let output_target = args.output.or_else(|| config.output.clone());
    write_features(output_target.as_deref(), &outputs)?;

    log_summary(features.len(), malformed, &outputs);

    Ok(())
}

/// Read and parse input records, counting malformed lines instead of
/// failing on them.
fn read_features(input: &str) -> Result<(Vec<MemoryFeature>, usize), CliError> {
    let lines = read_lines(input)?;

    let mut features = Vec::with_capacity(lines.len());
    let mut malformed = 0usize;

    for (index, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<FeatureRecord>(line) {
            Ok(record) => match record.into_feature() {
                Ok(feature) => features.push(feature),
                Err(reason) => {
                    malformed += 1;
                    warn!("Skipping input line {}: {}", index + 1, reason);
                }
            },
            Err(e) => {
                malformed += 1;
                warn!("Skipping input line {}: {}", index + 1, e);
            }
        }
    }

    Ok((features, malformed))
}

/// Read all lines from a file, or from stdin when the path is "-".
fn read_lines(input: &str) -> Result<Vec<String>, CliError> {
    let collected: io::Result<Vec<String>> = match input {
        "-" => io::stdin().lock().lines().collect(),
        path => {
            let file = fs::File::open(path).map_err(|e| CliError::InputRead {
                path: path.to_string(),
                error: e,
            })?;
            BufReader::new(file).lines().collect()
        }
    };

    collected.map_err(|e| CliError::InputRead {
        path: input.to_string(),
        error: e,
    })
}

/// Write output features as JSON Lines to a file, or to stdout when no
/// target is set.
fn write_features(target: Option<&Path>, features: &[OutputFeature]) -> Result<(), CliError> {
    match target {
        Some(path) => {
            let file = fs::File::create(path).map_err(|e| CliError::OutputWrite {
                path: path.display().to_string(),
                error: e,
            })?;
            let mut writer = BufWriter::new(file);
            write_lines(&mut writer, features).map_err(|e| CliError::OutputWrite {
                path: path.display().to_string(),
                error: e,
            })?;
            info!("Wrote {} features to '{}'", features.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_lines(&mut writer, features).map_err(|e| CliError::OutputWrite {
                path: "<stdout>".to_string(),
                error: e,
            })?;
        }
    }

    Ok(())
}

fn write_lines<W: Write>(writer: &mut W, features: &[OutputFeature]) -> io::Result<()> {
    for feature in features {
        serde_json::to_writer(&mut *writer, feature).map_err(io::Error::from)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Log the classification summary with per-layer counts.
fn log_summary(read: usize, malformed: usize, outputs: &[OutputFeature]) {
    info!("Classified {} features into {} output features", read, outputs.len());
    if malformed > 0 {
        warn!("Skipped {} malformed input lines", malformed);
    }

    let mut per_layer: BTreeMap<&str, usize> = BTreeMap::new();
    for feature in outputs {
        *per_layer.entry(feature.layer.as_str()).or_default() += 1;
    }
    for (layer, count) in &per_layer {
        info!("  {}: {} features", layer, count);
    }
}
