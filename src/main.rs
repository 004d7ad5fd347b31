use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use scribecheck_lib::api::{load_document, TextService};
use scribecheck_lib::models::{AnalyzeRequest, BatchAnalyzeRequest, ConvertRequest};
use scribecheck_lib::services::config_store::{AppConfig, ConfigStore};
use scribecheck_lib::services::text_processor::{normalize_punctuation, preview};
use scribecheck_lib::services::TextConverter;
use scribecheck_lib::{init_logging, LoggingOptions};
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "scribecheck")]
#[command(about = "Heuristic AI-text detection and casual rewriting")]
#[command(version)]
struct Cli {
    /// Config file (defaults to <config dir>/scribecheck/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write a per-session log file into this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a text as ai or human
    Analyze(InputArgs),
    /// Classification with features, scores and fired signals
    Report(InputArgs),
    /// Rewrite a text into casual prose
    Convert {
        #[command(flatten)]
        input: InputArgs,
        /// Seed the embellishment pass for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Write the converted text to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Classify several documents at once
    Batch {
        /// Input files (.txt, .md, .docx, .pdf)
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Show or update the saved configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Default seed for `convert`
    #[arg(long, conflicts_with = "clear_seed")]
    seed: Option<u64>,
    /// Remove the saved seed
    #[arg(long)]
    clear_seed: bool,
    /// Maximum characters per text
    #[arg(long)]
    max_text_chars: Option<usize>,
    /// Maximum texts per batch
    #[arg(long)]
    max_batch_size: Option<usize>,
}

impl ConfigArgs {
    /// Apply the requested changes; returns whether anything changed.
    fn apply(&self, config: &mut AppConfig) -> bool {
        let mut changed = false;
        if let Some(seed) = self.seed {
            config.conversion.seed = Some(seed);
            changed = true;
        }
        if self.clear_seed {
            config.conversion.seed = None;
            changed = true;
        }
        if let Some(n) = self.max_text_chars {
            config.limits.max_text_chars = n;
            changed = true;
        }
        if let Some(n) = self.max_batch_size {
            config.limits.max_batch_size = n;
            changed = true;
        }
        changed
    }
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input file, or `-` to read stdin
    #[arg(default_value = "-")]
    input: String,
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin failed")?;
        return Ok(normalize_punctuation(&buf));
    }
    load_document(Path::new(input)).with_context(|| format!("load {} failed", input))
}

fn open_store(path: Option<&Path>) -> Option<ConfigStore> {
    match path {
        Some(p) => Some(ConfigStore::with_file(p.to_path_buf())),
        None => ConfigStore::default_config_dir().map(ConfigStore::new),
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match open_store(path) {
        Some(store) => store
            .load()
            .with_context(|| format!("load config {} failed", store.config_file().display())),
        None => Ok(AppConfig::default()),
    }
}

fn service(config_path: Option<&Path>) -> Result<TextService> {
    let config = load_config(config_path)?;
    Ok(TextService::from_config(&config))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output failed")?;
    println!("{}", json);
    Ok(())
}

fn run_analyze(svc: &TextService, input: &str, json: bool) -> Result<()> {
    let text = read_input(input)?;
    let result = svc.analyze(&AnalyzeRequest { text })?;
    if json {
        return print_json(&result);
    }
    println!("Prediction: {}", result.label);
    println!("Confidence: {:.2}", result.confidence);
    println!("Words: {}", result.word_count);
    Ok(())
}

fn run_report(svc: &TextService, input: &str, json: bool) -> Result<()> {
    let text = read_input(input)?;
    let report = svc.report(&AnalyzeRequest { text: text.clone() })?;
    if json {
        return print_json(&report);
    }

    println!("Input: {}", preview(&text, 100));
    println!(
        "Prediction: {} ({:.2})",
        report.result.label, report.result.confidence
    );
    println!(
        "Statistics: words={} sentences={} avg_sentence_length={:.2}",
        report.statistics.word_count,
        report.statistics.sentence_count,
        report.statistics.avg_sentence_length
    );
    println!(
        "Scores: machine={:.2} human={:.2}",
        report.scores.machine_score, report.scores.human_score
    );
    match &report.features {
        None => println!("Features: (too short, fewer than 10 tokens)"),
        Some(f) => {
            println!("Features: tokens={}", f.token_count);
            if let Some(s) = &f.sentence_lengths {
                println!("  sentence length mean={:.2} variance={:.2}", s.mean, s.variance);
            }
        }
    }
    println!();
    println!("Signals: {}", report.signals.len());
    for s in &report.signals {
        println!("  {:<28} {:?} +{:.1}", s.name, s.side, s.weight);
    }
    Ok(())
}

fn run_convert(
    svc: &TextService,
    input: &str,
    seed: Option<u64>,
    out: Option<&Path>,
    json: bool,
) -> Result<()> {
    let text = read_input(input)?;
    let svc = match seed {
        Some(seed) => TextService::new(svc.limits().clone(), TextConverter::seeded(seed)),
        None => svc.clone(),
    };
    let result = svc.convert(&ConvertRequest { text })?;

    if let Some(out) = out {
        std::fs::write(out, &result.converted_text)
            .with_context(|| format!("write {} failed", out.display()))?;
        info!(path = %out.display(), "convert.written");
    }

    if json {
        print_json(&result)
    } else {
        println!("{}", result.converted_text);
        Ok(())
    }
}

async fn run_batch(svc: &TextService, paths: Vec<PathBuf>, json: bool) -> Result<()> {
    // Extraction (pdf/docx) is blocking work; fan it out.
    let mut set = JoinSet::new();
    for (index, path) in paths.iter().cloned().enumerate() {
        set.spawn_blocking(move || (index, load_document(&path).map_err(|e| (path, e))));
    }

    let mut texts = vec![String::new(); paths.len()];
    while let Some(joined) = set.join_next().await {
        let (index, loaded) = joined.context("document task panicked")?;
        let text = loaded.map_err(|(path, e)| {
            anyhow::Error::new(e).context(format!("load {} failed", path.display()))
        })?;
        debug!(index, chars = text.chars().count(), "batch.loaded");
        texts[index] = text;
    }

    let batch_svc = svc.clone();
    let response = tokio::task::spawn_blocking(move || {
        batch_svc.analyze_batch(&BatchAnalyzeRequest { texts })
    })
    .await
    .context("batch task panicked")??;

    if json {
        return print_json(&response);
    }

    println!("Processed: {}", response.total_processed);
    for item in &response.results {
        let name = paths[item.index].display();
        match (&item.result, &item.error) {
            (Some(r), _) => println!(
                "[{:03}] {:<5} {:.2} words={:<6} {}",
                item.index, r.label, r.confidence, r.word_count, name
            ),
            (None, Some(err)) => println!("[{:03}] error: {} {}", item.index, err, name),
            (None, None) => println!("[{:03}] (no result) {}", item.index, name),
        }
    }
    Ok(())
}

fn run_config(path: Option<&Path>, args: &ConfigArgs, json: bool) -> Result<()> {
    let store = open_store(path).context("no config directory available, pass --config")?;
    let mut config = store.load().context("load config failed")?;
    if args.apply(&mut config) {
        store
            .save(&config)
            .with_context(|| format!("save {} failed", store.config_file().display()))?;
        info!(path = %store.config_file().display(), "config.saved");
    }

    if json {
        return print_json(&config);
    }
    println!("Config: {}", store.config_file().display());
    println!(
        "Seed: {}",
        config
            .conversion
            .seed
            .map_or_else(|| "(none)".to_string(), |s| s.to_string())
    );
    println!("Max text chars: {}", config.limits.max_text_chars);
    println!("Max batch size: {}", config.limits.max_batch_size);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LoggingOptions {
        log_dir: cli.log_dir.clone(),
        default_level: None,
    });

    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Analyze(args) => run_analyze(&service(config_path)?, &args.input, cli.json),
        Command::Report(args) => run_report(&service(config_path)?, &args.input, cli.json),
        Command::Convert { input, seed, out } => run_convert(
            &service(config_path)?,
            &input.input,
            seed,
            out.as_deref(),
            cli.json,
        ),
        Command::Batch { paths } => run_batch(&service(config_path)?, paths, cli.json).await,
        Command::Config(args) => run_config(config_path, &args, cli.json),
    }
}
