use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vigenere_analysis::{AnalysisConfig, AnalysisError, Analyzer, LetterStream, ScanBound, decrypt};

/// Command-line arguments for the Vigenère solver program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: String,

    /// Skip key length estimation and use this key length
    #[arg(short, long, help = "Known key length (skips key length estimation)")]
    key_length: Option<usize>,

    #[arg(long, default_value_t = 2, help = "Smallest key length to consider")]
    min_key_length: usize,

    #[arg(long, default_value_t = 14, help = "Largest key length to consider")]
    max_key_length: usize,

    /// Compare every pair of letters instead of stopping two letters early
    #[arg(long, help = "Scan the whole stream when counting coincidences")]
    natural_bound: bool,

    #[arg(short, long, help = "Log analysis details to stderr")]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> AnalysisConfig {
        let scan_bound = if self.natural_bound {
            ScanBound::Natural
        } else {
            ScanBound::Compat
        };
        AnalysisConfig::default()
            .with_min_key_length(self.min_key_length)
            .with_max_key_length(self.max_key_length)
            .with_scan_bound(scan_bound)
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Recovers the key for `ciphertext` and returns it with the decrypted text.
fn solve(ciphertext: &str, cli: &Cli) -> Result<(String, String)> {
    let stream = LetterStream::from_text(ciphertext);
    if stream.len() < 200 {
        warn!("Only {} letters of ciphertext; the analysis may be unreliable", stream.len());
    }

    let analyzer = Analyzer::new(cli.config())?;
    let solution = match cli.key_length {
        Some(key_length) => analyzer.analyze_with_key_length(&stream, key_length),
        None => analyzer.analyze(&stream),
    };
    let solution = match solution {
        Ok(solution) => solution,
        Err(err) if err.is_insufficient_input() => {
            bail!("insufficient ciphertext for analysis: {err}")
        }
        Err(err @ AnalysisError::InvalidKeyLength { .. }) => {
            bail!("{err}: the key cannot be longer than the ciphertext")
        }
        Err(err) => return Err(err.into()),
    };
    info!(key_length = solution.key_length, "key length");

    let plaintext = decrypt(ciphertext, &solution.key)?;
    Ok((solution.key, plaintext))
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    init_logging(cli.verbose);

    let input: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read input file {}", cli.file))?;

    let (key, plaintext) = solve(&input, &cli)?;

    // Output key to stdout
    println!("Key found: {}", key);

    std::fs::write(&cli.output, plaintext)
        .with_context(|| format!("Failed to write output file {}", cli.output))?;

    Ok(())
}
