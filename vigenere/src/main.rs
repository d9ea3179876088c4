use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher (letters only)")]
    key: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Applies the cipher in the given mode. Keys are case-insensitive.
fn run(content: &str, key: &str, mode: &OperationMode) -> Result<String> {
    let key = key.to_ascii_lowercase();
    let result = match mode {
        OperationMode::Encrypt => vigenere_analysis::encrypt(content, &key),
        OperationMode::Decrypt => vigenere_analysis::decrypt(content, &key),
    };
    Ok(result?)
}

/// Main entry point for the Vigenère cipher program.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Read input file content
    let content: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read input file {}", cli.file))?;

    info!(mode = ?cli.mode, key = %cli.key, "applying Vigenère cipher");
    let result = run(&content, &cli.key, &cli.mode)?;

    // Write result to output file
    std::fs::write(&cli.output, result)
        .with_context(|| format!("Failed to write output file {}", cli.output))?;

    println!("Operation completed successfully! Output saved to: {}", cli.output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_is_case_insensitive_in_key() {
        let encrypted = run("hello", "KEY", &OperationMode::Encrypt).unwrap();
        assert_eq!(encrypted, "rijvs");
        assert_eq!(run(&encrypted, "key", &OperationMode::Decrypt).unwrap(), "hello");
    }

    #[test]
    fn test_run_rejects_bad_key() {
        assert!(run("hello", "k e y", &OperationMode::Encrypt).is_err());
    }

    #[test]
    fn test_parse_mode() {
        let cli = Cli::try_parse_from([
            "vigenere", "-f", "in.txt", "-k", "lemon", "-o", "out.txt", "-m", "decrypt",
        ])
        .unwrap();
        assert!(matches!(cli.mode, OperationMode::Decrypt));
    }
}
