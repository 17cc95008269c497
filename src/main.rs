use cifra::algorithm::{Algorithm, Key, KeyKind};
use cifra::detect::{auto_decrypt, DetectionOutcome};
use cifra::dispatch::{decrypt, encrypt, TransformResult};
use cifra::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("CIFRA_VERSION");
const BUILD: &str = env!("CIFRA_BUILD");
const PROFILE: &str = env!("CIFRA_PROFILE");
const GIT_HASH: &str = env!("CIFRA_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "cifra")]
#[command(author, about = "Classical text obfuscation toolkit with heuristic cipher detection", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a chosen algorithm
    #[command(alias = "e")]
    Encrypt {
        /// Algorithm to apply
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Algorithm,

        /// Key: a shift for caesar/extended, a keyword for vigenere
        #[arg(long, short)]
        key: Option<String>,

        /// Text to transform
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Emit the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decrypt text with a chosen algorithm
    #[command(alias = "d")]
    Decrypt {
        /// Algorithm to apply
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Algorithm,

        /// Key: a shift for caesar/extended, a keyword for vigenere
        #[arg(long, short)]
        key: Option<String>,

        /// Text to transform
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Emit the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Guess which algorithm produced a ciphertext and decrypt it
    #[command(alias = "a")]
    Detect {
        /// Ciphertext of unknown origin
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,

        /// Read the ciphertext from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Emit the full outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show algorithm descriptions and key requirements
    #[command(alias = "i")]
    Info {
        /// Show a single algorithm instead of all of them
        #[arg(value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,
    },
}

fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse().map_err(|e| format!("{}", e))
}

/// A key that parses as an integer becomes numeric, anything else is a keyword
fn parse_key(key: Option<String>) -> Key {
    match key {
        Some(s) => match s.trim().parse::<i32>() {
            Ok(n) => Key::Numeric(n),
            Err(_) => Key::Text(s),
        },
        None => Key::None,
    }
}

fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match text {
        Some(t) => Ok(t),
        None => {
            // clap guarantees `file` is present when `text` is absent
            let path = file.expect("clap enforces text or file");
            let mut content = std::fs::read_to_string(path)?;
            if content.ends_with('\n') {
                content.pop();
                if content.ends_with('\r') {
                    content.pop();
                }
            }
            Ok(content)
        }
    }
}

fn print_transform(result: &TransformResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", result.text);
    }
    Ok(())
}

fn print_detection(outcome: &DetectionOutcome) {
    let DetectionOutcome::Detected {
        algorithm,
        text,
        key,
        confidence,
        alternatives,
    } = outcome
    else {
        return;
    };

    println!("Cifra Auto-Detection");
    println!("====================");
    println!();
    println!("Algorithm: {}", algorithm);
    println!("Key: {}", key);
    println!("Confidence: {}", confidence);
    println!("Text: {}", text);
    if !alternatives.is_empty() {
        println!();
        println!("Alternatives ({}):", alternatives.len());
        for candidate in alternatives {
            let marker = if candidate.dictionary_hit { "*" } else { " " };
            println!(
                "{} {:>8} key={:<5} {}",
                marker, candidate.algorithm, candidate.key, candidate.text
            );
        }
    }
}

fn show_info(algorithm: Option<Algorithm>) -> String {
    let mut output = String::new();
    output.push_str("Cifra Algorithms\n");
    output.push_str("================\n\n");

    let listed: Vec<Algorithm> = match algorithm {
        Some(a) => vec![a],
        None => Algorithm::ALL.to_vec(),
    };

    for algorithm in listed {
        let info = algorithm.info();
        output.push_str(&format!("{} ({})\n", info.display_name, algorithm));
        output.push_str(&format!("  {}\n", info.description));
        match info.key_kind {
            KeyKind::None => output.push_str("  Key: none\n"),
            _ => output.push_str(&format!(
                "  Key: {} ({})\n",
                info.key_label, info.key_placeholder
            )),
        }
        output.push_str(&format!("  Example: {}\n\n", info.example));
    }

    output
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("cifra {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt {
            algorithm,
            key,
            text,
            file,
            json,
        } => read_input(text, file)
            .and_then(|input| encrypt(&input, algorithm, &parse_key(key)))
            .and_then(|result| print_transform(&result, json)),

        Commands::Decrypt {
            algorithm,
            key,
            text,
            file,
            json,
        } => read_input(text, file)
            .and_then(|input| decrypt(&input, algorithm, &parse_key(key)))
            .and_then(|result| print_transform(&result, json)),

        Commands::Detect { text, file, json } => match read_input(text, file) {
            Ok(input) => {
                let outcome = auto_decrypt(&input);
                if json {
                    match serde_json::to_string_pretty(&outcome) {
                        Ok(rendered) => {
                            println!("{}", rendered);
                            Ok(())
                        }
                        Err(e) => Err(e.into()),
                    }
                } else if outcome == DetectionOutcome::NoCandidateFound {
                    eprintln!("Unable to detect the algorithm automatically");
                    return ExitCode::FAILURE;
                } else {
                    print_detection(&outcome);
                    Ok(())
                }
            }
            Err(e) => Err(e),
        },

        Commands::Info { algorithm } => {
            print!("{}", show_info(algorithm));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
