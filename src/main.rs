//! Language options CLI - inspect and switch the interface language
//!
//! Usage:
//!   language-options list [--json]        # Supported languages with display names
//!   language-options current              # Active language
//!   language-options name [code]          # Display name (defaults to "vn")
//!   language-options set [code]           # Switch language (defaults to "vn")
//!   language-options t <key> [name=value] # Translate a key in the active language
//!
//! Optional environment variables:
//! - DEFAULT_LANGUAGE (defaults to vn)
//! - INITIAL_LANGUAGE
//! - LOCALES_DIR (defaults to the compiled-in bundles)
//! - DETECT_SYSTEM_LOCALE (defaults to true)

use anyhow::{bail, Context, Result};
use language_options::config::Config;
use language_options::i18n::{
    language_options, LanguageOptions, LocalizationRuntime, DEFAULT_LANGUAGE,
};
use tracing::info;

fn print_usage() {
    println!("Usage: language-options <command> [args]");
    println!();
    println!("Commands:");
    println!("  list [--json]         List supported languages");
    println!("  current               Show the active language");
    println!("  name [code]           Show the display name of a language (default: vn)");
    println!("  set [code]            Switch the active language (default: vn)");
    println!("  t <key> [name=value]  Translate a key, interpolating arguments");
    println!("  help                  Show this message");
}

fn list_command(options: &LanguageOptions, json: bool) -> Result<()> {
    let entries = options.entries()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in entries {
        let marker = if entry.current { "*" } else { " " };
        println!("{} {:<8} {}", marker, entry.code, entry.name);
    }
    Ok(())
}

fn set_command(options: &LanguageOptions, code: Option<&str>) -> Result<()> {
    let accepted = match code {
        Some(code) => options.change_language(code),
        None => options.change_to_default(),
    };

    if !accepted {
        bail!(
            "Unsupported language: {} (supported: {})",
            code.unwrap_or(DEFAULT_LANGUAGE),
            options.supported_languages().join(", ")
        );
    }

    println!("{}", options.current_language());
    Ok(())
}

fn translate_command(runtime: &LocalizationRuntime, args: &[String]) -> Result<()> {
    let key = args.first().context("Missing translation key")?;
    let pairs: Vec<(&str, &str)> = args[1..]
        .iter()
        .filter_map(|arg| arg.split_once('='))
        .collect();

    println!("{}", runtime.translate_with(key, &pairs));
    Ok(())
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("language_options=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let config = Config::from_env()?;
    let runtime = LocalizationRuntime::from_config(&config)
        .context("Failed to initialize localization runtime")?;
    LocalizationRuntime::install(runtime)?;
    info!(
        "Loaded {} languages",
        LocalizationRuntime::global().resources().len()
    );

    let options = language_options()?;
    let command = &args[1];

    match command.as_str() {
        "list" => list_command(&options, args.get(2).is_some_and(|arg| arg == "--json")),
        "current" => {
            println!("{}", options.current_language());
            Ok(())
        }
        "name" => {
            let name = match args.get(2) {
                Some(code) => options.language_name(code)?,
                None => options.default_language_name()?,
            };
            println!("{}", name);
            Ok(())
        }
        "set" => set_command(&options, args.get(2).map(String::as_str)),
        "t" => translate_command(LocalizationRuntime::global(), &args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        _ => {
            print_usage();
            bail!("Unknown command: {}", command);
        }
    }
}
