// src/cli/menu.rs
use anyhow::Result;
use inquire::{Confirm, Select, Text};

use crate::cli::handlers;
use crate::core::config::Config;
use crate::models::PasswordGenerationOptions;

const ANALYZE: &str = "🔍  Analyze a password";
const GENERATE: &str = "🔐  Generate secure password";
const IMPROVE: &str = "✨  Improve a password";
const ALGORITHMS: &str = "📚  Hashing algorithms";
const EXAMPLES: &str = "🧪  Example passwords";
const EXIT: &str = "❌  Exit";

fn prompt_generation_options(config: &Config) -> Result<PasswordGenerationOptions> {
    let length: usize = Text::new("Password length:")
        .with_default(&config.default_password_length.to_string())
        .prompt()
        .and_then(|s| s.trim().parse().map_err(|_| inquire::InquireError::Custom("Invalid number".into())))?;

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(true)
        .prompt()?;

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(true)
        .prompt()?;

    let include_digits = Confirm::new("Include numbers?")
        .with_default(true)
        .prompt()?;

    let include_special = Confirm::new("Include symbols?")
        .with_default(true)
        .prompt()?;

    Ok(PasswordGenerationOptions {
        length,
        include_lowercase,
        include_uppercase,
        include_digits,
        include_special,
    })
}

pub fn run_cli_menu(config: &Config) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║      🦀 PASSWORD SECURITY LAB        ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let options = vec![ANALYZE, GENERATE, IMPROVE, ALGORITHMS, EXAMPLES, EXIT];

        let selection = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable()?;

        // Individual actions report their own failures and return to the menu
        let outcome = match selection {
            Some(ANALYZE) => handlers::prompt_password("Password to analyze:")
                .and_then(|password| handlers::handle_analyze(config, &password, false)),
            Some(GENERATE) => prompt_generation_options(config)
                .and_then(|options| handlers::handle_generate(&options, false)),
            Some(IMPROVE) => handlers::prompt_password("Password to improve:")
                .and_then(|password| handlers::handle_improve(config, &password, false)),
            Some(ALGORITHMS) => handlers::handle_algorithms(false),
            Some(EXAMPLES) => handlers::handle_examples(false),
            Some(_) | None => break,
        };

        if let Err(e) = outcome {
            println!("❌ {}", e);
            log::warn!("Menu action failed: {}", e);
        }
        println!();
    }

    println!("👋 Goodbye!");
    Ok(())
}
