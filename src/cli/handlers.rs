// src/cli/handlers.rs
use anyhow::{bail, Context, Result};
use console::{style, StyledObject};
use serde::Serialize;

use crate::analyzer::{validate_password, PasswordAnalyzer, StrengthLevel};
use crate::api::types::{
    AlgorithmListResponse, AnalysisData, AnalysisResponse, CrackTimeDetail, CrackTimeResponse,
    ExampleListResponse, GeneratedPasswordData, ImproveResponse, ImprovementData, PasswordGenerationResponse,
};
use crate::cli::CliCommand;
use crate::core::config::Config;
use crate::crypto;
use crate::education::{AlgorithmInfo, EducationManager, ExamplePassword};
use crate::generators::{suggest_improvements, PasswordGenerator};
use crate::models::{Improvement, PasswordGenerationOptions};

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn styled_level(level: StrengthLevel) -> StyledObject<&'static str> {
    let label = style(level.label()).bold();
    match level {
        StrengthLevel::VeryWeak | StrengthLevel::Weak => label.red(),
        StrengthLevel::Moderate => label.yellow(),
        StrengthLevel::Strong | StrengthLevel::VeryStrong => label.green(),
    }
}

pub fn render_analysis(data: &AnalysisData) -> String {
    let strength = &data.strength;
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", style("🔍 Password Analysis").bold().cyan()));
    out.push_str(&format!(
        "Strength: {}/100 ({})\n",
        strength.score,
        styled_level(strength.level)
    ));
    out.push_str(&format!("Length:   {} characters\n", strength.length));
    out.push_str(&format!("Entropy:  {:.2} bits\n", strength.entropy));
    if strength.is_common {
        out.push_str(&format!("{}\n", style("⚠️  Found in the common-password list").red()));
    }

    out.push_str(&format!("\n{}\n", style("⏱️  Time to crack").bold().cyan()));
    for entry in &data.crack_times {
        out.push_str(&format!("  {:<10} {}\n", entry.algorithm.name(), entry.time_human));
    }

    out.push_str(&format!("\n{}\n", style("💡 Suggestions").bold().cyan()));
    for suggestion in &data.suggestions {
        out.push_str(&format!("  {}\n", suggestion));
    }

    out.push_str(&format!("\n{}\n", style("🔐 Stored as").bold().cyan()));
    let hashes = &data.hashes;
    for (label, digest) in [
        ("Plaintext", &hashes.plaintext),
        ("MD5", &hashes.md5),
        ("SHA-256", &hashes.sha256),
        ("bcrypt", &hashes.bcrypt),
        ("Argon2", &hashes.argon2),
    ] {
        out.push_str(&format!("  {:<10} {}\n", label, style(digest).dim()));
    }

    out
}

pub fn render_improvements(original: &str, improvements: &[Improvement]) -> String {
    let mut out = format!("\n{} {}\n", style("✨ Improvements for").bold().cyan(), original);
    if improvements.is_empty() {
        out.push_str("  No further improvements to suggest.\n");
    }
    for (rank, improvement) in improvements.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {}  {}/100 ({})\n     {}: {}\n",
            rank + 1,
            style(&improvement.password).bold(),
            improvement.score,
            styled_level(improvement.level),
            improvement.strategy,
            improvement.description
        ));
    }
    out
}

pub fn render_algorithms(algorithms: &[AlgorithmInfo]) -> String {
    let mut out = String::new();
    for info in algorithms {
        out.push_str(&format!(
            "\n{} ({}) [{}]\n  Speed:    {}\n  {}\n  Use case: {}\n",
            style(&info.name).bold(),
            info.year,
            info.status,
            info.speed,
            info.description,
            info.use_case
        ));
        if info.available == Some(false) {
            out.push_str(&format!("  {}\n", style("Backend not compiled in").yellow()));
        }
    }
    out
}

pub fn render_examples(examples: &[ExamplePassword]) -> String {
    let mut out = String::new();
    for example in examples {
        out.push_str(&format!(
            "  {:<36} {:>3}/100  {}\n",
            example.password, example.expected_score, example.description
        ));
    }
    out
}

pub fn handle_analyze(config: &Config, password: &str, json: bool) -> Result<()> {
    let analyzer = PasswordAnalyzer::new(validate_password(Some(password))?)?;
    let hashes = crypto::hash_comparison(password, &config.hash_params());
    let data = AnalysisData::new(&analyzer, &hashes);

    log::debug!("CLI analysis scored {}", data.strength.score);

    if json {
        return print_json(&AnalysisResponse {
            success: true,
            data: Some(data),
            error: None,
        });
    }
    print!("{}", render_analysis(&data));
    Ok(())
}

pub fn handle_crack_time(password: &str, algorithm: &str, json: bool) -> Result<()> {
    let analyzer = PasswordAnalyzer::new(validate_password(Some(password))?)?;
    let detail = CrackTimeDetail::from(analyzer.estimate_crack_time(algorithm)?);

    if json {
        return print_json(&CrackTimeResponse {
            success: true,
            data: Some(detail),
            error: None,
        });
    }
    println!(
        "{}: {} combinations at {:e} guesses/s",
        style(detail.algorithm.name()).bold(),
        detail.combinations,
        detail.attack_speed
    );
    println!("Time to crack: {}", style(&detail.time_human).bold());
    Ok(())
}

pub fn handle_generate(options: &PasswordGenerationOptions, json: bool) -> Result<()> {
    let generated = PasswordGenerator::new().generate_analyzed(options, &mut rand::thread_rng())?;
    let data = GeneratedPasswordData::from(generated);

    if json {
        return print_json(&PasswordGenerationResponse {
            success: true,
            data: Some(data),
            error: None,
        });
    }
    println!("\nGenerated Password: {}", style(&data.password).bold());
    println!(
        "Strength: {}/100 ({}), {:.2} bits",
        data.score,
        styled_level(data.level),
        data.entropy
    );
    Ok(())
}

pub fn handle_improve(config: &Config, password: &str, json: bool) -> Result<()> {
    let original = validate_password(Some(password))?.to_string();
    let improvements = suggest_improvements(&original, config.improve_top_n, &mut rand::thread_rng());

    if json {
        return print_json(&ImproveResponse {
            success: true,
            data: Some(ImprovementData { original, improvements }),
            error: None,
        });
    }
    print!("{}", render_improvements(&original, &improvements));
    Ok(())
}

pub fn handle_algorithms(json: bool) -> Result<()> {
    let education = EducationManager::new();
    if json {
        return print_json(&AlgorithmListResponse {
            success: true,
            data: education.get_algorithms().to_vec(),
        });
    }
    print!("{}", render_algorithms(education.get_algorithms()));
    Ok(())
}

pub fn handle_examples(json: bool) -> Result<()> {
    let education = EducationManager::new();
    if json {
        return print_json(&ExampleListResponse {
            success: true,
            data: education.get_examples().to_vec(),
        });
    }
    print!("{}", render_examples(education.get_examples()));
    Ok(())
}

pub fn prompt_password(message: &str) -> Result<String> {
    inquire::Password::new(message)
        .with_display_mode(inquire::PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()
        .context("Failed to read password")
}

/// Run any one-shot command. `Serve` is handled by the binary.
pub fn run_command(config: &Config, command: CliCommand, json: bool) -> Result<()> {
    match command {
        CliCommand::Analyze { password } => {
            let password = match password {
                Some(password) => password,
                None => prompt_password("Password to analyze:")?,
            };
            handle_analyze(config, &password, json)
        }
        CliCommand::CrackTime { password, algorithm } => handle_crack_time(&password, &algorithm, json),
        CliCommand::Generate {
            length,
            no_lowercase,
            no_uppercase,
            no_digits,
            no_special,
        } => {
            let options = PasswordGenerationOptions {
                length: length.unwrap_or(config.default_password_length),
                include_lowercase: !no_lowercase,
                include_uppercase: !no_uppercase,
                include_digits: !no_digits,
                include_special: !no_special,
            };
            handle_generate(&options, json)
        }
        CliCommand::Improve { password } => {
            let password = match password {
                Some(password) => password,
                None => prompt_password("Password to improve:")?,
            };
            handle_improve(config, &password, json)
        }
        CliCommand::Algorithms => handle_algorithms(json),
        CliCommand::Examples => handle_examples(json),
        CliCommand::Serve { .. } => bail!("The serve command must be run from the main binary"),
    }
}
