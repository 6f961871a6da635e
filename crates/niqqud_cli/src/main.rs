//! CLI entry point for inspecting niqqud parsing.
//!
//! # Responsibility
//! - Parse text from arguments (or stdin), apply optional toggles and print
//!   one line per letter followed by the re-rendered text.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `niqqud_cli [--toggle INDEX:GLYPH]... [TEXT]...`
//! where `GLYPH` is either the mark itself or `U+XXXX`.
//!
//! Environment: `NIQQUD_LOG_DIR` (absolute) enables file logging at
//! `NIQQUD_LOG_LEVEL` (defaults to the build-mode level).

use clap::Parser;
use log::warn;
use niqqud_core::{default_log_level, find_by_glyph, init_logging, EditSession, LetterInstance};
use std::io::Read;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "niqqud_cli",
    version,
    about = "Parse Hebrew text with niqqud and print its letters"
)]
struct Cli {
    /// Toggle a niqqud on a letter before printing (repeatable).
    /// GLYPH is the mark itself or `U+XXXX`.
    #[arg(long = "toggle", value_name = "INDEX:GLYPH", value_parser = parse_toggle)]
    toggles: Vec<Toggle>,

    /// Text to parse; read from stdin when omitted.
    text: Vec<String>,
}

#[derive(Debug, Clone)]
struct Toggle {
    index: usize,
    glyph: String,
}

fn main() -> ExitCode {
    if let Err(err) = setup_logging() {
        eprintln!("logging disabled: {err}");
    }

    let cli = Cli::parse();

    let text = if cli.text.is_empty() {
        let mut buffer = String::new();
        if let Err(err) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("failed to read stdin: {err}");
            return ExitCode::FAILURE;
        }
        buffer.trim_end_matches(['\n', '\r']).to_string()
    } else {
        cli.text.join(" ")
    };

    let mut session = EditSession::from_text(&text);
    for toggle in &cli.toggles {
        let Some(niqqud) = find_by_glyph(&toggle.glyph).next() else {
            eprintln!("unknown niqqud {}", describe(&toggle.glyph));
            return ExitCode::from(2);
        };
        if let Err(err) = session.toggle_at(toggle.index, niqqud) {
            warn!("event=cli_toggle module=cli status=error index={}", toggle.index);
            eprintln!("toggle {}:{} failed: {err}", toggle.index, describe(&toggle.glyph));
            return ExitCode::FAILURE;
        }
    }

    for (index, letter) in session.letters().iter().enumerate() {
        println!("{}", describe_letter(index, letter));
    }
    println!("text={}", session.full_text());
    ExitCode::SUCCESS
}

fn setup_logging() -> Result<(), String> {
    let Ok(log_dir) = std::env::var("NIQQUD_LOG_DIR") else {
        return Ok(());
    };
    let level = std::env::var("NIQQUD_LOG_LEVEL")
        .unwrap_or_else(|_| default_log_level().as_str().to_string());
    init_logging(&level, &log_dir)
}

fn parse_toggle(spec: &str) -> Result<Toggle, String> {
    let (index, glyph) = spec
        .split_once(':')
        .ok_or_else(|| format!("invalid toggle `{spec}`; expected INDEX:GLYPH"))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid toggle index `{index}`: {err}"))?;
    Ok(Toggle {
        index,
        glyph: parse_glyph(glyph.trim())?,
    })
}

fn parse_glyph(value: &str) -> Result<String, String> {
    let Some(hex) = value
        .strip_prefix("U+")
        .or_else(|| value.strip_prefix("u+"))
    else {
        return Ok(value.to_string());
    };
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .map(String::from)
        .ok_or_else(|| format!("invalid code point `{value}`"))
}

fn describe(glyph: &str) -> String {
    glyph
        .chars()
        .map(|c| format!("U+{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe_letter(index: usize, letter: &LetterInstance) -> String {
    let consonant = letter
        .consonant()
        .map(|c| format!("U+{:04X}", c as u32))
        .unwrap_or_else(|| "-".to_string());
    let attached = letter
        .attached_niqqud()
        .map(|niqqud| niqqud.name)
        .collect::<Vec<_>>()
        .join(",");
    let offered = letter
        .applicable_niqqud_by_groups()
        .iter()
        .map(|group| group.group.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{index}\tconsonant={consonant}\tniqqud=[{attached}]\tgroups=[{offered}]\trepr={}",
        letter.representation()
    )
}
