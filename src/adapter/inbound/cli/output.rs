//! Terminal output for the console.
//!
//! Every helper honors the global flags: `--json` turns each line into a
//! `{"type": ..., "payload": ...}` record on stdout, `--quiet` drops
//! everything except warnings and errors, and `--color` decides whether
//! ANSI styling is emitted.

use std::fmt::Display;
use std::io::IsTerminal;
use std::sync::OnceLock;
use std::time::Duration;

use owo_colors::OwoColorize;
use parking_lot::RwLock;
use serde_json::json;

/// Output flags shared by all handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
    pub verbose: u8,
    pub color: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8, color: bool) -> Self {
        Self {
            json,
            quiet,
            verbose,
            color,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(false, false, 0, false)
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn current() -> OutputConfig {
    *cell().read()
}

fn suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

fn emit(kind: &str, payload: serde_json::Value) {
    println!("{}", json!({ "type": kind, "payload": payload }));
}

/// Whether stdout should get ANSI colors when the user asked for `auto`.
#[must_use]
pub fn detect_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Install the flags parsed from the command line.
pub fn configure(config: OutputConfig) {
    *cell().write() = config;
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

fn paint<F>(value: impl Display, style: F) -> String
where
    F: FnOnce(&str) -> String,
{
    let value = value.to_string();
    if current().color && !current().json {
        style(&value)
    } else {
        value
    }
}

pub fn highlight(value: impl Display) -> String {
    paint(value, |v| v.cyan().to_string())
}

pub fn muted(value: impl Display) -> String {
    paint(value, |v| v.dimmed().to_string())
}

pub fn strong(value: impl Display) -> String {
    paint(value, |v| v.bold().to_string())
}

fn green(value: impl Display) -> String {
    paint(value, |v| v.green().to_string())
}

fn yellow(value: impl Display) -> String {
    paint(value, |v| v.yellow().to_string())
}

fn red(value: impl Display) -> String {
    paint(value, |v| v.red().to_string())
}

/// Application name and version.
pub fn header(version: &str) {
    let config = current();
    if config.json {
        emit("header", json!({ "app": "pbgui", "version": version }));
        return;
    }
    if suppressed(config) {
        return;
    }
    println!("{} {}", strong("pbgui"), muted(version));
    println!();
}

pub fn section(title: &str) {
    let config = current();
    if config.json {
        emit("section", json!({ "title": title }));
        return;
    }
    if suppressed(config) {
        return;
    }
    println!();
    println!("{}", strong(title));
}

/// A labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = current();
    let value = value.to_string();
    if config.json {
        emit("field", json!({ "label": label, "value": value }));
        return;
    }
    if suppressed(config) {
        return;
    }
    println!("  {:<16} {}", muted(label), value);
}

/// A labeled value prefixed with a status glyph.
pub fn status(glyph: &str, label: &str, value: impl Display) {
    let config = current();
    let value = value.to_string();
    if config.json {
        emit(
            "status",
            json!({ "glyph": glyph, "label": label, "value": value }),
        );
        return;
    }
    if suppressed(config) {
        return;
    }
    println!("  {glyph} {:<28} {}", label, value);
}

pub fn success(message: &str) {
    let config = current();
    if config.json {
        emit("success", json!({ "message": message }));
        return;
    }
    if suppressed(config) {
        return;
    }
    println!("  {} {}", green("✓"), message);
}

pub fn warning(message: &str) {
    if current().json {
        emit("warning", json!({ "message": message }));
        return;
    }
    println!("  {} {}", yellow("⚠"), message);
}

pub fn error(message: &str) {
    if current().json {
        eprintln!(
            "{}",
            json!({ "type": "error", "payload": { "message": message } })
        );
        return;
    }
    eprintln!("  {} {}", red("×"), message);
}

pub fn hint(message: &str) {
    let config = current();
    if config.json {
        emit("hint", json!({ "message": message }));
        return;
    }
    if suppressed(config) {
        return;
    }
    println!("  {}: {}", highlight("hint"), muted(message));
}

/// Emit a custom JSON document.
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}

const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Start a spinner. Hidden in JSON and quiet mode.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    let config = current();
    if config.json || config.quiet {
        let pb = indicatif::ProgressBar::hidden();
        pb.set_message(message.to_string());
        return pb;
    }

    let pb = indicatif::ProgressBar::new_spinner();
    let template = if config.color {
        "  {spinner:.cyan} {msg}"
    } else {
        "  {spinner} {msg}"
    };
    if let Ok(style) = indicatif::ProgressStyle::default_spinner()
        .tick_strings(BRAILLE_SPINNER)
        .template(template)
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn spinner_success(pb: &indicatif::ProgressBar, message: &str) {
    let config = current();
    if config.json {
        emit("spinner_success", json!({ "message": message }));
        pb.finish_and_clear();
        return;
    }
    if config.quiet {
        pb.finish_and_clear();
        return;
    }
    pb.finish_with_message(format!("{} {}", green("✓"), message));
}

pub fn spinner_fail(pb: &indicatif::ProgressBar, message: &str) {
    if current().json {
        emit("spinner_fail", json!({ "message": message }));
        pb.finish_and_clear();
        return;
    }
    pb.finish_with_message(format!("{} {}", red("×"), message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_when_color_is_off() {
        configure(OutputConfig::default());
        assert_eq!(highlight("pbdir"), "pbdir");
        assert_eq!(muted(3), "3");
    }
}
