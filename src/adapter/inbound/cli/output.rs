//! Session output formatting.
//!
//! Renders the menu, wizard steps, banners and listings either as styled
//! text or, in JSON mode, as one `{"type", "payload"}` object per line.
//! Output goes to any writer so sessions can be captured in tests.

use std::io::Write;

use owo_colors::{OwoColorize, Style};
use serde_json::json;
use tabled::{Table, Tabled};

use crate::domain::{format_price, Configuration};
use crate::error::Result;

/// Runtime output configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Style banners and headings with ANSI colors.
    pub color: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, color: bool) -> Self {
        Self { json, color }
    }
}

/// User-visible outcomes, each rendered as its own framed banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    Saved,
    NoneSaved,
    NothingToDelete,
    Deleted,
    NotFound,
    InvalidChoice,
    Exiting,
}

impl Notice {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Saved => "Configuration Saved!",
            Self::NoneSaved => "No saved configurations found.",
            Self::NothingToDelete => "No configurations to delete.",
            Self::Deleted => "Configuration deleted!",
            Self::NotFound => "Config not found!",
            Self::InvalidChoice => "Invalid choice!",
            Self::Exiting => "Exiting Configurator...",
        }
    }

    /// Stable identifier used in JSON output.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Saved => "saved",
            Self::NoneSaved => "none_saved",
            Self::NothingToDelete => "nothing_to_delete",
            Self::Deleted => "deleted",
            Self::NotFound => "not_found",
            Self::InvalidChoice => "invalid_choice",
            Self::Exiting => "exiting",
        }
    }

    /// Frame glyph; distinct per tone so outcomes stay tellable apart
    /// without color.
    const fn glyph(self) -> char {
        match self {
            Self::Saved | Self::Deleted => '#',
            Self::NoneSaved | Self::NothingToDelete => '~',
            Self::NotFound | Self::InvalidChoice => '!',
            Self::Exiting => '=',
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Saved | Self::Deleted => Style::new().green().bold(),
            Self::NoneSaved | Self::NothingToDelete => Style::new().yellow(),
            Self::NotFound | Self::InvalidChoice => Style::new().red().bold(),
            Self::Exiting => Style::new().cyan(),
        }
    }
}

#[derive(Tabled)]
struct ConfigurationRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Configuration")]
    description: String,
    #[tabled(rename = "Price")]
    price: String,
}

/// Writes session output to `W`.
#[derive(Debug)]
pub struct Output<W> {
    writer: W,
    config: OutputConfig,
}

impl<W: Write> Output<W> {
    pub const fn new(writer: W, config: OutputConfig) -> Self {
        Self { writer, config }
    }

    /// Consume the output and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.config.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn emit_json_line(&mut self, kind: &str, payload: serde_json::Value) -> Result<()> {
        writeln!(
            self.writer,
            "{}",
            json!({
                "type": kind,
                "payload": payload,
            })
        )?;
        Ok(())
    }

    fn numbered(&mut self, options: &[&str]) -> Result<()> {
        for (i, option) in options.iter().enumerate() {
            writeln!(self.writer, "{}. {option}", i + 1)?;
        }
        Ok(())
    }

    /// Print an inline prompt and flush so it shows before input is read.
    fn prompt_line(&mut self, message: &str) -> Result<()> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Print the top-level menu and its prompt.
    pub fn menu(&mut self, title: &str, options: &[&str]) -> Result<()> {
        if self.config.json {
            return self.emit_json_line(
                "menu",
                json!({
                    "title": title,
                    "options": options,
                }),
            );
        }

        let frame = "*".repeat(title.len() + 4);
        let heading = self.paint(title, Style::new().bold());
        writeln!(self.writer)?;
        writeln!(self.writer, "{frame}")?;
        writeln!(self.writer, "* {heading} *")?;
        writeln!(self.writer, "{frame}")?;
        self.numbered(options)?;
        self.prompt_line("Enter your choice: ")
    }

    /// Print one wizard step and its prompt.
    pub fn step(&mut self, title: &str, options: &[&str]) -> Result<()> {
        if self.config.json {
            return self.emit_json_line(
                "prompt",
                json!({
                    "title": title,
                    "options": options,
                }),
            );
        }

        let heading = self.paint(&format!("--- {title} ---"), Style::new().bold());
        writeln!(self.writer)?;
        writeln!(self.writer, "{heading}")?;
        self.numbered(options)?;
        self.prompt_line("Enter choice: ")
    }

    /// Ask for free-form text.
    pub fn ask(&mut self, message: &str) -> Result<()> {
        if self.config.json {
            return self.emit_json_line("prompt", json!({ "message": message }));
        }

        writeln!(self.writer)?;
        self.prompt_line(message)
    }

    /// Print a framed banner for an outcome.
    pub fn notice(&mut self, notice: Notice) -> Result<()> {
        if self.config.json {
            return self.emit_json_line(
                "notice",
                json!({
                    "kind": notice.kind(),
                    "message": notice.message(),
                }),
            );
        }

        let message = notice.message();
        let glyph = notice.glyph();
        let frame: String = std::iter::repeat(glyph).take(message.len() + 8).collect();
        let edge: String = std::iter::repeat(glyph).take(2).collect();
        let line = format!("{edge}  {message}  {edge}");

        let style = notice.style();
        let frame = self.paint(&frame, style);
        let line = self.paint(&line, style);
        writeln!(self.writer)?;
        writeln!(self.writer, "{frame}")?;
        writeln!(self.writer, "{line}")?;
        writeln!(self.writer, "{frame}")?;
        Ok(())
    }

    /// Print the summary of a freshly saved configuration.
    pub fn summary(&mut self, config: &Configuration) -> Result<()> {
        if self.config.json {
            return self.emit_json_line("configuration", json!(config));
        }

        writeln!(self.writer, "Summary: {}", config.description())?;
        writeln!(self.writer, "Final Price: {}", format_price(config.price()))?;
        Ok(())
    }

    /// Print saved configurations as a table, in the order given.
    pub fn listing(&mut self, configs: &[&Configuration]) -> Result<()> {
        if self.config.json {
            return self.emit_json_line("configurations", json!(configs));
        }

        let rows = configs.iter().enumerate().map(|(i, config)| ConfigurationRow {
            rank: i + 1,
            description: config.description().to_string(),
            price: format_price(config.price()),
        });
        let table = Table::new(rows).to_string();

        let heading = self.paint(
            "--- Your Saved Configurations (Sorted by Price) ---",
            Style::new().bold(),
        );
        writeln!(self.writer)?;
        writeln!(self.writer, "{heading}")?;
        for line in table.lines() {
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn text_output() -> Output<Vec<u8>> {
        Output::new(Vec::new(), OutputConfig::default())
    }

    fn json_output() -> Output<Vec<u8>> {
        Output::new(Vec::new(), OutputConfig::new(true, false))
    }

    fn rendered(output: Output<Vec<u8>>) -> String {
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn notices_render_distinct_banners() {
        let all = [
            Notice::Saved,
            Notice::NoneSaved,
            Notice::NothingToDelete,
            Notice::Deleted,
            Notice::NotFound,
            Notice::InvalidChoice,
            Notice::Exiting,
        ];

        let banners: Vec<String> = all
            .iter()
            .map(|notice| {
                let mut out = text_output();
                out.notice(*notice).unwrap();
                rendered(out)
            })
            .collect();

        for (notice, banner) in all.iter().zip(&banners) {
            assert!(banner.contains(notice.message()));
        }
        let mut unique = banners.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let mut out = text_output();
        out.notice(Notice::InvalidChoice).unwrap();
        assert!(!rendered(out).contains('\x1b'));
    }

    #[test]
    fn colored_output_styles_banners() {
        let mut out = Output::new(Vec::new(), OutputConfig::new(false, true));
        out.notice(Notice::Saved).unwrap();
        assert!(rendered(out).contains('\x1b'));
    }

    #[test]
    fn menu_lists_numbered_options_and_prompt() {
        let mut out = text_output();
        out.menu("Title", &["One", "Two"]).unwrap();
        let text = rendered(out);
        assert!(text.contains("* Title *"));
        assert!(text.contains("1. One\n2. Two\n"));
        assert!(text.ends_with("Enter your choice: "));
    }

    #[test]
    fn step_has_heading_and_prompt() {
        let mut out = text_output();
        out.step("Step 2: Choose Your Paint", &["Grey", "Red"]).unwrap();
        let text = rendered(out);
        assert!(text.contains("--- Step 2: Choose Your Paint ---"));
        assert!(text.ends_with("Enter choice: "));
    }

    #[test]
    fn summary_shows_description_and_price() {
        let mut out = text_output();
        out.summary(&Configuration::new("Model 3 - LR", dec!(47740)))
            .unwrap();
        let text = rendered(out);
        assert!(text.contains("Summary: Model 3 - LR\n"));
        assert!(text.contains("Final Price: $47740\n"));
    }

    #[test]
    fn listing_renders_rows_in_given_order() {
        let cheap = Configuration::new("Model 3 - LR", dec!(47740));
        let dear = Configuration::new("Model Y - LR", dec!(50490));
        let mut out = text_output();
        out.listing(&[&cheap, &dear]).unwrap();
        let text = rendered(out);

        assert!(text.contains("Sorted by Price"));
        let first = text.find("Model 3 - LR").unwrap();
        let second = text.find("Model Y - LR").unwrap();
        assert!(first < second);
        assert!(text.contains("$47740"));
        assert!(text.contains("$50490"));
    }

    #[test]
    fn json_notice_line() {
        let mut out = json_output();
        out.notice(Notice::NotFound).unwrap();
        let text = rendered(out);
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["type"], "notice");
        assert_eq!(value["payload"]["kind"], "not_found");
    }

    #[test]
    fn json_listing_line() {
        let config = Configuration::new("Model Y - LR", dec!(50490));
        let mut out = json_output();
        out.listing(&[&config]).unwrap();
        let value: serde_json::Value = serde_json::from_str(rendered(out).trim()).unwrap();
        assert_eq!(value["type"], "configurations");
        assert_eq!(value["payload"][0]["description"], "Model Y - LR");
        assert_eq!(value["payload"][0]["price"], "50490");
    }

    #[test]
    fn json_mode_emits_one_line_per_event() {
        let mut out = json_output();
        out.menu("Title", &["One"]).unwrap();
        out.step("Step", &["A", "B"]).unwrap();
        out.ask("Describe: ").unwrap();
        let text = rendered(out);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert!(serde_json::from_str::<serde_json::Value>(line).is_ok());
        }
    }
}
