// Presenter that renders controller output to the terminal

use colored::Colorize;
use contact_form::Presenter;
use contact_form_validation::FieldId;

#[derive(Debug, Default)]
pub struct TerminalPresenter {
    /// Only report filtered write-backs while values are being loaded
    pub echo_filtered: bool,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self {
            echo_filtered: true,
        }
    }
}

impl Presenter for TerminalPresenter {
    fn show_error(&mut self, field: FieldId, message: &str) {
        eprintln!("  {} {}: {}", "✗".red(), field.as_str().cyan(), message.red());
    }

    fn hide_error(&mut self, _field: FieldId) {}

    fn on_success(&mut self) {
        println!();
        println!("{}", "Thank you! Your message has been sent.".green().bold());
    }

    fn on_failure(&mut self, notice: &str) {
        eprintln!();
        eprintln!("{}", notice.red().bold());
    }

    fn show_challenge(&mut self, question: &str) {
        println!();
        println!("{} {}", "What is".bold(), question.cyan().bold());
    }

    fn set_value(&mut self, field: FieldId, value: &str) {
        if self.echo_filtered {
            println!(
                "  {} {} filtered to {:?}",
                "~".yellow(),
                field.as_str().cyan(),
                value
            );
        }
    }

    fn show_dial_code(&mut self, code: Option<&str>) {
        if let Some(code) = code {
            println!("  {} dial code {}", "•".dimmed(), code.bold());
        }
    }
}
