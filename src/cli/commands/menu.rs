use crate::cli::commands::{record, report, status};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, warning};
use crate::ui::prompt::ask;
use std::io::BufRead;

const FAREWELL: &str = "Stay focused. You got this.";

/// Interactive read-evaluate-print loop. Ends on option 4 or at end of
/// input; a failed option is reported and the menu is shown again.
pub fn run<R: BufRead>(cfg: &Config, input: &mut R) -> AppResult<()> {
    loop {
        println!("\n--- SERVICE LOG v{} ---", env!("CARGO_PKG_VERSION"));
        println!("1. Show Status (Burn Rate)");
        println!("2. Log Hours");
        println!("3. Generate Compliance Report");
        println!("4. Exit");

        let Some(choice) = ask(input, "Select an option: ")? else {
            println!();
            println!("{}", FAREWELL);
            return Ok(());
        };

        let outcome = match choice.trim() {
            "1" => status::handle(cfg),
            "2" => record::handle_interactive(cfg, input),
            "3" => report::handle(cfg),
            "4" => {
                println!("{}", FAREWELL);
                return Ok(());
            }
            _ => {
                warning("Invalid selection.");
                Ok(())
            }
        };

        if let Err(e) = outcome {
            error(e);
        }
    }
}
