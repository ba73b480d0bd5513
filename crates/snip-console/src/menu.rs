use snip_generator::Generator;
use snip_registry::Registry;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const BANNER: &str = "--- Welcome to the console URL shortener ---";
const OPTIONS: &str = "\nOptions:\n1. Shorten a URL\n2. Expand a short URL\n3. Exit";
const CHOICE_PROMPT: &str = "Choose an option (1/2/3): ";
const SHORTEN_PROMPT: &str = "Enter the long URL you want to shorten: ";
const EXPAND_PROMPT: &str = "Enter the short URL you want to expand: ";
const INVALID_CHOICE: &str = "Invalid option. Please choose 1, 2 or 3.";
const FAREWELL: &str = "Goodbye!";

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Shorten,
    Expand,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Shorten),
            "2" => Some(MenuChoice::Expand),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Drives a [`Registry`] from a line-oriented text menu.
///
/// Registry errors are printed and the menu continues; only I/O errors on
/// the streams end the session early. End of input counts as choosing exit.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run<G: Generator>(&mut self, registry: &mut Registry<G>) -> io::Result<()> {
        info!("console session started");
        writeln!(self.output, "{}", BANNER)?;

        loop {
            writeln!(self.output, "{}", OPTIONS)?;
            let Some(choice) = self.prompt(CHOICE_PROMPT)? else {
                break;
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::Shorten) => {
                    let Some(long_url) = self.prompt(SHORTEN_PROMPT)? else {
                        break;
                    };
                    self.shorten(registry, &long_url)?;
                }
                Some(MenuChoice::Expand) => {
                    let Some(short_url) = self.prompt(EXPAND_PROMPT)? else {
                        break;
                    };
                    self.expand(registry, &short_url)?;
                }
                Some(MenuChoice::Exit) => break,
                None => {
                    debug!(choice = %choice, "invalid menu choice");
                    writeln!(self.output, "{}", INVALID_CHOICE)?;
                }
            }
        }

        writeln!(self.output, "{}", FAREWELL)?;
        self.output.flush()?;
        info!(records = registry.len(), "console session ended");
        Ok(())
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn shorten<G: Generator>(
        &mut self,
        registry: &mut Registry<G>,
        long_url: &str,
    ) -> io::Result<()> {
        match registry.shorten(long_url) {
            Ok(shortened) => {
                writeln!(self.output, "\nResult: {}", shortened.status.message())?;
                writeln!(self.output, "Your short URL is: {}", shortened.short_url)
            }
            Err(e) => writeln!(self.output, "\nResult: Error: {}", e),
        }
    }

    fn expand<G: Generator>(
        &mut self,
        registry: &Registry<G>,
        short_url: &str,
    ) -> io::Result<()> {
        match registry.expand(short_url) {
            Ok(expanded) => {
                writeln!(self.output, "\nResult: {}", expanded.message())?;
                writeln!(self.output, "The original URL is: {}", expanded.long_url)
            }
            Err(e) => writeln!(self.output, "\nResult: Error: {}", e),
        }
    }

    /// Prints `text` and reads one trimmed line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}
