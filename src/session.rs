//! Trace sessions: single traces, the demonstration sweep and the
//! interactive menu.
//!
//! Everything writes to a caller-supplied sink so the flows can run against
//! a buffer in tests. Only I/O failures on that sink propagate; trace errors
//! are printed and the session carries on.

use rand::Rng;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::library::PhoneLibrary;
use crate::report;
use crate::tracer::{TraceError, Tracer};

/// Numbers offered in the interactive menu.
pub const MENU_NUMBERS: &[&str] = &[
    "+91 1234567890",
    "+1 123 456 7890",
    "+44 12 3456 7890",
    "+61 1 2345 6789",
    "+49 12 3456 7890",
];

/// Numbers run by the `test` sweep.
pub const SWEEP_NUMBERS: &[&str] = &[
    "+1 123 456 7890",
    "+1 123 456 7890",
    "+44 12 3456 7890",
    "+91 12 3456 7890",
    "+61 1 2345 6789",
    "+49 12 3456 7890",
    "+33 1 2345 6789",
];

const TRACE_STEPS: &[&str] = &[
    "Initializing trace protocol...",
    "Connecting to carrier databases...",
    "Querying location services...",
    "Analyzing number patterns...",
    "Cross-referencing with global directories...",
    "Mapping geographical coordinates...",
    "Identifying state/province boundaries...",
    "Finalizing trace results...",
];

const STEP_BASE: Duration = Duration::from_millis(500);
const STEP_JITTER_SECS: std::ops::Range<f64> = 0.1..0.3;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Report,
    Json,
}

/// Whether the trace animation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Print each step with a short randomized pause.
    #[default]
    Animated,
    /// Skip the animation entirely.
    Off,
}

impl Pacing {
    fn run<W: Write>(self, out: &mut W) -> io::Result<()> {
        if self == Pacing::Off {
            return Ok(());
        }
        let mut rng = rand::rng();
        for step in TRACE_STEPS {
            writeln!(out, "[*] {}", step)?;
            out.flush()?;
            let jitter = rng.random_range(STEP_JITTER_SECS);
            thread::sleep(STEP_BASE + Duration::from_secs_f64(jitter));
        }
        Ok(())
    }
}

/// Session-wide settings, built from the command line.
#[derive(Debug, Clone, Default)]
pub struct TraceOptions {
    pub default_region: Option<String>,
    pub output: OutputMode,
    pub pacing: Pacing,
}

/// A parsed menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Sweep,
    Preset(&'static str),
    Number(String),
    Quit,
}

/// Interpret one line typed at the menu prompt.
///
/// `test` runs the sweep, 1..=5 picks a preset, anything else is treated as a
/// phone number (including an empty line).
pub fn parse_choice(line: &str) -> MenuChoice {
    let choice = line.trim();
    let lower = choice.to_lowercase();
    if lower == "test" {
        return MenuChoice::Sweep;
    }
    if lower == "quit" || lower == "exit" {
        return MenuChoice::Quit;
    }
    if !choice.is_empty() && choice.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(n) = choice.parse::<usize>() {
            if (1..=MENU_NUMBERS.len()).contains(&n) {
                return MenuChoice::Preset(MENU_NUMBERS[n - 1]);
            }
        }
    }
    MenuChoice::Number(choice.to_string())
}

/// Drives trace requests against one tracer.
pub struct Session<L> {
    tracer: Tracer<L>,
    options: TraceOptions,
}

impl<L: PhoneLibrary> Session<L> {
    pub fn new(library: L, options: TraceOptions) -> Self {
        let tracer = Tracer::new(library).with_default_region(options.default_region.clone());
        Self { tracer, options }
    }

    /// Trace one number and print the outcome.
    ///
    /// Returns `Ok(true)` when a result was printed, `Ok(false)` when the
    /// request was aborted with an error message.
    pub fn start_phone_tracer<W: Write>(&self, out: &mut W, target: &str) -> io::Result<bool> {
        let json = self.options.output == OutputMode::Json;
        if !json {
            let banner = "\u{1F50D}".repeat(30);
            writeln!(out)?;
            writeln!(out, "{}", banner)?;
            writeln!(out, "[+] PhoneTracer v3.0 - Enhanced Location Detection")?;
            writeln!(out, "{}", banner)?;
            writeln!(out, "[*] Target: {}", target)?;
        }

        match self.trace(out, target, json) {
            Ok(()) => Ok(true),
            Err(TraceError::Io(e)) => Err(e),
            Err(e) if json => {
                if e.is_input_error() {
                    tracing::debug!(target_number = target, error = %e, "trace rejected");
                } else {
                    tracing::error!(target_number = target, error = %e, "trace failed");
                }
                report::display_json_error(out, &e.to_string())?;
                Ok(false)
            }
            Err(e) if e.is_input_error() => {
                tracing::debug!(target_number = target, error = %e, "trace rejected");
                writeln!(out, "\n[\u{274C}] Error: {}", e)?;
                writeln!(out, "[!] Please check the phone number format and try again.")?;
                Ok(false)
            }
            Err(e) => {
                tracing::error!(target_number = target, error = %e, "trace failed");
                writeln!(out, "\n[\u{274C}] Unexpected error: {}", e)?;
                writeln!(out, "[!] An unexpected error occurred. Please try again.")?;
                Ok(false)
            }
        }
    }

    fn trace<W: Write>(&self, out: &mut W, target: &str, json: bool) -> Result<(), TraceError> {
        let (number, cleaned) = self.tracer.validate_phone_number(target)?;
        tracing::debug!(%cleaned, "number validated");

        if json {
            let info = self.tracer.get_phone_info(&number);
            report::display_json(out, &info)?;
            return Ok(());
        }

        writeln!(out, "\n[*] Starting enhanced trace sequence...")?;
        self.options.pacing.run(out)?;

        writeln!(out, "\n[*] Retrieving detailed location information...")?;
        let info = self.tracer.get_phone_info(&number);
        report::display_results(out, &info, target)?;

        writeln!(out, "\n[\u{2705}] Enhanced Trace Complete!")?;
        Ok(())
    }

    /// Run the state-detection sweep over [`SWEEP_NUMBERS`].
    pub fn test_state_detection<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n\u{1F9EA} Testing State/Province Detection...")?;
        for number in SWEEP_NUMBERS {
            writeln!(out, "\nTesting: {}", number)?;
            match self.tracer.validate_phone_number(number) {
                Ok((parsed, _)) => {
                    let info = self.tracer.get_phone_info(&parsed);
                    writeln!(out, "  Location: {}", info.location.full_location)?;
                    writeln!(out, "  State: {}", info.location.state)?;
                    writeln!(out, "  Country: {}", info.location.country)?;
                }
                Err(TraceError::Io(e)) => return Err(e),
                Err(e) => writeln!(out, "  Error: {}", e)?,
            }
        }
        Ok(())
    }

    /// Interactive menu loop. Ends on end of input or `quit`/`exit`.
    pub fn run_interactive<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> io::Result<()> {
        writeln!(out, "\u{1F30D} Enhanced Phone Tracer with State Detection")?;
        writeln!(out, "\nAvailable test numbers:")?;
        for (i, number) in MENU_NUMBERS.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, number)?;
        }

        let mut line = String::new();
        loop {
            write!(
                out,
                "\nEnter choice (1-{}), 'test' for state detection test, or type your own number: ",
                MENU_NUMBERS.len()
            )?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }

            match parse_choice(&line) {
                MenuChoice::Quit => return Ok(()),
                MenuChoice::Sweep => self.test_state_detection(out)?,
                MenuChoice::Preset(number) => {
                    self.start_phone_tracer(out, number)?;
                }
                MenuChoice::Number(number) => {
                    self.start_phone_tracer(out, &number)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracer::tests::StubLibrary;
    use std::io::Cursor;

    fn quiet(output: OutputMode) -> TraceOptions {
        TraceOptions { default_region: None, output, pacing: Pacing::Off }
    }

    fn run_trace(lib: StubLibrary, output: OutputMode, target: &str) -> (bool, String) {
        let session = Session::new(lib, quiet(output));
        let mut buf = Vec::new();
        let ok = session.start_phone_tracer(&mut buf, target).unwrap();
        (ok, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("test"), MenuChoice::Sweep);
        assert_eq!(parse_choice("  TEST \n"), MenuChoice::Sweep);
        assert_eq!(parse_choice("1"), MenuChoice::Preset("+91 1234567890"));
        assert_eq!(parse_choice("5\n"), MenuChoice::Preset("+49 12 3456 7890"));
        assert_eq!(parse_choice("0"), MenuChoice::Number("0".into()));
        assert_eq!(parse_choice("6"), MenuChoice::Number("6".into()));
        assert_eq!(parse_choice("+1 650 253 0000"), MenuChoice::Number("+1 650 253 0000".into()));
        assert_eq!(parse_choice(""), MenuChoice::Number(String::new()));
        assert_eq!(parse_choice("exit"), MenuChoice::Quit);
    }

    #[test]
    fn test_trace_success_report() {
        let (ok, text) = run_trace(StubLibrary::new(44, Some("London")), OutputMode::Report, "+44 20 7031 3000");
        assert!(ok);
        assert!(text.contains("[*] Target: +44 20 7031 3000"));
        assert!(text.contains("City/Area: London"));
        assert!(text.contains("Country: United Kingdom"));
        assert!(text.contains("Enhanced Trace Complete!"));
        assert!(!text.contains("Initializing trace protocol"));
    }

    #[test]
    fn test_trace_invalid_number() {
        let mut lib = StubLibrary::new(1, None);
        lib.valid = false;
        let (ok, text) = run_trace(lib, OutputMode::Report, "+1 123 456 7890");
        assert!(!ok);
        assert!(text.contains("Error: Invalid phone number"));
        assert!(text.contains("Please check the phone number format"));
        assert!(!text.contains("Enhanced Trace Complete!"));
    }

    #[test]
    fn test_trace_json() {
        let (ok, text) = run_trace(StubLibrary::new(91, Some("Bangalore Telecom Circle")), OutputMode::Json, "+91 80 1234 5678");
        assert!(ok);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["state"], "Bangalore Telecom Circle");
        assert_eq!(value["country"], "India");
        assert_eq!(value["country_name"], "India");
    }

    #[test]
    fn test_trace_json_invalid_number_is_json() {
        let mut lib = StubLibrary::new(1, None);
        lib.valid = false;
        let (ok, text) = run_trace(lib, OutputMode::Json, "+1 123 456 7890");
        assert!(!ok);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["error"], "Invalid phone number");
        assert!(!text.contains("[!]"));
    }

    #[test]
    fn test_trace_library_failure_is_unexpected() {
        let mut lib = StubLibrary::new(44, Some("London"));
        lib.reject_region = true;
        let (ok, text) = run_trace(lib, OutputMode::Report, "020 7031 3000");
        assert!(!ok);
        assert!(text.contains("[\u{274C}] Unexpected error: unknown region 'ZZ'"));
        assert!(text.contains("[!] An unexpected error occurred. Please try again."));
        assert!(!text.contains("Please check the phone number format"));
    }

    #[test]
    fn test_interactive_continues_after_unexpected_error() {
        let mut lib = StubLibrary::new(44, None);
        lib.reject_region = true;
        let session = Session::new(lib, quiet(OutputMode::Report));
        let mut input = Cursor::new("1\n2\n");
        let mut buf = Vec::new();
        session.run_interactive(&mut input, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches("An unexpected error occurred").count(), 2);
        assert!(text.contains("[*] Target: +1 123 456 7890"));
        assert_eq!(text.matches("Enter choice (1-5)").count(), 3);
    }

    #[test]
    fn test_sweep_reports_every_number() {
        let session = Session::new(StubLibrary::new(61, Some("Sydney, NSW area")), quiet(OutputMode::Report));
        let mut buf = Vec::new();
        session.test_state_detection(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches("Testing: ").count(), SWEEP_NUMBERS.len());
        assert_eq!(text.matches("  State: NSW").count(), SWEEP_NUMBERS.len());
    }

    #[test]
    fn test_interactive_loop_until_eof() {
        let session = Session::new(StubLibrary::new(44, Some("Glasgow")), quiet(OutputMode::Report));
        let mut input = Cursor::new("2\n\nquit\n+44 141 496 0000\n");
        let mut buf = Vec::new();
        session.run_interactive(&mut input, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("1. +91 1234567890"));
        assert!(text.contains("[*] Target: +1 123 456 7890"));
        assert!(text.contains("Error: Empty phone number provided"));
        // "quit" stops before the last line
        assert!(!text.contains("+44 141 496 0000"));
    }

    #[test]
    fn test_interactive_eof() {
        let session = Session::new(StubLibrary::new(1, None), quiet(OutputMode::Report));
        let mut input = Cursor::new("");
        let mut buf = Vec::new();
        session.run_interactive(&mut input, &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("Enter choice (1-5)"));
    }
}
