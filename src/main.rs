use clap::Parser;
use phone_tracer::library::backend::parse_region;
use phone_tracer::{OutputMode, Pacing, PhonenumberLibrary, Session, TraceOptions};
use std::io;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// PhoneTracer v3.0: Enhanced Location Detection
///
/// Looks up region, carrier, timezone and number type for a phone number.
/// Without a number, an interactive menu is shown.
///
/// Examples:
///   phonetrace
///   phonetrace "+44 20 7031 3000"
///   phonetrace --region US "650 253 0000"
///   phonetrace --json --no-animation "+1 650 253 0000"
///   phonetrace --test
#[derive(Parser)]
#[command(name = "phonetrace", version, about, long_about = None)]
struct Cli {
    /// Phone number to trace, in any format. Example: "+91 80 1234 5678"
    #[arg(index = 1)]
    number: Option<String>,

    /// Run the state/province detection sweep over the preset numbers.
    #[arg(long, conflicts_with = "number")]
    test: bool,

    /// Default region (ISO 3166-1 alpha-2) for numbers without a +<code> prefix.
    #[arg(long, value_parser = parse_region_arg)]
    region: Option<String>,

    /// Print the result as JSON instead of the formatted report. Needs a NUMBER.
    #[arg(long, requires = "number")]
    json: bool,

    /// Skip the trace animation.
    #[arg(long)]
    no_animation: bool,
}

fn parse_region_arg(s: &str) -> Result<String, String> {
    parse_region(s)
        .map(|_| s.trim().to_ascii_uppercase())
        .map_err(|e| format!("{}. Use an ISO code such as US, GB or IN.", e))
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let options = TraceOptions {
        default_region: cli.region.clone(),
        output: if cli.json { OutputMode::Json } else { OutputMode::Report },
        pacing: if cli.no_animation || cli.json { Pacing::Off } else { Pacing::Animated },
    };
    let session = Session::new(PhonenumberLibrary::new(), options);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if cli.test {
        session.test_state_detection(&mut out)
    } else if let Some(ref number) = cli.number {
        session.start_phone_tracer(&mut out, number).map(|_| ())
    } else {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        session.run_interactive(&mut input, &mut out)
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
