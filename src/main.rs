use campeek::ascii::AsciiRenderer;
use campeek::camera::CaptureSession;
use campeek::cli::{self, Args, Command, ConfigAction};
use campeek::config::Config;
use campeek::preview::{self, EXIT_FAILURE};
use campeek::terminal::{KeyboardExit, TerminalPreview, setup_ctrlc_handler};
use clap::Parser;
use env_logger::Env;

/// Log filter used when RUST_LOG is unset. Anything chattier would draw over
/// the preview.
const DEFAULT_LOG_FILTER: &str = "error";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let args = Args::parse();

    if let Err(code) = dispatch(&args) {
        std::process::exit(code);
    }
}

/// Run the requested command. `Err` carries the process exit status.
fn dispatch(args: &Args) -> Result<(), i32> {
    match &args.command {
        Some(Command::ListCameras) => cli::list_cameras().map_err(report),
        Some(Command::Config {
            action: ConfigAction::Init,
        }) => {
            // Don't parse the existing file: init must work even if it is broken.
            let settings = args.settings(&Config::default());
            cli::handle_config_action(ConfigAction::Init, args.config.as_deref(), &settings)
                .map_err(report)
        }
        Some(Command::Config { action }) => {
            let config = Config::load(args.config.as_deref()).map_err(report)?;
            let settings = args.settings(&config);
            cli::handle_config_action(*action, args.config.as_deref(), &settings).map_err(report)
        }
        None => run_preview(args),
    }
}

fn run_preview(args: &Args) -> Result<(), i32> {
    let config = Config::load(args.config.as_deref()).map_err(report)?;
    let settings = args.settings(&config);

    if let Err(e) = setup_ctrlc_handler() {
        log::warn!("Could not set up Ctrl+C handler: {}", e);
    }

    let renderer = AsciiRenderer::new(settings.charset, settings.invert);
    let color = settings.color;
    let mut exit = KeyboardExit::new();

    // The terminal is restored by the time launch returns, so errors print
    // to the normal screen.
    match preview::launch(
        &settings.preview,
        CaptureSession::open,
        || TerminalPreview::open(renderer, color),
        &mut exit,
    ) {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(e.exit_code())
        }
    }
}

fn report(e: impl std::fmt::Display) -> i32 {
    eprintln!("Error: {}", e);
    EXIT_FAILURE
}
