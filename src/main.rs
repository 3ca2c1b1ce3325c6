use cidr_summary::cli::CommandLine;
use cidr_summary::config::{self, Config, OutputFormat};
use cidr_summary::output::{JsonRenderer, Renderer, TerminalRenderer};
use cidr_summary::{run, AppError};
use colored::Colorize;
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let commands = CommandLine::parse_args();
    let cfg = Config::from_env().map_err(AppError::Config)?;
    config::init_logging(&cfg.log_config)?;
    log::info!("#Start main()");

    if commands.no_color {
        colored::control::set_override(false);
    }
    let format = if commands.json {
        OutputFormat::Json
    } else {
        cfg.output
    };

    let stdout = io::stdout().lock();
    let mut renderer: Box<dyn Renderer> = match format {
        OutputFormat::Terminal => Box::new(TerminalRenderer::new(stdout)),
        OutputFormat::Json => Box::new(JsonRenderer::new(stdout)),
    };

    if let Err(e) = run(&commands.network, commands.other.as_deref(), renderer.as_mut()) {
        log::error!("{e}");
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
    Ok(())
}
