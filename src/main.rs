use sockssh::{Result, args, config, log, log_debug, log_error, process};

use clap::error::ErrorKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match args::main_args() {
        Ok(args) => args,
        Err(args::ArgsError::ParseError(err)) => {
            // Help and version requests surface as clap errors but are not failures
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
            let _ = err.print();
            return code;
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("{}", args::build_cli_command().render_usage());
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    let logger = log::Logger::new();
    if args.debug {
        logger.enable_debug();
    }
    if args.verbose {
        logger.enable_verbose();
    }
    drop(logger);

    log_debug!("Launching with arguments: {:?}", args);

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            log_error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &args::MainArgs) -> Result<ExitCode> {
    let config = config::ConfigLoader::new()?.load_config()?;
    let proxy = config.resolve(args.environment.as_deref())?;
    log_debug!("Resolved proxy settings: {:?}", proxy);

    process::process_handler(&proxy, &args.ssh_options, &args.target)
}
