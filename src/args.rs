use clap::{Arg, ArgAction, Command};
use std::{env, error::Error, ffi::OsString, fmt};

#[derive(Debug, Clone)]
pub struct MainArgs {
    pub environment: Option<String>,
    pub verbose: bool,
    pub debug: bool,
    pub target: String,
    pub ssh_options: Vec<String>,
}

#[derive(Debug)]
pub enum ArgsError {
    MissingTarget,
    ParseError(clap::Error),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingTarget => write!(f, "target host not specified"),
            ArgsError::ParseError(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ArgsError {}

/// Builds the clap command definition for the launcher.
pub fn build_cli_command() -> Command {
    Command::new("sockssh")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Launch ssh through a SOCKS proxy picked from per-environment settings.")
        .arg(
            Arg::new("env")
                .short('e')
                .long("env")
                .value_name("ENVIRONMENT")
                .help("Named environment from ~/.config/sockssh.yaml"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print the proxy settings and ssh command line before connecting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ssh_args")
                .value_name("TARGET [SSH-OPTIONS]")
                .help("Target host followed by options passed through to ssh")
                .num_args(1..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true),
        )
}

/// Parses command-line arguments from the process environment.
pub fn main_args() -> Result<MainArgs, ArgsError> {
    parse_main_args_from(&build_cli_command(), env::args())
}

pub fn parse_main_args_from<I, T>(cmd: &Command, itr: I) -> Result<MainArgs, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = cmd.clone().try_get_matches_from(itr).map_err(ArgsError::ParseError)?;

    let mut ssh_args: Vec<String> = matches
        .get_many::<String>("ssh_args")
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default();

    // A literal separator can still reach the positional list (e.g. a second
    // "--" after clap consumed the first); it never names a host.
    if ssh_args.first().is_some_and(|arg| arg == "--") {
        ssh_args.remove(0);
    }

    if ssh_args.is_empty() {
        return Err(ArgsError::MissingTarget);
    }
    let target = ssh_args.remove(0);

    Ok(MainArgs {
        environment: matches.get_one::<String>("env").cloned(),
        verbose: matches.get_flag("verbose"),
        debug: matches.get_flag("debug"),
        target,
        ssh_options: ssh_args,
    })
}

#[cfg(test)]
#[path = "test/args.rs"]
mod tests;
