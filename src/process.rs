use crate::{Result, command_path, config::ResolvedProxy, log_debug, log_info};
use std::process::{Command, ExitCode, Stdio};

fn proxy_command_option(proxy: &ResolvedProxy) -> String {
    format!("ProxyCommand=nc -x {}:{} %h %p", proxy.server, proxy.port)
}

/// Builds the full ssh argument vector: the proxy and agent-forwarding
/// options first, then the pass-through options in their original order,
/// then the target host last.
pub fn build_ssh_args(proxy: &ResolvedProxy, ssh_options: &[String], target: &str) -> Vec<String> {
    let mut ssh_args = vec![
        "-o".to_string(),
        proxy_command_option(proxy),
        "-o".to_string(),
        "ForwardAgent=yes".to_string(),
    ];
    ssh_args.extend(ssh_options.iter().cloned());
    ssh_args.push(target.to_string());
    ssh_args
}

fn map_exit_code(success: bool) -> ExitCode {
    // The child's exact status is not forwarded, only the 0-vs-nonzero split
    if success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Spawns ssh with the assembled argument vector and inherited streams,
/// blocking until it exits. Returns the exit code this process should use.
pub fn process_handler(proxy: &ResolvedProxy, ssh_options: &[String], target: &str) -> Result<ExitCode> {
    let ssh_args = build_ssh_args(proxy, ssh_options, target);
    let ssh_binary = command_path::ssh_path()?;

    log_info!("Using SOCKS proxy {}:{}", proxy.server, proxy.port);
    log_info!("Command: ssh {}", ssh_args.join(" "));
    log_debug!("Spawning {:?} with args: {:?}", ssh_binary, ssh_args);

    let status = Command::new(&ssh_binary)
        .args(&ssh_args)
        .stdin(Stdio::inherit()) // Inherit the input from the current terminal
        .stdout(Stdio::inherit()) // Inherit the output so ssh talks to the terminal directly
        .stderr(Stdio::inherit()) // Inherit the error stream from the SSH process
        .status()?;

    log_debug!("ssh exited with status: {:?}", status.code());

    Ok(map_exit_code(status.success()))
}

#[cfg(test)]
#[path = "test/process.rs"]
mod tests;
