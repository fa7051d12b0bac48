//! # PixxelOps Terminal
//!
//! Main entry point for the console host.

use pixxelterm::{HostConfig, TerminalHost};
use std::env;
use std::fs;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let config = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    let mut host = TerminalHost::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to create host: {}", e);
        process::exit(1);
    });

    if let Err(e) = host.run() {
        eprintln!("Host error: {}", e);
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<HostConfig, String> {
    let mut config = HostConfig::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--challenge" | "-c" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --challenge".to_string());
                }
                config.challenge = Some(args[i].clone());
            }
            "--script" | "-s" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --script".to_string());
                }
                let script_path = &args[i];
                let script_text = fs::read_to_string(script_path)
                    .map_err(|e| format!("Failed to read script file: {}", e))?;
                config.script = Some(script_text);
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --challenge <ID>     Activate a challenge for the session");
    eprintln!("  -s, --script <FILE>      Replay a command script instead of stdin");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --challenge docker-basic", program);
    eprintln!(
        "  {} --challenge docker-basic --script demos/docker_basico.txt",
        program
    );
}
