//! chainbridge CLI — normalize provider errors and inspect permission grants
//! from the terminal.
//!
//! Usage:
//! ```bash
//! # Normalize a raw transport failure into the error a page would receive
//! chainbridge normalize --raw '{"body":"{\"error\":{\"message\":\"nonce too low\"}}"}'
//!
//! # Index stored grants and check one triple
//! chainbridge index --grants grants.json --lookup 1 0xabc https://app.example
//!
//! # List EIP-1193 error codes
//! chainbridge codes
//! ```

mod config;

use std::env;
use std::path::PathBuf;
use std::process;

use chainbridge_core::{PermissionRequest, EIP1193_ERROR_CODES};
use chainbridge_errors::ErrorNormalizer;
use chainbridge_observability::init_tracing;
use chainbridge_permissions::index_permissions;
use serde_json::Value;

use config::CliConfig;

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let cfg = take_global_flags(&mut args);
    init_tracing(&cfg.log);

    let Some(command) = args.first().cloned() else {
        print_usage();
        process::exit(1);
    };

    match command.as_str() {
        "normalize" => cmd_normalize(&args[1..]),
        "index" => cmd_index(&args[1..]),
        "codes" => cmd_codes(),
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("chainbridge {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("chainbridge {}", env!("CARGO_PKG_VERSION"));
    println!("Normalize provider errors and inspect dApp permission grants\n");
    println!("USAGE:");
    println!("    chainbridge [--config <FILE>] [--log-level <LEVEL>] <COMMAND>\n");
    println!("COMMANDS:");
    println!("    normalize   Normalize a raw failure into an EIP-1193 error");
    println!("    index       Index a JSON file of permission grants");
    println!("    codes       List EIP-1193 error codes");
    println!("    version     Print version");
    println!("    help        Print this help\n");
    println!("NORMALIZE FLAGS:");
    println!("    --raw <JSON>      Raw failure value (non-JSON is treated as a string)  [required]");
    println!("    --json            Output as JSON\n");
    println!("INDEX FLAGS:");
    println!("    --grants <FILE>                          JSON array of grants  [required]");
    println!("    --lookup <CHAIN> <ADDRESS> <ORIGIN>      Print only this triple's grant");
}

/// Strip `--config` / `--log-level` from anywhere in `args`.
fn take_global_flags(args: &mut Vec<String>) -> CliConfig {
    let mut cfg = CliConfig::default();
    let mut level: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let Some(path) = args.get(i + 1).map(PathBuf::from) else {
                    eprintln!("Error: --config needs a path");
                    process::exit(1);
                };
                cfg = match CliConfig::load(&path) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Error: {e}");
                        process::exit(1);
                    }
                };
                args.drain(i..i + 2);
            }
            "--log-level" => {
                level = args.get(i + 1).cloned();
                if level.is_none() {
                    eprintln!("Error: --log-level needs a value");
                    process::exit(1);
                }
                args.drain(i..i + 2);
            }
            _ => i += 1,
        }
    }

    if let Some(level) = level {
        cfg.log.level = level;
    }
    cfg
}

fn cmd_normalize(args: &[String]) {
    let mut raw: Option<&str> = None;
    let mut as_json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--raw" => {
                i += 1;
                raw = args.get(i).map(|s| s.as_str());
            }
            "--json" => as_json = true,
            flag => {
                eprintln!("Unknown flag: {flag}");
                process::exit(1);
            }
        }
        i += 1;
    }

    let raw_str = match raw {
        Some(r) => r,
        None => {
            eprintln!("Error: --raw is required");
            process::exit(1);
        }
    };
    let raw_value: Value =
        serde_json::from_str(raw_str).unwrap_or_else(|_| Value::String(raw_str.to_string()));

    let err = ErrorNormalizer::new().normalize(&raw_value);
    if as_json {
        match serde_json::to_string_pretty(&err) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("JSON serialization error: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("{err}");
        if let Some(data) = err.data() {
            println!("  Data: {data}");
        }
    }
}

fn cmd_index(args: &[String]) {
    let mut grants_path: Option<PathBuf> = None;
    let mut lookup: Option<(String, String, String)> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--grants" => {
                i += 1;
                grants_path = args.get(i).map(PathBuf::from);
            }
            "--lookup" => {
                match args.get(i + 1..i + 4) {
                    Some([chain, address, origin]) => {
                        lookup = Some((chain.clone(), address.clone(), origin.clone()));
                    }
                    _ => {
                        eprintln!("Error: --lookup needs <CHAIN> <ADDRESS> <ORIGIN>");
                        process::exit(1);
                    }
                }
                i += 3;
            }
            flag => {
                eprintln!("Unknown flag: {flag}");
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = match grants_path {
        Some(p) => p,
        None => {
            eprintln!("Error: --grants is required");
            process::exit(1);
        }
    };

    let grants: Vec<PermissionRequest> = match std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|s| serde_json::from_str(&s).map_err(|e| e.to_string()))
    {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    };

    let map = match index_permissions(grants, None) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Index error: {e}");
            process::exit(1);
        }
    };
    tracing::info!(grants = map.len(), "indexed {}", path.display());

    let output = match &lookup {
        Some((chain, address, origin)) => match map.get(chain, address, origin) {
            Some(grant) => serde_json::to_string_pretty(grant),
            None => {
                println!("not granted");
                process::exit(2);
            }
        },
        None => serde_json::to_string_pretty(&map),
    };
    match output {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("JSON serialization error: {e}");
            process::exit(1);
        }
    }
}

fn cmd_codes() {
    for c in EIP1193_ERROR_CODES {
        println!("{:<6} {:<22} {}", c.code, c.name, c.message);
    }
}
