//! CLI tool to sign a webhook body the way the form provider does.
//!
//! Usage:
//!   cargo run --bin sign-payload -- --file payload.json
//!   cat payload.json | cargo run --bin sign-payload -- --secret my-token

use std::env;
use std::io::Read;

use form_ingest_lib::auth::WebhookSecret;
use form_ingest_lib::config::SIGNATURE_HEADER;

fn main() {
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().collect();

    let mut secret: Option<String> = None;
    let mut file: Option<String> = None;
    let mut value_only = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--secret" | "-s" => {
                i += 1;
                if i < args.len() {
                    secret = Some(args[i].clone());
                }
            }
            "--file" | "-f" => {
                i += 1;
                if i < args.len() {
                    file = Some(args[i].clone());
                }
            }
            "--value-only" => value_only = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let secret = match secret.or_else(|| env::var("SECRET_TOKEN").ok()) {
        Some(s) if !s.is_empty() => WebhookSecret::new(s),
        _ => {
            eprintln!("Error: --secret or SECRET_TOKEN is required");
            print_usage();
            std::process::exit(1);
        }
    };

    let body = match file {
        Some(path) => std::fs::read(&path).unwrap_or_else(|e| {
            eprintln!("Error: failed to read {}: {}", path, e);
            std::process::exit(1);
        }),
        None => {
            let mut buf = Vec::new();
            if let Err(e) = std::io::stdin().read_to_end(&mut buf) {
                eprintln!("Error: failed to read stdin: {}", e);
                std::process::exit(1);
            }
            buf
        }
    };

    let header = secret.header_for(&body);
    if value_only {
        println!("{}", header);
    } else {
        println!("{}: {}", SIGNATURE_HEADER, header);
    }
}

fn print_usage() {
    eprintln!(
        r#"
Usage: sign-payload [OPTIONS]

Compute the signature header for a webhook body.

Options:
  -s, --secret <TOKEN>   Shared secret (default: SECRET_TOKEN env var)
  -f, --file <PATH>      Body to sign (default: stdin)
      --value-only       Print only the header value
  -h, --help             Show this help

The body is signed byte for byte; do not reformat it after signing.
"#
    );
}
