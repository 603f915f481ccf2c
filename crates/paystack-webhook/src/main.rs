/*
[INPUT]:  CLI arguments, webhook payload file or stdin, secret key (flag or env)
[OUTPUT]: Signature verdict as exit status, or a freshly computed signature
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or the webhook signing scheme
*/

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use paystack_adapter::webhook;

#[derive(Parser, Debug)]
#[command(name = "paystack-webhook", version, about = "Paystack webhook signature tool")]
struct Cli {
    #[arg(long = "secret-key", env = "PAYSTACK_SECRET_KEY", hide_env_values = true)]
    secret_key: String,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check an x-paystack-signature value against a payload
    Verify {
        /// Payload file, or `-` for stdin
        #[arg(long = "payload", value_name = "PATH")]
        payload: PathBuf,
        #[arg(long = "signature", value_name = "HEX")]
        signature: String,
    },
    /// Print the signature Paystack would send for a payload
    Sign {
        /// Payload file, or `-` for stdin
        #[arg(long = "payload", value_name = "PATH")]
        payload: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    match args.command {
        Command::Verify { payload, signature } => {
            let body = read_payload(&payload)?;
            let event = event_name(&body);
            if webhook::verify(&args.secret_key, &body, &signature) {
                info!(event = event.as_deref().unwrap_or("unknown"), "signature valid");
                Ok(ExitCode::SUCCESS)
            } else {
                warn!(event = event.as_deref().unwrap_or("unknown"), "signature mismatch");
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Sign { payload } => {
            let body = read_payload(&payload)?;
            let signature = webhook::sign(&args.secret_key, &body).context("sign payload")?;
            println!("{signature}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn read_payload(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut body = Vec::new();
        std::io::stdin()
            .read_to_end(&mut body)
            .context("read payload from stdin")?;
        return Ok(body);
    }
    std::fs::read(path).with_context(|| format!("read payload {}", path.display()))
}

/// `event` field of a JSON payload
fn event_name(body: &[u8]) -> Option<String> {
    let payload: serde_json::Value = serde_json::from_slice(body).ok()?;
    payload.get("event")?.as_str().map(str::to_string)
}
