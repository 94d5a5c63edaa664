use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use contact::{ContactResponse, FormInput, ValidationErrors};
use serde_json::Value;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("contact form has {0} invalid field(s)")]
    Invalid(usize),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "portfolio-cli", about = "Portfolio site health and contact CLI")]
struct Cli {
    #[arg(long, env = "PORTFOLIO_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check `GET /healthz`.
    Ping,
    Contact(ContactCommand),
}

#[derive(Args, Debug)]
struct ContactCommand {
    #[command(subcommand)]
    command: ContactSubcommand,
}

#[derive(Subcommand, Debug)]
enum ContactSubcommand {
    /// Validate locally and print field errors as JSON.
    Validate(ContactArgs),
    /// Validate locally, then post to `/api/contact`.
    Send(ContactArgs),
}

#[derive(Args, Debug, Clone)]
struct ContactArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long, default_value = "")]
    subject: String,

    #[arg(long)]
    message: String,
}

impl From<ContactArgs> for FormInput {
    fn from(args: ContactArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            subject: args.subject,
            message: args.message,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ping => run_ping(&cli.base_url).await,
        Command::Contact(contact) => match contact.command {
            ContactSubcommand::Validate(args) => run_contact_validate(args.into()),
            ContactSubcommand::Send(args) => run_contact_send(&cli.base_url, args.into()).await,
        },
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let response = http_client()?.get(endpoint(base_url, "/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError {
            status: status.as_u16(),
            message: "health check failed".to_owned(),
        });
    }
    println!("ok");
    Ok(())
}

fn run_contact_validate(input: FormInput) -> Result<(), CliError> {
    let errors = contact::validate(&input);
    print_json(&serde_json::to_value(&errors)?)?;
    check_valid(&errors)
}

async fn run_contact_send(base_url: &str, input: FormInput) -> Result<(), CliError> {
    let errors = contact::validate(&input);
    if !errors.is_empty() {
        print_json(&serde_json::to_value(&errors)?)?;
        return check_valid(&errors);
    }

    let response = http_client()?
        .post(endpoint(base_url, "/api/contact"))
        .json(&input)
        .send()
        .await?;
    let status = response.status();
    let body = response.json::<Value>().await.unwrap_or(Value::Null);
    print_json(&body)?;

    if !status.is_success() {
        return Err(CliError::ServerError {
            status: status.as_u16(),
            message: reply_message(&body),
        });
    }
    Ok(())
}

fn http_client() -> Result<reqwest::Client, CliError> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?)
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn check_valid(errors: &ValidationErrors) -> Result<(), CliError> {
    if errors.is_empty() { Ok(()) } else { Err(CliError::Invalid(errors.len())) }
}

/// Human-readable summary of a non-success `/api/contact` body.
fn reply_message(body: &Value) -> String {
    match serde_json::from_value::<ContactResponse>(body.clone()) {
        Ok(reply) => reply
            .message
            .unwrap_or_else(|| format!("{:?}", reply.status).to_lowercase()),
        Err(_) => body.to_string(),
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
