mod chat;

use clap::{Parser, Subcommand};
use serde_json::Value;
use session::float::{catalog, find_loose};
use session::search::{Suggestions, filter};
use session::wire::DEFAULT_CHAT_ENDPOINT;
use session::{ChatSession, Float};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::chat::{ChatClient, format_message};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("unknown float {0:?}; run `floatchat floats` for the list")]
    UnknownFloat(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("health check failed: HTTP {0}")]
    Unhealthy(u16),
    #[error("reading stdin failed: {0}")]
    Stdin(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "floatchat", about = "Ask the FloatChat service about ocean floats")]
struct Cli {
    /// Chat service endpoint.
    #[arg(long, env = "FLOATCHAT_ENDPOINT", default_value = DEFAULT_CHAT_ENDPOINT)]
    endpoint: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the FloatChat host server is up.
    Ping {
        #[arg(long, env = "FLOATCHAT_SERVER", default_value = "http://127.0.0.1:3000")]
        server: String,
    },
    /// List the float catalog.
    Floats {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Find floats whose name contains the query.
    Search { query: String },
    /// Ask one question and print the reply.
    Ask {
        /// Float to chat about.
        #[arg(long)]
        float: Option<String>,
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Interactive chat. `/float NAME` switches float, `/quit` exits.
    Chat {
        #[arg(long)]
        float: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let client = ChatClient::new(cli.endpoint);

    match cli.command {
        Command::Ping { server } => run_ping(&server).await,
        Command::Floats { json } => run_floats(json),
        Command::Search { query } => {
            run_search(&query);
            Ok(())
        }
        Command::Ask { float, message } => run_ask(&client, float.as_deref(), &message.join(" ")).await,
        Command::Chat { float } => run_chat(&client, float.as_deref()).await,
    }
}

async fn run_ping(server: &str) -> Result<(), CliError> {
    let url = format!("{}/healthz", server.trim_end_matches('/'));
    let status = reqwest::Client::new().get(url).send().await?.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

fn run_floats(json: bool) -> Result<(), CliError> {
    if json {
        return print_json(&serde_json::to_value(catalog())?);
    }
    for float in catalog() {
        println!("{:<24} {:>7.2} {:>7.2}", float.name, float.coordinates.lat, float.coordinates.lon);
    }
    Ok(())
}

fn run_search(query: &str) {
    match filter(query) {
        Suggestions::Idle => println!("type part of a float name"),
        Suggestions::Empty => println!("no floats match {query:?}"),
        Suggestions::Matches(floats) => {
            for float in floats {
                println!("{}", float.name);
            }
        }
    }
}

async fn run_ask(client: &ChatClient, float: Option<&str>, message: &str) -> Result<(), CliError> {
    let mut session = ChatSession::new();
    if let Some(name) = float {
        session.select(resolve_float(name)?.name);
    }
    if let Some(id) = client.exchange(&mut session, message).await {
        if let Some(reply) = session.transcript().get(id) {
            println!("{}", reply.content.as_str());
        }
    }
    Ok(())
}

async fn run_chat(client: &ChatClient, float: Option<&str>) -> Result<(), CliError> {
    let mut session = ChatSession::new();
    let mut printed = 0;
    if let Some(name) = float {
        session.select(resolve_float(name)?.name);
    }
    tracing::info!(endpoint = client.endpoint(), "chat started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        for msg in &session.transcript().messages()[printed..] {
            if !msg.is_pending() {
                println!("{}", format_message(msg));
            }
        }
        printed = session.transcript().len();

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line == "/quit" {
            break;
        }
        if let Some(name) = line.strip_prefix("/float ") {
            match resolve_float(name) {
                Ok(found) => {
                    session.select(found.name);
                }
                Err(e) => eprintln!("{e}"),
            }
            continue;
        }
        if client.exchange(&mut session, line).await.is_some() {
            // Skip the echoed question; print the settled reply only.
            printed += 1;
        }
    }
    Ok(())
}

fn resolve_float(name: &str) -> Result<&'static Float, CliError> {
    find_loose(name).ok_or_else(|| CliError::UnknownFloat(name.to_owned()))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
