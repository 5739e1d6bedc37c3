mod cli;

use crate::cli::{InputFormat, OutputFormat, CLI};
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use unshort_bot::{answer, ChatMessage, Reply};
use unshort_resolver::transport::http::DEFAULT_USER_AGENT;
use unshort_resolver::{
    ChainResolver, HttpTransport, ResolverSettings, ReverseService, TransportSettings,
};

type Service = ReverseService<ChainResolver<HttpTransport>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CLI::try_parse()?;

    info!(
        proxy = config.proxy.as_deref().unwrap_or("none"),
        timeout_secs = config.timeout_secs,
        max_redirects = config.max_redirects,
        input = %config.input,
        format = %config.format,
        "starting unshort"
    );

    let timeout = Duration::from_secs(config.timeout_secs);
    let transport = HttpTransport::new(TransportSettings {
        proxy: config.proxy.clone(),
        timeout,
        user_agent: config
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
    })
    .context("failed to set up http transport")?;

    let resolver = ChainResolver::new(
        transport,
        ResolverSettings::builder()
            .max_redirects(config.max_redirects)
            .timeout(timeout)
            .build(),
    );

    run(Arc::new(ReverseService::new(resolver)), config.input, config.format).await
}

async fn run(service: Arc<Service>, input: InputFormat, format: OutputFormat) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tasks = JoinSet::new();
    let mut line_no: i64 = 0;

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                line_no += 1;

                let Some(message) = parse_message(input, line_no, &line) else {
                    continue;
                };
                let service = Arc::clone(&service);
                tasks.spawn(async move {
                    if let Some(reply) = answer(&service, &message).await {
                        emit(&reply, format);
                    }
                });
            }
            _ = &mut shutdown => {
                info!("interrupted, waiting for pending replies");
                break;
            }
        }
    }

    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            warn!(error = %e, "message task failed");
        }
    }

    info!(messages = line_no, "input closed");
    Ok(())
}

fn parse_message(input: InputFormat, line_no: i64, line: &str) -> Option<ChatMessage> {
    match input {
        InputFormat::Text => Some(ChatMessage::plain(line_no, line)),
        InputFormat::Json => {
            if line.trim().is_empty() {
                return None;
            }
            ChatMessage::from_json(line)
                .inspect_err(|e| warn!(line = line_no, error = %e, "skipping malformed message"))
                .ok()
        }
    }
}

fn emit(reply: &Reply, format: OutputFormat) {
    match format {
        // blank line between replies
        OutputFormat::Text => println!("{}\n", reply.to_text()),
        OutputFormat::Json => match reply.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => warn!(reply_to = reply.reply_to, error = %e, "failed to encode reply"),
        },
    }
}
