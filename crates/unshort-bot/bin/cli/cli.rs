use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};

pub const PROXY_ENV: &str = "UNSHORT_PROXY";
pub const TIMEOUT_SECS_ENV: &str = "UNSHORT_TIMEOUT_SECS";
pub const MAX_REDIRECTS_ENV: &str = "UNSHORT_MAX_REDIRECTS";
pub const USER_AGENT_ENV: &str = "UNSHORT_USER_AGENT";
pub const INPUT_ENV: &str = "UNSHORT_INPUT";
pub const FORMAT_ENV: &str = "UNSHORT_FORMAT";

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One message per line.
    #[value(name = "text")]
    Text,
    /// One `{"id", "text", "caption"}` object per line.
    #[value(name = "json")]
    Json,
}

impl Display for InputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Text => write!(f, "text"),
            InputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "unshort", about = "Reveals where the short links in chat messages lead")]
pub struct CLI {
    /// HTTP, HTTPS or SOCKS5 proxy for all outgoing requests.
    #[arg(long, env = PROXY_ENV)]
    pub proxy: Option<String>,

    /// Upper bound for resolving a single link, redirects included.
    #[arg(long, env = TIMEOUT_SECS_ENV, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[arg(long, env = MAX_REDIRECTS_ENV, default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,

    #[arg(long, env = USER_AGENT_ENV)]
    pub user_agent: Option<String>,

    #[arg(long, env = INPUT_ENV, value_enum, default_value_t = InputFormat::Text)]
    pub input: InputFormat,

    #[arg(long, env = FORMAT_ENV, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
