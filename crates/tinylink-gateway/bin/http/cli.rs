use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use tinylink_gateway::StatusPolicy;
use tinylink_telemetry::LogFormat;

pub const LISTEN_ADDR_ENV: &str = "TINYLINK_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "TINYLINK_PUBLIC_BASE_URL";
pub const STATUS_POLICY_ENV: &str = "TINYLINK_STATUS_POLICY";
pub const GENERATOR_ENV: &str = "TINYLINK_GENERATOR";
pub const GENERATOR_PREFIX_ENV: &str = "TINYLINK_GENERATOR_PREFIX";
pub const LOG_FORMAT_ENV: &str = "TINYLINK_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_GENERATOR_PREFIX: &str = "tl";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusPolicyArg {
    #[value(name = "legacy")]
    Legacy,
    #[value(name = "standard")]
    Standard,
}

impl Display for StatusPolicyArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusPolicyArg::Legacy => write!(f, "legacy"),
            StatusPolicyArg::Standard => write!(f, "standard"),
        }
    }
}

impl From<StatusPolicyArg> for StatusPolicy {
    fn from(value: StatusPolicyArg) -> Self {
        match value {
            StatusPolicyArg::Legacy => StatusPolicy::Legacy,
            StatusPolicyArg::Standard => StatusPolicy::Standard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    #[value(name = "shuffle")]
    Shuffle,
    #[value(name = "uuid")]
    Uuid,
    #[value(name = "seq")]
    Seq,
}

impl Display for GeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorArg::Shuffle => write!(f, "shuffle"),
            GeneratorArg::Uuid => write!(f, "uuid"),
            GeneratorArg::Seq => write!(f, "seq"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tinylink", about = "A tiny in-memory URL shortener")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Prefix for returned short URLs, e.g. `https://tiny.link`.
    /// Defaults to the request's Host header.
    #[arg(long, env = PUBLIC_BASE_URL_ENV)]
    pub public_base_url: Option<String>,

    #[arg(
        long,
        env = STATUS_POLICY_ENV,
        value_enum,
        default_value_t = StatusPolicyArg::Legacy
    )]
    pub status_policy: StatusPolicyArg,

    #[arg(
        long,
        env = GENERATOR_ENV,
        value_enum,
        default_value_t = GeneratorArg::Shuffle
    )]
    pub generator: GeneratorArg,

    /// Prefix for the `seq` generator.
    #[arg(
        long,
        env = GENERATOR_PREFIX_ENV,
        default_value = DEFAULT_GENERATOR_PREFIX,
    )]
    pub generator_prefix: String,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}
