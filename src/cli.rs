use crate::config::{ConnectionInput, FetchOptions};
use crate::render::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "make2oas")]
#[command(version)]
#[command(about = "Convert Make scenario interfaces to OpenAPI 3.1 documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List on-demand scenarios of a Make account
    List {
        #[command(flatten)]
        connection: ConnectionArgs,

        #[command(flatten)]
        paging: PagingArgs,

        /// Only show scenarios whose name or description contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Fetch a scenario interface and convert it to OpenAPI
    Convert {
        #[command(flatten)]
        connection: ConnectionArgs,

        #[command(flatten)]
        paging: PagingArgs,

        /// Scenario ID to convert
        #[arg(short, long)]
        scenario: i64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Convert a local interface document without contacting Make
    Generate {
        /// Interface file (JSON or YAML)
        #[arg(short, long)]
        interface: PathBuf,

        /// Scenario ID used in the run path
        #[arg(long)]
        id: i64,

        /// Scenario name used in titles and the file name
        #[arg(long)]
        name: String,

        /// Scenario description
        #[arg(long)]
        description: Option<String>,

        /// Make instance URL used for the server entry
        #[arg(short, long)]
        base_url: String,

        /// Accept hosts outside make.com and make.celonis.com
        #[arg(long)]
        allow_any_host: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check a generated OpenAPI document
    Check {
        /// Path to the JSON or YAML document
        file: PathBuf,
    },

    /// Start the HTTP API
    Serve {
        /// Port number
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Accept hosts outside make.com and make.celonis.com
        #[arg(long)]
        allow_any_host: bool,

        #[command(flatten)]
        paging: PagingArgs,
    },
}

/// Make connection flags; unset values fall back to `MAKE_*` variables
#[derive(Args, Clone, Debug)]
pub struct ConnectionArgs {
    /// Make dashboard URL (e.g. eu1.make.com)
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// API key with scenario read scopes
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Team to list scenarios from
    #[arg(long)]
    pub team_id: Option<String>,

    /// Organization to list scenarios from
    #[arg(long)]
    pub organization_id: Option<String>,

    /// Accept hosts outside make.com and make.celonis.com
    #[arg(long)]
    pub allow_any_host: bool,
}

impl From<ConnectionArgs> for ConnectionInput {
    fn from(args: ConnectionArgs) -> Self {
        ConnectionInput {
            base_url: args.base_url,
            api_key: args.api_key,
            team_id: args.team_id,
            organization_id: args.organization_id,
            allow_any_host: args.allow_any_host,
        }
    }
}

#[derive(Args, Clone, Copy, Debug)]
pub struct PagingArgs {
    /// Scenarios requested per page
    #[arg(long, default_value = "100")]
    pub page_size: usize,

    /// Give up after this many full pages
    #[arg(long, default_value = "1000")]
    pub max_pages: usize,
}

impl From<PagingArgs> for FetchOptions {
    fn from(args: PagingArgs) -> Self {
        FetchOptions {
            page_size: args.page_size,
            max_pages: args.max_pages,
        }
    }
}

#[derive(Args, Clone, Debug)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, default_value = "json")]
    pub format: ExportFormat,

    /// Output file or directory (defaults to <slug>_openapi_spec.<ext>)
    #[arg(short = 'O', long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the document instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl From<ExportFormat> for OutputFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => OutputFormat::Json,
            ExportFormat::Yaml => OutputFormat::Yaml,
        }
    }
}
