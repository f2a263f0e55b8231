//! Ajou notice board CLI
//!
//! Fetches one listing page and prints it as a list.

use std::path::PathBuf;
use std::sync::Arc;

use ajou_notice::{
    error::{AppError, NoticeError, Result},
    models::{Config, NoticeFilter},
    services::NoticeFetcher,
    ui,
};
use clap::{Args, Parser, Subcommand};

/// Ajou University notice board viewer
#[derive(Parser, Debug)]
#[command(name = "notice", version, about = "Ajou University notice board viewer")]

struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "notice.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch notices and print them
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Fetch this URL instead of building one from the filter
        #[arg(long)]
        url: Option<String>,

        /// Print a JSON report instead of a list
        #[arg(long)]
        json: bool,

        /// Open the notice with this list number in the browser
        #[arg(long, value_name = "NUMBER")]
        open: Option<usize>,

        /// Skip TLS certificate validation (unsafe)
        #[arg(long)]
        insecure: bool,
    },

    /// Print the request URL for a filter
    Url {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List the known categories
    Categories,

    /// Validate the configuration file
    Validate,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Number of notices to request (sent as-is)
    #[arg(short, long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Category label (see `categories`)
    #[arg(short = 't', long)]
    category: Option<String>,

    /// Search keyword
    #[arg(short, long)]
    keyword: Option<String>,
}

impl FilterArgs {
    /// Build a filter, rejecting unknown categories.
    fn to_filter(&self, default_limit: i64) -> Result<NoticeFilter> {
        let mut filter = NoticeFilter::new();
        filter.set_result_count(self.limit.unwrap_or(default_limit));

        if let Some(label) = &self.category
            && let Err(e) = filter.set_category(label)
        {
            log::error!("{} ({})", ui::error_message(e), label);
            return Err(e.into());
        }
        if let Some(keyword) = &self.keyword {
            filter.set_keyword(keyword);
        }

        Ok(filter)
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    log::debug!("Loaded configuration from {}", cli.config.display());

    match cli.command {
        Command::List {
            filter,
            url,
            json,
            open,
            insecure,
        } => {
            if insecure {
                config.crawler.accept_invalid_certs = true;
            }
            let filter = filter.to_filter(config.board.default_limit)?;
            let fetcher = NoticeFetcher::new(Arc::new(config.clone()))?;
            let request_url = fetcher.request_url(url.as_deref(), Some(&filter));

            if !json {
                log::info!("{}", ui::loading_message(&filter));
            }
            let outcome = fetcher.fetch(url.as_deref(), Some(&filter)).await;

            if json {
                let report = ui::JsonReport::new(&request_url, &outcome);
                println!("{}", serde_json::to_string_pretty(&report)?);
            }

            let notices = match outcome {
                Ok(notices) => notices,
                Err(NoticeError::NoNotice) => {
                    if !json {
                        println!("{}", ui::error_message(NoticeError::NoNotice));
                    }
                    return Ok(());
                }
                Err(e) => {
                    log::error!("{}", ui::error_message(e));
                    return Err(e.into());
                }
            };

            if !json {
                println!("{}", ui::render_notices(&notices, &config.output));
            }

            if let Some(number) = open {
                let notice = ui::select_notice(&notices, number).ok_or_else(|| {
                    AppError::validation(format!(
                        "No notice numbered {} (1-{})",
                        number,
                        notices.len()
                    ))
                })?;
                log::info!("Opening {}", notice.link);
                ui::open_link(&notice.link)?;
            }
        }

        Command::Url { filter } => {
            let filter = filter.to_filter(config.board.default_limit)?;
            println!("{}", filter.build_with_base(&config.board.base_url));
        }

        Command::Categories => {
            println!("{}", ui::render_categories());
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
            log::info!("  Endpoint: {}", config.board.base_url);
            log::info!("  Timeout: {}s", config.crawler.timeout_secs);
            log::info!("  Extraction mode: {:?}", config.selectors.mode);
            if config.crawler.accept_invalid_certs {
                log::warn!("  TLS certificate validation is disabled");
            }
        }
    }

    Ok(())
}
