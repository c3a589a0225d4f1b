use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use tracing_subscriber::EnvFilter;

use bili_catalog::error::Result;
use bili_catalog::fetcher::Fetcher;
use bili_catalog::fetcher::PaginatedFetcher;
use bili_catalog::record::Record;

mod config;

/// List every video published by a Bilibili uploader.
#[derive(Parser)]
struct Args {
    /// Uploader UID
    uid: Option<u64>,

    /// Videos requested per page [default: 50]
    #[clap(long)]
    page_size: Option<u32>,

    /// Seconds to wait between page requests [default: 0.5]
    #[clap(long)]
    delay: Option<f64>,

    /// Listing endpoint
    #[clap(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[clap(long)]
    timeout: Option<f64>,

    /// YAML file providing any of the options above
    #[clap(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn load(self) -> Result<config::Cfg> {
        let file = match &self.config {
            Some(path) => config::Parser::parse_yaml(path)?,
            None => config::Cfg::default(),
        };

        Ok(file.merge(config::Cfg {
            uid: self.uid,
            page_size: self.page_size,
            delay: self.delay,
            endpoint: self.endpoint,
            timeout: self.timeout,
        }))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let cfg = args.load()?.into_fetch_config()?;
    let fetcher = PaginatedFetcher::new(cfg)?;

    let records = fetch_catalog(&fetcher).await?;
    print_records(&mut std::io::stdout().lock(), &records)?;
    Ok(())
}

async fn fetch_catalog(fetcher: &(dyn Fetcher + Send + Sync)) -> Result<Vec<Record>> {
    fetcher.fetch_all().await
}

fn print_records<W: Write>(out: &mut W, records: &[Record]) -> Result<()> {
    for record in records {
        writeln!(
            out,
            "{} \t {} \t {}",
            record.aid,
            record.title,
            record.video_url()
        )?;
    }
    Ok(())
}
