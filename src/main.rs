use anyhow::{anyhow, Result};
use chrono::Datelike;
use once_cell::sync::Lazy;
use std::fs;
use std::path::PathBuf;
use structopt::StructOpt;

use edgar_statements::core::config::CONFIG_FILE;
use edgar_statements::core::ClientConfig;
use edgar_statements::edgar::{tickers, EdgarClient, ReportType, Ticker};
use edgar_statements::statement::{assemble, FactStore, FilterContext, Taxonomy};
use edgar_statements::utils::dirs;

const DEFAULT_TAXONOMY_FILE: &str = "taxonomy.json";

static DOC_HELP: Lazy<String> =
    Lazy::new(|| format!("Desired filing form, one of: {}", ReportType::list_types()));

#[derive(Debug, StructOpt)]
#[structopt(
    name = "edgar-statements",
    about = "Fetch SEC company facts and assemble categorized financial statements"
)]
enum Command {
    /// Save the client identification sent with every SEC request
    Config {
        /// Contact email address
        #[structopt(long)]
        email: String,
        /// Short usage statement
        #[structopt(long, default_value = "personal use")]
        usage: String,
    },
    /// Fetch company facts and assemble a statement for one form and year
    Get {
        /// Stock ticker (resolved to a CIK via the registry's ticker table)
        #[structopt(long, short)]
        ticker: Option<String>,
        /// CIK number, if known (takes precedence over --ticker)
        #[structopt(long)]
        cik: Option<String>,
        #[structopt(long, short = "d", default_value = "10-K", help = DOC_HELP.as_str())]
        doc: ReportType,
        /// Fiscal year; defaults to the current year
        #[structopt(long, short = "p")]
        period: Option<i32>,
        /// Path to the taxonomy definition file
        #[structopt(long, parse(from_os_str))]
        taxonomy: Option<PathBuf>,
        /// Output path for the assembled statement
        #[structopt(long, short = "o", parse(from_os_str))]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    match Command::from_args() {
        Command::Config { email, usage } => {
            let config = ClientConfig { email, usage };
            config.save()?;
            println!("Saved client configuration to {}", CONFIG_FILE);
            Ok(())
        }
        Command::Get {
            ticker,
            cik,
            doc,
            period,
            taxonomy,
            output,
        } => get(ticker, cik, doc, period, taxonomy, output).await,
    }
}

async fn get(
    ticker: Option<String>,
    cik: Option<String>,
    doc: ReportType,
    period: Option<i32>,
    taxonomy_path: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = ClientConfig::load()?;
    let client = EdgarClient::new(config.user_agent());
    dirs::ensure_edgar_dirs()?;

    let (cik, ticker) = match company_selector(cik, ticker)? {
        CompanySelector::Cik(cik) => (cik, None),
        CompanySelector::Ticker(ticker) => {
            let cik = tickers::cik_for_ticker(&client, &ticker).await?;
            (cik, Some(ticker))
        }
    };

    let fiscal_year = period.unwrap_or_else(|| chrono::Utc::now().year());
    log::info!("Assembling {} statement for CIK {} FY{}", doc, cik, fiscal_year);

    // Fetch or parse failure is a hard stop; assembly never runs on
    // partial inputs.
    let raw_facts = client.company_facts(&cik).await?;
    let store = FactStore::parse(&raw_facts)?;
    log::debug!(
        "Loaded {} USD concepts for {}",
        store.len(),
        store.entity_name
    );

    let taxonomy_path = taxonomy_path.unwrap_or_else(|| PathBuf::from(DEFAULT_TAXONOMY_FILE));
    let taxonomy_json = fs::read_to_string(&taxonomy_path)
        .map_err(|e| anyhow!("could not read taxonomy file {:?}: {}", taxonomy_path, e))?;
    let taxonomy = Taxonomy::parse(&taxonomy_json)?;

    let ctx = FilterContext {
        form: doc.to_string(),
        fiscal_year,
    };
    let statement = assemble(&store, &taxonomy, &ctx);

    let output = match output {
        Some(path) => path,
        None => {
            dirs::ensure_report_dirs()?;
            let name = ticker
                .as_ref()
                .map(|t| t.to_string())
                .unwrap_or_else(|| format!("CIK{}", cik));
            // 10-K/A would otherwise split the filename into a subdirectory
            let form = doc.to_string().replace('/', "-");
            PathBuf::from(dirs::REPORTS_DIR).join(format!("{}_{}_{}.json", name, form, fiscal_year))
        }
    };

    let json = serde_json::to_string_pretty(&statement)?;
    fs::write(&output, json)?;
    println!(
        "Wrote {} {} FY{} statement to {:?}",
        store.entity_name, ctx.form, ctx.fiscal_year, output
    );
    Ok(())
}

#[derive(Debug)]
enum CompanySelector {
    Cik(String),
    Ticker(Ticker),
}

/// `--cik` takes precedence and skips ticker validation entirely; the ticker
/// is only validated when it must be resolved to a CIK.
fn company_selector(cik: Option<String>, ticker: Option<String>) -> Result<CompanySelector> {
    match (cik, ticker) {
        (Some(cik), _) => Ok(CompanySelector::Cik(cik)),
        (None, Some(t)) => Ok(CompanySelector::Ticker(Ticker::new(&t)?)),
        (None, None) => Err(anyhow!("either --ticker or --cik is required")),
    }
}
