use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sika_catalog::{Catalog, demo_catalog};
use sika_core::{
    AmountFacet, Chip, FilterController, FilterState, FilteredResult, PeriodFacet, StatusFacet,
    Tab, evaluate,
};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;
mod paths;
mod render;

#[derive(Parser, Debug)]
#[command(name = "sika", version, about = "Filter and caption the sika transaction list")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the transactions matching the given facets, plus chip captions
    List {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show only the chip captions for the given facets
    Chips {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Manage ~/.sika/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
    /// Print the config file location
    Path,
}

/// Where the records come from and which day counts as today. Captions do
/// not depend on either, so only `list` takes these.
#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// CSV catalog (defaults to the configured catalog, then demo data)
    #[arg(long, conflicts_with = "json")]
    csv: Option<PathBuf>,

    /// JSON catalog
    #[arg(long)]
    json: Option<PathBuf>,

    /// Reference day for today/week/month (defaults to today in the configured zone)
    #[arg(long)]
    today: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct FilterArgs {
    #[arg(long, value_enum, default_value_t = TabArg::Past)]
    tab: TabArg,

    /// Category chip label ("All" / "Tous" for no chip)
    #[arg(long, default_value = "All")]
    chip: String,

    /// Free-text search over title, description and category
    #[arg(long, default_value = "")]
    search: String,

    #[arg(long, value_enum, default_value_t = PeriodArg::All)]
    period: PeriodArg,

    /// Custom period start (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long)]
    start: Option<String>,

    /// Custom period end (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long)]
    end: Option<String>,

    #[arg(long, value_enum, default_value_t = AmountArg::All)]
    amount: AmountArg,

    /// Custom minimum amount
    #[arg(long)]
    min: Option<String>,

    /// Custom maximum amount
    #[arg(long)]
    max: Option<String>,

    #[arg(long, value_enum, default_value_t = StatusArg::All)]
    status: StatusArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum TabArg {
    Past,
    Upcoming,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum PeriodArg {
    All,
    Today,
    Week,
    Month,
    Custom,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum AmountArg {
    All,
    Small,
    Medium,
    Large,
    Custom,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum StatusArg {
    All,
    Completed,
    Pending,
    Failed,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List { source, filters, format } => {
            let cfg = config::load_config()?;
            let today = reference_day(&source, &cfg)?;
            let catalog = open_catalog(&source, &cfg, today)?;
            let state = build_state(&filters);
            let result = evaluate(catalog.records(), &state, &cfg.engine, today);
            print_list(&catalog, &state, &result, format)?;
        }

        Command::Chips { filters } => {
            let cfg = config::load_config()?;
            let state = build_state(&filters);
            let labels = sika_core::chip_labels(&cfg.engine.chips, &state);
            print!("{}", render::chips(&labels, state.advanced.is_active()));
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", config::render_config(&cfg)?);
            }
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },
    }

    Ok(())
}

fn reference_day(source: &SourceArgs, cfg: &config::Config) -> Result<NaiveDate> {
    match &source.today {
        Some(day) => NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .with_context(|| format!("invalid --today '{day}' (expected YYYY-MM-DD)")),
        None => cfg.engine.today(),
    }
}

fn open_catalog(source: &SourceArgs, cfg: &config::Config, today: NaiveDate) -> Result<Catalog> {
    let path = source
        .csv
        .clone()
        .or_else(|| source.json.clone())
        .or_else(|| cfg.catalog.path.clone());

    match path {
        Some(p) => {
            if !p.exists() {
                bail!("catalog not found: {} (pass --csv or --json)", p.display());
            }
            Catalog::load(&p).with_context(|| format!("loading {}", p.display()))
        }
        None => {
            info!(%today, "no catalog configured, using demo data");
            Ok(Catalog::from_records(demo_catalog(today)))
        }
    }
}

/// Replays the flags through the controller, one interaction per facet,
/// the way the list screen would.
fn build_state(filters: &FilterArgs) -> FilterState {
    let mut ctl = FilterController::new();

    ctl.set_tab(match filters.tab {
        TabArg::Past => Tab::Past,
        TabArg::Upcoming => Tab::Upcoming,
    });
    ctl.set_chip(Chip::named(filters.chip.as_str()));
    ctl.set_search(filters.search.as_str());

    match filters.period {
        PeriodArg::All => {}
        PeriodArg::Today => {
            ctl.set_advanced_period(PeriodFacet::Today);
        }
        PeriodArg::Week => {
            ctl.set_advanced_period(PeriodFacet::Week);
        }
        PeriodArg::Month => {
            ctl.set_advanced_period(PeriodFacet::Month);
        }
        PeriodArg::Custom => {
            ctl.set_custom_period_start(filters.start.clone().unwrap_or_default());
            ctl.set_custom_period_end(filters.end.clone().unwrap_or_default());
        }
    }

    match filters.amount {
        AmountArg::All => {}
        AmountArg::Small => {
            ctl.set_advanced_amount_range(AmountFacet::Small);
        }
        AmountArg::Medium => {
            ctl.set_advanced_amount_range(AmountFacet::Medium);
        }
        AmountArg::Large => {
            ctl.set_advanced_amount_range(AmountFacet::Large);
        }
        AmountArg::Custom => {
            ctl.set_custom_amount_min(filters.min.clone().unwrap_or_default());
            ctl.set_custom_amount_max(filters.max.clone().unwrap_or_default());
        }
    }

    ctl.set_advanced_status(match filters.status {
        StatusArg::All => StatusFacet::All,
        StatusArg::Completed => StatusFacet::Completed,
        StatusArg::Pending => StatusFacet::Pending,
        StatusArg::Failed => StatusFacet::Failed,
    });

    let state = ctl.snapshot();
    debug!(?state, "filter state from flags");
    state
}

fn print_list(
    catalog: &Catalog,
    state: &FilterState,
    result: &FilteredResult<'_>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result).context("serialize result")?;
            println!("{json}");
        }
        OutputFormat::Text => {
            print!("{}", render::list(catalog, state, result));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_onto_filter_state() {
        let cli = Cli::parse_from([
            "sika", "list", "--tab", "upcoming", "--chip", "Transfert", "--search", "awa",
            "--amount", "custom", "--min", "20000", "--status", "failed",
        ]);
        let Command::List { filters, .. } = cli.command else {
            panic!("expected list");
        };
        let state = build_state(&filters);
        assert_eq!(state.tab, Tab::Upcoming);
        assert_eq!(state.selected_chip, Chip::named("Transfert"));
        assert_eq!(state.search_query, "awa");
        assert_eq!(
            state.advanced.amount,
            AmountFacet::Custom { min: "20000".into(), max: String::new() }
        );
        assert_eq!(state.advanced.status, StatusFacet::Failed);
        assert!(state.advanced.period.is_all());
    }

    #[test]
    fn test_default_flags_are_default_state() {
        let cli = Cli::parse_from(["sika", "chips"]);
        let Command::Chips { filters } = cli.command else {
            panic!("expected chips");
        };
        assert_eq!(build_state(&filters), FilterState::default());
    }

    #[test]
    fn test_csv_and_json_conflict() {
        assert!(Cli::try_parse_from(["sika", "list", "--csv", "a.csv", "--json", "b.json"]).is_err());
    }

    #[test]
    fn test_chips_rejects_catalog_and_day_flags() {
        assert!(Cli::try_parse_from(["sika", "chips", "--csv", "a.csv"]).is_err());
        assert!(Cli::try_parse_from(["sika", "chips", "--today", "2026-10-16"]).is_err());

        let cli = Cli::parse_from(["sika", "list", "--json", "c.json", "--today", "2026-10-16"]);
        let Command::List { source, .. } = cli.command else {
            panic!("expected list");
        };
        assert_eq!(source.json, Some(PathBuf::from("c.json")));
        assert_eq!(source.today.as_deref(), Some("2026-10-16"));
    }
}
