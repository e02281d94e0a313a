use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use armorcalc::report::{DEFAULT_MAX_OVERFLOW, DEFAULT_MIN_TIER};
use armorcalc::{
    classify, load_items_from_path, render, ArmorError, BonusConfig, BonusPolicy, GuardianClass,
    HeaderDialect, ReportRegime, Search, SearchConfig,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Flat,
    Single,
    Paired,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DialectArg {
    Short,
    Base,
    Display,
}

#[derive(Debug, Parser)]
#[command(
    name = "armorcalc",
    version,
    about = "Find armor sets with high tiers and little wasted stats"
)]
struct Args {
    /// CSV file to process, e.g. --file example-armors.csv
    #[arg(long)]
    file: Option<PathBuf>,

    /// Class to process: titan, hunter or warlock
    #[arg(long)]
    guardian: Option<String>,

    /// Assume every piece of a set is masterworked
    #[arg(long, default_value_t = false)]
    masterwork: bool,

    /// Powerful friends mods applied (no more than 2)
    #[arg(long, default_value_t = 0)]
    powerful: u8,

    /// Stat mods applied (no more than 5)
    #[arg(long, default_value_t = 0)]
    mods: u8,

    /// Report sets whose overflow is below this
    #[arg(long, default_value_t = DEFAULT_MAX_OVERFLOW)]
    overflow: u32,

    /// Report sets whose tier is at least this
    #[arg(long, default_value_t = DEFAULT_MIN_TIER)]
    tier: u32,

    #[arg(long, value_enum, default_value_t = PolicyArg::Paired)]
    bonus_policy: PolicyArg,

    /// Use the fixed legacy bands instead of --overflow/--tier
    #[arg(long, default_value_t = false)]
    legacy: bool,

    /// Allow more than one exotic per set
    #[arg(long, default_value_t = false)]
    allow_multiple_exotics: bool,

    /// Header naming of the CSV file; detected when omitted
    #[arg(long, value_enum)]
    dialect: Option<DialectArg>,

    /// Print the tier breakdown for each set
    #[arg(long, default_value_t = false)]
    breakdown: bool,
}

impl Args {
    fn search_config(&self) -> Result<SearchConfig, ArmorError> {
        let guardian = self
            .guardian
            .as_deref()
            .ok_or(ArmorError::MissingInput("--guardian"))?;
        let selector: GuardianClass = guardian.parse()?;

        let policy = match self.bonus_policy {
            PolicyArg::Flat => BonusPolicy::Flat,
            PolicyArg::Single => BonusPolicy::Single,
            PolicyArg::Paired => BonusPolicy::Paired,
        };
        let bonus = BonusConfig::new(policy)
            .with_mods(self.mods)
            .with_powerful(self.powerful)
            .with_masterwork(self.masterwork);

        let regime = if self.legacy {
            ReportRegime::Legacy
        } else {
            ReportRegime::bounded(self.overflow, self.tier)
        };

        let config = SearchConfig::new()
            .with_selector(selector)
            .with_bonus(bonus)
            .with_regime(regime)
            .with_exotic_limit(!self.allow_multiple_exotics);
        config.validate()?;
        Ok(config)
    }

    fn dialect(&self) -> Option<HeaderDialect> {
        self.dialect.map(|dialect| match dialect {
            DialectArg::Short => HeaderDialect::Short,
            DialectArg::Base => HeaderDialect::Base,
            DialectArg::Display => HeaderDialect::Display,
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    // Every setting is checked before the file is touched.
    let file = args
        .file
        .clone()
        .ok_or(ArmorError::MissingInput("--file"))?;
    let config = args.search_config()?;

    writeln!(out, "Hello, Guardian of the Light!")?;

    let items = load_items_from_path(&file, args.dialect())
        .with_context(|| format!("Failed to load armor table: {}", file.display()))?;
    let inventory = classify(items, config.selector).context("Failed to classify inventory")?;

    let search = Search::new(&inventory, &config)?;
    let mut failure = None;
    search.run(|combination| {
        if failure.is_none() {
            if let Err(err) = render::write_report(&mut *out, &combination, args.breakdown) {
                failure = Some(err);
            }
        }
    });
    if let Some(err) = failure {
        return Err(err).context("Failed to write report");
    }

    Ok(())
}
