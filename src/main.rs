use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::Table;
use configuration::{load_config, Config, ConfigOverrides};
use core_types::{format_currency, format_number, EntryId, RangeToken, YearMonth};
use dashboard::{charts, display, initials, ChartData, Dashboard, VelocityTier};
use std::path::PathBuf;
use storage::FileStore;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The main entry point for the executive dashboard.
fn main() -> Result<()> {
    // Load EXEC_DASHBOARD__* overrides from a .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    config.apply_overrides(&cli.overrides);
    configuration::validate(&config)?;

    let _guard = init_tracing(&config)?;

    let anchor = cli.anchor.unwrap_or_else(YearMonth::current);
    let store = FileStore::open(config.storage.data_dir.clone())?;
    let mut dashboard = Dashboard::open(&config, anchor, store);

    // Execute the appropriate command
    let output = Output { json: cli.json };
    match cli.command {
        Commands::Kpis { range } => handle_kpis(&dashboard, range, output)?,
        Commands::Chart { range, kind } => handle_chart(&dashboard, range, kind, output)?,
        Commands::Pipeline => handle_pipeline(&dashboard, output)?,
        Commands::Team => handle_team(&dashboard, output)?,
        Commands::Entries { action } => handle_entries(&mut dashboard, action, output)?,
        Commands::Theme { action } => {
            handle_theme(&mut dashboard, action, cli.prefers_light, output)?
        }
    }

    Ok(())
}

/// Installs the stderr subscriber and, when configured, a daily log file
/// under `<data_dir>/logs`. The returned guard must outlive all logging.
fn init_tracing(config: &Config) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    let stderr = fmt::layer().with_writer(std::io::stderr);

    if config.logging.file {
        let appender = tracing_appender::rolling::daily(
            config.storage.data_dir.join("logs"),
            "exec-dashboard.log",
        );
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr)
            .with(fmt::layer().with_ansi(false).with_writer(writer))
            .try_init()?;
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr)
            .try_init()?;
        Ok(None)
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Executive dashboard: KPIs, charts and custom monthly entries.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. A missing file means defaults.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(flatten)]
    overrides: ConfigOverrides,

    /// Last month of the generated series (format: YYYY-MM). Defaults to the current month.
    #[arg(long, global = true)]
    anchor: Option<YearMonth>,

    /// Print machine-readable JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    /// Treat the host as preferring the light theme when none is saved.
    #[arg(long, global = true)]
    prefers_light: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the six headline KPIs.
    Kpis {
        /// Range token: 7d, 30d, 90d, ytd or all. Anything else means all.
        #[arg(long, default_value = "all")]
        range: RangeToken,
    },
    /// Show the data behind one of the dashboard charts.
    Chart {
        #[arg(long, default_value = "all")]
        range: RangeToken,
        #[arg(long, value_enum, default_value_t = ChartKind::Revenue)]
        kind: ChartKind,
    },
    /// Show the pipeline stage breakdown of the latest month.
    Pipeline,
    /// Show the team performance roster.
    Team,
    /// Manage custom monthly entries.
    Entries {
        #[command(subcommand)]
        action: EntryCommand,
    },
    /// Show or toggle the theme preference.
    Theme {
        #[command(subcommand)]
        action: ThemeCommand,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ChartKind {
    /// Revenue vs. expenses.
    Revenue,
    /// Actual vs. forecast revenue.
    Forecast,
    /// Burn rate vs. revenue.
    Burn,
    /// Pipeline value by stage.
    Pipeline,
}

#[derive(Subcommand)]
enum EntryCommand {
    /// List stored entries in submission order.
    List,
    /// Store an entry and override the matching month.
    Add {
        /// Short month name, e.g. "Dec".
        #[arg(long)]
        month: String,
        #[arg(long)]
        year: String,
        #[arg(long)]
        revenue: String,
        #[arg(long)]
        expenditure: String,
    },
    /// Delete one entry by id.
    Remove { id: String },
    /// Delete every stored entry.
    Clear,
}

#[derive(Subcommand)]
enum ThemeCommand {
    Show,
    Toggle,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

#[derive(Clone, Copy)]
struct Output {
    json: bool,
}

impl Output {
    fn print_json<T: serde::Serialize + ?Sized>(self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

fn handle_kpis(dashboard: &Dashboard<FileStore>, range: RangeToken, output: Output) -> Result<()> {
    let kpis = dashboard.kpis(range)?;
    if output.json {
        return output.print_json(&kpis);
    }

    let mut table = Table::new();
    table.set_header(vec!["KPI", "Value", "Trend", "Detail"]);
    for (kind, datum) in kpis.entries() {
        table.add_row(vec![
            kind.title().to_string(),
            display::kpi_value_text(datum),
            display::trend_text(datum),
            datum.subtitle.clone(),
        ]);
    }
    println!("{table}");
    println!("Range: {range}");
    println!("{}", display::last_updated_text(Local::now().naive_local()));
    Ok(())
}

fn handle_chart(
    dashboard: &Dashboard<FileStore>,
    range: RangeToken,
    kind: ChartKind,
    output: Output,
) -> Result<()> {
    let window = dashboard.chart_data(range);
    let chart = match kind {
        ChartKind::Revenue => charts::revenue_vs_expenses(window),
        ChartKind::Forecast => charts::actual_vs_forecast(window),
        ChartKind::Burn => charts::burn_vs_revenue(window),
        ChartKind::Pipeline => charts::pipeline_chart(&dashboard.pipeline_breakdown()),
    };
    if output.json {
        return output.print_json(&chart);
    }
    println!("{}", chart_table(&chart));
    Ok(())
}

fn chart_table(chart: &ChartData) -> Table {
    let mut table = Table::new();
    let mut header = vec!["Label".to_string()];
    header.extend(chart.datasets.iter().map(|d| d.name.to_string()));
    table.set_header(header);
    for (i, label) in chart.labels.iter().enumerate() {
        let mut row = vec![label.clone()];
        row.extend(
            chart
                .datasets
                .iter()
                .map(|d| d.values.get(i).map(|v| format_number(*v)).unwrap_or_default()),
        );
        table.add_row(row);
    }
    table
}

fn handle_pipeline(dashboard: &Dashboard<FileStore>, output: Output) -> Result<()> {
    let buckets = dashboard.pipeline_breakdown();
    if output.json {
        return output.print_json(&buckets);
    }

    let mut table = Table::new();
    table.set_header(vec!["Stage", "Value", "Color"]);
    for bucket in &buckets {
        table.add_row(vec![
            bucket.stage.to_string(),
            format_currency(bucket.value),
            bucket.color.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn handle_team(dashboard: &Dashboard<FileStore>, output: Output) -> Result<()> {
    let team = dashboard.team_data();
    if output.json {
        return output.print_json(team);
    }

    let mut table = Table::new();
    table.set_header(vec!["", "Member", "Role", "Velocity", "Tasks", "Status"]);
    for member in team {
        table.add_row(vec![
            initials(member.member),
            member.member.to_string(),
            member.role.to_string(),
            format!("{} ({})", member.velocity, VelocityTier::of(member.velocity).as_str()),
            member.tasks.to_string(),
            format!("● {}", member.status.label()),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn handle_entries(
    dashboard: &mut Dashboard<FileStore>,
    action: EntryCommand,
    output: Output,
) -> Result<()> {
    match action {
        EntryCommand::List => {
            let entries = dashboard.custom_entries();
            if output.json {
                return output.print_json(&entries);
            }
            if entries.is_empty() {
                println!("No custom entries.");
                return Ok(());
            }
            let mut table = Table::new();
            table.set_header(vec!["Id", "Period", "Revenue", "Expenditure", "Profit"]);
            for entry in &entries {
                table.add_row(vec![
                    entry.id.to_string(),
                    entry.label(),
                    format_currency(entry.revenue),
                    format_currency(entry.expenditure),
                    display::signed_profit_text(entry.profit),
                ]);
            }
            println!("{table}");
        }
        EntryCommand::Add {
            month,
            year,
            revenue,
            expenditure,
        } => {
            let id = dashboard.add_entry(&month, &year, &revenue, &expenditure)?;
            if output.json {
                return output.print_json(&serde_json::json!({ "id": id }));
            }
            println!("Stored entry {id} for {month} {year}.");
        }
        EntryCommand::Remove { id } => {
            let removed = dashboard.remove_entry(&EntryId::from(id.as_str()))?;
            if output.json {
                return output.print_json(&serde_json::json!({ "removed": removed }));
            }
            if removed {
                println!("Removed entry {id}.");
            } else {
                println!("No entry with id {id}.");
            }
        }
        EntryCommand::Clear => {
            dashboard.clear_custom_entries()?;
            if output.json {
                return output.print_json(&serde_json::json!({ "cleared": true }));
            }
            println!("All custom entries cleared.");
        }
    }
    Ok(())
}

fn handle_theme(
    dashboard: &mut Dashboard<FileStore>,
    action: ThemeCommand,
    prefers_light: bool,
    output: Output,
) -> Result<()> {
    let theme = match action {
        ThemeCommand::Show => dashboard.theme(prefers_light),
        ThemeCommand::Toggle => dashboard.toggle_theme(prefers_light)?,
    };
    if output.json {
        return output.print_json(&theme);
    }
    println!("Theme: {theme}");
    Ok(())
}
