use std::path::PathBuf;

use clap::{Parser, Subcommand};
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::Style;
use gofritai_core::{
    config::Config,
    error::FritError,
    monitor::MonitorPlan,
    provider::{Category, Limit, Provider},
    registry::Registry,
    status,
};
use tracing_subscriber::EnvFilter;

// ── Palette ──────────────────────────────────────────────────────────

fn s_header() -> Style { Style::new().color256(252).bold() }  // bright gray, bold
fn s_dim() -> Style    { Style::new().color256(248) }         // light gray
fn s_tree() -> Style   { Style::new().color256(245) }         // mid gray
fn s_hint() -> Style   { Style::new().color256(243) }         // soft gray
fn s_ok() -> Style     { Style::new().color256(114) }         // green
fn s_warn() -> Style   { Style::new().color256(214) }         // amber
fn s_bold() -> Style   { Style::new().bold() }
fn s_accent() -> Style { Style::new().color256(109) }         // teal accent
fn s_label() -> Style  { Style::new().color256(146) }         // muted lavender

fn sep(width: usize) -> String {
    s_tree().apply_to("\u{2500}".repeat(width)).to_string()
}

fn cc_str(p: &Provider) -> String {
    if p.requires_cc {
        format!("{}", s_warn().apply_to(format!("[{}]", p.cc_label())))
    } else {
        format!("{}", s_ok().apply_to(format!("[{}]", p.cc_label())))
    }
}

// ── CLI Args ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "gofritai",
    about = "Free Tier AI - monitor and manage cloud free tiers",
    long_about = "Free Tier AI - monitor and manage cloud free tiers\n\n\
        Helps you get the most out of free tiers across cloud providers:\n  \
        quota reference for compute, databases, storage and LLM APIs\n  \
        which offers need a credit card\n  \
        quota monitoring and alerts (planned)",
    version,
    after_help = "examples:\n  \
        gofritai list\n  \
        gofritai list --category llm\n  \
        gofritai list --no-cc --json\n  \
        gofritai show oracle-arm\n  \
        gofritai status\n  \
        gofritai --catalog ./providers.toml list"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalogue file to use instead of the bundled one.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Config file (default: <config dir>/gofritai/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show status of all free tier services.
    Status,
    /// List all supported free tier providers.
    List {
        /// Only this category, e.g. compute, database, llm.
        #[arg(long, short)]
        category: Option<Category>,
        /// Only providers that need no credit card.
        #[arg(long)]
        no_cc: bool,
        #[arg(long, short)]
        json: bool,
    },
    /// Details and limits for one provider.
    Show {
        id: String,
        #[arg(long, short)]
        json: bool,
    },
    /// Start monitoring daemon.
    Monitor,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so --json output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let registry = match config.catalog_path(cli.catalog.as_deref()) {
        Some(path) => Registry::load(path)?,
        None => Registry::bundled()?,
    };

    match cli.command {
        Commands::Status => cmd_status(&config.monitor),
        Commands::List {
            category,
            no_cc,
            json,
        } => cmd_list(&registry, category, no_cc, json)?,
        Commands::Show { id, json } => cmd_show(&registry, &id, json)?,
        Commands::Monitor => cmd_monitor(&config.monitor),
    }
    Ok(())
}

// ── Status ───────────────────────────────────────────────────────────

fn cmd_status(plan: &MonitorPlan) {
    println!();
    println!("{}", s_header().apply_to("free tier status"));
    println!("{}", sep(56));

    let usage_color = |pct: u8| -> Color {
        if pct >= plan.alert_threshold_pct {
            Color::AnsiValue(167)
        } else if pct >= 50 {
            Color::AnsiValue(214)
        } else {
            Color::AnsiValue(114)
        }
    };

    for (section, rows) in status::sections() {
        println!();
        println!("  {}", s_label().apply_to(section));

        let mut table = Table::new();
        table.load_preset(presets::NOTHING);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        for row in rows {
            table.add_row(vec![
                Cell::new(format!("  {}", row.label)),
                Cell::new(row.quota).fg(Color::AnsiValue(248)),
                Cell::new(format!("{}% used", row.used_pct)).fg(usage_color(row.used_pct)),
            ]);
        }
        println!("{table}");
    }

    println!("{}", sep(56));
    println!(
        "{}",
        s_hint().apply_to("  sample figures; live quota tracking is not wired up yet")
    );
    println!();
}

// ── List ─────────────────────────────────────────────────────────────

fn cmd_list(
    registry: &Registry,
    category: Option<Category>,
    no_cc: bool,
    json: bool,
) -> anyhow::Result<()> {
    let allowed = if no_cc {
        registry.no_credit_card()
    } else {
        registry.iter().collect()
    };
    let categories = match category {
        Some(c) => vec![c],
        None => registry.categories(),
    };

    let groups: Vec<(Category, Vec<&Provider>)> = categories
        .into_iter()
        .map(|c| {
            let members = registry
                .by_category(c)
                .into_iter()
                .filter(|p| allowed.iter().any(|a| a.id == p.id))
                .collect::<Vec<_>>();
            (c, members)
        })
        .filter(|(_, members)| !members.is_empty())
        .collect();

    if json {
        let flat: Vec<&Provider> = groups.iter().flat_map(|(_, m)| m.iter().copied()).collect();
        println!("{}", serde_json::to_string_pretty(&flat)?);
        return Ok(());
    }

    println!();
    println!("{}", s_header().apply_to("supported free tier providers"));
    println!("{}", sep(72));

    if groups.is_empty() {
        println!("  {}", s_dim().apply_to("no providers match"));
    }

    let mut shown = 0;
    for (c, members) in &groups {
        println!();
        println!("  {}", s_label().apply_to(c.heading()));
        for p in members {
            println!(
                "    {:<20} {:<36} {}",
                s_bold().apply_to(&p.name),
                s_dim().apply_to(&p.free_tier.description),
                cc_str(p)
            );
        }
        shown += members.len();
    }

    println!();
    println!("{}", sep(72));
    println!(
        "{}",
        s_hint().apply_to(format!(
            "  {shown} providers   gofritai show <id> for limits"
        ))
    );
    println!();
    Ok(())
}

// ── Show ─────────────────────────────────────────────────────────────

fn cmd_show(registry: &Registry, id: &str, json: bool) -> anyhow::Result<()> {
    let p = registry
        .get(id)
        .ok_or_else(|| FritError::ProviderNotFound(id.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(p)?);
        return Ok(());
    }

    println!();
    println!(
        "{}  {}",
        s_bold().apply_to(format!("{} \u{2014} {}", p.id, p.name)),
        s_dim().apply_to(p.category)
    );
    println!("{}", sep(64));
    println!("  {:<12} {}", s_label().apply_to("free tier"), p.free_tier.description);
    println!("  {:<12} {}", s_label().apply_to("duration"), p.free_tier.duration);
    println!("  {:<12} {}", s_label().apply_to("sign-up"), cc_str(p));
    println!("  {:<12} {}", s_label().apply_to("url"), s_accent().apply_to(&p.url));
    if let Some(ep) = &p.api_endpoint {
        println!("  {:<12} {}", s_label().apply_to("api"), s_accent().apply_to(ep));
    }
    for (k, v) in &p.metadata {
        println!("  {:<12} {}", s_label().apply_to(k), v);
    }

    println!();
    if p.free_tier.limits.is_empty() {
        println!("  {}", s_dim().apply_to("no published limits"));
    } else {
        let mut table = Table::new();
        table.load_preset(presets::NOTHING);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            Cell::new("  Resource").fg(Color::AnsiValue(243)),
            Cell::new("Amount").fg(Color::AnsiValue(243)),
            Cell::new("Resets").fg(Color::AnsiValue(243)),
        ]);
        for l in &p.free_tier.limits {
            let resets = match l.period {
                Some(period) => format!("per {period}"),
                None => "never".to_string(),
            };
            table.add_row(vec![
                Cell::new(format!("  {}", l.resource)).fg(Color::AnsiValue(248)),
                Cell::new(format!("{} {}", Limit::fmt_amount(l.amount), l.unit))
                    .fg(Color::AnsiValue(109)),
                Cell::new(resets).fg(Color::AnsiValue(248)),
            ]);
        }
        println!("{table}");
    }
    println!("{}", sep(64));
    println!();
    Ok(())
}

// ── Monitor ──────────────────────────────────────────────────────────

fn cmd_monitor(plan: &MonitorPlan) {
    tracing::info!(
        interval_minutes = plan.interval_minutes,
        alert_threshold_pct = plan.alert_threshold_pct,
        "monitor requested; polling is not implemented"
    );
    let mut lines = plan.banner_lines().into_iter();
    if let Some(first) = lines.next() {
        println!("{}", s_header().apply_to(first));
    }
    for line in lines {
        println!("   {}", s_dim().apply_to(line));
    }
}
