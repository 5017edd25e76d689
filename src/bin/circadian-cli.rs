#![forbid(unsafe_code)]
use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate, Utc};
use circadian::{
    display::render_table,
    export::{export, write_ics, DEFAULT_ICS_FILE_NAME},
    io,
    model::{parse_clock_time, Direction, RawAdjustmentRequest, ScheduleEntry},
    prompt::{prepare_analysis, TextPrompt},
    scheduler::{generate, parse_request},
    sleep_log::{SleepQuality, SleepRecord},
    storage::{JsonSleepLogStore, SleepLogStore},
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de planification d'un décalage circadien (jet lag) avec export .ics
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du journal de sommeil
    #[arg(long, global = true, default_value = "sleep-log.json")]
    sleep_log: PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

/// Paramètres de la requête, en ligne de commande ou depuis un fichier JSON.
#[derive(Args, Debug)]
struct RequestArgs {
    /// Heure de réveil habituelle (HH:MM)
    #[arg(long)]
    wake: Option<String>,
    /// advance (vers l'est) ou delay (vers l'ouest)
    #[arg(long, default_value = "advance")]
    direction: String,
    /// Décalage total en heures
    #[arg(long, default_value_t = 6.0)]
    hours: f64,
    /// Nombre de jours d'ajustement
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    days: i64,
    /// Date de référence (YYYY-MM-DD), aujourd'hui par défaut
    #[arg(long)]
    today: Option<NaiveDate>,
    /// Requête JSON au format UI (remplace les options ci-dessus)
    #[arg(long)]
    request: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer et afficher le plan
    Generate {
        #[command(flatten)]
        req: RequestArgs,
        #[arg(long)]
        out_json: Option<PathBuf>,
        #[arg(long)]
        out_csv: Option<PathBuf>,
    },

    /// Générer le plan et l'exporter en .ics
    Export {
        #[command(flatten)]
        req: RequestArgs,
        #[arg(long, default_value = DEFAULT_ICS_FILE_NAME)]
        out: PathBuf,
    },

    /// Enregistrer une nuit dans le journal
    LogSleep {
        /// Date du coucher (YYYY-MM-DD), aujourd'hui par défaut
        #[arg(long)]
        date: Option<NaiveDate>,
        /// HH:MM
        #[arg(long)]
        bedtime: String,
        /// HH:MM
        #[arg(long)]
        wake: String,
        #[arg(long, default_value = "fair")]
        quality: String,
        #[arg(long, default_value_t = 0)]
        wake_ups: u32,
    },

    /// Afficher le prompt d'analyse de la dernière nuit
    Prompt,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    match cli.cmd {
        Commands::Generate {
            req,
            out_json,
            out_csv,
        } => {
            let (entries, direction) = build_schedule(&req)?;
            if let Some(path) = out_json {
                io::export_schedule_json(path, &entries)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &entries)?;
            }
            print!("{}", render_table(&entries, direction));
        }
        Commands::Export { req, out } => {
            let (entries, direction) = build_schedule(&req)?;
            let events = export(&entries, direction)?;
            write_ics(&out, &events, Utc::now())?;
            println!("{} event(s) written to {}", events.len(), out.display());
        }
        Commands::LogSleep {
            date,
            bedtime,
            wake,
            quality,
            wake_ups,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let bedtime = parse_clock_time(&bedtime)
                .ok_or_else(|| anyhow!("invalid bedtime: {bedtime}"))?;
            let wake =
                parse_clock_time(&wake).ok_or_else(|| anyhow!("invalid wake time: {wake}"))?;
            let quality: SleepQuality = quality.parse().map_err(anyhow::Error::msg)?;
            let record = SleepRecord::from_clock_times(date, bedtime, wake, quality, wake_ups)
                .map_err(anyhow::Error::msg)?;
            let hours = record.duration_hours();
            let store = JsonSleepLogStore::open(&cli.sleep_log)?;
            let total = store.append(record)?;
            println!("Logged {hours:.2}h of sleep ({total} night(s) in {})", store.path().display());
        }
        Commands::Prompt => {
            let store = JsonSleepLogStore::open(&cli.sleep_log)?;
            let records = store.load()?;
            print!("{}", prepare_analysis(&records, &TextPrompt)?);
        }
    }

    Ok(())
}

fn build_schedule(args: &RequestArgs) -> Result<(Vec<ScheduleEntry>, Direction)> {
    let raw = match &args.request {
        Some(path) => io::load_request_json(path)?,
        None => RawAdjustmentRequest {
            usual_wake_time: args.wake.clone(),
            direction: Some(args.direction.clone()),
            total_hours_to_shift: args.hours,
            adjustment_days: args.days,
        },
    };
    let request = parse_request(&raw)?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let entries = generate(&request, today).context("generating schedule")?;
    Ok((entries, request.direction))
}
