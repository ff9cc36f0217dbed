use crate::cli::args::{Cli, Commands};
use crate::config::DashboardConfig;
use crate::dashboard::{DashboardSession, InputEvent, RenderedPage};
use crate::error::Result;
use crate::models::Dataset;
use crate::processors::{derive_celsius, extract_summary};
use crate::readers::{global_cache, DatasetSource};
use crate::utils::progress::ProgressReporter;
use chrono::NaiveDate;
use std::fs::File;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber; `RUST_LOG` wins over `--verbose`
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init fails only when a subscriber is already installed
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init();
        }
    }

    Ok(())
}

fn apply_overrides(
    config: &mut DashboardConfig,
    data: Option<PathBuf>,
    chart_output: Option<PathBuf>,
) {
    if let Some(data) = data {
        config.data_path = data;
    }
    if let Some(chart_output) = chart_output {
        config.chart_output = chart_output;
    }
}

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let mut config = DashboardConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Interactive { data, chart_output } => {
            apply_overrides(&mut config, data, chart_output);
            config.log_config();
            run_interactive(config)?;
        }

        Commands::Render {
            data,
            cities,
            start,
            end,
            chart_output,
            show_table,
        } => {
            apply_overrides(&mut config, data, chart_output);
            config.log_config();

            let mut session = DashboardSession::new(global_cache(), config);
            session.set_table_expanded(show_table);
            let page = render_once(&mut session, cities, start, end)?;
            println!("{}", page.text);
        }

        Commands::Summary { data, json } => {
            apply_overrides(&mut config, data, None);
            config.log_config();

            let dataset = global_cache().load(&config.data_path)?;
            println!("{}", summary_report(&dataset, json)?);
        }
    }

    Ok(())
}

/// One non-interactive pass; `cities` replaces the configured presets when
/// any are given
fn render_once<S: DatasetSource>(
    session: &mut DashboardSession<'_, S>,
    cities: Vec<String>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<RenderedPage> {
    if !cities.is_empty() {
        session.apply(InputEvent::ClearCities)?;
        for city in cities {
            session.apply(InputEvent::SelectCity(city))?;
        }
    }
    if let Some(start) = start {
        session.apply(InputEvent::SetStartDate(start))?;
    }
    if let Some(end) = end {
        session.apply(InputEvent::SetEndDate(end))?;
    }

    session.render()
}

fn summary_report(dataset: &Dataset, json: bool) -> Result<String> {
    let stats = extract_summary(&derive_celsius(dataset))?;

    if json {
        Ok(serde_json::to_string_pretty(&stats)?)
    } else {
        Ok(stats.summary())
    }
}

fn run_interactive(config: DashboardConfig) -> Result<()> {
    let progress = ProgressReporter::new_spinner(
        &format!("Loading {}...", config.data_path.display()),
        !io::stderr().is_terminal(),
    );
    global_cache().load(&config.data_path)?;
    progress.finish_and_clear();

    let mut session = DashboardSession::new(global_cache(), config);
    let stdin = io::stdin();
    let pages = event_loop(&mut session, stdin.lock(), &mut io::stdout())?;
    tracing::debug!(pages, "Interactive session ended");

    Ok(())
}

/// Render the page, then read commands until `quit` or end of input,
/// re-rendering after each one. Returns the number of pages written.
pub fn event_loop<S, R, W>(
    session: &mut DashboardSession<'_, S>,
    input: R,
    out: &mut W,
) -> Result<usize>
where
    S: DatasetSource,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", session.render()?.text)?;
    write!(out, "> ")?;
    out.flush()?;
    let mut pages = 1;

    for line in input.lines() {
        let line = line?;

        let page = match line.parse::<InputEvent>() {
            Ok(event) => match session.handle(event)? {
                Some(page) => page,
                None => break,
            },
            Err(e) => {
                session.reject(&e);
                session.render()?
            }
        };

        writeln!(out, "{}", page.text)?;
        write!(out, "> ")?;
        out.flush()?;
        pages += 1;
    }

    Ok(pages)
}
