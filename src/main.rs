//! Staffdesk - command-line admin console for employees and attendance.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use staffdesk as app;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use app::client::{ApiClient, Gateway};
use app::config::{AppConfig, ConfigLoadResult};
use app::export;
use app::models::{AttendanceStatus, DEPARTMENTS, EmployeeDraft};
use app::pages::{AttendancePage, EmployeesPage, MarkOutcome, load_dashboard, or_empty};
use app::presence::today;
use app::render;
use app::theme::{Theme, ThemeContext};
use app::AppError;

/// Admin console for employee and attendance management.
#[derive(Parser)]
#[command(name = "staffdesk", version)]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long, global = true)]
    dev: bool,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config and STAFFDESK_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show summary statistics and recent employees
    Dashboard,

    /// Manage employees
    Employees {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Mark and review attendance
    Attendance {
        #[command(subcommand)]
        action: AttendanceAction,
    },

    /// Check that the backend is reachable
    Ping,

    /// Switch the color theme
    Theme {
        #[arg(value_enum, default_value = "toggle")]
        choice: ThemeChoice,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum EmployeeAction {
    /// List employees, optionally filtered by a search query
    List {
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Show one employee
    Show { id: String },
    /// Add an employee
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        /// One of: Engineering, HR, Sales, Finance, Marketing, Operations
        #[arg(long, default_value = "")]
        department: String,
    },
    /// Edit an employee; omitted fields keep their current value
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        department: Option<String>,
    },
    /// Delete an employee
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Export employees to CSV
    Export {
        #[arg(short, long, default_value = "")]
        search: String,
        /// Output directory (default: export.directory from config)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// List the departments offered by the form
    Departments,
}

#[derive(Subcommand)]
enum AttendanceAction {
    /// List attendance records (default: today)
    List {
        #[arg(short, long, conflicts_with = "all")]
        date: Option<NaiveDate>,
        /// Show every date
        #[arg(short, long)]
        all: bool,
    },
    /// Show today's status for every employee
    Today,
    /// Show one employee's attendance history
    History { employee_id: String },
    /// Mark an employee present or absent for today
    Mark {
        employee_id: String,
        /// present or absent
        status: AttendanceStatus,
    },
    /// Export attendance to CSV (default: today)
    Export {
        #[arg(short, long, conflicts_with = "all")]
        date: Option<NaiveDate>,
        #[arg(short, long)]
        all: bool,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeChoice {
    Toggle,
    Light,
    Dark,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = init_logging(cli.log_dir.as_deref());

    tracing::info!("Staffdesk starting...");

    let config_path = config_path(&cli);
    tracing::info!("Config path: {:?}", config_path);

    match &cli.command {
        Command::Theme { choice } => return switch_theme(&config_path, *choice, !cli.no_color),
        Command::Config {
            action: ConfigAction::Init { force },
        } => return init_config(&config_path, *force),
        _ => {}
    }

    let config = load_config(&cli, &config_path)?;
    let ctx = ThemeContext::new(config.ui.theme, !cli.no_color);
    let client = ApiClient::from_config(&config.api)?;
    tracing::info!("Backend: {}", client.base_url());

    match cli.command {
        Command::Dashboard => {
            let view = load_dashboard(&client)
                .await
                .context("Could not load dashboard data")?;
            println!("{}", render::dashboard(&ctx, &view));
        }
        Command::Employees { action } => run_employees(action, client, &config, &ctx).await?,
        Command::Attendance { action } => run_attendance(action, client, &config, &ctx).await?,
        Command::Ping => {
            if client.health().await? {
                println!("{}", ctx.success(&format!("Backend reachable at {}", client.base_url())));
            } else {
                bail!("Backend at {} answered with an error status", client.base_url());
            }
        }
        Command::Config { action: ConfigAction::Show } => {
            println!("# {}", config_path.display());
            print!("{}", toml::to_string_pretty(&config)?);
        }
        Command::Theme { .. } | Command::Config { .. } => unreachable!("handled before loading config"),
    }

    Ok(())
}

/// Console filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "info";

fn console_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Console logs go to stderr; `log_dir` adds a daily rolling file.
fn init_logging(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_filter(rust_log.as_deref()));

    let (file, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "staffdesk.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(LevelFilter::INFO);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(console).with(file).init();
    guard
}

fn config_path(cli: &Cli) -> PathBuf {
    match (&cli.config, cli.dev) {
        (Some(path), _) => path.clone(),
        (None, true) => {
            tracing::info!("Dev mode: loading config from current directory");
            PathBuf::from("config.toml")
        }
        (None, false) => AppConfig::default_path(),
    }
}

/// Config as stored on disk, or defaults when the file does not exist yet.
fn load_file_config(path: &Path) -> anyhow::Result<AppConfig> {
    match AppConfig::try_load(path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            Ok(config)
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, using defaults");
            Ok(AppConfig::default())
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid: {}", e);
            bail!("Invalid config file {}: {e}", path.display())
        }
    }
}

/// File config with the environment and `--api-url` overrides applied.
fn load_config(cli: &Cli, path: &Path) -> anyhow::Result<AppConfig> {
    let mut config = load_file_config(path)?;
    config.apply_env();
    if let Some(url) = &cli.api_url {
        config.override_base_url(url);
    }
    config.validate()?;
    Ok(config)
}

fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    AppConfig::default().save(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn switch_theme(path: &Path, choice: ThemeChoice, color: bool) -> anyhow::Result<()> {
    let mut config = load_file_config(path)?;
    let mut ctx = ThemeContext::new(config.ui.theme, color);
    match choice {
        ThemeChoice::Toggle => ctx.toggle(),
        ThemeChoice::Light => ctx = ThemeContext::new(Theme::Light, color),
        ThemeChoice::Dark => ctx = ThemeContext::new(Theme::Dark, color),
    }

    config.ui.theme = ctx.theme();
    config.save(path)?;
    println!("{}", ctx.accent(&format!("Theme set to {}", ctx.theme())));
    Ok(())
}

async fn run_employees(
    action: EmployeeAction,
    client: ApiClient,
    config: &AppConfig,
    ctx: &ThemeContext,
) -> anyhow::Result<()> {
    let mut page = EmployeesPage::new(client.clone());

    match action {
        EmployeeAction::List { search } => {
            page.load().await;
            page.set_search(search);
            println!("{}", render::employee_table(ctx, &page.filtered()));
        }
        EmployeeAction::Show { id } => {
            let emp = client.get_employee(&id).await?;
            println!("{}", render::employee_table(ctx, &[emp]));
        }
        EmployeeAction::Add {
            name,
            email,
            department,
        } => {
            let draft = EmployeeDraft::new(name, email, department);
            let saved = submit(&mut page, &draft, None, ctx).await?;
            println!("{}", ctx.success(&format!("Created employee {}", saved.id)));
        }
        EmployeeAction::Edit {
            id,
            name,
            email,
            department,
        } => {
            let current = client.get_employee(&id).await?;
            let mut draft = EmployeeDraft::edit(&current);
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(email) = email {
                draft.email = email;
            }
            if let Some(department) = department {
                draft.department = department;
            }
            let saved = submit(&mut page, &draft, Some(&id), ctx).await?;
            println!("{}", ctx.success(&format!("Updated employee {}", saved.id)));
        }
        EmployeeAction::Delete { id, yes } => {
            if !yes && !confirm("Are you sure you want to delete this employee?")? {
                println!("Cancelled");
                return Ok(());
            }
            page.delete(&id)
                .await
                .context("Error deleting employee. Please try again.")?;
            println!("{}", ctx.success(&format!("Deleted employee {id}")));
        }
        EmployeeAction::Export { search, out } => {
            page.load().await;
            page.set_search(search);
            let dir = out.unwrap_or_else(|| config.export.directory.clone());
            let path = export::save_csv(&dir, &page.export_filename(today()), &page.export_csv())?;
            println!("{}", ctx.success(&format!("Exported to: {}", path.display())));
        }
        EmployeeAction::Departments => {
            for dept in DEPARTMENTS {
                println!("{dept}");
            }
        }
    }

    Ok(())
}

async fn submit<G: Gateway>(
    page: &mut EmployeesPage<G>,
    draft: &EmployeeDraft,
    editing_id: Option<&str>,
    ctx: &ThemeContext,
) -> anyhow::Result<app::models::Employee> {
    match page.submit(draft, editing_id).await {
        Ok(saved) => Ok(saved),
        Err(AppError::InvalidForm(errors)) => {
            eprintln!("{}", render::field_errors(ctx, &errors));
            bail!("Employee form has {} invalid field(s)", errors.len())
        }
        Err(e) => Err(anyhow::Error::new(e).context("Error saving employee. Please try again.")),
    }
}

async fn run_attendance(
    action: AttendanceAction,
    client: ApiClient,
    config: &AppConfig,
    ctx: &ThemeContext,
) -> anyhow::Result<()> {
    let mut page = AttendancePage::new(client.clone(), today());

    match action {
        AttendanceAction::List { date, all } => {
            page.load().await;
            page.select_date(selected_date(date, all));
            println!("{}", render::attendance_table(ctx, &page.filtered(), page.employees()));
        }
        AttendanceAction::Today => {
            page.load().await;
            println!("{}", render::marking_roster(ctx, &page));
        }
        AttendanceAction::History { employee_id } => {
            let (records, employees) = tokio::join!(client.employee_attendance(&employee_id), client.list_employees());
            let employees = or_empty(employees, "employees");
            println!("{}", render::attendance_table(ctx, &records?, &employees));
        }
        AttendanceAction::Mark { employee_id, status } => {
            page.load().await;
            let outcome = page
                .mark(&employee_id, status)
                .await
                .context("Error marking attendance. Please try again.")?;
            match outcome {
                MarkOutcome::Marked(_) => println!(
                    "{}",
                    ctx.success(&format!("Marked {employee_id} {status} for {}", page.today()))
                ),
                MarkOutcome::Unchanged => println!(
                    "{}",
                    ctx.muted(&format!("{employee_id} is already marked {status} today"))
                ),
            }
            println!("{}", render::marking_roster(ctx, &page));
        }
        AttendanceAction::Export { date, all, out } => {
            page.load().await;
            page.select_date(selected_date(date, all));
            let dir = out.unwrap_or_else(|| config.export.directory.clone());
            let path = export::save_csv(&dir, &page.export_filename(), &page.export_csv())?;
            println!("{}", ctx.success(&format!("Exported to: {}", path.display())));
        }
    }

    Ok(())
}

/// `--all` clears the filter; otherwise the given date or today.
fn selected_date(date: Option<NaiveDate>, all: bool) -> Option<NaiveDate> {
    if all { None } else { Some(date.unwrap_or_else(today)) }
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
