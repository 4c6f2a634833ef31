//! Terminal front end for the login form.
//!
//! Prompts for a username and password, feeds them into a
//! [`FormController`] and renders the resulting view until the demo user
//! logs in or the attempts run out.
//!
//! # Usage
//!
//! ```bash
//! # Interactive login against the configured demo user
//! LOGIN_DEMO_PASSWORD=password123 cargo run
//!
//! # Pre-fill the username and emit every rendered view as JSON
//! cargo run -- --username demo --json
//! ```
//!
//! # Environment Variables
//!
//! See [`login_form::config`].

use login_form::application::{FormController, SubmitOutcome};
use login_form::config::{self, Config};
use login_form::domain::entities::{Field, SubmissionStatus};
use login_form::infrastructure::StaticAuthenticator;
use login_form::view::FormView;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::{Input, Password};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

/// Log in to the demo account from the terminal.
#[derive(Parser)]
#[command(name = "login-form")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Username to pre-fill on the first attempt
    #[arg(short, long)]
    username: Option<String>,

    /// Override `LOGIN_MAX_ATTEMPTS`
    #[arg(short, long)]
    max_attempts: Option<u32>,

    /// Print every rendered view as a JSON line instead of styled text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env().context("Failed to load configuration")?;
    config
        .apply_overrides(cli.max_attempts)
        .context("Invalid command line arguments")?;
    init_tracing(&config)?;
    config.print_summary();

    let authenticator = Arc::new(StaticAuthenticator::from_config(&config));
    let mut controller = FormController::new(authenticator);

    run_form(&mut controller, cli.username, config.max_attempts, cli.json).await
}

/// Sets up the global tracing subscriber. Logs go to stderr so they do not
/// mix with the prompts.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG value '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

/// Prompts, submits and renders until success or `max_attempts` submissions.
///
/// All output is written from this task. In JSON mode views are printed in
/// the order they were published and the settled view of every submission
/// is printed before its outcome.
async fn run_form(
    controller: &mut FormController<StaticAuthenticator>,
    mut prefill: Option<String>,
    max_attempts: u32,
    json: bool,
) -> Result<()> {
    let mut views = controller.subscribe();
    if json {
        print_json(&*views.borrow_and_update())?;
    } else {
        println!("{}", views.borrow_and_update().heading.bright_blue().bold());
        println!();
    }

    for attempt in 1..=max_attempts {
        let username = match prefill.take() {
            Some(username) => username,
            None => Input::<String>::new()
                .with_prompt("Username")
                .with_initial_text(controller.state().form().username.clone())
                .allow_empty(true)
                .interact_text()?,
        };
        controller.update_field(Field::Username, username)?;
        if json {
            print_json(&*views.borrow_and_update())?;
        }

        let password = Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?;
        controller.update_field(Field::Password, password)?;
        if json {
            print_json(&*views.borrow_and_update())?;
        }

        let outcome = submit_and_render(controller, &mut views, json).await?;
        if json {
            print_json(&*views.borrow_and_update())?;
            print_json(&outcome)?;
        } else {
            render_view(&views.borrow_and_update());
        }

        match outcome {
            SubmitOutcome::Authenticated => {
                if !json {
                    println!("{}", "Logged in.".green().bold());
                }
                return Ok(());
            }
            SubmitOutcome::Invalid | SubmitOutcome::Rejected(_) | SubmitOutcome::Ignored => {
                tracing::debug!(attempt, max_attempts, "Login attempt failed");
            }
        }
    }

    anyhow::bail!("Giving up after {max_attempts} failed login attempts")
}

/// Runs one submission and renders the busy view while it is pending.
///
/// The view published after the submission settles is left for the caller.
async fn submit_and_render(
    controller: &mut FormController<StaticAuthenticator>,
    views: &mut watch::Receiver<FormView>,
    json: bool,
) -> Result<SubmitOutcome> {
    let submit = controller.submit();
    tokio::pin!(submit);

    loop {
        tokio::select! {
            biased;
            outcome = &mut submit => return Ok(outcome),
            changed = views.changed() => {
                if changed.is_err() {
                    return Ok((&mut submit).await);
                }
                let view = views.borrow_and_update().clone();
                if view.status != SubmissionStatus::Submitting {
                    continue;
                }
                if json {
                    print_json(&view)?;
                } else {
                    println!("{}", view.submit.label.bright_black());
                }
            }
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let line = serde_json::to_string(value).context("Failed to serialize output")?;
    println!("{line}");
    Ok(())
}

/// Prints the server banner and inline field errors of a view.
fn render_view(view: &FormView) {
    if let Some(message) = &view.server_error {
        println!("{}", message.red().bold());
    }
    for field in &view.fields {
        if let Some(error) = &field.error {
            println!("  {}: {}", field.label.bright_white(), error.red());
        }
    }
    if view.has_errors() {
        println!();
    }
}
