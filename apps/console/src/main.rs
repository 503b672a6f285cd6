use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use session_core::{MockCredentialBackend, SessionController, SubmitOutcome};
use shared::dashboard::{fixed_stats, quick_actions, recent_activity, Trend};

mod config;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    /// Settings file (defaults to ./console.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the post-login snapshot and dashboard data as JSON.
    #[arg(long)]
    json: bool,
    /// Log out again after a successful login.
    #[arg(long)]
    and_logout: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();
    let settings = config::load_settings(args.config.as_deref());

    let backend = MockCredentialBackend::new(
        &settings.demo_email,
        &settings.demo_password,
        &settings.display_name,
        Duration::from_millis(settings.mock_delay_ms),
    );
    let controller = SessionController::with_backend(Arc::new(backend));

    println!("Signing in...");
    match controller.submit(&args.email, &args.password).await {
        SubmitOutcome::LoggedIn(profile) => {
            if args.json {
                let snapshot = controller.snapshot().await;
                let payload = serde_json::json!({
                    "snapshot": snapshot,
                    "stats": fixed_stats(),
                    "recent_activity": recent_activity(),
                    "quick_actions": quick_actions(),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                render_dashboard(&profile.name, &profile.email);
            }

            if args.and_logout {
                controller.logout().await;
                println!("Logged out.");
            }
        }
        SubmitOutcome::Invalid(report) => {
            if let Some(err) = &report.email {
                println!("email: {err}");
            }
            if let Some(err) = &report.password {
                println!("password: {err}");
            }
        }
        SubmitOutcome::Denied => {
            let snapshot = controller.snapshot().await;
            if let Some(err) = &snapshot.validation.password {
                println!("password: {err}");
            }
        }
        SubmitOutcome::AlreadyPending => {
            // Single sequential submit above; unreachable in this app.
            println!("A sign-in attempt is already in progress.");
        }
    }

    Ok(())
}

fn render_dashboard(name: &str, email: &str) {
    let first_name = name.split_whitespace().next().unwrap_or(name);
    println!("Welcome back, {first_name}! ({email})");
    println!();

    for stat in fixed_stats() {
        let arrow = match stat.trend {
            Trend::Up => "\u{2197}",
            Trend::Down => "\u{2198}",
        };
        println!("{:<16} {:>8}  {arrow} {}", stat.label, stat.value, stat.change);
    }

    println!();
    println!("Recent Activity");
    for entry in recent_activity() {
        println!("  {} {} ({})", entry.icon, entry.action, entry.time_ago);
    }

    println!();
    println!("Quick Actions");
    for action in quick_actions() {
        println!("  {} {}", action.icon, action.label);
    }
}
