//! CLI interface for roster.
//!
//! Running `roster` with no subcommand opens the dashboard TUI. The
//! subcommands cover the auth surface non-interactively, for scripts and
//! agents: arguments in, one line out, nonzero exit on failure.

use clap::{Parser, Subcommand};

use crate::api::Api;
use crate::config::Config;
use crate::session::SessionStore;
use crate::validate;

/// Roster — staff your projects from the terminal.
#[derive(Debug, Parser)]
#[command(name = "roster")]
pub struct Cli {
    /// Opens the dashboard TUI when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an account and sign in.
    Register {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign in and store the session.
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Request a password reset email.
    ForgotPassword {
        email: String,
    },

    /// Drop the stored session.
    Logout,

    /// Show who is signed in.
    Whoami,
}

/// Executes a subcommand. Output goes to stdout; errors are returned for
/// `main` to report.
pub fn run(command: Command, config: &Config, store: &SessionStore) -> Result<(), String> {
    match command {
        Command::Register {
            first_name,
            last_name,
            email,
            password,
        } => {
            // No separate confirmation field here; the password stands in
            // for it.
            check(validate::registration(
                &first_name,
                &last_name,
                &email,
                &password,
                &password,
            ))?;
            let mut api = Api::new(config);
            api.register(&first_name, &last_name, &email, &password)
                .map_err(|e| e.to_string())?;
            // Auto-login, as the registration page does.
            let session = api.login(&email, &password).map_err(|e| e.to_string())?;
            store.save(&session).map_err(|e| e.to_string())?;
            println!("Signed in as {} <{}>", session.display_name(), session.email);
            Ok(())
        }

        Command::Login { email, password } => {
            check(validate::login(&email, &password))?;
            let mut api = Api::new(config);
            let session = api.login(&email, &password).map_err(|e| e.to_string())?;
            store.save(&session).map_err(|e| e.to_string())?;
            println!("Signed in as {} <{}>", session.display_name(), session.email);
            Ok(())
        }

        Command::ForgotPassword { email } => {
            check(validate::email_field(&email))?;
            let api = Api::new(config);
            api.forgot_password(&email).map_err(|e| e.to_string())?;
            println!("Password reset instructions sent to {email}");
            Ok(())
        }

        Command::Logout => {
            store.clear().map_err(|e| e.to_string())?;
            println!("Signed out.");
            Ok(())
        }

        Command::Whoami => match store.load().map_err(|e| e.to_string())? {
            Some(session) => {
                println!("{} <{}>", session.display_name(), session.email);
                Ok(())
            }
            None => Err("not signed in".to_string()),
        },
    }
}

/// Collapses field errors into one message per line.
fn check(errors: Vec<validate::FieldError>) -> Result<(), String> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors
            .iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
