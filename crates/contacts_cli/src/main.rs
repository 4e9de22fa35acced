//! Command-line front end for the contacts store.
//!
//! # Responsibility
//! - List and add contacts in a SQLite database file.
//! - Keep output stable enough for scripting (`list --json`).

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use contacts_core::db::open_db;
use contacts_core::{
    core_version, default_log_level, init_logging, Contact, ContactRepository, ContactStore,
};
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Parser)]
#[command(name = "contacts", version, about = "Manage a contacts list")]
struct Cli {
    /// SQLite database file.
    #[arg(long, env = "CONTACTS_DB", default_value = "contacts.sqlite3", global = true)]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "CONTACTS_LOG_DIR", global = true)]
    log_dir: Option<String>,

    /// Log level used with `--log-dir`.
    #[arg(long, global = true, value_parser = LOG_LEVELS)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every contact ordered by last name.
    List {
        /// Emit a JSON array instead of text rows.
        #[arg(long)]
        json: bool,
    },
    /// Save a new contact.
    Add(AddArgs),
}

#[derive(Debug, Args)]
struct AddArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    email: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let stdout = io::stdout();
    match run(cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
        info!(
            "event=cli_start module=cli status=ok version={}",
            core_version()
        );
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open contacts database `{}`", cli.db.display()))?;
    let store = ContactStore::new(&conn);

    match cli.command {
        Command::List { json } => {
            let contacts = store.list_all()?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &contacts)?;
                writeln!(out)?;
            } else {
                write!(out, "{}", render_table(&contacts))?;
            }
        }
        Command::Add(args) => {
            let contact = Contact::new(args.first_name, args.last_name, args.phone, args.email);
            store.save(&contact)?;
            writeln!(out, "saved {}", contact.full_name())?;
        }
    }

    Ok(())
}

fn render_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "no contacts\n".to_string();
    }

    let name_width = contacts
        .iter()
        .map(|c| c.full_name().chars().count())
        .max()
        .unwrap_or(0);
    let phone_width = contacts
        .iter()
        .map(|c| c.phone_number.chars().count())
        .max()
        .unwrap_or(0);

    contacts
        .iter()
        .map(|c| {
            format!(
                "{:>4}  {:<name_width$}  {:<phone_width$}  {}\n",
                c.id.map(|id| id.to_string()).unwrap_or_default(),
                c.full_name(),
                c.phone_number,
                c.email_address,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{render_table, run, Cli, Command};
    use clap::Parser;
    use contacts_core::Contact;
    use std::path::Path;

    fn run_args(db: &Path, args: &[&str]) -> anyhow::Result<String> {
        let db = db.to_str().expect("db path should be valid UTF-8");
        let mut argv = vec!["contacts", "--db", db];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).expect("arguments should parse");

        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out).expect("output should be UTF-8"))
    }

    fn add(db: &Path, first: &str, last: &str) {
        let email = format!("{}@example.com", first.to_ascii_lowercase());
        let output = run_args(
            db,
            &[
                "add",
                "--first-name",
                first,
                "--last-name",
                last,
                "--phone",
                "555-0100",
                "--email",
                email.as_str(),
            ],
        )
        .expect("add should succeed");
        assert_eq!(output, format!("saved {first} {last}\n"));
    }

    #[test]
    fn add_then_list_json_returns_contacts_ordered_by_last_name() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let db = dir.path().join("contacts.sqlite3");

        add(&db, "Alan", "Turing");
        add(&db, "Ada", "Lovelace");

        let output = run_args(&db, &["list", "--json"]).expect("list should succeed");
        let value: serde_json::Value =
            serde_json::from_str(&output).expect("list --json should print JSON");
        let rows = value.as_array().expect("output should be a JSON array");
        let last_names: Vec<&str> = rows
            .iter()
            .map(|row| row["lastName"].as_str().expect("lastName should be a string"))
            .collect();
        assert_eq!(last_names, vec!["Lovelace", "Turing"]);
        assert!(rows.iter().all(|row| row["id"].as_i64().unwrap_or(0) > 0));
        assert_eq!(rows[0]["emailAddress"], "ada@example.com");
    }

    #[test]
    fn list_prints_text_rows() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let db = dir.path().join("contacts.sqlite3");

        let empty = run_args(&db, &["list"]).expect("list should succeed");
        assert_eq!(empty, "no contacts\n");

        add(&db, "Grace", "Hopper");
        let output = run_args(&db, &["list"]).expect("list should succeed");
        assert_eq!(output, "   1  Grace Hopper  555-0100  grace@example.com\n");
    }

    #[test]
    fn run_fails_when_database_cannot_be_opened() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let db = dir.path().join("missing").join("contacts.sqlite3");

        let err = run_args(&db, &["list"]).expect_err("opening a db in a missing dir should fail");
        let message = format!("{err:#}");
        assert!(message.starts_with("failed to open contacts database"));
        assert_eq!(message.matches("unable to open database file").count(), 1);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let result = Cli::try_parse_from(["contacts", "--log-level", "bogus", "list"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["contacts", "--log-level", "warn", "list"])
            .expect("known level should parse");
        assert_eq!(cli.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn render_table_aligns_columns() {
        let mut ada = Contact::new("Ada", "Lovelace", "555-0100", "ada@example.com");
        ada.id = Some(1);
        let mut bo = Contact::new("Bo", "Li", "12", "bo@example.com");
        bo.id = Some(12);

        let table = render_table(&[ada, bo]);
        assert_eq!(
            table,
            "   1  Ada Lovelace  555-0100  ada@example.com\n  12  Bo Li         12        bo@example.com\n"
        );
    }

    #[test]
    fn render_table_reports_empty_list() {
        assert_eq!(render_table(&[]), "no contacts\n");
    }

    #[test]
    fn add_command_parses_all_fields() {
        let cli = Cli::try_parse_from([
            "contacts",
            "--db",
            "/tmp/c.sqlite3",
            "add",
            "--first-name",
            "Ada",
            "--last-name",
            "Lovelace",
            "--phone",
            "555-0100",
            "--email",
            "ada@example.com",
        ])
        .unwrap();

        assert_eq!(cli.db.to_str(), Some("/tmp/c.sqlite3"));
        match cli.command {
            Command::Add(args) => {
                assert_eq!(args.first_name, "Ada");
                assert_eq!(args.last_name, "Lovelace");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn add_command_requires_every_field() {
        let result = Cli::try_parse_from(["contacts", "add", "--first-name", "Ada"]);
        assert!(result.is_err());
    }
}
