use civic_reports::cli::commands;
use civic_reports::cli::{Cli, Commands};
use civic_reports::config;
use civic_reports::logging::init_logging;
use civic_reports::store::IssueStore;
use civic_reports::{CivicError, StructuredError};
use clap::Parser;
use std::io::{self, IsTerminal};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let overrides = build_cli_overrides(&cli);
    let json = cli.json;

    let result = match &cli.command {
        Commands::Home => commands::home::execute(json, &overrides),
        Commands::Report(args) => commands::report::execute(args, json, &overrides),
        Commands::Explore(args) => commands::explore::execute(args, json, &overrides),
        Commands::Show { id } => commands::show::execute(id, json, &overrides),
        Commands::Comment { id, text } => commands::comment::execute(id, text, json, &overrides),
        Commands::Vote(args) => commands::vote::execute(args, json, &overrides),
        Commands::Share { id } => commands::share::execute(id, json, &overrides),
        Commands::Mine(args) => commands::mine::execute(args, json, &overrides),
        Commands::Admin(args) => commands::admin::execute(args, json, &overrides),
        Commands::Login => commands::login::execute(json, &overrides),
        Commands::About => commands::about::execute(json, &overrides),
        Commands::Open { path } => commands::open::execute(path, json, &overrides),
        Commands::Schema => commands::schema::execute(),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Version => commands::version::execute(json),
    };

    if let Err(e) = result {
        handle_error(&e, json);
    }
}

/// Handle errors with structured output support.
///
/// When --json is set or stdout is not a TTY, outputs structured JSON to stderr.
/// Otherwise, outputs human-readable error with optional color.
fn handle_error(err: &CivicError, json_mode: bool) -> ! {
    let structured = match err {
        CivicError::IssueNotFound { id } => {
            StructuredError::issue_not_found(id, &IssueStore::sample().ids())
        }
        other => StructuredError::from_error(other),
    };
    let exit_code = structured.code.exit_code();

    let use_json = json_mode || !io::stdout().is_terminal();

    if use_json {
        let json = structured.to_json();
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
        );
    } else {
        let use_color = io::stderr().is_terminal();
        eprintln!("{}", structured.to_human(use_color));
    }

    std::process::exit(exit_code);
}

fn build_cli_overrides(cli: &Cli) -> config::CliOverrides {
    config::CliOverrides {
        actor: cli.actor.clone(),
        no_color: Some(cli.no_color),
        no_wait: Some(cli.no_wait),
        quiet: Some(cli.quiet),
    }
}
