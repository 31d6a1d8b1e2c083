use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vent::application::{
    init::init, ComposeService, ConfigService, DraftService, ExportService, HistoryService,
    ReleaseService, StatusService,
};
use vent::cli::{format_history, format_status, Cli, Commands};
use vent::error::VentError;
use vent::infrastructure::FileStore;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), VentError> {
    match cli.command {
        Commands::Init { path } => init(&path),
        Commands::Release { text } => {
            let storage = FileStore::discover()?;
            let service = ReleaseService::new(storage);

            let outcome = service.execute(text.as_deref(), Utc::now())?;

            println!("{}", vent::cli::output::release_caption(outcome.count));
            println!("{}", vent::cli::output::progress_caption(outcome.count));
            if !outcome.durable {
                eprintln!(
                    "Warning: the entry was recorded for this session but could \
                    not be written to durable storage."
                );
            }
            Ok(())
        }
        // Showing the draft is the default action, so --show needs no branch.
        Commands::Draft { text, show: _, clear } => {
            let storage = FileStore::discover()?;
            let service = DraftService::new(storage);

            if clear {
                service.clear()?;
                println!("Draft discarded");
            } else if let Some(t) = text {
                service.set(&t, Utc::now())?;
                println!("Draft saved");
            } else {
                let status = service.show()?;
                if status.text.is_empty() {
                    println!("Draft: empty");
                } else {
                    println!("{}", status.text);
                }
            }
            Ok(())
        }
        Commands::Compose => {
            let storage = FileStore::discover()?;
            let service = ComposeService::new(storage);

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            service.execute(stdin.lock(), &mut stdout, Utc::now)?;
            Ok(())
        }
        Commands::Status => {
            let storage = FileStore::discover()?;
            let status = StatusService::new(storage).execute()?;
            print!("{}", format_status(&status));
            Ok(())
        }
        Commands::History { limit } => {
            let storage = FileStore::discover()?;
            let entries = HistoryService::new(storage).execute(limit)?;
            print!("{}", format_history(&entries));
            if entries.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Export { output } => {
            let storage = FileStore::discover()?;
            let path = ExportService::new(storage).execute(output.as_deref(), Utc::now())?;
            println!("Exported to {}", path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let storage = FileStore::discover()?;
            let service = ConfigService::new(storage);

            if list {
                let config = service.list()?;
                println!("autosave_secs = {}", config.autosave_secs);
                println!("seed_file = {}", config.seed_file);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: vent config [--list | <key> [<value>]]");
                println!("Valid keys: autosave_secs, seed_file, created");
                Ok(())
            }
        }
    }
}
