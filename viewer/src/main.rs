mod args;
mod render;

use std::process::ExitCode;

use clap::Parser;
use log::info;

use args::Cli;
use jobview::{
    load_config, BroadcastSink, JobViewController, ViewEvent, ViewSink, ViewerConfig,
};
use render::TerminalSink;

/// Loads the file and replays the requested selections as host events.
async fn run<S: ViewSink>(controller: &mut JobViewController<S>, cli: &Cli) -> jobview::Result<()> {
    let count = controller.load_file(&cli.file).await?;
    info!("Loaded {} jobs from {:?}", count, cli.file);

    let mut events = Vec::new();
    if cli.has_filter() {
        events.push(ViewEvent::FilterChanged {
            level: cli.level.clone(),
            job_type: cli.job_type.clone(),
            skill: cli.skill.clone(),
        });
    }
    if cli.has_sort() {
        events.push(ViewEvent::SortChanged {
            title: cli.sort_title.clone(),
            time: cli.sort_time.clone(),
        });
    }
    if let Some(index) = cli.details {
        events.push(ViewEvent::CardSelected(index));
    }

    for event in events {
        controller.handle(event)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config from {:?}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => ViewerConfig::default(),
    };

    if let Err(e) = jobview::logging::init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!("Starting jobview-viewer v{}", env!("CARGO_PKG_VERSION"));

    let result = if cli.json {
        let sink = BroadcastSink::default();
        let mut receiver = sink.subscribe();
        let mut controller = JobViewController::with_sink(config, sink);
        let result = run(&mut controller, &cli).await;

        while let Ok(update) = receiver.try_recv() {
            match serde_json::to_string(&update) {
                Ok(line) => println!("{}", line),
                Err(e) => log::error!("Failed to serialize view update: {}", e),
            }
        }
        result
    } else {
        let mut controller = JobViewController::with_sink(config, TerminalSink::stdout());
        run(&mut controller, &cli).await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
