use std::io;

use clap::Parser;
use pricesim::cli::{Args, CsvTarget, apply_overrides, load_config, run_headless};
use pricesim::{App, init_logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir();

    init_logging(&data_dir, &args.log_level)?;

    let (mut config, notice) = load_config(&data_dir);
    apply_overrides(&mut config, &args)?;

    if let Some(raw) = &args.csv {
        if let Some(notice) = &notice {
            eprintln!("Warning: {notice}");
        }
        let target = CsvTarget::parse(raw);
        let rows = run_headless(&config, &target, io::stdout().lock())?;
        if let CsvTarget::File(path) = &target {
            eprintln!("Wrote {} rows to {}", rows, path.display());
        }
        return Ok(());
    }

    let mut app = App::new(config);
    if let Some(notice) = notice {
        app.notify(notice);
    }

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
