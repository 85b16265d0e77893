mod bootstrap;

use std::process::ExitCode;

use clap::error::ErrorKind;

use jobmon_core::settings::Settings;
use jobmon_data::analysis::analyze_log;
use jobmon_ui::app::App;
use jobmon_ui::report;

fn main() -> ExitCode {
    // Parse CLI arguments merged with last-used parameters.
    let settings = match Settings::load_with_last_used() {
        Ok(settings) => settings,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = e.print();
                    ExitCode::SUCCESS
                }
                _ => {
                    let _ = e.print();
                    ExitCode::from(1)
                }
            };
        }
    };

    if let Err(e) = settings.validate() {
        eprintln!("Error: {e}");
        return ExitCode::from(1);
    }

    if let Err(e) = bootstrap::ensure_directories() {
        eprintln!("Error: {e}");
        return ExitCode::from(3);
    }
    if let Err(e) = bootstrap::setup_logging(&settings.log_level) {
        eprintln!("Error: {e}");
        return ExitCode::from(3);
    }

    tracing::info!("jobmon v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "View: {}, thresholds: {} / {} minutes",
        settings.view,
        settings.warning_threshold,
        settings.error_threshold
    );

    if !settings.log_file.exists() {
        eprintln!(
            "Error: Log file '{}' not found.",
            settings.log_file.display()
        );
        return ExitCode::from(1);
    }

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(3)
        }
    }
}

fn run(settings: &Settings) -> anyhow::Result<()> {
    match settings.view.as_str() {
        "dashboard" => {
            tracing::info!("Starting dashboard...");
            let app = App::new(
                &settings.log_file,
                settings.warning_threshold,
                settings.error_threshold,
                &settings.theme,
            )?;
            app.run()?;
        }
        _ => {
            let analysis = analyze_log(
                &settings.log_file,
                settings.warning_threshold,
                settings.error_threshold,
            )?;
            print!(
                "{}",
                report::generate_report(&analysis.jobs, &analysis.stats)
            );
        }
    }
    Ok(())
}
