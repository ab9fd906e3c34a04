use pwlcurve::{
    AppConfig, Cli, Commands, ExportFormat,
    commands::{self, CliError},
    write_to,
};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

pub fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout may be carrying the command's output.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::import().unwrap_or_else(|err| err.exit());
    let AppConfig { mut export } = AppConfig::load(&cli)?;
    tracing::debug!(?export, "loaded configuration");

    match cli.command {
        Commands::Segments { io } => {
            commands::segments(io.read()?, io.write()?)?;
        }
        Commands::Eval { io, at } => {
            commands::evaluate(io.read()?, &at, io.write()?)?;
        }
        Commands::Export { io, format, bound } => {
            let format = format
                .or_else(|| io.extension().and_then(ExportFormat::from_extension))
                .ok_or(CliError::ExportFormat)?;
            if let Some(bound) = bound {
                export.bound = bound.into();
            }
            commands::export(io.read()?, format, &export, io.write()?)?;
        }
        Commands::Schema { kind, output } => {
            commands::schema(kind, write_to(output.as_ref())?)?;
        }
    }

    Ok(())
}
