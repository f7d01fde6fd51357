use car_diagnostics::adapters::{sink::render_json, NullSink};
use car_diagnostics::core::{ConfigProvider, OutputFormat};
use car_diagnostics::utils::logger;
use car_diagnostics::{
    CliConfig, ConsoleSink, DiagnosticEngine, DiagnosticReport, DiagnosticsError,
    DiagnosticsSettings, XmlCarLoader,
};
use clap::Parser;

fn main() {
    let cli = CliConfig::parse();

    // 解析並驗證配置
    let settings = match DiagnosticsSettings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            fail(&e);
        }
    };

    if settings.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(settings.verbose());
    }

    tracing::info!("Starting car-diagnostics");
    tracing::debug!("Settings: {:?}", settings);

    let loader = XmlCarLoader::new(settings.input_path());
    if let Err(e) = run(&loader, settings.output_format()) {
        fail(&e);
    }
}

fn run(loader: &XmlCarLoader, format: OutputFormat) -> Result<(), DiagnosticsError> {
    let report: DiagnosticReport = match format {
        OutputFormat::Text => DiagnosticEngine::new(ConsoleSink::stdout()).run_source(loader)?,
        OutputFormat::Json => {
            let report = DiagnosticEngine::new(NullSink).run_source(loader)?;
            println!("{}", render_json(&report)?);
            report
        }
    };

    if report.is_success() {
        tracing::info!("✅ Car passed all diagnostic steps");
    } else {
        tracing::info!(
            "Diagnostics reported {} finding(s) at {:?}",
            report.finding_count(),
            report.stage
        );
    }

    Ok(())
}

fn fail(e: &DiagnosticsError) -> ! {
    tracing::error!(
        "❌ Diagnostics failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
