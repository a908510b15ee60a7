use clap::Parser;
use icon_gen::domain::ports::ConfigProvider;
use icon_gen::utils::{logger, validation::Validate};
use icon_gen::{CliConfig, GeneratorConfig, IconError, IconGenerator, LocalStorage};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting icon-gen");
    tracing::debug!("CLI config: {:?}", cli);

    // 非預期錯誤只回報，不改變結束碼
    if let Err(e) = run(&cli) {
        tracing::error!("❌ Unexpected failure: {:#}", e);
        println!("Error: {}", e);
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let config = match GeneratorConfig::from_cli(cli).and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let storage = LocalStorage::new(config.output_dir());
    let mut generator = IconGenerator::new_with_monitoring(storage, &config, config.monitor);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        if generator.is_placeholder() {
            println!("Source: placeholder drawing");
        } else {
            println!("Source: {}", generator.source().display());
        }
        for (size, path) in generator.plan() {
            println!("Would create {0}x{0} icon at {1}", size, path.display());
        }
        return Ok(());
    }

    match generator.run() {
        Ok(report) => {
            println!("{}", report.summary_line());
            if !report.all_succeeded() {
                tracing::warn!(
                    "{} of {} icon sizes failed",
                    report.failed().count(),
                    report.outcomes.len()
                );
                if cli.strict {
                    std::process::exit(2);
                }
            }
        }
        Err(e) if e.is_fatal() => exit_with(&e),
        // Unreachable today: IconGenerator::run only surfaces fatal errors.
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn exit_with(e: &IconError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    println!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
