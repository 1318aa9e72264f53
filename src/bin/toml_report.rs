use clap::Parser;
use numerology_report::core::render::render_summary;
use numerology_report::domain::ports::ConfigProvider;
use numerology_report::utils::{logger, validation::Validate};
use numerology_report::{LocalStorage, ReportEngine, ReportPipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Numerology reports for every subject in a TOML file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "numerology.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - show what would be generated without writing files
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置（日誌初始化前，錯誤直接輸出）
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    let verbose = args.verbose || config.verbose();
    if config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("🚀 Starting TOML-based numerology report");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        perform_dry_run(&config);
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = ReportPipeline::new(storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(outcome) => {
            for report in &outcome.reports {
                println!("{}", render_summary(report));
            }
            for failure in &outcome.summary.failures {
                eprintln!("❌ {}", failure.message);
            }
            println!("✅ Generated {} report(s)", outcome.reports.len());
            for path in &outcome.summary.written {
                println!("📁 Saved: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    let settings = config.settings();
    println!("📋 Configuration Summary:");
    println!("  System: {}", settings.system);
    println!("  Keep master numbers: {}", settings.keep_master);
    println!("  Digits-as-numbers: {}", settings.digits_as_numbers);
    println!("  Y as vowel: {}", settings.y_as_vowel);
    println!("  Output: {}", config.output_path());
    println!(
        "  Formats: {}",
        config
            .output_formats()
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Subjects: {}", config.subjects.len());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    let multiple = config.subjects.len() > 1;
    for (i, subject) in config.subjects.iter().enumerate() {
        println!(
            "👤 Subject {}: name={}, birth_date={}",
            i + 1,
            subject.input_name().unwrap_or("-"),
            subject
                .birth_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
        if multiple {
            println!("  (written to a numbered subdirectory)");
        }
    }

    println!();
    println!("💾 Output Configuration:");
    println!("  Path: {}", config.output_path());
    for format in config.output_formats() {
        println!("  {} -> {}", format, config.file_name(*format));
    }
    if let Some(bundle) = config.bundle_name() {
        println!("  Bundle: {} (ZIP)", bundle);
    }

    println!();
    println!("✅ Dry run analysis complete.");
}
