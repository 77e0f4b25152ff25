use clap::Parser;
use festival_forms::config::cli::{Command, ReportFormat};
use festival_forms::core::location::CityDropdown;
use festival_forms::core::national_id::NationalIdValidator;
use festival_forms::core::phone::check_phone_number;
use festival_forms::core::statistics::render_statistics;
use festival_forms::utils::error::{ErrorSeverity, FormsError};
use festival_forms::utils::{logger, validation::Validate};
use festival_forms::{
    AdminApi, BatchValidator, CliConfig, FormValidator, FormsConfig, HttpAdminApi,
    RegistrationForm,
};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    let log_format = if args.json_logs {
        logger::LogFormat::Json
    } else {
        logger::LogFormat::Compact
    };
    logger::init_logger(log_format, args.verbose);

    tracing::debug!("CLI args: {:?}", args);

    // 載入並驗證配置
    let config = match args.load_forms_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    match run(args.command, &config).await {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => fail(e),
    }
}

/// Runs one subcommand. `Ok(false)` means the input was checked and rejected.
async fn run(command: Command, config: &FormsConfig) -> festival_forms::Result<bool> {
    let policy = config.digit_policy();

    match command {
        Command::NationalId { value, .. } => {
            let validator = NationalIdValidator::new(policy);
            match validator.rejection(&value) {
                None => {
                    println!("✅ {} is a valid national ID", value);
                    Ok(true)
                }
                Some(reason) => {
                    tracing::info!(?reason, "national id rejected");
                    println!("❌ {} is not a valid national ID ({:?})", value, reason);
                    Ok(false)
                }
            }
        }
        Command::Phone { value, .. } => {
            let check = check_phone_number(&value, policy);
            if check.valid {
                println!("✅ {}", check.display);
                Ok(true)
            } else {
                println!("❌ {} is not a valid mobile number", value);
                Ok(false)
            }
        }
        Command::Form { national_id, phone } => {
            let form = RegistrationForm {
                national_id,
                phone_number: phone,
            };
            let report = FormValidator::new(policy).validate(&form);
            for error in &report.errors {
                println!("❌ {}: {}", error.field, error.message);
            }
            match report.summary() {
                Some(summary) => {
                    println!("⚠️ {}", summary);
                    Ok(false)
                }
                None => {
                    println!("✅ Form is valid");
                    Ok(true)
                }
            }
        }
        Command::Batch {
            input,
            output,
            format,
        } => {
            festival_forms::utils::validation::validate_export_path("batch.input", &input)?;
            tracing::info!("📁 Validating registrations from: {}", input.display());

            let reader = BufReader::new(File::open(&input)?);
            let report = BatchValidator::new(policy).validate_reader(reader)?;

            match output {
                Some(path) => {
                    let writer = BufWriter::new(File::create(&path)?);
                    write_report(&report, format, writer)?;
                    tracing::info!("📁 Report saved to: {}", path.display());
                }
                None => write_report(&report, format, io::stdout().lock())?,
            }

            Ok(report.invalid == 0)
        }
        Command::Cities { province_id } => {
            let api = HttpAdminApi::from_config(&config.admin)?;
            let mut dropdown = CityDropdown::new();
            dropdown.on_province_change(&api, Some(province_id)).await?;
            for option in dropdown.cities() {
                println!("{}\t{}", option.value, option.label);
            }
            Ok(true)
        }
        Command::Stats => {
            let api = HttpAdminApi::from_config(&config.admin)?;
            let stats = api.load_statistics().await?;
            print!("{}", render_statistics(&stats));
            Ok(true)
        }
    }
}

fn write_report<W: io::Write>(
    report: &festival_forms::BatchReport,
    format: ReportFormat,
    writer: W,
) -> festival_forms::Result<()> {
    match format {
        ReportFormat::Csv => report.write_csv(writer),
        ReportFormat::Json => report.write_json(writer),
    }
}

fn fail(e: FormsError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
