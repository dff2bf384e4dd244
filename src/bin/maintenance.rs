//! argochainhub 运维工具
//!
//! 连接参数只来自配置（`DATABASE_URL` / 配置文件）。失败时退出码为 1。

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{error, info, warn};

use argochainhub::config::AppConfig;
use argochainhub::maintenance::{self, MaintenanceTask};
use argochainhub::models::companies::entities::CompanyStatus;

#[derive(Parser)]
#[command(name = "argochainhub-maint")]
#[command(about = "argochainhub maintenance tasks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set a company's status to active
    ActivateCompany {
        #[arg(long)]
        id: i64,
    },

    /// Set a company's status (pending, active, inactive, rejected)
    SetCompanyStatus {
        #[arg(long)]
        id: i64,
        #[arg(long, value_parser = parse_status)]
        status: CompanyStatus,
    },

    /// Reset a user's password; a random one is generated when omitted
    ResetPassword {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: Option<String>,
    },

    /// Mark a user's email as verified
    VerifyEmail {
        #[arg(long)]
        email: String,
    },
}

fn parse_status(s: &str) -> Result<CompanyStatus, String> {
    s.parse()
}

impl From<Commands> for MaintenanceTask {
    fn from(command: Commands) -> Self {
        match command {
            Commands::ActivateCompany { id } => MaintenanceTask::ActivateCompany { id },
            Commands::SetCompanyStatus { id, status } => {
                MaintenanceTask::SetCompanyStatus { id, status }
            }
            Commands::ResetPassword { email, password } => {
                MaintenanceTask::ResetPassword { email, password }
            }
            Commands::VerifyEmail { email } => MaintenanceTask::VerifyEmail { email },
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    setup_panic!();
    let cli = Cli::parse();

    if let Err(e) = AppConfig::init() {
        eprintln!("Failed to initialize configuration: {e}");
        std::process::exit(1);
    }
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            &AppConfig::get().app.log_level,
        ))
        .init();

    match maintenance::run(cli.command.into()).await {
        Ok(outcome) => {
            info!("{}", outcome.summary);
            if let Some(password) = outcome.generated_password {
                warn!("Generated password (shown once): {}", password);
            }
        }
        Err(e) => {
            error!("Maintenance task failed: {}", e);
            std::process::exit(1);
        }
    }
}
