use clap::{Parser, Subcommand};
use colored::Colorize;
use std::error::Error;
use std::path::PathBuf;
use zabbix_host_batch::config::Settings;
use zabbix_host_batch::output::{print_create_report, print_update_report};
use zabbix_host_batch::processing::UpdateField;
use zabbix_host_batch::{create_batch, export_hosts, update_batch};

#[derive(Parser)]
#[command(version, about = "Batch create and update Zabbix hosts from xlsx files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create one host per row of the spreadsheet
    Create { file: PathBuf },
    /// Update selected fields of the hosts listed by hostid
    Update {
        file: PathBuf,
        /// Field labels, e.g. "Latitud,Longitud,modify_groups"
        #[arg(short, long, value_delimiter = ',', required = true)]
        fields: Vec<UpdateField>,
    },
    /// Export every host with its parsed customer id and ONU serial
    ExportHosts,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default())?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    match cli.command {
        Command::Create { file } => {
            let report = create_batch(&settings, &file).await?;
            print_create_report(&report);
        }
        Command::Update { file, fields } => {
            let report = update_batch(&settings, &file, &fields).await?;
            print_update_report(&report);
        }
        Command::ExportHosts => {
            let path = export_hosts(&settings).await?;
            println!("{} {}", "Export:".bold(), path.display());
        }
    }

    Ok(())
}
