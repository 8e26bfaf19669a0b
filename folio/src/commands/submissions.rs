use clap::Subcommand;
use folio_config::Config;
use folio_core_contact_contracts::record::ContactRecordRepository;
use folio_models::contact::FormRecord;
use tracing::info;

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum SubmissionsCommand {
    /// List all stored submissions
    #[command(aliases(["ls", "l"]))]
    List {
        /// Print the submissions as json
        #[arg(long)]
        json: bool,
    },
    /// Remove all stored submissions
    Clear,
}

impl SubmissionsCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let records = environment::records(environment::store(&config).await?, &config);

        match self {
            SubmissionsCommand::List { json } => {
                let submissions = records.list().await?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&submissions)?);
                } else {
                    for submission in &submissions {
                        println!("{}", summary(submission));
                    }
                }
            }
            SubmissionsCommand::Clear => {
                records.clear().await?;
                info!("Removed all stored submissions");
            }
        }

        Ok(())
    }
}

fn summary(record: &FormRecord) -> String {
    format!(
        "{}  {} <{}>  {}",
        record.submitted_at.to_rfc3339(),
        record.name,
        record.email,
        record.subject
    )
}
