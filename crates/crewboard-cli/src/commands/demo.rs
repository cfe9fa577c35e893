use crate::render;
use clap::Subcommand;
use crewboard_core::SolverClient;

#[derive(Subcommand)]
pub enum DemoAction {
    /// List the demo dataset ids the backend ships
    List,
    /// Load a demo dataset and display its timeline
    Show {
        /// Demo dataset id
        id: String,
    },
}

pub async fn run(base_url: &str, action: DemoAction) -> Result<(), Box<dyn std::error::Error>> {
    let client = SolverClient::new(base_url)?;
    match action {
        DemoAction::List => {
            let ids = client.demo_data_ids().await?;
            if ids.is_empty() {
                println!("No demo data available.");
            } else {
                for id in ids {
                    println!("{id}");
                }
            }
        }
        DemoAction::Show { id } => {
            let schedule = client.demo_data(&id).await?;
            print!("{}", render::schedule_report(&schedule));
        }
    }
    Ok(())
}
