use crate::render;
use crewboard_core::SolverClient;
use uuid::Uuid;

pub async fn run(base_url: &str, job: Uuid) -> Result<(), Box<dyn std::error::Error>> {
    let client = SolverClient::new(base_url)?;
    let schedule = client.schedule(job).await?;
    print!("{}", render::schedule_report(&schedule));
    Ok(())
}
