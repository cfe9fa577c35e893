use crewboard_core::{ScheduleSession, SolverClient};
use uuid::Uuid;

pub async fn run(base_url: &str, job: Uuid) -> Result<(), Box<dyn std::error::Error>> {
    let client = SolverClient::new(base_url)?;
    let mut session = ScheduleSession::new(client);
    session.attach_job(job);
    session.stop_solving().await?;
    println!("Solving stopped, job {job}");
    if let Some(schedule) = session.schedule() {
        println!("{}", schedule.score_label());
    }
    Ok(())
}
