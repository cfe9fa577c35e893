use crate::render;
use crewboard_core::{Config, ScheduleSession, SolverClient};
use uuid::Uuid;

pub async fn run(
    base_url: &str,
    config: &Config,
    job: Option<Uuid>,
    demo_data_id: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = SolverClient::new(base_url)?;
    let mut session = match job {
        Some(job) => {
            let mut session = ScheduleSession::new(client);
            session.attach_job(job);
            session
        }
        None => {
            let id = super::resolve_demo_id(&client, config, demo_data_id).await?;
            let mut session = ScheduleSession::new(client);
            session.select_demo_data(id);
            session
        }
    };
    session.refresh().await?;

    match session.analyze().await? {
        Some(ranked) => {
            if let Some(schedule) = session.schedule() {
                println!("{}", schedule.score_label());
            }
            print!("{}", render::analysis_table(&ranked));
        }
        None => println!("No score to analyze yet, run the solve command first."),
    }
    Ok(())
}
