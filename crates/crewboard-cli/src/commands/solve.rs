use crate::render;
use crewboard_core::{Config, ScheduleSession, SolverClient};

pub async fn run(
    base_url: &str,
    config: &Config,
    demo_data_id: Option<String>,
    watch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = SolverClient::new(base_url)?;
    let id = super::resolve_demo_id(&client, config, demo_data_id).await?;

    let mut session = ScheduleSession::new(client).with_poll_interval(config.poll_interval());
    session.select_demo_data(id);
    session.refresh().await?;

    let job = session.solve().await?;
    println!("Solving started, job {job}");

    if watch {
        session
            .watch(|schedule| println!("{}", schedule.score_label()))
            .await?;
        println!("Solving finished.");
        if let Some(schedule) = session.schedule() {
            print!("{}", render::schedule_report(schedule));
        }
    }
    Ok(())
}
