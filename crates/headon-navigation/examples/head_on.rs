use headon_navigation::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    // Longer steps and a bigger budget than the defaults so the tree can
    // actually reach the goal in the demo.
    let motion = MotionConfig {
        step_size: 20.0,
        max_iterations: 2000,
        ..MotionConfig::default()
    };
    let scenario_config = ScenarioConfig {
        red: AgentSpec {
            start: Point::new(100.0, 300.0),
            goal: Point::new(700.0, 300.0),
        },
        blue: AgentSpec {
            start: Point::new(700.0, 150.0),
            goal: Point::new(100.0, 450.0),
        },
        seed: Some(2024),
        obstacles: vec![Point::new(400.0, 300.0)],
    };

    let mut scenario = Scenario::seeded(motion, &scenario_config)?;

    println!("Planned paths:");
    println!("  red:  {}", scenario.red_plan());
    println!("  blue: {}", scenario.blue_plan());

    scenario.start()?;
    let max_ticks = 20_000;
    let final_state = scenario.run(max_ticks);

    println!("\nFinished after {} ticks in state {}", scenario.ticks(), final_state);
    for agent in scenario.agents() {
        println!("  {} (goal {})", agent, agent.goal());
    }

    if final_state != ScenarioState::Stopped {
        anyhow::bail!("scenario did not finish within {} ticks", max_ticks);
    }
    Ok(())
}
