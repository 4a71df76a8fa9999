use headon_geometry::Point;
use headon_navigation::{Agent, ScenarioState, SeededScenario};
use macroquad::prelude::*;
use tracing::{info, warn};

/// Window settings for the viewer, sized to the default workspace.
pub fn window_conf() -> Conf {
    Conf {
        window_title: "Head-On RRT with Collision Avoidance".to_string(),
        window_width: 800,
        window_height: 600,
        high_dpi: true,
        ..Default::default()
    }
}

const WAYPOINT_RADIUS: f32 = 3.0;
const HUD_FONT_SIZE: f32 = 20.0;

/// Draws the scenario every frame and feeds it input. `M` starts the agents,
/// a right click adds an obstacle (before starting only), `Escape` quits.
pub async fn run_visualization_loop(mut scenario: SeededScenario) {
    info!("Visualization loop starting...");

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("Escape pressed, closing viewer.");
            break;
        }

        let scale = world_scale(&scenario);

        if is_key_pressed(KeyCode::M) && scenario.state() == ScenarioState::Idle {
            if let Err(e) = scenario.start() {
                warn!("Could not start scenario: {}", e);
            }
        }

        if is_mouse_button_pressed(MouseButton::Right) && scenario.state() == ScenarioState::Idle {
            let (mx, my) = mouse_position();
            let obstacle = Point::new((mx / scale) as f64, (my / scale) as f64);
            if let Err(e) = scenario.add_obstacle(obstacle) {
                warn!("Could not add obstacle: {}", e);
            }
        }

        scenario.tick();

        clear_background(WHITE);

        let box_size = scenario.config().agent_size as f32 * scale;
        for obstacle in scenario.obstacles() {
            draw_box(*obstacle, box_size, scale, DARKGRAY);
        }
        draw_agent(scenario.red(), box_size, scale, RED);
        draw_agent(scenario.blue(), box_size, scale, BLUE);

        let hint = match scenario.state() {
            ScenarioState::Idle => "M: start   right click: add obstacle",
            ScenarioState::Moving => "moving",
            ScenarioState::Stopped => "both agents arrived",
        };
        draw_text(
            &format!("{}  tick {}  {}", scenario.state(), scenario.ticks(), hint),
            10.0,
            20.0,
            HUD_FONT_SIZE,
            BLACK,
        );
        draw_text(
            &format!("red: {}", scenario.red_plan()),
            10.0,
            40.0,
            HUD_FONT_SIZE,
            DARKGRAY,
        );
        draw_text(
            &format!("blue: {}", scenario.blue_plan()),
            10.0,
            60.0,
            HUD_FONT_SIZE,
            DARKGRAY,
        );

        next_frame().await
    }
}

/// Pixels per workspace unit, fitting the whole workspace in the window.
fn world_scale(scenario: &SeededScenario) -> f32 {
    let config = scenario.config();
    let sx = screen_width() / config.width as f32;
    let sy = screen_height() / config.height as f32;
    sx.min(sy)
}

fn draw_agent(agent: &Agent, box_size: f32, scale: f32, color: Color) {
    draw_box(agent.position, box_size, scale, color);
    for waypoint in agent.waypoints() {
        draw_circle(
            waypoint.x as f32 * scale,
            waypoint.y as f32 * scale,
            WAYPOINT_RADIUS,
            GREEN,
        );
    }
}

fn draw_box(center: Point, size: f32, scale: f32, color: Color) {
    draw_rectangle(
        center.x as f32 * scale - size / 2.0,
        center.y as f32 * scale - size / 2.0,
        size,
        size,
        color,
    );
}
