use macroquad::prelude::*;
use rrt_tree::{GrowthTicker, GrowthVisitor, RrtConfig, RrtEngine};
use rrt_viz::{FollowCamera, TreeScene};

#[macroquad::main("Rapidly-Exploring Random Tree")]
async fn main() {
    let mut engine = match RrtEngine::new(RrtConfig::default(), ::rand::rng()) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("Invalid configuration: {err}");
            return;
        }
    };
    let config = *engine.config();
    println!(
        "Growing RRT: sampling radius {}, step threshold {}",
        config.radius, config.threshold
    );

    let mut scene = TreeScene::new(engine.tree());
    let mut ticker = GrowthTicker::default();
    let mut camera = FollowCamera::default();

    loop {
        camera.update();

        if ticker.tick() {
            let edge = engine.step();
            scene.visit(&edge);
        }

        clear_background(Color::from_rgba(235, 235, 240, 255));
        set_camera(&camera.to_camera3d());

        scene.draw();

        set_default_camera();

        draw_text(
            &format!("RRT - {} nodes", scene.node_count()),
            10.0,
            25.0,
            20.0,
            BLACK,
        );
        draw_text(
            &format!(
                "R = {} | T = {} | one step every {} frames",
                config.radius,
                config.threshold,
                ticker.period()
            ),
            10.0,
            45.0,
            18.0,
            DARKGRAY,
        );
        draw_text("Move the mouse to pan the camera", 10.0, 65.0, 16.0, DARKGRAY);
        draw_text(&format!("FPS: {}", get_fps()), 10.0, 85.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
