use macroquad::prelude::*;
use sweep_viz::{random_triangles, MacroquadSink, View};
use tracing::info;
use tracing_subscriber::fmt::SubscriberBuilder;
use tri_sweep::{PlaneSweep, SweepStatus};

const NUM_TRIANGLES: usize = 12;
const STEPS_PER_SECOND: f32 = 8.0;

fn build_sweep(seed: u64) -> PlaneSweep {
    let mut sweep = PlaneSweep::new();
    let added = sweep.add_batch(random_triangles(seed, NUM_TRIANGLES));
    info!(seed, added, "scene generated");
    sweep
}

#[macroquad::main("Triangle Sweep")]
async fn main() {
    SubscriberBuilder::default().with_target(false).init();

    let mut seed = 1;
    let mut sweep = build_sweep(seed);
    let mut sink = MacroquadSink::new();
    sweep.publish(&mut sink);
    let mut view = View::fit(sink.points(), 40.0);

    let mut playing = false;
    let mut timer = 0.0;

    loop {
        if is_key_pressed(KeyCode::R) {
            seed += 1;
            sweep = build_sweep(seed);
            sweep.publish(&mut sink);
            view = View::fit(sink.points(), 40.0);
            playing = false;
        }
        if is_key_pressed(KeyCode::P) {
            playing = !playing;
        }
        if is_key_pressed(KeyCode::Space) {
            let steps = sweep.run_with(&mut sink);
            info!(steps, triangles = sweep.len(), area = sweep.total_area(), "sweep finished");
        }

        timer += get_frame_time();
        let due = playing && timer >= 1.0 / STEPS_PER_SECOND;
        if (due || is_key_pressed(KeyCode::Right)) && sweep.status() == SweepStatus::Running {
            timer = 0.0;
            sweep.step();
            sweep.publish(&mut sink);
        }

        clear_background(Color::from_rgba(20, 20, 30, 255));
        sink.draw(&view);
        if let Some(x) = sweep.current_x() {
            view.draw_sweep_line(x);
        }

        draw_text("Triangle Sweep", 10.0, 25.0, 20.0, WHITE);
        draw_text(
            &format!(
                "Triangles: {} | Active edges: {} | Queued events: {} | Steps: {}",
                sweep.len(),
                sweep.active_edges().len(),
                sweep.queued_events(),
                sweep.steps()
            ),
            10.0,
            45.0,
            18.0,
            GRAY,
        );
        let state = match (sweep.status(), playing) {
            (SweepStatus::Idle, _) => "done",
            (SweepStatus::Running, true) => "playing",
            (SweepStatus::Running, false) => "paused",
        };
        draw_text(
            &format!("{state} | Right: step | P: play/pause | Space: finish | R: new scene"),
            10.0,
            65.0,
            18.0,
            GRAY,
        );

        next_frame().await
    }
}
