use macroquad::prelude::*;
use sweep_viz::{random_triangles, MacroquadSink, View};
use tracing::{info, warn};
use tracing_subscriber::fmt::SubscriberBuilder;
use tri_sweep::{Partition, Triangle};

const NUM_TRIANGLES: usize = 12;

/// Inserts the scene one triangle at a time into a [`Partition`].
#[macroquad::main("Incremental Partition")]
async fn main() {
    SubscriberBuilder::default().with_target(false).init();

    let mut seed = 7;
    let mut input = random_triangles(seed, NUM_TRIANGLES).into_iter();
    let mut partition = Partition::new();
    let mut sink = MacroquadSink::new();
    let scene: Vec<_> = random_triangles(seed, NUM_TRIANGLES).into_iter().flatten().collect();
    let mut view = View::fit(scene, 40.0);
    let mut inserted = 0;

    loop {
        if is_key_pressed(KeyCode::R) {
            seed += 1;
            input = random_triangles(seed, NUM_TRIANGLES).into_iter();
            let scene: Vec<_> = random_triangles(seed, NUM_TRIANGLES).into_iter().flatten().collect();
            view = View::fit(scene, 40.0);
            partition = Partition::new();
            inserted = 0;
            partition.publish(&mut sink);
        }
        if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::Space) {
            if let Some(points) = input.next() {
                match Triangle::from_points(points) {
                    Ok(triangle) => {
                        let pieces = partition.insert(triangle);
                        inserted += 1;
                        info!(pieces, total = partition.len(), area = partition.area(), "triangle inserted");
                    }
                    Err(err) => warn!(%err, "skipping degenerate triangle"),
                }
                partition.publish(&mut sink);
            }
        }

        clear_background(Color::from_rgba(20, 20, 30, 255));
        sink.draw(&view);

        draw_text("Incremental Partition", 10.0, 25.0, 20.0, WHITE);
        draw_text(
            &format!(
                "Inserted: {inserted}/{NUM_TRIANGLES} | Pieces: {} | Area: {:.2}",
                partition.len(),
                partition.area()
            ),
            10.0,
            45.0,
            18.0,
            GRAY,
        );
        draw_text("Right/Space: insert next | R: new scene", 10.0, 65.0, 18.0, GRAY);

        next_frame().await
    }
}
