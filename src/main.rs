use std::{
    env,
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

use anyhow::Result;
use log::info;

mod app;

use app::App;

const FRAME_COUNT: u32 = 600;

fn main() -> Result<()> {
    env_logger::init();

    let snapshot_path = env::args_os().nth(1).map(PathBuf::from);
    let target_frame_interval = Duration::from_secs_f64(1.0 / 60.0);
    let float_after = FRAME_COUNT as f32 * target_frame_interval.as_secs_f32() * 0.5;

    let mut app = App::new(float_after);
    let start = Instant::now();

    for _ in 0..FRAME_COUNT {
        let elapsed_from_last_frame = app.clock().last_frame().elapsed();
        if target_frame_interval > elapsed_from_last_frame {
            thread::sleep(target_frame_interval - elapsed_from_last_frame);
        }

        app.update();
    }

    info!("Simulated {} frames in {:?}", FRAME_COUNT, start.elapsed());

    if let Some(path) = snapshot_path {
        app.write_snapshot(&path)?;
    }

    Ok(())
}
