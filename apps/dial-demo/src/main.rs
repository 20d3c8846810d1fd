//! Headless dial demo.
//!
//! Replays a circular drag against the engine in real time, flings, and
//! pumps decay frames until the dial settles. The "display" is the log.

use std::f32::consts::PI;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use twirl_core::geometry::point_at_angle;
use twirl_core::prelude::*;

const RADIUS: f32 = 120.0;
/// Angular step per drag sample; at ~60 samples/sec this is a brisk spin.
const DRAG_STEP: f32 = 0.12;

struct DegreesLog;

impl RotationListener for DegreesLog {
    fn rotation_changed(&self, degrees: i32) {
        log::info!("dial at {degrees}°");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let center = Point::new(160.0, 160.0);
    let config = DialConfig::centered_at(center);
    let mut engine = SpinnerEngine::new(config);
    engine.add_listener(Rc::new(DegreesLog));

    let clock = SampleClock::new();
    let frame = Duration::from_millis((1000.0 / TICK_RATE) as u64);

    // Clockwise quarter-ish drag starting at twelve o'clock.
    let mut angle = PI / 2.0;
    engine.pointer_down(PointerSample::new(
        point_at_angle(center, RADIUS, angle),
        clock.now_ms(),
    ));
    for _ in 0..12 {
        thread::sleep(frame);
        angle -= DRAG_STEP;
        engine.pointer_move(PointerSample::new(
            point_at_angle(center, RADIUS, angle),
            clock.now_ms(),
        ));
    }
    // One more frame of motion between the last move and the release, so
    // the exit window spans real time.
    thread::sleep(frame);
    angle -= DRAG_STEP;
    engine.pointer_up(PointerSample::new(
        point_at_angle(center, RADIUS, angle),
        clock.now_ms(),
    ));

    if engine.is_decaying() {
        let released = engine.velocity();
        log::info!(
            "released at {released:.2} rad/s, resting within {} frames",
            engine.config().decay().ticks_until_rest(released)
        );
        while engine.is_decaying() {
            thread::sleep(frame);
            engine.tick();
        }
    } else {
        log::info!("released too slowly for a spin");
    }

    log::info!("settled at {}°", engine.total_degrees());
}
