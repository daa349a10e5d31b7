// Example: adapter-driven drag gesture followed by spring settling.
use carousel::{Carousel, CarouselOptions, DragSample, TargetKind};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new("drag").with_initial_viewport_width(400.0),
        0..5,
    )
    .expect("valid configuration");

    // Simulate a pointer dragging left by 120px over a few frames.
    let mut now_ms = 0u64;
    for movement_x in [-20.0, -60.0, -120.0] {
        now_ms += 16;
        c.on_drag(DragSample {
            offset_x: movement_x,
            velocity_x: -0.9,
            direction_x: -1.0,
            is_dragging: true,
            movement_x,
            target: TargetKind::Panel,
        });
        c.tick(now_ms);
        println!("t={now_ms} state={:?} values={:?}", c.state(), c.values().collect::<Vec<_>>());
    }

    let outcome = c.on_drag(DragSample {
        offset_x: -120.0,
        velocity_x: -0.9,
        direction_x: -1.0,
        is_dragging: false,
        movement_x: -120.0,
        target: TargetKind::Panel,
    });
    println!("released: {outcome:?} -> slide {}", c.display_label());

    loop {
        now_ms += 16;
        if !c.tick(now_ms) {
            break;
        }
        if now_ms % 80 == 0 {
            println!("t={now_ms} values={:?}", c.values().collect::<Vec<_>>());
        }
    }
    println!("settled at t={now_ms}: {:?}", c.values().collect::<Vec<_>>());
}
