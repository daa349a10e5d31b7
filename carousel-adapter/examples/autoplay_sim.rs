use carousel::CarouselOptions;
use carousel_adapter::{Controller, PageVisibility};

fn main() {
    // Example: a 60fps frame loop driving autoplay, hover and page visibility.
    //
    // An adapter would:
    // - forward UI events (hover, visibility, scroll, drag) to the controller
    // - call tick(now_ms) once per frame
    // - render panels at carousel().values()
    let mut c = Controller::new(
        CarouselOptions::new("autoplay")
            .with_initial_viewport_width(1280.0)
            .with_autoplay(true)
            .with_interval_ms(2_000)
            .with_on_slide_change(Some(|label: usize| println!("  -> slide {label}"))),
        ["a", "b", "c", "d"],
        0,
    )
    .expect("valid configuration");

    let mut now_ms = 0u64;
    while now_ms < 12_000 {
        now_ms += 16;
        match now_ms {
            3_008 => c.on_pointer_enter(now_ms),
            5_008 => c.on_pointer_leave(now_ms),
            9_008 => c.on_visibility_change(PageVisibility::Hidden, now_ms),
            _ => {}
        }
        c.tick(now_ms);
        if now_ms % 1_000 < 16 {
            println!(
                "t={now_ms} slide={} state={:?} armed={}",
                c.carousel().display_label(),
                c.state(),
                c.autoplay().is_armed()
            );
        }
    }

    c.unmount();
}
