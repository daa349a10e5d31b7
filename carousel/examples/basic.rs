use carousel::{Carousel, CarouselOptions};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new("basic").with_initial_viewport_width(320.0),
        ["sunrise", "noon", "dusk"],
    )
    .expect("valid configuration");

    for step in [1, 1, 1, -1] {
        c.advance(step);
        println!(
            "advance({step:+}) -> slide {} of {} offsets={:?}",
            c.display_label(),
            c.panel_count(),
            c.offsets()
        );
    }
}
