#![no_main]

use hero_carousel::host::{MemoryHost, Role};
use hero_carousel::scheduler::ManualScheduler;
use hero_carousel::{CarouselConfig, CarouselController, CarouselEvent, Key};
use libfuzzer_sys::fuzz_target;
use std::time::Duration;

fn decode(op: u8, arg: u8) -> Option<CarouselEvent> {
    let event = match op % 10 {
        0 => CarouselEvent::PrevActivated,
        1 => CarouselEvent::NextActivated,
        2 => CarouselEvent::IndicatorActivated(usize::from(arg)),
        3 => CarouselEvent::KeyDown(match arg % 3 {
            0 => Key::ArrowLeft,
            1 => Key::ArrowRight,
            _ => Key::Other,
        }),
        4 => CarouselEvent::TouchStart { x: f64::from(arg) },
        5 => CarouselEvent::TouchEnd { x: f64::from(arg) },
        6 => CarouselEvent::PointerEnter,
        7 => CarouselEvent::PointerLeave,
        8 => CarouselEvent::VisibilityChanged { hidden: arg % 2 == 0 },
        _ => return None,
    };
    Some(event)
}

fuzz_target!(|data: &[u8]| {
    let Some((&slides, ops)) = data.split_first() else {
        return;
    };
    let slides = usize::from(slides % 8) + 1;
    let scheduler = ManualScheduler::new();
    let Ok(mut controller) = CarouselController::mount(
        MemoryHost::new(slides),
        scheduler.clone(),
        &CarouselConfig::default(),
    ) else {
        return;
    };

    for pair in ops.chunks_exact(2) {
        match decode(pair[0], pair[1]) {
            Some(event) => controller.handle_event(event),
            None => {
                for tick in scheduler.advance(Duration::from_millis(u64::from(pair[1]) * 50)) {
                    controller.handle_event(tick);
                }
            }
        }

        assert!(controller.current_index() < slides);
        assert!(scheduler.active_timers() <= 1);
        assert_eq!(
            controller.host().active_positions(Role::Slide),
            vec![controller.current_index()]
        );
        assert_eq!(
            controller.host().active_positions(Role::Indicator),
            vec![controller.current_index()]
        );
    }
});
