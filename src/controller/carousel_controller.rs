//! Carousel controller implementation
//!
//! This module implements the carousel state machine on top of a
//! [`CarouselHost`] and an [`AutoplayScheduler`].

use super::swipe::{SwipeDirection, SwipeTracker};
use super::{CarouselEvent, Key};
use crate::config::CarouselConfig;
use crate::error::{CarouselError, Result};
use crate::host::{self, CarouselHost, Role};
use crate::scheduler::{AutoplayScheduler, AutoplayState, TimerId};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Carousel state machine bound to one container
pub struct CarouselController<H, S>
where
    H: CarouselHost,
    S: AutoplayScheduler,
{
    host: H,
    scheduler: S,
    /// Slide nodes, fixed at mount
    slides: Vec<H::Node>,
    /// Indicator nodes, paired with `slides` by position
    indicators: Vec<H::Node>,
    /// Index of the visible slide; always `< slides.len()`
    current_index: usize,
    autoplay: AutoplayState<S::Handle>,
    /// Identity given to the most recently scheduled timer
    last_timer_id: TimerId,
    autoplay_interval: Duration,
    swipe: SwipeTracker,
    /// Listeners attached at mount, released on detach
    subscriptions: Vec<H::Subscription>,
    detached: bool,
}

impl<H, S> CarouselController<H, S>
where
    H: CarouselHost,
    S: AutoplayScheduler,
{
    /// Discover the carousel structure, render the first slide, attach
    /// listeners and start autoplay
    ///
    /// Fails without attaching anything or scheduling a timer when the
    /// structure is unusable.
    pub fn mount(host: H, scheduler: S, config: &CarouselConfig) -> Result<Self> {
        config.validate()?;

        let slides = host.query_all(Role::Slide);
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }

        let indicators = host.query_all(Role::Indicator);
        if indicators.len() != slides.len() {
            return Err(CarouselError::IndicatorMismatch {
                slides: slides.len(),
                indicators: indicators.len(),
            });
        }

        for role in [Role::PrevControl, Role::NextControl] {
            if host.query(role).is_none() {
                return Err(CarouselError::MissingElement(role));
            }
        }

        let mut controller = Self {
            host,
            scheduler,
            slides,
            indicators,
            current_index: 0,
            autoplay: AutoplayState::Idle,
            last_timer_id: TimerId::default(),
            autoplay_interval: config.autoplay_interval(),
            swipe: SwipeTracker::new(config.swipe_threshold_px),
            subscriptions: Vec::new(),
            detached: false,
        };

        controller.render();
        // On failure, dropping the controller releases what was attached so far
        controller.bind()?;
        controller.start_autoplay();

        info!(
            "Carousel mounted with {} slides, autoplay every {:?}",
            controller.slides.len(),
            controller.autoplay_interval
        );
        Ok(controller)
    }

    fn bind(&mut self) -> Result<()> {
        for binding in host::bindings(self.indicators.len()) {
            let subscription = self.host.subscribe(binding).map_err(|e| {
                error!("Failed to attach listener {binding:?}: {e}");
                e
            })?;
            self.subscriptions.push(subscription);
        }
        debug!("Attached {} listeners", self.subscriptions.len());
        Ok(())
    }

    /// Route one input event to the matching operation
    pub fn handle_event(&mut self, event: CarouselEvent) {
        if self.detached {
            debug!("Carousel detached, ignoring {event:?}");
            return;
        }

        match event {
            CarouselEvent::PrevActivated => self.prev(),
            CarouselEvent::NextActivated => self.next(),
            CarouselEvent::IndicatorActivated(index) => self.go_to_slide(index),
            CarouselEvent::KeyDown(key) => {
                if key == Key::Other || !self.host.is_in_viewport() {
                    return;
                }
                if key == Key::ArrowLeft {
                    self.prev();
                } else {
                    self.next();
                }
            }
            CarouselEvent::TouchStart { x } => self.swipe.begin(x),
            CarouselEvent::TouchEnd { x } => match self.swipe.finish(x) {
                Some(SwipeDirection::Left) => self.next(),
                Some(SwipeDirection::Right) => self.prev(),
                None => {}
            },
            CarouselEvent::PointerEnter | CarouselEvent::VisibilityChanged { hidden: true } => {
                self.pause_autoplay();
            }
            CarouselEvent::PointerLeave | CarouselEvent::VisibilityChanged { hidden: false } => {
                self.resume_autoplay();
            }
            CarouselEvent::AutoplayTick(id) => {
                if self.autoplay.timer_id() == Some(id) {
                    self.next();
                } else {
                    debug!("Ignoring tick from stale autoplay timer {id}");
                }
            }
        }
    }

    /// Advance to the following slide, wrapping after the last
    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1) % self.slides.len();
        debug!("next -> slide {}", self.current_index);
        self.render();
        self.reset_autoplay();
    }

    /// Go back to the preceding slide, wrapping before the first
    pub fn prev(&mut self) {
        self.current_index = if self.current_index == 0 {
            self.slides.len() - 1
        } else {
            self.current_index - 1
        };
        debug!("prev -> slide {}", self.current_index);
        self.render();
        self.reset_autoplay();
    }

    /// Show the slide at `index`; out-of-range requests are ignored
    pub fn go_to_slide(&mut self, index: usize) {
        if index >= self.slides.len() {
            debug!(
                "Ignoring request for slide {index} of {}",
                self.slides.len()
            );
            return;
        }
        self.current_index = index;
        debug!("go_to_slide -> slide {}", self.current_index);
        self.render();
        self.reset_autoplay();
    }

    /// Deactivate every slide and indicator, then activate the current pair
    fn render(&mut self) {
        for node in self.slides.iter().chain(&self.indicators) {
            self.host.set_active(node, false);
        }
        self.host.set_active(&self.slides[self.current_index], true);
        self.host
            .set_active(&self.indicators[self.current_index], true);
    }

    /// Schedule the autoplay timer unless one is already live
    pub fn start_autoplay(&mut self) {
        if self.autoplay.is_scheduled() || self.detached {
            return;
        }

        let id = self.last_timer_id.next();
        self.last_timer_id = id;
        match self.scheduler.schedule(id, self.autoplay_interval) {
            Ok(handle) => {
                debug!("Autoplay timer {id} scheduled");
                self.autoplay = AutoplayState::Scheduled { id, handle };
            }
            Err(e) => {
                error!("Autoplay unavailable, staying idle: {e}");
            }
        }
    }

    /// Cancel the autoplay timer if one is live
    pub fn pause_autoplay(&mut self) {
        if let Some((id, handle)) = self.autoplay.take() {
            self.scheduler.cancel(handle);
            debug!("Autoplay timer {id} cancelled");
        }
    }

    /// Restart autoplay only when no timer is live
    pub fn resume_autoplay(&mut self) {
        if !self.autoplay.is_scheduled() {
            self.start_autoplay();
        }
    }

    /// Cancel any live timer and schedule a fresh one
    pub fn reset_autoplay(&mut self) {
        self.pause_autoplay();
        self.start_autoplay();
    }

    /// Cancel autoplay and release every listener; later events are ignored
    pub fn detach(&mut self) {
        if self.detached {
            return;
        }
        self.pause_autoplay();
        for subscription in self.subscriptions.drain(..) {
            self.host.unsubscribe(subscription);
        }
        self.detached = true;
        info!("Carousel detached");
    }

    /// Index of the visible slide
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of slides
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Whether an autoplay timer is scheduled
    pub fn is_autoplay_active(&self) -> bool {
        self.autoplay.is_scheduled()
    }

    /// Whether `detach` has run
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// The host the carousel is mounted into
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to move the viewport
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H, S> Drop for CarouselController<H, S>
where
    H: CarouselHost,
    S: AutoplayScheduler,
{
    fn drop(&mut self) {
        // Silent variant of detach(): a failed mount drops a half-built controller too
        self.pause_autoplay();
        for subscription in self.subscriptions.drain(..) {
            self.host.unsubscribe(subscription);
        }
    }
}

/// Page-level handle: an active carousel, or nothing when mounting failed
///
/// Mount failures never propagate out of page initialisation; they are
/// logged and every later event is ignored.
pub enum HeroCarousel<H, S>
where
    H: CarouselHost,
    S: AutoplayScheduler,
{
    /// Mounted and running
    Active(CarouselController<H, S>),
    /// Mount failed; nothing is bound or scheduled
    Inactive,
}

impl<H, S> HeroCarousel<H, S>
where
    H: CarouselHost,
    S: AutoplayScheduler,
{
    /// Mount the carousel, degrading to `Inactive` on any structural problem
    pub fn init(host: H, scheduler: S, config: &CarouselConfig) -> Self {
        match CarouselController::mount(host, scheduler, config) {
            Ok(controller) => Self::Active(controller),
            Err(e) => {
                warn!("Carousel inactive: {e}");
                Self::Inactive
            }
        }
    }

    /// Forward an event to the controller, if any
    pub fn handle_event(&mut self, event: CarouselEvent) {
        if let Self::Active(controller) = self {
            controller.handle_event(event);
        }
    }

    /// Whether the carousel mounted successfully
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// The mounted controller
    pub fn controller(&self) -> Option<&CarouselController<H, S>> {
        match self {
            Self::Active(controller) => Some(controller),
            Self::Inactive => None,
        }
    }

    /// The mounted controller, mutably
    pub fn controller_mut(&mut self) -> Option<&mut CarouselController<H, S>> {
        match self {
            Self::Active(controller) => Some(controller),
            Self::Inactive => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Binding, InputKind, ListenTarget, MemoryHost};
    use crate::scheduler::ManualScheduler;

    type TestCarousel = CarouselController<MemoryHost, ManualScheduler>;

    const INTERVAL: Duration = Duration::from_millis(4000);
    const STEP: Duration = Duration::from_millis(100);

    fn mount(slides: usize) -> (TestCarousel, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        let controller = CarouselController::mount(
            MemoryHost::new(slides),
            scheduler.clone(),
            &CarouselConfig::default(),
        )
        .unwrap();
        (controller, scheduler)
    }

    /// Advance virtual time in small steps, dispatching ticks as they fire
    fn run_for(controller: &mut TestCarousel, scheduler: &ManualScheduler, total: Duration) {
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            for event in scheduler.advance(STEP) {
                controller.handle_event(event);
            }
            elapsed += STEP;
        }
    }

    fn assert_single_active(controller: &TestCarousel) {
        let index = controller.current_index();
        assert_eq!(controller.host().active_positions(Role::Slide), vec![index]);
        assert_eq!(
            controller.host().active_positions(Role::Indicator),
            vec![index]
        );
    }

    #[test]
    fn test_mount_renders_first_slide_and_starts_autoplay() {
        let (controller, scheduler) = mount(5);
        assert_eq!(controller.current_index(), 0);
        assert_single_active(&controller);
        assert!(controller.is_autoplay_active());
        assert_eq!(scheduler.active_timers(), 1);
    }

    #[test]
    fn test_mount_attaches_every_listener() {
        let (controller, _scheduler) = mount(3);
        assert_eq!(controller.host().listener_count(), host::bindings(3).len());
        assert!(controller.host().is_listening(Binding {
            target: ListenTarget::Document,
            input: InputKind::VisibilityChange,
        }));
        assert!(controller.host().is_listening(Binding {
            target: ListenTarget::Indicator(2),
            input: InputKind::Activate,
        }));
    }

    #[test]
    fn test_navigation_scenario() {
        let (mut controller, _scheduler) = mount(5);

        controller.prev();
        assert_eq!(controller.current_index(), 4);
        controller.next();
        assert_eq!(controller.current_index(), 0);
        controller.go_to_slide(3);
        assert_eq!(controller.current_index(), 3);
        controller.go_to_slide(10);
        assert_eq!(controller.current_index(), 3);
        assert_single_active(&controller);
    }

    #[test]
    fn test_single_slide_wraps_onto_itself() {
        let (mut controller, _scheduler) = mount(1);
        controller.next();
        assert_eq!(controller.current_index(), 0);
        controller.prev();
        assert_eq!(controller.current_index(), 0);
        assert_single_active(&controller);
    }

    #[test]
    fn test_out_of_range_go_to_does_not_reset_autoplay() {
        let (mut controller, scheduler) = mount(3);
        let schedules = scheduler.schedule_count();
        controller.go_to_slide(3);
        assert_eq!(scheduler.schedule_count(), schedules);
    }

    #[test]
    fn test_autoplay_advances_every_interval() {
        let (mut controller, scheduler) = mount(5);

        run_for(&mut controller, &scheduler, INTERVAL - STEP);
        assert_eq!(controller.current_index(), 0);

        run_for(&mut controller, &scheduler, STEP);
        assert_eq!(controller.current_index(), 1);

        run_for(&mut controller, &scheduler, INTERVAL * 3);
        assert_eq!(controller.current_index(), 4);
        assert_eq!(scheduler.active_timers(), 1);
        assert_single_active(&controller);
    }

    #[test]
    fn test_manual_navigation_pushes_back_next_tick() {
        let (mut controller, scheduler) = mount(5);

        run_for(&mut controller, &scheduler, Duration::from_millis(3000));
        controller.handle_event(CarouselEvent::NextActivated);
        assert_eq!(controller.current_index(), 1);

        // The original timer would have fired at 4000 ms
        run_for(&mut controller, &scheduler, Duration::from_millis(3900));
        assert_eq!(controller.current_index(), 1);

        run_for(&mut controller, &scheduler, STEP);
        assert_eq!(controller.current_index(), 2);
    }

    #[test]
    fn test_pause_stops_automatic_advance() {
        let (mut controller, scheduler) = mount(5);

        controller.handle_event(CarouselEvent::PointerEnter);
        assert!(!controller.is_autoplay_active());
        assert_eq!(scheduler.active_timers(), 0);

        run_for(&mut controller, &scheduler, INTERVAL * 10);
        assert_eq!(controller.current_index(), 0);

        controller.handle_event(CarouselEvent::PointerLeave);
        run_for(&mut controller, &scheduler, INTERVAL);
        assert_eq!(controller.current_index(), 1);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let (mut controller, scheduler) = mount(2);
        controller.pause_autoplay();
        controller.pause_autoplay();
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn test_resume_while_active_does_not_stack_timers() {
        let (mut controller, scheduler) = mount(5);

        controller.resume_autoplay();
        controller.resume_autoplay();
        controller.handle_event(CarouselEvent::PointerLeave);
        controller.handle_event(CarouselEvent::VisibilityChanged { hidden: false });
        assert_eq!(scheduler.active_timers(), 1);

        run_for(&mut controller, &scheduler, INTERVAL);
        assert_eq!(controller.current_index(), 1);
    }

    #[test]
    fn test_start_autoplay_is_idempotent() {
        let (mut controller, scheduler) = mount(3);
        controller.start_autoplay();
        assert_eq!(scheduler.active_timers(), 1);
        assert_eq!(scheduler.schedule_count(), 1);
    }

    #[test]
    fn test_reset_replaces_timer() {
        let (mut controller, scheduler) = mount(3);
        controller.reset_autoplay();
        controller.reset_autoplay();
        assert_eq!(scheduler.active_timers(), 1);
        assert_eq!(scheduler.schedule_count(), 3);
    }

    #[test]
    fn test_reset_after_pause_restarts_autoplay() {
        let (mut controller, scheduler) = mount(3);
        controller.pause_autoplay();
        controller.reset_autoplay();
        assert!(controller.is_autoplay_active());
        assert_eq!(scheduler.active_timers(), 1);
    }

    #[test]
    fn test_visibility_pauses_and_resumes() {
        let (mut controller, scheduler) = mount(4);

        controller.handle_event(CarouselEvent::VisibilityChanged { hidden: true });
        run_for(&mut controller, &scheduler, INTERVAL * 2);
        assert_eq!(controller.current_index(), 0);

        controller.handle_event(CarouselEvent::VisibilityChanged { hidden: false });
        run_for(&mut controller, &scheduler, INTERVAL);
        assert_eq!(controller.current_index(), 1);
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let (mut controller, scheduler) = mount(5);
        let stale = scheduler.advance(INTERVAL);
        assert_eq!(stale.len(), 1);

        // The timer that produced the tick is cancelled before the tick is handled
        controller.handle_event(CarouselEvent::PointerEnter);
        for event in stale {
            controller.handle_event(event);
        }
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn test_indicator_activation() {
        let (mut controller, _scheduler) = mount(5);
        controller.handle_event(CarouselEvent::IndicatorActivated(2));
        assert_eq!(controller.current_index(), 2);
        controller.handle_event(CarouselEvent::IndicatorActivated(7));
        assert_eq!(controller.current_index(), 2);
        assert_single_active(&controller);
    }

    #[test]
    fn test_arrow_keys_require_viewport() {
        let (mut controller, _scheduler) = mount(5);

        controller.handle_event(CarouselEvent::KeyDown(Key::ArrowRight));
        assert_eq!(controller.current_index(), 1);
        controller.handle_event(CarouselEvent::KeyDown(Key::ArrowLeft));
        controller.handle_event(CarouselEvent::KeyDown(Key::ArrowLeft));
        assert_eq!(controller.current_index(), 4);
        controller.handle_event(CarouselEvent::KeyDown(Key::Other));
        assert_eq!(controller.current_index(), 4);

        controller.host_mut().set_in_viewport(false);
        controller.handle_event(CarouselEvent::KeyDown(Key::ArrowRight));
        assert_eq!(controller.current_index(), 4);
    }

    #[test]
    fn test_swipe_threshold_boundary() {
        let (mut controller, _scheduler) = mount(5);

        controller.handle_event(CarouselEvent::TouchStart { x: 300.0 });
        controller.handle_event(CarouselEvent::TouchEnd { x: 250.0 });
        assert_eq!(controller.current_index(), 0);

        controller.handle_event(CarouselEvent::TouchStart { x: 300.0 });
        controller.handle_event(CarouselEvent::TouchEnd { x: 249.0 });
        assert_eq!(controller.current_index(), 1);

        controller.handle_event(CarouselEvent::TouchStart { x: 100.0 });
        controller.handle_event(CarouselEvent::TouchEnd { x: 151.0 });
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn test_failed_schedule_leaves_autoplay_idle() {
        let scheduler = ManualScheduler::new();
        scheduler.fail_next_schedule();
        let mut controller = CarouselController::mount(
            MemoryHost::new(3),
            scheduler.clone(),
            &CarouselConfig::default(),
        )
        .unwrap();
        assert!(!controller.is_autoplay_active());

        // Navigation still works and retries scheduling
        controller.next();
        assert_eq!(controller.current_index(), 1);
        assert!(controller.is_autoplay_active());
    }

    #[test]
    fn test_mount_rejects_broken_structures() {
        let cases = [
            (MemoryHost::new(0), "no slides"),
            (MemoryHost::with_structure(3, 2, true, true), "mismatch"),
            (MemoryHost::with_structure(3, 3, false, true), "no prev"),
            (MemoryHost::with_structure(3, 3, true, false), "no next"),
        ];
        for (host, label) in cases {
            let scheduler = ManualScheduler::new();
            let result =
                CarouselController::mount(host, scheduler.clone(), &CarouselConfig::default());
            assert!(result.is_err(), "{label} should fail");
            assert_eq!(scheduler.active_timers(), 0, "{label} scheduled a timer");
        }
    }

    #[test]
    fn test_mount_rejects_invalid_config() {
        let config = CarouselConfig {
            autoplay_interval_ms: 0,
            ..CarouselConfig::default()
        };
        let result = CarouselController::mount(MemoryHost::new(3), ManualScheduler::new(), &config);
        assert!(matches!(result, Err(CarouselError::ConfigError(_))));
    }

    #[test]
    fn test_detach_releases_everything() {
        let (mut controller, scheduler) = mount(3);
        controller.detach();

        assert!(controller.is_detached());
        assert_eq!(controller.host().listener_count(), 0);
        assert_eq!(scheduler.active_timers(), 0);

        controller.handle_event(CarouselEvent::NextActivated);
        controller.handle_event(CarouselEvent::PointerLeave);
        assert_eq!(controller.current_index(), 0);
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn test_drop_cancels_timer() {
        let (controller, scheduler) = mount(3);
        drop(controller);
        assert_eq!(scheduler.active_timers(), 0);
    }

    #[test]
    fn test_hero_carousel_zero_slides_is_inert() {
        let scheduler = ManualScheduler::new();
        let mut carousel = HeroCarousel::init(
            MemoryHost::new(0),
            scheduler.clone(),
            &CarouselConfig::default(),
        );
        assert!(!carousel.is_active());
        assert!(carousel.controller().is_none());

        for event in [
            CarouselEvent::NextActivated,
            CarouselEvent::PrevActivated,
            CarouselEvent::IndicatorActivated(0),
            CarouselEvent::KeyDown(Key::ArrowRight),
            CarouselEvent::TouchStart { x: 500.0 },
            CarouselEvent::TouchEnd { x: 0.0 },
            CarouselEvent::PointerLeave,
            CarouselEvent::VisibilityChanged { hidden: false },
        ] {
            carousel.handle_event(event);
        }
        assert_eq!(scheduler.active_timers(), 0);
        assert_eq!(scheduler.schedule_count(), 0);
    }

    #[test]
    fn test_hero_carousel_forwards_events() {
        let mut carousel = HeroCarousel::init(
            MemoryHost::new(4),
            ManualScheduler::new(),
            &CarouselConfig::default(),
        );
        carousel.handle_event(CarouselEvent::PrevActivated);
        assert_eq!(
            carousel.controller().map(CarouselController::current_index),
            Some(3)
        );
        if let Some(controller) = carousel.controller_mut() {
            controller.go_to_slide(1);
        }
        assert_eq!(
            carousel.controller().map(CarouselController::current_index),
            Some(1)
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: n calls to next() return to the starting index
            #[test]
            fn next_is_cyclic(slides in 1usize..20, start in 0usize..20) {
                let (mut controller, _scheduler) = mount(slides);
                controller.go_to_slide(start % slides);
                let origin = controller.current_index();
                for _ in 0..slides {
                    controller.next();
                }
                prop_assert_eq!(controller.current_index(), origin);
            }

            /// Property: prev() and next() are inverses
            #[test]
            fn prev_inverts_next(slides in 1usize..20, start in 0usize..20) {
                let (mut controller, _scheduler) = mount(slides);
                let start = start % slides;
                controller.go_to_slide(start);

                controller.next();
                controller.prev();
                prop_assert_eq!(controller.current_index(), start);

                controller.prev();
                controller.next();
                prop_assert_eq!(controller.current_index(), start);
            }

            /// Property: any event sequence keeps exactly one active pair and one timer at most
            #[test]
            fn invariants_hold_under_any_input(
                slides in 1usize..8,
                ops in prop::collection::vec((0u8..10, 0usize..10), 0..60)
            ) {
                let (mut controller, scheduler) = mount(slides);
                for (op, target) in ops {
                    let event = match op {
                        0 => CarouselEvent::NextActivated,
                        1 => CarouselEvent::PrevActivated,
                        2 => CarouselEvent::IndicatorActivated(target),
                        3 => CarouselEvent::KeyDown(Key::ArrowLeft),
                        4 => CarouselEvent::PointerEnter,
                        5 => CarouselEvent::PointerLeave,
                        6 => CarouselEvent::VisibilityChanged { hidden: true },
                        7 => CarouselEvent::VisibilityChanged { hidden: false },
                        8 => CarouselEvent::TouchStart { x: 400.0 },
                        _ => CarouselEvent::TouchEnd { x: 100.0 },
                    };
                    controller.handle_event(event);
                    for tick in scheduler.advance(Duration::from_millis(1500)) {
                        controller.handle_event(tick);
                    }
                    prop_assert!(controller.current_index() < slides);
                    prop_assert!(scheduler.active_timers() <= 1);
                    prop_assert_eq!(
                        scheduler.active_timers() == 1,
                        controller.is_autoplay_active()
                    );
                    let index = controller.current_index();
                    prop_assert_eq!(controller.host().active_positions(Role::Slide), vec![index]);
                    prop_assert_eq!(
                        controller.host().active_positions(Role::Indicator),
                        vec![index]
                    );
                }
            }
        }
    }
}
