//! Console session: startup, event loop and status output

use super::{Command, HELP};
use anyhow::{Context, Result};
use hero_carousel::{
    CarouselController, CarouselEvent,
    config::{CarouselConfig, ConfigManager},
    error::get_user_friendly_error,
    host::MemoryHost,
    scheduler::ThreadScheduler,
    utils,
};
use std::sync::mpsc::{self, RecvTimeoutError, TryRecvError};
use std::time::Duration;
use tracing::{error, info, warn};

/// Number of slides on the simulated page
const DEMO_SLIDES: usize = 5;

/// How long the event loop waits for a tick before checking console input
const POLL_INTERVAL: Duration = Duration::from_millis(100);

type Carousel = CarouselController<MemoryHost, ThreadScheduler>;

/// Start logging, load the configuration, mount the carousel and run until `quit`
pub fn run() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;
    info!("hero-carousel v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = ConfigManager::load().context("Failed to load carousel configuration")?;
    info!(
        "Configuration loaded: autoplay every {} ms, swipe threshold {} px",
        config.autoplay_interval_ms, config.swipe_threshold_px
    );

    let (tick_tx, tick_rx) = mpsc::sync_channel::<CarouselEvent>(32);
    let (command_tx, command_rx) = mpsc::channel::<Command>();

    let mut carousel = mount(
        MemoryHost::new(DEMO_SLIDES),
        ThreadScheduler::new(tick_tx.clone()),
        &config,
    )?;

    let _input = super::spawn_stdin_reader(command_tx)
        .context("Failed to start console input thread")?;

    println!("{HELP}");
    print_status(&carousel);

    run_event_loop(&mut carousel, &tick_rx, &command_rx, &config);

    // Keeps the tick channel connected for the whole loop
    drop(tick_tx);
    carousel.detach();
    info!("hero-carousel exiting");
    Ok(())
}

/// Mount on the simulated page, turning a failure into an operator-facing message
fn mount(
    host: MemoryHost,
    scheduler: ThreadScheduler,
    config: &CarouselConfig,
) -> Result<Carousel> {
    Carousel::mount(host, scheduler, config).map_err(|e| {
        error!("Carousel failed to mount: {e}");
        anyhow::anyhow!(get_user_friendly_error(&e))
    })
}

/// Main event loop: ticks with a timeout, then drain console commands
fn run_event_loop(
    carousel: &mut Carousel,
    tick_rx: &mpsc::Receiver<CarouselEvent>,
    command_rx: &mpsc::Receiver<Command>,
    config: &CarouselConfig,
) {
    info!("Entering main event loop");
    loop {
        match tick_rx.recv_timeout(POLL_INTERVAL) {
            Ok(event) => {
                let before = snapshot(carousel);
                carousel.handle_event(event);
                if snapshot(carousel) != before {
                    print_status(carousel);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                warn!("Autoplay channel disconnected. Exiting event loop.");
                break;
            }
        }

        loop {
            match command_rx.try_recv() {
                Ok(Command::Quit) | Err(TryRecvError::Disconnected) => {
                    info!("Main event loop exited");
                    return;
                }
                Ok(command) => handle_command(carousel, command, config),
                Err(TryRecvError::Empty) => break,
            }
        }
    }
}

fn handle_command(carousel: &mut Carousel, command: Command, config: &CarouselConfig) {
    match command {
        Command::Input(events) => {
            let before = snapshot(carousel);
            for event in events {
                carousel.handle_event(event);
            }
            if snapshot(carousel) != before {
                print_status(carousel);
            }
        }
        Command::Scroll(visible) => {
            carousel.host_mut().set_in_viewport(visible);
            println!(
                "carousel {} the viewport",
                if visible { "inside" } else { "outside" }
            );
        }
        Command::Status => print_status(carousel),
        Command::Help => {
            println!("{HELP}");
            println!(
                "autoplay interval {} ms, swipe threshold {} px",
                config.autoplay_interval_ms, config.swipe_threshold_px
            );
        }
        Command::Quit => {}
    }
}

/// Observable state: current slide and whether autoplay is running
fn snapshot(carousel: &Carousel) -> (usize, bool) {
    (carousel.current_index(), carousel.is_autoplay_active())
}

fn print_status(carousel: &Carousel) {
    println!(
        "{}",
        super::render_strip(
            carousel.current_index(),
            carousel.slide_count(),
            carousel.is_autoplay_active()
        )
    );
}
