//! Headless console front end
//!
//! Stands in for the browser: stdin lines become carousel input, and the
//! slide strip is printed after every change.

mod session;

pub use session::run;

use hero_carousel::{CarouselEvent, Key};
use smallvec::{SmallVec, smallvec};
use std::io::BufRead;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tracing::{debug, info};

/// Events produced by one command; a swipe needs two
pub type Input = SmallVec<[CarouselEvent; 2]>;

/// One parsed console command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Feed events to the carousel
    Input(Input),
    /// Move the carousel into (`true`) or out of the viewport
    Scroll(bool),
    /// Print the current state
    Status,
    /// Print the command list
    Help,
    /// Leave the program
    Quit,
}

/// Why a line could not be parsed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Unknown command word
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    /// Argument missing or malformed
    #[error("usage: {0}")]
    Usage(&'static str),
}

pub const HELP: &str = "\
commands:
  n, next            next slide
  p, prev            previous slide
  g, go <i>          show slide i (0-based)
  left, right        arrow keys
  swipe <from> <to>  touch drag between two x positions
  enter, leave       pointer enters / leaves the carousel
  hide, show         page visibility
  scroll in|out      move the carousel into / out of the viewport
  status             print the current slide
  q, quit            exit";

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(Command::Status);
    };

    let command = match word {
        "n" | "next" => Command::Input(smallvec![CarouselEvent::NextActivated]),
        "p" | "prev" => Command::Input(smallvec![CarouselEvent::PrevActivated]),
        "g" | "go" => {
            let index = words
                .next()
                .and_then(|w| w.parse::<usize>().ok())
                .ok_or(ParseError::Usage("go <index>"))?;
            Command::Input(smallvec![CarouselEvent::IndicatorActivated(index)])
        }
        "left" => Command::Input(smallvec![CarouselEvent::KeyDown(Key::ArrowLeft)]),
        "right" => Command::Input(smallvec![CarouselEvent::KeyDown(Key::ArrowRight)]),
        "swipe" => {
            let mut coord = || words.next().and_then(|w| w.parse::<f64>().ok());
            let (Some(from), Some(to)) = (coord(), coord()) else {
                return Err(ParseError::Usage("swipe <from_x> <to_x>"));
            };
            Command::Input(smallvec![
                CarouselEvent::TouchStart { x: from },
                CarouselEvent::TouchEnd { x: to },
            ])
        }
        "enter" => Command::Input(smallvec![CarouselEvent::PointerEnter]),
        "leave" => Command::Input(smallvec![CarouselEvent::PointerLeave]),
        "hide" => Command::Input(smallvec![CarouselEvent::VisibilityChanged { hidden: true }]),
        "show" => Command::Input(smallvec![CarouselEvent::VisibilityChanged { hidden: false }]),
        "scroll" => match words.next() {
            Some("in") => Command::Scroll(true),
            Some("out") => Command::Scroll(false),
            _ => return Err(ParseError::Usage("scroll in|out")),
        },
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(command)
}

/// One-line picture of the carousel, e.g. `( ) (*) ( )  slide 2/3  autoplay on`
pub fn render_strip(current: usize, count: usize, autoplay: bool) -> String {
    let dots: Vec<&str> = (0..count)
        .map(|i| if i == current { "(*)" } else { "( )" })
        .collect();
    format!(
        "{}  slide {}/{}  autoplay {}",
        dots.join(" "),
        current + 1,
        count,
        if autoplay { "on" } else { "paused" }
    )
}

/// Read stdin on a background thread, forwarding parsed commands
///
/// Parse errors are printed and skipped. The thread ends on EOF, on `quit`,
/// or when the receiver is gone.
pub fn spawn_stdin_reader(sender: mpsc::Sender<Command>) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("console-input".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                match parse_command(&line) {
                    Ok(command) => {
                        debug!("Console command: {command:?}");
                        let quit = command == Command::Quit;
                        if sender.send(command).is_err() || quit {
                            break;
                        }
                    }
                    Err(e) => eprintln!("{e}"),
                }
            }
            info!("Console input closed");
        })
}
