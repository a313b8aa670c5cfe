//! `hero-carousel` - headless carousel console
//!
//! Runs the hero carousel against an in-memory page: autoplay ticks come from
//! a background timer thread, user input comes from stdin commands, and the
//! slide strip is printed whenever something changes.
//!
//! The console needs threads, stdin and a data directory, so it is native
//! only. The browser build starts from the library's `#[wasm_bindgen(start)]`
//! entry point instead.

// Console front end is only in the binary, not the library
#[cfg(not(target_arch = "wasm32"))]
mod console;

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        console::run()
    }

    #[cfg(target_arch = "wasm32")]
    {
        anyhow::bail!("The hero-carousel console is a native-only application")
    }
}
