#![no_main]

use hero_carousel::config::CarouselConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary JSON must either fail to parse or yield a config that
    // validates without panicking
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(config) = serde_json::from_str::<CarouselConfig>(s)
    {
        let _ = config.validate();
        let _ = config.autoplay_interval();
    }
});
