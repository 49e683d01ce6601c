//! Press the user button to cycle through the light patterns.
//!
//! STM32F303 Discovery:
//! - USER button on PA0. It has an external pull-down, so pressed is high.
//! - LD3..LD10 on PE8..PE15, arranged like a compass. Logical line `n` is `PE(8 + n)`.
#![no_std]
#![no_main]

use compass_lights_core::config::Config;
use compass_lights_core::engine::PatternEngine;
use compass_lights_core::lights::PinBank;
use compass_lights_core::logging::info;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    // default clocks are fine. nothing here is timing sensitive
    let p = embassy_stm32::init(Default::default());

    info!("Hello World!");

    let button = Input::new(p.PA0, Pull::None);

    let leds = [
        Output::new(p.PE8, Level::Low, Speed::Low),
        Output::new(p.PE9, Level::Low, Speed::Low),
        Output::new(p.PE10, Level::Low, Speed::Low),
        Output::new(p.PE11, Level::Low, Speed::Low),
        Output::new(p.PE12, Level::Low, Speed::Low),
        Output::new(p.PE13, Level::Low, Speed::Low),
        Output::new(p.PE14, Level::Low, Speed::Low),
        Output::new(p.PE15, Level::Low, Speed::Low),
    ];

    let config = Config::default();

    // TODO: blink an error code on the leds instead of only logging it
    let engine = match PatternEngine::new(&config, button, PinBank::new(leds), Delay) {
        Ok(x) => x,
        Err(err) => defmt::panic!("bad config: {}", err),
    };

    info!("pins ready");

    // this blocks forever. nothing else needs to run, so there's no point in spawning a task for it
    engine.run()
}
