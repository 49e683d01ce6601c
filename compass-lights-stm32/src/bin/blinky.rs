//! board bring-up. blinks the north LED (LD3 on PE9)
#![no_std]
#![no_main]

use compass_lights_core::logging::info;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::task]
async fn blink_task(mut led: Output<'static>) {
    loop {
        info!("high");
        led.set_high();
        Timer::after_millis(500).await;

        info!("low");
        led.set_low();
        Timer::after_millis(500).await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());

    info!("Hello World!");

    let north_led = Output::new(p.PE9, Level::Low, Speed::Low);

    spawner.must_spawn(blink_task(north_led));

    info!("all tasks started");
}
