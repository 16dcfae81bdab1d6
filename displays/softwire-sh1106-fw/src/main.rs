//! Softwire SH1106 demo firmware
//!
//! Drives an SH1106 OLED on an STM32F042K6 over a bit-banged I2C bus
//! (PB6 = SCL, PB7 = SDA, external pull-ups). Initializes the panel, turns
//! it on for half a second, turns it off again and releases the bus.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::Flex;
use embassy_time::{Delay, Timer};
use softwire_core::{BusTiming, ByteLink, SoftI2c};
use softwire_hal_stm32f0::OpenDrainLine;
use softwire_sh1106::{Sh1106, Sh1106Config};
use {defmt_rtt as _, panic_probe as _};

/// Time each power state is held
const HOLD_MS: u64 = 500;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Softwire SH1106 demo starting...");

    let p = embassy_stm32::init(Default::default());

    let scl = OpenDrainLine::new(Flex::new(p.PB6));
    let sda = OpenDrainLine::new(Flex::new(p.PB7));
    let timing = BusTiming::STANDARD;
    info!(
        "Bit-banged I2C: {} Hz (half period {} us)",
        timing.frequency_hz(),
        timing.half_period_us()
    );

    let bus = SoftI2c::new(sda, scl, Delay, timing);
    let mut display = Sh1106::new(bus, Sh1106Config::default());

    if let Err(e) = display.init() {
        error!("Failed to initialize display: {:?}", e);
        display.deinit();
        return;
    }
    info!("OLED at {=u8:#x} initialized", display.config().address);

    Timer::after_millis(HOLD_MS).await;

    // On, hold, off
    toggle(&mut display);
    Timer::after_millis(HOLD_MS).await;
    toggle(&mut display);

    let bus = display.deinit();
    let (_sda, _scl, _delay) = bus.free();
    info!("Bus released");
}

fn toggle<L: ByteLink>(display: &mut Sh1106<L>) {
    match display.toggle() {
        Ok(state) => info!("Display {:?}", state),
        Err(e) => warn!("Toggle failed: {:?}", e),
    }
}
