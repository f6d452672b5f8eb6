//! Prints the RP2040 on-die temperature on line 0 of a 128x64 SSD1306
//! every 300 ms. Panel SCL on GPIO17, SDA on GPIO16 (I2C0).

#![no_std]
#![no_main]

use core::fmt::Write;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Timer};
use heapless::String;
use ssd1306_text::prelude::*;
use {defmt_rtt as _, panic_probe as _};

mod timed_i2c;

use timed_i2c::TimedI2c;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => I2cInterruptHandler<I2C0>;
});

const VREF: f32 = 3.3;

/// Sensor voltage to degrees C, RP2040 datasheet 4.9.5
fn die_temperature(raw: u16) -> f32 {
    let voltage = f32::from(raw) * VREF / 4096.0;
    27.0 - (voltage - 0.706) / 0.001721
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    let bus = BusConfig::default();
    let mut config = i2c::Config::default();
    config.frequency = bus.frequency_hz;
    config.scl_pullup = true;
    config.sda_pullup = true;

    info!(
        "set up i2c at {} Hz, {} ms write timeout",
        bus.frequency_hz, bus.write_timeout_ms
    );
    let i2c = I2c::new_async(p.I2C0, p.PIN_17, p.PIN_16, Irqs, config);
    let i2c = TimedI2c::new(i2c, Duration::from_millis(u64::from(bus.write_timeout_ms)));

    let mut display = match Ssd1306::init_with_config(i2c, DisplaySize::Display128x64, &bus) {
        Ok(display) => display,
        Err(e) => defmt::panic!("display init failed: {}", Debug2Format(&e)),
    };

    let mut adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let mut sensor = Channel::new_temp_sensor(p.ADC_TEMP_SENSOR);

    if let Err(e) = display.clear() {
        warn!("clear failed: {}", Debug2Format(&e));
    }

    // the full ADC range maps to -1479.8..=437.2, at most 21 chars
    let mut line: String<CHARS_PER_LINE> = String::new();
    loop {
        match adc.blocking_read(&mut sensor) {
            Ok(raw) => {
                line.clear();
                if write!(line, "Chip Temp: {:.1} *C", die_temperature(raw)).is_err() {
                    warn!("reading {} does not fit on one line", raw);
                } else if let Err(e) = display.write_string(&line, 0, 0) {
                    warn!("write failed: {}", Debug2Format(&e));
                } else {
                    debug!("{}", line.as_str());
                }
            }
            Err(_) => warn!("ADC read error"),
        }

        Timer::after_millis(300).await;
    }
}
