#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;

use drv8711::{
    board::{Board, Spi4Bus},
    config::Config,
    drivers::drv8711::{Driver, Status},
    hw::BoardPins,
};
use stm32f7xx_hal::{pac, prelude::*};

/// Write the register table, check it took, clear stale faults and wake the chip.
fn bring_up<D: Driver<Spi4Bus>>(drv: &mut D, spi: &mut Spi4Bus) -> Result<Status, D::Error> {
    drv.init(spi)?;
    if drv.verify(spi)?.is_some() {
        // Leave the chip asleep; the register table did not stick.
        return drv.read_status(spi);
    }
    drv.clear_status(spi)?;
    drv.enable(true)?;
    drv.read_status(spi)
}

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let mut apb2 = rcc.apb2;

    // GPIO + SPI4
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);
    let mut board = Board::new(dp.SPI4, pins, &clocks, &mut apb2, Config::default());

    // Both chips share SPI4 and are brought up one after the other.
    let s1 = bring_up(&mut board.m1, &mut board.spi);
    let s2 = bring_up(&mut board.m2, &mut board.spi);

    // Any fault: put that chip back to sleep.
    if !matches!(s1, Ok(status) if !status.has_fault()) {
        let _ = Driver::<Spi4Bus>::enable(&mut board.m1, false);
    }
    if !matches!(s2, Ok(status) if !status.has_fault()) {
        let _ = Driver::<Spi4Bus>::enable(&mut board.m2, false);
    }

    loop {
        cortex_m::asm::nop();
    }
}
