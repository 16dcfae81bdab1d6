//! Recording pins and delay for host tests
//!
//! Both pins and the delay write into one shared [`Wire`], so tests can
//! assert on the exact interleaving of direction changes, level changes,
//! samples and delays.

use core::cell::RefCell;
use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use softwire_hal::FlexPin;

use crate::{BusTiming, SoftI2c};

/// Which bus line an event happened on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Sda,
    Scl,
}

/// One observable action by the master
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Input(Line),
    Output(Line),
    Level(Line, bool),
    Sample(Line, bool),
    Delay(u32),
}

/// Shared event log plus the levels a simulated slave drives on SDA
#[derive(Debug, Default)]
pub struct Wire {
    events: Vec<Event>,
    /// Consumed one per SDA sample; an empty queue reads low (ACK)
    responses: VecDeque<bool>,
}

impl Wire {
    pub fn new() -> RefCell<Self> {
        RefCell::new(Self::default())
    }

    /// Queue levels for upcoming SDA samples
    pub fn respond(&mut self, levels: &[bool]) {
        self.responses.extend(levels.iter().copied());
    }

    /// Queue the 8 bits of `byte`, MSB first
    pub fn respond_byte(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            self.responses.push_back((byte >> bit) & 1 == 1);
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn count(&self, event: Event) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }

    /// Bits the master clocked out to the slave
    ///
    /// A bit is the latched SDA level at an SCL rising edge, counted only
    /// when SDA was an output at that edge and SCL later fell again. This
    /// skips acknowledgment reads (SDA is an input) and the release
    /// sequence (SCL is raised, then handed to the pull-up).
    pub fn clocked_bits(&self) -> Vec<bool> {
        let mut bits = Vec::new();
        let mut sda_level = true;
        let mut sda_output = false;
        let mut pending: Option<Option<bool>> = None;

        for event in &self.events {
            match *event {
                Event::Level(Line::Sda, level) => sda_level = level,
                Event::Output(Line::Sda) => sda_output = true,
                Event::Input(Line::Sda) => sda_output = false,
                Event::Input(Line::Scl) => pending = None,
                Event::Level(Line::Scl, true) => {
                    pending = Some(sda_output.then_some(sda_level));
                }
                Event::Level(Line::Scl, false) => {
                    if let Some(Some(bit)) = pending.take() {
                        bits.push(bit);
                    }
                }
                _ => {}
            }
        }

        bits
    }

    /// Clocked bits grouped into bytes, MSB first
    pub fn clocked_bytes(&self) -> Vec<u8> {
        self.clocked_bits()
            .chunks_exact(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8))
            .collect()
    }

    fn record(&mut self, event: Event) {
        self.events.push(event);
    }
}

pub struct MockPin<'a> {
    line: Line,
    wire: &'a RefCell<Wire>,
}

impl FlexPin for MockPin<'_> {
    fn set_as_input(&mut self) {
        self.wire.borrow_mut().record(Event::Input(self.line));
    }

    fn set_as_output(&mut self) {
        self.wire.borrow_mut().record(Event::Output(self.line));
    }

    fn set_high(&mut self) {
        self.wire.borrow_mut().record(Event::Level(self.line, true));
    }

    fn set_low(&mut self) {
        self.wire.borrow_mut().record(Event::Level(self.line, false));
    }

    fn is_high(&mut self) -> bool {
        let mut wire = self.wire.borrow_mut();
        let level = wire.responses.pop_front().unwrap_or(false);
        wire.record(Event::Sample(self.line, level));
        level
    }
}

pub struct MockDelay<'a> {
    wire: &'a RefCell<Wire>,
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.wire.borrow_mut().record(Event::Delay(ns / 1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.wire.borrow_mut().record(Event::Delay(us));
    }
}

pub type MockBus<'a> = SoftI2c<MockPin<'a>, MockPin<'a>, MockDelay<'a>>;

/// Timing with distinct values so tests can tell the delays apart
pub const TEST_TIMING: BusTiming = BusTiming::new(3, 7);

pub fn sda_pin(wire: &RefCell<Wire>) -> MockPin<'_> {
    MockPin {
        line: Line::Sda,
        wire,
    }
}

pub fn scl_pin(wire: &RefCell<Wire>) -> MockPin<'_> {
    MockPin {
        line: Line::Scl,
        wire,
    }
}

pub fn delay(wire: &RefCell<Wire>) -> MockDelay<'_> {
    MockDelay { wire }
}

/// Build a bus on `wire` and drop the construction events from the log
pub fn bus(wire: &RefCell<Wire>) -> MockBus<'_> {
    let bus = SoftI2c::new(sda_pin(wire), scl_pin(wire), delay(wire), TEST_TIMING);
    wire.borrow_mut().clear();
    bus
}
