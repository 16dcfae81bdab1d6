//! Byte-level link mock for host tests

use softwire_core::{BusError, ByteLink};

use crate::cmd;

/// One call the driver made on the link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEvent {
    Claim,
    /// Byte put on the wire, whether or not it was acknowledged
    Byte(u8),
    Release,
}

/// Decoded view of the byte stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Address(u8),
    Command(u8),
    Data(u8),
}

/// Link that ACKs every byte except, optionally, the n-th write
#[derive(Debug, Default)]
pub struct MockLink {
    events: Vec<LinkEvent>,
    writes: usize,
    nack_at: Option<usize>,
}

impl MockLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// NACK the write with this zero-based index (counted across the link's lifetime)
    pub fn nack_at(index: usize) -> Self {
        Self {
            nack_at: Some(index),
            ..Self::default()
        }
    }

    pub fn events(&self) -> &[LinkEvent] {
        &self.events
    }

    /// Decode the byte stream into address, command and data frames
    ///
    /// A control byte whose payload never made it onto the wire is dropped.
    pub fn frames(&self) -> Vec<Frame> {
        let mut frames = Vec::new();
        let mut expect_address = false;
        let mut control = None;

        for event in &self.events {
            match *event {
                LinkEvent::Claim => {
                    expect_address = true;
                    control = None;
                }
                LinkEvent::Release => control = None,
                LinkEvent::Byte(byte) if expect_address => {
                    frames.push(Frame::Address(byte));
                    expect_address = false;
                }
                LinkEvent::Byte(byte) => match control.take() {
                    None => control = Some(byte),
                    Some(cmd::CONTROL_COMMAND) => frames.push(Frame::Command(byte)),
                    Some(cmd::CONTROL_DATA) => frames.push(Frame::Data(byte)),
                    Some(other) => panic!("unexpected control byte {other:#04x}"),
                },
            }
        }

        frames
    }

    pub fn commands(&self) -> Vec<u8> {
        self.frames()
            .into_iter()
            .filter_map(|f| match f {
                Frame::Command(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    pub fn data_count(&self) -> usize {
        self.frames()
            .iter()
            .filter(|f| matches!(f, Frame::Data(_)))
            .count()
    }

    pub fn count(&self, event: LinkEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }
}

impl ByteLink for MockLink {
    fn claim(&mut self) {
        self.events.push(LinkEvent::Claim);
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), BusError> {
        self.events.push(LinkEvent::Byte(byte));
        let index = self.writes;
        self.writes += 1;

        if self.nack_at == Some(index) {
            Err(BusError::Nack(byte))
        } else {
            Ok(())
        }
    }

    fn release(&mut self) {
        self.events.push(LinkEvent::Release);
    }
}
