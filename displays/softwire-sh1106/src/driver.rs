//! SH1106 display session
//!
//! [`Sh1106`] owns the link and the display's power state. Each operation
//! that talks to the controller runs as its own transaction (claim, address,
//! payload, release), so the bus is idle between operations and after any
//! failure.

use softwire_core::{ByteLink, Transaction};

use crate::addressing;
use crate::cmd::{self, value};
use crate::config::Sh1106Config;
use crate::error::DisplayError;
use crate::protocol::{clear_display, send_command, send_double_command, set_cursor};

/// Display power state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    #[default]
    Off,
    On,
}

impl PowerState {
    /// The opposite state
    pub fn toggled(self) -> Self {
        match self {
            PowerState::Off => PowerState::On,
            PowerState::On => PowerState::Off,
        }
    }

    pub fn is_on(self) -> bool {
        self == PowerState::On
    }

    /// Command byte that puts the panel into this state
    pub fn command(self) -> u8 {
        match self {
            PowerState::Off => cmd::DISPLAY_OFF,
            PowerState::On => cmd::DISPLAY_ON,
        }
    }
}

/// SH1106 driver over a byte link
pub struct Sh1106<L> {
    link: L,
    config: Sh1106Config,
    power: PowerState,
}

impl<L: ByteLink> Sh1106<L> {
    /// Create a driver; nothing is sent until [`init`](Self::init)
    pub fn new(link: L, config: Sh1106Config) -> Self {
        Self {
            link,
            config,
            power: PowerState::Off,
        }
    }

    /// Power state as of the last successful on/off command
    pub fn power_state(&self) -> PowerState {
        self.power
    }

    pub fn config(&self) -> &Sh1106Config {
        &self.config
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    /// Configure the controller and blank its RAM
    ///
    /// The panel is left off. Stops at the first byte the controller does
    /// not acknowledge. Once the display-off command is acknowledged the
    /// stored state is `Off`, even if a later step fails.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.with_transaction("init", |link, config, power| {
            send_double_command(link, cmd::SET_MULTIPLEX_RATIO, config.multiplex_ratio)?;
            send_double_command(link, cmd::SET_COM_PINS, config.com_pins)?;
            send_command(link, PowerState::Off.command())?;
            *power = PowerState::Off;
            send_double_command(link, cmd::SET_CHARGE_PUMP, value::CHARGE_PUMP_ON)?;
            let segments = if config.mirror_x {
                cmd::SET_SEG_REMAP
            } else {
                cmd::SET_SEG_NORMAL
            };
            send_command(link, segments)?;
            send_command(link, cmd::SET_NORMAL)?;
            clear_display(link)
        })?;

        #[cfg(feature = "defmt")]
        defmt::info!("SH1106 at {=u8:#x} initialized", self.config.address);

        Ok(())
    }

    /// Zero the whole display RAM
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.with_transaction("clear", |link, _, _| clear_display(link))
    }

    /// Move the write position to `column` within `page`
    ///
    /// Out-of-range indices are rejected without touching the bus.
    pub fn set_cursor(&mut self, page: u8, column: u8) -> Result<(), DisplayError> {
        addressing::page_address(page)?;
        addressing::lower_column_address(column)?;

        self.with_transaction("set_cursor", |link, _, _| set_cursor(link, page, column))
    }

    /// Flip the panel on or off and return the new state
    ///
    /// The stored state only changes once the controller has acknowledged
    /// the command.
    pub fn toggle(&mut self) -> Result<PowerState, DisplayError> {
        let next = self.power.toggled();
        self.set_power(next)?;
        Ok(next)
    }

    /// Switch the panel to an explicit power state
    pub fn set_power(&mut self, state: PowerState) -> Result<(), DisplayError> {
        self.with_transaction("set_power", |link, _, power| {
            send_command(link, state.command())?;
            *power = state;
            Ok(())
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!("SH1106 power {}", state);

        Ok(())
    }

    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.with_transaction("set_contrast", |link, _, _| {
            send_double_command(link, cmd::SET_CONTRAST, contrast)?;
            Ok(())
        })
    }

    /// Invert (`true`) or restore (`false`) the pixel polarity
    pub fn set_reversed(&mut self, reversed: bool) -> Result<(), DisplayError> {
        let command = if reversed {
            cmd::SET_INVERSE
        } else {
            cmd::SET_NORMAL
        };

        self.with_transaction("set_reversed", |link, _, _| {
            send_command(link, command)?;
            Ok(())
        })
    }

    pub fn set_charge_pump(&mut self, enabled: bool) -> Result<(), DisplayError> {
        let mode = if enabled {
            value::CHARGE_PUMP_ON
        } else {
            value::CHARGE_PUMP_OFF
        };

        self.with_transaction("set_charge_pump", |link, _, _| {
            send_double_command(link, cmd::SET_CHARGE_PUMP, mode)?;
            Ok(())
        })
    }

    /// Release the bus and give the link back
    pub fn deinit(mut self) -> L {
        self.link.release();
        self.link
    }

    /// Run `f` inside one addressed transaction
    ///
    /// `f` may update the power state as soon as the matching command has
    /// been acknowledged. The bus is released before the result is returned.
    fn with_transaction<T, F>(&mut self, operation: &'static str, f: F) -> Result<T, DisplayError>
    where
        F: FnOnce(&mut L, &Sh1106Config, &mut PowerState) -> Result<T, DisplayError>,
    {
        let config = &self.config;
        let power = &mut self.power;
        let result = Transaction::begin_write(&mut self.link, config.address)
            .map_err(DisplayError::from)
            .and_then(|mut txn| f(&mut *txn, config, power));

        if let Err(err) = &result {
            log_failure(operation, err);
        }

        result
    }
}

fn log_failure(operation: &str, err: &DisplayError) {
    #[cfg(feature = "defmt")]
    defmt::error!("SH1106 {} failed: {}", operation, err);

    #[cfg(not(feature = "defmt"))]
    let _ = (operation, err);
}
