//! Shared fixtures: pins and delay that record onto one timeline.

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

use stepper_singer::{Direction, StepMode, StepperEngine, StepperEngineBuilder};

/// One physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// Winding by role index (A = 0 .. D = 3).
    Winding(usize),
    /// H-bridge enable.
    Enable,
}

/// Something that happened on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    High(Line),
    Low(Line),
    DelayUs(u32),
}

#[derive(Default)]
struct Timeline {
    events: Vec<Event>,
    fail_high: Option<Line>,
}

/// Shared event log for every pin and the delay.
#[derive(Clone, Default)]
pub struct Bus(Rc<RefCell<Timeline>>);

impl Bus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().events.clear();
    }

    /// Make every `set_high` on `line` fail from now on.
    pub fn fail_high(&self, line: Line) {
        self.0.borrow_mut().fail_high = Some(line);
    }

    /// Current level of every line, windings A..D then enable.
    pub fn levels(&self) -> [bool; 5] {
        let mut levels = [false; 5];
        for event in self.0.borrow().events.iter() {
            match *event {
                Event::High(line) => levels[slot(line)] = true,
                Event::Low(line) => levels[slot(line)] = false,
                Event::DelayUs(_) => {}
            }
        }
        levels
    }

    /// Windings pulsed, in order, taken from their rising edges.
    pub fn pulsed_windings(&self) -> Vec<usize> {
        self.0
            .borrow()
            .events
            .iter()
            .filter_map(|e| match e {
                Event::High(Line::Winding(i)) => Some(*i),
                _ => None,
            })
            .collect()
    }

    pub fn pin(&self, line: Line) -> RecordingPin {
        RecordingPin {
            line,
            bus: self.clone(),
        }
    }

    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay { bus: self.clone() }
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().events.push(event);
    }
}

fn slot(line: Line) -> usize {
    match line {
        Line::Winding(i) => i,
        Line::Enable => 4,
    }
}

#[derive(Debug)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct RecordingPin {
    line: Line,
    bus: Bus,
}

impl ErrorType for RecordingPin {
    type Error = PinFault;
}

impl OutputPin for RecordingPin {
    fn set_high(&mut self) -> Result<(), PinFault> {
        if self.bus.0.borrow().fail_high == Some(self.line) {
            return Err(PinFault);
        }
        self.bus.push(Event::High(self.line));
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), PinFault> {
        self.bus.push(Event::Low(self.line));
        Ok(())
    }
}

pub struct RecordingDelay {
    bus: Bus,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.bus.push(Event::DelayUs(ns / 1000));
    }

    fn delay_us(&mut self, us: u32) {
        self.bus.push(Event::DelayUs(us));
    }
}

pub type RecordingEngine = StepperEngine<RecordingPin, RecordingPin, RecordingDelay>;

pub fn recording_engine(bus: &Bus, max_position: u32, mode: StepMode) -> RecordingEngine {
    builder(bus, max_position, mode).build().unwrap()
}

pub fn recording_engine_at(
    bus: &Bus,
    max_position: u32,
    position: u32,
    phase: u8,
    direction: Direction,
) -> RecordingEngine {
    builder(bus, max_position, StepMode::Wave)
        .start_at(position, phase, direction)
        .build()
        .unwrap()
}

fn builder(
    bus: &Bus,
    max_position: u32,
    mode: StepMode,
) -> StepperEngineBuilder<RecordingPin, RecordingPin, RecordingDelay> {
    StepperEngineBuilder::new()
        .windings([
            bus.pin(Line::Winding(0)),
            bus.pin(Line::Winding(1)),
            bus.pin(Line::Winding(2)),
            bus.pin(Line::Winding(3)),
        ])
        .enable_pin(bus.pin(Line::Enable))
        .delay(bus.delay())
        .max_position(max_position)
        .step_mode(mode)
}

/// Pin that accepts everything, for tests that only look at motor state.
pub struct NullPin;

impl ErrorType for NullPin {
    type Error = Infallible;
}

impl OutputPin for NullPin {
    fn set_high(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

pub struct NullDelay;

impl DelayNs for NullDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

pub type NullEngine = StepperEngine<NullPin, NullPin, NullDelay>;

pub fn null_engine_at(
    max_position: u32,
    position: u32,
    phase: u8,
    direction: Direction,
) -> NullEngine {
    StepperEngineBuilder::new()
        .windings([NullPin, NullPin, NullPin, NullPin])
        .enable_pin(NullPin)
        .delay(NullDelay)
        .max_position(max_position)
        .start_at(position, phase, direction)
        .build()
        .unwrap()
}
