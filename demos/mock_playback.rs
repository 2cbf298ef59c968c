//! Play a short tune on simulated pins.
//!
//! Prints each pin edge instead of driving hardware, then shows the plan the
//! `--dry-run` flag of the player binary would print.

use stepper_singer::{plan, Micros, Note, NotePlayer, PlayerConfig, StepperEngineBuilder};

/// Delay provider that only reports how long it would sleep.
struct PrintDelay;

impl embedded_hal::delay::DelayNs for PrintDelay {
    fn delay_ns(&mut self, ns: u32) {
        println!("    sleep {} us", ns / 1000);
    }
}

/// Output pin that prints its transitions.
struct PrintPin {
    name: &'static str,
}

impl embedded_hal::digital::ErrorType for PrintPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for PrintPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        println!("  {} high", self.name);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        println!("  {} low", self.name);
        Ok(())
    }
}

fn main() {
    println!("=== Mock Playback Example ===\n");

    let config = PlayerConfig {
        max_position: 8,
        ..PlayerConfig::default()
    };

    // A4, B4, a rest with no pitch, then C#5
    let notes = [
        Note::new(0, 440, 10_000),
        Note::new(2_000, 494, 10_000),
        Note::new(0, 0, 5_000),
        Note::new(0, 554, 10_000),
    ];

    println!("Plan:");
    for planned in plan(&notes, &config).expect("valid config") {
        match planned {
            Ok(p) => println!(
                "  note {}: {} steps of {} us, {} -> {}",
                p.index,
                p.timing.steps,
                p.timing.delay.value(),
                p.start_position,
                p.end_position
            ),
            Err(e) => println!("  {}", e),
        }
    }

    let engine = StepperEngineBuilder::new()
        .from_config(&config)
        .windings([
            PrintPin { name: "A" },
            PrintPin { name: "B" },
            PrintPin { name: "C" },
            PrintPin { name: "D" },
        ])
        .enable_pin(PrintPin { name: "EN" })
        .delay(PrintDelay)
        .build()
        .expect("Failed to build engine");

    println!("\nPlayback:");
    let mut player = NotePlayer::new(engine, Micros(76));
    let report = player.play_all(&notes).expect("mock pins never fail");

    println!(
        "\nPlayed {} notes ({} skipped), {} steps, ended at position {}",
        report.played,
        report.skipped,
        report.steps,
        player.engine().state().position()
    );
}
