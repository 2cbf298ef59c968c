//! Play a binary note file on a stepper motor wired to Raspberry Pi GPIO.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use rppal::gpio::{Gpio, OutputPin};
use rppal::hal::Delay;

use stepper_singer::{
    load_config, load_notes, plan, Direction, Note, NotePlayer, PlayerConfig, StepperEngineBuilder,
};

#[derive(Parser, Debug)]
#[command(
    name = "stepper-player",
    version,
    about = "Sing a note file on a stepper motor"
)]
struct Args {
    /// Binary note file (12-byte pause/frequency/duration records)
    #[arg(value_name = "NOTE_FILE")]
    notes: PathBuf,

    /// Player configuration (TOML); built-in wiring and calibration otherwise
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the step plan without touching GPIO
    #[arg(long = "dry-run")]
    dry_run: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    // Everything that can fail on input is checked before any pin is claimed.
    let notes = load_notes(&args.notes)
        .with_context(|| format!("Error loading file \"{}\"", args.notes.display()))?;

    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Error loading config \"{}\"", path.display()))?,
        None => PlayerConfig::default(),
    };
    debug!("{:?}", config);

    if args.dry_run {
        return print_plan(&notes, &config);
    }

    info!("Playing {} notes", notes.len());

    let gpio = Gpio::new().context("Error opening GPIO")?;
    let output = |pin: u8| -> anyhow::Result<OutputPin> {
        let pin = gpio
            .get(pin)
            .with_context(|| format!("Error claiming GPIO {}", pin))?;
        Ok(pin.into_output_low())
    };

    let [a, b, c, d] = config.pins.windings();
    let engine = StepperEngineBuilder::new()
        .from_config(&config)
        .windings([output(a)?, output(b)?, output(c)?, output(d)?])
        .enable_pin(output(config.pins.enable)?)
        .delay(Delay::new())
        .build()?;

    let mut player = NotePlayer::from_config(engine, &config);
    let report = player.play_all(&notes).context("Playback failed")?;

    if report.skipped > 0 {
        eprintln!("Skipped {} unplayable notes", report.skipped);
    }
    info!("Done: {} notes, {} steps", report.played, report.steps);

    Ok(())
}

fn print_plan(notes: &[Note], config: &PlayerConfig) -> anyhow::Result<()> {
    println!("# pause_us, steps, delay_us, direction, from, to");

    for planned in plan(notes, config)? {
        match planned {
            Ok(p) => println!(
                "{}, {}, {}, {}, {}, {}",
                p.pause.value(),
                p.timing.steps,
                p.timing.delay.value(),
                match p.direction {
                    Direction::Forward => "fwd",
                    Direction::Backward => "back",
                },
                p.start_position,
                p.end_position
            ),
            Err(e) => println!("# skipped: {}", e),
        }
    }

    Ok(())
}
