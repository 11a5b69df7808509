//! Guided Breathing Session
//!
//! This demo plays the part of the screen and the animation driver around a
//! session machine.
//!
//! Key concepts:
//! - The machine never keeps time; a simulated animation reports progress
//! - `CycleSignal` turns progress reaching 1.0 into `RepetitionElapsed`
//! - A renderer observer derives everything it shows from `Presentation`
//! - The single action button pauses, resumes and restarts
//!
//! Run with: RUST_LOG=breathwork=debug cargo run --example guided_session

use breathwork::core::{Event, Session};
use breathwork::driver::CycleSignal;
use breathwork::machine::SessionMachine;
use breathwork::presentation::{BreathCue, Presentation};
use breathwork::BuildError;
use tracing_subscriber::EnvFilter;

const FRAMES_PER_CYCLE: u32 = 4;

fn render(session: &Session) {
    let view = Presentation::from(session);
    println!(
        "  [{:>16}] animation: {:?}, button: {} ({:?})",
        view.repetition.to_string(),
        view.animation,
        view.action.label(),
        view.action.icon()
    );
}

/// Advance the animation by one cycle, pushing completion into the machine.
fn play_cycle(machine: &SessionMachine, signal: &mut CycleSignal) {
    for frame in 0..=FRAMES_PER_CYCLE {
        let progress = frame as f32 / FRAMES_PER_CYCLE as f32;
        println!(
            "    {:<7} x{:.2}",
            BreathCue::at(progress).label(),
            BreathCue::scale(progress)
        );
        if let Some(event) = signal.observe(progress) {
            machine.submit(event);
        }
    }
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Guided Breathing Session ===\n");

    let machine = SessionMachine::builder().total(3).build()?;
    println!("Initial state: {}", machine.current_state());
    render(&machine.current_state());

    let renderer = machine.subscribe(render);
    let mut signal = CycleSignal::new();

    println!("\nPress: start");
    machine.submit(Event::ToggleRun);
    play_cycle(&machine, &mut signal);

    println!("\nPress: pause");
    machine.submit(Event::ToggleRun);

    println!("\nLate animation frame while paused (ignored)");
    signal.reset();
    if let Some(event) = signal.observe(1.0) {
        machine.submit(event);
    }

    println!("\nPress: resume");
    machine.submit(Event::ToggleRun);
    while !machine.is_final() {
        play_cycle(&machine, &mut signal);
    }

    println!("\nPress: restart");
    machine.submit(Event::ToggleRun);

    machine.unsubscribe(renderer);
    println!("\nFinal state: {}", machine.current_state());

    println!("\n=== Demo Complete ===");
    Ok(())
}
