//! Cycle report for pomodoro-fsm
//!
//! Simulates the timer at 10 Hz through a few scripted sessions and writes
//! every phase change, with its wall-clock offset and LED pattern, to a
//! Markdown report. Run it to see the exact timing the firmware produces.
//!
//! Usage:
//!   cd tools/cycle-report
//!   cargo run --release
//!   cat report.md

use pomodoro_fsm::timing::{
    IDLE_TIMEOUT_SECS, LONG_BREAK_SECS, PREPARE_SECS, SHORT_BREAK_SECS, WORK_SECS,
};
use pomodoro_fsm::{Controller, Indication, PendingFlag, Phase, PowerMode, TICK_HZ};
use std::fs::File;
use std::io::Write;

// ============================================================================
// Scripted sessions
// ============================================================================

/// A button press at a given second after power-up
#[derive(Debug, Clone, Copy)]
struct Press {
    at_second: u32,
}

/// A named sequence of button presses to simulate
struct Session {
    name: &'static str,
    description: &'static str,
    presses: &'static [Press],
    duration_secs: u32,
}

const SESSIONS: &[Session] = &[
    Session {
        name: "Unattended",
        description: "Nobody touches the button after power-up.",
        presses: &[],
        duration_secs: 10 * 60,
    },
    Session {
        name: "Short break",
        description: "Start working, take the break when prompted, resume when prompted.",
        presses: &[
            Press { at_second: 5 },
            Press { at_second: 1500 },
            Press { at_second: 1800 },
        ],
        duration_secs: 45 * 60,
    },
    Session {
        name: "Early break, long break",
        description: "Skip the prepare window, then extend the break to a long one.",
        presses: &[
            Press { at_second: 5 },
            Press { at_second: 1400 },
            Press { at_second: 1410 },
        ],
        duration_secs: 60 * 60,
    },
];

/// One row of the timeline
struct Change {
    tick: u64,
    from: Phase,
    to: Phase,
    by_button: bool,
    indication: Indication,
}

// ============================================================================
// Simulation
// ============================================================================

fn simulate(session: &Session) -> Vec<Change> {
    let button = PendingFlag::new();
    let mut controller = Controller::new();
    let mut changes = Vec::new();

    let total_ticks = u64::from(session.duration_secs) * u64::from(TICK_HZ);
    let mut presses = session.presses.iter().peekable();

    for tick in 0..total_ticks {
        let mut pressed_now = false;
        while let Some(press) = presses.peek() {
            if u64::from(press.at_second) * u64::from(TICK_HZ) != tick {
                break;
            }
            button.raise();
            pressed_now = true;
            presses.next();
        }

        let from = controller.phase();
        let indication = controller.tick(&button);
        let to = controller.phase();

        if from != to {
            // A press is only credited when the table has an effect for it.
            let by_button = pressed_now && from.on_button() == Some(to);
            changes.push(Change {
                tick: tick + 1,
                from,
                to,
                by_button,
                indication,
            });
        }
    }

    changes
}

// ============================================================================
// Report
// ============================================================================

fn format_offset(tick: u64) -> String {
    let tenths = tick % u64::from(TICK_HZ);
    let seconds = tick / u64::from(TICK_HZ);
    format!("{:02}:{:02}.{}", seconds / 60, seconds % 60, tenths)
}

fn format_led(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

fn write_header(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "# Pomodoro Cycle Report")?;
    writeln!(f)?;
    writeln!(
        f,
        "Generated: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(f)?;
    Ok(())
}

fn write_constants(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "## Constants")?;
    writeln!(f)?;
    writeln!(f, "| Constant | Value |")?;
    writeln!(f, "|----------|-------|")?;
    writeln!(f, "| Tick rate | {} Hz |", TICK_HZ)?;
    writeln!(f, "| Work | {} s |", WORK_SECS)?;
    writeln!(f, "| Prepare window | {} s |", PREPARE_SECS)?;
    writeln!(f, "| Short break | {} s |", SHORT_BREAK_SECS)?;
    writeln!(f, "| Long break | {} s |", LONG_BREAK_SECS)?;
    writeln!(f, "| Idle timeout | {} s |", IDLE_TIMEOUT_SECS)?;
    writeln!(f)?;

    writeln!(f, "## Phase Limits")?;
    writeln!(f)?;
    writeln!(f, "| Phase | Button | Times out after | Then |")?;
    writeln!(f, "|-------|--------|-----------------|------|")?;
    for phase in Phase::ALL {
        let button = match phase.on_button() {
            Some(next) => format!("{:?}", next),
            None => "-".to_string(),
        };
        let limit = match phase.timeout_after() {
            Some(limit) => format!("{} s", limit + 1),
            None => "1 tick".to_string(),
        };
        writeln!(
            f,
            "| `{:?}` | {} | {} | `{:?}` |",
            phase,
            button,
            limit,
            phase.on_timeout()
        )?;
    }
    writeln!(f)?;
    Ok(())
}

fn write_session(f: &mut File, session: &Session, changes: &[Change]) -> std::io::Result<()> {
    writeln!(f, "## Session: {}", session.name)?;
    writeln!(f)?;
    writeln!(f, "{}", session.description)?;
    writeln!(f)?;

    if !session.presses.is_empty() {
        let presses: Vec<String> = session
            .presses
            .iter()
            .map(|p| format_offset(u64::from(p.at_second) * u64::from(TICK_HZ)))
            .collect();
        writeln!(f, "Button presses at: {}", presses.join(", "))?;
        writeln!(f)?;
    }

    writeln!(f, "| Time | From | To | Cause | Red | Green | Sleep |")?;
    writeln!(f, "|------|------|----|-------|-----|-------|-------|")?;
    for change in changes {
        let cause = if change.by_button { "button" } else { "timeout" };
        let sleep = match change.indication.power {
            PowerMode::WakeOnTick => "light",
            PowerMode::WakeOnButton => "deep",
        };
        writeln!(
            f,
            "| {} | `{:?}` | `{:?}` | {} | {} | {} | {} |",
            format_offset(change.tick),
            change.from,
            change.to,
            cause,
            format_led(change.indication.red),
            format_led(change.indication.green),
            sleep
        )?;
    }
    writeln!(f)?;
    Ok(())
}

fn main() -> std::io::Result<()> {
    let report_path = "report.md";

    // Remove old report if it exists
    let _ = std::fs::remove_file(report_path);

    let mut file = File::create(report_path)?;

    println!("Simulating {} sessions...", SESSIONS.len());

    write_header(&mut file)?;
    write_constants(&mut file)?;

    for session in SESSIONS {
        let changes = simulate(session);
        println!("  {}: {} phase changes", session.name, changes.len());
        write_session(&mut file, session, &changes)?;
    }

    println!("Report written to {}", report_path);
    Ok(())
}
