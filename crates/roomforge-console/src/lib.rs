//! Colorful console output for assignment runs.
//!
//! Provides a `tracing` layer that formats engine events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (run and phase start/end, trolley allocation)
//! - **WARN**: Data-quality problems in the input
//! - **DEBUG**: Accepted placements and moves
//! - **TRACE**: Individual candidate evaluations

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Directive used when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVE: &str = "roomforge_solver=info";

/// Targets whose events this layer prints.
const TARGETS: [&str; 3] = ["roomforge_solver", "roomforge_core", "roomforge::"];

/// Initializes console output on stderr.
///
/// Safe to call multiple times - only the first call has effect. If another
/// global subscriber is already installed, it is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::builder().from_env_lossy();
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
            if let Ok(directive) = DEFAULT_DIRECTIVE.parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
            if let Ok(directive) = "roomforge_core=warn".parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RoomForgeConsoleLayer)
            .try_init();
    });
}

fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

/// A tracing layer that formats engine events with colors.
///
/// Output goes to stderr so that JSON written to stdout stays clean.
pub struct RoomForgeConsoleLayer;

impl<S: Subscriber> Layer<S> for RoomForgeConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        if !TARGETS.iter().any(|t| target.starts_with(t)) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    phase: Option<String>,
    unit: Option<String>,
    from: Option<String>,
    to: Option<String>,
    phase_index: Option<u64>,
    steps: Option<u64>,
    step: Option<u64>,
    speed: Option<u64>,
    duration_ms: Option<u64>,
    room: Option<u64>,
    employee_count: Option<u64>,
    task_count: Option<u64>,
    unit_count: Option<u64>,
    granted: Option<u64>,
    candidates: Option<u64>,
    spread: Option<f64>,
    score: Option<f64>,
    cost: Option<f64>,
    too_many_trolleys: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "message" => self.message = Some(s),
            "phase" => self.phase = Some(s),
            "unit" => self.unit = Some(s),
            "from" => self.from = Some(s),
            "to" => self.to = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "phase_index" => self.phase_index = Some(value),
            "steps" => self.steps = Some(value),
            "step" => self.step = Some(value),
            "speed" => self.speed = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "room" => self.room = Some(value),
            "employee_count" => self.employee_count = Some(value),
            "task_count" => self.task_count = Some(value),
            "unit_count" => self.unit_count = Some(value),
            "granted" => self.granted = Some(value),
            "candidates" => self.candidates = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "spread" => self.spread = Some(value),
            "score" => self.score = Some(value),
            "cost" => self.cost = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "too_many_trolleys" {
            self.too_many_trolleys = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "phase" => self.phase = Some(value.to_string()),
            "unit" => self.unit = Some(value.to_string()),
            "from" => self.from = Some(value.to_string()),
            "to" => self.to = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    if level == Level::WARN || level == Level::ERROR {
        return format_warning(v, level);
    }

    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "phase_start" => format_phase_start(v),
        "phase_end" => format_phase_end(v),
        "step" => format_step(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let employees = v.employee_count.unwrap_or(0);
    let tasks = v.task_count.unwrap_or(0);

    format!(
        "{} {} Assigning │ {} employees │ {} room tasks",
        format_elapsed(),
        "▶".bright_green().bold(),
        employees.to_formatted_string(&Locale::en).bright_yellow(),
        tasks.to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let units = v.unit_count.unwrap_or(0);
    let tasks = v.task_count.unwrap_or(0);
    let spread = v.spread.unwrap_or(0.0);

    let trolleys = if v.too_many_trolleys.unwrap_or(false) {
        "trolleys short".bright_red().bold().to_string()
    } else {
        "trolleys ok".bright_green().bold().to_string()
    };

    format!(
        "{} {} Assignment complete │ {} units │ {} tasks │ spread {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        units.to_formatted_string(&Locale::en).white(),
        tasks.to_formatted_string(&Locale::en).white(),
        format_minutes(spread),
        trolleys,
    )
}

fn format_phase_start(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");

    format!(
        "{} {} {} started",
        format_elapsed(),
        "▶".bright_blue(),
        phase.white().bold()
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    let steps = v.steps.unwrap_or(0);
    let speed = v.speed.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    let mut output = format!(
        "{} {} {} ended │ {} │ {} steps │ {} moves/s",
        format_elapsed(),
        "◀".bright_blue(),
        phase.white().bold(),
        format_duration_ms(duration).yellow(),
        steps.to_formatted_string(&Locale::en).white(),
        speed.to_formatted_string(&Locale::en).bright_magenta().bold(),
    );

    if let Some(spread) = v.spread {
        output.push_str(&format!(" │ spread {}", format_minutes(spread)));
    }

    output
}

fn format_step(v: &EventVisitor, level: Level) -> String {
    if level != Level::DEBUG {
        return String::new();
    }

    let step = v.step.unwrap_or(0);
    let room = v.room.unwrap_or(0);
    let detail = match (&v.unit, &v.from, &v.to) {
        (Some(unit), _, _) => format!("→ {}", unit),
        (None, Some(from), Some(to)) => format!("{} → {}", from, to),
        _ => String::new(),
    };

    format!(
        "{} {} Step {:>6} │ Room {:>4} │ {}",
        format_elapsed(),
        "✓".bright_green(),
        step.to_formatted_string(&Locale::en).bright_black(),
        room.bright_black(),
        detail.bright_black(),
    )
}

fn format_warning(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("warning");
    let icon = if level == Level::ERROR { "✗" } else { "!" };
    let mut output = format!(
        "{} {} {}",
        format_elapsed(),
        icon.bright_red().bold(),
        event.yellow(),
    );
    if let Some(room) = v.room {
        output.push_str(&format!(" │ room {}", room));
    }
    if let Some(ref message) = v.message {
        output.push_str(&format!(" │ {}", message));
    }
    output
}

fn format_minutes(minutes: f64) -> String {
    let text = format!("{:.1} min", minutes);
    if minutes <= 15.0 {
        text.bright_green().to_string()
    } else if minutes <= 30.0 {
        text.yellow().to_string()
    } else {
        text.bright_red().to_string()
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(s: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in s.chars() {
            match (in_escape, c) {
                (false, '\u{1b}') => in_escape = true,
                (true, 'm') => in_escape = false,
                (true, _) => {}
                (false, c) => out.push(c),
            }
        }
        out
    }

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration_ms(42), "42ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_phase_end_line() {
        let v = EventVisitor {
            event: Some("phase_end".to_string()),
            phase: Some("ConstrainedBalance".to_string()),
            steps: Some(1200),
            speed: Some(5000),
            duration_ms: Some(12),
            spread: Some(8.5),
            ..EventVisitor::default()
        };
        let line = strip(&format_event(&v, Level::INFO));
        assert!(line.contains("ConstrainedBalance ended"));
        assert!(line.contains("1,200 steps"));
        assert!(line.contains("5,000 moves/s"));
        assert!(line.contains("spread 8.5 min"));
    }

    #[test]
    fn test_step_only_at_debug() {
        let v = EventVisitor {
            event: Some("step".to_string()),
            step: Some(3),
            room: Some(104),
            from: Some("Anna".to_string()),
            to: Some("Team 1".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&v, Level::TRACE).is_empty());
        let line = strip(&format_event(&v, Level::DEBUG));
        assert!(line.contains("Room  104"));
        assert!(line.contains("Anna → Team 1"));
    }

    #[test]
    fn test_warning_line() {
        let v = EventVisitor {
            event: Some("missing_corridor".to_string()),
            room: Some(501),
            message: Some("no corridor for room".to_string()),
            ..EventVisitor::default()
        };
        let line = strip(&format_event(&v, Level::WARN));
        assert!(line.contains("missing_corridor"));
        assert!(line.contains("room 501"));
        assert!(line.contains("no corridor for room"));
    }

    #[test]
    fn test_unknown_events_are_silent() {
        let v = EventVisitor {
            event: Some("candidate".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&v, Level::TRACE).is_empty());
    }
}
