/// Display bound for the source label inside the busy heading.
pub const LABEL_DISPLAY_LIMIT: usize = 30;

/// Period of the elapsed-time ticker while a gesture is in flight.
pub const TICK_PERIOD_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub target: TargetView,
    pub dirty: bool,
}

/// Render-ready projection of the drop target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetView {
    #[default]
    Idle,
    DragActive,
    Busy {
        heading: String,
        wait_line: String,
    },
}

pub(crate) fn busy_heading(label: &str) -> String {
    format!("Processing \"{}\" ...", truncate_label(label))
}

pub(crate) fn wait_line(elapsed_ms: Option<u64>) -> String {
    format!("You've waited at least {}", wait_seconds_label(elapsed_ms))
}

fn truncate_label(label: &str) -> String {
    let mut truncated: String = label.chars().take(LABEL_DISPLAY_LIMIT).collect();
    if label.chars().count() > LABEL_DISPLAY_LIMIT {
        truncated.push_str("...");
    }
    truncated
}

/// Whole seconds waited, shown as `?` until at least one full second has
/// passed, with singular/plural agreement after that.
fn wait_seconds_label(elapsed_ms: Option<u64>) -> String {
    let seconds = elapsed_ms.unwrap_or(0) / 1000;
    match seconds {
        0 => "? seconds".to_string(),
        1 => "1 second".to_string(),
        n => format!("{n} seconds"),
    }
}
