//! Plain-text rendering of conversation and telemetry state for the REPL.

use std::ops::Range;

use chrono::Local;
use jarvis_assistant::{InputMode, Message, Sender};
use jarvis_config::schema::ConversationConfig;
use jarvis_platform::telemetry::format_time;
use jarvis_platform::{TelemetrySnapshot, WeatherReport, WindowChrome};

use super::windows::ShellWindow;

const LEVEL_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn message_line(labels: &ConversationConfig, message: &Message) -> String {
    let label = match message.sender() {
        Sender::User => &labels.user_label,
        Sender::Assistant => &labels.assistant_label,
    };
    let time = format_time(&message.timestamp().with_timezone(&Local));
    format!("[{time}] {label}: {}", message.content())
}

/// One glyph per bar, scaled to `range`.
pub fn level_bars(levels: &[u8], range: Range<u8>) -> String {
    let span = u32::from(range.end.saturating_sub(range.start).max(1));
    levels
        .iter()
        .map(|level| {
            let offset = u32::from(level.saturating_sub(range.start));
            let slot = (offset * LEVEL_GLYPHS.len() as u32 / span) as usize;
            LEVEL_GLYPHS[slot.min(LEVEL_GLYPHS.len() - 1)]
        })
        .collect()
}

pub fn mode_line(mode: &InputMode, range: Range<u8>) -> String {
    match mode {
        InputMode::Listening { levels } if levels.is_empty() => "-- listening --".to_string(),
        InputMode::Listening { levels } => format!("-- listening {} --", level_bars(levels, range)),
        InputMode::Idle { draft } if !draft.is_empty() => {
            format!("-- idle -- draft: {draft} (/send to submit)")
        }
        InputMode::Composing { draft } => format!("-- composing -- draft: {draft}"),
        InputMode::Idle { .. } => "-- idle --".to_string(),
    }
}

pub fn status_lines(window: &ShellWindow) -> Vec<String> {
    let chrome = &window.chrome;
    let conversation = &window.conversation;
    let range = conversation.config().level_range.clone();
    let (width, height) = chrome.size();
    vec![
        format!(
            "{} [{}] {} {width}x{height} session {}",
            chrome.id(),
            chrome.state(),
            chrome.title(),
            conversation.id()
        ),
        format!(
            "messages: {} | pending replies: {}",
            conversation.timeline().len(),
            conversation.pending_replies()
        ),
        mode_line(conversation.input_mode(), range),
    ]
}

pub fn telemetry_line(snapshot: &TelemetrySnapshot) -> String {
    format!(
        "CPU {}% | Memory {}% | Network {} | Battery {}% | {} {}",
        snapshot.cpu_percent,
        snapshot.memory_percent,
        snapshot.network_status,
        snapshot.battery_percent,
        snapshot.current_time,
        snapshot.current_date
    )
}

pub fn weather_line(report: &WeatherReport) -> String {
    format!(
        "{}: {}, {} ({})",
        report.location, report.temperature, report.condition, report.forecast
    )
}
