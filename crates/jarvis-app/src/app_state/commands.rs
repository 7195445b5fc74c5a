//! REPL command parsing and execution.
//!
//! Plain lines are submitted as messages. Slash commands map onto the same
//! IPC kinds the presentation layer uses.

use jarvis_common::{JarvisError, WindowId};
use jarvis_platform::TelemetrySource;
use serde_json::json;

use super::core::ShellApp;
use super::ipc::IpcMessage;
use super::render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Say(String),
    Draft(String),
    Send,
    Listen,
    Stop,
    Status,
    Weather(Option<String>),
    Timeline,
    Json,
    Minimize,
    Maximize,
    Close,
    NewWindow,
    SwitchWindow(u32),
    Ipc(String),
    Help,
    Quit,
    Unknown(String),
}

const HELP: &[&str] = &[
    "type a line to send it",
    "/draft <text>    put text in the input box",
    "/send            send the draft",
    "/listen, /stop   start or stop voice capture",
    "/status          window, mode and telemetry",
    "/weather [place] current weather",
    "/timeline        print the conversation",
    "/json            conversation state as JSON",
    "/minimize, /maximize, /close",
    "/new, /window <n> open or switch windows",
    "/ipc <json>      send a raw IPC message",
    "/quit",
];

impl Command {
    pub fn parse(line: &str) -> Self {
        let Some(rest) = line.strip_prefix('/') else {
            return Command::Say(line.to_string());
        };
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "draft" => Command::Draft(arg.to_string()),
            "send" => Command::Send,
            "listen" => Command::Listen,
            "stop" => Command::Stop,
            "status" => Command::Status,
            "weather" => Command::Weather((!arg.is_empty()).then(|| arg.to_string())),
            "timeline" => Command::Timeline,
            "json" => Command::Json,
            "minimize" => Command::Minimize,
            "maximize" => Command::Maximize,
            "close" => Command::Close,
            "new" => Command::NewWindow,
            "window" => match arg.parse() {
                Ok(n) => Command::SwitchWindow(n),
                Err(_) => Command::Unknown(line.to_string()),
            },
            "ipc" => Command::Ipc(arg.to_string()),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

impl ShellApp {
    /// Run a REPL command. Returns lines to print immediately; session
    /// changes show up on the next poll.
    pub fn execute(&mut self, command: Command) -> Vec<String> {
        let result = match command {
            Command::Say(text) => self.ipc_quiet(IpcMessage::new("submit-message", json!(text))),
            Command::Draft(text) => self.ipc_quiet(IpcMessage::new("update-draft", json!(text))),
            Command::Send => self.ipc_quiet(IpcMessage::bare("submit-message")),
            Command::Listen => self.ipc_quiet(IpcMessage::bare("start-listening")),
            Command::Stop => self.ipc_quiet(IpcMessage::bare("stop-listening")),
            Command::Minimize => self.ipc_quiet(IpcMessage::bare("minimize-window")),
            Command::Maximize => self.ipc_quiet(IpcMessage::bare("maximize-window")),
            Command::Close => self.ipc_quiet(IpcMessage::bare("close-window")),
            Command::Weather(place) => Ok(vec![render::weather_line(
                &self.telemetry.weather(place.as_deref()),
            )]),
            Command::Ipc(body) => self
                .handle_ipc_message(&body)
                .map(|reply| reply.map(|value| vec![value.to_string()]).unwrap_or_default()),
            Command::Status => Ok(self.status()),
            Command::Timeline => Ok(self.timeline()),
            Command::Json => self.state_json(),
            Command::NewWindow => {
                let id = self.open_window();
                Ok(vec![format!("opened {id}")])
            }
            Command::SwitchWindow(n) => self.switch_window(WindowId(n)),
            Command::Help => Ok(HELP.iter().map(|line| line.to_string()).collect()),
            Command::Quit => {
                self.should_exit = true;
                Ok(Vec::new())
            }
            Command::Unknown(line) => Ok(vec![format!("unknown command: {line} (try /help)")]),
        };

        result.unwrap_or_else(|e| vec![format!("! {e}")])
    }

    fn ipc_quiet(&mut self, msg: IpcMessage) -> Result<Vec<String>, JarvisError> {
        self.dispatch_ipc(&msg).map(|_| Vec::new())
    }

    fn status(&self) -> Vec<String> {
        let mut lines = match self.active_ref() {
            Some((_, window)) => render::status_lines(window),
            None => vec!["no open window".to_string()],
        };
        if self.windows.count() > 1 {
            let ids: Vec<String> = self.windows.ids().iter().map(ToString::to_string).collect();
            lines.push(format!("windows: {}", ids.join(", ")));
        }
        lines.push(render::telemetry_line(self.telemetry.snapshot()));
        lines
    }

    fn timeline(&self) -> Vec<String> {
        let Some((_, window)) = self.active_ref() else {
            return vec!["no open window".to_string()];
        };
        window
            .conversation
            .timeline()
            .iter()
            .map(|message| render::message_line(&self.config.conversation, message))
            .collect()
    }

    fn state_json(&self) -> Result<Vec<String>, JarvisError> {
        let (_, window) = self
            .active_ref()
            .ok_or_else(|| JarvisError::Other("no open window".into()))?;
        let json = serde_json::to_string_pretty(window.conversation.state())
            .map_err(|e| JarvisError::Other(format!("failed to serialize state: {e}")))?;
        Ok(json.lines().map(str::to_string).collect())
    }

    fn switch_window(&mut self, id: WindowId) -> Result<Vec<String>, JarvisError> {
        if self.windows.get(id).is_none() {
            return Err(JarvisError::Other(format!("no such window: {id}")));
        }
        self.active = Some(id);
        Ok(vec![format!("switched to {id}")])
    }
}
