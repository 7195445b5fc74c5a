//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Jarvis Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[conversation]
# greeting = "Hello! I am Jarvis, your AI assistant. How can I help you today?"
# reply_delay_ms = 1000          # 0-60000
# reply_template = "I'm processing your request: \"{text}\""
# user_label = "You"
# assistant_label = "Jarvis"

[voice]
# sample_interval_ms = 100       # 10-1000
# capture_duration_ms = 3000     # 100-60000
# bar_count = 15                 # 1-64
# min_level = 5                  # inclusive
# max_level = 35                 # exclusive, at most 255
# recognized_phrase = "What is the weather like today?"
# seed = 42                      # fixed level meter sequence

[window]
# title = "Jarvis AI Assistant"
# width = 1200
# height = 800
# min_width = 800
# min_height = 600
# background = "#121212"
# frameless = true
# start_maximized = false

[telemetry]
# clock_interval_ms = 1000       # 100-60000
# status_interval_ms = 5000      # 100-600000
# cpu_min = 10
# cpu_max = 40                   # exclusive, at most 101
# memory_min = 20
# memory_max = 60                # exclusive, at most 101
# battery_percent = 85           # 0-100
# network_status = "Connected"

[telemetry.weather]
# location = "New York"
# temperature = "72°F"
# condition = "Sunny"
# forecast = "Clear skies"

[logging]
# level = "INFO"                 # DEBUG, INFO, WARNING, ERROR
# verbose = false
"##
    .to_string()
}
