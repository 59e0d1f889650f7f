//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Chatbot Configuration
# Only override what you want to change -- missing fields use defaults.
# API keys do not belong here: put GEMINI_API_KEY and YOUTUBE_API_KEY in
# secrets.toml next to this file, or in the environment.

[model]
# name = "gemini-1.5-flash"
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# temperature = 0.7         # 0.0-2.0
# top_p = 0.95              # 0.0-1.0
# top_k = 50                # 1-1000
# max_output_tokens = 1000  # 1-8192
# timeout_secs = 120        # 1-600
# history = "replay"        # "replay" sends prior turns, "fresh" sends none

[search]
# enabled = true
# base_url = "https://www.googleapis.com/youtube/v3"
# max_results = 5           # 1-50
# result_type = "video"
# timeout_secs = 30         # 1-600

[courses]
# enabled = true
# [[courses.platforms]]
# name = "Coursera"
# url = "https://www.coursera.org"

[logging]
# level = "chatbot=info"
"##
    .to_string()
}
