use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind modals.
    pub mantle: Color,
    /// Darkest background shade, used as text on highlighted rows.
    pub crust: Color,
    /// Border color for unfocused panels.
    pub surface2: Color,
    /// Muted overlay color for titles and secondary columns.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Low-emphasis text (hints, captions).
    pub subtext1: Color,
    /// Accent for the input prompt.
    pub sapphire: Color,
    /// Accent for focused borders and headings.
    pub mauve: Color,
    /// Positive state color.
    pub green: Color,
    /// Attention color (pending requests).
    pub yellow: Color,
    /// Error color for notices.
    pub red: Color,
    /// Highlight background for the selected row.
    pub lavender: Color,
}

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// URL phrases are posted to.
    pub endpoint: String,
    /// Page (URL or file) whose `<meta>` tags carry the CSRF pair.
    pub metadata_source: Option<String>,
    /// Attach the CSRF header to search requests when both values are known.
    pub attach_csrf: bool,
    /// Whole-request timeout in seconds; `0` waits forever.
    pub request_timeout_secs: u64,
    /// Stay silent on unexpected statuses and transport failures.
    pub strict_parity: bool,
    /// Default log filter when `RUST_LOG` and `--log-level` are absent.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: crate::sources::search::DEFAULT_ENDPOINT.to_string(),
            metadata_source: None,
            attach_csrf: true,
            request_timeout_secs: 30,
            strict_parity: false,
            log_level: "info".to_string(),
        }
    }
}
