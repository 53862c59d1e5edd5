use arbo_core::format::OutputFormat;

/// clap value parser bridging the core output format type
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
