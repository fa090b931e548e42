//! User-facing error reporting on stderr

use stepsearch_core::error::SearchError;
use stepsearch_core::format::OutputFormat;

/// Render `err` the way `format` expects: a JSON envelope or an `error:` line
pub fn render_error(err: &SearchError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => err.to_json().to_string(),
        OutputFormat::Human | OutputFormat::Records => format!("error: {}", err),
    }
}

/// Print `err` to stderr. Quiet mode silences everything except JSON envelopes.
pub fn report_error(err: &SearchError, format: OutputFormat, quiet: bool) {
    if format == OutputFormat::Json || !quiet {
        eprintln!("{}", render_error(err, format));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepsearch_core::error::NodeRole;

    #[test]
    fn test_render_human() {
        let err = SearchError::invalid_node(NodeRole::Goal, "Q");
        assert_eq!(
            render_error(&err, OutputFormat::Human),
            "error: invalid goal node: 'Q' is not a declared node"
        );
    }

    #[test]
    fn test_render_json_envelope() {
        let err = SearchError::invalid_node(NodeRole::Start, "Z");
        let value: serde_json::Value =
            serde_json::from_str(&render_error(&err, OutputFormat::Json)).unwrap();
        assert_eq!(value["error"]["code"], 2);
        assert_eq!(value["error"]["type"], "invalid_node");
    }
}
