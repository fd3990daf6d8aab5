use serde::{Deserialize, Serialize};

/// Configuration options for the [`Decoder`](crate::Decoder).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Treat `\n` as a new line: carriage return followed by line feed
    /// (LNM). When disabled `\n` only moves the cursor down.
    pub newline_mode: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: DecoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DecoderConfig::default());
    }

    #[test]
    fn newline_mode_from_json() {
        let config: DecoderConfig =
            serde_json::from_str(r#"{ "newline_mode": true }"#).unwrap();
        assert!(config.newline_mode);
    }
}
