//! JSON output formatter

use crate::error::Result;
use crate::format::{LabelSet, OutputFormatter};
use crate::geo::Placemark;

/// JSON formatter - outputs the placemark as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Placemark fields as JSON"
    }

    fn format(&self, placemark: &Placemark, _labels: LabelSet) -> Result<String> {
        Ok(serde_json::to_string_pretty(placemark)?)
    }
}
