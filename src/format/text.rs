//! Labeled detail text, one line per address field

use crate::error::Result;
use crate::format::{LabelSet, OutputFormatter};
use crate::geo::Placemark;

/// Text formatter - the detail view shown after a lookup
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Labeled address lines"
    }

    fn format(&self, placemark: &Placemark, labels: LabelSet) -> Result<String> {
        Ok(detail_text(placemark, labels))
    }
}

/// Render the eight address fields in fixed order
///
/// Missing fields render as an empty value after the label.
pub fn detail_text(placemark: &Placemark, labels: LabelSet) -> String {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    let number = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();

    let values = [
        text(&placemark.country),
        text(&placemark.postal_code),
        text(&placemark.administrative_area),
        text(&placemark.locality),
        text(&placemark.thoroughfare),
        text(&placemark.sub_thoroughfare),
        number(placemark.longitude),
        number(placemark.latitude),
    ];

    let lines: Vec<String> = labels
        .labels()
        .iter()
        .zip(values.iter())
        .map(|(label, value)| format!("{} : {}", label, value))
        .collect();

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::testing::{tokyo_tower, TOKYO_TOWER_DETAIL};

    #[test]
    fn test_full_placemark() {
        assert_eq!(detail_text(&tokyo_tower(), LabelSet::English), TOKYO_TOWER_DETAIL);
    }

    #[test]
    fn test_missing_fields_are_blank() {
        let output = detail_text(&Placemark::default(), LabelSet::English);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Country : ");
        assert_eq!(lines[6], "Longitude : ");
        assert_eq!(lines[7], "Latitude : ");
    }

    #[test]
    fn test_partial_placemark_keeps_order() {
        let placemark = Placemark {
            locality: Some("Minato".to_string()),
            latitude: Some(35.6586),
            ..Placemark::default()
        };
        let output = detail_text(&placemark, LabelSet::English);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines[3], "Locality : Minato");
        assert_eq!(lines[4], "Thoroughfare : ");
        assert_eq!(lines[7], "Latitude : 35.6586");
    }

    #[test]
    fn test_japanese_labels() {
        let output = detail_text(&tokyo_tower(), LabelSet::Japanese);
        assert!(output.starts_with("国 : Japan\n郵便番号 : 105-0011"));
        assert!(output.ends_with("経度 : 139.7454\n緯度 : 35.6586"));
    }

    #[test]
    fn test_text_formatter_info() {
        let formatter = TextFormatter;
        assert_eq!(formatter.name(), "text");
        assert!(!formatter.description().is_empty());
        assert_eq!(
            formatter.format(&tokyo_tower(), LabelSet::English).unwrap(),
            TOKYO_TOWER_DETAIL
        );
    }
}
