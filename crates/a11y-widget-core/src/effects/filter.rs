//! Composite CSS filter and magnifier scale.

use crate::models::{Choice, ColorFilter, ContrastLevel, MagnifierLevel, SettingsRecord};

/// Filter value meaning "no filter".
pub const NO_FILTER: &str = "none";

/// Segments contributed by high contrast mode.
pub const HIGH_CONTRAST_SEGMENTS: [&str; 2] = ["contrast(1.35)", "saturate(1.2)"];

/// Scale used when the magnifier is off or unrecognized.
pub const NEUTRAL_SCALE: &str = "1";

const MAGNIFIER_SCALES: [(&str, &str); 3] = [("default", "1"), ("125", "1.25"), ("150", "1.5")];

/// Filter segments for `record`, in application order.
///
/// High contrast and the contrast adjustment both contribute a `contrast()`
/// segment when set together; the browser multiplies them.
pub fn filter_segments(record: &SettingsRecord) -> Vec<&'static str> {
    let mut segments = Vec::with_capacity(4);

    if record.high_contrast {
        segments.extend(HIGH_CONTRAST_SEGMENTS);
    }

    match record.contrast_adjust {
        ContrastLevel::Medium => segments.push("contrast(1.25)"),
        ContrastLevel::Strong => segments.push("contrast(1.5)"),
        ContrastLevel::Default => {}
    }

    match record.color_filter {
        ColorFilter::Grayscale => segments.push("grayscale(100%)"),
        ColorFilter::Sepia => segments.push("sepia(60%)"),
        ColorFilter::None => {}
    }

    segments
}

/// The composed filter value, or [`NO_FILTER`] when nothing applies.
pub fn compose_filter(record: &SettingsRecord) -> String {
    let segments = filter_segments(record);
    if segments.is_empty() {
        NO_FILTER.to_string()
    } else {
        segments.join(" ")
    }
}

/// Scale factor for a magnifier level, as written to the scale property.
pub fn magnifier_scale(level: MagnifierLevel) -> &'static str {
    let wire = level.as_str();
    MAGNIFIER_SCALES
        .iter()
        .find(|(key, _)| *key == wire)
        .map_or(NEUTRAL_SCALE, |&(_, scale)| scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_compose_to_no_filter() {
        assert_eq!(compose_filter(&SettingsRecord::default()), "none");
    }

    #[test]
    fn segments_follow_fixed_order() {
        let record = SettingsRecord {
            high_contrast: true,
            contrast_adjust: ContrastLevel::Medium,
            color_filter: ColorFilter::Sepia,
            ..SettingsRecord::default()
        };
        assert_eq!(
            compose_filter(&record),
            "contrast(1.35) saturate(1.2) contrast(1.25) sepia(60%)"
        );
    }

    #[test]
    fn single_segments() {
        let strong = SettingsRecord {
            contrast_adjust: ContrastLevel::Strong,
            ..SettingsRecord::default()
        };
        assert_eq!(compose_filter(&strong), "contrast(1.5)");

        let gray = SettingsRecord {
            color_filter: ColorFilter::Grayscale,
            ..SettingsRecord::default()
        };
        assert_eq!(compose_filter(&gray), "grayscale(100%)");
    }

    #[test]
    fn magnifier_scales() {
        assert_eq!(magnifier_scale(MagnifierLevel::Off), "1");
        assert_eq!(magnifier_scale(MagnifierLevel::Medium), "1.25");
        assert_eq!(magnifier_scale(MagnifierLevel::Large), "1.5");
    }
}
