//! Target filename formatting.

use crate::types::{FileRecord, VIDEO_SUFFIX};
use clipseq_av::TemplateContext;

/// Formats planned filenames from a template.
///
/// Placeholders: `{date}`, `{size_marker}`, `{number}` (zero-padded to 6
/// digits) and `{length_seconds}` (zero-padded to 3 digits). The `.mp4`
/// suffix is always appended. Formatting is a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct FilenameFormatter {
    template: String,
}

impl FilenameFormatter {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Name for `record` when assigned `number`.
    pub fn format(&self, record: &FileRecord, number: u64) -> String {
        let ctx = TemplateContext::new()
            .with_var("date", record.date_tag.as_str())
            .with_var("size_marker", record.size_class.marker())
            .with_var("number", format!("{:06}", number))
            .with_var("length_seconds", format!("{:03}", record.duration_seconds));

        let mut name = ctx.substitute(&self.template);
        name.push_str(VIDEO_SUFFIX);
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FILENAME_TEMPLATE;
    use crate::types::SizeClass;

    fn record(duration_seconds: u64, size_class: SizeClass) -> FileRecord {
        FileRecord {
            filename: "a_001.mp4".into(),
            ordinal: 1,
            duration_seconds,
            size_class,
            date_tag: "20240501".into(),
        }
    }

    #[test]
    fn test_default_template() {
        let formatter = FilenameFormatter::new(DEFAULT_FILENAME_TEMPLATE);
        assert_eq!(
            formatter.format(&record(10, SizeClass::Small), 1),
            "20240501_S_000001_010.mp4"
        );
        assert_eq!(
            formatter.format(&record(400, SizeClass::Large), 2),
            "20240501_L_000002_400.mp4"
        );
    }

    #[test]
    fn test_padding_never_truncates() {
        let formatter = FilenameFormatter::new("{number}_{length_seconds}");
        assert_eq!(
            formatter.format(&record(12345, SizeClass::Large), 1234567),
            "1234567_12345.mp4"
        );
    }

    #[test]
    fn test_format_is_idempotent() {
        let formatter = FilenameFormatter::new(DEFAULT_FILENAME_TEMPLATE);
        let rec = record(42, SizeClass::Small);
        assert_eq!(formatter.format(&rec, 9), formatter.format(&rec, 9));
    }

    #[test]
    fn test_template_without_placeholders() {
        let formatter = FilenameFormatter::new("clip");
        assert_eq!(formatter.format(&record(1, SizeClass::Small), 3), "clip.mp4");
    }
}
