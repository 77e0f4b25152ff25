use crate::domain::model::{Breakdown, FestivalStatistics, RegistrationRecord};
use std::fmt::Write;

/// Persian labels of the festival formats, keyed by their stored value.
const FORMAT_LABELS: &[(&str, &str)] = &[
    ("news_report", "گزارش خبری"),
    ("interview", "مصاحبه"),
    ("editorial", "یادداشت و سرمقاله"),
    ("headline", "تیتر"),
    ("infographic", "اینفوگرافی"),
    ("motion_graphic", "موشن گرافی"),
    ("photo", "عکس"),
    ("video_clip", "کلیپ و گزارش ویدیویی"),
    ("documentary", "مستند"),
    ("podcast", "پادکست"),
];

pub fn format_label(key: &str) -> &str {
    FORMAT_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

impl FestivalStatistics {
    pub fn from_records(records: &[RegistrationRecord]) -> Self {
        let mut stats = FestivalStatistics {
            total_registrations: records.len() as u64,
            ..Default::default()
        };

        for record in records {
            bump(&mut stats.by_format, record.festival_format.as_deref());
            bump(&mut stats.by_topic, record.festival_topic.as_deref());
            bump(&mut stats.by_gender, record.gender.as_deref());
        }

        stats
    }
}

fn bump(counts: &mut Breakdown, key: Option<&str>) {
    if let Some(key) = key.map(str::trim).filter(|k| !k.is_empty()) {
        counts.increment(key);
    }
}

/// Text rendition of the admin statistics panel. Formats are listed in the
/// order the breakdown holds them.
pub fn render_statistics(stats: &FestivalStatistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📊 آمار جشنواره");
    let _ = writeln!(out, "{:>6}  کل ثبت نام‌ها", stats.total_registrations);

    if !stats.by_format.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "🎬 آمار قالب‌ها");
        for (format, count) in &stats.by_format {
            let _ = writeln!(out, "{:>6}  {}", count, format_label(format));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(format: Option<&str>, gender: Option<&str>) -> RegistrationRecord {
        RegistrationRecord {
            national_id: "0010008942".to_string(),
            phone_number: "09123456789".to_string(),
            festival_format: format.map(str::to_string),
            gender: gender.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_label_falls_back_to_key() {
        assert_eq!(format_label("podcast"), "پادکست");
        assert_eq!(format_label("radio"), "radio");
    }

    #[test]
    fn test_from_records_counts_breakdowns() {
        let records = vec![
            record(Some("photo"), Some("female")),
            record(Some("photo"), Some("male")),
            record(Some("podcast"), None),
            record(Some("  "), Some("female")),
        ];
        let stats = FestivalStatistics::from_records(&records);
        assert_eq!(stats.total_registrations, 4);
        assert_eq!(stats.by_format.get("photo"), Some(&2));
        assert_eq!(stats.by_format.get("podcast"), Some(&1));
        assert_eq!(stats.by_format.len(), 2);
        assert_eq!(stats.by_gender.get("female"), Some(&2));
        assert!(stats.by_topic.is_empty());
    }

    #[test]
    fn test_render_includes_formats_section_only_when_present() {
        let mut stats = FestivalStatistics {
            total_registrations: 3,
            ..Default::default()
        };
        let rendered = render_statistics(&stats);
        assert!(rendered.contains("کل ثبت نام‌ها"));
        assert!(!rendered.contains("آمار قالب‌ها"));

        stats.by_format.insert("documentary".to_string(), 3);
        let rendered = render_statistics(&stats);
        assert!(rendered.contains("آمار قالب‌ها"));
        assert!(rendered.contains("مستند"));
    }

    #[test]
    fn test_render_keeps_server_order_of_formats() {
        let stats: FestivalStatistics = serde_json::from_str(
            r#"{"total_registrations": 3, "by_format": {"video_clip": 2, "documentary": 1}}"#,
        )
        .unwrap();
        let rendered = render_statistics(&stats);
        let clip = rendered.find("کلیپ و گزارش ویدیویی").unwrap();
        let documentary = rendered.find("مستند").unwrap();
        assert!(clip < documentary);

        let round_trip = serde_json::to_string(&stats.by_format).unwrap();
        assert_eq!(round_trip, r#"{"video_clip":2,"documentary":1}"#);
    }

    #[test]
    fn test_from_records_counts_in_first_seen_order() {
        let records = vec![
            record(Some("podcast"), None),
            record(Some("photo"), None),
            record(Some("podcast"), None),
        ];
        let stats = FestivalStatistics::from_records(&records);
        let keys: Vec<&str> = stats.by_format.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["podcast", "photo"]);
        assert_eq!(stats.by_format.get("podcast"), Some(&2));
    }
}
