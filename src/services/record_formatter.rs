use crate::models::{OutputRecord, RankedColors};

/// Format `<url>,<RRGGBB>,<RRGGBB>,...\n`
pub fn format_record(ranked: &RankedColors) -> OutputRecord {
    let mut line = String::with_capacity(ranked.url.len() + ranked.colors.len() * 7 + 1);
    line.push_str(&ranked.url);
    for color in &ranked.colors {
        line.push(',');
        line.push_str(&color.to_string());
    }
    line.push('\n');
    OutputRecord::new(line)
}
