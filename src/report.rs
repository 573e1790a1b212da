use crate::args::ReportFormat;
use crate::stats::RankedEntry;

const MAX_SINGLE_LINE_WIDTH: usize = 71;

pub fn format_ratio(ratio: f64) -> String {
    if ratio == f64::INFINITY {
        "Infinity".to_string()
    } else if ratio == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        ratio.to_string()
    }
}

pub fn format_entry(entry: &RankedEntry) -> String {
    format!(
        "{}: {}=>{} 変化率:{}",
        entry.region,
        entry.stat.popu10,
        entry.stat.popu15,
        format_ratio(entry.change())
    )
}

pub fn render(entries: &[RankedEntry]) -> Vec<String> {
    entries.iter().map(format_entry).collect()
}

/// Quotes `line` with `'`, switching to `"` or a backtick when the text
/// contains single quotes, and escaping whatever still clashes.
fn quote(line: &str) -> String {
    let delimiter = if !line.contains('\'') {
        '\''
    } else if !line.contains('"') {
        '"'
    } else if !line.contains('`') && !line.contains("${") {
        '`'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(line.len() + 2);
    quoted.push(delimiter);
    for c in line.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{c}' => quoted.push_str("\\f"),
            c if c == delimiter => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if c < ' ' || c == '\u{7f}' => quoted.push_str(&format!("\\x{:02X}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push(delimiter);
    quoted
}

/// Renders report lines as a single bracketed list of quoted strings.
///
/// Short lists stay on one line; anything wider puts one element per line.
pub fn render_array(lines: &[String]) -> String {
    if lines.is_empty() {
        return "[]".to_string();
    }

    let quoted: Vec<String> = lines.iter().map(|l| quote(l)).collect();
    let single_line = format!("[ {} ]", quoted.join(", "));
    if single_line.chars().count() <= MAX_SINGLE_LINE_WIDTH {
        return single_line;
    }

    format!("[\n  {}\n]", quoted.join(",\n  "))
}

pub fn render_report(entries: &[RankedEntry], format: ReportFormat) -> String {
    let lines = render(entries);
    match format {
        ReportFormat::Array => render_array(&lines),
        ReportFormat::Lines => lines.join("\n"),
    }
}

pub fn print_report(entries: &[RankedEntry], format: ReportFormat) {
    let report = render_report(entries, format);
    if !report.is_empty() {
        println!("{}", report);
    }
}
