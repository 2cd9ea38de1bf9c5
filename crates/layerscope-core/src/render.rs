//! Text rendering of dissected frames.
//!
//! Rendering is a pure function of the structured records and a verbosity:
//! a field, note or child is printed only when its tier is within the
//! verbosity. Frame headers and layer titles are always printed.

use std::io::{self, Write};

use time::{Duration, OffsetDateTime, format_description::well_known::Rfc3339};

use crate::config::Verbosity;
use crate::record::{Field, FrameDissection, FrameMeta, Layer};

const INDENT: &str = "  ";

/// Render one frame to lines, without trailing newlines.
///
/// # Examples
/// ```
/// use layerscope_core::{FrameDissection, FrameMeta, Layer, Tier, Verbosity, render_lines};
///
/// let mut layer = Layer::new("UDP");
/// layer.field(Tier::Essential, "Source port", 68);
/// layer.field(Tier::Detailed, "Checksum", "0x1234");
/// let dissection = FrameDissection { layers: vec![layer] };
/// let meta = FrameMeta { index: 1, ts: None, captured_len: 42, orig_len: None };
///
/// let lines = render_lines(&meta, &dissection, Verbosity::DEFAULT);
/// assert_eq!(lines, vec!["Frame 1: 42 bytes captured", "  UDP", "    Source port: 68"]);
/// ```
pub fn render_lines(meta: &FrameMeta, dissection: &FrameDissection, verbosity: Verbosity) -> Vec<String> {
    let mut lines = vec![frame_header(meta)];
    for layer in &dissection.layers {
        render_layer(layer, verbosity, &mut lines);
    }
    lines
}

/// Render one frame to `sink`, followed by a blank separator line.
pub fn render_frame<W: Write>(
    sink: &mut W,
    meta: &FrameMeta,
    dissection: &FrameDissection,
    verbosity: Verbosity,
) -> io::Result<()> {
    for line in render_lines(meta, dissection, verbosity) {
        writeln!(sink, "{line}")?;
    }
    writeln!(sink)
}

fn frame_header(meta: &FrameMeta) -> String {
    let mut header = format!("Frame {}: {} bytes captured", meta.index, meta.captured_len);
    if let Some(orig_len) = meta.orig_len {
        if orig_len as usize != meta.captured_len {
            header.push_str(&format!(" ({orig_len} on wire)"));
        }
    }
    if let Some(ts) = ts_to_rfc3339(meta.ts) {
        header.push_str(", ");
        header.push_str(&ts);
    }
    header
}

fn render_layer(layer: &Layer, verbosity: Verbosity, lines: &mut Vec<String>) {
    lines.push(format!("{INDENT}{}", layer.title));
    for field in &layer.fields {
        render_field(field, 2, verbosity, lines);
    }
    for note in &layer.notes {
        if verbosity.allows(note.tier) {
            lines.push(format!("{INDENT}{INDENT}note: {}", note.text));
        }
    }
}

fn render_field(field: &Field, depth: usize, verbosity: Verbosity, lines: &mut Vec<String>) {
    if !verbosity.allows(field.tier) {
        return;
    }
    let indent = INDENT.repeat(depth);
    if field.value.is_empty() {
        lines.push(format!("{indent}{}:", field.label));
    } else {
        lines.push(format!("{indent}{}: {}", field.label, field.value));
    }
    for child in &field.children {
        render_field(child, depth + 1, verbosity, lines);
    }
}

pub(crate) fn ts_to_rfc3339(ts: Option<f64>) -> Option<String> {
    let ts = ts?;
    let secs = ts.floor();
    // Sources resolve to microseconds; rounding there drops f64 noise.
    let micros = ((ts - secs) * 1e6).round() as i64;
    let dt =
        OffsetDateTime::from_unix_timestamp(secs as i64).ok()? + Duration::microseconds(micros);
    dt.format(&Rfc3339).ok()
}

#[cfg(test)]
mod tests {
    use super::{render_frame, render_lines, ts_to_rfc3339};
    use crate::config::Verbosity;
    use crate::record::{Field, FrameDissection, FrameMeta, Layer, Tier};

    fn sample() -> (FrameMeta, FrameDissection) {
        let mut udp = Layer::new("UDP");
        udp.field(Tier::Essential, "Source port", 67);
        udp.field(Tier::Common, "Length", 308);
        udp.field(Tier::Detailed, "Checksum", "0x0000");

        let mut dhcp = Layer::new("DHCP");
        dhcp.field(Tier::Essential, "DHCP message type", "Offer");
        dhcp.push(Field {
            tier: Tier::Detailed,
            label: "Parameter request list".to_string(),
            value: "1 item(s)".to_string(),
            children: vec![Field::new(Tier::Detailed, "Option 1", "Subnet mask")],
        });
        dhcp.note(Tier::Detailed, "option area ends without END");

        let meta = FrameMeta {
            index: 3,
            ts: Some(0.5),
            captured_len: 342,
            orig_len: Some(342),
        };
        (
            meta,
            FrameDissection {
                layers: vec![udp, dhcp],
            },
        )
    }

    fn at(level: u8) -> Verbosity {
        Verbosity::try_from(level).unwrap()
    }

    #[test]
    fn verbosity_zero_shows_only_markers() {
        let (meta, dissection) = sample();
        let lines = render_lines(&meta, &dissection, at(0));
        assert_eq!(
            lines,
            vec![
                "Frame 3: 342 bytes captured, 1970-01-01T00:00:00.5Z",
                "  UDP",
                "  DHCP",
            ]
        );
    }

    #[test]
    fn detailed_fields_hidden_at_two_shown_at_three() {
        let (meta, dissection) = sample();
        let common = render_lines(&meta, &dissection, at(2));
        assert!(common.contains(&"    Length: 308".to_string()));
        assert!(!common.iter().any(|line| line.contains("Checksum")));
        assert!(!common.iter().any(|line| line.contains("Parameter request list")));

        let detailed = render_lines(&meta, &dissection, at(3));
        assert!(detailed.contains(&"    Checksum: 0x0000".to_string()));
        assert!(detailed.contains(&"    Parameter request list: 1 item(s)".to_string()));
        assert!(detailed.contains(&"      Option 1: Subnet mask".to_string()));
        assert!(detailed.contains(&"    note: option area ends without END".to_string()));
    }

    #[test]
    fn rendering_does_not_change_records() {
        let (meta, dissection) = sample();
        let before = dissection.clone();
        let _ = render_lines(&meta, &dissection, at(0));
        let _ = render_lines(&meta, &dissection, at(3));
        assert_eq!(dissection, before);
    }

    #[test]
    fn wire_length_shown_when_truncated() {
        let (mut meta, dissection) = sample();
        meta.orig_len = Some(1500);
        meta.ts = None;
        let lines = render_lines(&meta, &dissection, at(0));
        assert_eq!(lines[0], "Frame 3: 342 bytes captured (1500 on wire)");
    }

    #[test]
    fn frame_ends_with_blank_line() {
        let (meta, dissection) = sample();
        let mut out = Vec::new();
        render_frame(&mut out, &meta, &dissection, at(1)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("Offer\n\n"));
    }

    #[test]
    fn timestamps_are_rfc3339() {
        assert_eq!(ts_to_rfc3339(Some(0.0)).as_deref(), Some("1970-01-01T00:00:00Z"));
        assert_eq!(
            ts_to_rfc3339(Some(1_700_000_000.25)).as_deref(),
            Some("2023-11-14T22:13:20.25Z")
        );
        assert_eq!(ts_to_rfc3339(None), None);
    }
}
