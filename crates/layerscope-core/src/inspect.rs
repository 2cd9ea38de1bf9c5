//! The inspect loop: source → dissect → render → sink.
//!
//! Frames are handled one at a time, in capture order. Decode problems stay
//! inside the frame they belong to; only source and sink failures end the run.

use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::config::InspectOptions;
use crate::dissect::dissect_frame;
use crate::record::FrameMeta;
use crate::render::{render_frame, ts_to_rfc3339};
use crate::source::{PacketEvent, PacketSource, PcapFileSource, SourceError};

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// What a run went through, for the caller's closing message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InspectSummary {
    pub frames: u64,
    /// RFC 3339 timestamp of the earliest frame, when any frame had one.
    pub time_start: Option<String>,
    pub time_end: Option<String>,
}

/// Open a `.pcap`/`.pcapng` file and inspect every frame in it.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
///
/// use layerscope_core::{InspectOptions, inspect_pcap_file};
///
/// let mut stdout = std::io::stdout().lock();
/// let summary = inspect_pcap_file(Path::new("dhcp.pcapng"), &InspectOptions::default(), &mut stdout)?;
/// eprintln!("{} frames", summary.frames);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn inspect_pcap_file<W: Write>(
    path: &Path,
    options: &InspectOptions,
    sink: &mut W,
) -> Result<InspectSummary, InspectError> {
    let source = PcapFileSource::open(path)?;
    inspect_source(source, options, sink)
}

pub fn inspect_source<S: PacketSource, W: Write>(
    mut source: S,
    options: &InspectOptions,
    sink: &mut W,
) -> Result<InspectSummary, InspectError> {
    let mut frames = 0u64;
    let mut first_ts = None;
    let mut last_ts = None;

    while options.max_frames.is_none_or(|max| frames < max) {
        let Some(PacketEvent {
            ts,
            linktype,
            data,
            orig_len,
        }) = source.next_packet()?
        else {
            break;
        };
        frames += 1;
        update_ts_bounds(&mut first_ts, &mut last_ts, ts);

        let dissection = dissect_frame(linktype, &data);
        debug!(frame = frames, layers = dissection.layers.len(), "frame dissected");
        let meta = FrameMeta {
            index: frames,
            ts,
            captured_len: data.len(),
            orig_len,
        };
        render_frame(sink, &meta, &dissection, options.verbosity)?;
    }
    sink.flush()?;

    Ok(InspectSummary {
        frames,
        time_start: ts_to_rfc3339(first_ts),
        time_end: ts_to_rfc3339(last_ts),
    })
}

fn update_ts_bounds(first: &mut Option<f64>, last: &mut Option<f64>, ts: Option<f64>) {
    let Some(ts) = ts else {
        return;
    };
    if first.is_none_or(|existing| ts < existing) {
        *first = Some(ts);
    }
    if last.is_none_or(|existing| ts > existing) {
        *last = Some(ts);
    }
}
