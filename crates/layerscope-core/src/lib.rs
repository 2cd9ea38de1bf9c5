//! layerscope core library: layered dissection of captured frames.
//!
//! A `PacketSource` yields captured frames; `dissect_frame` walks each one
//! down the protocol stack (Ethernet → IPv4/ARP → TCP/UDP → BOOTP → DHCP
//! options) and produces structured layers whose fields carry a detail tier;
//! `render` turns those layers into text for a chosen `Verbosity`. Decoders
//! are byte-oriented and side-effect free, and all file I/O lives in `source`.
//!
//! Invariants:
//! - No decoder reads outside the slice its caller validated.
//! - Decoding is independent of verbosity; only rendering filters.
//! - Frames are decoded independently of one another.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use layerscope_core::{InspectOptions, Verbosity, inspect_pcap_file};
//!
//! let options = InspectOptions {
//!     verbosity: Verbosity::MAX,
//!     max_frames: Some(10),
//! };
//! let mut out = Vec::new();
//! let summary = inspect_pcap_file(Path::new("capture.pcapng"), &options, &mut out)?;
//! println!("{} frames", summary.frames);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod dissect;
mod inspect;
pub mod protocols;
mod record;
mod render;
mod source;

pub use config::{ConfigError, InspectOptions, Verbosity, init_verbosity, verbosity};
pub use dissect::{Service, dissect_frame};
pub use inspect::{InspectError, InspectSummary, inspect_pcap_file, inspect_source};
pub use protocols::error::DecodeError;
pub use record::{Field, FrameDissection, FrameMeta, Layer, Note, Tier};
pub use render::{render_frame, render_lines};
pub use source::{PacketEvent, PacketSource, PcapFileSource, SourceError};
