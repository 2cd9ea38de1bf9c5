//! Protocol decoders, one module per layer.
//!
//! Each protocol follows the same structure:
//! - `layout`: byte offsets, ranges and wire constants (source of truth)
//! - `parser`: header views built through `common::reader::ByteReader`
//!
//! Parsers are pure. They borrow the caller's bytes, never read past the
//! slice they are given and report failures as `error::DecodeError`. Choosing
//! which decoder runs next is the job of `crate::dissect`.

pub mod arp;
pub mod bootp;
pub(crate) mod common;
pub mod dhcp;
pub mod error;
pub mod ethernet;
pub mod ipv4;
pub mod tcp;
pub mod udp;
