//! Structured output of a frame dissection.
//!
//! Decoders never print. They produce layers of labelled fields, each tagged
//! with the detail tier it belongs to; `render` decides later which tiers a
//! given verbosity shows.

use std::fmt;

use crate::protocols::error::DecodeError;

/// Detail tier carried by every output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tier {
    /// Frame and layer markers, shown even at verbosity 0.
    Marker = 0,
    Essential = 1,
    Common = 2,
    Detailed = 3,
}

impl Tier {
    pub fn level(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub tier: Tier,
    pub label: String,
    pub value: String,
    pub children: Vec<Field>,
}

impl Field {
    pub fn new(tier: Tier, label: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            tier,
            label: label.into(),
            value: value.to_string(),
            children: Vec::new(),
        }
    }

    pub fn group(tier: Tier, label: impl Into<String>, children: Vec<Field>) -> Self {
        Self {
            tier,
            label: label.into(),
            value: String::new(),
            children,
        }
    }
}

/// One decoded (or partially decoded) protocol layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub title: String,
    pub fields: Vec<Field>,
    pub notes: Vec<Note>,
}

impl Layer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// A layer whose header could not be decoded; no fields, one note.
    pub fn failed(title: impl Into<String>, err: &DecodeError) -> Self {
        let mut layer = Self::new(title);
        layer.note(Tier::Essential, err.to_string());
        layer
    }

    pub fn field(&mut self, tier: Tier, label: impl Into<String>, value: impl fmt::Display) {
        self.fields.push(Field::new(tier, label, value));
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn note(&mut self, tier: Tier, text: impl Into<String>) {
        self.notes.push(Note {
            tier,
            text: text.into(),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub tier: Tier,
    pub text: String,
}

/// All layers decoded from one frame, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameDissection {
    pub layers: Vec<Layer>,
}

impl FrameDissection {
    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn layer(&self, title: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.title == title)
    }
}

/// Capture metadata printed above a frame's layers.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameMeta {
    pub index: u64,
    pub ts: Option<f64>,
    pub captured_len: usize,
    pub orig_len: Option<u32>,
}
