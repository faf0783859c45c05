//! Data models shared across the importer.

mod tracks;

pub use tracks::{
    AnnotationRecord, FieldValue, TrackSchema, TrackSpec, EMPTY_PLACEHOLDER,
};
