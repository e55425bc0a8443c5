//! Song processing pipeline
//!
//! - Notes: note name table and pitch frequencies
//! - Parser: note sequence text into typed notes
//! - Song: JSON song and track descriptions
//! - Render: per-track synthesis and mixdown

pub mod notes;
pub mod parser;
pub mod render;
pub mod song;

pub use notes::{frequency, Tone};
pub use parser::{parse_note_sequence, Note};
pub use render::{mixdown, RenderConfig, SongRenderer};
pub use song::{Song, Track};
