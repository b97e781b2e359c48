//! tagfield - headless tag editor
//!
//! Turns a plain text value into an editable list of tags, following the Elm
//! Architecture pattern: messages update a model, side effects come back as
//! commands, and the view is re-rendered from the model after every message.

pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod draft;
pub mod engine;
pub mod field;
pub mod host;
pub mod messages;
pub mod model;
pub mod normalize;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::{Cmd, Effect};
pub use config::{TagConfig, TransformRegistry};
pub use engine::TagEngine;
pub use field::TagField;
pub use host::{HostElement, TextHost};
pub use messages::Msg;
pub use model::TagFieldModel;
pub use normalize::TagInput;
pub use view::FieldView;
