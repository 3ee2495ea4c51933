//! Screen compositor.
//!
//! Turns an `EditorState` into one batched terminal frame: visible text rows
//! with syntax colours, a status bar and a message bar, then the cursor.
//!
//! Exposed components:
//! - `compositor`: frame assembly (`compose_frame`).
//! - `writer`: ordered command list serialized in a single write.
//! - `status`: status bar segments and fixed-width layout.
//! - `style`: highlight class colours and control byte placeholders.

pub mod compositor;
pub mod status;
pub mod style;
pub mod writer;

pub use compositor::{VERSION, compose_frame, welcome_message};
pub use status::{StatusContext, StatusSegment, build_status, compose_status, format_status};
pub use style::{color_for, control_placeholder};
pub use writer::{Command, Writer};
