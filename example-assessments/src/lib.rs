//! Ready-made assessment documents for demos and tests.
//!
//! Each module builds one complete document the way a hiring manager
//! would: realistic sections, a mix of question types, and conditional
//! follow-ups. `support_screen` additionally carries the defects a
//! long-lived document accumulates, for exercising degraded rendering.

pub mod engineering_screen;
pub mod support_screen;

pub use engineering_screen::engineering_screen;
pub use support_screen::support_screen;
