//! Export bridge: renders a resume into PDF or Word bytes. Output is
//! deterministic at the content level; the underlying renderers embed their
//! own timestamps and font metadata.

pub mod handlers;
pub mod html;
pub mod pdf;
pub mod word;
