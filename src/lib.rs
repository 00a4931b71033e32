//! announce - spoken notifications for assistant hooks
//!
//! This library backs the `announce` binary:
//! - Input resolution (argument, hook JSON on stdin, raw stdin, default phrase)
//! - Content-addressed audio cache (MD5 of text + voice settings)
//! - Speech synthesis via the OpenAI TTS API
//! - Best-effort playback through system audio players
//!
//! The pipeline is strictly linear: resolve input, derive the cache key,
//! synthesize on miss, then play unless suppressed.

pub mod cache;
pub mod error;
pub mod input;
pub mod playback;
pub mod synth;

pub use cache::AudioCache;
pub use error::{Error, Result};
pub use input::resolve_text;
pub use synth::{Model, Synthesizer, Voice};
