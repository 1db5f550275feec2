pub mod generator;
#[cfg(test)]
pub(crate) mod scripted;

#[cfg(feature = "gemini")]
pub mod client;
#[cfg(feature = "gemini")]
pub mod types;

pub use generator::*;
#[cfg(test)]
pub(crate) use scripted::ScriptedGenerator;

#[cfg(feature = "gemini")]
pub use client::*;
#[cfg(feature = "gemini")]
pub use types::*;
