//! Channel implementations

pub mod console;
pub mod memory;
pub mod null;

#[cfg(feature = "file")]
pub mod file;
#[cfg(feature = "file")]
pub mod rotating_file;

pub use console::ConsoleChannel;
pub use memory::MemoryChannel;
pub use null::NullChannel;

#[cfg(feature = "file")]
pub use file::FileChannel;
#[cfg(feature = "file")]
pub use rotating_file::RotatingFileChannel;

pub use crate::core::{Channel, ChannelHandle};
