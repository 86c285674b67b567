//! Docshard Shard: producers and the generated shard script format
//!
//! A shard is the per-trait data file the doc generator emits. This crate
//! reads and writes that format and wraps a parsed shard in a
//! [`ShardProducer`], which hands it to a page's registry exactly once per
//! execution.
//!
//! # Example
//!
//! ```
//! use docshard_registry::{PageEnvironment, RegistryHost};
//! use docshard_shard::display;
//!
//! let env = PageEnvironment::default();
//! display::display_producer().unwrap().run(&env);
//! RegistryHost::new(env.clone()).install();
//!
//! assert!(env.with_registry(|r| r.contains(display::DISPLAY_CAPABILITY, "winit")));
//! ```

pub mod codec;
pub mod display;
pub mod producer;

pub use codec::{parse_shard_script, read_shard_file, render_shard_script};
pub use producer::ShardProducer;
