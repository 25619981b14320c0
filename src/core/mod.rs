//! # Core Components
//!
//! The connector description value type, its wire codec, and the
//! alternative storage formats built on top of it.
//!
//! ## Components
//! - **Description**: immutable `host:port` + role record for one hub
//! - **Codec**: fixed-width binary encoding of an ordered list of descriptions
//! - **Serialization**: Wire, Bincode, JSON and MessagePack behind one trait
//!
//! ## Wire Format
//! ```text
//! [Count(4)] { [HostLen(2)] [Host(N)] [Port(2)] [IsServer(1)] } * Count
//! ```
//!
//! ## Safety Limits
//! - Record count capped by `max_connectors` (default 1024)
//! - Host names capped by `max_host_name_len` (default: the 65535-byte field
//!   maximum; configuration narrows it to 255)
//! - Length validation before any slice is taken

pub mod codec;
pub mod description;
pub mod serialization;
