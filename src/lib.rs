//! abysswatch: headless boss-arena encounter built on the authoritative
//! combat core. This crate wires one authority to N loopback replicas; the
//! interesting logic lives in `server_core` and `net_core`.

pub mod loopback;
