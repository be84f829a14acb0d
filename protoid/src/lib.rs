//! Protocol ids of the trading API, generated from the protocol identifier registry.
//!
//! Names are the registry names with underscores removed, e.g. `Trd_GetAccList` is looked up as
//! `"TrdGetAccList"` and defined as [`ids::TRD_GET_ACC_LIST`].


include!(concat!(env!("OUT_DIR"), "/protoid_generated.rs"));
