mod beacon;

pub use beacon::{Beacon, BEACON_BODY_LEN, CAPABILITY_ESS, DEFAULT_BEACON_INTERVAL};
