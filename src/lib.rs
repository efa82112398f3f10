//! Region classification for proxy node names.
//!
//! Subscription feeds name their nodes however they like: emoji flags,
//! Chinese labels, English city names, bare codes ("HK-01", "USA-Premium").
//! [`region_from_name`] maps any such label to a [`Region`] using an ordered
//! keyword table, with word-boundary checks so short codes never fire inside
//! unrelated words ("US" in "THRUST"). Names nothing recognizes collapse to
//! [`Region::Other`].
//!
//! ```
//! use proxy_region::{region_from_name, Region};
//!
//! assert_eq!(region_from_name("🇭🇰 香港 01 | IPLC"), Region::HK);
//! assert_eq!(region_from_name("korea-seoul-premium"), Region::KR);
//! assert_eq!(region_from_name("THRUST-01"), Region::Other);
//! ```

mod region {
    pub mod classify;
    pub mod regions;
    pub mod rules;
}

pub use region::classify::region_from_name;
pub use region::regions::{ParseRegionError, Region};
