//! OKR Common - Shared model and normalization layer for OKR Board
//!
//! The backend API has shipped several response shapes over the years
//! (aliased field names, flat vs. pre-grouped lists). Everything in this
//! crate turns those raw shapes into one canonical, fully-defaulted model
//! that the rendering layer can trust.

pub mod adapter;
pub mod config;
pub mod filter;
pub mod group;
pub mod model;
pub mod normalize;
pub mod raw;
pub mod status;

pub use adapter::{adapt, ResponseShape};
pub use config::DashboardConfig;
pub use filter::OkrFilter;
pub use group::{group_objectives, DEFAULT_CATEGORY};
pub use model::{Category, KeyResult, Objective, ProgressRecord};
pub use normalize::{normalize_key_result, normalize_objective};
pub use raw::{DateValue, OwnerRef, OwnerSummary, RawKeyResult, RawObjective, RawProgressRecord};
pub use status::OkrStatus;
