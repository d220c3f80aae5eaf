// ABOUTME: Core types for the laundry tracker
// ABOUTME: Foundational package shared by storage, API and CLI

pub mod patch;
pub mod types;
pub mod validation;

// Re-export main types
pub use patch::Patch;
pub use types::{
    normalize_tag_id, LaundryItem, LaundryItemCreateInput, LaundryItemUpdateInput,
    LaundryItemUpdateRequest, LaundryStatus,
};

// Re-export validation
pub use validation::ValidationError;
