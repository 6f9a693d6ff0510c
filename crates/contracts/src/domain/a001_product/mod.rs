pub mod aggregate;
pub mod card;
pub mod dto;
pub mod filter;
pub mod store;

pub use aggregate::ProductRecord;
pub use card::{build_cards, render_active, CardDescriptor, IMAGE_BASE};
pub use filter::{select_active, StatusFilter, ViewState, ALL_STATUSES, DEFAULT_SECTION};
pub use store::CatalogStore;
