pub mod composer;
pub mod descriptor;
pub mod filter_state;
pub mod season;

pub use composer::{ComposedQuery, QueryComposer, QueryMode, QueryPlan};
pub use descriptor::{RequestDescriptor, RequestKind};
pub use filter_state::{FilterState, SortKey, TypeFilter};
pub use season::Season;
