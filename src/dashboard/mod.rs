pub mod events;
pub mod page;
pub mod session;

pub use events::InputEvent;
pub use page::{compose, PageContent};
pub use session::{DashboardSession, RenderedPage};
