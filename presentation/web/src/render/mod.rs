//! Pure `snapshot -> markup` functions. Nothing here touches the store.

mod escape;

pub mod catalog;
pub mod feed;
pub mod news;
pub mod page;
pub mod session;
pub mod weather;

pub use catalog::{render_products, render_providers, render_stats};
pub use feed::render_feed_table;
pub use news::render_news;
pub use page::{PageView, render_error, render_page};
pub use session::render_session;
pub use weather::render_weather;
