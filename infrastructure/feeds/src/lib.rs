pub mod client;
pub mod news_feed;
pub mod product_feed;
pub mod weather;
