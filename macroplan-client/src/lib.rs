mod client;
mod food;
mod recommend;

pub use client::{
    create, ClientConfig, ClientImpl, Error, FoodLookup, MockFoodLookup, Result,
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
};
pub use food::FoodItem;
pub use recommend::{recommend_foods, search_terms, FoodRecommendations};
