//! Menu AI Common Library
//!
//! CLI各コマンドで共有される型とコアロジック

pub mod bill;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod order;
pub mod parser;
pub mod price;
pub mod prompts;
pub mod types;

pub use bill::{BillBreakdown, BillSplit, TIP_PRESETS};
pub use catalog::{DiningState, MenuCatalog};
pub use error::{Error, Result};
pub use filter::{evaluate, DietWarning, DishVerdict, FilterState};
pub use order::OrderLedger;
pub use parser::{extract_json, parse_dish_info, parse_menu_response, parse_recommendations};
pub use types::{
    Dish, DishInfo, ParsedMenu, PersistedSnapshot, Recommendation, RestaurantInfo, SourceRef,
};
