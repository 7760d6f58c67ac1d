mod cli_client;
mod waiter;

pub use cli_client::{get_recommendations, parse_menu_image, search_dish_info};
pub use waiter::WaiterChat;
