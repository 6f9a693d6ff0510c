pub mod u501_update_price;
pub mod u502_check_published;
