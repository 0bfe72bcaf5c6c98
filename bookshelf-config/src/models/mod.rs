pub mod browse;
pub mod catalog_data;
