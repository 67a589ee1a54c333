pub mod common;
pub mod u508_product_analysis;
