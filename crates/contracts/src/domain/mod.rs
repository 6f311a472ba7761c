pub mod common;

pub mod a001_product;
pub mod a002_category;
pub mod a003_brand;
pub mod a004_department;
pub mod a005_banner;
pub mod a006_customer;
