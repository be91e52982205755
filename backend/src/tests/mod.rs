pub mod common;

mod product_service_test;
