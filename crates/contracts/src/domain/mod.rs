pub mod b001_brand;
