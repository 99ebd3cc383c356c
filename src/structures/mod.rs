pub mod ext;
pub mod fp;
pub mod gf;
pub mod poly;
