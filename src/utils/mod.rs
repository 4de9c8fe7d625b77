pub mod linalg;
pub mod poly;

pub use poly::Polynomial;
