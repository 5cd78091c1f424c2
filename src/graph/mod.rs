pub mod error;
pub mod item;
pub mod traits;

pub use error::GraphError;
pub use item::Graph;
pub use traits::Measure;
