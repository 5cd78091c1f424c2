mod measure;

pub use measure::Measure;
