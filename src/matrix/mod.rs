// Matrix core: stage resolution, feature ordering and the pipeline joining them

pub mod resolver;
pub mod sorter;
pub mod pipeline;

pub use resolver::*;
pub use sorter::*;
pub use pipeline::*;
