//! Entity types for the imaging metadata store.
//!
//! One type per table (Patient ⊃ Study ⊃ Series ⊃ Image), plus the
//! flattened `ImageInfo` projection served by the filename lookup. The
//! store itself is owned by an external ingestion process; these types
//! only mirror its rows for serialization.

pub mod image;
pub mod patient;
pub mod series;
pub mod study;

pub use image::{Image, ImageInfo};
pub use patient::Patient;
pub use series::Series;
pub use study::Study;
