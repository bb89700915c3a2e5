mod loader;

pub use loader::{list_datasets, read_records, DatasetFormat};
