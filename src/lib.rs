pub mod base;
pub mod gen_data;
pub mod genotype;
pub mod helix;
pub mod output;
pub mod series;
pub mod settings;
pub mod utils;

pub use helix::{compute_helix_point, HelixConfig};
pub use series::{build_helix_series, HelixPoint};
