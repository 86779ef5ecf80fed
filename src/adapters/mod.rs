// Adapters layer: concrete sources for measurement data.

pub mod csv_fixture;
