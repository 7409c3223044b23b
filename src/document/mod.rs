//! The declarative form of a pipeline and its YAML reader/writer.

pub mod parse;
pub mod render;
pub mod schema;

pub use parse::*;
pub use render::*;
pub use schema::*;

/// A small CSV-cleaning pipeline used as the initial document in new
/// editing sessions and by the `init` CLI subcommand.
pub const STARTER_PIPELINE: &str = r#"nodes:
  load_data:
    function: read_csv
    params:
      file_path: data/reservoir_levels.csv
      separator: ","
    vars: df

  drop_nulls:
    function: drop_nans
    params:
      df: df
    vars: df_cleaned
    dependencies:
      - load_data

  rename_columns:
    function: rename
    params:
      df: df_cleaned
      mapping: { "reservoir": "station" }
    vars: renamed_df
    dependencies:
      - drop_nulls
"#;
