// Render module - text presentation of a JSON document.
// This is the collaborator that calls into the rule engine: for every
// composite node it asks the RuleSet for a summary and shows it next to the
// structural hint. The engine never depends on anything in here.

pub mod path;
pub mod search;
pub mod tree;

pub use path::{breadcrumb, resolve_path, Segment};
pub use search::find_paths;
pub use tree::{
    collapse_indicator, first_complex_root_key, is_date_like, order_keys, structural_hint,
    ColorMode, TreeRenderer,
};
