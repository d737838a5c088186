use serde::{Deserialize, Serialize};

/// Boolean view toggles. These only change what order keys are presented to
/// the rule engine, never what the engine itself does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewFlags {
    /// Sort object keys before rendering
    pub alphabetize_keys: bool,

    /// Move an `id` key to the front of its object
    pub hoist_id_to_top: bool,

    /// Open the first composite root key instead of the document root
    pub jump_to_complex_root_key: bool,
}
