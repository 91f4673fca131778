pub mod export;
pub mod list;
pub mod show;

use ql_core::Library;

/// Load the quest library. There is one built-in catalog; it is constructed
/// fresh for every command and never written back anywhere.
pub fn load_library() -> Library {
    Library::builtin()
}
