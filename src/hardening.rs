/// Maximum number of item files picked up from one directory
pub const MAX_FILES_PER_IMPORT: usize = 500;
/// Maximum size of a single item file in bytes
pub const MAX_FILE_BYTES: usize = 256 * 1024;            // 256 KB per item file
/// Maximum total size of all files in bytes
pub const MAX_TOTAL_BYTES: usize = 16 * 1024 * 1024;     // 16 MB per batch
/// Maximum size of a generated snippet handed to the Lua compiler
pub const MAX_LUA_BYTES: usize = 64 * 1024;              // 64 KB per snippet
/// Whether symlinked item files are followed
pub const ALLOW_SYMLINKS: bool = false;
