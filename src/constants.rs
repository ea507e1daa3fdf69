/// Maximum length of a client-provided session identifier
pub const MAX_SESSION_ID_LEN: usize = 128;

/// Maximum length of a ball colour name
pub const MAX_COLOR_LEN: usize = 64;

/// Default HTTP port (matches the game client's dev server)
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default size of the database connection pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a missing or blank session ID
pub const ERR_SESSION_ID_REQUIRED: &str = "Session ID is required";

/// Error message for an overlong session ID
pub const ERR_SESSION_ID_TOO_LONG: &str = "Session ID must be at most 128 characters";

/// Error message for a missing or blank winning colour
pub const ERR_WINNING_COLOR_REQUIRED: &str = "Winning ball color is required";

/// Error message for colour names over the length limit
pub const ERR_COLOR_TOO_LONG: &str = "Ball color must be at most 64 characters";
