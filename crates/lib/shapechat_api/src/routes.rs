//! Route path constants.

/// GET / — service status and endpoint listing
pub const GET_ROOT: &str = "/";

/// POST /api/chat — send a chat message
pub const POST_API_CHAT: &str = "/api/chat";

/// GET, PUT /api/config — read or replace the MCP server configuration
pub const API_CONFIG: &str = "/api/config";

/// GET /api/sessions/{id} — chat session history
pub const GET_API_SESSIONS_ID: &str = "/api/sessions/{id}";

/// Human-readable endpoint list reported by `GET /`.
pub const ENDPOINTS: &[&str] = &[
    "POST /api/chat - Send chat messages",
    "GET /api/config - Get current configuration",
    "PUT /api/config - Update configuration",
    "GET /api/sessions/{id} - Get chat session history",
];
