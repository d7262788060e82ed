//! Domain layer constants
//!
//! Configuration path prefixes, session keys and translation domains shared
//! across the engine. Infrastructure-specific constants (config discovery,
//! environment prefix) live here as well because the configuration port is
//! defined in this crate.

// ============================================================================
// CONFIGURATION PATHS
// ============================================================================

/// Prefix of all HTML client configuration paths
pub const CONFIG_CLIENT_PREFIX: &str = "client/html";

/// Path of the decorator list applied to every client by default
pub const CONFIG_COMMON_DECORATORS: &str = "client/html/common/decorators/default";

/// Implementation name used when a client has no `name` configured
pub const DEFAULT_CLIENT_NAME: &str = "Standard";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "VITRINE";

/// Default configuration file name searched in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "vitrine.toml";

/// Directory name used below the user config/home directories
pub const DEFAULT_CONFIG_DIR: &str = "vitrine";

// ============================================================================
// SESSION KEYS AND REQUEST PARAMETERS
// ============================================================================

/// Session key storing the language selected by the visitor
pub const SESSION_LANGUAGE_ID: &str = "vitrine/locale/languageid";

/// Session key storing the currency selected by the visitor
pub const SESSION_CURRENCY_ID: &str = "vitrine/locale/currencyid";

/// Request parameter carrying a language selection
pub const PARAM_LANGUAGE_ID: &str = "loc-languageid";

/// Request parameter carrying a currency selection
pub const PARAM_CURRENCY_ID: &str = "loc-currencyid";

// ============================================================================
// TRANSLATION DOMAINS
// ============================================================================

/// Catalog domain for view-layer messages
pub const I18N_CLIENT: &str = "client";

/// Catalog domain for frontend/business-logic messages
pub const I18N_FRONTEND: &str = "frontend";

/// Catalog domain for data-layer messages
pub const I18N_DATA: &str = "data";

/// Message shown to the visitor when an unexpected error was swallowed
pub const MSG_UNRECOVERABLE: &str = "A non-recoverable error occurred";
