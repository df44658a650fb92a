//! Stable identifiers for built-in audits and the artifacts they read.
//!
//! Audit names are kebab-case and appear verbatim in reports and config files.

// Artifacts
pub const ARTIFACT_CHROME_CONSOLE_MESSAGES: &str = "ChromeConsoleMessages";

// Audits
pub const AUDIT_NOTIFICATION_ON_START: &str = "notification-on-start";
pub const AUDIT_GEOLOCATION_ON_START: &str = "geolocation-on-start";
pub const AUDIT_NO_DOCUMENT_WRITE: &str = "no-document-write";
pub const AUDIT_USES_PASSIVE_EVENT_LISTENERS: &str = "uses-passive-event-listeners";

// Record sources
pub const SOURCE_VIOLATION: &str = "violation";

// Evidence row fields addressable by column headings.
pub const FIELD_URL: &str = "url";
pub const FIELD_LABEL: &str = "label";

// Tool-level
pub const AUDIT_TOOL_RUNTIME: &str = "tool-runtime";
