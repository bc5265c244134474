//! Shared constants for the portfolio page.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference (`"dark"` or `"light"`).
pub const THEME_STORAGE_KEY: &str = "theme";

/// `localStorage` key holding the JSON-encoded contact draft.
pub const DRAFT_STORAGE_KEY: &str = "contact_draft";

// ── Scroll ──────────────────────────────────────────────────────

/// Vertical offset in CSS pixels past which the back-to-top control shows.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 600.0;

// ── Contact form ────────────────────────────────────────────────

/// Upper bound advertised by the message character counter.
pub const MESSAGE_MAX_CHARS: usize = 500;

/// Minimum trimmed message length accepted on submit.
pub const MESSAGE_MIN_CHARS: usize = 10;

pub const ERR_NAME: &str = "Please enter your name.";
pub const ERR_EMAIL: &str = "Enter a valid email like name@example.com";
pub const ERR_DOB: &str = "Pick a date.";
pub const ERR_MESSAGE: &str = "Message must be at least 10 characters.";

pub const SUBMIT_CONFIRMATION: &str = "Thanks! Your message has been (pretend) sent.";

// ── Header ──────────────────────────────────────────────────────

pub const CONTACT_EMAIL: &str = "lamausa17@gmail.com";

/// Element id of the contact section scrolled to by "Hire me".
pub const CONTACT_SECTION_ID: &str = "contact";
