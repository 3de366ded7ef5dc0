//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors, styles and visual constants, so the
//! screens never hardcode a color.
//!
//! # Usage
//! ```rust
//! use nis2tui::theme::{Colors, Styles, Theme};
//! use nis2tui::scoring::Tier;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let badge = Theme::tier_style(Tier::Critical);
//! ```

use ratatui::style::{Color, Modifier, Style};

use crate::scoring::Tier;

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Primary dark background - used for panels and overlays
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Gauge/progress bar background
    pub const BG_GAUGE: Color = Color::Rgb(40, 40, 50);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::Blue;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected item text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Progress bar fill
    pub const PROGRESS: Color = Color::Green;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Tier Colors
    // -------------------------------------------------------------------------

    pub const TIER_LIMITED: Color = Color::Green;
    pub const TIER_IMPORTANT: Color = Color::Yellow;
    pub const TIER_CRITICAL: Color = Color::Red;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Secondary text (gray)
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Section header inside the result text
    pub fn section() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    /// Inactive border style
    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Previously chosen answer (not under the cursor)
    pub fn chosen() -> Style {
        Style::default()
            .fg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Progress bar style
    pub fn progress() -> Style {
        Style::default().fg(Colors::PROGRESS).bg(Colors::BG_GAUGE)
    }

    /// Keybinding key in the nav bar
    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Semantic style lookups
pub struct Theme;

impl Theme {
    /// Accent color for a tier
    pub fn tier_color(tier: Tier) -> Color {
        match tier {
            Tier::Limited => Colors::TIER_LIMITED,
            Tier::Important => Colors::TIER_IMPORTANT,
            Tier::Critical => Colors::TIER_CRITICAL,
        }
    }

    /// Badge style for a tier (inverted, bold)
    pub fn tier_style(tier: Tier) -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Self::tier_color(tier))
            .add_modifier(Modifier::BOLD)
    }

    /// Checkbox marker for an infrastructure flag
    pub fn checkbox(checked: bool) -> &'static str {
        if checked { "[x]" } else { "[ ]" }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Help overlay width percentage
    pub const DIALOG_WIDTH_PCT: u16 = 60;

    /// Help overlay height percentage
    pub const DIALOG_HEIGHT_PCT: u16 = 70;

    /// Minimum overlay width
    pub const DIALOG_MIN_WIDTH: u16 = 40;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Header height (banner + progress gauge)
    pub const HEADER_HEIGHT: u16 = 6;

    /// Status bar height
    pub const STATUS_BAR_HEIGHT: u16 = 1;

    /// Lines scrolled by PgUp/PgDn on the result screen
    pub const PAGE_SCROLL_SIZE: u16 = 10;
}

/// Common UI text strings
pub struct UiText;

impl UiText {
    pub const APP_TITLE: &'static str = "NIS2 Exposure Check";
    pub const DISCLAIMER: &'static str =
        "Indicative self-assessment only. Confirm your status with your national competent authority.";
    pub const PRESS_ESC: &'static str = "Press ? or Esc to close";
}
