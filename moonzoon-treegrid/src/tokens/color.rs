// Color Token System
// Reactive approach using theme signals

use super::theme::{Theme, theme};
use zoon::*;

// Table stripe colors - Reactive signals
pub fn table_stripe_base() -> impl Signal<Item = &'static str> {
    theme().map(|t| table_stripe_base_value(t))
}

pub fn table_stripe_tinted() -> impl Signal<Item = &'static str> {
    theme().map(|t| table_stripe_tinted_value(t))
}

// Snapshot values for imperative inline styling. The light pair keeps the
// report pages' original colors.
pub fn table_stripe_base_value(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "white",
        Theme::Dark => "oklch(14% 0.025 255)",
    }
}

pub fn table_stripe_tinted_value(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "#f0fcfe",
        Theme::Dark => "oklch(19% 0.035 230)",
    }
}
