// Theme Management System

use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

static THEME: Lazy<Mutable<Theme>> = Lazy::new(|| {
    // Report pages default to the light theme
    Mutable::new(Theme::Light)
});

/// Initialize the theme from localStorage
pub fn init_theme() {
    let stored_theme = local_storage()
        .get("treegrid-theme")
        .unwrap_or(Ok(String::new()))
        .unwrap_or_default();

    let theme_to_use = match stored_theme.as_str() {
        "dark" => Theme::Dark,
        _ => Theme::Light,
    };

    THEME.set(theme_to_use);
}

/// Get the current theme as a signal for reactive updates
pub fn theme() -> impl Signal<Item = Theme> {
    THEME.signal()
}

/// Get the current theme value (non-reactive)
pub fn current_theme() -> Theme {
    THEME.get()
}

/// Set the current theme and persist it to localStorage
pub fn set_theme(new_theme: Theme) {
    THEME.set(new_theme);

    let theme_str = match new_theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    };
    let _ = local_storage().insert("treegrid-theme", theme_str);
}

/// Toggle between light and dark themes
pub fn toggle_theme() {
    let new_theme = match current_theme() {
        Theme::Light => Theme::Dark,
        Theme::Dark => Theme::Light,
    };
    set_theme(new_theme);
}
