//! Theme context
//!
//! Light/dark mode plus an accent colour, both persisted in local storage and
//! applied as classes on `<html>`.

use crate::web::{KeyValueStore, LocalStorage};
use leptos::prelude::*;

const THEME_KEY: &str = "theme";
const COLOR_THEME_KEY: &str = "colorTheme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTheme {
    #[default]
    Blue,
    Red,
    Green,
    Yellow,
    Pink,
    Purple,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 6] = [
        ColorTheme::Blue,
        ColorTheme::Red,
        ColorTheme::Green,
        ColorTheme::Yellow,
        ColorTheme::Pink,
        ColorTheme::Purple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTheme::Blue => "blue",
            ColorTheme::Red => "red",
            ColorTheme::Green => "green",
            ColorTheme::Yellow => "yellow",
            ColorTheme::Pink => "pink",
            ColorTheme::Purple => "purple",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorTheme::Blue => "Blue",
            ColorTheme::Red => "Red",
            ColorTheme::Green => "Green",
            ColorTheme::Yellow => "Yellow",
            ColorTheme::Pink => "Pink",
            ColorTheme::Purple => "Purple",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    /// Blue is the stylesheet's base palette and has no class.
    pub fn accent_class(&self) -> Option<String> {
        match self {
            ColorTheme::Blue => None,
            other => Some(format!("theme-{}", other.as_str())),
        }
    }

    pub fn gradient_class(&self) -> String {
        format!("gradient-bg-{}", self.as_str())
    }

    /// Swatch colour for the theme picker.
    pub fn swatch_class(&self) -> &'static str {
        match self {
            ColorTheme::Blue => "bg-blue-500",
            ColorTheme::Red => "bg-red-500",
            ColorTheme::Green => "bg-green-500",
            ColorTheme::Yellow => "bg-yellow-500",
            ColorTheme::Pink => "bg-pink-500",
            ColorTheme::Purple => "bg-purple-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemePreferences {
    pub theme: Theme,
    pub color: ColorTheme,
}

impl ThemePreferences {
    /// Stored values win; otherwise the system preference and blue.
    pub fn load<S: KeyValueStore>(store: &S, prefers_dark: bool) -> Self {
        let theme = store
            .get(THEME_KEY)
            .and_then(|s| Theme::parse(&s))
            .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light });
        let color = store
            .get(COLOR_THEME_KEY)
            .and_then(|s| ColorTheme::parse(&s))
            .unwrap_or_default();
        Self { theme, color }
    }

    pub fn save<S: KeyValueStore>(&self, store: &S) {
        store.set(THEME_KEY, self.theme.as_str());
        store.set(COLOR_THEME_KEY, self.color.as_str());
    }
}

/// Classes `<html>` should carry for these preferences.
pub fn root_classes(prefs: &ThemePreferences) -> Vec<String> {
    let mut classes = vec![prefs.theme.as_str().to_string()];
    classes.extend(prefs.color.accent_class());
    classes.push(prefs.color.gradient_class());
    classes
}

/// Every class [`root_classes`] can produce; removed before re-applying.
pub fn all_managed_classes() -> Vec<String> {
    let mut classes = vec![
        Theme::Light.as_str().to_string(),
        Theme::Dark.as_str().to_string(),
    ];
    for color in ColorTheme::ALL {
        classes.extend(color.accent_class());
        classes.push(color.gradient_class());
    }
    classes
}

// =========================================================
// DOM
// =========================================================

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_to_root(prefs: &ThemePreferences) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let list = root.class_list();
    for class in all_managed_classes() {
        let _ = list.remove_1(&class);
    }
    for class in root_classes(prefs) {
        let _ = list.add_1(&class);
    }
    let _ = root.set_attribute("data-theme", prefs.theme.as_str());
}

// =========================================================
// Context
// =========================================================

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
    pub color: RwSignal<ColorTheme>,
}

impl ThemeContext {
    pub fn new(prefs: ThemePreferences) -> Self {
        Self {
            theme: RwSignal::new(prefs.theme),
            color: RwSignal::new(prefs.color),
        }
    }

    pub fn preferences(&self) -> ThemePreferences {
        ThemePreferences {
            theme: self.theme.get(),
            color: self.color.get(),
        }
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
    }

    pub fn set_color_theme(&self, color: ColorTheme) {
        self.color.set(color);
    }
}

/// Creates the context from storage and keeps `<html>` and storage in sync.
pub fn provide_theme() -> ThemeContext {
    let ctx = ThemeContext::new(ThemePreferences::load(&LocalStorage, system_prefers_dark()));

    Effect::new(move |_| {
        let prefs = ctx.preferences();
        log::debug!(
            "Applying theme {} / {}",
            prefs.theme.as_str(),
            prefs.color.as_str()
        );
        apply_to_root(&prefs);
        prefs.save(&LocalStorage);
    });

    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::MemoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_falls_back_to_system_preference_and_blue() {
        let store = MemoryStore::new();
        assert_eq!(
            ThemePreferences::load(&store, true),
            ThemePreferences {
                theme: Theme::Dark,
                color: ColorTheme::Blue,
            }
        );
    }

    #[test]
    fn stored_values_win_and_garbage_is_ignored() {
        let store = MemoryStore::new();
        store.set("theme", "light");
        store.set("colorTheme", "magenta");
        let prefs = ThemePreferences::load(&store, true);
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.color, ColorTheme::Blue);

        ThemePreferences {
            theme: Theme::Dark,
            color: ColorTheme::Pink,
        }
        .save(&store);
        assert_eq!(store.get("colorTheme").as_deref(), Some("pink"));
        assert_eq!(ThemePreferences::load(&store, false).theme, Theme::Dark);
    }

    #[test]
    fn root_classes_skip_the_blue_accent() {
        let blue = ThemePreferences::default();
        assert_eq!(root_classes(&blue), vec!["light", "gradient-bg-blue"]);

        let red = ThemePreferences {
            theme: Theme::Dark,
            color: ColorTheme::Red,
        };
        assert_eq!(root_classes(&red), vec!["dark", "theme-red", "gradient-bg-red"]);
    }

    #[test]
    fn managed_classes_cover_every_combination() {
        let managed = all_managed_classes();
        assert_eq!(managed.len(), 2 + 5 + 6);
        for color in ColorTheme::ALL {
            let prefs = ThemePreferences {
                theme: Theme::Dark,
                color,
            };
            for class in root_classes(&prefs) {
                assert!(managed.contains(&class), "{} not managed", class);
            }
        }
    }

    #[test]
    fn toggle_flips_the_signal() {
        Owner::new().with(|| {
            let ctx = ThemeContext::new(ThemePreferences::default());
            ctx.toggle_theme();
            assert_eq!(ctx.theme.get_untracked(), Theme::Dark);
            ctx.set_color_theme(ColorTheme::Green);
            assert_eq!(ctx.color.get_untracked(), ColorTheme::Green);
        });
    }
}
