use crate::logger;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub const THEME_PREFERENCE_KEY: &str = "theme_preference";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::White,
                text: Color::Black,
                accent: Color::Magenta,
                highlight: Color::Blue,
                muted: Color::Gray,
                success: Color::Green,
                warning: Color::Red,
            },
            Theme::Dark => Palette {
                background: Color::Reset,
                text: Color::White,
                accent: Color::Cyan,
                highlight: Color::Yellow,
                muted: Color::DarkGray,
                success: Color::Green,
                warning: Color::LightRed,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub highlight: Color,
    pub muted: Color,
    pub success: Color,
    pub warning: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// Where the user's choice is remembered between runs.
pub trait PreferenceStore {
    fn load_preference(&self) -> Option<ThemePreference>;
    fn save_preference(&self, preference: ThemePreference) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Theme)>;

pub struct ThemeStore<S: PreferenceStore> {
    store: S,
    preference: ThemePreference,
    system: Theme,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S: PreferenceStore> std::fmt::Debug for ThemeStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("preference", &self.preference)
            .field("system", &self.system)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<S: PreferenceStore> ThemeStore<S> {
    pub fn init(store: S, system: Theme) -> Self {
        let preference = store.load_preference().unwrap_or_default();
        logger::info(&format!(
            "Theme initialised: preference {:?}, system {:?}",
            preference, system
        ));
        Self {
            store,
            preference,
            system,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn resolved(&self) -> Theme {
        match self.preference {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::System => self.system,
        }
    }

    pub fn palette(&self) -> Palette {
        self.resolved().palette()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn notify_if_changed(&mut self, previous: Theme) {
        let current = self.resolved();
        if current != previous {
            for (_, listener) in self.listeners.iter_mut() {
                listener(current);
            }
        }
    }

    pub fn set_preference(&mut self, preference: ThemePreference) {
        let previous = self.resolved();
        self.preference = preference;
        if let Err(e) = self.store.save_preference(preference) {
            logger::error(&format!("Failed to persist theme preference: {}", e));
        }
        logger::info(&format!("Theme preference set to {:?}", preference));
        self.notify_if_changed(previous);
    }

    /// Flips the visible theme and pins it as an explicit preference.
    pub fn toggle(&mut self) -> Theme {
        let next = match self.resolved().opposite() {
            Theme::Light => ThemePreference::Light,
            Theme::Dark => ThemePreference::Dark,
        };
        self.set_preference(next);
        self.resolved()
    }

    pub fn set_system_theme(&mut self, system: Theme) {
        let previous = self.resolved();
        self.system = system;
        self.notify_if_changed(previous);
    }
}
