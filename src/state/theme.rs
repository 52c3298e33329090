//! Site colour theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Colour theme; the site is dark unless the visitor chose light.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Interpret a stored preference. Anything but `"light"` is dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Value persisted to `localStorage`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Label of the toggle button.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "🌙",
            Self::Light => "☀️",
        }
    }

    /// Whether `<body>` carries the `light-theme` class.
    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}
