use leptos::prelude::*;

/// Cookie holding the visitor's chosen color mode
pub const THEME_COOKIE: &str = "showcase-theme";

/// Accent colors the picker cycles through
pub const OCEAN_COLORS: [&str; 2] = ["#56C1D1", "#90EE90"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Class set applied to the page root
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            ColorMode::Light => "app app--light",
            ColorMode::Dark => "app app--dark",
        }
    }

    /// Pick the mode out of a raw `Cookie` header value
    #[must_use]
    pub fn from_cookie_header(header: &str) -> Option<Self> {
        header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == THEME_COOKIE)
            .and_then(|(_, value)| value.parse().ok())
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Light => write!(f, "light"),
            ColorMode::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(format!("unknown color mode: {s}")),
        }
    }
}

/// Position in [`OCEAN_COLORS`], wrapping at both ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccentIndex(usize);

impl AccentIndex {
    #[must_use]
    pub fn next(self) -> Self {
        Self((self.0 + 1) % OCEAN_COLORS.len())
    }

    #[must_use]
    pub fn prev(self) -> Self {
        if self.0 == 0 {
            Self(OCEAN_COLORS.len() - 1)
        } else {
            Self(self.0 - 1)
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        OCEAN_COLORS[self.0 % OCEAN_COLORS.len()]
    }
}

/// Theme state passed down the tree in place of document-level side effects
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub mode: ReadSignal<ColorMode>,
    pub set_mode: WriteSignal<ColorMode>,
    pub accent: ReadSignal<AccentIndex>,
    pub set_accent: WriteSignal<AccentIndex>,
}

impl ThemeContext {
    /// Create the signals and register the context for descendants
    pub fn provide(initial: ColorMode) -> Self {
        let (mode, set_mode) = signal(initial);
        let (accent, set_accent) = signal(AccentIndex::default());
        let ctx = Self {
            mode,
            set_mode,
            accent,
            set_accent,
        };
        provide_context(ctx);
        ctx
    }

    /// Inline style exposing the accent as a CSS custom property
    pub fn root_style(&self) -> String {
        format!("--accent-color: {}", self.accent.get().color())
    }
}

/// Mode the visitor chose on a previous visit, read from the request cookie
#[cfg(feature = "ssr")]
#[must_use]
pub fn initial_color_mode() -> ColorMode {
    use_context::<axum::http::request::Parts>()
        .and_then(|parts| {
            parts
                .headers
                .get(axum::http::header::COOKIE)
                .and_then(|v| v.to_str().ok())
                .and_then(ColorMode::from_cookie_header)
        })
        .unwrap_or_default()
}

#[cfg(not(feature = "ssr"))]
#[must_use]
pub fn initial_color_mode() -> ColorMode {
    #[cfg(target_arch = "wasm32")]
    {
        use leptos::wasm_bindgen::prelude::wasm_bindgen;

        #[wasm_bindgen(inline_js = "export function get_cookies() { return document.cookie; }")]
        extern "C" {
            fn get_cookies() -> String;
        }

        ColorMode::from_cookie_header(&get_cookies()).unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        ColorMode::default()
    }
}
