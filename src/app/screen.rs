// SPDX-License-Identifier: MPL-2.0
//! Application screens reachable from the navigation menu.

/// Top-level screens of the showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Gallery,
    Contact,
}

impl Screen {
    /// All screens in menu order.
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::Gallery, Screen::Contact];

    /// Menu label for this screen.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Gallery => "Gallery",
            Screen::Contact => "Contact",
        }
    }
}
