//! Navigation intents and messages emitted by presentational components.

use std::fmt;
use std::str::FromStr;

use crate::content::PostId;

/// In-page section a navigation intent scrolls to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Services,
    Contact,
}

impl Anchor {
    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Contact => "contact",
        }
    }
}

/// Menu-level navigation target.
///
/// Services and contact are sections of the home view, not separate states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavIntent {
    Home,
    Services,
    Blog,
    Contact,
}

impl NavIntent {
    /// Menu order used by the nav bar and footer.
    pub const MENU: [NavIntent; 4] = [Self::Home, Self::Services, Self::Blog, Self::Contact];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::Blog => "blog",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::Blog => "Blog",
            Self::Contact => "Contact Us",
        }
    }

    pub fn anchor(self) -> Option<Anchor> {
        match self {
            Self::Services => Some(Anchor::Services),
            Self::Contact => Some(Anchor::Contact),
            Self::Home | Self::Blog => None,
        }
    }

    /// Link target for the rendered `<a>`.
    pub fn href(self) -> String {
        match self.anchor() {
            Some(anchor) => format!("#{}", anchor.id()),
            None => "#".to_string(),
        }
    }
}

impl fmt::Display for NavIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavIntent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::MENU
            .into_iter()
            .find(|intent| intent.as_str() == needle)
            .ok_or_else(|| format!("unknown navigation target: {s}"))
    }
}

/// Message sent from a component to the view controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavMessage {
    GoHome,
    GoToBlogList,
    SelectPost(PostId),
    Navigate(NavIntent),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_intent() {
        assert_eq!("services".parse::<NavIntent>(), Ok(NavIntent::Services));
        assert_eq!(" Blog ".parse::<NavIntent>(), Ok(NavIntent::Blog));
        assert_eq!("CONTACT".parse::<NavIntent>(), Ok(NavIntent::Contact));
        assert!("portfolio".parse::<NavIntent>().is_err());
    }

    #[test]
    fn test_anchors() {
        assert_eq!(NavIntent::Home.anchor(), None);
        assert_eq!(NavIntent::Blog.anchor(), None);
        assert_eq!(NavIntent::Services.href(), "#services");
        assert_eq!(NavIntent::Contact.href(), "#contact");
        assert_eq!(NavIntent::Home.href(), "#");
    }

    #[test]
    fn test_menu_labels() {
        let labels: Vec<_> = NavIntent::MENU.iter().map(|i| i.label()).collect();
        assert_eq!(labels, ["Home", "Services", "Blog", "Contact Us"]);
    }
}
