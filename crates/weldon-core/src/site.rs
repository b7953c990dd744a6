//! Business details loaded from the bundled `site.toml`.

use serde::Deserialize;

use crate::error::ConfigError;

/// Site configuration compiled into the binary.
const BUNDLED: &str = include_str!("../assets/site.toml");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub company: Company,
    pub contact: ContactDetails,
    pub reviews: Reviews,
    pub footer: FooterConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Company {
    pub name: String,
    pub short_name: String,
    pub tagline: String,
    pub logo_url: String,
    pub summary: String,
    #[serde(default)]
    pub experience: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactDetails {
    /// Display form, e.g. `01234 567 890`.
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub address: Vec<String>,
}

impl ContactDetails {
    /// `tel:` link with whitespace stripped.
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Reviews {
    pub rating: f32,
    pub count: u32,
}

impl Reviews {
    /// Whole stars to draw, clamped to 0..=5.
    pub fn stars(&self) -> usize {
        self.rating.round().clamp(0.0, 5.0) as usize
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FooterConfig {
    #[serde(default)]
    pub services: Vec<String>,
    pub copyright: String,
}

impl SiteConfig {
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Parse the bundled `site.toml`.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::parse(BUNDLED)
    }

    /// Bundled config, or the built-in defaults if it fails to parse.
    pub fn load() -> Self {
        Self::bundled().unwrap_or_else(|err| {
            log::error!("{err}; using default site config");
            Self::default()
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company: Company {
                name: "Weldon Young Surveyors".to_string(),
                short_name: "Weldon Young".to_string(),
                tagline: "Chartered Building Surveyors".to_string(),
                logo_url: String::new(),
                summary: String::new(),
                experience: String::new(),
            },
            contact: ContactDetails {
                phone: "01234 567 890".to_string(),
                email: "info@weldonyoung.co.uk".to_string(),
                address: Vec::new(),
            },
            reviews: Reviews {
                rating: 5.0,
                count: 0,
            },
            footer: FooterConfig {
                services: Vec::new(),
                copyright: "© Weldon Young Surveyors".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_parses() {
        let site = SiteConfig::bundled().unwrap();
        assert_eq!(site.company.short_name, "Weldon Young");
        assert_eq!(site.contact.address.len(), 3);
        assert_eq!(site.reviews.count, 113);
        assert_eq!(site.footer.services.len(), 5);
    }

    #[test]
    fn test_hrefs() {
        let site = SiteConfig::bundled().unwrap();
        assert_eq!(site.contact.phone_href(), "tel:01234567890");
        assert_eq!(site.contact.email_href(), "mailto:info@weldonyoung.co.uk");
    }

    #[test]
    fn test_stars() {
        let reviews = |rating| Reviews { rating, count: 1 };
        assert_eq!(reviews(4.9).stars(), 5);
        assert_eq!(reviews(3.4).stars(), 3);
        assert_eq!(reviews(9.0).stars(), 5);
        assert_eq!(reviews(-1.0).stars(), 0);
    }

    #[test]
    fn test_parse_error() {
        let err = SiteConfig::parse("[company]\nname = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_optional_fields_default() {
        let source = r#"
            [company]
            name = "A"
            short_name = "A"
            tagline = "T"
            logo_url = ""
            summary = ""

            [contact]
            phone = "1"
            email = "a@b.c"

            [reviews]
            rating = 4.0
            count = 2

            [footer]
            copyright = "c"
        "#;
        let site = SiteConfig::parse(source).unwrap();
        assert!(site.contact.address.is_empty());
        assert!(site.footer.services.is_empty());
    }
}
