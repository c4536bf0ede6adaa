//! Site identity shown by the chrome around each screen.

/// The fixed site-owner identity and head metadata.
///
/// A front-end bundle has no runtime environment to read, so overrides
/// are picked up at build time and fall back to the owner's defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteInfo {
    /// Window/tab title.
    pub window_title: String,
    /// Heading on the landing page.
    pub heading: String,
    /// Meta description of the landing page.
    pub description: String,
    /// Owner name, used as the label of the header's external link.
    pub author: String,
    /// Handle shown in the landing-page byline.
    pub author_handle: String,
    /// Where the byline and the header's external link point by default.
    pub author_url: String,
}

impl SiteInfo {
    /// Reads the identity from build-time environment variables:
    /// `PORTFOLIO_TITLE`, `PORTFOLIO_HEADING`, `PORTFOLIO_DESCRIPTION`,
    /// `PORTFOLIO_AUTHOR`, `PORTFOLIO_AUTHOR_HANDLE` and
    /// `PORTFOLIO_AUTHOR_URL`.
    pub fn from_env() -> Self {
        Self {
            window_title: option_env!("PORTFOLIO_TITLE").unwrap_or("MZ").to_owned(),
            heading: option_env!("PORTFOLIO_HEADING").unwrap_or("Miko").to_owned(),
            description: option_env!("PORTFOLIO_DESCRIPTION")
                .unwrap_or("portfolio beta")
                .to_owned(),
            author: option_env!("PORTFOLIO_AUTHOR")
                .unwrap_or("Mariam Zahw")
                .to_owned(),
            author_handle: option_env!("PORTFOLIO_AUTHOR_HANDLE")
                .unwrap_or("@mariamzahw")
                .to_owned(),
            author_url: option_env!("PORTFOLIO_AUTHOR_URL")
                .unwrap_or("https://www.instagram.com/mariamzahw/")
                .to_owned(),
        }
    }
}
