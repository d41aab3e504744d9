//! Fallback screen for unknown paths.

pub const TITLE: &str = "Page not found !";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NotFoundPage;

impl NotFoundPage {
    pub fn title(self) -> &'static str {
        TITLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_text() {
        assert_eq!(NotFoundPage.title(), "Page not found !");
    }
}
