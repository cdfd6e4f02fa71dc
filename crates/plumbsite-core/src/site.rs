//! Request-scoped site context.
//!
//! The `site_id` query parameter is read once per request and carried
//! explicitly into the resolver and every link builder, so navigating
//! between pages keeps the same business selected.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in query values (RFC 3986 unreserved set).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteContext {
    site_id: Option<String>,
    base_path: String,
}

impl SiteContext {
    /// Blank ids are treated as absent.
    #[must_use]
    pub fn new(site_id: Option<&str>) -> Self {
        let site_id = site_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(ToOwned::to_owned);
        Self {
            site_id,
            base_path: String::new(),
        }
    }

    /// Prefix every generated link with `base_path` (already normalized,
    /// e.g. `"/plumbing"` or `""`).
    #[must_use]
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        base_path.clone_into(&mut self.base_path);
        self
    }

    #[must_use]
    pub fn site_id(&self) -> Option<&str> {
        self.site_id.as_deref()
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Builds an internal link that keeps the current `site_id`.
    ///
    /// A `#fragment` in `path` stays at the end of the link.
    #[must_use]
    pub fn link(&self, path: &str) -> String {
        self.link_with(path, &[])
    }

    /// Like [`SiteContext::link`], appending extra query pairs after `site_id`.
    #[must_use]
    pub fn link_with(&self, path: &str, extra: &[(&str, &str)]) -> String {
        let (path, fragment) = match path.split_once('#') {
            Some((p, f)) => (p, Some(f)),
            None => (path, None),
        };

        let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(extra.len() + 1);
        if let Some(id) = self.site_id.as_deref() {
            pairs.push(("site_id", id));
        }
        pairs.extend_from_slice(extra);

        let mut link = format!("{}{}", self.base_path, if path.is_empty() { "/" } else { path });
        for (i, (key, value)) in pairs.iter().enumerate() {
            link.push(if i == 0 { '?' } else { '&' });
            link.push_str(key);
            link.push('=');
            link.extend(utf8_percent_encode(value, QUERY_VALUE));
        }
        if let Some(fragment) = fragment {
            link.push('#');
            link.push_str(fragment);
        }
        link
    }
}
