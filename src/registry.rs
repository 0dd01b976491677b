//! Section type registry.
//!
//! Maps a section's declared `type` string to the renderer responsible for
//! it. The mapping is static — baked in at compile time, never mutated at
//! runtime — and several historical type names resolve to the same kind so
//! documents written against older schema revisions keep rendering.
//!
//! The document schema and this registry evolve independently. A type string
//! with no registered renderer is therefore an expected state the engine
//! tolerates permanently, not a bug to eliminate: [`resolve`] returns
//! [`SectionKind::Unknown`] and the composition engine substitutes the fault
//! placeholder at that position.

/// Every section kind the engine knows how to render.
///
/// `Unknown` is a first-class arm so registry-miss handling cannot be
/// forgotten: every dispatch over `SectionKind` must say what happens when
/// the type string resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Navigation,
    Hero,
    Text,
    Card,
    Features,
    Layout,
    Pricing,
    Gallery,
    Cta,
    Contact,
    Footer,
    Unknown,
}

impl SectionKind {
    /// Canonical kind name, used for display and `data-kind` attributes.
    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Navigation => "navigation",
            SectionKind::Hero => "hero",
            SectionKind::Text => "text",
            SectionKind::Card => "card",
            SectionKind::Features => "features",
            SectionKind::Layout => "layout",
            SectionKind::Pricing => "pricing",
            SectionKind::Gallery => "gallery",
            SectionKind::Cta => "cta",
            SectionKind::Contact => "contact",
            SectionKind::Footer => "footer",
            SectionKind::Unknown => "unknown",
        }
    }

    /// Container kinds embed child sections under `items` and recurse
    /// through the composition engine.
    pub fn is_container(self) -> bool {
        matches!(self, SectionKind::Features | SectionKind::Layout)
    }
}

/// Resolve a declared type string to a section kind.
///
/// Legacy type names are aliased onto their current implementation so old
/// documents keep rendering: `navbar`/`nav` → navigation,
/// `jumbotron` → hero, `markdown` → text, `grid` → features,
/// `group` → layout, `plans` → pricing.
pub fn resolve(type_name: &str) -> SectionKind {
    match type_name {
        "navigation" | "navbar" | "nav" => SectionKind::Navigation,
        "hero" | "jumbotron" => SectionKind::Hero,
        "text" | "markdown" => SectionKind::Text,
        "card" => SectionKind::Card,
        "features" | "grid" => SectionKind::Features,
        "layout" | "group" => SectionKind::Layout,
        "pricing" | "plans" => SectionKind::Pricing,
        "gallery" => SectionKind::Gallery,
        "cta" => SectionKind::Cta,
        "contact" => SectionKind::Contact,
        "footer" => SectionKind::Footer,
        _ => SectionKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_names_resolve() {
        assert_eq!(resolve("navigation"), SectionKind::Navigation);
        assert_eq!(resolve("hero"), SectionKind::Hero);
        assert_eq!(resolve("pricing"), SectionKind::Pricing);
        assert_eq!(resolve("footer"), SectionKind::Footer);
    }

    #[test]
    fn legacy_names_alias_onto_current_kinds() {
        assert_eq!(resolve("navbar"), SectionKind::Navigation);
        assert_eq!(resolve("nav"), SectionKind::Navigation);
        assert_eq!(resolve("jumbotron"), SectionKind::Hero);
        assert_eq!(resolve("markdown"), SectionKind::Text);
        assert_eq!(resolve("plans"), SectionKind::Pricing);
    }

    #[test]
    fn unregistered_type_resolves_to_unknown() {
        assert_eq!(resolve("bogus_widget"), SectionKind::Unknown);
        assert_eq!(resolve(""), SectionKind::Unknown);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        // The vocabulary is lowercase by contract; anything else is a miss.
        assert_eq!(resolve("Hero"), SectionKind::Unknown);
    }

    #[test]
    fn container_kinds_are_marked() {
        assert!(SectionKind::Features.is_container());
        assert!(SectionKind::Layout.is_container());
        assert!(!SectionKind::Hero.is_container());
        assert!(!SectionKind::Unknown.is_container());
    }
}
