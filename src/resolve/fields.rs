//! Metadata precedence: slug over route/URL over global defaults.

use crate::config::MetaFields;

/// Resolve each field independently, the most specific present value wins.
pub fn resolve_fields(
    defaults: &MetaFields,
    level: &MetaFields,
    slug: Option<&MetaFields>,
) -> MetaFields {
    MetaFields {
        changefreq: slug
            .and_then(|s| s.changefreq)
            .or(level.changefreq)
            .or(defaults.changefreq),
        lastmod: slug
            .and_then(|s| s.lastmod.as_ref())
            .or(level.lastmod.as_ref())
            .or(defaults.lastmod.as_ref())
            .cloned(),
        priority: slug
            .and_then(|s| s.priority)
            .or(level.priority)
            .or(defaults.priority),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChangeFreq, DateLike};

    #[test]
    fn test_level_shadows_defaults() {
        let defaults = MetaFields::new()
            .with_priority(0.8)
            .with_changefreq(ChangeFreq::Never);
        let level = MetaFields::new()
            .with_changefreq(ChangeFreq::Monthly)
            .with_lastmod("2020-01-01")
            .with_priority(0.3);
        assert_eq!(resolve_fields(&defaults, &level, None), level);
    }

    #[test]
    fn test_slug_over_route_over_defaults() {
        let defaults = MetaFields::new()
            .with_priority(0.1)
            .with_changefreq(ChangeFreq::Always);
        let route = MetaFields::new().with_lastmod("2020-01-01");
        let slug = MetaFields::new()
            .with_changefreq(ChangeFreq::Never)
            .with_lastmod("2018-06-24")
            .with_priority(0.8);
        assert_eq!(resolve_fields(&defaults, &route, Some(&slug)), slug);
    }

    #[test]
    fn test_fields_fall_through_independently() {
        let defaults = MetaFields::new()
            .with_priority(0.4)
            .with_changefreq(ChangeFreq::Daily);
        let route = MetaFields::new().with_lastmod("2020-01-01");
        let slug = MetaFields::new().with_changefreq(ChangeFreq::Hourly);

        let resolved = resolve_fields(&defaults, &route, Some(&slug));
        assert_eq!(resolved.changefreq, Some(ChangeFreq::Hourly));
        assert_eq!(resolved.lastmod, Some(DateLike::from("2020-01-01")));
        assert_eq!(resolved.priority, Some(0.4));
    }

    #[test]
    fn test_absent_everywhere_stays_absent() {
        let empty = MetaFields::default();
        let resolved = resolve_fields(&empty, &empty, Some(&empty));
        assert!(resolved.is_empty());
    }
}
