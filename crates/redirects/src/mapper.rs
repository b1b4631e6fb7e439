//! Pure redirect mapping.
//!
//! Everything here is a derivation over already-fetched data; fetching and
//! file writing live in [`crate::generator`].

use std::collections::HashSet;

use serde::Serialize;

use crate::assets::{Asset, AssetType};
use crate::client::AliasMap;

/// Redirect from a canonical asset path to its language-prefixed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRedirect {
    pub source: String,
    pub destination: String,
    pub permanent: bool,
}

/// Redirect resolving a short alias slug or a legacy `/project/` path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasRedirect {
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub destination: String,
}

/// Type marker for legacy `/project/` reroute entries.
const PROJECT_REROUTE: &str = "PROJECT-REROUTE";

/// Language code used in destination paths; the backend says `us`, the site
/// says `en`.
fn localized_lang(lang: Option<&str>) -> &str {
    match lang {
        None | Some("us") => "en",
        Some(lang) => lang,
    }
}

/// Build the localized redirect for a single asset, if it needs one.
///
/// Default-language assets, unrecognized types, and projects without a
/// difficulty produce no redirect.
pub fn redirect_for_asset(asset: &Asset, fallback_type: Option<AssetType>) -> Option<AssetRedirect> {
    if asset.is_default_lang() {
        return None;
    }
    let lang = asset.lang.as_deref()?;

    let asset_type = asset
        .asset_type
        .as_deref()
        .and_then(AssetType::parse)
        .or(fallback_type)?;

    if asset_type == AssetType::Project && asset.difficulty.is_none() {
        return None;
    }

    let connector = asset_type.path_connector();
    Some(AssetRedirect {
        source: format!("/{connector}/{}", asset.slug),
        destination: format!("/{lang}/{connector}/{}", asset.slug),
        permanent: true,
    })
}

/// Map a fetched asset collection to its redirect entries.
///
/// `fallback_type` covers collections whose endpoint does not include an
/// `asset_type` field (events).
pub fn generate_asset_redirects(
    assets: &[Asset],
    fallback_type: Option<AssetType>,
) -> Vec<AssetRedirect> {
    assets
        .iter()
        .filter_map(|asset| redirect_for_asset(asset, fallback_type))
        .collect()
}

fn project_reroute(slug: &str, lang: Option<&str>) -> AliasRedirect {
    let lang = localized_lang(lang);
    AliasRedirect {
        source: format!("/project/{slug}"),
        kind: PROJECT_REROUTE.to_string(),
        destination: format!("/{lang}/interactive-coding-tutorial/{slug}"),
    }
}

/// Build alias redirects plus legacy `/project/` reroutes.
///
/// Alias records of unrecognized type, of type EVENT, or missing their
/// target slug are dropped. Reroutes are emitted for every fetched project
/// and for PROJECT-typed alias records not already covered by one.
pub fn generate_alias_redirects(aliases: &AliasMap, projects: &[Asset]) -> Vec<AliasRedirect> {
    let mut list: Vec<AliasRedirect> = Vec::new();

    for (key, target) in aliases {
        let Some(kind) = target.kind.as_deref() else {
            continue;
        };
        let Some(asset_type) = AssetType::parse(kind) else {
            continue;
        };
        let connector = match asset_type {
            AssetType::Project => "interactive-coding-tutorial",
            AssetType::Lesson => "lesson",
            AssetType::Exercise => "interactive-exercise",
            AssetType::Article | AssetType::Quiz => "how-to",
            AssetType::Event => continue,
        };
        let Some(slug) = target.slug.as_deref() else {
            continue;
        };
        let lang = localized_lang(target.lang.as_deref());

        list.push(AliasRedirect {
            source: format!("/{connector}/{key}"),
            kind: kind.to_string(),
            destination: format!("/{lang}/{connector}/{slug}"),
        });
    }

    let covered: HashSet<&str> = projects.iter().map(|p| p.slug.as_str()).collect();

    for project in projects {
        list.push(project_reroute(&project.slug, project.lang.as_deref()));
    }

    for target in aliases.values() {
        let is_project = target
            .kind
            .as_deref()
            .and_then(AssetType::parse)
            .map(|t| t == AssetType::Project)
            .unwrap_or(false);
        if !is_project {
            continue;
        }
        if let Some(slug) = target.slug.as_deref() {
            if !covered.contains(slug) {
                list.push(project_reroute(slug, target.lang.as_deref()));
            }
        }
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::AliasTarget;

    fn asset(slug: &str, lang: Option<&str>, asset_type: Option<&str>) -> Asset {
        Asset {
            slug: slug.to_string(),
            lang: lang.map(String::from),
            asset_type: asset_type.map(String::from),
            ..Default::default()
        }
    }

    fn alias(kind: &str, lang: &str, slug: &str) -> AliasTarget {
        AliasTarget {
            kind: Some(kind.to_string()),
            lang: Some(lang.to_string()),
            slug: Some(slug.to_string()),
        }
    }

    #[test]
    fn localized_lesson_gets_language_prefixed_redirect() {
        let redirect = redirect_for_asset(&asset("x", Some("es"), Some("LESSON")), None).unwrap();
        assert_eq!(
            redirect,
            AssetRedirect {
                source: "/lesson/x".to_string(),
                destination: "/es/lesson/x".to_string(),
                permanent: true,
            }
        );
    }

    #[test]
    fn default_language_assets_produce_no_redirect() {
        assert!(redirect_for_asset(&asset("x", Some("en"), Some("LESSON")), None).is_none());
        assert!(redirect_for_asset(&asset("x", Some("us"), Some("LESSON")), None).is_none());
        assert!(redirect_for_asset(&asset("x", None, Some("LESSON")), None).is_none());
    }

    #[test]
    fn project_without_difficulty_produces_no_redirect() {
        assert!(redirect_for_asset(&asset("x", Some("es"), Some("PROJECT")), None).is_none());
    }

    #[test]
    fn project_with_difficulty_uses_tutorial_path() {
        let mut project = asset("x", Some("es"), Some("PROJECT"));
        project.difficulty = Some("easy".to_string());
        let redirect = redirect_for_asset(&project, None).unwrap();
        assert_eq!(redirect.source, "/interactive-coding-tutorial/x");
        assert_eq!(redirect.destination, "/es/interactive-coding-tutorial/x");
    }

    #[test]
    fn events_use_fallback_type_and_workshops_path() {
        let redirects = generate_asset_redirects(
            &[asset("ws", Some("es"), None)],
            Some(AssetType::Event),
        );
        assert_eq!(redirects.len(), 1);
        assert_eq!(redirects[0].source, "/workshops/ws");
        assert_eq!(redirects[0].destination, "/es/workshops/ws");
    }

    #[test]
    fn unrecognized_asset_types_are_dropped() {
        let redirects = generate_asset_redirects(&[asset("v", Some("es"), Some("VIDEO"))], None);
        assert!(redirects.is_empty());
    }

    #[test]
    fn alias_entries_resolve_connector_by_type_and_rewrite_us() {
        let mut aliases = AliasMap::new();
        aliases.insert("short".to_string(), alias("LESSON", "us", "long-lesson"));

        let redirects = generate_alias_redirects(&aliases, &[]);

        assert_eq!(redirects.len(), 1);
        assert_eq!(
            redirects[0],
            AliasRedirect {
                source: "/lesson/short".to_string(),
                kind: "LESSON".to_string(),
                destination: "/en/lesson/long-lesson".to_string(),
            }
        );
    }

    #[test]
    fn project_alias_also_yields_reroute_without_project_list() {
        let mut aliases = AliasMap::new();
        aliases.insert("abc".to_string(), alias("PROJECT", "us", "abc-slug"));

        let redirects = generate_alias_redirects(&aliases, &[]);

        assert!(redirects.contains(&AliasRedirect {
            source: "/project/abc-slug".to_string(),
            kind: "PROJECT-REROUTE".to_string(),
            destination: "/en/interactive-coding-tutorial/abc-slug".to_string(),
        }));
    }

    #[test]
    fn fetched_projects_take_precedence_over_alias_reroutes() {
        let mut aliases = AliasMap::new();
        aliases.insert("abc".to_string(), alias("PROJECT", "us", "abc-slug"));
        let projects = vec![asset("abc-slug", Some("es"), Some("PROJECT"))];

        let redirects = generate_alias_redirects(&aliases, &projects);

        let reroutes: Vec<&AliasRedirect> = redirects
            .iter()
            .filter(|r| r.kind == "PROJECT-REROUTE")
            .collect();
        assert_eq!(reroutes.len(), 1);
        assert_eq!(reroutes[0].destination, "/es/interactive-coding-tutorial/abc-slug");
    }

    #[test]
    fn alias_entries_of_unknown_or_event_type_are_dropped() {
        let mut aliases = AliasMap::new();
        aliases.insert("a".to_string(), alias("VIDEO", "es", "a-slug"));
        aliases.insert("b".to_string(), alias("EVENT", "es", "b-slug"));
        aliases.insert("c".to_string(), alias("QUIZ", "es", "c-slug"));

        let redirects = generate_alias_redirects(&aliases, &[]);

        assert_eq!(redirects.len(), 1);
        assert_eq!(redirects[0].source, "/how-to/c");
    }

    #[test]
    fn alias_output_is_sorted_by_key() {
        let mut aliases = AliasMap::new();
        aliases.insert("zz".to_string(), alias("LESSON", "es", "z-l"));
        aliases.insert("aa".to_string(), alias("LESSON", "es", "a-l"));

        let redirects = generate_alias_redirects(&aliases, &[]);

        assert_eq!(redirects[0].source, "/lesson/aa");
        assert_eq!(redirects[1].source, "/lesson/zz");
    }
}
