//! Filter predicates.
//!
//! Two independent predicates live here: the facet predicate [`matches`]
//! (category rule plus anime rule) and the free-text predicate
//! [`search_matches`]. They are never combined: a search runs on the whole
//! catalog regardless of facets.

use crate::domain::{AnimeFilter, Product};
use crate::engine::facets::{CategorySelection, FacetState};

/// Whether `product` passes both the category and the anime rule.
///
/// `anime_filters` is the catalog's anime list, used to resolve selected ids
/// to tags. Total: unknown ids never match and never fail.
#[must_use]
pub fn matches(product: &Product, facets: &FacetState, anime_filters: &[AnimeFilter]) -> bool {
    category_matches(product, &facets.active_category)
        && anime_matches(product, &facets.selected_anime, anime_filters)
}

#[must_use]
pub fn category_matches(product: &Product, category: &CategorySelection) -> bool {
    match category {
        CategorySelection::All => true,
        CategorySelection::Category(id) => product.category_id == *id,
    }
}

/// Anime rule: an empty selection matches everything, otherwise at least one
/// selected filter must have a tag contained in one of the product's tags.
#[must_use]
pub fn anime_matches(product: &Product, selected: &[String], anime_filters: &[AnimeFilter]) -> bool {
    if selected.is_empty() {
        return true;
    }

    selected.iter().any(|id| {
        anime_filters
            .iter()
            .find(|a| a.id == *id)
            .and_then(|a| a.tag.as_deref())
            .filter(|tag| !tag.is_empty())
            .is_some_and(|tag| product.has_tag_containing(tag))
    })
}

/// Splits a query into lower-cased, non-empty terms.
#[must_use]
pub fn tokenize(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// The lower-cased text a search term is matched against: name, category
/// display name and tags joined by single spaces.
#[must_use]
pub fn search_haystack(product: &Product, category_name: &str) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(product.tags.len() + 2);
    parts.push(&product.name);
    parts.push(category_name);
    parts.extend(product.tags.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

/// Whether every term occurs in the product's haystack. No terms, no match.
#[must_use]
pub fn search_matches(product: &Product, category_name: &str, terms: &[String]) -> bool {
    if terms.is_empty() {
        return false;
    }
    let haystack = search_haystack(product, category_name);
    terms.iter().all(|term| haystack.contains(term.as_str()))
}

/// Byte ranges of `text` covered by any of `terms`, case-insensitively.
///
/// Returned ranges are sorted and merged, and always fall on char
/// boundaries. Text whose lower-cased form changes byte length is left
/// unhighlighted.
#[must_use]
pub fn match_ranges(text: &str, terms: &[String]) -> Vec<(usize, usize)> {
    let lower = text.to_lowercase();
    if lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges: Vec<(usize, usize)> = terms
        .iter()
        .filter(|term| !term.is_empty())
        .flat_map(|term| {
            lower
                .match_indices(term.as_str())
                .map(|(start, m)| (start, start + m.len()))
                .collect::<Vec<_>>()
        })
        .filter(|&(start, end)| text.is_char_boundary(start) && text.is_char_boundary(end))
        .collect();
    ranges.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(category: &str, tags: &[&str]) -> Product {
        Product {
            id: "p".into(),
            name: "원신 라이덴 Costume".into(),
            category_id: category.into(),
            original_price: 10_000,
            sale_price: None,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            is_new: false,
            is_best: false,
            image_url: String::new(),
        }
    }

    fn anime(id: &str, tag: Option<&str>) -> AnimeFilter {
        AnimeFilter {
            id: id.into(),
            name: id.into(),
            name_en: None,
            tag: tag.map(str::to_string),
        }
    }

    fn facets(category: &str, anime: &[&str]) -> FacetState {
        let mut facets = FacetState::with_category(category);
        for id in anime {
            facets.toggle_anime(id);
        }
        facets
    }

    #[test]
    fn category_rule() {
        let p = product("wig", &[]);
        assert!(matches(&p, &facets("all", &[]), &[]));
        assert!(matches(&p, &facets("wig", &[]), &[]));
        assert!(!matches(&p, &facets("costume", &[]), &[]));
        assert!(!matches(&p, &facets("no-such-category", &[]), &[]));
    }

    #[test]
    fn anime_rule_uses_substring_of_tags() {
        let filters = [anime("honkai", Some("스타레일"))];
        let p = product("boots", &["붕괴스타레일", "카프카"]);
        assert!(matches(&p, &facets("all", &["honkai"]), &filters));
    }

    #[test]
    fn anime_rule_is_any_of_selected() {
        let filters = [anime("genshin", Some("원신")), anime("vocaloid", Some("보컬로이드"))];
        let p = product("wig", &["보컬로이드"]);
        assert!(matches(&p, &facets("all", &["genshin", "vocaloid"]), &filters));
        assert!(!matches(&p, &facets("all", &["genshin"]), &filters));
    }

    #[test]
    fn unknown_and_decorative_anime_never_match() {
        let filters = [anime("etc", None), anime("blank", Some(""))];
        let p = product("wig", &["원신"]);
        assert!(!matches(&p, &facets("all", &["etc"]), &filters));
        assert!(!matches(&p, &facets("all", &["blank"]), &filters));
        assert!(!matches(&p, &facets("all", &["missing"]), &filters));
    }

    #[test]
    fn untagged_product_fails_anime_rule() {
        let filters = [anime("genshin", Some("원신"))];
        let p = product("wig", &[]);
        assert!(!matches(&p, &facets("all", &["genshin"]), &filters));
        assert!(matches(&p, &facets("all", &[]), &filters));
    }

    #[test]
    fn tag_match_is_case_sensitive() {
        let filters = [anime("vocaloid", Some("VOCALOID"))];
        let p = product("wig", &["vocaloid"]);
        assert!(!matches(&p, &facets("all", &["vocaloid"]), &filters));
    }

    #[test]
    fn search_requires_every_term() {
        let p = product("costume", &["원신", "라이덴"]);
        assert!(search_matches(&p, "코스튬", &tokenize("원신 코스튬")));
        assert!(search_matches(&p, "코스튬", &tokenize("COSTUME")));
        assert!(!search_matches(&p, "코스튬", &tokenize("원신 위그")));
    }

    #[test]
    fn blank_query_matches_nothing() {
        let p = product("costume", &["원신"]);
        assert!(!search_matches(&p, "코스튬", &tokenize("")));
        assert!(!search_matches(&p, "코스튬", &tokenize("  \t ")));
    }

    #[test]
    fn haystack_joins_with_single_spaces() {
        let p = product("costume", &["a", "b"]);
        assert_eq!(search_haystack(&p, "코스튬"), "원신 라이덴 costume 코스튬 a b");
    }

    #[test]
    fn match_ranges_merge_overlaps() {
        let terms = tokenize("ab bc");
        assert_eq!(match_ranges("xabcx", &terms), vec![(1, 4)]);
        assert_eq!(match_ranges("ABxAB", &tokenize("ab")), vec![(0, 2), (3, 5)]);
    }

    #[test]
    fn match_ranges_on_multibyte_text() {
        let ranges = match_ranges("원신 라이덴", &tokenize("라이덴"));
        assert_eq!(ranges, vec![(7, 16)]);
    }
}
