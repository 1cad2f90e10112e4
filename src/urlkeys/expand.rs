//! Candidate lookup-key expansion over a canonical URL.

use std::collections::BTreeSet;

/// Maximum number of host labels used when forming candidate keys.
///
/// Hosts with more labels are trimmed from the left until this bound
/// holds, per the protocol's lookup semantics.
const MAX_HOST_LABELS: usize = 5;

/// Expands a canonical URL into the set of scheme-stripped candidate
/// keys the protocol requires be checked.
///
/// The set always contains the full URL, the query-stripped URL, and the
/// root-path variant; for each host suffix of at least two labels it
/// additionally contains the query and query-stripped variants plus the
/// whole path-prefix ladder down to `/`. Duplicate keys across the
/// host/path combinations collapse through the set.
///
/// Returns an empty set when the input has no parseable `scheme://host`
/// prefix. A [`BTreeSet`] is used so iteration order - and therefore the
/// ordered hash sequence handed to a lookup - is deterministic.
#[must_use]
pub fn expand(canonical: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    let Some((host, path, query)) = split_canonical(canonical) else {
        return keys;
    };

    let labels: Vec<&str> = host.split('.').collect();
    let trimmed = if labels.len() > MAX_HOST_LABELS {
        &labels[labels.len() - MAX_HOST_LABELS..]
    } else {
        &labels[..]
    };
    let host = trimmed.join(".");

    // Full URL, query-stripped, and root-path variants are always checked.
    if let Some(query) = query {
        keys.insert(format!("{host}{path}?{query}"));
    }
    keys.insert(format!("{host}{path}"));
    keys.insert(format!("{host}/"));

    let prefixes = path_prefixes(path);
    for take in (2..=trimmed.len()).rev() {
        let suffix = trimmed[trimmed.len() - take..].join(".");
        if let Some(query) = query {
            keys.insert(format!("{suffix}{path}?{query}"));
        }
        keys.insert(format!("{suffix}{path}"));
        for prefix in &prefixes {
            keys.insert(format!("{suffix}{prefix}"));
        }
    }

    keys
}

/// Splits a canonical URL into its textual host, path, and query parts.
///
/// Works on the canonical string directly rather than re-parsing, so the
/// keys reflect the exact text produced by canonicalization.
fn split_canonical(canonical: &str) -> Option<(&str, &str, Option<&str>)> {
    let (_, rest) = canonical.split_once("://")?;
    let (host_and_path, query) = match rest.split_once('?') {
        Some((hp, q)) => (hp, Some(q)),
        None => (rest, None),
    };
    let (host, path) = match host_and_path.find('/') {
        Some(idx) => (&host_and_path[..idx], &host_and_path[idx..]),
        None => (host_and_path, "/"),
    };
    if host.is_empty() { None } else { Some((host, path, query)) }
}

/// Walks a path from its full form down to `/`, trimming the last
/// segment each step and keeping the trailing slash.
///
/// `/1/2.html` produces `["/1/2.html", "/1/", "/"]`.
fn path_prefixes(path: &str) -> Vec<String> {
    let mut prefixes = vec![path.to_string()];
    let mut current = path;
    while current != "/" {
        let trimmed = current.strip_suffix('/').unwrap_or(current);
        let Some(idx) = trimmed.rfind('/') else {
            break;
        };
        current = &current[..=idx];
        prefixes.push(current.to_string());
    }
    prefixes
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ==================== Path Prefix Ladder ====================

    #[test]
    fn test_path_prefixes_multi_segment() {
        assert_eq!(path_prefixes("/1/2.html"), vec!["/1/2.html", "/1/", "/"]);
    }

    #[test]
    fn test_path_prefixes_root_only() {
        assert_eq!(path_prefixes("/"), vec!["/"]);
    }

    #[test]
    fn test_path_prefixes_deep_path() {
        assert_eq!(
            path_prefixes("/a/b/c"),
            vec!["/a/b/c", "/a/b/", "/a/", "/"]
        );
    }

    // ==================== Expansion ====================

    #[test]
    fn test_expand_simple_host_and_path() {
        let keys = expand("http://a.b.com/1/2.html?param=1");
        let expected = [
            "a.b.com/1/2.html?param=1",
            "a.b.com/1/2.html",
            "a.b.com/1/",
            "a.b.com/",
            "b.com/1/2.html?param=1",
            "b.com/1/2.html",
            "b.com/1/",
            "b.com/",
        ];
        for key in expected {
            assert!(keys.contains(key), "missing key {key} in {keys:?}");
        }
        assert_eq!(keys.len(), expected.len());
    }

    #[test]
    fn test_expand_trims_host_to_five_labels() {
        let keys = expand("http://a.b.c.d.e.f.g/1.html");
        // Leftmost labels drop until five remain; `a.b` never appears.
        assert!(keys.contains("c.d.e.f.g/1.html"));
        assert!(keys.contains("f.g/1.html"));
        assert!(!keys.iter().any(|k| k.starts_with("a.b.c")));
    }

    #[test]
    fn test_expand_six_label_host_three_segment_path_bounded() {
        let keys = expand("http://a.b.c.d.e.f/x/y/z");
        assert!(!keys.is_empty());
        // 4 host suffixes x 4 ladder entries, all deduplicated.
        assert!(keys.len() <= 30, "unbounded expansion: {}", keys.len());
        assert!(keys.contains("b.c.d.e.f/x/y/z"));
        assert!(keys.contains("b.c.d.e.f/"));
        assert!(keys.contains("e.f/x/y/"));
    }

    #[test]
    fn test_expand_always_includes_core_variants() {
        let keys = expand("http://example.com/path/file?q=1");
        assert!(keys.contains("example.com/path/file?q=1"));
        assert!(keys.contains("example.com/path/file"));
        assert!(keys.contains("example.com/"));
    }

    #[test]
    fn test_expand_single_label_host_has_no_suffixes() {
        let keys = expand("http://localhost/a/b");
        // No two-label suffix exists; only the always-included variants.
        assert_eq!(
            keys,
            BTreeSet::from([
                "localhost/a/b".to_string(),
                "localhost/".to_string(),
            ])
        );
    }

    #[test]
    fn test_expand_no_host_yields_empty_set() {
        assert!(expand("not a url").is_empty());
        assert!(expand("http:///path").is_empty());
    }

    #[test]
    fn test_expand_deduplicates_across_combinations() {
        let keys = expand("http://example.com/");
        // Full URL, query-stripped, and root-path all collapse to one key
        // per host suffix.
        assert_eq!(keys, BTreeSet::from(["example.com/".to_string()]));
    }
}
