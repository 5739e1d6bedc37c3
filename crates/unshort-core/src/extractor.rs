use crate::error::{Error, Result};
use crate::tld;
use once_cell::sync::Lazy;
use regex::Regex;
use std::net::Ipv4Addr;

/// Relaxed URL pattern: an optional scheme, a host of one or more labels, an
/// optional port and a tail that runs until whitespace, quoting or CJK
/// punctuation. Whether the host is acceptable is decided by [`accepts_host`].
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?:(?P<scheme>[a-zA-Z][a-zA-Z0-9+.\-]*)://)?",
        r"(?P<host>[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?",
        r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?)*)",
        r"(?::\d{1,5})?",
        r##"(?:[/?#][^\s<>"'`，。！？、；：「」『』【】（）《》]*)?"##,
    ))
    .unwrap()
});

const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Finds every URL-like substring of `text`, in order of appearance.
///
/// With an explicit scheme any host is taken, `localhost` included. Without
/// one the host must be an IPv4 address or end in a real top-level domain,
/// and the match is prefixed with `http://`. Fails with [`Error::NotFound`]
/// when nothing matches.
pub fn find_urls(text: &str) -> Result<Vec<String>> {
    let urls: Vec<String> = URL_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let matched = caps.get(0)?;
            let has_scheme = caps.name("scheme").is_some();
            if !accepts_host(caps.name("host")?.as_str(), has_scheme) {
                return None;
            }
            let candidate = trim_trailing(matched.as_str());
            if candidate.is_empty() {
                return None;
            }
            Some(if has_scheme {
                candidate.to_string()
            } else {
                format!("{DEFAULT_SCHEME_PREFIX}{candidate}")
            })
        })
        .collect();

    if urls.is_empty() {
        return Err(Error::NotFound);
    }
    Ok(urls)
}

fn accepts_host(host: &str, has_scheme: bool) -> bool {
    if has_scheme || host.parse::<Ipv4Addr>().is_ok() {
        return true;
    }
    host.rsplit_once('.')
        .is_some_and(|(_, tld)| tld::is_known(tld))
}

/// Strips sentence punctuation and unbalanced closing brackets that the
/// pattern swallowed at the end of a match.
fn trim_trailing(candidate: &str) -> &str {
    let mut end = candidate.len();
    loop {
        let current = &candidate[..end];
        let Some(last) = current.chars().last() else {
            return current;
        };
        let strip = match last {
            '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '"' => true,
            ')' => unbalanced(current, '(', ')'),
            ']' => unbalanced(current, '[', ']'),
            '}' => unbalanced(current, '{', '}'),
            _ => false,
        };
        if !strip {
            return current;
        }
        end -= last.len_utf8();
    }
}

fn unbalanced(s: &str, open: char, close: char) -> bool {
    s.matches(close).count() > s.matches(open).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_urls_in_order() {
        let urls = find_urls("check http://short.ly/abc and https://x.co/y").unwrap();
        assert_eq!(urls, ["http://short.ly/abc", "https://x.co/y"]);
    }

    #[test]
    fn no_urls_is_not_found() {
        assert_eq!(find_urls("no links here"), Err(Error::NotFound));
        assert_eq!(find_urls(""), Err(Error::NotFound));
    }

    #[test]
    fn bare_domains_get_http_scheme() {
        let urls = find_urls("go to example.com/path now").unwrap();
        assert_eq!(urls, ["http://example.com/path"]);
    }

    #[test]
    fn keeps_query_and_fragment() {
        let urls = find_urls("https://www.bilibili.com/video/BV1xx411c7mD/?p=2#t=10").unwrap();
        assert_eq!(urls, ["https://www.bilibili.com/video/BV1xx411c7mD/?p=2#t=10"]);
    }

    #[test]
    fn trims_trailing_punctuation() {
        let urls = find_urls("see https://b23.tv/abc. Or (https://x.co/y), fine?").unwrap();
        assert_eq!(urls, ["https://b23.tv/abc", "https://x.co/y"]);
    }

    #[test]
    fn keeps_balanced_parentheses() {
        let urls = find_urls("https://en.wikipedia.org/wiki/Rust_(programming_language)").unwrap();
        assert_eq!(
            urls,
            ["https://en.wikipedia.org/wiki/Rust_(programming_language)"]
        );
    }

    #[test]
    fn stops_at_cjk_text_and_punctuation() {
        let urls =
            find_urls("【某个视频-哔哩哔哩】 https://b23.tv/iWWoZyb，快看b23.tv/xyz。").unwrap();
        assert_eq!(urls, ["https://b23.tv/iWWoZyb", "http://b23.tv/xyz"]);
    }

    #[test]
    fn accepts_ipv4_hosts_with_ports() {
        let urls = find_urls("local http://127.0.0.1:8080/r/1 test").unwrap();
        assert_eq!(urls, ["http://127.0.0.1:8080/r/1"]);
    }

    #[test]
    fn repeated_urls_are_all_returned() {
        let urls = find_urls("x.co/a x.co/a").unwrap();
        assert_eq!(urls, ["http://x.co/a", "http://x.co/a"]);
    }

    #[test]
    fn file_names_and_dotted_words_are_not_urls() {
        for text in [
            "I updated Cargo.toml today",
            "run main.js please",
            "ok.thanks",
            "version v1.2.3 is out",
        ] {
            assert_eq!(find_urls(text), Err(Error::NotFound), "{text}");
        }
    }

    #[test]
    fn schemeless_urls_need_a_real_tld() {
        let urls = find_urls("see Cargo.toml and b23.tv/x or example.com/path").unwrap();
        assert_eq!(urls, ["http://b23.tv/x", "http://example.com/path"]);
    }

    #[test]
    fn explicit_scheme_accepts_any_host() {
        let urls = find_urls("try http://localhost:8080/health and https://intranet.corp/a").unwrap();
        assert_eq!(
            urls,
            ["http://localhost:8080/health", "https://intranet.corp/a"]
        );
    }
}
