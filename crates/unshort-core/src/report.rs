use crate::outcome::ResolutionOutcome;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use unshort_codec::IdentifierPair;

const RESOLVED_MARK: &str = "✅";
const FAILED_MARK: &str = "❌";
const HOP_MARK: &str = "➡️";
const IDENTIFIER_MARK: &str = "🆎";

/// The outcome for one URL found in a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub url: String,
    #[serde(flatten)]
    pub outcome: ResolutionOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<IdentifierPair>,
}

impl Display for ReportEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.outcome.chain() {
            Some(chain) => {
                write!(f, "{RESOLVED_MARK} {}", chain.input())?;
                for url in chain.locations() {
                    write!(f, "\n{HOP_MARK} {url}")?;
                }
            }
            None => write!(f, "{FAILED_MARK} {}", self.url)?,
        }

        if let Some(pair) = &self.identifier {
            write!(f, "\n{IDENTIFIER_MARK} {} {HOP_MARK} av{}", pair.bvid, pair.aid)?;
        }
        Ok(())
    }
}

/// One entry per URL found in a message, in the order they appeared.
///
/// `Display` renders the chat reply; entries are separated by a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new(entries: Vec<ReportEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolved_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome.is_resolved())
            .count()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::RedirectChain;
    use crate::error::Error;
    use unshort_codec::BvidCodec;
    use url::Url;

    fn resolved(urls: &[&str]) -> ResolutionOutcome {
        let mut chain = RedirectChain::new(Url::parse(urls[0]).unwrap());
        for url in &urls[1..] {
            chain.record(Url::parse(url).unwrap());
        }
        ResolutionOutcome::Resolved { chain }
    }

    fn failed(url: &str) -> ReportEntry {
        ReportEntry {
            url: url.into(),
            outcome: ResolutionOutcome::Failed {
                error: Error::NoRedirect(url.into()),
            },
            identifier: None,
        }
    }

    #[test]
    fn renders_chains_failures_and_identifiers() {
        let report = Report::new(vec![
            ReportEntry {
                url: "https://b23.tv/abc".into(),
                outcome: resolved(&[
                    "https://b23.tv/abc",
                    "https://b23.tv/share/abc",
                    "https://www.bilibili.com/video/BV1xx411c7mD",
                ]),
                identifier: Some(BvidCodec::new().identify("BV1xx411c7mD").unwrap()),
            },
            failed("http://x.co/y"),
        ]);

        assert_eq!(
            report.to_string(),
            "✅ https://b23.tv/abc\n\
             ➡️ https://b23.tv/share/abc\n\
             ➡️ https://www.bilibili.com/video/BV1xx411c7mD\n\
             🆎 BV1xx411c7mD ➡️ av2\n\
             \n\
             ❌ http://x.co/y"
        );
        assert_eq!(report.resolved_count(), 1);
    }

    #[test]
    fn first_line_shows_the_url_as_written() {
        let mut chain = RedirectChain::from_input("http://x.co").unwrap();
        chain.record(Url::parse("http://x.co/landing").unwrap());
        let entry = ReportEntry {
            url: "http://x.co".into(),
            outcome: ResolutionOutcome::Resolved { chain },
            identifier: None,
        };

        assert_eq!(entry.to_string(), "✅ http://x.co\n➡️ http://x.co/landing");
    }

    #[test]
    fn serializes_outcome_inline() {
        let entry = failed("http://x.co/y");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["url"], "http://x.co/y");
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "url http://x.co/y has no redirect");
        assert!(json.get("identifier").is_none());
    }

    #[test]
    fn serializes_resolved_entry_with_identifier() {
        let entry = ReportEntry {
            url: "https://b23.tv/abc".into(),
            outcome: resolved(&[
                "https://b23.tv/abc",
                "https://www.bilibili.com/video/BV17x411w7KC",
            ]),
            identifier: Some(BvidCodec::new().identify("BV17x411w7KC").unwrap()),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["status"], "resolved");
        assert_eq!(json["chain"][1], "https://www.bilibili.com/video/BV17x411w7KC");
        assert_eq!(json["identifier"]["bvid"], "BV17x411w7KC");
        assert_eq!(json["identifier"]["aid"], 170001);
    }
}
