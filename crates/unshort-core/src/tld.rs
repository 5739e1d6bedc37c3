use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Country-code top-level domains delegated in the root zone.
const COUNTRY_CODES: &[&str] = &[
    "ac", "ad", "ae", "af", "ag", "ai", "al", "am", "ao", "aq", "ar", "as", "at", "au", "aw",
    "ax", "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo", "br",
    "bs", "bt", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl", "cm",
    "cn", "co", "cr", "cu", "cv", "cw", "cx", "cy", "cz", "de", "dj", "dk", "dm", "do", "dz",
    "ec", "ee", "eg", "er", "es", "et", "eu", "fi", "fj", "fk", "fm", "fo", "fr", "ga", "gb",
    "gd", "ge", "gf", "gg", "gh", "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt", "gu",
    "gw", "gy", "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie", "il", "im", "in", "io", "iq",
    "ir", "is", "it", "je", "jm", "jo", "jp", "ke", "kg", "kh", "ki", "km", "kn", "kp", "kr",
    "kw", "ky", "kz", "la", "lb", "lc", "li", "lk", "lr", "ls", "lt", "lu", "lv", "ly", "ma",
    "mc", "md", "me", "mg", "mh", "mk", "ml", "mm", "mn", "mo", "mp", "mq", "mr", "ms", "mt",
    "mu", "mv", "mw", "mx", "my", "mz", "na", "nc", "ne", "nf", "ng", "ni", "nl", "no", "np",
    "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph", "pk", "pl", "pm", "pn", "pr", "ps",
    "pt", "pw", "py", "qa", "re", "ro", "rs", "ru", "rw", "sa", "sb", "sc", "sd", "se", "sg",
    "sh", "si", "sk", "sl", "sm", "sn", "so", "sr", "ss", "st", "su", "sv", "sx", "sy", "sz",
    "tc", "td", "tf", "tg", "th", "tj", "tk", "tl", "tm", "tn", "to", "tr", "tt", "tv", "tw",
    "tz", "ua", "ug", "uk", "us", "uy", "uz", "va", "vc", "ve", "vg", "vi", "vn", "vu", "wf",
    "ws", "ye", "yt", "za", "zm", "zw",
];

/// Generic top-level domains commonly seen in shared links.
const GENERIC: &[&str] = &[
    "com", "net", "org", "edu", "gov", "mil", "int", "arpa", "info", "biz", "name", "pro",
    "aero", "asia", "cat", "coop", "jobs", "mobi", "museum", "post", "tel", "travel", "xxx",
    "academy", "agency", "app", "art", "audio", "auto", "bar", "beer", "best", "bid", "bike",
    "bio", "black", "blog", "blue", "book", "build", "buzz", "cafe", "cam", "camera", "capital",
    "care", "cash", "center", "chat", "cheap", "city", "click", "cloud", "club", "codes",
    "coffee", "college", "community", "company", "computer", "cool", "cyou", "date", "deals",
    "design", "dev", "digital", "direct", "download", "earth", "email", "energy", "engineering",
    "estate", "events", "exchange", "expert", "express", "fans", "farm", "fashion", "film",
    "finance", "fit", "fun", "fund", "game", "games", "gift", "gifts", "global", "gold", "golf",
    "google", "guide", "guru", "health", "help", "homes", "host", "house", "how", "icu", "inc",
    "ink", "institute", "international", "kim", "land", "lat", "law", "life", "link", "live",
    "loan", "lol", "london", "love", "ltd", "market", "marketing", "media", "men", "menu", "moe",
    "mom", "money", "monster", "moscow", "network", "news", "ninja", "nyc", "one", "online",
    "ooo", "page", "party", "photo", "photography", "photos", "pics", "pink", "pizza", "place",
    "plus", "press", "pub", "red", "rent", "report", "rest", "review", "reviews", "rocks", "run",
    "sale", "sbs", "school", "science", "services", "shop", "show", "site", "social", "software",
    "solutions", "space", "store", "stream", "studio", "style", "support", "systems", "team",
    "tech", "technology", "tips", "today", "tokyo", "tools", "top", "tours", "town", "toys",
    "trade", "training", "tube", "uno", "video", "vin", "vip", "vision", "vote", "wang", "watch",
    "website", "wiki", "win", "wine", "work", "works", "world", "wtf", "xin", "xyz", "yoga",
    "youtube", "zone",
];

static KNOWN: Lazy<HashSet<&'static str>> =
    Lazy::new(|| COUNTRY_CODES.iter().chain(GENERIC).copied().collect());

/// Whether `tld` is a real top-level domain, ignoring ASCII case.
pub(crate) fn is_known(tld: &str) -> bool {
    KNOWN.contains(tld.to_ascii_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_real_tlds() {
        for tld in ["com", "tv", "CO", "io", "xyz"] {
            assert!(is_known(tld), "{tld}");
        }
    }

    #[test]
    fn rejects_file_extensions() {
        for tld in ["toml", "js", "txt", "json", "thanks", "example"] {
            assert!(!is_known(tld), "{tld}");
        }
    }
}
