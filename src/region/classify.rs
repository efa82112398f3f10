use super::regions::Region;
use super::rules::{RegionRule, REGION_RULES};

/// Derives the region for a proxy node name.
///
/// Each rule is tried in declaration order and the first hit wins: flag emoji
/// against the raw name, then Chinese/English keywords against the lowercased
/// name, then short codes ("HK", "USA") between word boundaries. The empty
/// string and names nothing recognizes map to [`Region::Other`]; the function
/// never fails.
///
/// ```
/// use proxy_region::{region_from_name, Region};
///
/// assert_eq!(region_from_name("🇭🇰 香港 01 | IPLC"), Region::HK);
/// assert_eq!(region_from_name("USA-Premium"), Region::US);
/// assert_eq!(region_from_name("THRUST-01"), Region::Other);
/// ```
pub fn region_from_name(name: &str) -> Region {
    if name.is_empty() {
        return Region::Other;
    }

    let name_lower = name.to_lowercase();
    for rule in REGION_RULES.iter() {
        if rule_matches(name, &name_lower, rule) {
            tracing::trace!("Matched {} for node name {:?}", rule.region, name);
            return rule.region;
        }
    }

    tracing::trace!("No region rule matched node name {:?}", name);
    Region::Other
}

fn rule_matches(name: &str, name_lower: &str, rule: &RegionRule) -> bool {
    // Lowering can shift bytes around, so flags match against the raw name.
    for emoji in rule.emojis {
        if name.contains(emoji) {
            return true;
        }
    }

    // Keywords are stored pre-lowered.
    for keyword in rule.names {
        if name_lower.contains(keyword) {
            return true;
        }
    }

    for code in rule.codes {
        if contains_code(name, code) {
            return true;
        }
    }

    false
}

// Reports whether the code occurs in the name delimited by word boundaries,
// ignoring ASCII case. A boundary is any byte that is not an ASCII letter, or
// the edge of the string, so "HK" is found in "HK-01" and "港HK01" but not in
// "THKU". Codes are pure ASCII and UTF-8 continuation bytes are never ASCII
// letters, which makes the byte-level checks safe on multi-byte text.
fn contains_code(name: &str, code: &str) -> bool {
    let name_upper = name.to_ascii_uppercase();
    let code_upper = code.to_ascii_uppercase();
    let bytes = name_upper.as_bytes();

    let mut start = 0;
    while let Some(offset) = name_upper[start..].find(code_upper.as_str()) {
        let idx = start + offset;
        let end = idx + code_upper.len();
        let before_ok = idx == 0 || !bytes[idx - 1].is_ascii_alphabetic();
        let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphabetic();
        if before_ok && after_ok {
            return true;
        }

        // Advance one byte, not one match length, so an overlapping later
        // occurrence still gets its own boundary check.
        start = idx + 1;
    }

    false
}
