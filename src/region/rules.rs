use once_cell::sync::Lazy;

use super::regions::Region;

/// Match patterns for a single region.
///
/// Emoji flags are matched as exact substrings of the raw name, keywords as
/// substrings of the lowercased name, and codes only between word boundaries.
pub struct RegionRule {
    pub region: Region,
    pub emojis: &'static [&'static str],
    pub names: &'static [&'static str],
    pub codes: &'static [&'static str],
}

// First match wins, so a region whose keyword embeds another region's keyword
// must be declared before it. Reordering entries changes results.
pub static REGION_RULES: Lazy<Vec<RegionRule>> = Lazy::new(|| {
    vec![
        RegionRule {
            region: Region::HK,
            emojis: &["🇭🇰"],
            names: &["香港", "hong kong", "hongkong"],
            codes: &["HK"],
        },
        RegionRule {
            region: Region::TW,
            emojis: &["🇹🇼"],
            names: &["台湾", "台北", "台中", "taiwan", "taipei"],
            codes: &["TW"],
        },
        RegionRule {
            region: Region::JP,
            emojis: &["🇯🇵"],
            names: &["日本", "东京", "大阪", "japan", "tokyo", "osaka"],
            codes: &["JP"],
        },
        RegionRule {
            region: Region::KR,
            emojis: &["🇰🇷"],
            names: &["韩国", "首尔", "korea", "seoul"],
            codes: &["KR"],
        },
        RegionRule {
            region: Region::US,
            emojis: &["🇺🇸"],
            names: &[
                "美国",
                "洛杉矶",
                "纽约",
                "旧金山",
                "西雅图",
                "芝加哥",
                "达拉斯",
                "圣何塞",
                "硅谷",
                "凤凰城",
                "united states",
                "america",
                "los angeles",
                "new york",
                "san francisco",
                "seattle",
                "chicago",
                "dallas",
                "silicon valley",
                "san jose",
                "phoenix",
            ],
            codes: &["US", "USA"],
        },
        RegionRule {
            region: Region::SG,
            emojis: &["🇸🇬"],
            names: &["新加坡", "狮城", "singapore"],
            codes: &["SG"],
        },
        RegionRule {
            region: Region::GB,
            emojis: &["🇬🇧"],
            names: &["英国", "伦敦", "united kingdom", "britain", "england", "london"],
            codes: &["UK", "GB"],
        },
        RegionRule {
            region: Region::DE,
            emojis: &["🇩🇪"],
            names: &["德国", "法兰克福", "柏林", "germany", "frankfurt", "berlin"],
            codes: &["DE"],
        },
        RegionRule {
            region: Region::FR,
            emojis: &["🇫🇷"],
            names: &["法国", "巴黎", "france", "paris"],
            codes: &["FR"],
        },
        RegionRule {
            region: Region::NL,
            emojis: &["🇳🇱"],
            names: &["荷兰", "阿姆斯特丹", "netherlands", "holland", "amsterdam"],
            codes: &["NL"],
        },
        RegionRule {
            region: Region::CA,
            emojis: &["🇨🇦"],
            names: &["加拿大", "多伦多", "温哥华", "canada", "toronto", "vancouver"],
            codes: &["CA"],
        },
        RegionRule {
            region: Region::AU,
            emojis: &["🇦🇺"],
            names: &["澳大利亚", "澳洲", "悉尼", "墨尔本", "australia", "sydney", "melbourne"],
            codes: &["AU"],
        },
        RegionRule {
            region: Region::PH,
            emojis: &["🇵🇭"],
            names: &["菲律宾", "马尼拉", "philippines", "manila"],
            codes: &["PH"],
        },
        RegionRule {
            region: Region::IN,
            emojis: &["🇮🇳"],
            names: &["印度", "孟买", "india", "mumbai"],
            // A bare "IN" reads as an English word far too often to be a code.
            codes: &[],
        },
        RegionRule {
            region: Region::RU,
            emojis: &["🇷🇺"],
            names: &["俄罗斯", "莫斯科", "russia", "moscow"],
            codes: &["RU"],
        },
        RegionRule {
            region: Region::TR,
            emojis: &["🇹🇷"],
            names: &["土耳其", "伊斯坦布尔", "turkey", "istanbul"],
            codes: &["TR"],
        },
        RegionRule {
            region: Region::TH,
            emojis: &["🇹🇭"],
            names: &["泰国", "曼谷", "thailand", "bangkok"],
            codes: &["TH"],
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_table_covers_all_regions_in_priority_order() {
        let table: Vec<Region> = REGION_RULES.iter().map(|r| r.region).collect();
        assert_eq!(table, Region::ALL);
    }

    #[test]
    fn test_rule_emojis_match_region_flags() {
        for rule in REGION_RULES.iter() {
            assert_eq!(rule.emojis.first().copied(), rule.region.flag());
        }
    }

    #[test]
    fn test_patterns_are_unique_across_rules() {
        let emojis: Vec<_> = REGION_RULES.iter().flat_map(|r| r.emojis).duplicates().collect();
        assert!(emojis.is_empty(), "duplicate emoji patterns: {emojis:?}");
        let names: Vec<_> = REGION_RULES.iter().flat_map(|r| r.names).duplicates().collect();
        assert!(names.is_empty(), "duplicate keywords: {names:?}");
        let codes: Vec<_> = REGION_RULES.iter().flat_map(|r| r.codes).duplicates().collect();
        assert!(codes.is_empty(), "duplicate codes: {codes:?}");
    }

    #[test]
    fn test_keywords_are_stored_pre_lowered() {
        for rule in REGION_RULES.iter() {
            for keyword in rule.names {
                assert_eq!(*keyword, keyword.to_lowercase(), "keyword for {}", rule.region);
            }
        }
    }

    #[test]
    fn test_codes_are_short_uppercase_ascii() {
        for rule in REGION_RULES.iter() {
            for code in rule.codes {
                assert!(
                    (2..=3).contains(&code.len()),
                    "code {code:?} for {} is not 2-3 letters",
                    rule.region
                );
                assert!(
                    code.bytes().all(|b| b.is_ascii_uppercase()),
                    "code {code:?} for {} is not uppercase ASCII",
                    rule.region
                );
            }
        }
    }

    // If a later rule's keyword embedded an earlier rule's keyword, any name
    // carrying the later keyword would be captured by the earlier rule first.
    #[test]
    fn test_no_later_keyword_embeds_an_earlier_one() {
        for (i, earlier) in REGION_RULES.iter().enumerate() {
            for later in REGION_RULES.iter().skip(i + 1) {
                for late_kw in later.names {
                    for early_kw in earlier.names {
                        assert!(
                            !late_kw.contains(early_kw),
                            "{} keyword {late_kw:?} embeds {} keyword {early_kw:?}",
                            later.region,
                            earlier.region
                        );
                    }
                }
            }
        }
    }
}
