//! Keyword-based dish photo lookup.
//!
//! Generating a photo per dish would be slow and expensive, so dishes are
//! mapped onto a fixed set of stock photos by substring matching on the dish
//! name and tags. Rules are evaluated top to bottom and the first match wins;
//! the order is load-bearing (a dish naming both a fish and a tomato resolves
//! to the fish photo because fish is checked first), so the rules live in a
//! `Vec`, not a map.

const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836?auto=format&fit=crop&w=800&q=80";

/// One first-match-wins rule: any trigger substring maps to the image URL.
#[derive(Debug, Clone)]
pub struct ImageRule {
    pub triggers: Vec<String>,
    pub url: String,
}

impl ImageRule {
    fn new(triggers: &[&str], url: &str) -> Self {
        ImageRule {
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
            url: url.to_string(),
        }
    }

    fn matches(&self, haystack: &str) -> bool {
        self.triggers.iter().any(|t| haystack.contains(t.as_str()))
    }
}

/// Ordered photo lookup table. The default catalog carries bilingual
/// (zh/en) triggers; a different locale supplies its own catalog instead
/// of patching match logic.
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    name_rules: Vec<ImageRule>,
    tag_rules: Vec<ImageRule>,
    default_url: String,
}

impl ImageCatalog {
    pub fn new(name_rules: Vec<ImageRule>, tag_rules: Vec<ImageRule>, default_url: String) -> Self {
        ImageCatalog {
            name_rules,
            tag_rules,
            default_url,
        }
    }

    /// Resolve a representative photo for a dish. Pure; identical inputs
    /// always resolve to the identical URL.
    pub fn resolve(&self, name: &str, tags: &[String]) -> &str {
        let name = name.to_lowercase();
        for rule in &self.name_rules {
            if rule.matches(&name) {
                return &rule.url;
            }
        }

        let tags = tags.join(" ").to_lowercase();
        for rule in &self.tag_rules {
            if rule.matches(&tags) {
                return &rule.url;
            }
        }

        &self.default_url
    }
}

impl Default for ImageCatalog {
    fn default() -> Self {
        let unsplash = |id: &str| {
            format!(
                "https://images.unsplash.com/{}?auto=format&fit=crop&w=800&q=80",
                id
            )
        };
        let rule = |triggers: &[&str], id: &str| ImageRule::new(triggers, &unsplash(id));

        ImageCatalog {
            name_rules: vec![
                rule(&["鱼", "fish"], "photo-1519708227418-c8fd9a32b7a2"),
                rule(&["虾", "shrimp"], "photo-1565557623262-b51c2513a641"),
                rule(&["牛", "beef"], "photo-1558030006-450675393462"),
                rule(&["排骨", "肉", "pork", "红烧"], "photo-1608620888949-055f17a94b46"),
                rule(&["鸡", "chicken"], "photo-1610057099443-fde8c4d29f92"),
                rule(&["鸭", "duck"], "photo-1532258848416-29e2f470550f"),
                rule(&["豆腐", "tofu"], "photo-1546069901-ba9599a7e63c"),
                rule(&["蛋", "egg"], "photo-1524855470716-41712a32c25a"),
                rule(&["汤", "soup"], "photo-1547592166-23acbe3a624b"),
                rule(&["面", "noodle"], "photo-1552611052-33e04de081de"),
                rule(&["西红柿", "番茄", "tomato"], "photo-1592187270271-9a4b84faa228"),
                rule(&["土豆", "potato"], "photo-1518977676601-b53f82a6b6dc"),
            ],
            tag_rules: vec![
                rule(&["salad", "凉拌"], "photo-1512621776951-a57141f2eefd"),
                rule(&["spicy", "辣"], "photo-1563245372-f21724e3856d"),
                rule(&["braised", "炖"], "photo-1473093226795-af9932fe5856"),
            ],
            default_url: DEFAULT_IMAGE.to_string(),
        }
    }
}
