use std::collections::HashSet;

/// Fixed taxonomy used to compare a past role with a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Backend,
    Frontend,
    Data,
    Devops,
    Mobile,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::Backend,
        Domain::Frontend,
        Domain::Data,
        Domain::Devops,
        Domain::Mobile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Backend => "backend",
            Domain::Frontend => "frontend",
            Domain::Data => "data",
            Domain::Devops => "devops",
            Domain::Mobile => "mobile",
        }
    }

    /// Keywords matched as plain substrings of lowercased text.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Domain::Backend => &["backend", "api", "server", "database", "microservice"],
            Domain::Frontend => &["frontend", "ui", "react", "angular", "vue", "html", "css"],
            Domain::Data => &["data", "analytics", "science", "analyst", "ml", "ai"],
            Domain::Devops => &[
                "devops",
                "infrastructure",
                "cloud",
                "aws",
                "docker",
                "kubernetes",
            ],
            Domain::Mobile => &["mobile", "ios", "android", "app"],
        }
    }
}

/// Domains whose keywords occur anywhere in `text` (case-insensitive).
///
/// Matching is substring based, so "ui" also hits "build" and "app" hits
/// "application". The classifier is deliberately that coarse.
pub fn classify(text: &str) -> HashSet<Domain> {
    let text = text.to_lowercase();
    Domain::ALL
        .into_iter()
        .filter(|domain| domain.keywords().iter().any(|kw| text.contains(kw)))
        .collect()
}

/// True when both texts fall in at least one common domain.
pub fn shares_domain(left: &str, right: &str) -> bool {
    let left = classify(left);
    if left.is_empty() {
        return false;
    }
    !left.is_disjoint(&classify(right))
}
