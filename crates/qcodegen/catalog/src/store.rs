//! The catalog store: descriptors plus per-framework ordered rule tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Framework, MatchRule, TemplateDescriptor, TemplateId};

/// Immutable, named collection of template descriptors.
///
/// Loaded once per process; read-only for its lifetime, so a shared
/// reference can serve concurrent requests without locking.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Catalog {
    templates: BTreeMap<TemplateId, TemplateDescriptor>,
    rules: BTreeMap<Framework, Vec<MatchRule>>,
}

impl Catalog {
    /// Assemble a catalog from descriptors and per-framework rule tables.
    ///
    /// Rule order is preserved — it is the classifier's tie-break.
    pub fn new(
        templates: Vec<TemplateDescriptor>,
        rules: BTreeMap<Framework, Vec<MatchRule>>,
    ) -> Self {
        let templates = templates.into_iter().map(|t| (t.id.clone(), t)).collect();
        Self { templates, rules }
    }

    /// Look up a descriptor by id.
    pub fn get(&self, id: &TemplateId) -> Option<&TemplateDescriptor> {
        self.templates.get(id)
    }

    /// Ordered rule table for a framework (empty if none registered).
    pub fn rules(&self, framework: Framework) -> &[MatchRule] {
        self.rules.get(&framework).map_or(&[], |r| r.as_slice())
    }

    /// Distinct top-level category keywords for a framework, in rule order.
    ///
    /// Surfaced in `NoMatchingTemplate` guidance.
    pub fn categories(&self, framework: Framework) -> Vec<String> {
        let mut seen = Vec::new();
        for rule in self.rules(framework) {
            if !seen.contains(&rule.category) {
                seen.push(rule.category.clone());
            }
        }
        seen
    }

    /// All template ids, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &TemplateId> {
        self.templates.keys()
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
