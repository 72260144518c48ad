use crate::condition::RuleCondition;
use crate::policy::EffectiveConfig;
use crate::rules;
use std::fmt;
use std::sync::{Arc, LazyLock};
use zonecheck_types::PropertyFacts;

/// Shared pure predicate over property facts.
pub type Predicate = Arc<dyn Fn(&PropertyFacts) -> bool + Send + Sync>;

/// A named building type and the predicate that grants it.
#[derive(Clone)]
pub struct BuildingTypeRule {
    id: String,
    name: String,
    predicate: Predicate,
}

impl BuildingTypeRule {
    pub fn new<F>(id: impl Into<String>, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&PropertyFacts) -> bool + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn from_condition(
        id: impl Into<String>,
        name: impl Into<String>,
        condition: RuleCondition,
    ) -> Self {
        Self::new(id, name, move |facts| condition.matches(facts))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn permits(&self, facts: &PropertyFacts) -> bool {
        (self.predicate)(facts)
    }
}

impl fmt::Debug for BuildingTypeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildingTypeRule")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

static BUILTIN: LazyLock<RuleSet> = LazyLock::new(|| RuleSet {
    rules: rules::builtin(),
});

/// Ordered collection of rules. Declaration order is output order.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<BuildingTypeRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in rules, in their fixed order.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Shared reference to the built-in set, without cloning.
    pub fn builtin_ref() -> &'static RuleSet {
        &BUILTIN
    }

    /// Enabled built-ins in their fixed order, then custom rules in config order.
    pub fn from_config(cfg: &EffectiveConfig) -> Self {
        let mut set = Self::new();

        for rule in BUILTIN.iter() {
            if cfg.is_enabled(rule.id()) {
                set.push(rule.clone());
            }
        }

        for custom in &cfg.custom_rules {
            set.push(BuildingTypeRule::from_condition(
                custom.id.clone(),
                custom.name.clone(),
                custom.condition.clone(),
            ));
        }

        set
    }

    /// Append a rule after all existing ones.
    pub fn push(&mut self, rule: BuildingTypeRule) {
        self.rules.push(rule);
    }

    pub fn with(mut self, rule: BuildingTypeRule) -> Self {
        self.push(rule);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BuildingTypeRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.rules.iter().map(BuildingTypeRule::id).collect()
    }

    pub fn get(&self, id: &str) -> Option<&BuildingTypeRule> {
        self.rules.iter().find(|r| r.id() == id)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a BuildingTypeRule;
    type IntoIter = std::slice::Iter<'a, BuildingTypeRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
