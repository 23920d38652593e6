//! Process-scoped registry of validation rules.
//!
//! The registry is an explicit dependency — constructed at startup and
//! passed by handle to every component that resolves rules — rather than
//! hidden global state. `register` is typically called only while
//! extensions load, but the table tolerates registration concurrent with
//! resolution: the `RwLock` gives acquire/release visibility, so a fully
//! registered rule is visible to all threads before `resolve` can return it.

use std::sync::{Arc, RwLock};

use crate::domain::error::{Result, StructuralError};
use crate::rules::ValidationRule;

/// Mapping from rule id to rule instance, by accept-predicate scan.
#[derive(Default)]
pub struct ValidationRegistry {
    rules: RwLock<Vec<Arc<dyn ValidationRule>>>,
}

impl ValidationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule to the registry.
    ///
    /// Collisions (an already registered rule accepting an id freshly probed
    /// later) resolve first-registered-wins; nothing here can detect them
    /// eagerly for arbitrary predicates, so [`ValidationRegistry::resolve`]
    /// flags them when they surface.
    pub fn register(&self, rule: Arc<dyn ValidationRule>) {
        let mut rules = self.rules.write().expect("rule registry poisoned");
        rules.push(rule);
    }

    /// Return the first registered rule whose `accepts` matches `rule_id`.
    ///
    /// Registration order is the tie-break; a collision is flagged with a
    /// structured warning since two rules claiming one id is a host
    /// configuration error.
    ///
    /// # Errors
    ///
    /// `StructuralError::NoRuleBound` — no registered rule accepts the id.
    /// Distinct from "field has no rule id", which is not an error and skips
    /// validation entirely.
    pub fn resolve(&self, rule_id: &str) -> Result<Arc<dyn ValidationRule>> {
        let rules = self.rules.read().expect("rule registry poisoned");
        let mut matches = rules.iter().filter(|r| r.accepts(rule_id));

        let first = matches.next().cloned();
        if first.is_some() && matches.next().is_some() {
            tracing::warn!(
                event = "registry.rule_collision",
                rule_id = %rule_id,
                "multiple registered rules accept this id; first registered wins"
            );
        }

        first.ok_or_else(|| StructuralError::NoRuleBound {
            rule_id: rule_id.to_string(),
        })
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.read().expect("rule registry poisoned").len()
    }

    /// Whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::StaticAllowList;
    use crate::rules::{AllowListRule, Decision, EventContext};

    fn ctx<'a>() -> EventContext<'a> {
        EventContext {
            group_id: "g",
            version: 1,
            event_id: "e",
            field: "f",
        }
    }

    #[test]
    fn resolve_finds_registered_rule() {
        let registry = ValidationRegistry::new();
        registry.register(Arc::new(AllowListRule::new(
            "completion_ranking_model_id",
            Arc::new(StaticAllowList::with_values(&["fast-ranker"])),
        )));

        let rule = registry.resolve("completion_ranking_model_id").expect("resolve");
        assert_eq!(rule.validate("fast-ranker", &ctx()), Decision::Accepted);
    }

    #[test]
    fn resolve_unknown_id_fails() {
        let registry = ValidationRegistry::new();
        let err = registry.resolve("nonexistent_rule").err().unwrap();
        match err {
            StructuralError::NoRuleBound { rule_id } => assert_eq!(rule_id, "nonexistent_rule"),
            other => panic!("Expected NoRuleBound, got {:?}", other),
        }
    }

    #[test]
    fn collision_resolves_to_first_registered() {
        let registry = ValidationRegistry::new();
        registry.register(Arc::new(AllowListRule::new(
            "shared_id",
            Arc::new(StaticAllowList::with_values(&["only-in-first"])),
        )));
        registry.register(Arc::new(AllowListRule::new(
            "shared_id",
            Arc::new(StaticAllowList::with_values(&["only-in-second"])),
        )));

        let rule = registry.resolve("shared_id").expect("resolve");
        assert_eq!(rule.validate("only-in-first", &ctx()), Decision::Accepted);
        assert_eq!(rule.validate("only-in-second", &ctx()), Decision::Rejected);
    }

    #[test]
    fn registration_is_visible_across_threads() {
        let registry = Arc::new(ValidationRegistry::new());

        let writer = {
            let registry = registry.clone();
            std::thread::spawn(move || {
                registry.register(Arc::new(AllowListRule::new(
                    "threaded_rule",
                    Arc::new(StaticAllowList::new()),
                )));
            })
        };
        writer.join().expect("writer thread");

        assert!(registry.resolve("threaded_rule").is_ok());
        assert_eq!(registry.len(), 1);
    }
}
