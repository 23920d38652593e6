//! Usage collector for ML completion-ranking settings.
//!
//! Reports changes to the completion-ranking settings screen under the
//! `ml.completion` group. The ranker id a user picked is free text from the
//! core's point of view, so it is routed through the
//! `completion_ranking_model_id` rule: only currently registered ranking
//! providers survive into the record.

use std::sync::Arc;

use crate::domain::error::Result;
use crate::domain::field::{Field, FieldValue};
use crate::domain::schema::EventGroup;
use crate::emitter::Emitter;
use crate::providers::{ProviderAllowList, ProviderRegistry};
use crate::registry::ValidationRegistry;
use crate::rules::AllowListRule;

/// Group identity for completion-ranking usage statistics.
pub const GROUP_ID: &str = "ml.completion";
pub const GROUP_VERSION: u32 = 1;

/// Rule id bound to the `ranker_id` field.
pub const RANKER_ID_RULE: &str = "completion_ranking_model_id";

const RANKING_SETTINGS_CHANGED: &str = "ranking.settings.changed";
const DECORATING_SETTINGS_CHANGED: &str = "decorating.settings.changed";

/// Collector for completion-ranking settings changes.
pub struct RankingSettingsCollector {
    group: EventGroup,
    emitter: Arc<Emitter>,
}

impl RankingSettingsCollector {
    /// Build the collector's event group and bind it to `emitter`.
    pub fn new(emitter: Arc<Emitter>) -> Result<Self> {
        let mut group = EventGroup::new(GROUP_ID, GROUP_VERSION);
        group.define_event(
            RANKING_SETTINGS_CHANGED,
            vec![
                Field::string("ranker_id").with_custom_rule(RANKER_ID_RULE),
                Field::boolean("enabled"),
                Field::boolean("enabled_by_default"),
                Field::boolean("using_language_checkbox"),
            ],
        )?;
        group.define_event(
            DECORATING_SETTINGS_CHANGED,
            vec![Field::boolean("enabled")],
        )?;

        Ok(Self { group, emitter })
    }

    /// Register the ranker-id allow-list rule, backed by the host's live
    /// provider registry. Call once at startup, before the first emission.
    pub fn register_rules(registry: &ValidationRegistry, providers: Arc<ProviderRegistry>) {
        registry.register(Arc::new(AllowListRule::new(
            RANKER_ID_RULE,
            Arc::new(ProviderAllowList::new(providers)),
        )));
    }

    /// The group this collector reports under.
    pub fn group(&self) -> &EventGroup {
        &self.group
    }

    /// Report a change to the per-language ranking settings.
    pub fn ranking_settings_changed(
        &self,
        ranker_id: &str,
        enabled: bool,
        enabled_by_default: bool,
        using_language_checkbox: bool,
    ) -> Result<()> {
        self.emitter.emit(
            &self.group,
            RANKING_SETTINGS_CHANGED,
            &[
                ("ranker_id", FieldValue::from(ranker_id)),
                ("enabled", FieldValue::from(enabled)),
                ("enabled_by_default", FieldValue::from(enabled_by_default)),
                (
                    "using_language_checkbox",
                    FieldValue::from(using_language_checkbox),
                ),
            ],
        )
    }

    /// Report a change to the decoration toggle.
    pub fn decorating_settings_changed(&self, enabled: bool) -> Result<()> {
        self.emitter.emit(
            &self.group,
            DECORATING_SETTINGS_CHANGED,
            &[("enabled", FieldValue::from(enabled))],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::REJECTED_VALUE;
    use crate::fakes::MemoryEventSink;

    fn harness() -> (Arc<ProviderRegistry>, Arc<MemoryEventSink>, RankingSettingsCollector) {
        let providers = Arc::new(ProviderRegistry::new());
        let registry = Arc::new(ValidationRegistry::new());
        RankingSettingsCollector::register_rules(&registry, providers.clone());

        let sink = Arc::new(MemoryEventSink::new());
        let emitter = Arc::new(Emitter::new(registry, sink.clone()));
        let collector = RankingSettingsCollector::new(emitter).expect("collector");
        (providers, sink, collector)
    }

    #[test]
    fn registered_ranker_survives_into_record() {
        let (providers, sink, collector) = harness();
        providers.register_provider("fast-ranker");

        collector
            .ranking_settings_changed("fast-ranker", true, false, true)
            .expect("emit");

        let records = sink.records();
        assert_eq!(records[0].group_id, GROUP_ID);
        assert_eq!(records[0].event_id, "ranking.settings.changed");
        assert_eq!(
            records[0].field("ranker_id"),
            Some(&FieldValue::from("fast-ranker"))
        );
    }

    #[test]
    fn unregistered_ranker_redacted() {
        let (_, sink, collector) = harness();

        collector
            .ranking_settings_changed("ghost-ranker", true, false, true)
            .expect("emit");

        assert_eq!(
            sink.records()[0].field("ranker_id"),
            Some(&FieldValue::from(REJECTED_VALUE))
        );
    }

    #[test]
    fn decorating_toggle_reported() {
        let (_, sink, collector) = harness();
        collector.decorating_settings_changed(false).expect("emit");

        let records = sink.records();
        assert_eq!(records[0].event_id, "decorating.settings.changed");
        assert_eq!(records[0].field("enabled"), Some(&FieldValue::from(false)));
    }
}
