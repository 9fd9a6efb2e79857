//! Match construction with injectable components.

use tracing::warn;

use super::coordinator::{CoordinatorParts, TurnCoordinator};
use super::queue::DeploymentQueue;
use crate::ai::{strategist_for, AiConfig, Strategist};
use crate::core::{EngineError, GameRng, MatchConfig, Result, Side, SideMap, UnitIdAllocator};
use crate::events::{EventBus, EventListener};
use crate::patterns::AttackPatternCatalog;
use crate::rules::{CombatResolver, PlacementEngine};
use crate::units::{ArchetypeRegistry, Roster, UnitInstance};

/// Builder for a `TurnCoordinator`.
///
/// Anything not supplied falls back to a default: the standard archetype
/// registry, empty rosters, a crit stream seeded from the config, and no
/// strategists (both sides human-controlled).
///
/// ## Example
///
/// ```
/// use tile_tactics::ai::AiConfig;
/// use tile_tactics::coordinator::MatchBuilder;
/// use tile_tactics::core::{MatchConfig, Phase, Side};
/// use tile_tactics::units::{jobs, Roster};
///
/// let mut game = MatchBuilder::new(MatchConfig::standard())
///     .with_roster(Side::Player, Roster::of([jobs::WARRIOR, jobs::ARCHER]))
///     .with_roster(Side::Ai, Roster::of([jobs::KNIGHT, jobs::WIZARD]))
///     .with_ai(Side::Ai, &AiConfig::default())
///     .build()
///     .unwrap();
///
/// assert_eq!(game.phase(), Phase::Deployment);
/// assert_eq!(game.active_side(), Side::Player);
/// assert_eq!(game.queue(Side::Player).len(), 2);
/// ```
pub struct MatchBuilder {
    config: MatchConfig,
    registry: Option<ArchetypeRegistry>,
    rosters: SideMap<Roster>,
    placement: Option<PlacementEngine>,
    combat: Option<CombatResolver>,
    strategists: SideMap<Option<Box<dyn Strategist>>>,
    events: EventBus,
}

impl MatchBuilder {
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            registry: None,
            rosters: SideMap::default(),
            placement: None,
            combat: None,
            strategists: SideMap::default(),
            events: EventBus::new(),
        }
    }

    /// Use a custom archetype table instead of the standard jobs.
    #[must_use]
    pub fn with_registry(mut self, registry: ArchetypeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    #[must_use]
    pub fn with_roster(mut self, side: Side, roster: Roster) -> Self {
        self.rosters[side] = roster;
        self
    }

    #[must_use]
    pub fn with_placement_engine(mut self, engine: PlacementEngine) -> Self {
        self.placement = Some(engine);
        self
    }

    #[must_use]
    pub fn with_combat_resolver(mut self, resolver: CombatResolver) -> Self {
        self.combat = Some(resolver);
        self
    }

    /// Hand control of `side` to a strategist.
    #[must_use]
    pub fn with_strategist(mut self, side: Side, strategist: Box<dyn Strategist>) -> Self {
        self.strategists[side] = Some(strategist);
        self
    }

    /// Hand control of `side` to the strategist `config` describes.
    ///
    /// Randomized strategists get their own stream derived from the match seed.
    #[must_use]
    pub fn with_ai(self, side: Side, config: &AiConfig) -> Self {
        let rng = GameRng::new(self.config.seed).for_context(match side {
            Side::Player => "ai-player",
            Side::Ai => "ai-opponent",
        });
        self.with_strategist(side, strategist_for(config, rng))
    }

    #[must_use]
    pub fn with_listener(mut self, listener: impl EventListener + 'static) -> Self {
        self.events.subscribe(listener);
        self
    }

    /// Create the units and start the match in the deployment phase.
    ///
    /// Rosters longer than `max_roster_size` are cut to their first entries.
    /// Fails with `UnknownArchetype` if a roster names an archetype the
    /// registry does not define.
    pub fn build(self) -> Result<TurnCoordinator> {
        let MatchBuilder {
            config,
            registry,
            mut rosters,
            placement,
            combat,
            strategists,
            events,
        } = self;

        let registry = registry.unwrap_or_else(ArchetypeRegistry::standard);
        let catalog = AttackPatternCatalog::from_registry(&registry);
        let mut ids = UnitIdAllocator::new();
        let mut queues: SideMap<DeploymentQueue> = SideMap::default();

        for side in Side::ALL {
            let roster = &mut rosters[side];
            let dropped = roster.truncate(config.max_roster_size);
            if dropped > 0 {
                warn!(
                    %side,
                    dropped,
                    max = config.max_roster_size,
                    "roster exceeds the size limit, extra units ignored"
                );
            }

            for entry in roster.iter() {
                let archetype = registry
                    .get(entry.archetype)
                    .ok_or(EngineError::UnknownArchetype(entry.archetype))?;
                let pattern = catalog.pattern_for(entry.archetype)?;
                queues[side].push_back(UnitInstance::from_roster(
                    ids.next_id(),
                    side,
                    archetype,
                    &entry.base,
                    pattern,
                ));
            }
        }

        let combat = combat.unwrap_or_else(|| CombatResolver::from_seed(config.seed));

        Ok(TurnCoordinator::from_parts(CoordinatorParts {
            config,
            queues,
            placement: placement.unwrap_or_default(),
            combat,
            strategists,
            events,
        }))
    }
}
