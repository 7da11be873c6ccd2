//! Game state machine
//!
//! Owns the current/previous [`GameState`], drives per-tick dispatch, loads
//! dungeon levels and places the player. Room, point and multiplier events are
//! folded into shared tracker state by bus handlers that live as long as the
//! machine does.

use std::sync::Arc;

use parking_lot::Mutex;

use super::rooms::RoomRegistry;
use super::score::ScoreTracker;
use crate::dungeon::{DungeonBuilder, DungeonLevel, Position, Room, SpawnPointResolver};
use crate::entities::{PlayerDetail, PlayerHandle, PlayerSpawner};
use crate::error::{ConfigError, GameError, GenerationError};
use crate::events::{EventBus, EventKind, GameEvent, SubscriptionId};

/// All possible game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    GameStarted,
    PlayingLevel,
    EngagingEnemy,
    LevelCompleted,
    GameWon,
    GameLost,
    GamePaused,
    DungeonOverviewMap,
    RestartGame,
}

/// The game state machine
pub struct Game {
    /// Current game state
    state: GameState,
    /// State held before the last transition
    previous_state: GameState,
    bus: EventBus,
    builder: Box<dyn DungeonBuilder>,
    spawn_points: Box<dyn SpawnPointResolver>,
    spawner: Box<dyn PlayerSpawner>,
    /// Ordered level definitions, fixed at initialize
    levels: Vec<DungeonLevel>,
    level_index: usize,
    player_detail: Option<PlayerDetail>,
    player: Option<PlayerHandle>,
    /// Shared with the RoomChanged handler
    rooms: Arc<Mutex<RoomRegistry>>,
    /// Shared with the PointScored and MultiplierChanged handlers
    score: Arc<Mutex<ScoreTracker>>,
    subscriptions: Vec<SubscriptionId>,
}

impl Game {
    /// Create the state machine and subscribe its event handlers
    pub fn new(
        bus: EventBus,
        builder: Box<dyn DungeonBuilder>,
        spawn_points: Box<dyn SpawnPointResolver>,
        spawner: Box<dyn PlayerSpawner>,
    ) -> Self {
        let rooms = Arc::new(Mutex::new(RoomRegistry::new()));
        let score = Arc::new(Mutex::new(ScoreTracker::new()));

        let subscriptions = vec![
            subscribe_room_changed(&bus, Arc::clone(&rooms)),
            subscribe_point_scored(&bus, Arc::clone(&score)),
            subscribe_multiplier_changed(&bus, Arc::clone(&score)),
        ];

        Self {
            state: GameState::GameStarted,
            previous_state: GameState::GameStarted,
            bus,
            builder,
            spawn_points,
            spawner,
            levels: Vec::new(),
            level_index: 0,
            player_detail: None,
            player: None,
            rooms,
            score,
            subscriptions,
        }
    }

    /// Select the first level, spawn the player and enter `GameStarted`.
    ///
    /// An empty level list or an invalid level aborts before anything is spawned.
    pub fn initialize(
        &mut self,
        levels: Vec<DungeonLevel>,
        player_detail: PlayerDetail,
    ) -> Result<(), GameError> {
        if levels.is_empty() {
            return Err(ConfigError::EmptyLevelList.into());
        }
        for level in &levels {
            level.validate()?;
        }

        let player = self.spawner.instantiate(&player_detail)?;
        self.spawner.init(player, &player_detail)?;
        log::info!(
            "Spawned player '{}' ({} levels configured)",
            player_detail.character_name,
            levels.len()
        );

        self.levels = levels;
        self.level_index = 0;
        self.player = Some(player);
        self.player_detail = Some(player_detail);
        self.score.lock().reset();
        self.previous_state = GameState::GameStarted;
        self.state = GameState::GameStarted;
        Ok(())
    }

    /// Advance one simulation step.
    ///
    /// State dispatch runs first, then events queued on the bus since the
    /// last tick are delivered. A failed dungeon build is logged and the
    /// machine stays in `GameStarted`; only fatal errors are returned.
    pub fn tick(&mut self) -> Result<(), GameError> {
        match self.state {
            GameState::GameStarted => match self.play_dungeon_level(self.level_index) {
                Ok(()) => self.set_state(GameState::PlayingLevel),
                Err(GameError::Generation(e)) => {
                    log::error!(
                        "Couldn't build dungeon for level {}: {}",
                        self.level_index,
                        e
                    );
                }
                Err(e) => return Err(e),
            },
            // No behaviour yet; transitions into these states are still to be designed
            GameState::PlayingLevel
            | GameState::EngagingEnemy
            | GameState::LevelCompleted
            | GameState::GameWon
            | GameState::GameLost
            | GameState::GamePaused
            | GameState::DungeonOverviewMap
            | GameState::RestartGame => {}
        }

        self.bus.drain_queued();
        Ok(())
    }

    /// Build the level at `index`, announce its entrance room and move the player there.
    ///
    /// On generation failure nothing is published and the player does not move.
    pub fn play_dungeon_level(&mut self, index: usize) -> Result<(), GameError> {
        let player = self.player.ok_or(GameError::NotInitialized)?;
        let level = self
            .levels
            .get(index)
            .ok_or(ConfigError::LevelIndexOutOfRange {
                index,
                len: self.levels.len(),
            })?;

        self.builder.generate_dungeon(level)?;
        let room = self
            .builder
            .current_room()
            .ok_or(GenerationError::NoEntrance)?;
        self.level_index = index;

        self.bus.publish(GameEvent::room_changed(Arc::clone(&room)));

        let middle = room.middle_position();
        let spawn = self.spawn_points.nearest_spawn_point(&room, middle);
        self.spawner.set_position(player, spawn)?;

        log::info!(
            "Playing level {} ({:?}), player placed at {:?}",
            index,
            room.id,
            spawn
        );
        Ok(())
    }

    /// Move to `state`, remembering the one we leave
    pub fn set_state(&mut self, state: GameState) {
        log::debug!("State transition: {:?} -> {:?}", self.state, state);
        self.previous_state = self.state;
        self.state = state;
    }

    /// Return to `GameStarted` so the next tick rebuilds the current level
    pub fn request_restart(&mut self) {
        log::info!("Restart requested from {:?}", self.state);
        self.set_state(GameState::GameStarted);
    }

    /// Remove every bus subscription. Safe to call more than once.
    pub fn shutdown(&mut self) {
        for id in self.subscriptions.drain(..) {
            self.bus.unsubscribe(id);
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn previous_state(&self) -> GameState {
        self.previous_state
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn current_room(&self) -> Option<Arc<Room>> {
        self.rooms.lock().current_room()
    }

    pub fn previous_room(&self) -> Option<Arc<Room>> {
        self.rooms.lock().previous_room()
    }

    pub fn current_player(&self) -> Option<PlayerHandle> {
        self.player
    }

    pub fn player_position(&self) -> Option<Position> {
        self.player.and_then(|p| self.spawner.position(p))
    }

    pub fn current_player_minimap_icon(&self) -> Option<&str> {
        self.player_detail.as_ref().map(|d| d.minimap_icon.as_str())
    }

    pub fn current_dungeon_level(&self) -> Option<&DungeonLevel> {
        self.levels.get(self.level_index)
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn score(&self) -> u64 {
        self.score.lock().score()
    }

    pub fn multiplier(&self) -> u32 {
        self.score.lock().multiplier()
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn subscribe_room_changed(bus: &EventBus, rooms: Arc<Mutex<RoomRegistry>>) -> SubscriptionId {
    bus.subscribe(EventKind::RoomChanged, move |event| {
        if let GameEvent::RoomChanged(args) = event {
            rooms.lock().set_current_room(&args.room);
        }
    })
}

fn subscribe_point_scored(bus: &EventBus, score: Arc<Mutex<ScoreTracker>>) -> SubscriptionId {
    let publisher = bus.clone();
    bus.subscribe(EventKind::PointScored, move |event| {
        if let GameEvent::PointScored(args) = event {
            // Release the lock before re-publishing
            let (total, multiplier) = {
                let mut tracker = score.lock();
                tracker.add_points(args.point);
                (tracker.score(), tracker.multiplier())
            };
            publisher.publish(GameEvent::score_changed(total, multiplier));
        }
    })
}

fn subscribe_multiplier_changed(
    bus: &EventBus,
    score: Arc<Mutex<ScoreTracker>>,
) -> SubscriptionId {
    let publisher = bus.clone();
    bus.subscribe(EventKind::MultiplierChanged, move |event| {
        if let GameEvent::MultiplierChanged(args) = event {
            let (total, multiplier) = {
                let mut tracker = score.lock();
                tracker.change_multiplier(args.is_increment);
                (tracker.score(), tracker.multiplier())
            };
            publisher.publish(GameEvent::score_changed(total, multiplier));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{NearestSpawnPoint, RoomId};
    use crate::entities::WorldSpawner;
    use crate::error::SpawnError;
    use crate::events::ScoreChangedArgs;
    use crate::game::{MAX_MULTIPLIER, MIN_MULTIPLIER};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Builder whose success is controlled by the test
    struct ScriptedBuilder {
        succeed: Arc<AtomicBool>,
        calls: Arc<AtomicUsize>,
        rooms: Vec<Arc<Room>>,
        built: bool,
    }

    impl DungeonBuilder for ScriptedBuilder {
        fn generate_dungeon(&mut self, level: &DungeonLevel) -> Result<(), GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.succeed.load(Ordering::SeqCst) {
                self.built = true;
                Ok(())
            } else {
                Err(GenerationError::InvalidLevel(level.name.clone()))
            }
        }

        fn current_room(&self) -> Option<Arc<Room>> {
            if self.built {
                self.rooms.first().cloned()
            } else {
                None
            }
        }

        fn room(&self, id: RoomId) -> Option<Arc<Room>> {
            self.rooms.get(id.0).cloned()
        }

        fn rooms(&self) -> &[Arc<Room>] {
            &self.rooms
        }
    }

    /// Spawner that counts instantiations and can be told to fail
    struct CountingSpawner {
        inner: WorldSpawner,
        instantiated: Arc<AtomicUsize>,
        fail: bool,
    }

    impl PlayerSpawner for CountingSpawner {
        fn instantiate(&mut self, detail: &PlayerDetail) -> Result<PlayerHandle, SpawnError> {
            if self.fail {
                return Err(SpawnError::Instantiate("prefab missing".to_string()));
            }
            self.instantiated.fetch_add(1, Ordering::SeqCst);
            self.inner.instantiate(detail)
        }

        fn init(&mut self, player: PlayerHandle, detail: &PlayerDetail) -> Result<(), SpawnError> {
            self.inner.init(player, detail)
        }

        fn set_position(&mut self, player: PlayerHandle, position: Position) -> Result<(), SpawnError> {
            self.inner.set_position(player, position)
        }

        fn position(&self, player: PlayerHandle) -> Option<Position> {
            self.inner.position(player)
        }
    }

    struct Harness {
        game: Game,
        succeed: Arc<AtomicBool>,
        builds: Arc<AtomicUsize>,
        spawns: Arc<AtomicUsize>,
    }

    fn entrance() -> Arc<Room> {
        Arc::new(
            Room::new(RoomId(0), Position::new(10, 10), Position::new(20, 16))
                .with_spawn_positions(vec![Position::new(11, 11), Position::new(14, 13)])
                .as_entrance(),
        )
    }

    fn harness(succeed: bool, fail_spawn: bool) -> Harness {
        let succeed = Arc::new(AtomicBool::new(succeed));
        let builds = Arc::new(AtomicUsize::new(0));
        let spawns = Arc::new(AtomicUsize::new(0));
        let builder = ScriptedBuilder {
            succeed: Arc::clone(&succeed),
            calls: Arc::clone(&builds),
            rooms: vec![
                entrance(),
                Arc::new(Room::new(RoomId(1), Position::new(30, 10), Position::new(36, 16))),
            ],
            built: false,
        };
        let spawner = CountingSpawner {
            inner: WorldSpawner::new(),
            instantiated: Arc::clone(&spawns),
            fail: fail_spawn,
        };
        let game = Game::new(
            EventBus::new(),
            Box::new(builder),
            Box::new(NearestSpawnPoint),
            Box::new(spawner),
        );
        Harness {
            game,
            succeed,
            builds,
            spawns,
        }
    }

    fn two_levels() -> Vec<DungeonLevel> {
        vec![
            DungeonLevel::new("Level 1", 2, 4),
            DungeonLevel::new("Level 2", 3, 6),
        ]
    }

    fn record(bus: &EventBus, kind: EventKind) -> Arc<Mutex<Vec<GameEvent>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        bus.subscribe(kind, move |e| sink.lock().push(e.clone()));
        seen
    }

    fn score_updates(seen: &Mutex<Vec<GameEvent>>) -> Vec<ScoreChangedArgs> {
        seen.lock()
            .iter()
            .filter_map(|e| match e {
                GameEvent::ScoreChanged(args) => Some(*args),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_initialize_empty_levels_fails_without_spawn() {
        let mut h = harness(true, false);
        let err = h.game.initialize(Vec::new(), PlayerDetail::default()).unwrap_err();

        assert!(matches!(err, GameError::Config(ConfigError::EmptyLevelList)));
        assert!(err.is_fatal());
        assert_eq!(h.spawns.load(Ordering::SeqCst), 0);
        assert!(h.game.current_player().is_none());
    }

    #[test]
    fn test_initialize_selects_first_level() {
        let mut h = harness(true, false);
        h.game.initialize(two_levels(), PlayerDetail::default()).unwrap();

        assert_eq!(h.game.state(), GameState::GameStarted);
        assert_eq!(h.game.previous_state(), GameState::GameStarted);
        assert_eq!(h.game.current_dungeon_level().unwrap().name, "Level 1");
        assert_eq!(h.game.current_player_minimap_icon(), Some("gunner_minimap"));
        assert_eq!(h.game.score(), 0);
        assert_eq!(h.game.multiplier(), 1);
        assert_eq!(h.spawns.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_spawn_failure_is_fatal() {
        let mut h = harness(true, true);
        let err = h.game.initialize(two_levels(), PlayerDetail::default()).unwrap_err();
        assert!(matches!(err, GameError::Spawn(SpawnError::Instantiate(_))));
        assert!(h.game.current_player().is_none());
    }

    #[test]
    fn test_invalid_level_aborts_initialize() {
        let mut h = harness(true, false);
        let levels = vec![DungeonLevel::new("ok", 1, 2), DungeonLevel::new("broken", 4, 1)];
        let err = h.game.initialize(levels, PlayerDetail::default()).unwrap_err();
        assert!(matches!(err, GameError::Config(ConfigError::InvalidLevel { .. })));
        assert_eq!(h.spawns.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_tick_before_initialize() {
        let mut h = harness(true, false);
        assert!(matches!(h.game.tick(), Err(GameError::NotInitialized)));
        assert_eq!(h.builds.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_successful_tick_enters_level() {
        let mut h = harness(true, false);
        let rooms_seen = record(h.game.bus(), EventKind::RoomChanged);
        h.game.initialize(two_levels(), PlayerDetail::default()).unwrap();

        h.game.tick().unwrap();

        assert_eq!(h.game.state(), GameState::PlayingLevel);
        assert_eq!(h.game.previous_state(), GameState::GameStarted);
        assert_eq!(rooms_seen.lock().len(), 1);
        assert_eq!(h.game.current_room().unwrap().id, RoomId(0));
        // Middle of (10,10)-(20,16) is (15,13); nearest spawn point is (14,13)
        assert_eq!(h.game.player_position(), Some(Position::new(14, 13)));

        // Later ticks do not rebuild
        h.game.tick().unwrap();
        assert_eq!(h.builds.load(Ordering::SeqCst), 1);
        assert_eq!(rooms_seen.lock().len(), 1);
    }

    #[test]
    fn test_failed_generation_stays_in_game_started() {
        let mut h = harness(false, false);
        let rooms_seen = record(h.game.bus(), EventKind::RoomChanged);
        h.game.initialize(two_levels(), PlayerDetail::default()).unwrap();
        let start = h.game.player_position();

        h.game.tick().unwrap();
        h.game.tick().unwrap();

        assert_eq!(h.game.state(), GameState::GameStarted);
        assert!(rooms_seen.lock().is_empty());
        assert!(h.game.current_room().is_none());
        assert_eq!(h.game.player_position(), start);
        // Each tick retries
        assert_eq!(h.builds.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_failed_rebuild_keeps_current_room() {
        let mut h = harness(true, false);
        h.game.initialize(two_levels(), PlayerDetail::default()).unwrap();
        h.game.tick().unwrap();
        let room = h.game.current_room().unwrap();
        let pos = h.game.player_position();

        h.succeed.store(false, Ordering::SeqCst);
        let rooms_seen = record(h.game.bus(), EventKind::RoomChanged);
        let err = h.game.play_dungeon_level(1).unwrap_err();

        assert!(matches!(err, GameError::Generation(_)));
        assert!(!err.is_fatal());
        assert!(rooms_seen.lock().is_empty());
        assert_eq!(h.game.current_room().unwrap(), room);
        assert_eq!(h.game.player_position(), pos);
        assert_eq!(h.game.level_index(), 0);
    }

    #[test]
    fn test_level_index_out_of_range_is_fatal() {
        let mut h = harness(true, false);
        h.game.initialize(two_levels(), PlayerDetail::default()).unwrap();

        let err = h.game.play_dungeon_level(2).unwrap_err();
        assert!(matches!(
            err,
            GameError::Config(ConfigError::LevelIndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(err.is_fatal());
        assert_eq!(h.builds.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_play_second_level() {
        let mut h = harness(true, false);
        h.game.initialize(two_levels(), PlayerDetail::default()).unwrap();
        h.game.play_dungeon_level(1).unwrap();
        assert_eq!(h.game.current_dungeon_level().unwrap().name, "Level 2");
    }

    #[test]
    fn test_placeholder_states_are_idle() {
        let mut h = harness(true, false);
        h.game.initialize(two_levels(), PlayerDetail::default()).unwrap();

        for state in [
            GameState::EngagingEnemy,
            GameState::LevelCompleted,
            GameState::GameWon,
            GameState::GameLost,
            GameState::GamePaused,
            GameState::DungeonOverviewMap,
            GameState::RestartGame,
        ] {
            h.game.set_state(state);
            h.game.tick().unwrap();
            assert_eq!(h.game.state(), state);
        }
        assert_eq!(h.builds.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_restart_rebuilds_level() {
        let mut h = harness(true, false);
        let rooms_seen = record(h.game.bus(), EventKind::RoomChanged);
        h.game.initialize(two_levels(), PlayerDetail::default()).unwrap();
        h.game.tick().unwrap();

        h.game.request_restart();
        assert_eq!(h.game.state(), GameState::GameStarted);
        assert_eq!(h.game.previous_state(), GameState::PlayingLevel);

        h.game.tick().unwrap();
        assert_eq!(h.game.state(), GameState::PlayingLevel);
        assert_eq!(rooms_seen.lock().len(), 2);
        assert_eq!(h.game.previous_room().unwrap().id, RoomId(0));
    }

    #[test]
    fn test_room_changed_updates_registry() {
        let h = harness(true, false);
        let a = entrance();
        let b = Arc::new(Room::new(RoomId(5), Position::new(0, 0), Position::new(4, 4)));

        h.game.bus().publish(GameEvent::room_changed(Arc::clone(&a)));
        h.game.bus().publish(GameEvent::room_changed(Arc::clone(&b)));

        assert_eq!(h.game.current_room().unwrap(), b);
        assert_eq!(h.game.previous_room().unwrap(), a);
    }

    #[test]
    fn test_point_scored_uses_multiplier() {
        let h = harness(true, false);
        let bus = h.game.bus().clone();
        let changes = record(&bus, EventKind::ScoreChanged);

        bus.publish(GameEvent::multiplier_changed(true));
        bus.publish(GameEvent::multiplier_changed(true));
        assert_eq!(h.game.multiplier(), 3);

        bus.publish(GameEvent::point_scored(10));
        assert_eq!(h.game.score(), 30);
        assert_eq!(
            score_updates(&changes).last(),
            Some(&ScoreChangedArgs { score: 30, multiplier: 3 })
        );
    }

    #[test]
    fn test_multiplier_change_between_points() {
        let h = harness(true, false);
        let bus = h.game.bus().clone();

        bus.publish(GameEvent::point_scored(5));
        bus.publish(GameEvent::multiplier_changed(true));
        bus.publish(GameEvent::point_scored(5));

        assert_eq!(h.game.score(), 5 + 10);
    }

    #[test]
    fn test_multiplier_scenario_clamps_at_one() {
        let h = harness(true, false);
        let bus = h.game.bus().clone();
        let changes = record(&bus, EventKind::ScoreChanged);

        for _ in 0..5 {
            bus.publish(GameEvent::multiplier_changed(true));
        }
        assert_eq!(h.game.multiplier(), 6);

        for _ in 0..10 {
            bus.publish(GameEvent::multiplier_changed(false));
        }
        assert_eq!(h.game.multiplier(), 1);

        let updates = score_updates(&changes);
        assert_eq!(updates.len(), 15);
        assert!(updates
            .iter()
            .all(|u| (MIN_MULTIPLIER..=MAX_MULTIPLIER).contains(&u.multiplier)));
    }

    #[test]
    fn test_random_event_sequences_match_model() {
        let h = harness(true, false);
        let bus = h.game.bus().clone();
        let mut rng = StdRng::seed_from_u64(0x5C0E);
        let (mut score, mut multiplier) = (0u64, 1u32);

        for _ in 0..2_000 {
            if rng.gen_bool(0.4) {
                let point = rng.gen_range(0..1_000);
                bus.publish(GameEvent::point_scored(point));
                score += u64::from(point) * u64::from(multiplier);
            } else {
                let up = rng.gen_bool(0.55);
                bus.publish(GameEvent::multiplier_changed(up));
                multiplier = if up { multiplier + 1 } else { multiplier.saturating_sub(1) };
                multiplier = multiplier.clamp(MIN_MULTIPLIER, MAX_MULTIPLIER);
            }
            assert_eq!(h.game.score(), score);
            assert_eq!(h.game.multiplier(), multiplier);
        }
    }

    #[test]
    fn test_queued_events_drain_after_dispatch() {
        let mut h = harness(true, false);
        let order = Arc::new(Mutex::new(Vec::new()));
        for kind in [EventKind::RoomChanged, EventKind::PointScored] {
            let order = Arc::clone(&order);
            h.game.bus().subscribe(kind, move |e| order.lock().push(e.kind()));
        }
        h.game.initialize(two_levels(), PlayerDetail::default()).unwrap();

        h.game.bus().enqueue(GameEvent::point_scored(4));
        assert_eq!(h.game.score(), 0);

        h.game.tick().unwrap();
        assert_eq!(*order.lock(), vec![EventKind::RoomChanged, EventKind::PointScored]);
        assert_eq!(h.game.score(), 4);
        assert_eq!(h.game.bus().pending(), 0);
    }

    #[test]
    fn test_shutdown_removes_subscriptions() {
        let mut h = harness(true, false);
        let bus = h.game.bus().clone();
        assert_eq!(bus.subscriber_count(EventKind::PointScored), 1);

        h.game.shutdown();
        h.game.shutdown();
        assert_eq!(bus.subscriber_count(EventKind::RoomChanged), 0);
        assert_eq!(bus.subscriber_count(EventKind::PointScored), 0);
        assert_eq!(bus.subscriber_count(EventKind::MultiplierChanged), 0);

        bus.publish(GameEvent::point_scored(10));
        assert_eq!(h.game.score(), 0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let h = harness(true, false);
        let bus = h.game.bus().clone();
        drop(h);
        assert_eq!(bus.subscriber_count(EventKind::MultiplierChanged), 0);
    }
}
