//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use subspace_core::commands::PlayerCommand;
use subspace_core::components::Adversary;
use subspace_core::config::SimConfig;
use subspace_core::constants::EFFECTS_STREAM;
use subspace_core::enums::{ComponentKind, GameMode, GamePhase};
use subspace_core::events::SimEvent;
use subspace_core::state::{GameStateSnapshot, ScoreView};
use subspace_core::types::{CraftId, SimTime};

use crate::component::Component;
use crate::craft::Craft;
use crate::particles::ParticleSystem;
use crate::projectile::Projectile;
use crate::systems;
use crate::systems::controls::ControlState;
use crate::systems::snapshot::SnapshotContext;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    time: SimTime,
    phase: GamePhase,
    mode: GameMode,
    /// Gameplay randomness: spawns and adversary fire rolls.
    rng: ChaCha8Rng,
    /// Particle randomness, kept apart so effects never shift gameplay.
    effects_rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    controls: ControlState,
    despawn_buffer: Vec<Entity>,
    launched: Vec<Projectile>,
    events: Vec<SimEvent>,
    particles: ParticleSystem,
    player: Option<Entity>,
    next_craft_id: u32,
    camera: DVec2,
    builder_selected: ComponentKind,
    wave: u32,
    score: ScoreView,
}

impl SimulationEngine {
    /// Create a new simulation engine with the player and the opening wave
    /// already in place.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            config,
            time: SimTime::default(),
            phase: GamePhase::default(),
            mode: GameMode::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            effects_rng: ChaCha8Rng::seed_from_u64(config.seed ^ EFFECTS_STREAM),
            command_queue: VecDeque::new(),
            controls: ControlState::default(),
            despawn_buffer: Vec::new(),
            launched: Vec::new(),
            events: Vec::new(),
            particles: ParticleSystem::new(),
            player: None,
            next_craft_id: 0,
            camera: DVec2::ZERO,
            builder_selected: ComponentKind::Armor,
            wave: 0,
            score: ScoreView::default(),
        };
        engine.setup_world();
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    /// `dt` is clamped to `[0, max_dt]`; non-finite values count as zero.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.config.max_dt)
        } else {
            0.0
        };

        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(dt);
            self.time.advance(dt);
        }
        self.controls.clear();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotContext {
                time: self.time,
                phase: self.phase,
                mode: self.mode,
                camera: self.camera,
                particles: &self.particles,
                builder_selected: self.builder_selected,
                wave: self.wave,
                score: self.score,
            },
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn score(&self) -> ScoreView {
        self.score
    }

    /// The player craft, if it is still in the world.
    pub fn player(&self) -> Option<hecs::Ref<'_, Craft>> {
        self.world.get::<&Craft>(self.player?).ok()
    }

    pub fn adversary_count(&self) -> usize {
        self.world.query::<&Adversary>().iter().count()
    }

    /// Grid cell of the player craft under a world point.
    /// The screen-to-world step belongs to the caller.
    pub fn player_cell_at(&self, world_point: DVec2) -> Option<(i32, i32)> {
        let craft = self.player()?;
        craft
            .config()
            .grid()
            .world_to_cell(world_point, craft.position, craft.heading())
    }

    /// Spawn an adversary at a fixed position (for tests).
    #[cfg(test)]
    pub fn spawn_adversary_at(&mut self, position: DVec2) -> Entity {
        let id = self.allocate_craft_id();
        world_setup::spawn_adversary(&mut self.world, id, position, &self.config)
    }

    /// Remove every adversary (for tests).
    #[cfg(test)]
    pub fn clear_adversaries(&mut self) {
        let adversaries: Vec<Entity> = self
            .world
            .query::<&Adversary>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in adversaries {
            let _ = self.world.despawn(entity);
        }
    }

    /// Mutable access to the player craft (for tests).
    #[cfg(test)]
    pub fn player_mut(&mut self) -> Option<hecs::RefMut<'_, Craft>> {
        self.world.get::<&mut Craft>(self.player?).ok()
    }

    /// Mutable access to the ECS world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn allocate_craft_id(&mut self) -> CraftId {
        let id = CraftId(self.next_craft_id);
        self.next_craft_id += 1;
        id
    }

    /// Fresh world: player at the arena centre plus the opening wave.
    fn setup_world(&mut self) {
        self.world.clear();
        self.particles.clear();
        self.launched.clear();
        self.next_craft_id = 0;

        let center = world_setup::arena_center();
        let player_id = self.allocate_craft_id();
        self.player = Some(world_setup::spawn_player(
            &mut self.world,
            player_id,
            center,
            &self.config,
        ));
        self.camera = center;

        let count = world_setup::spawn_opening_wave(
            &mut self.world,
            &mut self.rng,
            center,
            &mut self.next_craft_id,
            &self.config,
        );
        self.wave = 1;
        self.events.push(SimEvent::WaveSpawned {
            wave: self.wave,
            count,
        });
    }

    fn reset(&mut self) {
        self.setup_world();
        self.time = SimTime::default();
        self.phase = GamePhase::Active;
        self.mode = GameMode::Play;
        self.controls.clear();
        self.score = ScoreView::default();
        log::info!("game reset");
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        if self.controls.latch(&command) {
            return;
        }
        match command {
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Active => self.phase = GamePhase::Paused,
                GamePhase::Paused => self.phase = GamePhase::Active,
                GamePhase::GameOver => log::debug!("pause ignored after game over"),
            },
            PlayerCommand::ToggleBuildMode => {
                self.mode = match self.mode {
                    GameMode::Play => GameMode::Build,
                    GameMode::Build => GameMode::Play,
                };
            }
            PlayerCommand::ResetGame => self.reset(),
            PlayerCommand::SelectComponentKind { kind } => {
                if !self.builder_active() {
                    return;
                }
                if kind.is_buildable() {
                    self.builder_selected = kind;
                } else {
                    log::debug!("{} is not in the builder palette", kind.name());
                }
            }
            PlayerCommand::BuilderPlace { grid_x, grid_y } => {
                if !self.builder_active() {
                    return;
                }
                let kind = self.builder_selected;
                let Some(mut craft) = self.player.and_then(|e| self.world.get::<&mut Craft>(e).ok())
                else {
                    return;
                };
                if let Err(e) = craft.add_component(Component::new(kind, grid_x, grid_y)) {
                    log::debug!("builder placement rejected: {e}");
                }
            }
            PlayerCommand::BuilderRemove { grid_x, grid_y } => {
                if !self.builder_active() {
                    return;
                }
                let Some(mut craft) = self.player.and_then(|e| self.world.get::<&mut Craft>(e).ok())
                else {
                    return;
                };
                if craft.remove_component_at(grid_x, grid_y).is_none() {
                    log::debug!("builder removal ignored: cell ({grid_x}, {grid_y}) is empty");
                }
            }
            PlayerCommand::MoveForward
            | PlayerCommand::RotateLeft
            | PlayerCommand::RotateRight
            | PlayerCommand::Fire => {}
        }
    }

    /// Builder commands apply only in build mode and never after game over.
    fn builder_active(&self) -> bool {
        if self.mode != GameMode::Build || self.phase == GamePhase::GameOver {
            log::debug!("builder command ignored outside build mode");
            return false;
        }
        true
    }

    /// Position of the player craft while it still has a core.
    fn live_player_position(&self) -> Option<DVec2> {
        self.player()
            .filter(|craft| !craft.is_destroyed())
            .map(|craft| craft.position)
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let play = self.mode == GameMode::Play;

        if play {
            // 1. Player controls (thrust, rotation, fire)
            let fired = systems::controls::run(
                &mut self.world,
                self.player,
                &self.controls,
                dt,
                &mut self.events,
                &mut self.launched,
            );
            self.score.projectiles_fired += fired;
            // 2. Player craft update
            systems::crafts::update_player(&mut self.world, self.player, dt);
            // 3. Adversary AI, integration and fire rolls
            let target = self.live_player_position();
            systems::crafts::update_adversaries(
                &mut self.world,
                target,
                dt,
                self.config.combat.adversary_fire_chance,
                &mut self.rng,
                &mut self.events,
                &mut self.launched,
            );
            // 4. Projectile flight
            systems::projectiles::spawn_launched(&mut self.world, &mut self.launched);
            systems::projectiles::run(&mut self.world, dt);
            // 5. Collision and damage
            systems::collision::run(&mut self.world, &mut self.events);
        }

        // 6. Camera follows the player
        if let Some(position) = self.player().map(|craft| craft.position) {
            self.camera = position;
        }

        if play {
            // 7. Cleanup, game over and wave refill
            let report =
                systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
            self.score.adversaries_destroyed += report.adversaries_destroyed;
            if report.player_destroyed {
                self.game_over();
            } else if report.adversaries_remaining == 0 {
                systems::wave_spawner::run(
                    &mut self.world,
                    &mut self.rng,
                    &self.config,
                    self.camera,
                    &mut self.wave,
                    &mut self.next_craft_id,
                    &mut self.events,
                );
            }
        }

        // 8. Effects
        systems::effects::run(&mut self.particles, &mut self.effects_rng, &self.events, dt);
    }

    fn game_over(&mut self) {
        let Some((id, position)) = self.player().map(|craft| (craft.id(), craft.position)) else {
            return;
        };
        self.phase = GamePhase::GameOver;
        self.events.push(SimEvent::CraftDestroyed {
            craft: id,
            position,
            player: true,
        });
        self.events.push(SimEvent::GameOver);
        log::info!(
            "game over at {:.1}s after {} adversaries destroyed",
            self.time.elapsed_secs,
            self.score.adversaries_destroyed
        );
    }
}
