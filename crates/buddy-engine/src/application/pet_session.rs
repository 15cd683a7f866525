//! Pet Session (Use Case)
//!
//! Owns the single pet of a user session together with its message log.
//! Every operation mutates in memory first, notifies subscribers, then
//! saves through the repository. A failed save is returned to the caller
//! but never rolls the in-memory state back; `persist` retries it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;

use buddy::decay::{self, DecayRules, DecayTransition};
use buddy::{
    interaction, responses, Clock, DomainError, MessageEntry, MessageLog, MessageTone, Pet,
    PetEmotion, PetRepository, PetUpdate, UpdateOrigin, UserEmotion,
};

use crate::config::EngineConfig;

/// Session state for one pet
pub struct PetSession<R: PetRepository> {
    pet: Pet,
    log: MessageLog,
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
    rng: StdRng,
    decay_rules: DecayRules,
    motivation_chance: f64,
    updates: watch::Sender<Pet>,
}

impl<R: PetRepository> PetSession<R> {
    /// Load the owner's pet, or create and store a fresh one
    pub async fn open(
        repo: Arc<R>,
        clock: Arc<dyn Clock>,
        config: &EngineConfig,
    ) -> Result<Self, DomainError> {
        let pet = match repo.find_by_owner(&config.owner_id).await? {
            Some(stored) => {
                let pet = stored.clone().normalized();
                if pet != stored {
                    tracing::warn!(
                        "⚠️  Stored pet for {} was out of range and has been repaired",
                        pet.owner_id
                    );
                }
                tracing::info!(
                    "📂 Loaded {} the {} (level {}) for {}",
                    pet.name,
                    pet.species,
                    pet.level,
                    pet.owner_id
                );
                pet
            }
            None => {
                let pet = Pet::new(
                    config.owner_id.clone(),
                    config.pet_name.clone(),
                    config.species,
                    clock.now(),
                )?;
                tracing::info!(
                    "🐣 Created {} the {} for {}",
                    pet.name,
                    pet.species,
                    pet.owner_id
                );
                if let Err(e) = repo.save(&pet).await {
                    tracing::warn!("⚠️  Initial save failed for {}: {}", pet.owner_id, e);
                }
                pet
            }
        };

        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let (updates, _) = watch::channel(pet.clone());

        Ok(Self {
            pet,
            log: MessageLog::new(config.message_log_capacity),
            repo,
            clock,
            rng,
            decay_rules: DecayRules::default(),
            motivation_chance: crate::config::probability(config.motivation_chance),
            updates,
        })
    }

    /// Override the decay thresholds
    pub fn with_decay_rules(mut self, rules: DecayRules) -> Self {
        self.decay_rules = rules;
        self
    }

    /// Current pet snapshot
    pub fn snapshot(&self) -> &Pet {
        &self.pet
    }

    pub fn messages(&self) -> &MessageLog {
        &self.log
    }

    /// Receive a fresh snapshot after every mutation
    pub fn subscribe(&self) -> watch::Receiver<Pet> {
        self.updates.subscribe()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Merge a partial update and commit it
    pub async fn apply_update(
        &mut self,
        update: PetUpdate,
        origin: UpdateOrigin,
    ) -> Result<(), DomainError> {
        let now = self.clock.now();
        self.pet.apply(update, now, origin);
        self.commit().await
    }

    pub async fn feed(&mut self) -> Result<(), DomainError> {
        let now = self.clock.now();
        self.pet
            .apply(interaction::feed(&self.pet), now, UpdateOrigin::Interaction);
        self.say(responses::FEED_LINES, MessageTone::Happy, now);
        tracing::debug!("🍎 Fed {} (hunger {})", self.pet.name, self.pet.hunger);
        self.commit().await
    }

    pub async fn play(&mut self) -> Result<(), DomainError> {
        let now = self.clock.now();
        let level_before = self.pet.level;
        self.pet
            .apply(interaction::play(&self.pet), now, UpdateOrigin::Interaction);
        self.say(responses::PLAY_LINES, MessageTone::Excited, now);

        if self.pet.level > level_before {
            tracing::info!(
                "⭐ {} reached level {} ({} XP)",
                self.pet.name,
                self.pet.level,
                self.pet.experience
            );
        }
        self.commit().await
    }

    pub async fn rest(&mut self) -> Result<(), DomainError> {
        let now = self.clock.now();
        self.pet
            .apply(interaction::rest(&self.pet), now, UpdateOrigin::Interaction);
        self.say(responses::REST_LINES, MessageTone::Content, now);
        tracing::debug!("😴 {} rested (energy {})", self.pet.name, self.pet.energy);
        self.commit().await
    }

    /// Set the emotion directly, bypassing decay inference
    pub async fn set_emotion(
        &mut self,
        emotion: PetEmotion,
        reason: Option<&str>,
    ) -> Result<(), DomainError> {
        let now = self.clock.now();
        self.set_emotion_at(emotion, reason, now);
        self.commit().await
    }

    /// React to an externally detected user emotion. Returns the reply line.
    pub async fn respond_to_user_emotion(
        &mut self,
        emotion: UserEmotion,
    ) -> Result<&'static str, DomainError> {
        let now = self.clock.now();
        let line = responses::pick(&mut self.rng, responses::user_emotion_lines(emotion));
        self.log.push(MessageEntry::new(line, emotion.into(), now));
        self.set_emotion_at(
            emotion.pet_response(),
            Some(&format!("user feels {}", emotion)),
            now,
        );
        self.commit().await?;
        Ok(line)
    }

    /// Add a badge. Returns `false` when the pet already had it.
    pub async fn award_achievement(&mut self, name: &str) -> Result<bool, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Achievement name must not be empty"));
        }
        if self.pet.has_achievement(name) {
            return Ok(false);
        }

        let update = PetUpdate {
            achievements: vec![name.to_string()],
            ..Default::default()
        };
        self.pet.apply(update, self.clock.now(), UpdateOrigin::System);
        tracing::info!("🏆 {} earned {}", self.pet.name, name);
        self.commit().await?;
        Ok(true)
    }

    /// Run one passive decay check as of `now`
    pub async fn check_decay(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<Option<DecayTransition>, DomainError> {
        let Some(transition) = decay::evaluate(&self.pet, now, &self.decay_rules) else {
            return Ok(None);
        };

        tracing::info!(
            "⏳ {} became {} after {:.1}h without interaction",
            self.pet.name,
            transition.emotion,
            transition.hours_idle
        );
        self.set_emotion_at(transition.emotion, Some("passive decay"), now);
        self.say(
            responses::decay_lines(transition.emotion),
            transition.emotion.into(),
            now,
        );
        self.commit().await?;
        Ok(Some(transition))
    }

    /// Maybe append a motivational line. Does not touch the pet.
    pub fn motivate(&mut self) -> Option<&MessageEntry> {
        if !self.rng.random_bool(self.motivation_chance) {
            return None;
        }
        let now = self.clock.now();
        self.say(responses::MOTIVATION_LINES, MessageTone::Supportive, now);
        self.log.latest()
    }

    /// Save the current snapshot
    pub async fn persist(&self) -> Result<(), DomainError> {
        match self.repo.save(&self.pet).await {
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::warn!(
                    "⚠️  Failed to save {} for {} (retryable: {}): {}",
                    self.pet.name,
                    self.pet.owner_id,
                    e.is_retryable(),
                    e
                );
                Err(e)
            }
        }
    }

    fn set_emotion_at(&mut self, emotion: PetEmotion, reason: Option<&str>, now: DateTime<Utc>) {
        tracing::debug!(
            "🎭 {} feels {} ({})",
            self.pet.name,
            emotion,
            reason.unwrap_or("no reason")
        );
        self.pet.apply(
            interaction::set_emotion(emotion),
            now,
            UpdateOrigin::Interaction,
        );
    }

    fn say(&mut self, pool: &'static [&'static str], tone: MessageTone, now: DateTime<Utc>) {
        let line = responses::pick(&mut self.rng, pool);
        self.log.push(MessageEntry::new(line, tone, now));
    }

    async fn commit(&mut self) -> Result<(), DomainError> {
        self.updates.send_replace(self.pet.clone());
        self.persist().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;
    use buddy::{ManualClock, Species};
    use chrono::Duration;

    use crate::adapters::{InMemoryPetRepository, JsonFilePetRepository};

    /// Repository whose saves can be switched to fail
    #[derive(Default)]
    struct FlakyRepository {
        inner: InMemoryPetRepository,
        failing: AtomicBool,
        saves: AtomicUsize,
    }

    #[async_trait]
    impl PetRepository for FlakyRepository {
        async fn find_by_owner(&self, owner_id: &str) -> Result<Option<Pet>, DomainError> {
            self.inner.find_by_owner(owner_id).await
        }

        async fn save(&self, pet: &Pet) -> Result<Pet, DomainError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(DomainError::repository("storage unavailable"));
            }
            self.inner.save(pet).await
        }
    }

    fn start() -> DateTime<Utc> {
        "2026-03-01T09:00:00Z".parse().unwrap()
    }

    fn config() -> EngineConfig {
        EngineConfig::default()
            .with_owner("student-1")
            .with_rng_seed(7)
    }

    async fn session_with<R: PetRepository>(
        repo: Arc<R>,
    ) -> (PetSession<R>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(start()));
        let session = PetSession::open(repo, clock.clone(), &config())
            .await
            .unwrap();
        (session, clock)
    }

    async fn session() -> (PetSession<InMemoryPetRepository>, Arc<ManualClock>) {
        session_with(Arc::new(InMemoryPetRepository::new())).await
    }

    #[tokio::test]
    async fn test_open_creates_and_stores_pet() {
        let repo = Arc::new(InMemoryPetRepository::new());
        let (session, _) = session_with(repo.clone()).await;

        assert_eq!(session.snapshot().name, "Buddy");
        assert_eq!(session.snapshot().owner_id, "student-1");
        assert!(repo.find_by_owner("student-1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_open_loads_existing_pet() {
        let mut stored = Pet::new("student-1", "Ember", Species::Dragon, start()).unwrap();
        stored.level = 3;
        let repo = Arc::new(InMemoryPetRepository::with_pet(stored.clone()));

        let (session, _) = session_with(repo).await;
        assert_eq!(session.snapshot(), &stored);
    }

    #[tokio::test]
    async fn test_open_repairs_out_of_range_snapshot() {
        let mut stored = Pet::new("student-1", "Buddy", Species::Cat, start()).unwrap();
        stored.happiness = 500;
        stored.hunger = -20;
        stored.level = 0;
        let repo = Arc::new(InMemoryPetRepository::with_pet(stored));

        let (mut session, _) = session_with(repo).await;
        let pet = session.snapshot();
        assert_eq!(pet.happiness, 100);
        assert_eq!(pet.hunger, 0);
        assert_eq!(pet.level, 1);

        session.feed().await.unwrap();
        assert_eq!(session.snapshot().hunger, 0);
        assert_eq!(session.snapshot().happiness, 100);
    }

    #[tokio::test]
    async fn test_open_repairs_snapshot_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Arc::new(JsonFilePetRepository::new(dir.path()));
        let mut stored = Pet::new("student-1", "Buddy", Species::Dog, start()).unwrap();
        stored.energy = 140;
        stored.level = 0;
        stored.experience = 250;
        repo.save(&stored).await.unwrap();

        let (session, _) = session_with(repo).await;
        assert_eq!(session.snapshot().energy, 100);
        assert_eq!(session.snapshot().level, 2);
    }

    #[tokio::test]
    async fn test_feed_updates_stats_and_logs_reply() {
        let (mut session, clock) = session().await;
        clock.advance(Duration::minutes(10));
        session.feed().await.unwrap();

        let pet = session.snapshot();
        assert_eq!(pet.hunger, 10);
        assert_eq!(pet.happiness, 95);
        assert_eq!(pet.last_interaction, start() + Duration::minutes(10));

        let message = session.messages().latest().unwrap();
        assert_eq!(message.tone, MessageTone::Happy);
        assert!(responses::FEED_LINES.contains(&message.text.as_str()));
    }

    #[tokio::test]
    async fn test_play_and_rest() {
        let (mut session, _) = session().await;
        session.play().await.unwrap();
        assert_eq!(session.snapshot().energy, 60);
        assert_eq!(session.snapshot().experience, 10);
        assert_eq!(session.messages().latest().unwrap().tone, MessageTone::Excited);

        session.rest().await.unwrap();
        assert_eq!(session.snapshot().energy, 100);
        assert_eq!(session.messages().latest().unwrap().tone, MessageTone::Content);
    }

    #[tokio::test]
    async fn test_play_levels_up_across_threshold() {
        let mut stored = Pet::new("student-1", "Buddy", Species::Cat, start()).unwrap();
        stored.experience = 195;
        let (mut session, _) =
            session_with(Arc::new(InMemoryPetRepository::with_pet(stored))).await;

        session.play().await.unwrap();
        assert_eq!(session.snapshot().experience, 205);
        assert_eq!(session.snapshot().level, 2);
    }

    #[tokio::test]
    async fn test_respond_to_user_emotion_maps_regardless_of_prior_state() {
        let (mut session, _) = session().await;

        for prior in PetEmotion::ALL {
            session.set_emotion(prior, None).await.unwrap();
            let line = session
                .respond_to_user_emotion(UserEmotion::Sad)
                .await
                .unwrap();
            assert_eq!(session.snapshot().current_emotion, PetEmotion::Content);
            assert!(responses::user_emotion_lines(UserEmotion::Sad).contains(&line));
            assert_eq!(session.messages().latest().unwrap().tone, MessageTone::Sad);

            session.set_emotion(prior, None).await.unwrap();
            session
                .respond_to_user_emotion(UserEmotion::Happy)
                .await
                .unwrap();
            assert_eq!(session.snapshot().current_emotion, PetEmotion::Happy);
        }
    }

    #[tokio::test]
    async fn test_seeded_sessions_pick_the_same_lines() {
        let (mut a, _) = session().await;
        let (mut b, _) = session().await;

        for emotion in UserEmotion::ALL {
            let left = a.respond_to_user_emotion(emotion).await.unwrap();
            let right = b.respond_to_user_emotion(emotion).await.unwrap();
            assert_eq!(left, right);
        }
    }

    #[tokio::test]
    async fn test_message_log_keeps_last_five() {
        let (mut session, _) = session().await;
        for _ in 0..7 {
            session.rest().await.unwrap();
        }
        assert_eq!(session.messages().len(), 5);
    }

    #[tokio::test]
    async fn test_decay_hungry_after_idle_hours() {
        let mut stored = Pet::new("student-1", "Buddy", Species::Cat, start()).unwrap();
        stored.hunger = 70;
        let (mut session, _) =
            session_with(Arc::new(InMemoryPetRepository::with_pet(stored))).await;

        let now = start() + Duration::hours(3);
        let transition = session.check_decay(now).await.unwrap().unwrap();

        assert_eq!(transition.emotion, PetEmotion::Hungry);
        assert_eq!(session.snapshot().current_emotion, PetEmotion::Hungry);
        assert_eq!(session.snapshot().last_interaction, now);
        let message = session.messages().latest().unwrap();
        assert_eq!(message.tone, MessageTone::Hungry);
        assert_eq!(message.text, "I'm getting a bit hungry... 🥺");
    }

    #[tokio::test]
    async fn test_decay_tired_and_no_change_when_fine() {
        let mut stored = Pet::new("student-1", "Buddy", Species::Cat, start()).unwrap();
        stored.energy = 20;
        let (mut session, _) =
            session_with(Arc::new(InMemoryPetRepository::with_pet(stored))).await;

        assert!(session
            .check_decay(start() + Duration::hours(3))
            .await
            .unwrap()
            .is_none());
        assert_eq!(session.snapshot().last_interaction, start());
        assert!(session.messages().is_empty());

        let transition = session
            .check_decay(start() + Duration::hours(5))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(transition.emotion, PetEmotion::Tired);
        assert_eq!(session.snapshot().current_emotion, PetEmotion::Tired);
    }

    #[tokio::test]
    async fn test_stamp_is_monotonic_when_clock_goes_back() {
        let (mut session, clock) = session().await;
        clock.advance(Duration::hours(1));
        session.feed().await.unwrap();
        let stamp = session.snapshot().last_interaction;

        clock.set(start() - Duration::days(1));
        session.play().await.unwrap();
        session.rest().await.unwrap();
        session.set_emotion(PetEmotion::Sad, Some("test")).await.unwrap();
        session
            .respond_to_user_emotion(UserEmotion::Focused)
            .await
            .unwrap();

        assert_eq!(session.snapshot().last_interaction, stamp);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_in_memory_state() {
        let repo = Arc::new(FlakyRepository::default());
        let (mut session, _) = session_with(repo.clone()).await;

        repo.failing.store(true, Ordering::SeqCst);
        let err = session.feed().await.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(session.snapshot().hunger, 10);

        let stored = repo.inner.find_by_owner("student-1").await.unwrap().unwrap();
        assert_eq!(stored.hunger, 40);

        repo.failing.store(false, Ordering::SeqCst);
        session.persist().await.unwrap();
        let stored = repo.inner.find_by_owner("student-1").await.unwrap().unwrap();
        assert_eq!(stored.hunger, 10);
    }

    #[tokio::test]
    async fn test_subscribers_see_every_mutation() {
        let (mut session, _) = session().await;
        let mut rx = session.subscribe();

        session.rest().await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().energy, 100);

        session.set_emotion(PetEmotion::Excited, None).await.unwrap();
        assert_eq!(rx.borrow_and_update().current_emotion, PetEmotion::Excited);
    }

    #[tokio::test]
    async fn test_award_achievement_is_idempotent_and_not_an_interaction() {
        let repo = Arc::new(FlakyRepository::default());
        let (mut session, clock) = session_with(repo.clone()).await;
        clock.advance(Duration::hours(2));

        assert!(session.award_achievement("first_task").await.unwrap());
        assert!(!session.award_achievement("first_task").await.unwrap());
        assert!(session.award_achievement("  ").await.is_err());

        assert!(session.snapshot().has_achievement("first_task"));
        assert_eq!(session.snapshot().achievements.len(), 1);
        assert_eq!(session.snapshot().last_interaction, start());
        // initial save + one award
        assert_eq!(repo.saves.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_motivate_respects_chance() {
        let repo = Arc::new(InMemoryPetRepository::new());
        let clock = Arc::new(ManualClock::new(start()));

        let never = config().with_motivation_chance(0.0);
        let mut quiet = PetSession::open(repo.clone(), clock.clone(), &never)
            .await
            .unwrap();
        assert!(quiet.motivate().is_none());

        let always = config().with_motivation_chance(1.0);
        let mut chatty = PetSession::open(repo, clock, &always).await.unwrap();
        let before = chatty.snapshot().clone();
        let entry = chatty.motivate().unwrap();
        assert_eq!(entry.tone, MessageTone::Supportive);
        assert!(responses::MOTIVATION_LINES.contains(&entry.text.as_str()));
        assert_eq!(chatty.snapshot(), &before);
    }

    #[tokio::test]
    async fn test_non_finite_motivation_chance_stays_quiet() {
        let repo = Arc::new(InMemoryPetRepository::new());
        let clock = Arc::new(ManualClock::new(start()));
        let config = EngineConfig {
            motivation_chance: f64::NAN,
            ..config()
        };

        let mut session = PetSession::open(repo, clock, &config).await.unwrap();
        for _ in 0..10 {
            assert!(session.motivate().is_none());
        }
    }

    #[tokio::test]
    async fn test_apply_update_clamps() {
        let (mut session, _) = session().await;
        session
            .apply_update(
                PetUpdate {
                    happiness: Some(500),
                    hunger: Some(-3),
                    ..Default::default()
                },
                UpdateOrigin::System,
            )
            .await
            .unwrap();

        assert_eq!(session.snapshot().happiness, 100);
        assert_eq!(session.snapshot().hunger, 0);
    }
}
