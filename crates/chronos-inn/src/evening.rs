//! Loading an evening's patron traffic into a scheduler.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use chronos_sched::{BoundCommand, Scheduler, TICKS_PER_HOUR, Tick};

use crate::commands::{CloseInn, PatronEnter};
use crate::error::{InnError, InnResult};
use crate::inn::Inn;
use crate::roster::PatronRoster;

/// How an evening at the inn is laid out.
#[derive(Debug, Clone)]
pub struct EveningConfig {
    /// RNG seed for arrival times and stays.
    pub seed: u64,
    /// How many patrons are already inside when the evening starts.
    pub starters: usize,
    /// Earliest and latest arrival, in ticks from the start of the evening.
    pub arrival_window: (Tick, Tick),
    /// Shortest and longest stay.
    pub stay: (Tick, Tick),
    /// Ticks until closing time.
    pub open_for: Tick,
}

impl Default for EveningConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starters: 2,
            arrival_window: (3 * 60, 60 * 60),
            stay: (10 * 60, 30 * 60),
            open_for: TICKS_PER_HOUR,
        }
    }
}

impl EveningConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how many patrons are present from the start.
    pub fn with_starters(mut self, starters: usize) -> Self {
        self.starters = starters;
        self
    }

    /// Set the arrival window. Bounds are swapped if given backwards.
    pub fn with_arrival_window(mut self, earliest: Tick, latest: Tick) -> Self {
        self.arrival_window = (earliest.min(latest), earliest.max(latest));
        self
    }

    /// Set the range of stay lengths. Bounds are swapped if given backwards.
    pub fn with_stay(mut self, shortest: Tick, longest: Tick) -> Self {
        self.stay = (shortest.min(longest), shortest.max(longest));
        self
    }

    /// Set closing time as whole hours after the evening starts. Saturates
    /// rather than wrapping for absurd hour counts.
    pub fn with_open_hours(mut self, hours: u64) -> Self {
        self.open_for = hours.saturating_mul(TICKS_PER_HOUR);
        self
    }
}

/// Schedule every patron's arrival and the inn's closing.
///
/// Each patron gets a random arrival time and stay length drawn from an RNG
/// seeded with `config.seed`; up to `config.starters` randomly chosen
/// patrons arrive immediately. Departures are scheduled by the arrivals
/// themselves. Returns the number of arrivals scheduled.
pub fn load_evening(
    roster: &PatronRoster,
    scheduler: &mut Scheduler<Inn>,
    config: &EveningConfig,
) -> InnResult<usize> {
    if roster.count() == 0 {
        return Err(InnError::EmptyRoster);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);

    let (earliest, latest) = config.arrival_window;
    let (shortest, longest) = config.stay;
    let mut arrivals: Vec<PatronEnter> = roster
        .list()
        .iter()
        .map(|patron| {
            let delay = rng.random_range(earliest..=latest);
            let stay = rng.random_range(shortest..=longest);
            PatronEnter::new(patron.name.clone(), delay, stay).with_label(patron.label())
        })
        .collect();

    for _ in 0..config.starters.min(arrivals.len()) {
        let pick = rng.random_range(0..arrivals.len());
        arrivals[pick] = arrivals[pick].clone().with_delay(0);
    }

    let count = arrivals.len();
    for arrival in arrivals {
        scheduler.schedule(BoundCommand::parameterless(Box::new(arrival))?);
    }
    scheduler.schedule(BoundCommand::parameterless(Box::new(CloseInn::new(config.open_for)))?);

    info!(patrons = count, closes_in = config.open_for, seed = config.seed, "evening loaded");
    Ok(count)
}
