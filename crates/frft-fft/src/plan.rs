use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, OnceLock};

use rustfft::{Fft, FftDirection, FftPlanner};

use crate::TransformKind;

/// Default number of plans the shared cache retains.
pub const PLAN_CACHE_CAPACITY: usize = 128;

/// Stable cache key for a planned 1D transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanKey {
    pub kind: TransformKind,
    pub len: usize,
}

impl PlanKey {
    #[must_use]
    pub const fn new(kind: TransformKind, len: usize) -> Self {
        Self { kind, len }
    }

    const fn direction(self) -> FftDirection {
        if self.kind.is_inverse() {
            FftDirection::Inverse
        } else {
            FftDirection::Forward
        }
    }
}

/// Sizing for a plan cache. A capacity of zero disables caching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanCacheConfig {
    pub capacity: usize,
}

impl Default for PlanCacheConfig {
    fn default() -> Self {
        Self {
            capacity: PLAN_CACHE_CAPACITY,
        }
    }
}

/// Bounded plan store; the oldest admitted plan is evicted first.
struct PlanCache {
    config: PlanCacheConfig,
    plans: HashMap<PlanKey, Arc<dyn Fft<f64>>>,
    admitted: VecDeque<PlanKey>,
}

impl PlanCache {
    fn new(config: PlanCacheConfig) -> Self {
        Self {
            config,
            plans: HashMap::new(),
            admitted: VecDeque::new(),
        }
    }

    fn len(&self) -> usize {
        self.plans.len()
    }

    fn get_or_plan(&mut self, key: PlanKey) -> (Arc<dyn Fft<f64>>, bool) {
        if let Some(plan) = self.plans.get(&key) {
            return (Arc::clone(plan), true);
        }
        let plan = build_plan(key);
        if self.config.capacity == 0 {
            return (plan, false);
        }
        while self.plans.len() >= self.config.capacity {
            let Some(oldest) = self.admitted.pop_front() else {
                break;
            };
            self.plans.remove(&oldest);
        }
        self.plans.insert(key, Arc::clone(&plan));
        self.admitted.push_back(key);
        (plan, false)
    }
}

static SHARED_PLAN_CACHE: OnceLock<Mutex<PlanCache>> = OnceLock::new();

fn shared_cache() -> &'static Mutex<PlanCache> {
    SHARED_PLAN_CACHE.get_or_init(|| Mutex::new(PlanCache::new(PlanCacheConfig::default())))
}

/// Fetch the plan for `key`, building and caching it on a miss.
///
/// The boolean is `true` when the plan came from the cache. The shared cache
/// holds at most [`PLAN_CACHE_CAPACITY`] plans. A poisoned cache degrades to
/// planning without caching.
#[must_use]
pub fn plan_fft(key: PlanKey) -> (Arc<dyn Fft<f64>>, bool) {
    let Ok(mut cache) = shared_cache().lock() else {
        return (build_plan(key), false);
    };
    cache.get_or_plan(key)
}

fn build_plan(key: PlanKey) -> Arc<dyn Fft<f64>> {
    FftPlanner::new().plan_fft(key.len, key.direction())
}

#[must_use]
pub fn shared_plan_cache_len() -> usize {
    shared_cache().lock().map_or(0, |cache| cache.len())
}
