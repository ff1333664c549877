//! Active network selection
//!
//! Process-wide record of which network this node runs. `select_network`
//! runs single-threaded during startup; afterwards everything is read-only
//! except through the unit-test mutation handle, which test harnesses must
//! serialize themselves.

use crate::params::{ChainParams, Network};
use std::sync::{Arc, RwLock, RwLockWriteGuard};

static ACTIVE: RwLock<Option<Arc<ChainParams>>> = RwLock::new(None);

/// Resolve `network` and install its parameters as the active profile.
///
/// Re-selection replaces the previous profile in full; readers observe
/// either the old or the new parameters, never a mix.
pub fn select_network(network: Network) -> Arc<ChainParams> {
    let params = Arc::new(ChainParams::for_network(network));
    let mut active = ACTIVE.write().expect("params lock poisoned");
    *active = Some(Arc::clone(&params));
    params
}

/// The active chain parameters.
///
/// Panics if called before [`select_network`]; querying an unselected
/// registry is a programming error, not a recoverable condition.
pub fn active_params() -> Arc<ChainParams> {
    ACTIVE
        .read()
        .expect("params lock poisoned")
        .clone()
        .expect("active_params() called before select_network()")
}

/// Mutation handle over the active unit-test parameters.
///
/// Panics unless the active network is [`Network::UnitTest`], which keeps
/// the test-only setters unreachable in production configurations. Drop
/// the handle before calling [`active_params`] again.
pub fn modifiable_params() -> ModifiableParams {
    {
        let active = ACTIVE.read().expect("params lock poisoned");
        match active.as_ref() {
            Some(params) => assert!(
                params.network == Network::UnitTest,
                "modifiable_params() requires the unittest network (active: {})",
                params.network_name
            ),
            None => panic!("modifiable_params() called before select_network()"),
        }
    }
    let guard = ACTIVE.write().expect("params lock poisoned");
    ModifiableParams { guard }
}

/// Published setters for values unit tests need to change, e.g. disabling
/// proof-of-work checks for deterministic block production
pub struct ModifiableParams {
    guard: RwLockWriteGuard<'static, Option<Arc<ChainParams>>>,
}

impl ModifiableParams {
    fn params_mut(&mut self) -> &mut ChainParams {
        let active = self.guard.as_mut().expect("no active params");
        Arc::make_mut(active)
    }

    pub fn set_subsidy_halving_interval(&mut self, interval: u64) {
        self.params_mut().subsidy_halving_interval = interval;
    }

    pub fn set_default_consistency_checks(&mut self, enabled: bool) {
        self.params_mut().default_consistency_checks = enabled;
    }

    pub fn set_allow_min_difficulty_blocks(&mut self, allowed: bool) {
        self.params_mut().allow_min_difficulty_blocks = allowed;
    }

    pub fn set_skip_proof_of_work_check(&mut self, skip: bool) {
        self.params_mut().skip_proof_of_work_check = skip;
    }
}
