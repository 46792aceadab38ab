//! Capacity sweeps: the same arrivals simulated under several PLB counts.
//!
//! Runs are independent, so with the `parallel` feature each one goes to
//! Rayon's thread pool.  Output order always follows `plb_counts`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use stand_core::SimConfig;
use stand_fleet::ArrivalRecord;

use crate::{RunTables, SimResult, simulate};

/// Simulate `records` once per entry of `plb_counts`, everything else taken
/// from `base`.  Stops at the first failing run.
pub fn sweep_plb_counts(
    records:    &[ArrivalRecord],
    base:       &SimConfig,
    plb_counts: &[u32],
) -> SimResult<Vec<(u32, RunTables)>> {
    let run_one = |&plb_stands: &u32| -> SimResult<(u32, RunTables)> {
        let config = SimConfig { plb_stands, ..base.clone() };
        simulate(config, records.to_vec()).map(|tables| (plb_stands, tables))
    };

    #[cfg(feature = "parallel")]
    {
        plb_counts.par_iter().map(run_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        plb_counts.iter().map(run_one).collect()
    }
}
