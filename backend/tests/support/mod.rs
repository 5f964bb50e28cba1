#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use spacex_dash::io::DatasetLoader;
use spacex_dash::models::{Dataset, FlightNumber, LaunchRecord, Outcome};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Ten launches over four sites, payloads 0..=9600 kg.
///
/// First success per site, in dataset order: CCAFS LC-40 (flight 3),
/// KSC LC-39A (6), VAFB SLC-4E (9), CCAFS SLC-40 (10).
pub const LAUNCH_TABLE_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,525,F9 v1.0  B0004,v1.0
3,CCAFS LC-40,1,677,F9 v1.0  B0005,v1.0
4,VAFB SLC-4E,0,500,F9 v1.1  B1003,v1.1
5,CCAFS LC-40,1,3170,F9 v1.1,v1.1
6,KSC LC-39A,1,2490,F9 FT B1031.1,FT
7,KSC LC-39A,1,5300,F9 FT B1030,FT
8,KSC LC-39A,0,6070,F9 FT B1021.2,FT
9,VAFB SLC-4E,1,9600,F9 FT B1036.1,FT
10,CCAFS SLC-40,1,3669,F9 FT B1034,FT
";

pub fn launch_table() -> Dataset {
    DatasetLoader::load_from_str(LAUNCH_TABLE_CSV).expect("fixture launch table must load")
}

pub fn launch(flight: u32, site: &str, payload_kg: f64, success: bool) -> LaunchRecord {
    LaunchRecord {
        site: site.to_string(),
        payload_mass: qtty::Kilograms::new(payload_kg),
        outcome: if success {
            Outcome::Success
        } else {
            Outcome::Failure
        },
        booster_version_category: "FT".to_string(),
        booster_version: format!("F9 FT B{}", 1000 + flight),
        flight_number: FlightNumber::new(flight),
    }
}

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
