use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::api::HttpQuestApi;
use crate::scenario::{ApiCtx, ApiScenario, CombinedScenario};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    /// `api`, or the browser label for browser runs.
    pub target: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

impl ScenarioResult {
    pub fn from_runs(
        scenario_name: impl Into<String>,
        target: impl Into<String>,
        runs: Vec<(Duration, Result<(), String>)>,
    ) -> Self {
        let iterations_run = runs.len();
        let mut failures = Vec::new();
        let mut performance_data = Vec::with_capacity(iterations_run);
        for (i, (duration, outcome)) in runs.into_iter().enumerate() {
            performance_data.push(duration);
            if let Err(err) = outcome {
                failures.push(format!("Iteration {}: {err}", i + 1));
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(u32::MAX)
        };

        Self {
            scenario_name: scenario_name.into(),
            target: target.into(),
            passed: iterations_run > 0 && failures.is_empty(),
            iterations_run,
            successful_iterations: iterations_run - failures.len(),
            failures,
            average_duration,
            performance_data,
        }
    }
}

/// Runs API scenarios against one backend.
pub struct ApiTester {
    api: HttpQuestApi,
    verbose: bool,
}

impl ApiTester {
    pub const fn new(api: HttpQuestApi, verbose: bool) -> Self {
        Self { api, verbose }
    }

    pub async fn run_scenario(
        &self,
        scenario: &dyn CombinedScenario,
        iterations: usize,
    ) -> ScenarioResult {
        let iterations = iterations.max(1);
        if self.verbose {
            println!(
                "🧪 Testing scenario: {} against {}",
                scenario.name().bright_white(),
                self.api.endpoints().base()
            );
        }

        let ctx = ApiCtx {
            api: &self.api,
            verbose: self.verbose,
        };
        let mut runs = Vec::with_capacity(iterations);
        for i in 0..iterations {
            let start = Instant::now();
            let outcome = scenario.run_api(&ctx).await.map_err(|e| format!("{e:#}"));
            let elapsed = start.elapsed();
            if let Err(err) = &outcome {
                log::debug!("{} iteration {} failed: {err}", scenario.name(), i + 1);
                if self.verbose {
                    println!(
                        "  ❌ Iteration {}/{} failed: {}",
                        i + 1,
                        iterations,
                        err.as_str().red()
                    );
                }
            }
            runs.push((elapsed, outcome));
        }

        ScenarioResult::from_runs(scenario.name(), "api", runs)
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis: Vec<u128> = durations.iter().map(Duration::as_millis).collect();
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = Vec::<u64>::deserialize(deserializer)?;
        Ok(millis.into_iter().map(Duration::from_millis).collect())
    }
}
