/// Diagnostic run orchestration.
///
/// Runs the four steps in order:
/// 1. Probe capabilities (a failure ends the run early)
/// 2. Check the USGS site service is reachable (failure is reported, not fatal)
/// 3. Build the sample station table
/// 4. Filter against the priority parameters and print the summary

use crate::analysis::priority::{self, PrioritySummary};
use crate::config::ProbeConfig;
use crate::console::Console;
use crate::environment::{self, Capability, RuntimeInfo};
use crate::ingest::usgs::{self, Transport};
use crate::logging::{self, Stage};
use crate::stations;

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// A capability was unavailable; nothing after the probe ran.
    ProbeFailed,
    /// All steps ran. `api_reachable` records the reachability result.
    Completed {
        api_reachable: bool,
        summary: PrioritySummary,
    },
}

/// One diagnostic run over a set of capabilities and a transport.
pub struct Harness<'a> {
    config: ProbeConfig,
    capabilities: Vec<Box<dyn Capability>>,
    transport: &'a dyn Transport,
}

impl<'a> Harness<'a> {
    pub fn new(
        config: ProbeConfig,
        capabilities: Vec<Box<dyn Capability>>,
        transport: &'a dyn Transport,
    ) -> Self {
        Self {
            config,
            capabilities,
            transport,
        }
    }

    /// Production capabilities, timeout taken from `config`.
    pub fn with_defaults(config: ProbeConfig, transport: &'a dyn Transport) -> Self {
        let capabilities = environment::default_capabilities(config.api.timeout());
        Self::new(config, capabilities, transport)
    }

    pub fn run(&self, console: &mut Console) -> RunOutcome {
        console.line("🔍 Colorado Plateau Water Analysis - Debug Mode");
        console.line("=".repeat(50));

        RuntimeInfo::collect().print(console);

        if !environment::test_capabilities(&self.capabilities, console) {
            console.line("❌ Capability test failed!");
            return RunOutcome::ProbeFailed;
        }

        let api_reachable = usgs::check_reachability(self.transport, &self.config.api, console);
        if !api_reachable {
            logging::info(Stage::Api, None, "Site service unreachable, continuing with sample data");
        }

        console.blank();
        console.line("📊 Creating sample data...");
        let sites = stations::create_sample_data(console);
        logging::debug(Stage::Data, None, &format!("{} sample sites built", sites.len()));

        let summary = priority::report(&sites, console);

        console.blank();
        console.line("🎉 Debug test completed successfully!");
        console.line("🔄 You can now copy working code back to the notebook");

        RunOutcome::Completed {
            api_reachable,
            summary,
        }
    }
}
