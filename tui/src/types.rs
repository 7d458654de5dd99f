use splitsim::config::SimulatorConfig;
use splitsim::report::{self, SummaryReport};
use splitsim::simulation::ExperimentSimulator;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Index-addressable parameter fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    VisitorsA,
    VisitorsB,
    RateA,
    RateB,
    Seed,
}

pub const PARAMS: [Param; 5] = [
    Param::VisitorsA,
    Param::VisitorsB,
    Param::RateA,
    Param::RateB,
    Param::Seed,
];

impl Param {
    pub fn label(&self) -> &'static str {
        match self {
            Param::VisitorsA => "Visitors in Variant A",
            Param::VisitorsB => "Visitors in Variant B",
            Param::RateA => "True Conversion Rate of Variant A",
            Param::RateB => "True Conversion Rate of Variant B",
            Param::Seed => "Random Seed",
        }
    }
}

/// One editable numeric field
#[derive(Debug, Clone)]
pub struct InputField {
    pub param: Param,
    pub buffer: String,
}

impl InputField {
    fn new(param: Param, initial: String) -> Self {
        Self {
            param,
            buffer: initial,
        }
    }

    pub fn push(&mut self, c: char) {
        let decimal = matches!(self.param, Param::RateA | Param::RateB);
        if c.is_ascii_digit() || (decimal && c == '.' && !self.buffer.contains('.')) {
            self.buffer.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.buffer.pop();
    }
}

/// Full interactive state: editable parameters plus the last run's report
pub struct App {
    pub fields: Vec<InputField>,
    pub focus: usize,
    pub report: Option<SummaryReport>,
    pub error: Option<String>,
    pub runs_triggered: u64,
}

impl App {
    pub fn new() -> Self {
        let config = SimulatorConfig::from_env();
        let fields = vec![
            InputField::new(Param::VisitorsA, config.sample_size_a.to_string()),
            InputField::new(Param::VisitorsB, config.sample_size_b.to_string()),
            InputField::new(Param::RateA, config.true_rate_a.to_string()),
            InputField::new(Param::RateB, config.true_rate_b.to_string()),
            InputField::new(Param::Seed, config.seed.to_string()),
        ];
        Self {
            fields,
            focus: 0,
            report: None,
            error: None,
            runs_triggered: 0,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self
            .focus
            .checked_sub(1)
            .unwrap_or(self.fields.len() - 1);
    }

    pub fn focused_field(&mut self) -> &mut InputField {
        &mut self.fields[self.focus]
    }

    fn parse_config(&self) -> Result<SimulatorConfig, String> {
        let mut config = SimulatorConfig::default();

        for field in &self.fields {
            let text = field.buffer.trim();
            match field.param {
                Param::VisitorsA => {
                    config.sample_size_a = text
                        .parse()
                        .map_err(|_| format!("{}: not a whole number", field.param.label()))?;
                }
                Param::VisitorsB => {
                    config.sample_size_b = text
                        .parse()
                        .map_err(|_| format!("{}: not a whole number", field.param.label()))?;
                }
                Param::RateA => {
                    config.true_rate_a = text
                        .parse()
                        .map_err(|_| format!("{}: not a number", field.param.label()))?;
                }
                Param::RateB => {
                    config.true_rate_b = text
                        .parse()
                        .map_err(|_| format!("{}: not a number", field.param.label()))?;
                }
                Param::Seed => {
                    config.seed = text
                        .parse()
                        .map_err(|_| format!("{}: not a whole number", field.param.label()))?;
                }
            }
        }

        Ok(config)
    }

    /// The run trigger: validate, simulate, keep either the report or the
    /// error for display. Bad input never clears the last good report.
    pub fn trigger_run(&mut self) {
        self.runs_triggered += 1;

        let config = match self.parse_config() {
            Ok(config) => config,
            Err(msg) => {
                self.error = Some(msg);
                return;
            }
        };

        match ExperimentSimulator::run(&config.to_experiment()) {
            Ok(run) => {
                self.report = Some(report::build(&run));
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.message());
            }
        }
    }
}
