//! Common types used across the tracker

/// Appliance category, a closed set where each variant carries its own
/// energy formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplianceKind {
    Light,
    Fan,
    AirConditioner,
    Fridge,
}

impl ApplianceKind {
    /// Canonical label, as written to the store and shown in reports.
    /// Note the air conditioner's canonical label is the short "AC".
    pub fn label(&self) -> &'static str {
        match self {
            ApplianceKind::Light => "Light",
            ApplianceKind::Fan => "Fan",
            ApplianceKind::AirConditioner => "AC",
            ApplianceKind::Fridge => "Fridge",
        }
    }

    /// Multiplier applied on top of the base watts * hours product
    pub fn energy_factor(&self) -> f64 {
        match self {
            ApplianceKind::Light | ApplianceKind::Fan => 1.0,
            ApplianceKind::AirConditioner => 1.2,
            ApplianceKind::Fridge => 0.6,
        }
    }

    /// Resolve a user-supplied kind string, case-insensitively.
    ///
    /// "AC" and "AirConditioner" both resolve to the air conditioner.
    /// No trimming or synonym handling beyond that.
    pub fn parse(input: &str) -> Option<Self> {
        if input.eq_ignore_ascii_case("Light") {
            Some(ApplianceKind::Light)
        } else if input.eq_ignore_ascii_case("Fan") {
            Some(ApplianceKind::Fan)
        } else if input.eq_ignore_ascii_case("AC") || input.eq_ignore_ascii_case("AirConditioner")
        {
            Some(ApplianceKind::AirConditioner)
        } else if input.eq_ignore_ascii_case("Fridge") {
            Some(ApplianceKind::Fridge)
        } else {
            None
        }
    }
}

/// One tracked device
#[derive(Debug, Clone, PartialEq)]
pub struct Appliance {
    /// Display name, also the lookup key (not unique; first match wins)
    pub name: String,
    /// Category deciding the energy formula
    pub kind: ApplianceKind,
    /// Rated power draw in watts
    pub power_watts: f64,
    /// Hours of the most recently recorded usage session (overwritten on
    /// each recording, never accumulated)
    pub usage_hours: f64,
}

impl Appliance {
    pub fn new(kind: ApplianceKind, name: &str, power_watts: f64) -> Self {
        Self {
            name: name.to_string(),
            kind,
            power_watts,
            usage_hours: 0.0,
        }
    }

    /// Builder-style usage hours, used when rehydrating from the store
    pub fn with_usage(mut self, hours: f64) -> Self {
        self.usage_hours = hours;
        self
    }

    /// Energy consumed by the last recorded session in kWh
    pub fn energy_kwh(&self) -> f64 {
        self.power_watts * self.usage_hours * self.kind.energy_factor() / 1000.0
    }

    /// Billing cost of the last recorded session
    pub fn cost(&self, rate_per_kwh: f64) -> f64 {
        self.energy_kwh() * rate_per_kwh
    }
}

/// One row of the read-only catalog listing
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceSummary {
    pub name: String,
    pub power_watts: f64,
    pub usage_hours: f64,
    pub energy_kwh: f64,
}

/// Energy and cost for a single appliance on a generated bill
#[derive(Debug, Clone, PartialEq)]
pub struct BillLine {
    pub name: String,
    pub energy_kwh: f64,
    pub cost: f64,
}

/// A generated bill: per-appliance lines in catalog order, plus totals
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub lines: Vec<BillLine>,
    pub total_energy_kwh: f64,
    pub total_cost: f64,
}
