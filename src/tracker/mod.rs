//! Tracker engine - owns the appliance catalog and drives every operation
//!
//! Each mutating operation updates the in-memory catalog, then rewrites the
//! store and appends an audit entry. The two files are not kept in lockstep:
//! a failed save is reported and the audit entry is still attempted.

use crate::audit::AuditLog;
use crate::core::{
    Appliance, ApplianceKind, ApplianceSummary, Bill, BillLine, Config, Error, Result,
};
use crate::store::CatalogStore;

/// The catalog plus its persistence and audit collaborators
pub struct EnergyTracker {
    appliances: Vec<Appliance>,
    rate_per_kwh: f64,
    currency_symbol: String,
    store: CatalogStore,
    audit: AuditLog,
}

impl EnergyTracker {
    /// Build a tracker from configuration, loading any previously persisted
    /// catalog. An unreadable store degrades to an empty catalog with a
    /// warning rather than an error.
    pub fn new(config: &Config) -> Self {
        let store = CatalogStore::new(&config.storage.store_path);
        let audit = AuditLog::new(&config.storage.log_path);

        let appliances = store.load().unwrap_or_else(|err| {
            log::warn!("Failed to load appliance catalog, starting empty: {}", err);
            Vec::new()
        });

        Self {
            appliances,
            rate_per_kwh: config.pricing.rate_per_kwh,
            currency_symbol: config.pricing.currency_symbol.clone(),
            store,
            audit,
        }
    }

    /// Currency symbol used for bill presentation
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Add a new appliance with zero recorded usage. The kind is resolved
    /// from free text; an unknown kind fails before anything is touched.
    /// Returns a snapshot of the stored appliance.
    pub fn add_appliance(&mut self, kind: &str, name: &str, power_watts: f64) -> Result<Appliance> {
        let kind = ApplianceKind::parse(kind).ok_or_else(|| Error::InvalidKind(kind.to_string()))?;

        let appliance = Appliance::new(kind, name, power_watts);
        self.appliances.push(appliance.clone());

        self.persist();
        self.audit.append(&format!(
            "Added appliance: {} | {} | {} W",
            appliance.kind.label(),
            appliance.name,
            appliance.power_watts
        ));

        Ok(appliance)
    }

    /// Record hours of use for a named appliance. The first appliance whose
    /// name matches exactly wins; the hours overwrite the previous value.
    pub fn record_usage(&mut self, name: &str, hours: f64) -> Result<()> {
        let appliance = self
            .appliances
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        appliance.usage_hours = hours;

        self.persist();
        self.audit
            .append(&format!("Recorded usage: {} -> {} hours", name, hours));

        Ok(())
    }

    /// Read-only snapshot of the catalog in insertion order, with energy
    /// computed from the current state.
    pub fn list_all(&self) -> Vec<ApplianceSummary> {
        self.appliances
            .iter()
            .map(|a| ApplianceSummary {
                name: a.name.clone(),
                power_watts: a.power_watts,
                usage_hours: a.usage_hours,
                energy_kwh: a.energy_kwh(),
            })
            .collect()
    }

    /// Itemize energy and cost for the whole catalog at the configured rate.
    /// Never fails; an empty catalog yields zero totals. Every call leaves a
    /// detailed audit entry.
    pub fn generate_bill(&self) -> Bill {
        let mut lines = Vec::with_capacity(self.appliances.len());
        let mut total_energy_kwh = 0.0;
        let mut total_cost = 0.0;

        for appliance in &self.appliances {
            let energy_kwh = appliance.energy_kwh();
            let cost = appliance.cost(self.rate_per_kwh);
            total_energy_kwh += energy_kwh;
            total_cost += cost;
            lines.push(BillLine {
                name: appliance.name.clone(),
                energy_kwh,
                cost,
            });
        }

        let bill = Bill {
            lines,
            total_energy_kwh,
            total_cost,
        };

        self.audit.append(&self.bill_audit_entry(&bill));
        bill
    }

    fn bill_audit_entry(&self, bill: &Bill) -> String {
        let mut entry = String::from("Generated bill details:");
        for line in &bill.lines {
            entry.push_str(&format!(
                "\n  {} : {:.2} kWh, Cost {}{:.2}",
                line.name, line.energy_kwh, self.currency_symbol, line.cost
            ));
        }
        entry.push_str(&format!(
            "\nTOTAL Energy: {:.2} kWh, TOTAL Cost {}{:.2}",
            bill.total_energy_kwh, self.currency_symbol, bill.total_cost
        ));
        entry
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.appliances) {
            log::error!("Failed to save appliance catalog: {}", err);
        }
    }
}
