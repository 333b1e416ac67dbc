//! Home Energy Tracker - Main entry point
//!
//! Interactive menu over the tracker engine: choices are read from stdin
//! and results rendered to stdout.

use std::io::{self, Write};

use anyhow::{Context, Result};

use home_energy_tracker::core::Config;
use home_energy_tracker::tracker::EnergyTracker;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load().unwrap_or_else(|err| {
        log::warn!("Failed to load config, using defaults: {}", err);
        Config::default()
    });
    let mut tracker = EnergyTracker::new(&config);

    loop {
        print_menu();

        let line = match read_line("Enter your choice: ")? {
            Some(line) => line,
            None => break, // stdin closed
        };
        let choice: i64 = match line.trim().parse() {
            Ok(choice) => choice,
            Err(_) => {
                println!("Invalid input. Try again.");
                continue;
            }
        };

        match choice {
            1 => add_appliance(&mut tracker)?,
            2 => record_usage(&mut tracker)?,
            3 => show_appliances(&tracker),
            4 => generate_bill(&tracker),
            5 => {
                println!("Exiting... Goodbye!");
                break;
            }
            _ => println!("Invalid choice! Try again."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!("\n========== Smart Home Energy Tracker ==========");
    println!("1. Add Appliance");
    println!("2. Record Usage");
    println!("3. Show All Appliances");
    println!("4. Generate Bill");
    println!("5. Exit");
}

fn add_appliance(tracker: &mut EnergyTracker) -> Result<()> {
    let kind = match read_line("\nEnter appliance type (Light/Fan/AC/Fridge): ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let name = match read_line("Enter appliance name: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let watts = match read_line("Enter power rating (in watts): ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let power_watts: f64 = match watts.trim().parse() {
        Ok(watts) => watts,
        Err(_) => {
            println!("Invalid watt input. Aborting add.");
            return Ok(());
        }
    };

    match tracker.add_appliance(kind.trim(), &name, power_watts) {
        Ok(_) => println!("Appliance added successfully!"),
        Err(err) => println!("{}", err),
    }
    Ok(())
}

fn record_usage(tracker: &mut EnergyTracker) -> Result<()> {
    let name = match read_line("\nEnter appliance name to record usage: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let hours = match read_line(&format!("Enter usage hours for {}: ", name))? {
        Some(line) => line,
        None => return Ok(()),
    };
    let hours: f64 = match hours.trim().parse() {
        Ok(hours) => hours,
        Err(_) => {
            println!("Invalid hours input. Aborting.");
            return Ok(());
        }
    };

    match tracker.record_usage(&name, hours) {
        Ok(()) => println!("Usage recorded!"),
        Err(err) => println!("{}", err),
    }
    Ok(())
}

fn show_appliances(tracker: &EnergyTracker) {
    println!("\n--- Appliance Summary ---");
    println!(
        "{:<20}{:<10}{:<10}{:<12}",
        "Name", "Watts", "Hours", "Energy(kWh)"
    );
    println!("------------------------------------------------");
    for row in tracker.list_all() {
        println!(
            "{:<20}{:<10}{:<10}{:<12.2}",
            row.name, row.power_watts, row.usage_hours, row.energy_kwh
        );
    }
}

fn generate_bill(tracker: &EnergyTracker) {
    let bill = tracker.generate_bill();
    let symbol = tracker.currency_symbol();

    println!("\n--- Energy Usage & Bill ---");
    for line in &bill.lines {
        println!(
            "{:<20} -> {:.2} kWh, Cost: {}{:.2}",
            line.name, line.energy_kwh, symbol, line.cost
        );
    }
    println!("\n---------------------------------");
    println!("Total Appliances: {}", bill.lines.len());
    println!("Total Energy: {:.2} kWh", bill.total_energy_kwh);
    println!("Estimated Bill: {}{:.2}", symbol, bill.total_cost);
}

/// Prompt for and read one line. Returns `None` once stdin is closed. The
/// trailing newline is stripped; interior whitespace is preserved so
/// appliance names may contain spaces.
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut buf = String::new();
    let bytes = io::stdin()
        .read_line(&mut buf)
        .context("Failed to read from standard input")?;
    if bytes == 0 {
        return Ok(None);
    }

    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(Some(buf))
}
